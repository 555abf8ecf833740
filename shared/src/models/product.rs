//! Product model
//!
//! A sellable dish and its bill of materials. Cost is always derived from
//! the recipe by the engine, never stored on the product.

use super::Unit;
use serde::{Deserialize, Serialize};

/// One line of a product's bill of materials.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecipeItem {
    /// Ingredient reference (String ID)
    pub ingredient_id: String,
    /// Amount consumed per single unit of the product sold.
    pub quantity_used: f64,
    /// Must share the physical dimension of the ingredient's purchase
    /// unit; a cross-dimension reference is a configuration error caught
    /// at calculation time.
    pub unit_used: Unit,
}

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: String,
    /// Bill of materials; order only matters for display.
    #[serde(default)]
    pub recipe: Vec<RecipeItem>,
    /// Price currently charged on the menu.
    pub current_price: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recipe_defaults_to_empty() {
        let json = r#"{"id": "p1", "name": "Water", "current_price": 1.5}"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.recipe.is_empty());
    }

    #[test]
    fn test_recipe_item_round_trip() {
        let line = RecipeItem {
            ingredient_id: "flour".to_string(),
            quantity_used: 200.0,
            unit_used: Unit::G,
        };
        let json = serde_json::to_string(&line).unwrap();
        let back: RecipeItem = serde_json::from_str(&json).unwrap();
        assert_eq!(back.ingredient_id, "flour");
        assert_eq!(back.unit_used, Unit::G);
    }
}
