use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::ingredient::ParsedIngredient;

/// One shopping-list entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub id: Uuid,
    pub count: Option<f64>,
    pub unit: String,
    pub ingredient: String,
}

/// Ordered shopping list collected from viewed recipes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShoppingList {
    items: Vec<ShoppingItem>,
}

impl ShoppingList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry and return its id
    pub fn add_item(
        &mut self,
        count: Option<f64>,
        unit: impl Into<String>,
        ingredient: impl Into<String>,
    ) -> Uuid {
        let id = Uuid::new_v4();
        self.items.push(ShoppingItem {
            id,
            count,
            unit: unit.into(),
            ingredient: ingredient.into(),
        });
        id
    }

    /// Append a parsed ingredient as a list entry
    pub fn add_ingredient(&mut self, ingredient: &ParsedIngredient) -> Uuid {
        self.add_item(
            ingredient.count,
            ingredient.unit.clone(),
            ingredient.ingredient.clone(),
        )
    }

    /// Remove the entry with the given id; unknown ids are a no-op
    pub fn delete_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }

    /// Overwrite the quantity of an entry
    pub fn update_count(&mut self, id: Uuid, count: f64) {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == id) {
            item.count = Some(count);
        }
    }

    pub fn items(&self) -> &[ShoppingItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_and_delete() {
        let mut list = ShoppingList::new();

        let salt = list.add_item(None, "", "salt");
        let flour = list.add_item(Some(2.0), "cup", "flour");
        assert_eq!(list.len(), 2);

        list.delete_item(salt);

        assert_eq!(list.len(), 1);
        assert_eq!(list.items()[0].id, flour);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut list = ShoppingList::new();
        list.add_item(Some(1.0), "tsp", "vanilla");

        list.delete_item(Uuid::new_v4());

        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_update_count() {
        let mut list = ShoppingList::new();
        let id = list.add_item(Some(2.0), "cup", "flour");

        list.update_count(id, 3.5);

        assert_eq!(list.items()[0].count, Some(3.5));
    }

    #[test]
    fn test_insert_order_preserved() {
        let mut list = ShoppingList::new();
        list.add_item(Some(1.0), "cup", "first");
        list.add_item(None, "", "second");
        list.add_item(Some(2.0), "tbsp", "third");

        let names: Vec<&str> = list.items().iter().map(|i| i.ingredient.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_add_ingredient_copies_fields() {
        let mut list = ShoppingList::new();
        let parsed = ParsedIngredient {
            count: Some(0.75),
            unit: "tsp".to_string(),
            ingredient: "vanilla".to_string(),
        };

        list.add_ingredient(&parsed);

        assert_eq!(list.items()[0].count, Some(0.75));
        assert_eq!(list.items()[0].unit, "tsp");
        assert_eq!(list.items()[0].ingredient, "vanilla");
    }
}
