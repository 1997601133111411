use serde::Serialize;

use super::Catalog;

/// A stocked item. Stock counts are fixed sample values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InventoryItem {
    pub item_id: u32,
    pub name: &'static str,
    pub stock: u32,
}

pub static INVENTORY: [InventoryItem; 3] = [
    InventoryItem { item_id: 1, name: "Laptop", stock: 25 },
    InventoryItem { item_id: 2, name: "Headphones", stock: 60 },
    InventoryItem { item_id: 3, name: "Smartwatch", stock: 40 },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Inventory;

impl Catalog for Inventory {
    type Record = InventoryItem;

    const SERVICE: &'static str = "Inventory Service";
    const COLLECTION: &'static str = "inventory";

    fn records() -> &'static [InventoryItem] {
        &INVENTORY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::StatusPayload;
    use serde_json::json;

    #[test]
    fn item_serializes_with_snake_case_fields() {
        let value = serde_json::to_value(INVENTORY[0]).unwrap();
        assert_eq!(value, json!({ "item_id": 1, "name": "Laptop", "stock": 25 }));
    }

    #[test]
    fn records_keep_declared_order() {
        let names: Vec<&str> = Inventory::records().iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Laptop", "Headphones", "Smartwatch"]);
    }

    #[test]
    fn status_payload_matches_published_document() {
        let value = serde_json::to_value(StatusPayload::of::<Inventory>()).unwrap();
        assert_eq!(
            value,
            json!({
                "service": "Inventory Service",
                "message": "Inventory Service is running successfully!",
                "inventory": [
                    { "item_id": 1, "name": "Laptop", "stock": 25 },
                    { "item_id": 2, "name": "Headphones", "stock": 60 },
                    { "item_id": 3, "name": "Smartwatch", "stock": 40 }
                ]
            })
        );
    }
}
