use serde::Serialize;

use super::Catalog;

/// `user_id` is a plain number; nothing resolves it against the user service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Order {
    pub order_id: u32,
    pub user_id: u32,
    pub item: &'static str,
}

pub static ORDERS: [Order; 3] = [
    Order { order_id: 101, user_id: 1, item: "Laptop" },
    Order { order_id: 102, user_id: 2, item: "Headphones" },
    Order { order_id: 103, user_id: 3, item: "Smartwatch" },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Orders;

impl Catalog for Orders {
    type Record = Order;

    const SERVICE: &'static str = "Order Service";
    const COLLECTION: &'static str = "orders";

    fn records() -> &'static [Order] {
        &ORDERS
    }
}
