use once_cell::sync::Lazy;
use serde::Serialize;

/// `user_id` is a loose reference to a user record owned by another service;
/// it is not validated here.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    pub item: String,
    pub user_id: u64,
}

/// Fixed dataset served by `GET /orders`. Initialized once, never mutated.
pub static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order {
            order_id: "O101".to_string(),
            item: "Laptop".to_string(),
            user_id: 1,
        },
        Order {
            order_id: "O102".to_string(),
            item: "Monitor".to_string(),
            user_id: 2,
        },
    ]
});
