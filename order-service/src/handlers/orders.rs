use axum::Json;

use crate::models::{Order, ORDERS};

/// Return the fixed order dataset in its declaration order.
pub async fn list_orders() -> Json<Vec<Order>> {
    Json(ORDERS.clone())
}
