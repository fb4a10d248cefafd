use axum::Json;

use crate::models::{User, USERS};

/// Return the fixed user dataset in its declaration order.
pub async fn list_users() -> Json<Vec<User>> {
    Json(USERS.clone())
}
