use once_cell::sync::Lazy;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct User {
    pub id: u64,
    pub name: String,
    pub role: String,
}

/// Fixed dataset served by `GET /users`. Initialized once, never mutated.
pub static USERS: Lazy<Vec<User>> = Lazy::new(|| {
    vec![
        User {
            id: 1,
            name: "Alice".to_string(),
            role: "Admin".to_string(),
        },
        User {
            id: 2,
            name: "Bob".to_string(),
            role: "User".to_string(),
        },
    ]
});
