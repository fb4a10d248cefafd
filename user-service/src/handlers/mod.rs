pub mod health;
pub mod users;

pub use health::{health_check, index};
pub use users::list_users;
