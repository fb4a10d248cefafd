pub mod health;
pub mod orders;

pub use health::{health_check, index};
pub use orders::list_orders;
