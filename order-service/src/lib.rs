pub mod config;
pub mod handlers;
pub mod models;
pub mod observability;
pub mod startup;
