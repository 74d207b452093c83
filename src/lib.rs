pub mod config;
pub mod error;
pub mod handlers;
pub mod observability;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;
pub mod types;
