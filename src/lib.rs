pub mod app;
pub mod config;
pub mod errors;
pub mod graphql;
pub mod state;
pub mod users;
