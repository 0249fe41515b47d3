pub mod api;
pub mod config;
pub mod docs;
pub mod gateway;
pub mod model;
pub mod routes;
pub mod store;
