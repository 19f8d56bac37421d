pub mod clients;
pub mod config;
pub mod error;
pub mod form;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
