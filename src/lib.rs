//! Core of the HR administration dashboard: the REST gateway to the HR
//! backend, the page controllers that sit on top of it, and an in-memory
//! development backend serving the same API.

pub mod api;
pub mod auth;
pub mod config;
pub mod controller;
pub mod docs;
pub mod gateway;
pub mod model;
pub mod models;
pub mod routes;
pub mod server;
pub mod store;
