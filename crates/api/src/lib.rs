//! HTTP API: configuration, routing, and request/response mapping for the product registry.

pub mod app;
pub mod config;
