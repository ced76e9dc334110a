// Core infrastructure modules
pub mod core;

// Configuration and HTTP surface
pub mod config;
pub mod server;
