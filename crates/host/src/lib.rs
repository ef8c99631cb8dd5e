// portico-host library
// Catalogue host serving the landing page over axum

// Configuration
pub mod config;

// Registered application catalogue
pub mod registry;

// HTTP surface: page shell, catalogue, REST API
pub mod api;

// Embedded page assets (single-binary distribution)
pub mod embedded;
