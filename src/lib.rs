// Shared components
pub mod auth;
pub mod config;
pub mod error;
pub mod telemetry;

// Remote service access
pub mod gateway;

// Domain
pub mod notification;
