pub mod configuration;
pub mod content_client;
pub mod domain;
pub mod in_flight;
pub mod routes;
pub mod startup;
pub mod submission;
pub mod telemetry;
mod utils;
