//! # HR Directory Library
//!
//! Employee, job and department records kept in a relational database,
//! the reports computed over them and the HTTP layer that serves both.

pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod schema;
pub mod server;
pub mod store;
pub mod telemetry;
