//! # TaskDeck Core
//!
//! Shared domain types for the TaskDeck to-do service: request/response
//! models, input validation and identity normalization, and the domain
//! error type used across the API and database crates.

pub mod errors;
pub mod models;
