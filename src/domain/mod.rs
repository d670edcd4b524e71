//! Domain layer - Pure business abstractions
//!
//! This layer contains NO web framework dependencies (no Axum).
//! Only trait definitions and domain error types.

pub mod errors;
pub mod generator;

pub use errors::DomainError;
pub use generator::InterpretationGenerator;
