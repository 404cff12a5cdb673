//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! business entities and operation parameters. Domain models are converted from entity
//! models at the repository boundary and transformed to DTOs at the controller boundary.
//! Parameter types are the only way field values enter the data layer, and they run the
//! field validators when they are built.

pub mod course;
pub mod enrollment;
pub mod student;
