//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations (CRUD) for each
//! domain in the application. Repositories use SeaORM entity models internally and return
//! domain models to maintain separation between the data layer and business logic layer.
//!
//! Repositories are generic over `ConnectionTrait`, so a service can run several of them
//! against the same `DatabaseTransaction` and commit their writes together.

pub mod course;
pub mod enrollment;
pub mod student;

#[cfg(test)]
mod test;
