//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Business Rules**: Natural key uniqueness, duplicate enrollment and schedule conflicts
//! - **Orchestration**: Coordinating multiple repository calls per operation
//! - **Domain Models**: Working with domain models rather than DTOs or entity models
//! - **Transaction Management**: Every mutating call runs inside one database transaction
//!   that is committed on success and rolled back when dropped on an error path

pub mod course;
pub mod enrollment;
pub mod student;

#[cfg(test)]
mod test;
