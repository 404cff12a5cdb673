//! Test fixtures providing reusable test data without database insertion.
//!
//! This module contains fixture functions that create in-memory entity models for use in
//! unit tests and as default values for factories. Unlike factories, fixtures do NOT insert
//! data into the database.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture;
//!
//! // Create in-memory entity model (no DB)
//! let student = fixture::student::entity();
//!
//! // Create with custom fields
//! let senior = fixture::student::entity_builder()
//!     .semester(10)
//!     .build();
//! ```

pub mod course;
pub mod enrollment;
pub mod student;

pub use course::{entity as course_entity, entity_builder as course_entity_builder};
pub use enrollment::entity as enrollment_entity;
pub use student::{entity as student_entity, entity_builder as student_entity_builder};
