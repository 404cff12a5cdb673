//! Factory methods for creating test data.
//!
//! This module provides factory methods for inserting test entities with sensible defaults,
//! reducing boilerplate in tests. Factories write straight through the entity layer and do
//! not run field validation, so tests can seed the database with any shape of data.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let student = factory::create_student(&db).await?;
//!     let course = factory::create_course(&db).await?;
//!
//!     // Create with all dependencies
//!     let (student, course, enrollment) =
//!         factory::helpers::create_enrollment_with_dependencies(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let course = factory::course::CourseFactory::new(&db)
//!     .code("FIS301")
//!     .schedule("Tue 14:00-16:00")
//!     .build()
//!     .await?;
//! ```

pub mod course;
pub mod enrollment;
pub mod helpers;
pub mod student;

// Re-export commonly used factory functions for concise usage
pub use course::create_course;
pub use enrollment::create_enrollment;
pub use student::create_student;
