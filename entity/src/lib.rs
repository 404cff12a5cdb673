//! `SeaORM` Entity definitions for the university registry.

pub mod prelude;

pub mod course;
pub mod enrollment;
pub mod student;
