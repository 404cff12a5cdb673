//! HTTP request handlers.
//!
//! Each handler extracts its inputs, converts DTOs into validated parameters, calls the
//! matching service and converts the domain result back into a DTO. Errors bubble up as
//! `AppError` and are turned into JSON error responses.

pub mod course;
pub mod enrollment;
pub mod root;
pub mod student;

#[cfg(test)]
mod test;
