//! Data transfer objects exchanged over the HTTP API.
//!
//! These types define the JSON shapes of requests and responses. Server-side domain
//! models convert into them at the controller boundary.

pub mod api;
pub mod course;
pub mod enrollment;
pub mod student;
