//! Student fixtures for creating in-memory test data.

use entity::student;

/// Default test national ID.
pub const DEFAULT_NATIONAL_ID: &str = "1234567890";

/// Default test student name.
pub const DEFAULT_NAME: &str = "Ana Torres";

/// Default test email.
pub const DEFAULT_EMAIL: &str = "ana@uni.edu";

/// Default semester.
pub const DEFAULT_SEMESTER: i32 = 3;

/// Creates a student entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - national_id: `"1234567890"`
/// - name: `"Ana Torres"`
/// - email: `"ana@uni.edu"`
/// - semester: `3`
///
/// # Returns
/// - `student::Model` - In-memory student entity
pub fn entity() -> student::Model {
    entity_builder().build()
}

/// Creates a student entity builder for customization.
///
/// # Returns
/// - `StudentEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> StudentEntityBuilder {
    StudentEntityBuilder::default()
}

/// Builder for creating customized student entity models.
pub struct StudentEntityBuilder {
    id: i32,
    national_id: String,
    name: String,
    email: String,
    semester: i32,
}

impl Default for StudentEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            national_id: DEFAULT_NATIONAL_ID.to_string(),
            name: DEFAULT_NAME.to_string(),
            email: DEFAULT_EMAIL.to_string(),
            semester: DEFAULT_SEMESTER,
        }
    }
}

impl StudentEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn national_id(mut self, national_id: impl Into<String>) -> Self {
        self.national_id = national_id.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    pub fn semester(mut self, semester: i32) -> Self {
        self.semester = semester;
        self
    }

    /// Builds and returns the student entity model.
    pub fn build(self) -> student::Model {
        student::Model {
            id: self.id,
            national_id: self.national_id,
            name: self.name,
            email: self.email,
            semester: self.semester,
        }
    }
}
