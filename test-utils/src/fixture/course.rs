//! Course fixtures for creating in-memory test data.

use entity::course;

/// Default test course code.
pub const DEFAULT_CODE: &str = "MAT101";

/// Default test course name.
pub const DEFAULT_NAME: &str = "Calculus I";

/// Default credit count.
pub const DEFAULT_CREDITS: i32 = 4;

/// Default schedule text.
pub const DEFAULT_SCHEDULE: &str = "Mon 8:00-10:00";

/// Creates a course entity model with default values.
///
/// # Default Values
/// - id: `1`
/// - code: `"MAT101"`
/// - name: `"Calculus I"`
/// - credits: `4`
/// - schedule: `"Mon 8:00-10:00"`
///
/// # Returns
/// - `course::Model` - In-memory course entity
pub fn entity() -> course::Model {
    entity_builder().build()
}

/// Creates a course entity builder for customization.
///
/// # Returns
/// - `CourseEntityBuilder` - Builder instance with default values
pub fn entity_builder() -> CourseEntityBuilder {
    CourseEntityBuilder::default()
}

/// Builder for creating customized course entity models.
pub struct CourseEntityBuilder {
    id: i32,
    code: String,
    name: String,
    credits: i32,
    schedule: String,
}

impl Default for CourseEntityBuilder {
    fn default() -> Self {
        Self {
            id: 1,
            code: DEFAULT_CODE.to_string(),
            name: DEFAULT_NAME.to_string(),
            credits: DEFAULT_CREDITS,
            schedule: DEFAULT_SCHEDULE.to_string(),
        }
    }
}

impl CourseEntityBuilder {
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn credits(mut self, credits: i32) -> Self {
        self.credits = credits;
        self
    }

    pub fn schedule(mut self, schedule: impl Into<String>) -> Self {
        self.schedule = schedule.into();
        self
    }

    /// Builds and returns the course entity model.
    pub fn build(self) -> course::Model {
        course::Model {
            id: self.id,
            code: self.code,
            name: self.name,
            credits: self.credits,
            schedule: self.schedule,
        }
    }
}
