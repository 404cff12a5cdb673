use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::course::CourseDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentDto {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct StudentWithCoursesDto {
    pub id: i32,
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i32,
    pub courses: Vec<CourseDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateStudentDto {
    pub national_id: String,
    pub name: String,
    pub email: String,
    pub semester: i32,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateStudentDto {
    pub national_id: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub semester: Option<i32>,
}
