use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::student::StudentDto;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub schedule: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CourseWithStudentsDto {
    pub id: i32,
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub schedule: String,
    pub students: Vec<StudentDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateCourseDto {
    pub code: String,
    pub name: String,
    pub credits: i32,
    pub schedule: String,
}

/// Partial update; omitted fields keep their stored value.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateCourseDto {
    pub code: Option<String>,
    pub name: Option<String>,
    pub credits: Option<i32>,
    pub schedule: Option<String>,
}
