use crate::server::{
    data::student::StudentRepository,
    model::student::{CreateStudentParams, UpdateStudentParams},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_national_id;
mod get_all;
mod get_by_course;
mod update;
