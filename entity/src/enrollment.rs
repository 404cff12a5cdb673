use sea_orm::{
    entity::prelude::*,
    sea_query::{Index, IndexCreateStatement},
};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_id: i32,
    pub course_id: i32,
    pub enrolled_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentId",
        to = "super::student::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseId",
        to = "super::course::Column::Id",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Name of the unique index over `(student_id, course_id)`.
pub const UNIQUE_PAIR_INDEX: &str = "idx_enrollment_student_course";

/// Builds the unique index that keeps a student from holding two enrollments
/// in the same course.
///
/// Column-level `unique` attributes cannot express a composite key, so the index
/// is created separately from the table, both by the migrator and by test setups
/// that build their schema from these entities.
pub fn unique_pair_index() -> IndexCreateStatement {
    Index::create()
        .name(UNIQUE_PAIR_INDEX)
        .table(Entity)
        .col(Column::StudentId)
        .col(Column::CourseId)
        .unique()
        .if_not_exists()
        .to_owned()
}
