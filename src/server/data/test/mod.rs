mod course;
mod enrollment;
mod student;
