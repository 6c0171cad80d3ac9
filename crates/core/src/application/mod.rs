// Application Services

pub mod course;

pub use course::CourseService;
