pub mod analytics;
pub mod auth;
pub mod faculties;
pub mod feedbacks;
pub mod students;
pub mod subjects;

pub use analytics::AnalyticsService;
pub use auth::AuthService;
pub use faculties::FacultyService;
pub use feedbacks::FeedbackService;
pub use students::StudentService;
pub use subjects::SubjectService;
