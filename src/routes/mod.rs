pub mod analytics;

pub mod auth;

pub mod faculties;

pub mod feedbacks;

pub mod students;

pub mod subjects;

pub use analytics::configure_analytics_routes;
pub use auth::configure_auth_routes;
pub use faculties::configure_faculty_routes;
pub use feedbacks::configure_feedback_routes;
pub use students::configure_student_routes;
pub use subjects::configure_subject_routes;
