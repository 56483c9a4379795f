//! 预导入模块，方便使用

pub use super::admins::{ActiveModel as AdminActiveModel, Entity as Admins, Model as AdminModel};
pub use super::completed_subjects::{
    ActiveModel as CompletedSubjectActiveModel, Entity as CompletedSubjects,
    Model as CompletedSubjectModel,
};
pub use super::faculties::{
    ActiveModel as FacultyActiveModel, Entity as Faculties, Model as FacultyModel,
};
pub use super::feedbacks::{
    ActiveModel as FeedbackActiveModel, Entity as Feedbacks, Model as FeedbackModel,
};
pub use super::students::{
    ActiveModel as StudentActiveModel, Entity as Students, Model as StudentModel,
};
pub use super::subjects::{
    ActiveModel as SubjectActiveModel, Entity as Subjects, Model as SubjectModel,
};
