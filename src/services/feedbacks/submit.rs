use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::FeedbackService;
use crate::middlewares::RequireJWT;
use crate::models::auth::entities::AuthIdentity;
use crate::models::feedbacks::requests::{NewFeedback, SubmitFeedbackRequest};
use crate::models::feedbacks::responses::SubmitFeedbackResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::utils::validate::validate_comment;

pub async fn submit_feedback(
    service: &FeedbackService,
    request: &HttpRequest,
    feedback_data: SubmitFeedbackRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let student = match RequireJWT::extract_identity(request) {
        Some(AuthIdentity::Student(student)) => student,
        _ => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Authentication required",
            )));
        }
    };

    // 逐项校验评分取值
    let ratings = feedback_data.ratings();
    if let Err(key) = ratings.validate() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::RatingInvalid,
            format!("Rating {key} must be between 1 and 5"),
        )));
    }

    if let Err(message) = validate_comment(feedback_data.comment.as_deref()) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::CommentTooLong, message)));
    }

    // 课程必须存在，教师ID取提交时刻的快照
    let subject = match storage.get_subject_by_id(feedback_data.subject_id).await {
        Ok(Some(subject)) => subject,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubjectNotFound,
                "Subject not found",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Failed to get subject information: {e}"),
                )),
            );
        }
    };

    // 先做一次快速查重，并发下的兜底由唯一索引保证
    match storage
        .get_feedback_by_student_and_subject(student.id, subject.id)
        .await
    {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FeedbackAlreadySubmitted,
                "Feedback for this subject has already been submitted",
            )));
        }
        Ok(None) => {}
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    }

    let new_feedback = NewFeedback {
        student_id: student.id,
        subject_id: subject.id,
        faculty_id: subject.faculty_id,
        ratings,
        average_rating: ratings.average(),
        comment: feedback_data.comment,
    };

    let feedback = match storage.insert_feedback(new_feedback).await {
        Ok(feedback) => feedback,
        Err(e) if e.is_unique_violation() => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FeedbackAlreadySubmitted,
                "Feedback for this subject has already been submitted",
            )));
        }
        Err(e) => {
            return Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::FeedbackSubmitFailed,
                    format!("Feedback submission failed: {e}"),
                )),
            );
        }
    };

    // 已完成集合的写入是幂等的，失败不回滚反馈本身
    if let Err(e) = storage.add_completed_subject(student.id, subject.id).await {
        return Ok(
            HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::FeedbackSubmitFailed,
                format!("Feedback submission failed: {e}"),
            )),
        );
    }

    info!(
        "Student {} submitted feedback for subject {} (average {:.2})",
        student.id, subject.id, feedback.average_rating
    );

    Ok(HttpResponse::Created().json(ApiResponse::success(
        SubmitFeedbackResponse { feedback },
        "Feedback submitted successfully",
    )))
}
