use serde::Serialize;

use crate::models::common::pagination::PaginationInfo;
use crate::models::subjects::entities::Subject;

#[derive(Debug, Serialize)]
pub struct SubjectListResponse {
    pub items: Vec<Subject>,
    pub pagination: PaginationInfo,
}
