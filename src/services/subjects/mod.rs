pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::subjects::requests::{
    CreateSubjectRequest, SubjectListQuery, UpdateSubjectRequest,
};
use crate::storage::Storage;

pub struct SubjectService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubjectService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 创建课程
    pub async fn create_subject(
        &self,
        request: &HttpRequest,
        subject_data: CreateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_subject(self, request, subject_data).await
    }

    // 获取课程详情
    pub async fn get_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_subject(self, request, subject_id).await
    }

    // 获取课程列表
    pub async fn list_subjects(
        &self,
        request: &HttpRequest,
        query: SubjectListQuery,
    ) -> ActixResult<HttpResponse> {
        list::list_subjects(self, request, query).await
    }

    // 更新课程信息
    pub async fn update_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
        update_data: UpdateSubjectRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_subject(self, request, subject_id, update_data).await
    }

    // 删除课程
    pub async fn delete_subject(
        &self,
        request: &HttpRequest,
        subject_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_subject(self, request, subject_id).await
    }
}
