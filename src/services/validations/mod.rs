pub mod batch;
pub mod list;
pub mod upsert;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::validations::requests::{UpsertValidationRequest, ValiderMultipleRequest};
use crate::storage::Storage;

pub struct ValidationService {
    storage: Option<Arc<dyn Storage>>,
}

impl ValidationService {
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

    pub async fn upsert_validation(
        &self,
        data: UpsertValidationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        upsert::upsert_validation(self, data, request).await
    }

    pub async fn valider_multiple(
        &self,
        data: ValiderMultipleRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        batch::valider_multiple(self, data, request).await
    }

    pub async fn list_validations_utilisateur(
        &self,
        utilisateur_id: i64,
        evaluation_id: Option<i64>,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_validations_utilisateur(self, utilisateur_id, evaluation_id, request).await
    }

    pub async fn list_validations_evaluation(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        list::list_validations_evaluation(self, evaluation_id, request).await
    }
}
