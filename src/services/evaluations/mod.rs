pub mod attributions;
pub mod create;
pub mod delete;
pub mod detail;
pub mod items;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::evaluations::requests::{
    AjouterItemsRequest, AttribuerEvaluationRequest, CreateEvaluationRequest,
    RetirerAttributionRequest, RetirerItemRequest, UpdateEvaluationRequest,
};
use crate::storage::Storage;

pub struct EvaluationService {
    storage: Option<Arc<dyn Storage>>,
}

impl EvaluationService {
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

    pub async fn list_evaluations(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_evaluations(self, request).await
    }

    pub async fn create_evaluation(
        &self,
        data: CreateEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_evaluation(self, data, request).await
    }

    pub async fn get_evaluation(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        detail::get_evaluation(self, evaluation_id, request).await
    }

    pub async fn update_evaluation(
        &self,
        data: UpdateEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_evaluation(self, data, request).await
    }

    pub async fn delete_evaluation(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_evaluation(self, evaluation_id, request).await
    }

    pub async fn attribuer_evaluation(
        &self,
        data: AttribuerEvaluationRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attributions::attribuer_evaluation(self, data, request).await
    }

    pub async fn retirer_attribution(
        &self,
        data: RetirerAttributionRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attributions::retirer_attribution(self, data, request).await
    }

    pub async fn list_attributions(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attributions::list_attributions(self, evaluation_id, request).await
    }

    pub async fn list_utilisateurs_concernes(
        &self,
        evaluation_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        attributions::list_utilisateurs_concernes(self, evaluation_id, request).await
    }

    pub async fn ajouter_items(
        &self,
        data: AjouterItemsRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        items::ajouter_items(self, data, request).await
    }

    pub async fn retirer_item(
        &self,
        data: RetirerItemRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        items::retirer_item(self, data, request).await
    }
}
