pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ReferentielService {
    storage: Option<Arc<dyn Storage>>,
}

impl ReferentielService {
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

    pub async fn list_competences(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_competences(self, request).await
    }

    pub async fn list_items(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_items(self, request).await
    }
}
