pub mod get;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::storage::Storage;

pub struct ProfilService {
    storage: Option<Arc<dyn Storage>>,
}

impl ProfilService {
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

    pub async fn get_profil(
        &self,
        utilisateur_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        get::get_profil(self, utilisateur_id, request).await
    }
}
