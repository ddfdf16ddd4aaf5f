pub mod create;
pub mod delete;
pub mod import;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::utilisateurs::requests::{CreateUtilisateurRequest, UpdateUtilisateurRequest};
use crate::storage::Storage;

pub struct UtilisateurService {
    storage: Option<Arc<dyn Storage>>,
}

impl UtilisateurService {
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

    pub async fn list_utilisateurs(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_utilisateurs(self, request).await
    }

    pub async fn create_utilisateur(
        &self,
        data: CreateUtilisateurRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_utilisateur(self, data, request).await
    }

    pub async fn update_utilisateur(
        &self,
        utilisateur_id: i64,
        data: UpdateUtilisateurRequest,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_utilisateur(self, utilisateur_id, data, request).await
    }

    pub async fn delete_utilisateur(
        &self,
        utilisateur_id: i64,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        delete::delete_utilisateur(self, utilisateur_id, request).await
    }

    pub async fn import_excel(
        &self,
        payload: actix_multipart::Multipart,
        request: &HttpRequest,
    ) -> ActixResult<HttpResponse> {
        import::import_excel(self, payload, request).await
    }
}
