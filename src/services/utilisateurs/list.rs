use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UtilisateurService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_utilisateurs(
    service: &UtilisateurService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_utilisateurs().await {
        Ok(utilisateurs) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(utilisateurs, "Liste des élèves")))
        }
        Err(e) => {
            error!("Liste des élèves échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
