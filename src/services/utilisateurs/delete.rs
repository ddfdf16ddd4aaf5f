use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UtilisateurService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_utilisateur(
    service: &UtilisateurService,
    utilisateur_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_utilisateur(utilisateur_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Élève supprimé"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UtilisateurNotFound,
            format!("Élève {utilisateur_id} non trouvé"),
        ))),
        Err(e) => {
            error!("Suppression de l'élève échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurDeleteFailed,
                e.to_string(),
            )))
        }
    }
}
