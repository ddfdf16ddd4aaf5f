use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ProfilService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_profil(
    service: &ProfilService,
    utilisateur_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_profil_utilisateur(utilisateur_id).await {
        Ok(Some(profil)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(profil, "Profil de compétences")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UtilisateurNotFound,
            format!("Élève {utilisateur_id} non trouvé"),
        ))),
        Err(e) => {
            error!("Profil de l'élève échoué: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
