use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UtilisateurService;
use crate::errors::CompetencesError;
use crate::models::{ApiResponse, ErrorCode, utilisateurs::requests::UpdateUtilisateurRequest};
use crate::utils::naming::title_case;

pub async fn update_utilisateur(
    service: &UtilisateurService,
    utilisateur_id: i64,
    mut data: UpdateUtilisateurRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Aucun champ à mettre à jour",
        )));
    }

    if let Some(nom) = data.nom.take() {
        data.nom = Some(title_case(nom.trim()));
    }
    if let Some(prenom) = data.prenom.take() {
        data.prenom = Some(title_case(prenom.trim()));
    }
    if let Some(email) = data.email.take() {
        data.email = Some(email.trim().to_lowercase());
    }

    let storage = service.get_storage(request);

    match storage.update_utilisateur(utilisateur_id, data).await {
        Ok(Some(utilisateur)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(utilisateur, "Élève mis à jour")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UtilisateurNotFound,
            format!("Élève {utilisateur_id} non trouvé"),
        ))),
        Err(CompetencesError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UtilisateurEmailConflict, msg),
        )),
        Err(e) => {
            error!("Mise à jour de l'élève échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurUpdateFailed,
                e.to_string(),
            )))
        }
    }
}
