use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::UtilisateurService;
use crate::errors::CompetencesError;
use crate::models::{ApiResponse, ErrorCode, utilisateurs::requests::CreateUtilisateurRequest};
use crate::utils::naming::{derive_email, title_case};

pub async fn create_utilisateur(
    service: &UtilisateurService,
    mut data: CreateUtilisateurRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.nom.trim().is_empty() || data.prenom.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Nom et prénom sont obligatoires",
        )));
    }

    data.nom = title_case(data.nom.trim());
    data.prenom = title_case(data.prenom.trim());
    data.email = Some(match data.email.filter(|e| !e.trim().is_empty()) {
        Some(email) => email.trim().to_lowercase(),
        None => derive_email(&data.prenom, &data.nom),
    });

    let storage = service.get_storage(request);

    // doublon détecté avant insertion pour un message propre; la contrainte
    // d'unicité reste le filet de sécurité
    if let Some(email) = &data.email {
        match storage.email_existe(email).await {
            Ok(true) => {
                return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                    ErrorCode::UtilisateurEmailConflict,
                    format!("L'email {email} existe déjà"),
                )));
            }
            Ok(false) => {}
            Err(e) => {
                error!("Vérification email échouée: {e}");
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    e.to_string(),
                )));
            }
        }
    }

    match storage.create_utilisateur(data).await {
        Ok(utilisateur) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(utilisateur, "Élève créé")))
        }
        Err(CompetencesError::Conflict(msg)) => Ok(HttpResponse::Conflict().json(
            ApiResponse::error_empty(ErrorCode::UtilisateurEmailConflict, msg),
        )),
        Err(e) => {
            error!("Création de l'élève échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurCreationFailed,
                e.to_string(),
            )))
        }
    }
}
