use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ValidationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_validations_utilisateur(
    service: &ValidationService,
    utilisateur_id: i64,
    evaluation_id: Option<i64>,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_utilisateur_by_id(utilisateur_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurNotFound,
                format!("Élève {utilisateur_id} non trouvé"),
            )));
        }
        Err(e) => {
            error!("Vérification de l'élève échouée: {e}");
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )));
        }
    }

    match storage
        .list_validations_utilisateur(utilisateur_id, evaluation_id)
        .await
    {
        Ok(validations) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(validations, "Validations de l'élève")))
        }
        Err(e) => {
            error!("Liste des validations échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn list_validations_evaluation(
    service: &ValidationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.evaluation_existe(evaluation_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotFound,
                format!("Évaluation {evaluation_id} non trouvée"),
            )));
        }
        Err(e) => {
            error!("Vérification de l'évaluation échouée: {e}");
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )));
        }
    }

    match storage.list_validations_evaluation(evaluation_id).await {
        Ok(validations) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            validations,
            "Validations de l'évaluation",
        ))),
        Err(e) => {
            error!("Liste des validations échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
