use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ValidationService;
use crate::errors::CompetencesError;
use crate::models::{
    ApiResponse, ErrorCode,
    validations::{requests::UpsertValidationRequest, responses::UpsertValidationResponse},
};

pub async fn upsert_validation(
    service: &ValidationService,
    data: UpsertValidationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_utilisateur_by_id(data.utilisateur_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurNotFound,
                format!("Élève {} non trouvé", data.utilisateur_id),
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

    match storage.evaluation_existe(data.evaluation_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotFound,
                format!("Évaluation {} non trouvée", data.evaluation_id),
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

    match storage.item_existe(data.item_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ItemNotFound,
                format!("Item {} non trouvé", data.item_id),
            )));
        }
        Err(e) => {
            error!("Vérification de l'item échouée: {e}");
            return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )));
        }
    }

    match storage.upsert_validation(data).await {
        Ok((validation, created)) => {
            let response = UpsertValidationResponse { validation, created };
            let message = if created {
                "Validation créée"
            } else {
                "Validation mise à jour"
            };
            if created {
                Ok(HttpResponse::Created().json(ApiResponse::success(response, message)))
            } else {
                Ok(HttpResponse::Ok().json(ApiResponse::success(response, message)))
            }
        }
        Err(CompetencesError::Validation(msg)) => {
            Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::NiveauInvalid, msg)))
        }
        Err(e) => {
            error!("Validation échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::ValidationFailed,
                e.to_string(),
            )))
        }
    }
}
