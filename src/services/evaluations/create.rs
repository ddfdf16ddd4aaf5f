use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::errors::CompetencesError;
use crate::models::{ApiResponse, ErrorCode, evaluations::requests::CreateEvaluationRequest};

pub async fn create_evaluation(
    service: &EvaluationService,
    data: CreateEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.pole.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Le pôle est obligatoire",
        )));
    }
    if data.module.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Le module est obligatoire",
        )));
    }
    if data.items_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Au moins un item est requis",
        )));
    }

    let storage = service.get_storage(request);

    for item_id in &data.items_ids {
        match storage.item_existe(*item_id).await {
            Ok(true) => {}
            Ok(false) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ItemNotFound,
                    format!("Item {item_id} non trouvé"),
                )));
            }
            Err(e) => {
                error!("Vérification de l'item {item_id} échouée: {e}");
                return Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::InternalServerError,
                    e.to_string(),
                )));
            }
        }
    }

    match storage.create_evaluation(data).await {
        Ok(evaluation) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(evaluation, "Évaluation créée")))
        }
        Err(CompetencesError::Validation(msg)) => {
            Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)))
        }
        Err(e) => {
            error!("Création de l'évaluation échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EvaluationCreationFailed,
                e.to_string(),
            )))
        }
    }
}
