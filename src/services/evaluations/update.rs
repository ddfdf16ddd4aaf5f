use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode, evaluations::requests::UpdateEvaluationRequest};

pub async fn update_evaluation(
    service: &EvaluationService,
    data: UpdateEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.module.is_none() && data.contexte.is_none() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Aucun champ à mettre à jour",
        )));
    }

    let evaluation_id = data.evaluation_id;
    let storage = service.get_storage(request);

    match storage.update_evaluation(data).await {
        Ok(Some(evaluation)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(evaluation, "Évaluation mise à jour")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            format!("Évaluation {evaluation_id} non trouvée"),
        ))),
        Err(e) => {
            error!("Mise à jour de l'évaluation échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EvaluationUpdateFailed,
                e.to_string(),
            )))
        }
    }
}
