use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn delete_evaluation(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.delete_evaluation(evaluation_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Évaluation supprimée"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            format!("Évaluation {evaluation_id} non trouvée"),
        ))),
        Err(e) => {
            error!("Suppression de l'évaluation échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::EvaluationDeleteFailed,
                e.to_string(),
            )))
        }
    }
}
