use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn get_evaluation(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_evaluation_detail(evaluation_id).await {
        Ok(Some(detail)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(detail, "Détail de l'évaluation")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::EvaluationNotFound,
            format!("Évaluation {evaluation_id} non trouvée"),
        ))),
        Err(e) => {
            error!("Détail de l'évaluation échoué: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
