use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_evaluations(
    service: &EvaluationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_evaluations().await {
        Ok(evaluations) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(evaluations, "Liste des évaluations")))
        }
        Err(e) => {
            error!("Liste des évaluations échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
