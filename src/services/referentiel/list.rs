use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ReferentielService;
use crate::models::{ApiResponse, ErrorCode};

pub async fn list_competences(
    service: &ReferentielService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_competences().await {
        Ok(competences) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(competences, "Référentiel")))
        }
        Err(e) => {
            error!("Liste des compétences échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn list_items(
    service: &ReferentielService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_items().await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(items, "Items"))),
        Err(e) => {
            error!("Liste des items échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
