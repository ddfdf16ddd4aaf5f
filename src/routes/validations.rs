use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::validations::requests::{
    UpsertValidationRequest, ValidationsUtilisateurParams, ValiderMultipleRequest,
};
use crate::services::ValidationService;
use crate::utils::SafeIDI64;

static VALIDATION_SERVICE: Lazy<ValidationService> = Lazy::new(ValidationService::new_lazy);

pub async fn upsert_validation(
    req: HttpRequest,
    data: web::Json<UpsertValidationRequest>,
) -> ActixResult<HttpResponse> {
    VALIDATION_SERVICE
        .upsert_validation(data.into_inner(), &req)
        .await
}

pub async fn valider_multiple(
    req: HttpRequest,
    data: web::Json<ValiderMultipleRequest>,
) -> ActixResult<HttpResponse> {
    VALIDATION_SERVICE
        .valider_multiple(data.into_inner(), &req)
        .await
}

pub async fn list_validations_utilisateur(
    req: HttpRequest,
    utilisateur_id: SafeIDI64,
    query: web::Query<ValidationsUtilisateurParams>,
) -> ActixResult<HttpResponse> {
    VALIDATION_SERVICE
        .list_validations_utilisateur(utilisateur_id.0, query.evaluation_id, &req)
        .await
}

pub async fn list_validations_evaluation(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    VALIDATION_SERVICE
        .list_validations_evaluation(evaluation_id.0, &req)
        .await
}

pub fn configure_validation_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/validations", web::post().to(upsert_validation))
        .route("/api/valider-multiple", web::post().to(valider_multiple))
        .route(
            "/api/utilisateurs/{id}/validations",
            web::get().to(list_validations_utilisateur),
        )
        .route(
            "/api/evaluations/{id}/validations",
            web::get().to(list_validations_evaluation),
        );
}
