use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::evaluations::requests::{
    AjouterItemsRequest, AttribuerEvaluationRequest, CreateEvaluationRequest,
    RetirerAttributionRequest, RetirerItemRequest, UpdateEvaluationRequest,
};
use crate::services::EvaluationService;
use crate::utils::SafeIDI64;

static EVALUATION_SERVICE: Lazy<EvaluationService> = Lazy::new(EvaluationService::new_lazy);

pub async fn list_evaluations(req: HttpRequest) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.list_evaluations(&req).await
}

pub async fn create_evaluation(
    req: HttpRequest,
    data: web::Json<CreateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .create_evaluation(data.into_inner(), &req)
        .await
}

pub async fn get_evaluation(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.get_evaluation(evaluation_id.0, &req).await
}

pub async fn delete_evaluation(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .delete_evaluation(evaluation_id.0, &req)
        .await
}

pub async fn modifier_evaluation(
    req: HttpRequest,
    data: web::Json<UpdateEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .update_evaluation(data.into_inner(), &req)
        .await
}

pub async fn attribuer_evaluation(
    req: HttpRequest,
    data: web::Json<AttribuerEvaluationRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .attribuer_evaluation(data.into_inner(), &req)
        .await
}

pub async fn retirer_attribution(
    req: HttpRequest,
    data: web::Json<RetirerAttributionRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .retirer_attribution(data.into_inner(), &req)
        .await
}

pub async fn list_attributions(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_attributions(evaluation_id.0, &req)
        .await
}

pub async fn list_utilisateurs_concernes(
    req: HttpRequest,
    evaluation_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE
        .list_utilisateurs_concernes(evaluation_id.0, &req)
        .await
}

pub async fn ajouter_items(
    req: HttpRequest,
    data: web::Json<AjouterItemsRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.ajouter_items(data.into_inner(), &req).await
}

pub async fn retirer_item(
    req: HttpRequest,
    data: web::Json<RetirerItemRequest>,
) -> ActixResult<HttpResponse> {
    EVALUATION_SERVICE.retirer_item(data.into_inner(), &req).await
}

pub fn configure_evaluation_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/evaluations", web::get().to(list_evaluations))
        .route("/api/evaluations", web::post().to(create_evaluation))
        .route("/api/evaluations/{id}", web::get().to(get_evaluation))
        .route("/api/evaluations/{id}", web::delete().to(delete_evaluation))
        .route(
            "/api/evaluations/{id}/attributions",
            web::get().to(list_attributions),
        )
        .route(
            "/api/evaluations/{id}/utilisateurs-concernes",
            web::get().to(list_utilisateurs_concernes),
        )
        .route(
            "/api/modifier-evaluation",
            web::post().to(modifier_evaluation),
        )
        .route(
            "/api/attribuer-evaluation",
            web::post().to(attribuer_evaluation),
        )
        .route(
            "/api/retirer-attribution",
            web::post().to(retirer_attribution),
        )
        .route(
            "/api/ajouter-items-evaluation",
            web::post().to(ajouter_items),
        )
        .route("/api/retirer-item-evaluation", web::post().to(retirer_item));
}
