use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluations::requests::{AjouterItemsRequest, RetirerItemRequest},
};

pub async fn ajouter_items(
    service: &EvaluationService,
    data: AjouterItemsRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    if data.items_ids.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Au moins un item est requis",
        )));
    }

    let storage = service.get_storage(request);

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

    match storage
        .ajouter_items_evaluation(data.evaluation_id, &data.items_ids)
        .await
    {
        Ok(()) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Items ajoutés"))),
        Err(e) => {
            error!("Ajout d'items échoué: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn retirer_item(
    service: &EvaluationService,
    data: RetirerItemRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage
        .retirer_item_evaluation(data.evaluation_id, data.item_id)
        .await
    {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Item retiré"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ItemNotFound,
            format!(
                "Item {} non rattaché à l'évaluation {}",
                data.item_id, data.evaluation_id
            ),
        ))),
        Err(e) => {
            error!("Retrait de l'item échoué: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
