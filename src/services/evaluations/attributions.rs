use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::EvaluationService;
use crate::errors::CompetencesError;
use crate::models::{
    ApiResponse, ErrorCode,
    evaluations::requests::{AttribuerEvaluationRequest, RetirerAttributionRequest},
};

pub async fn attribuer_evaluation(
    service: &EvaluationService,
    data: AttribuerEvaluationRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
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

    if let Some(utilisateur_id) = data.utilisateur_id {
        match storage.get_utilisateur_by_id(utilisateur_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::UtilisateurNotFound,
                    format!("Élève {utilisateur_id} non trouvé"),
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
    }

    match storage.attribuer_evaluation(data).await {
        Ok(attribution) => {
            Ok(HttpResponse::Created().json(ApiResponse::success(attribution, "Attribution créée")))
        }
        Err(CompetencesError::Validation(msg)) => Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::AttributionInvalid, msg))),
        Err(CompetencesError::Conflict(msg)) => Ok(HttpResponse::Conflict()
            .json(ApiResponse::error_empty(ErrorCode::AttributionConflict, msg))),
        Err(e) => {
            error!("Attribution échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn retirer_attribution(
    service: &EvaluationService,
    data: RetirerAttributionRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.retirer_attribution(data.attribution_id).await {
        Ok(true) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Attribution retirée"))),
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::AttributionNotFound,
            format!("Attribution {} non trouvée", data.attribution_id),
        ))),
        Err(e) => {
            error!("Retrait de l'attribution échoué: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn list_attributions(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_attributions(evaluation_id).await {
        Ok(attributions) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(attributions, "Attributions")))
        }
        Err(e) => {
            error!("Liste des attributions échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}

pub async fn list_utilisateurs_concernes(
    service: &EvaluationService,
    evaluation_id: i64,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.evaluation_existe(evaluation_id).await {
        Ok(true) => {}
        Ok(false) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::EvaluationNotFound,
                format!("Évaluation {evaluation_id} non trouvée"),
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

    match storage.list_utilisateurs_concernes(evaluation_id).await {
        Ok(utilisateurs) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(utilisateurs, "Élèves concernés")))
        }
        Err(e) => {
            error!("Liste des élèves concernés échouée: {e}");
            Ok(HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                ErrorCode::InternalServerError,
                e.to_string(),
            )))
        }
    }
}
