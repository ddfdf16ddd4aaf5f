//! Lot de validations: chaque entrée est traitée indépendamment, une entrée
//! invalide n'empêche pas les suivantes.

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::error;

use super::ValidationService;
use crate::models::{
    ApiResponse, ErrorCode,
    validations::{
        entities,
        requests::{UpsertValidationRequest, ValiderMultipleRequest},
        responses::ValiderMultipleResponse,
    },
};
use crate::storage::Storage;

pub async fn valider_multiple(
    service: &ValidationService,
    data: ValiderMultipleRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_utilisateur_by_id(data.utilisateur_id).await {
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::UtilisateurNotFound,
                format!("Élève {} non trouvé", data.utilisateur_id),
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

    let response = traiter_lot(storage.as_ref(), data).await;

    Ok(HttpResponse::Ok().json(ApiResponse::success(response, "Lot traité")))
}

/// Traite les entrées une à une: une entrée invalide est signalée et
/// n'empêche pas les suivantes.
async fn traiter_lot(storage: &dyn Storage, data: ValiderMultipleRequest) -> ValiderMultipleResponse {
    let total = data.validations.len();
    let mut crees = 0usize;
    let mut mis_a_jour = 0usize;
    let mut erreurs: Vec<String> = Vec::new();

    for (i, entree) in data.validations.into_iter().enumerate() {
        let position = i + 1;

        let Some(item_id) = entree.item_id else {
            erreurs.push(format!("Entrée {position}: item_id manquant"));
            continue;
        };
        let Some(niveau_validation) = entree.niveau_validation else {
            erreurs.push(format!("Entrée {position}: niveau_validation manquant"));
            continue;
        };
        if !entities::niveau_est_valide(niveau_validation) {
            erreurs.push(format!(
                "Entrée {position}: niveau {niveau_validation} hors plage (0-4)"
            ));
            continue;
        }
        match storage.item_existe(item_id).await {
            Ok(true) => {}
            Ok(false) => {
                erreurs.push(format!("Entrée {position}: item {item_id} non trouvé"));
                continue;
            }
            Err(e) => {
                erreurs.push(format!("Entrée {position}: {e}"));
                continue;
            }
        }

        let req = UpsertValidationRequest {
            utilisateur_id: data.utilisateur_id,
            evaluation_id: data.evaluation_id,
            item_id,
            niveau_validation,
            commentaire: entree.commentaire,
            validateur: None,
        };

        match storage.upsert_validation(req).await {
            Ok((_, true)) => crees += 1,
            Ok((_, false)) => mis_a_jour += 1,
            Err(e) => {
                error!("Entrée {position} du lot échouée: {e}");
                erreurs.push(format!("Entrée {position}: {e}"));
            }
        }
    }

    ValiderMultipleResponse {
        total,
        crees,
        mis_a_jour,
        erreurs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::models::evaluations::requests::CreateEvaluationRequest;
    use crate::models::utilisateurs::requests::CreateUtilisateurRequest;
    use crate::models::validations::requests::ValidationEntry;
    use crate::storage::sea_orm_storage::SeaOrmStorage;

    async fn stockage() -> SeaOrmStorage {
        SeaOrmStorage::from_database_config(&DatabaseConfig {
            url: ":memory:".to_string(),
            pool_size: 1,
            timeout: 5,
        })
        .await
        .expect("stockage en mémoire")
    }

    fn entree(item_id: Option<i64>, niveau: Option<i32>) -> ValidationEntry {
        ValidationEntry {
            item_id,
            niveau_validation: niveau,
            commentaire: None,
        }
    }

    #[tokio::test]
    async fn lot_mixte_compte_les_reussites_et_signale_les_erreurs() {
        let storage = stockage().await;
        storage.seed_referentiel().await.expect("seed");
        let items = storage.list_items().await.expect("items");

        let eleve = storage
            .create_utilisateur(CreateUtilisateurRequest {
                nom: "Dupont".to_string(),
                prenom: "Marie".to_string(),
                email: Some("marie.dupont@bacpro-ciel.fr".to_string()),
                classe: Some("Première".to_string()),
                specialite: None,
                date_naissance: None,
                date_entree_bac: None,
                date_certification: None,
            })
            .await
            .expect("élève");
        let evaluation = storage
            .create_evaluation(CreateEvaluationRequest {
                pole: "Pôle professionnel".to_string(),
                module: "Réseau local".to_string(),
                contexte: None,
                items_ids: vec![items[0].id, items[1].id, items[2].id],
            })
            .await
            .expect("évaluation");

        let lot = ValiderMultipleRequest {
            utilisateur_id: eleve.id,
            evaluation_id: evaluation.id,
            validations: vec![
                entree(Some(items[0].id), Some(3)),
                entree(Some(items[1].id), Some(4)),
                entree(None, Some(2)),
                entree(Some(999_999), Some(2)),
                entree(Some(items[2].id), Some(7)),
            ],
        };
        let reponse = traiter_lot(&storage, lot).await;

        assert_eq!(reponse.total, 5);
        assert_eq!(reponse.crees, 2);
        assert_eq!(reponse.mis_a_jour, 0);
        assert_eq!(reponse.erreurs.len(), 3);
        assert!(reponse.erreurs[0].contains("item_id manquant"));
        assert!(reponse.erreurs[1].contains("non trouvé"));
        assert!(reponse.erreurs[2].contains("hors plage"));

        // rejouer une entrée valide la classe en mise à jour
        let rejouer = ValiderMultipleRequest {
            utilisateur_id: eleve.id,
            evaluation_id: evaluation.id,
            validations: vec![entree(Some(items[0].id), Some(2))],
        };
        let reponse = traiter_lot(&storage, rejouer).await;

        assert_eq!(reponse.crees, 0);
        assert_eq!(reponse.mis_a_jour, 1);
        assert!(reponse.erreurs.is_empty());
    }
}
