use super::SeaOrmStorage;
use crate::entity::prelude::{
    Competences, EvaluationActiveModel, EvaluationItemActiveModel, EvaluationItems, Evaluations,
    Items, Validations,
};
use crate::errors::{CompetencesError, Result};
use crate::models::evaluations::{
    entities::Evaluation,
    requests::{CreateEvaluationRequest, UpdateEvaluationRequest},
    responses::{EvaluationDetailResponse, EvaluationSummary},
};
use crate::models::referentiel::entities::ItemDetail;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set, TransactionTrait,
};
use std::collections::HashSet;

impl SeaOrmStorage {
    /// Crée l'évaluation et rattache ses items dans une même transaction:
    /// soit tout est persisté, soit rien.
    pub async fn create_evaluation_impl(
        &self,
        req: CreateEvaluationRequest,
    ) -> Result<Evaluation> {
        if req.items_ids.is_empty() {
            return Err(CompetencesError::validation(
                "Une évaluation doit comporter au moins un item".to_string(),
            ));
        }

        let txn = self.db.begin().await.map_err(|e| {
            CompetencesError::database_operation(format!("Ouverture de transaction échouée: {e}"))
        })?;

        let model = EvaluationActiveModel {
            pole: Set(req.pole),
            module: Set(req.module),
            contexte: Set(req.contexte),
            date_creation: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let evaluation = model.insert(&txn).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Création de l'évaluation échouée: {e}"
            ))
        })?;

        for item_id in &req.items_ids {
            let link = EvaluationItemActiveModel {
                evaluation_id: Set(evaluation.id),
                item_id: Set(*item_id),
                ..Default::default()
            };
            link.insert(&txn).await.map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Rattachement de l'item {item_id} échoué: {e}"
                ))
            })?;
        }

        txn.commit().await.map_err(|e| {
            CompetencesError::database_operation(format!("Validation de transaction échouée: {e}"))
        })?;

        Ok(evaluation.into_evaluation())
    }

    /// Liste des évaluations, plus récentes d'abord, avec leur nombre d'items.
    pub async fn list_evaluations_impl(&self) -> Result<Vec<EvaluationSummary>> {
        let rows = Evaluations::find()
            .order_by_desc(crate::entity::evaluations::Column::DateCreation)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Liste des évaluations échouée: {e}"
                ))
            })?;

        let mut summaries = Vec::with_capacity(rows.len());
        for row in rows {
            let nombre_items = EvaluationItems::find()
                .filter(crate::entity::evaluation_items::Column::EvaluationId.eq(row.id))
                .count(&self.db)
                .await
                .map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Comptage des items échoué: {e}"
                    ))
                })?;
            summaries.push(EvaluationSummary {
                evaluation: row.into_evaluation(),
                nombre_items: nombre_items as i64,
            });
        }

        Ok(summaries)
    }

    /// L'évaluation et ses items joints à leur compétence, triés par code de
    /// compétence puis code d'item.
    pub async fn get_evaluation_detail_impl(
        &self,
        id: i64,
    ) -> Result<Option<EvaluationDetailResponse>> {
        let Some(evaluation) = Evaluations::find_by_id(id).one(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Lecture de l'évaluation échouée: {e}"
            ))
        })?
        else {
            return Ok(None);
        };

        let links = EvaluationItems::find()
            .filter(crate::entity::evaluation_items::Column::EvaluationId.eq(id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des items de l'évaluation échouée: {e}"
                ))
            })?;
        let item_ids: Vec<i64> = links.iter().map(|l| l.item_id).collect();

        let mut items: Vec<ItemDetail> = Items::find()
            .find_also_related(Competences)
            .filter(crate::entity::items::Column::Id.is_in(item_ids))
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture des items échouée: {e}"))
            })?
            .into_iter()
            .filter_map(|(item, competence)| {
                competence.map(|c| ItemDetail {
                    id: item.id,
                    competence_id: item.competence_id,
                    code_item: item.code_item,
                    sous_item: item.sous_item,
                    description: item.description,
                    competence_code: c.code,
                    competence_libelle: c.libelle,
                })
            })
            .collect();
        items.sort_by(|a, b| {
            a.competence_code
                .cmp(&b.competence_code)
                .then_with(|| a.code_item.cmp(&b.code_item))
        });

        Ok(Some(EvaluationDetailResponse {
            evaluation: evaluation.into_evaluation(),
            items,
        }))
    }

    /// Patch partiel de module/contexte.
    pub async fn update_evaluation_impl(
        &self,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        let Some(existing) = Evaluations::find_by_id(update.evaluation_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture de l'évaluation échouée: {e}"
                ))
            })?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(module) = update.module {
            model.module = Set(module);
        }
        if let Some(contexte) = update.contexte {
            model.contexte = Set(Some(contexte));
        }

        let result = model.update(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Mise à jour de l'évaluation échouée: {e}"
            ))
        })?;

        Ok(Some(result.into_evaluation()))
    }

    /// Suppression; items, attributions et validations suivent par cascade.
    pub async fn delete_evaluation_impl(&self, id: i64) -> Result<bool> {
        let result = Evaluations::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Suppression de l'évaluation échouée: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Ajoute des items à l'évaluation, en ignorant ceux déjà rattachés.
    pub async fn ajouter_items_evaluation_impl(
        &self,
        evaluation_id: i64,
        items_ids: &[i64],
    ) -> Result<()> {
        let existants: HashSet<i64> = EvaluationItems::find()
            .filter(crate::entity::evaluation_items::Column::EvaluationId.eq(evaluation_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des items rattachés échouée: {e}"
                ))
            })?
            .into_iter()
            .map(|l| l.item_id)
            .collect();

        let txn = self.db.begin().await.map_err(|e| {
            CompetencesError::database_operation(format!("Ouverture de transaction échouée: {e}"))
        })?;

        for item_id in items_ids {
            if existants.contains(item_id) {
                continue;
            }
            let link = EvaluationItemActiveModel {
                evaluation_id: Set(evaluation_id),
                item_id: Set(*item_id),
                ..Default::default()
            };
            link.insert(&txn).await.map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Rattachement de l'item {item_id} échoué: {e}"
                ))
            })?;
        }

        txn.commit().await.map_err(|e| {
            CompetencesError::database_operation(format!("Validation de transaction échouée: {e}"))
        })?;

        Ok(())
    }

    /// Retire un item de l'évaluation et supprime les validations qui le
    /// référencent dans cette évaluation.
    pub async fn retirer_item_evaluation_impl(
        &self,
        evaluation_id: i64,
        item_id: i64,
    ) -> Result<bool> {
        let txn = self.db.begin().await.map_err(|e| {
            CompetencesError::database_operation(format!("Ouverture de transaction échouée: {e}"))
        })?;

        let removed = EvaluationItems::delete_many()
            .filter(crate::entity::evaluation_items::Column::EvaluationId.eq(evaluation_id))
            .filter(crate::entity::evaluation_items::Column::ItemId.eq(item_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Retrait de l'item échoué: {e}"))
            })?;

        if removed.rows_affected == 0 {
            txn.rollback().await.map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Annulation de transaction échouée: {e}"
                ))
            })?;
            return Ok(false);
        }

        Validations::delete_many()
            .filter(crate::entity::validations::Column::EvaluationId.eq(evaluation_id))
            .filter(crate::entity::validations::Column::ItemId.eq(item_id))
            .exec(&txn)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Suppression des validations associées échouée: {e}"
                ))
            })?;

        txn.commit().await.map_err(|e| {
            CompetencesError::database_operation(format!("Validation de transaction échouée: {e}"))
        })?;

        Ok(true)
    }

    pub async fn evaluation_existe_impl(&self, id: i64) -> Result<bool> {
        let count = Evaluations::find_by_id(id)
            .count(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Vérification de l'évaluation échouée: {e}"
                ))
            })?;

        Ok(count > 0)
    }
}
