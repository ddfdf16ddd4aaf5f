use super::SeaOrmStorage;
use crate::entity::prelude::{
    AttributionActiveModel, EvaluationAttributions, Utilisateurs,
};
use crate::errors::{CompetencesError, Result};
use crate::models::evaluations::{
    entities::Attribution,
    requests::AttribuerEvaluationRequest,
    responses::AttributionDetail,
};
use crate::models::utilisateurs::entities::Utilisateur;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};
use std::collections::BTreeMap;

impl SeaOrmStorage {
    /// Attribue une évaluation à une classe entière ou à un élève.
    /// Exactement une des deux cibles doit être renseignée; une attribution
    /// identique déjà présente est un conflit.
    pub async fn attribuer_evaluation_impl(
        &self,
        req: AttribuerEvaluationRequest,
    ) -> Result<Attribution> {
        let existing = EvaluationAttributions::find().filter(
            crate::entity::evaluation_attributions::Column::EvaluationId.eq(req.evaluation_id),
        );
        let existing = match (&req.classe, &req.utilisateur_id) {
            (Some(classe), None) => existing
                .filter(crate::entity::evaluation_attributions::Column::Classe.eq(classe.clone())),
            (None, Some(utilisateur_id)) => existing.filter(
                crate::entity::evaluation_attributions::Column::UtilisateurId.eq(*utilisateur_id),
            ),
            _ => {
                return Err(CompetencesError::validation(
                    "Renseigner soit une classe, soit un élève (exclusivement)".to_string(),
                ));
            }
        };
        let deja = existing.count(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Vérification des attributions échouée: {e}"
            ))
        })?;
        if deja > 0 {
            return Err(CompetencesError::conflict(
                "Cette attribution existe déjà".to_string(),
            ));
        }

        let model = AttributionActiveModel {
            evaluation_id: Set(req.evaluation_id),
            classe: Set(req.classe),
            utilisateur_id: Set(req.utilisateur_id),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!("Attribution échouée: {e}"))
        })?;

        Ok(result.into_attribution())
    }

    pub async fn retirer_attribution_impl(&self, attribution_id: i64) -> Result<bool> {
        let result = EvaluationAttributions::delete_by_id(attribution_id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Retrait de l'attribution échoué: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }

    /// Attributions d'une évaluation, enrichies de l'identité de l'élève
    /// quand la cible est individuelle.
    pub async fn list_attributions_impl(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<AttributionDetail>> {
        let rows = EvaluationAttributions::find()
            .find_also_related(Utilisateurs)
            .filter(
                crate::entity::evaluation_attributions::Column::EvaluationId.eq(evaluation_id),
            )
            .order_by_asc(crate::entity::evaluation_attributions::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Liste des attributions échouée: {e}"
                ))
            })?;

        Ok(rows
            .into_iter()
            .map(|(attribution, utilisateur)| {
                let (nom, prenom, user_classe) = match utilisateur {
                    Some(u) => (Some(u.nom), Some(u.prenom), u.classe),
                    None => (None, None, None),
                };
                AttributionDetail {
                    attribution: attribution.into_attribution(),
                    nom,
                    prenom,
                    user_classe,
                }
            })
            .collect())
    }

    /// Élèves concernés par une évaluation: cibles individuelles, plus tous
    /// les élèves des classes ciblées. Dédoublonnés, triés par nom, prénom.
    pub async fn list_utilisateurs_concernes_impl(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<Utilisateur>> {
        let attributions = EvaluationAttributions::find()
            .filter(
                crate::entity::evaluation_attributions::Column::EvaluationId.eq(evaluation_id),
            )
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des attributions échouée: {e}"
                ))
            })?;

        let classes: Vec<String> = attributions
            .iter()
            .filter_map(|a| a.classe.clone())
            .collect();
        let ids: Vec<i64> = attributions.iter().filter_map(|a| a.utilisateur_id).collect();

        let mut concernes: BTreeMap<i64, Utilisateur> = BTreeMap::new();

        if !classes.is_empty() {
            let rows = Utilisateurs::find()
                .filter(crate::entity::utilisateurs::Column::Classe.is_in(classes))
                .all(&self.db)
                .await
                .map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Lecture des élèves par classe échouée: {e}"
                    ))
                })?;
            for row in rows {
                concernes.insert(row.id, row.into_utilisateur());
            }
        }

        if !ids.is_empty() {
            let rows = Utilisateurs::find()
                .filter(crate::entity::utilisateurs::Column::Id.is_in(ids))
                .all(&self.db)
                .await
                .map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Lecture des élèves ciblés échouée: {e}"
                    ))
                })?;
            for row in rows {
                concernes.insert(row.id, row.into_utilisateur());
            }
        }

        let mut result: Vec<Utilisateur> = concernes.into_values().collect();
        result.sort_by(|a, b| a.nom.cmp(&b.nom).then_with(|| a.prenom.cmp(&b.prenom)));

        Ok(result)
    }
}
