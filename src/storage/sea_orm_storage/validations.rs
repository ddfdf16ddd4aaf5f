use super::SeaOrmStorage;
use crate::entity::prelude::{
    Competences, Evaluations, Items, Utilisateurs, ValidationActiveModel, Validations,
};
use crate::errors::{CompetencesError, Result};
use crate::models::validations::{
    entities::{self, Validation},
    requests::UpsertValidationRequest,
    responses::{ValidationEvaluationDetail, ValidationUtilisateurDetail},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, QueryFilter, Set,
};
use std::collections::HashMap;

const VALIDATEUR_DEFAUT: &str = "Enseignant";

impl SeaOrmStorage {
    /// Pose ou met à jour le niveau d'un (élève, évaluation, item).
    /// Renvoie la validation et un booléen: true si elle vient d'être créée.
    pub async fn upsert_validation_impl(
        &self,
        req: UpsertValidationRequest,
    ) -> Result<(Validation, bool)> {
        if !entities::niveau_est_valide(req.niveau_validation) {
            return Err(CompetencesError::validation(format!(
                "Le niveau de validation doit être entre 0 et 4 (reçu: {})",
                req.niveau_validation
            )));
        }

        let validateur = req
            .validateur
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| VALIDATEUR_DEFAUT.to_string());
        let now = chrono::Utc::now().timestamp();

        let existing = Validations::find()
            .filter(crate::entity::validations::Column::UtilisateurId.eq(req.utilisateur_id))
            .filter(crate::entity::validations::Column::EvaluationId.eq(req.evaluation_id))
            .filter(crate::entity::validations::Column::ItemId.eq(req.item_id))
            .one(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Recherche de la validation échouée: {e}"
                ))
            })?;

        match existing {
            Some(row) => {
                let mut model = row.into_active_model();
                model.niveau_validation = Set(req.niveau_validation);
                model.commentaire = Set(req.commentaire);
                model.validateur = Set(Some(validateur));
                model.date_validation = Set(now);

                let result = model.update(&self.db).await.map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Mise à jour de la validation échouée: {e}"
                    ))
                })?;

                Ok((result.into_validation(), false))
            }
            None => {
                let model = ValidationActiveModel {
                    utilisateur_id: Set(req.utilisateur_id),
                    evaluation_id: Set(req.evaluation_id),
                    item_id: Set(req.item_id),
                    niveau_validation: Set(req.niveau_validation),
                    commentaire: Set(req.commentaire),
                    validateur: Set(Some(validateur)),
                    date_validation: Set(now),
                    ..Default::default()
                };

                let result = model.insert(&self.db).await.map_err(|e| {
                    CompetencesError::database_operation(format!(
                        "Création de la validation échouée: {e}"
                    ))
                })?;

                Ok((result.into_validation(), true))
            }
        }
    }

    /// Validations d'un élève, filtrables par évaluation, jointes aux
    /// descripteurs d'item, de compétence et d'évaluation. Triées par date de
    /// création d'évaluation décroissante, puis code de compétence, puis
    /// code d'item.
    pub async fn list_validations_utilisateur_impl(
        &self,
        utilisateur_id: i64,
        evaluation_id: Option<i64>,
    ) -> Result<Vec<ValidationUtilisateurDetail>> {
        let mut select = Validations::find()
            .filter(crate::entity::validations::Column::UtilisateurId.eq(utilisateur_id));
        if let Some(evaluation_id) = evaluation_id {
            select = select
                .filter(crate::entity::validations::Column::EvaluationId.eq(evaluation_id));
        }
        let rows = select.all(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Liste des validations échouée: {e}"
            ))
        })?;

        let items = self.items_indexes().await?;
        let evaluations: HashMap<i64, crate::entity::evaluations::Model> = Evaluations::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des évaluations échouée: {e}"
                ))
            })?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut details: Vec<ValidationUtilisateurDetail> = rows
            .into_iter()
            .filter_map(|row| {
                let item = items.get(&row.item_id)?;
                let evaluation = evaluations.get(&row.evaluation_id)?;
                Some(ValidationUtilisateurDetail {
                    validation: row.into_validation(),
                    code_item: item.code_item.clone(),
                    sous_item: item.sous_item.clone(),
                    description: item.description.clone(),
                    competence_code: item.competence_code.clone(),
                    competence_libelle: item.competence_libelle.clone(),
                    evaluation_module: evaluation.module.clone(),
                    evaluation_pole: evaluation.pole.clone(),
                })
            })
            .collect();

        details.sort_by(|a, b| {
            let date_a = evaluations
                .get(&a.validation.evaluation_id)
                .map(|e| e.date_creation)
                .unwrap_or_default();
            let date_b = evaluations
                .get(&b.validation.evaluation_id)
                .map(|e| e.date_creation)
                .unwrap_or_default();
            date_b
                .cmp(&date_a)
                .then_with(|| a.competence_code.cmp(&b.competence_code))
                .then_with(|| a.code_item.cmp(&b.code_item))
        });

        Ok(details)
    }

    /// Validations posées dans une évaluation, jointes à l'élève et à l'item.
    /// Triées par nom, prénom, code de compétence, code d'item.
    pub async fn list_validations_evaluation_impl(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<ValidationEvaluationDetail>> {
        let rows = Validations::find()
            .filter(crate::entity::validations::Column::EvaluationId.eq(evaluation_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Liste des validations échouée: {e}"
                ))
            })?;

        let items = self.items_indexes().await?;
        let utilisateurs: HashMap<i64, crate::entity::utilisateurs::Model> = Utilisateurs::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture des élèves échouée: {e}"))
            })?
            .into_iter()
            .map(|m| (m.id, m))
            .collect();

        let mut details: Vec<ValidationEvaluationDetail> = rows
            .into_iter()
            .filter_map(|row| {
                let item = items.get(&row.item_id)?;
                let utilisateur = utilisateurs.get(&row.utilisateur_id)?;
                Some(ValidationEvaluationDetail {
                    validation: row.into_validation(),
                    nom: utilisateur.nom.clone(),
                    prenom: utilisateur.prenom.clone(),
                    classe: utilisateur.classe.clone(),
                    code_item: item.code_item.clone(),
                    competence_code: item.competence_code.clone(),
                })
            })
            .collect();

        details.sort_by(|a, b| {
            a.nom
                .cmp(&b.nom)
                .then_with(|| a.prenom.cmp(&b.prenom))
                .then_with(|| a.competence_code.cmp(&b.competence_code))
                .then_with(|| a.code_item.cmp(&b.code_item))
        });

        Ok(details)
    }

    /// Index item_id -> descripteurs (item + compétence).
    async fn items_indexes(&self) -> Result<HashMap<i64, ItemDescripteurs>> {
        let rows = Items::find()
            .find_also_related(Competences)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture des items échouée: {e}"))
            })?;

        Ok(rows
            .into_iter()
            .filter_map(|(item, competence)| {
                let c = competence?;
                Some((
                    item.id,
                    ItemDescripteurs {
                        code_item: item.code_item,
                        sous_item: item.sous_item,
                        description: item.description,
                        competence_code: c.code,
                        competence_libelle: c.libelle,
                    },
                ))
            })
            .collect())
    }
}

struct ItemDescripteurs {
    code_item: String,
    sous_item: Option<String>,
    description: Option<String>,
    competence_code: String,
    competence_libelle: String,
}
