use super::SeaOrmStorage;
use crate::entity::prelude::{
    Competences, EvaluationAttributions, EvaluationItems, Items, Utilisateurs, Validations,
};
use crate::errors::{CompetencesError, Result};
use crate::models::profil::responses::{
    CompetenceProfil, ProfilUtilisateur, niveau_moyen, statut_competence,
};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use std::collections::{HashMap, HashSet};

const CLASSE_PREMIERE: &str = "Première";
const CLASSE_TERMINALE: &str = "Terminale";

impl SeaOrmStorage {
    /// Profil de maîtrise d'un élève: une ligne par compétence du
    /// référentiel, triées par code, avec compteurs et statut.
    pub async fn get_profil_utilisateur_impl(
        &self,
        utilisateur_id: i64,
    ) -> Result<Option<ProfilUtilisateur>> {
        let Some(utilisateur) = Utilisateurs::find_by_id(utilisateur_id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture de l'élève échouée: {e}"))
            })?
        else {
            return Ok(None);
        };

        let competences = Competences::find()
            .order_by_asc(crate::entity::competences::Column::Code)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Liste des compétences échouée: {e}"
                ))
            })?;

        // item -> compétence
        let item_competence: HashMap<i64, i64> = Items::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture des items échouée: {e}"))
            })?
            .into_iter()
            .map(|i| (i.id, i.competence_id))
            .collect();

        // validations de l'élève, regroupées par compétence
        let validations = Validations::find()
            .filter(crate::entity::validations::Column::UtilisateurId.eq(utilisateur_id))
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des validations échouée: {e}"
                ))
            })?;
        let mut par_competence: HashMap<i64, (i64, i64)> = HashMap::new();
        for validation in &validations {
            if let Some(&competence_id) = item_competence.get(&validation.item_id) {
                let entry = par_competence.entry(competence_id).or_insert((0, 0));
                entry.0 += 1;
                entry.1 += i64::from(validation.niveau_validation);
            }
        }

        // évaluation -> compétences couvertes par ses items
        let liens = EvaluationItems::find().all(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!(
                "Lecture des items d'évaluation échouée: {e}"
            ))
        })?;
        let mut competences_par_evaluation: HashMap<i64, HashSet<i64>> = HashMap::new();
        for lien in &liens {
            if let Some(&competence_id) = item_competence.get(&lien.item_id) {
                competences_par_evaluation
                    .entry(lien.evaluation_id)
                    .or_default()
                    .insert(competence_id);
            }
        }

        // évaluations attribuées aux classes de Première / Terminale
        let attributions = EvaluationAttributions::find()
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Lecture des attributions échouée: {e}"
                ))
            })?;
        let mut evaluations_premiere: HashSet<i64> = HashSet::new();
        let mut evaluations_terminale: HashSet<i64> = HashSet::new();
        for attribution in &attributions {
            match attribution.classe.as_deref() {
                Some(CLASSE_PREMIERE) => {
                    evaluations_premiere.insert(attribution.evaluation_id);
                }
                Some(CLASSE_TERMINALE) => {
                    evaluations_terminale.insert(attribution.evaluation_id);
                }
                _ => {}
            }
        }

        let mut lignes = Vec::with_capacity(competences.len());
        for competence in competences {
            let (nb_validations, total_niveaux) = par_competence
                .get(&competence.id)
                .copied()
                .unwrap_or((0, 0));

            let couvre = |evaluations: &HashSet<i64>| {
                evaluations
                    .iter()
                    .filter(|id| {
                        competences_par_evaluation
                            .get(id)
                            .is_some_and(|c| c.contains(&competence.id))
                    })
                    .count() as i64
            };
            let nb_eval_premiere = couvre(&evaluations_premiere);
            let nb_eval_terminale = couvre(&evaluations_terminale);

            let (statut, statut_class) = statut_competence(nb_validations, total_niveaux);

            lignes.push(CompetenceProfil {
                competence_id: competence.id,
                competence_code: competence.code,
                competence_libelle: competence.libelle,
                nb_eval_premiere,
                nb_eval_terminale,
                total_niveaux,
                nb_validations,
                niveau_moyen: niveau_moyen(nb_validations, total_niveaux),
                statut: statut.to_string(),
                statut_class: statut_class.to_string(),
            });
        }

        Ok(Some(ProfilUtilisateur {
            utilisateur: utilisateur.into_utilisateur(),
            competences: lignes,
        }))
    }
}
