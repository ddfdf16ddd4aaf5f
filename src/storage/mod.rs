use std::sync::Arc;

use crate::models::{
    evaluations::{
        entities::{Attribution, Evaluation},
        requests::{AttribuerEvaluationRequest, CreateEvaluationRequest, UpdateEvaluationRequest},
        responses::{AttributionDetail, EvaluationDetailResponse, EvaluationSummary},
    },
    profil::responses::ProfilUtilisateur,
    referentiel::entities::{Competence, ItemDetail},
    utilisateurs::{
        entities::Utilisateur,
        requests::{CreateUtilisateurRequest, UpdateUtilisateurRequest},
    },
    validations::{
        entities::Validation,
        requests::UpsertValidationRequest,
        responses::{ValidationEvaluationDetail, ValidationUtilisateurDetail},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// Élèves
    // Créer un élève (l'email est déjà dérivé/normalisé par l'appelant)
    async fn create_utilisateur(&self, utilisateur: CreateUtilisateurRequest)
    -> Result<Utilisateur>;
    // Récupérer un élève par ID
    async fn get_utilisateur_by_id(&self, id: i64) -> Result<Option<Utilisateur>>;
    // Un email est-il déjà pris ?
    async fn email_existe(&self, email: &str) -> Result<bool>;
    // Lister les élèves triés par nom, prénom
    async fn list_utilisateurs(&self) -> Result<Vec<Utilisateur>>;
    // Mise à jour partielle
    async fn update_utilisateur(
        &self,
        id: i64,
        update: UpdateUtilisateurRequest,
    ) -> Result<Option<Utilisateur>>;
    // Suppression en cascade (validations et attributions comprises)
    async fn delete_utilisateur(&self, id: i64) -> Result<bool>;

    /// Référentiel
    // Lister les compétences triées par code
    async fn list_competences(&self) -> Result<Vec<Competence>>;
    // Lister les items joints à leur compétence, triés par code
    async fn list_items(&self) -> Result<Vec<ItemDetail>>;
    // L'item existe-t-il ?
    async fn item_existe(&self, item_id: i64) -> Result<bool>;
    // Nombre de compétences en base (pour décider du seeding)
    async fn count_competences(&self) -> Result<u64>;
    // Insérer le référentiel Bac Pro CIEL
    async fn seed_referentiel(&self) -> Result<()>;

    /// Évaluations
    // Créer une évaluation et rattacher ses items, atomiquement
    async fn create_evaluation(&self, evaluation: CreateEvaluationRequest) -> Result<Evaluation>;
    // Lister les évaluations (plus récentes d'abord) avec leur nombre d'items
    async fn list_evaluations(&self) -> Result<Vec<EvaluationSummary>>;
    // Détail: l'évaluation et ses items joints
    async fn get_evaluation_detail(&self, id: i64) -> Result<Option<EvaluationDetailResponse>>;
    // Patch partiel (module, contexte)
    async fn update_evaluation(
        &self,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>>;
    // Suppression en cascade
    async fn delete_evaluation(&self, id: i64) -> Result<bool>;
    // Ajouter des items (union, sans doublon)
    async fn ajouter_items_evaluation(&self, evaluation_id: i64, items_ids: &[i64]) -> Result<()>;
    // Retirer un item et les validations qui le référencent
    async fn retirer_item_evaluation(&self, evaluation_id: i64, item_id: i64) -> Result<bool>;
    // L'évaluation existe-t-elle ?
    async fn evaluation_existe(&self, id: i64) -> Result<bool>;

    /// Attributions
    // Attribuer à une classe entière ou à un élève
    async fn attribuer_evaluation(&self, req: AttribuerEvaluationRequest) -> Result<Attribution>;
    // Retirer une attribution
    async fn retirer_attribution(&self, attribution_id: i64) -> Result<bool>;
    // Lister les attributions d'une évaluation, enrichies de l'élève ciblé
    async fn list_attributions(&self, evaluation_id: i64) -> Result<Vec<AttributionDetail>>;
    // Élèves concernés par une évaluation (cibles directes + classes ciblées)
    async fn list_utilisateurs_concernes(&self, evaluation_id: i64) -> Result<Vec<Utilisateur>>;

    /// Validations
    // Poser ou mettre à jour un niveau; renvoie (validation, créée ?)
    async fn upsert_validation(&self, req: UpsertValidationRequest) -> Result<(Validation, bool)>;
    // Validations d'un élève, filtrables par évaluation
    async fn list_validations_utilisateur(
        &self,
        utilisateur_id: i64,
        evaluation_id: Option<i64>,
    ) -> Result<Vec<ValidationUtilisateurDetail>>;
    // Validations posées dans une évaluation
    async fn list_validations_evaluation(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<ValidationEvaluationDetail>>;

    /// Profil
    // Synthèse de maîtrise par compétence pour un élève
    async fn get_profil_utilisateur(&self, utilisateur_id: i64) -> Result<Option<ProfilUtilisateur>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
