use super::SeaOrmStorage;
use crate::entity::prelude::{UtilisateurActiveModel, Utilisateurs};
use crate::entity::utilisateurs::Column;
use crate::errors::{CompetencesError, Result};
use crate::models::utilisateurs::{
    entities::Utilisateur,
    requests::{CreateUtilisateurRequest, UpdateUtilisateurRequest},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, IntoActiveModel, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// Créer un élève. L'email doit déjà être normalisé par l'appelant.
    pub async fn create_utilisateur_impl(
        &self,
        req: CreateUtilisateurRequest,
    ) -> Result<Utilisateur> {
        let now = chrono::Utc::now().timestamp();
        let email = req.email.ok_or_else(|| {
            CompetencesError::validation("Email manquant après normalisation".to_string())
        })?;

        let model = UtilisateurActiveModel {
            nom: Set(req.nom),
            prenom: Set(req.prenom),
            email: Set(email),
            classe: Set(req.classe),
            specialite: Set(req.specialite),
            date_naissance: Set(req.date_naissance),
            date_entree_bac: Set(req.date_entree_bac),
            date_certification: Set(req.date_certification),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            if est_violation_unicite(&e) {
                CompetencesError::conflict("Cet email existe déjà".to_string())
            } else {
                CompetencesError::database_operation(format!("Création de l'élève échouée: {e}"))
            }
        })?;

        Ok(result.into_utilisateur())
    }

    pub async fn get_utilisateur_by_id_impl(&self, id: i64) -> Result<Option<Utilisateur>> {
        let result = Utilisateurs::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Lecture de l'élève échouée: {e}"))
            })?;

        Ok(result.map(|m| m.into_utilisateur()))
    }

    pub async fn email_existe_impl(&self, email: &str) -> Result<bool> {
        let count = Utilisateurs::find()
            .filter(Column::Email.eq(email))
            .count(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Vérification email échouée: {e}"))
            })?;

        Ok(count > 0)
    }

    /// Liste triée par nom puis prénom.
    pub async fn list_utilisateurs_impl(&self) -> Result<Vec<Utilisateur>> {
        let rows = Utilisateurs::find()
            .order_by_asc(Column::Nom)
            .order_by_asc(Column::Prenom)
            .all(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!("Liste des élèves échouée: {e}"))
            })?;

        Ok(rows.into_iter().map(|m| m.into_utilisateur()).collect())
    }

    /// Patch partiel: seuls les champs présents sont modifiés.
    pub async fn update_utilisateur_impl(
        &self,
        id: i64,
        update: UpdateUtilisateurRequest,
    ) -> Result<Option<Utilisateur>> {
        let Some(existing) = Utilisateurs::find_by_id(id).one(&self.db).await.map_err(|e| {
            CompetencesError::database_operation(format!("Lecture de l'élève échouée: {e}"))
        })?
        else {
            return Ok(None);
        };

        let mut model = existing.into_active_model();
        if let Some(nom) = update.nom {
            model.nom = Set(nom);
        }
        if let Some(prenom) = update.prenom {
            model.prenom = Set(prenom);
        }
        if let Some(email) = update.email {
            model.email = Set(email);
        }
        if let Some(classe) = update.classe {
            model.classe = Set(Some(classe));
        }
        if let Some(specialite) = update.specialite {
            model.specialite = Set(Some(specialite));
        }
        if let Some(date_naissance) = update.date_naissance {
            model.date_naissance = Set(Some(date_naissance));
        }
        if let Some(date_entree_bac) = update.date_entree_bac {
            model.date_entree_bac = Set(Some(date_entree_bac));
        }
        if let Some(date_certification) = update.date_certification {
            model.date_certification = Set(Some(date_certification));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model.update(&self.db).await.map_err(|e| {
            if est_violation_unicite(&e) {
                CompetencesError::conflict("Cet email existe déjà".to_string())
            } else {
                CompetencesError::database_operation(format!("Mise à jour de l'élève échouée: {e}"))
            }
        })?;

        Ok(Some(result.into_utilisateur()))
    }

    /// Supprime l'élève; validations et attributions suivent par cascade.
    pub async fn delete_utilisateur_impl(&self, id: i64) -> Result<bool> {
        let result = Utilisateurs::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                CompetencesError::database_operation(format!(
                    "Suppression de l'élève échouée: {e}"
                ))
            })?;

        Ok(result.rows_affected > 0)
    }
}

/// Détection portable des violations d'unicité (SQLite, PostgreSQL, MySQL).
pub(crate) fn est_violation_unicite(err: &sea_orm::DbErr) -> bool {
    let text = err.to_string().to_lowercase();
    text.contains("unique") || text.contains("duplicate")
}
