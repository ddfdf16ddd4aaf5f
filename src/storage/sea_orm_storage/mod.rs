//! Implémentation SeaORM du stockage.
//!
//! Couche unique d'accès aux données, compatible SQLite, PostgreSQL et MySQL.

mod attributions;
mod evaluations;
mod profil;
mod referentiel;
mod utilisateurs;
mod validations;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{CompetencesError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::from_database_config(&config.database).await
    }

    /// Construit le stockage à partir d'une configuration base de données
    /// explicite. Exécute les migrations.
    pub async fn from_database_config(database: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&database.url)?;

        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, database).await?
        } else {
            Self::connect_generic(&db_url, database).await?
        };

        Migrator::up(&db, None)
            .await
            .map_err(|e| CompetencesError::database_operation(format!("Migration échouée: {e}")))?;

        info!("Stockage SeaORM initialisé, base: {}", db_url);

        Ok(Self { db })
    }

    /// Connexion SQLite (WAL + pragmas).
    async fn connect_sqlite(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| CompetencesError::database_config(format!("URL SQLite invalide: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| {
                CompetencesError::database_connection(format!("Connexion SQLite échouée: {e}"))
            })?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// Connexion générique (PostgreSQL, MySQL).
    async fn connect_generic(url: &str, database: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(database.pool_size)
            .min_connections(1)
            .connect_timeout(Duration::from_secs(database.timeout))
            .acquire_timeout(Duration::from_secs(database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt).await.map_err(|e| {
            CompetencesError::database_connection(format!("Connexion impossible: {e}"))
        })
    }

    /// Déduit le type de base depuis l'URL.
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{url}?mode=rwc"))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(CompetencesError::database_config(format!(
                "Type de base indéterminable depuis l'URL: {url}. Attendu: sqlite://, postgres://, mysql://, ou un chemin .db/.sqlite"
            )))
        }
    }
}

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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // Élèves
    async fn create_utilisateur(
        &self,
        utilisateur: CreateUtilisateurRequest,
    ) -> Result<Utilisateur> {
        self.create_utilisateur_impl(utilisateur).await
    }

    async fn get_utilisateur_by_id(&self, id: i64) -> Result<Option<Utilisateur>> {
        self.get_utilisateur_by_id_impl(id).await
    }

    async fn email_existe(&self, email: &str) -> Result<bool> {
        self.email_existe_impl(email).await
    }

    async fn list_utilisateurs(&self) -> Result<Vec<Utilisateur>> {
        self.list_utilisateurs_impl().await
    }

    async fn update_utilisateur(
        &self,
        id: i64,
        update: UpdateUtilisateurRequest,
    ) -> Result<Option<Utilisateur>> {
        self.update_utilisateur_impl(id, update).await
    }

    async fn delete_utilisateur(&self, id: i64) -> Result<bool> {
        self.delete_utilisateur_impl(id).await
    }

    // Référentiel
    async fn list_competences(&self) -> Result<Vec<Competence>> {
        self.list_competences_impl().await
    }

    async fn list_items(&self) -> Result<Vec<ItemDetail>> {
        self.list_items_impl().await
    }

    async fn item_existe(&self, item_id: i64) -> Result<bool> {
        self.item_existe_impl(item_id).await
    }

    async fn count_competences(&self) -> Result<u64> {
        self.count_competences_impl().await
    }

    async fn seed_referentiel(&self) -> Result<()> {
        self.seed_referentiel_impl().await
    }

    // Évaluations
    async fn create_evaluation(&self, evaluation: CreateEvaluationRequest) -> Result<Evaluation> {
        self.create_evaluation_impl(evaluation).await
    }

    async fn list_evaluations(&self) -> Result<Vec<EvaluationSummary>> {
        self.list_evaluations_impl().await
    }

    async fn get_evaluation_detail(&self, id: i64) -> Result<Option<EvaluationDetailResponse>> {
        self.get_evaluation_detail_impl(id).await
    }

    async fn update_evaluation(
        &self,
        update: UpdateEvaluationRequest,
    ) -> Result<Option<Evaluation>> {
        self.update_evaluation_impl(update).await
    }

    async fn delete_evaluation(&self, id: i64) -> Result<bool> {
        self.delete_evaluation_impl(id).await
    }

    async fn ajouter_items_evaluation(&self, evaluation_id: i64, items_ids: &[i64]) -> Result<()> {
        self.ajouter_items_evaluation_impl(evaluation_id, items_ids)
            .await
    }

    async fn retirer_item_evaluation(&self, evaluation_id: i64, item_id: i64) -> Result<bool> {
        self.retirer_item_evaluation_impl(evaluation_id, item_id)
            .await
    }

    async fn evaluation_existe(&self, id: i64) -> Result<bool> {
        self.evaluation_existe_impl(id).await
    }

    // Attributions
    async fn attribuer_evaluation(&self, req: AttribuerEvaluationRequest) -> Result<Attribution> {
        self.attribuer_evaluation_impl(req).await
    }

    async fn retirer_attribution(&self, attribution_id: i64) -> Result<bool> {
        self.retirer_attribution_impl(attribution_id).await
    }

    async fn list_attributions(&self, evaluation_id: i64) -> Result<Vec<AttributionDetail>> {
        self.list_attributions_impl(evaluation_id).await
    }

    async fn list_utilisateurs_concernes(&self, evaluation_id: i64) -> Result<Vec<Utilisateur>> {
        self.list_utilisateurs_concernes_impl(evaluation_id).await
    }

    // Validations
    async fn upsert_validation(&self, req: UpsertValidationRequest) -> Result<(Validation, bool)> {
        self.upsert_validation_impl(req).await
    }

    async fn list_validations_utilisateur(
        &self,
        utilisateur_id: i64,
        evaluation_id: Option<i64>,
    ) -> Result<Vec<ValidationUtilisateurDetail>> {
        self.list_validations_utilisateur_impl(utilisateur_id, evaluation_id)
            .await
    }

    async fn list_validations_evaluation(
        &self,
        evaluation_id: i64,
    ) -> Result<Vec<ValidationEvaluationDetail>> {
        self.list_validations_evaluation_impl(evaluation_id).await
    }

    // Profil
    async fn get_profil_utilisateur(
        &self,
        utilisateur_id: i64,
    ) -> Result<Option<ProfilUtilisateur>> {
        self.get_profil_utilisateur_impl(utilisateur_id).await
    }
}

#[cfg(test)]
mod tests;
