use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Élève inscrit dans le parcours de certification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Utilisateur {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub classe: Option<String>,
    pub specialite: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub date_entree_bac: Option<i32>,
    pub date_certification: Option<i32>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
