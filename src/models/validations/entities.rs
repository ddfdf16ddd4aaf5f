use serde::{Deserialize, Serialize};

/// Niveau de maîtrise (0-4) posé par un enseignant sur un item d'une
/// évaluation pour un élève. Unique par (utilisateur, évaluation, item).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Validation {
    pub id: i64,
    pub utilisateur_id: i64,
    pub evaluation_id: i64,
    pub item_id: i64,
    pub niveau_validation: i32,
    pub commentaire: Option<String>,
    pub validateur: Option<String>,
    pub date_validation: chrono::DateTime<chrono::Utc>,
}

/// Range of accepted mastery levels.
pub const NIVEAU_MIN: i32 = 0;
pub const NIVEAU_MAX: i32 = 4;

pub fn niveau_est_valide(niveau: i32) -> bool {
    (NIVEAU_MIN..=NIVEAU_MAX).contains(&niveau)
}
