use serde::Deserialize;

/// Pose ou met à jour une validation unique.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertValidationRequest {
    pub utilisateur_id: i64,
    pub evaluation_id: i64,
    pub item_id: i64,
    pub niveau_validation: i32,
    pub commentaire: Option<String>,
    pub validateur: Option<String>,
}

/// Entrée d'un lot `POST /api/valider-multiple`. Les champs
/// sont optionnels pour permettre un rapport d'erreur par entrée.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationEntry {
    pub item_id: Option<i64>,
    pub niveau_validation: Option<i32>,
    pub commentaire: Option<String>,
}

/// Paramètres de `GET /api/utilisateurs/{id}/validations`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationsUtilisateurParams {
    pub evaluation_id: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ValiderMultipleRequest {
    pub utilisateur_id: i64,
    pub evaluation_id: i64,
    pub validations: Vec<ValidationEntry>,
}
