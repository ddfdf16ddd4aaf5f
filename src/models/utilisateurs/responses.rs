use serde::Serialize;

use super::entities::Utilisateur;

/// Row actually inserted by the spreadsheet import; only the columns the
/// import UI displays.
#[derive(Debug, Clone, Serialize)]
pub struct UtilisateurImporte {
    pub id: i64,
    pub nom: String,
    pub prenom: String,
    pub email: String,
    pub classe: Option<String>,
}

impl From<Utilisateur> for UtilisateurImporte {
    fn from(u: Utilisateur) -> Self {
        Self {
            id: u.id,
            nom: u.nom,
            prenom: u.prenom,
            email: u.email,
            classe: u.classe,
        }
    }
}

/// Body of `POST /api/utilisateurs/import-excel`. This endpoint keeps the
/// exact historical shape instead of the ApiResponse envelope.
#[derive(Debug, Serialize)]
pub struct ImportExcelResponse {
    pub success: bool,
    pub utilisateurs_importes: Vec<UtilisateurImporte>,
    pub total_importes: usize,
    pub erreurs: Vec<String>,
    pub total_lignes: usize,
}

/// Structural import failure (unreadable file, missing required columns).
#[derive(Debug, Serialize)]
pub struct ImportExcelErrorResponse {
    pub success: bool,
    pub erreur: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colonnes_detectees: Option<Vec<String>>,
}
