use serde::{Deserialize, Serialize};

/// Catégorie de compétence du référentiel de certification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Competence {
    pub id: i64,
    pub code: String,
    pub libelle: String,
}

/// Item du référentiel, joint avec le code/libellé de sa compétence comme
/// le faisaient les requêtes SQL d'origine.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: i64,
    pub competence_id: i64,
    pub code_item: String,
    pub sous_item: Option<String>,
    pub description: Option<String>,
    pub competence_code: String,
    pub competence_libelle: String,
}
