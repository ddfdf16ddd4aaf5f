use chrono::NaiveDate;
use serde::Deserialize;

/// Création d'un élève. Seuls nom et prénom sont obligatoires; l'email est
/// dérivé de ces deux champs quand il est absent.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateUtilisateurRequest {
    pub nom: String,
    pub prenom: String,
    pub email: Option<String>,
    pub classe: Option<String>,
    pub specialite: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub date_entree_bac: Option<i32>,
    pub date_certification: Option<i32>,
}

/// Sparse patch: absent fields are left untouched.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUtilisateurRequest {
    pub nom: Option<String>,
    pub prenom: Option<String>,
    pub email: Option<String>,
    pub classe: Option<String>,
    pub specialite: Option<String>,
    pub date_naissance: Option<NaiveDate>,
    pub date_entree_bac: Option<i32>,
    pub date_certification: Option<i32>,
}

impl UpdateUtilisateurRequest {
    pub fn is_empty(&self) -> bool {
        self.nom.is_none()
            && self.prenom.is_none()
            && self.email.is_none()
            && self.classe.is_none()
            && self.specialite.is_none()
            && self.date_naissance.is_none()
            && self.date_entree_bac.is_none()
            && self.date_certification.is_none()
    }
}
