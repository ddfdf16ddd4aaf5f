use serde::Serialize;

use crate::models::utilisateurs::entities::Utilisateur;

/// Synthèse d'une compétence pour le profil d'un élève.
#[derive(Debug, Clone, Serialize)]
pub struct CompetenceProfil {
    pub competence_id: i64,
    pub competence_code: String,
    pub competence_libelle: String,
    pub nb_eval_premiere: i64,
    pub nb_eval_terminale: i64,
    pub total_niveaux: i64,
    pub nb_validations: i64,
    pub niveau_moyen: f64,
    pub statut: String,
    pub statut_class: String,
}

#[derive(Debug, Serialize)]
pub struct ProfilUtilisateur {
    pub utilisateur: Utilisateur,
    pub competences: Vec<CompetenceProfil>,
}

/// Classement d'une compétence à partir des validations de l'élève.
///
/// Seuils hérités du suivi historique: maîtrisé à partir de 12 points
/// cumulés avec une moyenne d'au moins 3, en cours à partir de 8 points
/// avec une moyenne d'au moins 2.
pub fn statut_competence(nb_validations: i64, total_niveaux: i64) -> (&'static str, &'static str) {
    if nb_validations == 0 {
        return ("Non évalué", "status-not-evaluated");
    }
    let moyenne = total_niveaux as f64 / nb_validations as f64;
    if total_niveaux >= 12 && moyenne >= 3.0 {
        ("Maîtrisé", "status-mastered")
    } else if total_niveaux >= 8 && moyenne >= 2.0 {
        ("En cours", "status-in-progress")
    } else {
        ("À travailler", "status-to-work")
    }
}

/// Moyenne arrondie à deux décimales, 0.0 sans validation.
pub fn niveau_moyen(nb_validations: i64, total_niveaux: i64) -> f64 {
    if nb_validations == 0 {
        return 0.0;
    }
    let moyenne = total_niveaux as f64 / nb_validations as f64;
    (moyenne * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sans_validation_non_evalue() {
        assert_eq!(
            statut_competence(0, 0),
            ("Non évalué", "status-not-evaluated")
        );
    }

    #[test]
    fn maitrise_exige_somme_et_moyenne() {
        // 4 validations à 3: somme 12, moyenne 3.0
        assert_eq!(statut_competence(4, 12), ("Maîtrisé", "status-mastered"));
        // somme 12 mais moyenne 2.4: retombe sur "En cours"
        assert_eq!(statut_competence(5, 12), ("En cours", "status-in-progress"));
    }

    #[test]
    fn en_cours_exige_somme_et_moyenne() {
        assert_eq!(statut_competence(4, 8), ("En cours", "status-in-progress"));
        // somme 8 mais moyenne < 2
        assert_eq!(
            statut_competence(5, 8),
            ("À travailler", "status-to-work")
        );
    }

    #[test]
    fn faible_volume_a_travailler() {
        assert_eq!(
            statut_competence(2, 7),
            ("À travailler", "status-to-work")
        );
    }

    #[test]
    fn moyenne_arrondie() {
        assert_eq!(niveau_moyen(0, 0), 0.0);
        assert_eq!(niveau_moyen(3, 10), 3.33);
        assert_eq!(niveau_moyen(4, 10), 2.5);
    }
}
