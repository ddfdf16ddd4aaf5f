pub mod evaluations;
pub mod profil;
pub mod referentiel;
pub mod utilisateurs;
pub mod validations;

pub use evaluations::EvaluationService;
pub use profil::ProfilService;
pub use referentiel::ReferentielService;
pub use utilisateurs::UtilisateurService;
pub use validations::ValidationService;
