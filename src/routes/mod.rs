pub mod evaluations;

pub mod profil;

pub mod referentiel;

pub mod system;

pub mod utilisateurs;

pub mod validations;

pub use evaluations::configure_evaluation_routes;
pub use profil::configure_profil_routes;
pub use referentiel::configure_referentiel_routes;
pub use system::configure_system_routes;
pub use utilisateurs::configure_utilisateur_routes;
pub use validations::configure_validation_routes;
