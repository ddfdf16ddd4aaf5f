use crate::storage::Storage;
use std::sync::Arc;
use tracing::{debug, info, warn};

pub struct StartupContext {
    pub storage: Arc<dyn Storage>,
}

/// Insère le référentiel Bac Pro CIEL si la base est vierge. Une base déjà
/// peuplée n'est jamais retouchée.
async fn seed_referentiel(storage: &Arc<dyn Storage>) {
    match storage.count_competences().await {
        Ok(count) if count > 0 => {
            debug!("Référentiel déjà présent ({count} compétences), seed ignoré");
            return;
        }
        Ok(_) => {
            info!("Base vierge: insertion du référentiel Bac Pro CIEL...");
        }
        Err(e) => {
            warn!("Comptage des compétences échoué: {e}, seed ignoré");
            return;
        }
    }

    match storage.seed_referentiel().await {
        Ok(()) => info!("Référentiel inséré"),
        Err(e) => warn!("Insertion du référentiel échouée: {e}"),
    }
}

/// Prépare le contexte du serveur: stockage, migrations, seed.
pub async fn prepare_server_startup() -> StartupContext {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    let storage = crate::storage::create_storage()
        .await
        .expect("Failed to create storage backend");
    warn!("Stockage initialisé, migrations appliquées");

    seed_referentiel(&storage).await;

    StartupContext { storage }
}
