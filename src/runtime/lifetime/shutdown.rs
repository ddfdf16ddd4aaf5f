use tokio::signal;
use tracing::warn;

pub async fn listen_for_shutdown() {
    signal::ctrl_c().await.expect("Failed to listen for Ctrl+C");
    warn!("Signal d'arrêt reçu, arrêt en douceur...");
}
