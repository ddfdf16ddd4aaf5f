use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ProfilService;
use crate::utils::SafeIDI64;

static PROFIL_SERVICE: Lazy<ProfilService> = Lazy::new(ProfilService::new_lazy);

pub async fn get_profil(req: HttpRequest, utilisateur_id: SafeIDI64) -> ActixResult<HttpResponse> {
    PROFIL_SERVICE.get_profil(utilisateur_id.0, &req).await
}

pub fn configure_profil_routes(cfg: &mut web::ServiceConfig) {
    // chemin historique au singulier
    cfg.route("/api/utilisateur/{id}/profil", web::get().to(get_profil));
}
