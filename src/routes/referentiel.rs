use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::services::ReferentielService;

static REFERENTIEL_SERVICE: Lazy<ReferentielService> = Lazy::new(ReferentielService::new_lazy);

pub async fn list_competences(req: HttpRequest) -> ActixResult<HttpResponse> {
    REFERENTIEL_SERVICE.list_competences(&req).await
}

pub async fn list_items(req: HttpRequest) -> ActixResult<HttpResponse> {
    REFERENTIEL_SERVICE.list_items(&req).await
}

pub fn configure_referentiel_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/competences", web::get().to(list_competences))
        .route("/api/items", web::get().to(list_items));
}
