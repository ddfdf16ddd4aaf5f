use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::models::utilisateurs::requests::{CreateUtilisateurRequest, UpdateUtilisateurRequest};
use crate::services::UtilisateurService;
use crate::utils::SafeIDI64;

static UTILISATEUR_SERVICE: Lazy<UtilisateurService> = Lazy::new(UtilisateurService::new_lazy);

pub async fn list_utilisateurs(req: HttpRequest) -> ActixResult<HttpResponse> {
    UTILISATEUR_SERVICE.list_utilisateurs(&req).await
}

pub async fn create_utilisateur(
    req: HttpRequest,
    data: web::Json<CreateUtilisateurRequest>,
) -> ActixResult<HttpResponse> {
    UTILISATEUR_SERVICE
        .create_utilisateur(data.into_inner(), &req)
        .await
}

pub async fn update_utilisateur(
    req: HttpRequest,
    utilisateur_id: SafeIDI64,
    data: web::Json<UpdateUtilisateurRequest>,
) -> ActixResult<HttpResponse> {
    UTILISATEUR_SERVICE
        .update_utilisateur(utilisateur_id.0, data.into_inner(), &req)
        .await
}

pub async fn delete_utilisateur(
    req: HttpRequest,
    utilisateur_id: SafeIDI64,
) -> ActixResult<HttpResponse> {
    UTILISATEUR_SERVICE
        .delete_utilisateur(utilisateur_id.0, &req)
        .await
}

pub async fn import_excel(
    req: HttpRequest,
    payload: actix_multipart::Multipart,
) -> ActixResult<HttpResponse> {
    UTILISATEUR_SERVICE.import_excel(payload, &req).await
}

// Chemins complets plutôt qu'un scope: plusieurs modules partagent le
// préfixe /api et un scope actix ne laisse pas passer les routes qu'il ne
// connaît pas.
pub fn configure_utilisateur_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/api/utilisateurs", web::get().to(list_utilisateurs))
        .route("/api/utilisateurs", web::post().to(create_utilisateur))
        .route(
            "/api/utilisateurs/import-excel",
            web::post().to(import_excel),
        )
        .route("/api/utilisateurs/{id}", web::put().to(update_utilisateur))
        .route(
            "/api/utilisateurs/{id}",
            web::delete().to(delete_utilisateur),
        );
}
