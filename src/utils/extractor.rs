/// Déclare un extracteur de paramètre de chemin i64 qui répond 400 avec
/// l'enveloppe standard au lieu du 404 par défaut d'actix.
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:expr) => {
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = std::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok());
                std::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => Err(actix_web::error::InternalError::from_response(
                        "invalid path parameter",
                        actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::error_empty(
                                $crate::models::ErrorCode::BadRequest,
                                format!("Paramètre '{}' invalide", $param),
                            ),
                        ),
                    )
                    .into()),
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeIDI64, "id");
