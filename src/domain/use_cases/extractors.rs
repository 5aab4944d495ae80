use actix_web::{http::header::AUTHORIZATION, web, FromRequest, HttpRequest};
use futures_util::future::{ready, Ready};

use crate::{auth::basic::BasicCredentials, errors::AuthError, AppState};

/// Proof that the request carried the configured write credentials.
/// Returns 401 when credentials are absent or wrong.
/// Usage: Add `_access: WriteAccess` as a parameter to a write handler.
#[derive(Debug)]
pub struct WriteAccess;

impl FromRequest for WriteAccess {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let Some(state) = req.app_data::<web::Data<AppState>>() else {
            tracing::error!("AppState missing while checking credentials");
            return ready(Err(AuthError::GateUnavailable.into()));
        };

        let credentials = req.headers()
            .get(AUTHORIZATION)
            .and_then(|header| header.to_str().ok())
            .and_then(BasicCredentials::from_header);

        match state.credential_gate.authenticate(credentials.as_ref()) {
            Ok(()) => ready(Ok(WriteAccess)),
            Err(e) => {
                tracing::warn!(path = %req.path(), reason = %e, "Rejected write attempt");
                ready(Err(e.into()))
            }
        }
    }
}
