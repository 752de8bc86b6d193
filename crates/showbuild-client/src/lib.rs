//! HTTP client for the show API.
//!
//! [`ApiClient`] implements the engine's remote collaborators:
//!
//! | trait | endpoints |
//! |---|---|
//! | `RemoteColorStore` | `GET /settings/colors?profile=`, `POST /settings/colors` |
//! | `LoginClient` | `POST /auth/login` |
//! | `RundownRepository` | `GET /episodes/{ep}/rundown`, `POST /episodes/rundown/{ep}/reorder` |
//!
//! Every failure reaches the engine as a transport failure.

pub mod auth;
pub mod client;
pub mod colors;
pub mod error;
pub mod rundown;

pub use client::ApiClient;
pub use error::{ClientError, Result};

#[cfg(test)]
pub(crate) mod test_support {
    use axum::Router;

    use crate::ApiClient;

    /// Serves `app` on an ephemeral local port and returns a client for it.
    pub async fn serve(app: Router) -> ApiClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        ApiClient::parse(&format!("http://{}", addr)).unwrap()
    }
}
