//! Color profile endpoints.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use showbuild_core::RemoteColorStore;
use showbuild_models::ColorProfile;
use tracing::debug;

use crate::client::ApiClient;
use crate::error::ClientError;

/// Body of `GET /settings/colors`.
#[derive(Debug, Deserialize)]
struct ColorsResponse {
    success: Option<bool>,
    #[serde(default)]
    colors: ColorProfile,
    message: Option<String>,
}

/// Body of `POST /settings/colors`.
#[derive(Debug, Serialize)]
struct SaveColorsRequest<'a> {
    colors: &'a ColorProfile,
    profile: &'a str,
}

/// Acknowledgement returned by write endpoints.
#[derive(Debug, Deserialize)]
pub(crate) struct Ack {
    pub success: Option<bool>,
    pub message: Option<String>,
}

impl Ack {
    /// Turns an explicit `success: false` into an error.
    pub(crate) fn check(ack: Option<Ack>) -> Result<(), ClientError> {
        match ack {
            Some(Ack {
                success: Some(false),
                message,
            }) => Err(ClientError::Rejected(
                message.unwrap_or_else(|| "no reason given".to_string()),
            )),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl RemoteColorStore for ApiClient {
    async fn fetch_profile(&self, profile_id: &str) -> showbuild_core::Result<ColorProfile> {
        let url = self.endpoint(&["settings", "colors"])?;
        let response: ColorsResponse = self.get_json(url, &[("profile", profile_id)]).await?;

        if response.success == Some(false) {
            let reason = response
                .message
                .unwrap_or_else(|| format!("profile {} unavailable", profile_id));
            return Err(ClientError::Rejected(reason).into());
        }

        debug!(profile = profile_id, colors = response.colors.len(), "Fetched color profile");
        Ok(response.colors)
    }

    async fn push_profile(&self, profile_id: &str, profile: &ColorProfile) -> showbuild_core::Result<()> {
        let url = self.endpoint(&["settings", "colors"])?;
        let body = SaveColorsRequest {
            colors: profile,
            profile: profile_id,
        };
        let ack: Option<Ack> = self.post_json(url, &body).await?;
        Ack::check(ack)?;

        debug!(profile = profile_id, colors = profile.len(), "Pushed color profile");
        Ok(())
    }
}
