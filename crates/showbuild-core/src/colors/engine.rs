//! Color resolution against layered profiles.
//!
//! Precedence, highest first: the in-memory profile (seeded from the local
//! cache or a remote load), the compiled defaults, the neutral token.

use std::sync::Arc;

use showbuild_models::{ColorProfile, ItemStatus};
use showbuild_persistence::{keys, LocalStore};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use super::defaults::{default_profile, status_key, NEUTRAL_TOKEN};
use super::palette;
use crate::error::{CoreError, Result};
use crate::remote::RemoteColorStore;

/// Profile id used until another one is loaded.
pub const DEFAULT_PROFILE_ID: &str = "default";

/// Resolves semantic keys to color tokens and keeps the profile in sync with
/// the local cache and the remote store.
pub struct ColorEngine {
    store: Arc<dyn LocalStore>,
    remote: Arc<dyn RemoteColorStore>,
    profile_id: String,
    defaults: ColorProfile,
    profile: ColorProfile,
    /// Set by the first successful remote load, never reset.
    loaded_from_remote: bool,
    pending_pushes: Vec<JoinHandle<()>>,
}

impl ColorEngine {
    /// Creates an engine seeded from the local cache.
    ///
    /// A missing or unreadable cache falls back to the compiled defaults.
    pub fn new(store: Arc<dyn LocalStore>, remote: Arc<dyn RemoteColorStore>) -> Self {
        let defaults = default_profile();
        let profile = cached_profile(store.as_ref(), &defaults);
        Self {
            store,
            remote,
            profile_id: DEFAULT_PROFILE_ID.to_string(),
            defaults,
            profile,
            loaded_from_remote: false,
            pending_pushes: Vec::new(),
        }
    }

    /// Sets the remote profile pushed to by updates.
    pub fn with_profile_id(mut self, profile_id: impl Into<String>) -> Self {
        self.profile_id = profile_id.into();
        self
    }

    pub fn profile_id(&self) -> &str {
        &self.profile_id
    }

    /// The in-memory profile.
    pub fn profile(&self) -> &ColorProfile {
        &self.profile
    }

    pub fn defaults(&self) -> &ColorProfile {
        &self.defaults
    }

    /// True once a remote load has succeeded.
    pub fn loaded_from_remote(&self) -> bool {
        self.loaded_from_remote
    }

    /// Resolves a key to a color token. Never empty.
    pub fn resolve(&self, key: &str) -> String {
        if key.trim().is_empty() {
            return NEUTRAL_TOKEN.to_string();
        }
        self.profile
            .get(key)
            .or_else(|| self.defaults.get(key))
            .unwrap_or(NEUTRAL_TOKEN)
            .to_string()
    }

    /// Resolves the script color of a status.
    pub fn resolve_status(&self, status: ItemStatus) -> String {
        self.resolve(&status_key(status))
    }

    /// Resolves a key all the way to a hex color.
    pub fn hex(&self, key: &str) -> String {
        palette::to_hex(&self.resolve(key))
    }

    /// Every known key mapped to its resolved token.
    pub fn resolved_map(&self) -> ColorProfile {
        self.defaults
            .keys()
            .chain(self.profile.keys())
            .filter(|key| !key.is_empty())
            .map(|key| (key, self.resolve(key)))
            .collect()
    }

    /// Sets the token of a key.
    ///
    /// The profile is cached locally and pushed to the remote store in the
    /// background. Neither failure is surfaced; only empty input is rejected.
    pub fn update(&mut self, key: &str, token: &str) -> Result<()> {
        let (key, token) = (key.trim(), token.trim());
        if key.is_empty() {
            return Err(CoreError::invalid("Color key is required"));
        }
        if token.is_empty() {
            return Err(CoreError::invalid("Color token is required"));
        }

        self.profile.insert(key, token);
        debug!(key, token, "Color updated");
        self.persist();
        self.push_remote();
        Ok(())
    }

    /// Restores the compiled defaults.
    pub fn reset(&mut self) {
        self.profile = self.defaults.clone();
        info!("Color profile reset to defaults");
        self.persist();
        self.push_remote();
    }

    /// Loads a profile from the remote store.
    ///
    /// On success the remote colors, overlaid on the defaults, replace the
    /// in-memory profile and the local cache. On failure the local cache is
    /// used if no remote load has succeeded yet; otherwise the in-memory
    /// profile is kept. Returns the resulting profile.
    pub async fn load_remote_profile(&mut self, profile_id: &str) -> ColorProfile {
        self.profile_id = profile_id.to_string();

        match self.remote.fetch_profile(profile_id).await {
            Ok(remote) => {
                self.profile = self.defaults.merged_with(&remote);
                self.loaded_from_remote = true;
                info!(profile = profile_id, colors = remote.len(), "Loaded remote color profile");
                self.persist();
            }
            Err(e) if self.loaded_from_remote => {
                warn!(profile = profile_id, error = %e, "Remote color load failed, keeping current profile");
            }
            Err(e) => {
                warn!(profile = profile_id, error = %e, "Remote color load failed, using local cache");
                self.profile = cached_profile(self.store.as_ref(), &self.defaults);
            }
        }

        self.profile.clone()
    }

    /// Waits for background pushes started by earlier updates.
    pub async fn wait_for_sync(&mut self) {
        for handle in self.pending_pushes.drain(..) {
            if let Err(e) = handle.await {
                warn!(error = %e, "Color push task failed");
            }
        }
    }

    fn persist(&self) {
        let result = serde_json::to_string(&self.profile)
            .map_err(CoreError::from)
            .and_then(|json| {
                self.store
                    .set(keys::COLOR_MAP, &json)
                    .map_err(CoreError::from)
            });
        if let Err(e) = result {
            warn!(error = %e, "Failed to cache color profile");
        }
    }

    fn push_remote(&mut self) {
        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            debug!("No async runtime, skipping remote color push");
            return;
        };

        let remote = Arc::clone(&self.remote);
        let profile_id = self.profile_id.clone();
        let snapshot = self.profile.clone();

        self.pending_pushes.retain(|task| !task.is_finished());
        self.pending_pushes.push(handle.spawn(async move {
            match remote.push_profile(&profile_id, &snapshot).await {
                Ok(()) => debug!(profile = %profile_id, "Pushed color profile"),
                Err(e) => warn!(profile = %profile_id, error = %e, "Failed to push color profile"),
            }
        }));
    }
}

fn cached_profile(store: &dyn LocalStore, defaults: &ColorProfile) -> ColorProfile {
    match store.get(keys::COLOR_MAP) {
        Ok(Some(json)) => match serde_json::from_str::<ColorProfile>(&json) {
            Ok(cached) => cached,
            Err(e) => {
                warn!(error = %e, "Malformed cached color profile, using defaults");
                defaults.clone()
            }
        },
        Ok(None) => defaults.clone(),
        Err(e) => {
            warn!(error = %e, "Failed to read cached color profile, using defaults");
            defaults.clone()
        }
    }
}
