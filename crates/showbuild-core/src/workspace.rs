//! Top-level editing context.
//!
//! A [`Workspace`] ties the rundown session, the color engine and the auth
//! session together and gates the mutating operations that reach remote
//! collaborators behind a valid session.

use std::sync::Arc;

use showbuild_persistence::LocalStore;
use tracing::debug;

use crate::auth::AuthSession;
use crate::colors::ColorEngine;
use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::notify::{FlashColor, Notifier};
use crate::remote::{RemoteColorStore, RundownRepository};
use crate::rundown::{RundownSession, SaveOutcome};

const SESSION_EXPIRED: &str = "Your session has expired. Please log in again.";

pub struct Workspace {
    rundown: RundownSession,
    colors: ColorEngine,
    auth: AuthSession,
    notifier: Arc<dyn Notifier>,
}

impl Workspace {
    pub fn new(
        rundown: RundownSession,
        colors: ColorEngine,
        auth: AuthSession,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            rundown,
            colors,
            auth,
            notifier,
        }
    }

    /// Builds a workspace from configuration, restoring any stored session.
    pub fn open(
        config: &Config,
        store: Arc<dyn LocalStore>,
        remote_colors: Arc<dyn RemoteColorStore>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        let colors = ColorEngine::new(Arc::clone(&store), remote_colors)
            .with_profile_id(config.color_profile.clone());
        let mut auth = AuthSession::new(store).with_token_ttl(config.token_ttl());
        let restored = auth.check_auth_status();
        debug!(restored, "Workspace opened");

        Self::new(RundownSession::new(), colors, auth, notifier)
    }

    pub fn rundown(&self) -> &RundownSession {
        &self.rundown
    }

    pub fn rundown_mut(&mut self) -> &mut RundownSession {
        &mut self.rundown
    }

    pub fn colors(&self) -> &ColorEngine {
        &self.colors
    }

    pub fn colors_mut(&mut self) -> &mut ColorEngine {
        &mut self.colors
    }

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    pub fn auth_mut(&mut self) -> &mut AuthSession {
        &mut self.auth
    }

    pub fn notifier(&self) -> &Arc<dyn Notifier> {
        &self.notifier
    }

    fn require_auth(&mut self) -> Result<()> {
        if self.auth.check_auth_status() {
            Ok(())
        } else {
            self.notifier.flash(SESSION_EXPIRED, FlashColor::Error);
            Err(CoreError::NotAuthenticated)
        }
    }

    /// Saves the rundown if the session is valid.
    pub async fn save_rundown(&mut self, repo: &dyn RundownRepository) -> Result<SaveOutcome> {
        self.require_auth()?;

        let outcome = self.rundown.save(repo).await;
        if outcome == SaveOutcome::Failed {
            self.notifier
                .flash("Failed to save rundown changes", FlashColor::Error);
        }
        Ok(outcome)
    }

    /// Updates a color if the session is valid.
    pub fn update_color(&mut self, key: &str, token: &str) -> Result<()> {
        self.require_auth()?;
        self.colors.update(key, token)
    }

    /// Hex color of the item at `index`, by item type.
    pub fn item_color(&self, index: usize) -> Option<String> {
        self.rundown
            .items()
            .get(index)
            .map(|item| self.colors.hex(item.item_type.as_str()))
    }

    /// Hex script color of the item at `index`, by status.
    pub fn item_status_color(&self, index: usize) -> Option<String> {
        self.rundown.items().get(index).map(|item| {
            crate::colors::to_hex(&self.colors.resolve_status(item.status))
        })
    }
}
