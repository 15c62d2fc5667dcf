//! Auth collaborator capability injected into the store.
//!
//! The explorer does not validate, refresh or store tokens. It only needs to
//! know whether a credential exists (to attach it to requests and to skip the
//! map-mode prompt) and a way to ask for the login prompt.

use super::modes::LoginOptions;

/// Capability object provided by the host's auth layer.
pub trait AuthSession {
    /// Opaque credential of the logged-in session, if any.
    fn credential(&self) -> Option<&str>;

    /// Shows the login prompt. The host later reports `LoginCompleted` or
    /// `LoginSkipped` back to the store.
    fn require_login(&mut self, options: LoginOptions);
}

/// Session that never holds a credential and ignores prompts.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnonymousSession;

impl AuthSession for AnonymousSession {
    fn credential(&self) -> Option<&str> {
        None
    }

    fn require_login(&mut self, options: LoginOptions) {
        tracing::debug!(?options, "login prompt requested on anonymous session");
    }
}

/// Session holding a fixed credential, e.g. one restored by the host.
#[derive(Debug, Clone, Default)]
pub struct StaticSession {
    credential: Option<String>,
    prompts: usize,
}

impl StaticSession {
    #[must_use]
    pub fn new(credential: Option<String>) -> Self {
        Self {
            credential,
            prompts: 0,
        }
    }

    pub fn set_credential(&mut self, credential: Option<String>) {
        self.credential = credential;
    }

    /// Number of login prompts requested so far.
    #[must_use]
    pub const fn prompts(&self) -> usize {
        self.prompts
    }
}

impl AuthSession for StaticSession {
    fn credential(&self) -> Option<&str> {
        self.credential.as_deref()
    }

    fn require_login(&mut self, options: LoginOptions) {
        self.prompts += 1;
        tracing::debug!(?options, prompts = self.prompts, "login prompt requested");
    }
}
