//! Session gate: a two-state machine over a pluggable credential check.
//!
//! The session is an explicit value owned by the shell, never process-global
//! state, so concurrent sessions (if ever added) cannot share auth state.

use std::collections::BTreeMap;

use tracing::{info, warn};

/// Verifies a submitted username/password pair.
///
/// The default implementation is a plain-text table lookup; a hashing
/// scheme can be substituted here without touching the state machine.
pub trait CredentialVerifier {
    fn verify(&self, username: &str, password: &str) -> bool;
}

/// Static username → password table with exact, case-sensitive comparison.
#[derive(Debug, Clone, Default)]
pub struct StaticCredentials {
    users: BTreeMap<String, String>,
}

impl StaticCredentials {
    pub fn new(users: BTreeMap<String, String>) -> Self {
        Self { users }
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, username: &str, password: &str) -> bool {
        self.users
            .get(username)
            .map_or(false, |expected| expected == password)
    }
}

/// Authentication state for one interactive session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Unauthenticated,
    Authenticated,
}

/// Session-scoped auth gate. Starts unauthenticated; `login` is the only
/// way in, `logout` the only way back out. No lockout, no expiry.
pub struct Session<V: CredentialVerifier> {
    verifier: V,
    state: SessionState,
    username: Option<String>,
}

impl<V: CredentialVerifier> Session<V> {
    pub fn new(verifier: V) -> Self {
        Self {
            verifier,
            state: SessionState::Unauthenticated,
            username: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_authenticated(&self) -> bool {
        self.state == SessionState::Authenticated
    }

    /// The logged-in username, while authenticated.
    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    /// Attempts a login. On failure the state is left unchanged.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        if self.verifier.verify(username, password) {
            self.state = SessionState::Authenticated;
            self.username = Some(username.to_string());
            info!(user = username, "login accepted");
            true
        } else {
            warn!(user = username, "login rejected");
            false
        }
    }

    pub fn logout(&mut self) {
        self.state = SessionState::Unauthenticated;
        self.username = None;
    }
}
