//! Site session state machine
//!
//! States are `view x auth`. Navigation changes the view; a decoded
//! credential moves the session from anonymous to authenticated. There is no
//! transition back to anonymous.

use super::credential::{DecodeError, UserProfile, decode_credential};
use super::view::ViewName;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Anonymous,
    Authenticated(UserProfile),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SiteSession {
    view: ViewName,
    auth: AuthState,
}

impl SiteSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> ViewName {
        self.view
    }

    pub fn auth(&self) -> &AuthState {
        &self.auth
    }

    pub fn user(&self) -> Option<&UserProfile> {
        match &self.auth {
            AuthState::Authenticated(user) => Some(user),
            AuthState::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self.auth, AuthState::Authenticated(_))
    }

    /// Switch the active view. Returns whether it changed.
    pub fn navigate(&mut self, view: ViewName) -> bool {
        let changed = self.view != view;
        self.view = view;
        changed
    }

    /// Decode `token` and sign in with its claims.
    ///
    /// On failure the session is left untouched. A later credential
    /// replaces the profile of an already authenticated session.
    pub fn receive_credential(&mut self, token: &str) -> Result<(), DecodeError> {
        let profile = decode_credential(token)?;
        self.auth = AuthState::Authenticated(profile);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let session = SiteSession::new();
        assert_eq!(session.view(), ViewName::Home);
        assert_eq!(session.auth(), &AuthState::Anonymous);
        assert!(session.user().is_none());
    }

    #[test]
    fn test_navigate_last_call_wins() {
        let mut session = SiteSession::new();
        assert!(session.navigate(ViewName::Technology));
        assert!(session.navigate(ViewName::Home));
        assert_eq!(session.view(), ViewName::Home);
    }

    #[test]
    fn test_navigate_to_same_view_reports_no_change() {
        let mut session = SiteSession::new();
        assert!(!session.navigate(ViewName::Home));
    }

    #[test]
    fn test_bad_credential_keeps_anonymous() {
        let mut session = SiteSession::new();
        assert!(session.receive_credential("garbage").is_err());
        assert!(!session.is_authenticated());
    }
}
