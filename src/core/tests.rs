#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use base64::Engine;
    use base64::engine::general_purpose::URL_SAFE_NO_PAD;

    use crate::core::{
        AuthState, CredentialHandler, GetStarted, IdentityProvider, NavState, PollOutcome,
        ProviderBootstrap, ProviderConfig, Section, SiteSession, ViewName, resets_scroll,
    };

    fn token(claims: &str) -> String {
        format!(
            "eyJhbGciOiJSUzI1NiIsInR5cCI6IkpXVCJ9.{}.sig",
            URL_SAFE_NO_PAD.encode(claims)
        )
    }

    /// SDK stand-in that stores the installed handler so a test can fire it
    #[derive(Default)]
    struct ScriptedSdk {
        loaded: Cell<bool>,
        init_calls: Cell<usize>,
        prompts: Cell<usize>,
        handler: RefCell<Option<CredentialHandler>>,
    }

    impl ScriptedSdk {
        fn sign_in(&self, credential: &str) {
            if let Some(handler) = self.handler.borrow().as_ref() {
                handler(credential.to_string());
            }
        }
    }

    impl IdentityProvider for ScriptedSdk {
        fn is_ready(&self) -> bool {
            self.loaded.get()
        }

        fn initialize(&self, _config: &ProviderConfig, on_credential: CredentialHandler) {
            self.init_calls.set(self.init_calls.get() + 1);
            *self.handler.borrow_mut() = Some(on_credential);
        }

        fn prompt(&self) {
            self.prompts.set(self.prompts.get() + 1);
        }
    }

    fn wired_session() -> (Rc<RefCell<SiteSession>>, ProviderBootstrap) {
        let session = Rc::new(RefCell::new(SiteSession::new()));
        let sink = Rc::clone(&session);
        let handler: CredentialHandler = Rc::new(move |credential| {
            let _ = sink.borrow_mut().receive_credential(&credential);
        });
        (session, ProviderBootstrap::new(ProviderConfig::default(), handler))
    }

    // ========================================================================
    // Session driven through the identity provider
    // ========================================================================

    #[test]
    fn test_sign_in_after_late_sdk_load() {
        let sdk = ScriptedSdk::default();
        let (session, mut bootstrap) = wired_session();

        assert_eq!(bootstrap.poll(&sdk), PollOutcome::Waiting);
        assert_eq!(bootstrap.poll(&sdk), PollOutcome::Waiting);
        sdk.loaded.set(true);
        assert_eq!(bootstrap.poll(&sdk), PollOutcome::Initialized);

        sdk.sign_in(&token(
            r#"{"name":"Kari Nordmann","given_name":"Kari","email":"kari@example.no"}"#,
        ));

        let session = session.borrow();
        assert!(session.is_authenticated());
        assert_eq!(session.user().map(|u| u.short_name()), Some("Kari"));
    }

    #[test]
    fn test_bad_credential_from_sdk_keeps_anonymous() {
        let sdk = ScriptedSdk::default();
        sdk.loaded.set(true);
        let (session, mut bootstrap) = wired_session();
        bootstrap.poll(&sdk);

        sdk.sign_in("only-one-segment");

        assert_eq!(session.borrow().auth(), &AuthState::Anonymous);
    }

    #[test]
    fn test_later_credential_replaces_profile() {
        let sdk = ScriptedSdk::default();
        sdk.loaded.set(true);
        let (session, mut bootstrap) = wired_session();
        bootstrap.poll(&sdk);

        sdk.sign_in(&token(r#"{"name":"Ola"}"#));
        sdk.sign_in(&token(r#"{"name":"Kari"}"#));

        assert_eq!(
            session.borrow().user().and_then(|u| u.name.as_deref()),
            Some("Kari")
        );
    }

    #[test]
    fn test_sdk_initialized_once_over_many_ticks() {
        let sdk = ScriptedSdk::default();
        sdk.loaded.set(true);
        let (_session, mut bootstrap) = wired_session();

        let ticks = (0..10).take_while(|_| !bootstrap.poll(&sdk).is_done()).count();

        assert_eq!(ticks, 0);
        bootstrap.poll(&sdk);
        assert_eq!(sdk.init_calls.get(), 1);
    }

    // ========================================================================
    // Navigation and view composition
    // ========================================================================

    #[test]
    fn test_get_started_follows_auth_state() {
        let mut session = SiteSession::new();
        assert_eq!(
            GetStarted::for_user(session.is_authenticated()),
            GetStarted::PromptLogin
        );

        session
            .receive_credential(&token(r#"{"name":"Ola"}"#))
            .unwrap();
        assert_eq!(
            GetStarted::for_user(session.is_authenticated()),
            GetStarted::ScrollToPricing
        );
    }

    #[test]
    fn test_navigation_keeps_auth() {
        let mut session = SiteSession::new();
        session
            .receive_credential(&token(r#"{"name":"Ola"}"#))
            .unwrap();

        session.navigate(ViewName::Technology);
        session.navigate(ViewName::DeepDive);

        assert_eq!(session.view(), ViewName::DeepDive);
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_each_view_switch_resets_scroll() {
        let mut session = SiteSession::new();
        let mut shown = session.view();

        for target in [ViewName::Technology, ViewName::Home, ViewName::Home] {
            let changed = session.navigate(target);
            assert_eq!(resets_scroll(Some(shown), session.view()), changed);
            shown = session.view();
        }
        assert_eq!(shown, ViewName::Home);
    }

    #[test]
    fn test_navigating_closes_mobile_menu() {
        let mut nav = NavState::default();
        let mut session = SiteSession::new();
        nav.toggle_menu();

        session.navigate(ViewName::Technology);
        nav.close_menu();

        assert!(!nav.mobile_menu_open);
        assert_eq!(session.view().sections().first(), Some(&Section::TechnologyHero));
    }

    #[test]
    fn test_pricing_anchor_only_on_views_with_pricing() {
        let with_pricing: Vec<_> = ViewName::ALL
            .into_iter()
            .filter(|v| v.sections().iter().any(|s| matches!(s, Section::Pricing(_))))
            .collect();
        assert_eq!(with_pricing, vec![ViewName::Home, ViewName::DeepDive]);
    }
}
