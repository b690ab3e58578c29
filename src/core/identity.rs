//! External identity provider bootstrap
//!
//! The Google Identity Services script is loaded asynchronously, so the
//! client may run before the SDK exists. `ProviderBootstrap` is polled until
//! the provider reports ready and configures it exactly once.

use std::rc::Rc;

use serde::{Deserialize, Serialize};

/// OAuth client id registered for the site
pub const GOOGLE_CLIENT_ID: &str =
    "159375233128-ahkl8qs8sqanm20e6nph6l86a76ipm3a.apps.googleusercontent.com";

/// Script that installs `google.accounts.id`
pub const GOOGLE_SDK_URL: &str = "https://accounts.google.com/gsi/client";

/// Meta tag carrying the client id from server to client
pub const CLIENT_ID_META: &str = "google-signin-client_id";

/// How often to check whether the SDK has loaded
pub const SDK_POLL_INTERVAL_MS: u32 = 300;

/// Callback invoked with the raw credential string
pub type CredentialHandler = Rc<dyn Fn(String)>;

/// Options passed to `google.accounts.id.initialize`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProviderConfig {
    pub client_id: String,
    pub auto_select: bool,
    pub use_fedcm_for_prompt: bool,
    pub cancel_on_tap_outside: bool,
}

impl ProviderConfig {
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            auto_select: false,
            use_fedcm_for_prompt: false,
            cancel_on_tap_outside: true,
        }
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(GOOGLE_CLIENT_ID)
    }
}

/// Boundary to the externally loaded identity SDK
pub trait IdentityProvider {
    /// Whether the SDK global is available
    fn is_ready(&self) -> bool;

    /// Configure the SDK; `on_credential` receives every credential it issues
    fn initialize(&self, config: &ProviderConfig, on_credential: CredentialHandler);

    /// Show the sign-in prompt
    fn prompt(&self);
}

/// Result of one bootstrap attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollOutcome {
    /// SDK was ready and has now been configured
    Initialized,
    /// SDK not loaded yet, try again later
    Waiting,
    /// Configuration already happened on an earlier attempt
    AlreadyInitialized,
}

impl PollOutcome {
    /// Whether polling should stop
    pub fn is_done(&self) -> bool {
        !matches!(self, PollOutcome::Waiting)
    }
}

/// Drives one-time provider configuration across poll ticks
pub struct ProviderBootstrap {
    config: ProviderConfig,
    on_credential: CredentialHandler,
    initialized: bool,
}

impl ProviderBootstrap {
    pub fn new(config: ProviderConfig, on_credential: CredentialHandler) -> Self {
        Self {
            config,
            on_credential,
            initialized: false,
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Configure `provider` if it is ready and has not been configured yet
    pub fn poll<P: IdentityProvider + ?Sized>(&mut self, provider: &P) -> PollOutcome {
        if self.initialized {
            return PollOutcome::AlreadyInitialized;
        }
        if !provider.is_ready() {
            return PollOutcome::Waiting;
        }
        provider.initialize(&self.config, Rc::clone(&self.on_credential));
        self.initialized = true;
        PollOutcome::Initialized
    }
}

/// Show the sign-in prompt if the SDK is available. Returns whether it was shown.
pub fn trigger_prompt<P: IdentityProvider + ?Sized>(provider: &P) -> bool {
    if provider.is_ready() {
        provider.prompt();
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    /// Provider that becomes ready after a number of readiness checks
    #[derive(Default)]
    struct FakeProvider {
        ready_after: usize,
        checks: Cell<usize>,
        init_calls: Cell<usize>,
        prompt_calls: Cell<usize>,
        last_config: RefCell<Option<ProviderConfig>>,
        handler: RefCell<Option<CredentialHandler>>,
    }

    impl FakeProvider {
        fn ready_after(checks: usize) -> Self {
            Self {
                ready_after: checks,
                ..Default::default()
            }
        }
    }

    impl IdentityProvider for FakeProvider {
        fn is_ready(&self) -> bool {
            let n = self.checks.get() + 1;
            self.checks.set(n);
            n > self.ready_after
        }

        fn initialize(&self, config: &ProviderConfig, on_credential: CredentialHandler) {
            self.init_calls.set(self.init_calls.get() + 1);
            *self.last_config.borrow_mut() = Some(config.clone());
            *self.handler.borrow_mut() = Some(on_credential);
        }

        fn prompt(&self) {
            self.prompt_calls.set(self.prompt_calls.get() + 1);
        }
    }

    fn noop_handler() -> CredentialHandler {
        Rc::new(|_| {})
    }

    #[test]
    fn test_default_config_flags() {
        let config = ProviderConfig::default();
        assert_eq!(config.client_id, GOOGLE_CLIENT_ID);
        assert!(!config.auto_select);
        assert!(!config.use_fedcm_for_prompt);
        assert!(config.cancel_on_tap_outside);
    }

    #[test]
    fn test_config_serializes_with_sdk_field_names() {
        let json = serde_json::to_value(ProviderConfig::new("abc")).unwrap();
        assert_eq!(json["client_id"], "abc");
        assert_eq!(json["auto_select"], false);
        assert_eq!(json["use_fedcm_for_prompt"], false);
        assert_eq!(json["cancel_on_tap_outside"], true);
    }

    #[test]
    fn test_ready_sdk_initializes_immediately() {
        let provider = FakeProvider::ready_after(0);
        let mut bootstrap = ProviderBootstrap::new(ProviderConfig::default(), noop_handler());

        assert_eq!(bootstrap.poll(&provider), PollOutcome::Initialized);
        assert!(bootstrap.is_initialized());
        assert_eq!(provider.init_calls.get(), 1);
    }

    #[test]
    fn test_waits_until_sdk_appears() {
        let provider = FakeProvider::ready_after(3);
        let mut bootstrap = ProviderBootstrap::new(ProviderConfig::default(), noop_handler());

        for _ in 0..3 {
            assert_eq!(bootstrap.poll(&provider), PollOutcome::Waiting);
        }
        assert_eq!(provider.init_calls.get(), 0);
        assert_eq!(bootstrap.poll(&provider), PollOutcome::Initialized);
        assert_eq!(provider.init_calls.get(), 1);
    }

    #[test]
    fn test_configures_exactly_once_across_ticks() {
        let provider = FakeProvider::ready_after(1);
        let mut bootstrap = ProviderBootstrap::new(ProviderConfig::default(), noop_handler());

        let outcomes: Vec<_> = (0..6).map(|_| bootstrap.poll(&provider)).collect();

        assert_eq!(provider.init_calls.get(), 1);
        assert_eq!(outcomes[0], PollOutcome::Waiting);
        assert_eq!(outcomes[1], PollOutcome::Initialized);
        assert!(
            outcomes[2..]
                .iter()
                .all(|o| *o == PollOutcome::AlreadyInitialized)
        );
    }

    #[test]
    fn test_poll_outcome_is_done() {
        assert!(!PollOutcome::Waiting.is_done());
        assert!(PollOutcome::Initialized.is_done());
        assert!(PollOutcome::AlreadyInitialized.is_done());
    }

    #[test]
    fn test_initialize_receives_config_and_handler() {
        let provider = FakeProvider::ready_after(0);
        let received = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&received);
        let handler: CredentialHandler = Rc::new(move |token| sink.borrow_mut().push(token));

        let mut bootstrap = ProviderBootstrap::new(ProviderConfig::new("client-1"), handler);
        bootstrap.poll(&provider);

        assert_eq!(
            provider.last_config.borrow().as_ref().map(|c| c.client_id.as_str()),
            Some("client-1")
        );

        let installed = provider.handler.borrow().clone().unwrap();
        installed("a.b.c".to_string());
        assert_eq!(received.borrow().as_slice(), ["a.b.c".to_string()]);
    }

    #[test]
    fn test_prompt_without_sdk_is_noop() {
        let provider = FakeProvider::ready_after(usize::MAX);
        assert!(!trigger_prompt(&provider));
        assert_eq!(provider.prompt_calls.get(), 0);
    }

    #[test]
    fn test_prompt_with_sdk() {
        let provider = FakeProvider::ready_after(0);
        assert!(trigger_prompt(&provider));
        assert_eq!(provider.prompt_calls.get(), 1);
    }
}
