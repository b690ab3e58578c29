//! Site session context
//!
//! Holds the active view and the signed-in profile for the whole page.
//! Components read it through `use_session_context()`; the root provides it
//! with `provide_session_context()`.

use leptos::logging::{error, log};
use leptos::prelude::*;

use crate::core::{SiteSession, UserProfile, ViewName};

#[derive(Clone, Copy)]
pub struct SessionContext {
    session: RwSignal<SiteSession>,
    /// Active view
    pub view: Memo<ViewName>,
    /// Signed-in profile, if any
    pub user: Memo<Option<UserProfile>>,
}

impl SessionContext {
    fn new() -> Self {
        let session = RwSignal::new(SiteSession::new());
        Self {
            session,
            view: Memo::new(move |_| session.with(|s| s.view())),
            user: Memo::new(move |_| session.with(|s| s.user().cloned())),
        }
    }

    /// Untracked; meant for event handlers
    pub fn is_authenticated(&self) -> bool {
        self.user.with_untracked(Option::is_some)
    }

    /// Switch the active view
    pub fn navigate(&self, view: ViewName) {
        self.session.maybe_update(|s| s.navigate(view));
    }

    /// Decode a credential from the identity provider and sign in with it.
    /// Failures are logged and leave the session as it was.
    pub fn accept_credential(&self, credential: &str) {
        let mut outcome = Ok(());
        self.session.maybe_update(|s| {
            outcome = s.receive_credential(credential);
            outcome.is_ok()
        });

        match outcome {
            Ok(()) => {
                let name = self
                    .session
                    .with_untracked(|s| s.user().map(|u| u.display_name().to_string()))
                    .unwrap_or_default();
                log!("Logged in as: {}", name);
            }
            Err(err) => error!("Error decoding credential: {}", err),
        }
    }

    /// Show the identity provider's sign-in prompt if its script has loaded
    pub fn prompt_login(&self) {
        #[cfg(not(feature = "ssr"))]
        {
            use crate::core::trigger_prompt;
            use crate::ui::google::GoogleIdentity;

            trigger_prompt(&GoogleIdentity);
        }
    }
}

/// Create the session context, start the identity provider bootstrap, and
/// provide the context to descendants
pub fn provide_session_context() -> SessionContext {
    let ctx = SessionContext::new();
    provide_context(ctx);

    #[cfg(not(feature = "ssr"))]
    start_provider_bootstrap(ctx);

    ctx
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}

/// Poll for the GSI script and configure it once it appears.
/// Polling stops when the owner is cleaned up.
#[cfg(not(feature = "ssr"))]
fn start_provider_bootstrap(ctx: SessionContext) {
    use std::rc::Rc;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, Ordering};

    use gloo_timers::future::TimeoutFuture;
    use leptos::task::spawn_local;

    use crate::core::{CredentialHandler, ProviderBootstrap, SDK_POLL_INTERVAL_MS};
    use crate::ui::google::{GoogleIdentity, provider_config_from_document};

    let cancelled = Arc::new(AtomicBool::new(false));
    on_cleanup({
        let cancelled = Arc::clone(&cancelled);
        move || cancelled.store(true, Ordering::Relaxed)
    });

    let handler: CredentialHandler = Rc::new(move |credential| ctx.accept_credential(&credential));
    let mut bootstrap = ProviderBootstrap::new(provider_config_from_document(), handler);

    spawn_local(async move {
        while !cancelled.load(Ordering::Relaxed) {
            if bootstrap.poll(&GoogleIdentity).is_done() {
                break;
            }
            TimeoutFuture::new(SDK_POLL_INTERVAL_MS).await;
        }
    });
}
