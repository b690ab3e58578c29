//! Google Identity Services bindings
//!
//! The GSI script installs `window.google.accounts.id`. Everything here goes
//! through `Reflect` so a missing or half-loaded script reads as "not ready"
//! instead of throwing.

use js_sys::{Array, Function, Object, Reflect};
use leptos::logging::error;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::core::{
    CLIENT_ID_META, CredentialHandler, CredentialResponse, IdentityProvider, ProviderConfig,
};

/// `google.accounts.id` on the current window
pub struct GoogleIdentity;

impl GoogleIdentity {
    fn accounts_id() -> Option<Object> {
        let window = web_sys::window()?;
        let google = Reflect::get(&window, &"google".into()).ok()?;
        let accounts = Reflect::get(&google, &"accounts".into()).ok()?;
        let id = Reflect::get(&accounts, &"id".into()).ok()?;
        id.dyn_into::<Object>().ok()
    }

    fn call(method: &str, args: &Array) -> Result<JsValue, JsValue> {
        let id = Self::accounts_id()
            .ok_or_else(|| JsValue::from_str("google.accounts.id is not loaded"))?;
        let function: Function = Reflect::get(&id, &method.into())?.dyn_into()?;
        function.apply(&id, args)
    }
}

impl IdentityProvider for GoogleIdentity {
    fn is_ready(&self) -> bool {
        Self::accounts_id().is_some()
    }

    fn initialize(&self, config: &ProviderConfig, on_credential: CredentialHandler) {
        let options = match serde_wasm_bindgen::to_value(config) {
            Ok(options) => options,
            Err(err) => {
                error!("Failed to encode identity options: {}", err);
                return;
            }
        };

        let callback = Closure::<dyn Fn(JsValue)>::new(move |response: JsValue| {
            match serde_wasm_bindgen::from_value::<CredentialResponse>(response) {
                Ok(response) => on_credential(response.credential),
                Err(err) => error!("Malformed credential response: {}", err),
            }
        });

        if let Err(err) = Reflect::set(&options, &"callback".into(), callback.as_ref()) {
            error!("Failed to attach credential callback: {:?}", err);
            return;
        }
        // Lives as long as the SDK, which keeps it for the page lifetime
        callback.forget();

        if let Err(err) = Self::call("initialize", &Array::of1(&options)) {
            error!("google.accounts.id.initialize failed: {:?}", err);
        }
    }

    fn prompt(&self) {
        if let Err(err) = Self::call("prompt", &Array::new()) {
            error!("google.accounts.id.prompt failed: {:?}", err);
        }
    }
}

/// Client id the server rendered into the document head
pub fn client_id_from_document() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let selector = format!("meta[name=\"{}\"]", CLIENT_ID_META);
    document
        .query_selector(&selector)
        .ok()
        .flatten()?
        .get_attribute("content")
        .filter(|id| !id.is_empty())
}

/// Identity options for this page: the server-rendered client id, or the built-in one
pub fn provider_config_from_document() -> ProviderConfig {
    client_id_from_document()
        .map(ProviderConfig::new)
        .unwrap_or_default()
}
