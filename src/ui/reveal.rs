//! Scroll-reveal wrapper
//!
//! Wraps its children in a div observed by an `IntersectionObserver`. The
//! observer feeds `RevealState`, which drives the `visible` class and the
//! transition delay. The observer is disconnected when the wrapper unmounts.

use leptos::html;
use leptos::prelude::*;

use crate::core::{RevealDirection, RevealState};

#[component]
pub fn RevealOnScroll(
    children: Children,
    #[prop(optional)] direction: RevealDirection,
    /// Transition delay in milliseconds, applied only while revealing
    #[prop(optional)]
    delay: u32,
    /// Extra classes for the wrapper
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    let state = RwSignal::new(RevealState::Hidden);
    let node_ref = NodeRef::<html::Div>::new();

    #[cfg(not(feature = "ssr"))]
    {
        use leptos::logging::error;
        use wasm_bindgen::JsCast;
        use wasm_bindgen::JsValue;
        use wasm_bindgen::closure::Closure;
        use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

        use crate::core::{IntersectionSample, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};

        type Observed = (IntersectionObserver, Closure<dyn Fn(js_sys::Array)>);

        let observed: StoredValue<Option<Observed>, LocalStorage> = StoredValue::new_local(None);

        Effect::new(move |_| {
            let Some(el) = node_ref.get() else {
                return;
            };
            if observed.with_value(|o| o.is_some()) {
                return;
            }

            let callback = Closure::<dyn Fn(js_sys::Array)>::new(move |entries: js_sys::Array| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    let sample = IntersectionSample {
                        is_intersecting: entry.is_intersecting(),
                        top: entry.bounding_client_rect().top(),
                    };
                    state.maybe_update(|s| s.observe(sample));
                }
            });

            let options = IntersectionObserverInit::new();
            options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
            options.set_root_margin(REVEAL_ROOT_MARGIN);

            match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            {
                Ok(observer) => {
                    observer.observe(&el);
                    observed.set_value(Some((observer, callback)));
                }
                Err(err) => error!("IntersectionObserver unavailable: {:?}", err),
            }
        });

        on_cleanup(move || {
            observed.try_update_value(|slot| {
                if let Some((observer, _callback)) = slot.take() {
                    observer.disconnect();
                }
            });
        });
    }

    view! {
        <div
            node_ref=node_ref
            class=move || state.get().class_list(direction, class)
            style:transition-delay=move || state.get().transition_delay(delay)
        >
            {children()}
        </div>
    }
}
