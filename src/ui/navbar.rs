//! Top navigation bar
//!
//! Tracks the scroll offset for its condensed style, owns the mobile menu
//! state, and forwards view changes and the "Kom i gang" action to the
//! session.

use leptos::prelude::*;

use crate::core::{GetStarted, NavState, ViewName};
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

const BAR_CONDENSED: &str =
    "fixed top-0 left-0 right-0 z-50 transition-all duration-500 glass border-b border-slate-100 py-3 sm:py-4 shadow-sm";
const BAR_EXPANDED: &str =
    "fixed top-0 left-0 right-0 z-50 transition-all duration-500 bg-transparent py-5 sm:py-8";

fn mobile_icon(view: ViewName) -> &'static str {
    match view {
        ViewName::Home => icons::HOME,
        ViewName::DeepDive => icons::TARGET,
        ViewName::Technology => icons::CPU,
    }
}

/// Smooth-scroll to the pricing section. Returns false when the current view has none.
#[cfg(not(feature = "ssr"))]
fn scroll_to_pricing() -> bool {
    use crate::core::PRICING_ANCHOR;

    let Some(el) = document().get_element_by_id(PRICING_ANCHOR) else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&options);
    true
}

#[cfg(feature = "ssr")]
fn scroll_to_pricing() -> bool {
    false
}

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();
    let nav = RwSignal::new(NavState::default());

    #[cfg(not(feature = "ssr"))]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let scroll_y = window().scroll_y().unwrap_or_default();
            nav.maybe_update(|n| n.on_scroll(scroll_y));
        });
        on_cleanup(move || handle.remove());
    }

    let navigate = move |view: ViewName| {
        session.navigate(view);
        nav.update(|n| {
            n.close_menu();
        });
    };

    let get_started = move || match GetStarted::for_user(session.is_authenticated()) {
        GetStarted::PromptLogin => session.prompt_login(),
        GetStarted::ScrollToPricing => {
            if scroll_to_pricing() {
                nav.update(|n| {
                    n.close_menu();
                });
            }
        }
    };

    let menu_open = move || nav.with(|n| n.mobile_menu_open);

    view! {
        <nav class=move || if nav.with(NavState::is_condensed) { BAR_CONDENSED } else { BAR_EXPANDED }>
            <div class="max-w-6xl mx-auto px-5 sm:px-6 flex justify-between items-center">
                // Logo
                <button
                    class="flex items-center gap-2 sm:gap-3 group cursor-pointer"
                    on:click=move |_| navigate(ViewName::Home)
                    aria-label="Sikt forside"
                >
                    <div class="w-8 h-8 sm:w-10 sm:h-10 bg-slate-900 rounded-lg sm:rounded-xl flex items-center justify-center text-white font-bold text-lg transition-all group-hover:bg-violet-600">
                        "S"
                    </div>
                    <span class="text-lg sm:text-xl font-black tracking-tighter text-slate-900 transition-colors group-hover:text-violet-600">
                        "Sikt"
                    </span>
                </button>

                // Desktop navigation
                <div class="hidden md:flex items-center gap-6 text-[13px] font-bold text-slate-500">
                    {[ViewName::DeepDive, ViewName::Technology]
                        .into_iter()
                        .map(|view| {
                            view! {
                                <button
                                    class=move || {
                                        if session.view.get() == view {
                                            "transition-all text-violet-600 bg-violet-50 px-3 py-1.5 rounded-full"
                                        } else {
                                            "transition-all hover:text-slate-900"
                                        }
                                    }
                                    on:click=move |_| navigate(view)
                                >
                                    {view.nav_label()}
                                </button>
                            }
                        })
                        .collect_view()}

                    <div class="flex items-center gap-4">
                        {move || {
                            session
                                .user
                                .get()
                                .map(|user| {
                                    view! {
                                        <div class="flex items-center gap-2 bg-white/10 p-1 pr-3 rounded-full border border-violet-200">
                                            {user.picture.clone().map(|src| view! {
                                                <img src=src alt="profil" class="w-8 h-8 rounded-full border border-violet-100" />
                                            })}
                                            <span class="text-sm font-bold text-slate-900">
                                                {user.short_name().to_string()}
                                            </span>
                                        </div>
                                    }
                                })
                        }}
                        <button
                            class="bg-slate-900 text-white px-7 py-2.5 rounded-full transition-all hover:bg-violet-600 shadow-xl flex items-center gap-2 active:scale-95"
                            on:click=move |_| get_started()
                        >
                            "Kom i gang"
                            <Icon name=icons::ARROW_RIGHT class="w-3.5 h-3.5 invert" />
                        </button>
                    </div>
                </div>

                // Mobile menu button
                <button
                    class="md:hidden text-slate-900 p-2.5 rounded-xl bg-white border border-slate-100 shadow-sm transition-all"
                    on:click=move |_| nav.update(NavState::toggle_menu)
                    aria-label="Meny"
                    aria-expanded=move || menu_open().to_string()
                >
                    {move || {
                        if menu_open() {
                            view! { <Icon name=icons::X /> }.into_any()
                        } else {
                            view! { <Icon name=icons::MENU /> }.into_any()
                        }
                    }}
                </button>
            </div>

            // Mobile menu
            <Show when=menu_open>
                <div class="absolute top-full left-0 right-0 bg-white border-b border-slate-100 px-5 py-10 flex flex-col gap-3 shadow-2xl md:hidden animate-fade-in overflow-hidden">
                    {ViewName::ALL
                        .into_iter()
                        .map(|view| {
                            view! {
                                <button
                                    class=move || {
                                        if session.view.get() == view {
                                            "flex items-center gap-4 text-lg font-bold px-4 py-4 rounded-2xl w-full text-left transition-colors text-violet-600 bg-violet-50"
                                        } else {
                                            "flex items-center gap-4 text-lg font-bold px-4 py-4 rounded-2xl w-full text-left transition-colors text-slate-900 hover:bg-slate-50"
                                        }
                                    }
                                    on:click=move |_| navigate(view)
                                >
                                    <Icon name=mobile_icon(view) />
                                    {view.nav_label()}
                                </button>
                            }
                        })
                        .collect_view()}

                    <div class="mt-4 pt-4 border-t border-slate-100">
                        {move || match session.user.get() {
                            None => {
                                view! {
                                    <button
                                        class="bg-slate-950 text-white text-center w-full py-5 rounded-2xl font-bold text-xl shadow-2xl flex items-center justify-center gap-3 active:scale-95"
                                        on:click=move |_| get_started()
                                    >
                                        "Kom i gang"
                                        <Icon name=icons::ARROW_RIGHT class="w-5 h-5 invert" />
                                    </button>
                                }
                                    .into_any()
                            }
                            Some(user) => {
                                view! {
                                    <div class="flex flex-col gap-4">
                                        <div class="flex items-center gap-3 bg-violet-50 p-3 rounded-2xl text-left">
                                            {user.picture.clone().map(|src| view! {
                                                <img src=src alt="profil" class="w-12 h-12 rounded-full border-2 border-white shadow-sm" />
                                            })}
                                            <div class="flex flex-col">
                                                <span class="text-sm font-black text-slate-950">
                                                    {user.display_name().to_string()}
                                                </span>
                                                <span class="text-xs font-bold text-slate-500">
                                                    {user.email.clone().unwrap_or_default()}
                                                </span>
                                            </div>
                                        </div>
                                        <button
                                            class="bg-slate-950 text-white text-center py-5 rounded-2xl font-bold text-xl shadow-2xl flex items-center justify-center gap-3 active:scale-95"
                                            on:click=move |_| get_started()
                                        >
                                            "Gå til priser"
                                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 invert" />
                                        </button>
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    </div>
                </div>
            </Show>
        </nav>
    }
}
