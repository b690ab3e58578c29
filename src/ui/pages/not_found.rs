//! Not found page component
//!
//! Shown for any path other than the site root.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::ui::icon::{Icon, icons};

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-[#fcfcfd] flex flex-col items-center justify-center p-4">
            <div class="text-center">
                <div class="w-24 h-24 mx-auto mb-6 bg-violet-50 rounded-full flex items-center justify-center">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>

                <h1 class="text-6xl font-black tracking-tighter text-slate-950 mb-4">"404"</h1>
                <h2 class="text-2xl font-bold text-slate-900 mb-2">"Siden finnes ikke"</h2>
                <p class="text-slate-500 font-medium mb-8 max-w-md mx-auto">
                    "Siden du leter etter er flyttet eller har aldri eksistert. Google finner den ikke heller."
                </p>

                <A
                    href="/"
                    attr:class="inline-flex items-center gap-2 px-8 py-4 bg-slate-950 hover:bg-violet-600 text-white font-bold rounded-full transition-colors"
                >
                    "Til forsiden"
                    <Icon name=icons::ARROW_RIGHT class="w-4 h-4 invert" />
                </A>
            </div>

            <div class="absolute bottom-8 text-center">
                <p class="text-xs font-black uppercase tracking-widest text-slate-400">"© 2024 Sikt Technologies AS"</p>
            </div>
        </div>
    }
}
