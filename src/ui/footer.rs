use leptos::prelude::*;

use crate::core::ViewName;
use crate::core::meta::CONTACT_EMAIL;
use crate::ui::icon::{Icon, icons};
use crate::ui::session::use_session_context;

const LINK_CLASS: &str = "text-sm font-semibold text-slate-500 hover:text-violet-600 transition-colors";

#[component]
pub fn Footer() -> impl IntoView {
    let session = use_session_context();

    view! {
        <footer class="relative z-10 bg-white/60 backdrop-blur-sm border-t border-slate-100 pt-16 sm:pt-24 pb-10">
            <div class="max-w-6xl mx-auto px-5 sm:px-6">
                <div class="grid grid-cols-1 md:grid-cols-4 gap-12 mb-16">
                    // Brand
                    <div class="md:col-span-2">
                        <div class="flex items-center gap-3 mb-6">
                            <div class="w-10 h-10 bg-slate-900 rounded-xl flex items-center justify-center text-white font-bold text-lg">
                                "S"
                            </div>
                            <span class="text-xl font-black tracking-tighter text-slate-900">"Sikt"</span>
                        </div>
                        <p class="text-sm sm:text-base text-slate-500 font-medium leading-relaxed max-w-md mb-6">
                            "Vi transformerer din digitale tilstedeværelse med neste generasjons AI-drevet SEO. Synlighet er ikke et valg, det er en nødvendighet."
                        </p>
                        <a href=format!("mailto:{CONTACT_EMAIL}") class="inline-flex items-center gap-2 text-sm font-bold text-slate-900 hover:text-violet-600 transition-colors">
                            <Icon name=icons::MAIL class="w-4 h-4" />
                            {CONTACT_EMAIL}
                        </a>
                    </div>

                    <div>
                        <h4 class="text-xs font-black uppercase tracking-widest text-slate-950 mb-6">"Selskap"</h4>
                        <ul class="space-y-3">
                            <li>
                                <button class=LINK_CLASS on:click=move |_| session.navigate(ViewName::DeepDive)>
                                    "Om Sikt"
                                </button>
                            </li>
                            <li>
                                <button class=LINK_CLASS on:click=move |_| session.navigate(ViewName::Technology)>
                                    "Tjenester"
                                </button>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h4 class="text-xs font-black uppercase tracking-widest text-slate-950 mb-6">"Kontakt"</h4>
                        <div class="flex gap-3">
                            <span class="w-10 h-10 rounded-xl bg-slate-50 border border-slate-100 flex items-center justify-center" aria-label="LinkedIn">
                                <Icon name=icons::LINKEDIN class="w-4 h-4" />
                            </span>
                            <span class="w-10 h-10 rounded-xl bg-slate-50 border border-slate-100 flex items-center justify-center" aria-label="Twitter">
                                <Icon name=icons::TWITTER class="w-4 h-4" />
                            </span>
                        </div>
                    </div>
                </div>

                // Bottom bar
                <div class="pt-8 border-t border-slate-100 flex flex-col sm:flex-row items-center justify-between gap-4">
                    <span class="text-[10px] font-black uppercase tracking-widest text-slate-400">
                        "© 2024 SIKT TECHNOLOGIES AS. NORSK DESIGN."
                    </span>
                    <div class="flex gap-6 text-[10px] font-black uppercase tracking-widest text-slate-400">
                        <span>"Personvern"</span>
                        <span>"Vilkår"</span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
