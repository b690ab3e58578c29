//! FAQ accordions: the home block and the AI-overview block on the deep dive

use leptos::prelude::*;

use crate::core::accordion::{FaqEntry, GEO_FAQ, HOME_FAQ, toggle_open};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnScroll;

#[component]
fn FaqItem(entry: FaqEntry, index: usize, open: RwSignal<Option<usize>>) -> impl IntoView {
    let is_open = move || open.get() == Some(index);

    view! {
        <div class=move || {
            if is_open() {
                "border rounded-[24px] transition-all duration-500 overflow-hidden bg-white border-violet-200 shadow-xl"
            } else {
                "border rounded-[24px] transition-all duration-500 overflow-hidden bg-white/50 border-slate-100 hover:border-violet-100"
            }
        }>
            <button
                class="w-full flex items-center justify-between gap-4 p-6 sm:p-8 text-left"
                on:click=move |_| open.update(|current| *current = toggle_open(*current, index))
                aria-expanded=move || is_open().to_string()
            >
                <span class="text-base sm:text-lg font-bold text-slate-900 leading-snug">{entry.question}</span>
                <span
                    class="shrink-0 w-8 h-8 rounded-full bg-slate-50 flex items-center justify-center transition-transform duration-500"
                    class=("rotate-180", is_open)
                >
                    <Icon name=icons::CHEVRON_DOWN class="w-4 h-4" />
                </span>
            </button>
            <div class=move || {
                if is_open() {
                    "transition-all duration-500 ease-in-out max-h-[500px] opacity-100"
                } else {
                    "transition-all duration-500 ease-in-out max-h-0 opacity-0"
                }
            }>
                <p class="px-6 sm:px-8 pb-8 text-sm sm:text-base text-slate-600 font-medium leading-relaxed">
                    {entry.answer}
                </p>
            </div>
        </div>
    }
}

/// Accordion over `entries`; at most one answer is open at a time
#[component]
fn FaqList(entries: &'static [FaqEntry]) -> impl IntoView {
    let open = RwSignal::new(None::<usize>);

    view! {
        <div class="space-y-4">
            {entries
                .iter()
                .enumerate()
                .map(|(index, entry)| {
                    view! {
                        <RevealOnScroll delay={index as u32 * 50}>
                            <FaqItem entry=*entry index=index open=open />
                        </RevealOnScroll>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[component]
pub fn Faq() -> impl IntoView {
    let entries: &'static [FaqEntry] = &HOME_FAQ;

    view! {
        <section class="py-16 sm:py-32 bg-slate-50/30 relative overflow-hidden">
            <div class="max-w-4xl mx-auto px-5 sm:px-6 relative z-10">
                <RevealOnScroll>
                    <div class="text-center mb-12 sm:mb-20">
                        <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-violet-50 text-violet-600 text-[10px] font-black uppercase tracking-widest mb-6 border border-violet-100">
                            <Icon name=icons::HELP_CIRCLE class="w-3 h-3" />
                            <span>"Kunskap & Svar"</span>
                        </div>
                        <h2 class="text-3xl sm:text-5xl font-extrabold tracking-tight text-slate-950 mb-6">
                            "Ofte stilte spørsmål"
                        </h2>
                        <p class="text-base sm:text-lg text-slate-500 font-medium max-w-xl mx-auto">
                            "De vanligste spørsmålene om moderne SEO og AI-drevet markedsføring."
                        </p>
                    </div>
                </RevealOnScroll>
                <FaqList entries=entries />
            </div>
        </section>
    }
}

#[component]
pub fn GeoFaq() -> impl IntoView {
    let entries: &'static [FaqEntry] = &GEO_FAQ;

    view! {
        <section class="py-16 sm:py-24 bg-transparent relative overflow-hidden">
            <div class="max-w-4xl mx-auto px-5 sm:px-6 relative z-10">
                <RevealOnScroll>
                    <h2 class="text-2xl sm:text-4xl font-extrabold tracking-tight text-slate-950 mb-10 sm:mb-14 text-center">
                        "Designet for Google AI Overviews"
                    </h2>
                </RevealOnScroll>
                <FaqList entries=entries />
            </div>
        </section>
    }
}
