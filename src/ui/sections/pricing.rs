use leptos::logging::log;
use leptos::prelude::*;

use crate::core::pricing::{PLANS, Plan};
use crate::core::{PRICING_ANCHOR, PricingMode};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnScroll;

/// Pricing cards, anchored at `#priser` for the navbar's "Kom i gang"
#[component]
pub fn Pricing(mode: PricingMode) -> impl IntoView {
    let on_select = match mode {
        PricingMode::Selectable => Some(Callback::new(|title: String| log!("Valgt: {}", title))),
        PricingMode::Display => None,
    };

    let plans: &'static [Plan] = &PLANS;

    view! {
        <section id=PRICING_ANCHOR class="py-16 sm:py-32 bg-transparent relative overflow-hidden scroll-mt-20">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 relative z-10">
                <RevealOnScroll>
                    <div class="text-center mb-16 sm:mb-24">
                        <h2 class="text-3xl sm:text-5xl md:text-6xl font-extrabold tracking-tight text-slate-950 mb-6">
                            "Velg din plan for dominans"
                        </h2>
                        <p class="text-base sm:text-lg text-slate-500 font-medium max-w-xl mx-auto">
                            "Finn den strategien som passer din bedrifts ambisjon om å bli størst i markedet."
                        </p>
                    </div>
                </RevealOnScroll>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-8 items-stretch">
                    {plans
                        .iter()
                        .enumerate()
                        .map(|(i, plan)| {
                            view! {
                                <RevealOnScroll delay={i as u32 * 100}>
                                    <PricingCard plan=plan on_select=on_select />
                                </RevealOnScroll>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn PricingCard(plan: &'static Plan, on_select: Option<Callback<String>>) -> impl IntoView {
    let card_class = if plan.highlighted {
        "relative p-8 sm:p-10 rounded-[40px] flex flex-col h-full transition-all duration-700 bg-slate-950 text-white shadow-2xl md:scale-105 z-20 premium-card"
    } else {
        "relative p-8 sm:p-10 rounded-[40px] flex flex-col h-full transition-all duration-700 bg-white border border-slate-100 shadow-sm hover:shadow-xl"
    };
    let muted = if plan.highlighted { "text-slate-400" } else { "text-slate-500" };
    let button_class = if plan.highlighted {
        "w-full py-5 rounded-[20px] font-black text-lg transition-all active:scale-95 shadow-lg bg-violet-600 text-white hover:bg-violet-500"
    } else {
        "w-full py-5 rounded-[20px] font-black text-lg transition-all active:scale-95 shadow-lg bg-slate-950 text-white hover:bg-violet-600"
    };
    let title = plan.title();
    let heading = title.clone();

    view! {
        <div class=card_class>
            {plan.highlighted.then(|| view! {
                <div class="absolute -top-4 left-1/2 -translate-x-1/2 bg-violet-600 text-white px-6 py-1.5 rounded-full text-[10px] font-black uppercase tracking-widest shadow-xl">
                    "Mest Populær"
                </div>
            })}

            <div class="mb-8">
                <h3 class="text-xs font-black uppercase tracking-[0.2em] mb-4 text-violet-500">{heading}</h3>
                <div class="flex items-baseline gap-1 mb-2">
                    <span class="text-5xl font-black tracking-tighter">{format!("{},-", plan.price())}</span>
                </div>
                <p class=format!("text-[10px] font-bold uppercase tracking-widest {muted}")>"per måned eks. mva"</p>
            </div>

            <div class="mb-8">
                <p class="text-lg font-bold mb-3 leading-tight">{plan.tagline}</p>
                <p class=format!("text-sm font-medium leading-relaxed {muted}")>{plan.description}</p>
            </div>

            <div class="space-y-4 mb-10 flex-1">
                {plan
                    .features
                    .iter()
                    .map(|feature| view! {
                        <div class="flex items-start gap-3">
                            <div class="mt-1 p-0.5 rounded-full bg-violet-500/20">
                                <Icon name=icons::CHECK class="w-3 h-3" />
                            </div>
                            <span class="text-sm font-semibold">{*feature}</span>
                        </div>
                    })
                    .collect_view()}
            </div>

            <button
                class=button_class
                on:click=move |_| {
                    if let Some(cb) = on_select {
                        cb.run(title.clone());
                    }
                }
            >
                "Velg denne planen"
            </button>
        </div>
    }
}
