//! Technology view sections

use leptos::prelude::*;

use crate::core::{RevealDirection, ViewName};
use crate::core::pricing::{COMPARISON, ComparisonRow, Tier, format_price_nok};
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnScroll;
use crate::ui::session::use_session_context;

/// Bar heights of the scanning mockup, in percent
const SCAN_BARS: [u8; 8] = [40, 70, 45, 90, 65, 80, 50, 95];

#[component]
pub fn TechnologyHero() -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-16 sm:pt-44 sm:pb-24 hero-gradient overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 grid grid-cols-1 lg:grid-cols-2 gap-12 items-center relative z-10">
                <div class="text-center lg:text-left">
                    <RevealOnScroll direction=RevealDirection::Down>
                        <h1 class="text-4xl sm:text-6xl font-extrabold tracking-tighter text-slate-950 mb-8 leading-[1.05]">
                            "Teknologien som setter din "
                            <span class="text-violet-600">"bedrift på kartet."</span>
                        </h1>
                    </RevealOnScroll>
                    <RevealOnScroll delay=150>
                        <p class="text-base sm:text-xl text-slate-600 font-medium max-w-xl mx-auto lg:mx-0 leading-relaxed">
                            "Vi kombinerer menneskelig strategi med AI-prosessering for å levere resultater tradisjonelle byråer ikke kan matche."
                        </p>
                    </RevealOnScroll>
                </div>
                <RevealOnScroll direction=RevealDirection::Scale delay=250>
                    <div class="relative bg-slate-950 rounded-[40px] p-8 h-72 sm:h-80 shadow-2xl overflow-hidden">
                        <div class="absolute inset-0 grid-pattern opacity-10"></div>
                        <div class="absolute inset-x-0 top-0 h-1/3 bg-gradient-to-b from-violet-500/20 to-transparent animate-scan-area-tech"></div>
                        <div class="relative h-full flex items-end gap-3">
                            {SCAN_BARS
                                .into_iter()
                                .map(|height| view! {
                                    <div
                                        class="flex-1 rounded-t-lg bg-gradient-to-t from-violet-600 to-indigo-400 opacity-80"
                                        style=format!("height: {height}%")
                                    ></div>
                                })
                                .collect_view()}
                        </div>
                        <div class="absolute top-0 left-0 w-full h-0.5 bg-violet-400/70 animate-scan-tech"></div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(
    title: &'static str,
    body: &'static str,
    icon: &'static str,
    tiers: [Tier; 2],
) -> impl IntoView {
    view! {
        <div class="p-8 bg-white rounded-[32px] border border-slate-100 shadow-sm hover:shadow-xl transition-all duration-500 h-full flex flex-col">
            <div class="w-12 h-12 rounded-2xl bg-violet-50 flex items-center justify-center mb-6">
                <Icon name=icon class="w-6 h-6" />
            </div>
            <h3 class="text-xl font-black text-slate-950 mb-3">{title}</h3>
            <p class="text-sm sm:text-base text-slate-500 font-medium leading-relaxed mb-6 flex-1">{body}</p>
            <div class="flex gap-2">
                {tiers
                    .into_iter()
                    .map(|tier| view! {
                        <span class="text-[10px] font-black uppercase tracking-widest px-3 py-1 rounded-full bg-slate-50 text-slate-500 border border-slate-100">
                            {tier.label()}
                        </span>
                    })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
pub fn FeatureMatrix() -> impl IntoView {
    let premium_items = [
        "Konkurrentanalyse (AI-basert)",
        "Innholdsplaner & Bloggideer",
        "Avansert intern lenkestruktur",
        "Månedlig strategimøte",
    ];

    view! {
        <section class="py-16 sm:py-28 bg-transparent relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 space-y-6">
                <div class="grid grid-cols-1 md:grid-cols-3 gap-6">
                    <RevealOnScroll>
                        <FeatureCard
                            title="Teknisk Overvåkning"
                            body="Vi overvåker alt fra PageSpeed og 404-feil til Core Web Vitals. Vårt system varsler oss umiddelbart hvis noe hindrer Google i å lese siden din optimalt."
                            icon=icons::WRENCH
                            tiers=[Tier::Basic, Tier::Standard]
                        />
                    </RevealOnScroll>
                    <RevealOnScroll delay=100>
                        <FeatureCard
                            title="Search Console Data"
                            body="Ingen gjetting, bare rådata. Vi integrerer direkte med Search Console for å analysere dine faktiske klikk, visninger og CTR for å finne uutnyttet potensiale."
                            icon=icons::GLOBE
                            tiers=[Tier::Basic, Tier::Standard]
                        />
                    </RevealOnScroll>
                    <RevealOnScroll delay=200>
                        <FeatureCard
                            title="AI-Optimalisering i Sanntid"
                            body="Vår AI-drevne innholdsmotor skanner algoritme-endringer og automatiserer genereringen av meta-titler og beskrivelser som \"snakker\" direkte med Googles semantiske hjerte."
                            icon=icons::CPU
                            tiers=[Tier::Standard, Tier::Premium]
                        />
                    </RevealOnScroll>
                </div>

                <RevealOnScroll direction=RevealDirection::Scale delay=100>
                    <div class="p-8 sm:p-12 bg-slate-950 text-white rounded-[40px] shadow-2xl premium-card grid grid-cols-1 lg:grid-cols-3 gap-10 items-center">
                        <div class="lg:col-span-2">
                            <span class="inline-block px-4 py-1.5 rounded-full bg-violet-600 text-[10px] font-black uppercase tracking-widest mb-6">
                                "Eksklusivt for Premium"
                            </span>
                            <h3 class="text-2xl sm:text-4xl font-black mb-4">"Full Markedsanalyse & Strategi"</h3>
                            <p class="text-sm sm:text-base text-slate-400 font-medium leading-relaxed mb-8 max-w-2xl">
                                "Vår mest avanserte pakke gir deg strategisk overtak. Vi utfører dyp konkurrentanalyse hvor AI-en dekoder hvorfor konkurrentene rangerer."
                            </p>
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-3">
                                {premium_items
                                    .into_iter()
                                    .map(|item| view! {
                                        <div class="flex items-center gap-3 text-sm font-bold">
                                            <Icon name=icons::CHECK class="w-4 h-4 invert" />
                                            {item}
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>
                        <div class="p-8 rounded-[32px] bg-white/5 border border-white/10 text-center">
                            <Icon name=icons::BAR_CHART class="w-10 h-10 mx-auto mb-4 invert" />
                            <p class="text-xl font-black">"Markedsdominans"</p>
                            <p class="text-[10px] font-black uppercase tracking-widest text-emerald-400 mt-2">"Aktiv overvåking"</p>
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn StrategyCard(
    title: &'static str,
    tag: &'static str,
    body: &'static str,
    icon: &'static str,
    #[prop(optional)] action: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="p-5 bg-white/5 rounded-2xl border border-white/10">
            <div class="flex items-center gap-3 mb-3">
                <div class="w-9 h-9 rounded-xl bg-violet-500/20 flex items-center justify-center">
                    <Icon name=icon class="w-4 h-4 invert" />
                </div>
                <div>
                    <p class="text-sm font-black text-white">{title}</p>
                    <p class="text-[10px] font-bold uppercase tracking-widest text-violet-300">{tag}</p>
                </div>
            </div>
            <p class="text-sm text-slate-300 font-medium leading-relaxed">{body}</p>
            {action.map(|label| view! {
                <button class="mt-4 px-4 py-2 bg-violet-600 text-white text-xs font-black rounded-xl hover:bg-violet-500 transition-colors">
                    {label}
                </button>
            })}
        </div>
    }
}

#[component]
pub fn DashboardSection() -> impl IntoView {
    view! {
        <section class="py-16 sm:py-28 bg-slate-50/30 relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                <RevealOnScroll direction=RevealDirection::Left>
                    <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-violet-50 text-violet-600 text-[10px] font-black uppercase tracking-widest mb-6 border border-violet-100">
                        <Icon name=icons::LIGHTBULB class="w-3 h-3" />
                        <span>"Handling foran data"</span>
                    </div>
                    <h2 class="text-3xl sm:text-5xl font-extrabold tracking-tight text-slate-950 mb-6 leading-tight">
                        "Strategisk Oversikt: "
                        <span class="text-violet-600">"Din AI-Strateg."</span>
                    </h2>
                    <p class="text-base sm:text-lg text-slate-500 font-medium mb-10 leading-relaxed">
                        "Vi har fjernet kompliserte grafer og erstattet dem med krystallklare instruksjoner. Begynn å utføre handlinger som gir resultater."
                    </p>
                    <div class="space-y-6">
                        <div class="flex gap-4 items-start">
                            <Icon name=icons::BRAIN_CIRCUIT class="w-6 h-6 shrink-0 mt-1" />
                            <div>
                                <h3 class="text-lg font-black text-slate-950">"Smart Tolkning"</h3>
                                <p class="text-sm sm:text-base text-slate-500 font-medium">"AI-en oversetter rådata til menneskelig språk."</p>
                                <p class="mt-3 p-4 bg-white rounded-2xl border border-violet-100 text-sm text-slate-700 font-semibold italic">
                                    "AI-tips: 'Innholdet om Varmepumper mister terreng. Legg til en seksjon om energisparing.'"
                                </p>
                            </div>
                        </div>
                        <div class="flex gap-4 items-start">
                            <Icon name=icons::TARGET class="w-6 h-6 shrink-0 mt-1" />
                            <div>
                                <h3 class="text-lg font-black text-slate-950">"ROI-Prioritering"</h3>
                                <p class="text-sm sm:text-base text-slate-500 font-medium">"Vi fokuserer kun på det som faktisk gir deg flere kunder."</p>
                            </div>
                        </div>
                        <div class="flex gap-4 items-start">
                            <Icon name=icons::SHIELD class="w-6 h-6 shrink-0 mt-1" />
                            <div>
                                <h3 class="text-lg font-black text-slate-950">"Konkurrent-Radar"</h3>
                                <p class="text-sm sm:text-base text-slate-500 font-medium">"Vår radar overvåker markedet 24/7 og varsler deg umiddelbart."</p>
                            </div>
                        </div>
                    </div>
                </RevealOnScroll>

                <RevealOnScroll direction=RevealDirection::Right delay=150>
                    <div class="p-6 sm:p-8 bg-slate-950 rounded-[40px] shadow-2xl">
                        <div class="flex justify-between items-center mb-6">
                            <span class="text-white font-black">"AI Strategi-strøm"</span>
                            <span class="flex items-center gap-2 text-[10px] font-black uppercase tracking-widest text-emerald-400">
                                <span class="w-2 h-2 rounded-full bg-emerald-400 animate-pulse"></span>
                                "Aktiv Analyse"
                            </span>
                        </div>
                        <div class="space-y-4">
                            <StrategyCard
                                title="Innholds-optimalisering"
                                tag="Høy prioritet · +15% ROI"
                                body="Oppdater 'Tjenester'-siden med søkeordet SEO-byrå Oslo."
                                icon=icons::SPARKLES
                            />
                            <StrategyCard
                                title="Markeds-radar"
                                tag="Aktiv varsling"
                                body="Konkurrent A har lansert en ny bloggserie. Vi har generert 3 mot-strategier."
                                icon=icons::SEARCH
                            />
                            <StrategyCard
                                title="Neste handling"
                                tag="Anbefalt av AI"
                                body="Start optimalisering av produktsider for å øke konvertering."
                                icon=icons::ARROW_UP_RIGHT
                                action="Utfør nå"
                            />
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn ComparisonCell(row: ComparisonRow, tier: Tier) -> impl IntoView {
    view! {
        <td class="p-5 text-center">
            {if row.included_in(tier) {
                view! {
                    <span class="inline-flex w-7 h-7 rounded-full bg-violet-50 items-center justify-center">
                        <Icon name=icons::CHECK class="w-4 h-4" />
                    </span>
                }
                    .into_any()
            } else {
                view! { <span class="text-slate-300 font-black">"-"</span> }.into_any()
            }}
        </td>
    }
}

#[component]
pub fn ComparisonTable() -> impl IntoView {
    view! {
        <section class="py-16 sm:py-28 bg-transparent relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6">
                <RevealOnScroll>
                    <div class="text-center mb-12">
                        <h2 class="text-3xl sm:text-5xl font-extrabold tracking-tight text-slate-950 mb-4">
                            "Sammenlign våre planer"
                        </h2>
                        <p class="text-base sm:text-lg text-slate-500 font-medium">
                            "Finn pakken som passer din bedrifts ambisjon."
                        </p>
                    </div>
                </RevealOnScroll>
                <RevealOnScroll delay=100>
                    <div class="bg-white rounded-[32px] border border-slate-100 shadow-sm overflow-x-auto scrollbar-hide">
                        <table class="w-full min-w-[640px] text-left">
                            <thead>
                                <tr class="border-b border-slate-100">
                                    <th class="p-5 text-xs font-black uppercase tracking-widest text-slate-400">"Funksjon"</th>
                                    {Tier::ALL
                                        .into_iter()
                                        .map(|tier| view! {
                                            <th class="p-5 text-center">
                                                <span class="block text-sm font-black text-slate-950">{tier.label()}</span>
                                                <span class="block text-xs font-bold text-violet-600">
                                                    {format!("{},-", format_price_nok(tier.monthly_price_nok()))}
                                                </span>
                                            </th>
                                        })
                                        .collect_view()}
                                </tr>
                            </thead>
                            <tbody>
                                {COMPARISON
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr class="border-b border-slate-50 last:border-0">
                                            <td class="p-5 text-sm font-bold text-slate-700">{row.feature}</td>
                                            {Tier::ALL
                                                .into_iter()
                                                .map(|tier| view! { <ComparisonCell row=row tier=tier /> })
                                                .collect_view()}
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    </div>
                    <p class="sm:hidden text-center text-[10px] font-bold uppercase tracking-widest text-slate-400 mt-4">
                        "Sveip for å se mer"
                    </p>
                </RevealOnScroll>
            </div>
        </section>
    }
}

/// Closing call to action; sends the visitor to the deep dive, where pricing lives
#[component]
pub fn TechCta() -> impl IntoView {
    let session = use_session_context();

    view! {
        <section class="py-16 sm:py-28 bg-transparent">
            <div class="max-w-5xl mx-auto px-5 sm:px-6">
                <RevealOnScroll direction=RevealDirection::Scale>
                    <div class="p-10 sm:p-16 bg-slate-950 rounded-[48px] text-center shadow-2xl relative overflow-hidden">
                        <div class="absolute inset-0 grid-pattern opacity-10"></div>
                        <h2 class="relative text-3xl sm:text-5xl font-extrabold tracking-tight text-white mb-6">
                            "Klar for en teknisk fordel?"
                        </h2>
                        <p class="relative text-base sm:text-lg text-slate-400 font-medium max-w-2xl mx-auto mb-10">
                            "Slutt å gjette. Bruk teknologien som faktisk flytter nålen for din bedrift på Google."
                        </p>
                        <button
                            class="relative px-10 py-4 bg-violet-600 text-white rounded-full text-lg font-black hover:bg-violet-500 transition-all active:scale-95 shadow-xl"
                            on:click=move |_| session.navigate(ViewName::DeepDive)
                        >
                            "Begynn i dag"
                        </button>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}
