//! Deep-dive view sections

use leptos::prelude::*;

use crate::core::RevealDirection;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnScroll;

#[component]
pub fn DeepDiveHero() -> impl IntoView {
    view! {
        <section class="relative pt-32 pb-16 sm:pt-44 sm:pb-24 hero-gradient overflow-hidden text-center">
            <div class="max-w-5xl mx-auto px-5 sm:px-6 relative z-10">
                <RevealOnScroll direction=RevealDirection::Down>
                    <div class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-white/60 backdrop-blur-md text-violet-600 text-[10px] font-bold mb-8 border border-violet-100/50 uppercase tracking-widest shadow-sm">
                        <Icon name=icons::ROCKET class="w-3 h-3" />
                        <span>"Din vei til toppen"</span>
                    </div>
                </RevealOnScroll>
                <RevealOnScroll delay=100>
                    <h1 class="text-4xl sm:text-6xl md:text-7xl font-extrabold tracking-tighter text-slate-950 mb-8 leading-[1.05]">
                        "Fra Usynlig til "
                        <span class="text-violet-600">"Markedsledende."</span>
                    </h1>
                </RevealOnScroll>
                <RevealOnScroll delay=200>
                    <p class="text-base sm:text-xl text-slate-600 font-medium max-w-2xl mx-auto leading-relaxed">
                        "Å se på prosessen er det første steget. Google-dominans er matematikk og AI i samspill."
                    </p>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn StatCard(value: &'static str, headline: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="p-8 sm:p-10 bg-white rounded-[32px] border border-slate-100 shadow-sm h-full">
            <span class="block text-5xl sm:text-7xl font-black tracking-tighter text-violet-600 mb-3">{value}</span>
            <h3 class="text-xl sm:text-2xl font-black text-slate-950 mb-3">{headline}</h3>
            <p class="text-sm sm:text-base text-slate-500 font-medium leading-relaxed">{body}</p>
        </div>
    }
}

#[component]
pub fn PainPointData() -> impl IntoView {
    view! {
        <section class="py-16 sm:py-28 bg-transparent relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6">
                <RevealOnScroll>
                    <h2 class="text-3xl sm:text-5xl font-extrabold tracking-tight text-slate-950 mb-12 sm:mb-16 text-center">
                        "Prisen på å "
                        <span class="text-rose-500">"ikke bli funnet."</span>
                    </h2>
                </RevealOnScroll>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-6">
                    <RevealOnScroll direction=RevealDirection::Left>
                        <StatCard
                            value="90%"
                            headline="får 0 trafikk."
                            body="De fleste bedrifter kaster bort penger på en digital fasade ingen ser."
                        />
                    </RevealOnScroll>
                    <RevealOnScroll delay=100>
                        <StatCard
                            value="95%"
                            headline="går til toppen."
                            body="Usynlighet koster bedrifter tapt omsetning hver eneste dag."
                        />
                    </RevealOnScroll>
                    <RevealOnScroll direction=RevealDirection::Right delay=200>
                        <div class="p-8 sm:p-10 bg-slate-950 text-white rounded-[32px] shadow-2xl h-full flex flex-col justify-between">
                            <div>
                                <Icon name=icons::ALERT_TRIANGLE class="w-8 h-8 mb-6 invert" />
                                <h3 class="text-2xl font-black mb-3">"Hvert minutt teller."</h3>
                                <p class="text-sm sm:text-base text-slate-400 font-medium leading-relaxed mb-6">
                                    "Mens du leser dette, søker potensielle kunder etter dine tjenester. De finner konkurrentene dine akkurat nå."
                                </p>
                            </div>
                            <ul class="space-y-3">
                                {["Stopp blødningen av tapt omsetning", "Begynn din klatring i dag"]
                                    .into_iter()
                                    .map(|item| view! {
                                        <li class="flex items-center gap-3 text-sm font-bold">
                                            <Icon name=icons::CHECK class="w-4 h-4 invert" />
                                            {item}
                                        </li>
                                    })
                                    .collect_view()}
                            </ul>
                        </div>
                    </RevealOnScroll>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn AiProcess() -> impl IntoView {
    let features = [
        (
            "Autonome Analyser",
            "Våre modeller skanner algoritme-endringer i sanntid og utfører 1000x flere beregninger.",
            icons::CPU,
        ),
        (
            "Lynrask Implementering",
            "Vi identifiserer tekniske hull på sekunder og genererer optimalisert innhold umiddelbart.",
            icons::ZAP,
        ),
    ];
    // (label, shown value, bar width %)
    let stats = [
        ("Søkeordsdybde", "98%", 98),
        ("Overvåkning", "24/7", 100),
        ("Innholds-skår", "9.2/10", 92),
    ];

    view! {
        <section class="py-16 sm:py-28 bg-slate-50/30 relative overflow-hidden">
            <div class="max-w-6xl mx-auto px-5 sm:px-6 grid grid-cols-1 lg:grid-cols-2 gap-12 lg:gap-20 items-center">
                <RevealOnScroll direction=RevealDirection::Left>
                    <h2 class="text-3xl sm:text-5xl font-extrabold tracking-tight text-slate-950 mb-6">
                        "Fremtidens SEO (2026-Teknologi)"
                    </h2>
                    <p class="text-base sm:text-lg text-slate-500 font-medium mb-10">
                        "Vi bruker kraftige AI-modeller for å utkonkurrere markedet."
                    </p>
                    <div class="space-y-6">
                        {features
                            .into_iter()
                            .map(|(title, desc, icon)| view! {
                                <div class="flex gap-5 items-start">
                                    <div class="w-12 h-12 rounded-2xl bg-violet-50 flex items-center justify-center shrink-0">
                                        <Icon name=icon class="w-6 h-6" />
                                    </div>
                                    <div>
                                        <h3 class="text-lg font-black text-slate-950 mb-1">{title}</h3>
                                        <p class="text-sm sm:text-base text-slate-500 font-medium leading-relaxed">{desc}</p>
                                    </div>
                                </div>
                            })
                            .collect_view()}
                    </div>
                </RevealOnScroll>

                <RevealOnScroll direction=RevealDirection::Right delay=150>
                    <div class="p-8 sm:p-10 bg-slate-950 rounded-[40px] shadow-2xl relative overflow-hidden">
                        <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-transparent via-violet-500/40 to-transparent animate-scan-tech"></div>
                        <div class="flex justify-between items-center mb-10">
                            <span class="text-white font-black text-lg">"AI Prosessering"</span>
                            <span class="flex items-center gap-2 text-[10px] font-black uppercase tracking-widest text-emerald-400">
                                <span class="w-2 h-2 rounded-full bg-emerald-400 animate-pulse"></span>
                                "Aktiv"
                            </span>
                        </div>
                        <div class="space-y-8">
                            {stats
                                .into_iter()
                                .enumerate()
                                .map(|(i, (label, value, width))| view! {
                                    <div>
                                        <div class="flex justify-between text-sm font-bold mb-3">
                                            <span class="text-slate-400">{label}</span>
                                            <span class="text-white">{value}</span>
                                        </div>
                                        <div class="h-2 w-full bg-white/5 rounded-full overflow-hidden">
                                            <div
                                                class="h-full bg-gradient-to-r from-violet-500 to-indigo-400 rounded-full animate-draw-line"
                                                style=format!("width: {width}%; animation-delay: {}ms", i * 200)
                                            ></div>
                                        </div>
                                    </div>
                                })
                                .collect_view()}
                        </div>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}
