//! Home view sections

use leptos::prelude::*;

use crate::core::RevealDirection;
use crate::ui::icon::{Icon, icons};
use crate::ui::reveal::RevealOnScroll;

/// Floating particles behind the dashboard preview: (top %, left %, delay s, duration s).
/// Fixed so the server and the client render identical markup.
const PARTICLES: [(u8, u8, f32, f32); 8] = [
    (12, 8, 0.4, 6.2),
    (27, 71, 2.1, 8.5),
    (44, 33, 3.7, 5.4),
    (58, 89, 1.2, 9.1),
    (66, 17, 4.5, 7.3),
    (79, 52, 0.9, 6.8),
    (88, 94, 3.1, 5.9),
    (35, 46, 2.6, 9.7),
];

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="relative pt-24 pb-16 sm:pt-32 sm:pb-28 md:pt-44 md:pb-60 hero-gradient overflow-hidden">
            <div class="absolute top-1/4 -left-12 hidden xl:block animate-float-subtle opacity-20 pointer-events-none">
                <div class="p-5 bg-white rounded-[2rem] shadow-2xl border border-violet-100 rotate-12">
                    <Icon name=icons::SEARCH class="w-12 h-12" />
                </div>
            </div>
            <div
                class="absolute bottom-1/4 -right-16 hidden xl:block animate-float-subtle opacity-20 pointer-events-none"
                style="animation-delay: 2s"
            >
                <div class="p-5 bg-white rounded-[2rem] shadow-2xl border border-violet-100 -rotate-12">
                    <Icon name=icons::TRENDING_UP class="w-12 h-12" />
                </div>
            </div>

            <div class="max-w-6xl mx-auto px-5 sm:px-6 text-center relative z-10">
                <RevealOnScroll direction=RevealDirection::Down delay=100>
                    <div class="inline-flex items-center gap-2 px-3 py-1.5 rounded-full bg-white/50 backdrop-blur-md text-violet-600 text-[9px] sm:text-[10px] font-bold mb-6 sm:mb-10 border border-violet-100/50 uppercase tracking-widest shadow-sm">
                        <Icon name=icons::SPARKLES class="w-3 h-3" />
                        <span>"AI-drevet SEO for vekst"</span>
                    </div>
                </RevealOnScroll>
                <RevealOnScroll delay=200>
                    <h1 class="text-3xl sm:text-5xl md:text-7xl lg:text-8xl font-extrabold tracking-tighter text-slate-950 mb-6 sm:mb-10 max-w-5xl mx-auto leading-[1.1] md:leading-[0.9]">
                        "Ranger høyere på Google "
                        <span class="text-violet-600 font-script font-normal relative inline-block px-1 lowercase">
                            "automatisk."
                        </span>
                    </h1>
                </RevealOnScroll>
                <RevealOnScroll delay=300>
                    <p class="text-sm sm:text-lg md:text-xl mb-10 sm:mb-14 max-w-2xl mx-auto leading-relaxed font-semibold tracking-tight animate-subtext-dynamic px-2 opacity-90">
                        "For bedrifter som vil bli mer synlige og få flere kunder gjennom Google."
                    </p>
                </RevealOnScroll>
                <RevealOnScroll direction=RevealDirection::Scale delay=400>
                    <div class="flex flex-col sm:flex-row items-center justify-center gap-4">
                        <a
                            href="#priser"
                            class="group w-full sm:w-auto px-10 py-4 sm:px-12 sm:py-5 bg-slate-950 text-white rounded-full text-base sm:text-lg font-black tracking-tight hover:bg-violet-600 hover:scale-105 transition-all duration-500 flex items-center justify-center gap-3 active:scale-95 shadow-xl"
                        >
                            "Begynn nå"
                            <Icon name=icons::ARROW_RIGHT class="w-5 h-5 invert transition-transform duration-300 group-hover:translate-x-1.5" />
                        </a>
                    </div>
                </RevealOnScroll>
            </div>
        </section>
    }
}

#[component]
fn Kpi(label: &'static str, value: &'static str, color: &'static str, delta: &'static str) -> impl IntoView {
    let delta_class = if delta.starts_with('+') {
        "text-[9px] px-1.5 py-0.5 rounded-md font-bold bg-emerald-50 text-emerald-600"
    } else {
        "text-[9px] px-1.5 py-0.5 rounded-md font-bold bg-slate-50 text-slate-600"
    };

    view! {
        <div class="bg-white p-3 rounded-xl border border-slate-100 shadow-sm flex flex-col justify-between h-20 sm:h-24">
            <div class="flex justify-between items-start">
                <span class="text-[10px] text-slate-400 font-bold uppercase tracking-wide">{label}</span>
                <span class=delta_class>{delta}</span>
            </div>
            <span class=format!("text-lg sm:text-2xl font-black {color}")>{value}</span>
            <div class="h-1 w-full bg-slate-50 rounded-full overflow-hidden">
                <div class="h-full bg-current opacity-20 w-2/3"></div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardPreview() -> impl IntoView {
    let sidebar = [icons::HOME, icons::ACTIVITY, icons::LAYERS, icons::USER, icons::WRENCH];

    view! {
        <div class="max-w-6xl mx-auto px-4 sm:px-6 -mt-8 sm:-mt-20 md:-mt-32 relative z-20">
            <RevealOnScroll direction=RevealDirection::Scale delay=200>
                <div class="relative group">
                    <div class="bg-white/40 p-1 rounded-[24px] sm:rounded-[32px] border border-white shadow-[0_40px_80px_-20px_rgba(0,0,0,0.12)] backdrop-blur-md overflow-hidden relative">
                        // AI processing backdrop
                        <div class="absolute inset-0 pointer-events-none overflow-hidden opacity-40 z-0" aria-hidden="true">
                            <div class="absolute inset-0 grid-pattern opacity-10"></div>
                            <div class="absolute top-0 left-0 w-full h-1 bg-gradient-to-r from-transparent via-violet-500/30 to-transparent animate-scan-tech"></div>
                            <div
                                class="absolute top-[40%] left-0 w-full h-[1px] bg-gradient-to-r from-transparent via-indigo-500/20 to-transparent animate-scan-tech"
                                style="animation-delay: 1.5s; animation-duration: 6s"
                            ></div>
                            {PARTICLES
                                .iter()
                                .map(|(top, left, delay, duration)| {
                                    view! {
                                        <div
                                            class="absolute w-1 h-1 bg-violet-400 rounded-full blur-sm animate-float-particle"
                                            style=format!(
                                                "top: {top}%; left: {left}%; animation-delay: {delay}s; animation-duration: {duration}s",
                                            )
                                        ></div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <div class="bg-white rounded-[20px] sm:rounded-[28px] flex overflow-hidden h-[320px] sm:h-[500px] md:h-[650px] shadow-sm border border-slate-100/50 relative z-10">
                            // Sidebar
                            <div class="hidden sm:flex flex-col w-12 sm:w-16 border-r border-slate-100 bg-white pt-4 items-center gap-4 shrink-0">
                                <div class="w-8 h-8 bg-slate-900 rounded-lg flex items-center justify-center text-white font-bold text-xs mb-4">"S"</div>
                                {sidebar
                                    .into_iter()
                                    .enumerate()
                                    .map(|(i, icon)| {
                                        let class = if i == 0 { "p-2 rounded-lg bg-violet-50" } else { "p-2 rounded-lg opacity-40" };
                                        view! {
                                            <div class=class>
                                                <Icon name=icon class="w-[18px] h-[18px]" />
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>

                            <div class="flex-1 flex flex-col bg-slate-50/30 overflow-hidden">
                                // Header
                                <div class="h-12 md:h-16 border-b border-slate-100 bg-white flex items-center justify-between px-4 md:px-8 shrink-0">
                                    <div class="flex items-center gap-2 sm:gap-4">
                                        <div>
                                            <h3 class="text-xs sm:text-sm font-bold text-slate-900 tracking-tight">"Oversikt Dashboard"</h3>
                                            <p class="text-[10px] text-slate-400 font-medium hidden sm:block">"Sist oppdatert: Akkurat nå"</p>
                                        </div>
                                        <div class="hidden sm:flex items-center gap-1.5 px-2 py-0.5 bg-emerald-50 rounded-full border border-emerald-100">
                                            <div class="w-1.5 h-1.5 bg-emerald-500 rounded-full animate-pulse"></div>
                                            <span class="text-[9px] font-bold text-emerald-600 uppercase">"System Normal"</span>
                                        </div>
                                    </div>
                                    <div class="hidden md:flex gap-4">
                                        <div class="flex flex-col items-end">
                                            <span class="text-[9px] text-slate-400 font-bold uppercase">"Nettside helse"</span>
                                            <span class="text-xs font-black text-slate-900">"98.5%"</span>
                                        </div>
                                        <div class="flex flex-col items-end">
                                            <span class="text-[9px] text-slate-400 font-bold uppercase">"Aktive søkeord"</span>
                                            <span class="text-xs font-black text-slate-900">"2,341"</span>
                                        </div>
                                    </div>
                                </div>

                                <div class="flex-1 overflow-y-auto p-4 sm:p-6 space-y-4">
                                    <div class="grid grid-cols-2 md:grid-cols-4 gap-3 sm:gap-4">
                                        <Kpi label="Total Trafikk" value="124.5k" color="text-violet-600" delta="+12%" />
                                        <Kpi label="Synlighet" value="89.2%" color="text-emerald-600" delta="+4.1%" />
                                        <Kpi label="Domene Autoritet" value="54" color="text-amber-600" delta="+1" />
                                        <Kpi label="Tekniske Feil" value="0" color="text-slate-900" delta="-2" />
                                    </div>

                                    <div class="grid grid-cols-1 md:grid-cols-12 gap-4">
                                        <Scorecard />
                                        <TrafficChart />
                                    </div>

                                    <div class="grid-cols-3 gap-4 h-24 hidden sm:grid">
                                        <div class="bg-white p-3 rounded-xl border border-slate-100 shadow-sm overflow-hidden">
                                            <h4 class="text-[9px] font-bold text-slate-400 uppercase mb-2">"Topp Søkeord"</h4>
                                            <div class="space-y-1.5">
                                                {[("seo byrå", 1), ("digital markedsføring", 3)]
                                                    .into_iter()
                                                    .map(|(word, rank)| view! {
                                                        <div class="flex justify-between items-center text-[10px] font-medium border-b border-slate-50 pb-1">
                                                            <span class="text-slate-700">{word}</span>
                                                            <span class="text-violet-600 font-bold">{format!("#{rank}")}</span>
                                                        </div>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div class="bg-white p-3 rounded-xl border border-slate-100 shadow-sm overflow-hidden">
                                            <h4 class="text-[9px] font-bold text-slate-400 uppercase mb-2">"Core Web Vitals"</h4>
                                            <div class="flex items-end gap-2 h-10 mt-2">
                                                {[("LCP", 80, "bg-emerald-400"), ("FID", 95, "bg-emerald-400"), ("CLS", 60, "bg-amber-400")]
                                                    .into_iter()
                                                    .map(|(label, value, color)| view! {
                                                        <div class="flex-1 flex flex-col justify-end items-center gap-1">
                                                            <div class=format!("w-full rounded-t-sm {color}") style=format!("height: {value}%")></div>
                                                            <span class="text-[8px] font-bold text-slate-400">{label}</span>
                                                        </div>
                                                    })
                                                    .collect_view()}
                                            </div>
                                        </div>
                                        <div class="bg-slate-900 p-3 rounded-xl border border-slate-800 shadow-sm overflow-hidden relative flex flex-col justify-center items-center text-center">
                                            <div class="absolute inset-0 bg-violet-500/10 animate-pulse"></div>
                                            <Icon name=icons::ACTIVITY class="w-5 h-5 mb-2 relative z-10 invert" />
                                            <span class="text-[9px] font-bold text-slate-400 uppercase relative z-10">"AI Agent"</span>
                                            <span class="text-[10px] font-black text-white relative z-10">"Working..."</span>
                                        </div>
                                    </div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </RevealOnScroll>
        </div>
    }
}

#[component]
fn Scorecard() -> impl IntoView {
    view! {
        <div class="md:col-span-4 bg-white p-4 rounded-2xl border border-slate-100 shadow-sm flex flex-col">
            <div class="flex justify-between items-center mb-4">
                <h4 class="font-bold text-slate-900 text-xs uppercase tracking-wide">"SEO Scorecard"</h4>
                <Icon name=icons::WRENCH class="w-3.5 h-3.5 opacity-30" />
            </div>
            <div class="flex items-center gap-6 mb-6">
                <div class="relative">
                    <svg class="w-20 h-20 transform -rotate-90">
                        <circle cx="50%" cy="50%" r="40%" stroke="currentColor" stroke-width="6" fill="transparent" class="text-slate-50" />
                        <circle
                            cx="50%"
                            cy="50%"
                            r="40%"
                            stroke="currentColor"
                            stroke-width="6"
                            fill="transparent"
                            class="text-violet-500"
                            stroke-dasharray="200"
                            stroke-dashoffset="30"
                        />
                    </svg>
                    <div class="absolute inset-0 flex flex-col items-center justify-center">
                        <span class="text-xl font-black text-slate-900">"85"</span>
                    </div>
                </div>
                <div class="flex flex-col gap-2 flex-1">
                    {["Teknisk", "Innhold", "Lenker"]
                        .into_iter()
                        .enumerate()
                        .map(|(i, label)| {
                            let score = 90 - i * 5;
                            view! {
                                <div class="flex flex-col gap-1">
                                    <div class="flex justify-between text-[9px] font-bold text-slate-500">
                                        <span>{label}</span>
                                        <span>{format!("{score}%")}</span>
                                    </div>
                                    <div class="h-1.5 w-full bg-slate-50 rounded-full overflow-hidden">
                                        <div class="h-full bg-slate-800 rounded-full" style=format!("width: {score}%")></div>
                                    </div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="mt-auto border-t border-slate-50 pt-3 flex justify-between items-center">
                <span class="text-[10px] text-slate-400 font-medium">"Neste scan om 2t 14m"</span>
                <span class="text-[10px] font-bold text-violet-600 bg-violet-50 px-2 py-1 rounded-md">"Scan Nå"</span>
            </div>
        </div>
    }
}

#[component]
fn TrafficChart() -> impl IntoView {
    const ORGANIC: &str = "M0 180 C 50 170, 100 140, 150 150 C 200 160, 250 120, 300 110 C 350 100, 400 130, 450 90 C 500 50, 550 60, 600 40 C 650 20, 700 30, 750 10 L 800 5";
    const DIRECT: &str = "M0 190 C 80 180, 160 170, 240 180 C 320 190, 400 160, 480 150 C 560 140, 640 130, 720 120 L 800 110";

    view! {
        <div class="md:col-span-8 bg-white p-4 rounded-2xl border border-slate-100 shadow-sm flex flex-col relative overflow-hidden">
            <div class="flex justify-between items-center mb-4 z-10">
                <div>
                    <h4 class="text-xs font-bold text-slate-900 uppercase tracking-wide">"Trafikk Analyse"</h4>
                    <div class="flex gap-2 text-[9px] text-slate-400 font-medium mt-0.5">
                        <span class="flex items-center gap-1"><div class="w-1.5 h-1.5 rounded-full bg-violet-500"></div>"Organisk"</span>
                        <span class="flex items-center gap-1"><div class="w-1.5 h-1.5 rounded-full bg-slate-200"></div>"Direkte"</span>
                    </div>
                </div>
                <div class="flex gap-1 bg-slate-50 p-1 rounded-lg border border-slate-100">
                    {["1U", "1M", "3M", "1Å"]
                        .into_iter()
                        .enumerate()
                        .map(|(i, range)| {
                            let class = if i == 1 {
                                "text-[9px] font-bold px-2 py-0.5 rounded bg-white shadow-sm text-slate-900"
                            } else {
                                "text-[9px] font-bold px-2 py-0.5 rounded text-slate-400"
                            };
                            view! { <span class=class>{range}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
            <div class="flex-1 relative min-h-[140px] border-b border-l border-slate-50">
                <svg class="absolute inset-0 w-full h-full overflow-visible z-10" viewBox="0 0 800 200" preserveAspectRatio="none">
                    <path d=ORGANIC stroke="#7c3aed" stroke-width="2" fill="none" stroke-linecap="round" stroke-linejoin="round" />
                    <path d=format!("{ORGANIC} L 800 200 L 0 200 Z") fill="#7c3aed" fill-opacity="0.06" />
                    <path d=DIRECT stroke="#cbd5e1" stroke-width="2" stroke-dasharray="4 4" fill="none" />
                </svg>
                <div class="absolute top-[30%] left-[60%] bg-slate-900 text-white text-[9px] font-bold px-2 py-1 rounded shadow-xl transform -translate-x-1/2 -translate-y-full z-20">
                    "2,451"
                </div>
                <div class="absolute top-[30%] left-[60%] w-2 h-2 bg-violet-600 border-2 border-white rounded-full z-20 transform -translate-x-1/2 -translate-y-1/2"></div>
            </div>
        </div>
    }
}

#[component]
pub fn PainPoints() -> impl IntoView {
    let points = [
        ("Lave Google-rangeringer hindrer din suksess.", icons::TRENDING_DOWN),
        ("Bortkastet tid på strategier som ikke virker.", icons::CLOCK),
        ("Frustrasjon over manglende kunder.", icons::FROWN),
        ("Tapte muligheter for vekst og salg.", icons::TRENDING_DOWN),
    ];

    view! {
        <section class="py-12 sm:py-24 md:py-32 bg-transparent overflow-hidden relative text-center">
            <div class="max-w-6xl mx-auto px-5 sm:px-6">
                <RevealOnScroll>
                    <div class="text-center mb-10 sm:mb-16 md:mb-20">
                        <h2 class="text-2xl sm:text-4xl md:text-5xl font-extrabold tracking-tight text-slate-950 mb-3 sm:mb-6">
                            "Synlighet er nøkkelen"
                        </h2>
                        <p class="text-sm sm:text-lg md:text-xl text-violet-600 font-semibold opacity-90 px-4">
                            "Gir ikke markedsføringen din resultater?"
                        </p>
                    </div>
                </RevealOnScroll>
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-3 sm:gap-5 relative z-10 text-left">
                    {points
                        .into_iter()
                        .enumerate()
                        .map(|(i, (text, icon))| {
                            view! {
                                <RevealOnScroll direction=RevealDirection::alternating(i) delay={i as u32 * 50}>
                                    <div class="flex items-center gap-4 sm:gap-6 p-6 sm:p-8 bg-white/60 backdrop-blur-sm rounded-2xl sm:rounded-3xl border border-slate-100 shadow-sm hover:shadow-md transition-all duration-300 group relative overflow-hidden">
                                        <div class="w-10 h-10 sm:w-14 sm:h-14 rounded-xl bg-slate-50 flex items-center justify-center group-hover:bg-rose-50 transition-colors shrink-0 relative z-10">
                                            <Icon name=icon class="w-6 h-6 opacity-60" />
                                        </div>
                                        <p class="text-slate-700 font-bold text-sm sm:text-lg leading-snug relative z-10">{text}</p>
                                    </div>
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
pub fn ValueProposition() -> impl IntoView {
    let benefits = [
        ("Høyere rangering", "AI-drevne strategier for Norge.", icons::TRENDING_UP),
        ("Økt trafikk", "Automatisert synlighet for vekst.", icons::ZAP),
        ("Sjelefred", "Full oversikt over din dominans.", icons::SHIELD_CHECK),
    ];

    view! {
        <section class="py-16 sm:py-32 bg-slate-50/20 relative overflow-hidden text-center">
            <div class="absolute inset-0 pointer-events-none -z-10">
                <div class="absolute top-[-20%] left-[-10%] w-[50rem] h-[50rem] bg-violet-200/10 rounded-full blur-[140px] animate-mesh opacity-60"></div>
            </div>

            <div class="max-w-6xl mx-auto px-5 sm:px-6 relative z-10">
                <div class="grid grid-cols-1 lg:grid-cols-2 gap-10 sm:gap-20 items-center">
                    <RevealOnScroll direction=RevealDirection::Left>
                        <div class="max-w-xl text-center lg:text-left">
                            <h2 class="text-2xl sm:text-4xl lg:text-6xl font-extrabold tracking-tight text-slate-950 mb-4 sm:mb-8 leading-tight">
                                "Øk din synlighet på nett"
                            </h2>
                            <p class="text-sm sm:text-lg md:text-xl text-slate-600 leading-relaxed mb-8 font-medium opacity-80">
                                "Forvandle frustrasjon til målbar suksess med banebrytende SEO-løsninger skreddersydd for din bedrift."
                            </p>
                            <div class="hidden lg:flex gap-4">
                                <div class="w-20 h-20 bg-violet-50 rounded-2xl flex items-center justify-center rotate-6 shadow-sm">
                                    <Icon name=icons::GLOBE class="w-8 h-8" />
                                </div>
                                <div class="w-20 h-20 bg-indigo-50 rounded-2xl flex items-center justify-center -rotate-3 shadow-sm mt-8">
                                    <Icon name=icons::TARGET class="w-8 h-8" />
                                </div>
                                <div class="w-20 h-20 bg-fuchsia-50 rounded-2xl flex items-center justify-center rotate-12 shadow-sm">
                                    <Icon name=icons::SPARKLES class="w-8 h-8" />
                                </div>
                            </div>
                        </div>
                    </RevealOnScroll>
                    <div class="grid grid-cols-1 sm:grid-cols-2 gap-4 sm:gap-6 text-left">
                        {benefits
                            .into_iter()
                            .enumerate()
                            .map(|(i, (title, desc, icon))| {
                                view! {
                                    <RevealOnScroll
                                        direction=RevealDirection::Right
                                        delay={i as u32 * 100}
                                        class={if i == 0 { "sm:col-span-2" } else { "" }}
                                    >
                                        <div class="p-6 sm:p-8 rounded-[28px] sm:rounded-[36px] bg-white/80 backdrop-blur-sm border border-slate-100 group hover:shadow-xl hover:border-violet-100 transition-all duration-500 h-full flex flex-col sm:flex-row sm:items-center gap-5 relative overflow-hidden">
                                            <div class="w-12 h-12 sm:w-16 sm:h-16 rounded-2xl bg-slate-50 flex items-center justify-center shrink-0 relative z-10">
                                                <Icon name=icon class="w-7 h-7" />
                                            </div>
                                            <div class="flex-1 relative z-10">
                                                <h3 class="text-base sm:text-xl font-bold text-slate-900 mb-1">{title}</h3>
                                                <p class="text-xs sm:text-base text-slate-500 leading-relaxed font-medium">{desc}</p>
                                            </div>
                                        </div>
                                    </RevealOnScroll>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
pub fn StepPlan() -> impl IntoView {
    let steps = [
        ("Velg plan", "Kom i gang på sekunder.", icons::TARGET),
        ("Legg til URL", "Vi analyserer umiddelbart.", icons::GLOBE),
        ("Se veksten", "Sikt optimaliserer alt.", icons::ACTIVITY),
    ];

    view! {
        <section id="prosess" class="py-16 sm:py-32 bg-white/40 relative overflow-hidden text-center">
            <div class="absolute inset-0 grid-pattern opacity-[0.06] pointer-events-none"></div>
            <div class="max-w-6xl mx-auto px-5 relative z-10">
                <RevealOnScroll>
                    <div class="mb-12 sm:mb-24">
                        <h2 class="text-2xl sm:text-4xl md:text-5xl lg:text-6xl font-extrabold tracking-tight text-slate-950 mb-4 sm:mb-8">
                            "3 enkle steg"
                        </h2>
                        <p class="text-sm sm:text-lg md:text-xl text-slate-600 font-medium max-w-2xl mx-auto leading-relaxed opacity-90 px-4">
                            "Vi har forenklet SEO. Slik tar vi din bedrift fra usynlig til markedsleder."
                        </p>
                    </div>
                </RevealOnScroll>
                <div class="grid grid-cols-1 md:grid-cols-3 gap-10 sm:gap-16 relative">
                    <div class="hidden md:block absolute top-[30%] left-[15%] right-[15%] h-[1px] bg-slate-100 -z-0"></div>
                    {steps
                        .into_iter()
                        .enumerate()
                        .map(|(i, (title, desc, icon))| {
                            view! {
                                <RevealOnScroll delay={i as u32 * 150}>
                                    <div class="relative z-10 flex flex-col items-center group cursor-default">
                                        <div class="w-20 h-20 sm:w-28 sm:h-28 rounded-[32px] sm:rounded-[44px] bg-white border border-slate-100 shadow-sm flex items-center justify-center mb-8 relative group-hover:-translate-y-2 transition-transform duration-500 overflow-hidden">
                                            <div class="absolute -top-1 -right-1 w-8 h-8 sm:w-10 sm:h-10 bg-slate-950 text-white rounded-xl flex items-center justify-center text-xs sm:text-sm font-black border-2 border-white z-20">
                                                {format!("0{}", i + 1)}
                                            </div>
                                            <Icon name=icon class="w-8 h-8 relative z-10" />
                                        </div>
                                        <h3 class="text-xl sm:text-2xl font-bold text-slate-950 mb-3 group-hover:text-violet-600 transition-colors">
                                            {title}
                                        </h3>
                                        <p class="text-sm sm:text-lg text-slate-600 font-medium leading-relaxed max-w-xs mx-auto">{desc}</p>
                                    </div>
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
pub fn Insight() -> impl IntoView {
    view! {
        <section class="py-20 sm:py-32 bg-transparent relative overflow-hidden">
            <div class="max-w-7xl mx-auto px-5 sm:px-6 relative">
                <div class="grid grid-cols-1 lg:grid-cols-12 gap-12 lg:gap-16 items-start">
                    <div class="lg:col-span-5 space-y-8">
                        <RevealOnScroll direction=RevealDirection::Left>
                            <div class="inline-flex items-center gap-2 px-4 py-1.5 rounded-full bg-violet-50 text-violet-600 text-[10px] font-black uppercase tracking-widest mb-4 border border-violet-100">
                                <Icon name=icons::SPARKLES class="w-3 h-3" />
                                <span>"Vi hjelper deg å lykkes"</span>
                            </div>
                            <h2 class="text-4xl sm:text-5xl lg:text-6xl font-black text-slate-950 leading-[1.1] tracking-tight">
                                "Føles markedsføringen "
                                <span class="text-violet-600">"ineffektiv?"</span>
                            </h2>
                            <div class="space-y-6 text-slate-600 font-medium leading-relaxed">
                                <p class="text-lg sm:text-xl text-slate-900 font-bold">
                                    "Hver dag sliter utallige små og mellomstore bedrifter med lav synlighet på Google."
                                </p>
                                <p class="text-base sm:text-lg opacity-80">
                                    "Dette fører til tapte muligheter og frustrerte eiere. Hos Sikt bruker vi moderne AI-løsninger for å optimalisere nettstedet ditt, slik at du ikke bare forbedrer rangeringene dine, men også får den oppmerksomheten du fortjener."
                                </p>
                                <p class="text-base sm:text-lg opacity-80">
                                    "Ikke la ineffektiv markedsføring holde deg tilbake; ta grep i dag og se bedriften din blomstre med økt nettstedstrafikk og synlighet."
                                </p>
                            </div>
                            <div class="pt-6">
                                <a
                                    href="#priser"
                                    class="group inline-flex items-center gap-3 bg-slate-950 text-white px-8 py-4 rounded-2xl font-bold text-lg hover:bg-violet-600 transition-all shadow-xl active:scale-95"
                                >
                                    "Start din suksesshistorie"
                                    <Icon name=icons::ARROW_RIGHT class="w-5 h-5 invert group-hover:translate-x-1 transition-transform" />
                                </a>
                            </div>
                        </RevealOnScroll>
                    </div>

                    <div class="lg:col-span-7 grid grid-cols-1 md:grid-cols-2 gap-6">
                        <RevealOnScroll class="md:col-span-2">
                            <div class="p-8 sm:p-10 bg-white border border-slate-100 rounded-[32px] shadow-sm hover:shadow-xl transition-all duration-500 group relative overflow-hidden">
                                <div class="flex flex-col sm:flex-row items-start sm:items-center gap-6 mb-6">
                                    <div class="w-14 h-14 bg-rose-50 rounded-2xl flex items-center justify-center shrink-0 shadow-inner">
                                        <Icon name=icons::SEARCH_CHECK class="w-7 h-7" />
                                    </div>
                                    <h3 class="text-2xl sm:text-3xl font-black text-slate-950">"Vi forstår frustrasjonen din"</h3>
                                </div>
                                <p class="text-base sm:text-lg text-slate-500 font-medium leading-relaxed max-w-xl">
                                    "Vi vet hvor kjedelig det er å legge ned arbeid uten å se resultater. Våre AI-løsninger sikrer effektive strategier som øker rangeringene der det faktisk gir verdi for din bunnlinje."
                                </p>
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll delay=100>
                            <div class="p-8 bg-indigo-50/30 border border-indigo-100/50 rounded-[32px] shadow-sm hover:shadow-xl transition-all duration-500 group relative h-full flex flex-col justify-between overflow-hidden">
                                <div class="w-12 h-12 bg-indigo-600 rounded-xl flex items-center justify-center mb-6 shadow-lg">
                                    <Icon name=icons::CPU class="w-6 h-6 invert" />
                                </div>
                                <div>
                                    <h3 class="text-xl font-black text-slate-950 mb-3">"Drevet av moderne AI"</h3>
                                    <p class="text-sm sm:text-base text-slate-600 font-medium leading-relaxed">
                                        "Vi bruker banebrytende teknologi for å maksimere rekkevidden din og automatisere suksess på en måte tradisjonelle metoder ikke kan."
                                    </p>
                                </div>
                            </div>
                        </RevealOnScroll>

                        <RevealOnScroll delay=200>
                            <div class="p-8 bg-emerald-50/30 border border-emerald-100/50 rounded-[32px] shadow-sm hover:shadow-xl transition-all duration-500 group relative h-full flex flex-col justify-between overflow-hidden">
                                <div class="w-12 h-12 bg-emerald-600 rounded-xl flex items-center justify-center mb-6 shadow-lg">
                                    <Icon name=icons::TRENDING_UP class="w-6 h-6 invert" />
                                </div>
                                <div>
                                    <h3 class="text-xl font-black text-slate-950 mb-3">"Velprøvde strategier"</h3>
                                    <p class="text-sm sm:text-base text-slate-600 font-medium leading-relaxed">
                                        "Utviklet spesifikt for små bedrifter i Norge med fokus på vekst. Vi leverer målbare resultater som faktisk merkes på trafikken din."
                                    </p>
                                </div>
                            </div>
                        </RevealOnScroll>
                    </div>
                </div>
            </div>
        </section>
    }
}
