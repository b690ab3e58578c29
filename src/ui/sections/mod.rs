//! Presentational page sections
//!
//! Every block a view is composed of lives here. `SectionView` maps a
//! `Section` to its component so a view is just a list of sections.

mod deepdive;
mod faq;
mod home;
mod pricing;
mod technology;

use leptos::prelude::*;

use crate::core::Section;

pub use deepdive::{AiProcess, DeepDiveHero, PainPointData};
pub use faq::{Faq, GeoFaq};
pub use home::{DashboardPreview, Hero, Insight, PainPoints, StepPlan, ValueProposition};
pub use pricing::Pricing;
pub use technology::{ComparisonTable, DashboardSection, FeatureMatrix, TechCta, TechnologyHero};

#[component]
pub fn SectionView(section: Section) -> impl IntoView {
    match section {
        Section::Hero => view! { <Hero /> }.into_any(),
        Section::DashboardPreview => view! { <DashboardPreview /> }.into_any(),
        Section::PainPoints => view! { <PainPoints /> }.into_any(),
        Section::ValueProposition => view! { <ValueProposition /> }.into_any(),
        Section::StepPlan => view! { <StepPlan /> }.into_any(),
        Section::Insight => view! { <Insight /> }.into_any(),
        Section::Pricing(mode) => view! { <Pricing mode=mode /> }.into_any(),
        Section::Faq => view! { <Faq /> }.into_any(),
        Section::DeepDiveHero => view! { <DeepDiveHero /> }.into_any(),
        Section::PainPointData => view! { <PainPointData /> }.into_any(),
        Section::AiProcess => view! { <AiProcess /> }.into_any(),
        Section::GeoFaq => view! { <GeoFaq /> }.into_any(),
        Section::TechnologyHero => view! { <TechnologyHero /> }.into_any(),
        Section::FeatureMatrix => view! { <FeatureMatrix /> }.into_any(),
        Section::DashboardSection => view! { <DashboardSection /> }.into_any(),
        Section::ComparisonTable => view! { <ComparisonTable /> }.into_any(),
        Section::TechCta => view! { <TechCta /> }.into_any(),
    }
}
