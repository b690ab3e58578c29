//! Top-level page compositions and the sections each one renders.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the three top-level views of the site
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewName {
    #[default]
    Home,
    DeepDive,
    Technology,
}

impl ViewName {
    pub const ALL: [ViewName; 3] = [ViewName::Home, ViewName::DeepDive, ViewName::Technology];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewName::Home => "home",
            ViewName::DeepDive => "deepdive",
            ViewName::Technology => "technology",
        }
    }

    /// Label used in the navigation bar
    pub fn nav_label(&self) -> &'static str {
        match self {
            ViewName::Home => "Hjem",
            ViewName::DeepDive => "Bli synlig på Google",
            ViewName::Technology => "Teknologien",
        }
    }

    /// Document title for the view
    pub fn page_title(&self) -> &'static str {
        match self {
            ViewName::Home => "Sikt - Ranger høyere på Google automatisk",
            ViewName::DeepDive => "Sikt - Fra usynlig til markedsledende",
            ViewName::Technology => "Sikt - Teknologien bak synligheten",
        }
    }

    /// Meta description for the view
    pub fn description(&self) -> &'static str {
        match self {
            ViewName::Home => {
                "AI-drevet SEO for bedrifter som vil bli mer synlige og få flere kunder gjennom Google."
            }
            ViewName::DeepDive => {
                "Google-dominans er matematikk og AI i samspill. Se hvordan Sikt tar deg fra usynlig til markedsledende."
            }
            ViewName::Technology => {
                "Teknisk overvåkning, Search Console-data og AI-optimalisering i sanntid. Teknologien som setter din bedrift på kartet."
            }
        }
    }

    /// Ordered sections rendered for this view
    pub fn sections(&self) -> &'static [Section] {
        match self {
            ViewName::Home => &HOME_SECTIONS,
            ViewName::DeepDive => &DEEP_DIVE_SECTIONS,
            ViewName::Technology => &TECHNOLOGY_SECTIONS,
        }
    }
}

impl fmt::Display for ViewName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether a pricing block reports the chosen plan upward
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PricingMode {
    Display,
    Selectable,
}

/// Presentational blocks a view is composed of
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Hero,
    DashboardPreview,
    PainPoints,
    ValueProposition,
    StepPlan,
    Insight,
    Pricing(PricingMode),
    Faq,
    DeepDiveHero,
    PainPointData,
    AiProcess,
    GeoFaq,
    TechnologyHero,
    FeatureMatrix,
    DashboardSection,
    ComparisonTable,
    TechCta,
}

const HOME_SECTIONS: [Section; 8] = [
    Section::Hero,
    Section::DashboardPreview,
    Section::PainPoints,
    Section::ValueProposition,
    Section::StepPlan,
    Section::Insight,
    Section::Pricing(PricingMode::Display),
    Section::Faq,
];

const DEEP_DIVE_SECTIONS: [Section; 5] = [
    Section::DeepDiveHero,
    Section::PainPointData,
    Section::AiProcess,
    Section::Pricing(PricingMode::Selectable),
    Section::GeoFaq,
];

const TECHNOLOGY_SECTIONS: [Section; 5] = [
    Section::TechnologyHero,
    Section::FeatureMatrix,
    Section::DashboardSection,
    Section::ComparisonTable,
    Section::TechCta,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_view_is_home() {
        assert_eq!(ViewName::default(), ViewName::Home);
    }

    #[test]
    fn test_display_matches_serialized_name() {
        for view in ViewName::ALL {
            assert_eq!(
                serde_json::to_string(&view).unwrap(),
                format!("\"{}\"", view)
            );
        }
    }

    #[test]
    fn test_view_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ViewName::DeepDive).unwrap(),
            "\"deepdive\""
        );
    }

    #[test]
    fn test_home_sections_order() {
        let sections = ViewName::Home.sections();
        assert_eq!(sections.first(), Some(&Section::Hero));
        assert_eq!(sections.last(), Some(&Section::Faq));
        assert!(sections.contains(&Section::Pricing(PricingMode::Display)));
    }

    #[test]
    fn test_only_deep_dive_pricing_is_selectable() {
        for view in ViewName::ALL {
            let selectable = view
                .sections()
                .contains(&Section::Pricing(PricingMode::Selectable));
            assert_eq!(selectable, view == ViewName::DeepDive);
        }
    }

    #[test]
    fn test_technology_has_no_pricing() {
        assert!(
            !ViewName::Technology
                .sections()
                .iter()
                .any(|s| matches!(s, Section::Pricing(_)))
        );
    }
}
