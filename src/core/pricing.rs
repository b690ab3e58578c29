//! Subscription plans and the feature comparison matrix

use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Basic,
    Standard,
    Premium,
}

impl Tier {
    pub const ALL: [Tier; 3] = [Tier::Basic, Tier::Standard, Tier::Premium];

    pub fn label(&self) -> &'static str {
        match self {
            Tier::Basic => "Basic",
            Tier::Standard => "Standard",
            Tier::Premium => "Premium",
        }
    }

    /// Plan title shown on pricing cards, e.g. "⭐⭐ STANDARD"
    pub fn title(&self) -> String {
        let stars = "⭐".repeat(*self as usize + 1);
        format!("{stars} {}", self.label().to_uppercase())
    }

    /// Monthly price in NOK, excluding VAT
    pub fn monthly_price_nok(&self) -> u32 {
        match self {
            Tier::Basic => 599,
            Tier::Standard => 1499,
            Tier::Premium => 4999,
        }
    }
}

/// A pricing card
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Plan {
    pub tier: Tier,
    pub tagline: &'static str,
    pub description: &'static str,
    pub features: &'static [&'static str],
    pub highlighted: bool,
}

impl Plan {
    pub fn title(&self) -> String {
        self.tier.title()
    }

    pub fn price(&self) -> String {
        format_price_nok(self.tier.monthly_price_nok())
    }
}

pub const PLANS: [Plan; 3] = [
    Plan {
        tier: Tier::Basic,
        tagline: "Få kontroll på grunnmuren.",
        description: "Stopp tapet av kunder ved å fikse det tekniske fundamentet.",
        features: &[
            "Automatisk teknisk SEO-analyse",
            "PageSpeed Optimalisering",
            "Search Console-integrasjon",
            "Månedlig resultatrapport",
        ],
        highlighted: false,
    },
    Plan {
        tier: Tier::Standard,
        tagline: "Vekst og innholdsdominans.",
        description: "For bedrifter som aktivt vil klatre og knuse konkurrentene.",
        features: &[
            "Alt i Basic +",
            "AI-drevet innholdsoptimalisering",
            "Ukentlig Rank Tracking",
            "SEO-helse overvåkning",
            "Ukentlige suksessrapporter",
        ],
        highlighted: true,
    },
    Plan {
        tier: Tier::Premium,
        tagline: "Full automatisering og ROI.",
        description: "Total dominans. Vi overtar hele SEO-arbeidet for maksimal vekst.",
        features: &[
            "Alt i Standard +",
            "AI-drevet innholdsstrategi",
            "Dyp Konkurrentanalyse",
            "Avansert lenkeanalyse",
            "AI Forbedringsforslag (ukentlig)",
        ],
        highlighted: false,
    },
];

/// One row of the comparison table
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct ComparisonRow {
    pub feature: &'static str,
    /// Cheapest tier that includes the feature
    pub from: Tier,
}

impl ComparisonRow {
    pub fn included_in(&self, tier: Tier) -> bool {
        tier >= self.from
    }
}

pub const COMPARISON: [ComparisonRow; 9] = [
    ComparisonRow { feature: "Teknisk SEO-analyse", from: Tier::Basic },
    ComparisonRow { feature: "PageSpeed Overvåkning", from: Tier::Basic },
    ComparisonRow { feature: "Google Search Console Data", from: Tier::Basic },
    ComparisonRow { feature: "Innholdsoptimalisering (AI)", from: Tier::Standard },
    ComparisonRow { feature: "Rank Tracking", from: Tier::Standard },
    ComparisonRow { feature: "Konkurrentanalyse (AI)", from: Tier::Standard },
    ComparisonRow { feature: "Innholdsplaner & Bloggideer", from: Tier::Standard },
    ComparisonRow { feature: "Avansert Lenkestruktur", from: Tier::Standard },
    ComparisonRow { feature: "Prioritert Support", from: Tier::Premium },
];

/// Format a whole-krone amount with a space as thousands separator
pub fn format_price_nok(amount: u32) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(' ');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price() {
        assert_eq!(format_price_nok(0), "0");
        assert_eq!(format_price_nok(599), "599");
        assert_eq!(format_price_nok(1499), "1 499");
        assert_eq!(format_price_nok(4999), "4 999");
        assert_eq!(format_price_nok(1_250_000), "1 250 000");
    }

    #[test]
    fn test_plan_titles() {
        assert_eq!(Tier::Basic.title(), "⭐ BASIC");
        assert_eq!(Tier::Standard.title(), "⭐⭐ STANDARD");
        assert_eq!(Tier::Premium.title(), "⭐⭐⭐ PREMIUM");
    }

    #[test]
    fn test_exactly_one_highlighted_plan() {
        let highlighted: Vec<_> = PLANS.iter().filter(|p| p.highlighted).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].tier, Tier::Standard);
    }

    #[test]
    fn test_plans_are_ordered_by_price() {
        let prices: Vec<_> = PLANS.iter().map(|p| p.tier.monthly_price_nok()).collect();
        assert!(prices.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(PLANS[1].price(), "1 499");
    }

    #[test]
    fn test_comparison_inclusion_is_monotone() {
        for row in COMPARISON {
            for pair in Tier::ALL.windows(2) {
                if row.included_in(pair[0]) {
                    assert!(row.included_in(pair[1]), "{} lost in {:?}", row.feature, pair[1]);
                }
            }
        }
    }

    #[test]
    fn test_premium_includes_everything() {
        assert!(COMPARISON.iter().all(|r| r.included_in(Tier::Premium)));
        assert_eq!(
            COMPARISON.iter().filter(|r| r.included_in(Tier::Basic)).count(),
            3
        );
    }
}
