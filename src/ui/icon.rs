use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name without the .svg extension
    name: &'static str,
    #[prop(default = "w-5 h-5")] class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=""
            aria-hidden="true"
            draggable=false
        />
    }
}

/// Icon file names, resolved against `/icons/<name>.svg`. The artwork is
/// deployed next to the site and is not part of this crate.
pub mod icons {
    pub const ACTIVITY: &str = "activity";
    pub const ALERT_TRIANGLE: &str = "alert-triangle";
    pub const ARROW_RIGHT: &str = "arrow-right";
    pub const ARROW_UP_RIGHT: &str = "arrow-up-right";
    pub const BAR_CHART: &str = "bar-chart-3";
    pub const BRAIN_CIRCUIT: &str = "brain-circuit";
    pub const CHECK: &str = "check";
    pub const CHEVRON_DOWN: &str = "chevron-down";
    pub const CLOCK: &str = "clock";
    pub const CPU: &str = "cpu";
    pub const FROWN: &str = "frown";
    pub const GLOBE: &str = "globe";
    pub const HELP_CIRCLE: &str = "help-circle";
    pub const HOME: &str = "home";
    pub const LAYERS: &str = "layers";
    pub const LIGHTBULB: &str = "lightbulb";
    pub const LINKEDIN: &str = "linkedin";
    pub const MAIL: &str = "mail";
    pub const MENU: &str = "menu";
    pub const ROCKET: &str = "rocket";
    pub const SEARCH: &str = "search";
    pub const SEARCH_CHECK: &str = "search-check";
    pub const SHIELD: &str = "shield";
    pub const SHIELD_CHECK: &str = "shield-check";
    pub const SPARKLES: &str = "sparkles";
    pub const TARGET: &str = "target";
    pub const TRENDING_DOWN: &str = "trending-down";
    pub const TRENDING_UP: &str = "trending-up";
    pub const TWITTER: &str = "twitter";
    pub const USER: &str = "user";
    pub const WRENCH: &str = "wrench";
    pub const X: &str = "x";
    pub const ZAP: &str = "zap";
}
