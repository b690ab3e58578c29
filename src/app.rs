use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::core::meta::SiteMeta;
use crate::core::{CLIENT_ID_META, GOOGLE_SDK_URL, ProviderConfig};
use crate::ui::{NotFoundPage, SitePage};

/// Server-rendered document. Plain `name`/`rel` tags go here; Open Graph
/// tags are rendered through `leptos_meta` by `SeoMeta` inside the app.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let site = use_context::<SiteMeta>().unwrap_or_default();
    let provider = use_context::<ProviderConfig>().unwrap_or_default();

    view! {
        <!DOCTYPE html>
        <html lang="nb">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=CLIENT_ID_META content=provider.client_id/>
                <link rel="canonical" href=site.canonical_url()/>
                <meta name="twitter:card" content="summary_large_image"/>
                <script type="application/ld+json" inner_html=site.structured_data()></script>
                <script src=GOOGLE_SDK_URL async defer></script>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/sikt.css"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <Route path=path!("/") view=SitePage/>
            </Routes>
        </Router>
    }
}
