use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::core::meta::{SITE_LOCALE, SITE_NAME, SiteMeta};
use crate::ui::session::use_session_context;

/// Site URL: from context on the server, from the rendered canonical link
/// once hydrated
#[cfg(feature = "ssr")]
fn site_meta() -> SiteMeta {
    use_context::<SiteMeta>().unwrap_or_default()
}

#[cfg(not(feature = "ssr"))]
fn site_meta() -> SiteMeta {
    web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.query_selector("link[rel=\"canonical\"]").ok().flatten())
        .and_then(|link| link.get_attribute("href"))
        .map(|href| SiteMeta::from_canonical(&href))
        .unwrap_or_default()
}

/// Document title, description and Open Graph tags for the active view.
///
/// The canonical link lives in the shell.
#[component]
pub fn SeoMeta() -> impl IntoView {
    let session = use_session_context();
    let site = site_meta();

    view! {
        <Title text=move || session.view.get().page_title() />
        <Meta name="description" content=move || session.view.get().description() />
        <Meta property="og:type" content="website" />
        <Meta property="og:site_name" content=SITE_NAME />
        <Meta property="og:locale" content=SITE_LOCALE />
        <Meta property="og:url" content=site.canonical_url() />
        <Meta property="og:image" content=site.og_image_url() />
        <Meta property="og:title" content=move || session.view.get().page_title() />
        <Meta property="og:description" content=move || session.view.get().description() />
    }
}
