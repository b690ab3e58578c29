//! The single-page site: decorations, navbar, the active view and the footer

use leptos::prelude::*;

use crate::ui::decorations::GlobalDecorations;
use crate::ui::footer::Footer;
use crate::ui::navbar::Navbar;
use crate::ui::sections::SectionView;
use crate::ui::seo::SeoMeta;
use crate::ui::session::provide_session_context;
use crate::ui::styles::SiteStyles;

#[component]
pub fn SitePage() -> impl IntoView {
    let session = provide_session_context();

    #[cfg(not(feature = "ssr"))]
    Effect::new(move |prev: Option<crate::core::ViewName>| {
        let view = session.view.get();
        if crate::core::resets_scroll(prev, view) {
            window().scroll_to_with_x_and_y(0.0, 0.0);
        }
        view
    });

    view! {
        <SeoMeta />
        <SiteStyles />
        <div class="min-h-screen selection:bg-violet-100 bg-[#fcfcfd] relative overflow-x-hidden">
            <GlobalDecorations />
            <Navbar />
            <main class="relative z-10">
                {move || {
                    session
                        .view
                        .get()
                        .sections()
                        .iter()
                        .map(|section| view! { <SectionView section=*section /> })
                        .collect_view()
                }}
            </main>
            <Footer />
        </div>
    }
}
