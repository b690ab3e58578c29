use leptos::prelude::*;

/// Mesh blobs behind the whole page: (position and colour classes, animation delay)
const BLOBS: [(&str, &str); 4] = [
    ("top-[-10%] left-[-10%] w-[40rem] h-[40rem] bg-violet-200/30", "0s"),
    ("top-[20%] right-[-15%] w-[35rem] h-[35rem] bg-indigo-200/25", "-12s"),
    ("bottom-[10%] left-[10%] w-[30rem] h-[30rem] bg-fuchsia-200/20", "-6s"),
    ("bottom-[-10%] right-[5%] w-[45rem] h-[45rem] bg-blue-200/20", "-18s"),
];

/// Fixed, non-interactive background layer
#[component]
pub fn GlobalDecorations() -> impl IntoView {
    view! {
        <div class="fixed inset-0 pointer-events-none z-0 overflow-hidden" aria-hidden="true">
            {BLOBS
                .into_iter()
                .map(|(class, delay)| view! {
                    <div
                        class=format!("absolute rounded-full blur-[120px] animate-mesh {class}")
                        style=format!("animation-delay: {delay}")
                    ></div>
                })
                .collect_view()}
            <div class="absolute inset-0 grid-pattern opacity-[0.03]"></div>
            <div class="absolute top-0 inset-x-0 h-96 bg-gradient-to-b from-violet-50/60 to-transparent"></div>
        </div>
    }
}
