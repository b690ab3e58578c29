use leptos::prelude::*;

/// Reveal transitions, glass surfaces and the keyframe animations used across the site
#[component]
pub fn SiteStyles() -> impl IntoView {
    view! {
        <style>
            r#"
            @import url('https://fonts.googleapis.com/css2?family=Plus+Jakarta+Sans:wght@400;500;600;700;800&family=Caveat:wght@600&display=swap');

            body {
                font-family: 'Plus Jakarta Sans', sans-serif;
                -webkit-font-smoothing: antialiased;
            }
            html { scroll-behavior: smooth; }

            .font-script { font-family: 'Caveat', cursive; }

            /* Scroll reveal */
            .reveal {
                opacity: 0;
                transition: opacity 0.9s cubic-bezier(0.16, 1, 0.3, 1), transform 0.9s cubic-bezier(0.16, 1, 0.3, 1);
                will-change: opacity, transform;
            }
            .reveal-up { transform: translateY(40px); }
            .reveal-down { transform: translateY(-40px); }
            .reveal-left { transform: translateX(-40px); }
            .reveal-right { transform: translateX(40px); }
            .reveal-scale { transform: scale(0.94); }
            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            /* Surfaces */
            .glass {
                background: rgba(255, 255, 255, 0.72);
                backdrop-filter: blur(18px) saturate(180%);
                -webkit-backdrop-filter: blur(18px) saturate(180%);
            }
            .premium-card {
                background-image: radial-gradient(circle at top right, rgba(124, 58, 237, 0.35), transparent 55%);
            }
            .grid-pattern {
                background-image:
                    linear-gradient(to right, #0f172a 1px, transparent 1px),
                    linear-gradient(to bottom, #0f172a 1px, transparent 1px);
                background-size: 48px 48px;
            }
            .hero-gradient {
                background: radial-gradient(ellipse at top, rgba(237, 233, 254, 0.8), transparent 60%);
            }
            .scrollbar-hide { scrollbar-width: none; }
            .scrollbar-hide::-webkit-scrollbar { display: none; }

            /* Animations */
            @keyframes mesh {
                0%, 100% { transform: translate(0, 0) scale(1); }
                33% { transform: translate(40px, -60px) scale(1.08); }
                66% { transform: translate(-30px, 30px) scale(0.95); }
            }
            .animate-mesh { animation: mesh 24s ease-in-out infinite; }

            @keyframes blob-slow {
                0%, 100% { transform: translate(0, 0); }
                50% { transform: translate(20px, -20px); }
            }
            .animate-blob-slow { animation: blob-slow 18s ease-in-out infinite; }

            @keyframes float-subtle {
                0%, 100% { transform: translateY(0); }
                50% { transform: translateY(-14px); }
            }
            .animate-float-subtle { animation: float-subtle 6s ease-in-out infinite; }

            @keyframes float-particle {
                0%, 100% { transform: translate(0, 0); opacity: 0.2; }
                50% { transform: translate(12px, -24px); opacity: 0.8; }
            }
            .animate-float-particle { animation: float-particle 7s ease-in-out infinite; }

            @keyframes scan-tech {
                0% { transform: translateY(0); opacity: 0; }
                10% { opacity: 1; }
                90% { opacity: 1; }
                100% { transform: translateY(650px); opacity: 0; }
            }
            .animate-scan-tech { animation: scan-tech 4s linear infinite; }

            @keyframes scan-area-tech {
                0% { transform: translateY(-100%); }
                100% { transform: translateY(300%); }
            }
            .animate-scan-area-tech { animation: scan-area-tech 5s linear infinite; }

            @keyframes fade-in {
                from { opacity: 0; transform: translateY(-8px); }
                to { opacity: 1; transform: translateY(0); }
            }
            .animate-fade-in { animation: fade-in 0.3s ease-out forwards; }

            @keyframes draw-line {
                from { transform: scaleX(0); }
                to { transform: scaleX(1); }
            }
            .animate-draw-line {
                transform-origin: left;
                animation: draw-line 1.6s cubic-bezier(0.16, 1, 0.3, 1) both;
            }

            @keyframes subtext-dynamic {
                0%, 100% { color: #475569; }
                50% { color: #6d28d9; }
            }
            .animate-subtext-dynamic { animation: subtext-dynamic 8s ease-in-out infinite; }

            @media (prefers-reduced-motion: reduce) {
                .reveal { transition: none; opacity: 1; transform: none; }
                .animate-mesh, .animate-float-subtle, .animate-float-particle, .animate-scan-tech { animation: none; }
            }
            "#
        </style>
    }
}
