use yew::prelude::*;

/// Page stylesheet. The animation class names are shared with `crate::animation`.
#[function_component(PortfolioStyles)]
pub fn portfolio_styles() -> Html {
    html! {
        <style>
            {r#"
                :root {
                    --background: #0b0d12;
                    --foreground: #f2f4f8;
                    --muted: #151922;
                    --muted-foreground: #9aa3b2;
                    --card: #161b25;
                    --primary: #7eb2ff;
                    --accent: #b48cff;
                    --border: rgba(255, 255, 255, 0.08);
                }
                html { scroll-behavior: smooth; }
                body {
                    margin: 0;
                    background: var(--background);
                    color: var(--foreground);
                    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                }
                button { font: inherit; cursor: pointer; }
                a { color: inherit; text-decoration: none; }

                .text-gradient {
                    background: linear-gradient(45deg, var(--primary), var(--accent));
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .muted { background: rgba(21, 25, 34, 0.4); }
                .muted-text { color: var(--muted-foreground); line-height: 1.6; }
                .hover-lift { transition: transform 0.3s ease, box-shadow 0.3s ease; }
                .hover-lift:hover { transform: translateY(-4px); box-shadow: 0 16px 32px rgba(0,0,0,0.3); }

                /* Navigation */
                .top-nav {
                    position: fixed;
                    top: 0; left: 0; right: 0;
                    z-index: 50;
                    background: rgba(11, 13, 18, 0.6);
                    backdrop-filter: blur(12px);
                    border-bottom: 1px solid transparent;
                    transition: background 0.3s ease, border-color 0.3s ease;
                }
                .top-nav.scrolled { background: rgba(11, 13, 18, 0.9); border-bottom-color: var(--border); }
                .nav-content {
                    max-width: 72rem;
                    margin: 0 auto;
                    padding: 1rem 1.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .nav-logo { background: none; border: none; font-size: 1.25rem; font-weight: 700; }
                .nav-right { display: flex; gap: 2rem; }
                .nav-link { background: none; border: none; color: var(--muted-foreground); transition: color 0.3s ease, transform 0.3s ease; }
                .nav-link:hover { color: var(--foreground); transform: scale(1.05); }
                .burger-menu { display: none; background: none; border: none; flex-direction: column; gap: 4px; }
                .burger-menu span { width: 22px; height: 2px; background: var(--foreground); }

                /* Hero */
                .hero {
                    position: relative;
                    min-height: 100vh;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    overflow: hidden;
                }
                .hero-layer { position: absolute; inset: 0; will-change: transform; }
                .hero-layer-back { background: linear-gradient(135deg, var(--card), var(--background), var(--muted)); }
                .hero-layer-front { background: linear-gradient(45deg, rgba(126,178,255,0.05), transparent, rgba(180,140,255,0.05)); }
                .floater { position: absolute; border-radius: 9999px; }
                .floater-a { top: 5rem; left: 2.5rem; width: 6rem; height: 6rem; background: rgba(126,178,255,0.1); }
                .floater-b { top: 10rem; right: 5rem; width: 5rem; height: 5rem; background: rgba(180,140,255,0.15); }
                .floater-c { bottom: 10rem; left: 5rem; width: 4rem; height: 4rem; background: rgba(255,255,255,0.1); }
                .floater-d { top: 15rem; left: 50%; width: 3rem; height: 3rem; background: rgba(180,140,255,0.2); }
                .blur { filter: blur(4px); }
                .hero-content { position: relative; z-index: 10; text-align: center; max-width: 64rem; padding: 0 1.5rem; }
                .hero-title { font-size: clamp(3rem, 8vw, 6rem); line-height: 1.1; margin-bottom: 2rem; }
                .hero-title span { display: block; }
                .hero-accent { color: var(--primary); }
                .hero-subtitle { font-size: 1.35rem; color: var(--muted-foreground); max-width: 48rem; margin: 0 auto 3rem; line-height: 1.6; }
                .hero-cta-group { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; }
                .hero-cta {
                    display: inline-block;
                    padding: 1rem 2rem;
                    border-radius: 0.5rem;
                    border: 1px solid var(--primary);
                    background: var(--primary);
                    color: var(--background);
                    font-size: 1.1rem;
                    transition: transform 0.3s ease;
                }
                .hero-cta:hover { transform: scale(1.05); }
                .hero-cta.outline, .outline-button {
                    background: transparent;
                    color: var(--foreground);
                    border: 1px solid var(--border);
                    padding: 0.75rem 1.5rem;
                    border-radius: 0.5rem;
                    display: inline-block;
                }

                /* Sections */
                section { padding: 6rem 0; }
                .section-inner { max-width: 72rem; margin: 0 auto; padding: 0 1.5rem; }
                .section-inner.narrow { max-width: 56rem; text-align: center; }
                h2 { font-size: 3rem; margin-bottom: 1.5rem; }
                .lead { font-size: 1.1rem; color: var(--muted-foreground); line-height: 1.7; }
                .section-header { text-align: center; margin-bottom: 5rem; }
                .section-intro { font-size: 1.25rem; color: var(--muted-foreground); max-width: 42rem; margin: 0 auto 4rem; line-height: 1.6; }
                .reveal { transition: opacity 1s ease, transform 1s ease; }
                .delay-300 { transition-delay: 0.3s; }
                .about-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 4rem; align-items: center; }
                .focus-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 1.5rem; margin: 2rem 0; }
                .focus-card { display: flex; gap: 0.75rem; align-items: center; padding: 1rem; background: var(--card); border-radius: 0.5rem; }
                .focus-glyph { font-size: 1.75rem; color: var(--primary); }
                .badge-row { display: flex; flex-wrap: wrap; gap: 0.5rem; margin-bottom: 2rem; }
                .badge { padding: 0.35rem 0.9rem; border-radius: 9999px; background: var(--muted); font-size: 0.85rem; }
                .badge.outline { background: transparent; border: 1px solid var(--border); font-size: 0.75rem; }
                .portrait-column { position: relative; }
                .portrait-frame { aspect-ratio: 1; border-radius: 1.5rem; overflow: hidden; background: linear-gradient(135deg, rgba(126,178,255,0.2), rgba(180,140,255,0.1)); }
                .portrait-frame img { width: 100%; height: 100%; object-fit: cover; }
                .portrait-orb { position: absolute; border-radius: 9999px; }
                .orb-top { top: -1.5rem; right: -1.5rem; width: 6rem; height: 6rem; background: rgba(180,140,255,0.2); }
                .orb-bottom { bottom: -1.5rem; left: -1.5rem; width: 8rem; height: 8rem; background: rgba(126,178,255,0.1); }

                .project-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; }
                .card { background: var(--card); border-radius: 0.75rem; overflow: hidden; }
                .card-media { position: relative; overflow: hidden; }
                .card-media img { width: 100%; height: 14rem; object-fit: cover; transition: transform 0.5s ease; }
                .project-card:hover .card-media img { transform: scale(1.1); }
                .card-overlay {
                    position: absolute; inset: 0;
                    display: flex; align-items: center; justify-content: center;
                    background: linear-gradient(to top, rgba(126,178,255,0.9), rgba(126,178,255,0.5), transparent);
                    opacity: 0;
                    transition: opacity 0.5s ease;
                }
                .project-card:hover .card-overlay { opacity: 1; }
                .card-button { padding: 0.5rem 1rem; border-radius: 0.5rem; background: var(--muted); }
                .card-button.disabled { opacity: 0.7; }
                .card-body { padding: 1.5rem; }
                .contact-grid { display: grid; grid-template-columns: repeat(3, 1fr); gap: 2rem; margin-bottom: 4rem; }
                .contact-card { padding: 2rem; }
                .contact-glyph { font-size: 2.25rem; color: var(--primary); }
                .site-footer { padding: 3rem 1.5rem; border-top: 1px solid var(--border); text-align: center; color: var(--muted-foreground); }

                .not-found { min-height: 100vh; display: flex; flex-direction: column; align-items: center; justify-content: center; gap: 1.5rem; }

                /* Entrance animations */
                .opacity-0 { opacity: 0; }
                @keyframes fadeInUp {
                    from { opacity: 0; transform: translateY(30px); }
                    to { opacity: 1; transform: translateY(0); }
                }
                @keyframes fadeInLeft {
                    from { opacity: 0; transform: translateX(-40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes fadeInRight {
                    from { opacity: 0; transform: translateX(40px); }
                    to { opacity: 1; transform: translateX(0); }
                }
                @keyframes scaleIn {
                    from { opacity: 0; transform: scale(0.9); }
                    to { opacity: 1; transform: scale(1); }
                }
                @keyframes parallaxFloat {
                    0%, 100% { transform: translateY(0) rotate(0deg); }
                    50% { transform: translateY(-20px) rotate(5deg); }
                }
                @keyframes textGlow {
                    0%, 100% { text-shadow: 0 0 10px rgba(126,178,255,0.3); }
                    50% { text-shadow: 0 0 24px rgba(126,178,255,0.6); }
                }
                .animate-fade-in-up { animation: fadeInUp 0.8s ease-out both; }
                .animate-fade-in-left { animation: fadeInLeft 0.8s ease-out both; }
                .animate-fade-in-right { animation: fadeInRight 0.8s ease-out both; }
                .animate-scale-in { animation: scaleIn 0.6s ease-out both; }
                .animate-parallax-float { animation: parallaxFloat 6s ease-in-out infinite; }
                .animate-text-glow { animation: textGlow 3s ease-in-out infinite; }

                @media (max-width: 768px) {
                    .burger-menu { display: flex; }
                    .nav-right { display: none; }
                    .nav-right.mobile-menu-open {
                        display: flex;
                        flex-direction: column;
                        position: absolute;
                        top: 100%; left: 0; right: 0;
                        padding: 1rem 1.5rem;
                        background: rgba(11, 13, 18, 0.95);
                    }
                    .about-grid, .focus-grid, .project-grid, .contact-grid { grid-template-columns: 1fr; }
                    h2 { font-size: 2.25rem; }
                }
                @media (prefers-reduced-motion: reduce) {
                    .animate-fade-in-up, .animate-fade-in-left, .animate-fade-in-right,
                    .animate-scale-in, .animate-parallax-float, .animate-text-glow { animation: none; }
                }
            "#}
        </style>
    }
}
