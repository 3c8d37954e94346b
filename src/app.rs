use leptos::*;

use crate::components::{AuroraBackground, Hero, NavBar, ProjectDialog, ProjectGrid, StatsStrip};
use crate::domain::logging::LogComponent;
use crate::domain::portfolio::{PortfolioConfig, ProjectSelection};
use crate::log_debug;

const STYLES: &str = r#"
    :root {
        --background: #000000;
        --foreground: #fafafa;
        --muted-foreground: #a1a1aa;
        --border: rgba(255, 255, 255, 0.1);
        --card: rgba(255, 255, 255, 0.03);
    }

    body {
        margin: 0;
        background: var(--background);
        color: var(--foreground);
        font-family: 'Geist', 'Inter', -apple-system, BlinkMacSystemFont, sans-serif;
    }

    .portfolio { position: relative; min-height: 100vh; }
    .aurora-mount { position: fixed; inset: 0; z-index: 0; pointer-events: none; }
    .page { position: relative; z-index: 1; }

    .nav { width: 100%; padding: 16px 24px; box-sizing: border-box; }
    .nav-inner {
        max-width: 1280px;
        margin: 0 auto;
        display: flex;
        justify-content: space-between;
        align-items: center;
    }
    .logo { display: flex; align-items: center; gap: 8px; }
    .logo-badge {
        width: 32px;
        height: 32px;
        border-radius: 8px;
        display: flex;
        align-items: center;
        justify-content: center;
        background: var(--border);
        border: 1px solid var(--border);
        backdrop-filter: blur(12px);
        font-size: 14px;
        font-weight: 700;
    }
    .logo-name { font-size: 18px; font-weight: 500; }
    .nav-links { display: flex; gap: 32px; }
    .nav-link { color: var(--muted-foreground); text-decoration: none; font-size: 14px; transition: color 0.2s; }
    .nav-link:hover { color: var(--foreground); }
    @media (max-width: 768px) { .nav-links { display: none; } }

    .divider {
        height: 1px;
        width: 100%;
        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.15), transparent);
        margin-bottom: 64px;
    }

    main {
        min-height: 100vh;
        display: flex;
        flex-direction: column;
        align-items: center;
        justify-content: center;
        padding: 80px 24px;
        box-sizing: border-box;
    }
    .content { max-width: 1152px; margin: 0 auto; text-align: center; }

    .hero { margin-bottom: 32px; animation: float 6s ease-in-out infinite; }
    .hero-title { font-size: clamp(48px, 7vw, 72px); font-weight: 300; line-height: 1.1; letter-spacing: -0.02em; margin: 0 0 16px; }
    .gradient-text {
        display: block;
        background: linear-gradient(135deg, #ffffff 0%, #a1a1aa 50%, #ffffff 100%);
        -webkit-background-clip: text;
        background-clip: text;
        color: transparent;
    }
    .hero-subtitle { max-width: 768px; margin: 0 auto; font-size: 18px; font-weight: 300; line-height: 1.6; color: var(--muted-foreground); }
    @keyframes float { 0%, 100% { transform: translateY(0); } 50% { transform: translateY(-10px); } }

    .cta-row { display: flex; flex-wrap: wrap; gap: 16px; justify-content: center; margin-bottom: 64px; }
    .cta { min-width: 160px; padding: 12px 24px; }
    button { cursor: pointer; font: inherit; color: var(--foreground); border-radius: 8px; font-size: 14px; font-weight: 500; }
    .glass-button {
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid var(--border);
        backdrop-filter: blur(12px);
        padding: 8px 16px;
        transition: background 0.2s;
    }
    .glass-button:hover { background: rgba(255, 255, 255, 0.1); }
    .primary-button { background: linear-gradient(135deg, #3b82f6, #8b5cf6); border: none; }

    .project-grid {
        display: grid;
        grid-template-columns: repeat(auto-fit, minmax(300px, 1fr));
        gap: 24px;
        margin-bottom: 64px;
    }
    .glass-card {
        background: var(--card);
        border: 1px solid var(--border);
        backdrop-filter: blur(16px);
        border-radius: 16px;
        padding: 24px;
        text-align: left;
        cursor: pointer;
        transition: transform 0.2s, border-color 0.2s;
    }
    .glass-card:hover { transform: translateY(-4px); border-color: rgba(255, 255, 255, 0.2); }
    .project-image {
        height: 128px;
        margin-bottom: 16px;
        border-radius: 12px;
        overflow: hidden;
        background: rgba(255, 255, 255, 0.04);
    }
    .project-image img { width: 100%; height: 100%; object-fit: cover; }
    .project-title { font-size: 18px; font-weight: 500; margin: 0 0 8px; }
    .project-description { font-size: 14px; color: var(--muted-foreground); margin: 0 0 16px; }
    .tag-row { display: flex; flex-wrap: wrap; gap: 8px; }
    .skill-badge {
        padding: 4px 8px;
        border-radius: 4px;
        font-size: 12px;
        color: var(--muted-foreground);
        background: rgba(255, 255, 255, 0.05);
        border: 1px solid var(--border);
    }
    .skill-badge.pill { border-radius: 999px; padding: 4px 12px; font-size: 14px; }

    .stats { display: flex; flex-wrap: wrap; justify-content: center; align-items: center; gap: 32px; }
    .stat-value { font-size: 36px; font-weight: 300; letter-spacing: -0.02em; margin-bottom: 4px; }
    .stat-label { font-size: 14px; color: var(--muted-foreground); }
    .stat-separator { width: 1px; height: 48px; background: linear-gradient(180deg, transparent, rgba(255, 255, 255, 0.2), transparent); }
    @media (max-width: 640px) { .stat-separator { display: none; } }

    .dialog-overlay {
        position: fixed;
        inset: 0;
        z-index: 50;
        display: flex;
        align-items: center;
        justify-content: center;
        background: rgba(0, 0, 0, 0.8);
    }
    .dialog-content {
        position: relative;
        width: min(896px, calc(100vw - 32px));
        max-height: 80vh;
        overflow-y: auto;
        padding: 24px;
        box-sizing: border-box;
        border-radius: 12px;
        background: #09090b;
        border: 1px solid var(--border);
        text-align: left;
    }
    .dialog-close { position: absolute; top: 12px; right: 12px; background: none; border: none; font-size: 20px; opacity: 0.7; }
    .dialog-close:hover { opacity: 1; }
    .dialog-title { font-size: 24px; font-weight: 700; margin: 0 0 8px; }
    .dialog-description { font-size: 16px; color: var(--muted-foreground); margin: 0; }
    .dialog-screenshots { display: grid; grid-template-columns: repeat(auto-fit, minmax(280px, 1fr)); gap: 16px; margin: 16px 0 24px; }
    .dialog-screenshot { width: 100%; height: 192px; object-fit: cover; border-radius: 8px; }
    .dialog-full-description { color: var(--muted-foreground); margin: 0 0 24px; }
    .dialog-body .tag-row { margin-bottom: 24px; }
    .dialog-actions { display: flex; justify-content: flex-end; }
    .link-button { display: flex; align-items: center; gap: 8px; }
"#;

/// Root component: the whole landing page for one configuration.
#[component]
pub fn App(config: PortfolioConfig) -> impl IntoView {
    view! {
        <style>{STYLES}</style>
        <PortfolioPage config=config />
    }
}

#[component]
pub fn PortfolioPage(config: PortfolioConfig) -> impl IntoView {
    let PortfolioConfig {
        logo,
        nav_links,
        resume,
        hero,
        cta_buttons,
        projects,
        stats,
        show_background,
        background,
    } = config;

    log_debug!(
        LogComponent::Page("PortfolioPage"),
        "Rendering {} projects, {} stats, background: {}",
        projects.len(),
        stats.len(),
        show_background
    );

    let selection = create_rw_signal(ProjectSelection::default());

    view! {
        <div class="portfolio">
            {show_background.then(|| view! { <AuroraBackground options=background /> })}
            <div class="page">
                <NavBar logo=logo nav_links=nav_links resume=resume />
                <div class="divider"></div>
                <main id="about">
                    <div class="content">
                        <Hero hero=hero cta_buttons=cta_buttons />
                        <div class="divider"></div>
                        <ProjectGrid projects=projects selection=selection />
                        <div class="divider"></div>
                        <StatsStrip stats=stats />
                    </div>
                </main>
                <ProjectDialog selection=selection />
            </div>
        </div>
    }
}
