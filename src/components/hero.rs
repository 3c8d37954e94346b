use crate::domain::portfolio::{ActionButton, CtaButtons, HeroContent};
use crate::infrastructure::navigation;
use leptos::*;

#[component]
pub fn Hero(hero: HeroContent, cta_buttons: CtaButtons) -> impl IntoView {
    let CtaButtons { primary, secondary, tertiary } = cta_buttons;

    view! {
        <div class="hero">
            <h1 class="hero-title">
                {hero.title_line1}
                <span class="gradient-text">{hero.title_line2}</span>
            </h1>
            <p class="hero-subtitle">{hero.subtitle}</p>
        </div>
        <div class="cta-row">
            <CtaButton button=primary variant="primary-button" />
            <CtaButton button=secondary variant="glass-button" />
            {tertiary.map(|button| view! { <CtaButton button=button variant="glass-button" /> })}
        </div>
    }
}

#[component]
fn CtaButton(button: ActionButton, variant: &'static str) -> impl IntoView {
    let ActionButton { label, action } = button;
    view! {
        <button class=format!("cta {}", variant) on:click=move |_| navigation::perform(&action)>
            {label}
        </button>
    }
}
