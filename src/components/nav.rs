use crate::domain::portfolio::{ActionButton, Logo, NavLink};
use crate::infrastructure::navigation;
use leptos::*;

#[component]
pub fn NavBar(logo: Logo, nav_links: Vec<NavLink>, resume: ActionButton) -> impl IntoView {
    let ActionButton { label, action } = resume;

    view! {
        <nav class="nav">
            <div class="nav-inner">
                <div class="logo">
                    <div class="logo-badge">
                        <span>{logo.initials}</span>
                    </div>
                    <span class="logo-name">{logo.name}</span>
                </div>
                <div class="nav-links">
                    {nav_links
                        .into_iter()
                        .map(|link| view! { <a class="nav-link" href=link.href>{link.label}</a> })
                        .collect_view()}
                </div>
                <button class="glass-button nav-resume" on:click=move |_| navigation::perform(&action)>
                    {label}
                </button>
            </div>
        </nav>
    }
}
