use crate::domain::logging::LogComponent;
use crate::domain::portfolio::{ExternalLink, Project, ProjectSelection, screenshot_alt};
use crate::event_utils::{EventOptions, window_event_listener_with_options};
use crate::infrastructure::navigation;
use crate::log_debug;
use leptos::*;

const COMPONENT: LogComponent = LogComponent::Page("ProjectDialog");

const BEHANCE_ICON_PATH: &str = "M22 7h-7v-2h7v2zm1.726 10c-.442 1.297-2.029 3-5.101 3-3.074 0-5.564-1.729-5.564-5.675 \
0-3.91 2.325-5.441 5.563-5.441 3.072 0 4.995 1.462 5.436 3.635l-1.635.295c-.343-.964-1.231-1.58-3.8-1.58-2.313 0-3.666 \
1.034-3.666 3.639 0 2.337 1.261 3.689 3.979 3.689 2.668 0 3.544-1.376 3.851-2.662l1.611.305zm-7.072-6.294c-1.711 \
0-2.949 1.029-2.949 2.748 0 1.675 1.264 2.737 2.949 2.737 1.711 0 2.949-1.029 2.949-2.748 0-1.675-1.264-2.737-2.949-2.737z";

/// Modal detail view of the selected project. Closes on overlay click, the
/// close button or Escape.
#[component]
pub fn ProjectDialog(selection: RwSignal<ProjectSelection>) -> impl IntoView {
    let close = move || {
        log_debug!(COMPONENT, "Closing project dialog");
        selection.update(ProjectSelection::close);
    };

    let escape = window_event_listener_with_options(
        ev::keydown,
        &EventOptions::default(),
        move |event: web_sys::KeyboardEvent| {
            if event.key() == "Escape" && selection.with_untracked(ProjectSelection::is_open) {
                close();
            }
        },
    );
    on_cleanup(move || escape.remove());

    view! {
        <Show when=move || selection.with(ProjectSelection::is_open)>
            <div class="dialog-overlay" on:click=move |_| close()>
                <div
                    class="dialog-content"
                    role="dialog"
                    aria-modal="true"
                    on:click=|event| event.stop_propagation()
                >
                    <button class="dialog-close" aria-label="Close" on:click=move |_| close()>
                        "×"
                    </button>
                    {move || {
                        selection
                            .with(|s| s.selected().cloned())
                            .map(|project| view! { <ProjectDetails project=project /> })
                    }}
                </div>
            </div>
        </Show>
    }
}

#[component]
fn ProjectDetails(project: Project) -> impl IntoView {
    let link = ExternalLink::for_project(&project);
    let Project { title, description, full_description, tags, images, .. } = project;

    let screenshots = images
        .into_iter()
        .enumerate()
        .map(|(index, src)| view! { <img class="dialog-screenshot" src=src alt=screenshot_alt(&title, index) /> })
        .collect_view();

    view! {
        <div class="dialog-body">
            <h2 class="dialog-title">{title}</h2>
            <p class="dialog-description">{description}</p>
            <div class="dialog-screenshots">{screenshots}</div>
            <p class="dialog-full-description">{full_description}</p>
            <div class="tag-row">
                {tags.into_iter().map(|tag| view! { <span class="skill-badge pill">{tag}</span> }).collect_view()}
            </div>
            {link.map(|link| view! { <ExternalLinkButton link=link /> })}
        </div>
    }
}

#[component]
fn ExternalLinkButton(link: ExternalLink) -> impl IntoView {
    let ExternalLink { label, show_icon, action } = link;
    view! {
        <div class="dialog-actions">
            <button class="glass-button link-button" on:click=move |_| navigation::perform(&action)>
                <span>{label}</span>
                {show_icon
                    .then(|| {
                        view! {
                            <svg width="16" height="16" viewBox="0 0 24 24" fill="currentColor">
                                <path d=BEHANCE_ICON_PATH></path>
                            </svg>
                        }
                    })}
            </button>
        </div>
    }
}
