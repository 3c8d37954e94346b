use crate::domain::portfolio::{Project, ProjectSelection};
use leptos::*;

#[component]
pub fn ProjectGrid(projects: Vec<Project>, selection: RwSignal<ProjectSelection>) -> impl IntoView {
    view! {
        <div id="projects" class="project-grid">
            {projects
                .into_iter()
                .map(|project| view! { <ProjectCard project=project selection=selection /> })
                .collect_view()}
        </div>
    }
}

/// Summary card; clicking it opens the project in the detail dialog.
#[component]
pub fn ProjectCard(project: Project, selection: RwSignal<ProjectSelection>) -> impl IntoView {
    let thumbnail = project.thumbnail().map(str::to_owned);
    let title = project.title.clone();
    let description = project.description.clone();
    let tags = project.tags.clone();

    let alt = title.clone();
    view! {
        <div class="glass-card project-card" on:click=move |_| selection.update(|s| s.open(project.clone()))>
            <div class="project-image">
                {thumbnail.map(|src| view! { <img src=src alt=alt /> })}
            </div>
            <h3 class="project-title">{title}</h3>
            <p class="project-description">{description}</p>
            <div class="tag-row">
                {tags.into_iter().map(|tag| view! { <span class="skill-badge">{tag}</span> }).collect_view()}
            </div>
        </div>
    }
}
