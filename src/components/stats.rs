use crate::domain::portfolio::{Stat, needs_separator};
use leptos::*;

#[component]
pub fn StatsStrip(stats: Vec<Stat>) -> impl IntoView {
    let count = stats.len();
    view! {
        <div id="skills" class="stats">
            {stats
                .into_iter()
                .enumerate()
                .map(|(index, stat)| {
                    view! {
                        <div class="stat">
                            <div class="stat-value">{stat.value}</div>
                            <div class="stat-label">{stat.label}</div>
                        </div>
                        {needs_separator(index, count).then(|| view! { <div class="stat-separator"></div> })}
                    }
                })
                .collect_view()}
        </div>
    }
}
