//! Clickable summary card for one project.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::Project;

/// Enter or Space opens the detail view, but only when the card itself has
/// focus. Keys pressed on the nested links bubble up here and must be left
/// alone so the link still navigates.
fn opens_on_key(key: &str, from_card: bool) -> bool {
    from_card && matches!(key, "Enter" | " ")
}

#[component]
pub fn ProjectCard(project: Project, on_open: Callback<Project>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        let from_card = ev.target() == ev.current_target();
        if opens_on_key(&ev.key(), from_card) {
            ev.prevent_default();
            on_open.run(project);
        }
    };
    // Link clicks must not bubble up and open the modal.
    let stop = |ev: leptos::ev::MouseEvent| ev.stop_propagation();

    view! {
        <article
            class="project-card"
            role="button"
            tabindex="0"
            aria-label=format!("Open details for {}", project.title)
            on:click=move |_| on_open.run(project)
            on:keydown=on_keydown
        >
            <div class="project-card__media">
                <img src=project.thumbnail alt=project.title loading="lazy"/>
            </div>
            <header class="project-card__header">
                <h3 class="project-card__title">{project.title}</h3>
                <div class="project-card__badges">
                    {project
                        .technologies
                        .iter()
                        .map(|tech| view! { <span class="badge">{tech.name}</span> })
                        .collect_view()}
                </div>
            </header>
            <p class="project-card__description">{project.description}</p>
            <footer class="project-card__footer">
                {project
                    .live_url
                    .map(|url| {
                        view! {
                            <a
                                class="button button--primary button--sm"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                on:click=stop
                            >
                                <Icon kind=IconKind::ExternalLink size=16/>
                                "Live Demo"
                            </a>
                        }
                    })}
                {project
                    .github_url
                    .map(|url| {
                        view! {
                            <a
                                class="button button--outline button--sm"
                                href=url
                                target="_blank"
                                rel="noopener noreferrer"
                                on:click=stop
                            >
                                <Icon kind=IconKind::Github size=16/>
                                "Code"
                            </a>
                        }
                    })}
            </footer>
        </article>
    }
}

#[cfg(test)]
#[path = "project_card_test.rs"]
mod project_card_test;
