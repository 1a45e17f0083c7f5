//! Detail dialog for a single project: image gallery, long description,
//! technologies, challenges/solutions and outbound links.
//!
//! The dialog is rebuilt whenever a different project is opened, so the
//! gallery always starts at the first image of the project being shown.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{Project, Technology};
use crate::state::gallery::Gallery;

fn screenshot_alt(title: &str, index: usize) -> String {
    format!("{title} screenshot {}", index + 1)
}

fn chip_style(tech: &Technology) -> String {
    format!("background-color: {}", tech.color)
}

#[component]
pub fn ProjectModal(project: Project, on_close: Callback<()>) -> impl IntoView {
    let gallery = RwSignal::new(Gallery::for_project(&project));
    let has_controls = gallery.with_untracked(Gallery::has_controls);
    let image_count = gallery.with_untracked(Gallery::len);

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::keydown, move |ev| match ev.key().as_str() {
            "Escape" => on_close.run(()),
            "ArrowLeft" => gallery.update(Gallery::prev),
            "ArrowRight" => gallery.update(Gallery::next),
            _ => {}
        });
        on_cleanup(move || handle.remove());
    }

    let has_notes = !project.challenges.is_empty() || !project.solutions.is_empty();

    view! {
        <div class="project-modal__backdrop" on:click=move |_| on_close.run(())>
            <div
                class="project-modal"
                role="dialog"
                aria-modal="true"
                aria-labelledby="project-modal-title"
                on:click=|ev: leptos::ev::MouseEvent| ev.stop_propagation()
            >
                <header class="project-modal__header">
                    <h2 id="project-modal-title" class="project-modal__title">{project.title}</h2>
                    <p class="project-modal__description">{project.description}</p>
                    <button
                        class="project-modal__close"
                        on:click=move |_| on_close.run(())
                        aria-label="Close project details"
                    >
                        <Icon kind=IconKind::Close size=20/>
                    </button>
                </header>

                <div class="gallery">
                    <div class="gallery__frame">
                        <img
                            class="gallery__image"
                            src=move || gallery.with(|g| g.current().unwrap_or(project.thumbnail))
                            alt=move || screenshot_alt(project.title, gallery.with(Gallery::index))
                        />
                    </div>
                    {has_controls
                        .then(|| {
                            view! {
                                <div class="gallery__controls">
                                    <button
                                        class="gallery__nav"
                                        on:click=move |_| gallery.update(Gallery::prev)
                                    >
                                        <span class="sr-only">"Previous"</span>
                                        <Icon kind=IconKind::ChevronLeft size=24/>
                                    </button>
                                    <button
                                        class="gallery__nav"
                                        on:click=move |_| gallery.update(Gallery::next)
                                    >
                                        <span class="sr-only">"Next"</span>
                                        <Icon kind=IconKind::ChevronRight size=24/>
                                    </button>
                                </div>
                                <div class="gallery__dots">
                                    {(0..image_count)
                                        .map(|i| {
                                            view! {
                                                <button
                                                    class="gallery__dot"
                                                    class:gallery__dot--active=move || {
                                                        gallery.with(|g| g.index() == i)
                                                    }
                                                    on:click=move |_| gallery.update(|g| g.select(i))
                                                    aria-label=format!("Go to image {}", i + 1)
                                                ></button>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            }
                        })}
                </div>

                {project
                    .long_description
                    .map(|text| {
                        view! {
                            <section class="project-modal__block">
                                <h3>"About this project"</h3>
                                <p>{text}</p>
                            </section>
                        }
                    })}

                <section class="project-modal__block">
                    <h3>"Technologies Used"</h3>
                    <div class="project-modal__chips">
                        {project
                            .technologies
                            .iter()
                            .map(|tech| view! { <span class="chip" style=chip_style(tech)>{tech.name}</span> })
                            .collect_view()}
                    </div>
                </section>

                {has_notes
                    .then(|| {
                        view! {
                            <div class="project-modal__notes">
                                {(!project.challenges.is_empty())
                                    .then(|| view! { <NoteList heading="Challenges" items=project.challenges/> })}
                                {(!project.solutions.is_empty())
                                    .then(|| view! { <NoteList heading="Solutions" items=project.solutions/> })}
                            </div>
                        }
                    })}

                <footer class="project-modal__footer">
                    {project
                        .github_url
                        .map(|url| {
                            view! {
                                <a class="button button--outline" href=url target="_blank" rel="noopener noreferrer">
                                    <Icon kind=IconKind::Github size=16/>
                                    "View Code"
                                </a>
                            }
                        })}
                    {project
                        .live_url
                        .map(|url| {
                            view! {
                                <a class="button button--primary" href=url target="_blank" rel="noopener noreferrer">
                                    <Icon kind=IconKind::Globe size=16/>
                                    "Live Demo"
                                </a>
                            }
                        })}
                </footer>
            </div>
        </div>
    }
}

#[component]
fn NoteList(heading: &'static str, items: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="project-modal__note-list">
            <h3>{heading}</h3>
            <ul>{items.iter().map(|item| view! { <li>{*item}</li> }).collect_view()}</ul>
        </div>
    }
}

#[cfg(test)]
#[path = "project_modal_test.rs"]
mod project_modal_test;
