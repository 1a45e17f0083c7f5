//! Project gallery: search box, category tabs, card grid and detail modal.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use super::project_card::ProjectCard;
use super::project_modal::ProjectModal;
use crate::content::{PROJECTS, Project};
use crate::state::projects::{ProjectFilter, categories};

#[component]
pub fn ProjectsSection(
    #[prop(default = "My Projects")] title: &'static str,
    #[prop(default = "A showcase of my recent work and personal projects")] subtitle: &'static str,
    #[prop(default = PROJECTS)] projects: &'static [Project],
) -> impl IntoView {
    let filter = RwSignal::new(ProjectFilter::default());
    let selected = RwSignal::new(None::<Project>);
    let visible = Memo::new(move |_| filter.with(|f| f.apply(projects)));
    let tabs = categories(projects);

    let open_project = Callback::new(move |project: Project| selected.set(Some(project)));
    let close_project = Callback::new(move |()| selected.set(None));

    view! {
        <section id="projects" class="section section--muted projects">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">{title}</h2>
                    <p class="section__subtitle">{subtitle}</p>
                </header>

                <div class="projects__toolbar">
                    <label class="projects__search">
                        <Icon kind=IconKind::Search size=18/>
                        <input
                            class="input"
                            type="text"
                            placeholder="Search projects..."
                            aria-label="Search projects"
                            prop:value=move || filter.with(|f| f.search.clone())
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                filter.update(|f| f.search = value);
                            }
                        />
                    </label>
                    <div class="tabs" role="tablist">
                        {tabs
                            .into_iter()
                            .map(|category| {
                                let is_active = move || filter.with(|f| f.category == category);
                                view! {
                                    <button
                                        class="tabs__trigger"
                                        class:tabs__trigger--active=is_active
                                        role="tab"
                                        aria-selected=move || is_active().to_string()
                                        on:click=move |_| filter.update(|f| f.category = category.to_owned())
                                    >
                                        {category}
                                    </button>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>

                <Show
                    when=move || visible.with(|v| !v.is_empty())
                    fallback=move || {
                        view! {
                            <div class="projects__empty">
                                <p>"No projects found matching your criteria."</p>
                                <button
                                    class="button button--outline"
                                    on:click=move |_| filter.update(ProjectFilter::clear)
                                >
                                    <Icon kind=IconKind::Filter size=16/>
                                    "Clear Filters"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="projects__grid">
                        <For
                            each=move || visible.get()
                            key=|project| project.id
                            children=move |project| view! { <ProjectCard project=project on_open=open_project/> }
                        />
                    </div>
                </Show>

                {move || {
                    selected.get().map(|project| view! { <ProjectModal project=project on_close=close_project/> })
                }}
            </div>
        </section>
    }
}
