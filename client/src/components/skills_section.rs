//! Skills panel: one card per category with proficiency bars.

use leptos::prelude::*;

use crate::content::{SKILLS, Skill};
use crate::state::skills::{bar_width_percent, group_by_category};

#[component]
pub fn SkillsSection(
    #[prop(default = "Technical Skills")] title: &'static str,
    #[prop(default = "A comprehensive overview of my technical expertise and proficiency levels across various \
                      technologies and tools.")]
    description: &'static str,
    #[prop(default = SKILLS)] skills: &'static [Skill],
) -> impl IntoView {
    let groups = group_by_category(skills);

    view! {
        <section id="skills" class="section section--muted skills">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">{title}</h2>
                    <p class="section__subtitle">{description}</p>
                </header>
                <div class="skills__grid">
                    {groups
                        .into_iter()
                        .map(|group| {
                            view! {
                                <div class="card skills__card">
                                    <h3 class="skills__category">{group.category}</h3>
                                    {group
                                        .skills
                                        .into_iter()
                                        .map(|skill| view! { <SkillBar skill=skill/> })
                                        .collect_view()}
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn SkillBar(skill: Skill) -> impl IntoView {
    let width = bar_width_percent(skill.proficiency);
    view! {
        <div class="skill">
            <div class="skill__label">
                <span class="skill__name">{skill.name}</span>
                <span class="skill__value">{format!("{width}%")}</span>
            </div>
            <div
                class="progress"
                role="progressbar"
                aria-label=skill.name
                aria-valuemin="0"
                aria-valuemax="100"
                aria-valuenow=width.to_string()
            >
                <div class="progress__fill" style=format!("width: {width}%")></div>
            </div>
        </div>
    }
}
