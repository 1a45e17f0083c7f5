//! Full-height banner with name, title, introduction and call to action.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{PROFILE, Profile};
use crate::util::scroll::scroll_to_section;

#[component]
pub fn HeroSection(#[prop(default = PROFILE)] profile: Profile) -> impl IntoView {
    let view_projects = move |_: leptos::ev::MouseEvent| scroll_to_section("projects");

    view! {
        <section
            id="home"
            class="hero"
            style=format!("background-image: url('{}')", profile.hero_background)
        >
            <div class="hero__shade"></div>
            <div class="hero__content">
                <h1 class="hero__name">{profile.name}</h1>
                <h2 class="hero__title">{profile.title}</h2>
                <p class="hero__intro">{profile.introduction}</p>
                <div class="hero__actions">
                    <button class="button button--primary button--lg" on:click=view_projects>
                        "View My Projects"
                    </button>
                    <div class="hero__social">
                        {profile
                            .social
                            .github
                            .map(|href| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                        <Icon kind=IconKind::Github size=24/>
                                    </a>
                                }
                            })}
                        {profile
                            .social
                            .linkedin
                            .map(|href| {
                                view! {
                                    <a href=href target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                        <Icon kind=IconKind::Linkedin size=24/>
                                    </a>
                                }
                            })}
                    </div>
                </div>
            </div>
            <button class="hero__scroll" on:click=view_projects aria-label="Scroll to projects">
                <Icon kind=IconKind::ArrowDown size=24/>
            </button>
        </section>
    }
}
