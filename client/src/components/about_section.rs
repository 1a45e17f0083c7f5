//! Biography panel: photo, social links, bio, education, experience and
//! interests.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{EDUCATION, EXPERIENCE, Education, Experience, INTERESTS, PROFILE, Profile};

#[component]
pub fn AboutSection(
    #[prop(default = PROFILE)] profile: Profile,
    #[prop(default = EDUCATION)] education: &'static [Education],
    #[prop(default = EXPERIENCE)] experience: &'static [Experience],
    #[prop(default = INTERESTS)] interests: &'static [&'static str],
) -> impl IntoView {
    view! {
        <section id="about" class="section section--muted about">
            <div class="section__inner">
                <header class="section__header">
                    <h2 class="section__title">{profile.about_title}</h2>
                    <p class="section__subtitle">{profile.about_subtitle}</p>
                </header>

                <div class="about__grid">
                    <div class="card about__profile">
                        <div class="about__photo">
                            <img src=profile.photo_url alt="Profile"/>
                        </div>
                        <div class="card__body">
                            <h3>"Connect With Me"</h3>
                            <div class="about__social">
                                {profile
                                    .social
                                    .linkedin
                                    .map(|href| {
                                        view! {
                                            <a href=href aria-label="LinkedIn">
                                                <Icon kind=IconKind::Linkedin size=24/>
                                            </a>
                                        }
                                    })}
                                {profile
                                    .social
                                    .github
                                    .map(|href| {
                                        view! {
                                            <a href=href aria-label="GitHub">
                                                <Icon kind=IconKind::Github size=24/>
                                            </a>
                                        }
                                    })}
                            </div>
                        </div>
                    </div>

                    <div class="card about__details">
                        <div class="card__body">
                            <div class="about__block">
                                <h3>"Biography"</h3>
                                <p class="about__bio">{profile.bio}</p>
                            </div>
                            <hr class="separator"/>
                            <div class="about__block">
                                <h3>"Education"</h3>
                                {education
                                    .iter()
                                    .map(|edu| {
                                        view! {
                                            <div class="about__entry">
                                                <h4>{edu.degree}</h4>
                                                <p class="muted">{format!("{} • {}", edu.institution, edu.year)}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <hr class="separator"/>
                            <div class="about__block">
                                <h3>"Work Experience"</h3>
                                {experience
                                    .iter()
                                    .map(|exp| {
                                        view! {
                                            <div class="about__entry">
                                                <h4>{exp.position}</h4>
                                                <p class="muted">{format!("{} • {}", exp.company, exp.duration)}</p>
                                                <p class="about__entry-description">{exp.description}</p>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                            <hr class="separator"/>
                            <div class="about__block">
                                <h3>"Interests"</h3>
                                <div class="about__interests">
                                    {interests
                                        .iter()
                                        .map(|interest| view! { <span class="pill">{*interest}</span> })
                                        .collect_view()}
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
