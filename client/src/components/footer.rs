//! Page footer: copyright line, social icons and back-to-top.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{PROFILE, Profile};
use crate::util::scroll::scroll_to_top;
use crate::util::year::current_year;

fn copyright_line(year: i32, name: &str) -> String {
    format!("© {year} {name}. All rights reserved.")
}

#[component]
pub fn Footer(
    #[prop(default = PROFILE)] profile: Profile,
    /// Defaults to the current calendar year.
    #[prop(optional)]
    year: Option<i32>,
) -> impl IntoView {
    let year = year.unwrap_or_else(current_year);

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <div class="footer__copy">
                    <p class="muted">{copyright_line(year, profile.name)}</p>
                    <p class="footer__stack">"Built with Rust, Leptos, and axum"</p>
                </div>
                <div class="footer__social">
                    {profile
                        .social
                        .github
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" aria-label="GitHub">
                                    <Icon kind=IconKind::Github size=20/>
                                </a>
                            }
                        })}
                    {profile
                        .social
                        .linkedin
                        .map(|href| {
                            view! {
                                <a href=href target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">
                                    <Icon kind=IconKind::Linkedin size=20/>
                                </a>
                            }
                        })}
                    <a href=profile.mailto() aria-label="Email">
                        <Icon kind=IconKind::Mail size=20/>
                    </a>
                </div>
                <button
                    class="button button--outline button--icon footer__top"
                    on:click=move |_| scroll_to_top()
                    aria-label="Back to top"
                >
                    <Icon kind=IconKind::ArrowUp size=18/>
                </button>
            </div>
        </footer>
    }
}

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;
