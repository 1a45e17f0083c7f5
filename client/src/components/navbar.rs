//! Fixed top navigation with smooth-scroll links, an external-links
//! dropdown and a mobile side sheet.

use leptos::prelude::*;

use super::icons::{Icon, IconKind};
use crate::content::{PROFILE, Profile};
use crate::state::ui::UiState;
use crate::util::scroll::{NAV_LINKS, NavLink, scroll_to_section};

/// External destinations listed under "More" and in the mobile sheet.
fn external_links(profile: &Profile) -> Vec<(&'static str, &'static str)> {
    let mut links = Vec::new();
    if let Some(github) = profile.social.github {
        links.push(("GitHub", github));
    }
    if let Some(linkedin) = profile.social.linkedin {
        links.push(("LinkedIn", linkedin));
    }
    links.push(("Resume", profile.resume_url));
    links
}

#[component]
pub fn Navbar(
    /// Render without background until the page is scrolled.
    #[prop(optional)]
    transparent: bool,
    #[prop(default = PROFILE)] profile: Profile,
) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    #[cfg(feature = "hydrate")]
    {
        use crate::util::scroll::scroll_offset;

        Effect::new(move || ui.update(|s| s.set_scroll_offset(scroll_offset())));
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = scroll_offset();
            if ui.with_untracked(|s| s.scrolled) != (offset > crate::state::ui::SCROLL_THRESHOLD_PX) {
                ui.update(|s| s.set_scroll_offset(offset));
            }
        });
        on_cleanup(move || handle.remove());
    }

    let nav_link = move |link: NavLink, class: &'static str| {
        view! {
            <a
                class=class
                href=link.href()
                on:click=move |ev: leptos::ev::MouseEvent| {
                    ev.prevent_default();
                    scroll_to_section(link.section_id);
                    ui.update(UiState::close_menus);
                }
            >
                {link.label}
            </a>
        }
    };

    let external = external_links(&profile);
    let external_mobile = external.clone();

    view! {
        <nav
            class="navbar"
            class:navbar--solid=move || !transparent || ui.with(|s| s.scrolled)
        >
            <div class="navbar__inner">
                <a
                    class="navbar__brand"
                    href="#home"
                    on:click=move |ev: leptos::ev::MouseEvent| {
                        ev.prevent_default();
                        scroll_to_section("home");
                    }
                >
                    "DevPortfolio"
                </a>

                <div class="navbar__links">
                    {NAV_LINKS.iter().map(|link| nav_link(*link, "navbar__link")).collect_view()}
                    <div class="navbar__more">
                        <button
                            class="button button--outline"
                            aria-haspopup="menu"
                            aria-expanded=move || ui.with(|s| s.more_menu_open).to_string()
                            on:click=move |_| ui.update(|s| s.more_menu_open = !s.more_menu_open)
                        >
                            "More"
                            <Icon kind=IconKind::ChevronDown size=16/>
                        </button>
                        <Show when=move || ui.with(|s| s.more_menu_open)>
                            <ul class="navbar__menu" role="menu">
                                {external
                                    .iter()
                                    .map(|(label, href)| {
                                        view! {
                                            <li role="none">
                                                <a
                                                    role="menuitem"
                                                    href=*href
                                                    target="_blank"
                                                    rel="noopener noreferrer"
                                                    on:click=move |_| ui.update(UiState::close_menus)
                                                >
                                                    {*label}
                                                </a>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </Show>
                    </div>
                </div>

                <button
                    class="navbar__toggle"
                    aria-label="Open navigation menu"
                    on:click=move |_| ui.update(|s| s.mobile_nav_open = true)
                >
                    <Icon kind=IconKind::Menu size=24/>
                </button>
            </div>

            <Show when=move || ui.with(|s| s.mobile_nav_open)>
                <div class="sheet__backdrop" on:click=move |_| ui.update(UiState::close_menus)></div>
                <aside class="sheet" aria-label="Navigation">
                    <button
                        class="sheet__close"
                        aria-label="Close navigation menu"
                        on:click=move |_| ui.update(UiState::close_menus)
                    >
                        <Icon kind=IconKind::Close size=20/>
                    </button>
                    <div class="sheet__links">
                        {NAV_LINKS.iter().map(|link| nav_link(*link, "sheet__link")).collect_view()}
                    </div>
                    <div class="sheet__external">
                        <h3 class="sheet__heading">"External Links"</h3>
                        {external_mobile
                            .iter()
                            .map(|(label, href)| {
                                view! {
                                    <a
                                        class="sheet__link"
                                        href=*href
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        on:click=move |_| ui.update(UiState::close_menus)
                                    >
                                        {*label}
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </aside>
            </Show>
        </nav>
    }
}

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;
