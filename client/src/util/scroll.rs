//! Smooth scrolling between page sections.
//!
//! Requires a browser environment; SSR paths no-op.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

/// In-page navigation targets, in page order.
pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "Home", section_id: "home" },
    NavLink { label: "Projects", section_id: "projects" },
    NavLink { label: "Skills", section_id: "skills" },
    NavLink { label: "About", section_id: "about" },
    NavLink { label: "Contact", section_id: "contact" },
];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub section_id: &'static str,
}

impl NavLink {
    #[must_use]
    pub fn href(&self) -> String {
        format!("#{}", self.section_id)
    }
}

/// Accept either `"projects"` or `"#projects"`.
#[must_use]
pub fn normalize_section_id(target: &str) -> &str {
    target.trim_start_matches('#')
}

/// Smooth-scroll the element with the given id into view.
pub fn scroll_to_section(target: &str) {
    let id = normalize_section_id(target);
    #[cfg(feature = "hydrate")]
    {
        let Some(element) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            log::warn!("scroll target #{id} not found");
            return;
        };
        let options = web_sys::ScrollIntoViewOptions::new();
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}

/// Current vertical scroll offset in CSS pixels (0 on the server).
#[must_use]
pub fn scroll_offset() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

