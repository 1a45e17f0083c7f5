//! Page chrome state (navbar, mobile sheet, toast).
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of section state so the
//! navbar and toast viewport can be driven from anywhere via context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Vertical scroll offset past which the navbar switches to its solid style.
pub const SCROLL_THRESHOLD_PX: f64 = 50.0;

/// How long a toast stays on screen before auto-dismissing.
pub const TOAST_DURATION_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ToastKind {
    #[default]
    Success,
    Error,
}

/// A transient notification. `id` distinguishes successive toasts so a
/// stale auto-dismiss timer does not close a newer one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub scrolled: bool,
    pub mobile_nav_open: bool,
    pub more_menu_open: bool,
    pub toast: Option<Toast>,
    next_toast_id: u64,
}

impl UiState {
    /// Update the navbar style from the window scroll offset.
    pub fn set_scroll_offset(&mut self, offset_px: f64) {
        self.scrolled = offset_px > SCROLL_THRESHOLD_PX;
    }

    /// Replace any visible toast; returns the new toast's id.
    pub fn show_toast(&mut self, kind: ToastKind, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toast = Some(Toast { id, kind, title: title.into(), description: description.into() });
        id
    }

    /// Dismiss the toast only if it is still the one identified by `id`.
    pub fn dismiss_toast(&mut self, id: u64) {
        if self.toast.as_ref().is_some_and(|t| t.id == id) {
            self.toast = None;
        }
    }

    /// Close both navigation menus (after following a link).
    pub fn close_menus(&mut self) {
        self.mobile_nav_open = false;
        self.more_menu_open = false;
    }
}
