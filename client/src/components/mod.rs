//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One module per page section plus the shared pieces they render (cards,
//! the project modal, icons, toast). Sections take their content as props
//! defaulting to `crate::content`, and page chrome is read from the
//! `RwSignal<UiState>` context provided by `App`.

pub mod about_section;
pub mod contact_section;
pub mod footer;
pub mod hero_section;
pub mod icons;
pub mod navbar;
pub mod project_card;
pub mod project_modal;
pub mod projects_section;
pub mod skills_section;
pub mod toast;
