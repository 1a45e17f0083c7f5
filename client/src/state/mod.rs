//! Client-side state and the pure logic behind it.
//!
//! DESIGN
//! ======
//! State is split by section (`projects`, `gallery`, `contact`, `skills`)
//! plus page chrome (`ui`). Nothing here touches the DOM, so every rule the
//! views depend on is testable without a browser.

pub mod contact;
pub mod gallery;
pub mod projects;
pub mod skills;
pub mod ui;
