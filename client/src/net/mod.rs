//! Networking modules for the contact form.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON schema shared with the server's `/api/contact`
//! route, and `api` performs the browser-side request.

pub mod api;
pub mod types;
