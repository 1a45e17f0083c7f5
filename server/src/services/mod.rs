//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the business rules so route handlers can stay focused
//! on protocol translation.

pub mod contact;
