//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `content` holds the static page data and `scroll` isolates the browser
//! scrolling API from components.

pub mod content;
pub mod scroll;
