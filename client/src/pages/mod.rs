//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! The site is one page; sections are composed from `components`.

pub mod portfolio;
