//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! One component per page section. Only `contact_form` holds state; the rest
//! render from `util::content`.

pub mod about;
pub mod contact_form;
pub mod contact_section;
pub mod hero;
pub mod link;
pub mod projects;
