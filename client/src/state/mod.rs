//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The contact form is the only stateful part of the page; everything else
//! renders from static content.

pub mod contact;
