//! Smooth in-page scrolling between sections.
//!
//! Browser-only; SSR paths no-op.

use super::content::Section;

/// Scroll the element whose id is `section.anchor()` into view.
pub fn scroll_to(section: Section) {
    #[cfg(feature = "hydrate")]
    {
        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|doc| doc.get_element_by_id(section.anchor()))
        else {
            return;
        };
        let opts = web_sys::ScrollIntoViewOptions::new();
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = section;
    }
}
