//! UI State Module
//!
//! Index state machines behind the featured carousels and the property
//! gallery. Rendering reads from these; nothing here touches HTML.

mod carousel;
mod gallery;

#[cfg(test)]
mod property_tests;

pub use carousel::{
    items_per_page_for_width, CarouselOptions, CarouselState, Overflow, DEFAULT_AUTOPLAY_MS,
    DESKTOP_BREAKPOINT, RESIZE_DEBOUNCE_MS, TRANSITION_MS,
};
pub use gallery::GalleryState;
