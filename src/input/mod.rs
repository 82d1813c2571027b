//! Page input: pointer position in normalized device coordinates and the
//! scroll tracker that decides which section is on screen.

/// Pointer tracking and pixel-to-NDC conversion.
pub mod pointer;
/// Scroll-position section tracking.
pub mod scroll;

pub use pointer::{pointer_ndc, PointerState};
pub use scroll::{PageLayout, SectionRect, SectionTracker};
