use crate::camera::{SectionKey, SectionRegister};

/// Probe line, in pixels from the top of the viewport.
pub const PROBE_LINE: f32 = 100.0;

/// Vertical extent of a section relative to the viewport top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SectionRect {
    /// Section shown by this element.
    pub section: SectionKey,
    /// Top edge (px, may be negative once scrolled past).
    pub top: f32,
    /// Bottom edge (px).
    pub bottom: f32,
}

impl SectionRect {
    /// Whether the rect spans the horizontal line at `y`.
    #[must_use]
    pub fn contains(&self, y: f32) -> bool {
        self.top <= y && self.bottom >= y
    }
}

/// Writes the active section into a [`SectionRegister`] on scroll.
#[derive(Debug, Clone)]
pub struct SectionTracker {
    register: SectionRegister,
    probe: f32,
}

impl SectionTracker {
    /// Tracker writing to `register` with the default probe line.
    #[must_use]
    pub fn new(register: SectionRegister) -> Self {
        Self {
            register,
            probe: PROBE_LINE,
        }
    }

    /// First rect, in page order, spanning the probe line.
    #[must_use]
    pub fn active(&self, rects: &[SectionRect]) -> Option<SectionKey> {
        rects
            .iter()
            .find(|r| r.contains(self.probe))
            .map(|r| r.section)
    }

    /// Handle a scroll event. Keeps the previous section when no rect
    /// spans the probe line. Returns the section written, if any.
    pub fn on_scroll(&self, rects: &[SectionRect]) -> Option<SectionKey> {
        let active = self.active(rects);
        if let Some(section) = active {
            if self.register.get() != Some(section) {
                log::debug!("scrolled into section {section}");
            }
            self.register.set(Some(section));
        }
        active
    }
}

/// Static page layout: section heights stacked in page order.
///
/// Lets headless hosts and tests produce the rects a browser would report
/// at a given scroll offset.
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    sections: Vec<(SectionKey, f32)>,
}

impl PageLayout {
    /// Layout from `(section, height)` pairs.
    #[must_use]
    pub fn new(sections: Vec<(SectionKey, f32)>) -> Self {
        Self { sections }
    }

    /// Every section with the same height.
    #[must_use]
    pub fn uniform(height: f32) -> Self {
        Self::new(SectionKey::ALL.iter().map(|&k| (k, height)).collect())
    }

    /// Total page height.
    #[must_use]
    pub fn height(&self) -> f32 {
        self.sections.iter().map(|(_, h)| h).sum()
    }

    /// Page offset of the top of `section`.
    #[must_use]
    pub fn offset_of(&self, section: SectionKey) -> Option<f32> {
        let mut top = 0.0;
        for &(key, height) in &self.sections {
            if key == section {
                return Some(top);
            }
            top += height;
        }
        None
    }

    /// Rects relative to the viewport after scrolling by `scroll_y`.
    #[must_use]
    pub fn rects_at(&self, scroll_y: f32) -> Vec<SectionRect> {
        let mut top = -scroll_y;
        self.sections
            .iter()
            .map(|&(section, height)| {
                let rect = SectionRect {
                    section,
                    top,
                    bottom: top + height,
                };
                top += height;
                rect
            })
            .collect()
    }
}
