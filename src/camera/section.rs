//! Page sections and the camera pose assigned to each.

use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

use glam::Vec3;
use serde::Serialize;

/// Position and look-at point of the camera.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CameraPose {
    /// Eye position.
    pub position: Vec3,
    /// Point the camera looks at.
    pub look_at: Vec3,
}

impl CameraPose {
    /// Pose at `position` looking at the origin.
    #[must_use]
    pub const fn facing_origin(position: Vec3) -> Self {
        Self {
            position,
            look_at: Vec3::ZERO,
        }
    }

    /// Blend toward `other` by `t` (0 keeps `self`, 1 gives `other`).
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self {
            position: self.position.lerp(other.position, t),
            look_at: self.look_at.lerp(other.look_at, t),
        }
    }
}

/// Content region of the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionKey {
    /// Landing area.
    Hero,
    /// About me.
    About,
    /// Skills grid.
    Skills,
    /// Project cards.
    Projects,
    /// Interactive demos.
    Playground,
    /// Notes and writing.
    Notes,
    /// Contact form.
    Contact,
}

impl SectionKey {
    /// Every section in page order.
    pub const ALL: [Self; 7] = [
        Self::Hero,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Playground,
        Self::Notes,
        Self::Contact,
    ];

    /// DOM id of the section.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Self::Hero => "hero",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Playground => "playground",
            Self::Notes => "notes",
            Self::Contact => "contact",
        }
    }

    /// Navigation label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Hero => "Home",
            Self::About => "About",
            Self::Skills => "Skills",
            Self::Projects => "Projects",
            Self::Playground => "Demos",
            Self::Notes => "Notes",
            Self::Contact => "Contact",
        }
    }

    /// Parse a DOM id. Unknown ids give `None`.
    #[must_use]
    pub fn parse(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.id() == id)
    }

    /// Camera pose for this section.
    #[must_use]
    pub const fn camera_pose(self) -> CameraPose {
        let position = match self {
            Self::Hero => Vec3::new(0.0, 0.0, 5.0),
            Self::About => Vec3::new(2.0, 1.0, 4.0),
            Self::Skills => Vec3::new(-1.0, 2.0, 6.0),
            Self::Projects => Vec3::new(1.0, -1.0, 3.0),
            Self::Playground => Vec3::new(-2.0, 0.0, 7.0),
            Self::Notes => Vec3::new(0.0, 2.0, 4.0),
            Self::Contact => Vec3::new(0.0, -1.0, 5.0),
        };
        CameraPose::facing_origin(position)
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Shared last-writer-wins cell holding the active section.
///
/// The scroll tracker writes it; the camera controller reads it once per
/// frame. Clones share the same cell.
#[derive(Debug, Clone)]
pub struct SectionRegister(Rc<Cell<Option<SectionKey>>>);

impl SectionRegister {
    /// Register holding `initial`.
    #[must_use]
    pub fn new(initial: Option<SectionKey>) -> Self {
        Self(Rc::new(Cell::new(initial)))
    }

    /// Overwrite the active section.
    pub fn set(&self, section: Option<SectionKey>) {
        self.0.set(section);
    }

    /// Overwrite the active section from a DOM id; unknown ids store `None`.
    pub fn set_id(&self, id: &str) {
        self.set(SectionKey::parse(id));
    }

    /// Current value.
    #[must_use]
    pub fn get(&self) -> Option<SectionKey> {
        self.0.get()
    }
}

impl Default for SectionRegister {
    fn default() -> Self {
        Self::new(Some(SectionKey::Hero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip() {
        for key in SectionKey::ALL {
            assert_eq!(SectionKey::parse(key.id()), Some(key));
        }
        assert_eq!(SectionKey::parse("blog"), None);
        assert_eq!(SectionKey::parse(""), None);
        assert_eq!(SectionKey::parse("Hero"), None);
    }

    #[test]
    fn every_pose_looks_at_origin() {
        for key in SectionKey::ALL {
            assert_eq!(key.camera_pose().look_at, Vec3::ZERO);
        }
        assert_eq!(
            SectionKey::Projects.camera_pose().position,
            Vec3::new(1.0, -1.0, 3.0)
        );
    }

    #[test]
    fn register_is_shared_and_last_write_wins() {
        let register = SectionRegister::default();
        let reader = register.clone();
        assert_eq!(reader.get(), Some(SectionKey::Hero));
        register.set(Some(SectionKey::Skills));
        register.set_id("notes");
        assert_eq!(reader.get(), Some(SectionKey::Notes));
        register.set_id("unknown");
        assert_eq!(reader.get(), None);
    }

    #[test]
    fn labels_match_navigation() {
        assert_eq!(SectionKey::Playground.label(), "Demos");
        assert_eq!(SectionKey::Hero.label(), "Home");
    }
}
