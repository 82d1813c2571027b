use glam::Vec2;

/// Convert a pixel position inside a `width` x `height` viewport to NDC.
///
/// The top-left corner maps to `(-1, 1)` and the bottom-right corner to
/// `(1, -1)`. Positions outside the viewport are clamped, as is everything
/// for a degenerate viewport.
#[must_use]
pub fn pointer_ndc(x: f32, y: f32, width: f32, height: f32) -> Vec2 {
    if width <= 0.0 || height <= 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0))
        .clamp(Vec2::NEG_ONE, Vec2::ONE)
}

/// Latest pointer position reported by the host.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PointerState {
    /// Last pixel position, if the pointer has entered the viewport.
    pub pixel: Option<Vec2>,
    /// Normalized position; centered until the pointer moves.
    pub ndc: Vec2,
}

impl PointerState {
    /// Record a move to pixel `(x, y)` in a `width` x `height` viewport.
    pub fn handle_move(&mut self, x: f32, y: f32, width: f32, height: f32) {
        self.pixel = Some(Vec2::new(x, y));
        self.ndc = pointer_ndc(x, y, width, height);
    }

    /// Re-normalize the last pixel position after a resize.
    pub fn handle_resize(&mut self, width: f32, height: f32) {
        if let Some(p) = self.pixel {
            self.ndc = pointer_ndc(p.x, p.y, width, height);
        }
    }

    /// Pointer left the page; parallax returns to center.
    pub fn handle_leave(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_map_to_unit_square() {
        assert_eq!(pointer_ndc(0.0, 0.0, 800.0, 600.0), Vec2::new(-1.0, 1.0));
        assert_eq!(pointer_ndc(800.0, 600.0, 800.0, 600.0), Vec2::new(1.0, -1.0));
        assert_eq!(pointer_ndc(400.0, 300.0, 800.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn outside_positions_are_clamped() {
        assert_eq!(pointer_ndc(-50.0, 900.0, 800.0, 600.0), Vec2::new(-1.0, -1.0));
        assert_eq!(pointer_ndc(10.0, 10.0, 0.0, 600.0), Vec2::ZERO);
    }

    #[test]
    fn state_tracks_moves_and_resizes() {
        let mut state = PointerState::default();
        assert_eq!(state.ndc, Vec2::ZERO);
        state.handle_move(800.0, 0.0, 800.0, 600.0);
        assert_eq!(state.ndc, Vec2::new(1.0, 1.0));
        state.handle_resize(1600.0, 600.0);
        assert_eq!(state.ndc, Vec2::new(0.0, 1.0));
        state.handle_leave();
        assert_eq!(state.ndc, Vec2::ZERO);
        assert!(state.pixel.is_none());
    }
}
