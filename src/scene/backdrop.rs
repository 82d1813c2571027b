//! Static gradient backdrop shown instead of the animated scene when
//! reduced motion is active at mount time.

use glam::Vec2;
use serde::Serialize;

use crate::util::color::{palette, Rgb, Rgba};

/// Color at a position along a gradient (0 at start, 1 at end).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ColorStop {
    /// Offset along the gradient.
    pub at: f32,
    /// Color at the offset.
    pub color: Rgb,
}

/// Opaque linear gradient filling the viewport.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LinearGradient {
    /// CSS angle in degrees (0 points up, 90 right, 135 toward the
    /// bottom-right corner).
    pub angle_deg: f32,
    /// Stops in increasing `at` order.
    pub stops: Vec<ColorStop>,
}

impl LinearGradient {
    /// Color at normalized viewport position `uv` (origin top-left, y down).
    #[must_use]
    pub fn color_at(&self, uv: Vec2) -> [f32; 3] {
        let angle = self.angle_deg.to_radians();
        let dir = Vec2::new(angle.sin(), -angle.cos());
        // Gradient line spans the corners the direction points between.
        let half_len = 0.5 * (dir.x.abs() + dir.y.abs());
        let t = if half_len > 0.0 {
            ((uv - Vec2::splat(0.5)).dot(dir) / (2.0 * half_len) + 0.5).clamp(0.0, 1.0)
        } else {
            0.0
        };
        self.sample(t)
    }

    fn sample(&self, t: f32) -> [f32; 3] {
        let Some(first) = self.stops.first() else {
            return [0.0; 3];
        };
        if t <= first.at {
            return first.color.to_array();
        }
        for pair in self.stops.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            if t <= b.at {
                let span = b.at - a.at;
                let f = if span > 0.0 { (t - a.at) / span } else { 1.0 };
                let (ca, cb) = (a.color.to_array(), b.color.to_array());
                return [
                    ca[0] + (cb[0] - ca[0]) * f,
                    ca[1] + (cb[1] - ca[1]) * f,
                    ca[2] + (cb[2] - ca[2]) * f,
                ];
            }
        }
        self.stops
            .last()
            .map_or([0.0; 3], |stop| stop.color.to_array())
    }
}

/// Translucent circular glow fading to transparent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadialGlow {
    /// Center in normalized viewport coordinates.
    pub center: Vec2,
    /// Color and peak opacity at the center.
    pub color: Rgba,
    /// Fraction of the center-to-farthest-corner distance at which the glow
    /// reaches full transparency.
    pub extent: f32,
}

impl RadialGlow {
    /// Opacity at `uv` for a viewport of the given aspect ratio.
    #[must_use]
    pub fn alpha_at(&self, uv: Vec2, aspect: f32) -> f32 {
        let scale = Vec2::new(aspect.max(f32::EPSILON), 1.0);
        let farthest = [Vec2::ZERO, Vec2::X, Vec2::Y, Vec2::ONE]
            .into_iter()
            .map(|corner| ((corner - self.center) * scale).length())
            .fold(0.0, f32::max);
        let radius = farthest * self.extent;
        if radius <= 0.0 {
            return 0.0;
        }
        let d = ((uv - self.center) * scale).length();
        self.color.alpha * (1.0 - d / radius).clamp(0.0, 1.0)
    }
}

/// Base gradient plus glows painted on top in order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StaticBackdrop {
    /// Opaque base layer.
    pub base: LinearGradient,
    /// Overlays, bottom to top.
    pub glows: Vec<RadialGlow>,
}

impl StaticBackdrop {
    /// Composited color at `uv` for a viewport of the given aspect ratio.
    #[must_use]
    pub fn color_at(&self, uv: Vec2, aspect: f32) -> [f32; 3] {
        self.glows.iter().fold(self.base.color_at(uv), |dst, glow| {
            let a = glow.alpha_at(uv, aspect);
            let src = glow.color.rgb.to_array();
            [
                src[0] * a + dst[0] * (1.0 - a),
                src[1] * a + dst[1] * (1.0 - a),
                src[2] * a + dst[2] * (1.0 - a),
            ]
        })
    }
}

impl Default for StaticBackdrop {
    fn default() -> Self {
        Self {
            base: LinearGradient {
                angle_deg: 135.0,
                stops: vec![
                    ColorStop {
                        at: 0.0,
                        color: palette::SLATE_900,
                    },
                    ColorStop {
                        at: 0.5,
                        color: palette::SLATE_800,
                    },
                    ColorStop {
                        at: 1.0,
                        color: palette::SLATE_900,
                    },
                ],
            },
            glows: vec![
                RadialGlow {
                    center: Vec2::new(0.5, 0.5),
                    color: palette::BLUE.with_alpha(0.1),
                    extent: 0.7,
                },
                RadialGlow {
                    center: Vec2::new(0.2, 0.8),
                    color: palette::LIME.with_alpha(0.05),
                    extent: 0.5,
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: [f32; 3], b: [f32; 3]) -> bool {
        a.iter().zip(b).all(|(x, y)| (x - y).abs() < 1e-4)
    }

    #[test]
    fn diagonal_runs_dark_light_dark() {
        let base = StaticBackdrop::default().base;
        let dark = palette::SLATE_900.to_array();
        let light = palette::SLATE_800.to_array();
        assert!(close(base.color_at(Vec2::ZERO), dark));
        assert!(close(base.color_at(Vec2::ONE), dark));
        assert!(close(base.color_at(Vec2::splat(0.5)), light));
        // Anti-diagonal is perpendicular to a 135 degree gradient
        assert!(close(base.color_at(Vec2::new(1.0, 0.0)), light));
    }

    #[test]
    fn glows_fade_out_at_extent() {
        let backdrop = StaticBackdrop::default();
        let blue = backdrop.glows[0];
        assert!((blue.alpha_at(Vec2::splat(0.5), 1.0) - 0.1).abs() < 1e-6);
        // Corner is beyond 70% of the farthest-corner radius
        assert_eq!(blue.alpha_at(Vec2::ZERO, 1.0), 0.0);
        let lime = backdrop.glows[1];
        assert!((lime.alpha_at(Vec2::new(0.2, 0.8), 1.6) - 0.05).abs() < 1e-6);
        assert_eq!(lime.alpha_at(Vec2::new(1.0, 0.0), 1.6), 0.0);
    }

    #[test]
    fn center_is_tinted_blue() {
        let backdrop = StaticBackdrop::default();
        let base = backdrop.base.color_at(Vec2::splat(0.5));
        let lit = backdrop.color_at(Vec2::splat(0.5), 1.0);
        // Blue channel rises, red stays below the base plus the tint
        assert!(lit[2] > base[2]);
        assert!(lit[0] < base[0] + 0.1);
    }

    #[test]
    fn empty_gradient_is_black() {
        let gradient = LinearGradient {
            angle_deg: 90.0,
            stops: Vec::new(),
        };
        assert_eq!(gradient.color_at(Vec2::splat(0.3)), [0.0; 3]);
    }
}
