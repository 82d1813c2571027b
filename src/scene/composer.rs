//! Scene composition: animators, camera, and the static fallback.

use glam::Vec3;
use serde::Serialize;

use super::backdrop::StaticBackdrop;
use super::frame::{InstanceRaw, SceneFrame, ShapeSnapshot, Showcase};
use super::layout::SceneLayout;
use crate::animation::{
    Animator, FloatingShape, Geometry, Material, NetworkVisualization,
    ParticleField, Pose, RobotFigure, StarField,
};
use crate::camera::core::Camera;
use crate::camera::{CameraController, CameraPose, SectionKey};
use crate::frame::{FrameContext, Viewport};
use crate::motion::{MotionGate, MotionNotifier};
use crate::options::Options;
use crate::platform::MotionPreferenceSource;
use crate::util::color::{palette, Rgb};

/// Robot sub-scene camera position.
const ROBOT_CAMERA: Vec3 = Vec3::new(0.0, 0.0, 5.0);
/// Network sub-scene camera position.
const NETWORK_CAMERA: Vec3 = Vec3::new(0.0, 0.0, 6.0);

/// Point light.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PointLight {
    /// World-space position.
    pub position: Vec3,
    /// Intensity multiplier.
    pub intensity: f32,
    /// Light color.
    pub color: Rgb,
}

/// Static light rig of a (sub-)scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Lights {
    /// Ambient intensity.
    pub ambient: f32,
    /// Point lights.
    pub points: Vec<PointLight>,
}

impl Lights {
    /// Main backdrop rig: dim ambient plus a blue key light.
    #[must_use]
    pub fn backdrop() -> Self {
        Self {
            ambient: 0.2,
            points: vec![PointLight {
                position: Vec3::splat(10.0),
                intensity: 1.0,
                color: palette::BLUE,
            }],
        }
    }

    /// Robot sub-scene rig.
    #[must_use]
    pub fn robot() -> Self {
        Self {
            ambient: 0.3,
            points: vec![
                PointLight {
                    position: Vec3::splat(5.0),
                    intensity: 1.0,
                    color: Rgb::hex(0xFFFFFF),
                },
                PointLight {
                    position: Vec3::splat(-5.0),
                    intensity: 0.5,
                    color: palette::LIME,
                },
            ],
        }
    }

    /// Network sub-scene rig.
    #[must_use]
    pub fn network() -> Self {
        Self {
            ambient: 0.4,
            points: vec![PointLight {
                position: Vec3::splat(10.0),
                intensity: 1.0,
                color: Rgb::hex(0xFFFFFF),
            }],
        }
    }
}

/// Everything needed to build a [`Scene`].
#[derive(Debug, Clone)]
pub struct SceneConfig {
    /// Tunables.
    pub options: Options,
    /// Initial viewport.
    pub viewport: Viewport,
    /// Overrides the configured default camera pose.
    pub initial_camera: Option<CameraPose>,
    /// Also animate the robot and network sub-scenes.
    pub showcase: bool,
}

impl SceneConfig {
    /// Config for `viewport` with the given options.
    #[must_use]
    pub fn new(options: Options, viewport: Viewport) -> Self {
        Self {
            options,
            viewport,
            initial_camera: None,
            showcase: true,
        }
    }
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self::new(Options::default(), Viewport::default())
    }
}

struct ShowcaseScenes {
    robot: RobotFigure,
    robot_camera: Camera,
    network: NetworkVisualization,
    network_camera: Camera,
}

struct AnimatedScene {
    camera: CameraController,
    particles: ParticleField,
    particle_poses: Vec<Pose>,
    shapes: Vec<FloatingShape>,
    stars: StarField,
    showcase: Option<ShowcaseScenes>,
    layout: SceneLayout,
    layout_revision: u64,
}

impl AnimatedScene {
    fn new(config: &SceneConfig, viewport: Viewport) -> Self {
        let options = &config.options;
        let particle_opts = &options.particles;
        let count = particle_opts.count_for_width(viewport.width, false);
        let particles =
            ParticleField::generate(count, particle_opts.spread, particle_opts.seed)
                .with_appearance(
                    Geometry::Octahedron {
                        radius: particle_opts.size,
                    },
                    Material::solid(particle_opts.color)
                        .with_opacity(particle_opts.opacity),
                );
        let showcase = config.showcase.then(|| ShowcaseScenes {
            robot: RobotFigure::default(),
            robot_camera: Camera::new(&options.camera, ROBOT_CAMERA, Vec3::ZERO, 1.0),
            network: NetworkVisualization::default(),
            network_camera: Camera::new(
                &options.camera,
                NETWORK_CAMERA,
                Vec3::ZERO,
                1.0,
            ),
        });

        let shapes = FloatingShape::defaults();
        let stars = StarField::new(&options.stars, false);
        let layout = SceneLayout::new(
            &particles,
            &shapes,
            &stars,
            showcase.as_ref().map(|s| &s.robot),
            showcase.as_ref().map(|s| &s.network),
        );

        Self {
            camera: CameraController::new(
                &options.camera,
                viewport.aspect(),
                config.initial_camera,
            ),
            particles,
            particle_poses: Vec::with_capacity(count),
            shapes,
            stars,
            showcase,
            layout,
            layout_revision: 0,
        }
    }

    fn update(
        &mut self,
        ctx: &FrameContext,
        section: Option<SectionKey>,
        reduced: bool,
        options: &Options,
        frame: &mut SceneFrame,
    ) {
        let elapsed = ctx.time.elapsed;

        let count = options
            .particles
            .count_for_width(ctx.viewport.width, reduced);
        if count != self.particles.len() {
            log::debug!(
                "{}: {} -> {count}",
                self.particles.name(),
                self.particles.len()
            );
            self.particles.regenerate(count);
        }
        if self.stars.set_reduced_motion(reduced) {
            self.layout.stars = self.stars.stars().to_vec();
            self.layout_revision += 1;
        }
        frame.layout_revision = self.layout_revision;

        self.camera
            .update(ctx.time.delta, section, ctx.pointer, reduced);

        self.particles.animate(elapsed, &mut self.particle_poses);
        frame.particle_instances.clear();
        frame
            .particle_instances
            .extend(self.particle_poses.iter().map(InstanceRaw::from_pose));
        frame.particle_count = self.particles.len();

        frame.shapes.clear();
        if !reduced {
            frame
                .shapes
                .extend(self.shapes.iter().map(|shape| {
                    ShapeSnapshot::new(shape.name, shape.frame_at(elapsed))
                }));
        }

        let mut star_time = 0.0;
        self.stars.animate(elapsed, &mut star_time);
        frame.star_time = star_time;
        frame.star_count = self.stars.len();

        // Sub-scenes hold their rest pose under reduced motion.
        let showcase_time = if reduced { 0.0 } else { elapsed };
        if let Some(showcase) = &self.showcase {
            frame.robot = Some(Showcase {
                camera: showcase.robot_camera,
                lights: Lights::robot(),
                frame: showcase.robot.frame_at(showcase_time),
            });
            frame.network = Some(Showcase {
                camera: showcase.network_camera,
                lights: Lights::network(),
                frame: showcase.network.frame_at(showcase_time),
            });
        }

        self.camera.uniform.update_frame(star_time, reduced);
        frame.uniform = self.camera.uniform;
        frame.camera_state = Some(self.camera.state());
        frame.camera = Some(self.camera.camera);
    }
}

enum SceneKind {
    Animated(Box<AnimatedScene>),
    Static(StaticBackdrop),
}

/// The composed backdrop: either the animated scene or the static gradient.
///
/// The choice is made at construction from the reduced-motion flag. The two
/// runtime transitions are deliberately asymmetric:
///
/// - reduced motion turning on keeps the animated scene and strips it down:
///   no particles or shapes, a still star shell, no pointer parallax, and
///   sub-scenes held at rest. The camera still glides between sections.
/// - reduced motion turning off while the static gradient shows composes
///   the animated scene in its place.
///
/// Static meshes, materials and star points are published once through
/// [`layout`](Self::layout); per-frame poses go to [`frame`](Self::frame).
pub struct Scene {
    config: SceneConfig,
    motion: MotionGate,
    kind: SceneKind,
    lights: Lights,
    viewport: Viewport,
    frame: SceneFrame,
}

impl Scene {
    /// Build a scene, reading the reduced-motion preference from `source`.
    #[must_use]
    pub fn new(config: SceneConfig, source: &dyn MotionPreferenceSource) -> Self {
        let motion = MotionGate::new(
            source.prefers_reduced_motion(),
            config.options.motion.force_reduced,
        );
        if motion.is_forced() {
            log::info!(
                "reduced motion pinned {} by options",
                if motion.is_reduced() { "on" } else { "off" }
            );
        }
        let viewport = config.viewport;
        let (kind, frame) = if motion.is_reduced() {
            log::info!("reduced motion active: composing static backdrop");
            let backdrop = StaticBackdrop::default();
            (
                SceneKind::Static(backdrop.clone()),
                SceneFrame::fallback(backdrop),
            )
        } else {
            (
                SceneKind::Animated(Box::new(AnimatedScene::new(
                    &config, viewport,
                ))),
                SceneFrame::default(),
            )
        };
        Self {
            config,
            motion,
            kind,
            lights: Lights::backdrop(),
            viewport,
            frame,
        }
    }

    /// Advance to the frame described by `ctx`, heading for `section`.
    pub fn update(&mut self, ctx: &FrameContext, section: Option<SectionKey>) {
        if let Some(reduced) = self.motion.poll() {
            if !reduced && matches!(self.kind, SceneKind::Static(_)) {
                log::info!("motion re-enabled: composing animated scene");
                let mut scene = AnimatedScene::new(&self.config, ctx.viewport);
                scene.layout_revision = self.frame.layout_revision + 1;
                self.kind = SceneKind::Animated(Box::new(scene));
                self.viewport = ctx.viewport;
                self.frame.backdrop = None;
            }
        }
        let reduced = self.motion.is_reduced();

        if let SceneKind::Animated(scene) = &mut self.kind {
            if ctx.viewport != self.viewport {
                scene
                    .camera
                    .resize(ctx.viewport.width, ctx.viewport.height);
                self.viewport = ctx.viewport;
            }
            scene.update(ctx, section, reduced, &self.config.options, &mut self.frame);
        }

        self.frame.time = ctx.time;
        self.frame.reduced_motion = reduced;
        self.frame.section = section;
    }

    /// Snapshot of the last update.
    #[must_use]
    pub fn frame(&self) -> &SceneFrame {
        &self.frame
    }

    /// Whether the static fallback is showing.
    #[must_use]
    pub fn is_static(&self) -> bool {
        matches!(self.kind, SceneKind::Static(_))
    }

    /// Reduced-motion flag in effect.
    #[must_use]
    pub fn is_reduced_motion(&self) -> bool {
        self.motion.is_reduced()
    }

    /// Write end of the reduced-motion slot.
    #[must_use]
    pub fn motion_notifier(&self) -> MotionNotifier {
        self.motion.notifier()
    }

    /// Camera controller of the animated scene.
    #[must_use]
    pub fn camera(&self) -> Option<&CameraController> {
        match &self.kind {
            SceneKind::Animated(scene) => Some(&scene.camera),
            SceneKind::Static(_) => None,
        }
    }

    /// Static meshes and materials of the animated scene; `None` while the
    /// static gradient shows.
    #[must_use]
    pub fn layout(&self) -> Option<&SceneLayout> {
        match &self.kind {
            SceneKind::Animated(scene) => Some(&scene.layout),
            SceneKind::Static(_) => None,
        }
    }

    /// Static backdrop, when showing.
    #[must_use]
    pub fn backdrop(&self) -> Option<&StaticBackdrop> {
        match &self.kind {
            SceneKind::Static(backdrop) => Some(backdrop),
            SceneKind::Animated(_) => None,
        }
    }

    /// Light rig of the main scene.
    #[must_use]
    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    /// Options the scene was built with.
    #[must_use]
    pub fn options(&self) -> &Options {
        &self.config.options
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("static", &self.is_static())
            .field("reduced_motion", &self.motion.is_reduced())
            .field("viewport", &self.viewport)
            .field("frame", &self.frame.time.frame)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::frame::FrameTime;
    use crate::platform::{ManualPreference, StaticPreference};

    fn ctx(frame: u64, width: u32) -> FrameContext {
        FrameContext {
            time: FrameTime {
                elapsed: frame as f32 / 60.0,
                delta: if frame == 0 { 0.0 } else { 1.0 / 60.0 },
                frame,
            },
            pointer: Vec2::new(0.4, -0.2),
            viewport: Viewport {
                width,
                height: 800,
            },
        }
    }

    fn config(width: u32) -> SceneConfig {
        SceneConfig::new(
            Options::default(),
            Viewport {
                width,
                height: 800,
            },
        )
    }

    #[test]
    fn reduced_at_construction_gives_static_backdrop() {
        let mut scene = Scene::new(config(1920), &StaticPreference(true));
        assert!(scene.is_static());
        scene.update(&ctx(0, 1920), Some(SectionKey::Hero));
        let frame = scene.frame();
        assert_eq!(frame.particle_count, 0);
        assert!(frame.shapes.is_empty());
        assert!(frame.backdrop.is_some());
        assert!(frame.camera.is_none());
        assert!(scene.camera().is_none());
    }

    #[test]
    fn particle_count_follows_viewport_width() {
        let mut scene = Scene::new(config(500), &StaticPreference(false));
        scene.update(&ctx(0, 500), None);
        assert_eq!(scene.frame().particle_count, 500);
        assert_eq!(scene.frame().particle_instances.len(), 500);
        scene.update(&ctx(1, 900), None);
        assert_eq!(scene.frame().particle_count, 1000);
        scene.update(&ctx(2, 1920), None);
        assert_eq!(scene.frame().particle_count, 2000);
        assert_eq!(scene.frame().shapes.len(), 2);
        assert_eq!(scene.frame().star_count, 5000);
    }

    #[test]
    fn runtime_reduced_motion_drops_decoration() {
        let source = ManualPreference::new(false);
        let mut scene = Scene::new(config(1920), &source);
        let _guard = source.watch(scene.motion_notifier());
        scene.update(&ctx(0, 1920), Some(SectionKey::Hero));
        source.set(true);
        scene.update(&ctx(1, 1920), Some(SectionKey::Hero));

        assert!(!scene.is_static());
        let frame = scene.frame();
        assert!(frame.reduced_motion);
        assert_eq!(frame.particle_count, 0);
        assert!(frame.shapes.is_empty());
        assert_eq!(frame.star_count, 1000);
        assert_eq!(frame.star_time, 0.0);
        assert_eq!(frame.uniform.reduced_motion, 1);
        // No parallax: the live eye equals the smoothed pose
        let state = frame.camera_state.unwrap();
        assert_eq!(frame.camera.unwrap().eye, state.current.position);
        // Sub-scenes hold their rest pose
        let robot = frame.robot.as_ref().unwrap();
        assert_eq!(robot.frame, RobotFigure::default().frame_at(0.0));
    }

    #[test]
    fn reenabling_motion_leaves_static_backdrop() {
        let source = ManualPreference::new(true);
        let mut scene = Scene::new(config(1280), &source);
        let _guard = source.watch(scene.motion_notifier());
        assert!(scene.is_static());
        source.set(false);
        scene.update(&ctx(0, 1280), Some(SectionKey::About));
        assert!(!scene.is_static());
        assert!(scene.frame().backdrop.is_none());
        assert_eq!(scene.frame().particle_count, 2000);
    }

    #[test]
    fn forced_option_overrides_platform() {
        let mut cfg = config(1280);
        cfg.options.motion.force_reduced = Some(true);
        let scene = Scene::new(cfg, &StaticPreference(false));
        assert!(scene.is_static());
        assert!(scene.backdrop().is_some());
    }

    #[test]
    fn identical_inputs_give_identical_frames() {
        let mut a = Scene::new(config(1280), &StaticPreference(false));
        let mut b = Scene::new(config(1280), &StaticPreference(false));
        for i in 0..30 {
            a.update(&ctx(i, 1280), Some(SectionKey::Projects));
            b.update(&ctx(i, 1280), Some(SectionKey::Projects));
        }
        assert_eq!(a.frame(), b.frame());
    }

    #[test]
    fn camera_heads_for_section() {
        let mut scene = Scene::new(config(1280), &StaticPreference(false));
        for i in 0..600 {
            scene.update(&ctx(i, 1280), Some(SectionKey::Skills));
        }
        let state = scene.frame().camera_state.unwrap();
        let target = SectionKey::Skills.camera_pose().position;
        assert!(state.current.position.distance(target) < 1e-3);
        // Parallax from the fixed pointer sits on top
        let eye = scene.frame().camera.unwrap().eye;
        assert!((eye - state.current.position - Vec3::new(0.2, -0.06, 0.0)).length() < 1e-5);
    }

    #[test]
    fn star_layout_follows_reduced_motion() {
        let source = ManualPreference::new(false);
        let mut scene = Scene::new(config(1280), &source);
        let _guard = source.watch(scene.motion_notifier());
        scene.update(&ctx(0, 1280), None);
        assert_eq!(scene.frame().layout_revision, 0);
        assert_eq!(scene.layout().unwrap().stars.len(), 5000);

        source.set(true);
        scene.update(&ctx(1, 1280), None);
        assert_eq!(scene.frame().layout_revision, 1);
        assert_eq!(scene.layout().unwrap().stars.len(), 1000);

        // Unchanged count keeps the revision
        scene.update(&ctx(2, 1280), None);
        assert_eq!(scene.frame().layout_revision, 1);
    }

    #[test]
    fn recomposed_scene_moves_layout_revision() {
        let source = ManualPreference::new(true);
        let mut scene = Scene::new(config(1280), &source);
        let _guard = source.watch(scene.motion_notifier());
        assert!(scene.layout().is_none());
        source.set(false);
        scene.update(&ctx(0, 1280), None);
        assert_eq!(scene.frame().layout_revision, 1);
        assert!(scene.layout().is_some());
    }

    #[test]
    fn showcase_can_be_disabled() {
        let mut cfg = config(1280);
        cfg.showcase = false;
        let mut scene = Scene::new(cfg, &StaticPreference(false));
        scene.update(&ctx(0, 1280), None);
        assert!(scene.frame().robot.is_none());
        assert!(scene.frame().network.is_none());
        let layout = scene.layout().unwrap();
        assert!(layout.robot.is_none());
        assert!(layout.network.is_none());
    }

    #[test]
    fn lights_match_backdrop_rig() {
        let scene = Scene::new(config(1280), &StaticPreference(false));
        let lights = scene.lights();
        assert_eq!(lights.ambient, 0.2);
        assert_eq!(lights.points[0].position, Vec3::splat(10.0));
        assert_eq!(lights.points[0].color, palette::BLUE);
    }
}
