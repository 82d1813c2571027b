use std::cell::{Ref, RefCell};
use std::rc::Rc;

use super::composer::Scene;
use super::frame::SceneFrame;
use super::layout::SceneLayout;
use crate::camera::SectionRegister;
use crate::frame::{FrameHandle, FrameScheduler};
use crate::platform::{MotionPreferenceSource, WatchGuard};

/// A scene attached to a scheduler.
///
/// Owns the frame callback and the platform reduced-motion subscription.
/// Dropping it (or calling [`unmount`](Self::unmount)) releases both: the
/// scene receives no further updates and the platform listener is removed.
pub struct MountedScene {
    scene: Rc<RefCell<Scene>>,
    frame_handle: Option<FrameHandle>,
    watch: Option<WatchGuard>,
}

impl Scene {
    /// Attach the scene to `scheduler`.
    ///
    /// Every frame the scene reads the active section from `sections` and
    /// updates once. Reduced-motion changes reported by `source` are picked
    /// up at the start of the next frame.
    pub fn mount(
        self,
        scheduler: &FrameScheduler,
        sections: SectionRegister,
        source: &dyn MotionPreferenceSource,
    ) -> MountedScene {
        let watch = source.watch(self.motion_notifier());
        let is_static = self.is_static();
        let scene = Rc::new(RefCell::new(self));
        let target = Rc::clone(&scene);
        let frame_handle = scheduler.register(move |ctx| {
            target.borrow_mut().update(ctx, sections.get());
        });
        log::info!(
            "scene mounted ({})",
            if is_static { "static backdrop" } else { "animated" }
        );
        MountedScene {
            scene,
            frame_handle: Some(frame_handle),
            watch: Some(watch),
        }
    }
}

impl MountedScene {
    /// Borrow the scene.
    #[must_use]
    pub fn scene(&self) -> Ref<'_, Scene> {
        self.scene.borrow()
    }

    /// Copy of the latest snapshot.
    #[must_use]
    pub fn frame(&self) -> SceneFrame {
        self.scene.borrow().frame().clone()
    }

    /// Run `f` on the latest snapshot without copying it.
    pub fn with_frame<R>(&self, f: impl FnOnce(&SceneFrame) -> R) -> R {
        f(self.scene.borrow().frame())
    }

    /// Run `f` on the scene layout, or `None` while the static gradient
    /// shows.
    pub fn with_layout<R>(&self, f: impl FnOnce(&SceneLayout) -> R) -> Option<R> {
        self.scene.borrow().layout().map(f)
    }

    /// Whether the frame callback is still registered.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.frame_handle
            .as_ref()
            .is_some_and(FrameHandle::is_active)
    }

    /// Detach and hand the scene back.
    ///
    /// Returns `None` only if something else still holds the scene, which
    /// cannot happen outside a running frame.
    #[must_use]
    pub fn unmount(self) -> Option<Scene> {
        let scene = Rc::clone(&self.scene);
        drop(self);
        Rc::try_unwrap(scene).ok().map(RefCell::into_inner)
    }
}

impl Drop for MountedScene {
    fn drop(&mut self) {
        // Stop updates before releasing the platform subscription.
        drop(self.frame_handle.take());
        drop(self.watch.take());
        log::info!("scene unmounted");
    }
}

impl std::fmt::Debug for MountedScene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MountedScene")
            .field("mounted", &self.is_mounted())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use web_time::Duration;

    use super::*;
    use crate::camera::SectionKey;
    use crate::frame::Viewport;
    use crate::platform::{ManualPreference, StaticPreference};
    use crate::scene::SceneConfig;

    const STEP: Duration = Duration::from_millis(16);

    #[test]
    fn no_update_before_first_frame() {
        let scheduler = FrameScheduler::new(Viewport::default(), 0);
        let scene = Scene::new(SceneConfig::default(), &StaticPreference(false));
        let mounted = scene.mount(&scheduler, SectionRegister::default(), &StaticPreference(false));
        assert_eq!(mounted.frame().particle_count, 0);
        assert!(mounted.frame().camera.is_none());
    }

    #[test]
    fn frames_drive_the_scene() {
        let mut scheduler = FrameScheduler::new(Viewport::default(), 0);
        let source = StaticPreference(false);
        let sections = SectionRegister::default();
        let mounted = Scene::new(SceneConfig::default(), &source)
            .mount(&scheduler, sections.clone(), &source);
        for _ in 0..10 {
            let _ = scheduler.advance(STEP);
        }
        assert_eq!(mounted.frame().time.frame, 9);
        assert_eq!(mounted.frame().particle_count, 2000);

        sections.set(Some(SectionKey::Contact));
        let _ = scheduler.advance(STEP);
        mounted.with_frame(|frame| {
            let state = frame.camera_state.unwrap();
            assert_eq!(state.target, SectionKey::Contact.camera_pose());
        });
    }

    #[test]
    fn layout_and_frame_describe_every_element() {
        let mut scheduler = FrameScheduler::new(Viewport::default(), 0);
        let source = StaticPreference(false);
        let mounted = Scene::new(SceneConfig::default(), &source).mount(
            &scheduler,
            SectionRegister::default(),
            &source,
        );
        let _ = scheduler.advance(STEP);

        let layout = mounted.with_layout(SceneLayout::clone).unwrap();
        assert_eq!(layout.stars.len(), 5000);
        assert_eq!(layout.shapes.len(), 2);
        assert!(layout.shapes.iter().all(|s| s.style.material.wireframe));
        assert_eq!(layout.robot.as_ref().unwrap().parts.len(), 10);
        assert_eq!(layout.robot.as_ref().unwrap().ring.len(), 20);
        let network = layout.network.as_ref().unwrap();
        assert_eq!(network.layers.len(), 4);
        assert!(network.line.opacity < 1.0);

        mounted.with_frame(|frame| {
            let net = &frame.network.as_ref().unwrap().frame;
            assert_eq!(net.edges.len(), 4 * 6 + 6 * 6 + 6 * 3);
            assert_eq!(net.edges[0].from, network.layers[0].node_position(0));
            let names: Vec<_> = frame.shapes.iter().map(|s| s.name).collect();
            let layout_names: Vec<_> = layout.shapes.iter().map(|s| s.name).collect();
            assert_eq!(names, layout_names);
            assert_eq!(frame.particle_bytes().len(), frame.particle_count * 64);
        });

        let json: serde_json::Value = serde_json::from_str(
            &mounted.with_frame(SceneFrame::to_json).unwrap(),
        )
        .unwrap();
        assert!(json["network"]["frame"]["edges"].as_array().is_some_and(|e| !e.is_empty()));
    }

    #[test]
    fn static_scene_has_no_layout() {
        let scheduler = FrameScheduler::new(Viewport::default(), 0);
        let source = StaticPreference(true);
        let mounted = Scene::new(SceneConfig::default(), &source).mount(
            &scheduler,
            SectionRegister::default(),
            &source,
        );
        assert!(mounted.with_layout(|_| ()).is_none());
    }

    #[test]
    fn teardown_stops_updates() {
        let mut scheduler = FrameScheduler::new(Viewport::default(), 0);
        let source = ManualPreference::new(false);
        let mounted = Scene::new(SceneConfig::default(), &source).mount(
            &scheduler,
            SectionRegister::default(),
            &source,
        );
        let _ = scheduler.advance(STEP);
        assert!(mounted.is_mounted());
        assert_eq!(source.listener_count(), 1);

        let scene = mounted.unmount().unwrap();
        assert_eq!(scheduler.callback_count(), 0);
        assert_eq!(source.listener_count(), 0);
        let frozen = scene.frame().time;
        for _ in 0..5 {
            let _ = scheduler.advance(STEP);
        }
        assert_eq!(scene.frame().time, frozen);
    }

    #[test]
    fn platform_changes_reach_mounted_scene() {
        let mut scheduler = FrameScheduler::new(Viewport::default(), 0);
        let source = ManualPreference::new(false);
        let mounted = Scene::new(SceneConfig::default(), &source).mount(
            &scheduler,
            SectionRegister::default(),
            &source,
        );
        let _ = scheduler.advance(STEP);
        source.set(true);
        let _ = scheduler.advance(STEP);
        assert!(mounted.frame().reduced_motion);
        assert_eq!(mounted.frame().particle_count, 0);
        assert!(mounted.scene().is_reduced_motion());
    }
}
