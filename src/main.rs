//! Headless driver for the backdrop scene.
//!
//! Builds a scene from TOML options, scrolls through every page section
//! while sweeping the pointer, and logs camera and particle progress. The
//! final frame can be written out as JSON for inspection.

use std::path::PathBuf;
use std::process::ExitCode;

use backdrop::camera::{SectionKey, SectionRegister};
use backdrop::error::BackdropError;
use backdrop::frame::{FrameScheduler, Viewport};
use backdrop::input::{PageLayout, PointerState, SectionTracker};
use backdrop::options::Options;
use backdrop::platform::ManualPreference;
use backdrop::scene::{MountedScene, Scene, SceneConfig, SceneFrame};
use clap::Parser;
use web_time::{Duration, Instant};

#[derive(Debug, Parser)]
#[command(name = "backdrop", about = "Drive the animated backdrop headlessly")]
struct Args {
    /// TOML options preset.
    #[arg(long)]
    options: Option<PathBuf>,
    /// Viewport width in pixels.
    #[arg(long, default_value_t = 1280)]
    width: u32,
    /// Viewport height in pixels.
    #[arg(long, default_value_t = 800)]
    height: u32,
    /// Number of frames to run.
    #[arg(long, default_value_t = 600)]
    frames: u64,
    /// Frame rate (fixed step, or target rate with --realtime).
    #[arg(long, default_value_t = 60)]
    fps: u32,
    /// Start with reduced motion preferred.
    #[arg(long)]
    reduced_motion: bool,
    /// Flip the reduced-motion preference at this frame.
    #[arg(long)]
    toggle_motion_at: Option<u64>,
    /// Pace frames against the wall clock instead of stepping.
    #[arg(long)]
    realtime: bool,
    /// Write the final frame as JSON.
    #[arg(long)]
    dump: Option<PathBuf>,
    /// Write the options JSON schema.
    #[arg(long)]
    schema: Option<PathBuf>,
}

fn main() -> ExitCode {
    env_logger::init();
    match run(&Args::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), BackdropError> {
    let options = match &args.options {
        Some(path) => Options::load(path)?,
        None => Options::default(),
    };
    if let Some(path) = &args.schema {
        let schema = serde_json::to_string_pretty(&Options::json_schema())?;
        std::fs::write(path, schema)?;
        log::info!("wrote options schema to {}", path.display());
    }

    let viewport = Viewport {
        width: args.width,
        height: args.height,
    };
    let stats_interval = u64::from(options.debug.stats_interval);
    let source = ManualPreference::new(args.reduced_motion);
    let scene = Scene::new(SceneConfig::new(options, viewport), &source);

    let target_fps = if args.realtime { args.fps } else { 0 };
    let mut scheduler = FrameScheduler::new(viewport, target_fps);
    let sections = SectionRegister::default();
    let tracker = SectionTracker::new(sections.clone());
    let mounted = scene.mount(&scheduler, sections, &source);

    let layout = PageLayout::uniform(viewport.height as f32);
    let max_scroll = (layout.height() - viewport.height as f32).max(0.0);
    let step = Duration::from_secs_f64(1.0 / f64::from(args.fps.max(1)));
    let (w, h) = (viewport.width as f32, viewport.height as f32);
    let mut pointer = PointerState::default();

    for i in 0..args.frames {
        if args.toggle_motion_at == Some(i) {
            source.set(!args.reduced_motion);
        }

        let progress = i as f32 / args.frames as f32;
        let _ = tracker.on_scroll(&layout.rects_at(progress * max_scroll));

        let t = i as f32 * step.as_secs_f32();
        pointer.handle_move(
            (0.5 + 0.45 * (t * 0.7).sin()) * w,
            (0.5 + 0.45 * (t * 1.1).cos()) * h,
            w,
            h,
        );
        scheduler.set_pointer(pointer.ndc);

        if args.realtime {
            let wait = scheduler.time_until_next_frame(Instant::now());
            if !wait.is_zero() {
                std::thread::sleep(wait);
            }
            let _ = scheduler.run_frame(Instant::now());
        } else {
            let _ = scheduler.advance(step);
        }

        if stats_interval > 0 && i % stats_interval == 0 {
            log_progress(&mounted, scheduler.fps());
        }
    }

    log_progress(&mounted, scheduler.fps());
    if let Some(path) = &args.dump {
        let json = mounted.with_frame(SceneFrame::to_json)?;
        std::fs::write(path, json)?;
        log::info!("wrote final frame to {}", path.display());
    }
    drop(mounted.unmount());
    Ok(())
}

fn log_progress(mounted: &MountedScene, fps: f32) {
    mounted.with_frame(|frame| {
        let section = frame.section.map_or("<none>", SectionKey::label);
        match frame.camera {
            Some(camera) => log::info!(
                "frame {:>5} t={:>6.2}s {:<8} eye=({:.2}, {:.2}, {:.2}) particles={} stars={} fps={fps:.1}",
                frame.time.frame,
                frame.time.elapsed,
                section,
                camera.eye.x,
                camera.eye.y,
                camera.eye.z,
                frame.particle_count,
                frame.star_count,
            ),
            None => log::info!(
                "frame {:>5} t={:>6.2}s {:<8} static backdrop",
                frame.time.frame,
                frame.time.elapsed,
                section,
            ),
        }
    });
}
