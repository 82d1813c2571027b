// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Real-time animation core for an animated 3D page backdrop.
//!
//! Backdrop poses a set of decorative objects (a drifting particle field,
//! floating wireframe shapes, a star shell, a small robot and a layered
//! network) from a shared frame clock, and steers a camera toward the page
//! section currently in view with a little pointer parallax. Every frame it
//! publishes a [`scene::SceneFrame`] with instance matrices and a camera
//! uniform that any renderer can upload. When the user prefers reduced
//! motion the scene degrades to a still gradient.
//!
//! # Key entry points
//!
//! - [`scene::Scene`] - composes animators and the camera; mount it on a
//!   [`frame::FrameScheduler`] to drive it
//! - [`camera::CameraController`] - section-following camera with parallax
//! - [`input::SectionTracker`] - turns scroll positions into the active
//!   section
//! - [`options::Options`] - TOML-serializable tunables
//! - [`platform::MotionPreferenceSource`] - where the reduced-motion
//!   preference comes from
//!
//! # Frame flow
//!
//! The host samples the clock once per frame through the scheduler. Every
//! callback sees the same [`frame::FrameContext`]; the mounted scene reads
//! the shared section register, consumes any pending reduced-motion change,
//! and recomputes all poses as pure functions of the elapsed time.

pub mod animation;
pub mod camera;
pub mod error;
pub mod frame;
pub mod input;
pub mod motion;
pub mod options;
pub mod platform;
pub mod scene;
pub mod util;

pub use error::BackdropError;
