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
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Viewpoint navigation and pointer interaction for a walkthrough 3D scene.
//!
//! The crate drives an orbiting camera over a furnished scene, keeps both
//! the camera and its look-at target inside a safe volume, animates the
//! camera between named preset viewpoints, and resolves the pointer to
//! clickable scene objects that open external links.
//!
//! # Key entry points
//!
//! - [`engine::WalkthroughEngine`] - owns all navigation state and runs the
//!   per-frame driver
//! - [`navigation`] - viewpoints and the fly-to animator
//! - [`camera`] - camera, orbit gesture controls, and the bounding volume
//! - [`picking`] - hover tracking and click-to-open-link
//! - [`scene::Scene`] - the transform hierarchy that pointer rays are cast
//!   against
//! - [`options::Options`] - TOML-backed configuration (viewpoints, bounds,
//!   controls, key bindings)
//!
//! # Frame order
//!
//! Each call to [`engine::WalkthroughEngine::frame`] runs, in order: the
//! live fly-to transition (if any), otherwise the orbit controls' damping
//! step, then the bounding-volume clamp, and finally builds the
//! [`camera::CameraUniform`] handed to the renderer. Clamping is always the
//! last geometric step, so no rendered frame ever shows the camera outside
//! the volume.

pub mod camera;
pub mod engine;
mod error;
pub mod input;
pub mod navigation;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;
#[cfg(feature = "web")]
pub mod web;

pub use engine::{WalkCommand, WalkthroughEngine};
pub use error::WalkthroughError;
pub use input::{InputEvent, MouseButton};
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
