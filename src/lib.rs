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
// Camera math compares against exact interpolation endpoints
#![allow(clippy::float_cmp)]
// Graphics casts are intentional and safe
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::module_name_repetitions)]

//! Interactive 3D skeletal anatomy viewer core.
//!
//! Osteo owns the temporal heart of a pick-to-zoom anatomy viewer: the
//! camera state machine, the timer-driven pose interpolation engine, and
//! the interaction protocol that maps pointer/keyboard input onto camera
//! transitions. Mesh loading, the render surface, and text overlays stay
//! behind collaborator traits so any windowing/rendering stack can host
//! the core.
//!
//! # Key entry points
//!
//! - [`engine::ViewerEngine`] - the facade wiring everything together
//! - [`camera::CameraRig`] - pose ownership and zoom state transitions
//! - [`animation::FlightDriver`] - stepped camera flights on a repeating
//!   timer
//! - [`scene::BoneRegistry`] - named pickable bones with bounds
//! - [`options::Options`] - runtime configuration (animation, keybindings)
//!
//! # Architecture
//!
//! Everything is single-threaded and run-to-completion: the host event
//! loop serializes input events and timer ticks, so camera state and the
//! in-flight animation job are never mutated concurrently. A new zoom
//! request atomically replaces the live flight; that replacement is the
//! system's only cancellation mechanism apart from the explicit Escape
//! cancel.

pub mod animation;
pub mod camera;
pub mod display;
pub mod engine;
pub mod error;
pub mod input;
pub mod options;
pub mod picking;
pub mod scene;

#[cfg(test)]
pub(crate) mod testing;
