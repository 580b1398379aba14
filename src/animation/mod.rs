//! Timer-driven camera flight animation.
//!
//! A [`FlightDriver`](driver::FlightDriver) advances at most one
//! [`Flight`](crate::camera::Flight) at a time on a repeating timer
//! supplied by the host through [`TimerHost`](timer::TimerHost).

/// The stepped interpolation driver and its job bookkeeping.
pub mod driver;
/// Timer facility trait and handle type.
pub mod timer;

pub use driver::FlightDriver;
pub use timer::{TimerHost, TimerId};
