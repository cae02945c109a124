//! Host-independent simulation of a drifting, pointer-reactive field of
//! outline shapes linked by proximity lines.
//!
//! Nothing here touches platform APIs; hosts supply a [`Surface`] to draw on,
//! the current [`Theme`], pointer coordinates and a frame clock.

pub mod connections;
pub mod constants;
pub mod field;
pub mod params;
pub mod pointer;
pub mod shape;
pub mod simulation;
pub mod surface;
pub mod theme;

pub use connections::*;
pub use field::*;
pub use params::*;
pub use pointer::*;
pub use shape::*;
pub use simulation::*;
pub use surface::*;
pub use theme::*;
