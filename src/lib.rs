//! Monome grid step sequencer.
//!
//! The upper rows of the grid hold one trigger lane each; the bottom row is the
//! transport, where a single tap cuts the playhead to that column and holding one
//! key while pressing a second sets the loop between them.
//!
//! [`engine::SequencerEngine`] is the only thing device, clock and audio code call into.

pub mod common;
pub mod error;
pub mod gesture;
pub mod matrix;
pub mod playhead;
pub mod render;
pub mod engine;

pub mod app;
pub mod config;
pub mod decode;
pub mod device;
pub mod metro;
pub mod stream;
pub mod voice;

pub use common::{Geometry, Region};
pub use engine::{KeyEvent, LedOutput, SequencerEngine, Trigger};
pub use error::GeometryError;
pub use gesture::{TransportAction, TransportGestureTracker};
pub use matrix::StepMatrix;
pub use playhead::PlayheadController;
pub use render::{render, Frame};
