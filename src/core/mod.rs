//! Core module - pure simulation logic with no I/O dependencies
//!
//! Everything in here is a total function over well-formed board geometry.
//! Rendering, audio and raw input live behind boundaries in `render`,
//! `audio` and `input`.

pub mod meld;
pub mod piece;
pub mod pile;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod timer;

// Re-export commonly used types
pub use meld::{resolve, MeldOutcome};
pub use piece::FallingPiece;
pub use pile::Pile;
pub use rng::SimpleRng;
pub use session::{GameSession, Transition, Tuning};
pub use timer::Timer;
