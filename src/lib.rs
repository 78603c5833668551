//! Shadowpile: inverted falling-block simulation core and terminal host.
//!
//! A single shadow tetromino falls under player control while a pile grows
//! from the bottom of the board; overlapping the pile scores and erases the
//! overlapped blocks. `core` holds the simulation, `render` the draw-primitive
//! boundary, and `input`/`term`/`audio` the terminal host plumbing.

pub mod audio;
pub mod config;
pub mod core;
pub mod input;
pub mod render;
pub mod term;
pub mod types;
