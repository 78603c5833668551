//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Board dimensions (cells)
pub const BOARD_WIDTH: i8 = 10;
pub const BOARD_HEIGHT: i8 = 20;

/// Game timing constants (in milliseconds)
pub const TICK_MS: u32 = 16;
pub const INPUT_INTERVAL_MS: u32 = 100;
pub const FALL_INTERVAL_MS: u32 = 1000;
pub const GROWTH_INTERVAL_MS: u32 = 2000;

/// Points awarded for reaching the floor without touching the pile.
pub const FLOOR_BONUS: u32 = 20;

/// A single board cell, identified purely by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i8,
    pub y: i8,
}

impl Cell {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// The six tetromino shapes in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    S,
    O,
    L,
    I,
    T,
    Z,
}

impl ShapeKind {
    pub const ALL: [ShapeKind; 6] = [
        ShapeKind::S,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::I,
        ShapeKind::T,
        ShapeKind::Z,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::S => "s",
            ShapeKind::O => "o",
            ShapeKind::L => "l",
            ShapeKind::I => "i",
            ShapeKind::T => "t",
            ShapeKind::Z => "z",
        }
    }
}

/// One-unit translation direction for the falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Symbolic key identifiers delivered by the input source.
///
/// Anything outside this set is dropped at the decoding boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    Space,
    Return,
    W,
    A,
    S,
    D,
    Q,
    Escape,
}

/// Top-level game phase. Game-over is a transition back to `Menu`,
/// never a stored phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Menu,
    Game,
    Credits,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Menu => "menu",
            Phase::Game => "game",
            Phase::Credits => "credits",
        }
    }
}
