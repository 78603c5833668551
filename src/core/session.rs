//! Game session - the top-level phase state machine.
//!
//! One owned aggregate holds the phase, pile, piece, score and gate timers;
//! the host calls `update` once per frame with at most one pending key and the
//! frame delta, then `draw` with a render sink. Phase transitions are reported
//! back so the host can react (music, process exit) without the core knowing
//! about audio or windows.

use crate::core::meld;
use crate::core::piece::FallingPiece;
use crate::core::pile::Pile;
use crate::core::rng::SimpleRng;
use crate::core::timer::Timer;
use crate::render::{px, Rgb, BLOCK_PX, RenderSink};
use crate::types::{
    Direction, Key, Phase, BOARD_HEIGHT, BOARD_WIDTH, FALL_INTERVAL_MS, GROWTH_INTERVAL_MS,
    INPUT_INTERVAL_MS,
};

/// Gate intervals for the three in-game timers. `growth_interval_ms` is the
/// per-difficulty knob; nothing adjusts it at runtime yet.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    pub input_interval_ms: u32,
    pub fall_interval_ms: u32,
    pub growth_interval_ms: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            input_interval_ms: INPUT_INTERVAL_MS,
            fall_interval_ms: FALL_INTERVAL_MS,
            growth_interval_ms: GROWTH_INTERVAL_MS,
        }
    }
}

/// Menu entries, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Start,
    Credits,
    Exit,
}

pub const MENU_ITEMS: [MenuItem; 3] = [MenuItem::Start, MenuItem::Credits, MenuItem::Exit];

impl MenuItem {
    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Start => "start",
            MenuItem::Credits => "credits",
            MenuItem::Exit => "exit",
        }
    }
}

/// Phase change reported by one `update` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    None,
    EnterGame,
    EnterCredits,
    /// Back to the menu, either via the quit key or because the pile
    /// reached the top.
    ReturnToMenu { game_over: bool },
    /// The menu's exit entry was selected; the host should terminate.
    ExitRequested,
}

/// The complete simulation state for one process.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
    menu_cursor: usize,
    piece: Option<FallingPiece>,
    pile: Pile,
    score: u32,
    pending_key: Option<Key>,
    input_timer: Timer,
    fall_timer: Timer,
    growth_timer: Timer,
    rng: SimpleRng,
    tuning: Tuning,
}

impl GameSession {
    pub fn new(seed: u32) -> Self {
        Self::with_tuning(seed, Tuning::default())
    }

    pub fn with_tuning(seed: u32, tuning: Tuning) -> Self {
        Self {
            phase: Phase::Menu,
            menu_cursor: 0,
            piece: None,
            pile: Pile::new(),
            score: 0,
            pending_key: None,
            input_timer: Timer::new(),
            fall_timer: Timer::new(),
            growth_timer: Timer::new(),
            rng: SimpleRng::new(seed),
            tuning,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn pile(&self) -> &Pile {
        &self.pile
    }

    pub fn piece(&self) -> Option<&FallingPiece> {
        self.piece.as_ref()
    }

    pub fn menu_cursor(&self) -> usize {
        self.menu_cursor
    }

    #[cfg(test)]
    pub fn pile_mut(&mut self) -> &mut Pile {
        &mut self.pile
    }

    /// Advance the session by one frame.
    ///
    /// `key` is the single pending input for this frame (a later press within
    /// the same frame overwrites an earlier one at the host boundary).
    pub fn update(&mut self, key: Option<Key>, dt_ms: u32) -> Transition {
        match self.phase {
            Phase::Menu => self.update_menu(key),
            Phase::Credits => self.update_credits(key),
            Phase::Game => self.update_game(key, dt_ms),
        }
    }

    fn update_menu(&mut self, key: Option<Key>) -> Transition {
        match key {
            Some(Key::Up) | Some(Key::W) => {
                self.menu_cursor = (self.menu_cursor + MENU_ITEMS.len() - 1) % MENU_ITEMS.len();
                Transition::None
            }
            Some(Key::Down) | Some(Key::S) => {
                self.menu_cursor = (self.menu_cursor + 1) % MENU_ITEMS.len();
                Transition::None
            }
            Some(Key::Return) | Some(Key::Space) => match MENU_ITEMS[self.menu_cursor] {
                MenuItem::Start => {
                    self.enter_game();
                    Transition::EnterGame
                }
                MenuItem::Credits => {
                    self.phase = Phase::Credits;
                    Transition::EnterCredits
                }
                MenuItem::Exit => Transition::ExitRequested,
            },
            _ => Transition::None,
        }
    }

    fn update_credits(&mut self, key: Option<Key>) -> Transition {
        match key {
            Some(Key::Q) | Some(Key::Escape) => {
                self.pending_key = None;
                self.phase = Phase::Menu;
                Transition::ReturnToMenu { game_over: false }
            }
            _ => Transition::None,
        }
    }

    fn update_game(&mut self, key: Option<Key>, dt_ms: u32) -> Transition {
        match key {
            Some(Key::Q) | Some(Key::Escape) => {
                self.leave_game();
                return Transition::ReturnToMenu { game_over: false };
            }
            Some(
                k @ (Key::Left
                | Key::Right
                | Key::Down
                | Key::Up
                | Key::A
                | Key::D
                | Key::S
                | Key::W
                | Key::Space),
            ) => {
                // Overwrites any unapplied key; input is lossy by design.
                self.pending_key = Some(k);
            }
            Some(Key::Return) | None => {}
        }

        self.input_timer.advance(dt_ms);
        self.fall_timer.advance(dt_ms);
        self.growth_timer.advance(dt_ms);

        // Input application gate.
        if self.input_timer.expired(self.tuning.input_interval_ms) {
            self.input_timer.reset();
            if let Some(k) = self.pending_key.take() {
                self.apply_game_key(k);
                if self.settle_after_mutation() {
                    return self.top_out();
                }
            }
        }

        // Automatic descent gate.
        if self.fall_timer.expired(self.tuning.fall_interval_ms) {
            self.fall_timer.reset();
            if let Some(piece) = self.piece.as_mut() {
                piece.translate(Direction::Down);
            }
            if self.settle_after_mutation() {
                return self.top_out();
            }
        }

        // Pile growth gate.
        if self.growth_timer.expired(self.tuning.growth_interval_ms) {
            self.growth_timer.reset();
            self.pile.grow(&mut self.rng);
            if self.pile.reached_top() {
                return self.top_out();
            }
            if self.settle_after_mutation() {
                return self.top_out();
            }
        }

        Transition::None
    }

    fn apply_game_key(&mut self, key: Key) {
        let Some(piece) = self.piece.as_mut() else {
            return;
        };
        match key {
            Key::Left | Key::A => {
                if !piece.left_wall_collision() {
                    piece.translate(Direction::Left);
                }
            }
            Key::Right | Key::D => {
                if !piece.right_wall_collision() {
                    piece.translate(Direction::Right);
                }
            }
            Key::Down | Key::S => piece.translate(Direction::Down),
            Key::Up | Key::W | Key::Space => piece.rotate(),
            _ => {}
        }
    }

    /// Run the meld engine after a committed mutation. Returns true when the
    /// pile has reached the top and the session must end.
    fn settle_after_mutation(&mut self) -> bool {
        let Some(piece) = self.piece.as_ref() else {
            return false;
        };
        if let Some(outcome) = meld::resolve(piece, &mut self.pile) {
            self.score = self.score.saturating_add(outcome.points);
            self.piece = Some(FallingPiece::spawn(self.rng.random_shape()));
            return outcome.pile_reached_top;
        }
        false
    }

    fn enter_game(&mut self) {
        self.phase = Phase::Game;
        self.pile.clear();
        self.score = 0;
        self.pending_key = None;
        self.piece = Some(FallingPiece::spawn(self.rng.random_shape()));
        self.input_timer.reset();
        self.fall_timer.reset();
        self.growth_timer.reset();
    }

    /// Discard pile and piece; the score stays visible on the menu.
    fn leave_game(&mut self) {
        self.phase = Phase::Menu;
        self.piece = None;
        self.pile.clear();
        self.pending_key = None;
    }

    fn top_out(&mut self) -> Transition {
        self.leave_game();
        Transition::ReturnToMenu { game_over: true }
    }

    // ── Drawing ──────────────────────────────────────────────────────────

    pub fn draw(&self, sink: &mut dyn RenderSink) {
        match self.phase {
            Phase::Menu => self.draw_menu(sink),
            Phase::Game => self.draw_game(sink),
            Phase::Credits => self.draw_credits(sink),
        }
    }

    fn draw_menu(&self, sink: &mut dyn RenderSink) {
        let title = Rgb::new(240, 220, 80);
        let item = Rgb::new(200, 200, 200);
        let marker = Rgb::new(100, 220, 120);

        sink.text(px(2), px(3), "S H A D O W P I L E", title);
        for (i, entry) in MENU_ITEMS.iter().enumerate() {
            let y = px(6 + 2 * i as i8);
            if i == self.menu_cursor {
                sink.circle(px(2) + BLOCK_PX / 2, y + BLOCK_PX / 2, BLOCK_PX / 4, marker);
            }
            sink.text(px(4), y, entry.label(), item);
        }
        if self.score > 0 {
            sink.text(px(2), px(14), &format!("last score: {}", self.score), item);
        }
    }

    fn draw_game(&self, sink: &mut dyn RenderSink) {
        let frame = Rgb::new(200, 200, 200);
        let pile_color = Rgb::new(220, 80, 80);
        let piece_color = Rgb::new(80, 220, 220);
        let text_color = Rgb::new(220, 220, 220);

        let w = px(BOARD_WIDTH);
        let h = px(BOARD_HEIGHT);
        sink.line(0, 0, w, 0, frame);
        sink.line(0, h, w, h, frame);
        sink.line(0, 0, 0, h, frame);
        sink.line(w, 0, w, h, frame);

        for cell in self.pile.iter() {
            sink.fill_rect(px(cell.x), px(cell.y), BLOCK_PX, BLOCK_PX, pile_color);
        }

        if let Some(piece) = &self.piece {
            for cell in piece.cells() {
                // Blocks above the board exist but are never rendered there.
                if cell.y >= 0 {
                    sink.fill_rect(px(cell.x), px(cell.y), BLOCK_PX, BLOCK_PX, piece_color);
                }
            }
        }

        sink.text(w + BLOCK_PX, px(1), "score", text_color);
        sink.text(w + BLOCK_PX, px(2), &format!("{}", self.score), text_color);
    }

    fn draw_credits(&self, sink: &mut dyn RenderSink) {
        let title = Rgb::new(240, 220, 80);
        let body = Rgb::new(200, 200, 200);
        sink.text(px(2), px(3), "credits", title);
        sink.text(px(2), px(5), "a falling shadow against a rising tide", body);
        sink.text(px(2), px(7), "q / esc - back to menu", body);
    }
}
