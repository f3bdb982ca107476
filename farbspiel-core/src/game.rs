//! Game State Machine
//!
//! ```text
//!   Idle ──(Startup-Show fertig)──► Playing ──(alle Farben gleich)──► Celebrating
//!                                     ▲  │                                 │
//!                                     │  └─(Tastendruck: index + 1 mod N)  │
//!                                     └────(Feier fertig: mischen, reset)──┘
//! ```
//!
//! Die Sieg-Prüfung vergleicht die aufgelösten Farben (nach Paletten-Lookup),
//! nicht die Indizes. Sie ist nach dem Start und nach jedem Mischen
//! unscharf geschaltet, bis mindestens ein Druck verarbeitet wurde, sonst
//! würde das Spiel mit allen Indizes auf 0 sofort gewinnen.

use crate::button::Button;
use crate::config::GameConfig;
use crate::palette::{DEFAULT_PALETTE_LEN, Palette};
use crate::rng::XorShift32;
use crate::types::{BUTTON_COUNT, Color, GameState, PressEvent};

/// Ergebnis eines akzeptierten Tastendrucks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// Button ist einen Schritt weiter
    Advanced {
        button: usize,
        index: usize,
        color: Color,
    },
    /// Alle drei Farben gleich
    Won { color: Color },
}

/// Ergebnis einer Abtastung aller Buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PollOutcome {
    /// Mindestens ein entprellter Druck, auch wenn er ignoriert wurde
    pub pressed: bool,
    /// Anzahl vom Spiel verarbeiteter Drücke
    pub accepted: u8,
    pub won: Option<Color>,
}

pub struct Game<const N: usize = DEFAULT_PALETTE_LEN> {
    palette: Palette<N>,
    buttons: [Button; BUTTON_COUNT],
    state: GameState,
    armed: bool,
    rng: XorShift32,
}

impl<const N: usize> Game<N> {
    /// Neues Spiel mit Palette aus `seed`
    pub fn new(seed: u32, config: &GameConfig) -> Self {
        Self::with_palette(Palette::generate(seed), seed, config)
    }

    pub fn with_palette(palette: Palette<N>, seed: u32, config: &GameConfig) -> Self {
        Self {
            palette,
            buttons: core::array::from_fn(|id| Button::new(id, config.polarity, config.debounce_ms)),
            state: GameState::Idle,
            armed: false,
            rng: XorShift32::new(seed.rotate_left(16) ^ 0xA5A5_5A5A),
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn palette(&self) -> &Palette<N> {
        &self.palette
    }

    pub fn indices(&self) -> [usize; BUTTON_COUNT] {
        core::array::from_fn(|b| self.buttons[b].index())
    }

    /// Sieg-Prüfung scharf (seit dem letzten Mischen wurde gedrückt)
    pub fn is_armed(&self) -> bool {
        self.armed
    }

    /// Eingaben werden nur im Spiel verarbeitet
    pub fn accepts_input(&self) -> bool {
        self.state == GameState::Playing
    }

    /// Aufgelöste Farbe jedes Buttons
    pub fn resolved_colors(&self) -> [Color; BUTTON_COUNT] {
        core::array::from_fn(|b| self.palette.get(self.buttons[b].index()))
    }

    /// Tastet alle Buttons ab und verarbeitet die entprellten Drücke
    ///
    /// Die Entpreller laufen in jedem Zustand weiter, nur das Weiterschalten
    /// ist auf `Playing` beschränkt.
    pub fn poll(&mut self, levels_high: [bool; BUTTON_COUNT], now_ms: u32) -> PollOutcome {
        let mut outcome = PollOutcome::default();
        for (b, level_high) in levels_high.into_iter().enumerate() {
            let Some(event) = self.buttons[b].poll(level_high, now_ms) else {
                continue;
            };
            outcome.pressed = true;
            match self.handle_press(event) {
                Some(GameEvent::Won { color }) => {
                    outcome.accepted += 1;
                    outcome.won = Some(color);
                }
                Some(GameEvent::Advanced { .. }) => outcome.accepted += 1,
                None => {}
            }
        }
        outcome
    }

    /// Verarbeitet einen Druck. `None` wenn gerade keine Eingaben zählen.
    pub fn handle_press(&mut self, event: PressEvent) -> Option<GameEvent> {
        if !self.accepts_input() {
            return None;
        }

        let button = &mut self.buttons[event.button];
        let index = button.advance(N);
        self.armed = true;

        if let Some(color) = self.check_win() {
            return Some(GameEvent::Won { color });
        }

        Some(GameEvent::Advanced {
            button: event.button,
            index,
            color: self.palette.get(index),
        })
    }

    /// Prüft die Sieg-Bedingung und wechselt ggf. nach `Celebrating`
    pub fn check_win(&mut self) -> Option<Color> {
        if self.state != GameState::Playing || !self.armed {
            return None;
        }

        let [first, rest @ ..] = self.resolved_colors();
        if rest.iter().all(|color| *color == first) {
            self.state = GameState::Celebrating;
            Some(first)
        } else {
            None
        }
    }

    /// Startup-Show ist vorbei: Spiel beginnt
    pub fn finish_startup(&mut self) {
        if self.state == GameState::Idle {
            self.state = GameState::Playing;
        }
    }

    /// Feier ist vorbei: Palette mischen, alle Indizes auf 0, Sieg unscharf
    pub fn finish_celebration(&mut self) {
        if self.state != GameState::Celebrating {
            return;
        }
        self.palette = self.palette.reshuffle(&mut self.rng);
        for button in &mut self.buttons {
            button.reset();
        }
        self.armed = false;
        self.state = GameState::Playing;
    }
}
