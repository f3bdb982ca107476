//! Game Loop - ein Durchlauf der Hauptschleife
//!
//! Besitzt den kompletten Zustand (Spiel, Animationen, LEDs). Die Firmware
//! liest pro Durchlauf einmal die Uhr und die Button-Pegel und ruft `tick()`
//! auf. Kein versteckter globaler Zustand, keine blockierenden Wartezeiten.
//!
//! Reihenfolge pro Tick:
//! 1. Buttons abtasten → Drücke ans Spiel
//! 2. Sieg → Celebration starten
//! 3. Lange nichts gedrückt → Aurora starten
//! 4. Animation rendern, abgelaufene Effekte ans Spiel melden
//! 5. Farben über den LED-Treiber ausgeben

use crate::animation::{Animator, Effect};
use crate::config::GameConfig;
use crate::game::Game;
use crate::led::LedDriver;
use crate::palette::DEFAULT_PALETTE_LEN;
use crate::traits::RgbLedWriter;
use crate::types::{BUTTON_COUNT, Color, GameState, LED_COUNT};

/// Was in einem Tick passiert ist (für Logging in der Firmware)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickReport {
    /// Mindestens ein entprellter Druck (auch ignorierte)
    pub pressed: bool,
    /// Vom Spiel verarbeitete Drücke
    pub accepted: u8,
    /// Sieg in diesem Tick, mit Sieg-Farbe
    pub won: Option<Color>,
    /// Effekt, der in diesem Tick abgelaufen ist
    pub finished: Option<Effect>,
    pub shimmer_started: bool,
    pub shimmer_stopped: bool,
    /// Anzahl fehlgeschlagener LED-Schreibvorgänge
    pub write_errors: u8,
}

pub struct GameLoop<W, const N: usize = DEFAULT_PALETTE_LEN> {
    game: Game<N>,
    animator: Animator,
    leds: LedDriver<W>,
    config: GameConfig,
    last_activity_ms: u32,
}

impl<W: RgbLedWriter, const N: usize> GameLoop<W, N> {
    pub fn new(writers: [W; LED_COUNT], seed: u32, config: GameConfig) -> Self {
        Self::with_game(writers, Game::new(seed, &config), config)
    }

    pub fn with_game(writers: [W; LED_COUNT], game: Game<N>, config: GameConfig) -> Self {
        Self {
            game,
            animator: Animator::new(&config),
            leds: LedDriver::new(writers, config.gamma),
            config,
            last_activity_ms: 0,
        }
    }

    /// Startet die Startup-Show. Ohne Aufruf beginnt das Spiel direkt.
    pub fn start(&mut self, now_ms: u32) {
        self.animator.start(Effect::Startup, now_ms);
        self.last_activity_ms = now_ms;
    }

    pub fn tick(&mut self, now_ms: u32, levels_high: [bool; BUTTON_COUNT]) -> TickReport {
        let mut report = TickReport::default();

        // Ohne Startup-Show gibt es nichts abzuwarten
        if self.game.state() == GameState::Idle && !self.animator.is_active() {
            self.game.finish_startup();
            self.last_activity_ms = now_ms;
        }

        let outcome = self.game.poll(levels_high, now_ms);
        report.pressed = outcome.pressed;
        report.accepted = outcome.accepted;

        if outcome.pressed {
            self.last_activity_ms = now_ms;
            if self.animator.effect() == Effect::IdleShimmer {
                self.animator.stop();
                report.shimmer_stopped = true;
            }
        }

        report.won = outcome.won.or_else(|| self.game.check_win());
        if let Some(color) = report.won {
            self.animator.start_celebration(color, now_ms);
        }

        if self.game.state() == GameState::Playing
            && !self.animator.is_active()
            && now_ms.wrapping_sub(self.last_activity_ms) >= self.config.shimmer.idle_after_ms
        {
            self.animator.start(Effect::IdleShimmer, now_ms);
            report.shimmer_started = true;
        }

        let mut frame = self.animator.tick(now_ms, &self.game.resolved_colors());
        if let Some(effect) = frame.finished {
            match effect {
                Effect::Startup => self.game.finish_startup(),
                Effect::Celebration => self.game.finish_celebration(),
                Effect::None | Effect::IdleShimmer => {}
            }
            self.last_activity_ms = now_ms;
            frame.colors = self.game.resolved_colors();
            report.finished = Some(effect);
        }

        for (led, color) in frame.colors.into_iter().enumerate() {
            if self.leds.render(led, color, self.config.brightness).is_err() {
                report.write_errors += 1;
            }
        }

        report
    }

    pub fn game(&self) -> &Game<N> {
        &self.game
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn leds(&self) -> &LedDriver<W> {
        &self.leds
    }

    pub fn leds_mut(&mut self) -> &mut LedDriver<W> {
        &mut self.leds
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
