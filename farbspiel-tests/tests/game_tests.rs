//! Integration Tests für das Farb-Spiel
//!
//! Diese Tests laufen auf dem Host (x86_64) mit MockLedWriter und einer
//! Fake-Uhr: die Zeit wird einfach als Zahl an `tick()` übergeben.

use farbspiel_core::{
    Effect, GameConfig, GameLoop, GameState, LedError, Palette, RgbLedWriter, XorShift32,
};
use rgb::RGB8;

// ============================================================================
// Mock LED Writer
// ============================================================================

#[derive(Default)]
pub struct MockLedWriter {
    pub last_duty: Option<RGB8>,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockLedWriter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RgbLedWriter for MockLedWriter {
    fn write(&mut self, duty: RGB8) -> Result<(), LedError> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(LedError::WriteFailed);
        }

        self.last_duty = Some(duty);
        self.write_count += 1;
        Ok(())
    }
}

// ============================================================================
// Test-Rig: GameLoop + Fake-Uhr
// ============================================================================

/// Loop-Takt wie auf dem Target
const TICK_MS: u32 = 5;
/// Pull-Up: losgelassen = HIGH
const RELEASED: [bool; 3] = [true; 3];

struct Rig {
    game_loop: GameLoop<MockLedWriter, 8>,
    now: u32,
}

impl Rig {
    fn new(seed: u32) -> Self {
        let writers = [MockLedWriter::new(), MockLedWriter::new(), MockLedWriter::new()];
        let mut game_loop = GameLoop::new(writers, seed, GameConfig::DEFAULT);
        game_loop.start(0);
        let mut rig = Self { game_loop, now: 0 };
        rig.idle(GameConfig::DEFAULT.startup.duration_ms() + TICK_MS);
        assert_eq!(rig.game_loop.game().state(), GameState::Playing);
        rig
    }

    fn tick(&mut self, levels: [bool; 3]) -> farbspiel_core::TickReport {
        let report = self.game_loop.tick(self.now, levels);
        self.now += TICK_MS;
        report
    }

    fn idle(&mut self, ms: u32) {
        let end = self.now + ms;
        while self.now < end {
            self.tick(RELEASED);
        }
    }

    /// Sauberer Druck: 40ms halten, 40ms loslassen
    fn press(&mut self, button: usize) -> Option<farbspiel_core::Color> {
        let mut levels = RELEASED;
        levels[button] = false;
        let mut won = None;
        for _ in 0..8 {
            won = won.or(self.tick(levels).won);
        }
        for _ in 0..8 {
            won = won.or(self.tick(RELEASED).won);
        }
        won
    }

    fn press_times(&mut self, button: usize, times: usize) -> Option<farbspiel_core::Color> {
        let mut won = None;
        for _ in 0..times {
            won = won.or(self.press(button));
        }
        won
    }
}

// ============================================================================
// Tests: MockLedWriter
// ============================================================================

#[test]
fn test_mock_led_writer_fail() {
    let mut mock = MockLedWriter::new();
    mock.fail_next_write = true;

    let result = mock.write(RGB8 { r: 10, g: 0, b: 0 });
    assert_eq!(result, Err(LedError::WriteFailed));
    assert_eq!(mock.write_count, 0);
    assert_eq!(mock.last_duty, None);
}

#[test]
fn test_write_failure_is_reported_and_loop_continues() {
    let mut rig = Rig::new(1);
    rig.game_loop.leds_mut().led_mut(1).writer_mut().fail_next_write = true;

    let report = rig.tick(RELEASED);
    assert_eq!(report.write_errors, 1);

    let report = rig.tick(RELEASED);
    assert_eq!(report.write_errors, 0);
}

#[test]
fn test_every_tick_writes_every_led() {
    let mut rig = Rig::new(2);
    let before: Vec<usize> = (0..3)
        .map(|i| rig.game_loop.leds().led(i).writer().write_count)
        .collect();
    rig.idle(10 * TICK_MS);
    for (i, count) in before.into_iter().enumerate() {
        assert_eq!(rig.game_loop.leds().led(i).writer().write_count, count + 10);
    }
}

// ============================================================================
// Tests: Spielablauf
// ============================================================================

#[test]
fn test_boot_does_not_celebrate() {
    let mut rig = Rig::new(3);
    assert_eq!(rig.game_loop.game().indices(), [0, 0, 0]);
    rig.idle(5_000);
    assert_eq!(rig.game_loop.game().state(), GameState::Playing);
}

#[test]
fn test_press_steps_led_color() {
    let mut rig = Rig::new(4);
    rig.press(0);
    assert_eq!(rig.game_loop.game().indices(), [1, 0, 0]);

    let expected = rig.game_loop.game().palette().get(1);
    let config = GameConfig::DEFAULT;
    let rendered = rig.game_loop.leds().led(0).rendered();
    let gamma = rig.game_loop.leds().gamma();
    let linear = expected.scaled();
    assert_eq!(
        rendered,
        RGB8 {
            r: gamma.correct(farbspiel_core::scale8(linear.r, config.brightness)),
            g: gamma.correct(farbspiel_core::scale8(linear.g, config.brightness)),
            b: gamma.correct(farbspiel_core::scale8(linear.b, config.brightness)),
        }
    );
}

#[test]
fn test_bouncy_press_counts_once() {
    let mut rig = Rig::new(5);
    // Prellen: an/aus im 5ms-Raster, nie 20ms stabil
    for level in [false, true, false, true, false, true, false, true] {
        rig.tick([level, true, true]);
    }
    assert_eq!(rig.game_loop.game().indices(), [0, 0, 0]);

    // Dann stabil gedrückt, mit Prellen beim Loslassen
    for _ in 0..10 {
        rig.tick([false, true, true]);
    }
    for level in [true, false, true, true, true, true, true, true] {
        rig.tick([level, true, true]);
    }
    assert_eq!(rig.game_loop.game().indices(), [1, 0, 0]);
}

#[test]
fn test_held_button_does_not_repeat() {
    let mut rig = Rig::new(6);
    for _ in 0..1_000 {
        rig.tick([true, false, true]);
    }
    assert_eq!(rig.game_loop.game().indices(), [0, 1, 0]);
}

/// Palette mit 8 Farben: A dreimal drücken (0 → 3), B und C ebenso,
/// Sieg, Feier, danach gemischte Palette und alle Indizes auf 0.
#[test]
fn test_full_round() {
    let mut rig = Rig::new(7);
    let palette_before = *rig.game_loop.game().palette();

    assert_eq!(rig.press_times(0, 3), None);
    assert_eq!(rig.game_loop.game().indices(), [3, 0, 0]);
    assert_eq!(rig.press_times(1, 3), None);

    // Der letzte Druck löst den Sieg im selben Tick aus
    let mut levels = RELEASED;
    levels[2] = false;
    rig.press_times(2, 2);
    let mut win_tick = None;
    for i in 0..8 {
        if let Some(color) = rig.tick(levels).won {
            win_tick = Some(i);
            assert_eq!(color, palette_before.get(3));
        }
    }
    assert!(win_tick.is_some());
    assert_eq!(rig.game_loop.game().state(), GameState::Celebrating);
    assert_eq!(rig.game_loop.animator().effect(), Effect::Celebration);

    // Drücke während der Feier zählen nicht
    rig.press(0);
    assert_eq!(rig.game_loop.game().indices(), [3, 3, 3]);

    let mut finished = false;
    for _ in 0..(GameConfig::DEFAULT.celebration.duration_ms() / TICK_MS + 2) {
        if rig.tick(RELEASED).finished == Some(Effect::Celebration) {
            finished = true;
            break;
        }
    }
    assert!(finished);
    assert_eq!(rig.game_loop.game().state(), GameState::Playing);
    assert_eq!(rig.game_loop.game().indices(), [0, 0, 0]);
    assert_ne!(*rig.game_loop.game().palette(), palette_before);
    assert_eq!(rig.game_loop.game().palette().len(), 8);

    // Nach dem Mischen wieder unscharf: kein Sofort-Sieg
    rig.idle(1_000);
    assert_eq!(rig.game_loop.game().state(), GameState::Playing);
}

#[test]
fn test_celebration_shows_winning_color() {
    let mut rig = Rig::new(8);
    let won = rig.press_times(0, 8);
    assert!(won.is_some());

    // Mitte des ersten Pulses: alle LEDs zeigen die Sieg-Farbe
    let config = GameConfig::DEFAULT;
    while rig.game_loop.animator().elapsed_ms(rig.now) < config.celebration.flash_period_ms / 2 {
        rig.tick(RELEASED);
    }
    let first = rig.game_loop.leds().led(0).rendered();
    assert_ne!(first, RGB8::default());
    assert_eq!(rig.game_loop.leds().led(1).rendered(), first);
    assert_eq!(rig.game_loop.leds().led(2).rendered(), first);
}

#[test]
fn test_idle_aurora_after_inactivity() {
    let mut rig = Rig::new(9);
    rig.idle(GameConfig::DEFAULT.shimmer.idle_after_ms + TICK_MS);
    assert_eq!(rig.game_loop.animator().effect(), Effect::IdleShimmer);

    rig.press(2);
    assert_eq!(rig.game_loop.animator().effect(), Effect::None);
    assert_eq!(rig.game_loop.game().indices(), [0, 0, 1]);
}

// ============================================================================
// Tests: Palette
// ============================================================================

#[test]
fn test_reshuffle_chain_always_changes() {
    let mut palette = Palette::<8>::generate(21);
    let mut rng = XorShift32::new(4);
    for _ in 0..100 {
        let next = palette.reshuffle(&mut rng);
        assert_ne!(next, palette);
        palette = next;
    }
}
