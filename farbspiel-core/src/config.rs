//! Spiel-Konfiguration
//!
//! Alle Zeiten in Millisekunden. Die Firmware baut ihre `GameConfig`
//! aus den Konstanten in `config.rs`, Tests nutzen meist `GameConfig::DEFAULT`.

use rgb::RGB8;

use crate::button::Polarity;

/// Startup-Show: LEDs nacheinander einblenden, dann Regenbogen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StartupTiming {
    /// Pause am Anfang und nach jeder eingeblendeten LED
    pub gap_ms: u32,
    /// Dauer des Einblendens einer LED
    pub fade_ms: u32,
    /// Zielfarbe des Einblendens
    pub white: RGB8,
    pub rainbow_loops: u32,
    pub rainbow_cycle_ms: u32,
}

impl StartupTiming {
    pub const fn duration_ms(&self) -> u32 {
        self.gap_ms
            + crate::LED_COUNT as u32 * (self.fade_ms + self.gap_ms)
            + self.rainbow_loops * self.rainbow_cycle_ms
    }
}

/// Sieg-Animation: Sieg-Farbe pulsieren lassen, dann schnelle Regenbögen
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelebrationTiming {
    pub flash_count: u32,
    /// Dauer eines Pulses (an + aus)
    pub flash_period_ms: u32,
    pub rainbow_loops: u32,
    pub rainbow_cycle_ms: u32,
}

impl CelebrationTiming {
    pub const fn flash_phase_ms(&self) -> u32 {
        self.flash_count * self.flash_period_ms
    }

    pub const fn duration_ms(&self) -> u32 {
        self.flash_phase_ms() + self.rainbow_loops * self.rainbow_cycle_ms
    }
}

/// Idle-Aurora: langsamer, gedimmter Regenbogen wenn niemand drückt
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShimmerTiming {
    /// Ohne Tastendruck so lange warten, bis die Aurora startet
    pub idle_after_ms: u32,
    pub cycle_ms: u32,
    pub brightness: u8,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    /// Mindest-Haltezeit bis ein Druck zählt
    pub debounce_ms: u32,
    /// Globale Helligkeit (0-255), auf alle LEDs angewendet
    pub brightness: u8,
    /// Gamma-Exponent für die LED-Ausgabe
    pub gamma: f32,
    pub polarity: Polarity,
    pub startup: StartupTiming,
    pub celebration: CelebrationTiming,
    pub shimmer: ShimmerTiming,
}

impl GameConfig {
    pub const DEFAULT: Self = Self {
        debounce_ms: 20,
        brightness: 160,
        gamma: 2.2,
        polarity: Polarity::ActiveLow,
        startup: StartupTiming {
            gap_ms: 120,
            fade_ms: 400,
            white: RGB8 {
                r: 156,
                g: 124,
                b: 80,
            },
            rainbow_loops: 3,
            rainbow_cycle_ms: 400,
        },
        celebration: CelebrationTiming {
            flash_count: 3,
            flash_period_ms: 240,
            rainbow_loops: 2,
            rainbow_cycle_ms: 400,
        },
        shimmer: ShimmerTiming {
            idle_after_ms: 60_000,
            cycle_ms: 8_000,
            brightness: 64,
        },
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_durations() {
        let config = GameConfig::DEFAULT;
        assert_eq!(config.startup.duration_ms(), 120 + 3 * 520 + 1200);
        assert_eq!(config.celebration.flash_phase_ms(), 720);
        assert_eq!(config.celebration.duration_ms(), 1520);
    }

    #[test]
    fn test_startup_white_is_warm() {
        let white = GameConfig::DEFAULT.startup.white;
        assert!(white.r > white.g && white.g > white.b);
    }
}
