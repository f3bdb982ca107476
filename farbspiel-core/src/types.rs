//! Core Types für das Farb-Spiel
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB8;

use crate::color::scale8;

/// Anzahl der Buttons (ein Button pro LED)
pub const BUTTON_COUNT: usize = 3;

/// Anzahl der RGB LEDs
pub const LED_COUNT: usize = BUTTON_COUNT;

/// Logische Farbe: RGB-Tripel plus gewünschte Helligkeit
///
/// Werttyp, Vergleich ist exakte Gleichheit aller vier Komponenten.
/// Die Sieg-Erkennung vergleicht genau diese Werte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub rgb: RGB8,
    pub brightness: u8,
}

impl Color {
    /// LED aus
    pub const OFF: Self = Self {
        rgb: RGB8 { r: 0, g: 0, b: 0 },
        brightness: 0,
    };

    pub const fn new(rgb: RGB8, brightness: u8) -> Self {
        Self { rgb, brightness }
    }

    /// Farbe mit voller Helligkeit
    pub const fn from_rgb(rgb: RGB8) -> Self {
        Self::new(rgb, u8::MAX)
    }

    #[must_use]
    pub const fn with_brightness(self, brightness: u8) -> Self {
        Self::new(self.rgb, brightness)
    }

    /// Linearer Kanalwert nach Anwendung der Helligkeit (noch ohne Gamma)
    pub fn scaled(&self) -> RGB8 {
        RGB8 {
            r: scale8(self.rgb.r, self.brightness),
            g: scale8(self.rgb.g, self.brightness),
            b: scale8(self.rgb.b, self.brightness),
        }
    }
}

/// Zustand des Spiels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GameState {
    /// Startup-Show läuft, Eingaben werden ignoriert
    Idle,
    /// Normales Spiel
    Playing,
    /// Sieg-Animation läuft, Eingaben werden ignoriert
    Celebrating,
}

/// Entprellter Tastendruck
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PressEvent {
    /// Button-Index (0..BUTTON_COUNT)
    pub button: usize,
    /// Zeitpunkt der Bestätigung in ms
    pub at_ms: u32,
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for Color {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "Color {{ rgb: ({}, {}, {}), brightness: {} }}",
            self.rgb.r,
            self.rgb.g,
            self.rgb.b,
            self.brightness
        )
    }
}
