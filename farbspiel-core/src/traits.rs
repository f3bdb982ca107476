//! Hardware Abstraction Traits
//!
//! Diese Traits definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use rgb::RGB8;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedError {
    WriteFailed,
}

/// Trait für den Hardware-Zugriff auf eine RGB LED
///
/// Abstrahiert die drei PWM-Kanäle (R, G, B) einer LED.
/// Die übergebene Farbe ist bereits gamma-korrigiert, jeder Kanal
/// ist direkt der Duty-Cycle (0 = aus, 255 = voll an).
///
/// # Implementierungen
/// - **Production:** LedcRgbWriter (ESP32 LEDC Peripheral)
/// - **Testing:** MockLedWriter (in-memory Mock)
pub trait RgbLedWriter {
    /// Schreibt die Duty-Cycles für R, G und B
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn Hardware-Zugriff fehlschlägt
    fn write(&mut self, duty: RGB8) -> Result<(), LedError>;
}
