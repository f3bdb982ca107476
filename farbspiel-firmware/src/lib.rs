// Library-Root: Hardware-Anbindung des Farb-Spiels
// Keine Standard-Bibliothek (Embedded System)
//
// Die komplette Spiel-Logik liegt in farbspiel-core und wird dort auf dem
// Host getestet. Hier bleibt nur, was den ESP32 braucht: Pins, LEDC, Tasks.
#![no_std]

pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von farbspiel-core
pub use farbspiel_core::{GameLoop, LedError, RgbLedWriter};
