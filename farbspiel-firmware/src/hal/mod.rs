// Hardware Abstraction Layer (HAL) Module
//
// Kapselt die LEDC PWM-Hardware hinter dem `RgbLedWriter` Trait aus
// farbspiel-core. Der Mock für Host-Tests liegt in farbspiel-tests.

pub mod led_writer;

pub use led_writer::{LedcRgbWriter, PwmChannel, RgbPins, init_ledc_writers};
