// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Zielhardware: klassischer ESP32 (LEDC mit 8 LowSpeed + 8 HighSpeed Kanälen).
// Drei gemeinsame-Kathode RGB LEDs, jede Farbe an einem eigenen PWM-Kanal,
// dazu drei Taster gegen GND (interner Pull-Up, gedrückt = LOW).

use farbspiel_core::{CelebrationTiming, GameConfig, Polarity, ShimmerTiming, StartupTiming};
use rgb::RGB8;

// ============================================================================
// Pin-Belegung
// ============================================================================
//
//            Rot      Grün     Blau     Taster
//   LED 0    GPIO25   GPIO26   GPIO27   GPIO32
//   LED 1    GPIO16   GPIO17   GPIO18   GPIO33
//   LED 2    GPIO19   GPIO21   GPIO22   GPIO13
//
// GPIO34-39 haben keinen internen Pull-Up und sind für Taster ungeeignet.

/// Pins einer LED mit ihrem Taster
pub struct RgbButtonPins {
    pub red: esp_hal::gpio::AnyPin<'static>,
    pub green: esp_hal::gpio::AnyPin<'static>,
    pub blue: esp_hal::gpio::AnyPin<'static>,
    pub button: esp_hal::gpio::AnyPin<'static>,
}

/// `RGB_BUTTON_PINS`: holt die Pins aus den Peripherals, in LED-Reihenfolge
///
/// Einzige Stelle der Pin-Zuordnung, muss zur Tabelle oben passen.
///
/// ```ignore
/// let [led0, led1, led2] = rgb_button_pins!(peripherals);
/// ```
#[macro_export]
macro_rules! rgb_button_pins {
    ($p:ident) => {
        [
            $crate::rgb_button_pins!(@led $p, GPIO25, GPIO26, GPIO27, GPIO32),
            $crate::rgb_button_pins!(@led $p, GPIO16, GPIO17, GPIO18, GPIO33),
            $crate::rgb_button_pins!(@led $p, GPIO19, GPIO21, GPIO22, GPIO13),
        ]
    };
    (@led $p:ident, $red:ident, $green:ident, $blue:ident, $button:ident) => {
        $crate::config::RgbButtonPins {
            red: $p.$red.into(),
            green: $p.$green.into(),
            blue: $p.$blue.into(),
            button: $p.$button.into(),
        }
    };
}

// ============================================================================
// PWM / LED Konfiguration
// ============================================================================

/// PWM-Frequenz der LEDC Timer
/// 1 kHz ist flimmerfrei fürs Auge und bei 8 Bit Auflösung problemlos erreichbar
pub const PWM_FREQUENCY_HZ: u32 = 1_000;

/// Globale Helligkeit (0-255)
/// Gedimmt: Kinderaugen sitzen nah an den LEDs
pub const LED_BRIGHTNESS: u8 = 160;

/// Gamma-Exponent für die PWM-Ausgabe
pub const GAMMA: f32 = 2.2;

/// Die LEDs haben eine gemeinsame Anode (true) oder Kathode (false)
/// Bei gemeinsamer Anode wird der Duty-Cycle invertiert
pub const LED_COMMON_ANODE: bool = false;

// ============================================================================
// Spiel Konfiguration
// ============================================================================

/// Anzahl der Farben in der Palette
pub const PALETTE_LEN: usize = 8;

/// Entprell-Zeit der Taster in Millisekunden
pub const DEBOUNCE_MS: u32 = 20;

/// Takt der Hauptschleife in Millisekunden
pub const LOOP_TICK_MS: u64 = 5;

/// Ohne Tastendruck startet nach dieser Zeit die Idle-Aurora (1 Minute)
pub const IDLE_SHIMMER_AFTER_MS: u32 = 60_000;

/// Warmweiß der Startup-Show (etwa 60% Helligkeit, Blau reduziert)
const STARTUP_WHITE: RGB8 = RGB8 {
    r: 156,
    g: 124,
    b: 80,
};

/// Komplette Spiel-Konfiguration für die Firmware
pub const GAME_CONFIG: GameConfig = GameConfig {
    debounce_ms: DEBOUNCE_MS,
    brightness: LED_BRIGHTNESS,
    gamma: GAMMA,
    polarity: Polarity::ActiveLow,
    startup: StartupTiming {
        gap_ms: 120,
        fade_ms: 400,
        white: STARTUP_WHITE,
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
        idle_after_ms: IDLE_SHIMMER_AFTER_MS,
        cycle_ms: 8_000,
        brightness: 64,
    },
};
