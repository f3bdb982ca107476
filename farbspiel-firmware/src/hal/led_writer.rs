// LEDC RGB Writer - drei PWM-Kanäle pro LED
//
// Der klassische ESP32 hat 8 LowSpeed und 8 HighSpeed LEDC-Kanäle.
// Drei RGB LEDs brauchen 9 Kanäle, daher laufen LED 0 und 1 auf LowSpeed
// (Kanal 0-5) und LED 2 auf HighSpeed (Kanal 0-2). `PwmChannel` versteckt
// den Unterschied, damit alle drei Writer denselben Typ haben.

use esp_hal::gpio::{AnyPin, DriveMode};
use esp_hal::ledc::channel::{self, ChannelHW, ChannelIFace};
use esp_hal::ledc::timer::{self, TimerIFace};
use esp_hal::ledc::{HighSpeed, LSGlobalClkSource, Ledc, LowSpeed};
use esp_hal::time::Rate;
use farbspiel_core::{LED_COUNT, LedError, RgbLedWriter};
use rgb::RGB8;
use static_cell::StaticCell;

use crate::config::{LED_COMMON_ANODE, PWM_FREQUENCY_HZ};

/// Duty-Wert für 100% bei 8 Bit Auflösung (2^8, nicht 255)
const DUTY_FULL: u32 = 1 << 8;

/// Ein LEDC-Kanal, egal ob LowSpeed oder HighSpeed
pub enum PwmChannel<'a> {
    Low(channel::Channel<'a, LowSpeed>),
    High(channel::Channel<'a, HighSpeed>),
}

impl PwmChannel<'_> {
    /// Setzt den Duty-Cycle direkt im Register (0-255 → 0-256)
    fn set_duty(&self, value: u8) {
        let value = if LED_COMMON_ANODE { u8::MAX - value } else { value };
        let duty = match value {
            u8::MAX => DUTY_FULL,
            v => u32::from(v),
        };
        match self {
            Self::Low(channel) => channel.set_duty_hw(duty),
            Self::High(channel) => channel.set_duty_hw(duty),
        }
    }
}

/// Real Hardware LED Writer für eine RGB LED
pub struct LedcRgbWriter<'a> {
    red: PwmChannel<'a>,
    green: PwmChannel<'a>,
    blue: PwmChannel<'a>,
}

impl<'a> LedcRgbWriter<'a> {
    pub fn new(red: PwmChannel<'a>, green: PwmChannel<'a>, blue: PwmChannel<'a>) -> Self {
        Self { red, green, blue }
    }
}

impl RgbLedWriter for LedcRgbWriter<'_> {
    /// Registerzugriff kann nicht fehlschlagen
    fn write(&mut self, duty: RGB8) -> Result<(), LedError> {
        self.red.set_duty(duty.r);
        self.green.set_duty(duty.g);
        self.blue.set_duty(duty.b);
        Ok(())
    }
}

// ============================================================================
// LEDC Initialisierung
// ============================================================================

/// Pins einer RGB LED (Reihenfolge: Rot, Grün, Blau)
pub type RgbPins = [AnyPin<'static>; 3];

// Channels referenzieren ihren Timer → Timer müssen 'static sein
static LS_TIMER: StaticCell<timer::Timer<'static, LowSpeed>> = StaticCell::new();
static HS_TIMER: StaticCell<timer::Timer<'static, HighSpeed>> = StaticCell::new();

const LOW_SPEED_CHANNELS: [channel::Number; 6] = [
    channel::Number::Channel0,
    channel::Number::Channel1,
    channel::Number::Channel2,
    channel::Number::Channel3,
    channel::Number::Channel4,
    channel::Number::Channel5,
];

const HIGH_SPEED_CHANNELS: [channel::Number; 3] = [
    channel::Number::Channel0,
    channel::Number::Channel1,
    channel::Number::Channel2,
];

/// Konfiguriert beide LEDC Timer (1 kHz, 8 Bit) und alle 9 Kanäle
///
/// Darf nur einmal aufgerufen werden (StaticCell panict sonst).
/// Alle Kanäle starten mit Duty 0, die LEDs sind also aus.
pub fn init_ledc_writers(
    ledc_peripheral: esp_hal::peripherals::LEDC<'static>,
    pins: [RgbPins; LED_COUNT],
) -> [LedcRgbWriter<'static>; LED_COUNT] {
    let mut ledc = Ledc::new(ledc_peripheral);
    ledc.set_global_slow_clock(LSGlobalClkSource::APBClk);

    let frequency = Rate::from_hz(PWM_FREQUENCY_HZ);

    let ls_timer = LS_TIMER.init(ledc.timer::<LowSpeed>(timer::Number::Timer0));
    ls_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::LSClockSource::APBClk,
            frequency,
        })
        .expect("LowSpeed LEDC Timer konnte nicht konfiguriert werden");

    let hs_timer = HS_TIMER.init(ledc.timer::<HighSpeed>(timer::Number::Timer0));
    hs_timer
        .configure(timer::config::Config {
            duty: timer::config::Duty::Duty8Bit,
            clock_source: timer::HSClockSource::APBClk,
            frequency,
        })
        .expect("HighSpeed LEDC Timer konnte nicht konfiguriert werden");

    let ls_timer: &'static timer::Timer<'static, LowSpeed> = ls_timer;
    let hs_timer: &'static timer::Timer<'static, HighSpeed> = hs_timer;

    let mut low_numbers = LOW_SPEED_CHANNELS.into_iter();
    let mut high_numbers = HIGH_SPEED_CHANNELS.into_iter();

    pins.map(|rgb| {
        let [red, green, blue] = rgb.map(|pin| match low_numbers.next() {
            Some(number) => {
                let mut channel = ledc.channel::<LowSpeed>(number, pin);
                channel
                    .configure(channel::config::Config {
                        timer: ls_timer,
                        duty_pct: 0,
                        drive_mode: DriveMode::PushPull,
                    })
                    .expect("LowSpeed LEDC Kanal konnte nicht konfiguriert werden");
                PwmChannel::Low(channel)
            }
            None => {
                let number = high_numbers
                    .next()
                    .expect("Nicht genug LEDC Kanäle für alle LEDs");
                let mut channel = ledc.channel::<HighSpeed>(number, pin);
                channel
                    .configure(channel::config::Config {
                        timer: hs_timer,
                        duty_pct: 0,
                        drive_mode: DriveMode::PushPull,
                    })
                    .expect("HighSpeed LEDC Kanal konnte nicht konfiguriert werden");
                PwmChannel::High(channel)
            }
        });
        LedcRgbWriter::new(red, green, blue)
    })
}
