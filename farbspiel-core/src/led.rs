//! LED Output Driver
//!
//! Wandelt logische Farben (RGB + Helligkeit) in Duty-Cycles um und
//! schreibt sie über den `RgbLedWriter` Trait auf die Hardware.

use rgb::RGB8;

use crate::color::scale8;
use crate::traits::{LedError, RgbLedWriter};
use crate::types::{Color, LED_COUNT};

/// Gamma-Lookup-Table: `out = round(255 * (in / 255) ^ gamma)`
///
/// Wird einmal beim Start berechnet (libm `powf`, exakt genug für 8 Bit).
#[derive(Clone)]
pub struct GammaTable {
    lut: [u8; 256],
}

impl GammaTable {
    pub fn new(gamma: f32) -> Self {
        let lut = core::array::from_fn(|input| {
            let normalized = input as f32 / 255.0;
            libm::roundf(libm::powf(normalized, gamma) * 255.0) as u8
        });
        Self { lut }
    }

    /// Keine Korrektur (Gamma 1.0)
    pub fn linear() -> Self {
        Self {
            lut: core::array::from_fn(|i| i as u8),
        }
    }

    #[inline]
    pub fn correct(&self, value: u8) -> u8 {
        self.lut[usize::from(value)]
    }

    pub fn apply(&self, rgb: RGB8) -> RGB8 {
        RGB8 {
            r: self.correct(rgb.r),
            g: self.correct(rgb.g),
            b: self.correct(rgb.b),
        }
    }
}

/// Eine RGB LED mit ihrem Writer und dem zuletzt geschriebenen Duty-Cycle
pub struct Led<W> {
    id: usize,
    writer: W,
    rendered: RGB8,
}

impl<W: RgbLedWriter> Led<W> {
    pub fn new(id: usize, writer: W) -> Self {
        Self {
            id,
            writer,
            rendered: RGB8::default(),
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    /// Zuletzt geschriebener Wert (nach Gamma)
    pub fn rendered(&self) -> RGB8 {
        self.rendered
    }

    pub fn writer(&self) -> &W {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.writer
    }
}

/// Besitzt alle drei LEDs und die Gamma-Tabelle
pub struct LedDriver<W> {
    leds: [Led<W>; LED_COUNT],
    gamma: GammaTable,
}

impl<W: RgbLedWriter> LedDriver<W> {
    pub fn new(writers: [W; LED_COUNT], gamma: f32) -> Self {
        Self::with_table(writers, GammaTable::new(gamma))
    }

    pub fn with_table(writers: [W; LED_COUNT], gamma: GammaTable) -> Self {
        let mut id = 0;
        let leds = writers.map(|writer| {
            let led = Led::new(id, writer);
            id += 1;
            led
        });
        Self { leds, gamma }
    }

    /// Rendert `color` auf LED `led`
    ///
    /// Kanal = gamma(scale(scale(rgb, color.brightness), brightness_scale))
    pub fn render(&mut self, led: usize, color: Color, brightness_scale: u8) -> Result<(), LedError> {
        let linear = color.scaled();
        let duty = self.gamma.apply(RGB8 {
            r: scale8(linear.r, brightness_scale),
            g: scale8(linear.g, brightness_scale),
            b: scale8(linear.b, brightness_scale),
        });

        let target = &mut self.leds[led];
        target.writer.write(duty)?;
        target.rendered = duty;
        Ok(())
    }

    pub fn led(&self, led: usize) -> &Led<W> {
        &self.leds[led]
    }

    pub fn led_mut(&mut self, led: usize) -> &mut Led<W> {
        &mut self.leds[led]
    }

    pub fn gamma(&self) -> &GammaTable {
        &self.gamma
    }
}
