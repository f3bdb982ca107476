//! Farb-Mathematik
//!
//! Pure Functions ohne Hardware-Dependencies (testbar!)

use core::f32::consts::PI;

use micromath::F32Ext;
use rgb::RGB8;

/// 120° in Radiant - Phasenversatz zwischen R, G und B (und zwischen den LEDs)
pub const THIRD_TURN: f32 = 2.0 * PI / 3.0;

/// Skaliert einen 8-Bit Wert mit einem Faktor (0-255 = 0.0-1.0)
///
/// Rundet zum nächsten Wert, damit `scale8(x, 255) == x` gilt.
#[inline]
pub fn scale8(value: u8, scale: u8) -> u8 {
    ((u16::from(value) * u16::from(scale) + 127) / 255) as u8
}

/// HSV → RGB mit Integer-Mathematik
///
/// - `hue`: Farbton in Grad (wird modulo 360 genommen)
/// - `sat`, `val`: 0-255
///
/// # Beispiele
///
/// ```
/// # use rgb::RGB8;
/// # use farbspiel_core::hsv_to_rgb;
/// assert_eq!(hsv_to_rgb(0, 255, 255), RGB8 { r: 255, g: 0, b: 0 });
/// assert_eq!(hsv_to_rgb(120, 255, 255), RGB8 { r: 0, g: 255, b: 0 });
/// ```
pub fn hsv_to_rgb(hue: u16, sat: u8, val: u8) -> RGB8 {
    let h = u32::from(hue % 360);
    let s = u32::from(sat);
    let v = u32::from(val);

    let sector = h / 60;
    let f = h % 60;

    let p = v * (255 - s) / 255;
    let q = v * (255 - s * f / 60) / 255;
    let t = v * (255 - s * (60 - f) / 60) / 255;

    let (r, g, b) = match sector {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    RGB8 {
        r: r as u8,
        g: g as u8,
        b: b as u8,
    }
}

/// Regenbogen-Rad: jeder Kanal folgt einem Sinus, um 120° versetzt
///
/// `channel_k = (sin(phi + k * 120°) * 0.5 + 0.5) * 255`
pub fn sine_wheel(phi: f32) -> RGB8 {
    let channel = |offset: f32| ((phi + offset).sin() * 0.5 + 0.5) * 255.0;
    RGB8 {
        r: channel(0.0) as u8,
        g: channel(THIRD_TURN) as u8,
        b: channel(2.0 * THIRD_TURN) as u8,
    }
}
