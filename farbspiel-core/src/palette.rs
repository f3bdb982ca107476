//! Palette Generator
//!
//! Erzeugt die feste, geordnete Farbfolge ("Regenbogen"), durch die jeder
//! Button schaltet, und mischt sie nach jedem Sieg neu.

use crate::color::hsv_to_rgb;
use crate::rng::XorShift32;
use crate::types::Color;

/// Standard-Länge der Palette
pub const DEFAULT_PALETTE_LEN: usize = 8;

/// Geordnete Farbfolge fester Länge `N` (N >= 2)
///
/// Wird nur vom Spiel nach einem Sieg ersetzt, nie während des Spiels verändert.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette<const N: usize> {
    colors: [Color; N],
}

impl<const N: usize> Palette<N> {
    const LEN_CHECK: () = assert!(N >= 2, "Palette braucht mindestens zwei Farben");

    /// Gleichmäßig verteilte Farbtöne rund um den Farbkreis
    ///
    /// `hue_i = offset + i * 360 / N`, der Offset kommt aus dem Seed.
    /// Gleicher Seed → gleiche Palette.
    pub fn generate(seed: u32) -> Self {
        let () = Self::LEN_CHECK;

        let offset = seed % 360;
        let colors = core::array::from_fn(|i| {
            let hue = (offset + (i as u32 * 360) / N as u32) % 360;
            Color::from_rgb(hsv_to_rgb(hue as u16, u8::MAX, u8::MAX))
        });
        Self { colors }
    }

    /// Palette aus festen Farben (z.B. für Tests oder eigene Farbwahl)
    pub const fn from_colors(colors: [Color; N]) -> Self {
        let () = Self::LEN_CHECK;
        Self { colors }
    }

    /// Neue Reihenfolge derselben Farben (Fisher-Yates)
    ///
    /// Ergibt die Mischung zufällig die alte Reihenfolge, wird stattdessen
    /// um eine Position rotiert, damit sich die Sieg-Farbe sicher ändert.
    #[must_use]
    pub fn reshuffle(&self, rng: &mut XorShift32) -> Self {
        let mut colors = self.colors;
        for i in (1..N).rev() {
            let j = rng.below(i as u32 + 1) as usize;
            colors.swap(i, j);
        }
        if colors == self.colors {
            colors.rotate_left(1);
        }
        Self { colors }
    }

    /// Farbe an Position `index` (Aufrufer garantiert `index < N`)
    pub fn get(&self, index: usize) -> Color {
        self.colors[index]
    }

    #[allow(clippy::len_without_is_empty)]
    pub const fn len(&self) -> usize {
        N
    }

    pub fn colors(&self) -> &[Color; N] {
        &self.colors
    }
}
