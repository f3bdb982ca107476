//! Button Input Driver
//!
//! Entprellt den rohen Pegel eines Buttons und meldet genau einen
//! `PressEvent` pro physischem Druck.
//!
//! Ablauf pro Loop-Durchlauf:
//!
//! | Rohpegel  | Zustand vorher | Zustand danach            | Event |
//! |-----------|----------------|---------------------------|-------|
//! | losgelassen | beliebig     | Released                  | -     |
//! | gedrückt  | Released       | Settling (Timer startet)  | -     |
//! | gedrückt  | Settling       | Held, wenn >= debounce_ms | ja    |
//! | gedrückt  | Held           | Held                      | -     |
//!
//! Ein hängender Button bleibt in `Held` und meldet nichts mehr, bis er
//! losgelassen wird.

use crate::types::PressEvent;

/// Elektrische Konvention der Buttons (zur Compile-Zeit fest)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    /// Pull-Up, Button zieht nach GND (gedrückt = LOW)
    ActiveLow,
    /// Pull-Down, Button zieht nach VCC (gedrückt = HIGH)
    ActiveHigh,
}

impl Polarity {
    /// Wandelt den Rohpegel in "gedrückt" um
    pub const fn is_pressed(self, level_high: bool) -> bool {
        match self {
            Polarity::ActiveLow => !level_high,
            Polarity::ActiveHigh => level_high,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DebounceState {
    Released,
    Settling { since_ms: u32 },
    Held,
}

/// Entprell-Zustandsmaschine für einen Button
#[derive(Debug, Clone)]
pub struct Debouncer {
    state: DebounceState,
    hold_ms: u32,
}

impl Debouncer {
    pub const fn new(hold_ms: u32) -> Self {
        Self {
            state: DebounceState::Released,
            hold_ms,
        }
    }

    /// Verarbeitet eine Abtastung. `true` = neuer bestätigter Druck.
    pub fn update(&mut self, pressed: bool, now_ms: u32) -> bool {
        if !pressed {
            self.state = DebounceState::Released;
            return false;
        }

        let since_ms = match self.state {
            DebounceState::Held => return false,
            DebounceState::Settling { since_ms } => since_ms,
            DebounceState::Released => {
                self.state = DebounceState::Settling { since_ms: now_ms };
                now_ms
            }
        };

        if now_ms.wrapping_sub(since_ms) >= self.hold_ms {
            self.state = DebounceState::Held;
            true
        } else {
            false
        }
    }

    /// Button gilt als stabil gedrückt
    pub fn is_held(&self) -> bool {
        self.state == DebounceState::Held
    }
}

/// Ein Button des Spiels: Identität, Palettenposition und Entpreller
///
/// Gehört exklusiv dem `Game`, nur das Spiel verändert den Index.
#[derive(Debug, Clone)]
pub struct Button {
    id: usize,
    index: usize,
    polarity: Polarity,
    debouncer: Debouncer,
}

impl Button {
    pub const fn new(id: usize, polarity: Polarity, debounce_ms: u32) -> Self {
        Self {
            id,
            index: 0,
            polarity,
            debouncer: Debouncer::new(debounce_ms),
        }
    }

    /// Aktuelle Position in der Palette
    pub fn index(&self) -> usize {
        self.index
    }

    /// Tastet den Rohpegel ab und liefert ggf. einen entprellten Druck
    pub fn poll(&mut self, level_high: bool, now_ms: u32) -> Option<PressEvent> {
        let pressed = self.polarity.is_pressed(level_high);
        self.debouncer
            .update(pressed, now_ms)
            .then_some(PressEvent {
                button: self.id,
                at_ms: now_ms,
            })
    }

    /// Einen Schritt weiter in der Palette (mit Wrap-Around)
    pub(crate) fn advance(&mut self, palette_len: usize) -> usize {
        self.index = (self.index + 1) % palette_len;
        self.index
    }

    pub(crate) fn reset(&mut self) {
        self.index = 0;
    }
}
