//! Animation Scheduler
//!
//! Kooperativer Timer, kein echter Scheduler: merkt sich den Startzeitpunkt
//! und den aktiven Effekt. Jeder Loop-Durchlauf bildet die verstrichene Zeit
//! auf die Farben der drei LEDs ab, entweder als Durchreichen der Spielfarben
//! oder als Ersatz dafür.
//!
//! - **Startup:** alles aus → LED 0, 1, 2 nacheinander weiß einblenden → Regenbögen
//! - **Celebration:** Sieg-Farbe pulsiert (sin²) → schnelle Regenbögen
//! - **IdleShimmer:** gedimmte, langsame Aurora bis zum nächsten Tastendruck
//!
//! Startup und Celebration enden nach ihrer Dauer und werden genau einmal
//! als `finished` gemeldet. IdleShimmer endet nur durch `stop()`.

use core::f32::consts::PI;

use micromath::F32Ext;

use crate::color::{THIRD_TURN, sine_wheel};
use crate::config::{CelebrationTiming, GameConfig, ShimmerTiming, StartupTiming};
use crate::types::{Color, LED_COUNT};

/// Aktiver Effekt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Effect {
    None,
    Startup,
    Celebration,
    IdleShimmer,
}

/// Ergebnis eines Animations-Ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationFrame {
    /// Farben für LED 0..3
    pub colors: [Color; LED_COUNT],
    /// Gesetzt im Tick, in dem ein Effekt abgelaufen ist
    pub finished: Option<Effect>,
}

pub struct Animator {
    effect: Effect,
    started_at_ms: u32,
    /// Sieg-Farbe für die Celebration-Pulse
    highlight: Color,
    startup: StartupTiming,
    celebration: CelebrationTiming,
    shimmer: ShimmerTiming,
}

impl Animator {
    pub fn new(config: &GameConfig) -> Self {
        Self {
            effect: Effect::None,
            started_at_ms: 0,
            highlight: Color::OFF,
            startup: config.startup,
            celebration: config.celebration,
            shimmer: config.shimmer,
        }
    }

    /// Startet einen Effekt neu (ersetzt einen laufenden)
    pub fn start(&mut self, effect: Effect, now_ms: u32) {
        self.effect = effect;
        self.started_at_ms = now_ms;
    }

    pub fn start_celebration(&mut self, color: Color, now_ms: u32) {
        self.highlight = color;
        self.start(Effect::Celebration, now_ms);
    }

    pub fn stop(&mut self) {
        self.effect = Effect::None;
    }

    pub fn effect(&self) -> Effect {
        self.effect
    }

    pub fn is_active(&self) -> bool {
        self.effect != Effect::None
    }

    pub fn elapsed_ms(&self, now_ms: u32) -> u32 {
        now_ms.wrapping_sub(self.started_at_ms)
    }

    /// Gesamtdauer eines Effekts, `None` = läuft bis `stop()`
    pub fn duration_ms(&self, effect: Effect) -> Option<u32> {
        match effect {
            Effect::Startup => Some(self.startup.duration_ms()),
            Effect::Celebration => Some(self.celebration.duration_ms()),
            Effect::None | Effect::IdleShimmer => None,
        }
    }

    /// Berechnet die Farben für diesen Tick
    ///
    /// `base` sind die aufgelösten Spielfarben, die ohne aktiven Effekt
    /// unverändert durchgereicht werden.
    pub fn tick(&mut self, now_ms: u32, base: &[Color; LED_COUNT]) -> AnimationFrame {
        let effect = self.effect;
        let elapsed = self.elapsed_ms(now_ms);

        if let Some(duration) = self.duration_ms(effect) {
            if elapsed >= duration {
                self.effect = Effect::None;
                return AnimationFrame {
                    colors: *base,
                    finished: Some(effect),
                };
            }
        }

        let colors = match effect {
            Effect::None => *base,
            Effect::Startup => startup_frame(&self.startup, elapsed),
            Effect::Celebration => celebration_frame(&self.celebration, self.highlight, elapsed),
            Effect::IdleShimmer => shimmer_frame(&self.shimmer, elapsed),
        };

        AnimationFrame {
            colors,
            finished: None,
        }
    }
}

/// Regenbogen-Sweep über alle drei LEDs, 120° versetzt
pub fn rainbow_frame(elapsed_ms: u32, cycle_ms: u32, brightness: u8) -> [Color; LED_COUNT] {
    let cycle_ms = cycle_ms.max(1);
    let theta = (elapsed_ms % cycle_ms) as f32 / cycle_ms as f32 * 2.0 * PI;
    core::array::from_fn(|led| {
        let phi = led as f32 * THIRD_TURN + theta;
        Color::new(sine_wheel(phi), brightness)
    })
}

pub fn startup_frame(timing: &StartupTiming, elapsed_ms: u32) -> [Color; LED_COUNT] {
    if elapsed_ms < timing.gap_ms {
        return [Color::OFF; LED_COUNT];
    }

    let t = elapsed_ms - timing.gap_ms;
    let per_led = timing.fade_ms + timing.gap_ms;
    let fade_phase = LED_COUNT as u32 * per_led;

    if t >= fade_phase {
        return rainbow_frame(t - fade_phase, timing.rainbow_cycle_ms, u8::MAX);
    }

    let active = (t / per_led.max(1)) as usize;
    let within = t % per_led.max(1);
    let white = Color::from_rgb(timing.white);

    core::array::from_fn(|led| {
        if led < active {
            white
        } else if led == active {
            if within < timing.fade_ms {
                white.with_brightness((within * 255 / timing.fade_ms) as u8)
            } else {
                white
            }
        } else {
            Color::OFF
        }
    })
}

pub fn celebration_frame(timing: &CelebrationTiming, color: Color, elapsed_ms: u32) -> [Color; LED_COUNT] {
    let flash_phase = timing.flash_phase_ms();
    if elapsed_ms >= flash_phase {
        return rainbow_frame(elapsed_ms - flash_phase, timing.rainbow_cycle_ms, u8::MAX);
    }

    let period = timing.flash_period_ms.max(1);
    let x = (elapsed_ms % period) as f32 / period as f32;
    let pulse = (x * PI).sin();
    let level = (pulse * pulse * f32::from(color.brightness)).round() as u8;
    [color.with_brightness(level); LED_COUNT]
}

pub fn shimmer_frame(timing: &ShimmerTiming, elapsed_ms: u32) -> [Color; LED_COUNT] {
    rainbow_frame(elapsed_ms, timing.cycle_ms, timing.brightness)
}
