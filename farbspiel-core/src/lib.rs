//! Farbspiel Core - Platform-agnostic Game Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert das Farb-Spiel (Buttons → Palette → Sieg → Feier),
//! den Animations-Scheduler und die Traits für die LED-Ausgabe.
//!
//! Zeit wird überall als Parameter (`now_ms`) übergeben, damit die
//! komplette Logik mit einer Fake-Uhr auf dem Host getestet werden kann.

#![no_std]

pub mod animation;
pub mod button;
pub mod color;
pub mod config;
pub mod engine;
pub mod game;
pub mod led;
pub mod palette;
pub mod rng;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use animation::{AnimationFrame, Animator, Effect};
pub use button::{Button, Debouncer, Polarity};
pub use color::{hsv_to_rgb, scale8, sine_wheel};
pub use config::{CelebrationTiming, GameConfig, ShimmerTiming, StartupTiming};
pub use engine::{GameLoop, TickReport};
pub use game::{Game, GameEvent, PollOutcome};
pub use led::{GammaTable, Led, LedDriver};
pub use palette::{DEFAULT_PALETTE_LEN, Palette};
pub use rng::XorShift32;
pub use traits::{LedError, RgbLedWriter};
pub use types::{BUTTON_COUNT, Color, GameState, LED_COUNT, PressEvent};
