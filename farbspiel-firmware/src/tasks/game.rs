// Game Task - Hauptschleife des Farb-Spiels
use defmt::{debug, error, info};
use embassy_time::{Duration, Instant, Ticker};
use esp_hal::gpio::{Input, InputConfig, Pull};
use farbspiel_core::{BUTTON_COUNT, Effect, GameLoop, LED_COUNT, RgbLedWriter};

use crate::config::{GAME_CONFIG, LOOP_TICK_MS, PALETTE_LEN};
use crate::hal::LedcRgbWriter;

/// Millisekunden seit Boot, läuft nach ~49 Tagen über (Core rechnet mit wrapping_sub)
fn now_ms() -> u32 {
    Instant::now().as_millis() as u32
}

/// Game Logic - Testbare Schleife ohne Hardware-Abhängigkeit
///
/// Liest pro Durchlauf die Button-Pegel über `read_levels`, füttert
/// `GameLoop::tick()` und loggt, was der Tick gemeldet hat.
///
/// # Parameter
/// - `game_loop`: Spielzustand mit LED Writern (Hardware oder Mock)
/// - `read_levels`: liefert die Roh-Pegel der Taster (true = HIGH)
pub async fn game_logic<W: RgbLedWriter>(
    mut game_loop: GameLoop<W, PALETTE_LEN>,
    mut read_levels: impl FnMut() -> [bool; BUTTON_COUNT],
) -> ! {
    game_loop.start(now_ms());
    info!("Startup-Show läuft");

    // Ticker statt Timer::after: Takt bleibt stabil, auch wenn ein Tick länger dauert
    let mut ticker = Ticker::every(Duration::from_millis(LOOP_TICK_MS));

    loop {
        let report = game_loop.tick(now_ms(), read_levels());

        if report.pressed && report.accepted == 0 {
            debug!("Tastendruck ignoriert ({})", game_loop.game().state());
        }
        if report.accepted > 0 {
            info!("Farben: {}", game_loop.game().indices());
        }
        if let Some(color) = report.won {
            info!("Gewonnen! Alle LEDs zeigen {}", color);
        }
        match report.finished {
            Some(Effect::Startup) => info!("Startup fertig, Spiel beginnt"),
            Some(Effect::Celebration) => {
                info!("Feier vorbei, Palette neu gemischt");
                debug!("Palette: {}", game_loop.game().palette().colors());
            }
            _ => {}
        }
        if report.shimmer_started {
            info!(
                "{} ms nichts gedrückt, Aurora startet",
                game_loop.config().shimmer.idle_after_ms
            );
        }
        if report.shimmer_stopped {
            info!("Aurora beendet");
        }
        if report.write_errors > 0 {
            error!("{} LED-Schreibvorgänge fehlgeschlagen", report.write_errors);
        }

        ticker.next().await;
    }
}

/// Game Task - Embassy Task für die Hauptschleife
///
/// Konfiguriert die Taster als Eingänge mit Pull-Up und ruft dann die
/// testbare `game_logic()` auf.
///
/// # Parameter
/// - `buttons`: Taster-Pins in LED-Reihenfolge
/// - `leds`: fertig konfigurierte LEDC Writer
/// - `seed`: Zufallswert aus dem Hardware-RNG für die erste Palette
#[embassy_executor::task]
pub async fn game_task(
    buttons: [esp_hal::gpio::AnyPin<'static>; BUTTON_COUNT],
    leds: [LedcRgbWriter<'static>; LED_COUNT],
    seed: u32,
) {
    let inputs = buttons.map(|pin| Input::new(pin, InputConfig::default().with_pull(Pull::Up)));
    let game_loop = GameLoop::new(leds, seed, GAME_CONFIG);
    info!("Farbspiel bereit (Seed {=u32:#x})", seed);

    game_logic(game_loop, || core::array::from_fn(|b| inputs[b].is_high())).await
}
