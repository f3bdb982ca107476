// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32 HAL
use esp_hal::clock::CpuClock;
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

// Projekt-Module
use farbspiel_firmware::hal::init_ledc_writers;
use farbspiel_firmware::rgb_button_pins;
use farbspiel_firmware::tasks::game_task;

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet die Embassy Runtime und spawnt den Game Task.
/// Danach schläft main() - alle Arbeit läuft im Task.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // CPU auf maximale Taktfrequenz (240 MHz beim ESP32)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Xtensa braucht keinen Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_rtos::start(timg0.timer0);

    // Seed für die erste Palette aus dem Hardware RNG
    let seed = Rng::new().random();

    // Pins nach der Tabelle in config.rs
    let [led0, led1, led2] = rgb_button_pins!(peripherals);

    let leds = init_ledc_writers(
        peripherals.LEDC,
        [
            [led0.red, led0.green, led0.blue],
            [led1.red, led1.green, led1.blue],
            [led2.red, led2.green, led2.blue],
        ],
    );
    let buttons = [led0.button, led1.button, led2.button];

    spawner
        .spawn(game_task(buttons, leds, seed))
        .expect("Game Task konnte nicht gestartet werden");

    // Main-Loop: schläft (alle Arbeit läuft im Task)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
