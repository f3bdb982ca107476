// Task-Modul: Enthält alle Embassy Tasks
//
// Es gibt nur eine Spiel-Schleife. Eingaben, Spiel-Logik und LED-Ausgabe
// laufen nacheinander im selben Task, es braucht also keine Channels.

pub mod game;

pub use game::{game_logic, game_task};
