//! Keyboard-Shortcuts für die Karte.
//!
//! Escape/Enter beantworten eine offene Löschbestätigung, die Ziffern
//! `1..n` wählen den n-ten Paletten-Eintrag.

use crate::app::MapIntent;

const DIGIT_KEYS: [egui::Key; 9] = [
    egui::Key::Num1,
    egui::Key::Num2,
    egui::Key::Num3,
    egui::Key::Num4,
    egui::Key::Num5,
    egui::Key::Num6,
    egui::Key::Num7,
    egui::Key::Num8,
    egui::Key::Num9,
];

/// Verarbeitet Keyboard-Shortcuts und gibt MapIntents zurück.
pub(super) fn collect_keyboard_intents(
    ui: &egui::Ui,
    confirm_pending: bool,
    palette_len: usize,
) -> Vec<MapIntent> {
    let mut events = Vec::new();

    let (key_escape_pressed, key_enter_pressed) = ui.input(|i| {
        (
            i.key_pressed(egui::Key::Escape),
            i.key_pressed(egui::Key::Enter),
        )
    });

    if confirm_pending {
        if key_escape_pressed {
            events.push(MapIntent::DeletionCancelled);
        } else if key_enter_pressed {
            events.push(MapIntent::DeletionConfirmed);
        }
        return events;
    }

    let pressed_digit = ui.input(|i| {
        DIGIT_KEYS
            .iter()
            .take(palette_len)
            .position(|key| i.key_pressed(*key))
    });
    if let Some(index) = pressed_digit {
        events.push(MapIntent::PaletteIndexSelected { index });
    }

    events
}
