//! Interaction Controller für zentrale Event-Verarbeitung.

use super::{AnnotatorState, MapCommand, MapIntent};
use crate::core::MapView;

/// Übersetzt Gesten der Karten-View in Registry-Operationen.
///
/// Zustandslos: der Zustand (Idle / Löschbestätigung offen) liegt in
/// [`AnnotatorState::interaction`]. Die View wird bei jedem Aufruf explizit
/// übergeben.
#[derive(Default)]
pub struct InteractionController;

impl InteractionController {
    /// Erstellt einen neuen Controller.
    pub fn new() -> Self {
        Self
    }

    /// Verarbeitet einen Intent über Intent->Command Mapping.
    pub fn handle_intent(
        &mut self,
        state: &mut AnnotatorState,
        view: &mut dyn MapView,
        intent: MapIntent,
    ) -> anyhow::Result<()> {
        let commands = super::intent_mapping::map_intent_to_commands(state, &*view, intent);
        for command in commands {
            self.handle_command(state, view, command)?;
        }

        Ok(())
    }

    /// Führt mutierende Commands auf dem AnnotatorState aus.
    /// Dispatcht an Feature-Handler in `handlers/`.
    pub fn handle_command(
        &mut self,
        state: &mut AnnotatorState,
        view: &mut dyn MapView,
        command: MapCommand,
    ) -> anyhow::Result<()> {
        state.command_log.record(&command);
        use super::handlers;

        match command {
            // === Marker ===
            MapCommand::LoadMarkers => handlers::markers::load(state, view),
            MapCommand::AddMarker { position, category } => {
                handlers::markers::add(state, view, position, category)
            }
            MapCommand::RemoveMarker { marker_id } => {
                handlers::markers::remove(state, view, marker_id)
            }
            MapCommand::ClearMarkers => handlers::markers::clear(state, view),

            // === Löschbestätigung ===
            MapCommand::OpenDeleteConfirmation { marker_id } => {
                handlers::dialog::open_delete_confirmation(state, marker_id)
            }
            MapCommand::CloseDeleteConfirmation => {
                handlers::dialog::close_delete_confirmation(state)
            }

            // === Palette ===
            MapCommand::SelectCategory { category } => {
                handlers::palette::select_category(state, category)
            }
        }

        Ok(())
    }
}
