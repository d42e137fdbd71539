//! Mapping von Map-Intents auf mutierende Map-Commands.

use super::{AnnotatorState, MapCommand, MapIntent, Modifiers};
use crate::core::MapView;
use crate::shared::PlaceModifier;

/// Übersetzt einen `MapIntent` in eine Sequenz ausführbarer `MapCommand`s.
///
/// Solange eine Löschbestätigung offen ist, erzeugen Klicks und
/// "Alle löschen" keine Commands (modal).
pub fn map_intent_to_commands(
    state: &AnnotatorState,
    view: &dyn MapView,
    intent: MapIntent,
) -> Vec<MapCommand> {
    let pending = state.interaction.pending_marker();

    match intent {
        MapIntent::PointerClicked {
            screen_pos,
            modifiers,
            hit,
        } => {
            if let Some(marker_id) = pending {
                log::debug!(
                    "Klick ignoriert: Löschbestätigung für Marker {} offen",
                    marker_id
                );
                return Vec::new();
            }

            // Treffer auf einen Marker hat Vorrang vor dem Setzen
            if let Some(marker_id) = hit {
                return vec![MapCommand::OpenDeleteConfirmation { marker_id }];
            }

            if !place_modifier_held(state.options.place_modifier, modifiers) {
                log::debug!(
                    "Klick ohne {} auf den Hintergrund, kein Marker gesetzt",
                    state.options.place_modifier.label()
                );
                return Vec::new();
            }

            vec![MapCommand::AddMarker {
                position: view.screen_to_world(screen_pos),
                category: state.palette.current(),
            }]
        }
        MapIntent::DeletionConfirmed => match pending {
            Some(marker_id) => vec![
                MapCommand::RemoveMarker { marker_id },
                MapCommand::CloseDeleteConfirmation,
            ],
            None => Vec::new(),
        },
        MapIntent::DeletionCancelled => match pending {
            Some(_) => vec![MapCommand::CloseDeleteConfirmation],
            None => Vec::new(),
        },
        MapIntent::ClearAllRequested => {
            if pending.is_some() {
                log::debug!("Alle löschen ignoriert: Löschbestätigung offen");
                return Vec::new();
            }
            vec![MapCommand::ClearMarkers]
        }
        MapIntent::CategorySelected { category } => vec![MapCommand::SelectCategory { category }],
        MapIntent::PaletteIndexSelected { index } => state
            .palette
            .entries()
            .get(index)
            .map(|&category| vec![MapCommand::SelectCategory { category }])
            .unwrap_or_default(),
        MapIntent::MarkersLoadRequested => vec![MapCommand::LoadMarkers],
    }
}

fn place_modifier_held(modifier: PlaceModifier, modifiers: Modifiers) -> bool {
    match modifier {
        PlaceModifier::Ctrl => modifiers.ctrl,
        PlaceModifier::Shift => modifiers.shift,
        PlaceModifier::Alt => modifiers.alt,
    }
}
