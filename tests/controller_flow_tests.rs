use approx::assert_relative_eq;
use bitcraft_map_editor::{
    world_from_yx, AnnotatorOptions, AnnotatorState, Category, CategoryScheme, IconType,
    InteractionController, InteractionState, MapCommand, MapIntent, MapView, MapViewState,
    MemoryStore, Modifiers,
};
use glam::Vec2;

const KEY: &str = "bitcraftMarkers";

struct Fixture {
    controller: InteractionController,
    state: AnnotatorState,
    view: MapViewState,
    backend: MemoryStore,
}

impl Fixture {
    fn new(scheme: CategoryScheme) -> Self {
        Self::with_backend(scheme, MemoryStore::new())
    }

    fn with_backend(scheme: CategoryScheme, backend: MemoryStore) -> Self {
        let options = AnnotatorOptions {
            scheme,
            ..AnnotatorOptions::default()
        };
        let mut view = MapViewState::new(&options);
        view.viewport_size = Vec2::new(800.0, 600.0);
        let state = AnnotatorState::new(options, backend.clone());
        let mut fixture = Self {
            controller: InteractionController::new(),
            state,
            view,
            backend,
        };
        fixture.intent(MapIntent::MarkersLoadRequested);
        fixture
    }

    fn intent(&mut self, intent: MapIntent) {
        self.controller
            .handle_intent(&mut self.state, &mut self.view, intent)
            .expect("Intent sollte ohne Fehler durchlaufen");
    }

    fn command(&mut self, command: MapCommand) {
        self.controller
            .handle_command(&mut self.state, &mut self.view, command)
            .expect("Command sollte ohne Fehler durchlaufen");
    }

    /// Klick mit Treffer-Test der View, wie ihn die egui-Schicht ausführt.
    fn click(&mut self, screen_pos: Vec2, modifiers: Modifiers) {
        let hit = self.view.hit_test(screen_pos);
        self.intent(MapIntent::PointerClicked {
            screen_pos,
            modifiers,
            hit,
        });
    }

    fn stored_markers(&self) -> Vec<serde_json::Value> {
        let raw = self.backend.raw(KEY).expect("Datensatz sollte existieren");
        let value: serde_json::Value = serde_json::from_str(&raw).expect("gültiges JSON");
        value["markers"]
            .as_array()
            .cloned()
            .expect("markers sollte ein Array sein")
    }
}

#[test]
fn test_scenario_a_add_cave_marker_persists_lat_lng_type() {
    let mut fx = Fixture::new(CategoryScheme::Icon);
    assert!(fx.state.registry.is_empty());

    fx.command(MapCommand::AddMarker {
        position: world_from_yx(100.0, 200.0),
        category: Category::Icon(IconType::Cave),
    });

    let markers = fx.state.registry.list();
    assert_eq!(markers.len(), 1);
    assert_eq!(markers[0].position_yx(), [100.0, 200.0]);
    assert_eq!(markers[0].category, Category::Icon(IconType::Cave));

    let stored = fx.stored_markers();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0]["lat"].as_f64(), Some(100.0));
    assert_eq!(stored[0]["lng"].as_f64(), Some(200.0));
    assert_eq!(stored[0]["type"], "cave");
}

#[test]
fn test_modifier_click_adds_marker_with_selected_category() {
    let mut fx = Fixture::new(CategoryScheme::Icon);
    fx.intent(MapIntent::CategorySelected {
        category: Category::Icon(IconType::Claim),
    });

    let click_pos = Vec2::new(500.0, 250.0);
    let expected = fx.view.screen_to_world(click_pos);
    fx.click(click_pos, Modifiers::CTRL);

    let markers = fx.state.registry.list();
    assert_eq!(markers.len(), 1);
    assert_relative_eq!(markers[0].position.x, expected.x);
    assert_relative_eq!(markers[0].position.y, expected.y);
    assert_eq!(markers[0].category, Category::Icon(IconType::Claim));
    assert_eq!(fx.view.visual_count(), 1);
    assert_eq!(
        fx.view.category_of(markers[0].id),
        Some(Category::Icon(IconType::Claim))
    );
}

#[test]
fn test_click_without_modifier_adds_nothing() {
    let mut fx = Fixture::new(CategoryScheme::Color);

    fx.click(Vec2::new(120.0, 80.0), Modifiers::NONE);

    assert!(fx.state.registry.is_empty());
    assert_eq!(fx.backend.write_count(), 0);
}

#[test]
fn test_scenario_d_confirm_removes_marker_from_registry_and_store() {
    let mut fx = Fixture::new(CategoryScheme::Icon);
    fx.click(Vec2::new(300.0, 200.0), Modifiers::CTRL);
    let marker = fx.state.registry.list()[0];

    fx.click(Vec2::new(300.0, 200.0), Modifiers::NONE);
    assert_eq!(
        fx.state.interaction,
        InteractionState::ConfirmPending {
            marker_id: marker.id
        }
    );

    fx.intent(MapIntent::DeletionConfirmed);

    assert_eq!(fx.state.interaction, InteractionState::Idle);
    assert!(fx.state.registry.is_empty());
    assert_eq!(fx.view.visual_count(), 0);
    assert!(fx.stored_markers().is_empty());

    let reloaded = Fixture::with_backend(CategoryScheme::Icon, fx.backend.clone());
    assert!(reloaded.state.registry.is_empty());
}

#[test]
fn test_scenario_d_cancel_keeps_marker_in_registry_and_store() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.click(Vec2::new(300.0, 200.0), Modifiers::CTRL);
    let writes = fx.backend.write_count();

    fx.click(Vec2::new(301.0, 201.0), Modifiers::NONE);
    assert!(fx.state.interaction.is_confirm_pending());

    fx.intent(MapIntent::DeletionCancelled);

    assert_eq!(fx.state.interaction, InteractionState::Idle);
    assert_eq!(fx.state.registry.len(), 1);
    assert_eq!(fx.stored_markers().len(), 1);
    assert_eq!(fx.backend.write_count(), writes);
}

#[test]
fn test_modifier_click_on_marker_opens_confirmation_instead_of_duplicate() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.click(Vec2::new(400.0, 300.0), Modifiers::CTRL);

    fx.click(Vec2::new(400.0, 300.0), Modifiers::CTRL);

    assert_eq!(fx.state.registry.len(), 1);
    assert!(fx.state.interaction.is_confirm_pending());
}

#[test]
fn test_pending_confirmation_blocks_further_mutations() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.click(Vec2::new(100.0, 100.0), Modifiers::CTRL);
    fx.click(Vec2::new(600.0, 500.0), Modifiers::CTRL);
    let first = fx.state.registry.list()[0].id;

    fx.click(Vec2::new(100.0, 100.0), Modifiers::NONE);
    fx.click(Vec2::new(600.0, 500.0), Modifiers::NONE);
    fx.click(Vec2::new(350.0, 350.0), Modifiers::CTRL);
    fx.intent(MapIntent::ClearAllRequested);

    assert_eq!(fx.state.registry.len(), 2);
    assert_eq!(fx.state.interaction.pending_marker(), Some(first));
}

#[test]
fn test_double_confirm_is_idempotent() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.click(Vec2::new(100.0, 100.0), Modifiers::CTRL);
    fx.click(Vec2::new(100.0, 100.0), Modifiers::NONE);

    fx.intent(MapIntent::DeletionConfirmed);
    let writes = fx.backend.write_count();
    fx.intent(MapIntent::DeletionConfirmed);

    assert!(fx.state.registry.is_empty());
    assert_eq!(fx.backend.write_count(), writes);
}

#[test]
fn test_scenario_c_clear_all_removes_record() {
    let mut fx = Fixture::new(CategoryScheme::Icon);
    for x in [100.0, 200.0, 300.0] {
        fx.click(Vec2::new(x, 100.0), Modifiers::CTRL);
    }
    assert_eq!(fx.state.registry.len(), 3);

    fx.intent(MapIntent::ClearAllRequested);

    assert!(fx.state.registry.is_empty());
    assert_eq!(fx.view.visual_count(), 0);
    assert!(fx.backend.raw(KEY).is_none());

    fx.intent(MapIntent::MarkersLoadRequested);
    assert!(fx.state.registry.is_empty());
}

#[test]
fn test_storage_failure_notifies_view_and_reconciles_on_next_save() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.backend.set_fail_writes(true);

    fx.click(Vec2::new(100.0, 100.0), Modifiers::CTRL);

    assert_eq!(fx.state.registry.len(), 1);
    assert!(fx.state.registry.is_dirty());
    assert!(fx.view.notice().is_some());
    assert!(fx.backend.raw(KEY).is_none());

    fx.backend.set_fail_writes(false);
    fx.click(Vec2::new(600.0, 400.0), Modifiers::CTRL);

    assert!(!fx.state.registry.is_dirty());
    assert_eq!(fx.stored_markers().len(), 2);
}

#[test]
fn test_load_renders_persisted_legacy_markers() {
    let backend = MemoryStore::with_entry(KEY, "[[10,20],[30,40]]");
    let fx = Fixture::with_backend(CategoryScheme::Color, backend);

    assert_eq!(fx.state.registry.len(), 2);
    assert_eq!(fx.view.visual_count(), 2);
    assert_eq!(fx.backend.write_count(), 0);
}

#[test]
fn test_command_log_records_executed_commands() {
    let mut fx = Fixture::new(CategoryScheme::Color);
    fx.click(Vec2::new(100.0, 100.0), Modifiers::CTRL);

    let last = fx
        .state
        .command_log
        .last()
        .expect("Es sollte ein Command geloggt sein");
    assert!(matches!(last, MapCommand::AddMarker { .. }));
    assert!(matches!(
        fx.state.command_log.entries().first(),
        Some(MapCommand::LoadMarkers)
    ));
}

#[test]
fn test_click_on_many_stacked_markers_opens_confirmation() {
    let stacked = vec!["[3838,3838]"; 33].join(",");
    let backend = MemoryStore::with_entry(KEY, &format!("[{stacked}]"));
    let mut fx = Fixture::with_backend(CategoryScheme::Color, backend);
    assert_eq!(fx.state.registry.len(), 33);

    let center = fx.view.world_to_screen(world_from_yx(3838.0, 3838.0));
    fx.click(center, Modifiers::NONE);

    let topmost = fx.state.registry.list()[32].id;
    assert_eq!(fx.state.interaction.pending_marker(), Some(topmost));
}
