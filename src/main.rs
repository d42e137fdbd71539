//! BitCraft Map Editor.
//!
//! Annotiert die BitCraft-Weltkarte mit persistenten Punkt-Markern
//! (Farb- oder Icon-Kategorien), verschiebbar und zoombar wie eine Karte.

use bitcraft_map_editor::{
    ui, AnnotatorOptions, AnnotatorState, InteractionController, MapIntent, MapViewState,
};
use eframe::egui;

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!(
            "BitCraft Map Editor v{} startet...",
            env!("CARGO_PKG_VERSION")
        );

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 800.0])
                .with_title("BitCraft Map Editor"),
            renderer: eframe::Renderer::Glow,
            ..Default::default()
        };

        eframe::run_native(
            "BitCraft Map Editor",
            options,
            Box::new(|_cc| Ok(Box::new(EditorApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct EditorApp {
    state: AnnotatorState,
    view: MapViewState,
    controller: InteractionController,
    input: ui::InputState,
    map_texture: Option<egui::TextureHandle>,
    background_requested: bool,
}

impl EditorApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AnnotatorOptions::config_path();
        let options = AnnotatorOptions::load_from_file(&config_path);

        let view = MapViewState::new(&options);
        let state = AnnotatorState::with_file_store(options);

        let mut app = Self {
            state,
            view,
            controller: InteractionController::new(),
            input: ui::InputState::new(),
            map_texture: None,
            background_requested: false,
        };
        app.process_events(vec![MapIntent::MarkersLoadRequested]);
        app
    }
}

impl eframe::App for EditorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.ensure_background_loaded(ctx);
        self.sync_background_upload(ctx);

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();
        self.process_events(events);

        if has_events || ctx.input(|i| i.pointer.is_moving()) {
            ctx.request_repaint();
        }
    }
}

impl EditorApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<MapIntent> {
        let mut events = Vec::new();

        if ui::render_status_bar(ctx, &self.state, &self.view, self.input.hover_world()) {
            self.view.dismiss_notice();
        }
        events.extend(ui::render_toolbar(ctx, &self.state, &mut self.view));
        events.extend(ui::show_delete_confirmation(ctx, &self.state));

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                let (rect, response) =
                    ui.allocate_exact_size(ui.available_size(), egui::Sense::click_and_drag());

                events.extend(self.input.collect_viewport_events(
                    ui,
                    &response,
                    &mut self.view,
                    &self.state,
                ));

                ui::paint_map(
                    ui,
                    rect,
                    &self.view,
                    self.map_texture.as_ref(),
                    &self.state.options,
                );

                if self.view.background_map.is_none() {
                    ui.painter().text(
                        rect.left_top() + egui::vec2(12.0, 12.0),
                        egui::Align2::LEFT_TOP,
                        format!(
                            "Kartenbild nicht gefunden: {}",
                            self.state.options.map_image_path.display()
                        ),
                        egui::FontId::proportional(14.0),
                        egui::Color32::LIGHT_GRAY,
                    );
                }
            });

        events
    }

    fn process_events(&mut self, events: Vec<MapIntent>) {
        for event in events {
            if let Err(e) = self
                .controller
                .handle_intent(&mut self.state, &mut self.view, event)
            {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }

    fn ensure_background_loaded(&mut self, ctx: &egui::Context) {
        if self.background_requested {
            return;
        }
        self.background_requested = true;

        let max_side = ctx.input(|i| i.max_texture_side) as u32;
        let path = self.state.options.map_image_path.clone();
        if let Err(e) = self.view.load_background(&path, max_side) {
            log::warn!("Kartenbild nicht geladen, zeige nur Hintergrundfarbe: {:#}", e);
        }
    }

    fn sync_background_upload(&mut self, ctx: &egui::Context) {
        if !self.view.background_dirty {
            return;
        }
        self.view.background_dirty = false;

        self.map_texture = self.view.background_map.as_deref().map(|map| {
            let (size, pixels) = map.to_rgba8();
            let image = egui::ColorImage::from_rgba_unmultiplied(size, &pixels);
            log::info!("Kartenbild als Textur hochgeladen ({}x{})", size[0], size[1]);
            ctx.load_texture("map_image", image, egui::TextureOptions::LINEAR)
        });
    }
}
