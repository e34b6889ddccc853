use anyhow::Context as _;
use egui::{ColorImage, TextureHandle, TextureOptions};
use log::warn;
use std::path::Path;
use std::time::Instant;
use stills_core::{ControlEvent, Controller, HttpFrameSource, ViewerConfig};

pub struct App {
    controller: Controller<HttpFrameSource>,
    texture: Option<TextureHandle>,
    display_dirty: bool,

    // Widget state, pushed to the controller as events
    aspect_checked: bool,
    auto_checked: bool,
    interval_input: String,
    save_error: Option<String>,
}

impl App {
    pub fn new(cfg: ViewerConfig) -> Self {
        let source = HttpFrameSource::new(&cfg);
        let controller = Controller::new(cfg, source, Instant::now());

        Self {
            aspect_checked: controller.aspect_corrected(),
            auto_checked: controller.auto_reload(),
            interval_input: controller.interval_secs().to_string(),
            controller,
            texture: None,
            display_dirty: true,
            save_error: None,
        }
    }

    fn apply(&mut self, event: ControlEvent, now: Instant) {
        let update = self.controller.handle(event, now);
        if update.display_changed {
            self.display_dirty = true;
        }
        if update.interval_rejected {
            // Silent revert, no dialog
            self.interval_input = self.controller.interval_secs().to_string();
        }
    }

    fn upload_frame(&mut self, ctx: &egui::Context) {
        if !self.display_dirty && self.texture.is_some() {
            return;
        }

        let frame = self.controller.frame();
        let (w, h) = frame.size();
        let color_image =
            ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &frame.rgba_bytes());

        match &mut self.texture {
            Some(texture) => texture.set(color_image, TextureOptions::LINEAR),
            None => {
                self.texture =
                    Some(ctx.load_texture("still_frame", color_image, TextureOptions::LINEAR));
            }
        }
        self.display_dirty = false;
    }

    fn write_still(&self, path: &Path) -> anyhow::Result<()> {
        self.controller
            .save_to(path)
            .with_context(|| format!("Error while saving file: {}", path.display()))
    }

    fn save_current_frame(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .set_file_name("still.png")
            .save_file()
        else {
            return;
        };

        // Success is silent; failure gets the modal
        if let Err(e) = self.write_still(&path) {
            warn!("save failed: {e:#}");
            self.save_error = Some(format!("{e:#}"));
        }
    }

    fn render_save_error(&mut self, ctx: &egui::Context) {
        let Some(message) = self.save_error.clone() else {
            return;
        };

        egui::Window::new("Error")
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .collapsible(false)
            .resizable(false)
            .show(ctx, |ui| {
                ui.label(message);
                if ui.button("OK").clicked() {
                    self.save_error = None;
                }
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();

        // Deadline check happens on every poll tick
        self.apply(ControlEvent::Tick, now);
        self.upload_frame(ctx);

        let mut events: Vec<ControlEvent> = Vec::new();
        let mut save_requested = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(texture) = &self.texture {
                let (w, h) = self.controller.frame().size();
                ui.image((texture.id(), egui::vec2(w as f32, h as f32)));
            }

            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut self.aspect_checked, "Correct aspect ratio")
                    .changed()
                {
                    events.push(ControlEvent::SetAspectCorrection(self.aspect_checked));
                }
                if ui.button("Reload").clicked() {
                    events.push(ControlEvent::Reload);
                }
                if ui.button("Save").clicked() {
                    save_requested = true;
                }
                if ui.button("Exit").clicked() {
                    ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
                }
            });

            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut self.auto_checked, "Auto-reload every (seconds):")
                    .changed()
                {
                    events.push(ControlEvent::SetAutoReload(self.auto_checked));
                }
                ui.add(egui::TextEdit::singleline(&mut self.interval_input).desired_width(40.0));
                if ui.button("Set").clicked() {
                    events.push(ControlEvent::ApplyInterval(self.interval_input.clone()));
                }
            });
        });

        for event in events {
            self.apply(event, now);
        }
        if save_requested {
            self.save_current_frame();
        }

        self.render_save_error(ctx);

        ctx.request_repaint_after(self.controller.config().poll_tick);
    }
}
