use eframe::egui;

use crate::color::factors::{Channel, FACTOR_MAX, FACTOR_MIN};
use crate::session::{Command, Session};

pub const CONTROL_PANEL_WIDTH: f32 = 260.0;

pub struct ScalerApp {
    session: Session,
    preview_texture: Option<egui::TextureHandle>,
    uploaded_generation: Option<u64>,
    status: Option<String>,
}

impl ScalerApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, session: Session) -> Self {
        Self {
            session,
            preview_texture: None,
            uploaded_generation: None,
            status: None,
        }
    }

    fn open_image(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "tiff", "tif", "bmp", "webp"])
            .pick_file()
        {
            match crate::image_io::load_image(&path) {
                Ok(source) => {
                    self.session.handle(Command::ReplaceSource(source));
                    self.status = None;
                }
                Err(e) => {
                    log::error!("Error loading {}: {e}", path.display());
                    self.status = Some(format!("Error loading image: {e}"));
                }
            }
        }
    }

    fn save_result(&mut self) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .add_filter("TIFF", &["tiff", "tif"])
            .save_file()
        {
            match crate::image_io::save_image(self.session.modified(), &path) {
                Ok(()) => {
                    log::info!("Saved result to {}", path.display());
                    self.status = Some(format!("Saved {}", path.display()));
                }
                Err(e) => {
                    log::error!("Error saving {}: {e}", path.display());
                    self.status = Some(format!("Error saving image: {e}"));
                }
            }
        }
    }

    fn sync_texture(&mut self, ctx: &egui::Context) {
        if self.uploaded_generation == Some(self.session.generation()) {
            return;
        }
        let img = self.session.modified();
        let size = [img.width() as usize, img.height() as usize];
        let color_image = egui::ColorImage::from_rgb(size, img.as_raw());
        match &mut self.preview_texture {
            Some(tex) => tex.set(color_image, egui::TextureOptions::LINEAR),
            None => {
                self.preview_texture =
                    Some(ctx.load_texture("preview", color_image, egui::TextureOptions::LINEAR));
            }
        }
        self.uploaded_generation = Some(self.session.generation());
    }
}

impl eframe::App for ScalerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    self.open_image();
                }
                if ui.button("Save Result").clicked() {
                    self.save_result();
                }
                ui.separator();

                let source = self.session.source();
                ui.label(format!(
                    "{}x{} | {:.1}ms",
                    source.width(),
                    source.height(),
                    self.session.last_process_ms()
                ));

                if let Some(status) = &self.status {
                    ui.separator();
                    ui.label(status);
                }
            });
        });

        egui::SidePanel::left("controls")
            .default_width(CONTROL_PANEL_WIDTH)
            .resizable(false)
            .show(ctx, |ui| {
                if let Some(command) = ui_factor_controls(ui, &self.session) {
                    self.session.handle(command);
                }
            });

        self.sync_texture(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(tex) = &self.preview_texture {
                egui::ScrollArea::both().show(ui, |ui| {
                    let available = ui.available_size();
                    let [w, h] = tex.size();
                    let (img_w, img_h) = (w as f32, h as f32);
                    let scale = f32::min(available.x / img_w, available.y / img_h).min(1.0);
                    let display_size = egui::vec2(img_w * scale, img_h * scale);
                    ui.image(egui::load::SizedTexture::new(tex.id(), display_size));
                });
            }
        });
    }
}

/// Draw the three sliders and the two buttons. Returns at most one command per frame.
fn ui_factor_controls(ui: &mut egui::Ui, session: &Session) -> Option<Command> {
    let mut factors = session.factors();
    let labels = session.labels();
    let mut changed = false;

    for (&channel, label) in Channel::ALL.iter().zip(labels.iter()) {
        ui.label(label);
        let mut value = factors.get(channel);
        changed |= ui
            .add(egui::Slider::new(&mut value, FACTOR_MIN..=FACTOR_MAX).show_value(false))
            .changed();
        factors.set(channel, value);
        ui.add_space(6.0);
    }

    ui.separator();
    let mut command = None;
    ui.horizontal(|ui| {
        if ui.button("Default").clicked() {
            command = Some(Command::Reset);
        }
        if ui.button("Random").clicked() {
            command = Some(Command::Randomize);
        }
    });

    command.or_else(|| changed.then_some(Command::SetFactors(factors)))
}
