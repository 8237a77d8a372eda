use rgb_channel_scaler::app::{self, CONTROL_PANEL_WIDTH};
use rgb_channel_scaler::sample::{self, SAMPLE_SIZE};
use rgb_channel_scaler::session::Session;

fn main() -> eframe::Result {
    env_logger::init();

    let source = match sample::sample_image() {
        Ok(source) => source,
        Err(e) => {
            log::error!("Failed to build sample image: {e}");
            std::process::exit(1);
        }
    };
    log::info!("Loaded sample image ({}x{})", source.width(), source.height());
    let session = Session::new(source);

    let image_side = SAMPLE_SIZE as f32;
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default()
            .with_inner_size([CONTROL_PANEL_WIDTH + image_side + 40.0, image_side + 60.0])
            .with_min_inner_size([CONTROL_PANEL_WIDTH + 200.0, 300.0])
            .with_title("RGB Channel Scaler"),
        ..Default::default()
    };

    eframe::run_native(
        "RGB Channel Scaler",
        options,
        Box::new(|cc| Ok(Box::new(app::ScalerApp::new(cc, session)))),
    )
}
