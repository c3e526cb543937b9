//! Animated download button: a single egui window hosting one toggle button
//! that runs a synthetic download and sweeps a progress arc around itself.

// Animated widget: layout, painting and click handling
mod button;
// Settings file and palette
mod config;
// Synthetic download driving the button state
mod downloader;
// Startup error type
mod error;
// Arc and rotation math
mod geometry;
// Vector glyphs for the icon badge
mod icons;
// Button state and derived presentation
mod model;
// Timed increment process
mod progress;
// Value interpolation
mod tween;

use std::path::PathBuf;

use button::DownloadButton;
use clap::Parser;
use config::{Config, Palette};
use downloader::DownloadController;
use error::{AppError, Result};

// eframe/egui for GUI application framework
use eframe::{App, Frame, egui};
use egui::{FontData, FontDefinitions, FontFamily, Rect, Visuals};
// OnceCell for single-time runtime initialization
use once_cell::sync::OnceCell;
use tokio::runtime::Runtime;
use tracing::info;
use tracing_subscriber::EnvFilter;

// Font family name the configured label font is registered under
const LABEL_FONT: &str = "label";

// Global Tokio runtime stored in a OnceCell for lazy init
static RUNTIME: OnceCell<Runtime> = OnceCell::new();

/// Command line options
#[derive(Debug, Parser)]
#[command(version, about = "Animated download button demo")]
struct Cli {
    /// TOML file with timing and color settings
    #[arg(long)]
    config: Option<PathBuf>,
    /// Override the delay between progress steps, in milliseconds
    #[arg(long)]
    step_delay_ms: Option<u64>,
}

/// Program entry point: initializes logging and runtime, then launches GUI
fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(cli.config.as_deref())?;
    if let Some(ms) = cli.step_delay_ms {
        config.step_delay_ms = ms;
    }
    config.validate()?;
    let palette = config.palette()?;
    let label_font = config.label_font_data()?;
    info!(?config, "starting");

    let runtime = RUNTIME.get_or_try_init(Runtime::new).map_err(AppError::Runtime)?;
    let controller = DownloadController::new(runtime.handle().clone(), config.cadence());
    let mut button = DownloadButton::new(controller, palette, config.animation_secs());
    if label_font.is_some() {
        button = button.with_label_family(FontFamily::Name(LABEL_FONT.into()));
    }
    let app = ButtonApp { button, palette };

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([420.0, 320.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Animated Download Button",
        options,
        Box::new(move |cc| {
            // Use dark theme visuals
            cc.egui_ctx.set_visuals(Visuals::dark());
            if let Some(bytes) = label_font {
                cc.egui_ctx.set_fonts(label_font_definitions(bytes));
            }
            Box::new(app)
        }),
    )?;
    Ok(())
}

/// Default fonts plus the configured label font under [`LABEL_FONT`]
fn label_font_definitions(bytes: Vec<u8>) -> FontDefinitions {
    let mut fonts = FontDefinitions::default();
    fonts
        .font_data
        .insert(LABEL_FONT.to_owned(), FontData::from_owned(bytes));
    fonts
        .families
        .insert(FontFamily::Name(LABEL_FONT.into()), vec![LABEL_FONT.to_owned()]);
    fonts
}

/// Window state: one button centered on a flat background
struct ButtonApp {
    button: DownloadButton,
    palette: Palette,
}

impl App for ButtonApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let now = ctx.input(|i| i.time);
        self.button.update(now);

        let panel = egui::Frame::none().fill(self.palette.background);
        egui::CentralPanel::default().frame(panel).show(ctx, |ui| {
            let label_width = self.button.label_width(ui);
            let size = self.button.desired_size(label_width, now);
            let rect = Rect::from_center_size(ui.max_rect().center(), size);
            ui.put(rect, &mut self.button);
        });

        if self.button.needs_repaint(now) {
            ctx.request_repaint();
        }
    }
}
