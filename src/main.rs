use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use raylib::prelude::*;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio::carousel::{Slide, SlideContent};
use portfolio::constants::*;
use portfolio::input::FrameInput;
use portfolio::texture_loader::{load_sorted_image_paths, load_texture_with_exif_rotation};
use portfolio::{Portfolio, PortfolioConfig};

/// Longest frame step fed to the animations, so a stalled window does not
/// skip whole transitions.
const MAX_FRAME_STEP: f32 = 0.1;

#[derive(Parser, Debug)]
#[command(name = "portfolio", about = "Single-page developer portfolio")]
struct Cli {
    /// Page content and settings (TOML)
    #[arg(long, env = "PORTFOLIO_CONFIG")]
    config: Option<PathBuf>,

    /// Directory of project screenshots for the carousel
    #[arg(long)]
    slides: Option<PathBuf>,

    #[arg(long, default_value_t = WINDOW_WIDTH)]
    width: i32,

    #[arg(long, default_value_t = WINDOW_HEIGHT)]
    height: i32,

    /// Do not advance the carousel automatically
    #[arg(long)]
    no_autoplay: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = match &cli.config {
        Some(path) => PortfolioConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => PortfolioConfig::default(),
    };
    if cli.no_autoplay {
        config.autoplay = false;
    }

    let (mut rl, thread) = raylib::init()
        .size(cli.width, cli.height)
        .title(&format!("{} - Portfolio", config.owner))
        .vsync()
        .resizable()
        .msaa_4x()
        .build();
    rl.set_target_fps(FPS);
    rl.set_trace_log(TraceLogLevel::LOG_ERROR);
    rl.set_exit_key(None);
    rl.hide_cursor();

    let slides_dir = cli.slides.clone().or_else(|| config.slides_dir.clone());
    let slides = load_slides(&mut rl, &thread, slides_dir.as_deref(), &config);

    let mut app = Portfolio::new(
        &config,
        slides,
        rl.get_screen_width() as f32,
        rl.get_screen_height() as f32,
    )
    .context("building the page")?;

    info!(owner = %config.owner, "portfolio running");

    // --- Main Loop ---
    while !rl.window_should_close() {
        let dt = rl.get_frame_time().min(MAX_FRAME_STEP);
        let input = FrameInput::poll(&mut rl);
        app.update(dt, &input);

        let mut d = rl.begin_drawing(&thread);
        app.draw(&mut d);
    }

    app.shutdown();
    Ok(())
}

/// Screenshots from `dir` if any load, otherwise one card per configured project.
fn load_slides(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    dir: Option<&Path>,
    config: &PortfolioConfig,
) -> Vec<Slide> {
    let mut slides = Vec::new();

    if let Some(dir) = dir {
        match load_sorted_image_paths(dir) {
            Ok(paths) => {
                for path in paths {
                    match load_texture_with_exif_rotation(rl, thread, &path) {
                        Ok(texture) => slides.push(Slide::new(SlideContent::Image(texture))),
                        Err(e) => warn!(error = %e, "skipping slide"),
                    }
                }
            }
            Err(e) => warn!(error = %e, "no screenshots loaded"),
        }
    }

    if slides.is_empty() {
        slides = config
            .projects
            .iter()
            .map(|project| Slide::card(&project.title, &project.description))
            .collect();
    }
    if slides.is_empty() {
        slides.push(Slide::card(&config.owner, "Projects coming soon"));
    }

    info!(count = slides.len(), "slides ready");
    slides
}
