use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::Parser;
use pathviz::prelude::*;
use pathviz::sandbox::{self, Sandbox};
use pathviz::window::{FrameLimiter, Key, Window, WindowEvent};

#[derive(Parser, Debug, Clone)]
#[command(version, about = "Path overlay sandbox")]
struct Args {
    /// Render settings JSON; missing fields and unreadable files fall back to defaults
    settings: Option<PathBuf>,

    /// Render one frame headlessly and save it as PNG instead of opening a window
    #[arg(long, value_name = "PNG")]
    screenshot: Option<PathBuf>,
}

fn apply_key(key: Key, settings: &mut RenderSettings, sandbox: &mut Sandbox) {
    match key {
        Key::ToggleMapOverlay => settings.draw_map = !settings.draw_map,
        Key::ToggleMinimapOverlay => settings.draw_minimap = !settings.draw_minimap,
        Key::ToggleTransports => settings.draw_transports = !settings.draw_transports,
        Key::ToggleCollisionMap => settings.draw_collision_map = !settings.draw_collision_map,
        Key::ToggleTiles => settings.draw_tiles = !settings.draw_tiles,
        Key::CycleTileCounter => settings.tile_counter = settings.tile_counter.cycle(),
        Key::RestartPath => sandbox.restart(),
        Key::ToggleWorldMap => sandbox.world.map_open = !sandbox.world.map_open,
        Key::ToggleOverview => sandbox.world.overview_open = !sandbox.world.overview_open,
        Key::ToggleSurfaceSelector => sandbox.world.selector_open = !sandbox.world.selector_open,
    }
    log::debug!("{key:?}");
}

/// Renders one frame of the finished route with the map open and saves it.
fn screenshot(settings: &RenderSettings, out: &Path) -> anyhow::Result<()> {
    let mut sandbox = Sandbox::new();
    sandbox.finish();
    sandbox.world.map_open = true;

    let mut canvas = PixelCanvas::new(sandbox::WIDTH, sandbox::HEIGHT);
    sandbox.draw_background(&mut canvas);
    OverlayStack::default().draw(&sandbox.frame(settings), &mut canvas);
    canvas
        .save_png(out)
        .with_context(|| format!("failed to write {}", out.display()))?;
    log::info!("wrote {}", out.display());
    Ok(())
}

fn run(mut settings: RenderSettings) -> anyhow::Result<()> {
    let mut window = Window::new("pathviz", sandbox::WIDTH, sandbox::HEIGHT).map_err(|e| anyhow!(e))?;
    let mut canvas = PixelCanvas::new(window.width(), window.height());
    let mut limiter = FrameLimiter::new(&window);
    let mut sandbox = Sandbox::new();
    let overlays = OverlayStack::default();

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    window.resize(w, h).map_err(|e| anyhow!(e))?;
                    canvas.resize(w, h);
                }
                WindowEvent::KeyDown(key) => apply_key(key, &mut settings, &mut sandbox),
            }
        }

        limiter.wait_and_get_delta(&window);
        sandbox.tick();

        sandbox.draw_background(&mut canvas);
        overlays.draw(&sandbox.frame(&settings), &mut canvas);
        window.present(canvas.as_bytes()).map_err(|e| anyhow!(e))?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = match &args.settings {
        Some(path) => RenderSettings::load_or_default(path),
        None => RenderSettings::default(),
    };

    match &args.screenshot {
        Some(out) => screenshot(&settings, out),
        None => run(settings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_path_is_positional() {
        let args = Args::try_parse_from(["pathviz", "overlay.json"]).unwrap();
        assert_eq!(args.settings, Some(PathBuf::from("overlay.json")));
        assert_eq!(args.screenshot, None);
    }

    #[test]
    fn screenshot_takes_an_output_path() {
        let args =
            Args::try_parse_from(["pathviz", "--screenshot", "out.png", "overlay.json"]).unwrap();
        assert_eq!(args.screenshot, Some(PathBuf::from("out.png")));
        assert_eq!(args.settings, Some(PathBuf::from("overlay.json")));

        assert!(Args::try_parse_from(["pathviz", "--screenshot"]).is_err());
    }

    #[test]
    fn unknown_flags_and_extra_arguments_are_rejected() {
        assert!(Args::try_parse_from(["pathviz", "--fullscreen"]).is_err());
        assert!(Args::try_parse_from(["pathviz", "a.json", "b.json"]).is_err());
    }
}
