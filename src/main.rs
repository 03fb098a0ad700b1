use clap::Parser;
use log::{debug, info};

use tetraview::config::{Args, ViewerConfig};
use tetraview::controls::ViewAngles;
use tetraview::engine::Engine;
use tetraview::error::ViewerError;
use tetraview::window::{FrameLimiter, FrameTexture, Key, Window, WindowEvent};

const WINDOW_TITLE: &str = "tetraview";

/// Applies a key press to the viewer state. Returns whether a redraw is needed.
fn handle_key(key: Key, angles: &mut ViewAngles, engine: &mut Engine, step: f64) -> bool {
    match key {
        Key::Left => angles.nudge_heading(-step),
        Key::Right => angles.nudge_heading(step),
        Key::Up => angles.nudge_pitch(step),
        Key::Down => angles.nudge_pitch(-step),
        Key::ToggleMode => {
            let mode = engine.render_mode().next();
            info!("render mode: {mode}");
            engine.set_render_mode(mode);
            true
        }
        Key::Reset => {
            let reset = ViewAngles::default();
            let changed = *angles != reset;
            *angles = reset;
            changed
        }
    }
}

fn snapshot(engine: &Engine, config: &ViewerConfig) -> Result<(), ViewerError> {
    let Some(path) = &config.snapshot else {
        return Ok(());
    };
    let surface = engine.render(config.angles, config.width, config.height);
    surface.save_png(path)?;
    info!(
        "wrote {}x{} snapshot ({} pixels covered) to {}",
        surface.width(),
        surface.height(),
        surface.covered_pixels(),
        path.display()
    );
    Ok(())
}

fn run_window(mut engine: Engine, config: ViewerConfig) -> Result<(), ViewerError> {
    let mut window = Window::new(WINDOW_TITLE, config.width, config.height)?;
    let texture_creator = window.texture_creator();
    let mut frame_texture = FrameTexture::new(&texture_creator);
    let mut limiter = FrameLimiter::new(&window);
    let mut angles = config.angles;
    let mut needs_redraw = true;

    info!("arrows rotate, W toggles wireframe, R resets, Esc quits");

    'running: loop {
        for event in window.poll_events() {
            match event {
                WindowEvent::Quit => break 'running,
                WindowEvent::Resize(w, h) => {
                    debug!("resized to {w}x{h}");
                    needs_redraw = true;
                }
                WindowEvent::Exposed => needs_redraw = true,
                WindowEvent::Key(key) => {
                    needs_redraw |= handle_key(key, &mut angles, &mut engine, config.step);
                }
            }
        }

        if needs_redraw {
            let surface = engine.render(angles, window.width(), window.height());
            window.present(&mut frame_texture, &surface)?;
            needs_redraw = false;
        }

        limiter.wait_and_get_delta(&window);
    }

    Ok(())
}

fn main() -> Result<(), ViewerError> {
    env_logger::init();

    let config = Args::parse().into_config();
    let engine = Engine::default().with_mode(config.mode);

    if config.snapshot.is_some() {
        return snapshot(&engine, &config);
    }
    run_window(engine, config)
}
