#![allow(clippy::cast_possible_truncation)] // f32->u32 frame math
#![allow(clippy::cast_precision_loss)] // u32->f32 fps conversion

//! Pop text demo renderer.
//!
//! Renders one pop animation run of a before/after number pair with the
//! embedded-graphics simulator.
//!
//! # Modes
//!
//! | Mode | Flag | Output |
//! |------|------|--------|
//! | Headless | `--out <DIR>` | one `frame_NNNN.png` per frame of a full run |
//! | Interactive | `--window` (feature `window`) | SDL window, click or `Space` to pop |
//!
//! Headless mode drives the widget with a virtual clock advanced by exactly one
//! frame time per frame, so the output is identical on every run.
//!
//! # Logging
//!
//! Set `RUST_LOG=pop_text=debug` to see trigger/finish events, or
//! `RUST_LOG=pop_text=trace` for every tick.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result, bail};
use clap::Parser;
use embedded_graphics::mono_font::MonoFont;
use embedded_graphics::pixelcolor::Rgb565;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::Rectangle;
use embedded_graphics_simulator::{OutputSettings, OutputSettingsBuilder, SimulatorDisplay};
use pop_text::config::{BACKGROUND_COLOR, FRAME_TIME, Padding, PopConfig, TEXT_SIZE_SP, sp_to_px};
use pop_text::display::{MonoMeasure, draw_widget};
use pop_text::styles::font_for_height;
use pop_text::{Gesture, MeasureSpec, PopTextWidget, TickOutcome, Widget};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Empty border around the widget inside the simulator display.
const MARGIN: u32 = 12;

/// Inner widget padding used by the demo.
const DEMO_PADDING: Padding = Padding::uniform(6);

/// Safety cap on rendered frames for a single headless run.
const MAX_FRAMES: u32 = 10_000;

#[derive(Parser, Debug)]
#[command(name = "pop-text", version, about = "Render the digit pop animation")]
struct Args {
    /// Number shown before the pop
    #[arg(long, allow_negative_numbers = true)]
    before: i64,

    /// Number shown after the pop
    #[arg(long, allow_negative_numbers = true)]
    after: i64,

    /// Directory for PNG frames (headless mode)
    #[arg(long, required_unless_present = "window")]
    out: Option<PathBuf>,

    /// Pixel upscaling of the output
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u32).range(1..=16))]
    scale: u32,

    /// Frames per second of the rendered run
    #[arg(long, default_value_t = default_fps(), value_parser = clap::value_parser!(u32).range(1..=240))]
    fps: u32,

    /// Open an interactive SDL window instead of writing PNGs
    #[arg(long)]
    window: bool,
}

fn default_fps() -> u32 { (1000 / FRAME_TIME.as_millis()) as u32 }

/// Widget plus the simulator display sized around it.
struct Scene {
    widget: PopTextWidget,
    display: SimulatorDisplay<Rgb565>,
    bounds: Rectangle,
    font: &'static MonoFont<'static>,
}

impl Scene {
    fn new(before: i64, after: i64) -> Result<Self> {
        let font = font_for_height(sp_to_px(TEXT_SIZE_SP, 1.0));
        let config = PopConfig::new()
            .with_numbers(before, after)
            .with_padding(DEMO_PADDING);
        let mut widget = PopTextWidget::new(config).context("invalid number pair")?;

        let size = widget.measure(MeasureSpec::AtMost(0), MeasureSpec::AtMost(0), &MonoMeasure::new(font));
        let bounds = Rectangle::new(Point::new(MARGIN as i32, MARGIN as i32), size);
        let display = SimulatorDisplay::new(Size::new(size.width + 2 * MARGIN, size.height + 2 * MARGIN));
        debug!(width = size.width, height = size.height, "widget measured");

        Ok(Self {
            widget,
            display,
            bounds,
            font,
        })
    }

    fn redraw(&mut self) {
        self.display.clear(BACKGROUND_COLOR).ok();
        draw_widget(&mut self.display, &mut self.widget, self.bounds, self.font, BACKGROUND_COLOR);
    }
}

fn frame_path(dir: &Path, index: u32) -> PathBuf { dir.join(format!("frame_{index:04}.png")) }

fn save_frame(scene: &Scene, settings: &OutputSettings, dir: &Path, index: u32) -> Result<()> {
    let path = frame_path(dir, index);
    scene
        .display
        .to_rgb_output_image(settings)
        .save_png(&path)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Render a complete run into `dir`. Returns the number of frames written.
fn render_frames(scene: &mut Scene, dir: &Path, scale: u32, fps: u32) -> Result<u32> {
    fs::create_dir_all(dir).with_context(|| format!("failed to create {}", dir.display()))?;
    let settings = OutputSettingsBuilder::new().scale(scale).build();
    let frame_time = Duration::from_secs_f32(1.0 / fps as f32);

    // Virtual clock: every frame is exactly one frame time apart
    let mut now = Instant::now();
    let mut index = 0;

    scene.redraw();
    save_frame(scene, &settings, dir, index)?;
    index += 1;

    if !scene.widget.on_gesture(Gesture::Released, now) {
        info!("numbers share every digit position, nothing to animate");
        return Ok(index);
    }

    while index < MAX_FRAMES {
        now += frame_time;
        let outcome = scene.widget.on_frame(now);
        if outcome.needs_redraw() {
            scene.redraw();
            save_frame(scene, &settings, dir, index)?;
            index += 1;
        }
        if outcome != TickOutcome::Redraw {
            break;
        }
    }

    Ok(index)
}

#[cfg(feature = "window")]
fn run_window(scene: &mut Scene, scale: u32, fps: u32) {
    use embedded_graphics_simulator::sdl2::{Keycode, MouseButton};
    use embedded_graphics_simulator::{SimulatorEvent, Window};
    use pop_text::ButtonState;

    let settings = OutputSettingsBuilder::new().scale(scale).build();
    let mut window = Window::new("Pop Text", &settings);
    let frame_time = Duration::from_secs_f32(1.0 / fps as f32);
    let space = Keycode::from_name("Space");
    let escape = Keycode::from_name("Escape");
    let mut space_button = ButtonState::new();

    scene.redraw();
    window.update(&scene.display);

    'running: loop {
        let frame_start = Instant::now();

        for event in window.events() {
            let gesture = match event {
                SimulatorEvent::Quit => break 'running,
                SimulatorEvent::MouseButtonDown {
                    mouse_btn: MouseButton::Left,
                    ..
                } => Some(Gesture::Pressed),
                SimulatorEvent::MouseButtonUp {
                    mouse_btn: MouseButton::Left,
                    ..
                } => Some(Gesture::Released),
                SimulatorEvent::KeyDown { keycode, .. } if Some(keycode) == escape || keycode == Keycode::Q => {
                    break 'running;
                }
                SimulatorEvent::KeyDown {
                    keycode, repeat: false, ..
                } if Some(keycode) == space => space_button.update(true, frame_start),
                SimulatorEvent::KeyUp { keycode, .. } if Some(keycode) == space => {
                    space_button.update(false, frame_start)
                }
                _ => None,
            };
            if let Some(gesture) = gesture {
                scene.widget.on_gesture(gesture, frame_start);
            }
        }

        if scene.widget.on_frame(Instant::now()).needs_redraw() {
            scene.redraw();
        }
        window.update(&scene.display);

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            std::thread::sleep(frame_time - elapsed);
        }
    }

    scene.widget.detach();
}

#[cfg(not(feature = "window"))]
fn run_window(_scene: &mut Scene, _scale: u32, _fps: u32) -> Result<()> {
    bail!("interactive mode requires building with `--features window`")
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut scene = Scene::new(args.before, args.after)?;

    if args.window {
        #[cfg(feature = "window")]
        run_window(&mut scene, args.scale, args.fps);
        #[cfg(not(feature = "window"))]
        run_window(&mut scene, args.scale, args.fps)?;
        return Ok(());
    }

    let Some(dir) = args.out.as_deref() else {
        bail!("--out is required without --window");
    };
    let frames = render_frames(&mut scene, dir, args.scale, args.fps)?;
    info!(frames, dir = %dir.display(), before = args.before, after = args.after, "frames written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_parse_headless() {
        let args = Args::try_parse_from(["pop-text", "--before", "99", "--after", "100", "--out", "frames"]).unwrap();
        assert_eq!(args.before, 99);
        assert_eq!(args.after, 100);
        assert_eq!(args.out.as_deref(), Some(Path::new("frames")));
        assert_eq!(args.fps, 50, "default fps follows the frame time");
        assert!(!args.window);
    }

    #[test]
    fn test_args_require_out_without_window() {
        assert!(Args::try_parse_from(["pop-text", "--before", "1", "--after", "2"]).is_err());
        assert!(Args::try_parse_from(["pop-text", "--before", "1", "--after", "2", "--window"]).is_ok());
    }

    #[test]
    fn test_args_accept_negative_for_validation() {
        // Parsing succeeds; the widget rejects the value
        let args = Args::try_parse_from(["pop-text", "--before", "-5", "--after", "2", "--out", "x"]).unwrap();
        assert_eq!(args.before, -5);
        assert!(Scene::new(args.before, args.after).is_err());
    }

    #[test]
    fn test_scene_fits_widget_with_margin() {
        let scene = Scene::new(123, 124).unwrap();
        let size = scene.display.size();
        assert_eq!(scene.bounds.top_left, Point::new(MARGIN as i32, MARGIN as i32));
        assert_eq!(size.width, scene.bounds.size.width + 2 * MARGIN);
        assert_eq!(size.height, scene.bounds.size.height + 2 * MARGIN);
    }

    #[test]
    fn test_frame_path_is_zero_padded() {
        assert_eq!(frame_path(Path::new("out"), 7), Path::new("out").join("frame_0007.png"));
    }
}
