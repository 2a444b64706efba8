//! # FlowKit
//!
//! Editor core for flow-chart diagrams:
//! - Start, Terminator, Process and Decision shapes
//! - Lines anchored to shape connection points
//! - Undo/redo for every edit
//! - Pointer-driven line drawing with live preview
//!
//! ## Architecture
//!
//! FlowKit is organized as a workspace with multiple crates:
//!
//! 1. **flowkit-core** - Geometry, errors, shape ids, event bus
//! 2. **flowkit-designer** - Shapes, canvas, commands, history, line tool, renderers
//! 3. **flowkit-settings** - Editor configuration (JSON/TOML)
//! 4. **flowkit** - Binary that renders a sample session headlessly

use std::path::Path;

pub use flowkit_core::{
    DesignerEvent, Error, EventBus, EventCategory, EventFilter, Frame, HistoryState, Point,
    Result, ShapeError, ShapeId, ShapeType,
};
pub use flowkit_designer as designer;
pub use flowkit_designer::{
    Canvas, CursorHint, DesignerState, DrawingMode, InteractionResponse, RecordingSurface,
    ShapeFactory, SvgSurface,
};
pub use flowkit_settings::{Config, EditorSettings, SettingsError};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// `RUST_LOG` takes precedence; otherwise `default_level` is used as the
/// filter directive.
pub fn init_logging(default_level: &str) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter =
        EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(default_level))?;

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .with_line_number(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(())
}

/// Load configuration from an explicit path, the default location, or fall
/// back to defaults.
pub fn load_config(path: Option<&Path>) -> std::result::Result<Config, SettingsError> {
    match path {
        Some(path) => Config::load_from_file(path),
        None => Config::load_or_default(),
    }
}

/// Build a designer for the given configuration.
pub fn designer_from_config(config: &Config) -> DesignerState {
    DesignerState::with_settings(&config.editor)
        .with_canvas_size(config.canvas.width, config.canvas.height)
}

/// Drive a short editing session the way a host would: place shapes, connect
/// them with the pointer, label and rearrange them.
pub fn sample_session(state: &mut DesignerState) -> Result<()> {
    let start = state.add_shape("Start", Frame::new(50.0, 20.0, 120.0, 50.0))?;
    let task = state.add_shape("Process", Frame::new(50.0, 130.0, 120.0, 60.0))?;
    let check = state.add_shape("Decision", Frame::new(50.0, 250.0, 120.0, 80.0))?;
    let end = state.add_shape("Terminator", Frame::new(300.0, 265.0, 120.0, 50.0))?;

    state.set_label(start, "Begin")?;
    state.set_label(task, "Collect input")?;
    state.set_label(check, "Valid?")?;
    state.set_label(end, "Done")?;

    let wire = |state: &mut DesignerState, from: Point, to: Point| {
        state.set_mode(DrawingMode::Line);
        state.pointer_down(from);
        state.pointer_move(to);
        state.pointer_up(to);
    };
    wire(state, Point::new(110.0, 70.0), Point::new(110.0, 130.0));
    wire(state, Point::new(110.0, 190.0), Point::new(110.0, 250.0));
    wire(state, Point::new(170.0, 290.0), Point::new(300.0, 290.0));

    let yes = state
        .canvas
        .shapes()
        .filter(|o| o.shape.is_line())
        .last()
        .map(|o| o.id)
        .ok_or_else(|| Error::other("sample session did not produce a line"))?;
    state.set_label(yes, "yes")?;

    state.move_shape(end, Point::new(320.0, 265.0))?;
    Ok(())
}
