use std::path::PathBuf;

use flowkit::{designer_from_config, init_logging, load_config, sample_session, SvgSurface};

/// Usage: `flowkit [config.toml|config.json] [output.svg]`
fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let config_path = args.next().map(PathBuf::from);
    let output = args.next().map(PathBuf::from);

    let config = load_config(config_path.as_deref())?;
    init_logging(&config.logging.level)?;
    tracing::info!("FlowKit {} (built {})", flowkit::VERSION, flowkit::BUILD_DATE);

    let mut state = designer_from_config(&config);
    sample_session(&mut state)?;
    tracing::info!(
        "Sample diagram has {} shapes, {} undo steps",
        state.canvas.shape_count(),
        state.history.undo_depth()
    );

    let mut svg = SvgSurface::new();
    state.paint(&mut svg);
    let document = svg.to_svg_document(state.canvas.width(), state.canvas.height());

    match output {
        Some(path) => {
            std::fs::write(&path, document)?;
            tracing::info!("Wrote {}", path.display());
        }
        None => print!("{}", document),
    }
    Ok(())
}
