use tracing_prettyline::config::{Backend, Options};
use tracing_prettyline::init::setup_logging;

/// Load options from an optional JSON file given as the first argument,
/// then apply any `PRETTYLINE_*` environment variables on top:
///
/// ```text
/// PRETTYLINE_COLOR=false PRETTYLINE_TIMESTAMP=rfc3339 cargo run --example from_env
/// PRETTYLINE_BACKEND=log cargo run --example from_env -- options.json
/// ```
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let base = match std::env::args().nth(1) {
        Some(path) => Options::from_json(&std::fs::read_to_string(path)?)?,
        None => Options::default(),
    };
    let opts = base.overlay_env(|key| std::env::var(key).ok())?;
    setup_logging(&opts)?;

    match opts.backend {
        Backend::Tracing => {
            tracing::info!(min_level = %opts.level, output = %opts.output, "configured");
            tracing::warn!("formatted by the tracing layer");
        }
        Backend::Log => {
            log::info!(min_level = opts.level.as_str(), output = opts.output.as_str(); "configured");
            log::warn!("formatted by the log backend");
        }
    }
    Ok(())
}
