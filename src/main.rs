//! Headless atlas driver.
//!
//! Builds the engine, replays key presses through the input processor,
//! renders one frame and writes it to stdout as JSON.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use molatlas::input::{InputEvent, InputProcessor};
use molatlas::options::Options;
use molatlas::scene::Catalog;
use molatlas::util::{Clock, FixedClock, SystemClock};
use molatlas::AtlasEngine;

/// Render one atlas frame as a JSON draw list.
#[derive(Debug, Parser)]
#[command(name = "atlas", version)]
struct Cli {
    /// Options TOML file (defaults are used when omitted).
    #[arg(long)]
    options: Option<PathBuf>,

    /// Compound catalog TOML file (the built-in catalog when omitted).
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Frame time in seconds (wall-clock time since start when omitted).
    #[arg(long)]
    time: Option<f32>,

    /// Key to press before rendering, e.g. `--key Space --key ArrowRight`.
    #[arg(long = "key")]
    keys: Vec<String>,

    /// Print the options JSON schema instead of a frame.
    #[arg(long)]
    schema: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if cli.schema {
        serde_json::to_writer_pretty(&mut out, &Options::json_schema())?;
        writeln!(out)?;
        return Ok(());
    }

    let options = match &cli.options {
        Some(path) => Options::load(path)
            .with_context(|| format!("loading options {}", path.display()))?,
        None => Options::default(),
    };
    let catalog = match &cli.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("loading catalog {}", path.display()))?,
        None => Catalog::builtin(),
    };

    let clock: Box<dyn Clock> = match cli.time {
        Some(t) => Box::new(FixedClock(t)),
        None => Box::new(SystemClock::new()),
    };

    let mut input = InputProcessor::with_key_bindings(options.keybindings.clone());
    let mut engine = AtlasEngine::new(catalog, options)?;

    for key in cli.keys {
        for command in input.handle_event(InputEvent::KeyPressed { key }) {
            engine.execute(command);
        }
        if engine.should_quit() {
            log::info!("quit requested; remaining keys ignored");
            break;
        }
    }

    log::info!("{}", engine.status_line());
    let frame = engine.render_frame(clock.seconds());
    let doc = serde_json::json!({
        "status": engine.status_line(),
        "commands": frame,
    });
    serde_json::to_writer_pretty(&mut out, &doc)?;
    writeln!(out)?;
    Ok(())
}
