//! Showcase of every rendering rule.
//!
//! ```text
//! fancy-demo                      # colors when stdout is a terminal
//! fancy-demo --theme theme.yaml   # palette, labels and time format from YAML
//! fancy-demo --plain              # no escape sequences at all
//! ```
//!
//! Set `RUST_LOG=fancy=debug` to see how the configuration was resolved.

use std::collections::{BTreeMap, LinkedList};
use std::io::{self, Write};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use fancy::style::Attribute;
use fancy::{Config, Fancy, OutputMode, Plain};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "fancy-demo", about = "Show how fancy renders common values")]
struct Cli {
    /// YAML file with colors, labels, time_format and output keys
    #[arg(long, value_name = "FILE")]
    theme: Option<PathBuf>,

    /// Never emit escape sequences
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.theme {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("loading theme {}", path.display()))?,
        None => Config::new().with_output(OutputMode::Auto),
    };
    if cli.plain {
        config = config.with_output(OutputMode::Text);
    }

    let fancy = Fancy::new(config);
    tracing::debug!(color = fancy.uses_color(), "rendering showcase");
    let mut out = io::stdout().lock();
    showcase(&fancy, &mut out)?;
    out.flush()?;
    Ok(())
}

fn showcase(fancy: &Fancy, out: &mut impl Write) -> Result<()> {
    let start = Instant::now();

    fancy.line(out).log_time()?.message()?.value("Something happened!")?.end()?;
    fancy.line(out).log_time()?.success()?.value("Something succeeded")?.end()?;
    fancy.line(out).log_time()?.warning()?.value("Something is weird!")?.end()?;
    fancy.line(out).log_time()?.failure()?.value("Something is wrong!")?.end()?;

    let some_ints = vec![1, 2, 3];
    fancy.line(out).text("SomeInts: ")?.value(&some_ints)?.end()?;

    let list: LinkedList<i32> = some_ints.iter().copied().collect();
    fancy.line(out).text("A List: ")?.value(&list)?.end()?;

    let some_map = BTreeMap::from([("key1".to_string(), '1'), ("key2".to_string(), '2')]);
    fancy.line(out).text("A Map: ")?.value(&some_map)?.end()?;

    fancy.line(out).important("Something important")?.end()?;

    fancy
        .line(out)
        .value(&Attribute::Blink)?
        .value(&Attribute::Underline)?
        .value(&Attribute::Italic)?
        .value(&Attribute::Bold)?
        .value(&Plain("Something blinking"))?
        .end()?;

    let tuple = (1, 2, 3.125f32, String::from("String"), 'c');
    fancy.line(out).text("A Tuple: ")?.value(&tuple)?.end()?;

    fancy
        .line(out)
        .log_time()?
        .text("A ")?
        .value(&true)?
        .text(" statement and a ")?
        .value(&false)?
        .text(" statement")?
        .end()?;

    fancy
        .line(out)
        .log_time()?
        .text("Time elapsed since start: ")?
        .value(&start.elapsed())?
        .end()?;

    Ok(())
}
