use anyhow::{Context, Result};
use movable::replay::{Trace, replay};

fn main() -> Result<()> {
    movable::logging::init();

    let path = std::env::args()
        .nth(1)
        .context("usage: movable-replay <trace.json>")?;

    let trace = Trace::from_path(&path).with_context(|| format!("failed to load trace {path}"))?;
    let outcome = replay(&trace)?;
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}
