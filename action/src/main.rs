//! Ting Tong action entry point.
//!
//! Reads the `rules-path` input from the host environment, prints the
//! configuration diagnostic, and reports any failure through a workflow
//! command plus a non-zero exit. The Docker-based rules engine itself is
//! launched by the host; this binary only handles setup.

use std::io;
use std::process;

use ting_tong_action::configure::configure;
use ting_tong_action::inputs::EnvInputs;
use ting_tong_action::{commands, exit_codes, logging};

fn main() {
    logging::init();
    if let Err(err) = run() {
        commands::set_failed(&format!("{err:#}"));
        process::exit(exit_codes::FAILED);
    }
}

fn run() -> anyhow::Result<()> {
    let mut stdout = io::stdout().lock();
    let configured = configure(&EnvInputs, &mut stdout)?;
    tracing::debug!(rules_path = %configured.rules_path, "adapter finished");
    Ok(())
}
