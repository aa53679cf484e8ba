//! The configure operation: resolve the rules path and emit the diagnostic.

use std::io::Write;

use anyhow::Result;
use tracing::debug;

use crate::inputs::InputSource;

/// Name of the sole action input.
pub const RULES_PATH_INPUT: &str = "rules-path";

/// Substituted when `rules-path` is absent or empty.
pub const DEFAULT_RULES_PATH: &str = "/rules";

/// Resolved adapter configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configured {
    pub rules_path: String,
}

/// Resolve `rules-path` and write the single diagnostic line to `out`.
///
/// The rules engine that consumes the path runs in a container the host
/// launches; this adapter only surfaces the resolved value for operators and
/// returns it to the caller. Errors propagate untouched so the host sees the
/// original message.
pub fn configure(inputs: &impl InputSource, out: &mut impl Write) -> Result<Configured> {
    let rules_path = match inputs.get(RULES_PATH_INPUT)? {
        Some(path) if !path.is_empty() => path,
        _ => DEFAULT_RULES_PATH.to_string(),
    };
    debug!(rules_path = %rules_path, "resolved rules path");

    writeln!(out, "Ting Tong Action configured with rules path: {rules_path}")?;

    Ok(Configured { rules_path })
}
