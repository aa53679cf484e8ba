//! Host input lookup.
//!
//! The host exposes action inputs as environment variables: input `name`
//! becomes `INPUT_<NAME>` with spaces replaced by underscores and the whole
//! name uppercased (`rules-path` → `INPUT_RULES-PATH`). Values are trimmed,
//! so a whitespace-only value counts the same as an empty one.

use std::env;

use anyhow::Result;

/// Environment variable key carrying the input `name`.
pub fn env_key(name: &str) -> String {
    format!("INPUT_{}", name.replace(' ', "_").to_uppercase())
}

/// Source of host-provided inputs.
///
/// `Ok(None)` means the input was not supplied at all. Implementations trim
/// surrounding whitespace from values.
pub trait InputSource {
    fn get(&self, name: &str) -> Result<Option<String>>;
}

/// Inputs read from the process environment.
pub struct EnvInputs;

impl InputSource for EnvInputs {
    fn get(&self, name: &str) -> Result<Option<String>> {
        match env::var(env_key(name)) {
            Ok(value) => Ok(Some(value.trim().to_string())),
            Err(env::VarError::NotPresent) => Ok(None),
            // A present but non-unicode value is the one lookup failure the
            // platform can produce; surface its message unchanged.
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_key_uppercases_and_keeps_dashes() {
        assert_eq!(env_key("rules-path"), "INPUT_RULES-PATH");
    }

    #[test]
    fn env_key_replaces_spaces_with_underscores() {
        assert_eq!(env_key("rules path"), "INPUT_RULES_PATH");
    }
}
