//! Entry-point adapter for the Ting Tong action.
//!
//! The host passes action inputs through the environment; the Docker-based
//! rules engine does the actual rules processing in its own container. This
//! crate is the thin setup step in between: it resolves the `rules-path`
//! input (defaulting to `/rules`), prints one diagnostic line for operators,
//! and reports success or failure back to the host.
//!
//! - **[`inputs`]**: the host-environment lookup seam.
//! - **[`configure`]**: the single operation — resolve, log, return.
//! - **[`commands`]**: workflow-command output (the failure signal).

pub mod commands;
pub mod configure;
pub mod exit_codes;
pub mod inputs;
pub mod logging;
