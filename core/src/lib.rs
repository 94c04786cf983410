//! Command classification and colorization policy for the kubecolor wrapper.
//!
//! This crate decides *what* a wrapped `kubectl` (or `oc`) invocation is and
//! *whether* its output should be colorized:
//!
//! - [`inspect_command_info`] scans raw CLI arguments for the subcommand
//!   verb and output-format flags, producing a [`CommandInfo`].
//! - [`KubecolorConfig`] holds the wrapper's own switches (`--plain`,
//!   `--light-background`, …), stripped from the forwarded arguments.
//! - [`resolve_subcommand`] combines both with a [`TerminalProbe`] into the
//!   final colorize-or-not decision.
//!
//! Nothing here fails. Unrecognized input degrades to "no subcommand" or
//! "no format" so the wrapper never blocks the wrapped command's output.
//!
//! # Example
//!
//! ```
//! use kubecolor_core::*;
//!
//! let raw: Vec<String> = ["get", "pods", "-owide", "--force-colors"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let (args, config) = KubecolorConfig::resolve_with_env(raw, |_| None);
//! assert_eq!(args, vec!["get", "pods", "-owide"]);
//!
//! let (colorize, info) = resolve_subcommand(&args, &config, &|| false);
//! assert!(colorize);
//! assert_eq!(info.subcommand, Subcommand::Get);
//! assert_eq!(info.format_option, FormatOption::Wide);
//! ```

mod command;
mod config;
mod resolve;

pub use command::{
    CommandInfo, FormatOption, Subcommand, collect_command_line_options, inspect_command_info,
    inspect_subcommand,
};
pub use config::{KUBECTL_COMMAND_ENV, KubecolorConfig, WRAPPER_FLAGS};
pub use resolve::{StdoutTerminal, TerminalProbe, is_internal_command, resolve_subcommand};
