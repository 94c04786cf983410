//! The colorize-or-not decision.

use std::io::IsTerminal;

use tracing::debug;

use crate::command::{CommandInfo, inspect_command_info};
use crate::config::KubecolorConfig;

/// Hidden completion verbs the wrapped CLI uses to feed shell completion
/// scripts. Their output is parsed by the shell and must stay plain.
const INTERNAL_COMMANDS: [&str; 2] = ["__complete", "__completeNoDesc"];

/// Reports whether the process output stream is an interactive terminal.
pub trait TerminalProbe {
    fn is_output_terminal(&self) -> bool;
}

impl<F> TerminalProbe for F
where
    F: Fn() -> bool,
{
    fn is_output_terminal(&self) -> bool {
        self()
    }
}

/// [`TerminalProbe`] backed by the real standard output.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdoutTerminal;

impl TerminalProbe for StdoutTerminal {
    fn is_output_terminal(&self) -> bool {
        std::io::stdout().is_terminal()
    }
}

/// Returns `true` if any argument is a hidden completion verb.
pub fn is_internal_command(args: &[String]) -> bool {
    args.iter().any(|arg| INTERNAL_COMMANDS.contains(&arg.as_str()))
}

/// Classifies `args` and decides whether output should be colorized.
///
/// Decision order:
/// 1. No verb and no explicit help flag → the invocation is treated as help.
/// 2. Internal completion verbs never colorize.
/// 3. `plain` disables color, except on help screens.
/// 4. `force_color` enables color regardless of the terminal.
/// 5. Otherwise color follows [`TerminalProbe::is_output_terminal`].
///
/// Verbs that do not support coloring override all of the above.
pub fn resolve_subcommand(
    args: &[String],
    config: &KubecolorConfig,
    probe: &dyn TerminalProbe,
) -> (bool, CommandInfo) {
    let (mut info, found) = inspect_command_info(args);

    if !found && !info.help {
        info.help = true;
    }

    let should_colorize = if is_internal_command(args) {
        false
    } else if config.plain {
        info.help
    } else if config.force_color {
        true
    } else {
        probe.is_output_terminal()
    };
    let should_colorize = should_colorize && info.subcommand.is_coloring_supported();

    debug!(
        subcommand = info.subcommand.as_str(),
        format = ?info.format_option,
        found,
        help = info.help,
        should_colorize,
        "Resolved subcommand"
    );

    (should_colorize, info)
}
