//! Running the wrapped command.

use std::ffi::OsString;
use std::io::{self, BufReader, Write};
use std::process::{Child, Command, ExitStatus, Stdio};

use kubecolor_printer::Printer;

use crate::error::{CliError, Result};

/// Runs `program` with the terminal attached and returns its exit code.
pub fn run_passthrough(program: &str, args: &[OsString]) -> Result<i32> {
    let mut child = spawn(program, args, Stdio::inherit())?;
    let status = child.wait().map_err(CliError::Wait)?;
    Ok(exit_code(status))
}

/// Runs `program`, streaming its stdout through `printer`.
///
/// Stdin and stderr stay attached to the terminal. A closed stdout (`| head`)
/// ends the stream without an error; the child then sees its own pipe close.
pub fn run_colorized(program: &str, args: &[OsString], printer: &mut dyn Printer) -> Result<i32> {
    let mut child = spawn(program, args, Stdio::piped())?;

    let streamed = match child.stdout.take() {
        Some(pipe) => {
            let mut reader = BufReader::new(pipe);
            let stdout = io::stdout();
            let mut writer = stdout.lock();
            printer
                .print(&mut reader, &mut writer)
                .and_then(|()| writer.flush())
        }
        None => Ok(()),
    };

    let status = child.wait().map_err(CliError::Wait)?;
    match streamed {
        Ok(()) => {}
        Err(err) if err.kind() == io::ErrorKind::BrokenPipe => {
            tracing::debug!("Stdout closed before the wrapped command finished");
        }
        Err(err) => return Err(CliError::Stream(err)),
    }
    Ok(exit_code(status))
}

fn spawn(program: &str, args: &[OsString], stdout: Stdio) -> Result<Child> {
    tracing::debug!(program, ?args, "Spawning wrapped command");
    Command::new(program)
        .args(args)
        .stdin(Stdio::inherit())
        .stdout(stdout)
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|source| CliError::Spawn {
            command: program.to_string(),
            source,
        })
}

/// Signal-terminated children report 1.
fn exit_code(status: ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_binary_is_a_spawn_error() {
        let err = run_passthrough("kubecolor-test-no-such-binary", &[]).unwrap_err();
        assert!(matches!(
            err,
            CliError::Spawn { ref command, .. } if command == "kubecolor-test-no-such-binary"
        ));
        assert!(err.to_string().starts_with("failed to run 'kubecolor-test-no-such-binary'"));
    }

    #[cfg(unix)]
    #[test]
    fn test_exit_code_is_forwarded() {
        let args = [OsString::from("-c"), OsString::from("exit 3")];
        assert_eq!(run_passthrough("sh", &args).unwrap(), 3);
    }

    #[cfg(unix)]
    #[test]
    fn test_signal_exit_maps_to_one() {
        let args = [OsString::from("-c"), OsString::from("kill -9 $$")];
        assert_eq!(run_passthrough("sh", &args).unwrap(), 1);
    }
}
