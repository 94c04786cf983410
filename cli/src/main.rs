mod error;
mod logging;
mod wrapper;

use std::ffi::OsString;

use kubecolor_core::{KubecolorConfig, StdoutTerminal, resolve_subcommand};
use kubecolor_printer::select_printer;

use crate::error::Result;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

fn main() {
    logging::init_tracing();

    match run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("kubecolor: {err}");
            std::process::exit(1);
        }
    }
}

fn run() -> Result<i32> {
    let raw: Vec<OsString> = std::env::args_os().skip(1).collect();
    let (forwarded, config) = KubecolorConfig::resolve(raw);

    if config.show_kubecolor_version {
        println!("{PACKAGE_VERSION}");
        return Ok(0);
    }

    // Classification only needs text; the child gets the original arguments.
    let args: Vec<String> = forwarded
        .iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();
    let (colorize, info) = resolve_subcommand(&args, &config, &StdoutTerminal);
    if !colorize {
        return wrapper::run_passthrough(&config.kubectl_cmd, &forwarded);
    }

    let mut printer = select_printer(&info, config.dark_background);
    wrapper::run_colorized(&config.kubectl_cmd, &forwarded, printer.as_mut())
}
