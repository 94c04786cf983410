//! Printer selection.

use std::io::{self, BufRead, Write};

use kubecolor_core::{CommandInfo, FormatOption, Subcommand};

use crate::{DescribePrinter, PaletteTablePrinter, Printer, StatusPrinter};

/// Copies its input unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct PassthroughPrinter;

impl Printer for PassthroughPrinter {
    fn print(&mut self, reader: &mut dyn BufRead, writer: &mut dyn Write) -> io::Result<()> {
        io::copy(reader, writer)?;
        Ok(())
    }
}

/// Picks the printer for a classified command.
///
/// JSON and YAML are left untouched. Free-form output, including help
/// screens, goes through the describe printer.
pub fn select_printer(info: &CommandInfo, dark_background: bool) -> Box<dyn Printer> {
    let printer: Box<dyn Printer> = match (info.format_option, info.subcommand) {
        (FormatOption::Json | FormatOption::Yaml, _) => Box::new(PassthroughPrinter),
        (_, Subcommand::Describe) => Box::new(DescribePrinter::new(dark_background)),
        (_, Subcommand::Status) => Box::new(StatusPrinter),
        (
            _,
            Subcommand::Get
            | Subcommand::Top
            | Subcommand::ApiResources
            | Subcommand::Projects
            | Subcommand::Routes,
        ) if !info.help => Box::new(PaletteTablePrinter::new(dark_background)),
        _ => Box::new(DescribePrinter::new(dark_background)),
    };
    tracing::debug!(
        subcommand = info.subcommand.as_str(),
        format = ?info.format_option,
        "Selected printer"
    );
    printer
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, apply};

    fn render(args: &[&str], input: &str) -> String {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        let (info, _) = kubecolor_core::inspect_command_info(&args);
        let mut out = Vec::new();
        select_printer(&info, true)
            .print(&mut input.as_bytes(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_structured_output_passes_through() {
        let json = "{\n  \"kind\": \"Pod\"\n}\n";
        assert_eq!(render(&["get", "pod", "-ojson"], json), json);
        assert_eq!(render(&["describe", "pod", "-o", "yaml"], "a:  b\n"), "a:  b\n");
    }

    #[test]
    fn test_get_uses_table_printer() {
        assert_eq!(
            render(&["get", "pods"], "NAME  READY"),
            format!("{}  {}\n", apply("NAME", Color::Cyan), apply("READY", Color::Green))
        );
    }

    #[test]
    fn test_describe_uses_describe_printer() {
        assert_eq!(
            render(&["describe", "pod", "nginx"], "Name:  nginx"),
            format!("{}:  {}\n", apply("Name", Color::Yellow), apply("nginx", Color::Cyan))
        );
    }

    #[test]
    fn test_status_uses_status_printer() {
        assert_eq!(
            render(&["status"], "svc/a - 1 pod"),
            format!("{} - 1 pod\n", apply("svc/a", Color::Green))
        );
    }

    #[test]
    fn test_help_uses_describe_printer() {
        assert_eq!(
            render(&["get", "--help"], "Usage:  kubectl get"),
            format!("{}:  {}\n", apply("Usage", Color::Yellow), apply("kubectl get", Color::Cyan))
        );
    }
}
