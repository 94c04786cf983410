//! Subcommand and output-format classification.
//!
//! The wrapped CLI accepts its verb anywhere in the argument list
//! (`kubectl -n kube-system get pods` is as valid as `kubectl get pods -n
//! kube-system`), so classification scans every argument rather than looking
//! at a fixed position.

/// Output format requested with `-o` / `--output`.
///
/// Only the formats that change how output is colorized are tracked. Other
/// values (`custom-columns`, `go-template`, `jsonpath`, …) leave the format
/// at [`FormatOption::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormatOption {
    #[default]
    None,
    Wide,
    Json,
    Yaml,
}

impl FormatOption {
    fn from_value(value: &str) -> Option<Self> {
        match value {
            "wide" => Some(Self::Wide),
            "json" => Some(Self::Json),
            "yaml" => Some(Self::Yaml),
            _ => None,
        }
    }

    /// Parses the fused and `=` spellings: `--output=json`, `-o=json`, `-ojson`.
    fn from_inline_flag(arg: &str) -> Option<Self> {
        let value = arg
            .strip_prefix("--output=")
            .or_else(|| arg.strip_prefix("-o="))
            .or_else(|| arg.strip_prefix("-o"))?;
        Self::from_value(value)
    }
}

/// A recognized verb of `kubectl` or of the `oc` fork.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Subcommand {
    /// No verb token was found in the arguments.
    #[default]
    Unknown,
    Create,
    Expose,
    Run,
    Set,
    Explain,
    Get,
    Edit,
    Delete,
    Rollout,
    Scale,
    Autoscale,
    Certificate,
    ClusterInfo,
    Top,
    Cordon,
    Uncordon,
    Drain,
    Taint,
    Describe,
    Logs,
    Attach,
    Exec,
    PortForward,
    Proxy,
    Cp,
    Auth,
    Diff,
    Apply,
    Patch,
    Replace,
    Wait,
    Convert,
    Kustomize,
    Label,
    Annotate,
    Completion,
    ApiResources,
    ApiVersions,
    Config,
    Plugin,
    Version,
    Options,
    Ctx,
    Ns,
    Debug,
    // oc
    Projects,
    Status,
    NewProject,
    NewApp,
    Routes,
    Policy,
}

impl Subcommand {
    /// Every verb that can be matched from a token, in table order.
    pub const ALL: [Subcommand; 51] = [
        Self::Create,
        Self::Expose,
        Self::Run,
        Self::Set,
        Self::Explain,
        Self::Get,
        Self::Edit,
        Self::Delete,
        Self::Rollout,
        Self::Scale,
        Self::Autoscale,
        Self::Certificate,
        Self::ClusterInfo,
        Self::Top,
        Self::Cordon,
        Self::Uncordon,
        Self::Drain,
        Self::Taint,
        Self::Describe,
        Self::Logs,
        Self::Attach,
        Self::Exec,
        Self::PortForward,
        Self::Proxy,
        Self::Cp,
        Self::Auth,
        Self::Diff,
        Self::Apply,
        Self::Patch,
        Self::Replace,
        Self::Wait,
        Self::Convert,
        Self::Kustomize,
        Self::Label,
        Self::Annotate,
        Self::Completion,
        Self::ApiResources,
        Self::ApiVersions,
        Self::Config,
        Self::Plugin,
        Self::Version,
        Self::Options,
        Self::Ctx,
        Self::Ns,
        Self::Debug,
        Self::Projects,
        Self::Status,
        Self::NewProject,
        Self::NewApp,
        Self::Routes,
        Self::Policy,
    ];

    /// The verb token as typed on the command line.
    ///
    /// [`Subcommand::Unknown`] has no token and returns an empty string.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unknown => "",
            Self::Create => "create",
            Self::Expose => "expose",
            Self::Run => "run",
            Self::Set => "set",
            Self::Explain => "explain",
            Self::Get => "get",
            Self::Edit => "edit",
            Self::Delete => "delete",
            Self::Rollout => "rollout",
            Self::Scale => "scale",
            Self::Autoscale => "autoscale",
            Self::Certificate => "certificate",
            Self::ClusterInfo => "cluster-info",
            Self::Top => "top",
            Self::Cordon => "cordon",
            Self::Uncordon => "uncordon",
            Self::Drain => "drain",
            Self::Taint => "taint",
            Self::Describe => "describe",
            Self::Logs => "logs",
            Self::Attach => "attach",
            Self::Exec => "exec",
            Self::PortForward => "port-forward",
            Self::Proxy => "proxy",
            Self::Cp => "cp",
            Self::Auth => "auth",
            Self::Diff => "diff",
            Self::Apply => "apply",
            Self::Patch => "patch",
            Self::Replace => "replace",
            Self::Wait => "wait",
            Self::Convert => "convert",
            Self::Kustomize => "kustomize",
            Self::Label => "label",
            Self::Annotate => "annotate",
            Self::Completion => "completion",
            Self::ApiResources => "api-resources",
            Self::ApiVersions => "api-versions",
            Self::Config => "config",
            Self::Plugin => "plugin",
            Self::Version => "version",
            Self::Options => "options",
            Self::Ctx => "ctx",
            Self::Ns => "ns",
            Self::Debug => "debug",
            Self::Projects => "projects",
            Self::Status => "status",
            Self::NewProject => "new-project",
            Self::NewApp => "new-app",
            Self::Routes => "routes",
            Self::Policy => "policy",
        }
    }

    /// Returns `false` for verbs whose output must never be piped through a
    /// printer: interactive sessions (`edit`, `attach`, `exec`), shell
    /// scripts (`completion`) and the `oc` verbs that prompt or stream
    /// interactively.
    pub fn is_coloring_supported(self) -> bool {
        !matches!(
            self,
            Self::Edit
                | Self::Attach
                | Self::Exec
                | Self::Completion
                | Self::NewProject
                | Self::NewApp
                | Self::Policy
        )
    }
}

/// Looks up a single token in the verb table.
pub fn inspect_subcommand(token: &str) -> Option<Subcommand> {
    Subcommand::ALL
        .iter()
        .copied()
        .find(|subcommand| subcommand.as_str() == token)
}

/// Classification of one wrapped invocation.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandInfo {
    pub subcommand: Subcommand,
    pub format_option: FormatOption,
    pub no_header: bool,
    pub watch: bool,
    pub help: bool,
    pub recursive: bool,
    pub short: bool,
    /// The arguments exactly as they were classified.
    pub args: Vec<String>,
}

/// Updates `info` from every option-like argument, regardless of position.
///
/// A bare `-o` / `--output` takes the following argument as its value when
/// one exists. Later arguments override earlier ones.
pub fn collect_command_line_options(args: &[String], info: &mut CommandInfo) {
    for (i, arg) in args.iter().enumerate() {
        match arg.as_str() {
            "-o" | "--output" => {
                if let Some(format) = args
                    .get(i + 1)
                    .and_then(|value| FormatOption::from_value(value))
                {
                    info.format_option = format;
                }
            }
            "--no-headers" => info.no_header = true,
            "-w" | "--watch" => info.watch = true,
            "--recursive" | "--recursive=true" => info.recursive = true,
            "-h" | "--help" => info.help = true,
            "--short" | "--short=true" => info.short = true,
            "--short=false" => info.short = false,
            other => {
                if let Some(format) = FormatOption::from_inline_flag(other) {
                    info.format_option = format;
                }
            }
        }
    }
}

/// Classifies `args`, returning the populated [`CommandInfo`] and whether a
/// verb was found.
///
/// The first argument matching the verb table wins. When none matches the
/// info is still populated with options and `subcommand` stays
/// [`Subcommand::Unknown`]; callers treat that as an implicit help request.
pub fn inspect_command_info(args: &[String]) -> (CommandInfo, bool) {
    let mut info = CommandInfo {
        args: args.to_vec(),
        ..CommandInfo::default()
    };
    collect_command_line_options(args, &mut info);

    match args.iter().find_map(|arg| inspect_subcommand(arg)) {
        Some(subcommand) => {
            info.subcommand = subcommand;
            (info, true)
        }
        None => (info, false),
    }
}
