//! Wrapper configuration.
//!
//! kubecolor forwards every argument to the wrapped binary except its own
//! switches, which are removed wherever they appear. The configuration is
//! built once per invocation and read-only afterwards.
//!
//! Arguments may be any `AsRef<OsStr>` so that the binary can forward
//! non-UTF-8 arguments (file names passed to `-f` or `cp`) untouched.

use std::ffi::OsStr;

/// Environment variable naming the wrapped binary when `--use-oc-cli` is absent.
pub const KUBECTL_COMMAND_ENV: &str = "KUBECTL_COMMAND";

const PLAIN_FLAG: &str = "--plain";
const LIGHT_BACKGROUND_FLAG: &str = "--light-background";
const FORCE_COLORS_FLAG: &str = "--force-colors";
const KUBECOLOR_VERSION_FLAG: &str = "--kubecolor-version";
const USE_OC_CLI_FLAG: &str = "--use-oc-cli";

/// The switches consumed by kubecolor itself and never forwarded, in the
/// order [`KubecolorConfig::resolve_with_env`] strips them.
pub const WRAPPER_FLAGS: [&str; 5] = [
    PLAIN_FLAG,
    LIGHT_BACKGROUND_FLAG,
    FORCE_COLORS_FLAG,
    KUBECOLOR_VERSION_FLAG,
    USE_OC_CLI_FLAG,
];

const DEFAULT_KUBECTL_COMMAND: &str = "kubectl";
const OC_COMMAND: &str = "oc";

/// Process-wide wrapper settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KubecolorConfig {
    /// Never colorize (except help screens).
    pub plain: bool,
    /// Pick colors legible on a dark terminal background.
    pub dark_background: bool,
    /// Colorize even when stdout is not a terminal.
    pub force_color: bool,
    /// Print kubecolor's own version and exit.
    pub show_kubecolor_version: bool,
    /// Wrap `oc` instead of `kubectl`.
    pub use_oc_cli: bool,
    /// The binary to run.
    pub kubectl_cmd: String,
}

impl Default for KubecolorConfig {
    fn default() -> Self {
        Self {
            plain: false,
            dark_background: true,
            force_color: false,
            show_kubecolor_version: false,
            use_oc_cli: false,
            kubectl_cmd: DEFAULT_KUBECTL_COMMAND.to_string(),
        }
    }
}

impl KubecolorConfig {
    /// Strips wrapper switches from `args` and reads [`KUBECTL_COMMAND_ENV`]
    /// from the process environment.
    ///
    /// Returns the arguments to forward together with the configuration.
    pub fn resolve<A: AsRef<OsStr>>(args: Vec<A>) -> (Vec<A>, Self) {
        Self::resolve_with_env(args, |key| std::env::var(key).ok())
    }

    /// Like [`resolve`](Self::resolve), with an injected environment lookup.
    pub fn resolve_with_env<A, F>(mut args: Vec<A>, env: F) -> (Vec<A>, Self)
    where
        A: AsRef<OsStr>,
        F: Fn(&str) -> Option<String>,
    {
        let [plain, light_background, force_color, show_kubecolor_version, use_oc_cli] =
            WRAPPER_FLAGS.map(|flag| take_bool_flag(&mut args, flag));

        let kubectl_cmd = if use_oc_cli {
            OC_COMMAND.to_string()
        } else {
            env(KUBECTL_COMMAND_ENV)
                .filter(|cmd| !cmd.is_empty())
                .unwrap_or_else(|| DEFAULT_KUBECTL_COMMAND.to_string())
        };

        let config = Self {
            plain,
            dark_background: !light_background,
            force_color,
            show_kubecolor_version,
            use_oc_cli,
            kubectl_cmd,
        };
        (args, config)
    }
}

/// Removes the first occurrence of `flag`, reporting whether it was present.
fn take_bool_flag<A: AsRef<OsStr>>(args: &mut Vec<A>, flag: &str) -> bool {
    match args.iter().position(|arg| arg.as_ref() == flag) {
        Some(index) => {
            args.remove(index);
            true
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_no_wrapper_flags() {
        let (args, config) = KubecolorConfig::resolve_with_env(strings(&["get", "pods"]), no_env);
        assert_eq!(args, strings(&["get", "pods"]));
        assert_eq!(config, KubecolorConfig::default());
        assert!(config.dark_background);
        assert_eq!(config.kubectl_cmd, "kubectl");
    }

    #[test]
    fn test_plain_light_force_are_stripped() {
        let (args, config) = KubecolorConfig::resolve_with_env(
            strings(&["get", "pods", "--plain", "--light-background", "--force-colors"]),
            no_env,
        );
        assert_eq!(args, strings(&["get", "pods"]));
        assert!(config.plain);
        assert!(!config.dark_background);
        assert!(config.force_color);
        assert_eq!(config.kubectl_cmd, "kubectl");
    }

    #[test]
    fn test_flags_are_stripped_at_any_position() {
        let (args, config) = KubecolorConfig::resolve_with_env(
            strings(&["--kubecolor-version", "get", "--plain", "pods"]),
            no_env,
        );
        assert_eq!(args, strings(&["get", "pods"]));
        assert!(config.plain);
        assert!(config.show_kubecolor_version);
    }

    #[test]
    fn test_kubectl_command_from_env() {
        let env = |key: &str| (key == KUBECTL_COMMAND_ENV).then(|| "kubectl.1.19".to_string());
        let (args, config) =
            KubecolorConfig::resolve_with_env(strings(&["get", "pods", "--plain"]), env);
        assert_eq!(args, strings(&["get", "pods"]));
        assert!(config.plain);
        assert_eq!(config.kubectl_cmd, "kubectl.1.19");
    }

    #[test]
    fn test_empty_env_falls_back_to_kubectl() {
        let env = |_: &str| Some(String::new());
        let (_, config) = KubecolorConfig::resolve_with_env(strings(&["get"]), env);
        assert_eq!(config.kubectl_cmd, "kubectl");
    }

    #[test]
    fn test_use_oc_cli_beats_env() {
        let env = |_: &str| Some("customkubectl".to_string());
        let (args, config) =
            KubecolorConfig::resolve_with_env(strings(&["get", "pods", "--use-oc-cli"]), env);
        assert_eq!(args, strings(&["get", "pods"]));
        assert!(config.use_oc_cli);
        assert_eq!(config.kubectl_cmd, "oc");

        let (_, config) = KubecolorConfig::resolve_with_env(strings(&["get", "pods"]), env);
        assert!(!config.use_oc_cli);
        assert_eq!(config.kubectl_cmd, "customkubectl");
    }

    #[test]
    fn test_only_first_occurrence_is_removed() {
        let (args, config) =
            KubecolorConfig::resolve_with_env(strings(&["--plain", "get", "--plain"]), no_env);
        assert!(config.plain);
        assert_eq!(args, strings(&["get", "--plain"]));
    }

    #[test]
    fn test_every_wrapper_flag_is_stripped() {
        let mut raw = strings(&["get", "pods"]);
        raw.extend(strings(&WRAPPER_FLAGS));
        let (args, config) = KubecolorConfig::resolve_with_env(raw, no_env);
        assert_eq!(args, strings(&["get", "pods"]));
        assert!(config.plain);
        assert!(!config.dark_background);
        assert!(config.force_color);
        assert!(config.show_kubecolor_version);
        assert!(config.use_oc_cli);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_arguments_are_kept_verbatim() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let file = OsString::from_vec(b"pod-\xff.yaml".to_vec());
        let raw = vec![
            OsString::from("apply"),
            OsString::from("--force-colors"),
            OsString::from("-f"),
            file.clone(),
        ];
        let (args, config) = KubecolorConfig::resolve_with_env(raw, no_env);
        assert!(config.force_color);
        assert_eq!(args, vec![OsString::from("apply"), OsString::from("-f"), file]);
    }

    #[test]
    #[serial]
    fn test_resolve_reads_process_environment() {
        // SAFETY: serialized with every other test that touches the environment.
        unsafe { std::env::set_var(KUBECTL_COMMAND_ENV, "kubectl-from-env") };
        let (_, config) = KubecolorConfig::resolve(strings(&["get", "pods"]));
        unsafe { std::env::remove_var(KUBECTL_COMMAND_ENV) };
        assert_eq!(config.kubectl_cmd, "kubectl-from-env");
    }
}
