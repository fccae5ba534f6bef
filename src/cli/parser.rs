//! CLI argument parsing with clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::services::notifications::Priority;

/// Send push notifications through the configured backend
#[derive(Parser, Debug)]
#[command(name = "push-notify")]
#[command(about = "Send push notifications through the configured backend")]
#[command(long_about = "
push-notify runs the push notification tool outside of an agent runtime.
It reads the same plugins.entries configuration the runtime uses, which makes
it handy for checking a backend before wiring it into an agent.

EXAMPLES:
    # Show whether the plugin is configured
    push-notify status

    # Send a test notification
    push-notify send --message \"Build finished\"

    # Use a specific configuration file and high priority
    push-notify --config /etc/push-notify.toml send -m \"Disk full\" --priority high

    # Attach extra data
    push-notify send -m \"Deploy done\" --data '{\"env\":\"prod\"}'
")]
#[command(version = crate::clap_long_version())]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (TOML)
    ///
    /// Replaces the layered config/default.toml + config/local.toml lookup.
    #[arg(short, long, value_name = "FILE", env = "PUSH_NOTIFY_CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Send one notification and print the result
    Send {
        /// Notification body
        #[arg(short, long)]
        message: String,

        /// Notification title (defaults to the configured default title)
        #[arg(short, long)]
        title: Option<String>,

        /// Delivery priority
        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,

        /// Extra data as a JSON object
        #[arg(short, long, value_name = "JSON")]
        data: Option<String>,
    },

    /// Show configuration status without contacting the backend
    Status,
}

/// Priority values accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Normal,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(arg: PriorityArg) -> Self {
        match arg {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Normal => Priority::Normal,
            PriorityArg::High => Priority::High,
        }
    }
}

impl Cli {
    /// Log level implied by `--verbose` / `--quiet`, if any
    pub fn log_level_override(&self) -> Option<&'static str> {
        if self.verbose {
            Some("debug")
        } else if self.quiet {
            Some("error")
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_send() {
        let cli = Cli::try_parse_from([
            "push-notify",
            "send",
            "--message",
            "hello",
            "--priority",
            "high",
            "--data",
            r#"{"k":"v"}"#,
        ])
        .unwrap();

        match cli.command {
            Commands::Send {
                message,
                title,
                priority,
                data,
            } => {
                assert_eq!(message, "hello");
                assert_eq!(title, None);
                assert_eq!(priority, Some(PriorityArg::High));
                assert_eq!(data.as_deref(), Some(r#"{"k":"v"}"#));
            }
            other => panic!("Expected Send, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_status_with_config() {
        let cli =
            Cli::try_parse_from(["push-notify", "-c", "/tmp/push.toml", "-v", "status"]).unwrap();

        assert!(matches!(cli.command, Commands::Status));
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/push.toml")));
        assert_eq!(cli.log_level_override(), Some("debug"));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["push-notify", "-v", "-q", "status"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_priority_rejected() {
        let result = Cli::try_parse_from(["push-notify", "send", "-m", "hi", "-p", "urgent"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_priority_conversion() {
        assert_eq!(Priority::from(PriorityArg::Low), Priority::Low);
        assert_eq!(Priority::from(PriorityArg::Normal), Priority::Normal);
    }
}
