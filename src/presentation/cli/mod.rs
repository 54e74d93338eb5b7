use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::exit;
use std::time::Duration;

use crate::application::use_cases::mirror_group::{
    MirrorConfig, MirrorGroupUseCase, MirrorReport, DEFAULT_HOST,
};
use crate::common::logging::LoggingConfig;
use crate::common::result::{ClonerResult, ClonerResultExt};
use crate::domain::value_objects::group_path::GroupPath;

const VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("GIT_HASH"),
    " ",
    env!("BUILD_DATE"),
    ")"
);

/// gitlab-cloner - mirror every repository of a GitLab group
#[derive(Parser, Debug)]
#[command(name = "gitlab-cloner")]
#[command(about = "Clone or fetch every repository of a GitLab group")]
#[command(version = VERSION)]
pub struct Cli {
    /// GitLab group name
    #[arg(short, long)]
    pub group: String,

    /// GitLab host name
    #[arg(short = 'H', long, default_value = DEFAULT_HOST)]
    pub host: String,

    /// GitLab access token
    #[arg(short = 't', long, env = "GITLAB_ACCESS_TOKEN", hide_env_values = true)]
    pub access_token: String,

    /// Target directory
    #[arg(short = 'd', long, default_value = ".")]
    pub target_directory: PathBuf,

    /// Index of the first requested listing page
    #[arg(long, default_value_t = 0)]
    pub start_page: u32,

    /// HTTP request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout: u64,

    /// Show what would be cloned or fetched without running git
    #[arg(long)]
    pub dry_run: bool,

    /// Exit with a non-zero status when listing or synchronization fails
    #[arg(long)]
    pub fail_on_error: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    /// Settings for the mirror run described by the flags.
    pub fn mirror_config(&self) -> ClonerResult<MirrorConfig> {
        let group = GroupPath::new(&self.group)?;

        Ok(MirrorConfig::new(group, self.access_token.clone())
            .with_host(self.host.trim())
            .with_target_directory(&self.target_directory)
            .with_start_page(self.start_page)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_dry_run(self.dry_run))
    }

    pub fn logging_config(&self) -> LoggingConfig {
        LoggingConfig::default()
            .with_verbose(self.verbose)
            .with_ansi(!self.no_color)
    }
}

/// CLI application runner
pub struct CliApp {
    cli: Cli,
}

impl CliApp {
    pub fn new() -> Self {
        Self { cli: Cli::parse() }
    }

    pub fn from_cli(cli: Cli) -> Self {
        Self { cli }
    }

    pub fn logging_config(&self) -> LoggingConfig {
        self.cli.logging_config()
    }

    /// Run one mirror pass.
    ///
    /// Failures are logged. They only change the exit status with
    /// `--fail-on-error`.
    pub async fn run(self) -> anyhow::Result<()> {
        colored::control::set_override(!self.cli.no_color);

        match self.execute().await.to_option_logged() {
            Some(report) => {
                self.print_summary(&report);
                Ok(())
            }
            None if self.cli.fail_on_error => {
                eprintln!("{} mirror run failed", "Error:".red().bold());
                exit(1);
            }
            None => Ok(()),
        }
    }

    async fn execute(&self) -> ClonerResult<MirrorReport> {
        let config = self.cli.mirror_config()?;
        tracing::debug!(?config, "Starting mirror run");

        MirrorGroupUseCase::from_config(&config)?.execute().await
    }

    fn print_summary(&self, report: &MirrorReport) {
        let verb = if report.sync.dry_run {
            "Planned"
        } else {
            "Mirrored"
        };
        println!(
            "{} {} {} projects ({} cloned, {} fetched)",
            "✓".green().bold(),
            verb,
            report.listed_count,
            report.sync.cloned_count,
            report.sync.fetched_count
        );
    }
}

impl Default for CliApp {
    fn default() -> Self {
        Self::new()
    }
}
