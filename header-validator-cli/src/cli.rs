use std::io::Write;
use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use colored::Colorize;
use header_validator::{ConfigError, ScanConfig, ValidationReport, output, validate_tree};

use crate::logging;

/// Exit code when at least one file fails validation.
pub const EXIT_FAILED: i32 = 1;
/// Exit code for configuration errors (bad root, bad exclude pattern).
pub const EXIT_CONFIG: i32 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Human,
    Json,
}

#[derive(Debug, Parser)]
#[command(
    name = "header-check",
    version,
    about = "Check that source files start with a Purpose/Author/Date/Modified By header"
)]
pub struct Cli {
    /// Directory (or single source file) to check
    pub root: PathBuf,

    /// Directory names or glob patterns to exclude (repeatable, comma-separated)
    #[arg(short, long = "exclude", value_delimiter = ',')]
    pub exclude: Vec<String>,

    /// Do not skip .git, node_modules and target
    #[arg(long)]
    pub no_default_excludes: bool,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = Format::Human)]
    pub format: Format,

    /// Also list passing files with their confirming header line
    #[arg(long)]
    pub show_passed: bool,

    /// Follow symbolic links (files must still resolve inside ROOT)
    #[arg(long)]
    pub follow_links: bool,

    /// Maximum file size in bytes
    #[arg(long, default_value_t = 10_485_760)]
    pub max_file_size: u64,

    /// Maximum directory depth
    #[arg(long, default_value_t = 64)]
    pub max_depth: usize,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Disable colored status lines
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn scan_config(&self) -> ScanConfig {
        let mut config = ScanConfig::new(&self.root);
        config.exclude_dirs.clone_from(&self.exclude);
        config.skip_default_dirs = !self.no_default_excludes;
        config.follow_links = self.follow_links;
        config.max_file_size = self.max_file_size;
        config.max_depth = self.max_depth;
        config
    }
}

/// Overall verdict of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Passed,
    Failed,
}

impl Status {
    pub const fn code(self) -> i32 {
        match self {
            Self::Passed => 0,
            Self::Failed => EXIT_FAILED,
        }
    }

    fn of(report: &ValidationReport) -> Self {
        if report.ok { Self::Passed } else { Self::Failed }
    }
}

/// Map a top-level error to the process exit code.
pub fn error_exit_code(err: &anyhow::Error) -> i32 {
    if err.downcast_ref::<ConfigError>().is_some() {
        EXIT_CONFIG
    } else {
        EXIT_FAILED
    }
}

pub fn run() -> Result<Status> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    if cli.no_color {
        colored::control::set_override(false);
    }

    let human = cli.format == Format::Human;
    if human {
        eprintln!(
            "{}",
            format!("Checking source headers under {}", cli.root.display())
                .as_str()
                .blue()
                .bold()
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let status = execute(&cli, &mut out)?;
    out.flush()?;

    if human {
        match status {
            Status::Passed => eprintln!("{}", "PASS".green().bold()),
            Status::Failed => eprintln!("{}", "FAIL".red().bold()),
        }
    }
    Ok(status)
}

/// Validate per `cli` and write the report to `out`.
pub fn execute(cli: &Cli, out: &mut dyn Write) -> Result<Status> {
    let config = cli.scan_config();
    tracing::info!(root = %config.root.display(), excludes = ?config.exclude_dirs, "checking source headers");

    let report = validate_tree(&config)?;
    match cli.format {
        Format::Human => output::write_human(&report, cli.show_passed, out)?,
        Format::Json => output::write_json(&report, out)?,
    }
    Ok(Status::of(&report))
}
