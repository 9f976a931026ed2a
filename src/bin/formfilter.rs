use clap::{Args, Parser, Subcommand};
use formfilter::cli::{self as prog_cli, Command};
use formfilter::config::{self, AppConfig, FileConfig, OutputMode};
use formfilter::query::{FilterSpec, Logic};
use formfilter::{DirSource, FilterError, logger};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(
    name = "formfilter",
    version,
    about = "Filter form records by field criteria",
    long_about = None
)]
struct Cli {
    /// Path to a config file (TOML)
    #[arg(
        long,
        help = "Path to a config file (TOML). If omitted, discovered files and defaults are used."
    )]
    config: Option<PathBuf>,
    /// Override the records directory (takes precedence over config)
    #[arg(long, help = "Directory holding <form>.json|.ndjson|.jsonl|.csv record files")]
    records_dir: Option<PathBuf>,
    #[arg(long, help = "Log level: off|error|warn|info|debug|trace")]
    log_level: Option<String>,
    #[arg(long, help = "Write rolling log files to this directory instead of stderr")]
    log_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Debug)]
struct CriteriaArgs {
    #[arg(help = "Form name (record file stem)")]
    form: String,
    #[arg(long = "where", short = 'w', help = "Criterion field:operator:value; repeatable")]
    wheres: Vec<String>,
    #[arg(long, help = "Criteria JSON: {\"logic\":\"OR\",\"criteria\":[...]} or a bare array")]
    criteria: Option<String>,
    #[arg(long, help = "Combine criteria with and|or (overrides JSON and config)")]
    logic: Option<Logic>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Print matching records")]
    Filter {
        #[command(flatten)]
        args: CriteriaArgs,
        #[arg(long, help = "Output: ndjson|json|ids")]
        output: Option<OutputMode>,
    },
    #[command(about = "Count matching records")]
    Count {
        #[command(flatten)]
        args: CriteriaArgs,
    },
    #[command(about = "Show field names, kinds and operators from the first record")]
    Schema {
        #[arg(help = "Form name (record file stem)")]
        form: String,
    },
    #[command(about = "List available forms")]
    Forms,
}

fn setup_logging(cfg: &AppConfig) {
    let res = match &cfg.log_dir {
        Some(dir) => logger::configure_logging(
            Some(dir.as_path()),
            Some(&cfg.log_level),
            Some(cfg.log_retention),
        ),
        None => logger::configure_stderr(Some(&cfg.log_level)),
    };
    if let Err(e) = res {
        eprintln!("warning: logging disabled: {e}");
    }
}

fn criteria_spec(args: &CriteriaArgs, cfg: &AppConfig) -> Result<FilterSpec, FilterError> {
    prog_cli::build_spec(&args.wheres, args.criteria.as_deref(), args.logic, cfg.default_logic)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let overrides = FileConfig {
        records_dir: cli.records_dir.clone(),
        log_dir: cli.log_dir.clone(),
        log_level: cli.log_level.clone(),
        ..FileConfig::default()
    };
    let cfg = match config::load(cli.config.as_deref(), overrides) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };
    setup_logging(&cfg);

    let cmd = match cli.command {
        Commands::Filter { args, output } => {
            criteria_spec(&args, &cfg).map(|spec| Command::Filter {
                form: args.form,
                spec,
                output: output.unwrap_or(cfg.output),
            })
        }
        Commands::Count { args } => {
            criteria_spec(&args, &cfg).map(|spec| Command::Count { form: args.form, spec })
        }
        Commands::Schema { form } => Ok(Command::Schema { form }),
        Commands::Forms => Ok(Command::Forms),
    };
    let cmd = match cmd {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::from(2);
        }
    };

    let source = DirSource::new(&cfg.records_dir);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let res = prog_cli::run(&source, cmd, &mut out)
        .and_then(|()| out.flush().map_err(FilterError::from));
    match res {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
