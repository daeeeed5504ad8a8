use clap::{Parser, Subcommand};
use std::path::PathBuf;

use lovecalc::calculator::{CalcError, Calculator, Outcome};
use lovecalc::clock::{Clock, SystemClock};
use lovecalc::history::{JsonFileStore, ResultStore};
use lovecalc::scoring::RawInput;
use lovecalc::share::{self, ShareTarget};

const EXIT_SUCCESS: i32 = 0;
const EXIT_INPUT: i32 = 1;
const EXIT_IO: i32 = 2;
const EXIT_CONFIG: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Calculate the compatibility of two names
    Calc {
        /// First name
        name_a: String,
        /// Second name
        name_b: String,
        /// Birthdate of the first person (YYYY-MM-DD)
        #[arg(long)]
        date_a: Option<String>,
        /// Birthdate of the second person (YYYY-MM-DD)
        #[arg(long)]
        date_b: Option<String>,
        /// Don't add the result to recent calculations
        #[arg(long)]
        no_save: bool,
        #[command(flatten)]
        share: ShareArgs,
    },
    /// List recent calculations (default if no subcommand)
    Recent {
        /// Forget all recent calculations
        #[arg(long)]
        clear: bool,
    },
    /// Re-run a recent calculation by its index number
    Again {
        /// Index number of the calculation (1-based, as shown in recent)
        index: usize,
        #[command(flatten)]
        share: ShareArgs,
    },
    /// Calculate the result encoded in a share link
    Link {
        /// Share link, e.g. "https://lovecalc.app/?a=Alice&b=Bob"
        url: String,
        #[command(flatten)]
        share: ShareArgs,
    },
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}

#[derive(clap::Args, Debug, Default)]
struct ShareArgs {
    /// Copy the share link to the clipboard
    #[arg(long)]
    copy: bool,
    /// Open a share dialog in the browser
    #[arg(long, value_enum)]
    share: Option<ShareTarget>,
}

#[derive(Parser, Debug)]
#[command(name = "lovecalc")]
#[command(about = "Deterministic name compatibility calculator", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to config file (defaults to ~/.config/lovecalc/config.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn main() {
    let cli = Cli::parse();
    lovecalc::logging::init(cli.verbose);
    let command = cli.command.unwrap_or(Commands::Recent { clear: false });

    let config_path = cli.config.map(PathBuf::from);

    // Init writes the config, so it runs before loading one
    if let Commands::Init { force } = command {
        let path = match config_path {
            Some(p) => Ok(p),
            None => lovecalc::config::get_config_path(),
        };
        let path = match path {
            Ok(p) => p,
            Err(e) => {
                eprintln!("Config error: {}", e);
                std::process::exit(EXIT_CONFIG);
            }
        };
        if let Err(e) = lovecalc::config::write_default_config(&path, force) {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
        println!("Wrote default config to {}", path.display());
        std::process::exit(EXIT_SUCCESS);
    }

    let config = match lovecalc::config::load_config(config_path) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    };

    if let Err(errors) = lovecalc::config::validate_config(&config) {
        eprintln!("Config errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_CONFIG);
    }

    let history_path = match lovecalc::history::get_history_path() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("History error: {:#}", e);
            std::process::exit(EXIT_IO);
        }
    };
    tracing::debug!(path = %history_path.display(), "using history file");

    let clock = SystemClock;
    let store = JsonFileStore::new(history_path);
    let use_colors = lovecalc::output::should_use_colors(config.colors);

    let code = match command {
        Commands::Calc {
            name_a,
            name_b,
            date_a,
            date_b,
            no_save,
            share,
        } => {
            let mut calc = Calculator::new(&clock, &store, &config);
            if no_save {
                calc = calc.without_saving();
            }
            let raw = RawInput::new(name_a, name_b, date_a, date_b);
            report(calc.calculate(&raw), &share, use_colors)
        }
        Commands::Again { index, share } => {
            let calc = Calculator::new(&clock, &store, &config);
            report(calc.rerun(index), &share, use_colors)
        }
        Commands::Link { url, share } => {
            let calc = Calculator::new(&clock, &store, &config);
            report(calc.from_link(&url), &share, use_colors)
        }
        Commands::Recent { clear } => recent(&store, &clock, clear, use_colors),
        Commands::Init { .. } => EXIT_SUCCESS,
    };

    std::process::exit(code);
}

/// Print a calculation result (or its errors) and run any share actions.
/// Returns the process exit code.
fn report(result: Result<Outcome, CalcError>, share_args: &ShareArgs, use_colors: bool) -> i32 {
    let outcome = match result {
        Ok(outcome) => outcome,
        Err(CalcError::Invalid(errors)) => {
            eprintln!("Invalid input:");
            eprintln!("{}", lovecalc::output::format_field_errors(&errors, use_colors));
            return EXIT_INPUT;
        }
        Err(e @ (CalcError::Link(_) | CalcError::NoSuchEntry { .. })) => {
            eprintln!("{}", e);
            return EXIT_INPUT;
        }
        Err(CalcError::Storage(e)) => {
            eprintln!("History error: {:#}", e);
            return EXIT_IO;
        }
    };

    if outcome.celebrate {
        println!("{}", lovecalc::output::format_celebration(use_colors));
        println!();
    }
    println!("{}", lovecalc::output::format_result_card(&outcome, use_colors));

    let mut code = EXIT_SUCCESS;

    if share_args.copy {
        match share::copy_to_clipboard(&outcome.link) {
            Ok(()) => println!("Link copied to clipboard!"),
            Err(e) => {
                eprintln!("{:#}", e);
                code = EXIT_IO;
            }
        }
    }

    if let Some(target) = share_args.share {
        let text = share::share_text(
            &outcome.input.name_a,
            &outcome.input.name_b,
            outcome.score,
            &outcome.link,
        );
        if let Err(e) = share::open_share_dialog(target, &text, &outcome.link) {
            eprintln!("Failed to share: {:#}", e);
            code = EXIT_IO;
        }
    }

    code
}

fn recent(store: &dyn ResultStore, clock: &dyn Clock, clear: bool, use_colors: bool) -> i32 {
    let mut history = match store.load() {
        Ok(h) => h,
        Err(e) => {
            eprintln!("History error: {:#}", e);
            return EXIT_IO;
        }
    };

    if clear {
        let count = history.len();
        history.clear();
        if let Err(e) = store.save(&history) {
            eprintln!("History error: {:#}", e);
            return EXIT_IO;
        }
        println!("Cleared {} recent calculation(s).", count);
        return EXIT_SUCCESS;
    }

    println!(
        "{}",
        lovecalc::output::format_recent_table(&history.recent, clock.now(), use_colors)
    );
    EXIT_SUCCESS
}
