//! Distle Solver - CLI
//!
//! Distle solver with TUI and CLI modes. Feedback is the edit distance to the
//! secret plus the canonical operation sequence (replace, transpose, insert,
//! delete).

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use distle_solver::{
    commands::{
        SolveConfig, analyze_word, compare_words, print_test_all_statistics, run_benchmark,
        run_simple, run_test_all, sample_targets, solve_word,
    },
    core::Word,
    game::DEFAULT_MAX_GUESSES,
    output::{
        print_analysis_result, print_benchmark_result, print_distance_report, print_solve_result,
    },
    solver::{PlayerConfig, StrategyType},
    wordlists::WordlistSource,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "distle_solver",
    about = "Distle solver: guesses a secret word from edit-distance feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Strategy: spread (default), central, partition, random
    #[arg(short, long, global = true, default_value = "spread")]
    strategy: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Opening guess (ignored if not in the dictionary)
    #[arg(short = 'o', long, global = true)]
    opening: Option<String>,

    /// Seed for the random strategy and benchmark sampling
    #[arg(long, global = true, default_value_t = 0)]
    seed: u64,

    /// Guesses allowed per game
    #[arg(short = 'm', long, global = true, default_value_t = DEFAULT_MAX_GUESSES)]
    max_guesses: usize,

    /// Log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", global = true, action = clap::ArgAction::Count)]
    verbosity: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive solver without TUI)
    Simple,

    /// Solve a specific secret word
    Solve {
        /// The secret word to solve
        word: String,

        /// Show candidate counts and scores per turn
        #[arg(short, long)]
        details: bool,
    },

    /// Analyze a word as an opening guess
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Show the edit distance and canonical operations between two words
    Distance {
        /// Source word (the guess)
        source: String,

        /// Target word (the secret)
        target: String,

        /// Also print the full distance table
        #[arg(short, long)]
        table: bool,
    },

    /// Benchmark solver performance on a random sample
    Benchmark {
        /// Number of random words to test
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,
    },

    /// Test solver on every dictionary word
    TestAll {
        /// Limit number of words to test
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

/// Install the stderr log subscriber
///
/// `RUST_LOG` wins when set; otherwise `-v` picks the level.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("distle_solver={level}")));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn player_config(cli: &Cli) -> Result<PlayerConfig> {
    let opening = cli
        .opening
        .as_deref()
        .map(Word::new)
        .transpose()
        .context("Invalid opening word")?;

    Ok(PlayerConfig {
        strategy: StrategyType::from_name(&cli.strategy.to_lowercase(), cli.seed),
        opening,
    })
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbosity);

    let source = WordlistSource::from_arg(&cli.wordlist);
    let dictionary = source
        .load()
        .with_context(|| format!("Failed to load dictionary '{}'", cli.wordlist))?;
    let player = player_config(&cli)?;

    tracing::info!(
        words = dictionary.len(),
        strategy = %player.strategy,
        max_guesses = cli.max_guesses,
        "configured solver"
    );

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play_command(&dictionary, player, cli.max_guesses),
        Commands::Simple => run_simple(&dictionary, cli.max_guesses, &player),
        Commands::Solve { word, details } => {
            let mut config = SolveConfig::new(word);
            config.max_guesses = cli.max_guesses;
            let record = solve_word(config, &dictionary, &player)?;
            print_solve_result(&record, details);
            Ok(())
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary, &dictionary)?;
            print_analysis_result(&result);
            Ok(())
        }
        Commands::Distance {
            source,
            target,
            table,
        } => {
            let report = compare_words(&source, &target, table)?;
            print_distance_report(&report);
            Ok(())
        }
        Commands::Benchmark { count } => {
            println!(
                "Running benchmark on {count} random words (seed {}, strategy {})...",
                cli.seed, player.strategy
            );
            let targets = sample_targets(&dictionary, count, cli.seed);
            let result = run_benchmark(&dictionary, &targets, &player, cli.max_guesses)?;
            print_benchmark_result(&result);
            Ok(())
        }
        Commands::TestAll { limit } => {
            println!("\n{}", "═".repeat(70));
            println!(" Comprehensive Distle Solver Test ");
            println!("{}", "═".repeat(70));
            println!("\nTesting against {} dictionary words", dictionary.len());
            println!("Strategy: {}", player.strategy);
            if let Some(word) = &player.opening {
                println!("Opening word: {word}");
            }
            println!();

            let stats = run_test_all(&dictionary, &player, cli.max_guesses, limit)?;
            print_test_all_statistics(&stats);
            Ok(())
        }
    }
}

fn run_play_command(dictionary: &[Word], player: PlayerConfig, max_guesses: usize) -> Result<()> {
    use distle_solver::interactive::{App, run_tui};

    let app = App::new(dictionary, player, max_guesses)?;
    run_tui(app)
}
