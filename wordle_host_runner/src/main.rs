use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    process,
};

use clap::{Parser, ValueEnum};
use log::{error, info};
use owo_colors::{AnsiColors, OwoColorize, Stream};
use rand::{rngs::StdRng, Rng, SeedableRng};
use wordle_host::{
    api, Feedback, GameConfig, Grade, Mode, SessionStore, Word, WordList, WordleError,
};

/// Host Wordle games on the terminal
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a newline-delimited word list, instead of the built-in one
    #[arg(short = 'w', long = "words")]
    words: Option<PathBuf>,

    /// The kind of game to play
    #[arg(short, long, value_enum, default_value_t = GameMode::HostCheat)]
    mode: GameMode,

    /// Guesses allowed before the game is lost
    #[arg(long)]
    max_guesses: Option<usize>,

    /// Require every guess to use what the previous one revealed
    #[arg(long)]
    hard: bool,

    /// Answer JSON requests line by line instead of playing interactively
    #[arg(long)]
    json: bool,

    /// Seed for session ids and answers
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum GameMode {
    HostCheat,
    Normal,
    Infinite,
}

impl From<GameMode> for Mode {
    fn from(mode: GameMode) -> Self {
        match mode {
            GameMode::HostCheat => Mode::HostCheat,
            GameMode::Normal => Mode::Normal,
            GameMode::Infinite => Mode::Infinite,
        }
    }
}

impl Cli {
    fn config(&self) -> GameConfig {
        let config = GameConfig::new(self.mode.into()).hard_mode(self.hard);
        match self.max_guesses {
            Some(n) => config.max_guesses(n),
            None => config,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(&cli) {
        error!("{:?}", e);
        eprintln!("error: {}", e);
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), WordleError> {
    let words = match &cli.words {
        Some(path) => WordList::from_file(path)?,
        None => WordList::embedded(),
    };
    info!("loaded {} words", words.len());

    let rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let store = SessionStore::with_rng(words, rng);

    let stdin = io::stdin();
    let stdout = io::stdout();
    if cli.json {
        serve(&store, stdin.lock(), stdout.lock())
    } else {
        play(&store, cli.config(), stdin.lock(), stdout.lock())
    }
}

fn serve<R: Rng>(
    store: &SessionStore<R>,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), WordleError> {
    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        writeln!(output, "{}", api::handle_line(store, &line)?)?;
        output.flush()?;
    }

    Ok(())
}

fn play<R: Rng>(
    store: &SessionStore<R>,
    config: GameConfig,
    input: impl BufRead,
    mut output: impl Write,
) -> Result<(), WordleError> {
    let infinite = config.mode() == Mode::Infinite;
    let id = store.create(config)?;

    writeln!(output, "Guess the five letter word.")?;
    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        let outcome = match store.submit_guess(&id, line) {
            Ok(outcome) => outcome,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        let guess: Word = line.parse()?;
        write!(
            output,
            "{}  {}",
            tiles(&guess, &outcome.feedback),
            outcome.feedback
        )?;
        if infinite {
            write!(output, "  score {}", outcome.tally.score())?;
        }
        writeln!(output)?;

        if outcome.won {
            writeln!(output, "Solved in {} guesses.", store.history(&id)?.len())?;
            break;
        }
        if let Some(answer) = outcome.answer {
            writeln!(output, "Out of guesses. The word was {}.", answer)?;
            break;
        }
    }

    Ok(())
}

fn tiles(guess: &Word, feedback: &Feedback) -> String {
    guess
        .chars()
        .zip(feedback.iter())
        .map(|(letter, grade)| {
            let color = match grade {
                Grade::Hit => AnsiColors::Green,
                Grade::Present => AnsiColors::Yellow,
                Grade::Miss => AnsiColors::BrightBlack,
            };
            let tile = format!(" {} ", letter);
            tile.if_supports_color(Stream::Stdout, |text| text.on_color(color))
                .to_string()
        })
        .collect()
}
