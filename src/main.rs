use clap::{Parser, ValueEnum};
use oche::controller::{Controller, Turn};
use oche::display::format_throws;
use oche::runtime::StdinLineSource;
use oche::session::Mode;
use std::error::Error;
use std::io::{self, BufRead, Write};
use std::time::Duration;
use tracing_subscriber::EnvFilter;

/// darts checkout practice in the terminal
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "Practice darts checkout finishing: the program deals random targets between 2 and 170 and you answer with up to three darts in compact notation, ending on a double. Timed modes race each answer against a per-round deadline and keep score."
)]
pub struct Cli {
    /// practice mode; prompts interactively when omitted
    #[clap(short, long, value_enum)]
    mode: Option<PracticeMode>,
}

#[derive(Debug, Copy, Clone, ValueEnum, strum_macros::Display)]
pub enum PracticeMode {
    Free,
    Timed20,
    Timed10,
    Timed5,
}

impl PracticeMode {
    fn as_mode(&self) -> Mode {
        match self {
            PracticeMode::Free => Mode::Free,
            PracticeMode::Timed20 => Mode::Timed {
                deadline: Duration::from_secs(20),
            },
            PracticeMode::Timed10 => Mode::Timed {
                deadline: Duration::from_secs(10),
            },
            PracticeMode::Timed5 => Mode::Timed {
                deadline: Duration::from_secs(5),
            },
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    print_banner();

    let practice_mode = match cli.mode {
        Some(mode) => mode,
        None => match choose_mode()? {
            Some(mode) => mode,
            None => return Ok(()),
        },
    };
    println!("Mode: {practice_mode}");
    println!();
    let mode = practice_mode.as_mode();

    // The line source owns stdin from here on; the menu above used plain
    // blocking reads before the background reader existed.
    let mut controller = Controller::new(mode, StdinLineSource::new(), rand::thread_rng());

    loop {
        match controller.mode() {
            Mode::Free => println!("Checkout: {}", controller.target()),
            Mode::Timed { deadline } => println!(
                "Checkout: {}   [score {} | {}s to answer]",
                controller.target(),
                controller.score(),
                deadline.as_secs()
            ),
        }
        print!("Your darts: ");
        io::stdout().flush()?;

        let timed = controller.mode().is_timed();
        match controller.play_turn() {
            Turn::Solved { throws, .. } => {
                println!("✅ Correct!");
                println!("Solution: {}", format_throws(&throws));
                println!();
            }
            Turn::Rejected(err) => {
                println!("❌ {err}");
                if !controller.is_over() {
                    println!("Try again...");
                }
            }
            Turn::NoInput => {
                if timed {
                    println!("❌ No input provided");
                } else {
                    println!("Please enter your darts or 'quit' to exit");
                }
            }
            Turn::TimedOut => {
                println!();
                println!("⏱  Time's up!");
            }
            Turn::Quit => {
                println!("Thanks for practicing! 🎯");
            }
        }

        if controller.is_over() {
            if timed {
                println!("Final score: {}", controller.score());
            }
            return Ok(());
        }
    }
}

fn print_banner() {
    println!("🎯 Darts Checkout Practice");
    println!("==============================");
    println!("Enter your darts using notation like: t20s20d20 or t18db");
    println!("s = single, d = double, t = triple");
    println!("db = double bull (50), ob = outer bull (25)");
    println!("Examples:");
    println!("  t20s20d20 = Triple 20, Single 20, Double 20");
    println!("  t18db = Triple 18, Double Bull");
    println!("Type 'quit' to exit");
    println!();
}

/// Interactive mode menu. `None` means the user backed out (quit or EOF).
fn choose_mode() -> io::Result<Option<PracticeMode>> {
    let stdin = io::stdin();
    loop {
        println!("Select mode:");
        println!("  1) Free play (no timer)");
        println!("  2) Timed - 20 seconds per checkout");
        println!("  3) Timed - 10 seconds per checkout");
        println!("  4) Timed - 5 seconds per checkout");
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let choice = line.trim();
        if choice.eq_ignore_ascii_case("quit") {
            return Ok(None);
        }
        match choice {
            "" | "1" => return Ok(Some(PracticeMode::Free)),
            "2" => return Ok(Some(PracticeMode::Timed20)),
            "3" => return Ok(Some(PracticeMode::Timed10)),
            "4" => return Ok(Some(PracticeMode::Timed5)),
            other => println!("'{other}' is not an option, choose 1-4"),
        }
    }
}
