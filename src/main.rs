//! WordQuest Jr entry point
//!
//! Native builds run the quiz in the terminal. The browser build is driven
//! from the page through the `WordQuest` class in the library.

#[cfg(not(target_arch = "wasm32"))]
mod terminal {
    use std::io::{self, BufRead, Write};
    use std::path::PathBuf;
    use std::process::ExitCode;

    use clap::Parser;

    use word_quest_jr::audio::Silent;
    use word_quest_jr::quiz::{Category, Difficulty, QuizError};
    use word_quest_jr::{Quiz, Settings};

    #[derive(Debug, Parser)]
    #[command(name = "word-quest-jr", about = "Picture word quiz for little learners")]
    struct Args {
        /// JSON settings file
        #[arg(long)]
        config: Option<PathBuf>,
        /// all, animals, colors, food or actions
        #[arg(long)]
        category: Option<Category>,
        /// short, medium or mix
        #[arg(long)]
        difficulty: Option<Difficulty>,
        /// Choices per round (2-4)
        #[arg(long)]
        options: Option<u8>,
        /// Rounds per session (5, 10 or 15)
        #[arg(long)]
        rounds: Option<u32>,
        /// Hide the pictures
        #[arg(long)]
        hard: bool,
        /// Seed for a repeatable session
        #[arg(long)]
        seed: Option<u64>,
    }

    fn load_settings(args: &Args) -> Result<Settings, Box<dyn std::error::Error>> {
        let mut settings = match &args.config {
            Some(path) => Settings::from_json(&std::fs::read_to_string(path)?)?,
            None => Settings::default(),
        };
        if let Some(category) = args.category {
            settings.category = category;
        }
        if let Some(difficulty) = args.difficulty {
            settings.difficulty = difficulty;
        }
        if let Some(options) = args.options {
            settings.options_count = options;
        }
        if let Some(rounds) = args.rounds {
            settings.total_rounds = rounds;
        }
        settings.hard_mode |= args.hard;
        settings.validate()?;
        Ok(settings)
    }

    fn print_round(quiz: &Quiz) {
        let view = quiz.view();
        println!();
        println!(
            "Round {}/{}  Score: {}  Streak: {}",
            view.round, view.total_rounds, view.score, view.streak
        );
        println!("What is this word?");
        if let Some(symbol) = view.symbol {
            println!("    {symbol}");
        }
        if let Some(hint) = view.hint {
            println!("Hint: {hint}");
        }
        for (i, choice) in view.choices.iter().enumerate() {
            println!("  [{}] {choice}", i + 1);
        }
        if !view.stickers.is_empty() {
            println!("Sticker book: {}", view.stickers.join(" "));
        }
        print!("Pick a number (h = hint, s = sentence, r = reset, q = quit): ");
        let _ = io::stdout().flush();
    }

    fn print_summary(quiz: &Quiz) {
        let Some(summary) = quiz.summary() else { return };
        println!();
        println!("Great job!");
        println!(
            "You scored {} out of {}.",
            summary.score, summary.total_rounds
        );
        let perfect = if summary.perfect { "Perfect! " } else { "" };
        println!("{perfect}{}", summary.verdict.message());
        if !summary.stickers.is_empty() {
            println!("You earned stickers: {}", summary.stickers.join(" "));
        }
        print!("Play again? (r = reset, q = quit): ");
        let _ = io::stdout().flush();
    }

    fn prompt(quiz: &Quiz) {
        if quiz.is_finished() {
            print_summary(quiz);
        } else {
            print_round(quiz);
        }
    }

    pub fn run() -> ExitCode {
        env_logger::init();
        let args = Args::parse();

        let settings = match load_settings(&args) {
            Ok(s) => s,
            Err(e) => {
                log::error!("Bad settings: {e}");
                return ExitCode::FAILURE;
            }
        };
        let seed = args.seed.unwrap_or_else(rand::random);
        let mut quiz = match Quiz::new(settings, seed, Box::new(Silent)) {
            Ok(q) => q,
            Err(e) => {
                log::error!("Cannot start quiz: {e}");
                return ExitCode::FAILURE;
            }
        };

        prompt(&quiz);
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match line.trim() {
                "q" => break,
                "h" => quiz.toggle_hint(),
                "s" => println!("{}", quiz.current().example_sentence),
                "r" => {
                    if let Err(e) = quiz.reset() {
                        log::error!("Reset failed: {e}");
                    }
                }
                input => match input.parse::<usize>() {
                    Ok(n) if (1..=quiz.choices().len()).contains(&n) => {
                        let word = quiz.choices()[n - 1];
                        match quiz.pick(word) {
                            Ok(outcome) => {
                                if outcome.correct {
                                    println!("Yes! That's {word}.");
                                } else {
                                    println!("Oops! It was {}.", outcome.expected);
                                }
                                if let Some(reward) = outcome.reward {
                                    println!("New sticker: {}", reward.symbol);
                                }
                            }
                            Err(QuizError::SessionFinished) => {}
                            Err(e) => log::error!("{e}"),
                        }
                    }
                    _ => println!("Type one of the numbers shown."),
                },
            }
            prompt(&quiz);
        }
        ExitCode::SUCCESS
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> std::process::ExitCode {
    terminal::run()
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is `wasm_main` in the library, this is just to satisfy the compiler
}
