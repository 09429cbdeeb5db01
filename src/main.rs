use anyhow::{Context, Result};
use structopt::StructOpt;

mod core;
mod form;
mod game;
mod sampler;

use crate::core::{interval::Interval, rng::Rng};

/// Histograms wider than this are not printed bin by bin.
const MAX_PRINTED_BINS: u64 = 64;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "number-distance",
    about = "Guess how many integers lie in a mathematical interval"
)]
struct Opt {
    /// Seed for reproducible draws; taken from the OS when omitted
    #[structopt(long)]
    seed: Option<u64>,

    #[structopt(subcommand)]
    cmd: Command,
}

#[derive(Debug, StructOpt)]
struct IntervalArgs {
    #[structopt(long, allow_hyphen_values = true)]
    upper: i64,
    #[structopt(long, default_value = "0", allow_hyphen_values = true)]
    lower: i64,
    #[structopt(long, default_value = "(")]
    left: char,
    #[structopt(long, default_value = "]")]
    right: char,
}

impl IntervalArgs {
    fn interval(&self) -> Interval {
        Interval::new(self.lower, self.upper, self.left, self.right)
    }
}

#[derive(Debug, StructOpt)]
enum Command {
    /// Draw one integer from an interval
    Sample(IntervalArgs),
    /// Draw many integers and report how uniform they are
    Histogram {
        #[structopt(flatten)]
        interval: IntervalArgs,
        #[structopt(long, default_value = "10000")]
        trials: usize,
    },
    /// Generate a question for a game level
    Play { level: String },
    /// Submit the form with a randomly rolled answer
    Roll {
        #[structopt(long)]
        metadata: String,
    },
    /// Submit the form with the player's answer
    Answer {
        #[structopt(long)]
        metadata: String,
        #[structopt(long, allow_hyphen_values = true)]
        value: String,
    },
    /// Grade a submitted answer
    Grade {
        #[structopt(long)]
        data: String,
    },
    /// Success rate and the level the player moves to
    Stats {
        #[structopt(long)]
        correct: u64,
        #[structopt(long)]
        incorrect: u64,
        #[structopt(long, default_value = "0")]
        level: usize,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let opt = Opt::from_args();
    let mut rng = Rng::from_seed_or_entropy(opt.seed);

    match opt.cmd {
        Command::Sample(args) => {
            let value = sampler::sample(args.upper, args.left, args.right, args.lower, &mut rng)
                .with_context(|| format!("can't sample {}", args.interval()))?;
            println!("{}", value);
        }
        Command::Histogram { interval, trials } => {
            let interval = interval.interval();
            let histogram = sampler::Histogram::collect(&interval, &mut rng, trials)
                .with_context(|| format!("can't sample {}", interval))?;
            println!("{}: {} trials", interval, histogram.trials());
            if histogram.bins() <= MAX_PRINTED_BINS {
                for value in histogram.values() {
                    let count = histogram.count(value);
                    println!(
                        "{:>12} {:>8} {:.4}",
                        value,
                        count,
                        count as f64 / histogram.trials() as f64
                    );
                }
            }
            println!(
                "chi-square: {:.3} ({} degrees of freedom)",
                histogram.chi_square(),
                histogram.bins() - 1
            );
        }
        Command::Play { level } => {
            let question = game::play(&level, &mut rng)
                .with_context(|| format!("unable to use '{}' as a game level", level))?;
            println!("{}", question.to_attribute_value()?);
        }
        Command::Roll { metadata } => {
            let submission = form::process_form_data(&metadata, &form::Button::Roulette, &mut rng)?;
            println!("{}={}", submission.name, submission.value);
        }
        Command::Answer { metadata, value } => {
            let button = form::Button::Submit(value);
            let submission = form::process_form_data(&metadata, &button, &mut rng)?;
            println!("{}={}", submission.name, submission.value);
        }
        Command::Grade { data } => {
            let data = form::parse_metadata(&data)?;
            let result = game::grade(data)?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Command::Stats {
            correct,
            incorrect,
            level,
        } => {
            let stats = game::calculate_statistics(correct, incorrect)
                .context("no answers to compute statistics from")?;
            println!("{}", serde_json::to_string(&stats)?);
            println!("next level: {}", game::change_level(correct, incorrect, level));
        }
    }

    Ok(())
}
