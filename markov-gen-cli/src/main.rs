use std::io::{self, BufReader};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use markov_gen_core::io::{read_file, read_sequence, read_sequences};
use markov_gen_core::{Chain, Sequence};

/// Train a word-level Markov chain on some text and print generated text.
#[derive(Parser, Debug)]
#[command(name = "markov-gen", version, about)]
struct Args {
    /// Max words to generate, seed included
    #[arg(long, default_value_t = 100)]
    words: usize,

    /// Size of a word pair (values below 1 are treated as 1)
    #[arg(long, default_value_t = 2, allow_negative_numbers = true)]
    pairs: i64,

    /// Words to start from (a random trained state is used if unknown)
    #[arg(long)]
    start: Option<String>,

    /// Seed for the random generator, for reproducible output
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Text file to train on (stdin if omitted)
    #[arg(long)]
    input: Option<PathBuf>,

    /// Train on each line separately instead of the whole text at once
    #[arg(long)]
    per_line: bool,
}

impl Args {
    /// Negative pair sizes end up as 0, which the chain raises to 1.
    fn pair_size(&self) -> usize {
        usize::try_from(self.pairs).unwrap_or(0)
    }

    fn load(&self) -> Result<Vec<Sequence>> {
        match &self.input {
            Some(path) => read_file(path, self.per_line)
                .with_context(|| format!("failed to read {}", path.display())),
            None if self.per_line => Ok(read_sequences(BufReader::new(io::stdin()))?),
            None => Ok(vec![read_sequence(io::stdin())?]),
        }
    }
}

/// Builds from `start`, generates and renders the result.
fn generate<R: Rng>(chain: &Chain, start: Option<Sequence>, words: usize, rng: R) -> Result<String> {
    let mut builder = chain.builder_with_rng(start, rng)?;
    let generated = builder.generate(words.saturating_sub(chain.pair_size()));
    info!("generated {} new words", generated);
    Ok(builder.to_string())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut chain = Chain::new(args.pair_size());
    for sequence in args.load()? {
        chain.add(&sequence);
    }
    info!(
        "trained {} states from {} transitions (pair size {})",
        chain.len(),
        chain.observations(),
        chain.pair_size()
    );

    let start = args.start.as_deref().map(Sequence::from_text);
    let text = match args.rng_seed {
        Some(seed) => generate(&chain, start, args.words, StdRng::seed_from_u64(seed)),
        None => generate(&chain, start, args.words, rand::rng()),
    }
    .context("nothing to generate from, the input text is too short")?;

    println!("{}", text);
    Ok(())
}
