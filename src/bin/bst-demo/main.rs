//! Builds a tree from random values, grows it with more random inserts until
//! it leans, then rebalances it, printing the tree and its traversals after
//! every phase.

mod printer;

use anyhow::{Context, Result};
use balanced_bst::{Order, Tree};
use clap::Parser;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::level_filters::LevelFilter;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "bst-demo", about = "Grow a binary search tree out of balance and rebuild it")]
struct Cli {
    /// How many random values the initial tree is built from (duplicates are dropped).
    #[arg(long, default_value_t = 100)]
    size: usize,
    /// How many random values are inserted after the initial build.
    #[arg(long, default_value_t = 100)]
    extra: usize,
    /// Exclusive upper bound for random values. Defaults to `--size`.
    #[arg(long)]
    max: Option<u32>,
    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,
    /// Increase log verbosity (-d info, -dd debug, -ddd trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,
}

#[derive(Debug, Error)]
enum DemoError {
    #[error("random values need a non-empty range, got an upper bound of 0")]
    EmptyRange,
    #[error("value range upper bound {0} does not fit in a u32")]
    RangeTooLarge(usize),
}

/// Random values in `0..max`, settings resolved from the command line.
struct Values {
    rng: StdRng,
    max: u32,
}

impl Values {
    fn from_cli(cli: &Cli) -> Result<Self, DemoError> {
        let max = match cli.max {
            Some(max) => max,
            None => u32::try_from(cli.size).map_err(|_| DemoError::RangeTooLarge(cli.size))?,
        };
        if max == 0 {
            return Err(DemoError::EmptyRange);
        }

        let rng = match cli.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { rng, max })
    }

    fn take(&mut self, n: usize) -> Vec<u32> {
        (0..n).map(|_| self.rng.gen_range(0..self.max)).collect()
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.debug);

    let mut values = Values::from_cli(&cli).context("invalid value range")?;

    let initial = values.take(cli.size);
    debug!(count = initial.len(), "generated initial values");
    let mut tree: Tree<u32> = initial.into_iter().collect();
    println!("Original BST:\n");
    report(&tree);

    println!("Adding {} new nodes...\n", cli.extra);
    let mut added = 0;
    for x in values.take(cli.extra) {
        if tree.insert(x) {
            added += 1;
        }
    }
    info!(added, skipped = cli.extra - added, "inserted extra values");
    println!("New BST:\n");
    report(&tree);

    println!("Re-balancing the tree...\n");
    tree.rebalance();
    println!("Final BST:\n");
    report(&tree);

    Ok(())
}

fn report(tree: &Tree<u32>) {
    print!("{}", printer::render(tree));
    println!("\nisBalanced: {}\n", tree.is_balanced());

    for order in Order::ALL {
        let values: Vec<String> = tree.traverse(order).iter().map(|x| x.to_string()).collect();
        println!("{order}: {}\n", values.join(","));
    }
}

fn setup_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // `RUST_LOG` wins over the command line flag when it is set.
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();
}
