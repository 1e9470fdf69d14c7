use agent_selection::{selection_with, ScriptValue};
use clap::Parser;
use fitness_selection::{sampling_weights, Exponential, Linear, WeightTransform};
use rand::{rngs::SmallRng, SeedableRng};
use std::{collections::BTreeMap, io::stdin, time::Instant};

/// Empirical frequency check for fitness-proportionate selection: feeds
/// `label,score` lines from stdin through repeated draws and reports the
/// observed share of each label against its expected share.
#[derive(Parser)]
#[command(name = "simulator")]
struct Args {
    /// Number of selection trials.
    #[arg(long, default_value_t = 10_000)]
    trials: u64,

    /// Bias for the exponential transform. Linear when omitted.
    #[arg(long)]
    bias: Option<f64>,

    /// Generator seed. Seeded from entropy when omitted.
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let header = "label,score";
    let mut labels: Vec<String> = Vec::new();
    let mut scores: Vec<f64> = Vec::new();
    for line in stdin().lines() {
        let line = line.unwrap();
        if line.is_empty() || line.starts_with(header) {
            continue;
        }
        let (label, score) = line.split_once(',').expect("label,score");
        labels.push(label.to_owned());
        scores.push(score.trim().parse().expect("score"));
    }

    let transform: Box<dyn WeightTransform> = match args.bias {
        Some(bias) => Box::new(Exponential::new(bias)),
        None => Box::new(Linear),
    };
    let weights = sampling_weights(&scores, transform.as_ref()).expect("scores");
    let total: f64 = weights.iter().map(|w| w.as_f64()).sum();

    let values: Vec<ScriptValue> = labels
        .iter()
        .map(|label| ScriptValue::Text(label.clone()))
        .collect();
    let mut rng = match args.seed {
        Some(seed) => SmallRng::seed_from_u64(seed),
        None => SmallRng::from_entropy(),
    };

    let mut counts: BTreeMap<String, u64> = labels.iter().map(|label| (label.clone(), 0)).collect();
    let mut total_selection_μs = 0_u128;
    for _ in 0..args.trials {
        let t0 = Instant::now();
        let selected =
            selection_with(&mut rng, &values, &scores, transform.as_ref()).expect("selection");
        total_selection_μs += t0.elapsed().as_micros();
        if let ScriptValue::Text(label) = selected {
            *counts.get_mut(&label).unwrap() += 1;
        }
    }

    println!(
        "avg_selection_μs: {}",
        total_selection_μs as f64 / args.trials as f64
    );
    println!("label,observed,expected");
    for (label, count) in &counts {
        let index = labels.iter().position(|l| l == label).unwrap();
        println!(
            "{label},{:.4},{:.4}",
            *count as f64 / args.trials as f64,
            weights[index].as_f64() / total,
        );
    }
}
