use crate::config::load_config;
use crate::placement::anneal;
use crate::scene::{PlacementReport, Scene};
use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "lanneal",
    version,
    about = "Simulated-annealing label placement over JSON scenes"
)]
pub struct Args {
    /// Scene JSON file, or '-' for stdin
    #[arg(short = 'i', long = "input")]
    pub input: Option<PathBuf>,

    /// Output file for the placement report. Defaults to stdout.
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Number of annealing sweeps
    #[arg(short = 'n', long = "sweeps", default_value_t = 1000)]
    pub sweeps: usize,

    /// RNG seed; omit for a fresh seed per run
    #[arg(long = "seed")]
    pub seed: Option<u64>,

    /// Config JSON file (weights / params overrides)
    #[arg(short = 'c', long = "configFile")]
    pub config: Option<PathBuf>,
}

pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    let input = read_input(args.input.as_deref())?;
    let scene = Scene::from_json(&input)?;
    let (mut state, weights, params) = scene.resolve(&config);

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let stats = anneal(&mut state, &weights, &params, args.sweeps, &mut rng)?;

    let report = PlacementReport {
        labels: state.labels,
        stats,
    };
    let json = serde_json::to_string_pretty(&report)?;
    write_output(&json, args.output.as_deref())?;
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    if let Some(path) = path
        && path != Path::new("-")
    {
        return Ok(std::fs::read_to_string(path)?);
    }
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    Ok(buf)
}

fn write_output(json: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => std::fs::write(path, json)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }
    Ok(())
}
