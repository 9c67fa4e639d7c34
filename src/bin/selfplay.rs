use anyhow::Context;
use clap::Parser;
use gambit::selfplay::{generate_games, write_records, SelfPlayParams, Tally};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "gambit-selfplay", about = "Play the engine against itself and write JSONL game records")]
struct Args {
    /// JSON file with self-play params; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,
    #[arg(long)]
    games: Option<usize>,
    /// Search depth in plies
    #[arg(long)]
    depth: Option<u32>,
    #[arg(long)]
    max_plies: Option<usize>,
    /// Random opening plies before the engine starts choosing
    #[arg(long)]
    random_plies: Option<usize>,
    #[arg(long)]
    seed: Option<u64>,
    /// FEN/EPD list of start positions
    #[arg(long)]
    openings: Option<PathBuf>,
    /// Worker threads (games run in parallel)
    #[arg(long, default_value_t = 1)]
    threads: usize,
    #[arg(long, default_value = "out/selfplay.jsonl")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let a = Args::parse();

    let mut params = match a.config {
        Some(ref p) => SelfPlayParams::load(p)?,
        None => SelfPlayParams::default(),
    };
    if let Some(g) = a.games { params.games = g; }
    if let Some(d) = a.depth { params.search.depth = d; }
    if let Some(m) = a.max_plies { params.max_plies = m; }
    if let Some(r) = a.random_plies { params.random_plies = r; }
    if let Some(s) = a.seed { params.seed = s; }
    if a.openings.is_some() { params.openings_path = a.openings.clone(); }

    eprintln!(
        "Playing {} games (depth={}, max_plies={}, random_plies={}, threads={})",
        params.games, params.search.depth, params.max_plies, params.random_plies, a.threads
    );

    let pb = ProgressBar::new(params.games as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:40} {pos}/{len} games [{elapsed_precise}] {msg}")
            .context("progress template")?,
    );

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(a.threads.max(1))
        .build()
        .context("building thread pool")?;
    let games = pool.install(|| generate_games(&params, |_| pb.inc(1)))?;
    pb.finish_with_message("done");

    let tally = Tally::from_games(&games);
    eprintln!(
        "white={} black={} draws={} unfinished={}",
        tally.white_wins, tally.black_wins, tally.draws, tally.unfinished
    );
    write_records(&games, &a.out)?;
    eprintln!("Wrote {}", a.out.display());
    Ok(())
}
