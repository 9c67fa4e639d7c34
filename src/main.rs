use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use cozy_chess::Color;
use gambit::perft::{divide, perft};
use gambit::search::eval::{evaluate, material, positional_bonus};
use gambit::{Position, SearchParams, Searcher};
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "gambit", version, about = "Fixed-depth negamax chess engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search a position and print the best move
    Bestmove {
        #[command(flatten)]
        position: PositionArgs,

        /// Lookahead in plies
        #[arg(long, conflicts_with = "full_moves")]
        depth: Option<u32>,

        /// Lookahead in full moves (two plies each)
        #[arg(long)]
        full_moves: Option<u32>,

        /// Search moves in generator order instead of checks/captures first
        #[arg(long)]
        no_ordering: bool,
    },
    /// Print the static evaluation for both sides
    Eval {
        #[command(flatten)]
        position: PositionArgs,
    },
    /// Count leaf nodes of the legal move tree
    Perft {
        #[command(flatten)]
        position: PositionArgs,

        #[arg(long, default_value_t = 3)]
        depth: u32,

        /// Print per-move counts
        #[arg(long)]
        divide: bool,
    },
}

#[derive(Args, Debug)]
struct PositionArgs {
    /// FEN string or 'startpos'
    #[arg(long, default_value = "startpos")]
    fen: String,

    /// UCI moves to play from the position first
    #[arg(long, num_args = 1..)]
    moves: Vec<String>,
}

impl PositionArgs {
    fn resolve(&self) -> Result<Position> {
        let base = if self.fen == "startpos" { Position::startpos() } else { Position::from_fen(&self.fen)? };
        Ok(base.play_all(&self.moves)?)
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Bestmove { position, depth, full_moves, no_ordering } => {
            let pos = position.resolve()?;
            let mut params = match (depth, full_moves) {
                (Some(d), _) => SearchParams::with_depth(d),
                (None, Some(n)) => SearchParams::from_full_moves(n),
                (None, None) => SearchParams::default(),
            };
            params.order_moves = !no_ordering;

            let t0 = Instant::now();
            let res = Searcher::new().search(&pos, params);
            let dt = t0.elapsed();
            match res.best_move {
                Some(mv) => println!(
                    "bestmove={} score={} nodes={} elapsed={:.3}s",
                    mv, res.score, res.nodes, dt.as_secs_f64()
                ),
                None => println!("bestmove=(none) status={:?} score={}", pos.status(), res.score),
            }
        }
        Command::Eval { position } => {
            let pos = position.resolve()?;
            println!("fen: {}", pos);
            println!("status: {:?}", pos.status());
            for color in [Color::White, Color::Black] {
                println!(
                    "{:?}: eval={} material={} positional={}",
                    color,
                    evaluate(&pos, color),
                    material(pos.board(), color),
                    positional_bonus(pos.board(), color)
                );
            }
        }
        Command::Perft { position, depth, divide: per_move } => {
            let pos = position.resolve()?;
            let t0 = Instant::now();
            let nodes: u64 = if per_move {
                let counts = divide(&pos, depth);
                for (mv, n) in &counts {
                    println!("{mv}: {n}");
                }
                counts.iter().map(|(_, n)| n).sum()
            } else {
                perft(&pos, depth)
            };
            println!("nodes={} elapsed={:.3}s", nodes, t0.elapsed().as_secs_f64());
        }
    }
    Ok(())
}
