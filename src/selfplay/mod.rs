use anyhow::{Context, Result};
use cozy_chess::Color;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::board::{Position, Status};
use crate::search::{SearchParams, Searcher};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelfPlayParams {
    pub games: usize,
    pub max_plies: usize,
    pub search: SearchParams,
    /// Uniformly random plies played before the engine takes over.
    pub random_plies: usize,
    pub seed: u64,
    /// Optional FEN/EPD list, one position per line.
    pub openings_path: Option<PathBuf>,
}

impl Default for SelfPlayParams {
    fn default() -> Self {
        Self {
            games: 1,
            max_plies: 300,
            search: SearchParams::with_depth(2),
            random_plies: 0,
            seed: 42,
            openings_path: None,
        }
    }
}

impl SelfPlayParams {
    /// Reads params from a JSON file; missing fields keep their defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let f = File::open(path).with_context(|| format!("opening config {}", path.display()))?;
        serde_json::from_reader(BufReader::new(f)).with_context(|| format!("parsing config {}", path.display()))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Winner {
    White,
    Black,
}

impl From<Color> for Winner {
    fn from(c: Color) -> Self {
        match c {
            Color::White => Winner::White,
            Color::Black => Winner::Black,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRecord {
    pub index: usize,
    pub start_fen: String,
    pub moves: Vec<String>,
    pub plies: usize,
    /// `ongoing` when the ply cap stopped the game.
    pub outcome: Status,
    pub winner: Option<Winner>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Tally {
    pub white_wins: usize,
    pub black_wins: usize,
    pub draws: usize,
    pub unfinished: usize,
}

impl Tally {
    pub fn from_games(games: &[GameRecord]) -> Self {
        let mut t = Tally::default();
        for g in games {
            match (g.outcome, g.winner) {
                (_, Some(Winner::White)) => t.white_wins += 1,
                (_, Some(Winner::Black)) => t.black_wins += 1,
                (Status::Ongoing, None) => t.unfinished += 1,
                _ => t.draws += 1,
            }
        }
        t
    }
}

/// Plays one engine-vs-engine game from `start`. The result depends only on
/// `start`, `params` and `index`.
pub fn play_game(start: &Position, params: &SelfPlayParams, index: usize) -> GameRecord {
    let mut rng = SmallRng::seed_from_u64(params.seed ^ (index as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    let mut searcher = Searcher::new();
    let mut pos = start.clone();
    let mut moves: Vec<String> = Vec::new();

    while moves.len() < params.max_plies {
        let legal = pos.legal_moves();
        if legal.is_empty() { break; }
        let mv = if moves.len() < params.random_plies {
            legal[rng.gen_range(0..legal.len())]
        } else {
            match searcher.search(&pos, params.search).best_move {
                Some(m) => m,
                None => break,
            }
        };
        moves.push(mv.uci());
        pos = pos.apply(&mv);
    }

    let outcome = pos.status();
    let winner = (outcome == Status::Checkmate).then(|| Winner::from(!pos.side_to_move()));
    log::info!("game {} finished after {} plies: {:?} winner={:?}", index, moves.len(), outcome, winner);
    GameRecord { index, start_fen: start.fen(), plies: moves.len(), moves, outcome, winner }
}

/// Plays `params.games` independent games in parallel on the current rayon
/// pool. `on_game` is called as each game finishes; the returned records are
/// in game-index order.
pub fn generate_games<F>(params: &SelfPlayParams, on_game: F) -> Result<Vec<GameRecord>>
where
    F: Fn(&GameRecord) + Sync,
{
    let openings = match params.openings_path {
        Some(ref p) => load_openings(p)?,
        None => Vec::new(),
    };
    let games = (0..params.games)
        .into_par_iter()
        .map(|i| {
            let start = if openings.is_empty() { Position::startpos() } else { openings[i % openings.len()].clone() };
            let record = play_game(&start, params, i);
            on_game(&record);
            record
        })
        .collect();
    Ok(games)
}

/// Reads FEN or EPD lines. Blank lines and `#` comments are skipped; EPD
/// lines get their move counters padded.
pub fn load_openings<P: AsRef<Path>>(path: P) -> Result<Vec<Position>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut out = Vec::new();
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line.with_context(|| format!("reading {}", path.display()))?;
        let raw = line.trim();
        if raw.is_empty() || raw.starts_with('#') { continue; }
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let fen = if parts.len() >= 6 {
            parts[0..6].join(" ")
        } else if parts.len() >= 4 {
            let mut v = parts[0..4].to_vec();
            v.push("0");
            v.push("1");
            v.join(" ")
        } else {
            raw.to_string()
        };
        match Position::from_fen(&fen) {
            Ok(p) => out.push(p),
            Err(e) => log::warn!("{}:{}: skipping opening: {}", path.display(), lineno + 1, e),
        }
    }
    Ok(out)
}

/// Writes one JSON object per game.
pub fn write_records<P: AsRef<Path>>(games: &[GameRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut w = BufWriter::new(File::create(path).with_context(|| format!("creating {}", path.display()))?);
    for g in games {
        serde_json::to_writer(&mut w, g)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

pub fn read_records<P: AsRef<Path>>(path: P) -> Result<Vec<GameRecord>> {
    let path = path.as_ref();
    let f = File::open(path).with_context(|| format!("opening {}", path.display()))?;
    let mut games = Vec::new();
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let g = serde_json::from_str(&line).with_context(|| format!("{}:{}", path.display(), lineno + 1))?;
        games.push(g);
    }
    Ok(games)
}
