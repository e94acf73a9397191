use crate::core::{Board, Difficulty, GameOutcome, Mark};
use crate::game::KifuData;
use crate::logic::{evaluate, legal_moves};
use crate::player::ai::MinimaxAI;
use crate::player::PlayerController;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::time::Instant;

pub struct SelfPlayConfig {
    pub num_games: usize,
    pub ai_x_difficulty: Difficulty,
    pub ai_o_difficulty: Difficulty,
    pub save_kifus: bool,
    pub parallel: bool,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct GameResult {
    pub winner: Option<Mark>,
    pub moves: usize,
    pub time_ms: u128,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct SelfPlayStats {
    pub total_games: usize,
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
    pub avg_moves: f64,
    pub avg_time_ms: f64,
    pub ai_x_difficulty: String,
    pub ai_o_difficulty: String,
    pub games: Vec<GameResult>,
}

impl SelfPlayStats {
    pub fn new() -> Self {
        Self {
            total_games: 0,
            x_wins: 0,
            o_wins: 0,
            draws: 0,
            avg_moves: 0.0,
            avg_time_ms: 0.0,
            ai_x_difficulty: String::new(),
            ai_o_difficulty: String::new(),
            games: Vec::new(),
        }
    }

    pub fn add_result(&mut self, result: GameResult) {
        self.total_games += 1;
        match result.winner {
            Some(Mark::X) => self.x_wins += 1,
            Some(Mark::O) => self.o_wins += 1,
            None => self.draws += 1,
        }
        self.games.push(result);
        self.recalculate_averages();
    }

    fn recalculate_averages(&mut self) {
        if self.games.is_empty() {
            return;
        }
        let total_moves: usize = self.games.iter().map(|g| g.moves).sum();
        let total_time: u128 = self.games.iter().map(|g| g.time_ms).sum();
        self.avg_moves = total_moves as f64 / self.games.len() as f64;
        self.avg_time_ms = total_time as f64 / self.games.len() as f64;
    }
}

fn make_ai(mark: Mark, difficulty: Difficulty) -> MinimaxAI {
    let name = match difficulty {
        Difficulty::Easy => format!("Minimax AI-{} (Easy)", mark),
        Difficulty::Hard => format!("Minimax AI-{} (Hard)", mark),
    };
    MinimaxAI::new(mark, &name, difficulty)
}

/// 1局をAI同士で最後まで進める。戻り値は (結果, 棋譜の手順)
fn play_single_game(
    p1: &dyn PlayerController,
    p2: &dyn PlayerController,
) -> anyhow::Result<(GameOutcome, Vec<usize>)> {
    let mut board = Board::new();
    let mut current = Mark::X;
    let mut history = Vec::new();

    loop {
        let outcome = evaluate(&board);
        if outcome.is_terminal() {
            return Ok((outcome, history));
        }

        let moves = legal_moves(&board);
        let controller = match current {
            Mark::X => p1,
            Mark::O => p2,
        };
        let idx = controller
            .choose_move(&board, &moves)
            .ok_or_else(|| anyhow::anyhow!("{} returned no move mid-game", controller.name()))?;

        board = crate::logic::apply_move(&board, idx, current);
        history.push(idx);
        current = current.opponent();
    }
}

fn run_one(config: &SelfPlayConfig) -> anyhow::Result<(GameResult, KifuData)> {
    // メモがRefCellなのでAIはスレッドをまたげない。1局ごとに作る
    let ai_x = make_ai(Mark::X, config.ai_x_difficulty);
    let ai_o = make_ai(Mark::O, config.ai_o_difficulty);

    let start = Instant::now();
    let (outcome, history) = play_single_game(&ai_x, &ai_o)?;
    let time_ms = start.elapsed().as_millis();

    let winner = match outcome {
        GameOutcome::Won { winner, .. } => Some(winner),
        _ => None,
    };
    let result = GameResult {
        winner,
        moves: history.len(),
        time_ms,
    };
    let kifu = KifuData {
        first_player: Mark::X,
        moves: history,
        outcome,
    };
    Ok((result, kifu))
}

pub fn run_selfplay(config: SelfPlayConfig) -> anyhow::Result<SelfPlayStats> {
    let mut stats = SelfPlayStats::new();
    stats.ai_x_difficulty = format!("{:?}", config.ai_x_difficulty);
    stats.ai_o_difficulty = format!("{:?}", config.ai_o_difficulty);

    let results = if config.parallel {
        run_games_parallel(&config)?
    } else {
        run_games_sequential(&config)?
    };

    for (game_num, (result, kifu)) in results.into_iter().enumerate() {
        if config.save_kifus {
            save_kifu(&kifu, game_num)?;
        }
        stats.add_result(result);
    }

    let path = save_stats(&stats)?;
    print!("\r\nStats saved: {}\r\n", path);
    Ok(stats)
}

fn run_games_sequential(config: &SelfPlayConfig) -> anyhow::Result<Vec<(GameResult, KifuData)>> {
    let mut results = Vec::with_capacity(config.num_games);
    for i in 0..config.num_games {
        print!("\rGame {}/{}...", i + 1, config.num_games);
        std::io::stdout().flush()?;
        results.push(run_one(config)?);
    }
    print!("\r\n");
    Ok(results)
}

fn run_games_parallel(config: &SelfPlayConfig) -> anyhow::Result<Vec<(GameResult, KifuData)>> {
    let completed = Arc::new(Mutex::new(0usize));

    (0..config.num_games)
        .into_par_iter()
        .map(|_| {
            let result = run_one(config)?;
            let mut done = completed.lock().unwrap();
            *done += 1;
            print!("\rGame {}/{}...", *done, config.num_games);
            let _ = std::io::stdout().flush();
            Ok(result)
        })
        .collect::<anyhow::Result<Vec<_>>>()
}

fn save_kifu(kifu: &KifuData, game_num: usize) -> anyhow::Result<()> {
    let kifu_dir = "selfplay_kifu";
    std::fs::create_dir_all(kifu_dir)?;

    let filename = format!(
        "{}/game_{:04}_{}.json",
        kifu_dir,
        game_num,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(filename)?;
    serde_json::to_writer(file, kifu)?;
    Ok(())
}

fn save_stats(stats: &SelfPlayStats) -> anyhow::Result<String> {
    let stats_dir = "selfplay_stats";
    std::fs::create_dir_all(stats_dir)?;

    let filename = format!(
        "{}/stats_{}.json",
        stats_dir,
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );

    let file = std::fs::File::create(&filename)?;
    serde_json::to_writer_pretty(file, stats)?;
    Ok(filename)
}
