use super::config::AIConfig;
use crate::core::{Board, Difficulty, GameOutcome, Mark};
use crate::logic::{apply_move, board_key, evaluate, legal_moves};
use crate::player::PlayerController;
use rand::seq::SliceRandom;
use rand::Rng;
use std::cell::RefCell;
use std::collections::HashMap;

/// 勝敗スコアの基準値。depth を差し引いて早い勝ち・遅い負けを優先する
const WIN_SCORE: i32 = 10;

pub struct MinimaxAI {
    pub mark: Mark,
    pub name: String,
    pub difficulty: Difficulty,
    /// 探索メモ。キーは (盤面, depth, 手番の役割)。choose_move ごとにクリアする
    memo: RefCell<HashMap<(u16, u8, bool), i32>>,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str, difficulty: Difficulty) -> Self {
        Self {
            mark,
            name: name.to_string(),
            difficulty,
            memo: RefCell::new(HashMap::new()),
        }
    }

    /// 全探索による最善手。同点なら走査順 (0→8) で先に見つかった手
    pub fn best_move(&self, board: &Board) -> Option<usize> {
        self.memo.borrow_mut().clear();

        let mut best: Option<(usize, i32)> = None;
        for idx in legal_moves(board) {
            let next = apply_move(board, idx, self.mark);
            // 自分の一手は置き終わっているので、次は相手の番 (minimizing)
            let score = self.score(&next, 0, false);
            match best {
                Some((_, best_score)) if score <= best_score => {}
                _ => best = Some((idx, score)),
            }
        }

        best.map(|(idx, _)| idx)
    }

    fn score(&self, board: &Board, depth: u8, maximizing: bool) -> i32 {
        match evaluate(board) {
            GameOutcome::Won { winner, .. } => {
                if winner == self.mark {
                    WIN_SCORE - depth as i32
                } else {
                    depth as i32 - WIN_SCORE
                }
            }
            GameOutcome::Draw => 0,
            GameOutcome::InProgress => {
                let memo_on = AIConfig::get().search.memo_enabled;
                let key = (board_key(board), depth, maximizing);
                if memo_on {
                    if let Some(&cached) = self.memo.borrow().get(&key) {
                        return cached;
                    }
                }

                let mover = if maximizing {
                    self.mark
                } else {
                    self.mark.opponent()
                };

                let mut result = if maximizing { i32::MIN } else { i32::MAX };
                for idx in legal_moves(board) {
                    let next = apply_move(board, idx, mover);
                    let score = self.score(&next, depth + 1, !maximizing);
                    result = if maximizing {
                        result.max(score)
                    } else {
                        result.min(score)
                    };
                }

                if memo_on {
                    self.memo.borrow_mut().insert(key, result);
                }
                result
            }
        }
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board, legal_moves_list: &[usize]) -> Option<usize> {
        // 終局後や満杯の盤面で呼ばれた場合は指す手がない
        if legal_moves_list.is_empty() || evaluate(board).is_terminal() {
            return None;
        }

        match self.difficulty {
            Difficulty::Hard => self.best_move(board),
            Difficulty::Easy => {
                let mut rng = rand::thread_rng();
                if rng.gen::<f64>() < AIConfig::get().search.easy_optimal_rate {
                    self.best_move(board)
                } else {
                    legal_moves_list.choose(&mut rng).copied()
                }
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn is_local(&self) -> bool {
        true
    }
}
