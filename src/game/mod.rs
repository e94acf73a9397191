use crate::core::{Board, GameOutcome, Mark};
use crate::display::{render_board, DisplayState};
use crate::logic::{apply_move, evaluate, legal_moves};
use crate::player::ai::AIConfig;
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

pub mod replay;

/// セッション中の累計スコア (リロードで消える、保存はしない)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl fmt::Display for Scores {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Score  X: {}  O: {}  Draws: {}",
            self.x_wins, self.o_wins, self.draws
        )
    }
}

/// 棋譜データ
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KifuData {
    pub first_player: Mark,
    pub moves: Vec<usize>,
    pub outcome: GameOutcome,
}

pub struct Game {
    pub board: Board,
    pub current_player: Mark,
    pub scores: Scores,
    pub history: Vec<usize>,
}

impl Game {
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            current_player: Mark::X,
            scores: Scores::default(),
            history: Vec::new(),
        }
    }

    /// 盤面を初期状態に戻す (スコアは保持)
    pub fn reset(&mut self) {
        self.board = Board::new();
        self.current_player = Mark::X;
        self.history.clear();
    }

    /// 現在の手番で着手し、手番を交代する
    pub fn apply(&mut self, idx: usize) {
        self.board = apply_move(&self.board, idx, self.current_player);
        self.history.push(idx);
        self.current_player = self.current_player.opponent();
    }

    pub fn record_outcome(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Won {
                winner: Mark::X, ..
            } => self.scores.x_wins += 1,
            GameOutcome::Won {
                winner: Mark::O, ..
            } => self.scores.o_wins += 1,
            GameOutcome::Draw => self.scores.draws += 1,
            GameOutcome::InProgress => {}
        }
    }

    /// 対局ループ。終局ごとに再戦するか選べる (p1 = X, p2 = O)
    pub fn play(
        &mut self,
        p1: &dyn PlayerController,
        p2: &dyn PlayerController,
    ) -> anyhow::Result<()> {
        loop {
            let outcome = evaluate(&self.board);
            if outcome.is_terminal() {
                self.record_outcome(&outcome);
                let (msg, highlights) = match outcome {
                    GameOutcome::Won { winner, line } => {
                        let name = match winner {
                            Mark::X => p1.name(),
                            Mark::O => p2.name(),
                        };
                        (format!("{} ({}) wins!", winner, name), line.to_vec())
                    }
                    _ => ("Draw!".to_string(), Vec::new()),
                };
                if !self.show_result(&msg, highlights)? {
                    break;
                }
                self.reset();
                continue;
            }

            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = self.board.last_move;
            state.score_line = Some(self.scores.to_string());

            let controller: &dyn PlayerController = match self.current_player {
                Mark::X => p1,
                Mark::O => p2,
            };
            state.status_msg = Some(format!(
                "{}'s turn ({})",
                controller.name(),
                self.current_player
            ));
            render_board(&self.board, &state);

            let moves = legal_moves(&self.board);

            if controller.name().contains("AI") {
                state.status_msg = Some(format!("AI ({}) is thinking...", self.current_player));
                render_board(&self.board, &state);

                // 思考ウェイト中に中断判定
                let timeout = Duration::from_millis(AIConfig::get().play.think_wait_ms);
                if event::poll(timeout).unwrap_or(false) {
                    if let Ok(Event::Key(key)) = event::read() {
                        if key.code == KeyCode::Char('q') {
                            print!("Interrupted by user.\r\n");
                            break;
                        }
                    }
                }
            }

            if let Some(idx) = controller.choose_move(&self.board, &moves) {
                self.apply(idx);
            } else {
                // 投了
                let winner = self.current_player.opponent();
                match winner {
                    Mark::X => self.scores.x_wins += 1,
                    Mark::O => self.scores.o_wins += 1,
                }
                let name = match winner {
                    Mark::X => p1.name(),
                    Mark::O => p2.name(),
                };
                let msg = format!(
                    "{} resigned. {} ({}) wins!",
                    controller.name(),
                    winner,
                    name
                );
                if !self.show_result(&msg, Vec::new())? {
                    break;
                }
                self.reset();
            }
        }
        Ok(())
    }

    fn show_result(&self, msg: &str, highlights: Vec<usize>) -> anyhow::Result<bool> {
        let mut state = DisplayState::default();
        state.show_cursor = false;
        state.status_msg = Some(msg.to_string());
        state.score_line = Some(self.scores.to_string());
        state.highlights = highlights;
        state.last_move = self.board.last_move;
        render_board(&self.board, &state);
        print!("[r]: Rematch | [q]: Quit\r\n");

        loop {
            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Char('r') => return Ok(true),
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(false),
                        _ => {}
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_alternates_turns() {
        let mut game = Game::new();
        assert_eq!(game.current_player, Mark::X);

        game.apply(4);
        assert_eq!(game.board.get(4), Some(Mark::X));
        assert_eq!(game.current_player, Mark::O);

        game.apply(0);
        assert_eq!(game.board.get(0), Some(Mark::O));
        assert_eq!(game.current_player, Mark::X);
        assert_eq!(game.history, vec![4, 0]);
    }

    #[test]
    fn test_scores_accumulate_across_games() {
        let mut game = Game::new();
        game.record_outcome(&GameOutcome::Won {
            winner: Mark::X,
            line: [0, 1, 2],
        });
        game.record_outcome(&GameOutcome::Draw);
        game.record_outcome(&GameOutcome::Won {
            winner: Mark::O,
            line: [0, 4, 8],
        });
        game.record_outcome(&GameOutcome::Won {
            winner: Mark::X,
            line: [2, 5, 8],
        });

        assert_eq!(game.scores.x_wins, 2);
        assert_eq!(game.scores.o_wins, 1);
        assert_eq!(game.scores.draws, 1);
    }

    #[test]
    fn test_reset_clears_board_but_keeps_scores() {
        let mut game = Game::new();
        game.apply(4);
        game.apply(0);
        game.record_outcome(&GameOutcome::Draw);

        game.reset();

        assert_eq!(game.board, Board::new());
        assert_eq!(game.current_player, Mark::X);
        assert!(game.history.is_empty());
        assert_eq!(game.scores.draws, 1);
    }
}
