use super::KifuData;
use crate::core::Board;
use crate::display::{render_board, DisplayState};
use crate::logic::apply_move;
use crossterm::event::{self, Event, KeyCode};
use std::time::Duration;

pub struct ReplayViewer {
    kifu: KifuData,
    boards: Vec<Board>,
    current_index: usize,
}

impl ReplayViewer {
    pub fn new(kifu: KifuData) -> Self {
        // 全局面を先に再構築しておく
        let mut boards = Vec::with_capacity(kifu.moves.len() + 1);
        let mut board = Board::new();
        let mut mark = kifu.first_player;

        boards.push(board.clone());
        for &idx in &kifu.moves {
            board = apply_move(&board, idx, mark);
            boards.push(board.clone());
            mark = mark.opponent();
        }

        Self {
            kifu,
            boards,
            current_index: 0,
        }
    }

    pub fn run(&mut self) -> anyhow::Result<()> {
        loop {
            let board = &self.boards[self.current_index];

            let mut state = DisplayState::default();
            state.show_cursor = false;
            state.last_move = board.last_move;
            state.status_msg = Some(format!(
                "Replay  Move {}/{}  Result: {:?}",
                self.current_index,
                self.kifu.moves.len(),
                self.kifu.outcome
            ));
            render_board(board, &state);
            print!("[←/→]: Step | [Home]: Start | [q]: Back\r\n");

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    match key.code {
                        KeyCode::Left => {
                            self.current_index = self.current_index.saturating_sub(1);
                        }
                        KeyCode::Right => {
                            if self.current_index < self.boards.len() - 1 {
                                self.current_index += 1;
                            }
                        }
                        KeyCode::Home => self.current_index = 0,
                        KeyCode::Char('q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
            }
        }
    }
}
