use crate::core::{Board, Mark};
use crate::display::{render_board, DisplayState};
use crate::player::PlayerController;
use crossterm::event::{self, Event, KeyCode, KeyEvent};
use std::time::Duration;

pub struct TuiController {
    mark: Mark,
    name: String,
}

impl TuiController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }
}

impl PlayerController for TuiController {
    fn name(&self) -> &str {
        &self.name
    }

    fn choose_move(&self, board: &Board, legal_moves_list: &[usize]) -> Option<usize> {
        let mut state = DisplayState::default();
        state.last_move = board.last_move;
        state.status_msg = Some(format!("{}'s turn ({})", self.name, self.mark));

        // 初期カーソルは中央、埋まっていれば最初の空きマス
        state.cursor = if board.is_vacant(4) {
            4
        } else {
            legal_moves_list.first().copied().unwrap_or(0)
        };

        loop {
            render_board(board, &state);
            print!("[Arrows]: Move | [1-9]: Cell | [Enter]: Place | [q]: Resign\r\n");

            if event::poll(Duration::from_millis(100)).unwrap_or(false) {
                if let Ok(Event::Key(KeyEvent { code, .. })) = event::read() {
                    match code {
                        KeyCode::Char('q') => return None,
                        KeyCode::Up => {
                            if state.cursor >= 3 {
                                state.cursor -= 3;
                            }
                        }
                        KeyCode::Down => {
                            if state.cursor < 6 {
                                state.cursor += 3;
                            }
                        }
                        KeyCode::Left => {
                            if state.cursor % 3 > 0 {
                                state.cursor -= 1;
                            }
                        }
                        KeyCode::Right => {
                            if state.cursor % 3 < 2 {
                                state.cursor += 1;
                            }
                        }
                        KeyCode::Char(c @ '1'..='9') => {
                            let idx = c as usize - '1' as usize;
                            if legal_moves_list.contains(&idx) {
                                return Some(idx);
                            }
                            state.status_msg = Some(format!("Cell {} is occupied", c));
                        }
                        KeyCode::Enter | KeyCode::Char(' ') => {
                            if legal_moves_list.contains(&state.cursor) {
                                return Some(state.cursor);
                            }
                            state.status_msg =
                                Some(format!("Cell {} is occupied", state.cursor + 1));
                        }
                        _ => {}
                    }
                }
            }
        }
    }

    fn is_local(&self) -> bool {
        true
    }
}
