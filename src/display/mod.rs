use crate::core::{Board, Mark};
use crossterm::{cursor, execute, style::Stylize, terminal};
use std::io::stdout;

pub struct DisplayState {
    /// 選択中のマス (0-8)
    pub cursor: usize,
    pub status_msg: Option<String>,
    pub score_line: Option<String>,
    /// 強調表示するマス (勝利ラインなど)
    pub highlights: Vec<usize>,
    pub last_move: Option<usize>,
    pub show_cursor: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            cursor: 4,
            status_msg: None,
            score_line: None,
            highlights: Vec::new(),
            last_move: None,
            show_cursor: true, // Default to showing cursor
        }
    }
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn render_board(board: &Board, state: &DisplayState) {
    let mut out = stdout();

    // 画面クリア（スクロール防止）
    execute!(
        out,
        terminal::Clear(terminal::ClearType::All),
        cursor::MoveTo(0, 0)
    )
    .unwrap();

    print!("=== Marubatsu AI (Tic-Tac-Toe) ===\r\n");
    if let Some(msg) = &state.status_msg {
        print!("{}\r\n", msg.clone().bold().yellow());
    } else {
        print!("\r\n");
    }
    if let Some(scores) = &state.score_line {
        print!("{}\r\n", scores);
    } else {
        print!("\r\n");
    }
    print!("\r\n");

    for row in 0..3 {
        print!("   +---+---+---+\r\n");
        print!("   ");
        for col in 0..3 {
            let idx = row * 3 + col;
            let here = state.show_cursor && state.cursor == idx;
            let (open, close) = if here { ('[', ']') } else { (' ', ' ') };

            print!("|{}", open);
            match board.cells[idx] {
                Some(mark) => {
                    let ch = mark.to_string();
                    let styled = if state.highlights.contains(&idx) {
                        ch.black().on_green()
                    } else {
                        let base = match mark {
                            Mark::X => ch.cyan(),
                            Mark::O => ch.magenta(),
                        };
                        if state.last_move == Some(idx) {
                            base.bold()
                        } else {
                            base
                        }
                    };
                    print!("{}", styled);
                }
                // 空きマスは入力用の番号をヒント表示
                None => print!("{}", (idx + 1).to_string().dark_grey()),
            }
            print!("{}", close);
        }
        print!("|\r\n");
    }
    print!("   +---+---+---+\r\n");
    print!("\r\n");
}
