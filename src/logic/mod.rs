use crate::core::{Board, GameOutcome, Mark};

/// 勝利ライン (横3本、縦3本、斜め2本)。終局判定はこの順で走査する
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// 終局判定。最初に見つかった完成ラインを報告する
pub fn evaluate(board: &Board) -> GameOutcome {
    for line in WIN_LINES {
        let [a, b, c] = line;
        if let Some(mark) = board.cells[a] {
            if board.cells[b] == Some(mark) && board.cells[c] == Some(mark) {
                return GameOutcome::Won { winner: mark, line };
            }
        }
    }

    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}

/// 合法手生成 (空きマスの昇順)
pub fn legal_moves(board: &Board) -> Vec<usize> {
    board.empty_cells()
}

/// 着手を適用した新しい盤面を返す (元の盤面は変更しない)
pub fn apply_move(board: &Board, idx: usize, mark: Mark) -> Board {
    let mut next = board.clone();
    next.place(idx, mark);
    next
}

/// 盤面の一意キー (3進エンコード、9マスなので u16 に収まる)
pub fn board_key(board: &Board) -> u16 {
    board.cells.iter().fold(0u16, |acc, cell| {
        acc * 3
            + match cell {
                None => 0,
                Some(Mark::X) => 1,
                Some(Mark::O) => 2,
            }
    })
}
