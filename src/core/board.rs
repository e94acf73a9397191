use super::types::Mark;
use serde::{Deserialize, Serialize};

/// 盤面 (3x3、マス番号は row * 3 + col)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    /// マスの状態 (None = 空き)
    pub cells: [Option<Mark>; 9],
    /// 直前の着手マス
    pub last_move: Option<usize>,
}

impl Board {
    pub fn new() -> Self {
        Board {
            cells: [None; 9],
            last_move: None,
        }
    }

    pub fn get(&self, idx: usize) -> Option<Mark> {
        self.cells[idx]
    }

    pub fn is_vacant(&self, idx: usize) -> bool {
        self.cells[idx].is_none()
    }

    pub fn place(&mut self, idx: usize, mark: Mark) {
        self.cells[idx] = Some(mark);
        self.last_move = Some(idx);
    }

    /// 空きマスの一覧 (昇順)
    pub fn empty_cells(&self) -> Vec<usize> {
        (0..9).filter(|&i| self.cells[i].is_none()).collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| c.is_some())
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&c| c == Some(mark)).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
