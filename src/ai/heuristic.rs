use crate::game::{Board, Cell, COLS, ROWS};

/// Score a single 4-cell window from the AI's perspective.
///
/// The AI rows of the table are exclusive (a window matches at most one);
/// the opponent-threat penalty is applied independently.
fn score_window(ai: usize, human: usize, empty: usize) -> i32 {
    let mut score = 0;

    if ai == 4 {
        score += 100;
    } else if ai == 3 && empty == 1 {
        score += 5;
    } else if ai == 2 && empty == 2 {
        score += 2;
    }

    if human == 3 && empty == 1 {
        score -= 4;
    }

    score
}

fn eval_window(window: [Cell; 4]) -> i32 {
    let mut ai = 0;
    let mut human = 0;
    let mut empty = 0;
    for cell in window {
        match cell {
            Cell::Ai => ai += 1,
            Cell::Human => human += 1,
            Cell::Empty => empty += 1,
        }
    }
    score_window(ai, human, empty)
}

/// Static evaluation of a board from the AI's perspective: positive favors
/// the AI, negative favors the human. Sums the window score over every 4-cell
/// run on all four axes, plus a bonus of 3 per AI disc in the center column.
pub fn evaluate_board(board: &Board) -> i32 {
    let mut score = 0;

    // Center column bonus
    let center = COLS / 2;
    for row in 0..ROWS {
        if board.get(row, center) == Cell::Ai {
            score += 3;
        }
    }

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            score += eval_window([
                board.get(row, col),
                board.get(row, col + 1),
                board.get(row, col + 2),
                board.get(row, col + 3),
            ]);
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            score += eval_window([
                board.get(row, col),
                board.get(row + 1, col),
                board.get(row + 2, col),
                board.get(row + 3, col),
            ]);
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            score += eval_window([
                board.get(row, col),
                board.get(row + 1, col + 1),
                board.get(row + 2, col + 2),
                board.get(row + 3, col + 3),
            ]);
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            score += eval_window([
                board.get(row, col),
                board.get(row - 1, col + 1),
                board.get(row - 2, col + 2),
                board.get(row - 3, col + 3),
            ]);
        }
    }

    score
}
