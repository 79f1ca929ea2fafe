use tictactoe_engine::{Board, Mark};

/// Renders the board the way the terminal demo shows it: occupied cells
/// as X/O, empty cells as their index so a human can pick a move.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();

    for row in 0..size {
        out.push_str("| ");
        for col in 0..size {
            let index = row * size + col;
            let cell = match board.cell(index) {
                Mark::X => "X".to_string(),
                Mark::O => "O".to_string(),
                Mark::Empty => index.to_string(),
            };
            out.push_str(&cell);
            out.push_str(" | ");
        }
        out.pop();
        out.push('\n');
    }

    out
}
