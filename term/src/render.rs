use core::fmt::Write;
use sapper_core::{CellView, Game, GameStatus, Snapshot};

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Flagged => 'F',
        CellView::Revealed(0) => '.',
        CellView::Revealed(count) => char::from(b'0' + count),
        CellView::Mine => '*',
    }
}

/// Draws the board with row and column labels under a one-line header.
pub fn render(game: &Game) -> String {
    let snapshot: Snapshot = game.board().snapshot();
    let (rows, cols) = snapshot.size;
    let label_width = rows.saturating_sub(1).to_string().len();
    let col_width = cols.saturating_sub(1).to_string().len();
    let mut out = String::new();

    let status = match snapshot.status {
        GameStatus::Playing => "playing",
        GameStatus::Won => "you won!",
        GameStatus::Lost => "boom, game over",
    };
    // writing into a String cannot fail
    let _ = writeln!(out, "{}  mines left: {}", status, snapshot.mines_left());

    let _ = write!(out, "{:label_width$} ", "");
    for col in 0..cols {
        let _ = write!(out, " {:>col_width$}", col);
    }
    out.push('\n');

    for (row, line) in snapshot.cells.outer_iter().enumerate() {
        let _ = write!(out, "{:>label_width$} ", row);
        for &view in line.iter() {
            let _ = write!(out, " {:>col_width$}", glyph(view));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use sapper_core::{Board, MineLayout};

    fn game(size: (u16, u16), mines: &[(u16, u16)]) -> Game {
        Game::from_board(Board::from_layout(
            MineLayout::from_mine_coords(size, mines).unwrap(),
        ))
    }

    #[test]
    fn fresh_board_is_all_hidden() {
        let game = game((2, 3), &[(0, 0)]);

        assert_eq!(
            render(&game),
            "playing  mines left: 1\n   0 1 2\n0  # # #\n1  # # #\n"
        );
    }

    #[test]
    fn shows_counts_flags_and_mines() {
        let mut game = game((2, 3), &[(0, 0)]);
        game.toggle_flag((1, 0)).unwrap();
        game.reveal_cell((0, 2)).unwrap();

        assert_eq!(
            render(&game),
            "playing  mines left: 0\n   0 1 2\n0  # 1 .\n1  F 1 .\n"
        );

        game.reveal_cell((0, 0)).unwrap();
        assert_eq!(
            render(&game),
            "boom, game over  mines left: 0\n   0 1 2\n0  * 1 .\n1  F 1 .\n"
        );
    }

    #[test]
    fn wide_boards_pad_labels() {
        let game = game((1, 12), &[]);
        let header = render(&game).lines().nth(1).unwrap().to_string();

        assert!(header.ends_with("10 11"));
        assert!(header.starts_with("    0  1"));
    }
}
