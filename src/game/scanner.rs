use crate::board::Board;
use crate::game::Direction;

pub struct RayScanner;

impl RayScanner {
    /// Walk from (x, y) in `direction`, concatenating the character at
    /// each visited cell, stopping when the next step would leave the
    /// grid. The starting cell is always included, so the candidate is
    /// never empty for an in-bounds start.
    pub fn scan(board: &Board, x: usize, y: usize, direction: Direction) -> String {
        let (dx, dy) = direction.step();
        let mut candidate = String::new();

        let mut cx = x as i32;
        let mut cy = y as i32;

        while cx >= 0 && cy >= 0 && (cx as usize) < board.cols() && (cy as usize) < board.rows() {
            candidate.push(board.at(cx as usize, cy as usize));
            cx += dx;
            cy += dy;
        }

        candidate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_3x4() -> Board {
        // ABCD
        // EFGH
        // IJKL
        Board::from_line("ABCDEFGHIJKL", 3, 4).unwrap()
    }

    #[test]
    fn test_right_ray_spans_rest_of_row() {
        let board = board_3x4();
        assert_eq!(RayScanner::scan(&board, 0, 0, Direction::Right), "ABCD");
        assert_eq!(RayScanner::scan(&board, 2, 1, Direction::Right), "GH");
    }

    #[test]
    fn test_left_ray_reverses_row_prefix() {
        let board = board_3x4();
        assert_eq!(RayScanner::scan(&board, 3, 0, Direction::Left), "DCBA");
    }

    #[test]
    fn test_vertical_rays() {
        let board = board_3x4();
        assert_eq!(RayScanner::scan(&board, 1, 0, Direction::Down), "BFJ");
        assert_eq!(RayScanner::scan(&board, 1, 2, Direction::Up), "JFB");
    }

    #[test]
    fn test_diagonal_rays_truncate_at_edge() {
        let board = board_3x4();
        assert_eq!(RayScanner::scan(&board, 0, 0, Direction::DownRight), "AFK");
        assert_eq!(RayScanner::scan(&board, 3, 0, Direction::DownLeft), "DGJ");
        assert_eq!(RayScanner::scan(&board, 1, 1, Direction::UpRight), "FC");
        assert_eq!(RayScanner::scan(&board, 1, 1, Direction::UpLeft), "FA");
    }

    #[test]
    fn test_start_cell_is_always_included() {
        let board = board_3x4();
        for direction in Direction::ALL {
            let candidate = RayScanner::scan(&board, 3, 2, direction);
            assert!(candidate.starts_with('L'), "{direction:?}: {candidate}");
            assert!(!candidate.is_empty());
        }
    }

    #[test]
    fn test_last_column_right_ray_is_one_char() {
        let board = board_3x4();
        assert_eq!(RayScanner::scan(&board, 3, 1, Direction::Right), "H");
    }
}
