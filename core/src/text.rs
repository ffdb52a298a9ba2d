//! Plain-text board sketches, one line per row with `O` for a lit cell and `.` for an unlit one:
//!
//! ```text
//! . . .
//! O O .
//! . . .
//! ```

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::*;

const LIT: char = 'O';
const UNLIT: char = '.';

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, &lit) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", if lit { LIT } else { UNLIT })?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows = s
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        LIT => Ok(true),
                        UNLIT => Ok(false),
                        other => Err(GameError::InvalidCell(other)),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<Vec<_>>>()?;
        Board::from_rows(rows.as_slice())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn parses_documented_sketch() {
        let board: Board = ". . .\nO O .\n. . .".parse().unwrap();
        assert_eq!(
            board,
            Board::from_rows(&[
                [false, false, false],
                [true, true, false],
                [false, false, false],
            ])
            .unwrap()
        );
    }

    #[test]
    fn display_matches_parse_input() {
        let sketch = "O . O\n. O .";
        let board: Board = sketch.parse().unwrap();
        assert_eq!(board.to_string(), sketch);
    }

    #[test]
    fn parse_ignores_spacing_and_blank_lines() {
        let board: Board = "\n  O.\n\n .O  \n".parse().unwrap();
        assert_eq!(board.size(), (2, 2));
        assert!(board[(0, 0)]);
        assert!(board[(1, 1)]);
        assert_eq!(board.lit_count(), 2);
    }

    #[test]
    fn parse_rejects_bad_input() {
        assert_eq!("O x".parse::<Board>(), Err(GameError::InvalidCell('x')));
        assert_eq!("O .\nO".parse::<Board>(), Err(GameError::InvalidBoardShape));
        assert_eq!("".parse::<Board>(), Err(GameError::InvalidSize));
    }
}
