use std::fmt;

use crate::coords::GridPos;

/// Parses a square name like `e4` into a [`GridPos`].
pub fn square(text: &str) -> Result<GridPos, NotationError> {
    let mut chars = text.chars();
    let (Some(file_ch), Some(rank_ch), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(NotationError::BadSquare(text.to_string()));
    };
    if !('a'..='h').contains(&file_ch) || !('1'..='8').contains(&rank_ch) {
        return Err(NotationError::BadSquare(text.to_string()));
    }
    Ok(GridPos::new(
        file_ch as i32 - 'a' as i32,
        rank_ch as i32 - '1' as i32,
    ))
}

/// Inverse of [`square`]; `None` for off-board positions.
pub fn square_name(pos: GridPos) -> Option<String> {
    if !pos.on_board() {
        return None;
    }
    let file = char::from(b'a' + pos.file as u8);
    let rank = char::from(b'1' + pos.rank as u8);
    Some(format!("{file}{rank}"))
}

/// Parses a `from:to` move like `e2:e4`.
pub fn parse_move(text: &str) -> Result<(GridPos, GridPos), NotationError> {
    let Some((from, to)) = text.split_once(':') else {
        return Err(NotationError::BadMove(text.to_string()));
    };
    Ok((square(from)?, square(to)?))
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NotationError {
    BadSquare(String),
    BadMove(String),
}

impl fmt::Display for NotationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NotationError::BadSquare(text) => {
                write!(f, "invalid square '{text}', expected a1..h8")
            }
            NotationError::BadMove(text) => {
                write!(f, "invalid move '{text}', expected from:to like e2:e4")
            }
        }
    }
}

impl std::error::Error for NotationError {}
