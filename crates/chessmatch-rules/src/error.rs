//! Match rule violations.

use chessmatch_core::{BoardError, Color, Position};

/// Errors from [`ChessMatch`](crate::ChessMatch) operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    /// The selected origin cell holds no piece.
    #[error("there is no piece on {position}")]
    EmptyOrigin {
        /// The empty cell.
        position: Position,
    },
    /// The selected piece belongs to the player not on move.
    #[error("the piece on {position} is not yours")]
    NotYourPiece {
        /// Where the piece stands.
        position: Position,
    },
    /// The selected piece has an empty reachability matrix.
    #[error("there are no possible moves for the piece on {position}")]
    NoPossibleMoves {
        /// Where the piece stands.
        position: Position,
    },
    /// The destination is not in the piece's reachability matrix.
    #[error("the piece on {origin} can't move to {destination}")]
    IllegalTarget {
        /// Where the piece stands.
        origin: Position,
        /// The rejected destination.
        destination: Position,
    },
    /// The move would leave the mover's own king attacked. It was rolled back.
    #[error("you cannot put yourself in check")]
    SelfCheck,
    /// A side has no king in play.
    #[error("there is no {color} king on the board")]
    MissingKing {
        /// The side without a king.
        color: Color,
    },
    /// A move was attempted after checkmate.
    #[error("the match is already finished")]
    MatchFinished,
    /// `undo_move` was called with arguments that do not describe the last executed move.
    #[error("cannot undo move {origin} -> {destination}: {reason}")]
    UndoMismatch {
        /// Origin given to the undo.
        origin: Position,
        /// Destination given to the undo.
        destination: Position,
        /// What did not match.
        reason: &'static str,
    },
    /// An underlying board access failed.
    #[error(transparent)]
    Board(#[from] BoardError),
}

impl MatchError {
    /// Return `true` for errors caused by the player's input, after which the
    /// match is unchanged and play can continue. The rest signal a broken
    /// position or an internal inconsistency.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            MatchError::EmptyOrigin { .. }
                | MatchError::NotYourPiece { .. }
                | MatchError::NoPossibleMoves { .. }
                | MatchError::IllegalTarget { .. }
                | MatchError::SelfCheck
                | MatchError::MatchFinished
                | MatchError::Board(BoardError::OutOfBounds { .. })
        )
    }
}

/// A setup name that is not one of `demo`, `standard`, `empty`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown setup \"{name}\" (expected demo, standard or empty)")]
pub struct UnknownSetup {
    /// The name that failed to parse.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::MatchError;
    use chessmatch_core::{BoardError, Color, Position};

    #[test]
    fn match_error_display() {
        let err = MatchError::IllegalTarget {
            origin: Position::new(7, 2),
            destination: Position::new(6, 3),
        };
        assert_eq!(format!("{err}"), "the piece on c1 can't move to d2");
        assert_eq!(
            format!("{}", MatchError::MissingKing { color: Color::Black }),
            "there is no Black king on the board"
        );
    }

    #[test]
    fn recoverable_errors() {
        assert!(MatchError::SelfCheck.is_recoverable());
        assert!(MatchError::EmptyOrigin { position: Position::new(4, 4) }.is_recoverable());
        assert!(!MatchError::MissingKing { color: Color::White }.is_recoverable());
        let undo = MatchError::UndoMismatch {
            origin: Position::new(0, 0),
            destination: Position::new(1, 1),
            reason: "destination is empty",
        };
        assert!(!undo.is_recoverable());
    }

    #[test]
    fn board_error_is_transparent() {
        let err: MatchError = BoardError::OutOfBounds { position: Position::new(9, 9) }.into();
        assert!(matches!(err, MatchError::Board(BoardError::OutOfBounds { .. })));
        assert_eq!(format!("{err}"), "position (9, 9) is out of bounds");
    }
}
