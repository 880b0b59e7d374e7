//! Match controller: turn sequencing, move legality, check and checkmate.
//!
//! Legality is decided by simulation. A move is executed on the board, the
//! mover's king is tested for attack, and the move is undone if it exposed
//! the king. Checkmate search does the same for every candidate move of the
//! defending side. Every simulated move is rolled back with
//! [`ChessMatch::undo_move`], which restores occupancy, cached positions,
//! move counters and the captured set exactly.

use std::collections::BTreeSet;

use tracing::{debug, info, trace};

use chessmatch_core::{Board, BoardError, ChessPosition, Color, Piece, PieceId, PieceKind, Position};

use crate::error::MatchError;
use crate::setup::Setup;

/// Where a match stands after the last committed move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchStatus {
    /// Play continues and the player to move is not in check.
    InProgress,
    /// Play continues and the player to move is in check.
    Check,
    /// The player to move was checkmated by `winner`.
    Finished {
        /// The side that delivered mate.
        winner: Color,
    },
}

/// A single game: board, turn counter, player to move, and capture bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChessMatch {
    board: Board,
    turn: u32,
    current_player: Color,
    finished: bool,
    check: bool,
    /// Every piece ever placed on the board, captured or not.
    on_board: BTreeSet<PieceId>,
    captured: BTreeSet<PieceId>,
}

impl ChessMatch {
    /// Start a match with the default [`Setup::Demo`] layout.
    pub fn new() -> Result<ChessMatch, MatchError> {
        Self::with_setup(Setup::default())
    }

    /// Start a match with the given layout.
    pub fn with_setup(setup: Setup) -> Result<ChessMatch, MatchError> {
        let mut chess_match = ChessMatch {
            board: Board::new(),
            turn: 1,
            current_player: Color::White,
            finished: false,
            check: false,
            on_board: BTreeSet::new(),
            captured: BTreeSet::new(),
        };
        setup.apply(&mut chess_match)?;
        debug!(%setup, "match created");
        Ok(chess_match)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Turn number, starting at 1 and incremented after every committed move.
    #[inline]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[inline]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Whether the player to move is in check.
    #[inline]
    pub fn check(&self) -> bool {
        self.check
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn status(&self) -> MatchStatus {
        if self.finished {
            MatchStatus::Finished {
                winner: self.current_player,
            }
        } else if self.check {
            MatchStatus::Check
        } else {
            MatchStatus::InProgress
        }
    }

    /// Resolve a piece id, whether it is in play or captured.
    #[inline]
    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.board.piece(id)
    }

    /// Create a piece and place it at a human coordinate (`'a'..='h'`, `1..=8`).
    pub fn place_new_piece(
        &mut self,
        column: char,
        row: u8,
        kind: PieceKind,
        color: Color,
    ) -> Result<PieceId, MatchError> {
        let position = ChessPosition::new(column, row)?.to_position();
        if self.board.piece_at(position)?.is_some() {
            return Err(BoardError::Occupied { position }.into());
        }
        let id = self.board.add_piece(kind, color)?;
        self.board.place_piece(id, position)?;
        self.on_board.insert(id);
        Ok(id)
    }

    /// Check that the player to move may pick up the piece on `position`.
    pub fn validate_origin(&self, position: Position) -> Result<(), MatchError> {
        let piece = self
            .board
            .piece_at(position)?
            .ok_or(MatchError::EmptyOrigin { position })?;
        if piece.color() != self.current_player {
            return Err(MatchError::NotYourPiece { position });
        }
        if !piece.has_any_possible_move(&self.board) {
            return Err(MatchError::NoPossibleMoves { position });
        }
        Ok(())
    }

    /// Check that the piece on `origin` can reach `destination`.
    pub fn validate_target(&self, origin: Position, destination: Position) -> Result<(), MatchError> {
        if !self.board.contains(destination) {
            return Err(BoardError::OutOfBounds { position: destination }.into());
        }
        let piece = self
            .board
            .piece_at(origin)?
            .ok_or(MatchError::EmptyOrigin { position: origin })?;
        if !piece.can_move_to(&self.board, destination) {
            return Err(MatchError::IllegalTarget { origin, destination });
        }
        Ok(())
    }

    /// Relocate the piece on `origin` to `destination`, capturing any occupant.
    ///
    /// No legality checks beyond occupancy and bounds. Returns the captured piece.
    pub fn execute_move(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<Option<PieceId>, MatchError> {
        if !self.board.contains(destination) {
            return Err(BoardError::OutOfBounds { position: destination }.into());
        }
        let mover = self
            .board
            .remove_piece(origin)?
            .ok_or(MatchError::EmptyOrigin { position: origin })?;
        self.board.increment_move_count(mover)?;
        let captured = self.board.remove_piece(destination)?;
        self.board.place_piece(mover, destination)?;
        if let Some(id) = captured {
            self.captured.insert(id);
        }
        Ok(captured)
    }

    /// Exact inverse of [`execute_move`](ChessMatch::execute_move).
    ///
    /// `captured` must be what `execute_move` returned. The arguments are
    /// checked against the board before anything changes; a mismatch returns
    /// [`MatchError::UndoMismatch`] and leaves the match untouched.
    pub fn undo_move(
        &mut self,
        origin: Position,
        destination: Position,
        captured: Option<PieceId>,
    ) -> Result<(), MatchError> {
        let mismatch = |reason| MatchError::UndoMismatch {
            origin,
            destination,
            reason,
        };

        let mover = self
            .board
            .piece_at(destination)?
            .ok_or_else(|| mismatch("destination is empty"))?;
        if origin != destination && self.board.piece_at(origin)?.is_some() {
            return Err(mismatch("origin is occupied"));
        }
        if mover.move_count() == 0 {
            return Err(mismatch("piece on destination has never moved"));
        }
        let mover = mover.id();

        if let Some(id) = captured {
            if !self.captured.contains(&id) {
                return Err(mismatch("piece is not in the captured set"));
            }
            let taken_at = self.board.piece(id).and_then(Piece::position);
            if taken_at != Some(destination) {
                return Err(mismatch("piece was not captured on destination"));
            }
        }

        self.board.remove_piece(destination)?;
        self.board.decrement_move_count(mover)?;
        if let Some(id) = captured {
            self.board.place_piece(id, destination)?;
            self.captured.remove(&id);
        }
        self.board.place_piece(mover, origin)?;
        Ok(())
    }

    /// Play a move for the current player.
    ///
    /// The move is rejected without any state change if the origin or target
    /// is invalid, or if it would leave the mover's king in check. On success
    /// the check flag is recomputed for the opponent; checkmate finishes the
    /// match, otherwise the turn advances and the player flips.
    pub fn make_move(
        &mut self,
        origin: Position,
        destination: Position,
    ) -> Result<Option<PieceId>, MatchError> {
        if self.finished {
            return Err(MatchError::MatchFinished);
        }
        self.validate_origin(origin)?;
        self.validate_target(origin, destination)?;

        let us = self.current_player;
        let them = !us;
        let captured = self.execute_move(origin, destination)?;

        let verdict = self.is_check(us).and_then(|self_check| {
            if self_check {
                return Ok(None);
            }
            let check = self.is_check(them)?;
            let mate = check && self.is_checkmate(them)?;
            Ok(Some((check, mate)))
        });
        let (check, mate) = match verdict {
            Ok(Some(outcome)) => outcome,
            Ok(None) => {
                self.undo_move(origin, destination, captured)?;
                debug!(player = %us, %origin, %destination, "move rejected: self-check");
                return Err(MatchError::SelfCheck);
            }
            Err(err) => {
                self.undo_move(origin, destination, captured)?;
                return Err(err);
            }
        };

        debug!(
            turn = self.turn,
            player = %us,
            %origin,
            %destination,
            captured = captured.is_some(),
            "move committed"
        );
        self.check = check;
        if mate {
            self.finished = true;
            info!(winner = %us, turn = self.turn, "checkmate");
        } else {
            if check {
                info!(player = %them, "check");
            }
            self.turn += 1;
            self.current_player = them;
        }
        Ok(captured)
    }

    /// Return `true` if any opposing piece in play can reach `color`'s king.
    pub fn is_check(&self, color: Color) -> Result<bool, MatchError> {
        let king = self.king_position(color)?;
        let attacked = self.pieces_in_play(!color).into_iter().any(|id| {
            self.board
                .piece(id)
                .is_some_and(|piece| piece.can_move_to(&self.board, king))
        });
        Ok(attacked)
    }

    /// Return `true` if `color` is in check and no move of any of its pieces
    /// gets it out. Every candidate is simulated and rolled back.
    pub fn is_checkmate(&mut self, color: Color) -> Result<bool, MatchError> {
        if !self.is_check(color)? {
            return Ok(false);
        }

        for id in self.pieces_in_play(color) {
            let Some(piece) = self.board.piece(id) else {
                continue;
            };
            let Some(origin) = piece.position() else {
                continue;
            };
            let candidates = piece.possible_moves(&self.board);

            for target in candidates {
                let captured = self.execute_move(origin, target)?;
                let still_in_check = self.is_check(color);
                self.undo_move(origin, target, captured)?;
                if !still_in_check? {
                    trace!(%color, %origin, %target, "check can be escaped");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }

    /// Pieces of `color` that have been captured.
    pub fn captured_pieces(&self, color: Color) -> BTreeSet<PieceId> {
        self.of_color(&self.captured, color).collect()
    }

    /// Pieces of `color` still on the board.
    pub fn pieces_in_play(&self, color: Color) -> BTreeSet<PieceId> {
        self.of_color(&self.on_board, color)
            .filter(|id| !self.captured.contains(id))
            .collect()
    }

    fn of_color<'a>(
        &'a self,
        ids: &'a BTreeSet<PieceId>,
        color: Color,
    ) -> impl Iterator<Item = PieceId> + 'a {
        ids.iter()
            .copied()
            .filter(move |&id| self.board.piece(id).is_some_and(|piece| piece.color() == color))
    }

    fn king_position(&self, color: Color) -> Result<Position, MatchError> {
        self.pieces_in_play(color)
            .into_iter()
            .filter_map(|id| self.board.piece(id))
            .find(|piece| piece.kind() == PieceKind::King)
            .and_then(Piece::position)
            .ok_or(MatchError::MissingKing { color })
    }
}
