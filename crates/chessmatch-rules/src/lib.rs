//! Match rules: turn sequencing, move legality, check and checkmate detection.

mod chess_match;
mod error;
mod setup;

pub use chess_match::{ChessMatch, MatchStatus};
pub use error::{MatchError, UnknownSetup};
pub use setup::Setup;
