//! Rule enforcement for standard chess.
//!
//! A [`Board`](board::Board) holds the pieces and recomputes, for each of them, which
//! squares it can move to or capture on. Moves stated in algebraic notation are resolved
//! against those reachability grids, executed atomically, and answered with a
//! [`Rebound`](chess_move::Rebound) describing their side effects.

pub mod board;
pub mod chess_move;
pub mod input_handler;
pub mod prelude;
