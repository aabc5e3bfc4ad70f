//! Demo driver: random legal self-play.
//!
//! Plays a handful of uniformly random legal moves for each side in turn,
//! rendering the position after every move. Useful for eyeballing the
//! legality pipeline end to end; run with `RUST_LOG=debug` for move-level
//! logging.

use log::info;
use rand::prelude::IndexedRandom;

use mailbox_chess::board::chess_board::Board;
use mailbox_chess::board::chess_types::{Color, Square};
use mailbox_chess::move_generation::legal_moves::generate_legal_moves;
use mailbox_chess::utils::render_board::render_board;

const DEMO_PLIES: usize = 24;

fn main() {
    env_logger::init();

    let mut board = Board::new();
    let mut rng = rand::rng();
    let mut side = Color::White;

    println!("{}\n", render_board(&board));

    for ply in 1..=DEMO_PLIES {
        let all_moves = generate_legal_moves(&mut board, side);
        let candidates: Vec<(Square, Square)> = all_moves
            .iter()
            .flat_map(|piece_moves| {
                let from = piece_moves.from;
                piece_moves.moves.iter().map(move |&to| (from, to))
            })
            .collect();

        let Some(&(from, to)) = candidates.choose(&mut rng) else {
            info!("no legal moves for {side} at ply {ply}, stopping");
            break;
        };

        if let Err(err) = board.move_piece(from.row, from.col, to.row, to.col) {
            eprintln!("move rejected: {err}");
            break;
        }

        println!("ply {ply}: {side} plays {from} -> {to}");
        println!("{}\n", render_board(&board));
        side = side.opposite();
    }
}
