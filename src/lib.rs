//! Crate root module declarations for the mailbox chess rules engine.
//!
//! This file exposes the top-level subsystems (board model, move generation,
//! and utility helpers) so binaries, tests, and external tooling can import
//! stable module paths.

pub mod board {
    pub mod chess_board;
    pub mod chess_types;
    pub mod square_status;
}

pub mod move_generation {
    pub mod legal_moves;
    pub mod pseudo_moves;
    pub mod slider_rays;
    pub mod step_offsets;
}

pub mod utils {
    pub mod render_board;
}

pub mod errors;
