pub mod board;
pub mod catalog;
pub mod layout;
pub mod transfer;

pub use board::{
    scatter_positions, scatter_seed, snap_tolerance, DropOutcome, Piece, PieceId, PuzzleBoard,
    SCATTER_SEED,
};
pub use catalog::{image_by_slug, ImageEntry, DEFAULT_IMAGE_SLUG, IMAGE_CATALOG};
pub use layout::{compute_layout, Difficulty, PuzzleLayout, DIFFICULTIES};
pub use transfer::{decode, encode, DragPayload};
