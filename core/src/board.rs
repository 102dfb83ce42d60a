use crate::layout::PuzzleLayout;
use crate::transfer::DragPayload;

pub type PieceId = usize;

pub const SCATTER_SEED: u32 = 0x5EED_0A11;
pub const SNAP_TOLERANCE_DIVISOR: f32 = 5.0;
pub const SNAP_TOLERANCE_MIN: f32 = 10.0;

pub fn splitmix32(mut value: u32) -> u32 {
    value = value.wrapping_add(0x9E37_79B9);
    let mut z = value;
    z = (z ^ (z >> 16)).wrapping_mul(0x85EB_CA6B);
    z = (z ^ (z >> 13)).wrapping_mul(0xC2B2_AE35);
    z ^ (z >> 16)
}

pub fn rand_unit(seed: u32, salt: u32) -> f32 {
    let mixed = splitmix32(seed ^ salt);
    let top = mixed >> 8;
    top as f32 / ((1u32 << 24) as f32)
}

pub fn rand_range(seed: u32, salt: u32, min: f32, max: f32) -> f32 {
    min + (max - min) * rand_unit(seed, salt)
}

pub fn scatter_seed(base: u32, nonce: u32, cols: u32, rows: u32) -> u32 {
    let grid = (cols << 16) ^ rows;
    base ^ nonce.wrapping_mul(0x9E37_79B9) ^ grid
}

pub fn snap_tolerance(piece_len: f32) -> f32 {
    (piece_len / SNAP_TOLERANCE_DIVISOR).max(SNAP_TOLERANCE_MIN)
}

// Loose pieces start in the band below the frame; both ranges collapse to a
// valid point when the viewport is too small to honor them.
pub fn scatter_positions(
    seed: u32,
    layout: &PuzzleLayout,
    viewport_width: f32,
    viewport_height: f32,
) -> Vec<(f32, f32)> {
    let min_x = 0.0f32;
    let max_x = (viewport_width - layout.piece_width).max(min_x);
    let max_y = (viewport_height - layout.piece_height).max(0.0);
    let min_y = layout.frame_height.min(max_y);

    let total = layout.total_pieces();
    let mut positions = Vec::with_capacity(total);
    for id in 0..total {
        let salt = (id as u32) << 1;
        let x = rand_range(seed, salt, min_x, max_x);
        let y = rand_range(seed, salt + 1, min_y, max_y);
        positions.push((x, y));
    }
    positions
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Piece {
    pub id: PieceId,
    pub current: (f32, f32),
    pub correct: (f32, f32),
    pub crop: (f32, f32),
    pub placed: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropOutcome {
    Ignored,
    Loose,
    Placed,
    Solved,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PuzzleBoard {
    layout: PuzzleLayout,
    image_src: String,
    pieces: Vec<Piece>,
}

impl PuzzleBoard {
    pub fn new(
        layout: PuzzleLayout,
        image_src: impl Into<String>,
        positions: &[(f32, f32)],
    ) -> Self {
        let mut pieces = Vec::with_capacity(layout.total_pieces());
        for row in 0..layout.rows {
            for col in 0..layout.cols {
                let id = (row * layout.cols + col) as usize;
                let correct = (
                    col as f32 * layout.piece_width,
                    row as f32 * layout.piece_height,
                );
                let current = positions.get(id).copied().unwrap_or((0.0, 0.0));
                pieces.push(Piece {
                    id,
                    current,
                    correct,
                    crop: (-correct.0, -correct.1),
                    placed: false,
                });
            }
        }
        Self {
            layout,
            image_src: image_src.into(),
            pieces,
        }
    }

    pub fn scrambled(
        layout: PuzzleLayout,
        image_src: impl Into<String>,
        seed: u32,
        viewport_width: f32,
        viewport_height: f32,
    ) -> Self {
        let positions = scatter_positions(seed, &layout, viewport_width, viewport_height);
        Self::new(layout, image_src, &positions)
    }

    pub fn layout(&self) -> &PuzzleLayout {
        &self.layout
    }

    pub fn image_src(&self) -> &str {
        &self.image_src
    }

    pub fn pieces(&self) -> &[Piece] {
        &self.pieces
    }

    pub fn piece(&self, id: PieceId) -> Option<&Piece> {
        self.pieces.get(id)
    }

    pub fn placed_count(&self) -> usize {
        self.pieces.iter().filter(|piece| piece.placed).count()
    }

    pub fn is_complete(&self) -> bool {
        self.pieces.iter().all(|piece| piece.placed)
    }

    pub fn begin_drag(&self, piece_id: PieceId, pointer: (f32, f32)) -> Option<DragPayload> {
        let piece = self.pieces.get(piece_id)?;
        if piece.placed {
            return None;
        }
        Some(DragPayload {
            piece_id,
            grab: (pointer.0 - piece.current.0, pointer.1 - piece.current.1),
        })
    }

    pub fn end_drag(&mut self, payload: &DragPayload, pointer: (f32, f32)) -> DropOutcome {
        let tolerance_x = snap_tolerance(self.layout.piece_width);
        let tolerance_y = snap_tolerance(self.layout.piece_height);
        let Some(piece) = self.pieces.get_mut(payload.piece_id) else {
            return DropOutcome::Ignored;
        };
        if piece.placed {
            return DropOutcome::Ignored;
        }
        let drop = (pointer.0 - payload.grab.0, pointer.1 - payload.grab.1);
        let near_x = (drop.0 - piece.correct.0).abs() < tolerance_x;
        let near_y = (drop.1 - piece.correct.1).abs() < tolerance_y;
        if !(near_x && near_y) {
            piece.current = drop;
            return DropOutcome::Loose;
        }
        piece.current = piece.correct;
        piece.placed = true;
        if self.pieces.iter().all(|piece| piece.placed) {
            DropOutcome::Solved
        } else {
            DropOutcome::Placed
        }
    }
}
