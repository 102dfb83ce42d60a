use serde::{Deserialize, Serialize};

use crate::board::PieceId;

// The pick-up half of the drag contract; the drop position arrives with the
// drop event itself.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DragPayload {
    pub piece_id: PieceId,
    pub grab: (f32, f32),
}

pub fn encode(payload: &DragPayload) -> Option<String> {
    serde_json::to_string(payload).ok()
}

pub fn decode(raw: &str) -> Option<DragPayload> {
    serde_json::from_str(raw).ok()
}
