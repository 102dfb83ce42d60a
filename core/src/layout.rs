use serde::{Deserialize, Serialize};

pub const EASY_GRID: (u32, u32) = (3, 2);
pub const MEDIUM_GRID: (u32, u32) = (6, 4);
pub const HARD_GRID: (u32, u32) = (9, 6);

pub const DIFFICULTIES: [Difficulty; 3] =
    [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Default for Difficulty {
    fn default() -> Self {
        Difficulty::Medium
    }
}

impl Difficulty {
    pub fn grid(self) -> (u32, u32) {
        match self {
            Difficulty::Easy => EASY_GRID,
            Difficulty::Medium => MEDIUM_GRID,
            Difficulty::Hard => HARD_GRID,
        }
    }

    pub fn slug(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }

    pub fn parse(value: &str) -> Difficulty {
        match value.trim().to_ascii_lowercase().as_str() {
            "easy" => Difficulty::Easy,
            "medium" => Difficulty::Medium,
            "hard" => Difficulty::Hard,
            _ => Difficulty::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PuzzleLayout {
    pub cols: u32,
    pub rows: u32,
    pub frame_width: f32,
    pub frame_height: f32,
    pub piece_width: f32,
    pub piece_height: f32,
}

impl PuzzleLayout {
    pub fn total_pieces(&self) -> usize {
        (self.cols * self.rows) as usize
    }
}

pub fn compute_layout(
    image_width: f32,
    image_height: f32,
    viewport_width: f32,
    difficulty: Difficulty,
) -> Option<PuzzleLayout> {
    if image_width <= 0.0 || image_height <= 0.0 || viewport_width <= 0.0 {
        return None;
    }
    let (cols, rows) = difficulty.grid();
    let frame_width = viewport_width;
    let frame_height = image_height * (viewport_width / image_width);
    Some(PuzzleLayout {
        cols,
        rows,
        frame_width,
        frame_height,
        piece_width: frame_width / cols as f32,
        piece_height: frame_height / rows as f32,
    })
}
