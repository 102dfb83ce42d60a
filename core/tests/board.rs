use pintu_core::board::{rand_unit, scatter_positions};
use pintu_core::{
    compute_layout, snap_tolerance, Difficulty, DragPayload, DropOutcome, PuzzleBoard,
    PuzzleLayout,
};

const IMAGE_SRC: &str = "images/test.jpg";

fn medium_layout() -> PuzzleLayout {
    // 1200x800 image at viewport width 1200: 6x4 grid of 200x200 pieces.
    compute_layout(1200.0, 800.0, 1200.0, Difficulty::Medium).unwrap()
}

fn loose_board(layout: PuzzleLayout) -> PuzzleBoard {
    let positions = vec![(5.0, 900.0); layout.total_pieces()];
    PuzzleBoard::new(layout, IMAGE_SRC, &positions)
}

fn payload(piece_id: usize) -> DragPayload {
    DragPayload {
        piece_id,
        grab: (0.0, 0.0),
    }
}

fn solve_all(board: &mut PuzzleBoard) {
    for id in 0..board.pieces().len() {
        let correct = board.piece(id).unwrap().correct;
        board.end_drag(&payload(id), correct);
    }
}

#[test]
fn piece_ids_are_dense_and_row_major() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let layout = compute_layout(1200.0, 800.0, 1200.0, difficulty).unwrap();
        let board = loose_board(layout);
        let (cols, rows) = difficulty.grid();
        assert_eq!(board.pieces().len(), (cols * rows) as usize);
        for (index, piece) in board.pieces().iter().enumerate() {
            assert_eq!(piece.id, index);
            let col = (piece.id % cols as usize) as f32;
            let row = (piece.id / cols as usize) as f32;
            assert_eq!(
                piece.correct,
                (col * layout.piece_width, row * layout.piece_height)
            );
            assert_eq!(piece.crop, (-piece.correct.0, -piece.correct.1));
            assert!(!piece.placed);
        }
    }
}

#[test]
fn drop_at_exact_correct_position_places_on_every_grid() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let layout = compute_layout(1200.0, 800.0, 1200.0, difficulty).unwrap();
        let mut board = loose_board(layout);
        let last = board.pieces().len() - 1;
        let correct = board.piece(last).unwrap().correct;
        let outcome = board.end_drag(&payload(last), correct);
        assert_eq!(outcome, DropOutcome::Placed);
        let piece = board.piece(last).unwrap();
        assert!(piece.placed);
        assert_eq!(piece.current, correct);
    }
}

#[test]
fn drop_just_inside_tolerance_places_just_outside_does_not() {
    let layout = medium_layout();
    let tolerance = snap_tolerance(layout.piece_width);
    assert_eq!(tolerance, 40.0);

    let mut board = loose_board(layout);
    let correct = board.piece(7).unwrap().correct;
    assert_eq!(correct, (200.0, 200.0));

    let miss = board.end_drag(&payload(7), (correct.0 + tolerance + 1.0, correct.1));
    assert_eq!(miss, DropOutcome::Loose);
    assert!(!board.piece(7).unwrap().placed);
    assert_eq!(
        board.piece(7).unwrap().current,
        (correct.0 + tolerance + 1.0, correct.1)
    );

    let hit = board.end_drag(&payload(7), (correct.0 + tolerance - 1.0, correct.1));
    assert_eq!(hit, DropOutcome::Placed);
    assert_eq!(board.piece(7).unwrap().current, correct);
}

#[test]
fn worked_medium_example() {
    // Piece 7 sits at row 1, col 1 of the 6x4 grid; tolerance floor is 40px.
    let layout = medium_layout();
    let mut board = loose_board(layout);
    assert_eq!(board.piece(7).unwrap().correct, (200.0, 200.0));

    assert_eq!(
        board.end_drag(&payload(7), (260.0, 200.0)),
        DropOutcome::Loose
    );
    assert_eq!(
        board.end_drag(&payload(7), (205.0, 195.0)),
        DropOutcome::Placed
    );
    assert_eq!(board.piece(7).unwrap().current, (200.0, 200.0));
}

#[test]
fn grab_offset_shifts_the_drop_position() {
    let layout = medium_layout();
    let mut board = loose_board(layout);
    let grabbed = board
        .begin_drag(0, (55.0, 930.0))
        .expect("loose piece is draggable");
    assert_eq!(grabbed.piece_id, 0);
    assert_eq!(grabbed.grab, (50.0, 30.0));

    // Pointer released at (52, 28): piece corner lands at (2, -2), inside
    // tolerance of correct (0, 0).
    let outcome = board.end_drag(&grabbed, (52.0, 28.0));
    assert_eq!(outcome, DropOutcome::Placed);
}

#[test]
fn placed_piece_refuses_pickup_and_further_drops() {
    let layout = medium_layout();
    let mut board = loose_board(layout);
    let correct = board.piece(3).unwrap().correct;
    assert_eq!(board.end_drag(&payload(3), correct), DropOutcome::Placed);

    assert!(board.begin_drag(3, correct).is_none());
    let before = *board.piece(3).unwrap();
    assert_eq!(
        board.end_drag(&payload(3), (900.0, 900.0)),
        DropOutcome::Ignored
    );
    assert_eq!(*board.piece(3).unwrap(), before);
}

#[test]
fn stale_piece_id_is_a_silent_no_op() {
    let layout = medium_layout();
    let mut board = loose_board(layout);
    let snapshot: Vec<_> = board.pieces().to_vec();
    assert_eq!(
        board.end_drag(&payload(9999), (0.0, 0.0)),
        DropOutcome::Ignored
    );
    assert_eq!(board.pieces(), snapshot.as_slice());
    assert!(board.begin_drag(9999, (0.0, 0.0)).is_none());
}

#[test]
fn rejected_drop_leaves_piece_loose_at_drop_point() {
    let layout = medium_layout();
    let mut board = loose_board(layout);
    assert_eq!(
        board.end_drag(&payload(0), (700.0, 500.0)),
        DropOutcome::Loose
    );
    let piece = board.piece(0).unwrap();
    assert!(!piece.placed);
    assert_eq!(piece.current, (700.0, 500.0));

    // Still draggable afterwards, grab measured against the new position.
    let grabbed = board.begin_drag(0, (710.0, 510.0)).unwrap();
    assert_eq!(grabbed.grab, (10.0, 10.0));
}

#[test]
fn completion_flips_exactly_on_the_last_placement() {
    let layout = compute_layout(1200.0, 800.0, 1200.0, Difficulty::Easy).unwrap();
    let mut board = loose_board(layout);
    let total = board.pieces().len();
    for id in 0..total {
        assert!(!board.is_complete());
        let correct = board.piece(id).unwrap().correct;
        let outcome = board.end_drag(&payload(id), correct);
        if id + 1 == total {
            assert_eq!(outcome, DropOutcome::Solved);
        } else {
            assert_eq!(outcome, DropOutcome::Placed);
        }
    }
    assert!(board.is_complete());
    assert_eq!(board.placed_count(), total);
}

#[test]
fn recreating_the_board_discards_progress() {
    let layout = medium_layout();
    let mut board = loose_board(layout);
    solve_all(&mut board);
    assert!(board.is_complete());

    let board = PuzzleBoard::scrambled(layout, IMAGE_SRC, 7, 1200.0, 1400.0);
    assert!(!board.is_complete());
    assert_eq!(board.placed_count(), 0);
    assert!(board.pieces().iter().all(|piece| !piece.placed));
}

#[test]
fn scatter_stays_below_frame_within_viewport() {
    let layout = medium_layout();
    let positions = scatter_positions(42, &layout, 1200.0, 1400.0);
    assert_eq!(positions.len(), layout.total_pieces());
    for (x, y) in positions {
        assert!(x >= 0.0 && x <= 1200.0 - layout.piece_width);
        assert!(y >= layout.frame_height);
        assert!(y <= 1400.0 - layout.piece_height);
    }
}

#[test]
fn scatter_clamps_on_short_viewports() {
    let layout = medium_layout();
    // Viewport shorter than the frame: the below-frame band does not exist,
    // positions must still be valid and non-negative.
    let positions = scatter_positions(42, &layout, 1200.0, 500.0);
    for (x, y) in positions {
        assert!(x >= 0.0);
        assert!(y >= 0.0);
        assert!(y <= 500.0 - layout.piece_height);
    }
}

#[test]
fn scatter_is_deterministic_per_seed() {
    let layout = medium_layout();
    let first = scatter_positions(9, &layout, 1200.0, 1400.0);
    let again = scatter_positions(9, &layout, 1200.0, 1400.0);
    let other = scatter_positions(10, &layout, 1200.0, 1400.0);
    assert_eq!(first, again);
    assert_ne!(first, other);
}

#[test]
fn rand_unit_stays_in_unit_interval() {
    for salt in 0..256 {
        let value = rand_unit(0xDEAD_BEEF, salt);
        assert!((0.0..1.0).contains(&value));
    }
}
