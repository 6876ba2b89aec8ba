//! Grid tests - slide/merge rules and their agreement with the predicates

use tui_2048::core::{move_row_left, row_is_left_movable, tighten, Grid, MoveOutcome, TileRng};
use tui_2048::types::{Direction, Tile};

fn grid(rows: &[&[Tile]]) -> Grid {
    Grid::from_rows(rows.iter().map(|r| r.to_vec()).collect()).unwrap()
}

/// Random board: roughly a third empty, the rest small powers of two so
/// merges are common.
fn random_grid(rng: &mut TileRng, size: usize) -> Grid {
    let rows: Vec<Vec<Tile>> = (0..size)
        .map(|_| {
            (0..size)
                .map(|_| match rng.range(3) {
                    0 => 0,
                    _ => (2 as Tile) << rng.range(4),
                })
                .collect()
        })
        .collect();
    Grid::from_rows(rows).unwrap()
}

#[test]
fn test_tighten_is_idempotent_on_random_rows() {
    let mut rng = TileRng::new(1);
    for _ in 0..500 {
        let mut row: Vec<Tile> = (0..6)
            .map(|_| if rng.range(2) == 0 { 0 } else { 2 })
            .collect();
        tighten(&mut row);
        let once = row.clone();
        tighten(&mut row);
        assert_eq!(row, once);
    }
}

#[test]
fn test_documented_row_cases() {
    let cases: [(&[Tile], &[Tile]); 4] = [
        (&[2, 2, 4], &[4, 4, 0]),
        (&[2, 2, 2, 2], &[4, 4, 0, 0]),
        (&[0, 0, 2, 2], &[4, 0, 0, 0]),
        (&[2, 0, 2, 4], &[4, 4, 0, 0]),
    ];
    for (input, expected) in cases {
        let mut row = input.to_vec();
        move_row_left(&mut row);
        assert_eq!(row, expected, "moving {:?} left", input);
    }
}

#[test]
fn test_documented_movability_cases() {
    assert!(!row_is_left_movable(&[2, 4, 0, 0]));
    assert!(row_is_left_movable(&[0, 2, 4, 0]));
}

#[test]
fn test_predicates_agree_with_moves_on_random_boards() {
    let mut rng = TileRng::new(2048);
    for size in 2..=6 {
        for _ in 0..300 {
            let g = random_grid(&mut rng, size);
            for dir in Direction::ALL {
                let mut moved = g.clone();
                let outcome = moved.apply(dir);
                assert_eq!(
                    outcome.changed,
                    g.can_move(dir),
                    "{:?} on\n{}",
                    dir,
                    g
                );
                assert_eq!(outcome.changed, moved != g);
            }
        }
    }
}

#[test]
fn test_move_right_is_mirror_of_move_left() {
    let mut rng = TileRng::new(5);
    for _ in 0..300 {
        let g = random_grid(&mut rng, 4);

        let mut right = g.clone();
        right.invert();
        let right_outcome = right.move_right();

        let mut left = g.clone();
        let left_outcome = left.move_left();
        left.invert();

        assert_eq!(right, left);
        assert_eq!(right_outcome, left_outcome);
    }
}

#[test]
fn test_vertical_moves_are_transposed_horizontal_moves() {
    let mut rng = TileRng::new(6);
    for _ in 0..300 {
        let g = random_grid(&mut rng, 5);

        let mut up = g.clone();
        up.move_up();
        let mut via_left = g.clone();
        via_left.transpose();
        via_left.move_left();
        via_left.transpose();
        assert_eq!(up, via_left);

        let mut down = g.clone();
        down.move_down();
        let mut via_right = g.clone();
        via_right.transpose();
        via_right.move_right();
        via_right.transpose();
        assert_eq!(down, via_right);
    }
}

#[test]
fn test_transforms_round_trip() {
    let mut rng = TileRng::new(7);
    for size in 2..=8 {
        let g = random_grid(&mut rng, size);
        let mut t = g.clone();
        t.transpose();
        t.transpose();
        assert_eq!(t, g);
        t.invert();
        t.invert();
        assert_eq!(t, g);
    }
}

#[test]
fn test_move_score_is_sum_of_merged_tiles() {
    let mut g = grid(&[&[2, 2, 4, 4], &[8, 0, 8, 0], &[0, 0, 0, 0], &[16, 16, 16, 0]]);
    let outcome = g.move_left();
    assert_eq!(outcome.score, 4 + 8 + 16 + 32);
    assert_eq!(
        g.rows(),
        vec![
            vec![4, 8, 0, 0],
            vec![16, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![32, 16, 0, 0],
        ]
    );
}

#[test]
fn test_full_board_can_still_merge() {
    let mut g = grid(&[&[2, 2, 4, 8], &[4, 8, 16, 32], &[8, 16, 32, 64], &[16, 32, 64, 128]]);
    assert!(g.is_full());
    assert!(g.can_move_left());
    assert!(!g.can_move_up());

    g.move_left();
    assert_eq!(g.empty_count(), 1);

    let mut rng = TileRng::new(0);
    assert_eq!(g.spawn(&mut rng), (0, 3));
}

#[test]
fn test_scenario_left_without_merges() {
    let mut g = grid(&[&[2, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 0], &[0, 0, 0, 2]]);
    let outcome = g.move_left();

    assert_eq!(outcome, MoveOutcome { changed: true, score: 0 });
    assert_eq!(g.row(0), &[2, 0, 0, 0]);
    assert_eq!(g.row(3), &[2, 0, 0, 0]);
    assert_eq!(g.tile_count(), 2);
}

#[test]
fn test_spawned_tiles_cover_every_empty_cell() {
    let mut rng = TileRng::new(13);
    let mut seen = [false; 4];
    for _ in 0..200 {
        let mut g = grid(&[&[0, 0], &[0, 0]]);
        let (r, c) = g.spawn(&mut rng);
        seen[r * 2 + c] = true;
    }
    assert!(seen.iter().all(|&s| s), "spawn never used some cells: {:?}", seen);
}
