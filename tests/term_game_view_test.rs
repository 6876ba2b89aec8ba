use tui_2048::core::{Game, GameConfig, GameSnapshot, Grid, TileRng};
use tui_2048::term::{Anchor, GameView, Viewport};
use tui_2048::types::{BANNER_OVER, BANNER_WIN, HELP_MOVE, HELP_RESTART};

fn snapshot(rows: Vec<Vec<u64>>) -> GameSnapshot {
    let grid = Grid::from_rows(rows).unwrap();
    Game::from_grid(GameConfig::default(), grid, TileRng::new(1)).snapshot()
}

fn classic() -> GameSnapshot {
    snapshot(vec![
        vec![2, 0, 0, 4],
        vec![0, 2048, 0, 0],
        vec![0, 0, 16, 0],
        vec![131072, 0, 0, 8],
    ])
}

#[test]
fn term_view_draws_score_table_and_help_lines() {
    let mut snap = classic();
    snap.score = 36;
    let fb = GameView::default().render(&snap, Viewport::new(40, 14));

    assert_eq!(fb.row_text(0), "SCORE: 36");
    assert_eq!(fb.row_text(1), "┌──────┬──────┬──────┬──────┐");
    assert_eq!(fb.row_text(2), "│  2   │      │      │  4   │");
    assert_eq!(fb.row_text(3), "├──────┼──────┼──────┼──────┤");
    assert_eq!(fb.row_text(4), "│      │ 2048 │      │      │");
    assert_eq!(fb.row_text(8), "│131072│      │      │  8   │");
    assert_eq!(fb.row_text(9), "└──────┴──────┴──────┴──────┘");
    assert_eq!(fb.row_text(10), HELP_MOVE);
    assert_eq!(fb.row_text(11), HELP_RESTART.trim_end());
}

#[test]
fn term_view_shows_win_banner_over_game_over() {
    let mut snap = classic();
    snap.over = true;
    let fb = GameView::default().render(&snap, Viewport::new(40, 14));
    assert_eq!(fb.row_text(10), BANNER_OVER);

    snap.win = true;
    let fb = GameView::default().render(&snap, Viewport::new(40, 14));
    assert_eq!(fb.row_text(10), BANNER_WIN);
    assert_eq!(fb.row_text(11), HELP_RESTART.trim_end());
}

#[test]
fn term_view_shows_best_score_after_restart() {
    let mut snap = classic();
    snap.score = 8;
    snap.best_score = 512;
    let fb = GameView::default().render(&snap, Viewport::new(40, 14));
    assert_eq!(fb.row_text(0), "SCORE: 8   BEST: 512");
}

#[test]
fn term_view_scales_with_grid_size() {
    let snap = snapshot(vec![vec![2, 0], vec![0, 4]]);
    let fb = GameView::default().render(&snap, Viewport::new(30, 10));

    assert_eq!(fb.row_text(1), "┌──────┬──────┐");
    assert_eq!(fb.row_text(4), "│      │  4   │");
    assert_eq!(fb.row_text(5), "└──────┴──────┘");
    assert_eq!(fb.row_text(6), HELP_MOVE);
}

#[test]
fn term_view_centers_block_when_asked() {
    let snap = classic();
    let view = GameView::default().with_anchor(Anchor::Center);

    // Block is 30x12 (the help line is wider than the table);
    // (50 - 30) / 2 = 10, (20 - 12) / 2 = 4.
    let fb = view.render(&snap, Viewport::new(50, 20));
    assert_eq!(fb.get(10, 5).unwrap().ch, '┌');
    assert_eq!(fb.get(38, 5).unwrap().ch, '┐');
    assert!(fb.row_text(4).trim_start().starts_with("SCORE: 0"));
}

#[test]
fn term_view_centers_small_board_with_full_help_lines() {
    let snap = snapshot(vec![vec![2, 0], vec![0, 4]]);
    let view = GameView::default().with_anchor(Anchor::Center);

    // Block is 30x8; (40 - 30) / 2 = 5, (12 - 8) / 2 = 2.
    let fb = view.render(&snap, Viewport::new(40, 12));
    assert_eq!(fb.get(5, 3).unwrap().ch, '┌');
    assert_eq!(fb.get(19, 3).unwrap().ch, '┐');
    assert_eq!(fb.row_text(8), format!("     {}", HELP_MOVE));
    assert_eq!(fb.row_text(9), format!("     {}", HELP_RESTART).trim_end());
}

#[test]
fn term_view_clips_on_tiny_viewports() {
    let snap = classic();
    let fb = GameView::default().render(&snap, Viewport::new(5, 3));
    assert_eq!(fb.height(), 3);
    assert_eq!(fb.text(), "SCORE\n┌────\n│  2");
}
