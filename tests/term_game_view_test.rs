use tui_snake::core::{GameConfig, GameSnapshot, GameState};
use tui_snake::term::{AnchorY, FrameBuffer, GameView, ProfileView, Viewport};
use tui_snake::types::{Cell, Direction};

fn running(body: &[Cell], food: Cell) -> GameSnapshot {
    GameState::with_layout(GameConfig::default(), 1, body, Direction::Right, Some(food))
        .unwrap()
        .snapshot()
}

fn panel_text(fb: &FrameBuffer, y: u16, from_x: u16) -> String {
    (from_x..fb.width())
        .filter_map(|x| fb.get(x, y).map(|g| g.ch))
        .collect::<String>()
        .trim()
        .to_string()
}

#[test]
fn term_view_renders_border_corners() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // 400/20 = 20 columns => 40 chars wide, 20 rows tall
    // plus border => 42x22
    assert_eq!(view.frame_size(&snap), (42, 22));
    let fb = view.render(&snap, Viewport::new(42, 22));

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(41, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(41, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_scales_board_units_to_grid() {
    let config = GameConfig::new(200, 100, 10);
    let snap = GameState::with_config(config, 1).snapshot();
    assert_eq!(GameView::default().frame_size(&snap), (42, 12));
    assert_eq!(GameView::new(1, 1).frame_size(&snap), (22, 12));
}

#[test]
fn term_view_renders_snake_cells_two_chars_wide() {
    let snap = running(
        &[Cell::new(100, 100), Cell::new(80, 100)],
        Cell::new(300, 300),
    );
    let fb = GameView::default().render(&snap, Viewport::new(42, 22));

    // Inside border: (1,1) origin. Head at grid (5,5), body at (4,5).
    let head = fb.get(11, 6).unwrap();
    assert_eq!(head.ch, '█');
    assert_eq!(fb.get(12, 6).unwrap().ch, '█');
    assert!(head.style.bold);

    let body = fb.get(9, 6).unwrap();
    assert_eq!(body.ch, '█');
    assert_eq!(fb.get(10, 6).unwrap().ch, '█');
    assert!(!body.style.bold);
    assert_ne!(head.style.fg, body.style.fg);

    // Food at grid (15,15).
    assert_eq!(fb.get(31, 16).unwrap().ch, '◆');
    assert_eq!(fb.get(32, 16).unwrap().ch, '◆');

    // Empty cell.
    assert_eq!(fb.get(1, 1).unwrap().ch, '·');
}

#[test]
fn term_view_overlays_follow_phase() {
    let view = GameView::default();
    let vp = Viewport::new(42, 22);

    let idle = GameState::new(1).snapshot();
    assert!(view.render(&idle, vp).row_string(11).contains("PRESS ANY KEY"));

    let mut gs = GameState::new(1);
    gs.start();
    let fb = view.render(&gs.snapshot(), vp);
    assert!(!fb.row_string(11).contains("PAUSED"));

    gs.start();
    assert!(view.render(&gs.snapshot(), vp).row_string(11).contains("PAUSED"));

    let mut gs = GameState::with_layout(
        GameConfig::default(),
        1,
        &[Cell::new(380, 0)],
        Direction::Right,
        Some(Cell::new(0, 200)),
    )
    .unwrap();
    gs.tick();
    assert!(view.render(&gs.snapshot(), vp).row_string(11).contains("GAME OVER"));
}

#[test]
fn term_view_side_panel_shows_score_and_profile() {
    let mut gs = GameState::with_layout(
        GameConfig::default(),
        1,
        &[Cell::new(100, 100)],
        Direction::Right,
        Some(Cell::new(120, 100)),
    )
    .unwrap();
    gs.tick();
    let snap = gs.snapshot();
    assert_eq!(snap.score, 3);

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let profile = ProfileView {
        best_score: 42,
        games_played: 5,
    };
    let fb = view.render_with_profile(&snap, Some(&profile), Viewport::new(80, 24));

    // Board is centred horizontally: (80 - 42) / 2 = 19; panel starts 2 after it.
    let px = 19 + 42 + 2;
    assert_eq!(panel_text(&fb, 0, px), "SCORE");
    assert_eq!(panel_text(&fb, 1, px), "3");
    assert_eq!(panel_text(&fb, 3, px), "LENGTH");
    assert_eq!(panel_text(&fb, 4, px), "2");
    assert_eq!(panel_text(&fb, 6, px), "BEST");
    assert_eq!(panel_text(&fb, 7, px), "42");
    assert_eq!(panel_text(&fb, 9, px), "GAMES");
    assert_eq!(panel_text(&fb, 10, px), "5");
    assert_eq!(panel_text(&fb, 13, px), "PLAYING");
}

#[test]
fn term_view_best_never_trails_current_score() {
    let mut gs = GameState::with_layout(
        GameConfig::default(),
        1,
        &[Cell::new(100, 100)],
        Direction::Right,
        Some(Cell::new(120, 100)),
    )
    .unwrap();
    gs.tick();

    let fb = GameView::default().with_anchor_y(AnchorY::Top).render_with_profile(
        &gs.snapshot(),
        Some(&ProfileView::default()),
        Viewport::new(80, 24),
    );
    assert_eq!(panel_text(&fb, 7, 63), "3");
}

#[test]
fn term_view_render_into_reuses_buffer_across_resizes() {
    let snap = GameState::new(1).snapshot();
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&snap, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&snap, Viewport::new(42, 22), &mut fb);
    assert_eq!((fb.width(), fb.height()), (42, 22));
    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_clips_boards_larger_than_the_terminal() {
    // Hand-built snapshot wider than u16 can address in terminal columns.
    let snap = GameSnapshot {
        snake: vec![Cell::new(39_999, 0), Cell::new(39_998, 0)],
        food: Some(Cell::new(30_000, 10)),
        phase: tui_snake::types::Phase::Running,
        board_width: 40_000,
        board_height: 20,
        cell_size: 1,
        ..GameSnapshot::default()
    };
    let view = GameView::default();
    assert_eq!(view.frame_size(&snap), (u16::MAX, 22));

    let fb = view.render(&snap, Viewport::new(80, 24));
    assert_eq!(fb.get(0, 1).unwrap().ch, '┌');
    assert_eq!(fb.get(0, 22).unwrap().ch, '└');
    assert_eq!(fb.get(1, 2).unwrap().ch, '·');
    assert_eq!(fb.get(79, 21).unwrap().ch, '·');
}
