// Host-side tests for button hit testing and resize.

use glam::Vec2;
use musictoy_core::{
    toy_piece, Button, ButtonKind, ButtonRegistry, LayoutMode, Quad, Rect, Sequencer,
    SequencerConfig, TransportAction, TransportButton, NUM_COLS,
};
use rand::prelude::*;
use std::f32::consts::TAU;

const CANVAS: Vec2 = Vec2::new(640.0, 480.0);

fn sequencer(mode: LayoutMode) -> Sequencer {
    sequencer_on(mode, CANVAS)
}

fn sequencer_on(mode: LayoutMode, canvas: Vec2) -> Sequencer {
    let config = SequencerConfig {
        layout: mode,
        ..SequencerConfig::default()
    };
    let (piece, tracks) = toy_piece(config.tempo);
    let mut seq = Sequencer::new(piece, tracks.lead, tracks.drums, &config, canvas).unwrap();
    seq.add_transport_buttons();
    seq
}

fn transport_button(rect: Rect, action: TransportAction) -> Button {
    Button {
        rect,
        corners: None,
        kind: ButtonKind::Transport(TransportButton { action }),
    }
}

/// Point in the middle of a radial cell, well clear of its outline.
fn radial_cell_centre(seq: &Sequencer, row: usize, col: usize) -> Vec2 {
    let layout = seq.layout();
    let turn = (col as f32 + 0.5) / NUM_COLS as f32;
    let ratio = 0.4 + (row as f32 + 0.5) / seq.num_rows() as f32 * 0.5;
    let angle = TAU * turn;
    layout.centre() + layout.axes() * ratio * Vec2::new(angle.sin(), angle.cos())
}

#[test]
fn rect_containment_is_half_open() {
    let r = Rect::new(10.0, 10.0, 20.0, 20.0);
    assert!(r.contains(Vec2::new(10.0, 10.0)));
    assert!(r.contains(Vec2::new(29.9, 29.9)));
    assert!(!r.contains(Vec2::new(30.0, 15.0)));
    assert!(!r.contains(Vec2::new(15.0, 30.0)));
    assert!(!r.contains(Vec2::new(9.9, 15.0)));
}

#[test]
fn quad_hits_interior_and_outline() {
    let q = Quad([
        Vec2::new(0.0, 0.0),
        Vec2::new(10.0, 0.0),
        Vec2::new(10.0, 10.0),
        Vec2::new(0.0, 10.0),
    ]);
    assert!(q.fill_contains(Vec2::new(5.0, 5.0)));
    assert!(!q.fill_contains(Vec2::new(10.5, 5.0)));
    assert!(q.contains(Vec2::new(10.5, 5.0), 1.0));
    assert!(!q.contains(Vec2::new(11.5, 5.0), 1.0));
    // winding order does not matter
    let reversed = Quad([q.0[3], q.0[2], q.0[1], q.0[0]]);
    assert!(reversed.fill_contains(Vec2::new(5.0, 5.0)));
}

#[test]
fn first_registered_button_wins() {
    let mut reg = ButtonRegistry::default();
    reg.push(transport_button(Rect::new(0.0, 0.0, 50.0, 50.0), TransportAction::Play));
    reg.push(transport_button(Rect::new(25.0, 25.0, 50.0, 50.0), TransportAction::Stop));
    assert_eq!(reg.hit_test(Vec2::new(30.0, 30.0), LayoutMode::Rectangular), Some(0));
    assert_eq!(reg.hit_test(Vec2::new(60.0, 60.0), LayoutMode::Rectangular), Some(1));
    assert_eq!(reg.hit_test(Vec2::new(90.0, 90.0), LayoutMode::Rectangular), None);
    // transport buttons have no corners, so radial mode falls back to rects
    assert_eq!(reg.hit_test(Vec2::new(30.0, 30.0), LayoutMode::Radial), Some(0));
}

#[test]
fn rectangular_click_finds_cell() {
    let seq = sequencer(LayoutMode::Rectangular);
    let hit = seq.buttons().hit_test(Vec2::new(65.0, 45.0), LayoutMode::Rectangular);
    assert_eq!(hit, seq.step_index(2, 3));
    assert_eq!(seq.buttons().hit_test(Vec2::new(5.0, 400.0), LayoutMode::Rectangular), None);
}

#[test]
fn transport_buttons_are_hit_in_both_modes() {
    for mode in [LayoutMode::Rectangular, LayoutMode::Radial] {
        let seq = sequencer(mode);
        let steps = seq.buttons().step_count();
        assert_eq!(seq.buttons().hit_test(Vec2::new(250.0, 460.0), mode), Some(steps));
        assert_eq!(seq.buttons().hit_test(Vec2::new(350.0, 460.0), mode), Some(steps + 1));
        assert_eq!(seq.buttons().hit_test(Vec2::new(600.0, 460.0), mode), Some(steps + 2));
    }
}

#[test]
fn radial_click_finds_cell() {
    let seq = sequencer(LayoutMode::Radial);
    for (row, col) in [(0, 0), (3, 5), (10, 16), (14, 31), (7, 24)] {
        let p = radial_cell_centre(&seq, row, col);
        assert_eq!(
            seq.buttons().hit_test(p, LayoutMode::Radial),
            seq.step_index(row, col),
            "cell ({row}, {col}) at {p:?}"
        );
    }
    // the hole in the middle of the ring is empty
    assert_eq!(seq.buttons().hit_test(seq.layout().centre(), LayoutMode::Radial), None);
}

#[test]
fn rectangular_hits_survive_resize() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..20 {
        let mut seq = sequencer(LayoutMode::Rectangular);
        let k = Vec2::new(rng.gen_range(0.5..3.0), rng.gen_range(0.5..3.0));
        let (row, col) = (rng.gen_range(0..seq.num_rows()), rng.gen_range(0..NUM_COLS));
        let p = seq.layout().cell_rect(row, col).center();
        seq.resize(CANVAS * k);
        assert_eq!(
            seq.buttons().hit_test(p * k, LayoutMode::Rectangular),
            seq.step_index(row, col)
        );
    }
}

#[test]
fn radial_hits_survive_resize() {
    let mut rng = StdRng::seed_from_u64(23);
    for _ in 0..20 {
        let mut seq = sequencer(LayoutMode::Radial);
        let k = Vec2::new(rng.gen_range(1.0..2.5), rng.gen_range(1.0..2.5));
        let (row, col) = (rng.gen_range(0..seq.num_rows()), rng.gen_range(0..NUM_COLS));
        let p = radial_cell_centre(&seq, row, col);
        seq.resize(CANVAS * k);
        assert_eq!(
            seq.buttons().hit_test(p * k, LayoutMode::Radial),
            seq.step_index(row, col)
        );
    }
}

#[test]
fn degenerate_resize_is_ignored() {
    let mut seq = sequencer(LayoutMode::Rectangular);
    seq.resize(Vec2::new(0.0, 300.0));
    assert_eq!(seq.layout().canvas(), CANVAS);
    assert_eq!(
        seq.buttons().hit_test(Vec2::new(65.0, 45.0), LayoutMode::Rectangular),
        seq.step_index(2, 3)
    );
}

/// Point on the playhead halfway through `row`, with the playhead parked in
/// the middle of `col`.
fn cursor_point(seq: &Sequencer, row: usize, col: usize) -> Vec2 {
    let play_pos = (col as f32 + 0.5) / NUM_COLS as f32;
    let (a, b) = seq.layout().cursor(seq.layout_mode(), play_pos);
    a.lerp(b, (row as f32 + 0.5) / seq.num_rows() as f32)
}

#[test]
fn playhead_crosses_the_column_being_played() {
    for canvas in [CANVAS, Vec2::new(1920.0, 1080.0), Vec2::new(3840.0, 2160.0)] {
        for mode in [LayoutMode::Radial, LayoutMode::Rectangular] {
            let seq = sequencer_on(mode, canvas);
            for (row, col) in [(0, 0), (5, 15), (7, 16), (14, 31), (10, 24)] {
                let p = cursor_point(&seq, row, col);
                assert_eq!(
                    seq.buttons().hit_test(p, mode),
                    seq.step_index(row, col),
                    "{mode:?} on {canvas:?}: cell ({row}, {col}) at {p:?}"
                );
            }
        }
    }
}

#[test]
fn large_canvas_radial_cells_hit() {
    for canvas in [Vec2::new(1920.0, 1080.0), Vec2::new(3840.0, 2160.0)] {
        let seq = sequencer_on(LayoutMode::Radial, canvas);
        for (row, col) in [(0, 0), (3, 12), (14, 31), (8, 20)] {
            let p = radial_cell_centre(&seq, row, col);
            assert_eq!(
                seq.buttons().hit_test(p, LayoutMode::Radial),
                seq.step_index(row, col),
                "cell ({row}, {col}) on {canvas:?}"
            );
        }
    }
}

#[test]
fn playhead_follows_cells_after_resize() {
    for mode in [LayoutMode::Radial, LayoutMode::Rectangular] {
        let mut seq = sequencer(mode);
        seq.resize(CANVAS * Vec2::new(2.0, 1.5));
        for (row, col) in [(0, 0), (6, 9), (14, 31)] {
            let p = cursor_point(&seq, row, col);
            assert_eq!(seq.buttons().hit_test(p, mode), seq.step_index(row, col));
        }
    }
}
