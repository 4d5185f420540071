#![allow(clippy::float_cmp)]

use std::f64::consts::FRAC_PI_2;

use super::*;
use crate::doc::Colour;

// =============================================================
// Recording surface
// =============================================================

#[derive(Debug, Clone, PartialEq)]
enum Op {
    Clear { width: f64, height: f64 },
    Line(Segment),
    Glyph { top_left: Point, size: f64, rotation: f64 },
}

#[derive(Default)]
struct Recorder {
    ops: Vec<Op>,
    fail_on_line: Option<usize>,
}

impl Recorder {
    fn lines(&self) -> Vec<Segment> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Line(s) => Some(*s),
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    type Error = String;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), String> {
        self.ops.push(Op::Clear { width, height });
        Ok(())
    }

    fn line(&mut self, segment: &Segment) -> Result<(), String> {
        if self.fail_on_line == Some(self.lines().len()) {
            return Err("line rejected".into());
        }
        self.ops.push(Op::Line(*segment));
        Ok(())
    }

    fn glyph(&mut self, top_left: Point, size: f64, rotation: f64) -> Result<(), String> {
        self.ops.push(Op::Glyph { top_left, size, rotation });
        Ok(())
    }
}

fn render(core: &CanvasCore) -> Recorder {
    let mut rec = Recorder::default();
    assert!(draw(&mut rec, core).is_ok());
    rec
}

// =============================================================
// draw
// =============================================================

#[test]
fn empty_canvas_draws_clear_and_glyph_only() {
    let mut core = CanvasCore::new(500, 500);
    core.initialize_glyph_position();

    let rec = render(&core);
    assert_eq!(
        rec.ops,
        vec![
            Op::Clear { width: 500.0, height: 500.0 },
            Op::Glyph { top_left: Point::new(245, 245), size: 10.0, rotation: 0.0 },
        ]
    );
}

#[test]
fn segments_drawn_in_order_with_their_colours() {
    let mut core = CanvasCore::new(500, 500);
    let red = Segment::new(250, 250, 350, 250, Colour::RED);
    let blue = Segment::new(350, 250, 350, 200, Colour::BLUE);
    core.append_segment(red);
    core.append_segment(blue);

    let rec = render(&core);
    assert_eq!(rec.lines(), vec![red, blue]);
    assert!(matches!(rec.ops.first(), Some(Op::Clear { .. })));
    assert!(matches!(rec.ops.last(), Some(Op::Glyph { .. })));
}

#[test]
fn glyph_follows_last_segment() {
    let mut core = CanvasCore::new(500, 500);
    core.append_segment(Segment::new(250, 250, 350, 200, Colour::BLACK));
    core.rotate_glyph(FRAC_PI_2);

    let rec = render(&core);
    let Some(Op::Glyph { top_left, size, rotation }) = rec.ops.last().cloned() else {
        panic!("glyph not drawn last");
    };
    assert_eq!(top_left, Point::new(345, 195));
    assert_eq!(size, 10.0);
    assert!((rotation - FRAC_PI_2).abs() < 1e-12);
}

#[test]
fn clear_then_render_draws_only_glyph() {
    let mut core = CanvasCore::new(500, 500);
    core.append_segment(Segment::new(0, 0, 10, 10, Colour::BLACK));
    core.append_segment(Segment::new(10, 10, 20, 20, Colour::BLACK));
    core.clear();

    let rec = render(&core);
    assert!(rec.lines().is_empty());
    assert_eq!(rec.ops.len(), 2);
    assert!(matches!(rec.ops[1], Op::Glyph { .. }));
}

#[test]
fn render_is_idempotent() {
    let mut core = CanvasCore::new(300, 200);
    core.initialize_glyph_position();
    core.append_segment(Segment::new(150, 100, 170, 100, Colour::GREEN));
    core.rotate_glyph(0.3);

    let first = render(&core);
    let second = render(&core);
    assert_eq!(first.ops, second.ops);
}

#[test]
fn render_does_not_mutate_core() {
    let mut core = CanvasCore::new(300, 200);
    core.append_segment(Segment::new(0, 0, 1, 1, Colour::BLACK));
    let revision = core.revision();
    let _picture = render(&core);
    assert_eq!(core.revision(), revision);
    assert_eq!(core.doc.len(), 1);
}

#[test]
fn surface_error_stops_the_pass() {
    let mut core = CanvasCore::new(100, 100);
    core.append_segment(Segment::new(0, 0, 1, 0, Colour::BLACK));
    core.append_segment(Segment::new(1, 0, 2, 0, Colour::BLACK));

    let mut rec = Recorder { fail_on_line: Some(1), ..Default::default() };
    let result = draw(&mut rec, &core);
    assert_eq!(result, Err("line rejected".to_string()));
    assert_eq!(rec.lines().len(), 1);
    assert!(!rec.ops.iter().any(|op| matches!(op, Op::Glyph { .. })));
}
