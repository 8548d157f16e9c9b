// src/editor/tests.rs

use std::rc::Rc;

use super::*;
use crate::color::{Color, NamedColor};
use crate::config::Config;
use crate::glyph::EMPTY_GLYPH;
use crate::lineset::LineFamily;
use crate::render::{render_plain, render_snapshot_plain};

// --- Test Helpers ---

fn brush(glyph: char) -> Cell {
    Cell::new(Some(glyph as u32), Some(Color::Named(NamedColor::Green)), None)
}

fn editor(columns: usize, rows: usize, shape: Shape) -> Editor {
    Editor::new(columns, rows, shape, brush('#')).unwrap()
}

fn drag(editor: &mut Editor, path: &[(usize, usize)]) {
    let points: Vec<Point> = path.iter().map(|&(x, y)| Point::new(x, y)).collect();
    editor.interpret_input(EditorInput::PointerDown(points[0]));
    for &p in &points[1..] {
        editor.interpret_input(EditorInput::PointerMove(p));
    }
    let last = *points.last().unwrap();
    editor.interpret_input(EditorInput::PointerUp(last));
}

fn screen(editor: &Editor) -> Vec<String> {
    render_plain(editor.grid())
}

// --- Tests ---

#[test_log::test]
fn rectangle_preview_is_replaced_on_each_move() {
    let mut ed = editor(6, 4, Shape::Rectangle);
    drag(&mut ed, &[(0, 0), (5, 3), (2, 2)]);
    assert_eq!(screen(&ed), vec!["###   ", "# #   ", "###   ", "      "]);
}

#[test_log::test]
fn preview_restores_previous_content() {
    let mut ed = editor(5, 3, Shape::FilledRectangle);
    ed.grid().update_cell(4, 2, &brush('o'));
    drag(&mut ed, &[(0, 0), (4, 2), (1, 1)]);
    assert_eq!(screen(&ed), vec!["##   ", "##   ", "    o"]);
}

#[test_log::test]
fn free_draw_commits_every_point() {
    let mut ed = editor(5, 2, Shape::FreeDraw);
    drag(&mut ed, &[(0, 0), (1, 0), (2, 1), (4, 1)]);
    assert_eq!(screen(&ed), vec!["##   ", "  # #"]);
}

#[test_log::test]
fn single_cell_drag_paints_every_event() {
    let mut ed = editor(4, 1, Shape::SingleCell);
    drag(&mut ed, &[(0, 0), (1, 0), (3, 0)]);
    assert_eq!(screen(&ed), vec!["## #"]);
}

#[test_log::test]
fn flood_fill_runs_once_per_gesture() {
    let mut ed = editor(3, 3, Shape::FloodFill);
    for y in 0..3 {
        ed.grid().update_cell(1, y, &brush('X'));
    }
    let action = ed.interpret_input(EditorInput::PointerDown(Point::new(0, 0)));
    assert_eq!(action, Some(EditorAction::RequestRedraw));
    assert_eq!(ed.interpret_input(EditorInput::PointerMove(Point::new(2, 2))), None);
    ed.interpret_input(EditorInput::PointerUp(Point::new(2, 2)));
    assert_eq!(screen(&ed), vec!["#X ", "#X ", "#X "]);
}

#[test_log::test]
fn moves_without_pointer_down_do_nothing() {
    let mut ed = editor(3, 3, Shape::SingleCell);
    assert_eq!(ed.interpret_input(EditorInput::PointerMove(Point::new(1, 1))), None);
    assert!(screen(&ed).iter().all(|row| row.trim().is_empty()));
}

#[test_log::test]
fn held_cell_handles_observe_commits() {
    let mut ed = editor(4, 4, Shape::SingleCell);
    let held = ed.cell(2, 2).unwrap();
    drag(&mut ed, &[(2, 2)]);
    assert_eq!(held.borrow().glyph, '#' as u32);
    assert!(Rc::ptr_eq(&held, &ed.cell(2, 2).unwrap()));
}

#[test_log::test]
fn text_entry_types_and_backspaces() {
    let mut ed = editor(8, 3, Shape::TextBuffer);
    ed.grid().update_cell(1, 1, &brush('z'));

    let action = ed.interpret_input(EditorInput::PointerDown(Point::new(0, 1)));
    assert!(matches!(action, Some(EditorAction::ShowCursor(t)) if t.x == 0 && t.y == 1));

    for c in "hi".chars() {
        ed.interpret_input(EditorInput::Char(c));
    }
    assert_eq!(screen(&ed)[1], "hi      ");
    assert_eq!(ed.text_cursor(), Some(Point::new(2, 1)));

    ed.interpret_input(EditorInput::Backspace);
    assert_eq!(screen(&ed)[1], "hz      ", "backspace restores the overwritten cell");
    assert_eq!(ed.text_cursor(), Some(Point::new(1, 1)));

    ed.interpret_input(EditorInput::Backspace);
    ed.interpret_input(EditorInput::Backspace);
    assert_eq!(screen(&ed)[1], " z      ");
    assert_eq!(ed.text_cursor(), Some(Point::new(0, 1)));
}

#[test_log::test]
fn text_entry_newline_returns_to_line_start() {
    let mut ed = editor(6, 3, Shape::TextBuffer);
    ed.interpret_input(EditorInput::PointerDown(Point::new(2, 0)));
    for c in "ab\ncd".chars() {
        ed.interpret_input(EditorInput::Char(c));
    }
    assert_eq!(screen(&ed), vec!["  ab  ", "  cd  ", "      "]);
}

#[test_log::test]
fn text_cursor_appears_in_snapshot_until_tool_changes() {
    let mut ed = editor(4, 1, Shape::TextBuffer);
    ed.interpret_input(EditorInput::PointerDown(Point::new(0, 0)));
    ed.interpret_input(EditorInput::Char('a'));

    let snapshot = ed.snapshot();
    assert_eq!(snapshot.cursor.map(|t| t.point()), Some(Point::new(1, 0)));
    assert_eq!(render_snapshot_plain(&snapshot), vec!["a_  "]);

    let action = ed.interpret_input(EditorInput::SelectShape(Shape::Rectangle));
    assert_eq!(action, Some(EditorAction::HideCursor));
    assert_eq!(ed.snapshot().cursor, None);
    assert_eq!(ed.interpret_input(EditorInput::Char('b')), None);
}

#[test_log::test]
fn text_cursor_stops_at_right_edge() {
    let mut ed = editor(3, 1, Shape::TextBuffer);
    ed.interpret_input(EditorInput::PointerDown(Point::new(1, 0)));
    for c in "xyz".chars() {
        ed.interpret_input(EditorInput::Char(c));
    }
    assert_eq!(screen(&ed), vec![" xz"]);
    assert_eq!(ed.text_cursor(), Some(Point::new(2, 0)));
}

#[test_log::test]
fn smart_lines_form_a_box() {
    let mut ed = editor(5, 4, Shape::SmartLine(LineFamily::Single));
    drag(&mut ed, &[(0, 0), (4, 0)]);
    drag(&mut ed, &[(0, 0), (0, 3)]);
    drag(&mut ed, &[(4, 0), (4, 3)]);
    drag(&mut ed, &[(0, 3), (4, 3)]);
    assert_eq!(screen(&ed), vec!["┌───┐", "│   │", "│   │", "└───┘"]);
}

#[test_log::test]
fn brush_change_applies_to_next_gesture() {
    let mut ed = editor(3, 1, Shape::SingleCell);
    drag(&mut ed, &[(0, 0)]);
    ed.interpret_input(EditorInput::SetBrush(brush('*')));
    drag(&mut ed, &[(2, 0)]);
    assert_eq!(screen(&ed), vec!["# *"]);
    assert_eq!(ed.brush(), brush('*'));
}

#[test_log::test]
fn resize_input_keeps_content_and_rejects_bad_sizes() {
    let mut ed = editor(3, 3, Shape::SingleCell);
    drag(&mut ed, &[(1, 1)]);
    let held = ed.cell(1, 1).unwrap();

    let action = ed.interpret_input(EditorInput::Resize { columns: 5, rows: 2 });
    assert_eq!(action, Some(EditorAction::RequestRedraw));
    assert!(Rc::ptr_eq(&held, &ed.cell(1, 1).unwrap()));
    assert_eq!(screen(&ed), vec!["     ", " #   "]);

    assert_eq!(ed.interpret_input(EditorInput::Resize { columns: 0, rows: 2 }), None);
    assert_eq!(ed.grid().dimensions().width, 5);
}

#[test_log::test]
fn from_config_uses_configured_brush_and_cursor() {
    let config = Config::from_json_str(
        r#"{ "canvas": { "columns": 10, "rows": 4 },
             "brush": { "glyph": 177 },
             "text": { "cursor_on_glyph": 219 } }"#,
    )
    .unwrap();
    let mut ed = Editor::from_config(&config).unwrap();
    assert_eq!(ed.grid().dimensions().width, 10);
    assert_eq!(ed.brush().glyph, 177);
    assert_eq!(ed.shape(), Shape::SingleCell);

    ed.interpret_input(EditorInput::SelectShape(Shape::TextBuffer));
    let action = ed.interpret_input(EditorInput::PointerDown(Point::new(0, 0)));
    match action {
        Some(EditorAction::ShowCursor(tile)) => assert_eq!(tile.cell.glyph, 219),
        other => panic!("expected cursor, got {:?}", other),
    }
}

#[test_log::test]
fn canvas_interface_dispatches_to_editor() {
    let mut ed = editor(2, 2, Shape::SingleCell);
    let canvas: &mut dyn CanvasInterface = &mut ed;
    canvas.interpret_input(EditorInput::PointerDown(Point::new(1, 0)));
    let snapshot = canvas.snapshot();
    assert_eq!(snapshot[(1, 0)].glyph, '#' as u32);
    assert_eq!(snapshot.cell(0, 1).map(|c| c.glyph), Some(EMPTY_GLYPH));
}
