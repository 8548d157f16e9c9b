// src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use log::info;

use core_draw::{
    color::{Color, NamedColor},
    config::{Config, CONFIG},
    render::render_ansi,
    Cell, Editor, EditorInput, Point, Shape,
};

/// Gestures replayed onto the canvas: (tool, brush, pointer path, typed text).
fn demo_script(config: &Config) -> Vec<EditorInput> {
    let family = config.lines.family;
    let line_brush = Cell::new(None, Some(Color::Named(NamedColor::BrightCyan)), None);
    let shade = Cell::new(Some(176), Some(Color::Named(NamedColor::Blue)), None);
    let ink = Cell::new(None, Some(Color::Named(NamedColor::BrightYellow)), None);

    let mut script = vec![
        EditorInput::SetBrush(line_brush),
        EditorInput::SelectShape(Shape::SmartLine(family)),
    ];
    let mut drag = |from: Point, to: Point| {
        script.push(EditorInput::PointerDown(from));
        script.push(EditorInput::PointerMove(to));
        script.push(EditorInput::PointerUp(to));
    };
    drag(Point::new(2, 1), Point::new(30, 1));
    drag(Point::new(2, 1), Point::new(2, 10));
    drag(Point::new(30, 1), Point::new(30, 10));
    drag(Point::new(2, 10), Point::new(30, 10));
    drag(Point::new(16, 1), Point::new(16, 10));

    script.extend([
        EditorInput::SetBrush(config.brush.cell()),
        EditorInput::SelectShape(Shape::Ellipse),
        EditorInput::PointerDown(Point::new(36, 1)),
        EditorInput::PointerMove(Point::new(50, 7)),
        EditorInput::PointerUp(Point::new(52, 10)),
        EditorInput::SetBrush(shade),
        EditorInput::SelectShape(Shape::FloodFill),
        EditorInput::PointerDown(Point::new(44, 5)),
        EditorInput::PointerUp(Point::new(44, 5)),
        EditorInput::SetBrush(ink),
        EditorInput::SelectShape(Shape::TextBuffer),
        EditorInput::PointerDown(Point::new(4, 12)),
    ]);
    script.extend("core-draw demo!".chars().map(EditorInput::Char));
    script.push(EditorInput::Backspace);
    script.push(EditorInput::SelectShape(Shape::SingleCell));
    script
}

/// Main entry point for the `core-draw` demo.
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();

    let config = match std::env::args_os().nth(1).map(PathBuf::from) {
        Some(path) => Config::load(&path).context("Failed to load configuration")?,
        None => {
            info!("No configuration file given, using defaults.");
            CONFIG.clone()
        }
    };

    let mut editor = Editor::from_config(&config).context("Failed to create editor")?;
    let script = demo_script(&config);
    info!("Replaying {} demo inputs", script.len());
    for input in script {
        editor.interpret_input(input);
    }

    print!("{}", render_ansi(editor.grid()));
    Ok(())
}
