//! Text rendering of the grid, buffer and sequence.
//!
//! Values are shown as two-digit hex. Used cells show as `[]`. Cells on
//! the line the next play is constrained to are highlighted, either with
//! a terminal background color or, in plain mode, with `>XX<` markers.

use crossterm::style::Stylize;

use crate::core::{Cell, GameStatus, SelectionAxis};
use crate::rules::GameEngine;

/// How highlighted and used cells are marked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Styling {
    /// ANSI background colors.
    #[default]
    Color,
    /// Plain ASCII markers.
    Plain,
}

/// Renders an engine to strings.
#[derive(Clone, Copy, Debug, Default)]
pub struct TextRenderer {
    styling: Styling,
}

impl TextRenderer {
    pub fn new(styling: Styling) -> Self {
        Self { styling }
    }

    /// `Sequence : [E9][1C]...`
    pub fn sequence_line(&self, engine: &GameEngine) -> String {
        let values: String = engine
            .sequence()
            .iter()
            .map(|value| format!("[{value:02X}]"))
            .collect();
        format!("Sequence : {values}")
    }

    /// `Buffer : [E9][  ][  ]`, one slot per buffer position.
    pub fn buffer_line(&self, engine: &GameEngine) -> String {
        let slots: String = (0..engine.buffer_size())
            .map(|i| match engine.buffer().get(i) {
                Some(value) => format!("[{value:02X}]"),
                None => "[  ]".to_string(),
            })
            .collect();
        format!("Buffer : {slots}")
    }

    /// Which line the next play picks from.
    pub fn prompt_line(&self, engine: &GameEngine) -> String {
        match engine.axis() {
            SelectionAxis::Row => format!("Pick a column in row {}", engine.current_position()),
            SelectionAxis::Column => format!("Pick a row in column {}", engine.current_position()),
        }
    }

    fn cell(&self, cell: Cell, highlighted: bool) -> String {
        match (self.styling, cell) {
            (Styling::Color, Cell::Used) => format!("{}", "[] ".on_dark_grey()),
            (Styling::Color, Cell::Value(v)) if highlighted => {
                format!("{}", format!("{v:02X} ").on_dark_yellow())
            }
            (Styling::Color, Cell::Value(v)) => format!("{v:02X} "),
            (Styling::Plain, Cell::Used) => " [] ".to_string(),
            (Styling::Plain, Cell::Value(v)) if highlighted => format!(">{v:02X}<"),
            (Styling::Plain, Cell::Value(v)) => format!(" {v:02X} "),
        }
    }

    /// The grid, one line per row.
    pub fn grid_lines(&self, engine: &GameEngine) -> Vec<String> {
        engine
            .grid()
            .iter_rows()
            .enumerate()
            .map(|(row, cells)| {
                cells
                    .iter()
                    .enumerate()
                    .map(|(col, &cell)| {
                        let highlighted = engine.is_highlighted(row, col);
                        self.cell(cell, highlighted)
                    })
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect()
    }

    /// Sequence, buffer and grid.
    pub fn render(&self, engine: &GameEngine) -> String {
        let mut out = String::new();
        out.push_str(&self.sequence_line(engine));
        out.push('\n');
        out.push_str(&self.buffer_line(engine));
        out.push('\n');
        for line in self.grid_lines(engine) {
            out.push_str(&line);
            out.push('\n');
        }
        out
    }

    /// Final message for a finished game.
    pub fn outcome_message(&self, engine: &GameEngine) -> &'static str {
        match engine.status() {
            GameStatus::Won => "You won",
            _ => "Game Over",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameConfig, Grid};

    fn engine() -> GameEngine {
        let config = GameConfig::new()
            .with_dimensions(2, 3)
            .with_palette([0xE9, 0x1C, 0x55])
            .with_sequence([0xE9, 0x1C])
            .with_buffer_size(3);
        let grid = Grid::from_rows(&[[0xE9u8, 0x55, 0x55], [0x1C, 0x55, 0xE9]]).unwrap();
        GameEngine::with_grid(config, grid).unwrap()
    }

    #[test]
    fn test_sequence_line() {
        let renderer = TextRenderer::new(Styling::Plain);
        assert_eq!(renderer.sequence_line(&engine()), "Sequence : [E9][1C]");
    }

    #[test]
    fn test_buffer_line() {
        let renderer = TextRenderer::new(Styling::Plain);
        let mut engine = engine();
        assert_eq!(renderer.buffer_line(&engine), "Buffer : [  ][  ][  ]");

        engine.start().unwrap();
        engine.play(1).unwrap();
        assert_eq!(renderer.buffer_line(&engine), "Buffer : [55][  ][  ]");
    }

    #[test]
    fn test_plain_grid_highlights_row_then_column() {
        let renderer = TextRenderer::new(Styling::Plain);
        let mut engine = engine();
        engine.start().unwrap();

        assert_eq!(
            renderer.grid_lines(&engine),
            vec![">E9<>55<>55<".to_string(), " 1C  55  E9".to_string()]
        );

        engine.play(0).unwrap();
        assert_eq!(
            renderer.grid_lines(&engine),
            vec![" []  55  55".to_string(), ">1C< 55  E9".to_string()]
        );
    }

    #[test]
    fn test_prompt_line() {
        let renderer = TextRenderer::default();
        let mut engine = engine();
        engine.start().unwrap();
        assert_eq!(renderer.prompt_line(&engine), "Pick a column in row 0");

        engine.play(2).unwrap();
        assert_eq!(renderer.prompt_line(&engine), "Pick a row in column 2");
    }

    #[test]
    fn test_color_marks_used_cells() {
        let renderer = TextRenderer::new(Styling::Color);
        let mut engine = engine();
        engine.start().unwrap();
        engine.play(0).unwrap();

        let lines = renderer.grid_lines(&engine);
        assert!(lines[0].contains("[]"));
        assert!(!lines[0].contains("E9"));
        assert!(lines[1].contains("1C"));
    }

    #[test]
    fn test_render_and_outcome() {
        let renderer = TextRenderer::new(Styling::Plain);
        let mut engine = engine();
        engine.start().unwrap();
        engine.play(0).unwrap(); // E9
        engine.play(1).unwrap(); // 1C

        let text = renderer.render(&engine);
        assert!(text.starts_with("Sequence : [E9][1C]\nBuffer : [E9][1C][  ]\n"));
        assert_eq!(text.lines().count(), 4);
        assert_eq!(renderer.outcome_message(&engine), "You won");
    }
}
