//! Text preview of a graph description
//!
//! Draws each class as a sectioned box on a character grid, wrapping to a new
//! band every few classes, followed by a list of relationships. This is a
//! terminal stand-in for the rasterized diagram, not a layout engine.

use std::fmt;

use unicode_width::UnicodeWidthChar;

use super::graph::{ArrowHead, EdgeDirection, GraphDescription, GraphEdge, GraphNode};

/// Character set for preview output
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub enum CharacterSet {
    /// Pure ASCII characters only: + - | < > o *
    Ascii,
    /// Unicode box-drawing characters and geometric markers
    #[default]
    Unicode,
}

impl fmt::Display for CharacterSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterSet::Ascii => write!(f, "ascii"),
            CharacterSet::Unicode => write!(f, "unicode"),
        }
    }
}

struct BoxChars {
    top_left: char,
    top_right: char,
    bottom_left: char,
    bottom_right: char,
    horizontal: char,
    vertical: char,
    t_left: char,
    t_right: char,
}

impl CharacterSet {
    fn box_chars(&self) -> BoxChars {
        match self {
            CharacterSet::Unicode => BoxChars {
                top_left: '┌',
                top_right: '┐',
                bottom_left: '└',
                bottom_right: '┘',
                horizontal: '─',
                vertical: '│',
                t_left: '├',
                t_right: '┤',
            },
            CharacterSet::Ascii => BoxChars {
                top_left: '+',
                top_right: '+',
                bottom_left: '+',
                bottom_right: '+',
                horizontal: '-',
                vertical: '|',
                t_left: '+',
                t_right: '+',
            },
        }
    }

    fn line(&self) -> &'static str {
        match self {
            CharacterSet::Unicode => "──",
            CharacterSet::Ascii => "--",
        }
    }

    fn marker(&self, arrow: ArrowHead, direction: EdgeDirection) -> &'static str {
        match (self, arrow, direction) {
            (CharacterSet::Unicode, ArrowHead::Empty, EdgeDirection::Back) => "◁",
            (CharacterSet::Unicode, ArrowHead::Empty, EdgeDirection::Forward) => "▷",
            (CharacterSet::Unicode, ArrowHead::Odot, _) => "○",
            (CharacterSet::Unicode, ArrowHead::Diamond, _) => "◆",
            (CharacterSet::Ascii, ArrowHead::Empty, EdgeDirection::Back) => "<|",
            (CharacterSet::Ascii, ArrowHead::Empty, EdgeDirection::Forward) => "|>",
            (CharacterSet::Ascii, ArrowHead::Odot, _) => "o",
            (CharacterSet::Ascii, ArrowHead::Diamond, _) => "*",
        }
    }
}

/// Terminal cells a char occupies; zero-width and control chars take one
fn cell_width(c: char) -> usize {
    c.width().unwrap_or(1).max(1)
}

fn text_width(text: &str) -> usize {
    text.chars().map(cell_width).sum()
}

/// Filler for the second cell of a double-width char, dropped on output
const WIDE_TAIL: char = '\0';

/// Character grid that grows on demand
struct Canvas {
    cells: Vec<Vec<char>>,
}

impl Canvas {
    fn new() -> Self {
        Self { cells: Vec::new() }
    }

    fn set(&mut self, x: usize, y: usize, c: char) {
        if self.cells.len() <= y {
            self.cells.resize_with(y + 1, Vec::new);
        }
        let row = &mut self.cells[y];
        if row.len() <= x {
            row.resize(x + 1, ' ');
        }
        row[x] = c;
    }

    fn draw_horizontal(&mut self, x: usize, y: usize, len: usize, c: char) {
        for i in 0..len {
            self.set(x + i, y, c);
        }
    }

    fn draw_text(&mut self, x: usize, y: usize, text: &str) {
        let mut cx = x;
        for c in text.chars() {
            self.set(cx, y, c);
            let width = cell_width(c);
            for tail in 1..width {
                self.set(cx + tail, y, WIDE_TAIL);
            }
            cx += width;
        }
    }

    fn draw_text_centered(&mut self, x: usize, y: usize, width: usize, text: &str) {
        let padding = width.saturating_sub(text_width(text)) / 2;
        self.draw_text(x + padding, y, text);
    }

    fn into_string(self) -> String {
        self.cells
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .filter(|&c| c != WIDE_TAIL)
                    .collect::<String>()
                    .trim_end()
                    .to_string()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Renders a [`GraphDescription`] as a boxed text preview
#[derive(Debug, Clone)]
pub struct PreviewRenderer {
    style: CharacterSet,
    box_spacing: usize,
    max_classes_per_row: usize,
}

impl PreviewRenderer {
    pub fn new() -> Self {
        Self::with_style(CharacterSet::default())
    }

    pub fn with_style(style: CharacterSet) -> Self {
        Self {
            style,
            box_spacing: 2,
            max_classes_per_row: 3,
        }
    }

    pub fn style(&self) -> CharacterSet {
        self.style
    }

    fn box_width(node: &GraphNode) -> usize {
        node.label
            .rows()
            .map(text_width)
            .max()
            .unwrap_or(0)
            + 4
    }

    fn box_height(node: &GraphNode) -> usize {
        let mut height = 3;
        if !node.label.attributes.is_empty() {
            height += 1 + node.label.attributes.len();
        }
        if !node.label.methods.is_empty() {
            height += 1 + node.label.methods.len();
        }
        height
    }

    fn draw_separator(&self, canvas: &mut Canvas, x: usize, y: usize, w: usize) {
        let chars = self.style.box_chars();
        canvas.set(x, y, chars.t_left);
        canvas.draw_horizontal(x + 1, y, w - 2, chars.horizontal);
        canvas.set(x + w - 1, y, chars.t_right);
    }

    fn draw_rows(&self, canvas: &mut Canvas, x: usize, y: usize, w: usize, rows: &[String]) {
        let chars = self.style.box_chars();
        for (i, row) in rows.iter().enumerate() {
            canvas.set(x, y + i, chars.vertical);
            canvas.draw_text(x + 2, y + i, row);
            canvas.set(x + w - 1, y + i, chars.vertical);
        }
    }

    fn draw_class(&self, canvas: &mut Canvas, node: &GraphNode, x: usize, y: usize) {
        let chars = self.style.box_chars();
        let w = Self::box_width(node);
        let mut cy = y;

        canvas.set(x, cy, chars.top_left);
        canvas.draw_horizontal(x + 1, cy, w - 2, chars.horizontal);
        canvas.set(x + w - 1, cy, chars.top_right);
        cy += 1;

        canvas.set(x, cy, chars.vertical);
        canvas.draw_text_centered(x + 1, cy, w - 2, &node.label.header);
        canvas.set(x + w - 1, cy, chars.vertical);
        cy += 1;

        for section in [&node.label.attributes, &node.label.methods] {
            if section.is_empty() {
                continue;
            }
            self.draw_separator(canvas, x, cy, w);
            cy += 1;
            self.draw_rows(canvas, x, cy, w, section);
            cy += section.len();
        }

        canvas.set(x, cy, chars.bottom_left);
        canvas.draw_horizontal(x + 1, cy, w - 2, chars.horizontal);
        canvas.set(x + w - 1, cy, chars.bottom_right);
    }

    /// One relationship as a single line, marker on the end it belongs to
    pub fn relationship_line(&self, edge: &GraphEdge) -> String {
        let marker = self.style.marker(edge.arrow_head, edge.direction);
        let line = self.style.line();
        match edge.direction {
            EdgeDirection::Forward => {
                format!("{} {}{} {}", edge.source, line, marker, edge.target)
            }
            EdgeDirection::Back => {
                format!("{} {}{} {}", edge.source, marker, line, edge.target)
            }
        }
    }

    /// Render the whole graph; an empty graph renders as an empty string
    pub fn render(&self, graph: &GraphDescription) -> String {
        if graph.is_empty() {
            return String::new();
        }

        let mut canvas = Canvas::new();
        let mut y = 0;
        for band in graph.nodes.chunks(self.max_classes_per_row) {
            let mut x = 0;
            for node in band {
                self.draw_class(&mut canvas, node, x, y);
                x += Self::box_width(node) + self.box_spacing;
            }
            y += band.iter().map(Self::box_height).max().unwrap_or(0) + 1;
        }

        let mut out = canvas.into_string();
        if !graph.edges.is_empty() {
            if !out.is_empty() {
                out.push_str("\n\n");
            }
            out.push_str("Relationships:");
            for edge in &graph.edges {
                out.push_str("\n  ");
                out.push_str(&self.relationship_line(edge));
            }
        }
        out
    }
}

impl Default for PreviewRenderer {
    fn default() -> Self {
        Self::new()
    }
}
