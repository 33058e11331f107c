//! Text rendering of a board.

use std::fmt;

use super::{Board, Square};

/// How a board is drawn as text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderStyle {
    /// Unicode chess symbols instead of FEN letters.
    pub glyphs: bool,
    /// Rank digits on the left and file letters underneath.
    pub coordinates: bool,
}

impl Default for RenderStyle {
    fn default() -> Self {
        RenderStyle {
            glyphs: false,
            coordinates: true,
        }
    }
}

const EMPTY: char = '.';
const MARKED_EMPTY: char = '*';
const MARKED_CAPTURE: char = 'x';

impl Board {
    /// Draw the board with rank 8 at the top.
    #[must_use]
    pub fn render(&self, style: RenderStyle) -> String {
        self.render_marked(style, &[])
    }

    /// Draw the board, marking `marks` (usually legal destinations): an
    /// empty marked square shows `*`, an occupied one shows `x`.
    #[must_use]
    pub fn render_marked(&self, style: RenderStyle, marks: &[Square]) -> String {
        let mut out = String::new();
        for rank in (0..8).rev() {
            if style.coordinates {
                out.push((b'1' + rank as u8) as char);
                out.push(' ');
            }
            let cells: Vec<String> = (0..8)
                .filter_map(|file| Square::new(rank, file))
                .map(|sq| {
                    let marked = marks.contains(&sq);
                    let c = match self.occupant_at(sq) {
                        Some(_) if marked => MARKED_CAPTURE,
                        Some(piece) if style.glyphs => piece.glyph(),
                        Some(piece) => piece.to_fen_char(),
                        None if marked => MARKED_EMPTY,
                        None => EMPTY,
                    };
                    c.to_string()
                })
                .collect();
            out.push_str(&cells.join(" "));
            out.push('\n');
        }
        if style.coordinates {
            out.push_str("  a b c d e f g h\n");
        }
        out
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(RenderStyle::default()))
    }
}
