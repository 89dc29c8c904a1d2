// Multi-line editor buffer for the source pane. The cursor column counts
// grapheme clusters, not bytes, so arrow keys and backspace behave sanely
// on accented and combined characters.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorState {
    lines: Vec<String>,
    row: usize,
    /// Grapheme offset within the current line
    col: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

fn grapheme_len(line: &str) -> usize {
    line.graphemes(true).count()
}

/// Byte index of the grapheme at `col`, or the line length past the end.
fn byte_index(line: &str, col: usize) -> usize {
    line.grapheme_indices(true)
        .nth(col)
        .map_or(line.len(), |(i, _)| i)
}

impl EditorState {
    pub fn new() -> Self {
        Self {
            lines: vec![String::new()],
            row: 0,
            col: 0,
        }
    }

    /// Replace the whole buffer. Line endings are normalized to `\n` and
    /// the cursor moves to the end of the text.
    pub fn set_text(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n");
        self.lines = normalized.split('\n').map(String::from).collect();
        self.row = self.lines.len() - 1;
        self.col = grapheme_len(&self.lines[self.row]);
    }

    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.len() == 1 && self.lines[0].is_empty()
    }

    pub fn clear(&mut self) {
        self.lines = vec![String::new()];
        self.row = 0;
        self.col = 0;
    }

    /// Cursor position as (row, grapheme column).
    pub fn cursor(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Display width of the line content left of the cursor, for terminal
    /// cursor placement.
    pub fn cursor_display_col(&self) -> usize {
        let line = &self.lines[self.row];
        line[..byte_index(line, self.col)].width()
    }

    pub fn insert_char(&mut self, c: char) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        line.insert(idx, c);
        self.col += 1;
    }

    pub fn insert_newline(&mut self) {
        let line = &mut self.lines[self.row];
        let idx = byte_index(line, self.col);
        let tail = line.split_off(idx);
        self.lines.insert(self.row + 1, tail);
        self.row += 1;
        self.col = 0;
    }

    pub fn backspace(&mut self) {
        if self.col > 0 {
            let line = &mut self.lines[self.row];
            let start = byte_index(line, self.col - 1);
            let end = byte_index(line, self.col);
            line.replace_range(start..end, "");
            self.col -= 1;
        } else if self.row > 0 {
            let current = self.lines.remove(self.row);
            self.row -= 1;
            self.col = grapheme_len(&self.lines[self.row]);
            self.lines[self.row].push_str(&current);
        }
    }

    pub fn delete(&mut self) {
        let line_len = grapheme_len(&self.lines[self.row]);
        if self.col < line_len {
            let line = &mut self.lines[self.row];
            let start = byte_index(line, self.col);
            let end = byte_index(line, self.col + 1);
            line.replace_range(start..end, "");
        } else if self.row + 1 < self.lines.len() {
            let next = self.lines.remove(self.row + 1);
            self.lines[self.row].push_str(&next);
        }
    }

    pub fn move_left(&mut self) {
        if self.col > 0 {
            self.col -= 1;
        } else if self.row > 0 {
            self.row -= 1;
            self.col = grapheme_len(&self.lines[self.row]);
        }
    }

    pub fn move_right(&mut self) {
        if self.col < grapheme_len(&self.lines[self.row]) {
            self.col += 1;
        } else if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = 0;
        }
    }

    pub fn move_up(&mut self) {
        if self.row > 0 {
            self.row -= 1;
            self.col = self.col.min(grapheme_len(&self.lines[self.row]));
        }
    }

    pub fn move_down(&mut self) {
        if self.row + 1 < self.lines.len() {
            self.row += 1;
            self.col = self.col.min(grapheme_len(&self.lines[self.row]));
        }
    }

    pub fn move_home(&mut self) {
        self.col = 0;
    }

    pub fn move_end(&mut self) {
        self.col = grapheme_len(&self.lines[self.row]);
    }
}
