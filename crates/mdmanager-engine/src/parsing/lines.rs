/// Column width of a tab when measuring indentation.
pub const TAB_WIDTH: usize = 4;

/// Normalizes `\r\n` and lone `\r` line endings to `\n`.
pub fn normalize_line_endings(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "\n")
}

/// Returns an iterator over the lines of already-normalized text.
///
/// A trailing newline does not produce a final empty line, matching how
/// editors present files.
pub fn lines(normalized: &str) -> impl Iterator<Item = &str> + '_ {
    normalized.split_terminator('\n')
}

/// Measures the leading whitespace of a line in columns (space = 1, tab = 4).
pub fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| *c == ' ' || *c == '\t')
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}

/// Strips up to `columns` columns of leading whitespace from a line.
///
/// A tab that straddles the boundary is consumed whole.
pub fn strip_indent(line: &str, columns: usize) -> &str {
    let mut width = 0;
    let mut idx = 0;
    for (i, c) in line.char_indices() {
        if width >= columns {
            break;
        }
        match c {
            ' ' => width += 1,
            '\t' => width += TAB_WIDTH,
            _ => break,
        }
        idx = i + c.len_utf8();
    }
    &line[idx..]
}

/// True if the line contains only whitespace.
pub fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}
