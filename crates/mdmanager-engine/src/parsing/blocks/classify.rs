use crate::parsing::lines::{indent_width, is_blank};

use super::kinds::{
    BlockQuote, CodeFence, Heading, IndentedCode, ListItem, ListKind, TableRow, ThematicBreak,
};

/// Minimum indent for a non-item line to continue an open list item.
pub const LIST_CONTINUATION_INDENT: usize = 2;

/// Classification of a single line.
///
/// This is phase 1 of block parsing. Every line gets exactly one class.
/// The only context consulted is [`LineContext`], which the builder
/// derives from its open blocks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// A ```` ``` ```` line, opening (with its info string) or closing a fence.
    FenceDelimiter { info: &'a str },
    /// Any line inside an open fence, verbatim.
    FencedContent(&'a str),
    /// An indented-code line with the qualifying indent stripped.
    IndentedCode(&'a str),
    Heading { level: u8, text: &'a str },
    ListItem { kind: ListKind, text: &'a str },
    /// An indented non-item line while a list is open.
    ListContinuation(&'a str),
    BlockQuote(&'a str),
    ThematicBreak,
    TableRow(Vec<&'a str>),
    /// A table alignment row; carries no content.
    TableAlignment,
    Blank,
    Text(&'a str),
}

/// The converter state that line classification depends on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineContext {
    pub in_fence: bool,
    pub in_list: bool,
    pub in_indented_code: bool,
}

/// Classifies individual lines for the block building phase.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line, trying each block kind in precedence order.
    ///
    /// Inside a fence nothing but the closing delimiter is recognised.
    pub fn classify<'a>(&self, line: &'a str, ctx: LineContext) -> LineClass<'a> {
        if let Some(info) = CodeFence::sig(line) {
            return LineClass::FenceDelimiter { info };
        }
        if ctx.in_fence {
            return LineClass::FencedContent(line);
        }

        if is_blank(line) {
            if ctx.in_indented_code {
                return LineClass::IndentedCode(IndentedCode::blank(line, ctx.in_list));
            }
            return LineClass::Blank;
        }
        if let Some(code) = IndentedCode::strip(line, ctx.in_list) {
            return LineClass::IndentedCode(code);
        }

        if let Some((level, text)) = Heading::parse(line) {
            return LineClass::Heading { level, text };
        }
        if ThematicBreak::matches(line) {
            return LineClass::ThematicBreak;
        }
        if let Some(text) = BlockQuote::parse(line) {
            return LineClass::BlockQuote(text);
        }
        if let Some(marker) = ListItem::parse(line) {
            return LineClass::ListItem {
                kind: marker.kind,
                text: marker.text,
            };
        }
        if TableRow::is_row(line) {
            if TableRow::is_alignment(line) {
                return LineClass::TableAlignment;
            }
            return LineClass::TableRow(TableRow::cells(line));
        }

        if ctx.in_list && indent_width(line) >= LIST_CONTINUATION_INDENT {
            return LineClass::ListContinuation(line.trim());
        }
        LineClass::Text(line.trim())
    }
}
