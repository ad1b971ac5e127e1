use crate::parsing::inline::{escape_attribute, escape_text, render_inline};

use super::{
    classify::{LineClass, LineContext},
    kinds::ListKind,
};

/// Lines collected inside an open fence.
#[derive(Debug, Default)]
struct FenceState {
    language: String,
    lines: Vec<String>,
}

/// An open list. The current item stays open so that continuation lines
/// can be appended to it.
#[derive(Debug)]
struct OpenList {
    kind: ListKind,
    item: Option<String>,
}

/// Block construction state machine producing HTML.
///
/// Every transition into a new block first flushes whatever belongs to the
/// other blocks, so output blocks never interleave and each input line
/// contributes to exactly one of them.
#[derive(Debug, Default)]
pub struct HtmlBuilder {
    fence: Option<FenceState>,
    indented: Vec<String>,
    list: Option<OpenList>,
    in_table: bool,
    paragraph: Vec<String>,
    out: Vec<String>,
}

impl HtmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state the classifier needs for the next line.
    pub fn context(&self) -> LineContext {
        LineContext {
            in_fence: self.fence.is_some(),
            in_list: self.list.is_some(),
            in_indented_code: !self.indented.is_empty(),
        }
    }

    pub fn push(&mut self, class: LineClass<'_>) {
        if !matches!(class, LineClass::IndentedCode(_)) {
            self.flush_indented();
        }

        match class {
            LineClass::FencedContent(line) => {
                if let Some(fence) = self.fence.as_mut() {
                    fence.lines.push(line.to_string());
                }
            }
            LineClass::FenceDelimiter { info } => {
                if self.fence.is_some() {
                    self.flush_fence();
                } else {
                    self.flush_all();
                    self.fence = Some(FenceState {
                        language: info.to_string(),
                        lines: vec![],
                    });
                }
            }
            LineClass::IndentedCode(code) => {
                if self.indented.is_empty() {
                    self.flush_all();
                }
                self.indented.push(code.to_string());
            }
            LineClass::Blank => {
                self.flush_paragraph();
                self.close_list();
                self.close_table();
            }
            LineClass::Heading { level, text } => {
                self.flush_all();
                self.out
                    .push(format!("<h{level}>{}</h{level}>", render_inline(text)));
            }
            LineClass::ThematicBreak => {
                self.flush_all();
                self.out.push("<hr/>".to_string());
            }
            LineClass::BlockQuote(text) => {
                self.flush_all();
                self.out
                    .push(format!("<blockquote>{}</blockquote>", render_inline(text)));
            }
            LineClass::ListItem { kind, text } => self.push_list_item(kind, text),
            LineClass::ListContinuation(text) => self.extend_list_item(text),
            LineClass::TableRow(cells) => self.push_table_row(&cells),
            LineClass::TableAlignment => {}
            LineClass::Text(text) => {
                self.close_list();
                self.close_table();
                self.paragraph.push(render_inline(text));
            }
        }
    }

    pub fn finish(mut self) -> String {
        // EOF flush
        self.flush_fence();
        self.flush_indented();
        self.flush_paragraph();
        self.close_list();
        self.close_table();
        self.out.join("\n")
    }

    fn push_list_item(&mut self, kind: ListKind, text: &str) {
        let item = render_inline(text);
        match self.list.as_mut() {
            // The list type is fixed by its first marker.
            Some(list) => {
                if let Some(done) = list.item.replace(item) {
                    self.out.push(format!("<li>{done}</li>"));
                }
            }
            None => {
                self.flush_all();
                self.out.push(kind.open_tag().to_string());
                self.list = Some(OpenList {
                    kind,
                    item: Some(item),
                });
            }
        }
    }

    fn extend_list_item(&mut self, text: &str) {
        let rendered = render_inline(text);
        if let Some(list) = self.list.as_mut() {
            match list.item.as_mut() {
                Some(item) => {
                    item.push(' ');
                    item.push_str(&rendered);
                }
                None => list.item = Some(rendered),
            }
        }
    }

    fn push_table_row(&mut self, cells: &[&str]) {
        if !self.in_table {
            self.flush_all();
            self.out.push("<table>".to_string());
            self.in_table = true;
        }
        let mut row = String::from("<tr>");
        for cell in cells {
            row.push_str("<td>");
            row.push_str(&render_inline(cell));
            row.push_str("</td>");
        }
        row.push_str("</tr>");
        self.out.push(row);
    }

    fn flush_all(&mut self) {
        self.flush_indented();
        self.flush_paragraph();
        self.close_list();
        self.close_table();
    }

    fn flush_fence(&mut self) {
        let Some(fence) = self.fence.take() else {
            return;
        };
        let code = escape_text(&fence.lines.join("\n")).into_owned();
        if fence.language.is_empty() {
            self.out.push(format!("<pre><code>{code}</code></pre>"));
        } else {
            self.out.push(format!(
                r#"<pre><code class="language-{}">{code}</code></pre>"#,
                escape_attribute(&fence.language)
            ));
        }
    }

    fn flush_indented(&mut self) {
        if self.indented.is_empty() {
            return;
        }
        let mut lines = std::mem::take(&mut self.indented);
        while lines.last().is_some_and(|l| l.trim().is_empty()) {
            lines.pop();
        }
        let code = escape_text(&lines.join("\n")).into_owned();
        self.out.push(format!("<pre><code>{code}</code></pre>"));
    }

    fn flush_paragraph(&mut self) {
        if self.paragraph.is_empty() {
            return;
        }
        let text = std::mem::take(&mut self.paragraph).join(" ");
        self.out.push(format!("<p>{text}</p>"));
    }

    fn close_list(&mut self) {
        if let Some(list) = self.list.take() {
            if let Some(item) = list.item {
                self.out.push(format!("<li>{item}</li>"));
            }
            self.out.push(list.kind.close_tag().to_string());
        }
    }

    fn close_table(&mut self) {
        if self.in_table {
            self.out.push("</table>".to_string());
            self.in_table = false;
        }
    }
}
