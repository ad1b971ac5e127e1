use std::borrow::Cow;

use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, Link},
};

/// Renders inline Markdown in `s` to an HTML fragment.
///
/// Literal text runs are HTML-escaped as they are emitted, so user content
/// can never open a tag. Constructs are tried at each position in a fixed
/// precedence order:
///
/// 1. code spans (raw zones: nothing inside them is interpreted)
/// 2. strong, strikethrough, then emphasis
/// 3. images, then links
///
/// Unclosed or malformed constructs fall through as literal text.
pub fn render_inline(s: &str) -> String {
    let mut cur = Cursor::new(s);
    let mut out = String::with_capacity(s.len());
    let mut text_start = cur.offset();

    while !cur.at_end() {
        let start = cur.offset();
        let rendered = try_code_span(&mut cur)
            .or_else(|| try_emphasis(&mut cur))
            .or_else(|| try_image(&mut cur))
            .or_else(|| try_link(&mut cur));

        match rendered {
            Some(html) => {
                push_text(&mut out, &s[text_start..start]);
                out.push_str(&html);
                text_start = cur.offset();
            }
            None => cur.step(),
        }
    }

    push_text(&mut out, &s[text_start..]);
    out
}

/// Escapes text for an element body.
pub fn escape_text(s: &str) -> Cow<'_, str> {
    html_escape::encode_text(s)
}

/// Escapes text for a double-quoted attribute value.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}

fn push_text(out: &mut String, text: &str) {
    out.push_str(&escape_text(text));
}

fn try_code_span(cur: &mut Cursor<'_>) -> Option<String> {
    if !cur.at(CodeSpan::TICK) {
        return None;
    }
    let rest = cur.rest();
    let inner_len = CodeSpan::inner_len(rest)?;
    let inner = &rest[1..1 + inner_len];
    cur.advance(inner_len + 2);
    Some(format!("<code>{}</code>", escape_text(inner)))
}

fn try_emphasis(cur: &mut Cursor<'_>) -> Option<String> {
    let rest = cur.rest();
    let run = Emphasis::parse(rest, cur.prev_char())?;
    let inner = &rest[run.delim_len..run.delim_len + run.inner_len];
    cur.advance(run.len());
    let tag = run.kind.tag();
    Some(format!("<{tag}>{}</{tag}>", render_inline(inner)))
}

fn try_image(cur: &mut Cursor<'_>) -> Option<String> {
    if !cur.at(Link::IMAGE_PREFIX) {
        return None;
    }
    let target = Link::parse_image(cur.rest())?;
    cur.advance(target.len);
    Some(format!(
        r#"<img src="{}" alt="{}">"#,
        escape_attribute(target.url),
        escape_attribute(target.label)
    ))
}

fn try_link(cur: &mut Cursor<'_>) -> Option<String> {
    if !cur.at(Link::LABEL_OPEN as u8) {
        return None;
    }
    let target = Link::parse_link(cur.rest())?;
    cur.advance(target.len);
    Some(format!(
        r#"<a href="{}">{}</a>"#,
        escape_attribute(target.url),
        render_inline(target.label)
    ))
}
