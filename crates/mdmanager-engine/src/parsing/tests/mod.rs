//! Whole-document tests for the converter.
//!
//! Fixtures (.md) live in `fixtures/`; expected HTML is kept inline with
//! `insta` so a reviewer sees input and output side by side.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{ConvertError, Converter, to_html};

fn fixture(name: &str) -> String {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap()
}

// Fixture-based snapshot tests

#[test]
fn fixture_kitchen_sink() {
    let html = to_html(&fixture("kitchen_sink"));
    invariants::check(&html);
    insta::assert_snapshot!(html, @r#"
    <h1>Title</h1>
    <p>Intro with <strong>bold</strong> and <code>code</code>.</p>
    <ul>
    <li>one</li>
    <li>two</li>
    </ul>
    <p>Between lists.</p>
    <ol>
    <li>first</li>
    <li>second</li>
    </ol>
    <blockquote>quote</blockquote>
    <table>
    <tr><td>A</td><td>B</td></tr>
    <tr><td>1</td><td>2</td></tr>
    </table>
    <pre><code>indented</code></pre>
    <pre><code class="language-rust">fn main() {}</code></pre>
    <hr/>
    <p>Last line</p>
    "#);
}

#[test]
fn fixture_readme_style() {
    let html = to_html(&fixture("readme_style"));
    invariants::check(&html);
    insta::assert_snapshot!(html, @r#"
    <h2>Install</h2>
    <p>Run the installer, then open the <em>settings</em> page.</p>
    <ul>
    <li>Works offline</li>
    <li>Supports <del>old</del> new themes across every window</li>
    </ul>
    <p>See <a href="https://example.com/docs?a=1&amp;b=2">the docs</a> or <img src="logo.png &quot;x&quot;" alt="logo">.</p>
    "#);
}

// Contract tests

#[test]
fn empty_input_is_empty_output() {
    assert_eq!(to_html(""), "");
}

#[test]
fn whitespace_only_input_is_empty_output() {
    assert_eq!(to_html("\n  \n\t\n"), "");
}

#[test]
fn raw_html_is_escaped() {
    let html = to_html("a < b && c > d\n<script>alert(1)</script>");
    assert_eq!(
        html,
        "<p>a &lt; b &amp;&amp; c &gt; d &lt;script&gt;alert(1)&lt;/script&gt;</p>"
    );
    invariants::check(&html);
}

#[test]
fn fenced_code_is_verbatim() {
    assert_eq!(
        to_html("```js\n**not bold**\n```"),
        r#"<pre><code class="language-js">**not bold**</code></pre>"#
    );
}

#[test]
fn fenced_code_keeps_blank_lines_and_markdown() {
    assert_eq!(
        to_html("```\n# a\n\n- b <i>\n```"),
        "<pre><code># a\n\n- b &lt;i&gt;</code></pre>"
    );
}

#[test]
fn unterminated_fence_is_flushed() {
    assert_eq!(to_html("```\ncode"), "<pre><code>code</code></pre>");
}

#[test]
fn unterminated_fence_keeps_language() {
    assert_eq!(
        to_html("```py\nx = 1\n\ny = 2"),
        "<pre><code class=\"language-py\">x = 1\n\ny = 2</code></pre>"
    );
}

#[rstest]
#[case("# One", "<h1>One</h1>")]
#[case("### Three", "<h3>Three</h3>")]
#[case("###### Six", "<h6>Six</h6>")]
#[case("## *Styled* heading", "<h2><em>Styled</em> heading</h2>")]
fn headings(#[case] input: &str, #[case] expected: &str) {
    assert_eq!(to_html(input), expected);
}

#[test]
fn unordered_list_round_trip() {
    let html = to_html("- a\n- b\n- c");
    assert_eq!(html, "<ul>\n<li>a</li>\n<li>b</li>\n<li>c</li>\n</ul>");
    assert_eq!(html.matches("<ul>").count(), 1);
    assert_eq!(html.matches("</ul>").count(), 1);
    assert_eq!(html.matches("<li>").count(), 3);
}

#[test]
fn ordered_list() {
    assert_eq!(
        to_html("1. **a**\n2. b"),
        "<ol>\n<li><strong>a</strong></li>\n<li>b</li>\n</ol>"
    );
}

#[test]
fn indented_text_in_list_is_continuation_not_code() {
    assert_eq!(
        to_html("- item\n    continued\n        code"),
        "<ul>\n<li>item continued</li>\n</ul>\n<pre><code>code</code></pre>"
    );
}

#[test]
fn blank_line_closes_list() {
    let html = to_html("- a\n\n- b");
    assert_eq!(html, "<ul>\n<li>a</li>\n</ul>\n<ul>\n<li>b</li>\n</ul>");
    assert_eq!(html.matches("<ul>").count(), 2);
}

#[test]
fn indented_code_after_list_and_blank_is_code() {
    assert_eq!(
        to_html("- item\n\n    code block"),
        "<ul>\n<li>item</li>\n</ul>\n<pre><code>code block</code></pre>"
    );
}

#[test]
fn indented_text_after_list_and_blank_is_a_paragraph() {
    assert_eq!(
        to_html("- item\n\n  after blank"),
        "<ul>\n<li>item</li>\n</ul>\n<p>after blank</p>"
    );
}

#[test]
fn heading_marker_without_text_is_not_a_heading() {
    let html = to_html("# h\n#   \n#");
    assert_eq!(html, "<h1>h</h1>\n<p># #</p>");
    assert_eq!(html.matches("<h1>").count(), 1);
}

#[test]
fn table_alignment_row_is_dropped() {
    let html = to_html("|A|B|\n|-|-|\n|1|2|");
    assert_eq!(
        html,
        "<table>\n<tr><td>A</td><td>B</td></tr>\n<tr><td>1</td><td>2</td></tr>\n</table>"
    );
    assert_eq!(html.matches("<tr>").count(), 2);
}

#[test]
fn table_closes_before_paragraph() {
    assert_eq!(
        to_html("a | b\nplain"),
        "<table>\n<tr><td>a</td><td>b</td></tr>\n</table>\n<p>plain</p>"
    );
}

#[test]
fn inline_code_beats_bold() {
    assert_eq!(to_html("`**bold**`"), "<p><code>**bold**</code></p>");
}

#[test]
fn each_blockquote_line_is_a_block() {
    assert_eq!(
        to_html("> a\n> b"),
        "<blockquote>a</blockquote>\n<blockquote>b</blockquote>"
    );
}

#[test]
fn horizontal_rule_splits_paragraphs() {
    assert_eq!(to_html("a\n---\nb"), "<p>a</p>\n<hr/>\n<p>b</p>");
}

#[test]
fn fence_flushes_open_list() {
    assert_eq!(
        to_html("- a\n```\nx\n```"),
        "<ul>\n<li>a</li>\n</ul>\n<pre><code>x</code></pre>"
    );
}

#[test]
fn heading_flushes_indented_code() {
    assert_eq!(
        to_html("    let x;\n# Next"),
        "<pre><code>let x;</code></pre>\n<h1>Next</h1>"
    );
}

#[test]
fn crlf_and_lf_give_same_output() {
    let unix = "# T\n\ntext\n- a\n";
    let windows = "# T\r\n\r\ntext\r\n- a\r\n";
    assert_eq!(to_html(unix), to_html(windows));
    assert_eq!(to_html(unix), "<h1>T</h1>\n<p>text</p>\n<ul>\n<li>a</li>\n</ul>");
}

#[rstest]
#[case("**")]
#[case("```")]
#[case("|")]
#[case("- ")]
#[case(">")]
#[case("    ")]
#[case("[a](")]
#[case("![")]
#[case("- a\n|b|\n    c\n> d")]
#[case("1. a\n        b\n```\n<x>")]
#[case("| <a> | `|` |\n|--|--|")]
#[case("<<>>&&\n\t<tab>\n# <h1>")]
fn malformed_input_keeps_tags_balanced(#[case] input: &str) {
    invariants::check(&to_html(input));
}

// Converter

#[test]
fn converter_without_limit_matches_to_html() {
    let md = "# a\n\nb";
    assert_eq!(Converter::new().convert(md).unwrap(), to_html(md));
}

#[test]
fn converter_rejects_oversized_input() {
    let converter = Converter::with_max_input_bytes(4);
    assert_eq!(
        converter.convert("12345"),
        Err(ConvertError::InputTooLarge { len: 5, limit: 4 })
    );
    assert_eq!(converter.convert("1234").unwrap(), "<p>1234</p>");
}
