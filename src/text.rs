//! Description text cleanup.
//!
//! Outside raw mode (`dox -r`), dox hands descriptions over as markdown
//! already rendered to HTML. This maps the tags it produces (`<p>`, `<br>`,
//! `<pre><code>`, `<code>`, `<a href>`, `<strong>`, `<em>`) back to markdown.
//! Entities are decoded last, so an escaped `&lt;tag&gt;` written outside a
//! code span comes out as literal HTML; wrap such text in backticks.

use regex::Regex;
use std::sync::LazyLock;

static RE_PRE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<pre>\s*<code[^>]*>(.*?)\s*</code>\s*</pre>").unwrap()
});

static RE_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<code[^>]*>(.*?)</code>").unwrap());

static RE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?is)<a\s[^>]*?href\s*=\s*"([^"]*)"[^>]*>(.*?)</a>"#).unwrap()
});

static RE_STRONG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:strong|b)>").unwrap());

static RE_EMPHASIS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</?(?:em|i)>").unwrap());

static RE_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<br\s*/?>").unwrap());

static RE_PARA_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<p>").unwrap());

static RE_PARA_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</p>").unwrap());

static RE_BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n[ \t]*(?:\n[ \t]*)+\n").unwrap());

/// Normalize a dox description into markdown text.
pub fn reformat(text: &str) -> String {
    let text = RE_PRE_BLOCK.replace_all(text, "\n\n```\n${1}\n```\n\n");
    let text = RE_CODE.replace_all(&text, "`${1}`");
    let text = RE_LINK.replace_all(&text, "[${2}](${1})");
    let text = RE_STRONG.replace_all(&text, "**");
    let text = RE_EMPHASIS.replace_all(&text, "_");
    let text = RE_BREAK.replace_all(&text, "\n");
    let text = RE_PARA_OPEN.replace_all(&text, "");
    let text = RE_PARA_CLOSE.replace_all(&text, "\n\n");
    let text = decode_entities(&text);
    let text = RE_BLANK_RUN.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Decode the handful of entities dox escapes. `&amp;` goes last so that
/// `&amp;lt;` stays a literal `&lt;`.
fn decode_entities(text: &str) -> String {
    text.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
