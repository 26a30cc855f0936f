//! Markdown-to-prose extraction for flow metrics.
//!
//! Flow scoring on a README should not count fenced code or table cells as
//! sentences. [`strip_to_prose`] parses CommonMark with pulldown-cmark and
//! keeps only running text. The lint engine never uses this: its offsets must
//! refer to the buffer the caller passed in.

use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};

/// Reduce a markdown document to the prose a reader would read aloud.
///
/// Dropped: frontmatter, fenced and indented code, inline code, raw HTML,
/// headings, tables, image alt text. Kept without markers: paragraphs, list
/// items, block quotes, emphasis, link text. Block boundaries become a single
/// space so adjacent blocks never fuse into one word.
#[tracing::instrument(skip_all, fields(input_len = text.len()))]
pub fn strip_to_prose(text: &str) -> String {
    let body = strip_frontmatter(text);
    let options =
        Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_FOOTNOTES;

    let mut prose = String::with_capacity(body.len() / 2);
    let mut hidden: usize = 0;

    for event in Parser::new_ext(body, options) {
        match event {
            Event::Start(
                Tag::CodeBlock(_) | Tag::Heading { .. } | Tag::Table(_) | Tag::Image { .. },
            ) => hidden += 1,
            Event::End(
                TagEnd::CodeBlock | TagEnd::Heading(_) | TagEnd::Table | TagEnd::Image,
            ) => hidden = hidden.saturating_sub(1),
            Event::Text(t) if hidden == 0 => prose.push_str(&t),
            Event::SoftBreak | Event::HardBreak if hidden == 0 => prose.push(' '),
            Event::End(TagEnd::Paragraph | TagEnd::Item) if hidden == 0 => {
                if !prose.ends_with(' ') {
                    prose.push(' ');
                }
            }
            _ => {}
        }
    }

    let trimmed_len = prose.trim_end().len();
    prose.truncate(trimmed_len);
    prose
}

/// Slice off a leading `---` frontmatter block, if one is closed.
///
/// The opening fence must be `---` alone on its line with content directly
/// below it. A `---` followed by a blank line is a thematic break.
fn strip_frontmatter(text: &str) -> &str {
    let trimmed = text.trim_start();
    let Some(after_open) = trimmed
        .strip_prefix("---\n")
        .or_else(|| trimmed.strip_prefix("---\r\n"))
    else {
        return text;
    };
    if after_open
        .lines()
        .next()
        .is_none_or(|line| line.trim().is_empty())
    {
        return text;
    }
    let Some(close) = after_open.find("\n---") else {
        return text;
    };
    let rest = &after_open[close + 4..];
    rest.strip_prefix('\n').unwrap_or(rest)
}
