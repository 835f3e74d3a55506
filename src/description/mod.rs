//! Markdown-subset formatting for job descriptions.
//!
//! Descriptions arrive as loosely markdown-flavoured text. Each line is
//! classified by the first rule that matches, in this fixed order:
//!
//! 1. `#### text` / `### text` become a level-3 heading
//! 2. `## text` becomes a level-2 heading
//! 3. `# text` becomes a level-1 heading
//! 4. `* text` becomes a list item
//! 5. any other non-empty line becomes a paragraph
//!
//! In HTML the paragraph wrapper then runs over every non-empty output line,
//! converted or not, so `# Title` renders as `<p><h1>Title</h1></p>`.
//! `**text**` spans inside any of those become bold. The pass is line-based
//! and non-recursive; nested markdown is not parsed and nothing is escaped.
//!
//! Two renderers share the classification: [`format_description`] produces
//! HTML, and the terminal UI styles [`Block`]s directly.

use std::sync::LazyLock;

use regex::Regex;

static LINE_RULES: LazyLock<[(Regex, BlockKind); 5]> = LazyLock::new(|| {
    [
        (rule(r"^### (.*)$"), BlockKind::Heading(3)),
        (rule(r"^#### (.*)$"), BlockKind::Heading(3)),
        (rule(r"^## (.*)$"), BlockKind::Heading(2)),
        (rule(r"^# (.*)$"), BlockKind::Heading(1)),
        (rule(r"^\* (.*)$"), BlockKind::ListItem),
    ]
});

static BOLD: LazyLock<Regex> = LazyLock::new(|| rule(r"\*\*(.*?)\*\*"));

fn rule(pattern: &str) -> Regex {
    Regex::new(pattern).expect("formatter patterns are valid regexes")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Heading(u8),
    ListItem,
}

/// One classified line of a description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Heading of level 1 to 3
    Heading { level: u8, text: String },
    /// `* item`
    ListItem(String),
    /// Any other non-empty line
    Paragraph(String),
    /// Empty line
    Blank,
}

/// A run of text that is either bold or plain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span<'a> {
    pub text: &'a str,
    pub bold: bool,
}

/// Classify every line of `description`.
///
/// Both `\n` and `\r\n` line endings are accepted.
pub fn parse_blocks(description: &str) -> Vec<Block> {
    description
        .split('\n')
        .map(|line| classify_line(line.strip_suffix('\r').unwrap_or(line)))
        .collect()
}

fn classify_line(line: &str) -> Block {
    for (pattern, kind) in LINE_RULES.iter() {
        if let Some(caps) = pattern.captures(line) {
            let text = caps.get(1).map_or("", |m| m.as_str()).to_string();
            return match *kind {
                BlockKind::Heading(level) => Block::Heading { level, text },
                BlockKind::ListItem => Block::ListItem(text),
            };
        }
    }
    if line.is_empty() {
        Block::Blank
    } else {
        Block::Paragraph(line.to_string())
    }
}

/// Split `text` into plain and `**bold**` runs.
///
/// Matching is non-greedy, so `**a** and **b**` yields two bold runs. An
/// unmatched `**` stays as literal text.
pub fn bold_spans(text: &str) -> Vec<Span<'_>> {
    let mut spans = Vec::new();
    let mut last = 0;
    for caps in BOLD.captures_iter(text) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            spans.push(Span {
                text: &text[last..whole.start()],
                bold: false,
            });
        }
        spans.push(Span {
            text: inner.as_str(),
            bold: true,
        });
        last = whole.end();
    }
    if last < text.len() {
        spans.push(Span {
            text: &text[last..],
            bold: false,
        });
    }
    spans
}

/// Render classified blocks as HTML, one element per source line.
///
/// Every non-empty line ends up inside a `<p>`, including headings and list
/// items.
pub fn blocks_to_html(blocks: &[Block]) -> String {
    let lines: Vec<String> = blocks
        .iter()
        .map(|block| match block {
            Block::Heading { level, text } => format!("<p><h{level}>{text}</h{level}></p>"),
            Block::ListItem(text) => format!("<p><li>{text}</li></p>"),
            Block::Paragraph(text) => format!("<p>{text}</p>"),
            Block::Blank => String::new(),
        })
        .collect();
    BOLD.replace_all(&lines.join("\n"), "<strong>$1</strong>")
        .into_owned()
}

/// Format a job description as display HTML.
///
/// The output is not sanitized: it trusts the listing API the same way the
/// plain fields are trusted.
pub fn format_description(description: &str) -> String {
    blocks_to_html(&parse_blocks(description))
}
