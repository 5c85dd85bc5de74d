use regex::Regex;
use std::sync::LazyLock;

/// `import ... from "p"`, `import type ... from "p"` and side-effect `import "p"`.
///
/// The clause between `import` and `from` may span lines but never contains a quote or `;`.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?m)^[ \t]*import\b(?:[^'";]*?\bfrom)?\s*(["'])([^"'\r\n]+)["']"#)
        .expect("valid regex")
});

/// A specifier found in source text, positioned at its opening quote.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImportSite {
    pub specifier: String,
    /// 1-based.
    pub line: u32,
    /// 1-based, counted in characters.
    pub col: u32,
}

/// Extract every static import declaration from `text`, in source order.
///
/// Comments and template literals are blanked first, so `import` lines inside them are
/// not edges. Never panics on any input.
pub fn extract_imports(text: &str) -> Vec<ImportSite> {
    let code = mask_non_code(text);
    let index = LineIndex::new(&code);
    IMPORT_RE
        .captures_iter(&code)
        .filter_map(|caps| {
            let quote = caps.get(1)?;
            let spec = caps.get(2)?;
            let (line, col) = index.position(&code, quote.start());
            Some(ImportSite {
                specifier: spec.as_str().to_string(),
                line,
                col,
            })
        })
        .collect()
}

#[derive(Clone, Copy)]
enum Scan {
    Code,
    LineComment,
    BlockComment,
    Template,
    Quoted(char),
}

/// Replace comment and template literal contents with spaces, one per char.
///
/// Newlines survive, so line and column numbers match the original text. Plain
/// `'...'`/`"..."` strings are kept intact (they hold the specifiers) and end at a
/// newline at the latest.
fn mask_non_code(text: &str) -> String {
    let blank = |c: char| if c == '\n' || c == '\r' { c } else { ' ' };
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut state = Scan::Code;

    while let Some(c) = chars.next() {
        state = match state {
            Scan::Code => match c {
                '/' if chars.peek() == Some(&'/') => {
                    chars.next();
                    out.push_str("  ");
                    Scan::LineComment
                }
                '/' if chars.peek() == Some(&'*') => {
                    chars.next();
                    out.push_str("  ");
                    Scan::BlockComment
                }
                '`' => {
                    out.push(' ');
                    Scan::Template
                }
                '\'' | '"' => {
                    out.push(c);
                    Scan::Quoted(c)
                }
                _ => {
                    out.push(c);
                    Scan::Code
                }
            },
            Scan::LineComment => {
                out.push(blank(c));
                if c == '\n' {
                    Scan::Code
                } else {
                    Scan::LineComment
                }
            }
            Scan::BlockComment => {
                if c == '*' && chars.peek() == Some(&'/') {
                    chars.next();
                    out.push_str("  ");
                    Scan::Code
                } else {
                    out.push(blank(c));
                    Scan::BlockComment
                }
            }
            Scan::Template => {
                out.push(blank(c));
                match c {
                    '\\' => {
                        if let Some(next) = chars.next() {
                            out.push(blank(next));
                        }
                        Scan::Template
                    }
                    '`' => Scan::Code,
                    _ => Scan::Template,
                }
            }
            Scan::Quoted(quote) => {
                out.push(c);
                match c {
                    '\\' => {
                        // Also covers a `\` line continuation.
                        if let Some(next) = chars.next() {
                            out.push(next);
                        }
                        Scan::Quoted(quote)
                    }
                    '\n' => Scan::Code,
                    c if c == quote => Scan::Code,
                    _ => Scan::Quoted(quote),
                }
            }
        };
    }
    out
}

struct LineIndex {
    starts: Vec<usize>,
}

impl LineIndex {
    fn new(text: &str) -> Self {
        let starts = std::iter::once(0)
            .chain(text.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self { starts }
    }

    fn position(&self, text: &str, offset: usize) -> (u32, u32) {
        let line_idx = match self.starts.binary_search(&offset) {
            Ok(i) => i,
            Err(i) => i.saturating_sub(1),
        };
        let start = self.starts[line_idx];
        let col = text
            .get(start..offset)
            .map(|s| s.chars().count())
            .unwrap_or(0);
        (line_idx as u32 + 1, col as u32 + 1)
    }
}
