// File: crates/chart-labels/src/template.rs
// Summary: Positional template strings (`{0}`, `{1}`, ...) with apostrophe quoting.
// Notes:
// - `''` is a literal apostrophe; `'...'` quotes a run so braces inside are literal.
// - A slot without a matching argument renders as the literal `{n}`.

use std::fmt;

use crate::error::{LabelError, Result};

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
enum Segment {
    Literal(String),
    Slot(usize),
}

/// A parsed template. Parsing happens once; rendering never fails.
/// Serializes as its source text and re-parses on the way back in.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String", into = "String"))]
pub struct MessageTemplate {
    source: String,
    segments: Vec<Segment>,
}

impl MessageTemplate {
    pub fn parse(source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let segments = parse_segments(&source)?;
        Ok(Self { source, segments })
    }

    /// `{0}: ({1}, ..., {n})`: a series name followed by `arity` values in parentheses.
    pub fn tuple(arity: usize) -> Self {
        let mut source = String::from("{0}: (");
        let mut segments = vec![Segment::Slot(0), Segment::Literal(": (".to_string())];
        for i in 1..=arity {
            if i > 1 {
                source.push_str(", ");
                segments.push(Segment::Literal(", ".to_string()));
            }
            source.push_str(&format!("{{{i}}}"));
            segments.push(Segment::Slot(i));
        }
        source.push(')');
        segments.push(Segment::Literal(")".to_string()));
        Self { source, segments }
    }

    /// The template as written.
    pub fn source(&self) -> &str { &self.source }

    /// Highest argument index referenced, if any slot exists.
    pub fn max_index(&self) -> Option<usize> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Slot(i) => Some(*i),
                Segment::Literal(_) => None,
            })
            .max()
    }

    pub fn render<S: AsRef<str>>(&self, args: &[S]) -> String {
        let mut out = String::with_capacity(self.source.len() + args.iter().map(|a| a.as_ref().len()).sum::<usize>());
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Slot(i) => match args.get(*i) {
                    Some(arg) => out.push_str(arg.as_ref()),
                    None => {
                        out.push('{');
                        out.push_str(&i.to_string());
                        out.push('}');
                    }
                },
            }
        }
        out
    }
}

impl fmt::Display for MessageTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

impl TryFrom<String> for MessageTemplate {
    type Error = LabelError;

    fn try_from(source: String) -> Result<Self> {
        Self::parse(source)
    }
}

impl From<MessageTemplate> for String {
    fn from(template: MessageTemplate) -> Self {
        template.source
    }
}

fn parse_segments(source: &str) -> Result<Vec<Segment>> {
    let mut segments = Vec::new();
    let mut literal = String::new();
    let mut quoted = false;
    let mut chars = source.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '\'' => {
                if chars.peek() == Some(&'\'') {
                    chars.next();
                    literal.push('\'');
                } else {
                    quoted = !quoted;
                }
            }
            _ if quoted => literal.push(ch),
            '{' => {
                let mut body = String::new();
                let mut closed = false;
                for c in chars.by_ref() {
                    if c == '}' {
                        closed = true;
                        break;
                    }
                    body.push(c);
                }
                if !closed {
                    return Err(LabelError::invalid_template(source, "unmatched braces"));
                }
                let index = parse_index(source, &body)?;
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Slot(index));
            }
            _ => literal.push(ch),
        }
    }
    if !literal.is_empty() {
        segments.push(Segment::Literal(literal));
    }
    Ok(segments)
}

/// Only bare decimal digits are accepted; `{ 1 }` is an error.
fn parse_index(source: &str, body: &str) -> Result<usize> {
    if body.contains(',') {
        return Err(LabelError::invalid_template(
            source,
            format!("format type in {{{body}}} is not supported, values are pre-formatted"),
        ));
    }
    if body.is_empty() || !body.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LabelError::invalid_template(source, format!("argument index {body:?} is not a number")));
    }
    body.parse::<usize>()
        .map_err(|_| LabelError::invalid_template(source, format!("argument index {body:?} is too large")))
}
