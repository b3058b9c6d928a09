//! Word tokenization for the reveal effect.
//!
//! Rich text is split into word units, each wrapped in a `span.fx-word`, while
//! inline markup (`<em>`, `<a>`, `<strong>`, ...) is kept in place around them.
//! Text that already sits inside a word span is left alone, so running the
//! tokenizer on its own output changes nothing.

use smallvec::SmallVec;

pub const WORD_CLASS: &str = "fx-word";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Piece<'a> {
    Word(&'a str),
    Space(&'a str),
}

impl<'a> Piece<'a> {
    pub fn as_str(&self) -> &'a str {
        match self {
            Piece::Word(s) | Piece::Space(s) => s,
        }
    }
}

/// Splits a text run into alternating words and whitespace, losslessly.
pub fn split_words(text: &str) -> SmallVec<[Piece<'_>; 16]> {
    let mut out = SmallVec::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;
    for (i, ch) in text.char_indices() {
        let space = ch.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                out.push(piece(&text[start..i], prev));
                start = i;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        out.push(piece(&text[start..], space));
    }
    out
}

#[inline]
fn piece(s: &str, space: bool) -> Piece<'_> {
    if space {
        Piece::Space(s)
    } else {
        Piece::Word(s)
    }
}

/// Number of word units in a text run.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Wraps every word of `markup` in a word span, preserving tags.
pub fn tokenize_markup(markup: &str) -> String {
    let mut out = String::with_capacity(markup.len() * 2);
    let mut rest = markup;
    // >0 while inside an existing word span; counts nested spans
    let mut word_depth = 0usize;

    while !rest.is_empty() {
        if rest.starts_with('<') {
            let end = tag_end(rest);
            let tag = &rest[..end];
            if word_depth > 0 {
                if is_open(tag, "span") {
                    word_depth += 1;
                } else if is_close(tag, "span") {
                    word_depth -= 1;
                }
            } else if is_word_span_open(tag) {
                word_depth = 1;
            }
            out.push_str(tag);
            rest = &rest[end..];
            continue;
        }
        let end = rest.find('<').unwrap_or(rest.len());
        let text = &rest[..end];
        if word_depth > 0 {
            out.push_str(text);
        } else {
            for p in split_words(text) {
                match p {
                    Piece::Word(w) => {
                        out.push_str("<span class=\"");
                        out.push_str(WORD_CLASS);
                        out.push_str("\">");
                        out.push_str(w);
                        out.push_str("</span>");
                    }
                    Piece::Space(s) => out.push_str(s),
                }
            }
        }
        rest = &rest[end..];
    }
    out
}

/// Counts word spans in tokenized markup.
pub fn count_word_spans(markup: &str) -> usize {
    let mut count = 0;
    let mut rest = markup;
    while let Some(pos) = rest.find('<') {
        rest = &rest[pos..];
        let end = tag_end(rest);
        if is_word_span_open(&rest[..end]) {
            count += 1;
        }
        rest = &rest[end..];
    }
    count
}

/// Byte length of the tag starting at `s[0] == '<'`, honoring quoted attribute
/// values. An unterminated tag runs to the end of the input.
fn tag_end(s: &str) -> usize {
    let mut quote: Option<char> = None;
    for (i, ch) in s.char_indices().skip(1) {
        match quote {
            Some(q) if ch == q => quote = None,
            Some(_) => {}
            None if ch == '"' || ch == '\'' => quote = Some(ch),
            None if ch == '>' => return i + 1,
            None => {}
        }
    }
    s.len()
}

fn tag_name(tag: &str) -> Option<(bool, String)> {
    let inner = tag.strip_prefix('<')?;
    let (closing, inner) = match inner.strip_prefix('/') {
        Some(r) => (true, r),
        None => (false, inner),
    };
    let name: String = inner
        .chars()
        .take_while(|c| c.is_ascii_alphanumeric() || *c == '-')
        .collect::<String>()
        .to_ascii_lowercase();
    if name.is_empty() {
        None
    } else {
        Some((closing, name))
    }
}

fn is_open(tag: &str, name: &str) -> bool {
    matches!(tag_name(tag), Some((false, n)) if n == name) && !tag.ends_with("/>")
}

fn is_close(tag: &str, name: &str) -> bool {
    matches!(tag_name(tag), Some((true, n)) if n == name)
}

fn is_word_span_open(tag: &str) -> bool {
    is_open(tag, "span") && class_value(tag).is_some_and(|c| has_class(c, WORD_CLASS))
}

/// Class list of a tag such as `<span class="a b">`, if present.
///
/// Only a real `class` attribute counts: the name must follow whitespace and
/// sit outside any quoted value, so `data-class=` or `title="class=x"` do not
/// match.
fn class_value(tag: &str) -> Option<&str> {
    const NAME: &str = "class=";
    let mut quote: Option<u8> = None;
    for (i, &b) in tag.as_bytes().iter().enumerate() {
        match quote {
            Some(q) => {
                if b == q {
                    quote = None;
                }
            }
            None if b == b'"' || b == b'\'' => quote = Some(b),
            None if b.is_ascii_whitespace() => {
                let rest = &tag[i + 1..];
                if rest
                    .get(..NAME.len())
                    .is_some_and(|n| n.eq_ignore_ascii_case(NAME))
                {
                    return attr_value(&rest[NAME.len()..]);
                }
            }
            None => {}
        }
    }
    None
}

fn attr_value(after: &str) -> Option<&str> {
    let mut chars = after.chars();
    match chars.next()? {
        q @ ('"' | '\'') => {
            let body = &after[1..];
            let end = body.find(q)?;
            Some(&body[..end])
        }
        _ => {
            let end = after
                .find(|c: char| c.is_whitespace() || c == '>' || c == '/')
                .unwrap_or(after.len());
            Some(&after[..end])
        }
    }
}

#[inline]
pub fn has_class(class_list: &str, class: &str) -> bool {
    class_list.split_whitespace().any(|c| c == class)
}
