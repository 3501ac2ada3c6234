//! Recognize a single ingredient, cookware, or timer annotation starting at
//! a sigil character.

use crate::language::*;

pub const INGREDIENT: char = '@';
pub const COOKWARE: char = '#';
pub const TIMER: char = '~';

const GROUP_OPEN: char = '{';
const GROUP_CLOSE: char = '}';
const UNIT_SEPARATOR: char = '%';

/// Reasons a sigil did not begin an annotation. None of these are fatal;
/// the caller falls back to treating the sigil as literal text. Offsets are
/// relative to the sigil.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsingError {
    NotAnnotation(usize),
    EmptyName(usize),
    UnterminatedGroup(usize),
}

impl ParsingError {
    pub fn offset(&self) -> usize {
        match self {
            ParsingError::NotAnnotation(offset) => *offset,
            ParsingError::EmptyName(offset) => *offset,
            ParsingError::UnterminatedGroup(offset) => *offset,
        }
    }

    pub fn message(&self) -> String {
        match self {
            ParsingError::NotAnnotation(_) => "sigil not followed by a name".to_string(),
            ParsingError::EmptyName(_) => "annotation requires a name".to_string(),
            ParsingError::UnterminatedGroup(_) => "missing closing brace".to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Ingredient,
    Cookware,
    Timer,
}

pub fn is_sigil(c: char) -> bool {
    c == INGREDIENT || c == COOKWARE || c == TIMER
}

/// Letters, digits, connector punctuation, and `-`. Other non-ASCII
/// symbols such as emoji are accepted; punctuation is not.
pub fn is_name_char(c: char) -> bool {
    if c.is_alphanumeric() || c == '_' || c == '-' {
        return true;
    }
    if c.is_ascii() || c.is_whitespace() {
        return false;
    }

    let re = regex!(r"^[\p{P}--\p{Pc}]$");

    let mut buffer = [0; 4];
    !re.is_match(c.encode_utf8(&mut buffer))
}

/// Read one annotation from the front of `source`, which is expected to
/// begin with a sigil. On success returns the annotation (with an offset of
/// zero, to be positioned by the caller) and the number of bytes of source
/// it occupied.
pub fn read_annotation(source: &str) -> Result<(Annotation<'_>, usize), ParsingError> {
    let kind = match source
        .chars()
        .next()
    {
        Some(INGREDIENT) => Kind::Ingredient,
        Some(COOKWARE) => Kind::Cookware,
        Some(TIMER) => Kind::Timer,
        _ => return Err(ParsingError::NotAnnotation(0)),
    };

    // all sigils are a single byte wide
    let body = &source[1..];

    let width = match read_multiword_name(body) {
        Some(width) => width,
        None => read_name(body),
    };
    let name = &body[..width];
    let rest = &body[width..];

    let (group, consumed) = if rest.starts_with(GROUP_OPEN) {
        let close = rest
            .find(GROUP_CLOSE)
            .ok_or(ParsingError::UnterminatedGroup(1 + width))?;
        (Some(&rest[1..close]), 1 + width + close + 1)
    } else {
        (None, 1 + width)
    };

    if name.is_empty() {
        if group.is_none() {
            return Err(ParsingError::NotAnnotation(0));
        }
        if kind != Kind::Timer {
            return Err(ParsingError::EmptyName(1));
        }
    }

    let (quantity, unit) = match group {
        Some(content) => split_group(content),
        None => (Quantity::Unset, None),
    };

    let annotation = match kind {
        Kind::Ingredient => Annotation::Ingredient(Ingredient {
            name,
            amount: Amount { quantity, unit },
            idx: 0,
        }),
        // any unit given to cookware is discarded
        Kind::Cookware => Annotation::Cookware(Cookware {
            name,
            quantity,
            idx: 0,
        }),
        Kind::Timer => Annotation::Timer(Timer {
            name: if name.is_empty() { None } else { Some(name) },
            duration: quantity,
            unit,
            idx: 0,
        }),
    };

    Ok((annotation, consumed))
}

/// Width in bytes of the run of name characters at the front of `content`.
fn read_name(content: &str) -> usize {
    content
        .char_indices()
        .find(|(_, c)| !is_name_char(*c))
        .map(|(i, _)| i)
        .unwrap_or(content.len())
}

/// A multi-word name is two or more words of name characters separated by
/// single spaces, closed off by a brace group directly after the last word.
/// Returns the width of the whole phrase, or None if `content` doesn't
/// have that shape.
fn read_multiword_name(content: &str) -> Option<usize> {
    let mut end = 0;
    let mut words = 0;

    loop {
        let width = read_name(&content[end..]);
        if width == 0 {
            return None;
        }
        end += width;
        words += 1;

        let after = &content[end..];
        if after.starts_with(GROUP_OPEN) {
            return if words > 1 { Some(end) } else { None };
        } else if after.starts_with(' ') {
            end += 1;
        } else {
            return None;
        }
    }
}

/// Split the inside of a brace group on the first `%` into quantity and
/// unit. Both halves are trimmed; an empty unit is no unit.
fn split_group(content: &str) -> (Quantity<'_>, Option<&str>) {
    let (quantity, unit) = match content.split_once(UNIT_SEPARATOR) {
        Some((quantity, unit)) => (quantity, Some(unit.trim())),
        None => (content, None),
    };

    let unit = unit.filter(|unit| !unit.is_empty());

    (parse_quantity(quantity), unit)
}
