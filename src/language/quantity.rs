//! Quantity types and classification of the raw text found inside a brace
//! group.

use std::fmt;

/// The amount written in an annotation's brace group. Classification only
/// recognizes the textual form; no arithmetic or unit handling is done.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Quantity<'i> {
    #[default]
    Unset,
    Integer(i64),
    Decimal(Decimal),
    /// Written as `a/b`. Whitespace around the slash is not kept, so
    /// "1 / 2" displays as "1/2".
    Fraction { numerator: i64, denominator: i64 },
    Raw(&'i str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Decimal {
    pub number: i64,
    pub precision: u8,
}

impl Decimal {
    pub fn to_f64(self) -> f64 {
        self.number as f64 / 10_f64.powi(self.precision as i32)
    }
}

impl fmt::Display for Decimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = 10_i64.pow(self.precision as u32);
        let whole = self.number / scale;
        let frac = (self.number % scale).abs();
        write!(f, "{}.{:0width$}", whole, frac, width = self.precision as usize)
    }
}

impl<'i> fmt::Display for Quantity<'i> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Quantity::Unset => Ok(()),
            Quantity::Integer(number) => write!(f, "{}", number),
            Quantity::Decimal(decimal) => write!(f, "{}", decimal),
            Quantity::Fraction {
                numerator,
                denominator,
            } => write!(f, "{}/{}", numerator, denominator),
            Quantity::Raw(text) => write!(f, "{}", text),
        }
    }
}

/// Classify the quantity half of a brace group. Integer is attempted
/// first, then fraction, then decimal; anything else is kept verbatim.
/// Leading zeros disqualify the numeric forms so that text like "01/2"
/// survives unmodified.
pub fn parse_quantity(input: &str) -> Quantity<'_> {
    let input = input.trim();

    if input.is_empty() {
        return Quantity::Unset;
    }

    if let Some(number) = parse_integer(input) {
        return Quantity::Integer(number);
    }

    let re = regex!(r"^(0|[1-9][0-9]*)\s*/\s*([1-9][0-9]*)$");
    if let Some(cap) = re.captures(input) {
        let numerator = cap
            .get(1)
            .and_then(|one| parse_integer(one.as_str()));
        let denominator = cap
            .get(2)
            .and_then(|two| parse_integer(two.as_str()));

        if let (Some(numerator), Some(denominator)) = (numerator, denominator) {
            return Quantity::Fraction {
                numerator,
                denominator,
            };
        }
    }

    if let Some(decimal) = parse_decimal(input) {
        return Quantity::Decimal(decimal);
    }

    Quantity::Raw(input)
}

fn parse_integer(input: &str) -> Option<i64> {
    let re = regex!(r"^(0|[1-9][0-9]*)$");
    if !re.is_match(input) {
        return None;
    }
    input
        .parse()
        .ok()
}

fn parse_decimal(input: &str) -> Option<Decimal> {
    let re = regex!(r"^(0|[1-9][0-9]*)\.([0-9]+)$");

    let cap = re.captures(input)?;
    let whole_part = cap
        .get(1)?
        .as_str();
    let frac_part = cap
        .get(2)?
        .as_str();

    let whole: i64 = whole_part
        .parse()
        .ok()?;
    let frac: i64 = frac_part
        .parse()
        .ok()?;
    let precision: u8 = frac_part
        .len()
        .try_into()
        .ok()?;

    // Combine whole and fractional parts
    let number = whole
        .checked_mul(10_i64.checked_pow(precision as u32)?)?
        .checked_add(frac)?;

    Some(Decimal { number, precision })
}
