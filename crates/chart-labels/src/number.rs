// File: crates/chart-labels/src/number.rs
// Summary: Decimal number formatter (fraction digits, grouping, affixes, multiplier).
// Notes:
// - Digits start from the shortest round-trip form of the value, so 1e23 renders
//   as 1 followed by 23 zeros rather than its binary expansion.
// - Rounding is half-even on those digits.

use num_format::{CustomFormat, Grouping, ToFormattedString};

use crate::error::{LabelError, Result};

/// Largest fraction digit count honoured; larger requests are clamped.
pub const MAX_FRACTION_DIGITS: usize = 340;
/// Largest integer digit count honoured; larger requests are clamped.
pub const MAX_INTEGER_DIGITS: usize = 309;

// "1" + 38 digits still fits in a u128.
const U128_SAFE_DIGITS: usize = 38;

/// Characters and texts used when rendering numbers.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberSymbols {
    pub decimal_separator: char,
    pub grouping_separator: char,
    pub minus_sign: char,
    pub nan: String,
    pub infinity: String,
}

impl Default for NumberSymbols {
    fn default() -> Self {
        Self {
            decimal_separator: '.',
            grouping_separator: ',',
            minus_sign: '-',
            nan: "NaN".to_string(),
            infinity: "\u{221e}".to_string(),
        }
    }
}

/// Formats `f64` values as decimal text.
/// Contract: `min_fraction_digits <= max_fraction_digits <= MAX_FRACTION_DIGITS`, `multiplier != 0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberFormat {
    min_integer_digits: usize,
    min_fraction_digits: usize,
    max_fraction_digits: usize,
    grouping: bool,
    multiplier: i32,
    prefix: String,
    suffix: String,
    symbols: NumberSymbols,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self::number()
    }
}

impl NumberFormat {
    /// General purpose format: up to three fraction digits, thousands grouping.
    pub fn number() -> Self {
        Self {
            min_integer_digits: 1,
            min_fraction_digits: 0,
            max_fraction_digits: 3,
            grouping: true,
            multiplier: 1,
            prefix: String::new(),
            suffix: String::new(),
            symbols: NumberSymbols::default(),
        }
    }

    /// Whole numbers only, with thousands grouping.
    pub fn integer() -> Self {
        Self { max_fraction_digits: 0, ..Self::number() }
    }

    /// Ratio rendered as a whole percentage, `0.25` -> `25%`.
    pub fn percent() -> Self {
        Self { max_fraction_digits: 0, multiplier: 100, suffix: "%".to_string(), ..Self::number() }
    }

    /// Fraction digit range; fails when `min > max`. Both ends are clamped to
    /// [`MAX_FRACTION_DIGITS`].
    pub fn with_fraction_digits(mut self, min: usize, max: usize) -> Result<Self> {
        if min > max {
            return Err(LabelError::invalid_argument(format!(
                "minimum fraction digits ({min}) exceed maximum ({max})"
            )));
        }
        self.min_fraction_digits = min.min(MAX_FRACTION_DIGITS);
        self.max_fraction_digits = max.min(MAX_FRACTION_DIGITS);
        Ok(self)
    }

    /// Zero-pad the integer part; clamped to [`MAX_INTEGER_DIGITS`].
    pub fn with_min_integer_digits(mut self, digits: usize) -> Self {
        self.min_integer_digits = digits.min(MAX_INTEGER_DIGITS);
        self
    }

    pub fn with_grouping(mut self, grouping: bool) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_multiplier(mut self, multiplier: i32) -> Result<Self> {
        if multiplier == 0 {
            return Err(LabelError::invalid_argument("multiplier must be non-zero"));
        }
        self.multiplier = multiplier;
        Ok(self)
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    pub fn with_symbols(mut self, symbols: NumberSymbols) -> Self {
        self.symbols = symbols;
        self
    }

    pub fn min_fraction_digits(&self) -> usize { self.min_fraction_digits }
    pub fn max_fraction_digits(&self) -> usize { self.max_fraction_digits }
    pub fn min_integer_digits(&self) -> usize { self.min_integer_digits }
    pub fn is_grouping(&self) -> bool { self.grouping }
    pub fn multiplier(&self) -> i32 { self.multiplier }
    pub fn symbols(&self) -> &NumberSymbols { &self.symbols }

    /// Render `value`.
    pub fn format(&self, value: f64) -> String {
        if value.is_nan() {
            return self.symbols.nan.clone();
        }
        let v = value * f64::from(self.multiplier);
        let mut out = String::new();
        if v.is_sign_negative() {
            out.push(self.symbols.minus_sign);
        }
        out.push_str(&self.prefix);
        if v.is_infinite() {
            out.push_str(&self.symbols.infinity);
        } else {
            self.push_digits(&mut out, v.abs());
        }
        out.push_str(&self.suffix);
        out
    }

    fn push_digits(&self, out: &mut String, magnitude: f64) {
        // re-clamp: fields may come from deserialized input
        let max_frac = self.max_fraction_digits.min(MAX_FRACTION_DIGITS);
        let min_frac = self.min_fraction_digits.min(max_frac);
        let min_int = self.min_integer_digits.min(MAX_INTEGER_DIGITS);

        let (mut digits, mut point) = shortest_digits(magnitude);
        round_half_even(&mut digits, &mut point, max_frac);

        let digit_at = |i: i64| -> char {
            match usize::try_from(i).ok().and_then(|i| digits.get(i)) {
                Some(d) => char::from(b'0' + d),
                None => '0',
            }
        };
        let int_raw: String = (0..point.max(0)).map(digit_at).collect();
        let frac_raw: String = (point..point + max_frac as i64).map(digit_at).collect();

        let significant = frac_raw.trim_end_matches('0').len();
        let frac = &frac_raw[..significant.max(min_frac)];

        let int_trimmed = int_raw.trim_start_matches('0');
        let pad = min_int.saturating_sub(int_trimmed.len());
        let mut int_digits = "0".repeat(pad);
        int_digits.push_str(int_trimmed);

        if int_digits.is_empty() && frac.is_empty() {
            out.push('0');
            return;
        }

        out.push_str(&self.group(&int_digits));
        if !frac.is_empty() {
            out.push(self.symbols.decimal_separator);
            out.push_str(frac);
        }
    }

    /// Insert grouping separators every three digits from the right.
    /// Leading zeros from integer padding are kept and grouped too.
    fn group(&self, digits: &str) -> String {
        if !self.grouping || digits.len() <= 3 {
            return digits.to_string();
        }
        let sep = self.symbols.grouping_separator;
        let format = match CustomFormat::builder().grouping(Grouping::Standard).separator(sep.to_string()).build() {
            Ok(format) => format,
            Err(err) => {
                tracing::warn!(%err, separator = %sep, "unsupported grouping separator; digits left ungrouped");
                return digits.to_string();
            }
        };

        // Beyond u128 the head is grouped by num-format and the rest are whole groups.
        let head_len = if digits.len() > U128_SAFE_DIGITS { U128_SAFE_DIGITS - 2 + digits.len() % 3 } else { digits.len() };
        let (head, tail) = digits.split_at(head_len);

        // A leading 1 keeps padding zeros through the integer conversion.
        let Ok(marked) = format!("1{head}").parse::<u128>() else {
            return digits.to_string();
        };
        let formatted = marked.to_formatted_string(&format);
        let head_grouped = formatted.strip_prefix('1').unwrap_or(&formatted);
        let head_grouped = head_grouped.strip_prefix(sep).unwrap_or(head_grouped);

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        grouped.push_str(head_grouped);
        for start in (0..tail.len()).step_by(3) {
            grouped.push(sep);
            grouped.push_str(&tail[start..start + 3]);
        }
        grouped
    }
}

/// Shortest round-trip digits of a finite, non-negative value, and the number of
/// digits before the decimal point (may be zero or negative).
fn shortest_digits(magnitude: f64) -> (Vec<u8>, i64) {
    let sci = format!("{magnitude:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i64 = exponent.parse().unwrap_or(0);
    let digits = mantissa.bytes().filter(u8::is_ascii_digit).map(|b| b - b'0').collect();
    (digits, exponent + 1)
}

/// Round `digits` to `fraction` places after the point, ties to even.
fn round_half_even(digits: &mut Vec<u8>, point: &mut i64, fraction: usize) {
    let keep = *point + fraction as i64;
    if keep >= digits.len() as i64 {
        return;
    }
    if keep < 0 {
        // below half of the last kept place
        digits.clear();
        return;
    }
    let keep = keep as usize;
    let first = digits[keep];
    let rest_nonzero = digits[keep + 1..].iter().any(|&d| d != 0);
    let last_odd = keep > 0 && digits[keep - 1] % 2 == 1;
    let round_up = first > 5 || (first == 5 && (rest_nonzero || last_odd));
    digits.truncate(keep);
    if !round_up {
        return;
    }
    for d in digits.iter_mut().rev() {
        if *d == 9 {
            *d = 0;
        } else {
            *d += 1;
            return;
        }
    }
    // carried past the first digit
    digits.insert(0, 1);
    *point += 1;
}
