use std::fmt;

/// Amounts are plain positive reals. Totals are always recomputed from the
/// full entry list, so no running float state accumulates between calls.
pub type Amount = f64;

/// Format an amount in its shortest round-trip decimal form.
/// Example: 50.0 -> "50", 12.5 -> "12.5"
pub fn format_amount(amount: Amount) -> String {
    format!("{}", amount)
}

/// Parse user input into a positive, finite amount.
/// Example: "50" -> 50.0, " 12.5 " -> 12.5, "0" -> error
pub fn parse_amount(input: &str) -> Result<Amount, ParseAmountError> {
    let input = input.trim();
    if input.is_empty() {
        return Err(ParseAmountError::Empty);
    }

    let amount: Amount = input.parse().map_err(|_| ParseAmountError::InvalidFormat)?;

    // "inf" and "NaN" parse fine as f64
    if !amount.is_finite() {
        return Err(ParseAmountError::NotFinite);
    }
    if amount <= 0.0 {
        return Err(ParseAmountError::NotPositive);
    }

    Ok(amount)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseAmountError {
    Empty,
    InvalidFormat,
    NotFinite,
    NotPositive,
}

impl fmt::Display for ParseAmountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseAmountError::Empty => write!(f, "amount is missing"),
            ParseAmountError::InvalidFormat => write!(f, "amount is not a number"),
            ParseAmountError::NotFinite => write!(f, "amount must be finite"),
            ParseAmountError::NotPositive => write!(f, "amount must be positive"),
        }
    }
}

impl std::error::Error for ParseAmountError {}
