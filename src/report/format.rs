//! fr-FR number formatting with no fraction digits

/// Thousands separator used by fr-FR (narrow no-break space)
pub const GROUP_SEPARATOR: char = '\u{202F}';

/// Appended to every formatted amount
pub const CURRENCY_SUFFIX: &str = " €";

/// Format an amount rounded to whole units, e.g. `1234567.6` -> `"1 234 568"`.
///
/// Halves round away from zero. A result that rounds to zero is printed
/// unsigned.
pub fn format_number(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let rounded = amount.round();
    let digits = format!("{:.0}", rounded.abs());
    let len = digits.len();

    let mut out = String::with_capacity(len + len / 3 * GROUP_SEPARATOR.len_utf8() + 1);
    if rounded < 0.0 {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(GROUP_SEPARATOR);
        }
        out.push(ch);
    }
    out
}

/// Format an amount in euros, e.g. `"12 500 €"`
pub fn format_euros(amount: f64) -> String {
    format!("{}{}", format_number(amount), CURRENCY_SUFFIX)
}
