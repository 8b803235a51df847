//! Render time formatting
//!
//! Render times are written by the trace writer as free-form decimals and
//! displayed as `#,##0.00` followed by a unit: two decimals, rounded half
//! away from zero, with `,` thousands separators.
//!
//! Rounding works on the value's shortest 15-significant-digit decimal form,
//! so `12.345` displays as `12.35` even though the nearest `f64` is slightly
//! below it.

/// Parse a recorded decimal.
///
/// Surrounding whitespace and `,` group separators are accepted. Returns
/// `None` for empty, non-numeric and non-finite input.
pub fn parse_decimal(raw: &str) -> Option<f64> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Format with two decimals and thousands separators.
pub fn format_fixed2(value: f64) -> String {
    let (integer, fraction) = match round_cents(value.abs()) {
        Some(cents) => ((cents / 100).to_string(), format!("{:02}", cents % 100)),
        // beyond u128 cents; std's exact fixed-point form is used instead
        None => {
            let fixed = format!("{:.2}", value.abs());
            match fixed.split_once('.') {
                Some((integer, fraction)) => (integer.to_string(), fraction.to_string()),
                None => (fixed, "00".to_string()),
            }
        }
    };

    let is_zero = integer.bytes().all(|b| b == b'0') && fraction.bytes().all(|b| b == b'0');
    let sign = if value < 0.0 && !is_zero { "-" } else { "" };
    format!("{}{}.{}", sign, group_thousands(&integer), fraction)
}

/// Format a raw render time, or return `None` when it does not parse.
pub fn format_render_time(raw: Option<&str>, unit: &str) -> Option<String> {
    let value = parse_decimal(raw?)?;
    Some(format!("{}{}", format_fixed2(value), unit))
}

/// `value * 100` rounded half away from zero, for non-negative `value`.
///
/// `None` when the result does not fit in a `u128`.
fn round_cents(value: f64) -> Option<u128> {
    // 15 significant digits: d.dddddddddddddde<exp>
    let sci = format!("{:.14e}", value);
    let (mantissa, exp) = sci.split_once('e')?;
    let exp: i32 = exp.parse().ok()?;
    let digits: u128 = mantissa.replace('.', "").parse().ok()?;

    // value = digits * 10^(exp - 14), cents = digits * 10^(exp - 12)
    let shift = exp - 12;
    if shift >= 0 {
        10u128.checked_pow(shift as u32)?.checked_mul(digits)
    } else {
        let shift = shift.unsigned_abs();
        if shift > 38 {
            return Some(0);
        }
        let divisor = 10u128.pow(shift);
        let (quotient, remainder) = (digits / divisor, digits % divisor);
        Some(if remainder * 2 >= divisor {
            quotient + 1
        } else {
            quotient
        })
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
