//! Money conventions.
//!
//! Amounts are carried as `i64` cents throughout the domain; this module only
//! holds the shared display formatting.

/// Formats an amount of cents as Brazilian currency, e.g. `R$ 1.234,56`.
pub fn format_brl(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let abs = cents.unsigned_abs();
    let reais = (abs / 100).to_string();

    let mut integral = String::with_capacity(reais.len() + reais.len() / 3);
    for (i, digit) in reais.chars().enumerate() {
        if i > 0 && (reais.len() - i) % 3 == 0 {
            integral.push('.');
        }
        integral.push(digit);
    }

    format!("{sign}R$ {integral},{:02}", abs % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_whole_and_fractional_amounts() {
        assert_eq!(format_brl(0), "R$ 0,00");
        assert_eq!(format_brl(15_000), "R$ 150,00");
        assert_eq!(format_brl(123_456), "R$ 1.234,56");
        assert_eq!(format_brl(100_000_000), "R$ 1.000.000,00");
        assert_eq!(format_brl(7), "R$ 0,07");
    }

    #[test]
    fn formats_negative_amounts() {
        assert_eq!(format_brl(-9_950), "-R$ 99,50");
    }
}
