//! Einlesen der Texteingabe als Ganzzahl.

/// Liest eine Ganzzahl zur Basis 10 vom Anfang der Eingabe.
///
/// Führende Leerzeichen (inkl. BOM) und ein Vorzeichen werden akzeptiert, nach den
/// Ziffern folgender Text wird ignoriert (`"7a"` → 7). Ohne führende
/// Ziffern oder bei Überlauf: `None`.
pub fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digit_count = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digit_count == 0 {
        return None;
    }

    let magnitude: i64 = rest[..digit_count].parse().ok()?;
    Some(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_numbers() {
        assert_eq!(parse_int("7"), Some(7));
        assert_eq!(parse_int("13"), Some(13));
        assert_eq!(parse_int("07"), Some(7));
    }

    #[test]
    fn test_parse_prefix_and_sign() {
        assert_eq!(parse_int("  12"), Some(12));
        assert_eq!(parse_int("7abc"), Some(7));
        assert_eq!(parse_int("-3"), Some(-3));
        assert_eq!(parse_int("+4"), Some(4));
        assert_eq!(parse_int("1 3"), Some(1));
    }

    #[test]
    fn test_parse_skips_unicode_whitespace_and_bom() {
        assert_eq!(parse_int("\u{feff}7"), Some(7));
        assert_eq!(parse_int("\u{a0}7"), Some(7));
        assert_eq!(parse_int("\u{feff} \u{2003}-12"), Some(-12));
        assert_eq!(parse_int("7.9"), Some(7));
        assert_eq!(parse_int("1e3"), Some(1));
    }

    #[test]
    fn test_parse_not_a_number() {
        assert_eq!(parse_int(""), None);
        assert_eq!(parse_int("abc"), None);
        assert_eq!(parse_int("-"), None);
        assert_eq!(parse_int("99999999999999999999999"), None);
    }
}
