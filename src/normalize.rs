// 🧮 Value Normalizers
// Canonical forms for the scalar fields every relation shares:
// dollar amounts → bare digits, eBay timestamps → sortable ISO-like text

use std::path::Path;

// ============================================================================
// MONTH TABLE
// ============================================================================

const MONTHS: [(&str, &str); 12] = [
    ("Jan", "01"),
    ("Feb", "02"),
    ("Mar", "03"),
    ("Apr", "04"),
    ("May", "05"),
    ("Jun", "06"),
    ("Jul", "07"),
    ("Aug", "08"),
    ("Sep", "09"),
    ("Oct", "10"),
    ("Nov", "11"),
    ("Dec", "12"),
];

/// Map a three-letter month abbreviation to its two-digit numeral
///
/// Unknown tokens are passed through verbatim: "Dec" → "12", "Foo" → "Foo"
pub fn normalize_month(mon: &str) -> &str {
    MONTHS
        .iter()
        .find(|(abbr, _)| *abbr == mon)
        .map(|(_, num)| *num)
        .unwrap_or(mon)
}

// ============================================================================
// CURRENCY
// ============================================================================

/// Strip everything that is not a digit or a decimal point
///
/// # Examples:
/// ```
/// use listing_normalizer::normalize_currency;
/// assert_eq!(normalize_currency("$3,453.23"), "3453.23");
/// assert_eq!(normalize_currency(""), "");
/// ```
///
/// No rounding and no validation. Absent values stay absent at the call
/// site (`Option::map`), empty input comes back empty.
pub fn normalize_currency(money: &str) -> String {
    money
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect()
}

// ============================================================================
// TIMESTAMP
// ============================================================================

/// Convert `Mon-DD-YY HH:MM:SS` into `20YY-MM-DD HH:MM:SS`
///
/// The century is always 20. The time part is copied as-is. Input whose date
/// part does not split into three hyphen-separated pieces is returned trimmed
/// but otherwise untouched.
pub fn normalize_timestamp(dttm: &str) -> String {
    let dttm = dttm.trim();
    let (date, time) = match dttm.split_once(' ') {
        Some((date, time)) => (date, Some(time)),
        None => (dttm, None),
    };

    let parts: Vec<&str> = date.split('-').collect();
    let [mon, day, year] = parts.as_slice() else {
        return dttm.to_string();
    };

    let date = format!("20{}-{}-{}", year, normalize_month(mon), day);
    match time {
        Some(time) => format!("{} {}", date, time),
        None => date,
    }
}

// ============================================================================
// INPUT FILTER
// ============================================================================

/// True when the path ends in a case-sensitive `.json` with a non-empty stem
pub fn is_json_path(path: &Path) -> bool {
    path.to_str()
        .and_then(|s| s.strip_suffix(".json"))
        .map(|stem| !stem.is_empty())
        .unwrap_or(false)
}
