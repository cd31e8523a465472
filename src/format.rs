//! Display fallbacks shared by every page.
//!
//! Detail pages show `N/A` for missing values, tables and the comparison
//! view show `-`.

use std::fmt::Display;

pub const NOT_AVAILABLE: &str = "N/A";
pub const DASH: &str = "-";

/// `value` + `suffix`, or `N/A` when missing or blank.
pub fn or_na<T: Display>(value: Option<T>, suffix: &str) -> String {
    match value {
        Some(v) => {
            let text = v.to_string();
            if text.trim().is_empty() {
                NOT_AVAILABLE.to_string()
            } else {
                format!("{}{}", text, suffix)
            }
        }
        None => NOT_AVAILABLE.to_string(),
    }
}

/// The value, or `-` when missing.
pub fn or_dash<T: Display>(value: Option<T>) -> String {
    value
        .map(|v| v.to_string())
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| DASH.to_string())
}

/// Fixed-precision number with a suffix, `N/A` when missing.
pub fn decimal_or_na(value: Option<f64>, digits: usize, suffix: &str) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.*}{}", digits, v, suffix),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// Fixed-precision number, or `-` when missing. Used by tables.
pub fn fixed_or_dash(value: Option<f64>, digits: usize) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) => format!("{:.*}", digits, v),
        None => DASH.to_string(),
    }
}

/// Badge style for a per-format race count: `zero` wins over the column's own.
pub fn badge_kind(count: i64, badge: &str) -> &str {
    if count == 0 {
        "zero"
    } else {
        badge
    }
}

/// `P3`, or `-`.
pub fn position(value: Option<i64>) -> String {
    value
        .map(|p| format!("P{}", p))
        .unwrap_or_else(|| DASH.to_string())
}

/// Plain number without a trailing `.0` for whole values, or `-`.
pub fn number(value: Option<f64>) -> String {
    match value.filter(|v| v.is_finite()) {
        Some(v) if v.fract() == 0.0 => format!("{}", v as i64),
        Some(v) => v.to_string(),
        None => DASH.to_string(),
    }
}

/// One decimal place, or `-`.
pub fn one_decimal(value: Option<f64>) -> String {
    value
        .filter(|v| v.is_finite())
        .map(|v| format!("{:.1}", v))
        .unwrap_or_else(|| DASH.to_string())
}

/// Signed position delta: `+3`, `-2`, `0`, or `-` when missing.
pub fn gained(value: Option<i64>) -> String {
    match value {
        Some(v) if v > 0 => format!("+{}", v),
        Some(v) => v.to_string(),
        None => DASH.to_string(),
    }
}

pub fn check_mark(flag: bool) -> &'static str {
    if flag {
        "✓"
    } else {
        DASH
    }
}

/// `two_session` → `Two Session`; empty input reads `Unknown`.
pub fn prettify(value: Option<&str>) -> String {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return "Unknown".to_string();
    };
    value
        .to_lowercase()
        .split('_')
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// `12.345° N, 3.210° W`, or `N/A` if either axis is missing.
pub fn coordinate_pair(lat: Option<f64>, lon: Option<f64>) -> String {
    fn axis(value: f64, positive: char, negative: char) -> String {
        let dir = if value >= 0.0 { positive } else { negative };
        format!("{:.3}° {}", value.abs(), dir)
    }
    match (lat.filter(|v| v.is_finite()), lon.filter(|v| v.is_finite())) {
        (Some(lat), Some(lon)) => format!("{}, {}", axis(lat, 'N', 'S'), axis(lon, 'E', 'W')),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Short `lat, lon` with two decimals, used in the race detail circuit card.
pub fn short_coordinates(lat: Option<f64>, lon: Option<f64>) -> String {
    match (lat.filter(|v| v.is_finite()), lon.filter(|v| v.is_finite())) {
        (Some(lat), Some(lon)) => format!("{:.2}, {:.2}", lat, lon),
        _ => NOT_AVAILABLE.to_string(),
    }
}

/// Map embed for a circuit, `None` without coordinates.
pub fn map_embed_url(lat: Option<f64>, lon: Option<f64>) -> Option<String> {
    match (lat.filter(|v| v.is_finite()), lon.filter(|v| v.is_finite())) {
        (Some(lat), Some(lon)) => Some(format!(
            "https://www.google.com/maps?q={:.5},{:.5}&z=13&layer=c&output=embed",
            lat, lon
        )),
        _ => None,
    }
}

/// Join the present, non-empty parts with a bullet.
pub fn bullet_join<'a>(parts: impl IntoIterator<Item = Option<&'a str>>) -> String {
    parts
        .into_iter()
        .flatten()
        .filter(|s| !s.trim().is_empty())
        .collect::<Vec<_>>()
        .join(" • ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn na_and_dash_fallbacks() {
        assert_eq!(or_na(Some(57), " laps"), "57 laps");
        assert_eq!(or_na(None::<i64>, ""), "N/A");
        assert_eq!(or_na(Some(""), ""), "N/A");
        assert_eq!(or_dash(Some("HAM")), "HAM");
        assert_eq!(or_dash(None::<&str>), "-");
    }

    #[test]
    fn comparison_formatters() {
        assert_eq!(position(Some(1)), "P1");
        assert_eq!(position(None), "-");
        assert_eq!(number(Some(25.0)), "25");
        assert_eq!(number(Some(12.5)), "12.5");
        assert_eq!(number(None), "-");
        assert_eq!(one_decimal(Some(4.26)), "4.3");
        assert_eq!(one_decimal(Some(3.0)), "3.0");
        assert_eq!(gained(Some(3)), "+3");
        assert_eq!(gained(Some(-2)), "-2");
        assert_eq!(gained(Some(0)), "0");
        assert_eq!(gained(None), "-");
        assert_eq!(check_mark(true), "✓");
    }

    #[test]
    fn prettify_snake_case() {
        assert_eq!(prettify(Some("TWO_SESSION")), "Two Session");
        assert_eq!(prettify(Some("clockwise")), "Clockwise");
        assert_eq!(prettify(None), "Unknown");
        assert_eq!(prettify(Some("")), "Unknown");
    }

    #[test]
    fn coordinates() {
        assert_eq!(
            coordinate_pair(Some(45.6156), Some(-9.2811)),
            "45.616° N, 9.281° W"
        );
        assert_eq!(coordinate_pair(Some(-33.0), None), "N/A");
        assert_eq!(short_coordinates(Some(45.6156), Some(9.2811)), "45.62, 9.28");
        assert!(map_embed_url(None, Some(1.0)).is_none());
        assert_eq!(
            map_embed_url(Some(1.0), Some(2.0)).unwrap(),
            "https://www.google.com/maps?q=1.00000,2.00000&z=13&layer=c&output=embed"
        );
    }

    #[test]
    fn decimals_and_bullets() {
        assert_eq!(decimal_or_na(Some(5.793), 3, " km"), "5.793 km");
        assert_eq!(decimal_or_na(None, 3, " km"), "N/A");
        assert_eq!(bullet_join([Some("Monza"), None, Some("Italy")]), "Monza • Italy");
        assert_eq!(bullet_join([None, Some(" ")]), "");
    }

    #[test]
    fn stats_table_cells() {
        assert_eq!(fixed_or_dash(Some(57.5), 3), "57.500");
        assert_eq!(fixed_or_dash(None, 3), "-");
        assert_eq!(fixed_or_dash(Some(f64::NAN), 3), "-");
        assert_eq!(badge_kind(0, "sprint"), "zero");
        assert_eq!(badge_kind(4, "sprint"), "sprint");
        assert_eq!(badge_kind(2, "default"), "default");
    }
}
