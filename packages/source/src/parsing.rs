//! Lenient cell parsers for the earthquake CSV.
//!
//! The merged dataset was exported from a dataframe, so integer columns that
//! contain gaps come out as floats (`"12.0"`) and gaps themselves may be
//! empty cells or `NaN`.

/// Returns the trimmed cell, or `None` for empty and `NaN` cells.
#[must_use]
pub fn non_missing(cell: Option<&str>) -> Option<&str> {
    let cell = cell?.trim();
    if cell.is_empty() || cell.eq_ignore_ascii_case("nan") {
        return None;
    }
    Some(cell)
}

/// Parses a finite float cell.
#[must_use]
pub fn parse_f64(cell: Option<&str>) -> Option<f64> {
    non_missing(cell)?
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}

/// Parses a year written either as `2015` or `2015.0`.
#[must_use]
pub fn parse_year(cell: &str) -> Option<i32> {
    let cell = non_missing(Some(cell))?;
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() != 0.0 || value < f64::from(i32::MIN) || value > f64::from(i32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation)]
    Some(value as i32)
}

/// Parses a non-negative whole count written as `12` or `12.0`.
#[must_use]
pub fn parse_count(cell: Option<&str>) -> Option<u32> {
    let cell = non_missing(cell)?;
    if let Ok(count) = cell.parse::<u32>() {
        return Some(count);
    }
    let value = cell.parse::<f64>().ok()?;
    if value.fract() != 0.0 || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    Some(value as u32)
}

/// Returns the region name with surrounding whitespace removed, or `None`
/// when the cell is missing.
#[must_use]
pub fn parse_region(cell: Option<&str>) -> Option<String> {
    non_missing(cell).map(str::to_string)
}
