// 🍚 Meal-time Normalizer
// English words and Korean abbreviations collapse to 아침 / 점심 / 저녁

// ============================================================================
// MEAL TABLE
// ============================================================================

pub const BREAKFAST: &str = "아침";
pub const LUNCH: &str = "점심";
pub const DINNER: &str = "저녁";

/// The three labels every recognized meal-time collapses to
pub const CANONICAL_MEALS: [&str; 3] = [BREAKFAST, LUNCH, DINNER];

/// Lookup keys are lower-case, values are canonical labels.
/// The canonical labels themselves are not keys: they pass through unchanged.
const MEAL_MAP: [(&str, &str); 6] = [
    ("breakfast", BREAKFAST),
    ("lunch", LUNCH),
    ("dinner", DINNER),
    ("조식", BREAKFAST),
    ("중식", LUNCH),
    ("석식", DINNER),
];

// ============================================================================
// NORMALIZATION
// ============================================================================

/// Normalize one meal-time label.
///
/// Lookup is case-insensitive on the trimmed value. Unknown labels come back
/// trimmed but otherwise untouched, e.g. `"브런치"` stays `"브런치"`.
///
/// The same function runs over stored meal-times at load and over the
/// `meal` filter at query time, so both sides compare in the same space.
pub fn normalize_meal_label(raw: &str) -> String {
    let key = raw.trim();
    let key_lower = key.to_lowercase();

    MEAL_MAP
        .iter()
        .find(|(alias, _)| *alias == key_lower)
        .map(|(_, canonical)| canonical.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// True for 아침 / 점심 / 저녁
pub fn is_canonical_meal(label: &str) -> bool {
    CANONICAL_MEALS.contains(&label)
}

// ============================================================================
// SPLITTER
// ============================================================================

/// Split a delimited list cell into trimmed, non-empty parts.
///
/// Both `,` and `/` separate parts, and may be mixed in one cell.
/// Order and duplicates are kept.
pub fn split_list(raw: Option<&str>) -> Vec<String> {
    let Some(raw) = raw else {
        return Vec::new();
    };

    raw.replace('/', ",")
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(String::from)
        .collect()
}

// ============================================================================
// TESTS
// ============================================================================
