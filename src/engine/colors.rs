//! Fixed display palette for spending categories.

/// Category label (lowercase key) paired with its hex display color.
pub(crate) const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("food", "#4CC9F0"),
    ("transportation", "#4361EE"),
    ("shopping", "#7209B7"),
    ("entertainment", "#F72585"),
    ("housing", "#3A0CA3"),
    ("utilities", "#06D6A0"),
    ("health", "#4361EE"),
    ("education", "#F9C74F"),
    ("other", "#118AB2"),
];

/// The "other" color, also the fallback for labels outside the palette.
pub(crate) const FALLBACK_COLOR: &str = "#118AB2";

/// Resolve a category label to its display color. The label is lowercased
/// and matched exactly against the palette keys; anything unknown,
/// including the empty string, gets the fallback.
pub(crate) fn category_color(label: &str) -> &'static str {
    let key = label.to_lowercase();
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == key)
        .map_or(FALLBACK_COLOR, |(_, color)| color)
}
