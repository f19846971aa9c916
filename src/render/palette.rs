use std::sync::Arc;

use indexmap::IndexMap;

use crate::render::Color;

/// Ten-color categorical palette (category10).
pub const CATEGORY10: [Color; 10] = [
    Color::from_rgb_u32(0x1f77b4),
    Color::from_rgb_u32(0xff7f0e),
    Color::from_rgb_u32(0x2ca02c),
    Color::from_rgb_u32(0xd62728),
    Color::from_rgb_u32(0x9467bd),
    Color::from_rgb_u32(0x8c564b),
    Color::from_rgb_u32(0xe377c2),
    Color::from_rgb_u32(0x7f7f7f),
    Color::from_rgb_u32(0xbcbd22),
    Color::from_rgb_u32(0x17becf),
];

/// Color for causes the scale was never told about.
pub const UNKNOWN_CAUSE_COLOR: Color = Color::from_rgb_u32(0xaaaaaa);

/// Session-wide cause → color mapping.
///
/// Assignment order is fixed when the scale is built, so every scene that
/// shares one instance draws a given cause in the same color. Cloning is cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryColorScale {
    assignments: Arc<IndexMap<String, Color>>,
}

impl CategoryColorScale {
    /// Assigns palette entries in iteration order, cycling after ten causes.
    #[must_use]
    pub fn from_causes<I, S>(causes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut assignments = IndexMap::new();
        for cause in causes {
            let cause = cause.as_ref();
            if assignments.contains_key(cause) {
                continue;
            }
            let color = CATEGORY10[assignments.len() % CATEGORY10.len()];
            assignments.insert(cause.to_owned(), color);
        }
        Self {
            assignments: Arc::new(assignments),
        }
    }

    /// Highlighted causes take the first palette slots, the rest follow in order.
    #[must_use]
    pub fn seeded<'a>(
        highlighted: impl IntoIterator<Item = &'a str>,
        causes: impl IntoIterator<Item = &'a str>,
    ) -> Self {
        Self::from_causes(highlighted.into_iter().chain(causes))
    }

    #[must_use]
    pub fn color(&self, cause: &str) -> Color {
        self.assignments
            .get(cause)
            .copied()
            .unwrap_or(UNKNOWN_CAUSE_COLOR)
    }

    #[must_use]
    pub fn contains(&self, cause: &str) -> bool {
        self.assignments.contains_key(cause)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::{CATEGORY10, CategoryColorScale, UNKNOWN_CAUSE_COLOR};

    #[test]
    fn highlighted_causes_take_first_slots() {
        let scale = CategoryColorScale::seeded(
            ["Heart Disease", "Cancer"],
            ["Stroke", "Cancer", "Heart Disease", "Diabetes"],
        );
        assert_eq!(scale.color("Heart Disease"), CATEGORY10[0]);
        assert_eq!(scale.color("Cancer"), CATEGORY10[1]);
        assert_eq!(scale.color("Stroke"), CATEGORY10[2]);
        assert_eq!(scale.color("Diabetes"), CATEGORY10[3]);
        assert_eq!(scale.len(), 4);
        assert_eq!(scale.color("Unknown"), UNKNOWN_CAUSE_COLOR);
    }

    #[test]
    fn palette_cycles_after_ten_causes() {
        let causes: Vec<String> = (0..12).map(|i| format!("cause-{i}")).collect();
        let scale = CategoryColorScale::from_causes(&causes);
        assert_eq!(scale.color("cause-10"), CATEGORY10[0]);
        assert_eq!(scale.color("cause-11"), CATEGORY10[1]);
    }
}
