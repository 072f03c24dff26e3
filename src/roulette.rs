// 🎰 Roulette - Filter candidates, then pick one uniformly
// Pure functions over the shared menu table; nothing here mutates it

use crate::error::NoCandidates;
use crate::menu::MenuItem;
use crate::normalizer::normalize_meal_label;
use rand::seq::IndexedRandom;
use rand::Rng;
use serde::Deserialize;

// ============================================================================
// QUERY
// ============================================================================

/// MenuQuery - Optional category / meal constraints
///
/// Doubles as the `GET /api/menus` query string and the `POST /api/spin` body.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct MenuQuery {
    #[serde(default)]
    pub category: Option<String>,

    #[serde(default)]
    pub meal: Option<String>,
}

impl MenuQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder pattern: constrain category
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Builder pattern: constrain meal-time
    pub fn with_meal(mut self, meal: impl Into<String>) -> Self {
        self.meal = Some(meal.into());
        self
    }

    /// Trimmed category, `None` when unset or blank
    fn category_filter(&self) -> Option<&str> {
        self.category
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    /// Normalized meal label, `None` when unset or empty.
    /// Whitespace-only input normalizes to `""`, which no item serves.
    fn meal_filter(&self) -> Option<String> {
        self.meal
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(normalize_meal_label)
    }
}

// ============================================================================
// FILTER
// ============================================================================

/// Items matching every constraint in `query`, in original order.
///
/// Category compares exactly (case-sensitive). Meal is normalized first, so
/// `"lunch"`, `"중식"` and `"점심"` all select the same items.
pub fn filter_items<'a>(items: &'a [MenuItem], query: &MenuQuery) -> Vec<&'a MenuItem> {
    let category = query.category_filter();
    let meal = query.meal_filter();

    items
        .iter()
        .filter(|item| match category {
            Some(c) => item.category.as_deref() == Some(c),
            None => true,
        })
        .filter(|item| match meal.as_deref() {
            Some(m) => item.serves_at(m),
            None => true,
        })
        .collect()
}

// ============================================================================
// SELECTOR
// ============================================================================

/// Pick one element with equal probability.
///
/// Fails only with `NoCandidates`, when `items` is empty.
pub fn pick_uniform<'a, T, R>(items: &'a [T], rng: &mut R) -> Result<&'a T, NoCandidates>
where
    R: Rng + ?Sized,
{
    items.choose(rng).ok_or(NoCandidates)
}

/// Filter, then pick one winner from the candidates.
///
/// `NoCandidates` here means nothing satisfies the constraints.
pub fn spin<'a, R>(
    items: &'a [MenuItem],
    query: &MenuQuery,
    rng: &mut R,
) -> Result<&'a MenuItem, NoCandidates>
where
    R: Rng + ?Sized,
{
    let candidates = filter_items(items, query);
    pick_uniform(&candidates, rng).copied()
}

// ============================================================================
// TESTS
// ============================================================================
