//! Related properties
//!
//! Picks the "Propiedades Similares" shown under a detail page.

use crate::models::Property;

/// How many related properties a detail page shows.
pub const RELATED_LIMIT: usize = 3;

/// Selects up to `limit` properties related to `current`.
///
/// Tiers are tried in order and the first non-empty one wins:
/// 1. same purpose and same type
/// 2. same purpose
/// 3. any featured property
/// 4. anything else
///
/// `current` is never part of the result. The winning tier is stably
/// sorted with featured properties first, then truncated.
pub fn related<'a>(current: &Property, listing: &'a [Property], limit: usize) -> Vec<&'a Property> {
    let others: Vec<&Property> = listing.iter().filter(|p| p.id != current.id).collect();

    let tiers: [&dyn Fn(&Property) -> bool; 4] = [
        &|p: &Property| p.purpose == current.purpose && p.kind == current.kind,
        &|p: &Property| p.purpose == current.purpose,
        &|p: &Property| p.featured,
        &|_: &Property| true,
    ];

    let mut selected = tiers
        .iter()
        .map(|tier| {
            others
                .iter()
                .copied()
                .filter(|p| tier(*p))
                .collect::<Vec<&Property>>()
        })
        .find(|tier| !tier.is_empty())
        .unwrap_or_default();

    selected.sort_by_key(|p| !p.featured);
    selected.truncate(limit);
    selected
}
