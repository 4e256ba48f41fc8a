//! Catalog Merge
//!
//! Document-defined items followed by the user's custom items.

use std::collections::HashSet;

use crate::domain::Category;
use crate::text::normalize;

/// Items of `category` in display order.
///
/// Document items come first, order preserved. A custom item is appended
/// unless its normalized form already appeared (document item or earlier
/// custom item).
pub fn merged_items(category: &Category, custom: &[String]) -> Vec<String> {
    let mut merged = category.items.clone();
    let mut seen: HashSet<String> = merged.iter().map(|name| normalize(name)).collect();
    for name in custom {
        if name.is_empty() {
            continue;
        }
        if seen.insert(normalize(name)) {
            merged.push(name.clone());
        }
    }
    merged
}
