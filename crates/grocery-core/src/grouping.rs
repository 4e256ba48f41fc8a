//! Grouping and Sorting
//!
//! Buckets item keys by category following the store's aisle order.

use indexmap::IndexMap;

use crate::domain::ItemRecord;
use crate::key::ItemKey;
use crate::text::compare_names;

/// Group `keys` by the category of their record.
///
/// Categories follow `aisle_order`; categories missing from it come after,
/// in order of first encounter. Empty buckets are omitted. Inside a bucket
/// keys are sorted by name (stable, so equal names keep their input order).
/// Keys without a record, or whose record has no category, are skipped.
pub fn group_by_category<'a, F>(
    keys: &[ItemKey],
    aisle_order: &[String],
    lookup: F,
) -> Vec<(String, Vec<ItemKey>)>
where
    F: Fn(&ItemKey) -> Option<&'a ItemRecord>,
{
    let mut buckets: IndexMap<&str, Vec<(&ItemKey, &'a ItemRecord)>> = aisle_order
        .iter()
        .map(|id| (id.as_str(), Vec::new()))
        .collect();

    let mut extra: IndexMap<String, Vec<(&ItemKey, &'a ItemRecord)>> = IndexMap::new();
    for key in keys {
        let Some(record) = lookup(key) else { continue };
        let Some(category_id) = record.category_id.as_deref() else { continue };
        match buckets.get_mut(category_id) {
            Some(bucket) => bucket.push((key, record)),
            None => extra.entry(category_id.to_string()).or_default().push((key, record)),
        }
    }

    let ordered = buckets
        .into_iter()
        .map(|(id, entries)| (id.to_string(), entries))
        .chain(extra);

    ordered
        .filter(|(_, entries)| !entries.is_empty())
        .map(|(id, mut entries)| {
            entries.sort_by(|a, b| compare_names(a.1.display_name(), b.1.display_name()));
            (id, entries.into_iter().map(|(key, _)| key.clone()).collect())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemStatus;
    use crate::key::derive_key;
    use std::collections::HashMap;

    fn records(items: &[(&str, &str)]) -> HashMap<ItemKey, ItemRecord> {
        items
            .iter()
            .map(|(name, cat)| (derive_key(cat, name), ItemRecord::new(ItemStatus::ToBuy, *name, *cat)))
            .collect()
    }

    fn order(ids: &[&str]) -> Vec<String> {
        ids.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_groups_follow_aisle_order() {
        let map = records(&[("Lait", "cremerie"), ("Pain", "epicerie")]);
        let keys = vec![derive_key("cremerie", "Lait"), derive_key("epicerie", "Pain")];
        let groups = group_by_category(&keys, &order(&["epicerie", "cremerie"]), |k| map.get(k));
        assert_eq!(
            groups,
            vec![
                ("epicerie".to_string(), vec![derive_key("epicerie", "Pain")]),
                ("cremerie".to_string(), vec![derive_key("cremerie", "Lait")]),
            ]
        );
    }

    #[test]
    fn test_unknown_categories_are_appended_in_encounter_order() {
        let map = records(&[("Vis", "quincaillerie"), ("Pain", "epicerie"), ("Fleurs", "jardin")]);
        let keys = vec![
            derive_key("quincaillerie", "Vis"),
            derive_key("jardin", "Fleurs"),
            derive_key("epicerie", "Pain"),
        ];
        let groups = group_by_category(&keys, &order(&["cremerie", "epicerie"]), |k| map.get(k));
        let ids: Vec<&str> = groups.iter().map(|(id, _)| id.as_str()).collect();
        assert_eq!(ids, vec!["epicerie", "quincaillerie", "jardin"]);
    }

    #[test]
    fn test_bucket_sorted_by_french_collation() {
        let map = records(&[("pâtes", "epicerie"), ("Pain", "epicerie"), ("Épices", "epicerie"), ("avoine", "epicerie")]);
        let keys: Vec<ItemKey> = ["pâtes", "Pain", "Épices", "avoine"]
            .iter()
            .map(|n| derive_key("epicerie", n))
            .collect();
        let groups = group_by_category(&keys, &order(&["epicerie"]), |k| map.get(k));
        let names: Vec<&str> = groups[0].1.iter().map(|k| map[k].display_name()).collect();
        assert_eq!(names, vec!["avoine", "Épices", "Pain", "pâtes"]);
    }

    #[test]
    fn test_equal_names_keep_input_order() {
        let mut map = HashMap::new();
        let first = ItemKey::from("i__epicerie__sel_1");
        let second = ItemKey::from("i__epicerie__sel_2");
        map.insert(first.clone(), ItemRecord::new(ItemStatus::ToBuy, "Sel", "epicerie"));
        map.insert(second.clone(), ItemRecord::new(ItemStatus::ToBuy, "Sel", "epicerie"));
        let keys = vec![second.clone(), first.clone()];
        let groups = group_by_category(&keys, &order(&["epicerie"]), |k| map.get(k));
        assert_eq!(groups[0].1, vec![second, first]);
    }

    #[test]
    fn test_missing_records_and_empty_buckets_are_skipped() {
        let map = records(&[("Lait", "cremerie")]);
        let keys = vec![derive_key("cremerie", "Lait"), ItemKey::from("i__ghost__x")];
        let groups = group_by_category(&keys, &order(&["epicerie", "cremerie"]), |k| map.get(k));
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0].0, "cremerie");
    }
}
