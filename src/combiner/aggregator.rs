//! Family bucketing
//!
//! Partitions grocery items by resolved family.

use std::collections::HashMap;

use super::matcher::resolve;
use crate::models::GroceryItem;
use crate::registry::FamilyRegistry;

/// Items sharing one family, in input order
#[derive(Debug, Clone)]
pub struct FamilyGroup<'a> {
    pub family: String,
    pub items: Vec<&'a GroceryItem>,
}

/// Group items by family.
///
/// Groups come back in order of each family's first appearance; items keep
/// their input order inside a group.
pub fn group<'a>(items: &'a [GroceryItem], families: &FamilyRegistry) -> Vec<FamilyGroup<'a>> {
    let mut groups: Vec<FamilyGroup<'a>> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let family = resolve(&item.raw_name, families);
        match index.get(&family) {
            Some(&i) => groups[i].items.push(item),
            None => {
                index.insert(family.clone(), groups.len());
                groups.push(FamilyGroup {
                    family,
                    items: vec![item],
                });
            }
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, name: &str) -> GroceryItem {
        GroceryItem::new(id, name)
    }

    #[test]
    fn test_group_buckets_by_family() {
        let items = vec![
            item("1", "2 cloves garlic"),
            item("2", "1 onion"),
            item("3", "1 head garlic"),
        ];
        let groups = group(&items, &FamilyRegistry::builtin());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].family, "garlic");
        let ids: Vec<&str> = groups[0].items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
        assert_eq!(groups[1].family, "onion");
    }

    #[test]
    fn test_group_empty() {
        assert!(group(&[], &FamilyRegistry::builtin()).is_empty());
    }

    #[test]
    fn test_every_item_lands_in_one_group() {
        let items = vec![
            item("a", "milk"),
            item("b", "2 cups milk"),
            item("c", "mystery spice blend"),
            item("d", ""),
        ];
        let groups = group(&items, &FamilyRegistry::builtin());
        let total: usize = groups.iter().map(|g| g.items.len()).sum();
        assert_eq!(total, items.len());
    }
}
