use indexmap::IndexMap;
use tracing::warn;

use crate::models::{Item, ItemId};

/// Ordered, identity keyed collection of items. Insertion order is display
/// order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: IndexMap<ItemId, Item>,
}

impl Inventory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_items(items: impl IntoIterator<Item = Item>) -> Self {
        let mut out = Self::new();
        for item in items {
            out.append(item);
        }
        out
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    pub fn get(&self, id: ItemId) -> Option<&Item> {
        self.items.get(&id)
    }

    pub fn get_mut(&mut self, id: ItemId) -> Option<&mut Item> {
        self.items.get_mut(&id)
    }

    pub fn contains(&self, id: ItemId) -> bool {
        self.items.contains_key(&id)
    }

    /// Appends `item` at the end, or replaces it in place if its id is
    /// already present.
    pub fn append(&mut self, item: Item) -> ItemId {
        let id = item.id();
        self.items.insert(id, item);
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let removed = self.items.shift_remove(&id);
        if removed.is_none() {
            warn!("Tried to remove unknown item {}", id);
        }
        removed
    }

    pub fn update(&mut self, id: ItemId, f: impl FnOnce(&mut Item)) -> bool {
        match self.items.get_mut(&id) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }
}

impl<'a> IntoIterator for &'a Inventory {
    type Item = &'a Item;
    type IntoIter = indexmap::map::Values<'a, ItemId, Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.values()
    }
}

impl FromIterator<Item> for Inventory {
    fn from_iter<T: IntoIterator<Item = Item>>(iter: T) -> Self {
        Self::from_items(iter)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::models::{Color, Status};

    fn names(inventory: &Inventory) -> Vec<&str> {
        inventory.iter().map(|i| i.name.as_str()).collect()
    }

    fn sample() -> Inventory {
        Inventory::from_items(vec![
            Item::new("Charger", Some(Color::Yellow), Status::InStock { quantity: 20 }),
            Item::new(
                "Phone",
                Some(Color::Green),
                Status::OutOfStock {
                    is_on_back_order: true,
                },
            ),
            Item::new("Headphones", Some(Color::Green), Status::default_out_of_stock()),
        ])
    }

    #[test]
    fn append_grows_and_is_visible() {
        let mut inventory = sample();
        let id = inventory.append(Item::add_template());
        assert_eq!(inventory.len(), 4);
        assert_eq!(inventory.iter().last().map(Item::id), Some(id));
        assert!(inventory.contains(id));
    }

    #[test]
    fn append_existing_id_replaces_in_place() {
        let mut inventory = sample();
        let mut phone = inventory.iter().nth(1).cloned().unwrap();
        phone.name = String::from("Tablet");
        inventory.append(phone);
        assert_eq!(names(&inventory), vec!["Charger", "Tablet", "Headphones"]);
    }

    #[test]
    fn remove_targets_identity_only() {
        let mut inventory = sample();
        let twin = Item::new("Phone", Some(Color::Green), Status::default_out_of_stock());
        let twin_id = inventory.append(twin);
        let phone_id = inventory.iter().nth(1).map(Item::id).unwrap();

        let removed = inventory.remove(phone_id).unwrap();
        assert_eq!(removed.id(), phone_id);
        assert_eq!(names(&inventory), vec!["Charger", "Headphones", "Phone"]);
        assert!(inventory.contains(twin_id));
    }

    #[test]
    fn remove_unknown_is_noop() {
        let mut inventory = sample();
        let before = inventory.clone();
        assert!(inventory.remove(ItemId::new()).is_none());
        assert_eq!(inventory, before);
    }

    #[test]
    fn update_in_place() {
        let mut inventory = sample();
        let id = inventory.iter().next().map(Item::id).unwrap();
        assert!(inventory.update(id, |item| item.name = String::from("USB-C charger")));
        assert_eq!(inventory.get(id).unwrap().name, "USB-C charger");
        assert!(!inventory.update(ItemId::new(), |item| item.name.clear()));
    }

    proptest! {
        #[test]
        fn removal_preserves_relative_order(count in 1usize..16, victim in 0usize..16) {
            let mut inventory: Inventory = (0..count)
                .map(|i| Item::new(i.to_string(), None, Status::default_in_stock()))
                .collect();
            let victim = victim % count;
            let id = inventory.iter().nth(victim).map(Item::id).unwrap();
            let mut expected: Vec<String> = inventory.iter().map(|i| i.name.clone()).collect();
            expected.remove(victim);

            inventory.remove(id);

            let actual: Vec<String> = inventory.iter().map(|i| i.name.clone()).collect();
            prop_assert_eq!(actual, expected);
        }
    }
}
