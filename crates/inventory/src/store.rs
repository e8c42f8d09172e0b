//! The in-memory inventory store.
//!
//! The store exclusively owns its items and keeps them in insertion order.
//! Every mutation either succeeds completely or leaves the collection exactly
//! as it was and returns a [`DomainError`].
//!
//! "By id" operations resolve through [`InventoryStore::find_by_id`], which
//! returns the first case-insensitive match in collection order. Duplicate ids
//! are tolerated; the earliest surviving one always wins.

use core::cmp::Ordering;

use stockroom_core::{DomainError, DomainResult, ValueObject};

use crate::config::StoreConfig;
use crate::item::{AddItem, Category, Item, ItemId};

/// Field used as the sort key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortKey {
    Quantity,
    Price,
    Id,
    Name,
}

impl SortKey {
    fn compare(self, a: &Item, b: &Item) -> Ordering {
        match self {
            SortKey::Quantity => a.quantity().cmp(&b.quantity()),
            SortKey::Price => a.price().total_cmp(&b.price()),
            SortKey::Id => a.id_typed().as_str().cmp(b.id_typed().as_str()),
            SortKey::Name => a.name().cmp(b.name()),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SortKey::Quantity => "Quantity",
            SortKey::Price => "Price",
            SortKey::Id => "ID",
            SortKey::Name => "Name",
        })
    }
}

impl ValueObject for SortKey {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Ascending,
    Descending,
}

impl core::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            SortOrder::Ascending => "Ascending",
            SortOrder::Descending => "Descending",
        })
    }
}

impl ValueObject for SortOrder {}

/// Outcome of a successful field update, carrying enough to render a delta.
#[derive(Debug, Clone, PartialEq)]
pub struct Updated<T> {
    pub item_id: ItemId,
    pub name: String,
    pub old: T,
    pub new: T,
}

#[derive(Debug, Clone, Default)]
pub struct InventoryStore {
    items: Vec<Item>,
    config: StoreConfig,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: StoreConfig) -> Self {
        Self {
            items: Vec::new(),
            config,
        }
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Configured hard limit; `None` when unbounded.
    pub fn capacity(&self) -> Option<usize> {
        self.config.capacity
    }

    pub fn is_full(&self) -> bool {
        self.config
            .capacity
            .is_some_and(|capacity| self.items.len() >= capacity)
    }

    /// Append a new item. Returns its index.
    ///
    /// Rejected without mutation when the store is full, or when quantity or
    /// price is not strictly positive (or the price is not finite).
    pub fn add(&mut self, cmd: AddItem) -> DomainResult<usize> {
        if let Some(capacity) = self.config.capacity {
            if self.items.len() >= capacity {
                tracing::warn!(item_id = %cmd.id, capacity, "add rejected: store is full");
                return Err(DomainError::capacity_exceeded(capacity));
            }
        }
        if let Err(e) = ensure_quantity(cmd.quantity).and_then(|_| ensure_price(cmd.price)) {
            tracing::warn!(item_id = %cmd.id, error = %e, "add rejected");
            return Err(e);
        }

        tracing::info!(
            item_id = %cmd.id,
            category = %cmd.category,
            quantity = cmd.quantity,
            price = cmd.price,
            "item added"
        );
        self.items.push(Item::from_command(cmd));
        Ok(self.items.len() - 1)
    }

    /// Index of the first item whose id matches `id` case-insensitively.
    pub fn find_by_id(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id_typed().matches(id))
    }

    pub fn get(&self, index: usize) -> Option<&Item> {
        self.items.get(index)
    }

    pub fn update_price(&mut self, index: usize, new_price: f64) -> DomainResult<Updated<f64>> {
        let item = self.items.get_mut(index).ok_or_else(DomainError::not_found)?;
        if let Err(e) = ensure_price(new_price) {
            tracing::warn!(item_id = %item.id_typed(), error = %e, "price update rejected");
            return Err(e);
        }

        let old = item.price();
        item.set_price(new_price);
        tracing::info!(item_id = %item.id_typed(), old, new = new_price, "price updated");

        Ok(Updated {
            item_id: item.id_typed().clone(),
            name: item.name().to_string(),
            old,
            new: new_price,
        })
    }

    pub fn update_quantity(
        &mut self,
        index: usize,
        new_quantity: i64,
    ) -> DomainResult<Updated<i64>> {
        let item = self.items.get_mut(index).ok_or_else(DomainError::not_found)?;
        if let Err(e) = ensure_quantity(new_quantity) {
            tracing::warn!(item_id = %item.id_typed(), error = %e, "quantity update rejected");
            return Err(e);
        }

        let old = item.quantity();
        item.set_quantity(new_quantity);
        tracing::info!(item_id = %item.id_typed(), old, new = new_quantity, "quantity updated");

        Ok(Updated {
            item_id: item.id_typed().clone(),
            name: item.name().to_string(),
            old,
            new: new_quantity,
        })
    }

    pub fn update_price_by_id(&mut self, id: &str, new_price: f64) -> DomainResult<Updated<f64>> {
        let index = self.find_by_id(id).ok_or_else(DomainError::not_found)?;
        self.update_price(index, new_price)
    }

    pub fn update_quantity_by_id(
        &mut self,
        id: &str,
        new_quantity: i64,
    ) -> DomainResult<Updated<i64>> {
        let index = self.find_by_id(id).ok_or_else(DomainError::not_found)?;
        self.update_quantity(index, new_quantity)
    }

    /// Remove the item at `index`, shifting later items one position earlier.
    pub fn remove(&mut self, index: usize) -> DomainResult<Item> {
        if index >= self.items.len() {
            return Err(DomainError::not_found());
        }
        let removed = self.items.remove(index);
        tracing::info!(item_id = %removed.id_typed(), index, remaining = self.items.len(), "item removed");
        Ok(removed)
    }

    /// Remove the first item matching `id`.
    pub fn remove_by_id(&mut self, id: &str) -> DomainResult<Item> {
        let index = self.find_by_id(id).ok_or_else(DomainError::not_found)?;
        self.remove(index)
    }

    /// All items in collection order.
    pub fn list_all(&self) -> &[Item] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.iter()
    }

    /// Items of exactly `category`, in collection order. Empty when none match.
    pub fn list_by_category(&self, category: Category) -> Vec<&Item> {
        let found: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.category() == category)
            .collect();
        tracing::debug!(%category, matches = found.len(), "listed by category");
        found
    }

    /// Items with `quantity <= threshold`, in collection order.
    pub fn list_low_stock(&self, threshold: i64) -> Vec<&Item> {
        let found: Vec<&Item> = self
            .items
            .iter()
            .filter(|item| item.quantity() <= threshold)
            .collect();
        tracing::debug!(threshold, matches = found.len(), "listed low stock");
        found
    }

    /// [`Self::list_low_stock`] with the configured threshold.
    pub fn list_low_stock_default(&self) -> Vec<&Item> {
        self.list_low_stock(self.config.low_stock_threshold)
    }

    pub fn search_by_id(&self, id: &str) -> Option<&Item> {
        let found = self.find_by_id(id).map(|index| &self.items[index]);
        tracing::debug!(id, found = found.is_some(), "searched by id");
        found
    }

    /// Reorder the whole collection by `key` in `order`.
    ///
    /// Items move as whole records. Relative order of equal keys is not part of
    /// the contract.
    pub fn sort(&mut self, key: SortKey, order: SortOrder) {
        self.items.sort_by(|a, b| {
            let ord = key.compare(a, b);
            match order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });
        tracing::info!(%key, %order, len = self.items.len(), "items sorted");
    }
}

fn ensure_quantity(quantity: i64) -> DomainResult<()> {
    if quantity <= 0 {
        return Err(DomainError::constraint("quantity must be greater than 0"));
    }
    Ok(())
}

fn ensure_price(price: f64) -> DomainResult<()> {
    if !price.is_finite() {
        return Err(DomainError::constraint("price must be a finite number"));
    }
    if price <= 0.0 {
        return Err(DomainError::constraint("price must be greater than 0"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn item(id: &str, quantity: i64, price: f64) -> AddItem {
        AddItem::new(id, format!("name-{id}"), quantity, price, Category::Clothing)
    }

    fn store_with(items: impl IntoIterator<Item = AddItem>) -> InventoryStore {
        let mut store = InventoryStore::new();
        for cmd in items {
            store.add(cmd).unwrap();
        }
        store
    }

    fn ids(items: &[&Item]) -> Vec<String> {
        items.iter().map(|i| i.id_typed().to_string()).collect()
    }

    fn all_ids(store: &InventoryStore) -> Vec<String> {
        store.iter().map(|i| i.id_typed().to_string()).collect()
    }

    #[test]
    fn add_appends_in_insertion_order() {
        let mut store = InventoryStore::new();
        assert_eq!(store.add(item("b", 1, 1.0)).unwrap(), 0);
        assert_eq!(store.add(item("a", 2, 2.0)).unwrap(), 1);
        assert_eq!(store.len(), 2);
        assert_eq!(all_ids(&store), vec!["b", "a"]);
    }

    #[test]
    fn add_rejects_non_positive_quantity_or_price() {
        let mut store = InventoryStore::new();

        for cmd in [item("q0", 0, 1.0), item("qn", -1, 1.0), item("p0", 1, 0.0), item("pn", 1, -5.0)] {
            match store.add(cmd) {
                Err(DomainError::ConstraintViolation(_)) => {}
                other => panic!("expected ConstraintViolation, got {other:?}"),
            }
        }
        assert!(store.is_empty());
    }

    #[test]
    fn add_rejects_non_finite_price() {
        let mut store = InventoryStore::new();
        assert!(store.add(item("nan", 1, f64::NAN)).is_err());
        assert!(store.add(item("inf", 1, f64::INFINITY)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn add_reports_capacity_exceeded() {
        let mut store = InventoryStore::with_config(StoreConfig::with_capacity(2));
        store.add(item("a", 1, 1.0)).unwrap();
        store.add(item("b", 1, 1.0)).unwrap();
        assert!(store.is_full());

        let err = store.add(item("c", 1, 1.0)).unwrap_err();
        assert_eq!(err, DomainError::CapacityExceeded { capacity: 2 });
        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id("c"), None);
    }

    #[test]
    fn default_store_holds_exactly_one_thousand() {
        let mut store = InventoryStore::new();
        for n in 0..1000 {
            store.add(item(&n.to_string(), 1, 1.0)).unwrap();
        }
        assert_eq!(store.add(item("overflow", 1, 1.0)), Err(DomainError::capacity_exceeded(1000)));
        assert_eq!(store.len(), 1000);
    }

    #[test]
    fn unbounded_store_never_fills() {
        let mut store = InventoryStore::with_config(StoreConfig::unbounded());
        for n in 0..1500 {
            store.add(item(&n.to_string(), 1, 1.0)).unwrap();
        }
        assert!(!store.is_full());
        assert_eq!(store.capacity(), None);
    }

    #[test]
    fn search_is_case_insensitive() {
        let store = store_with([item("AB12", 4, 2.5)]);
        let found = store.search_by_id("ab12").expect("item should be found");
        assert_eq!(found.id_typed().as_str(), "AB12");
        assert!(store.search_by_id("zz").is_none());
    }

    #[test]
    fn add_find_remove_round_trip() {
        let mut store = store_with([item("keep", 1, 1.0)]);
        let before = store.len();

        store.add(item("X", 3, 3.0)).unwrap();
        let removed = store.remove_by_id("x").unwrap();
        assert_eq!(removed.id_typed().as_str(), "X");

        assert_eq!(store.find_by_id("X"), None);
        assert_eq!(store.len(), before);
    }

    #[test]
    fn duplicate_ids_resolve_to_first_match() {
        let mut store = store_with([
            AddItem::new("x", "first", 1, 1.0, Category::Clothing),
            AddItem::new("X", "second", 2, 2.0, Category::Electronics),
        ]);

        assert_eq!(store.find_by_id("x"), Some(0));
        let removed = store.remove_by_id("x").unwrap();
        assert_eq!(removed.name(), "first");

        let remaining = store.search_by_id("x").expect("second item should remain");
        assert_eq!(remaining.name(), "second");
    }

    #[test]
    fn remove_preserves_relative_order() {
        let mut store = store_with([item("a", 1, 1.0), item("b", 1, 1.0), item("c", 1, 1.0), item("d", 1, 1.0)]);
        store.remove(1).unwrap();
        assert_eq!(all_ids(&store), vec!["a", "c", "d"]);
    }

    #[test]
    fn remove_out_of_range_is_not_found() {
        let mut empty = InventoryStore::new();
        assert_eq!(empty.remove(0), Err(DomainError::NotFound));

        let mut store = store_with([item("a", 1, 1.0)]);
        assert_eq!(store.remove(1), Err(DomainError::NotFound));
        assert_eq!(store.remove_by_id("nope"), Err(DomainError::NotFound));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn update_price_reports_old_and_new() {
        let mut store = store_with([item("a", 1, 10.0)]);
        let updated = store.update_price(0, 12.5).unwrap();
        assert_eq!(updated.old, 10.0);
        assert_eq!(updated.new, 12.5);
        assert_eq!(updated.name, "name-a");
        assert_eq!(store.get(0).unwrap().price(), 12.5);
    }

    #[test]
    fn update_price_rejects_zero_and_negative() {
        let mut store = store_with([item("a", 1, 10.0)]);
        for bad in [-5.0, 0.0, f64::NAN] {
            assert!(matches!(
                store.update_price(0, bad),
                Err(DomainError::ConstraintViolation(_))
            ));
            assert_eq!(store.get(0).unwrap().price(), 10.0);
        }
    }

    #[test]
    fn update_quantity_rejects_non_positive() {
        let mut store = store_with([item("a", 7, 1.0)]);
        assert!(store.update_quantity(0, 0).is_err());
        assert!(store.update_quantity(0, -2).is_err());
        assert_eq!(store.get(0).unwrap().quantity(), 7);

        let updated = store.update_quantity(0, 9).unwrap();
        assert_eq!((updated.old, updated.new), (7, 9));
    }

    #[test]
    fn update_by_id_uses_first_match_and_reports_missing() {
        let mut store = store_with([item("dup", 1, 1.0), item("DUP", 2, 2.0)]);
        store.update_quantity_by_id("Dup", 40).unwrap();
        assert_eq!(store.get(0).unwrap().quantity(), 40);
        assert_eq!(store.get(1).unwrap().quantity(), 2);

        assert_eq!(store.update_price_by_id("missing", 3.0), Err(DomainError::NotFound));
        assert_eq!(store.update_price(9, 3.0), Err(DomainError::NotFound));
    }

    #[test]
    fn category_filter_keeps_order_and_may_be_empty() {
        let store = store_with([
            AddItem::new("e1", "tv", 1, 1.0, Category::Electronics),
            AddItem::new("c1", "hat", 1, 1.0, Category::Clothing),
            AddItem::new("e2", "radio", 1, 1.0, Category::Electronics),
        ]);

        assert_eq!(ids(&store.list_by_category(Category::Electronics)), vec!["e1", "e2"]);
        assert!(store.list_by_category(Category::Entertainment).is_empty());
    }

    #[test]
    fn low_stock_includes_threshold() {
        let store = store_with([item("q3", 3, 1.0), item("q10", 10, 1.0), item("q5", 5, 1.0), item("q6", 6, 1.0)]);
        assert_eq!(ids(&store.list_low_stock(5)), vec!["q3", "q5"]);
        assert_eq!(ids(&store.list_low_stock_default()), vec!["q3", "q5"]);
    }

    #[test]
    fn low_stock_default_follows_config() {
        let config = StoreConfig {
            low_stock_threshold: 6,
            ..StoreConfig::default()
        };
        let mut store = InventoryStore::with_config(config);
        for cmd in [item("q3", 3, 1.0), item("q10", 10, 1.0), item("q6", 6, 1.0)] {
            store.add(cmd).unwrap();
        }
        assert_eq!(ids(&store.list_low_stock_default()), vec!["q3", "q6"]);
    }

    #[test]
    fn sort_by_price_both_directions() {
        let mut store = store_with([item("A", 1, 30.0), item("B", 1, 10.0), item("C", 1, 20.0)]);

        store.sort(SortKey::Price, SortOrder::Ascending);
        assert_eq!(all_ids(&store), vec!["B", "C", "A"]);

        store.sort(SortKey::Price, SortOrder::Descending);
        assert_eq!(all_ids(&store), vec!["A", "C", "B"]);
    }

    #[test]
    fn sort_moves_whole_records() {
        let mut store = store_with([
            AddItem::new("tv", "Television", 9, 300.0, Category::Electronics),
            AddItem::new("tee", "T-Shirt", 2, 10.0, Category::Clothing),
        ]);
        store.sort(SortKey::Quantity, SortOrder::Ascending);

        let first = store.get(0).unwrap();
        assert_eq!(first.id_typed().as_str(), "tee");
        assert_eq!(first.name(), "T-Shirt");
        assert_eq!(first.price(), 10.0);
        assert_eq!(first.category(), Category::Clothing);
    }

    #[test]
    fn sort_by_id_and_name() {
        let mut store = store_with([
            AddItem::new("b", "zeta", 1, 1.0, Category::Clothing),
            AddItem::new("c", "alpha", 1, 1.0, Category::Clothing),
            AddItem::new("a", "mid", 1, 1.0, Category::Clothing),
        ]);

        store.sort(SortKey::Id, SortOrder::Ascending);
        assert_eq!(all_ids(&store), vec!["a", "b", "c"]);

        store.sort(SortKey::Name, SortOrder::Descending);
        assert_eq!(all_ids(&store), vec!["b", "a", "c"]);
    }

    #[test]
    fn sort_handles_large_quantities_without_overflow() {
        let mut store = store_with([item("big", i64::MAX, 1.0), item("also-big", i64::MAX - 1, 1.0)]);
        store.sort(SortKey::Quantity, SortOrder::Ascending);
        assert_eq!(store.get(0).unwrap().quantity(), i64::MAX - 1);
        assert_eq!(store.get(1).unwrap().quantity(), i64::MAX);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Size equals the number of accepted adds; rejected adds change nothing.
        #[test]
        fn size_counts_only_accepted_adds(
            entries in prop::collection::vec((-3i64..20i64, -3i32..50i32), 0..40)
        ) {
            let mut store = InventoryStore::new();
            let mut accepted = 0usize;

            for (n, (quantity, cents)) in entries.into_iter().enumerate() {
                let price = f64::from(cents) / 2.0;
                let expect_ok = quantity > 0 && price > 0.0;
                let result = store.add(item(&format!("id{n}"), quantity, price));
                prop_assert_eq!(result.is_ok(), expect_ok);
                if expect_ok {
                    accepted += 1;
                }
            }

            prop_assert_eq!(store.len(), accepted);
        }

        #[test]
        fn low_stock_is_the_ordered_subsequence(
            quantities in prop::collection::vec(1i64..15i64, 0..30),
            threshold in 0i64..15i64,
        ) {
            let store = store_with(
                quantities.iter().enumerate().map(|(n, q)| item(&format!("i{n}"), *q, 1.0)),
            );

            let expected: Vec<String> = quantities
                .iter()
                .enumerate()
                .filter(|(_, q)| **q <= threshold)
                .map(|(n, _)| format!("i{n}"))
                .collect();

            prop_assert_eq!(ids(&store.list_low_stock(threshold)), expected);
        }

        #[test]
        fn sort_orders_by_key_and_keeps_every_item(
            entries in prop::collection::vec((1i64..100i64, 1u32..10_000u32), 0..40),
            descending in any::<bool>(),
            by_price in any::<bool>(),
        ) {
            let mut store = store_with(
                entries
                    .iter()
                    .enumerate()
                    .map(|(n, (q, cents))| item(&format!("i{n}"), *q, f64::from(*cents) / 100.0)),
            );
            let mut before = all_ids(&store);

            let key = if by_price { SortKey::Price } else { SortKey::Quantity };
            let order = if descending { SortOrder::Descending } else { SortOrder::Ascending };
            store.sort(key, order);

            for pair in store.list_all().windows(2) {
                let ord = key.compare(&pair[0], &pair[1]);
                match order {
                    SortOrder::Ascending => prop_assert_ne!(ord, Ordering::Greater),
                    SortOrder::Descending => prop_assert_ne!(ord, Ordering::Less),
                }
            }

            let mut after = all_ids(&store);
            before.sort();
            after.sort();
            prop_assert_eq!(before, after);
        }
    }
}
