use serde::{Deserialize, Serialize};

use stockroom_core::{Entity, ValueObject};

/// User-supplied item identifier.
///
/// Stored exactly as entered. Lookups compare case-insensitively through
/// [`ItemId::matches`]; nothing enforces uniqueness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against raw text.
    pub fn matches(&self, other: &str) -> bool {
        if self.0.is_ascii() && other.is_ascii() {
            return self.0.eq_ignore_ascii_case(other);
        }
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ItemId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Closed set of item categories. There is no "uncategorized" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Clothing,
    Electronics,
    Entertainment,
}

impl Category {
    /// All categories, in menu order.
    pub const ALL: [Category; 3] = [
        Category::Clothing,
        Category::Electronics,
        Category::Entertainment,
    ];

    /// Map a 1-based menu choice to a category.
    pub fn from_choice(choice: u8) -> Option<Self> {
        match choice {
            1 => Some(Category::Clothing),
            2 => Some(Category::Electronics),
            3 => Some(Category::Entertainment),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Clothing => "Clothing",
            Category::Electronics => "Electronics",
            Category::Entertainment => "Entertainment",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ValueObject for Category {}

/// Command: AddItem.
///
/// Quantity and price arrive already parsed; the store re-checks them.
#[derive(Debug, Clone, PartialEq)]
pub struct AddItem {
    pub id: ItemId,
    pub name: String,
    pub quantity: i64,
    pub price: f64,
    pub category: Category,
}

impl AddItem {
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        quantity: i64,
        price: f64,
        category: Category,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            quantity,
            price,
            category,
        }
    }
}

/// One inventory record.
///
/// Only [`crate::InventoryStore`] constructs or mutates items, so `quantity`
/// and `price` are never negative at rest.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Item {
    id: ItemId,
    name: String,
    quantity: i64,
    price: f64,
    category: Category,
}

impl Item {
    pub(crate) fn from_command(cmd: AddItem) -> Self {
        Self {
            id: cmd.id,
            name: cmd.name,
            quantity: cmd.quantity,
            price: cmd.price,
            category: cmd.category,
        }
    }

    pub fn id_typed(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    pub fn price(&self) -> f64 {
        self.price
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub(crate) fn set_quantity(&mut self, quantity: i64) {
        self.quantity = quantity;
    }

    pub(crate) fn set_price(&mut self, price: f64) {
        self.price = price;
    }
}

impl Entity for Item {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
