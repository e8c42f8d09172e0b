//! The menu-driven session.
//!
//! The shell owns the store for the lifetime of a session and is its only
//! caller, so every store operation runs to completion before the next prompt.

use std::io::{self, BufRead, Write};

use stockroom_core::DomainError;
use stockroom_inventory::{AddItem, Category, InventoryStore, SortKey, SortOrder};

use crate::config::{OutputFormat, ShellConfig};
use crate::console::{ChoiceError, Console, parse_choice};
use crate::render;

const MAIN_MENU: &str = "\n================== Inventory Management System ==================\n\n\
1 - Add Item\n\
2 - Update Item\n\
3 - Remove Item\n\
4 - Display Items by Category\n\
5 - Display All Items\n\
6 - Search Item\n\
7 - Sort Items\n\
8 - Display Low Stock Items\n\
9 - Exit";

const SORT_KEY_MENU: &str = "\nSort by:\n1 - Quantity\n2 - Price\n3 - ID\n4 - Name\n5 - Return to Main Menu\n\nEnter your choice: ";
const SORT_ORDER_MENU: &str = "\nSort order:\n1 - Ascending\n2 - Descending\n3 - Return to Main Menu\n\nEnter your choice: ";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuAction {
    Add,
    Update,
    Remove,
    ByCategory,
    All,
    Search,
    Sort,
    LowStock,
    Exit,
}

impl MenuAction {
    fn from_choice(choice: u8) -> Option<Self> {
        Some(match choice {
            1 => MenuAction::Add,
            2 => MenuAction::Update,
            3 => MenuAction::Remove,
            4 => MenuAction::ByCategory,
            5 => MenuAction::All,
            6 => MenuAction::Search,
            7 => MenuAction::Sort,
            8 => MenuAction::LowStock,
            9 => MenuAction::Exit,
            _ => return None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Outcome of a sub-menu selection.
enum Step<T> {
    Chosen(T),
    Back,
    Quit,
}

pub struct Shell<R, W> {
    console: Console<R, W>,
    store: InventoryStore,
    output: OutputFormat,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, config: ShellConfig) -> Self {
        Self::with_store(input, output, InventoryStore::with_config(config.store), config.output)
    }

    pub fn with_store(input: R, output: W, store: InventoryStore, format: OutputFormat) -> Self {
        Self {
            console: Console::new(input, output),
            store,
            output: format,
        }
    }

    pub fn store(&self) -> &InventoryStore {
        &self.store
    }

    pub fn into_parts(self) -> (InventoryStore, W) {
        (self.store, self.console.into_output())
    }

    /// Run the main menu until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.console.say(MAIN_MENU)?;
            let Some(line) = self.console.prompt("\nEnter your choice: ")? else {
                tracing::debug!("input closed; ending session");
                return Ok(());
            };

            let action = match parse_choice(&line, 9) {
                Ok(choice) => MenuAction::from_choice(choice),
                Err(ChoiceError::NotANumber) => {
                    self.console
                        .say("Invalid input! Please enter a valid number between 1 and 9.")?;
                    continue;
                }
                Err(ChoiceError::OutOfRange(_)) => None,
            };
            let Some(action) = action else {
                self.console.say("\nInvalid choice! Please enter a valid option.")?;
                continue;
            };

            if self.dispatch(action)? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, action: MenuAction) -> io::Result<Flow> {
        match action {
            MenuAction::Add => self.add_item(),
            MenuAction::Update => self.update_item(),
            MenuAction::Remove => self.remove_item(),
            MenuAction::ByCategory => self.display_by_category(),
            MenuAction::All => self.display_all(),
            MenuAction::Search => self.search_item(),
            MenuAction::Sort => self.sort_items(),
            MenuAction::LowStock => self.display_low_stock(),
            MenuAction::Exit => {
                self.console.say(
                    "\nThank you for using Inventory Management System!\nExiting the system. Goodbye!",
                )?;
                Ok(Flow::Quit)
            }
        }
    }

    fn add_item(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n===================== Add Item =====================")?;

        let category = match self.pick_category()? {
            Step::Chosen(category) => category,
            Step::Back => return Ok(Flow::Continue),
            Step::Quit => return Ok(Flow::Quit),
        };

        if let Some(capacity) = self.store.capacity().filter(|_| self.store.is_full()) {
            self.report(&DomainError::capacity_exceeded(capacity))?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.console.prompt("Enter Item ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(name) = self.console.prompt("Enter Item Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(quantity) = self.console.read_quantity("Enter Item Quantity: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(price) = self.console.read_price("Enter Item Price: ")? else {
            return Ok(Flow::Quit);
        };

        let cmd = AddItem::new(id.trim(), name.trim(), quantity, price, category);
        match self.store.add(cmd) {
            Ok(_) => self.console.say("\nItem added successfully!")?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn update_item(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n=================== Update Item ====================")?;

        let Some(id) = self.console.prompt("Enter Item ID to Update: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(index) = self.store.find_by_id(id.trim()) else {
            self.report(&DomainError::not_found())?;
            return Ok(Flow::Continue);
        };

        self.console.say("\nUpdate Information\n1 - Price\n2 - Quantity")?;
        let Some(line) = self.console.prompt("\nEnter your choice: ")? else {
            return Ok(Flow::Quit);
        };

        match parse_choice(&line, 2) {
            Ok(1) => {
                let Some(price) = self.console.read_price("Enter new Price: ")? else {
                    return Ok(Flow::Quit);
                };
                match self.store.update_price(index, price) {
                    Ok(updated) => self.console.say(&format!(
                        "\nPrice of {} is updated from {} to {}.",
                        updated.name,
                        render::money(updated.old),
                        render::money(updated.new)
                    ))?,
                    Err(e) => self.report(&e)?,
                }
            }
            Ok(_) => {
                let Some(quantity) = self.console.read_quantity("Enter new Quantity: ")? else {
                    return Ok(Flow::Quit);
                };
                match self.store.update_quantity(index, quantity) {
                    Ok(updated) => self.console.say(&format!(
                        "\nQuantity of {} is updated from {} to {}.",
                        updated.name, updated.old, updated.new
                    ))?,
                    Err(e) => self.report(&e)?,
                }
            }
            Err(_) => self.console.say("\nInvalid choice! Nothing was updated.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_item(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n==================== Remove Item ====================")?;

        let Some(id) = self.console.prompt("\nEnter Item ID to Remove: ")? else {
            return Ok(Flow::Quit);
        };
        match self.store.remove_by_id(id.trim()) {
            Ok(item) => self.console.say(&format!(
                "\nItem {} has been removed from the inventory.",
                item.name()
            ))?,
            Err(e) => self.report(&e)?,
        }
        Ok(Flow::Continue)
    }

    fn display_by_category(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n============= Display Items by Category =============")?;

        let category = match self.pick_category()? {
            Step::Chosen(category) => category,
            Step::Back => return Ok(Flow::Continue),
            Step::Quit => return Ok(Flow::Quit),
        };

        self.console
            .say(&format!("\nDisplaying Items in Category: {category}"))?;
        let found = self.store.list_by_category(category);
        render::items(self.console.out(), self.output, found.iter().copied())?;
        if found.is_empty() && self.output == OutputFormat::Table {
            self.console.say("\nNo items found in this category.")?;
        }
        Ok(Flow::Continue)
    }

    fn display_all(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n================= Display All Items =================")?;
        render::items(self.console.out(), self.output, self.store.list_all())?;
        if self.store.is_empty() && self.output == OutputFormat::Table {
            self.console.say("\nNo items in the inventory.")?;
        }
        Ok(Flow::Continue)
    }

    fn search_item(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n==================== Search Item ====================")?;

        let Some(id) = self.console.prompt("Enter Item ID: ")? else {
            return Ok(Flow::Quit);
        };
        match self.store.search_by_id(id.trim()) {
            Some(item) => render::items(self.console.out(), self.output, [item])?,
            None => self.report(&DomainError::not_found())?,
        }
        Ok(Flow::Continue)
    }

    fn sort_items(&mut self) -> io::Result<Flow> {
        self.console
            .say("\n==================== Sort Items ====================")?;

        let key = match self.console.choose(SORT_KEY_MENU, 5)? {
            None => return Ok(Flow::Quit),
            Some(1) => SortKey::Quantity,
            Some(2) => SortKey::Price,
            Some(3) => SortKey::Id,
            Some(4) => SortKey::Name,
            Some(_) => return Ok(Flow::Continue),
        };
        let order = match self.console.choose(SORT_ORDER_MENU, 3)? {
            None => return Ok(Flow::Quit),
            Some(1) => SortOrder::Ascending,
            Some(2) => SortOrder::Descending,
            Some(_) => return Ok(Flow::Continue),
        };

        self.store.sort(key, order);
        self.console
            .say(&format!("\nSorted Items by {key} ({order}):"))?;
        render::items(self.console.out(), self.output, self.store.list_all())?;
        Ok(Flow::Continue)
    }

    fn display_low_stock(&mut self) -> io::Result<Flow> {
        let threshold = self.store.config().low_stock_threshold;
        self.console
            .say("\n============== Display Low Stock Items ==============")?;
        self.console.say(&format!(
            "Displaying Low Stock Items (Quantity {threshold} and below):"
        ))?;

        let found = self.store.list_low_stock_default();
        render::items(self.console.out(), self.output, found.iter().copied())?;
        if found.is_empty() && self.output == OutputFormat::Table {
            self.console
                .say(&format!("\nNo items with quantity {threshold} or below."))?;
        }
        Ok(Flow::Continue)
    }

    fn pick_category(&mut self) -> io::Result<Step<Category>> {
        let back = Category::ALL.len() + 1;
        let mut menu = String::from("\n");
        for (n, category) in Category::ALL.iter().enumerate() {
            menu.push_str(&format!("{} - {category}\n", n + 1));
        }
        menu.push_str(&format!("{back} - Return to Main Menu"));
        self.console.say(&menu)?;

        // `back` is 4; the cast cannot truncate.
        let choice = self.console.choose("\nEnter Category: ", back as u8)?;
        Ok(match choice {
            None => Step::Quit,
            Some(n) => match Category::from_choice(n) {
                Some(category) => Step::Chosen(category),
                None => Step::Back,
            },
        })
    }

    fn report(&mut self, error: &DomainError) -> io::Result<()> {
        let message = match error {
            DomainError::NotFound => "\nItem ID not found!".to_string(),
            DomainError::CapacityExceeded { capacity } => {
                format!("\nInventory is full! No more than {capacity} items can be stored.")
            }
            DomainError::ConstraintViolation(_) | DomainError::Validation(_) => {
                format!("\nRequest rejected: {error}")
            }
        };
        self.console.say(&message)
    }
}
