//! Item listing output: fixed-width table or JSON.

use std::io::{self, Write};

use stockroom_inventory::Item;

use crate::config::OutputFormat;

const COLUMN_WIDTH: usize = 20;
const RULE_WIDTH: usize = 108;

pub fn header(out: &mut impl Write) -> io::Result<()> {
    let rule = "-".repeat(RULE_WIDTH);
    writeln!(out, "\n{rule}")?;
    writeln!(
        out,
        "{:<w$}{:<w$}{:<w$}{:<w$}{:<w$}",
        "ID",
        "Name",
        "Quantity",
        "Price",
        "Category",
        w = COLUMN_WIDTH
    )?;
    writeln!(out, "{rule}")
}

/// One table row. Prices always carry two decimals.
pub fn row(out: &mut impl Write, item: &Item) -> io::Result<()> {
    writeln!(
        out,
        "{:<w$}{:<w$}{:<w$}{:<w$.2}{:<w$}",
        item.id_typed().as_str(),
        item.name(),
        item.quantity(),
        item.price(),
        item.category().as_str(),
        w = COLUMN_WIDTH
    )
}

/// Render `items` in the chosen format.
///
/// The table variant always prints the header, even for an empty listing.
pub fn items<'a>(
    out: &mut impl Write,
    format: OutputFormat,
    items: impl IntoIterator<Item = &'a Item>,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            header(out)?;
            for item in items {
                row(out, item)?;
            }
            Ok(())
        }
        OutputFormat::Json => {
            let items: Vec<&Item> = items.into_iter().collect();
            let json = serde_json::to_string_pretty(&items).map_err(io::Error::other)?;
            writeln!(out, "{json}")
        }
    }
}

/// Two-decimal money text used in update messages.
pub fn money(value: f64) -> String {
    format!("{value:.2}")
}
