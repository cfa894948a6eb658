use anyhow::{Context, Result};

use crate::{inventory::Inventory, models::Item};

const SAMPLE_INVENTORY: &str = include_str!("../assets/sample_inventory.json");

/// The preview inventory bundled with the application. Every call hands out
/// fresh item ids.
pub fn sample_inventory() -> Result<Inventory> {
    let items: Vec<Item> =
        serde_json::from_str(SAMPLE_INVENTORY).context("Bundled sample inventory is malformed")?;
    Ok(Inventory::from_items(items))
}
