use std::fmt;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(Uuid);

impl ItemId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ItemId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    id: ItemId,
    pub name: String,
    pub color: Option<Color>,
    pub status: Status,
}

impl Item {
    pub fn new(name: impl Into<String>, color: Option<Color>, status: Status) -> Self {
        Self {
            id: ItemId::new(),
            name: name.into(),
            color,
            status,
        }
    }

    /// Empty item shown by a fresh edit form.
    pub fn blank() -> Self {
        Self::new("", None, Status::default_in_stock())
    }

    /// Template presented by the add action.
    pub fn add_template() -> Self {
        Self::new("", Some(Color::Black), Status::default_in_stock())
    }

    pub fn id(&self) -> ItemId {
        self.id
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    InStock { quantity: u32 },
    OutOfStock { is_on_back_order: bool },
}

impl Status {
    pub fn default_in_stock() -> Self {
        Status::InStock { quantity: 1 }
    }

    pub fn default_out_of_stock() -> Self {
        Status::OutOfStock {
            is_on_back_order: false,
        }
    }

    pub fn is_in_stock(&self) -> bool {
        matches!(self, Status::InStock { .. })
    }

    /// Single line summary used by list rows.
    pub fn describe(&self) -> String {
        match self {
            Status::InStock { quantity } => format!("In stock: {}", quantity),
            Status::OutOfStock {
                is_on_back_order: true,
            } => String::from("Out of stock: on back order"),
            Status::OutOfStock {
                is_on_back_order: false,
            } => String::from("Out of stock"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Black,
    Yellow,
    White,
}

impl Color {
    /// The palette in picker order.
    pub fn defaults() -> Vec<Color> {
        Color::iter().collect()
    }

    pub fn name(&self) -> String {
        self.to_string()
    }

    pub fn rgb(&self) -> (f32, f32, f32) {
        match self {
            Color::Red => (1.0, 0.0, 0.0),
            Color::Green => (0.0, 1.0, 0.0),
            Color::Blue => (0.0, 0.0, 1.0),
            Color::Black => (0.0, 0.0, 0.0),
            Color::Yellow => (1.0, 1.0, 0.0),
            Color::White => (1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_descriptions() {
        assert_eq!(Status::InStock { quantity: 20 }.describe(), "In stock: 20");
        assert_eq!(
            Status::OutOfStock {
                is_on_back_order: true
            }
            .describe(),
            "Out of stock: on back order"
        );
        assert_eq!(Status::default_out_of_stock().describe(), "Out of stock");
    }

    #[test]
    fn templates_get_distinct_ids() {
        let a = Item::add_template();
        let b = Item::add_template();
        assert_ne!(a.id(), b.id());
        assert_eq!(a.color, Some(Color::Black));
        assert_eq!(a.status, Status::InStock { quantity: 1 });
        assert_eq!(Item::blank().color, None);
    }

    #[test]
    fn palette_order() {
        assert_eq!(
            Color::defaults(),
            vec![
                Color::Red,
                Color::Green,
                Color::Blue,
                Color::Black,
                Color::Yellow,
                Color::White
            ]
        );
        assert_eq!(Color::Yellow.rgb(), (1.0, 1.0, 0.0));
        assert_eq!(Color::White.name(), "White");
    }

    #[test]
    fn cloned_item_keeps_identity() {
        let item = Item::new("Keyboard", Some(Color::Blue), Status::InStock { quantity: 100 });
        let mut copy = item.clone();
        copy.name = String::from("Mouse");
        assert_eq!(item.id(), copy.id());
        assert!(item.status.is_in_stock());
    }
}
