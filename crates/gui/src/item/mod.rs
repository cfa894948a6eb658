use std::fmt;

use common::models::{Color, Status};

pub mod widget;

#[derive(Debug, Clone, PartialEq)]
pub enum ItemMessage {
    Name(String),
    Color(ColorChoice),
    IncrementQuantity,
    DecrementQuantity,
    MarkSoldOut,
    BackInStock,
    Status(Status),
}

/// Entry of the color picker. `ColorChoice(None)` is the "None" row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorChoice(pub Option<Color>);

impl ColorChoice {
    pub fn all() -> Vec<ColorChoice> {
        std::iter::once(ColorChoice(None))
            .chain(Color::defaults().into_iter().map(|c| ColorChoice(Some(c))))
            .collect()
    }
}

impl fmt::Display for ColorChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(color) => write!(f, "{}", color.name()),
            None => write!(f, "None"),
        }
    }
}
