use common::models::ItemId;
use strum::EnumString;

use crate::item::ItemMessage;

pub mod widget;

#[derive(Debug, Clone)]
pub enum InventoryMessage {
    DeleteButtonTapped(ItemId),
    ConfirmDelete(ItemId),
    CancelDelete,
    AddButtonTapped,
    AddForm(ItemMessage),
    ConfirmAdd,
    CancelAdd,
    Edit(ItemId),
    EditItem(ItemId, ItemMessage),
    CloseEdit,
}

/// How a pending deletion is confirmed.
#[derive(Debug, Default, EnumString, Clone, Copy, PartialEq, Eq)]
pub enum DeletePrompt {
    /// Dismissable dialog with a cancel action.
    #[default]
    Dialog,
    /// Alert that stays until one of its buttons is pressed.
    Alert,
}
