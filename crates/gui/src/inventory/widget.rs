use common::{
    inventory::Inventory,
    models::{Color, Item, ItemId},
};
use iced::{Alignment, Border, Element, Font, Length, Theme, font::Weight, widget};
use tracing::{debug, info, warn};

use crate::{
    icons,
    item::widget::{ItemForm, item_form},
    presentation::{Presented, alert, confirmation_dialog, sheet},
};

use super::{DeletePrompt, InventoryMessage};

const SWATCH_SIZE: f32 = 30.0;

#[derive(Debug)]
pub struct InventoryView {
    inventory: Inventory,
    item_to_delete: Presented<Item>,
    item_to_add: Presented<ItemForm>,
    editing: Option<ItemId>,
    delete_prompt: DeletePrompt,
}

impl InventoryView {
    pub fn new(inventory: Inventory, delete_prompt: DeletePrompt) -> Self {
        Self {
            inventory,
            item_to_delete: Presented::none(),
            item_to_add: Presented::none(),
            editing: None,
            delete_prompt,
        }
    }

    pub fn update(&mut self, msg: InventoryMessage) -> iced::Task<InventoryMessage> {
        match msg {
            InventoryMessage::DeleteButtonTapped(id) => {
                match self.inventory.get(id) {
                    Some(item) => self.item_to_delete.present(item.clone()),
                    None => warn!("Delete requested for unknown item {}", id),
                }
                iced::Task::none()
            }
            InventoryMessage::ConfirmDelete(id) => {
                if let Some(item) = self.inventory.remove(id) {
                    info!("Deleted {} ({})", item.name, id);
                }
                if self.editing == Some(id) {
                    self.editing = None;
                }
                self.item_to_delete.dismiss();
                iced::Task::none()
            }
            InventoryMessage::CancelDelete => {
                self.item_to_delete.dismiss();
                iced::Task::none()
            }
            InventoryMessage::AddButtonTapped => {
                self.item_to_add.present(ItemForm::new(Item::add_template()));
                iced::Task::none()
            }
            InventoryMessage::AddForm(msg) => match self.item_to_add.get_mut() {
                Some(form) => form.update(msg).map(InventoryMessage::AddForm),
                None => iced::Task::none(),
            },
            InventoryMessage::ConfirmAdd => {
                if let Some(form) = self.item_to_add.take() {
                    let item = form.into_item();
                    info!("Added {} ({})", item.name, item.id());
                    self.inventory.append(item);
                    self.editing = None;
                }
                iced::Task::none()
            }
            InventoryMessage::CancelAdd => {
                self.item_to_add.dismiss();
                iced::Task::none()
            }
            InventoryMessage::Edit(id) => {
                if self.inventory.contains(id) {
                    debug!("Opening editor for {}", id);
                    self.editing = Some(id);
                } else {
                    warn!("Edit requested for unknown item {}", id);
                }
                iced::Task::none()
            }
            InventoryMessage::EditItem(id, msg) => {
                if !self
                    .inventory
                    .update(id, |item| ItemForm::apply(item, msg))
                {
                    warn!("Dropped edit for unknown item {}", id);
                }
                iced::Task::none()
            }
            InventoryMessage::CloseEdit => {
                self.editing = None;
                iced::Task::none()
            }
        }
    }

    pub fn view(&self) -> Element<'_, InventoryMessage> {
        let content = match self.editing.and_then(|id| self.inventory.get(id)) {
            Some(item) => self.view_editor(item),
            None => self.view_list(),
        };

        let content = widget::container(content)
            .height(Length::Fill)
            .width(Length::Fill)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                widget::container::Style {
                    text_color: Some(palette.background.weak.text),
                    background: Some(palette.background.weak.color.into()),
                    border: Border::default().rounded(8.0),
                    ..Default::default()
                }
            })
            .padding(16.0);

        let with_delete = match self.delete_prompt {
            DeletePrompt::Dialog => confirmation_dialog(
                content,
                &self.item_to_delete,
                delete_title,
                delete_message,
                delete_actions,
                InventoryMessage::CancelDelete,
            ),
            DeletePrompt::Alert => alert(
                content,
                &self.item_to_delete,
                delete_title,
                |item| {
                    let mut actions = delete_actions(item);
                    actions.push(
                        widget::button("Cancel")
                            .style(widget::button::secondary)
                            .on_press(InventoryMessage::CancelDelete)
                            .into(),
                    );
                    actions
                },
                delete_message,
            ),
        };

        sheet(
            with_delete,
            &self.item_to_add,
            |form| {
                widget::column![
                    widget::row![
                        widget::button("Cancel")
                            .style(widget::button::secondary)
                            .on_press(InventoryMessage::CancelAdd),
                        widget::text("New item")
                            .width(Length::Fill)
                            .align_x(Alignment::Center),
                        widget::button("Add").on_press(InventoryMessage::ConfirmAdd),
                    ]
                    .align_y(Alignment::Center),
                    form.view().map(InventoryMessage::AddForm),
                ]
                .spacing(16.0)
                .into()
            },
            InventoryMessage::CancelAdd,
        )
    }

    fn view_list(&self) -> Element<'_, InventoryMessage> {
        let header = widget::row![
            widget::text("Inventory").width(Length::Fill).size(36.0),
            widget::button(icon(icons::plus())).on_press(InventoryMessage::AddButtonTapped),
        ]
        .align_y(Alignment::Center);

        let rows = self
            .inventory
            .iter()
            .map(|item| -> Element<'_, InventoryMessage> {
                let text_style: fn(&Theme) -> widget::text::Style = if item.status.is_in_stock() {
                    widget::text::default
                } else {
                    muted_text
                };
                let mut row = widget::row![
                    widget::button(
                        widget::column![
                            widget::text(&item.name).style(text_style),
                            widget::text(item.status.describe()).size(14.0).style(text_style),
                        ]
                        .spacing(2.0)
                    )
                    .style(widget::button::text)
                    .width(Length::Fill)
                    .on_press(InventoryMessage::Edit(item.id())),
                ]
                .spacing(16.0)
                .align_y(Alignment::Center);
                if let Some(color) = item.color {
                    row = row.push(swatch(color));
                }
                row.push(
                    widget::button(icon(icons::trash()))
                        .style(widget::button::text)
                        .on_press(InventoryMessage::DeleteButtonTapped(item.id())),
                )
                .into()
            });

        let list: Element<'_, InventoryMessage> = if self.inventory.is_empty() {
            widget::container(widget::text("No items").style(muted_text))
                .center_x(Length::Fill)
                .into()
        } else {
            widget::scrollable(widget::column(rows).spacing(8.0))
                .height(Length::Fill)
                .into()
        };

        widget::column![header, widget::horizontal_rule(4.0), list]
            .spacing(8.0)
            .into()
    }

    fn view_editor<'a>(&'a self, item: &'a Item) -> Element<'a, InventoryMessage> {
        let id = item.id();
        let mut bold = Font::DEFAULT;
        bold.weight = Weight::Bold;
        let title = if item.name.is_empty() {
            "Untitled"
        } else {
            item.name.as_str()
        };
        widget::column![
            widget::row![
                widget::button("Back")
                    .style(widget::button::secondary)
                    .on_press(InventoryMessage::CloseEdit),
                widget::text(title).font(bold).size(24.0),
            ]
            .spacing(16.0)
            .align_y(Alignment::Center),
            widget::horizontal_rule(4.0),
            item_form(item).map(move |msg| InventoryMessage::EditItem(id, msg)),
        ]
        .spacing(8.0)
        .into()
    }
}

#[cfg(test)]
impl InventoryView {
    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    pub fn item_to_delete(&self) -> Option<&Item> {
        self.item_to_delete.get()
    }

    pub fn item_to_add(&self) -> Option<&Item> {
        self.item_to_add.get().map(ItemForm::item)
    }

    pub fn editing(&self) -> Option<ItemId> {
        self.editing
    }
}

fn delete_title(item: &Item) -> String {
    item.name.clone()
}

fn delete_message(item: &Item) -> String {
    format!("Are you sure you want to delete {}?", item.name)
}

fn delete_actions(item: &Item) -> Vec<Element<'_, InventoryMessage>> {
    vec![
        widget::button("Delete")
            .style(widget::button::danger)
            .on_press(InventoryMessage::ConfirmDelete(item.id()))
            .into(),
    ]
}

fn icon<'a>(handle: widget::svg::Handle) -> Element<'a, InventoryMessage> {
    widget::svg(handle)
        .width(18.0)
        .height(18.0)
        .style(|theme: &Theme, _status| {
            let palette = theme.extended_palette();
            widget::svg::Style {
                color: Some(palette.background.base.text),
            }
        })
        .into()
}

fn swatch<'a>(color: Color) -> Element<'a, InventoryMessage> {
    let (r, g, b) = color.rgb();
    widget::container("")
        .width(SWATCH_SIZE)
        .height(SWATCH_SIZE)
        .style(move |_theme: &Theme| widget::container::Style {
            background: Some(iced::Color::from_rgb(r, g, b).into()),
            border: Border {
                color: iced::Color::BLACK,
                width: 1.0,
                radius: iced::border::Radius::from(0.0),
            },
            ..Default::default()
        })
        .into()
}

fn muted_text(theme: &Theme) -> widget::text::Style {
    let palette = theme.extended_palette();
    widget::text::Style {
        color: palette.background.strong.color.into(),
    }
}

#[cfg(test)]
mod tests {
    use common::models::Status;

    use super::*;
    use crate::item::ItemMessage;

    fn view() -> InventoryView {
        InventoryView::new(
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
            ]),
            DeletePrompt::Dialog,
        )
    }

    fn id_of(view: &InventoryView, name: &str) -> ItemId {
        view.inventory()
            .iter()
            .find(|i| i.name == name)
            .map(Item::id)
            .unwrap()
    }

    #[test]
    fn confirmed_delete_removes_target() {
        let mut view = view();
        let phone = id_of(&view, "Phone");

        let _ = view.update(InventoryMessage::DeleteButtonTapped(phone));
        assert_eq!(view.item_to_delete().map(Item::id), Some(phone));
        assert_eq!(view.inventory().len(), 3);

        let _ = view.update(InventoryMessage::ConfirmDelete(phone));
        assert!(view.item_to_delete().is_none());
        assert!(!view.inventory().contains(phone));
        let names: Vec<_> = view.inventory().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Charger", "Headphones"]);
    }

    #[test]
    fn cancelled_delete_keeps_inventory() {
        let mut view = view();
        let before = view.inventory().clone();
        let _ = view.update(InventoryMessage::DeleteButtonTapped(id_of(&view, "Charger")));
        let _ = view.update(InventoryMessage::CancelDelete);
        assert!(view.item_to_delete().is_none());
        assert_eq!(view.inventory(), &before);
    }

    #[test]
    fn add_flow_appends_edited_item() {
        let mut view = view();
        let _ = view.update(InventoryMessage::AddButtonTapped);
        let pending = view.item_to_add().cloned().unwrap();
        assert_eq!(pending.color, Some(Color::Black));
        assert_eq!(view.inventory().len(), 3);

        let _ = view.update(InventoryMessage::AddForm(ItemMessage::Name(String::from(
            "Keyboard",
        ))));
        let _ = view.update(InventoryMessage::AddForm(ItemMessage::IncrementQuantity));
        let _ = view.update(InventoryMessage::ConfirmAdd);

        assert!(view.item_to_add().is_none());
        assert_eq!(view.inventory().len(), 4);
        let added = view.inventory().iter().last().unwrap();
        assert_eq!(added.id(), pending.id());
        assert_eq!(added.name, "Keyboard");
        assert_eq!(added.status, Status::InStock { quantity: 2 });
    }

    #[test]
    fn cancelled_add_leaves_inventory() {
        let mut view = view();
        let _ = view.update(InventoryMessage::AddButtonTapped);
        let _ = view.update(InventoryMessage::CancelAdd);
        assert!(view.item_to_add().is_none());
        assert_eq!(view.inventory().len(), 3);
    }

    #[test]
    fn edits_mutate_in_place() {
        let mut view = view();
        let phone = id_of(&view, "Phone");
        let _ = view.update(InventoryMessage::Edit(phone));
        assert_eq!(view.editing(), Some(phone));

        let _ = view.update(InventoryMessage::EditItem(phone, ItemMessage::BackInStock));
        let _ = view.update(InventoryMessage::EditItem(
            phone,
            ItemMessage::Color(crate::item::ColorChoice(None)),
        ));
        let names: Vec<_> = view.inventory().iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["Charger", "Phone", "Headphones"]);
        let item = view.inventory().get(phone).unwrap();
        assert_eq!(item.status, Status::InStock { quantity: 1 });
        assert_eq!(item.color, None);

        let _ = view.update(InventoryMessage::CloseEdit);
        assert_eq!(view.editing(), None);
    }

    #[test]
    fn deleting_edited_item_closes_editor() {
        let mut view = view();
        let charger = id_of(&view, "Charger");
        let _ = view.update(InventoryMessage::Edit(charger));
        let _ = view.update(InventoryMessage::ConfirmDelete(charger));
        assert_eq!(view.editing(), None);
        let _ = view.update(InventoryMessage::EditItem(
            charger,
            ItemMessage::Name(String::from("Ghost")),
        ));
        assert_eq!(view.inventory().len(), 2);
    }

    #[test]
    fn unknown_ids_are_ignored() {
        let mut view = view();
        let _ = view.update(InventoryMessage::DeleteButtonTapped(ItemId::new()));
        assert!(view.item_to_delete().is_none());
        let _ = view.update(InventoryMessage::Edit(ItemId::new()));
        assert_eq!(view.editing(), None);
    }

    #[test]
    fn delete_prompt_text() {
        let view = view();
        let phone = view.inventory().get(id_of(&view, "Phone")).unwrap();
        assert_eq!(delete_title(phone), "Phone");
        assert_eq!(
            delete_message(phone),
            "Are you sure you want to delete Phone?"
        );
    }

    #[test]
    fn alert_prompt_delete_and_cancel() {
        let mut view = InventoryView::new(
            Inventory::from_items(vec![
                Item::new("Charger", Some(Color::Yellow), Status::InStock { quantity: 20 }),
                Item::new("Phone", Some(Color::Green), Status::default_out_of_stock()),
            ]),
            DeletePrompt::Alert,
        );
        let charger = id_of(&view, "Charger");
        let phone = id_of(&view, "Phone");

        let _ = view.update(InventoryMessage::DeleteButtonTapped(charger));
        let _ = view.view();
        let _ = view.update(InventoryMessage::CancelDelete);
        assert!(view.item_to_delete().is_none());
        assert_eq!(view.inventory().len(), 2);

        let _ = view.update(InventoryMessage::DeleteButtonTapped(phone));
        assert_eq!(view.item_to_delete().map(Item::id), Some(phone));
        let _ = view.view();
        let _ = view.update(InventoryMessage::ConfirmDelete(phone));
        assert!(view.item_to_delete().is_none());
        assert!(!view.inventory().contains(phone));
        assert!(view.inventory().contains(charger));
    }

    #[test]
    fn confirmed_add_closes_editor() {
        let mut view = view();
        let _ = view.update(InventoryMessage::Edit(id_of(&view, "Charger")));
        let _ = view.update(InventoryMessage::AddButtonTapped);
        let added = view.item_to_add().map(Item::id).unwrap();
        let _ = view.update(InventoryMessage::ConfirmAdd);
        assert_eq!(view.editing(), None);
        assert!(view.inventory().contains(added));
        assert_eq!(view.inventory().len(), 4);
    }
}
