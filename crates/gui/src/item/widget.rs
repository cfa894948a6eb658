use common::models::{Item, Status};
use iced::{Alignment, Border, Element, Font, Length, Theme, font::Weight, widget};
use tracing::debug;

use crate::presentation::if_case_let;

use super::{ColorChoice, ItemMessage};

/// Edit form for a single item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemForm {
    item: Item,
}

impl Default for ItemForm {
    fn default() -> Self {
        Self::new(Item::blank())
    }
}

impl ItemForm {
    pub fn new(item: Item) -> Self {
        Self { item }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn into_item(self) -> Item {
        self.item
    }

    pub fn update(&mut self, msg: ItemMessage) -> iced::Task<ItemMessage> {
        Self::apply(&mut self.item, msg);
        iced::Task::none()
    }

    /// Applies one form edit to `item`. Quantity edits are ignored while the
    /// item is out of stock, and the back order flag is ignored while it is
    /// in stock. `Status` only rewrites the payload of the active case; case
    /// switches go through `MarkSoldOut` and `BackInStock`.
    pub fn apply(item: &mut Item, msg: ItemMessage) {
        debug!("Editing {}: {:?}", item.id(), msg);
        match msg {
            ItemMessage::Name(name) => item.name = name,
            ItemMessage::Color(choice) => item.color = choice.0,
            ItemMessage::IncrementQuantity => {
                Status::IN_STOCK.modify(&mut item.status, |q| *q = q.saturating_add(1));
            }
            ItemMessage::DecrementQuantity => {
                Status::IN_STOCK.modify(&mut item.status, |q| *q = q.saturating_sub(1));
            }
            ItemMessage::MarkSoldOut => {
                if item.status.is_in_stock() {
                    item.status = Status::default_out_of_stock();
                }
            }
            ItemMessage::BackInStock => {
                if !item.status.is_in_stock() {
                    item.status = Status::default_in_stock();
                }
            }
            ItemMessage::Status(status) => {
                if std::mem::discriminant(&status) == std::mem::discriminant(&item.status) {
                    item.status = status;
                }
            }
        }
    }

    pub fn view(&self) -> Element<'_, ItemMessage> {
        item_form(&self.item)
    }
}

pub fn item_form(item: &Item) -> Element<'_, ItemMessage> {
    let in_stock = if_case_let(&item.status, Status::IN_STOCK, |quantity, _embed| {
        section(
            "In stock",
            widget::column![
                widget::row![
                    widget::text(format!("Quantity: {}", quantity)).width(Length::Fill),
                    widget::button(widget::text("-").align_x(Alignment::Center))
                        .width(32.0)
                        .on_press_maybe((quantity > 0).then_some(ItemMessage::DecrementQuantity)),
                    widget::button(widget::text("+").align_x(Alignment::Center))
                        .width(32.0)
                        .on_press(ItemMessage::IncrementQuantity),
                ]
                .spacing(4.0)
                .align_y(Alignment::Center),
                widget::button("Mark as sold out").on_press(ItemMessage::MarkSoldOut),
            ]
            .spacing(8.0),
        )
    });

    let out_of_stock = if_case_let(
        &item.status,
        Status::OUT_OF_STOCK,
        |is_on_back_order, embed| {
            section(
                "Out of stock",
                widget::column![
                    widget::row![
                        widget::text("Is on back order").width(Length::Fill),
                        widget::toggler(is_on_back_order)
                            .on_toggle(move |b| ItemMessage::Status(embed(b))),
                    ]
                    .align_y(Alignment::Center),
                    widget::button("Is back in stock!").on_press(ItemMessage::BackInStock),
                ]
                .spacing(8.0),
            )
        },
    );

    widget::column![
        widget::text_input("Name", &item.name).on_input(ItemMessage::Name),
        widget::row![
            widget::text("Color").width(Length::Fill),
            widget::pick_list(
                ColorChoice::all(),
                Some(ColorChoice(item.color)),
                ItemMessage::Color
            ),
        ]
        .align_y(Alignment::Center),
        in_stock,
        out_of_stock,
    ]
    .spacing(12.0)
    .into()
}

fn section<'a>(
    header: &'a str,
    content: impl Into<Element<'a, ItemMessage>>,
) -> Element<'a, ItemMessage> {
    let mut bold = Font::DEFAULT;
    bold.weight = Weight::Bold;
    widget::column![
        widget::text(header).font(bold).style(|theme: &Theme| {
            let palette = theme.extended_palette();
            widget::text::Style {
                color: palette.primary.strong.color.into(),
            }
        }),
        widget::container(content)
            .width(Length::Fill)
            .padding(8.0)
            .style(|theme: &Theme| {
                let palette = theme.extended_palette();
                widget::container::Style {
                    background: Some(palette.background.weak.color.into()),
                    border: Border::default().rounded(8.0),
                    ..Default::default()
                }
            }),
    ]
    .spacing(4.0)
    .into()
}
