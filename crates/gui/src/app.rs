use clap::ValueEnum;
use common::inventory::Inventory;
use iced::{Alignment, Element, Length, Subscription, Theme, event, keyboard, widget};
use tracing::{debug, error};

use crate::{
    CONFIG, icons,
    inventory::{DeletePrompt, InventoryMessage, widget::InventoryView},
};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AppTab {
    #[default]
    One,
    Two,
    Three,
    Inventory,
}

/// Tabs shown in the tab bar. `Two` is only reachable through key bindings.
const TAB_BAR: [(AppTab, &str); 3] = [
    (AppTab::One, "One"),
    (AppTab::Inventory, "Inventory"),
    (AppTab::Three, "Three"),
];

#[derive(Debug)]
pub struct App {
    pub dark_mode: bool,
    selected_tab: AppTab,
    inventory: InventoryView,
}

impl App {
    pub fn new(
        selected_tab: AppTab,
        inventory: Inventory,
        dark_mode: bool,
        delete_prompt: DeletePrompt,
    ) -> Self {
        Self {
            dark_mode,
            selected_tab,
            inventory: InventoryView::new(inventory, delete_prompt),
        }
    }

    pub fn update(&mut self, message: AppMessage) -> iced::Task<AppMessage> {
        match message {
            AppMessage::Tab(tab) => {
                debug!("Switching to tab {:?}", tab);
                self.selected_tab = tab;
                iced::Task::none()
            }
            AppMessage::Inventory(msg) => {
                if matches!(msg, InventoryMessage::AddButtonTapped) {
                    self.selected_tab = AppTab::Inventory;
                }
                self.inventory.update(msg).map(AppMessage::Inventory)
            }
            AppMessage::Key(event) => {
                let action = match CONFIG.write() {
                    Ok(mut config) => config.keyboard.dispatch(&event).copied(),
                    Err(e) => {
                        error!("Config lock poisoned: {}", e);
                        None
                    }
                };
                match action {
                    Some(action) => iced::Task::done(action.into()),
                    None => iced::Task::none(),
                }
            }
            AppMessage::ToggleTheme => {
                self.dark_mode = !self.dark_mode;
                iced::Task::none()
            }
            AppMessage::Quit => iced::exit(),
        }
    }

    pub fn view(&self) -> Element<'_, AppMessage> {
        let content: Element<'_, AppMessage> = match self.selected_tab {
            AppTab::One => placeholder(iced::Color::from_rgb(1.0, 0.0, 0.0)),
            AppTab::Two => placeholder(iced::Color::from_rgb(0.0, 1.0, 0.0)),
            AppTab::Three => placeholder(iced::Color::from_rgb(0.0, 0.0, 1.0)),
            AppTab::Inventory => self.inventory.view().map(AppMessage::Inventory),
        };

        let tabs = TAB_BAR.iter().map(|&(tab, label)| -> Element<'_, AppMessage> {
            let icon = match tab {
                AppTab::One | AppTab::Two => icons::bell(),
                AppTab::Three => icons::wrench(),
                AppTab::Inventory => icons::clipboard_list(),
            };
            widget::button(
                widget::column![
                    widget::svg(icon).width(20.0).height(20.0).style(
                        |theme: &Theme, _status| {
                            let palette = theme.extended_palette();
                            widget::svg::Style {
                                color: Some(palette.background.base.text),
                            }
                        }
                    ),
                    widget::text(label).size(12.0),
                ]
                .align_x(Alignment::Center),
            )
            .style(if tab == self.selected_tab {
                widget::button::primary
            } else {
                widget::button::text
            })
            .width(Length::Fill)
            .on_press(AppMessage::Tab(tab))
            .into()
        });

        widget::column![
            widget::container(content)
                .width(Length::Fill)
                .height(Length::Fill)
                .padding(8.0),
            widget::horizontal_rule(1.0),
            widget::row(tabs).spacing(8.0).padding(8.0),
        ]
        .into()
    }

    pub fn subscription(&self) -> Subscription<AppMessage> {
        event::listen_with(|event, status, _window| match (event, status) {
            (iced::Event::Keyboard(event), event::Status::Ignored) => Some(AppMessage::Key(event)),
            _ => None,
        })
    }
}

#[cfg(test)]
impl App {
    pub fn selected_tab(&self) -> AppTab {
        self.selected_tab
    }

    pub fn inventory(&self) -> &InventoryView {
        &self.inventory
    }
}

fn placeholder<'a>(color: iced::Color) -> Element<'a, AppMessage> {
    widget::container("")
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme: &Theme| widget::container::Style {
            background: Some(color.into()),
            ..Default::default()
        })
        .into()
}

#[derive(Debug, Clone)]
pub enum AppMessage {
    Tab(AppTab),
    Inventory(InventoryMessage),
    Key(keyboard::Event),
    ToggleTheme,
    Quit,
}

impl From<InventoryMessage> for AppMessage {
    fn from(value: InventoryMessage) -> Self {
        AppMessage::Inventory(value)
    }
}

#[cfg(test)]
mod tests {
    use common::sample::sample_inventory;

    use super::*;

    fn app() -> App {
        App::new(
            AppTab::default(),
            sample_inventory().unwrap(),
            true,
            DeletePrompt::Dialog,
        )
    }

    #[test]
    fn starts_on_first_tab() {
        assert_eq!(app().selected_tab(), AppTab::One);
    }

    #[test]
    fn tab_switching() {
        let mut app = app();
        let _ = app.update(AppMessage::Tab(AppTab::Inventory));
        assert_eq!(app.selected_tab(), AppTab::Inventory);
        let _ = app.update(AppMessage::Tab(AppTab::Two));
        assert_eq!(app.selected_tab(), AppTab::Two);
    }

    #[test]
    fn add_shortcut_opens_inventory_sheet() {
        let mut app = app();
        let _ = app.update(InventoryMessage::AddButtonTapped.into());
        assert_eq!(app.selected_tab(), AppTab::Inventory);
        assert!(app.inventory().item_to_add().is_some());
        assert_eq!(app.inventory().inventory().len(), 4);

        let _ = app.update(AppMessage::Inventory(InventoryMessage::ConfirmAdd));
        assert_eq!(app.inventory().inventory().len(), 5);
    }

    #[test]
    fn toggle_theme() {
        let mut app = app();
        let _ = app.update(AppMessage::ToggleTheme);
        assert!(!app.dark_mode);
    }
}
