//! Helpers that drive modal presentation from optional data instead of a
//! separate visibility flag.

use common::case_path::CasePath;
use iced::{Border, Element, Font, Theme, font::Weight, widget};

/// An optional value whose presence decides whether a dialog or sheet is on
/// screen.
#[derive(Debug, Clone, PartialEq)]
pub struct Presented<T>(Option<T>);

impl<T> Default for Presented<T> {
    fn default() -> Self {
        Self(None)
    }
}

impl<T> Presented<T> {
    pub fn none() -> Self {
        Self(None)
    }

    pub fn present(&mut self, value: T) {
        self.0 = Some(value);
    }

    pub fn is_presented(&self) -> bool {
        self.0.is_some()
    }

    /// Writing `false` clears the value. Writing `true` has nothing to
    /// present and leaves the value as is.
    pub fn set_presented(&mut self, presented: bool) {
        if !presented {
            self.0 = None;
        }
    }

    pub fn get(&self) -> Option<&T> {
        self.0.as_ref()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.0.as_mut()
    }

    pub fn take(&mut self) -> Option<T> {
        self.0.take()
    }

    pub fn dismiss(&mut self) {
        self.set_presented(false);
    }
}

impl<T> From<Option<T>> for Presented<T> {
    fn from(value: Option<T>) -> Self {
        Self(value)
    }
}

/// Overlays a confirmation dialog built from the presented value. A cancel
/// action and a backdrop click both emit `on_dismiss`.
pub fn confirmation_dialog<'a, T, Message>(
    base: impl Into<Element<'a, Message>>,
    presented: &'a Presented<T>,
    title: impl Fn(&T) -> String,
    message: impl Fn(&T) -> String,
    actions: impl Fn(&'a T) -> Vec<Element<'a, Message>>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some(value) = presented.get() else {
        return base.into();
    };
    let mut buttons = actions(value);
    buttons.push(
        widget::button("Cancel")
            .style(widget::button::secondary)
            .on_press(on_dismiss.clone())
            .into(),
    );
    let panel = dialog_panel(title(value), message(value), buttons);
    modal(base, panel, Some(on_dismiss))
}

/// Like [`confirmation_dialog`], but only the supplied actions close it.
pub fn alert<'a, T, Message>(
    base: impl Into<Element<'a, Message>>,
    presented: &'a Presented<T>,
    title: impl Fn(&T) -> String,
    actions: impl Fn(&'a T) -> Vec<Element<'a, Message>>,
    message: impl Fn(&T) -> String,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some(value) = presented.get() else {
        return base.into();
    };
    let panel = dialog_panel(title(value), message(value), actions(value));
    modal(base, panel, None)
}

pub fn sheet<'a, T, Message>(
    base: impl Into<Element<'a, Message>>,
    presented: &'a Presented<T>,
    content: impl FnOnce(&'a T) -> Element<'a, Message>,
    on_dismiss: Message,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let Some(value) = presented.get() else {
        return base.into();
    };
    let panel = widget::container(content(value))
        .width(480.0)
        .padding(16.0)
        .style(panel_style);
    modal(base, panel, Some(on_dismiss))
}

/// Renders `content` only while `root` is in the case named by `case_path`.
/// `content` receives the payload together with the function that embeds an
/// edited payload back into a whole `Root`.
pub fn if_case_let<'a, Root, Case, Message>(
    root: &Root,
    case_path: CasePath<Root, Case>,
    content: impl FnOnce(Case, fn(Case) -> Root) -> Element<'a, Message>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    match case_path.extract(root) {
        Some(case) => content(case, case_path.embedder()),
        None => widget::column![].into(),
    }
}

fn dialog_panel<'a, Message>(
    title: String,
    message: String,
    actions: Vec<Element<'a, Message>>,
) -> Element<'a, Message>
where
    Message: 'a,
{
    let mut bold = Font::DEFAULT;
    bold.weight = Weight::Bold;
    widget::container(
        widget::column![
            widget::text(title).font(bold).size(20.0),
            widget::text(message),
            widget::vertical_space().height(8.0),
            widget::row(actions).spacing(8.0),
        ]
        .spacing(8.0),
    )
    .width(360.0)
    .padding(16.0)
    .style(panel_style)
    .into()
}

fn modal<'a, Message>(
    base: impl Into<Element<'a, Message>>,
    content: impl Into<Element<'a, Message>>,
    on_dismiss: Option<Message>,
) -> Element<'a, Message>
where
    Message: Clone + 'a,
{
    let backdrop = widget::center(widget::opaque(content)).style(|_theme: &Theme| {
        widget::container::Style {
            background: Some(
                iced::Color {
                    a: 0.6,
                    ..iced::Color::BLACK
                }
                .into(),
            ),
            ..Default::default()
        }
    });
    let overlay: Element<'a, Message> = match on_dismiss {
        Some(message) => widget::mouse_area(backdrop).on_press(message).into(),
        None => backdrop.into(),
    };
    widget::stack![base.into(), widget::opaque(overlay)].into()
}

fn panel_style(theme: &Theme) -> widget::container::Style {
    let palette = theme.extended_palette();
    widget::container::Style {
        text_color: Some(palette.background.base.text),
        background: Some(palette.background.base.color.into()),
        border: Border::default().rounded(8.0),
        ..Default::default()
    }
}
