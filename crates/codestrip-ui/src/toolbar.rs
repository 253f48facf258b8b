//! iced adapter for the toolbar controller.
//!
//! Rendering rules:
//! - a control that is absent or hidden is not drawn
//! - a disabled control is drawn without `on_press`
//! - the debug control is highlighted while it carries the active marker
//! - the overflow list is drawn below the toolbar while the "more" menu is open

use iced::widget::{
    Column, Row, button, column, container, horizontal_space, pick_list, text, tooltip,
};
use iced::{Background, Border, Color, Element, Length, Padding, Theme};

use codestrip_core::{
    ClickEvent, Control, ControlId, Marker, ToolbarController, ToolbarError, ToolbarResult,
};

/// Controls in the order they are drawn, left of the view selector.
const LEADING: [ControlId; 6] = [
    ControlId::Save,
    ControlId::Undo,
    ControlId::Redo,
    ControlId::Debug,
    ControlId::Media,
    ControlId::Publish,
];

/// Controls drawn after the view selector.
const TRAILING: [ControlId; 3] = [ControlId::Expand, ControlId::ExpandExit, ControlId::MenuMore];

mod colors {
    use iced::Color;

    pub const BG: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_HOVER: Color = Color::from_rgb(0.22, 0.22, 0.25);
    pub const BG_ACTIVE: Color = Color::from_rgb(0.25, 0.25, 0.28);
    pub const ALERT: Color = Color::from_rgb(0.85, 0.30, 0.30);
    pub const TEXT: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_MUTED: Color = Color::from_rgb(0.45, 0.45, 0.48);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
}

/// Widget events produced by the toolbar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolbarMessage {
    Clicked(ControlId),
    ViewPicked(String),
    OptionActivated(usize),
}

/// Adapter-local state: where the toolbar sits and whether the overflow
/// list is open.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolbarAdapter {
    /// The toolbar is hosted in the split pane's second container
    pub in_secondary_pane: bool,
    pub menu_open: bool,
}

impl ToolbarAdapter {
    pub fn new(in_secondary_pane: bool) -> Self {
        Self {
            in_secondary_pane,
            menu_open: false,
        }
    }

    /// Forwards a widget event to the controller.
    pub fn update(
        &mut self,
        toolbar: &mut ToolbarController,
        message: ToolbarMessage,
    ) -> ToolbarResult<()> {
        match message {
            ToolbarMessage::Clicked(ControlId::MenuMore) => {
                self.menu_open = !self.menu_open;
                Ok(())
            }
            ToolbarMessage::Clicked(id) => {
                let event = ClickEvent {
                    in_secondary_pane: self.in_secondary_pane,
                };
                toolbar.click(id, &event)
            }
            ToolbarMessage::ViewPicked(name) => {
                let index = toolbar
                    .selector()
                    .items()
                    .iter()
                    .position(|item| *item == name)
                    .ok_or(ToolbarError::ViewNotFound(name))?;
                toolbar.select_view(index)
            }
            ToolbarMessage::OptionActivated(index) => {
                self.menu_open = false;
                toolbar.activate_option(index)
            }
        }
    }

    /// Draws the toolbar.
    pub fn view<'a>(&self, toolbar: &'a ToolbarController) -> Element<'a, ToolbarMessage> {
        let mut items: Vec<Element<'a, ToolbarMessage>> = Vec::new();

        for id in LEADING {
            if let Some(control) = drawable(toolbar, id) {
                items.push(control_button(control));
            }
        }

        let selector = toolbar.selector();
        if selector.host().is_some() {
            let picker = pick_list(
                selector.items(),
                selector.value().map(str::to_string),
                ToolbarMessage::ViewPicked,
            )
            .text_size(12)
            .padding(Padding::from([4, 8]));
            items.push(with_tooltip(picker.into(), selector.tooltip()));
        }

        items.push(horizontal_space().into());

        for id in TRAILING {
            if let Some(control) = drawable(toolbar, id) {
                items.push(control_button(control));
            }
        }

        let bar = container(
            Row::with_children(items)
                .spacing(4)
                .padding(Padding::from([4, 8]))
                .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BG)),
            border: Border {
                color: colors::BORDER,
                width: 1.0,
                radius: 0.0.into(),
            },
            ..Default::default()
        });

        if self.menu_open && drawable(toolbar, ControlId::MenuMore).is_some() {
            column![bar, self.view_options(toolbar)].into()
        } else {
            bar.into()
        }
    }

    fn view_options<'a>(&self, toolbar: &'a ToolbarController) -> Element<'a, ToolbarMessage> {
        let entries = toolbar.options().iter().enumerate().map(|(index, entry)| {
            let item = button(text(entry.name.as_str()).size(12))
                .padding(Padding::from([4, 12]))
                .width(Length::Fill)
                .style(|_: &Theme, status: button::Status| plain_style(status, colors::TEXT))
                .on_press(ToolbarMessage::OptionActivated(index));
            with_tooltip(item.into(), entry.tooltip.as_deref())
        });

        container(Column::with_children(entries).width(Length::Fixed(220.0)))
            .padding(4)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_ACTIVE)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 4.0.into(),
                },
                ..Default::default()
            })
            .into()
    }
}

fn drawable(toolbar: &ToolbarController, id: ControlId) -> Option<&Control> {
    toolbar.control(id).filter(|control| control.is_visible())
}

fn control_button<'a>(control: &Control) -> Element<'a, ToolbarMessage> {
    let enabled = control.is_enabled();
    let active = control.has_marker(Marker::Active);
    let greyed = control.has_marker(Marker::IconGrey);

    let label_color = if !enabled || greyed {
        colors::TEXT_MUTED
    } else if control.has_marker(Marker::AlertColor) {
        colors::ALERT
    } else {
        colors::TEXT
    };

    button(text(control.id().label()).size(12).color(label_color))
        .padding(Padding::from([4, 10]))
        .style(move |_: &Theme, status: button::Status| {
            let mut style = plain_style(status, label_color);
            if active {
                style.background = Some(Background::Color(colors::BG_ACTIVE));
            }
            style
        })
        .on_press_maybe(enabled.then_some(ToolbarMessage::Clicked(control.id())))
        .into()
}

fn plain_style(status: button::Status, text_color: Color) -> button::Style {
    let bg = match status {
        button::Status::Hovered => colors::BG_HOVER,
        _ => colors::BG,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color,
        border: Border {
            radius: 4.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

fn with_tooltip<'a>(
    content: Element<'a, ToolbarMessage>,
    tip: Option<&'a str>,
) -> Element<'a, ToolbarMessage> {
    match tip {
        Some(tip) => tooltip(content, text(tip).size(11), tooltip::Position::Bottom).into(),
        None => content,
    }
}
