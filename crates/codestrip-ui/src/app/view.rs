use iced::widget::{Column, Row, button, column, container, horizontal_space, pick_list, row, text, text_editor};
use iced::{Background, Border, Color, Element, Length, Padding};

use codestrip_core::MimeType;

use crate::app::{App, Message};

mod colors {
    use iced::Color;

    pub const BG_DARK: Color = Color::from_rgb(0.11, 0.11, 0.13);
    pub const BG_MEDIUM: Color = Color::from_rgb(0.14, 0.14, 0.16);
    pub const BG_LIGHT: Color = Color::from_rgb(0.18, 0.18, 0.20);
    pub const TEXT_PRIMARY: Color = Color::from_rgb(0.93, 0.93, 0.93);
    pub const TEXT_SECONDARY: Color = Color::from_rgb(0.65, 0.65, 0.68);
    pub const BORDER: Color = Color::from_rgb(0.25, 0.25, 0.28);
}

impl App {
    pub fn view(&self) -> Element<'_, Message> {
        let toolbar = self.adapter.view(&self.toolbar).map(Message::Toolbar);

        let editor = container(
            text_editor(&self.content)
                .on_action(Message::EditorAction)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(8);

        let mut main = Row::new().push(editor).height(Length::Fill);
        if !self.layout.is_fullscreen() {
            main = main.push(self.view_side_panel());
        }

        container(column![toolbar, main, self.view_status_bar()])
            .width(Length::Fill)
            .height(Length::Fill)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_DARK)),
                ..Default::default()
            })
            .into()
    }

    fn view_side_panel(&self) -> Element<'_, Message> {
        let mut items: Vec<Element<'_, Message>> = vec![
            info_line("View", self.toolbar.current_view().to_string()),
            info_line(
                "Syntax check",
                if self.editor.syntax_check_enabled() { "on" } else { "off" }.to_string(),
            ),
            info_line("Saves", self.saver.saves().to_string()),
            info_line("Exports", self.exporter.exports().to_string()),
        ];

        if self.library.is_open() {
            items.push(
                column![
                    text("Media library").size(13).color(colors::TEXT_PRIMARY),
                    text("No media files yet").size(12).color(colors::TEXT_SECONDARY),
                    button(text("Close").size(12)).on_press(Message::CloseLibrary),
                ]
                .spacing(6)
                .into(),
            );
        }

        container(Column::with_children(items).spacing(8))
            .width(Length::Fixed(220.0))
            .height(Length::Fill)
            .padding(12)
            .style(|_| container::Style {
                background: Some(Background::Color(colors::BG_LIGHT)),
                border: Border {
                    color: colors::BORDER,
                    width: 1.0,
                    radius: 0.0.into(),
                },
                ..Default::default()
            })
            .into()
    }

    fn view_status_bar(&self) -> Element<'_, Message> {
        let modes = pick_list(MimeType::ALL, Some(self.mode), Message::ModeSelected)
            .text_size(11)
            .padding(Padding::from([2, 6]));

        container(
            row![
                text(self.status_message.as_str()).size(11).color(colors::TEXT_SECONDARY),
                horizontal_space(),
                modes,
            ]
            .spacing(8)
            .align_y(iced::Alignment::Center),
        )
        .width(Length::Fill)
        .padding(Padding::from([2, 8]))
        .style(|_| container::Style {
            background: Some(Background::Color(colors::BG_MEDIUM)),
            text_color: Some(Color::WHITE),
            ..Default::default()
        })
        .into()
    }
}

fn info_line(label: &str, value: String) -> Element<'static, Message> {
    row![
        text(label.to_string()).size(12).color(colors::TEXT_SECONDARY),
        horizontal_space(),
        text(value).size(12).color(colors::TEXT_PRIMARY),
    ]
    .into()
}
