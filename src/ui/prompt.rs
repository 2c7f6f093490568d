/// Free-text prompt for the "Other" tag
use iced::widget::{button, column, row, text, text_input};
use iced::{Element, Length};

use crate::Message;

pub fn input_id() -> text_input::Id {
    text_input::Id::new("custom-tag")
}

pub fn view(input: &str) -> Element<'_, Message> {
    column![
        text("Enter custom name:"),
        text_input("Custom name", input)
            .id(input_id())
            .on_input(Message::PromptChanged)
            .on_submit(Message::PromptSubmitted)
            .padding(8)
            .width(Length::Fixed(160.0)),
        row![
            button("OK").on_press(Message::PromptSubmitted),
            button("Cancel")
                .on_press(Message::PromptCancelled)
                .style(button::secondary),
        ]
        .spacing(10),
    ]
    .spacing(10)
    .into()
}
