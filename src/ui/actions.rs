use iced::widget::{button, column};
use iced::{Element, Length};

use crate::Message;

const BUTTON_WIDTH: f32 = 160.0;

/// The four action buttons on the right of the window
pub fn view<'a>() -> Element<'a, Message> {
    column![
        action("Browse PDF Files", Message::BrowseFiles),
        action("Remove File", Message::RemoveFile),
        action("Run", Message::RunConversion),
        action("Rotate", Message::RotateFile),
    ]
    .spacing(20)
    .into()
}

fn action<'a>(label: &'a str, message: Message) -> Element<'a, Message> {
    button(label)
        .on_press(message)
        .width(Length::Fixed(BUTTON_WIDTH))
        .padding(10)
        .into()
}
