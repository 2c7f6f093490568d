use iced::widget::{radio, text, Column};
use iced::Element;

use crate::state::tag::Tag;
use crate::Message;

/// One radio button per tag; at most one is active
pub fn view<'a>(active: Option<Tag>) -> Element<'a, Message> {
    let radios = Tag::ALL
        .into_iter()
        .map(|tag| -> Element<'a, Message> {
            radio(tag.label(), tag, active, Message::TagSelected).into()
        });

    Column::with_children(radios)
        .push(text(hint(active)).size(12))
        .spacing(8)
        .into()
}

fn hint(active: Option<Tag>) -> &'static str {
    match active {
        None => "No tag: files keep their name",
        Some(tag) if tag.needs_prompt() => "You will be asked for a name",
        Some(_) => "Named after the folder",
    }
}
