use iced::widget::{button, container, row, scrollable, text, tooltip, Column};
use iced::{Alignment, Element, Length, Theme};

use crate::state::data::{FileEntry, Preview};
use crate::state::file_list::FileList;
use crate::Message;

/// Scrollable list of loaded PDFs, one row per entry.
///
/// Rows are clickable only when `interactive` is set.
pub fn view(files: &FileList, thumbnail_size: u32, interactive: bool) -> Element<'_, Message> {
    if files.is_empty() {
        return container(text("No PDF files loaded. Use \"Browse PDF Files\" to add some."))
            .width(Length::Fill)
            .height(Length::Fill)
            .center_x(Length::Fill)
            .center_y(Length::Fill)
            .into();
    }

    let selected = files.selected_id();
    let rows = files.entries().iter().map(|entry| {
        file_row(
            entry,
            files.preview(entry.id),
            selected == Some(entry.id),
            thumbnail_size,
            interactive,
        )
    });

    scrollable(Column::with_children(rows).spacing(4).width(Length::Fill))
        .height(Length::Fill)
        .into()
}

fn file_row<'a>(
    entry: &'a FileEntry,
    preview: Option<&'a Preview>,
    selected: bool,
    thumbnail_size: u32,
    interactive: bool,
) -> Element<'a, Message> {
    let size = Length::Fixed(thumbnail_size as f32);

    let picture: Element<'a, Message> = match preview {
        Some(Preview::Ready(thumbnail)) => iced::widget::image(thumbnail.handle.clone())
            .width(Length::Fixed(thumbnail.width as f32))
            .height(Length::Fixed(thumbnail.height as f32))
            .into(),
        Some(Preview::Unavailable(reason)) => tooltip(
            placeholder(size),
            container(text(reason.as_str()).size(12))
                .padding(6)
                .style(container::rounded_box),
            tooltip::Position::Bottom,
        )
        .into(),
        None => placeholder(size),
    };

    let style: fn(&Theme, button::Status) -> button::Style = if selected {
        button::primary
    } else {
        button::text
    };

    button(
        row![picture, text(entry.filename()).size(16)]
            .spacing(12)
            .align_y(Alignment::Center),
    )
    .on_press_maybe(interactive.then_some(Message::SelectFile(entry.id)))
    .width(Length::Fill)
    .padding(6)
    .style(style)
    .into()
}

fn placeholder<'a>(size: Length) -> Element<'a, Message> {
    container(text("No preview").size(12))
        .center_x(size)
        .center_y(size)
        .style(container::bordered_box)
        .into()
}
