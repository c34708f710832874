//! Fixed-coordinate page layout in PDF points, origin at the bottom left.

use std::borrow::Cow;

use printpdf::lopdf::Document;

pub const PAGE_WIDTH: f32 = 595.2756;
pub const PAGE_HEIGHT: f32 = 841.8898;

pub const LEFT_MARGIN: f32 = 50.0;
pub const BOTTOM_LIMIT: f32 = 50.0;
pub const TITLE_TOP_OFFSET: f32 = 50.0;
pub const BODY_TOP_OFFSET: f32 = 80.0;
pub const CONTINUATION_TOP_OFFSET: f32 = 50.0;
pub const LINE_HEIGHT: f32 = 15.0;

pub const TITLE_FONT_SIZE: f32 = 16.0;
pub const BODY_FONT_SIZE: f32 = 11.0;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FontStyle {
    Regular,
    Bold,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PlacedText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub style: FontStyle,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Page {
    pub items: Vec<PlacedText>,
}

/// Places the title on the first page and the lines below it, starting a new
/// page whenever the next line would fall under the bottom limit. Always
/// returns at least one page.
pub fn layout(title: &str, lines: &[String]) -> Vec<Page> {
    let mut pages = vec![Page {
        items: vec![PlacedText {
            text: encodable(title).into_owned(),
            x: LEFT_MARGIN,
            y: PAGE_HEIGHT - TITLE_TOP_OFFSET,
            size: TITLE_FONT_SIZE,
            style: FontStyle::Bold,
        }],
    }];

    let mut y = PAGE_HEIGHT - BODY_TOP_OFFSET;
    for line in lines {
        if y < BOTTOM_LIMIT {
            pages.push(Page::default());
            y = PAGE_HEIGHT - CONTINUATION_TOP_OFFSET;
        }
        if let Some(page) = pages.last_mut() {
            page.items.push(PlacedText {
                text: encodable(line).into_owned(),
                x: LEFT_MARGIN,
                y,
                size: BODY_FONT_SIZE,
                style: FontStyle::Regular,
            });
        }
        y -= LINE_HEIGHT;
    }

    pages
}

const WIN_ANSI: &str = "WinAnsiEncoding";

/// Replaces characters the built-in fonts' WinAnsi encoding cannot represent
/// with `?`. The encoder drops such characters silently otherwise.
pub fn encodable(text: &str) -> Cow<'_, str> {
    if text.chars().all(win_ansi_encodable) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if win_ansi_encodable(c) { c } else { '?' })
            .collect(),
    )
}

fn win_ansi_encodable(c: char) -> bool {
    if c.is_ascii() {
        return true;
    }
    let mut buf = [0; 4];
    Document::encode_text(Some(WIN_ANSI), c.encode_utf8(&mut buf)).len() == 1
}
