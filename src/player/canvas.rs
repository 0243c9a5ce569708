//! Pixel layout → terminal cells.
//!
//! Rendered elements speak in CSS-like pixel attributes. The terminal host
//! maps them onto a character grid: one column is `PX_PER_COL` pixels, one
//! row is `PX_PER_ROW` pixels.

use crate::types::{Message, PropKind, RenderedElement};

pub const PX_PER_COL: i64 = 10;
pub const PX_PER_ROW: i64 = 20;

/// Font sizes at or above this are drawn bold.
const BOLD_FROM_PX: i64 = 20;
/// Font sizes at or below this are drawn dim.
const DIM_UP_TO_PX: i64 = 12;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    Normal,
    Bold,
    Dim,
}

/// An element placed on the cell grid, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placed {
    pub x: u16,
    pub y: u16,
    /// Clickable width in cells.
    pub width: u16,
    /// Cells the element may cover once its width is reached: the `width`
    /// attribute if set, otherwise the content length.
    pub reach: u16,
    pub content: String,
    pub emphasis: Emphasis,
    pub message: Message,
}

impl Placed {
    pub fn contains(&self, col: u16, row: u16) -> bool {
        row == self.y && col >= self.x && col < self.x.saturating_add(self.width)
    }
}

/// Place an element on the grid. Elements without a usable `left`/`top`
/// are not drawn.
pub fn place(element: &RenderedElement) -> Option<Placed> {
    let x = to_cells(element.px_attribute("left")?, PX_PER_COL)?;
    let y = to_cells(element.px_attribute("top")?, PX_PER_ROW)?;
    let max_cells = element
        .px_attribute("width")
        .map(|w| (w.max(0) / PX_PER_COL) as usize);

    let content = match element.kind {
        PropKind::Label => clip(&element.text, max_cells),
        PropKind::Button => {
            let face = format!("[ {} ]", element.text);
            match max_cells {
                Some(cells) => clip(&format!("{face:^cells$}"), Some(cells)),
                None => face,
            }
        }
    };
    let width = match element.kind {
        PropKind::Button => max_cells.unwrap_or_else(|| content.chars().count()),
        PropKind::Label => content.chars().count().max(1),
    };

    let reach = max_cells.unwrap_or_else(|| content.chars().count());

    Some(Placed {
        x,
        y,
        width: u16::try_from(width).unwrap_or(u16::MAX),
        reach: u16::try_from(reach).unwrap_or(u16::MAX),
        content,
        emphasis: emphasis(element.px_attribute("font-size")),
        message: element.message,
    })
}

pub fn place_all(elements: &[RenderedElement]) -> Vec<Placed> {
    elements.iter().filter_map(place).collect()
}

/// Columns and rows needed to show every placed element in full.
pub fn extent(placed: &[Placed]) -> (u16, u16) {
    placed.iter().fold((0, 0), |(w, h), p| {
        (
            w.max(p.x.saturating_add(p.reach)),
            h.max(p.y.saturating_add(1)),
        )
    })
}

/// The message of the topmost element under a grid cell.
pub fn hit_test(placed: &[Placed], col: u16, row: u16) -> Option<Message> {
    placed
        .iter()
        .rev()
        .find(|p| p.contains(col, row))
        .map(|p| p.message)
}

fn to_cells(px: i64, per_cell: i64) -> Option<u16> {
    u16::try_from(px / per_cell).ok()
}

fn clip(text: &str, max_cells: Option<usize>) -> String {
    match max_cells {
        Some(n) => text.chars().take(n).collect(),
        None => text.to_string(),
    }
}

fn emphasis(font_size: Option<i64>) -> Emphasis {
    match font_size {
        Some(size) if size >= BOLD_FROM_PX => Emphasis::Bold,
        Some(size) if size <= DIM_UP_TO_PX => Emphasis::Dim,
        _ => Emphasis::Normal,
    }
}
