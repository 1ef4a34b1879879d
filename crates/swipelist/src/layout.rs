//! Fixed-size layout hints for the host's virtualized list.

/// Extent of one item along the scroll axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemLayout {
    /// Item height.
    pub length: f64,
    /// Distance from the top of the list.
    pub offset: f64,
    /// Item index.
    pub index: usize,
}

impl ItemLayout {
    /// Layout of item `index` when every row is `line_height` tall.
    pub fn fixed(line_height: f64, index: usize) -> Self {
        Self {
            length: line_height,
            offset: line_height * index as f64,
            index,
        }
    }
}
