//! Column/row projection behind the generic data table.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Align {
    #[default]
    Left,
    Right,
}

impl Align {
    /// CSS class used by the table component.
    pub fn class(&self) -> &'static str {
        match self {
            Align::Left => "text-left",
            Align::Right => "text-right",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub header: &'static str,
    pub align: Align,
}

impl Column {
    pub const fn new(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            align: Align::Left,
        }
    }

    pub const fn right(key: &'static str, header: &'static str) -> Self {
        Self {
            key,
            header,
            align: Align::Right,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub align: Align,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Cell<C> {
    pub key: &'static str,
    pub align: Align,
    pub content: C,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableView<C> {
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Vec<Cell<C>>>,
}

impl<C> TableView<C> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// One header per column, one row per item with one cell per column in
/// column order. `get_cell` receives the item, the column key and the row
/// index.
pub fn project<T, C>(
    columns: &[Column],
    data: &[T],
    mut get_cell: impl FnMut(&T, &str, usize) -> C,
) -> TableView<C> {
    let headers = columns
        .iter()
        .map(|column| HeaderCell {
            key: column.key,
            label: column.header,
            align: column.align,
        })
        .collect();

    let rows = data
        .iter()
        .enumerate()
        .map(|(index, item)| {
            columns
                .iter()
                .map(|column| Cell {
                    key: column.key,
                    align: column.align,
                    content: get_cell(item, column.key, index),
                })
                .collect()
        })
        .collect();

    TableView { headers, rows }
}
