//! Tabular export of a matrix snapshot.

use prettytable::{Cell as TableCell, Row, Table};

use block_matrix::{Axis, Cell, MatrixInfo, MatrixSnapshot};

/// Hex characters of each block hash shown in the grid.
const SHORT_HASH: usize = 8;

fn cell_label(cell: &Cell) -> String {
    match cell.block() {
        None => ".".to_string(),
        Some(block) if block.is_empty_sentinel() => "∅".to_string(),
        Some(block) => hex::encode(&block.hash[..SHORT_HASH / 2]),
    }
}

/// Render the grid followed by size, block count and every digest.
///
/// Diagonal cells print as `.`, redacted or unwritten blocks as `∅`, and
/// other blocks as a hash prefix.
pub fn render_table(snapshot: &MatrixSnapshot, info: &MatrixInfo) -> String {
    let mut grid = Table::new();

    let mut header = vec![TableCell::new("")];
    header.extend((0..snapshot.dimension).map(|c| TableCell::new(&format!("c{c}"))));
    grid.set_titles(Row::new(header));

    for (index, cells) in snapshot.rows().enumerate() {
        let mut row = vec![TableCell::new(&format!("r{index}"))];
        row.extend(cells.iter().map(|cell| TableCell::new(&cell_label(cell))));
        grid.add_row(Row::new(row));
    }

    let mut digests = Table::new();
    digests.set_titles(Row::new(vec![
        TableCell::new("axis"),
        TableCell::new("index"),
        TableCell::new("digest"),
    ]));
    for axis in Axis::ALL {
        for (index, digest) in info.digests(axis).iter().enumerate() {
            digests.add_row(Row::new(vec![
                TableCell::new(&axis.to_string()),
                TableCell::new(&index.to_string()),
                TableCell::new(&hex::encode(digest)),
            ]));
        }
    }

    format!(
        "{grid}size: {}\nblock count: {}\n{digests}",
        info.dimension, info.block_count
    )
}
