//! Terminal rendering of a board

use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::Write;

use crate::{
    board::{Board, Cell},
    WIDTH,
};

/// Draws `board` onto `out`, top row first, below a header of column numbers
pub fn render<W: Write>(board: &Board, out: &mut W) -> Result<()> {
    let cols: String = (1..=WIDTH).map(|x| x.to_string()).collect();
    out.queue(PrintStyledContent(style(cols + "\n")))?;

    for cells in board.rows().iter().rev() {
        for cell in cells.iter() {
            out.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(Color::DarkBlue)
                    .with(cell_color(*cell)),
            ))?;
        }
        out.queue(PrintStyledContent(style("\n")))?;
    }
    out.flush()?;
    Ok(())
}

fn cell_color(cell: Cell) -> Color {
    match cell {
        Cell::PlayerOne => Color::Red,
        Cell::PlayerTwo => Color::Yellow,
        Cell::Empty => Color::DarkBlue,
    }
}
