//! Rendering a solved tour as turn-by-turn directions.

use std::io::{self, Write};

use geotour_core::Solution;

const HEADINGS: [&str; 4] = ["From", "To", "Distance (miles)", "Direction"];
const COLUMN_SEPARATOR: &str = " | ";

/// Table rows for `solution`: one per leg, closed by the total distance.
///
/// Distances are rounded to two decimals and bearings to one.
pub(crate) fn direction_rows(solution: &Solution<'_>) -> Vec<[String; 4]> {
    let mut rows: Vec<[String; 4]> = solution
        .legs
        .iter()
        .map(|leg| {
            [
                leg.from.name.clone(),
                leg.to.name.clone(),
                format!("{:.2}", leg.distance_miles),
                format!("{:.1}°", leg.bearing_degrees),
            ]
        })
        .collect();
    rows.push([
        "Total Distance".to_owned(),
        format!("{:.2} miles", solution.total_miles),
        String::new(),
        String::new(),
    ]);
    rows
}

/// Write the directions table for `solution` with aligned columns.
pub(crate) fn write_table(writer: &mut dyn Write, solution: &Solution<'_>) -> io::Result<()> {
    let rows = direction_rows(solution);
    let mut widths = HEADINGS.map(|heading| heading.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(writer, &HEADINGS, &widths)?;
    let rule: Vec<String> = widths.iter().map(|&width| "-".repeat(width)).collect();
    writeln!(writer, "{}", rule.join("-+-"))?;
    for row in &rows {
        write_row(writer, row, &widths)?;
    }
    Ok(())
}

fn write_row<S: AsRef<str>>(
    writer: &mut dyn Write,
    cells: &[S; 4],
    widths: &[usize; 4],
) -> io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell.as_ref()))
        .collect();
    writeln!(writer, "{}", padded.join(COLUMN_SEPARATOR).trim_end())
}
