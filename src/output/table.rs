//! Pretty table rendering.

use colored::Colorize;
use tabled::builder::Builder;
use tabled::settings::Style;

use super::Row;

/// Lays `rows` out as an ASCII table.
///
/// Header cells are bright blue and bold when `color` is set.
pub fn render_table<R: Row>(rows: &[R], color: bool) -> String {
    let mut builder = Builder::default();

    let header: Vec<String> = R::HEADERS
        .iter()
        .map(|h| {
            if color {
                h.bright_blue().bold().to_string()
            } else {
                h.to_string()
            }
        })
        .collect();
    builder.push_record(header);

    for row in rows {
        builder.push_record(row.cells().into_iter().map(str::to_string));
    }

    let mut table = builder.build();
    table.with(Style::ascii());
    table.to_string()
}
