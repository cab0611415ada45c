use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::error::Result;
use crate::insights::{BuildMetricsReport, SummaryTable};

pub fn render_table(summary: &SummaryTable) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            summary
                .headers
                .iter()
                .map(|header| Cell::new(header).fg(Color::Cyan)),
        );

    for row in &summary.rows {
        table.add_row(row.cells().into_iter().enumerate().map(|(idx, value)| {
            // Date stays left aligned, numbers go right.
            if idx == 0 {
                Cell::new(value)
            } else {
                Cell::new(value).set_alignment(CellAlignment::Right)
            }
        }));
    }

    table
}

pub fn render_json(report: &BuildMetricsReport, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(report)?
    } else {
        serde_json::to_string(report)?
    };
    Ok(json)
}
