//! Terminal table output.

use super::{Report, ReportRow};
use colored::Colorize;
use std::error::Error;
use std::io::Write;

const HEADERS: [&str; 3] = ["VRF", "Subnet", "Interfaces"];

fn row_cells(row: &ReportRow) -> [String; 3] {
    [
        row.vrf.clone(),
        row.subnet.clone(),
        format!("[{}]", row.interfaces_joined(", ")),
    ]
}

/// Render rows as a left-aligned text table, columns sized to fit.
pub fn render_table(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 3]> = rows.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row.iter()) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let mut push_line = |fields: [&str; 3]| {
        let line = format!(
            "{:<w0$}  {:<w1$}  {}",
            fields[0],
            fields[1],
            fields[2],
            w0 = widths[0],
            w1 = widths[1]
        );
        out.push_str(line.trim_end());
        out.push('\n');
    };

    push_line(HEADERS);
    let rule = widths.map(|w| "-".repeat(w));
    push_line([rule[0].as_str(), rule[1].as_str(), rule[2].as_str()]);
    for row in &cells {
        push_line([row[0].as_str(), row[1].as_str(), row[2].as_str()]);
    }
    out
}

/// Write the report as text: `OK` when clean, else a banner and a table.
pub fn write_report<W: Write>(out: &mut W, report: &Report) -> Result<(), Box<dyn Error>> {
    match report {
        Report::Clean => writeln!(out, "{}", "OK".green())?,
        Report::Violations(rows) => {
            writeln!(
                out,
                "{}",
                "Found the following IP uniqueness violations:".red()
            )?;
            write!(out, "{}", render_table(rows))?;
        }
    }
    Ok(())
}
