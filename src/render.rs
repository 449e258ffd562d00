/*!
 * Text rendering of query results.
 * Layout loosely follows data-frame printouts: row labels on the left, values right aligned.
 */

use std::fmt;

use crate::table::{ColumnData, Describe, GroupMeans, Table};
use crate::Measure;

/// Writes grid of cells. First column is left aligned, others are right aligned,
/// columns are separated by two spaces.
fn write_grid(f: &mut fmt::Formatter<'_>, rows: &[Vec<String>]) -> fmt::Result {
    let cols = rows.iter().map(Vec::len).max().unwrap_or(0);
    let mut widths = vec![0; cols];
    for r in rows {
        for (i, cell) in r.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }
    for r in rows {
        let mut line = String::new();
        for (i, cell) in r.iter().enumerate() {
            if i == 0 {
                line.push_str(&format!("{:<w$}", cell, w = widths[i]));
            } else {
                line.push_str(&format!("  {:>w$}", cell, w = widths[i]));
            }
        }
        writeln!(f, "{}", line.trim_end())?;
    }
    Ok(())
}

fn measure(m: Option<Measure>) -> String {
    match m {
        Some(v) => format!("{:.6}", v),
        None => "NaN".to_string(),
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.num_columns() == 0 {
            return writeln!(f, "Empty table");
        }
        let mut rows = Vec::with_capacity(self.num_rows() + 1);
        let mut header = vec![String::new()];
        header.extend(self.column_names().iter().map(|n| n.to_string()));
        rows.push(header);
        for (pos, label) in self.index().iter().enumerate() {
            let mut row = vec![label.to_string()];
            for c in self.columns() {
                row.push(match c.data() {
                    ColumnData::Text(v) => v[pos].clone(),
                    ColumnData::Int(v) => v[pos].to_string(),
                });
            }
            rows.push(row);
        }
        write_grid(f, &rows)?;
        if self.num_rows() == 0 {
            writeln!(f, "(no rows)")?;
        }
        Ok(())
    }
}

impl fmt::Display for Describe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut header = vec![String::new()];
        header.extend(self.columns().iter().map(|(n, _)| n.clone()));
        let mut rows = vec![header];
        let stats: [(&str, fn(&crate::table::Summary) -> String); 8] = [
            ("count", |s| measure(Some(s.count as Measure))),
            ("mean", |s| measure(s.mean)),
            ("std", |s| measure(s.std)),
            ("min", |s| measure(s.min)),
            ("25%", |s| measure(s.q25)),
            ("50%", |s| measure(s.q50)),
            ("75%", |s| measure(s.q75)),
            ("max", |s| measure(s.max)),
        ];
        for (label, stat) in stats.iter() {
            let mut row = vec![label.to_string()];
            row.extend(self.columns().iter().map(|(_, s)| stat(s)));
            rows.push(row);
        }
        write_grid(f, &rows)
    }
}

impl fmt::Display for GroupMeans {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut rows = vec![vec![self.key().to_string()]];
        for (k, m) in self.groups() {
            rows.push(vec![k.clone(), format!("{:.1}", m)]);
        }
        write_grid(f, &rows)?;
        writeln!(f, "Name: {}, dtype: float64", self.value())
    }
}

///////////////////////////////////////////////////////////////////////////////////////////////////
/// Tests
///
