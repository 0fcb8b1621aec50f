//! Tab-separated matchup table format
//!
//! ```text
//! Type<TAB>Resistances<TAB>Weaknesses<TAB>Immunities
//! Normal<TAB>None<TAB>Fighting<TAB>Ghost
//! ```
//!
//! Column names after `Type` are matched case-insensitively, so their order in
//! the file is free. A cell is either `None` or a `", "`-separated list.

use crate::ChartError;
use crate::element::ElementType;
use crate::table::{DefensiveEntry, OffensiveEntry, TableKind};

const EMPTY_CELL: &str = "None";

/// Parse a defensive table into rows in file order
pub fn parse_defensive(text: &str) -> Result<Vec<(ElementType, DefensiveEntry)>, ChartError> {
    let rows = parse_rows(text, TableKind::Defensive)?;
    Ok(rows
        .into_iter()
        .map(|(ty, [resistances, weaknesses, immunities])| {
            (
                ty,
                DefensiveEntry {
                    resistances,
                    weaknesses,
                    immunities,
                },
            )
        })
        .collect())
}

/// Parse an offensive table into rows in file order
pub fn parse_offensive(text: &str) -> Result<Vec<(ElementType, OffensiveEntry)>, ChartError> {
    let rows = parse_rows(text, TableKind::Offensive)?;
    Ok(rows
        .into_iter()
        .map(|(ty, [advantages, disadvantages, unsusceptibles])| {
            (
                ty,
                OffensiveEntry {
                    advantages,
                    disadvantages,
                    unsusceptibles,
                },
            )
        })
        .collect())
}

/// Rows with their three cells reordered to `kind.columns()` order
fn parse_rows(
    text: &str,
    kind: TableKind,
) -> Result<Vec<(ElementType, [Vec<ElementType>; 3])>, ChartError> {
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    let (header_line, header) = lines.next().ok_or_else(|| ChartError::Parse {
        line: 1,
        message: "empty table".to_string(),
    })?;
    let order = column_order(header_line, header, kind)?;

    let mut rows = Vec::new();
    for (line, content) in lines {
        let parts: Vec<&str> = content.split('\t').collect();
        if parts.len() != 4 {
            return Err(ChartError::Parse {
                line,
                message: format!("expected 4 tab-separated fields, found {}", parts.len()),
            });
        }

        let ty = parse_name(parts[0], line)?;
        let mut cells: [Vec<ElementType>; 3] = Default::default();
        for (field, slot) in parts[1..].iter().zip(order) {
            cells[slot] = parse_cell(field, line)?;
        }
        rows.push((ty, cells));
    }

    Ok(rows)
}

/// For each file column, the index into `kind.columns()`
fn column_order(line: usize, header: &str, kind: TableKind) -> Result<[usize; 3], ChartError> {
    let parts: Vec<&str> = header.split('\t').map(str::trim).collect();
    if parts.len() != 4 {
        return Err(ChartError::Parse {
            line,
            message: format!("header must have 4 columns, found {}", parts.len()),
        });
    }

    let expected = kind.columns();
    let mut order = [0usize; 3];
    let mut seen = [false; 3];
    for (pos, name) in parts[1..].iter().enumerate() {
        let slot = expected
            .iter()
            .position(|col| col.eq_ignore_ascii_case(name))
            .ok_or_else(|| ChartError::Parse {
                line,
                message: format!("unexpected column '{}' in {} table", name, kind),
            })?;
        if seen[slot] {
            return Err(ChartError::Parse {
                line,
                message: format!("column '{}' appears twice", name),
            });
        }
        seen[slot] = true;
        order[pos] = slot;
    }

    Ok(order)
}

fn parse_cell(field: &str, line: usize) -> Result<Vec<ElementType>, ChartError> {
    let field = field.trim();
    if field == EMPTY_CELL || field.is_empty() {
        return Ok(Vec::new());
    }
    field.split(',').map(|name| parse_name(name, line)).collect()
}

fn parse_name(name: &str, line: usize) -> Result<ElementType, ChartError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(ChartError::Parse {
            line,
            message: "empty type name".to_string(),
        });
    }
    name.parse()
}
