#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Render an aligned table. Numeric cells are right-aligned; with `color`,
/// status cells are tinted.
#[must_use]
pub fn render_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| display_width(cell))
                .max()
                .unwrap_or(0)
                .max(display_width(header))
        })
        .collect();

    fit_widths(&mut widths, headers, options.max_width);

    let header_line = headers
        .iter()
        .zip(widths.iter())
        .map(|(header, width)| pad(&truncate_text(header, *width), *width, false, 0))
        .collect::<Vec<_>>()
        .join("  ");

    let divider = "-".repeat(display_width(header_line.trim_end()));

    let row_lines = rows.iter().map(|row| {
        widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let value = row.get(index).map_or("-", String::as_str);
                let truncated = truncate_text(value, *width);
                let numeric = looks_numeric(&truncated);
                let (cell, escapes) = if options.color {
                    colorize_status(&truncated)
                } else {
                    (truncated, 0)
                };
                pad(&cell, *width, numeric, escapes)
            })
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    });

    let mut lines = Vec::with_capacity(2 + rows.len());
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    lines.extend(row_lines);
    lines.join("\n")
}

fn display_width(value: &str) -> usize {
    value.chars().count()
}

/// Shrink the widest columns one char at a time until the table fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };

    let separators = widths.len().saturating_sub(1) * 2;
    let mut total = widths.iter().sum::<usize>() + separators;

    while total > max_width {
        let candidate = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > display_width(headers[*idx]).max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);

        let Some(idx) = candidate else {
            break;
        };
        widths[idx] -= 1;
        total -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if display_width(value) <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }

    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

/// `escapes` is the number of invisible ANSI chars in `value`.
fn pad(value: &str, width: usize, right_align: bool, escapes: usize) -> String {
    let visible = display_width(value).saturating_sub(escapes);
    let fill = " ".repeat(width.saturating_sub(visible));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn colorize_status(value: &str) -> (String, usize) {
    let code = match value {
        "completed" => "32",
        "started" => "33",
        _ => return (value.to_string(), 0),
    };
    let colored = format!("\u{1b}[{code}m{value}\u{1b}[0m");
    let escapes = display_width(&colored) - display_width(value);
    (colored, escapes)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_are_aligned() {
        let rows = vec![
            vec!["1".to_string(), "short".to_string()],
            vec!["20".to_string(), "a much longer line".to_string()],
        ];
        let table = render_table(&["ID", "DESCRIPTION"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID  DESCRIPTION");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], " 1  short");
        assert_eq!(lines[3], "20  a much longer line");
    }

    #[test]
    fn wide_tables_are_truncated_to_fit() {
        let rows = vec![vec!["1".to_string(), "x".repeat(80)]];
        let options = TableOptions {
            max_width: Some(40),
            color: false,
        };
        let table = render_table(&["ID", "DESCRIPTION"], &rows, options);
        let row = table.lines().nth(2).unwrap();
        assert!(display_width(row) <= 40, "row too wide: {row}");
        assert!(row.ends_with('…'));
    }

    #[test]
    fn color_does_not_break_alignment() {
        let rows = vec![
            vec!["started".to_string(), "a".to_string()],
            vec!["not started".to_string(), "b".to_string()],
        ];
        let options = TableOptions {
            max_width: None,
            color: true,
        };
        let table = render_table(&["STATUS", "X"], &rows, options);
        let lines: Vec<&str> = table.lines().collect();
        assert!(lines[2].contains("\u{1b}[33mstarted\u{1b}[0m    "));
        assert!(lines[3].starts_with("not started  b"));
    }
}
