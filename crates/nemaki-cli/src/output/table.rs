#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
    pub color: bool,
}

/// Narrowest a column is squeezed to when fitting the terminal.
const MIN_COLUMN: usize = 6;

/// Render left-aligned columns separated by two spaces, numbers right-aligned.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .chain([header.chars().count(), MIN_COLUMN])
                .max()
                .unwrap_or(MIN_COLUMN)
        })
        .collect();
    shrink_to_fit(&mut widths, options.max_width);

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(&clip(header, *width), *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = vec![header_line, divider];
    for row in rows {
        let cells = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let text = clip(row.get(index).map_or("-", String::as_str), *width);
                let padded = pad(&text, *width, looks_numeric(&text));
                if options.color {
                    colorize(&text, padded)
                } else {
                    padded
                }
            })
            .collect::<Vec<_>>();
        lines.push(cells.join("  "));
    }
    lines.join("\n")
}

/// Take one character at a time from the widest column until the row fits.
fn shrink_to_fit(widths: &mut [usize], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let Some((index, _)) = widths
            .iter()
            .enumerate()
            .filter(|(_, width)| **width > MIN_COLUMN)
            .max_by_key(|(_, width)| **width)
        else {
            break;
        };
        widths[index] -= 1;
    }
}

fn clip(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    let mut out: String = value.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit() || matches!(ch, '-' | '.'))
}

/// Color outcome words; `padded` keeps its alignment because escapes wrap it.
fn colorize(text: &str, padded: String) -> String {
    let code = match text.to_ascii_lowercase().as_str() {
        "success" | "true" | "ok" | "healthy" => "32",
        "partial" | "partial_success" | "pending" | "warning" => "33",
        "failed" | "failure" | "error" | "false" => "31",
        _ => return padded,
    };
    format!("\u{1b}[{code}m{padded}\u{1b}[0m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const PLAIN: TableOptions = TableOptions {
        max_width: None,
        color: false,
    };

    #[test]
    fn columns_align_across_rows() {
        let rows = vec![
            vec!["doc-1".to_string(), "success".to_string()],
            vec!["folder-200".to_string(), "partial_success".to_string()],
        ];
        let table = render_rows(&["root_id", "status"], &rows, PLAIN);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), 4);
        assert!(lines[1].chars().all(|c| c == '-'));
        let status_col = lines[0].find("status").unwrap();
        assert_eq!(lines[2].find("success"), Some(status_col));
        assert_eq!(lines[3].find("partial_success"), Some(status_col));
    }

    #[test]
    fn narrow_terminal_clips_widest_column() {
        let rows = vec![vec!["a".repeat(60), "ok".to_string()]];
        let table = render_rows(
            &["name", "state"],
            &rows,
            TableOptions {
                max_width: Some(40),
                color: false,
            },
        );
        let row = table.lines().nth(2).unwrap();
        assert!(row.chars().count() <= 40);
        assert!(row.contains('…'));
    }

    #[test]
    fn missing_cells_render_as_dash() {
        let table = render_rows(&["a", "b"], &[vec!["x".to_string()]], PLAIN);
        assert!(table.lines().nth(2).unwrap().contains('-'));
    }
}
