//! Plain-text table rendering for entity lists and reports.

pub fn render(headers: &[&str], rows: &[Vec<String>]) -> String {
    let header_cells: Vec<String> = headers.iter().map(|h| (*h).to_string()).collect();
    let mut widths: Vec<usize> = header_cells.iter().map(String::len).collect();
    for row in rows {
        for (index, cell) in row.iter().enumerate() {
            if let Some(width) = widths.get_mut(index) {
                *width = (*width).max(cell.len());
            }
        }
    }

    let separator = widths
        .iter()
        .map(|width| "-".repeat(*width))
        .collect::<Vec<_>>()
        .join("  ");

    let mut lines = vec![pad_line(&header_cells, &widths), separator];
    for row in rows {
        lines.push(pad_line(row, &widths));
    }
    lines.join("\n")
}

pub fn print(headers: &[&str], rows: &[Vec<String>]) {
    println!("{}", render(headers, rows));
}

fn pad_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<w$}", cell, w = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}
