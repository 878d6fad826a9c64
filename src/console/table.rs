//! Plain-text rendering of the contact table and message panels.

use crate::domain::Contact;

const HEADERS: [&str; 3] = ["ID", "Type", "Contact Information"];

fn width(s: &str) -> usize {
    s.chars().count()
}

fn pad(s: &str, to: usize) -> String {
    format!("{}{}", s, " ".repeat(to.saturating_sub(width(s))))
}

fn pad_left(s: &str, to: usize) -> String {
    format!("{}{}", " ".repeat(to.saturating_sub(width(s))), s)
}

/// Render contacts as a numbered table; row `i` carries ID `i + 1`.
pub fn render_contacts(title: &str, contacts: &[Contact]) -> String {
    let rows: Vec<[String; 3]> = contacts
        .iter()
        .enumerate()
        .map(|(i, c)| [(i + 1).to_string(), c.kind.label().to_string(), c.value.clone()])
        .collect();

    let mut widths = HEADERS.map(width);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(width(cell));
        }
    }

    let border = format!(
        "+{}+",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("+")
    );

    let mut out = Vec::with_capacity(rows.len() + 5);
    out.push(title.to_string());
    out.push(border.clone());
    out.push(format!(
        "| {} | {} | {} |",
        pad(HEADERS[0], widths[0]),
        pad(HEADERS[1], widths[1]),
        pad(HEADERS[2], widths[2])
    ));
    out.push(border.clone());
    for row in &rows {
        out.push(format!(
            "| {} | {} | {} |",
            pad_left(&row[0], widths[0]),
            pad(&row[1], widths[1]),
            pad(&row[2], widths[2])
        ));
    }
    out.push(border);
    out.join("\n")
}

/// Render `body` inside a box with `title` set into the top edge.
pub fn render_panel(title: &str, body: &str) -> String {
    let lines: Vec<&str> = body.lines().collect();
    let inner = lines
        .iter()
        .map(|l| width(l))
        .max()
        .unwrap_or(0)
        .max(width(title) + 2);

    let heading = format!(" {} ", title);
    let top = format!("+{}{}+", heading, "-".repeat(inner + 2 - width(&heading)));

    let mut out = vec![top];
    for line in lines {
        out.push(format!("| {} |", pad(line, inner)));
    }
    out.push(format!("+{}+", "-".repeat(inner + 2)));
    out.join("\n")
}
