//! Boxed tables for record listings and menus

use comfy_table::{modifiers::UTF8_ROUND_CORNERS, presets::UTF8_FULL, CellAlignment, Table};

use crate::models::{Artist, Song};
use crate::time;

/// A record that can be shown as one table row
pub trait Tabular {
    /// Capitalized noun for table titles ("Song")
    const LABEL: &'static str;

    const COLUMNS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;
}

impl Tabular for Song {
    const LABEL: &'static str = "Song";
    const COLUMNS: &'static [&'static str] =
        &["Title", "Rating", "Genre", "Explicit", "Updated At", "Created At"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.title.clone(),
            self.rating.to_string(),
            self.genre.clone(),
            if self.explicit { "Yes" } else { "No" }.to_string(),
            time::format_timestamp(&self.updated_at),
            time::format_timestamp(&self.created_at),
        ]
    }
}

impl Tabular for Artist {
    const LABEL: &'static str = "Artist";
    const COLUMNS: &'static [&'static str] = &["Name", "Founded Date", "Genres"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.name.clone(),
            time::format_timestamp(&self.founded_date),
            self.genres.join(", "),
        ]
    }
}

/// "All Song Information" listing with a leading index column
pub fn render_all<T: Tabular>(rows: &[T]) -> String {
    render(&format!("All {} Information", T::LABEL), rows, true)
}

/// "Song Information" for a single record
pub fn render_one<T: Tabular>(row: &T) -> String {
    render(
        &format!("{} Information", T::LABEL),
        std::slice::from_ref(row),
        false,
    )
}

/// "Multiple Song Information" for a working list
pub fn render_many<T: Tabular>(rows: &[T]) -> String {
    render(&format!("Multiple {} Information", T::LABEL), rows, false)
}

/// Render rows under a centred title, optionally numbering them from 0
pub fn render<T: Tabular>(title: &str, rows: &[T], with_index: bool) -> String {
    let mut table = boxed();

    let mut header: Vec<&str> = Vec::with_capacity(T::COLUMNS.len() + 1);
    if with_index {
        header.push("Index");
    }
    header.extend(T::COLUMNS);
    table.set_header(header);

    for (i, row) in rows.iter().enumerate() {
        let mut cells = Vec::with_capacity(T::COLUMNS.len() + 1);
        if with_index {
            cells.push(i.to_string());
        }
        cells.extend(row.cells());
        table.add_row(cells);
    }

    titled(title, &table)
}

/// Boxed menu: `(key, label)` rows under the title, footer row last
pub fn render_menu(title: &str, options: &[(&str, &str)], footer: (&str, &str)) -> String {
    let mut table = boxed();
    table.set_header(vec!["#", title]);
    for (key, label) in options.iter().chain(std::iter::once(&footer)) {
        table.add_row(vec![*key, *label]);
    }
    if let Some(keys) = table.column_mut(0) {
        keys.set_cell_alignment(CellAlignment::Right);
    }
    table.to_string()
}

fn boxed() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS);
    table
}

/// Title line centred over the table's top border
fn titled(title: &str, table: &Table) -> String {
    let rendered = table.to_string();
    let width = rendered
        .lines()
        .next()
        .map_or(0, |border| border.chars().count());
    format!("{:^width$}\n{}", title, rendered, width = width)
}
