use crate::display::pagination::PageMarker;
use crate::display::record_table::{MenuView, PagerView, TableView};
use crate::utils::text::truncate_text;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table, presets};
use crossterm::terminal;

/// Glyph of the per-row menu trigger
pub const MENU_TRIGGER: &str = "⋮";

/// Terminal renderer for record table views
pub struct TableDisplay {
    max_width: Option<usize>,
    use_colors: bool,
}

impl Default for TableDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl TableDisplay {
    /// Create a new TableDisplay instance
    pub fn new() -> Self {
        Self {
            max_width: Self::detect_terminal_width(),
            use_colors: true,
        }
    }

    /// Detect terminal width
    fn detect_terminal_width() -> Option<usize> {
        match terminal::size() {
            Ok((cols, _rows)) => Some((cols as usize).clamp(40, 200)),
            Err(_) => Some(80),
        }
    }

    /// Set color usage
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    fn header_cell(&self, label: &str) -> Cell {
        if self.use_colors {
            Cell::new(label)
                .add_attribute(Attribute::Bold)
                .fg(Color::Cyan)
        } else {
            Cell::new(label)
        }
    }

    /// Render one page of a record table followed by its pager
    pub fn render_table(&self, view: &TableView) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);

        let mut headers: Vec<Cell> = vec![self.header_cell("ID")];
        headers.extend(view.headers.iter().map(|h| self.header_cell(&h.label)));
        if view.has_actions {
            headers.push(self.header_cell(""));
        }
        table.set_header(headers);

        for row in &view.rows {
            let mut cells = vec![if self.use_colors {
                Cell::new(row.id.to_string()).fg(Color::Cyan)
            } else {
                Cell::new(row.id.to_string())
            }];
            cells.extend(row.cells.iter().zip(&view.headers).map(|(value, header)| {
                match header.width {
                    Some(width) => Cell::new(truncate_text(value, width)),
                    None => Cell::new(value),
                }
            }));
            if view.has_actions {
                let trigger = Cell::new(MENU_TRIGGER);
                cells.push(if row.menu_open && self.use_colors {
                    trigger.fg(Color::Yellow).add_attribute(Attribute::Bold)
                } else {
                    trigger
                });
            }
            table.add_row(cells);
        }

        if view.rows.is_empty() {
            let mut empty = vec![Cell::new("")];
            empty.push(if self.use_colors {
                Cell::new("No records")
                    .fg(Color::DarkGrey)
                    .add_attribute(Attribute::Italic)
            } else {
                Cell::new("No records")
            });
            table.add_row(empty);
        }

        let mut output = table.to_string();
        output.push('\n');
        output.push_str(&self.render_pager(&view.pager));
        output
    }

    /// Pager line, e.g. `Total 60 records   ‹ 1 … 5 [6] 7 … 12 ›`
    pub fn render_pager(&self, pager: &PagerView) -> String {
        let markers: Vec<String> = pager
            .layout
            .markers
            .iter()
            .map(|marker| match marker {
                PageMarker::Page(page) if *page == pager.layout.current_page => {
                    format!("[{}]", page)
                }
                PageMarker::Page(page) => page.to_string(),
                PageMarker::Ellipsis => "…".to_string(),
            })
            .collect();

        let previous = if pager.previous_enabled { "‹" } else { " " };
        let next = if pager.next_enabled { "›" } else { " " };

        format!(
            "Total {} records   {} {} {}",
            pager.total_count,
            previous,
            markers.join(" "),
            next
        )
    }

    /// Render the open row menu as a small boxed list
    pub fn render_menu(&self, menu: &MenuView) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_header(vec![self.header_cell(&format!("Actions for {}", menu.record_id))]);

        for item in &menu.items {
            let text = format!("{}  {}", item.icon, item.label);
            table.add_row(vec![if item.danger && self.use_colors {
                Cell::new(text).fg(Color::Red)
            } else {
                Cell::new(text)
            }]);
        }

        table.to_string()
    }

    /// Render a key/value detail panel for one record
    pub fn render_detail(&self, title: &str, fields: &[(String, String)]) -> String {
        let mut table = Table::new();
        table.load_preset(presets::UTF8_FULL);
        table.set_content_arrangement(ContentArrangement::Dynamic);
        self.configure_table_width(&mut table);
        table.set_header(vec![self.header_cell(title), self.header_cell("")]);

        for (key, value) in fields {
            table.add_row(vec![
                if self.use_colors {
                    Cell::new(key).add_attribute(Attribute::Bold)
                } else {
                    Cell::new(key)
                },
                Cell::new(value),
            ]);
        }

        table.to_string()
    }

    /// Set table width to match the terminal size
    fn configure_table_width(&self, table: &mut Table) {
        let terminal_width = self.max_width.unwrap_or(80);
        // Leave room for borders and margins
        let available_width = if terminal_width > 20 {
            terminal_width - 6
        } else {
            terminal_width.max(40)
        };
        table.set_width(available_width as u16);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::record::RecordId;
    use crate::display::pagination::paginate;
    use crate::display::record_table::{HeaderView, MenuItemView, RowView};

    fn plain() -> TableDisplay {
        TableDisplay {
            max_width: Some(100),
            use_colors: false,
        }
    }

    fn view(total: usize, page: usize) -> TableView {
        let layout = paginate(total, 5, page);
        TableView {
            headers: vec![HeaderView {
                label: "Name".to_string(),
                width: Some(8),
            }],
            rows: vec![RowView {
                id: RecordId::from("1"),
                cells: vec!["Ahmet Yılmaz Uzun".to_string()],
                menu_open: true,
            }],
            has_actions: true,
            menu: None,
            pager: PagerView {
                total_count: total,
                previous_enabled: layout.has_previous(),
                next_enabled: layout.has_next(),
                layout,
            },
        }
    }

    #[test]
    fn test_render_pager_marks_current_page() {
        let output = plain().render_pager(&view(60, 6).pager);
        assert_eq!(output, "Total 60 records   ‹ 1 … 5 [6] 7 … 12 ›");
    }

    #[test]
    fn test_render_pager_disables_edges() {
        let output = plain().render_pager(&view(3, 1).pager);
        assert_eq!(output, "Total 3 records     [1]  ");
    }

    #[test]
    fn test_render_table_truncates_and_shows_trigger() {
        let output = plain().render_table(&view(1, 1));
        assert!(output.contains("Name"));
        assert!(output.contains("Ahmet..."));
        assert!(output.contains(MENU_TRIGGER));
        assert!(output.contains("Total 1 records"));
    }

    #[test]
    fn test_render_empty_table() {
        let mut empty = view(0, 1);
        empty.rows.clear();
        let output = plain().render_table(&empty);
        assert!(output.contains("No records"));
    }

    #[test]
    fn test_render_menu_lists_items() {
        let menu = MenuView {
            record_id: RecordId::from("2"),
            items: vec![
                MenuItemView {
                    icon: "📄".to_string(),
                    label: "Customer Details".to_string(),
                    danger: false,
                },
                MenuItemView {
                    icon: "🗑️".to_string(),
                    label: "Delete Customer".to_string(),
                    danger: true,
                },
            ],
        };
        let output = plain().render_menu(&menu);
        assert!(output.contains("Actions for 2"));
        assert!(output.contains("Customer Details"));
        assert!(output.contains("Delete Customer"));
    }

    #[test]
    fn test_render_detail() {
        let output = plain().render_detail(
            "Customer",
            &[("Phone".to_string(), "0555 123 45 67".to_string())],
        );
        assert!(output.contains("Phone"));
        assert!(output.contains("0555 123 45 67"));
    }
}
