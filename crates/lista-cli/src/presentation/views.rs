use lista_engine::{Counters, ListViewModel};
use lista_types::Status;
use owo_colors::OwoColorize;
use std::fmt;

const ID_COLUMN_WIDTH: usize = 22;
const TITLE_COLUMN_WIDTH: usize = 40;
const RULE_WIDTH: usize = 80;

/// Text rendering of the filtered item list.
pub struct ItemTableView<'a> {
    data: &'a ListViewModel,
    color: bool,
}

impl<'a> ItemTableView<'a> {
    pub fn new(data: &'a ListViewModel, color: bool) -> Self {
        Self { data, color }
    }

    fn badge(&self, status: Status) -> String {
        if !self.color {
            return status.label().to_string();
        }
        match status {
            Status::Pendente => status.label().yellow().to_string(),
            Status::EmAndamento => status.label().blue().to_string(),
            Status::Concluido => status.label().green().to_string(),
        }
    }
}

impl fmt::Display for ItemTableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.data.empty {
            // Empty-state indicator replaces the table entirely.
            writeln!(f, "No items found.")?;
            return Ok(());
        }

        writeln!(
            f,
            "{:<id$}  {:<title$}  STATUS",
            "ID",
            "TITULO",
            id = ID_COLUMN_WIDTH,
            title = TITLE_COLUMN_WIDTH
        )?;
        writeln!(f, "{}", "-".repeat(RULE_WIDTH))?;

        for row in &self.data.rows {
            writeln!(
                f,
                "{:<id$}  {:<title$}  {}",
                row.id,
                truncate(&row.titulo, TITLE_COLUMN_WIDTH),
                self.badge(row.status),
                id = ID_COLUMN_WIDTH,
                title = TITLE_COLUMN_WIDTH
            )?;
        }

        Ok(())
    }
}

/// One-line counter summary.
pub struct CountersView<'a> {
    data: &'a Counters,
}

impl<'a> CountersView<'a> {
    pub fn new(data: &'a Counters) -> Self {
        Self { data }
    }
}

impl fmt::Display for CountersView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Total: {}  Pendente: {}  Concluído: {}",
            self.data.total, self.data.pending, self.data.done
        )
    }
}

/// Truncate respecting UTF-8 character boundaries.
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_chars.saturating_sub(3)).collect();
        format!("{}...", truncated)
    }
}
