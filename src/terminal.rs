use std::fmt;

use colored::Colorize;

use crate::display::{DetailPane, DisplayTarget, ListPane, TextSlot};

/// Text rendering of a [`DisplayTarget`] for a terminal.
pub struct Painted<'a>(pub &'a DisplayTarget);

pub fn set_color(enabled: bool) {
    colored::control::set_override(enabled);
}

impl fmt::Display for Painted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_list(f, &self.0.list)?;
        write_detail(f, &self.0.detail)
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, list: &ListPane) -> fmt::Result {
    for row in &list.rows {
        writeln!(f, "{} {}", format!("[{}]", row.id).dimmed(), row.label)?;
    }
    write_error(f, &list.error)
}

fn write_detail(f: &mut fmt::Formatter<'_>, detail: &DetailPane) -> fmt::Result {
    if !detail.loader.is_empty() {
        writeln!(f, "{}", detail.loader.text().italic())?;
    }
    if !detail.title.is_empty() {
        writeln!(f, "{}", detail.title.text().bold())?;
    }
    if !detail.message.is_empty() {
        writeln!(f, "{}", detail.message.text())?;
    }
    if !detail.user_id.is_empty() {
        writeln!(f, "user {}", detail.user_id.text())?;
    }
    write_error(f, &detail.error)
}

fn write_error(f: &mut fmt::Formatter<'_>, slot: &TextSlot) -> fmt::Result {
    if slot.is_empty() {
        return Ok(());
    }
    writeln!(f, "{}", slot.text().red())
}
