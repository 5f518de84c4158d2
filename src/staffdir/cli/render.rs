use chrono::{DateTime, Utc};
use colored::Colorize;
use staffdir::model::Employee;
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const TIME_WIDTH: usize = 14;
const COLUMN_GAP: usize = 2;

/// Full table re-render: id, name, address, and how long ago each record was
/// added, followed by the count badge.
pub(crate) fn render_table(employees: &[Employee], count: usize) {
    if employees.is_empty() {
        println!("No employees yet. Add one with: add <id>, <name>, <address>");
        return;
    }

    let id_width = column_width("ID", employees.iter().map(|e| e.id.as_str()));
    let name_width = column_width("NAME", employees.iter().map(|e| e.name.as_str()));
    let address_width = column_width("ADDRESS", employees.iter().map(|e| e.address.as_str()));

    println!(
        "{}{}{}{}",
        pad_to("ID", id_width + COLUMN_GAP).bold(),
        pad_to("NAME", name_width + COLUMN_GAP).bold(),
        pad_to("ADDRESS", address_width + COLUMN_GAP).bold(),
        "ADDED".bold()
    );

    for employee in employees {
        let time_ago = format_time_ago(employee.created_at);
        println!(
            "{}{}{}{}",
            pad_to(&employee.id, id_width + COLUMN_GAP).yellow(),
            pad_to(&employee.name, name_width + COLUMN_GAP),
            pad_to(&employee.address, address_width + COLUMN_GAP),
            pad_to(&time_ago, TIME_WIDTH).dimmed()
        );
    }

    println!("{}", count_badge(count).dimmed());
}

/// Single-record detail view, used by `show` and when an edit begins.
pub(crate) fn render_record(employee: &Employee) {
    println!(
        "{} {}",
        employee.id.yellow().bold(),
        employee.name.bold()
    );
    println!("  address: {}", employee.address);
    println!(
        "  added:   {}",
        format_time_ago(employee.created_at).dimmed()
    );
    if employee.updated_at != employee.created_at {
        println!(
            "  updated: {}",
            format_time_ago(employee.updated_at).dimmed()
        );
    }
}

/// Machine-readable listing for the `json` command.
pub(crate) fn render_json(employees: &[Employee]) {
    match serde_json::to_string_pretty(employees) {
        Ok(json) => println!("{}", json),
        Err(err) => super::print::print_error(err),
    }
}

pub(crate) fn count_badge(count: usize) -> String {
    format!("{} Employee{}", count, if count == 1 { "" } else { "s" })
}

fn column_width<'a>(header: &str, values: impl Iterator<Item = &'a str>) -> usize {
    values
        .map(|v| v.width())
        .chain(std::iter::once(header.width()))
        .max()
        .unwrap_or(0)
}

fn pad_to(text: &str, width: usize) -> String {
    let padding = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(padding))
}

fn format_time_ago(time: DateTime<Utc>) -> String {
    let duration = (Utc::now() - time).to_std().unwrap_or_default();
    Formatter::new().convert(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_badge_pluralizes() {
        assert_eq!(count_badge(0), "0 Employees");
        assert_eq!(count_badge(1), "1 Employee");
        assert_eq!(count_badge(2), "2 Employees");
    }

    #[test]
    fn pad_to_is_width_aware() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        // Wide characters count double
        assert_eq!(pad_to("耳", 4), "耳  ");
        // Never truncates
        assert_eq!(pad_to("abcdef", 4), "abcdef");
    }
}
