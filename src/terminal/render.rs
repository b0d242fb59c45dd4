use std::fmt::Write;

use chrono::{DateTime, TimeZone};

use super::session::{Session, View};
use crate::common::simple_types::GrandTotal;

const MENU_COLUMNS: usize = 3;
const BUTTON_WIDTH: usize = 28;

pub fn format_total(currency: &str, total: GrandTotal) -> String {
    format!("{currency} {total}")
}

/// Date shown in the header, e.g. `FECHA: Mon 19 Oct 07:05 AM`.
pub fn format_date<Tz: TimeZone>(now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("FECHA: {}", now.format("%a %d %b %I:%M %p"))
}

/// Draws the whole screen from the current session state.
pub fn render_screen<Tz: TimeZone>(session: &Session, currency: &str, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let total = format_total(currency, session.order().grand_total());
    let mut out = String::new();

    let _ = writeln!(out, "{:<40}TOTAL: {total}", format_date(now));
    out.push('\n');

    match session.view() {
        View::Menu => render_menu(&mut out, session),
        View::CustomerSelection => render_customers(&mut out, session),
    }
    out.push('\n');

    render_order(&mut out, session);
    out.push('\n');

    let _ = writeln!(out, "KEYPAD: [{}]", session.keypad().as_str());
    let _ = writeln!(out, "TOTAL: {total}");
    if let Some(message) = session.message() {
        out.push('\n');
        let _ = writeln!(out, "{message}");
    }
    out
}

fn render_menu(out: &mut String, session: &Session) {
    let _ = writeln!(out, "MENU");
    let names: Vec<_> = session.order().price_list().names().collect();
    for (row, chunk) in names.chunks(MENU_COLUMNS).enumerate() {
        let line = chunk
            .iter()
            .enumerate()
            .map(|(column, name)| {
                let button = format!("[{:>2}] {name}", row * MENU_COLUMNS + column + 1);
                format!("{button:<width$}", width = BUTTON_WIDTH)
            })
            .collect::<String>();
        let _ = writeln!(out, "{}", line.trim_end());
    }
}

fn render_customers(out: &mut String, session: &Session) {
    let _ = writeln!(out, "CLIENTES");
    if session.customers().is_empty() {
        let _ = writeln!(out, "  (no customers loaded)");
    }
    for (index, customer) in session.customers().iter().enumerate() {
        let _ = writeln!(out, "  {:>2}. {customer}", index + 1);
    }
    let _ = writeln!(out, "  back | select");
}

fn render_order(out: &mut String, session: &Session) {
    let _ = writeln!(
        out,
        "  {:>4}  {:<28}{:>8}{:>10}{:>10}",
        "ITEM", "NOMBRE", "CANT", "PRECIO", "TOTAL"
    );
    for line in session.order().lines() {
        let marker = if session.selected() == Some(line.item()) {
            '>'
        } else {
            ' '
        };
        let _ = writeln!(
            out,
            "{marker} {:>4}  {:<28}{:>8}{:>10}{:>10}",
            line.item().to_string(),
            line.name().as_str(),
            line.quantity().to_string(),
            line.unit_price().to_string(),
            line.line_total().to_string(),
        );
    }
}
