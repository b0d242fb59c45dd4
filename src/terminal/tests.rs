use super::command::parse_command;
use super::session::{Flow, Session, View};
use super::run;
use crate::catalog::PriceList;
use crate::common::simple_types::{ItemNumber, Price, ProductName};
use crate::take_order::OrderAggregator;

fn session() -> Session {
    Session::new(
        OrderAggregator::new(PriceList::demo()),
        vec!["CLIENTES VARIOS".to_owned()],
    )
}

fn feed(session: &mut Session, commands: &[&str]) {
    for command in commands {
        assert_eq!(session.handle(parse_command(command)), Flow::Continue);
    }
}

fn item(value: u32) -> ItemNumber {
    ItemNumber::new(value).unwrap()
}

#[test]
fn menu_buttons_add_by_position_and_name() {
    let mut session = session();
    feed(&mut session, &["add 1", "add sopa", "add 2"]);

    let lines = session.order().lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name().as_str(), "SOPA");
    assert_eq!(lines[0].quantity().value(), 2.);
    assert_eq!(session.order().grand_total().value(), Price::new(16.5));
}

#[test]
fn missing_menu_button_is_reported() {
    let mut session = session();
    feed(&mut session, &["add 99"]);
    assert!(session.order().is_empty());
    assert_eq!(session.message(), Some("no menu button 99"));
}

#[test]
fn unlisted_name_is_added_at_zero() {
    let mut session = session();
    feed(&mut session, &["add FOO"]);
    let line = session.order().line(item(1)).unwrap();
    assert_eq!(line.unit_price(), Price::ZERO);
}

#[test]
fn keypad_confirm_sets_selected_quantity() {
    let mut session = session();
    feed(&mut session, &["add SOPA", "sel 1", "key 3", "ok"]);

    let line = session.order().line(item(1)).unwrap();
    assert_eq!(line.quantity().value(), 3.);
    assert_eq!(line.line_total(), Price::new(15.));
    assert!(session.keypad().is_blank());
}

#[test]
fn keypad_is_cleared_even_when_nothing_applies() {
    let mut session = session();
    feed(&mut session, &["add SOPA", "key 4", "ok"]);
    assert!(session.keypad().is_blank());
    assert_eq!(session.order().line(item(1)).unwrap().quantity().value(), 1.);

    feed(&mut session, &["sel 1", "key 1..2", "enter"]);
    assert!(session.keypad().is_blank());
    assert_eq!(session.order().line(item(1)).unwrap().quantity().value(), 1.);
}

#[test]
fn clear_discards_keypad_entry() {
    let mut session = session();
    feed(&mut session, &["add SOPA", "sel 1", "key 7", "clear", "ok"]);
    assert_eq!(session.order().line(item(1)).unwrap().quantity().value(), 1.);
}

#[test]
fn selecting_a_missing_line_keeps_previous_selection() {
    let mut session = session();
    feed(&mut session, &["add SOPA", "sel 1", "sel 5"]);
    assert_eq!(session.selected(), Some(item(1)));
    assert_eq!(session.message(), Some("no order line 5"));
}

#[test]
fn customer_view_blocks_menu_commands_until_closed() {
    let mut session = session();
    feed(&mut session, &["customer", "add SOPA"]);
    assert_eq!(session.view(), View::CustomerSelection);
    assert!(session.order().is_empty());
    assert_eq!(session.customers().to_vec(), vec!["CLIENTES VARIOS".to_owned()]);

    feed(&mut session, &["select", "add SOPA"]);
    assert_eq!(session.view(), View::Menu);
    assert_eq!(session.order().lines().len(), 1);
}

#[test]
fn quit_ends_the_session() {
    let mut session = session();
    assert_eq!(session.handle(parse_command("quit")), Flow::Quit);
}

#[tokio::test]
async fn run_redraws_after_every_command() {
    let input: &[u8] = b"add SOPA\nadd SOPA\nadd CREMA\nquit\nadd SOPA\n";
    let mut output = Vec::new();

    run(session(), "S/", input, &mut output).await.unwrap();

    let screen = String::from_utf8(output).unwrap();
    assert_eq!(screen.matches("KEYPAD:").count(), 4);
    assert!(screen.contains("TOTAL: S/ 16.50"));
    assert!(!screen.contains("TOTAL: S/ 21.50"));
}

#[tokio::test]
async fn run_stops_at_end_of_input() {
    let input: &[u8] = b"add 3\n";
    let mut output = Vec::new();

    run(session(), "$", input, &mut output).await.unwrap();

    let screen = String::from_utf8(output).unwrap();
    assert_eq!(screen.matches("KEYPAD:").count(), 2);
    assert!(screen.contains("ENTRADAS"));
    assert!(screen.contains("TOTAL: $ 0.00"));
}

#[test]
fn padded_catalog_name_matches_typed_name() {
    let price_list =
        PriceList::from_entries([(ProductName::new(" SOPA ").unwrap(), Price::new(5.))]);
    let mut session = Session::new(OrderAggregator::new(price_list), vec![]);
    feed(&mut session, &["add SOPA", "add 1"]);

    let lines = session.order().lines();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].name().as_str(), "SOPA");
    assert_eq!(lines[0].quantity().value(), 2.);
    assert_eq!(session.order().grand_total().value(), Price::new(10.));
}

#[test]
fn oversized_keypad_entry_leaves_line_alone() {
    let mut session = session();
    feed(&mut session, &["add 9", "sel 1", "key 1", "ok"]);
    let keys = format!("key {}", "9".repeat(308));
    feed(&mut session, &[keys.as_str(), "ok"]);

    assert!(session.keypad().is_blank());
    let line = session.order().line(item(1)).unwrap();
    assert_eq!(line.quantity().value(), 1.);
    assert_eq!(line.line_total(), Price::new(18.));
}
