use tracing::{debug, info};

use super::command::{Command, MenuChoice, HELP};
use crate::common::simple_types::{ItemNumber, ProductName};
use crate::take_order::{KeypadBuffer, OrderAggregator, OrderEvent};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum View {
    Menu,
    CustomerSelection,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Operator-facing state around one order: the active view, the selected
/// line, the keypad and the last message shown.
#[derive(Debug)]
pub struct Session {
    order: OrderAggregator,
    keypad: KeypadBuffer,
    selected: Option<ItemNumber>,
    view: View,
    customers: Vec<String>,
    message: Option<String>,
}

impl Session {
    pub fn new(order: OrderAggregator, customers: Vec<String>) -> Self {
        Self {
            order,
            keypad: KeypadBuffer::new(),
            selected: None,
            view: View::Menu,
            customers,
            message: None,
        }
    }

    pub fn order(&self) -> &OrderAggregator {
        &self.order
    }
    pub fn keypad(&self) -> &KeypadBuffer {
        &self.keypad
    }
    pub fn selected(&self) -> Option<ItemNumber> {
        self.selected
    }
    pub fn view(&self) -> View {
        self.view
    }
    pub fn customers(&self) -> &[String] {
        &self.customers
    }
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn handle(&mut self, command: Command) -> Flow {
        self.message = None;
        debug!(?command, view = ?self.view, "handling command");

        match command {
            Command::Quit => return Flow::Quit,
            Command::Empty | Command::Show => {}
            Command::Help => self.message = Some(HELP.to_owned()),
            Command::Unknown(input) => {
                self.message = Some(format!("unknown command {input:?}, try \"help\""));
            }
            Command::OpenCustomers => self.view = View::CustomerSelection,
            Command::CloseCustomers => {
                if self.view == View::CustomerSelection {
                    self.close_customers();
                } else {
                    self.message = Some("not in customer selection".to_owned());
                }
            }
            command if self.view == View::CustomerSelection => {
                debug!(?command, "menu command in customer selection");
                self.message = Some("go back to the menu first".to_owned());
            }
            Command::Add(choice) => self.add(choice),
            Command::Select(item) => self.select(item),
            Command::Keys(keys) => {
                for key in keys.chars() {
                    self.keypad.press(key);
                }
            }
            Command::ClearKeys => self.keypad.clear(),
            Command::Confirm => self.confirm(),
        }
        Flow::Continue
    }

    fn close_customers(&mut self) {
        self.view = View::Menu;
    }

    fn add(&mut self, choice: MenuChoice) {
        let name = match self.resolve(choice) {
            Ok(name) => name,
            Err(message) => {
                self.message = Some(message);
                return;
            }
        };
        let event = self.order.add_or_increment(name);
        match &event {
            OrderEvent::LineAdded(added) if added.unit_price.value() == 0. => {
                info!(name = %added.name, "line added at zero price");
            }
            event if !event.changed_order() => {
                self.message = Some("order is full".to_owned());
            }
            _ => {}
        }
    }

    fn resolve(&self, choice: MenuChoice) -> Result<ProductName, String> {
        let price_list = self.order.price_list();
        let name = match choice {
            MenuChoice::Position(position) => price_list
                .name_at(position)
                .map(str::to_owned)
                .ok_or_else(|| format!("no menu button {position}"))?,
            MenuChoice::Name(typed) if price_list.price_of(&typed).is_some() => typed,
            MenuChoice::Name(typed) => price_list
                .names()
                .find(|listed| listed.to_lowercase() == typed.to_lowercase())
                .map(str::to_owned)
                .unwrap_or(typed),
        };
        ProductName::new(name).map_err(|err| err.to_string())
    }

    fn select(&mut self, item: u32) {
        match ItemNumber::new(item).filter(|item| self.order.line(*item).is_some()) {
            Some(item) => self.selected = Some(item),
            None => self.message = Some(format!("no order line {item}")),
        }
    }

    fn confirm(&mut self) {
        let raw_input = self.keypad.take();
        let Some(item) = self.selected else {
            debug!("confirm without a selected line");
            return;
        };
        if raw_input.trim().is_empty() {
            return;
        }
        let event = self.order.set_quantity(item, &raw_input);
        if !event.changed_order() {
            debug!(?event, "keypad entry not applied");
        }
    }
}
