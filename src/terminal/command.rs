/// Menu button: either its 1-based grid position or the product name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Position(usize),
    Name(String),
}

/// One line of operator input.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Command {
    Add(MenuChoice),
    Select(u32),
    Keys(String),
    Confirm,
    ClearKeys,
    OpenCustomers,
    CloseCustomers,
    Show,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

pub const HELP: &str = "\
add <n|NAME>   add a menu item (by button number or name)
sel <item>     select an order line
key <digits>   type on the keypad (digits and '.')
ok | enter     apply the keypad to the selected line
clear          clear the keypad
customer       open customer selection
back | select  return from customer selection
show           redraw the screen
help           this text
quit | close   leave";

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }

    let (keyword, rest) = match input.split_once(char::is_whitespace) {
        Some((keyword, rest)) => (keyword, rest.trim()),
        None => (input, ""),
    };

    match (keyword.to_ascii_lowercase().as_str(), rest) {
        ("add", "") | ("sel", "") | ("key", "") => Command::Unknown(input.to_owned()),
        ("add", choice) => Command::Add(match choice.parse::<usize>() {
            Ok(position) => MenuChoice::Position(position),
            Err(_) => MenuChoice::Name(choice.to_owned()),
        }),
        ("sel", item) => match item.parse() {
            Ok(item) => Command::Select(item),
            Err(_) => Command::Unknown(input.to_owned()),
        },
        ("key", keys) => Command::Keys(keys.chars().filter(|c| !c.is_whitespace()).collect()),
        ("ok" | "enter", "") => Command::Confirm,
        ("clear", "") => Command::ClearKeys,
        ("customer", "") => Command::OpenCustomers,
        ("back" | "select", "") => Command::CloseCustomers,
        ("show", "") => Command::Show,
        ("help", "") => Command::Help,
        ("quit" | "close", "") => Command::Quit,
        _ => Command::Unknown(input.to_owned()),
    }
}
