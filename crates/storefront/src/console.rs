//! Line-oriented console front end.
//!
//! Each input line is parsed into a [`Command`], applied to the session by
//! [`execute`], and answered with a [`Reply`] holding text to show. While a
//! removal prompt is open only `yes`, `no`, `help`, and `quit` are accepted,
//! the same way a modal blocks the screen behind it.

use std::fmt::Write as _;
use std::str::FromStr;

use cafe_world_core::{DecreaseRequest, DrinkId, ShopId};

use crate::checkout::{CheckoutHook, CheckoutOutcome};
use crate::error::{AppError, Result};
use crate::screens::{self, cart, drinks, shops};
use crate::state::{AppState, Screen};

/// Console help text.
pub const HELP: &str = "\
Commands:
  shops              list shops near you
  open <shop-id>     open a shop's drink list
  drinks             show the current drink list
  add <id>  | + <id> add one (drink list) or increase (cart)
  minus <id>| - <id> take one away; asks before removing the last one
  yes | no           answer a removal prompt
  cart               open your order
  pay                pay for your order
  back               go back one screen
  help               show this help
  quit               leave";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Shops,
    Open(ShopId),
    Drinks,
    Plus(DrinkId),
    Minus(DrinkId),
    Yes,
    No,
    Cart,
    Pay,
    Back,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(AppError::BadRequest("empty command".to_string()));
        };
        let arg = words.next();
        if words.next().is_some() {
            return Err(AppError::BadRequest(format!("too many arguments to '{verb}'")));
        }

        let command = match verb.to_ascii_lowercase().as_str() {
            "shops" | "home" => Self::Shops,
            "open" => Self::Open(parse_id(verb, arg)?),
            "drinks" | "menu" => Self::Drinks,
            "add" | "plus" | "+" => Self::Plus(parse_id(verb, arg)?),
            "minus" | "-" => Self::Minus(parse_id(verb, arg)?),
            "yes" | "y" => Self::Yes,
            "no" | "n" => Self::No,
            "cart" => Self::Cart,
            "pay" => Self::Pay,
            "back" => Self::Back,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => return Err(AppError::BadRequest(format!("unknown command '{other}'"))),
        };

        if arg.is_some() && !command.takes_argument() {
            return Err(AppError::BadRequest(format!("'{verb}' takes no argument")));
        }
        Ok(command)
    }
}

impl Command {
    const fn takes_argument(self) -> bool {
        matches!(self, Self::Open(_) | Self::Plus(_) | Self::Minus(_))
    }

    /// Commands that stay available while a removal prompt is open.
    const fn allowed_during_prompt(self) -> bool {
        matches!(self, Self::Yes | Self::No | Self::Help | Self::Quit)
    }
}

fn parse_id<T: FromStr>(verb: &str, arg: Option<&str>) -> Result<T> {
    let arg = arg.ok_or_else(|| AppError::BadRequest(format!("'{verb}' needs an id")))?;
    arg.parse()
        .map_err(|_| AppError::BadRequest(format!("'{arg}' is not a valid id")))
}

/// Text to show after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    /// The session should end.
    pub quit: bool,
}

impl Reply {
    fn show(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            quit: false,
        }
    }
}

/// Apply one command to the session.
///
/// # Errors
///
/// Returns a recoverable `AppError` when the command does not apply to the
/// current screen or names an unknown shop or drink.
pub fn execute<H: CheckoutHook>(state: &mut AppState, command: Command, hook: &H) -> Result<Reply> {
    if let Some(pending) = state.removal().pending()
        && !command.allowed_during_prompt()
    {
        return Ok(Reply::show(format!("{} (yes/no)", pending.message())));
    }

    let reply = match command {
        Command::Shops => {
            state_to_shops(state);
            Reply::show(render_shops(state))
        }
        Command::Open(id) => match shops::select(state, id)? {
            shops::ShopSelection::Opened(_) => Reply::show(render_drinks(state)),
            shops::ShopSelection::Closed => {
                Reply::show(state.take_notice().unwrap_or_default())
            }
        },
        Command::Drinks => match state.screen() {
            Screen::Drinks { .. } => Reply::show(render_drinks(state)),
            Screen::Cart { from: Some(_) } => {
                screens::back(state)?;
                Reply::show(render_drinks(state))
            }
            _ => return Err(AppError::WrongScreen("open a shop first".to_string())),
        },
        Command::Plus(id) => {
            let quantity = match state.screen() {
                Screen::Cart { .. } => cart::press_plus(state, id)?,
                _ => drinks::press_plus(state, id)?,
            };
            Reply::show(format!("{} × {quantity}", drink_name(state, id)))
        }
        Command::Minus(id) => {
            let request = match state.screen() {
                Screen::Cart { .. } => cart::press_minus(state, id)?,
                _ => drinks::press_minus(state, id)?,
            };
            Reply::show(match request {
                DecreaseRequest::Ignored => format!("{} is not in your order", drink_name(state, id)),
                DecreaseRequest::Decreased { quantity } => {
                    format!("{} × {quantity}", drink_name(state, id))
                }
                DecreaseRequest::ConfirmationRequired(pending) => {
                    format!("{} (yes/no)", pending.message())
                }
            })
        }
        Command::Yes => match screens::confirm_removal(state) {
            Some(id) => Reply::show(format!("Removed {}", drink_name(state, id))),
            None => Reply::show("Nothing to confirm"),
        },
        Command::No => {
            if screens::cancel_removal(state) {
                Reply::show("Kept it")
            } else {
                Reply::show("Nothing to cancel")
            }
        }
        Command::Cart => {
            screens::go_to_cart(state);
            Reply::show(render_cart(state))
        }
        Command::Pay => match cart::pay_now(state, hook)? {
            CheckoutOutcome::Completed => Reply::show("Thank you! Your order is on its way."),
            CheckoutOutcome::Unavailable => {
                Reply::show("Payment is not available yet. Your order is still in the cart.")
            }
        },
        Command::Back => {
            let screen = screens::back(state)?;
            Reply::show(render_screen(state, screen))
        }
        Command::Help => Reply::show(HELP),
        Command::Quit => Reply {
            text: "Bye!".to_string(),
            quit: true,
        },
    };
    Ok(reply)
}

fn state_to_shops(state: &mut AppState) {
    while state.screen() != Screen::ShopsNearMe {
        if screens::back(state).is_err() {
            break;
        }
    }
}

/// Name of a drink from the cart or the catalog, falling back to its ID.
fn drink_name(state: &AppState, id: DrinkId) -> String {
    state
        .cart()
        .get(id)
        .map(|line| line.name().to_owned())
        .or_else(|| state.catalog().drink(id).map(|drink| drink.name.clone()))
        .unwrap_or_else(|| format!("drink {id}"))
}

/// Render whichever screen is in front.
#[must_use]
pub fn render_screen(state: &AppState, screen: Screen) -> String {
    match screen {
        Screen::ShopsNearMe => render_shops(state),
        Screen::Drinks { .. } => render_drinks(state),
        Screen::Cart { .. } => render_cart(state),
    }
}

/// Shop list as text.
#[must_use]
pub fn render_shops(state: &AppState) -> String {
    let cards = shops::view(state);
    if cards.is_empty() {
        return "No shops nearby.".to_string();
    }

    let mut out = String::from("Shops near you");
    for card in cards {
        let lock = if card.is_available { "open" } else { "closed" };
        let _ = write!(out, "\n  [{}] {} ({lock}", card.id, card.name);
        if !card.delivery_time.is_empty() {
            let _ = write!(out, ", {}", card.delivery_time);
        }
        out.push(')');
        if !card.address.is_empty() {
            let _ = write!(out, " - {}", card.address);
        }
    }
    out
}

/// Drink list as text.
#[must_use]
pub fn render_drinks(state: &AppState) -> String {
    let view = drinks::view(state);
    let mut out = String::from("Drinks");
    for row in &view.rows {
        let _ = write!(out, "\n  [{}] {:<20} {:>8}", row.id, row.name, row.price);
        if row.quantity > 0 {
            let _ = write!(out, "  × {}", row.quantity);
        }
    }
    let _ = write!(out, "\n{}", view.cart_button);
    out
}

/// Cart as text.
#[must_use]
pub fn render_cart(state: &AppState) -> String {
    let view = cart::view(state);
    let mut out = String::from("Your Order");
    if view.is_empty() {
        out.push_str("\n  Your cart is empty.");
    }
    for item in &view.items {
        let _ = write!(
            out,
            "\n  [{}] {:<20} {} × {:<3} {:>8}",
            item.id, item.name, item.price, item.quantity, item.line_price
        );
    }
    let _ = write!(out, "\n  --------\n  Total: {}", view.total);
    out
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use cafe_world_core::{CatalogItem, Price, Shop};

    use super::*;
    use crate::catalog::Catalog;
    use crate::checkout::NoopCheckout;

    fn state() -> AppState {
        AppState::new(Catalog {
            shops: vec![
                Shop {
                    id: ShopId::new(1),
                    name: "Bean There".to_string(),
                    address: "12 Main St".to_string(),
                    image: String::new(),
                    status: "Open".to_string(),
                    delivery_time: "15 min".to_string(),
                    is_available: true,
                },
                Shop {
                    id: ShopId::new(2),
                    name: "Shut Eye".to_string(),
                    address: String::new(),
                    image: String::new(),
                    status: "Closed".to_string(),
                    delivery_time: String::new(),
                    is_available: false,
                },
            ],
            drinks: vec![
                CatalogItem::new(DrinkId::new(1), "A", Price::from_cents(300), ""),
                CatalogItem::new(DrinkId::new(2), "B", Price::from_cents(150), ""),
            ],
        })
    }

    fn run(state: &mut AppState, line: &str) -> Result<Reply> {
        execute(state, line.parse()?, &NoopCheckout)
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!("open 3".parse::<Command>().unwrap(), Command::Open(ShopId::new(3)));
        assert_eq!("+ 2".parse::<Command>().unwrap(), Command::Plus(DrinkId::new(2)));
        assert_eq!("MINUS 2".parse::<Command>().unwrap(), Command::Minus(DrinkId::new(2)));
        assert_eq!("  cart ".parse::<Command>().unwrap(), Command::Cart);
        assert_eq!("y".parse::<Command>().unwrap(), Command::Yes);
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!("".parse::<Command>(), Err(AppError::BadRequest(_))));
        assert!(matches!("add".parse::<Command>(), Err(AppError::BadRequest(_))));
        assert!(matches!("add latte".parse::<Command>(), Err(AppError::BadRequest(_))));
        assert!(matches!("cart 1".parse::<Command>(), Err(AppError::BadRequest(_))));
        assert!(matches!("open 1 2".parse::<Command>(), Err(AppError::BadRequest(_))));
        assert!(matches!("dance".parse::<Command>(), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_closed_shop_shows_notice() {
        let mut state = state();
        let reply = run(&mut state, "open 2").unwrap();
        assert_eq!(reply.text, shops::CLOSED_NOTICE);
        assert_eq!(state.screen(), Screen::ShopsNearMe);
    }

    #[test]
    fn test_order_flow() {
        let mut state = state();
        run(&mut state, "open 1").unwrap();
        run(&mut state, "add 1").unwrap();
        run(&mut state, "add 1").unwrap();
        run(&mut state, "add 2").unwrap();

        let drinks = render_drinks(&state);
        assert!(drinks.ends_with("GO TO CART (2)"));

        let reply = run(&mut state, "minus 2").unwrap();
        assert_eq!(reply.text, "Remove \"B\" from your order? (yes/no)");

        // The prompt blocks everything else until answered.
        let reply = run(&mut state, "cart").unwrap();
        assert!(reply.text.ends_with("(yes/no)"));
        assert!(matches!(state.screen(), Screen::Drinks { .. }));

        assert_eq!(run(&mut state, "yes").unwrap().text, "Removed B");

        let cart = run(&mut state, "cart").unwrap().text;
        assert!(cart.contains("Total: $6.00"));
        assert!(!cart.contains("] B "));
    }

    #[test]
    fn test_pay_with_noop_keeps_order() {
        let mut state = state();
        run(&mut state, "open 1").unwrap();
        run(&mut state, "add 1").unwrap();
        run(&mut state, "cart").unwrap();

        let reply = run(&mut state, "pay").unwrap();
        assert!(reply.text.starts_with("Payment is not available"));
        assert_eq!(state.cart().len(), 1);
    }

    #[test]
    fn test_wrong_screen_errors() {
        let mut state = state();
        assert!(matches!(run(&mut state, "add 1"), Err(AppError::WrongScreen(_))));
        assert!(matches!(run(&mut state, "pay"), Err(AppError::WrongScreen(_))));
        assert!(matches!(run(&mut state, "back"), Err(AppError::WrongScreen(_))));
    }

    #[test]
    fn test_empty_cart_render() {
        let state = state();
        let text = render_cart(&state);
        assert!(text.contains("Your cart is empty."));
        assert!(text.ends_with("Total: $0.00"));
    }

    #[test]
    fn test_quit() {
        let mut state = state();
        assert!(run(&mut state, "quit").unwrap().quit);
    }
}
