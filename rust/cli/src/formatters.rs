//! Card and hand formatters for terminal display.
//!
//! Cards print as value followed by suit symbol. Unicode suit symbols are
//! used where the terminal is expected to render them, with an ASCII letter
//! fallback otherwise.
//!
//! ## Example
//!
//! ```rust
//! use cardplay_engine::cards::{Card, Suit, Value};
//! use cardplay_cli::formatters::{format_card, format_hand};
//!
//! let ace_spades = Card::new(Suit::Spades, Value::Ace);
//! assert!(format_card(&ace_spades) == "A♠" || format_card(&ace_spades) == "As");
//! assert!(format_hand(&[ace_spades]).starts_with("[A"));
//! ```

use cardplay_engine::cards::{Card, Suit, Value};

/// Check if the terminal supports Unicode card symbols.
///
/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM), or VS Code (VSCODE_INJECTION). On Unix-like systems,
/// assumes Unicode support.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn format_suit(suit: &Suit) -> String {
    if supports_unicode() {
        match suit {
            Suit::Hearts => "♥",
            Suit::Diamonds => "♦",
            Suit::Clubs => "♣",
            Suit::Spades => "♠",
        }
        .to_string()
    } else {
        match suit {
            Suit::Hearts => "h",
            Suit::Diamonds => "d",
            Suit::Clubs => "c",
            Suit::Spades => "s",
        }
        .to_string()
    }
}

/// Format a Value as a single character (A, 2-9, T, J, Q, K).
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Ace => "A",
        Value::Two => "2",
        Value::Three => "3",
        Value::Four => "4",
        Value::Five => "5",
        Value::Six => "6",
        Value::Seven => "7",
        Value::Eight => "8",
        Value::Nine => "9",
        Value::Ten => "T",
        Value::Jack => "J",
        Value::Queen => "Q",
        Value::King => "K",
    }
    .to_string()
}

pub fn format_card(card: &Card) -> String {
    format!("{}{}", format_value(&card.value), format_suit(&card.suit))
}

/// Format a hand in bracket notation, `[]` when empty.
pub fn format_hand(cards: &[Card]) -> String {
    let formatted: Vec<String> = cards.iter().map(format_card).collect();
    format!("[{}]", formatted.join(" "))
}
