// logtally - app/contacts.rs
//
// Interactive contact book: command parsing, handlers, and dispatch.
//
// Handlers return `Result<String, BotError>`; `dispatch` is the one place
// where an error becomes the text shown to the user.

use crate::util::error::BotError;

/// Name to phone mapping that remembers insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContactBook {
    contacts: Vec<(String, String)>,
}

impl ContactBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self, name: &str) -> Option<&str> {
        self.contacts
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, phone)| phone.as_str())
    }

    /// Contacts in the order they were added.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.contacts
            .iter()
            .map(|(name, phone)| (name.as_str(), phone.as_str()))
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    fn slot(&mut self, name: &str) -> Option<&mut String> {
        self.contacts
            .iter_mut()
            .find(|(n, _)| n == name)
            .map(|(_, phone)| phone)
    }
}

/// A recognised bot command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    Exit,
    Unknown,
}

impl Command {
    /// Map a lower-cased command word to a command.
    pub fn from_word(word: &str) -> Self {
        match word {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" => Self::Change,
            "phone" => Self::Phone,
            "all" => Self::All,
            "close" | "exit" => Self::Exit,
            _ => Self::Unknown,
        }
    }
}

/// What the bot loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print these lines and prompt again.
    Continue(Vec<String>),
    /// Print this line and stop.
    Exit(String),
}

/// Split user input into a lower-cased command word and its arguments.
///
/// Returns `None` for blank input.
pub fn parse_input(input: &str) -> Option<(Command, Vec<String>)> {
    let mut tokens = input.split_whitespace();
    let word = tokens.next()?.to_lowercase();
    Some((Command::from_word(&word), tokens.map(str::to_string).collect()))
}

/// Run one command against `book`.
pub fn dispatch(book: &mut ContactBook, command: &Command, args: &[String]) -> Outcome {
    let result = match command {
        Command::Exit => return Outcome::Exit("Good bye!".to_string()),
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(book, args),
        Command::Change => change_contact(book, args),
        Command::Phone => show_phone(book, args),
        Command::All => {
            return Outcome::Continue(
                book.iter()
                    .map(|(name, phone)| format!("{name}: {phone}"))
                    .collect(),
            )
        }
        Command::Unknown => Ok("Invalid command.".to_string()),
    };

    let reply = result.unwrap_or_else(|e| {
        tracing::debug!(error = ?e, "Command rejected");
        e.to_string()
    });
    Outcome::Continue(vec![reply])
}

fn name_and_phone(args: &[String]) -> Result<(&str, &str), BotError> {
    match args {
        [name, phone] => Ok((name.as_str(), phone.as_str())),
        _ => Err(BotError::MissingNameAndPhone),
    }
}

fn add_contact(book: &mut ContactBook, args: &[String]) -> Result<String, BotError> {
    let (name, phone) = name_and_phone(args)?;
    if book.phone(name).is_some() {
        return Ok("The name is already in contacts.\n\
                   If you'd like to change contact,\n\
                   please use 'change' command"
            .to_string());
    }
    book.contacts.push((name.to_string(), phone.to_string()));
    Ok("Contact added.".to_string())
}

fn change_contact(book: &mut ContactBook, args: &[String]) -> Result<String, BotError> {
    let (name, phone) = name_and_phone(args)?;
    match book.slot(name) {
        Some(slot) => {
            *slot = phone.to_string();
            Ok("Contact changed.".to_string())
        }
        None => Ok("There is no such name in contacts".to_string()),
    }
}

fn show_phone(book: &ContactBook, args: &[String]) -> Result<String, BotError> {
    let name = args.first().ok_or(BotError::MissingName)?;
    book.phone(name)
        .map(str::to_string)
        .ok_or_else(|| BotError::UnknownContact { name: name.clone() })
}
