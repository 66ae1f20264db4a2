//! Command parser for the REPL.
//!
//! Deliberately simple: lowercase, collapse whitespace, split on spaces.
//! The first token picks the verb through a synonym table, a bare direction
//! token ("n", "north") is a movement shortcut, and everything else rides
//! along in `args`.
//!
//! Examples:
//!   "take lamp"   -> Verb::Take, args = ["lamp"]
//!   "go north"    -> Verb::Go, direction = North
//!   "n"           -> Verb::Go, direction = North
//!   "frobnicate"  -> Verb::Custom("frobnicate")

use crate::models::types::Direction;
use once_cell::sync::Lazy;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verb {
    Look,
    Examine,
    Go,
    Take,
    Drop,
    Inventory,
    Exits,
    Verbs,
    Save,
    Help,
    Quit,
    /// Anything not in the known list, kept raw for the fallback message
    Custom(String),
}

impl Verb {
    pub fn as_str(&self) -> &str {
        match self {
            Verb::Look => "look",
            Verb::Examine => "examine",
            Verb::Go => "go",
            Verb::Take => "take",
            Verb::Drop => "drop",
            Verb::Inventory => "inventory",
            Verb::Exits => "exits",
            Verb::Verbs => "verbs",
            Verb::Save => "save",
            Verb::Help => "help",
            Verb::Quit => "quit",
            Verb::Custom(s) => s.as_str(),
        }
    }

    /// Canonical names, for the `verbs` command.
    pub const KNOWN: [&'static str; 11] = [
        "look",
        "examine",
        "go",
        "take",
        "drop",
        "inventory",
        "exits",
        "verbs",
        "save",
        "help",
        "quit",
    ];
}

static VERB_MAP: Lazy<HashMap<&'static str, Verb>> = Lazy::new(|| {
    use Verb::*;
    let mut m = HashMap::new();
    for k in ["look", "l"] {
        m.insert(k, Look);
    }
    for k in ["examine", "x", "inspect"] {
        m.insert(k, Examine);
    }
    m.insert("go", Go);
    for k in ["take", "get", "grab"] {
        m.insert(k, Take);
    }
    m.insert("drop", Drop);
    for k in ["inventory", "inv", "i"] {
        m.insert(k, Inventory);
    }
    m.insert("exits", Exits);
    for k in ["verbs", "commands"] {
        m.insert(k, Verbs);
    }
    m.insert("save", Save);
    for k in ["help", "?"] {
        m.insert(k, Help);
    }
    for k in ["quit", "q"] {
        m.insert(k, Quit);
    }
    m
});

#[derive(Debug, Clone)]
pub struct Intent {
    pub verb: Verb,
    /// Tokens after the verb
    pub args: Vec<String>,
    /// Parsed movement target, for Verb::Go
    pub direction: Option<Direction>,
    /// Normalized input line
    pub original: String,
}

pub fn parse_command(input: &str) -> Intent {
    let normalized = normalize(input);
    let tokens: Vec<&str> = normalized.split(' ').filter(|t| !t.is_empty()).collect();

    let Some(&head) = tokens.first() else {
        return Intent {
            verb: Verb::Custom(String::new()),
            args: vec![],
            direction: None,
            original: normalized,
        };
    };

    // Direction-only shortcut: "n", "north", ...
    if let Some(dir) = Direction::parse(head) {
        return Intent {
            verb: Verb::Go,
            args: tokens[1..].iter().map(|t| t.to_string()).collect(),
            direction: Some(dir),
            original: normalized,
        };
    }

    let verb = match VERB_MAP.get(head) {
        Some(v) => v.clone(),
        None => Verb::Custom(head.to_string()),
    };
    let args: Vec<String> = tokens[1..].iter().map(|t| t.to_string()).collect();

    let direction = if verb == Verb::Go {
        args.first().and_then(|t| Direction::parse(t))
    } else {
        None
    };

    Intent {
        verb,
        args,
        direction,
        original: normalized,
    }
}

fn normalize(s: &str) -> String {
    // lowercase, trim, collapse runs of whitespace
    let mut out = String::with_capacity(s.len());
    let mut last_space = false;
    for ch in s.trim().chars() {
        let c = ch.to_ascii_lowercase();
        if c.is_whitespace() {
            if !last_space {
                out.push(' ');
                last_space = true;
            }
        } else {
            out.push(c);
            last_space = false;
        }
    }
    out
}
