use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display};

lazy_static! {
    pub static ref RESERVED_LOOKUP: HashMap<&'static str, TokenKind> = {
        let mut map = HashMap::new();
        map.insert("assert", TokenKind::Assert);
        map.insert("error", TokenKind::Error);
        map.insert("if", TokenKind::If);
        map.insert("then", TokenKind::Then);
        map.insert("else", TokenKind::Else);
        map.insert("true", TokenKind::True);
        map.insert("false", TokenKind::False);
        map.insert("for", TokenKind::For);
        map.insert("function", TokenKind::Function);
        map.insert("import", TokenKind::Import);
        map.insert("importstr", TokenKind::Importstr);
        map.insert("tailstrict", TokenKind::Tailstrict);
        map.insert("in", TokenKind::In);
        map.insert("local", TokenKind::Local);
        map.insert("null", TokenKind::Null);
        map.insert("self", TokenKind::SelfRef);
        map.insert("super", TokenKind::Super);
        map
    };
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    EOF,
    Identifier,

    // {}[],.();
    LBrace,
    RBrace,
    LBracket,
    RBracket,
    Comma,
    Dot,
    LParen,
    RParen,
    Semicolon,

    // !$:~+-&|^=<>*/%
    Bang,
    Dollar,
    Colon,
    Tilde,
    Plus,
    Minus,
    Amp,
    Pipe,
    Caret,
    Assign,
    LAngle,
    RAngle,
    Star,
    Slash,
    Perc,

    // Reserved
    Assert,
    Error,
    If,
    Then,
    Else,
    True,
    False,
    For,
    Function,
    Import,
    Importstr,
    Tailstrict,
    In,
    Local,
    Null,
    SelfRef, // self
    Super,
}

impl TokenKind {
    pub fn is_reserved(&self) -> bool {
        RESERVED_LOOKUP.values().any(|kind| kind == self)
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Looks up an identifier lexeme in the keyword table.
///
/// The match is exact and case-sensitive, so `"Import"` and `"iff"` both come
/// back as [`TokenKind::Identifier`].
pub fn classify(ident: &str) -> TokenKind {
    RESERVED_LOOKUP
        .get(ident)
        .copied()
        .unwrap_or(TokenKind::Identifier)
}

/// Kind of a single-character punctuation or operator token, if `c` is one.
pub fn symbol_kind(c: char) -> Option<TokenKind> {
    let kind = match c {
        '{' => TokenKind::LBrace,
        '}' => TokenKind::RBrace,
        '[' => TokenKind::LBracket,
        ']' => TokenKind::RBracket,
        ',' => TokenKind::Comma,
        '.' => TokenKind::Dot,
        '(' => TokenKind::LParen,
        ')' => TokenKind::RParen,
        ';' => TokenKind::Semicolon,
        '!' => TokenKind::Bang,
        '$' => TokenKind::Dollar,
        ':' => TokenKind::Colon,
        '~' => TokenKind::Tilde,
        '+' => TokenKind::Plus,
        '-' => TokenKind::Minus,
        '&' => TokenKind::Amp,
        '|' => TokenKind::Pipe,
        '^' => TokenKind::Caret,
        '=' => TokenKind::Assign,
        '<' => TokenKind::LAngle,
        '>' => TokenKind::RAngle,
        '*' => TokenKind::Star,
        '/' => TokenKind::Slash,
        '%' => TokenKind::Perc,
        _ => return None,
    };

    Some(kind)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Token {{\nkind: {},\nvalue: {}}}", self.kind, self.value)
    }
}

impl Token {
    fn is_one_of_many(&self, tokens: Vec<TokenKind>) -> bool {
        for token in tokens {
            if token == self.kind {
                return true;
            }
        }

        false
    }

    pub fn debug(&self) {
        if self.is_one_of_many(vec![TokenKind::Identifier]) || self.kind.is_reserved() {
            println!("{} ({})", self.kind, self.value);
        } else {
            println!("{} ()", self.kind);
        }
    }
}
