use std::rc::Rc;

use crate::{errors::errors::{Error, ErrorImpl}, Position, MK_TOKEN};

use super::tokens::{classify, symbol_kind, Token, TokenKind};

/// Characters accepted inside identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentifierSet {
    /// `[A-Za-z_][A-Za-z0-9_]*`
    #[default]
    Ascii,
    /// Any alphabetic start, any alphanumeric continuation, plus `_`.
    Unicode,
}

impl IdentifierSet {
    pub fn is_start(&self, c: char) -> bool {
        match self {
            IdentifierSet::Ascii => c.is_ascii_alphabetic() || c == '_',
            IdentifierSet::Unicode => c.is_alphabetic() || c == '_',
        }
    }

    pub fn is_continuation(&self, c: char) -> bool {
        match self {
            IdentifierSet::Ascii => c.is_ascii_alphanumeric() || c == '_',
            IdentifierSet::Unicode => c.is_alphanumeric() || c == '_',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Scanning,
    InLineComment,
    InBlockComment,
    Done,
}

#[derive(Clone)]
pub struct Lexer {
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    position: Position,
    identifiers: IdentifierSet,
    state: ScanState,
}

impl Lexer {
    pub fn new(source: String, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Rc::new(file)
        } else {
            Rc::new(String::from("<stdin>"))
        };

        Lexer {
            tokens: vec![],
            source,
            pos: 0,
            position: Position::new(file_name),
            identifiers: IdentifierSet::default(),
            state: ScanState::Scanning,
        }
    }

    pub fn with_identifiers(mut self, identifiers: IdentifierSet) -> Lexer {
        self.identifiers = identifiers;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn position(&self) -> &Position {
        &self.position
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    /// The character one past the cursor, without consuming anything.
    pub fn peek(&self) -> Option<char> {
        let mut chars = self.source[self.pos..].chars();
        chars.next()?;
        chars.next()
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.at()?;
        self.pos += c.len_utf8();

        if c == '\n' {
            self.position.next_line();
        } else {
            self.position.next_char();
        }

        Some(c)
    }

    fn push(&mut self, token: Token) -> Token {
        self.tokens.push(token.clone());
        token
    }

    /// Scans and returns the next token.
    ///
    /// Whitespace and comments are skipped. Once the input is exhausted every
    /// call returns an `EOF` token, which is not recorded in [`Lexer::tokens`].
    pub fn next_token(&mut self) -> Result<Token, Error> {
        loop {
            match self.state {
                ScanState::Done => return Ok(MK_TOKEN!(TokenKind::EOF, String::new())),
                ScanState::InLineComment => {
                    self.skip_line_comment();
                    self.state = ScanState::Scanning;
                }
                ScanState::InBlockComment => {
                    self.skip_block_comment();
                    self.state = ScanState::Scanning;
                }
                ScanState::Scanning => {
                    self.skip_whitespace();

                    let Some(c) = self.at() else {
                        self.state = ScanState::Done;
                        continue;
                    };

                    match (c, self.peek()) {
                        ('#', _) => {
                            self.advance();
                            self.state = ScanState::InLineComment;
                        }
                        ('/', Some('/')) => {
                            self.advance();
                            self.advance();
                            self.state = ScanState::InLineComment;
                        }
                        ('/', Some('*')) => {
                            self.advance();
                            self.advance();
                            self.state = ScanState::InBlockComment;
                        }
                        _ => return self.scan_token(c),
                    }
                }
            }
        }
    }

    fn scan_token(&mut self, c: char) -> Result<Token, Error> {
        if let Some(kind) = symbol_kind(c) {
            self.advance();
            return Ok(self.push(MK_TOKEN!(kind, c.to_string())));
        }

        if self.identifiers.is_start(c) {
            let start = self.pos;
            while let Some(next) = self.at() {
                if !self.identifiers.is_continuation(next) {
                    break;
                }
                self.advance();
            }

            let value = &self.source[start..self.pos];
            return Ok(self.push(MK_TOKEN!(classify(value), String::from(value))));
        }

        Err(Error::new(
            ErrorImpl::UnknownCharacter { character: c },
            self.position.clone(),
        ))
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.at() {
            if !matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C') {
                break;
            }
            self.advance();
        }
    }

    // Consumes through the terminating newline, or to end of input.
    fn skip_line_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '\n' {
                break;
            }
        }
    }

    // Only the exact pair `*/` closes the comment. Unterminated comments run to end of input.
    fn skip_block_comment(&mut self) {
        while let Some(c) = self.advance() {
            if c == '*' && self.at() == Some('/') {
                self.advance();
                break;
            }
        }
    }
}

/// Tokenizes a whole source, returning its tokens followed by a single `EOF`.
pub fn tokenize(source: String, file: Option<String>) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(source, file);

    while lex.next_token()?.kind != TokenKind::EOF {}

    let mut tokens = lex.tokens;
    tokens.push(MK_TOKEN!(TokenKind::EOF, String::new()));
    Ok(tokens)
}
