use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

pub type RegexHandler = fn(&mut Lexer, Regex);

#[derive(Clone)]
pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

#[derive(Clone)]
pub struct Lexer {
    patterns: Vec<RegexPattern>,
    tokens: Vec<Token>,
    source: String,
    pos: usize,
    line: u32,
    column: u32,
}

impl Lexer {
    pub fn new(source: String) -> Lexer {
        Lexer {
            pos: 0,
            line: 1,
            column: 1,
            tokens: vec![],
            patterns: vec![
                RegexPattern { regex: Regex::new("[a-zA-Z][a-zA-Z0-9]*").unwrap(), handler: symbol_handler},
                RegexPattern { regex: Regex::new("[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler},
                RegexPattern { regex: Regex::new("\\s+").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("\\/\\/.*").unwrap(), handler: skip_handler},
                RegexPattern { regex: Regex::new("\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen, "(")},
                RegexPattern { regex: Regex::new("\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen, ")")},
                RegexPattern { regex: Regex::new("==").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Equals, "==")},
                RegexPattern { regex: Regex::new("=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment, "=")},
                RegexPattern { regex: Regex::new("\\*\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::StarStar, "**")},
                RegexPattern { regex: Regex::new("\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus, "+")},
                RegexPattern { regex: Regex::new("-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash, "-")},
                RegexPattern { regex: Regex::new("/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash, "/")},
                RegexPattern { regex: Regex::new("\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star, "*")},
                RegexPattern { regex: Regex::new("%").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Percent, "%")},
            ],
            source,
        }
    }

    pub fn position(&self) -> Position {
        Position {
            line: self.line,
            column: self.column,
        }
    }

    /// Moves the cursor past `text`, updating the line and column counters.
    /// Columns count characters, not bytes.
    pub fn advance_over(&mut self, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }

        self.pos += text.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> char {
        self.remainder().chars().next().unwrap_or_default()
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }
}

fn number_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_over(&matched);

    lexer.push(MK_TOKEN!(
        TokenKind::Number,
        matched,
        Span {
            start,
            end: lexer.position(),
        }
    ));
}

fn skip_handler(lexer: &mut Lexer, regex: Regex) {
    let matched = regex.find(lexer.remainder()).unwrap().as_str().to_string();
    lexer.advance_over(&matched);
}

fn symbol_handler(lexer: &mut Lexer, regex: Regex) {
    let value = regex.find(lexer.remainder()).unwrap().as_str().to_string();

    let start = lexer.position();
    lexer.advance_over(&value);
    let end = lexer.position();

    // Maximal munch: the whole word is read first, then checked against the
    // keyword table, so `lets` and `let2` stay identifiers.
    if let Some(kind) = RESERVED_LOOKUP.get(value.as_str()) {
        lexer.push(MK_TOKEN!(*kind, value, Span { start, end }));
    } else {
        lexer.push(MK_TOKEN!(TokenKind::Identifier, value, Span { start, end }));
    }
}

pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(String::from(source));

    while !lex.at_eof() {
        let mut matched = false;

        for pattern in lex.clone().patterns.iter() {
            let string = lex.remainder().to_string();
            let match_here = pattern.regex.find(&string);

            if match_here.is_some() && match_here.unwrap().start() == 0 {
                (pattern.handler)(&mut lex, pattern.regex.clone());
                matched = true;
                break;
            }
        }

        if !matched {
            return Err(Error::new(
                ErrorImpl::UnrecognisedToken {
                    token: lex.at().to_string(),
                },
                lex.position(),
            ));
        }
    }

    let position = lex.position();
    lex.push(MK_TOKEN!(
        TokenKind::EOF,
        String::from("EOF"),
        Span {
            start: position,
            end: position,
        }
    ));
    Ok(lex.tokens)
}
