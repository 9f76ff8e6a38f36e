//! Pattern-table tokenizer for the same token set as the automaton.
//!
//! The first anchored pattern that matches at the cursor wins, so order in
//! `PATTERNS` matters: comments before the lone `{`, exponent and decimal
//! reals before integers, and `:=` before the `:` delimiter.
//!
//! Literals and operators follow the automaton's spellings (`2e5`, `7.`,
//! `.5`, relational runs such as `==`). The table is more permissive than the
//! automaton where the automaton rejects input: an operator may be followed
//! directly by a delimiter and a word may start with `_`. One accepted form
//! differs: a `.` glued to a preceding word or real and followed by digits
//! (`x.5`, `1..5`) is a leading-dot real here but a delimiter there.

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_DEFAULT_HANDLER, MK_TOKEN,
};

use super::{
    reserved::ReservedWords,
    tokens::{Token, TokenKind},
};

pub type RegexHandler = fn(&mut RegexLexer<'_>, &str) -> Result<(), ErrorImpl>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new(r"^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\{[^}]*\}").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new(r"^\{").unwrap(), handler: unterminated_comment_handler },
        RegexPattern { regex: Regex::new(r"^[a-zA-Z_][a-zA-Z0-9_]*").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new(r"^[0-9]+[eE][0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Real) },
        RegexPattern { regex: Regex::new(r"^[0-9]+\.[0-9]*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Real) },
        RegexPattern { regex: Regex::new(r"^\.[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Real) },
        RegexPattern { regex: Regex::new(r"^[0-9]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Integer) },
        RegexPattern { regex: Regex::new(r"^:=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assign) },
        RegexPattern { regex: Regex::new(r"^[=<>]+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::RelationalOperator) },
        RegexPattern { regex: Regex::new(r"^[+\-]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::AdditiveOperator) },
        RegexPattern { regex: Regex::new(r"^[*/]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::MultiplicativeOperator) },
        RegexPattern { regex: Regex::new(r"^[;,.:()]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Delimiter) },
    ];
}

pub struct RegexLexer<'r> {
    tokens: Vec<Token>,
    source: &'r str,
    reserved: &'r ReservedWords,
    pos: usize,
    line: usize,
}

impl<'r> RegexLexer<'r> {
    pub fn new(source: &'r str, reserved: &'r ReservedWords) -> RegexLexer<'r> {
        RegexLexer {
            tokens: vec![],
            source,
            reserved,
            pos: 0,
            line: 1,
        }
    }

    pub fn advance_n(&mut self, matched: &str) {
        self.pos += matched.len();
    }

    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn at(&self) -> Option<char> {
        self.source[self.pos..].chars().next()
    }

    pub fn remainder(&self) -> &'r str {
        &self.source[self.pos..]
    }

    pub fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub fn position(&self) -> Position {
        let line_start = self.source[..self.pos].rfind('\n').map_or(0, |i| i + 1);
        let column = self.source[line_start..self.pos].chars().count() + 1;

        Position::new(self.line, column)
    }
}

fn skip_handler(lexer: &mut RegexLexer, matched: &str) -> Result<(), ErrorImpl> {
    lexer.line += matched.matches('\n').count();
    lexer.advance_n(matched);
    Ok(())
}

fn unterminated_comment_handler(_lexer: &mut RegexLexer, _matched: &str) -> Result<(), ErrorImpl> {
    Err(ErrorImpl::UnterminatedComment)
}

fn symbol_handler(lexer: &mut RegexLexer, matched: &str) -> Result<(), ErrorImpl> {
    let kind = if lexer.reserved.contains(matched) {
        TokenKind::ReservedWord
    } else {
        TokenKind::Identifier
    };

    let line = lexer.line;
    lexer.push(MK_TOKEN!(kind, String::from(matched), line));
    lexer.advance_n(matched);
    Ok(())
}

pub fn tokenize_regex(source: &str, reserved: &ReservedWords) -> Result<Vec<Token>, Error> {
    let mut lex = RegexLexer::new(source, reserved);

    debug!("tokenizing {} bytes with the pattern table", source.len());

    while !lex.at_eof() {
        let remaining = lex.remainder();
        let matched = PATTERNS.iter().find_map(|pattern| {
            pattern
                .regex
                .find(remaining)
                .map(|found| (pattern.handler, found.as_str()))
        });

        let Some((handler, text)) = matched else {
            let character = lex.at().unwrap_or_default();
            return Err(Error::new(
                ErrorImpl::InvalidCharacter { character },
                lex.position(),
            ));
        };

        handler(&mut lex, text).map_err(|error| Error::new(error, lex.position()))?;
    }

    debug!("tokenized into {} tokens", lex.tokens.len());

    Ok(lex.tokens)
}
