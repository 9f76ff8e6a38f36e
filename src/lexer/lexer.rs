use log::debug;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position,
};

use super::{
    reserved::ReservedWords,
    state::{ScanState, State},
    tokens::Token,
};

/// Character-at-a-time driver around [`ScanState`].
///
/// Tracks the column of the next character so errors can point at the
/// offending character; the line comes from the scan state itself.
#[derive(Debug, Clone)]
pub struct Lexer<'r> {
    scan: ScanState<'r>,
    column: usize,
    comment_start: Position,
}

impl<'r> Lexer<'r> {
    pub fn new(reserved: &'r ReservedWords) -> Lexer<'r> {
        Lexer {
            scan: ScanState::new(reserved),
            column: 1,
            comment_start: Position::start(),
        }
    }

    pub fn position(&self) -> Position {
        Position::new(self.scan.line(), self.column)
    }

    pub fn feed(&mut self, c: char) -> Result<(), Error> {
        let at = self.position();
        let was_comment = self.scan.state() == State::Comment;

        self.scan
            .step(c)
            .map_err(|error| Error::new(error, at))?;

        if !was_comment && self.scan.state() == State::Comment {
            self.comment_start = at;
        }

        if c == '\n' {
            self.column = 1;
        } else {
            self.column += 1;
        }

        Ok(())
    }

    pub fn finish(&mut self) -> Result<(), Error> {
        self.scan.finish().map_err(|error| {
            let position = match error {
                ErrorImpl::UnterminatedComment => self.comment_start,
                _ => self.position(),
            };

            Error::new(error, position)
        })
    }

    /// Tokens emitted so far. After a failed `feed` this is the partial
    /// output up to the offending character.
    pub fn tokens(&self) -> &[Token] {
        self.scan.tokens()
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.scan.into_tokens()
    }
}

pub fn tokenize(source: &str, reserved: &ReservedWords) -> Result<Vec<Token>, Error> {
    let mut lex = Lexer::new(reserved);

    debug!("tokenizing {} bytes", source.len());

    for c in source.chars() {
        lex.feed(c)?;
    }

    lex.finish()?;

    let tokens = lex.into_tokens();
    debug!("tokenized into {} tokens", tokens.len());

    Ok(tokens)
}
