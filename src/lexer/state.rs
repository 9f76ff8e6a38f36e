//! The finite-state automaton behind [`super::lexer::tokenize`].
//!
//! Every automaton mode is a [`State`] variant and every input character is
//! reduced to a [`CharClass`]. Each state handler matches on all classes, so
//! an unhandled class is a compile error rather than a runtime surprise.

use log::trace;
use std::mem;

use crate::{errors::errors::ErrorImpl, MK_TOKEN};

use super::{
    reserved::ReservedWords,
    tokens::{Token, TokenKind},
};

type Step = Result<(), ErrorImpl>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum State {
    Initial,
    Comment,
    Identifier,
    Integer,
    Dot,
    Base10,
    Real,
    Colon,
    Assign,
    Relational,
    Additive,
    Multiplicative,
    Delimitator,
}

impl State {
    /// The label a lexeme accumulated in this state is emitted with, if the
    /// state emits at all. Identifiers are refined against the reserved words
    /// at emission time.
    pub fn classification(&self) -> Option<TokenKind> {
        match self {
            State::Identifier => Some(TokenKind::Identifier),
            State::Integer => Some(TokenKind::Integer),
            State::Real => Some(TokenKind::Real),
            State::Dot | State::Colon | State::Delimitator => Some(TokenKind::Delimiter),
            State::Assign => Some(TokenKind::Assign),
            State::Relational => Some(TokenKind::RelationalOperator),
            State::Additive => Some(TokenKind::AdditiveOperator),
            State::Multiplicative => Some(TokenKind::MultiplicativeOperator),
            State::Initial | State::Comment | State::Base10 => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Digit,
    Letter,
    Underscore,
    Dot,
    Colon,
    Relational,     // = < >
    Additive,       // + -
    Multiplicative, // * /
    Punctuation,    // ; , ( )
    Whitespace,
    OpenComment,
    CloseComment,
    Other,
}

impl CharClass {
    pub fn of(c: char) -> Self {
        match c {
            '0'..='9' => CharClass::Digit,
            'a'..='z' | 'A'..='Z' => CharClass::Letter,
            '_' => CharClass::Underscore,
            '.' => CharClass::Dot,
            ':' => CharClass::Colon,
            '=' | '<' | '>' => CharClass::Relational,
            '+' | '-' => CharClass::Additive,
            '*' | '/' => CharClass::Multiplicative,
            ';' | ',' | '(' | ')' => CharClass::Punctuation,
            ' ' | '\t' | '\r' | '\n' => CharClass::Whitespace,
            '{' => CharClass::OpenComment,
            '}' => CharClass::CloseComment,
            _ => CharClass::Other,
        }
    }
}

/// Mutable record threaded through every transition of one tokenization.
#[derive(Debug, Clone)]
pub struct ScanState<'r> {
    state: State,
    lexeme: String,
    line: usize,
    tokens: Vec<Token>,
    reserved: &'r ReservedWords,
}

impl<'r> ScanState<'r> {
    pub fn new(reserved: &'r ReservedWords) -> Self {
        ScanState {
            state: State::Initial,
            lexeme: String::new(),
            line: 1,
            tokens: vec![],
            reserved,
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn line(&self) -> usize {
        self.line
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn into_tokens(self) -> Vec<Token> {
        self.tokens
    }

    /// Advances the automaton by one character. Newlines bump the line
    /// counter after the character is handled, so a token closed by a newline
    /// keeps the line it started on.
    pub fn step(&mut self, c: char) -> Step {
        self.dispatch(c)?;

        if c == '\n' {
            self.line += 1;
        }

        Ok(())
    }

    /// Handles end of input: flushes a pending lexeme as if whitespace
    /// followed it, and rejects an open comment or a bare exponent marker.
    pub fn finish(&mut self) -> Step {
        match self.state {
            State::Comment => Err(ErrorImpl::UnterminatedComment),
            State::Base10 => Err(ErrorImpl::UnexpectedEndOfInput {
                lexeme: self.lexeme.clone(),
            }),
            State::Identifier
            | State::Integer
            | State::Dot
            | State::Real
            | State::Colon
            | State::Relational
            | State::Additive
            | State::Multiplicative => self.close(),
            // Assign and Delimitator emit on the character that enters them.
            State::Initial | State::Assign | State::Delimitator => Ok(()),
        }
    }

    fn dispatch(&mut self, c: char) -> Step {
        let class = CharClass::of(c);

        match self.state {
            State::Initial => self.initial(c, class),
            State::Comment => self.comment(class),
            State::Identifier => self.identifier(c, class),
            State::Integer => self.integer(c, class),
            State::Dot => self.dot(c, class),
            State::Base10 => self.base10(c, class),
            State::Real => self.real(c, class),
            State::Colon => self.colon(c, class),
            State::Assign | State::Delimitator => {
                self.lexeme.push(c);
                self.close()
            }
            State::Relational => self.relational(c, class),
            State::Additive | State::Multiplicative => self.operator(c, class),
        }
    }

    fn initial(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Whitespace => Ok(()),
            CharClass::OpenComment => self.enter(State::Comment),
            CharClass::Letter => self.begin(State::Identifier, c),
            CharClass::Digit => self.begin(State::Integer, c),
            CharClass::Dot => self.begin(State::Dot, c),
            CharClass::Colon => self.begin(State::Colon, c),
            CharClass::Relational => self.begin(State::Relational, c),
            CharClass::Additive => self.begin(State::Additive, c),
            CharClass::Multiplicative => self.begin(State::Multiplicative, c),
            CharClass::Punctuation => self.delimit(c),
            CharClass::Underscore | CharClass::CloseComment | CharClass::Other => invalid(c),
        }
    }

    fn comment(&mut self, class: CharClass) -> Step {
        match class {
            CharClass::CloseComment => self.enter(State::Initial),
            _ => Ok(()),
        }
    }

    fn identifier(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Letter | CharClass::Digit | CharClass::Underscore => self.append(c),
            CharClass::Colon => self.restart(State::Colon, c),
            CharClass::Relational => self.restart(State::Relational, c),
            CharClass::Additive => self.restart(State::Additive, c),
            CharClass::Multiplicative => self.restart(State::Multiplicative, c),
            CharClass::Dot | CharClass::Punctuation => {
                self.close()?;
                self.delimit(c)
            }
            CharClass::Whitespace => self.close(),
            CharClass::OpenComment | CharClass::CloseComment | CharClass::Other => invalid(c),
        }
    }

    fn integer(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Digit => self.append(c),
            CharClass::Dot => {
                self.lexeme.push(c);
                self.enter(State::Real)
            }
            CharClass::Letter if c == 'e' || c == 'E' => {
                self.lexeme.push(c);
                self.enter(State::Base10)
            }
            CharClass::Colon => self.restart(State::Colon, c),
            CharClass::Relational => self.restart(State::Relational, c),
            CharClass::Additive => self.restart(State::Additive, c),
            CharClass::Multiplicative => self.restart(State::Multiplicative, c),
            CharClass::Punctuation => {
                self.close()?;
                self.delimit(c)
            }
            CharClass::Whitespace => self.close(),
            CharClass::Letter
            | CharClass::Underscore
            | CharClass::OpenComment
            | CharClass::CloseComment
            | CharClass::Other => invalid(c),
        }
    }

    fn dot(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Digit => {
                self.lexeme.push(c);
                self.enter(State::Real)
            }
            CharClass::Whitespace => self.close(),
            CharClass::Letter
            | CharClass::Underscore
            | CharClass::Dot
            | CharClass::Colon
            | CharClass::Relational
            | CharClass::Additive
            | CharClass::Multiplicative
            | CharClass::Punctuation
            | CharClass::OpenComment
            | CharClass::CloseComment
            | CharClass::Other => invalid(c),
        }
    }

    fn base10(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Digit => {
                self.lexeme.push(c);
                self.enter(State::Real)
            }
            _ => invalid(c),
        }
    }

    fn real(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Digit => self.append(c),
            CharClass::Colon => self.restart(State::Colon, c),
            CharClass::Relational => self.restart(State::Relational, c),
            CharClass::Additive => self.restart(State::Additive, c),
            CharClass::Multiplicative => self.restart(State::Multiplicative, c),
            CharClass::Dot | CharClass::Punctuation => {
                self.close()?;
                self.delimit(c)
            }
            CharClass::Whitespace => self.close(),
            CharClass::Letter
            | CharClass::Underscore
            | CharClass::OpenComment
            | CharClass::CloseComment
            | CharClass::Other => invalid(c),
        }
    }

    fn colon(&mut self, c: char, class: CharClass) -> Step {
        if c == '=' {
            self.enter(State::Assign)?;
            return self.dispatch(c);
        }

        self.close()?;

        match class {
            CharClass::Letter => self.begin(State::Identifier, c),
            CharClass::Whitespace => Ok(()),
            CharClass::Digit
            | CharClass::Underscore
            | CharClass::Dot
            | CharClass::Colon
            | CharClass::Relational
            | CharClass::Additive
            | CharClass::Multiplicative
            | CharClass::Punctuation
            | CharClass::OpenComment
            | CharClass::CloseComment
            | CharClass::Other => invalid(c),
        }
    }

    fn relational(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Relational => self.append(c),
            _ => self.operator(c, class),
        }
    }

    /// Continuation shared by every operator state: an operator is followed
    /// by an operand or by whitespace, nothing else.
    fn operator(&mut self, c: char, class: CharClass) -> Step {
        match class {
            CharClass::Digit => self.restart(State::Integer, c),
            CharClass::Letter => self.restart(State::Identifier, c),
            CharClass::Whitespace => self.close(),
            CharClass::Underscore
            | CharClass::Dot
            | CharClass::Colon
            | CharClass::Relational
            | CharClass::Additive
            | CharClass::Multiplicative
            | CharClass::Punctuation
            | CharClass::OpenComment
            | CharClass::CloseComment
            | CharClass::Other => invalid(c),
        }
    }

    fn enter(&mut self, state: State) -> Step {
        trace!("{:?} -> {:?} on line {}", self.state, state, self.line);
        self.state = state;
        Ok(())
    }

    fn append(&mut self, c: char) -> Step {
        self.lexeme.push(c);
        Ok(())
    }

    fn begin(&mut self, state: State, c: char) -> Step {
        self.lexeme.push(c);
        self.enter(state)
    }

    /// Emits the pending lexeme, then starts a new one with `c`.
    fn restart(&mut self, state: State, c: char) -> Step {
        self.close()?;
        self.begin(state, c)
    }

    fn delimit(&mut self, c: char) -> Step {
        self.enter(State::Delimitator)?;
        self.dispatch(c)
    }

    /// Emits the pending lexeme classified by the current state and returns
    /// to `Initial`.
    fn close(&mut self) -> Step {
        if let Some(kind) = self.state.classification() {
            let kind = match kind {
                TokenKind::Identifier if self.reserved.contains(&self.lexeme) => {
                    TokenKind::ReservedWord
                }
                kind => kind,
            };

            let value = mem::take(&mut self.lexeme);
            trace!("emitting {} {:?} on line {}", kind, value, self.line);
            self.tokens.push(MK_TOKEN!(kind, value, self.line));
        }

        self.state = State::Initial;
        Ok(())
    }
}

fn invalid(c: char) -> Step {
    Err(ErrorImpl::InvalidCharacter { character: c })
}
