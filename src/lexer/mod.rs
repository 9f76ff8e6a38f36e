//! Lexical analysis module.
//!
//! This module contains the tokenizers that turn Pascal-like source text
//! into classified tokens. It handles:
//!
//! - The character-driven state machine and its driver
//! - An alternative tokenizer built from an ordered regex pattern table
//! - Reserved-word sets, including the built-in Pascal list
//! - Line tracking for every token and error

pub mod lexer;
pub mod regex_lexer;
pub mod reserved;
pub mod state;
pub mod tokens;
