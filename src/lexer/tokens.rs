use std::fmt::Display;

/// Classification assigned to a lexeme when it is emitted.
///
/// `Display` renders the stable label used in token tables and honours
/// width/alignment flags.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Identifier,
    ReservedWord,

    Integer,
    Real,

    Delimiter, // ; , . : ( )
    Assign,    // :=

    RelationalOperator,     // = < > and runs of them
    AdditiveOperator,       // + -
    MultiplicativeOperator, // * /
}

impl TokenKind {
    pub fn label(&self) -> &'static str {
        match self {
            TokenKind::Identifier => "Identifier",
            TokenKind::ReservedWord => "ReservedWord",
            TokenKind::Integer => "Integer",
            TokenKind::Real => "Real",
            TokenKind::Delimiter => "Delimiter",
            TokenKind::Assign => "Assign",
            TokenKind::RelationalOperator => "RelationalOperator",
            TokenKind::AdditiveOperator => "AdditiveOperator",
            TokenKind::MultiplicativeOperator => "MultiplicativeOperator",
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub value: String,
    pub line: usize,
}

impl Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:<20}{:<30}{:<5}", self.value, self.kind, self.line)
    }
}
