use crate::ast::Expr;
use crate::scanner::{ScanErr, Scanner, Token, TokenWithLocation};
use crate::util::Location;

use super::precedence::Chain;
use super::{ParseErr, ParseErrKind, ParseResult};

/// Create a parser from the specified text, scan the text into tokens,
/// parse the tokens, and return the resulting expression tree or error.
pub fn parse_text(text: &str) -> ParseResult {
    let scanner = Scanner::new(text);
    let mut parser = Parser::new(scanner);
    parser.parse()
}

pub struct Parser<'a> {
    token_stream: Scanner<'a>,
}

impl<'a> Parser<'a> {
    pub fn new(scanner: Scanner<'a>) -> Self {
        Self { token_stream: scanner }
    }

    /// Scan source -> tokens
    /// Parse tokens -> expression tree
    pub fn parse(&mut self) -> ParseResult {
        self.group(None)
    }

    fn next_token(&mut self) -> Result<Option<TokenWithLocation>, ParseErr> {
        match self.token_stream.next() {
            Some(Ok(token)) => Ok(Some(token)),
            Some(Err(err)) => Err(self.scan_err(err)),
            None => Ok(None),
        }
    }

    /// Create a new ParseErr of the specified kind.
    fn err(&self, kind: ParseErrKind, location: Location) -> ParseErr {
        ParseErr::new(kind, location)
    }

    /// Create a new ParseErr that wraps a ScanErr.
    fn scan_err(&self, err: ScanErr) -> ParseErr {
        let location = err.location;
        self.err(ParseErrKind::ScanErr(err), location)
    }

    // Grammar

    /// Build the expression for a group. A group is either the whole
    /// formula (`opened_at` is `None`) or the span following an opening
    /// paren (`opened_at` is the paren's location), in which case the
    /// matching closing paren is consumed too.
    fn group(&mut self, opened_at: Option<Location>) -> ParseResult {
        log::trace!("BEGIN: group @ {opened_at:?}");

        let mut chain = Chain::new();

        let end = loop {
            let token = match self.next_token()? {
                Some(token) => token,
                None => match opened_at {
                    Some(location) => {
                        return Err(self.err(ParseErrKind::UnclosedParen, location));
                    }
                    None => break self.token_stream.location(),
                },
            };

            match token.token {
                Token::LParen => {
                    let expr = self.group(Some(token.start))?;
                    chain.push_operand(expr, token.start)?;
                }
                Token::RParen => {
                    if opened_at.is_none() {
                        return Err(
                            self.err(ParseErrKind::UnexpectedClosingParen, token.start)
                        );
                    }
                    break token.start;
                }
                Token::Op(op) => chain.push_operator(op, token.start)?,
                Token::Int(value) => {
                    chain.push_operand(Expr::new_int(value), token.start)?
                }
            }
        };

        let expr = chain.resolve(end)?;
        log::trace!("END: group @ {opened_at:?} -> {expr:?}");
        Ok(expr)
    }
}
