//! # Statement Parsing
//!
//! Parses Mighty statements: declarations, function definitions, calls, and
//! `->` same-tick chains.
//!
//! ## Grammar
//!
//! ```text
//! chain        = statement ((EOL* "->" EOL*) statement)*
//! statement    = declaration | function_def | function_call
//! declaration  = IDENT ":" IDENT "=" expression
//! function_def = "func" IDENT "(" params? ")" EOL* block
//! params       = IDENT ":" IDENT ("," IDENT ":" IDENT)*
//! block        = "{" (EOL* chain line_end)* EOL* "}"
//! function_call = IDENT "(" args? ")"
//! ```

use super::Parser;
use crate::ast::{Declaration, FunctionCall, FunctionDef, Param, Statement, TypeTag};
use crate::error::ParseError;
use crate::lexer::TokenKind;

impl Parser {
    /// Parse one statement and everything chained to it with `->`.
    ///
    /// A lone statement is returned as itself; two or more become a
    /// [`Statement::SameTick`] group.
    ///
    /// ## Example
    ///
    /// ```text
    /// mpos(10, 10) -> mclick("left")
    /// mpos(10, 10)
    /// -> mclick("left")
    /// ```
    pub(super) fn parse_chain(&mut self) -> Result<Statement, ParseError> {
        let first = self.parse_statement()?;
        let mut chained = Vec::new();

        while self.continues_chain() {
            self.skip_eols();
            self.expect(TokenKind::Next)?;
            self.skip_eols();
            chained.push(self.parse_statement()?);
        }

        if chained.is_empty() {
            Ok(first)
        } else {
            chained.insert(0, first);
            Ok(Statement::SameTick(chained))
        }
    }

    /// Whether the next non-EOL token is `->`.
    fn continues_chain(&self) -> bool {
        self.tokens
            .iter()
            .skip(self.current)
            .find(|t| !t.is_eol())
            .is_some_and(|t| t.kind == TokenKind::Next)
    }

    /// Require the end of a statement line.
    ///
    /// Accepts an end-of-line token, the end of input, or (inside a block)
    /// the closing brace, which is left for the block to consume.
    pub(super) fn expect_line_end(&mut self, in_block: bool) -> Result<(), ParseError> {
        if self.is_at_end() || self.match_token(TokenKind::Eol) {
            return Ok(());
        }
        if in_block && self.check(TokenKind::RBrace) {
            return Ok(());
        }
        Err(self.error_here(TokenKind::Eol.display()))
    }

    /// Parse a single statement.
    ///
    /// An identifier followed by `:` starts a declaration; any other
    /// identifier starts a call. Reserved keywords are rejected here.
    fn parse_statement(&mut self) -> Result<Statement, ParseError> {
        match self.peek_kind() {
            Some(TokenKind::Func) => self.parse_function_def().map(Statement::FunctionDef),
            Some(TokenKind::Identifier) if self.peek_kind_at(1) == Some(TokenKind::Colon) => {
                self.parse_declaration().map(Statement::Declaration)
            }
            Some(TokenKind::Identifier) => self.parse_call().map(Statement::FunctionCall),
            _ => Err(self.error_here("statement")),
        }
    }

    /// Parse `name: type = expression`.
    fn parse_declaration(&mut self) -> Result<Declaration, ParseError> {
        let name = self.expect(TokenKind::Identifier)?.text.clone();
        self.expect(TokenKind::Colon)?;
        let var_type = self.parse_type()?;
        self.expect(TokenKind::Assign)?;
        let expr = self.parse_expression()?;

        Ok(Declaration {
            var_type,
            name,
            expr,
        })
    }

    /// Parse a type name.
    fn parse_type(&mut self) -> Result<TypeTag, ParseError> {
        if !self.check(TokenKind::Identifier) {
            return Err(self.error_here("type"));
        }
        let token = self.expect(TokenKind::Identifier)?;
        Ok(TypeTag::from_name(&token.text))
    }

    /// Parse `func name(params) { body }`.
    fn parse_function_def(&mut self) -> Result<FunctionDef, ParseError> {
        self.expect(TokenKind::Func)?;
        let name = self.expect(TokenKind::Identifier)?.text.clone();

        self.expect(TokenKind::LParen)?;
        let params = self.parse_params()?;
        self.expect(TokenKind::RParen)?;

        self.skip_eols();
        let body = self.parse_block()?;

        Ok(FunctionDef { name, params, body })
    }

    /// Parse a comma separated `name: type` list, possibly empty.
    fn parse_params(&mut self) -> Result<Vec<Param>, ParseError> {
        let mut params = Vec::new();
        if self.check(TokenKind::RParen) {
            return Ok(params);
        }

        loop {
            let name = self.expect(TokenKind::Identifier)?.text.clone();
            self.expect(TokenKind::Colon)?;
            let type_tag = self.parse_type()?;
            params.push(Param { name, type_tag });

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }

        Ok(params)
    }

    /// Parse a braced block of statement lines.
    fn parse_block(&mut self) -> Result<Vec<Statement>, ParseError> {
        self.expect(TokenKind::LBrace)?;
        let mut body = Vec::new();

        loop {
            self.skip_eols();
            if self.match_token(TokenKind::RBrace) {
                break;
            }
            if self.is_at_end() {
                return Err(self.error_here(TokenKind::RBrace.display()));
            }
            body.push(self.parse_chain()?);
            self.expect_line_end(true)?;
        }

        Ok(body)
    }

    /// Parse `name(args)`.
    pub(super) fn parse_call(&mut self) -> Result<FunctionCall, ParseError> {
        let name = self.expect(TokenKind::Identifier)?.text.clone();
        self.expect(TokenKind::LParen)?;
        let args = self.parse_args()?;
        self.expect(TokenKind::RParen)?;

        Ok(FunctionCall { name, args })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::ast::{Expression, Literal, Statement, TypeTag};
    use crate::error::ParseErrorKind;
    use crate::lexer::Lexer;
    use crate::parser::Parser;

    fn statements(source: &str) -> Vec<Statement> {
        Parser::new(Lexer::new(source).tokenize().unwrap())
            .parse()
            .unwrap()
            .statements
    }

    fn call_name(statement: &Statement) -> &str {
        match statement {
            Statement::FunctionCall(call) => &call.name,
            other => panic!("expected call, got {other:?}"),
        }
    }

    #[test]
    fn test_inline_chain() {
        let parsed = statements("a() -> b() -> c()");
        assert_eq!(parsed.len(), 1);
        let Statement::SameTick(group) = &parsed[0] else {
            panic!("expected same-tick group");
        };
        let names: Vec<&str> = group.iter().map(call_name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_chain_continues_on_next_line() {
        let parsed = statements("mpos(1, 2)\n-> mclick(\"left\")\nwait(1)");
        assert_eq!(parsed.len(), 2);
        assert!(matches!(&parsed[0], Statement::SameTick(group) if group.len() == 2));
        assert_eq!(call_name(&parsed[1]), "wait");
    }

    #[test]
    fn test_lone_statement_is_not_wrapped() {
        let parsed = statements("a()");
        assert_eq!(call_name(&parsed[0]), "a");
    }

    #[test]
    fn test_function_definition() {
        let parsed = statements("func click_at(x: int, y: int) {\n  mpos(x, y)\n  mclick(\"left\")\n}");
        let Statement::FunctionDef(def) = &parsed[0] else {
            panic!("expected function definition");
        };
        assert_eq!(def.name, "click_at");
        assert_eq!(def.params.len(), 2);
        assert_eq!(def.params[1].name, "y");
        assert_eq!(def.params[1].type_tag, TypeTag::Int);
        assert_eq!(def.body.len(), 2);
    }

    #[test]
    fn test_function_brace_on_next_line_and_inline_body() {
        let parsed = statements("func f()\n{ wait(1) }\nf()");
        assert_eq!(parsed.len(), 2);
        let Statement::FunctionDef(def) = &parsed[0] else {
            panic!("expected function definition");
        };
        assert!(def.params.is_empty());
        assert_eq!(def.body.len(), 1);
    }

    #[test]
    fn test_unclosed_block_fails() {
        let tokens = Lexer::new("func f() {\n wait(1)\n").tokenize().unwrap();
        let error = Parser::new(tokens).parse().unwrap_err();
        assert!(matches!(error.kind, ParseErrorKind::UnexpectedEnd { .. }));
        assert_eq!(error.expected(), Some("}"));
    }

    #[test]
    fn test_unknown_type_is_kept() {
        let parsed = statements("flag: bool = 1");
        let Statement::Declaration(decl) = &parsed[0] else {
            panic!("expected declaration");
        };
        assert_eq!(decl.var_type, TypeTag::Unsupported("bool".to_string()));
        assert_eq!(decl.expr, Expression::Literal(Literal::Int(1)));
    }

    #[test]
    fn test_reserved_keyword_rejected() {
        let error = Parser::new(Lexer::new("if(1)").tokenize().unwrap())
            .parse()
            .unwrap_err();
        assert_eq!(
            error.kind,
            ParseErrorKind::UnexpectedToken {
                found: "if".to_string(),
                expected: "statement".to_string(),
            }
        );
    }

    #[test]
    fn test_dangling_next_fails() {
        let error = Parser::new(Lexer::new("a() ->").tokenize().unwrap())
            .parse()
            .unwrap_err();
        assert_eq!(error.expected(), Some("statement"));
    }
}
