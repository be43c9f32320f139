use mighty_parser::ast::{Expression, Literal, Statement};
use mighty_parser::{parse, parse_tokens, tokenize, ParseErrorKind, SyntaxError};

#[test]
fn test_same_tick_chain_is_one_statement() {
    let program = parse("a() -> b()").unwrap();
    assert_eq!(program.len(), 1);
    match &program.statements[0] {
        Statement::SameTick(group) => assert_eq!(group.len(), 2),
        other => panic!("expected same-tick group, got {other:?}"),
    }
}

#[test]
fn test_chain_across_lines_matches_inline_chain() {
    let inline = parse("mpos(1, 1) -> mclick(\"left\", true)").unwrap();
    let split = parse("mpos(1, 1)\n-> mclick(\"left\", true)").unwrap();
    assert_eq!(inline, split);
}

#[test]
fn test_missing_expression_is_parse_error() {
    let err = parse("x: int =").err().unwrap();
    match err {
        SyntaxError::Parse(e) => assert_eq!(e.expected(), Some("expression")),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn test_reserved_keywords_cannot_start_statements() {
    for source in ["if(1)", "else()", "for(1)", "while(1)"] {
        let err = parse(source).err().unwrap();
        match err {
            SyntaxError::Parse(e) => {
                assert!(matches!(e.kind, ParseErrorKind::UnexpectedToken { .. }))
            }
            other => panic!("expected parse error for {source}, got {other:?}"),
        }
    }
}

#[test]
fn test_keyword_prefix_is_an_identifier() {
    let program = parse("format(1)\niffy: int = 2").unwrap();
    assert_eq!(program.len(), 2);
}

#[test]
fn test_unknown_character_is_lex_error() {
    let err = parse("x: int = 1\ny: int = 2 # 3").err().unwrap();
    match err {
        SyntaxError::Lex(e) => {
            assert_eq!(e.line, 2);
            assert_eq!(e.character, '#');
        }
        other => panic!("expected lex error, got {other:?}"),
    }
}

#[test]
fn test_quoted_number_stays_string() {
    let program = parse("s: str = \"3.5\"").unwrap();
    match &program.statements[0] {
        Statement::Declaration(decl) => {
            assert_eq!(decl.expr, Expression::Literal(Literal::Str("3.5".to_string())))
        }
        other => panic!("expected declaration, got {other:?}"),
    }
}

#[test]
fn test_tokens_can_be_parsed_separately() {
    let tokens = tokenize("wait(2)\nprint(\"done\")").unwrap();
    let program = parse_tokens(tokens).unwrap();
    assert_eq!(program.len(), 2);
}
