use crate::{
    tokenizer::{tokenize_declaration, Token},
    types::{Constraint, ConstraintValue, Declaration, Field, FieldType},
    utils::{error, quote},
    error::SchemaError,
};
use lazy_static::lazy_static;
use regex::Regex;
use shapegen_schema::JsonType;
use tracing::debug;

lazy_static! {
    static ref IDENTIFIER:    Regex = Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*$").unwrap();
    static ref INTEGER:       Regex = Regex::new(r"^-?[0-9]+$").unwrap();
    static ref LEFT_BRACE:    Regex = Regex::new(r"^\{$").unwrap();
    static ref RIGHT_BRACE:   Regex = Regex::new(r"^\}$").unwrap();
    static ref LEFT_BRACKET:  Regex = Regex::new(r"^\[$").unwrap();
    static ref RIGHT_BRACKET: Regex = Regex::new(r"^\]$").unwrap();
    static ref LEFT_PAREN:    Regex = Regex::new(r"^\($").unwrap();
    static ref RIGHT_PAREN:   Regex = Regex::new(r"^\)$").unwrap();
    static ref COLON:         Regex = Regex::new(r"^:$").unwrap();
    static ref QUESTION:      Regex = Regex::new(r"^\?$").unwrap();
    static ref AMPERSAND:     Regex = Regex::new(r"^&$").unwrap();
    static ref SEPARATOR:     Regex = Regex::new(r"^(\n|,)$").unwrap();
    static ref NEWLINE:       Regex = Regex::new(r"^\n$").unwrap();
    static ref EOF:           Regex = Regex::new(r"^$").unwrap();

    // `Name { ... }`, allowing whitespace and `//` comments around the braces.
    static ref ENVELOPE:      Regex = Regex::new(
        r"^(?:\s|//[^\n]*)*[A-Za-z_][A-Za-z0-9_]*(?:\s|//[^\n]*)*\{[\s\S]*\}(?:\s|//[^\n]*)*$"
    ).unwrap();
}

/// Tokenizes and parses one `Name { ... }` declaration.
pub fn parse_schema_text(text: &str) -> Result<Declaration, SchemaError> {
    check_envelope(text)?;
    let tokens = tokenize_declaration(text)?;
    parse_declaration(&tokens)
}

/// Rejects text that is not shaped like `Name { ... }` before any lexing, so a
/// bad envelope is always `SchemaError::InvalidDeclaration` even when the body
/// also contains characters the tokenizer would refuse.
pub fn check_envelope(text: &str) -> Result<(), SchemaError> {
    if ENVELOPE.is_match(text) {
        Ok(())
    } else {
        Err(SchemaError::InvalidDeclaration)
    }
}

/// Matches the `Name { body }` envelope and parses every field line in the body.
///
/// Anything that does not fit the envelope is reported as
/// `SchemaError::InvalidDeclaration`; errors inside the body carry a position.
pub fn parse_declaration(tokens: &[Token]) -> Result<Declaration, SchemaError> {
    let is_blank = |t: &Token| NEWLINE.is_match(&t.text) || EOF.is_match(&t.text);

    let mut index = tokens.iter().position(|t| !NEWLINE.is_match(&t.text)).unwrap_or(tokens.len());

    let name_tok = match tokens.get(index) {
        Some(tok) if IDENTIFIER.is_match(&tok.text) => tok,
        _ => return Err(SchemaError::InvalidDeclaration),
    };
    index += 1;

    while tokens.get(index).map_or(false, |t| NEWLINE.is_match(&t.text)) {
        index += 1;
    }

    let open = match tokens.get(index) {
        Some(tok) if LEFT_BRACE.is_match(&tok.text) => index,
        _ => return Err(SchemaError::InvalidDeclaration),
    };

    // The closing brace must be the last meaningful token of the input.
    let close = tokens
        .iter()
        .rposition(|t| !is_blank(t))
        .filter(|&i| i > open && RIGHT_BRACE.is_match(&tokens[i].text))
        .ok_or(SchemaError::InvalidDeclaration)?;

    let fields = split_lines(&tokens[open + 1..close])
        .into_iter()
        .map(parse_field_tokens)
        .collect::<Result<Vec<_>, _>>()?;

    debug!(declaration = %name_tok.text, fields = fields.len(), "parsed declaration");

    Ok(Declaration {
        name:   name_tok.text.clone(),
        fields,
    })
}

/// Splits a declaration body into field lines on line breaks and commas.
/// Empty lines are dropped; order is preserved.
pub fn split_lines(body: &[Token]) -> Vec<&[Token]> {
    body.split(|t| SEPARATOR.is_match(&t.text))
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses a single field line such as `name?: String & min(3)`.
pub fn parse_field(line: &str) -> Result<Field, SchemaError> {
    let tokens = tokenize_declaration(line)?;
    let body = &tokens[..tokens.len().saturating_sub(1)];

    match split_lines(body).as_slice() {
        [single] => parse_field_tokens(single),
        [] => Err(error("Expected a field but found an empty line", 1, 1)),
        [_, second, ..] => Err(error(
            &format!("Expected a single field but found another starting at {}", quote(&second[0].text)),
            second[0].line,
            second[0].column,
        )),
    }
}

/// Parses the tokens of one field line (no separators, no EOF token).
pub fn parse_field_tokens(line: &[Token]) -> Result<Field, SchemaError> {
    let mut cursor = Cursor::new(line);

    let name_tok = cursor.expect(&IDENTIFIER, "field name")?;
    let optional = cursor.eat(&QUESTION).is_some();
    cursor.expect(&COLON, "\":\"")?;

    let type_ = parse_type(&mut cursor)?;

    let mut constraints = Vec::new();
    while !cursor.at_end() {
        cursor.expect(&AMPERSAND, "\"&\"")?;
        // Empty segments (`& &`, trailing `&`) are skipped.
        if cursor.at_end() || cursor.check(&AMPERSAND) {
            continue;
        }
        constraints.push(parse_constraint(&mut cursor)?);
    }

    Ok(Field {
        name:   name_tok.text.clone(),
        line:   name_tok.line,
        column: name_tok.column,
        optional,
        type_,
        constraints,
    })
}

fn parse_type(cursor: &mut Cursor) -> Result<FieldType, SchemaError> {
    if cursor.eat(&LEFT_BRACKET).is_some() {
        let item = cursor.expect(&IDENTIFIER, "array item type")?;
        cursor.expect(&RIGHT_BRACKET, "\"]\"")?;
        Ok(FieldType::Array(JsonType::resolve(&item.text)))
    } else {
        let scalar = cursor.expect(&IDENTIFIER, "type")?;
        Ok(FieldType::Scalar(JsonType::resolve(&scalar.text)))
    }
}

/// Parses one `name` or `name(integer)` segment, up to the next `&`.
fn parse_constraint(cursor: &mut Cursor) -> Result<Constraint, SchemaError> {
    let segment = cursor.segment();
    let first   = &segment[0];
    let text: String = segment.iter().map(|t| t.text.as_str()).collect();

    let malformed = |reason: &str| SchemaError::MalformedConstraint {
        constraint: quote(&text),
        reason:     reason.to_string(),
        line:       first.line,
        column:     first.column,
    };

    let (name, value) = match segment {
        [name] if IDENTIFIER.is_match(&name.text) => (name.text.as_str(), ConstraintValue::Flag),
        [name, open, number, close]
            if IDENTIFIER.is_match(&name.text)
                && LEFT_PAREN.is_match(&open.text)
                && INTEGER.is_match(&number.text)
                && RIGHT_PAREN.is_match(&close.text) =>
        {
            let value = number
                .text
                .parse::<i64>()
                .map_err(|_| malformed("numeric argument is out of range"))?;
            (name.text.as_str(), ConstraintValue::Number(value))
        }
        _ => return Err(malformed("expected `name` or `name(integer)`")),
    };

    cursor.advance(segment.len());
    classify_constraint(name, value).map_err(malformed)
}

fn classify_constraint(name: &str, value: ConstraintValue) -> Result<Constraint, &'static str> {
    match (name, value) {
        ("min", ConstraintValue::Number(n))     => Ok(Constraint::Min(n)),
        ("max", ConstraintValue::Number(n))     => Ok(Constraint::Max(n)),
        ("min" | "max", ConstraintValue::Flag)  => Err("expected a numeric argument"),
        ("email", ConstraintValue::Flag)        => Ok(Constraint::Email),
        ("email", ConstraintValue::Number(_))   => Err("takes no argument"),
        (other, value) => Ok(Constraint::Unrecognized {
            name: other.to_string(),
            value,
        }),
    }
}

/// Position-tracking reader over the tokens of one field line.
struct Cursor<'a> {
    tokens: &'a [Token],
    index:  usize,
}

impl<'a> Cursor<'a> {
    fn new(tokens: &'a [Token]) -> Self {
        Cursor { tokens, index: 0 }
    }

    fn peek(&self) -> Option<&'a Token> {
        self.tokens.get(self.index)
    }

    fn at_end(&self) -> bool {
        self.index >= self.tokens.len()
    }

    fn check(&self, test: &Regex) -> bool {
        self.peek().map_or(false, |tok| test.is_match(&tok.text))
    }

    fn advance(&mut self, count: usize) {
        self.index = (self.index + count).min(self.tokens.len());
    }

    fn eat(&mut self, test: &Regex) -> Option<&'a Token> {
        let tok = self.peek().filter(|tok| test.is_match(&tok.text))?;
        self.index += 1;
        Some(tok)
    }

    fn expect(&mut self, test: &Regex, expected: &str) -> Result<&'a Token, SchemaError> {
        if let Some(tok) = self.eat(test) {
            return Ok(tok);
        }
        Err(match self.peek() {
            Some(tok) => error(
                &format!("Expected {} but found {}", expected, quote(&tok.text)),
                tok.line,
                tok.column,
            ),
            None => {
                let (line, column) = self.end_position();
                error(&format!("Expected {} but reached the end of the line", expected), line, column)
            }
        })
    }

    /// Tokens from the current position up to (not including) the next `&`.
    fn segment(&self) -> &'a [Token] {
        let rest = &self.tokens[self.index.min(self.tokens.len())..];
        let end  = rest.iter().position(|t| AMPERSAND.is_match(&t.text)).unwrap_or(rest.len());
        &rest[..end]
    }

    fn end_position(&self) -> (usize, usize) {
        match self.tokens.last() {
            Some(last) => (last.line, last.column + last.text.chars().count()),
            None => (1, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(line: &str) -> Field {
        parse_field(line).expect("parse_field failed")
    }

    #[test]
    fn test_parse_field_scalar() {
        let f = field("id: Integer");
        assert_eq!(f.name, "id");
        assert!(!f.optional);
        assert_eq!(f.type_, FieldType::Scalar(JsonType::Integer));
        assert!(f.constraints.is_empty());
    }

    #[test]
    fn test_parse_field_optional_array() {
        let f = field("tags?: [String]");
        assert_eq!(f.name, "tags");
        assert!(f.optional);
        assert_eq!(f.type_, FieldType::Array(JsonType::String));
    }

    #[test]
    fn test_parse_field_unknown_types_are_lowercased() {
        assert_eq!(field("at: Date").type_, FieldType::Scalar(JsonType::Custom("date".into())));
        assert_eq!(field("xs: [Foo]").type_, FieldType::Array(JsonType::Custom("foo".into())));
        assert_eq!(field("ns: [Integer]").type_, FieldType::Array(JsonType::Integer));
    }

    #[test]
    fn test_parse_field_constraints_in_order() {
        let f = field("name: String & min(3) & max(50) & email & unique");
        assert_eq!(
            f.constraints,
            vec![
                Constraint::Min(3),
                Constraint::Max(50),
                Constraint::Email,
                Constraint::Unrecognized { name: "unique".into(), value: ConstraintValue::Flag },
            ]
        );
    }

    #[test]
    fn test_flag_value_is_distinct_from_zero() {
        let f = field("n: Integer & step(0) & strict");
        assert_eq!(
            f.constraints,
            vec![
                Constraint::Unrecognized { name: "step".into(), value: ConstraintValue::Number(0) },
                Constraint::Unrecognized { name: "strict".into(), value: ConstraintValue::Flag },
            ]
        );
    }

    #[test]
    fn test_empty_constraint_segments_are_dropped() {
        let f = field("n: Integer & & min(1) &");
        assert_eq!(f.constraints, vec![Constraint::Min(1)]);
    }

    #[test]
    fn test_negative_bounds() {
        let f = field("offset: Integer & min(-10)");
        assert_eq!(f.constraints, vec![Constraint::Min(-10)]);
    }

    #[test]
    fn test_malformed_constraint_is_a_typed_error() {
        for line in [
            "name: String & min(abc)",
            "name: String & min(3",
            "name: String & 5",
            "name: String & min 3",
            "name: String & min",
            "name: String & email(1)",
        ] {
            match parse_field(line) {
                Err(SchemaError::MalformedConstraint { line: l, column, .. }) => {
                    assert_eq!(l, 1);
                    assert_eq!(column, 16, "wrong column for {:?}", line);
                }
                other => panic!("expected MalformedConstraint for {:?}, got {:?}", line, other),
            }
        }
    }

    #[test]
    fn test_missing_colon() {
        let err = parse_field("id Integer").unwrap_err();
        assert!(matches!(err, SchemaError::ParseError { column: 4, .. }), "{:?}", err);
    }

    #[test]
    fn test_missing_type() {
        let err = parse_field("id:").unwrap_err();
        match err {
            SchemaError::ParseError { msg, column, .. } => {
                assert!(msg.contains("end of the line"), "{}", msg);
                assert_eq!(column, 4);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_parse_field_rejects_two_fields() {
        assert!(matches!(parse_field("a: Integer, b: String"), Err(SchemaError::ParseError { .. })));
    }

    #[test]
    fn test_split_lines_on_newlines_and_commas() {
        let tokens = tokenize_declaration("a: Integer,\n\n  b: String, c: Boolean,").unwrap();
        let body = &tokens[..tokens.len() - 1];
        let lines = split_lines(body);
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0][0].text, "a");
        assert_eq!(lines[1][0].text, "b");
        assert_eq!(lines[2][0].text, "c");
    }

    #[test]
    fn test_parse_declaration_multiline() {
        let input = r#"
        User {
          id: Integer,
          name: String & min(3) & max(50)
          tags?: [String]
        }
        "#;
        let decl = parse_schema_text(input).unwrap();
        assert_eq!(decl.name, "User");
        let names: Vec<_> = decl.fields.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, vec!["id", "name", "tags"]);
    }

    #[test]
    fn test_parse_declaration_single_line() {
        let decl = parse_schema_text("User { id: Integer, email: String & email }").unwrap();
        assert_eq!(decl.fields.len(), 2);
        assert_eq!(decl.fields[1].constraints, vec![Constraint::Email]);
    }

    #[test]
    fn test_parse_declaration_brace_on_next_line() {
        let decl = parse_schema_text("User\n{\n  id: Integer\n}\n").unwrap();
        assert_eq!(decl.fields.len(), 1);
    }

    #[test]
    fn test_parse_declaration_empty_body() {
        let decl = parse_schema_text("Empty {}").unwrap();
        assert!(decl.fields.is_empty());
    }

    #[test]
    fn test_invalid_envelopes() {
        for input in [
            "",
            "User",
            "User {\n  id: Integer\n",
            "{ id: Integer }",
            "User { id: Integer } extra",
            "User id: Integer }",
            "User {\n  id: Integer @\n",
            "Usuário {\n  id: Integer\n",
            "Usuário {\n  id: Integer\n}",
        ] {
            assert!(
                matches!(parse_schema_text(input), Err(SchemaError::InvalidDeclaration)),
                "expected InvalidDeclaration for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_envelope_allows_comments_around_braces() {
        let decl = parse_schema_text("// users\nUser // record\n{\n  id: Integer\n} // end\n").unwrap();
        assert_eq!(decl.fields.len(), 1);
    }

    #[test]
    fn test_bad_character_inside_valid_envelope_has_position() {
        let err = parse_schema_text("User {\n  id: Integer @\n}").unwrap_err();
        assert!(matches!(err, SchemaError::ParseError { line: 2, column: 15, .. }), "{:?}", err);
    }

    #[test]
    fn test_invalid_declaration_message() {
        let err = parse_schema_text("User {").unwrap_err();
        assert_eq!(err.to_string(), "invalid declaration format");
    }

    #[test]
    fn test_error_in_body_has_position() {
        let err = parse_schema_text("User {\n  id: Integer\n  name String\n}").unwrap_err();
        match err {
            SchemaError::ParseError { line, column, .. } => {
                assert_eq!(line, 3);
                assert_eq!(column, 8);
            }
            other => panic!("unexpected {:?}", other),
        }
    }
}
