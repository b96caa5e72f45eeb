use regex::Regex;
use lazy_static::lazy_static;
use crate::utils::{quote, error};
use crate::error::SchemaError;

lazy_static! {
    pub static ref TOKEN_REGEX:   Regex = Regex::new(r"(//[^\n]*|\r?\n|[ \t\r]+|-?[0-9]+|[A-Za-z_][A-Za-z0-9_]*|[{}\[\]():?&,])").unwrap();
    pub static ref WHITESPACE_RX: Regex = Regex::new(r"^(//[^\n]*|[ \t\r]+)$").unwrap();
    pub static ref NEWLINE_RX:    Regex = Regex::new(r"^\r?\n$").unwrap();
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub text:   String,
    pub line:   usize,
    pub column: usize,
}

/// Splits declaration text into tokens.
///
/// Line breaks are kept as `"\n"` tokens since they separate fields. Spaces,
/// tabs and `//` comments are dropped. The last token is always an empty EOF
/// token.
pub fn tokenize_declaration(text: &str) -> Result<Vec<Token>, SchemaError> {
    let mut tokens = Vec::new();
    let mut line = 1;
    let mut column = 1;
    let mut last_end = 0;

    for mat in TOKEN_REGEX.find_iter(text) {
        let start = mat.start();
        let end   = mat.end();
        let part  = mat.as_str();

        if start > last_end {
            let unexpected = &text[last_end..start];
            return Err(error(
                &format!("Syntax error: {}", quote(unexpected)),
                line,
                column,
            ));
        }

        if NEWLINE_RX.is_match(part) {
            tokens.push(Token {
                text: "\n".to_string(),
                line,
                column,
            });
            line += 1;
            column = 1;
        } else {
            if !WHITESPACE_RX.is_match(part) {
                tokens.push(Token {
                    text: part.to_string(),
                    line,
                    column,
                });
            }
            column += part.chars().count();
        }

        last_end = end;
    }

    if last_end != text.len() {
        let unexpected = &text[last_end..];
        return Err(error(
            &format!("Syntax error: {}", quote(unexpected)),
            line,
            column,
        ));
    }

    tokens.push(Token {
        text: "".to_string(),
        line,
        column,
    });
    Ok(tokens)
}
