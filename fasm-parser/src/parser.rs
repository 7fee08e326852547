//! Recursive-descent parser over the token stream
//!
//! Grammar, one statement per line:
//!
//! ```text
//! line       := [ feature ] [ '{' annotation (',' annotation)* '}' ] [ COMMENT ]
//! feature    := NAME [ '[' INT [ ':' INT ] ']' ] [ '=' value ]
//! value      := INT sized_digits | sized_digits | INT
//! annotation := NAME [ '=' QUOTED ]
//! ```
//!
//! Address ranges are written `[msb:lsb]` and stored low-bit-first.

use logos::Logos;

use fasm_spec::{Annotation, FasmLine, FeatureAddress, FeatureValue, SetFasmFeature, ValueFormat};

use crate::error::{ParseError, Result};
use crate::lexer::Token;

/// Parse FASM source into one [`FasmLine`] per source line.
///
/// Blank lines parse to blank [`FasmLine`]s so that model indexes match
/// source line numbers.
pub fn parse(source: &str) -> Result<Vec<FasmLine>> {
    let mut lines = Vec::new();

    for (number, text) in source.lines().enumerate() {
        lines.push(parse_line(text, number + 1)?);
    }

    tracing::debug!("parsed {} lines", lines.len());
    Ok(lines)
}

/// Parse a single FASM statement. `line` is the 1-based source line number
/// used in errors.
pub fn parse_line(text: &str, line: usize) -> Result<FasmLine> {
    let mut tokens = Vec::new();
    for (token, span) in Token::lexer(text).spanned() {
        match token {
            Ok(token) => tokens.push(token),
            Err(()) => {
                return Err(ParseError::Lex {
                    line,
                    text: text[span].to_string(),
                })
            }
        }
    }

    let mut cursor = 0;

    let set_feature = match tokens.first() {
        Some(Token::Feature(_)) => Some(parse_set_feature(&tokens, &mut cursor, line)?),
        _ => None,
    };

    let annotations = match tokens.get(cursor) {
        Some(Token::LBrace) => parse_annotations(&tokens, &mut cursor, line)?,
        _ => Vec::new(),
    };

    let comment = match tokens.get(cursor) {
        Some(Token::Comment(text)) => {
            cursor += 1;
            Some(text.clone())
        }
        _ => None,
    };

    if cursor != tokens.len() {
        return Err(ParseError::Syntax {
            line,
            message: format!("Unexpected {:?} after end of statement", tokens[cursor]),
        });
    }

    Ok(FasmLine {
        set_feature,
        annotations,
        comment,
    })
}

fn parse_set_feature(tokens: &[Token], cursor: &mut usize, line: usize) -> Result<SetFasmFeature> {
    let feature = match tokens.get(*cursor) {
        Some(Token::Feature(name)) => {
            *cursor += 1;
            name.clone()
        }
        _ => {
            return Err(ParseError::Syntax {
                line,
                message: "Expected feature name".to_string(),
            })
        }
    };

    let mut address = None;
    if matches!(tokens.get(*cursor), Some(Token::LBracket)) {
        *cursor += 1;
        let first = expect_index(tokens, cursor, line)?;
        let second = if matches!(tokens.get(*cursor), Some(Token::Colon)) {
            *cursor += 1;
            Some(expect_index(tokens, cursor, line)?)
        } else {
            None
        };
        expect(tokens, cursor, line, Token::RBracket)?;

        address = Some(match second {
            // [msb:lsb], stored low-bit-first
            Some(lsb) => {
                let msb = first;
                if msb < lsb {
                    return Err(ParseError::ReversedRange { line, msb, lsb });
                }
                FeatureAddress {
                    start: lsb,
                    end: Some(msb),
                }
            }
            None => FeatureAddress {
                start: first,
                end: None,
            },
        });
    }

    let mut value = None;
    if matches!(tokens.get(*cursor), Some(Token::Equal)) {
        *cursor += 1;
        value = Some(parse_value(tokens, cursor, line)?);
    }

    Ok(SetFasmFeature {
        feature,
        address,
        value,
    })
}

fn parse_value(tokens: &[Token], cursor: &mut usize, line: usize) -> Result<FeatureValue> {
    match tokens.get(*cursor) {
        Some(Token::Int(text)) => {
            if is_sized_digits(tokens.get(*cursor + 1)) {
                let width = text
                    .parse::<u32>()
                    .map_err(|_| ParseError::InvalidWidth {
                        line,
                        text: text.clone(),
                    })?;
                *cursor += 1;
                parse_sized_value(tokens, cursor, line, Some(width))
            } else {
                let digits = text.clone();
                *cursor += 1;
                FeatureValue::new(ValueFormat::Plain, digits, None)
                    .map_err(|source| ParseError::Value { line, source })
            }
        }
        Some(token) if is_sized_digits(Some(token)) => {
            parse_sized_value(tokens, cursor, line, None)
        }
        _ => Err(ParseError::Syntax {
            line,
            message: "Expected value after '='".to_string(),
        }),
    }
}

fn parse_sized_value(
    tokens: &[Token],
    cursor: &mut usize,
    line: usize,
    width: Option<u32>,
) -> Result<FeatureValue> {
    let (format, digits) = match tokens.get(*cursor) {
        Some(Token::HexValue(digits)) => (ValueFormat::VerilogHex, digits.clone()),
        Some(Token::BinaryValue(digits)) => (ValueFormat::VerilogBinary, digits.clone()),
        Some(Token::OctalValue(digits)) => (ValueFormat::VerilogOctal, digits.clone()),
        Some(Token::DecimalValue(digits)) => (ValueFormat::VerilogDecimal, digits.clone()),
        _ => {
            return Err(ParseError::Syntax {
                line,
                message: "Expected a sized literal".to_string(),
            })
        }
    };
    *cursor += 1;

    FeatureValue::new(format, digits, width).map_err(|source| ParseError::Value { line, source })
}

fn parse_annotations(tokens: &[Token], cursor: &mut usize, line: usize) -> Result<Vec<Annotation>> {
    expect(tokens, cursor, line, Token::LBrace)?;

    let mut annotations = Vec::new();
    loop {
        let name = match tokens.get(*cursor) {
            Some(Token::Feature(name)) if !name.contains('.') => {
                *cursor += 1;
                name.clone()
            }
            Some(Token::Feature(name)) => {
                return Err(ParseError::Syntax {
                    line,
                    message: format!("Annotation name {:?} cannot be dotted", name),
                })
            }
            _ => {
                return Err(ParseError::Syntax {
                    line,
                    message: "Expected annotation name".to_string(),
                })
            }
        };

        let mut value = None;
        if matches!(tokens.get(*cursor), Some(Token::Equal)) {
            *cursor += 1;
            value = match tokens.get(*cursor) {
                Some(Token::QuotedString(text)) => {
                    *cursor += 1;
                    Some(text.clone())
                }
                _ => {
                    return Err(ParseError::Syntax {
                        line,
                        message: "Expected quoted annotation value".to_string(),
                    })
                }
            };
        }

        annotations.push(Annotation { name, value });

        match tokens.get(*cursor) {
            Some(Token::Comma) => *cursor += 1,
            Some(Token::RBrace) => {
                *cursor += 1;
                return Ok(annotations);
            }
            _ => {
                return Err(ParseError::Syntax {
                    line,
                    message: "Expected ',' or '}' in annotations".to_string(),
                })
            }
        }
    }
}

fn expect_index(tokens: &[Token], cursor: &mut usize, line: usize) -> Result<u32> {
    match tokens.get(*cursor) {
        Some(Token::Int(text)) => {
            *cursor += 1;
            text.parse::<u32>().map_err(|_| ParseError::InvalidAddress {
                line,
                text: text.clone(),
            })
        }
        _ => Err(ParseError::Syntax {
            line,
            message: "Expected address index".to_string(),
        }),
    }
}

fn expect(tokens: &[Token], cursor: &mut usize, line: usize, expected: Token) -> Result<()> {
    match tokens.get(*cursor) {
        Some(token) if *token == expected => {
            *cursor += 1;
            Ok(())
        }
        other => {
            let found = match other {
                Some(token) => format!("{:?}", token),
                None => "end of line".to_string(),
            };
            Err(ParseError::Syntax {
                line,
                message: format!("Expected {:?}, found {}", expected, found),
            })
        }
    }
}

fn is_sized_digits(token: Option<&Token>) -> bool {
    matches!(
        token,
        Some(
            Token::HexValue(_)
                | Token::BinaryValue(_)
                | Token::OctalValue(_)
                | Token::DecimalValue(_)
        )
    )
}
