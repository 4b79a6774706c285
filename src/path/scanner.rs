use super::*;

/// Advance the character iterator, keeping the offset current.
pub(super) fn bump(scanner: &mut Scanner) -> Option<char> {
    let curr = scanner.peek;
    if curr.is_some() {
        scanner.offset += 1;
    }
    scanner.peek = scanner.input.next();
    curr
}

/// Consume the leading `$` root marker.
pub(super) fn expect_root(scanner: &mut Scanner) -> Result<(), ScryError> {
    match scanner.peek {
        Some('$') => {
            bump(scanner);
            Ok(())
        }
        _ => Err(ScryError::SyntaxError {
            message: "Path must start with '$'".into(),
            offset: 0,
            hint: Some("Paths are anchored at the document root, e.g. $.users[0]".into()),
            code: Some(101),
        }),
    }
}

/// Consume selectors until end of input.
pub(super) fn scan_selectors(scanner: &mut Scanner) -> Result<Vec<Selector>, ScryError> {
    let mut selectors = Vec::new();

    while let Some(c) = scanner.peek {
        match c {
            '.' => {
                bump(scanner);
                selectors.push(scan_property(scanner)?);
            }
            '[' => {
                bump(scanner);
                selectors.push(scan_index(scanner)?);
            }
            _ => {
                return Err(ScryError::SyntaxError {
                    message: format!("Unexpected character '{}', expected '.' or '['", c),
                    offset: scanner.offset,
                    hint: Some("Selectors are written as .name or [0]".into()),
                    code: Some(102),
                });
            }
        }
    }

    Ok(selectors)
}

/// Consume a property name after a consumed '.'.
fn scan_property(scanner: &mut Scanner) -> Result<Selector, ScryError> {
    let mut name = String::new();

    match scanner.peek {
        Some(c) if c.is_alphabetic() || c == '_' => {
            name.push(c);
            bump(scanner);
        }
        _ => {
            return Err(ScryError::SyntaxError {
                message: match scanner.peek {
                    Some(c) => format!("Invalid property name start '{}'", c),
                    None => "Expected property name after '.'".into(),
                },
                offset: scanner.offset,
                hint: Some("Property names start with a letter or underscore".into()),
                code: Some(103),
            });
        }
    }

    while let Some(c) = scanner.peek {
        if c.is_alphanumeric() || c == '_' || c == '-' {
            name.push(c);
            bump(scanner);
        } else {
            break;
        }
    }

    Ok(Selector::Property(name))
}

/// Consume an index or wildcard after a consumed '['.
fn scan_index(scanner: &mut Scanner) -> Result<Selector, ScryError> {
    if scanner.peek == Some('*') {
        bump(scanner);
        return close_bracket(scanner, Selector::WildcardIndex);
    }

    let start = scanner.offset;
    let mut digits = String::new();
    while let Some(c) = scanner.peek {
        if c.is_ascii_digit() {
            digits.push(c);
            bump(scanner);
        } else {
            break;
        }
    }

    if digits.is_empty() {
        return Err(ScryError::SyntaxError {
            message: match scanner.peek {
                Some(c) => format!("Invalid index character '{}'", c),
                None => "Expected index or '*' after '['".into(),
            },
            offset: scanner.offset,
            hint: Some("Brackets hold a non-negative integer or '*'".into()),
            code: Some(104),
        });
    }

    let index = digits.parse::<usize>().map_err(|_| ScryError::SyntaxError {
        message: format!("Index '{}' is too large", digits),
        offset: start,
        hint: None,
        code: Some(106),
    })?;

    close_bracket(scanner, Selector::Index(index))
}

fn close_bracket(scanner: &mut Scanner, selector: Selector) -> Result<Selector, ScryError> {
    match scanner.peek {
        Some(']') => {
            bump(scanner);
            Ok(selector)
        }
        Some(c) => Err(ScryError::SyntaxError {
            message: format!("Unexpected character '{}', expected ']'", c),
            offset: scanner.offset,
            hint: Some("Close the selector with ']'".into()),
            code: Some(105),
        }),
        None => Err(ScryError::SyntaxError {
            message: "Unclosed '[' selector".into(),
            offset: scanner.offset,
            hint: Some("Close the selector with ']'".into()),
            code: Some(105),
        }),
    }
}
