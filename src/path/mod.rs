// Author: Dustin Pilgrim
// License: MIT

use std::fmt;
use std::str::Chars;

use crate::error::ScryError;

mod eval;
mod scanner;

pub use eval::evaluate;

/// One step of a path expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Selector {
    /// `.name` descends into an object entry.
    Property(String),
    /// `[3]` descends into an array element.
    Index(usize),
    /// `[*]` descends into every array element, in order.
    WildcardIndex,
}

/// A parsed path expression, e.g. `$.users[0].name`.
///
/// The bare root expression `$` has no selectors.
#[derive(Debug, Clone, PartialEq)]
pub struct PathExpression {
    selectors: Vec<Selector>,
}

impl PathExpression {
    pub fn selectors(&self) -> &[Selector] {
        &self.selectors
    }

    /// True for the bare root expression `$`.
    pub fn is_root(&self) -> bool {
        self.selectors.is_empty()
    }
}

impl fmt::Display for PathExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "$")?;
        for selector in &self.selectors {
            match selector {
                Selector::Property(name) => write!(f, ".{}", name)?,
                Selector::Index(i) => write!(f, "[{}]", i)?,
                Selector::WildcardIndex => write!(f, "[*]")?,
            }
        }
        Ok(())
    }
}

pub(crate) struct Scanner<'a> {
    input: Chars<'a>,
    peek: Option<char>,
    offset: usize,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        let mut scanner = Scanner {
            input: input.chars(),
            peek: None,
            offset: 0,
        };
        scanner.peek = scanner.input.next();
        scanner
    }
}

/// Parse a path expression.
///
/// The grammar is regular and scanned strictly left to right: a leading
/// `$`, then any run of `.property` and `[index]` selectors. No
/// whitespace is skipped anywhere, and trailing input is an error.
///
/// # Examples
/// ```
/// use scry_json::path;
///
/// let expr = path::parse("$.users[0].name")?;
/// assert_eq!(expr.selectors().len(), 3);
/// assert!(path::parse("$").expect("root always parses").is_root());
/// # Ok::<(), scry_json::ScryError>(())
/// ```
///
/// # Errors
/// Returns [`ScryError::SyntaxError`] with the character offset of the
/// first unparsable character.
pub fn parse(input: &str) -> Result<PathExpression, ScryError> {
    let mut scanner = Scanner::new(input);
    scanner::expect_root(&mut scanner)?;
    let selectors = scanner::scan_selectors(&mut scanner)?;
    Ok(PathExpression { selectors })
}
