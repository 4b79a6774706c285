// Author: Dustin Pilgrim
// License: MIT

use super::{PathExpression, Selector};
use crate::ast::Value;

/// Evaluate a path expression against a value tree.
///
/// Never fails: a selector that cannot descend contributes nothing, so
/// an empty result means "no matches", not an error. Matches come back
/// in depth-first order with array elements visited in index order, and
/// equal values reached through different branches stay separate.
pub fn evaluate<'a>(root: &'a Value, expr: &PathExpression) -> Vec<&'a Value> {
    let mut matches = Vec::new();
    collect(root, expr.selectors(), &mut matches);
    matches
}

fn collect<'a>(current: &'a Value, selectors: &[Selector], matches: &mut Vec<&'a Value>) {
    match selectors.split_first() {
        None => matches.push(current),
        Some((Selector::Property(name), rest)) => {
            if let Value::Object(entries) = current {
                if let Some(child) = entries.get(name) {
                    collect(child, rest, matches);
                }
            }
        }
        Some((Selector::Index(i), rest)) => {
            if let Value::Array(elements) = current {
                if let Some(child) = elements.get(*i) {
                    collect(child, rest, matches);
                }
            }
        }
        Some((Selector::WildcardIndex, rest)) => {
            if let Value::Array(elements) = current {
                for child in elements {
                    collect(child, rest, matches);
                }
            }
        }
    }
}
