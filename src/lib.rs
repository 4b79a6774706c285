pub mod ast;
pub mod error;
pub mod locate;
pub mod json;
pub mod path;
pub mod tree;
pub mod highlight;
pub mod document;

pub use ast::Value;
pub use error::ScryError;
pub use locate::Location;
pub use path::{PathExpression, Selector};
pub use tree::{NodeKey, NodeKind, TreeNode};
pub use document::ScryDocument;
