pub mod case;
pub mod cli;
pub mod config;
pub mod document;
pub mod renamer;
pub mod rewrite;

pub use case::{is_valid_identifier, to_snake_case, Identifier};
pub use config::Config;
pub use document::{Document, EditScope, StringDocument};
pub use renamer::{RenameOutcome, RenameReport, Renamer, SkipReason};
pub use rewrite::{rewrite_all, BoundaryClass, BufferRewriter, Edit, RewritePlan};
