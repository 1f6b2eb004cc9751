pub mod identifier;
pub mod snake;

pub use identifier::{is_valid_identifier, Identifier, IdentifierError};
pub use snake::{is_snake_case, to_snake_case};
