// Public exports.
pub use input_stream::InputStream;
pub use symbol_policy::{policy_base, SymbolError, WordClass};
pub use token::{Token, TokenKind};
pub use tokenizer::{TokenizeError, TokenizeErrorKind, Tokenizer};

// Public mods.
pub mod input_stream;
pub mod symbol_policy;
pub mod token;

#[cfg(feature = "cli")]
pub mod cli_helper;
#[cfg(feature = "cli")]
pub mod cli_stream;

// Private mods.
mod tokenizer;
