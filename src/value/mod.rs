//! Lispy value model and printer.

pub mod pretty;
pub mod symbol;
pub mod value;

pub use self::pretty::render_colored;
pub use self::symbol::{Symbol, ToSymbol};
pub use self::value::{render, Cells, Value};
