//! Terminal rendering of Values.

use std::fmt::Write;

use colored::*;

use super::value::{render, Value};


fn paren_color(depth: usize) -> (u8, u8, u8) {
    match depth % 6 {
        0 => (0, 255, 204),
        1 => (204, 51, 0),
        2 => (153, 255, 102),
        3 => (153, 102, 255),
        4 => (255, 255, 102),
        _ => (255, 179, 179),
    }
}

/// Like render, but brackets are coloured by depth and errors are red.
///
/// Colouring follows colored's global control, so this falls back to plain
/// text wherever colored is disabled.
pub fn render_colored(value: &Value) -> String {
    let mut out = String::new();
    let written = value.write_list(
        &mut out,
        0,
        &mut |writer, leaf, _depth| {
            if leaf.is_error() {
                let mut text = String::new();
                leaf.write_leaf(&mut text)?;
                write!(writer, "{}", text.red())
            } else {
                leaf.write_leaf(writer)
            }
        },
        &mut |writer, paren, depth| {
            let (r, g, b) = paren_color(depth);
            write!(writer, "{}", paren.truecolor(r, g, b))
        },
    );

    match written {
        Ok(()) => out,
        Err(_) => render(value),
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    use crate::error::LangErr;

    #[test]
    fn plain_without_color() {
        colored::control::set_override(false);
        let value = Value::Sexpr(vec![
            Value::Qexpr(vec![Value::Number(1)]),
            Value::Error(LangErr::DivideByZero),
        ]);
        assert_eq!(render_colored(&value), render(&value));
    }

    #[test]
    fn depth_colors_cycle() {
        assert_eq!(paren_color(0), paren_color(6));
        assert_ne!(paren_color(0), paren_color(1));
    }
}
