use log::debug;

use super::token::TokenKind;
use super::tokenizer::Tokenizer;


/// Groups raw lines into complete inputs.
///
/// An input is complete once its brackets are balanced. Lines holding only
/// whitespace or comments are skipped. A line that fails to tokenize ends the
/// current input right away so that the error is reported when it is parsed.
pub struct InputStream<I> {
    lines: I,
    tokenizer: Tokenizer,

    curr_input: String,
    has_content: bool,
}

impl<I: Iterator<Item = String>> InputStream<I> {
    pub fn new(lines: I) -> Self {
        Self {
            lines,
            tokenizer: Tokenizer::new(),

            curr_input: String::default(),
            has_content: false,
        }
    }

    fn take_input(&mut self) -> String {
        self.has_content = false;
        std::mem::take(&mut self.curr_input)
    }
}


impl<I: Iterator<Item = String>> Iterator for InputStream<I> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = match self.lines.next() {
                Some(line) => line,
                None => {
                    if self.has_content {
                        self.tokenizer.clear();
                        return Some(self.take_input());
                    }
                    return None;
                }
            };

            if !self.curr_input.is_empty() {
                self.curr_input.push('\n');
            }
            self.curr_input += &line;

            if let Err(err) = self.tokenizer.tokenize(&line) {
                debug!("Ending input early: {}", err);
                self.tokenizer.clear();
                return Some(self.take_input());
            }
            for token in self.tokenizer.by_ref() {
                if !matches!(token.token, TokenKind::Comment(_)) {
                    self.has_content = true;
                }
            }

            if self.tokenizer.depth() == 0 {
                if self.has_content {
                    return Some(self.take_input());
                }
                self.curr_input.clear();
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn inputs(text: &str) -> Vec<String> {
        InputStream::new(text.lines().map(String::from)).collect()
    }

    #[test]
    fn one_per_line() {
        assert_eq!(inputs("(+ 1 2)\nhead {1}"), vec!["(+ 1 2)", "head {1}"]);
    }

    #[test]
    fn multi_line() {
        assert_eq!(
            inputs("(join {1}\n  {2})\n(list 3)"),
            vec!["(join {1}\n  {2})", "(list 3)"]
        );
    }

    #[test]
    fn skips_blank_and_comment_lines() {
        assert_eq!(inputs("\n; nothing here\n   \n5"), vec!["5"]);
    }

    #[test]
    fn unterminated_tail() {
        assert_eq!(inputs("(+ 1\n2"), vec!["(+ 1\n2"]);
    }

    #[test]
    fn tokenize_error_ends_input() {
        assert_eq!(inputs("(+ 1\na.b)\n7"), vec!["(+ 1\na.b)", "7"]);
    }
}
