use log::debug;
use rustyline::error::ReadlineError;
use rustyline::Editor;

use super::cli_helper::CliHelper;
use super::tokenizer::Tokenizer;


/// Interactive source of complete inputs, read through rustyline.
///
/// Keeps prompting with a continuation prompt while brackets are open.
pub struct CliStream {
    editor: Editor<CliHelper>,
    pending: PendingInput,
}

/// Lines of an input still waiting for its brackets to close.
struct PendingInput {
    tokenizer: Tokenizer,
    curr_input: String,
}

impl CliStream {
    pub fn new() -> CliStream {
        let mut editor = Editor::<CliHelper>::new();
        editor.set_helper(Some(CliHelper::new()));

        CliStream {
            editor,
            pending: PendingInput::new(),
        }
    }
}

impl Default for CliStream {
    fn default() -> Self {
        Self::new()
    }
}


impl PendingInput {
    fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
            curr_input: String::default(),
        }
    }

    fn is_empty(&self) -> bool {
        self.curr_input.is_empty()
    }

    fn depth(&self) -> usize {
        self.tokenizer.depth()
    }

    fn reset(&mut self) {
        self.tokenizer.clear();
        self.curr_input.clear();
    }

    /// Adds line, returning the full input once its brackets are balanced.
    ///
    /// Lines stay newline-separated so that a trailing comment cannot swallow
    /// the lines after it.
    fn push_line(&mut self, line: &str) -> Option<String> {
        if !self.curr_input.is_empty() {
            self.curr_input.push('\n');
        }
        self.curr_input += line;

        let tokenized = self.tokenizer.tokenize(line);
        // Only depth matters here; the input is re-read in full by the parser.
        self.tokenizer.by_ref().for_each(drop);
        if let Err(err) = tokenized {
            debug!("Ending input early: {}", err);
            self.tokenizer.clear();
        }

        if self.tokenizer.depth() == 0 {
            Some(std::mem::take(&mut self.curr_input))
        } else {
            None
        }
    }
}

/// Single-line form of input for the history.
///
/// Continuation lines are joined with spaces, so their comments are dropped.
fn history_entry(input: &str) -> String {
    if !input.contains('\n') {
        return input.to_string();
    }
    input
        .lines()
        .map(|line| line.split(';').next().unwrap_or_default().trim())
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}


impl Iterator for CliStream {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        loop {
            let line = if self.pending.is_empty() {
                self.editor.readline("lispy> ")
            } else {
                self.editor
                    .readline(&format!("..{}", "  ".repeat(self.pending.depth())))
            };

            match line {
                Ok(line) => {
                    if let Some(input) = self.pending.push_line(&line) {
                        self.editor.add_history_entry(history_entry(&input));
                        return Some(input);
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    // Enable ^C to cancel an expression mid-parse.
                    self.pending.reset();
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("^D");
                    self.pending.reset();
                    return None;
                }
                Err(err) => {
                    println!("[Readline Error]: {:?}", err);
                    println!();
                    self.pending.reset();
                    continue;
                }
            }
        }
    }
}
