// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Line editors used by the prompts.

use crate::config::Vocabulary;
use console::{style, Key, Term};
use dialoguer::theme::{ColorfulTheme, Theme};
use dialoguer::Input;
use std::io::{self, BufRead, IsTerminal, Write};

use super::completion::TypeCompleter;

/// Source of interactive input.
///
/// `Ok(None)` means the input stream ended.
pub trait LineEditor {
    /// Read the commit type, completing keywords from `vocabulary` on Tab.
    fn read_type(&mut self, prompt: &str, vocabulary: &Vocabulary) -> io::Result<Option<String>>;

    /// Read one line of plain text, starting from `initial`.
    ///
    /// The returned line includes `initial` unless the user removed it.
    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<Option<String>>;

    /// Show `prompt` and read a single character.
    fn read_char(&mut self, prompt: &str) -> io::Result<Option<char>>;
}

/// Pick the editor for the current process.
///
/// A real terminal gets the interactive editor; piped input is read line by
/// line.
pub fn open_editor() -> Box<dyn LineEditor> {
    if io::stdin().is_terminal() && Term::stderr().is_term() {
        tracing::debug!("Using terminal line editor");
        Box::new(TerminalEditor::new())
    } else {
        tracing::debug!("Input is not a terminal, reading plain lines");
        Box::new(PlainEditor::new(io::stdin().lock(), io::stderr()))
    }
}

/// Interactive editor built on dialoguer.
pub struct TerminalEditor {
    term: Term,
    theme: ColorfulTheme,
}

impl TerminalEditor {
    /// Create an editor drawing on stderr.
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            theme: ColorfulTheme::default(),
        }
    }

    fn rendered_prompt(&self, prompt: &str) -> String {
        let mut rendered = String::new();
        if self
            .theme
            .format_input_prompt(&mut rendered, prompt, None)
            .is_err()
        {
            rendered = format!("{} ", prompt);
        }
        rendered
    }
}

impl Default for TerminalEditor {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEditor for TerminalEditor {
    fn read_type(&mut self, prompt: &str, vocabulary: &Vocabulary) -> io::Result<Option<String>> {
        let completer = TypeCompleter::new(vocabulary, self.term.clone(), self.rendered_prompt(prompt));
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .completion_with(&completer)
            .interact_text_on(&self.term);
        finish(result)
    }

    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<Option<String>> {
        let result = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .with_initial_text(initial)
            .allow_empty(true)
            .interact_text_on(&self.term);
        finish(result)
    }

    fn read_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        self.term.write_line(prompt)?;
        let answer = match self.term.read_key()? {
            Key::Char(c) => Some(c),
            Key::Enter => Some('\n'),
            _ => None,
        };
        if let Some(c) = answer.filter(|c| !c.is_control()) {
            self.term.write_line(&c.to_string())?;
        }
        Ok(answer)
    }
}

fn finish(result: dialoguer::Result<String>) -> io::Result<Option<String>> {
    match result {
        Ok(line) => Ok(Some(line)),
        Err(dialoguer::Error::IO(e)) if e.kind() == io::ErrorKind::UnexpectedEof => Ok(None),
        Err(dialoguer::Error::IO(e)) => Err(e),
    }
}

/// Line-by-line editor for piped input.
///
/// No completion: the type is read as typed. The title prefix is echoed and
/// the rest of the title comes from the next input line.
pub struct PlainEditor<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> PlainEditor<R, W> {
    /// Read from `input`, write prompts to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the prompt sink.
    pub fn into_output(self) -> W {
        self.output
    }

    fn next_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

impl<R: BufRead, W: Write> LineEditor for PlainEditor<R, W> {
    fn read_type(&mut self, prompt: &str, _vocabulary: &Vocabulary) -> io::Result<Option<String>> {
        write!(self.output, "{}: ", style(prompt).black().bright().for_stderr())?;
        self.output.flush()?;
        self.next_line()
    }

    fn read_line(&mut self, prompt: &str, initial: &str) -> io::Result<Option<String>> {
        writeln!(self.output, "{}", style(prompt).black().bright().for_stderr())?;
        write!(self.output, "{}", initial)?;
        self.output.flush()?;
        Ok(self.next_line()?.map(|rest| format!("{}{}", initial, rest)))
    }

    fn read_char(&mut self, prompt: &str) -> io::Result<Option<char>> {
        writeln!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let byte = match self.input.fill_buf()?.first() {
            Some(&b) => b,
            None => return Ok(None),
        };
        self.input.consume(1);
        Ok(Some(char::from(byte)))
    }
}
