//! Line-oriented interactive session
//!
//! Drives one [`FormEngine`] from text commands. Engine errors are reported
//! to the user and the session continues; only IO errors end it early.

use crate::output::{write_template_detail, write_template_list};
use clause_catalog::Catalog;
use clause_form::{FormEngine, Mode};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  categories                  list categories
  search [text] [| category]  filter templates
  select <id>                 open a template's form
  fields                      show the form with current values
  set <name> [value...]       store a value (empty clears it)
  render                      generate the clause
  reset                       back to browsing
  status                      current mode and template
  help                        this text
  quit                        leave the session";

/// Parsed session input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand<'a> {
    /// `categories`
    Categories,
    /// `search [text] [| category]`
    Search {
        /// Text to match, may be empty
        query: &'a str,
        /// Exact category, may be empty
        category: &'a str,
    },
    /// `select <id>`
    Select(&'a str),
    /// `fields`
    Fields,
    /// `set <name> [value...]`
    Set {
        /// Field name
        name: &'a str,
        /// Raw value, empty clears the field
        value: &'a str,
    },
    /// `render`
    Render,
    /// `reset`
    Reset,
    /// `status`
    Status,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
    /// Blank line
    Empty,
}

impl<'a> SessionCommand<'a> {
    /// Parse one input line
    ///
    /// # Errors
    /// Returns a message for unknown commands or missing arguments.
    pub fn parse(line: &'a str) -> Result<Self, String> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let command = match word.to_ascii_lowercase().as_str() {
            "" => Self::Empty,
            "categories" => Self::Categories,
            "search" => {
                let (query, category) = rest.split_once('|').unwrap_or((rest, ""));
                Self::Search {
                    query: query.trim(),
                    category: category.trim(),
                }
            }
            "select" if !rest.is_empty() => Self::Select(rest),
            "select" => return Err("usage: select <id>".to_string()),
            "fields" => Self::Fields,
            "set" => {
                let (name, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if name.is_empty() {
                    return Err("usage: set <name> [value...]".to_string());
                }
                Self::Set {
                    name,
                    value: value.trim_start(),
                }
            }
            "render" => Self::Render,
            "reset" => Self::Reset,
            "status" => Self::Status,
            "help" | "?" => Self::Help,
            "quit" | "exit" => Self::Quit,
            other => return Err(format!("unknown command '{other}', try 'help'")),
        };
        Ok(command)
    }
}

/// Interactive session over a reader and a writer
pub struct Session<'c, R, W> {
    engine: FormEngine<'c>,
    input: R,
    output: W,
    prompt: bool,
}

impl<'c, R: BufRead, W: Write> Session<'c, R, W> {
    /// Create a session in browsing mode
    pub fn new(catalog: &'c Catalog, input: R, output: W) -> Self {
        Self {
            engine: FormEngine::new(catalog),
            input,
            output,
            prompt: false,
        }
    }

    /// Print a prompt before each line
    #[must_use]
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    /// Engine state, for inspection after the session ends
    #[must_use]
    pub fn engine(&self) -> &FormEngine<'c> {
        &self.engine
    }

    /// Read commands until `quit` or end of input
    ///
    /// # Errors
    /// Returns IO errors from the reader or writer.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            if self.prompt {
                write!(self.output, "> ")?;
                self.output.flush()?;
            }
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            match SessionCommand::parse(&line) {
                Ok(SessionCommand::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(message) => writeln!(self.output, "error: {message}")?,
            }
        }
        tracing::debug!("Session ended in {:?} mode", self.engine.mode());
        Ok(())
    }

    fn execute(&mut self, command: SessionCommand<'_>) -> io::Result<()> {
        let out: &mut dyn Write = &mut self.output;
        match command {
            SessionCommand::Empty | SessionCommand::Quit => {}
            SessionCommand::Help => writeln!(out, "{HELP}")?,
            SessionCommand::Categories => {
                for category in self.engine.list_categories() {
                    writeln!(out, "{category}")?;
                }
            }
            SessionCommand::Search { query, category } => {
                write_template_list(out, &self.engine.search(query, category))?;
            }
            SessionCommand::Select(id) => match self.engine.select_template(id) {
                Ok(template) => write_template_detail(out, template, None)?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            SessionCommand::Fields => match self.engine.active_template() {
                Some(template) => {
                    write_template_detail(out, template, Some(self.engine.values()))?;
                }
                None => writeln!(out, "error: no template selected")?,
            },
            SessionCommand::Set { name, value } => {
                if let Some(template) = self.engine.active_template() {
                    if template.field(name).is_none() {
                        writeln!(out, "note: '{name}' is not a field of {}", template.id)?;
                    }
                }
                self.engine.set_field_value(name, value);
            }
            SessionCommand::Render => match self.engine.render() {
                Ok(text) => writeln!(out, "{text}")?,
                Err(err) => writeln!(out, "error: {err}")?,
            },
            SessionCommand::Reset => {
                self.engine.reset();
                writeln!(out, "form cleared")?;
            }
            SessionCommand::Status => {
                let state = self.engine.state();
                match (state.mode(), self.engine.active_template()) {
                    (Mode::Editing, Some(template)) => {
                        let missing = self.engine.missing_required().len();
                        writeln!(
                            out,
                            "editing {} ({} values set, {} required missing)",
                            template.id,
                            state.values().len(),
                            missing
                        )?;
                    }
                    _ => writeln!(out, "browsing ({} values set)", state.values().len())?,
                }
            }
        }
        Ok(())
    }
}
