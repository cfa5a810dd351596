//! Interactive shell: reads one command per line and dispatches it.

use crate::handlers;
use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::io::{BufRead, IsTerminal, Write};
use tasklist::config::Config;
use tasklist::engine::{Priority, PriorityFilter, SortDirection, SortKey, StatusFilter, TaskStore};
use tracing::{debug, info};

#[derive(Parser)]
#[command(no_binary_name = true, disable_version_flag = true)]
struct Line {
    #[command(subcommand)]
    command: ShellCommand,
}

#[derive(Subcommand, Clone)]
pub enum ShellCommand {
    /// Add a new task
    Add {
        #[arg(required = true, num_args = 1..)]
        title: Vec<String>,
        #[arg(long, short = 'd')]
        description: Option<String>,
        #[arg(long, short = 'p', default_value_t = Priority::Medium)]
        priority: Priority,
        /// Due date: YYYY-MM-DD or the locale's day pattern, optional HH:MM
        #[arg(long)]
        due: Option<String>,
        #[arg(long, short = 'c')]
        category: Option<String>,
    },
    /// Edit fields of a task
    Edit {
        task: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long, short = 'd', conflicts_with = "clear_description")]
        description: Option<String>,
        #[arg(long, short = 'p')]
        priority: Option<Priority>,
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,
        #[arg(long, short = 'c', conflicts_with = "clear_category")]
        category: Option<String>,
        #[arg(long)]
        clear_description: bool,
        #[arg(long)]
        clear_due: bool,
        #[arg(long)]
        clear_category: bool,
    },
    /// Toggle a task between pending and completed
    #[command(alias = "toggle")]
    Done { task: String },
    /// Delete a task
    #[command(alias = "delete")]
    Rm { task: String },
    /// Delete every completed task
    Clear,
    /// List tasks under the current filters and sort
    #[command(alias = "ls")]
    List {
        #[arg(long)]
        json: bool,
    },
    /// Show one task in detail
    Show {
        task: String,
        #[arg(long)]
        json: bool,
    },
    /// Change the filters; with no options, print them
    Filter {
        #[arg(long, short = 's')]
        status: Option<StatusFilter>,
        #[arg(long, short = 'p')]
        priority: Option<PriorityFilter>,
        /// Exact category; an empty value clears it
        #[arg(long, short = 'c')]
        category: Option<String>,
        /// Text to find in title or description; an empty value clears it
        #[arg(long, short = 'q')]
        search: Option<String>,
        #[arg(long, exclusive = true)]
        reset: bool,
    },
    /// Change the sort key and direction
    Sort {
        key: SortKey,
        direction: Option<SortDirection>,
    },
    /// Show counts by status and overdue
    Stats {
        #[arg(long)]
        json: bool,
    },
    /// Leave the shell
    #[command(alias = "exit")]
    Quit,
}

enum Flow {
    Continue,
    Quit,
}

/// The composition root: owns the store, the settings and the input.
pub struct Session {
    pub store: TaskStore,
    pub config: Config,
    input: Box<dyn BufRead>,
    interactive: bool,
}

impl Session {
    #[must_use]
    pub fn new(store: TaskStore, config: Config, input: Box<dyn BufRead>) -> Self {
        Self {
            store,
            config,
            input,
            interactive: std::io::stdin().is_terminal(),
        }
    }

    /// Runs until `quit` or end of input.
    ///
    /// # Errors
    /// Returns error only if reading input or writing the prompt fails;
    /// command failures are reported and the loop continues.
    pub fn run(&mut self) -> Result<()> {
        info!(locale = %self.config.locale, "session started");
        if self.interactive {
            println!("{} Type 'help' for commands, 'quit' to leave.", "tasklist".cyan().bold());
        }

        while let Some(line) = self.read_line(&"> ".dimmed().to_string())? {
            let tokens = match split_line(&line) {
                Ok(tokens) if tokens.is_empty() => continue,
                Ok(tokens) => tokens,
                Err(e) => {
                    println!("{} {e}", "✗".red());
                    continue;
                }
            };

            let command = match Line::try_parse_from(tokens) {
                Ok(parsed) => parsed.command,
                Err(e) => {
                    e.print()?;
                    continue;
                }
            };

            match self.dispatch(command) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(e) => println!("{} {e:#}", "✗".red()),
            }
        }

        info!("session ended");
        Ok(())
    }

    /// Asks a yes/no question. `--yes` and end of input short-circuit.
    ///
    /// # Errors
    /// Returns error if reading input fails.
    pub fn confirm(&mut self, question: &str) -> Result<bool> {
        if self.config.assume_yes {
            return Ok(true);
        }
        let prompt = format!("{} {} ", question, "[y/N]".dimmed());
        let answer = self.read_line_always(&prompt)?.unwrap_or_default();
        Ok(matches!(
            answer.trim().to_lowercase().as_str(),
            "y" | "yes" | "s" | "sim"
        ))
    }

    fn dispatch(&mut self, command: ShellCommand) -> Result<Flow> {
        debug!("dispatching command");
        match command {
            ShellCommand::Add { .. }
            | ShellCommand::Edit { .. }
            | ShellCommand::Done { .. }
            | ShellCommand::Rm { .. }
            | ShellCommand::Clear
            | ShellCommand::Filter { .. }
            | ShellCommand::Sort { .. } => self.dispatch_write_ops(command)?,
            ShellCommand::List { .. } | ShellCommand::Show { .. } | ShellCommand::Stats { .. } => {
                self.dispatch_read_ops(command)?;
            }
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn dispatch_write_ops(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::Add {
                title,
                description,
                priority,
                due,
                category,
            } => handlers::add::handle(
                self,
                &title.join(" "),
                description,
                priority,
                due.as_deref(),
                category,
            ),
            ShellCommand::Edit {
                task,
                title,
                description,
                priority,
                due,
                category,
                clear_description,
                clear_due,
                clear_category,
            } => {
                let edits = handlers::edit::Edits {
                    title,
                    description: handlers::edit::field(description, clear_description),
                    priority,
                    due: handlers::edit::field(due, clear_due),
                    category: handlers::edit::field(category, clear_category),
                };
                handlers::edit::handle(self, &task, edits)
            }
            ShellCommand::Done { task } => handlers::toggle::handle(self, &task),
            ShellCommand::Rm { task } => handlers::delete::handle(self, &task),
            ShellCommand::Clear => handlers::delete::clear_completed(self),
            ShellCommand::Filter {
                status,
                priority,
                category,
                search,
                reset,
            } => handlers::filter::handle(self, status, priority, category, search, reset),
            ShellCommand::Sort { key, direction } => handlers::sort::handle(self, key, direction),
            _ => unreachable!("Invalid write command dispatch"),
        }
    }

    fn dispatch_read_ops(&mut self, command: ShellCommand) -> Result<()> {
        match command {
            ShellCommand::List { json } => handlers::list::handle(self, json),
            ShellCommand::Show { task, json } => handlers::show::handle(self, &task, json),
            ShellCommand::Stats { json } => handlers::stats::handle(self, json),
            _ => unreachable!("Invalid read command dispatch"),
        }
    }

    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        if self.interactive {
            print!("{prompt}");
            std::io::stdout().flush()?;
        }
        self.next_line()
    }

    fn read_line_always(&mut self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let line = self.next_line()?;
        if !self.interactive {
            println!();
        }
        Ok(line)
    }

    fn next_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Splits a command line into words, honouring single and double quotes
/// and backslash escapes.
///
/// # Errors
/// Returns error on an unterminated quote or a trailing backslash.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match (quote, c) {
            (Some(q), c) if c == q => quote = None,
            (Some('"') | None, '\\') => {
                let Some(escaped) = chars.next() else {
                    bail!("Trailing backslash");
                };
                current.push(escaped);
                in_word = true;
            }
            (Some(_), c) => current.push(c),
            (None, '"' | '\'') => {
                quote = Some(c);
                in_word = true;
            }
            (None, c) if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            (None, c) => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        bail!("Unterminated {q} quote");
    }
    if in_word {
        words.push(current);
    }
    Ok(words)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(input: &str) -> Session {
        let config = Config {
            color: false,
            ..Config::default()
        };
        let input = Box::new(std::io::Cursor::new(input.to_string()));
        let mut s = Session::new(TaskStore::new(), config, input);
        s.interactive = false;
        s
    }

    fn parse(line: &str) -> ShellCommand {
        Line::try_parse_from(split_line(line).unwrap()).unwrap().command
    }

    #[test]
    fn test_split_plain_words() {
        assert_eq!(split_line("  add  milk  eggs ").unwrap(), ["add", "milk", "eggs"]);
    }

    #[test]
    fn test_split_quotes_and_escapes() {
        assert_eq!(
            split_line(r#"add "Buy milk" -d 'it''s fine' a\ b"#).unwrap(),
            ["add", "Buy milk", "-d", "its fine", "a b"]
        );
        assert_eq!(split_line(r#"filter -q """#).unwrap(), ["filter", "-q", ""]);
    }

    #[test]
    fn test_split_errors() {
        assert!(split_line("add \"open").is_err());
        assert!(split_line("add trailing\\").is_err());
    }

    #[test]
    fn test_parse_add_joins_title_words() {
        match parse("add Buy fresh milk -p high -c home") {
            ShellCommand::Add {
                title,
                priority,
                category,
                ..
            } => {
                assert_eq!(title.join(" "), "Buy fresh milk");
                assert_eq!(priority, Priority::High);
                assert_eq!(category.as_deref(), Some("home"));
            }
            _ => panic!("expected add"),
        }
    }

    #[test]
    fn test_parse_sort_and_filter() {
        assert!(matches!(
            parse("sort due-date asc"),
            ShellCommand::Sort {
                key: SortKey::DueDate,
                direction: Some(SortDirection::Asc)
            }
        ));
        assert!(matches!(
            parse("filter --status pending --priority all"),
            ShellCommand::Filter {
                status: Some(StatusFilter::Pending),
                priority: Some(PriorityFilter::All),
                ..
            }
        ));
    }

    #[test]
    fn test_parse_rejects_bad_values() {
        let tokens = split_line("add x -p urgent").unwrap();
        assert!(Line::try_parse_from(tokens).is_err());
    }

    #[test]
    fn test_confirm_reads_answer() {
        let mut s = session("y\nno\n");
        assert!(s.confirm("Delete?").unwrap());
        assert!(!s.confirm("Delete?").unwrap());
        assert!(!s.confirm("Delete?").unwrap());
    }

    #[test]
    fn test_confirm_assume_yes() {
        let mut s = session("");
        s.config.assume_yes = true;
        assert!(s.confirm("Delete?").unwrap());
    }

    #[test]
    fn test_run_script() {
        let mut s = session(concat!(
            "add Buy milk -p high\n",
            "add \"Write report\" -c work\n",
            "done milk\n",
            "rm report\n",
            "y\n",
            "list\n",
            "quit\n",
            "add never\n",
        ));
        s.run().unwrap();

        let titles: Vec<_> = s.store.all().iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Buy milk"]);
        assert!(s.store.all()[0].completed);
    }

    #[test]
    fn test_run_survives_errors() {
        let mut s = session("add \"\"\nedit nothing --title x\nbogus\nadd ok\n");
        s.run().unwrap();
        assert_eq!(s.store.all().len(), 1);
    }
}
