//! Interactive dashboard session.
//!
//! Reads one command per line, updates the current selection and re-renders
//! the dashboard after every change. All evaluations run against the
//! snapshot held by the [`SnapshotStore`]; only `refresh` re-reads the file.
//!
//! ```text
//! sentiment Positive,Neutral     restrict a filter
//! category all                   allow every observed value
//! spam none                      allow nothing (empty view)
//! show | options | reset | refresh | help | quit
//! ```

use crate::config::DashboardConfig;
use crate::engine::{Dashboard, allowed_values};
use crate::error::Result;
use crate::loader::SnapshotStore;
use crate::reporting::{render_dashboard, render_options};
use crate::types::{FilterSelection, LabelColumn};
use std::collections::BTreeSet;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::{info, warn};

const HELP: &str = "\
Commands:
  sentiment <v1,v2,...|all|none>   set the sentiment filter
  category  <v1,v2,...|all|none>   set the category filter
  spam      <v1,v2,...|all|none>   set the spam/not spam filter
  show                             render the dashboard
  options                          list filter options
  reset                            select every option again
  refresh                          reload the dataset from disk
  help                             show this help
  quit                             leave the session";

/// New value for one filter control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterChange {
    All,
    Nothing,
    Values(Vec<String>),
}

/// A parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Filter(LabelColumn, FilterChange),
    Show,
    Options,
    Reset,
    Refresh,
    Help,
    Quit,
}

/// Errors in a single command line. These never end the session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("Unknown command '{0}' (type 'help' for a list of commands)")]
    Unknown(String),

    #[error("Filter '{0}' needs values, 'all' or 'none'")]
    MissingValues(String),
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> std::result::Result<Option<Command>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest.trim()),
            None => (line, ""),
        };

        if let Some(column) = LabelColumn::from_keyword(keyword) {
            let change = match rest.to_ascii_lowercase().as_str() {
                "" => return Err(CommandError::MissingValues(keyword.to_string())),
                "all" => FilterChange::All,
                "none" => FilterChange::Nothing,
                _ => FilterChange::Values(
                    rest.split(',')
                        .map(str::trim)
                        .filter(|v| !v.is_empty())
                        .map(String::from)
                        .collect(),
                ),
            };
            return Ok(Some(Command::Filter(column, change)));
        }

        let command = match keyword.to_ascii_lowercase().as_str() {
            "show" => Command::Show,
            "options" => Command::Options,
            "reset" => Command::Reset,
            "refresh" => Command::Refresh,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };
        Ok(Some(command))
    }
}

/// What the caller should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Output(String),
    Quit,
}

/// State of one interactive session: the current dashboard and selection.
pub struct Session<'a> {
    store: &'a SnapshotStore,
    config: &'a DashboardConfig,
    dashboard: Dashboard,
    selection: FilterSelection,
    json: bool,
}

impl<'a> Session<'a> {
    pub fn new(store: &'a SnapshotStore, config: &'a DashboardConfig) -> Result<Self> {
        let dashboard = Dashboard::new(store.snapshot(), config)?;
        let selection = dashboard.default_selection();
        Ok(Self {
            store,
            config,
            dashboard,
            selection,
            json: false,
        })
    }

    /// Render views as JSON instead of the terminal dashboard.
    pub fn with_json_output(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    /// Apply one command and return what to print.
    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        match command {
            Command::Filter(column, change) => {
                let allowed: BTreeSet<String> = match change {
                    FilterChange::All => self
                        .dashboard
                        .options()
                        .for_column(column)
                        .iter()
                        .cloned()
                        .collect(),
                    FilterChange::Nothing => Default::default(),
                    FilterChange::Values(values) => allowed_values(column, &values),
                };
                *self.selection.allowed_mut(column) = allowed;
                self.render()
            }
            Command::Show => self.render(),
            Command::Options => Ok(Outcome::Output(render_options(self.dashboard.options()))),
            Command::Reset => {
                self.selection = self.dashboard.default_selection();
                self.render()
            }
            Command::Refresh => {
                let snapshot = self.store.refresh()?;
                self.dashboard = Dashboard::new(snapshot, self.config)?;
                self.selection = self.dashboard.default_selection();
                info!("Filters reset after refresh");
                self.render()
            }
            Command::Help => Ok(Outcome::Output(HELP.to_string())),
            Command::Quit => Ok(Outcome::Quit),
        }
    }

    /// Run the session until `quit` or end of input.
    ///
    /// Command and refresh errors are reported on `output` and the session
    /// continues with its previous state.
    pub fn run<R: BufRead, W: Write>(&mut self, input: R, mut output: W) -> Result<()> {
        if let Outcome::Output(text) = self.render()? {
            writeln!(output, "{}", text)?;
        }

        for line in input.lines() {
            let line = line?;
            let command = match Command::parse(&line) {
                Ok(Some(command)) => command,
                Ok(None) => continue,
                Err(e) => {
                    writeln!(output, "{}", e)?;
                    continue;
                }
            };

            match self.apply(command) {
                Ok(Outcome::Output(text)) => writeln!(output, "{}", text)?,
                Ok(Outcome::Quit) => break,
                Err(e) => {
                    warn!("Command failed: {}", e);
                    writeln!(output, "Error: {}", e)?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }

    fn render(&self) -> Result<Outcome> {
        let view = self.dashboard.evaluate(&self.selection)?;
        let text = if self.json {
            serde_json::to_string_pretty(&view)?
        } else {
            render_dashboard(&view)
        };
        Ok(Outcome::Output(text))
    }
}
