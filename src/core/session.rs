//! Interactive session: the line-oriented front end over one RecordStore.
//!
//! Each session owns its store and history; nothing is shared between
//! sessions and nothing survives the process except explicit exports.

use crate::config::Config;
use crate::core::history::{History, Operation};
use crate::core::store::RecordStore;
use crate::core::validator::{EntryValidator, check_minutes};
use crate::errors::{AppError, AppResult};
use crate::export::{ExportFormat, ExportLogic};
use crate::models::entry::Entry;
use crate::report_error;
use crate::ui::entries::{EMPTY_MESSAGE, render_entries, status_preview};
use crate::ui::messages::{header, info, prompt, success, warning};
use crate::utils::date;
use crate::utils::path::{resolve_against, with_extension_if_missing};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::collections::BTreeSet;
use std::io::BufRead;
use std::path::PathBuf;

pub const REMINDER: &str = "Take a mindful break and do something relaxing! 🌱";

const SESSION_HELP: &str = "\
Commands:
  add [--name N] [--activity A] [--metime M] [--minutes X]
                      Add an entry (prompts for missing fields)
  list                Show all entries
  delete <#> [<#>...] Delete entries by position (as shown by list)
  clear               Remove all entries
  export [--format xlsx|csv|json] [--file PATH] [--force]
                      Write the entries to a spreadsheet
  status <MINUTES>    Preview the status for a screen-free time
  remind              Self-care reminder
  history             Show what happened in this session
  help                Show this help
  quit                Leave the session (entries are not saved)

Values are not quoted: a value runs up to the next --flag, and words are
joined by single spaces (`--file my logs/week 1.xlsx` is one path).";

#[derive(Parser, Debug)]
#[command(no_binary_name = true, disable_help_subcommand = true)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand {
    /// Add a new entry
    Add {
        #[arg(long, num_args = 1..)]
        name: Vec<String>,
        #[arg(long, num_args = 1..)]
        activity: Vec<String>,
        #[arg(long, num_args = 1..)]
        metime: Vec<String>,
        #[arg(long, allow_hyphen_values = true)]
        minutes: Option<String>,
    },

    /// Show all entries
    #[command(alias = "ls")]
    List,

    /// Delete entries by position
    #[command(aliases = ["del", "rm"])]
    Delete { indices: Vec<usize> },

    /// Remove all entries
    Clear,

    /// Export entries
    Export {
        #[arg(long, value_enum)]
        format: Option<ExportFormat>,
        #[arg(long, num_args = 1..)]
        file: Vec<String>,
        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Preview a status
    Status {
        #[arg(allow_hyphen_values = true)]
        minutes: String,
    },

    /// Self-care reminder
    Remind,

    /// Show session history
    History,

    /// Show help
    Help,

    /// Leave the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionCommand {
    /// Parse one input line. `Ok(None)` for blank lines and `#` comments.
    pub fn parse_line(line: &str) -> AppResult<Option<Self>> {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            return Ok(None);
        }

        SessionLine::try_parse_from(trimmed.split_whitespace())
            .map(|l| Some(l.command))
            .map_err(|e| {
                let msg = e.to_string();
                let first = msg
                    .lines()
                    .next()
                    .unwrap_or("")
                    .trim_start_matches("error: ")
                    .to_string();
                AppError::InvalidCommand(first)
            })
    }

    fn mutates(&self) -> bool {
        matches!(
            self,
            SessionCommand::Add { .. } | SessionCommand::Delete { .. } | SessionCommand::Clear
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session {
    store: RecordStore,
    history: History,
    cfg: Config,
    clock: fn() -> NaiveDate,
}

impl Session {
    pub fn new(cfg: Config) -> Self {
        Self::with_clock(cfg, date::today)
    }

    /// Session whose entries are dated by `clock` instead of the system date.
    pub fn with_clock(cfg: Config, clock: fn() -> NaiveDate) -> Self {
        Self {
            store: RecordStore::new(),
            history: History::new(),
            cfg,
            clock,
        }
    }

    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Read commands until `quit` or end of input.
    ///
    /// Command failures are reported and the session goes on; only a failing
    /// input stream ends it with an error.
    pub fn run<R: BufRead>(&mut self, input: &mut R) -> AppResult<()> {
        header("Mental Wellness Entry Logger");
        info("Track your daily wellness activities to promote healthy mind habits!");
        info("Type 'help' for the list of commands.");

        loop {
            prompt("wellness> ");
            let Some(line) = read_line(input)? else {
                println!();
                break;
            };

            let cmd = match SessionCommand::parse_line(&line) {
                Ok(Some(cmd)) => cmd,
                Ok(None) => continue,
                Err(e) => {
                    report_error(&e);
                    continue;
                }
            };

            match self.execute(cmd, input) {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e @ AppError::Input(_)) => return Err(e),
                Err(e) => report_error(&e),
            }
        }

        if !self.store.is_empty() {
            warning(format!(
                "Session closed with {} unsaved entr{} (export to keep them).",
                self.store.len(),
                plural_y(self.store.len())
            ));
        }
        Ok(())
    }

    /// Run one command. Mutating commands re-render the table afterwards.
    pub fn execute<R: BufRead>(&mut self, cmd: SessionCommand, input: &mut R) -> AppResult<Flow> {
        let mutates = cmd.mutates();

        let flow = match cmd {
            SessionCommand::Add {
                name,
                activity,
                metime,
                minutes,
            } => self.add(name, activity, metime, minutes, input)?,
            SessionCommand::List => {
                self.print_table();
                Flow::Continue
            }
            SessionCommand::Delete { indices } => self.delete(indices)?,
            SessionCommand::Clear => self.clear(input)?,
            SessionCommand::Export {
                format,
                file,
                force,
            } => self.export(format, file, force, input)?,
            SessionCommand::Status { minutes } => {
                let m = EntryValidator::parse_minutes(&minutes)
                    .and_then(check_minutes)
                    .map_err(|e| AppError::Validation(e.into()))?;
                println!("{}", status_preview(EntryValidator::derive_status(m)));
                Flow::Continue
            }
            SessionCommand::Remind => {
                info(REMINDER);
                Flow::Continue
            }
            SessionCommand::History => {
                self.print_history();
                Flow::Continue
            }
            SessionCommand::Help => {
                println!("{SESSION_HELP}");
                Flow::Continue
            }
            SessionCommand::Quit => Flow::Quit,
        };

        if mutates && flow == Flow::Continue {
            self.print_table();
        }

        Ok(flow)
    }

    fn add<R: BufRead>(
        &mut self,
        name: Vec<String>,
        activity: Vec<String>,
        metime: Vec<String>,
        minutes: Option<String>,
        input: &mut R,
    ) -> AppResult<Flow> {
        let complete =
            !name.is_empty() && !activity.is_empty() && !metime.is_empty() && minutes.is_some();
        if !complete {
            header("Add a New Entry");
        }

        let fields = [
            (name, "Student Name: "),
            (activity, "Wellness Activity (e.g. walked, meditated): "),
            (metime, "Me-time Activity (e.g. reading, yoga): "),
        ];

        let mut values = Vec::with_capacity(4);
        for (words, label) in fields {
            if words.is_empty() {
                match ask(input, label)? {
                    Some(v) => values.push(v),
                    None => return Ok(form_interrupted()),
                }
            } else {
                values.push(words.join(" "));
            }
        }

        let raw_minutes = match minutes {
            Some(m) => m,
            None => match ask(input, "Screen-free Time (minutes, 1-1440): ")? {
                Some(v) => v,
                None => return Ok(form_interrupted()),
            },
        };

        let entry = EntryValidator::validate_raw(
            &values[0],
            &values[1],
            &values[2],
            &raw_minutes,
            (self.clock)(),
        )?;

        println!("{}", status_preview(entry.status()));
        self.history.record(Operation::Add, entry.short_label(), "Entry added");
        self.store.append(entry);
        success("Entry added.");

        Ok(Flow::Continue)
    }

    fn delete(&mut self, indices: Vec<usize>) -> AppResult<Flow> {
        if indices.is_empty() {
            return Err(AppError::NoSelectionForDelete);
        }

        let selection: BTreeSet<usize> = indices.into_iter().collect();
        let removed = self.store.delete_at(&selection)?;

        let labels: Vec<String> = removed.iter().map(Entry::short_label).collect();
        self.history.record(
            Operation::Del,
            labels.join(", "),
            format!("{} entr{} deleted", removed.len(), plural_y(removed.len())),
        );
        success("Selected entries deleted.");

        Ok(Flow::Continue)
    }

    fn clear<R: BufRead>(&mut self, input: &mut R) -> AppResult<Flow> {
        if self.cfg.confirm_destructive && !self.store.is_empty() {
            warning(format!(
                "This will remove all {} entries of this session.",
                self.store.len()
            ));
            if !confirm(input, "Confirm [y/N]: ")? {
                info("Operation cancelled.");
                return Ok(Flow::Continue);
            }
        }

        let n = self.store.clear();
        self.history.record(
            Operation::Clear,
            "",
            format!("{n} entr{} cleared", plural_y(n)),
        );
        success("All entries cleared.");

        Ok(Flow::Continue)
    }

    fn export<R: BufRead>(
        &mut self,
        format: Option<ExportFormat>,
        file: Vec<String>,
        force: bool,
        input: &mut R,
    ) -> AppResult<Flow> {
        let file = (!file.is_empty()).then(|| file.join(" "));
        let (format, path) = self.resolve_export_target(format, file.as_deref());

        let mut ask_overwrite = |q: &str| confirm(input, q);
        let written =
            ExportLogic::export(self.store.all(), format, &path, force, &mut ask_overwrite)?;

        if written {
            self.history.record(
                Operation::Export,
                path.display().to_string(),
                format!("{} entries as {}", self.store.len(), format.label()),
            );
        }

        Ok(Flow::Continue)
    }

    /// Pick format and path: explicit flags first, then the file extension,
    /// then the configured defaults.
    pub fn resolve_export_target(
        &self,
        format: Option<ExportFormat>,
        file: Option<&str>,
    ) -> (ExportFormat, PathBuf) {
        let Some(file) = file else {
            // default file name follows the requested format
            let path = resolve_against(&self.cfg.export_dir, self.cfg.export_file.as_str());
            let format = format.unwrap_or(self.cfg.export_format);
            return (format, path.with_extension(format.as_str()));
        };

        let path = resolve_against(&self.cfg.export_dir, file);
        let format = format
            .or_else(|| ExportFormat::from_extension(&path))
            .unwrap_or(self.cfg.export_format);

        (format, with_extension_if_missing(&path, format.as_str()))
    }

    fn print_table(&self) {
        if self.store.is_empty() {
            info(EMPTY_MESSAGE);
            return;
        }
        let sep = self.cfg.separator_char.chars().next().unwrap_or('-');
        print!("{}", render_entries(self.store.all(), sep));
    }

    fn print_history(&self) {
        if self.history.is_empty() {
            info("Nothing happened in this session yet.");
            return;
        }
        println!("📜 Session history:\n");
        for line in self.history.render() {
            println!("{line}");
        }
    }
}

fn read_line<R: BufRead>(input: &mut R) -> AppResult<Option<String>> {
    let mut s = String::new();
    if input.read_line(&mut s).map_err(AppError::Input)? == 0 {
        return Ok(None);
    }
    Ok(Some(s.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead>(input: &mut R, label: &str) -> AppResult<Option<String>> {
    prompt(label);
    read_line(input)
}

/// Yes/no question on the session input; anything but y/yes (or EOF) is no.
fn confirm<R: BufRead>(input: &mut R, question: &str) -> AppResult<bool> {
    let answer = ask(input, question)?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

fn form_interrupted() -> Flow {
    println!();
    warning("Input ended before the form was complete; entry discarded.");
    Flow::Quit
}

fn plural_y(n: usize) -> &'static str {
    if n == 1 { "y" } else { "ies" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn fixed_day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, 1).unwrap()
    }

    fn session() -> Session {
        Session::with_clock(Config::default(), fixed_day)
    }

    fn run(s: &mut Session, line: &str, rest: &str) -> AppResult<Flow> {
        let cmd = SessionCommand::parse_line(line)?.expect("command");
        s.execute(cmd, &mut Cursor::new(rest.to_string()))
    }

    fn names(s: &Session) -> Vec<String> {
        s.store().all().iter().map(|e| e.name().to_string()).collect()
    }

    #[test]
    fn parse_inline_add_joins_words() {
        let line = "add --name Ada Lovelace --activity walked --metime tea break --minutes 250";
        let cmd = SessionCommand::parse_line(line).unwrap().unwrap();
        assert_eq!(
            cmd,
            SessionCommand::Add {
                name: vec!["Ada".into(), "Lovelace".into()],
                activity: vec!["walked".into()],
                metime: vec!["tea".into(), "break".into()],
                minutes: Some("250".into()),
            }
        );
    }

    #[test]
    fn parse_blank_and_comment_lines() {
        assert_eq!(SessionCommand::parse_line("   ").unwrap(), None);
        assert_eq!(SessionCommand::parse_line("# note").unwrap(), None);
    }

    #[test]
    fn parse_unknown_command_fails() {
        let err = SessionCommand::parse_line("dance").unwrap_err();
        assert!(matches!(err, AppError::InvalidCommand(_)));
    }

    #[test]
    fn parse_aliases() {
        assert_eq!(
            SessionCommand::parse_line("del 0 2").unwrap(),
            Some(SessionCommand::Delete { indices: vec![0, 2] })
        );
        assert_eq!(SessionCommand::parse_line("exit").unwrap(), Some(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse_line("ls").unwrap(), Some(SessionCommand::List));
    }

    #[test]
    fn form_prompts_for_missing_fields() {
        let mut s = session();
        run(&mut s, "add", "Ada\nwalked\nyoga\n240\n").unwrap();

        let e = &s.store().all()[0];
        assert_eq!(e.name(), "Ada");
        assert_eq!(e.me_time_activity(), "yoga");
        assert_eq!(e.date(), fixed_day());
        assert!(e.status().is_healthy());
    }

    #[test]
    fn rejected_entry_leaves_store_unchanged() {
        let mut s = session();
        let err = run(&mut s, "add --name 123 --activity walked --metime yoga --minutes 30", "")
            .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        let err = run(&mut s, "add", "   \nwalked\nyoga\n30\n").unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));

        assert!(s.store().is_empty());
        assert!(s.history().is_empty());
    }

    #[test]
    fn interrupted_form_ends_session_without_adding() {
        let mut s = session();
        let flow = run(&mut s, "add", "Ada\nwalked\n").unwrap();
        assert_eq!(flow, Flow::Quit);
        assert!(s.store().is_empty());
    }

    #[test]
    fn delete_by_snapshot_positions() {
        let mut s = session();
        for n in ["A", "B", "C"] {
            let line = format!("add --name {n} --activity ran --metime tea --minutes 10");
            run(&mut s, &line, "").unwrap();
        }
        run(&mut s, "delete 2 0", "").unwrap();
        assert_eq!(names(&s), vec!["B"]);
    }

    #[test]
    fn delete_without_selection_is_a_warning() {
        let mut s = session();
        run(&mut s, "add --name A --activity ran --metime tea --minutes 10", "").unwrap();
        let err = run(&mut s, "delete", "").unwrap_err();
        assert!(matches!(err, AppError::NoSelectionForDelete));
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn clear_respects_confirmation_setting() {
        let cfg = Config {
            confirm_destructive: true,
            ..Config::default()
        };
        let mut s = Session::with_clock(cfg, fixed_day);
        run(&mut s, "add --name A --activity ran --metime tea --minutes 10", "").unwrap();

        run(&mut s, "clear", "n\n").unwrap();
        assert_eq!(s.store().len(), 1);

        run(&mut s, "clear", "yes\n").unwrap();
        assert!(s.store().is_empty());
    }

    #[test]
    fn clear_without_confirmation() {
        let mut s = session();
        run(&mut s, "add --name A --activity ran --metime tea --minutes 10", "").unwrap();
        run(&mut s, "clear", "").unwrap();
        assert!(s.store().all().is_empty());
    }

    #[test]
    fn status_preview_checks_range() {
        let mut s = session();
        assert_eq!(run(&mut s, "status 240", "").unwrap(), Flow::Continue);
        assert!(matches!(
            run(&mut s, "status 0", "").unwrap_err(),
            AppError::Validation(_)
        ));
        assert!(s.store().is_empty());
    }

    #[test]
    fn export_target_resolution() {
        let cfg = Config {
            export_dir: "/data".into(),
            ..Config::default()
        };
        let s = Session::with_clock(cfg, fixed_day);

        assert_eq!(
            s.resolve_export_target(None, None),
            (ExportFormat::Xlsx, PathBuf::from("/data/mental_wellness_entries.xlsx"))
        );
        assert_eq!(
            s.resolve_export_target(Some(ExportFormat::Csv), None),
            (ExportFormat::Csv, PathBuf::from("/data/mental_wellness_entries.csv"))
        );
        assert_eq!(
            s.resolve_export_target(None, Some("log.csv")),
            (ExportFormat::Csv, PathBuf::from("/data/log.csv"))
        );
        assert_eq!(
            s.resolve_export_target(Some(ExportFormat::Json), Some("/tmp/log")),
            (ExportFormat::Json, PathBuf::from("/tmp/log.json"))
        );
    }

    #[test]
    fn history_tracks_mutations_only() {
        let mut s = session();
        run(&mut s, "add --name A --activity ran --metime tea --minutes 10", "").unwrap();
        run(&mut s, "list", "").unwrap();
        run(&mut s, "remind", "").unwrap();
        run(&mut s, "delete 0", "").unwrap();

        let ops: Vec<Operation> = s.history().records().iter().map(|r| r.operation).collect();
        assert_eq!(ops, vec![Operation::Add, Operation::Del]);
    }

    struct BrokenInput;

    impl std::io::Read for BrokenInput {
        fn read(&mut self, _: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("stream closed"))
        }
    }

    #[test]
    fn parse_export_file_joins_words() {
        let cmd = SessionCommand::parse_line("export --file week 1.xlsx --force")
            .unwrap()
            .unwrap();
        assert_eq!(
            cmd,
            SessionCommand::Export {
                format: None,
                file: vec!["week".into(), "1.xlsx".into()],
                force: true,
            }
        );
    }

    #[test]
    fn failed_export_write_does_not_end_run() {
        let mut s = session();
        let target = std::env::temp_dir()
            .join("wellness_no_such_dir")
            .join("out.xlsx");
        let script = format!(
            "add --name Ada --activity x --metime y --minutes 5
             export --file {}
             add --name Bo --activity x --metime y --minutes 5
",
            target.display()
        );
        s.run(&mut Cursor::new(script)).unwrap();
        assert_eq!(names(&s), vec!["Ada", "Bo"]);
        assert!(s.history().records().iter().all(|r| r.operation != Operation::Export));
    }

    #[test]
    fn confirmation_read_error_is_an_input_error() {
        let cfg = Config {
            confirm_destructive: true,
            ..Config::default()
        };
        let mut s = Session::with_clock(cfg, fixed_day);
        run(&mut s, "add --name A --activity ran --metime tea --minutes 10", "").unwrap();

        let cmd = SessionCommand::parse_line("clear").unwrap().unwrap();
        let err = s
            .execute(cmd, &mut std::io::BufReader::new(BrokenInput))
            .unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
        assert_eq!(s.store().len(), 1);
    }

    #[test]
    fn input_error_ends_run() {
        let mut s = session();
        let err = s.run(&mut std::io::BufReader::new(BrokenInput)).unwrap_err();
        assert!(matches!(err, AppError::Input(_)));
    }

    #[test]
    fn run_loop_survives_bad_commands() {
        let mut s = session();
        let script = "bogus\n\
                      add --name 1 --activity x --metime y --minutes 5\n\
                      add --name Jo1 --activity x --metime y --minutes 5\n\
                      quit\n\
                      add --name Late --activity x --metime y --minutes 5\n";
        s.run(&mut Cursor::new(script)).unwrap();
        assert_eq!(names(&s), vec!["Jo1"]);
    }
}
