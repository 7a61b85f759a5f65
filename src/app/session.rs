use crate::core::report::{render_course_table, render_grade_table, render_summary};
use crate::core::{CourseId, CourseLedger};
use crate::utils::error::Result;
use std::io::{BufRead, Write};
use thiserror::Error;

const HELP: &str = "\
Commands:
  add <name>, <grade>, <credits>   record a course (name may be empty)
  remove <id>                      delete a course (alias: rm)
  list                             show recorded courses
  summary                          show GPA and total credits
  grades                           show the grade table
  help                             show this text
  quit                             leave the session (alias: exit)
";

#[derive(Debug, Clone, PartialEq)]
pub enum SessionCommand {
    Add {
        name: String,
        grade: String,
        credits: String,
    },
    Remove(CourseId),
    List,
    Summary,
    Grades,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CommandError {
    #[error("Unknown command '{0}'. Type `help` for a list of commands.")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),
}

impl SessionCommand {
    /// Parses one input line. Blank lines yield `Ok(None)`.
    pub fn parse(line: &str) -> std::result::Result<Option<Self>, CommandError> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "add" => {
                let mut fields = rest.rsplitn(3, ',');
                let credits = fields.next();
                let grade = fields.next();
                let name = fields.next();
                match (name, grade, credits) {
                    (Some(name), Some(grade), Some(credits)) => SessionCommand::Add {
                        name: name.trim().to_string(),
                        grade: grade.trim().to_string(),
                        credits: credits.trim().to_string(),
                    },
                    _ => return Err(CommandError::Usage("add <name>, <grade>, <credits>")),
                }
            }
            "remove" | "rm" => {
                let id = rest
                    .parse::<CourseId>()
                    .map_err(|_| CommandError::Usage("remove <id>"))?;
                SessionCommand::Remove(id)
            }
            "list" | "ls" => SessionCommand::List,
            "summary" | "gpa" => SessionCommand::Summary,
            "grades" => SessionCommand::Grades,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" => SessionCommand::Quit,
            other => return Err(CommandError::Unknown(other.to_string())),
        };
        Ok(Some(command))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

/// Line-oriented front end over a [`CourseLedger`].
///
/// After every successful add or remove the summary is printed again, the
/// same refresh a form-based front end performs after each change.
pub struct Session {
    ledger: CourseLedger,
    precision: usize,
    prompt: bool,
}

impl Session {
    pub fn new(ledger: CourseLedger, precision: usize) -> Self {
        Self {
            ledger,
            precision,
            prompt: false,
        }
    }

    /// Print a `> ` prompt before reading each line.
    pub fn with_prompt(mut self, prompt: bool) -> Self {
        self.prompt = prompt;
        self
    }

    pub fn ledger(&self) -> &CourseLedger {
        &self.ledger
    }

    pub fn into_ledger(self) -> CourseLedger {
        self.ledger
    }

    /// Runs until `quit` or end of input. Lines that are not valid UTF-8
    /// are reported and skipped.
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, out: &mut W) -> Result<()> {
        tracing::debug!("Session started");
        if self.prompt {
            write!(out, "> ")?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        let mut line_no = 0u64;
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            line_no += 1;

            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => match SessionCommand::parse(line) {
                    Ok(Some(command)) => self.execute(command, out)?,
                    Ok(None) => Flow::Continue,
                    Err(e) => {
                        writeln!(out, "{}", e)?;
                        Flow::Continue
                    }
                },
                Err(_) => {
                    tracing::warn!("Skipping input line {}: not valid UTF-8", line_no);
                    writeln!(out, "Line {} is not valid text and was ignored.", line_no)?;
                    Flow::Continue
                }
            };

            if flow == Flow::Stop {
                break;
            }
            if self.prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
        }

        tracing::debug!(courses = self.ledger.len(), "Session ended");
        Ok(())
    }

    pub fn execute<W: Write>(&mut self, command: SessionCommand, out: &mut W) -> Result<Flow> {
        match command {
            SessionCommand::Add {
                name,
                grade,
                credits,
            } => match self.ledger.add(&name, &grade, &credits) {
                Ok(course) => {
                    writeln!(
                        out,
                        "Added #{} {} ({}, {} credits)",
                        course.id(),
                        course.name(),
                        course.grade_label(),
                        course.credits()
                    )?;
                    self.write_summary(out)?;
                }
                Err(e) => writeln!(out, "{}", e.user_message())?,
            },
            SessionCommand::Remove(id) => {
                match self.ledger.get(id).map(|course| course.name().to_string()) {
                    Some(name) => {
                        self.ledger.remove(id);
                        writeln!(out, "Removed #{} {}", id, name)?;
                        self.write_summary(out)?;
                    }
                    None => writeln!(out, "No course with id {}", id)?,
                }
            }
            SessionCommand::List => write!(out, "{}", render_course_table(self.ledger.courses()))?,
            SessionCommand::Summary => self.write_summary(out)?,
            SessionCommand::Grades => {
                write!(out, "{}", render_grade_table(self.ledger.grade_table()))?
            }
            SessionCommand::Help => write!(out, "{}", HELP)?,
            SessionCommand::Quit => return Ok(Flow::Stop),
        }
        Ok(Flow::Continue)
    }

    fn write_summary<W: Write>(&self, out: &mut W) -> Result<()> {
        write!(out, "{}", render_summary(&self.ledger.summary(), self.precision))?;
        Ok(())
    }
}
