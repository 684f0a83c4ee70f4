//! Parsing of session input lines.

use crate::app::Panel;
use std::path::PathBuf;

/// Help text listing every session command.
pub const HELP: &str = "\
Commands:
  open profile|medical|diagnostics    open a panel
  close profile|medical|diagnostics   close a panel
  name <text>                         set your name
  age <text>                          set your age
  notes <text>                        set your notes
  info <text>                         set your medical information
  add                                 add a symptom (two prompts)
  diagnose                            request a diagnosis
  export                              save userProfile.json
  import <path>                       load a profile JSON file
  show                                print the full profile
  help                                show this message
  quit                                end the session";

/// One parsed session command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Open(Panel),
    Close(Panel),
    SetName(String),
    SetAge(String),
    SetNotes(String),
    SetMedicalInfo(String),
    AddSymptom,
    Diagnose,
    Export,
    Import(PathBuf),
    Show,
    Help,
    Quit,
    /// Anything we could not make sense of; carries the offending word.
    Unknown(String),
}

fn parse_panel(name: &str) -> Option<Panel> {
    match name.to_ascii_lowercase().as_str() {
        "profile" => Some(Panel::Profile),
        "medical" | "medical-info" => Some(Panel::MedicalInfo),
        "diagnostics" => Some(Panel::Diagnostics),
        _ => None,
    }
}

impl Command {
    /// Parses one input line. Blank lines parse to `None`.
    ///
    /// Field-setting commands take the remainder of the line verbatim, so
    /// values may contain spaces and may be empty (no field is required).
    pub fn parse(line: &str) -> Option<Command> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "open" => match parse_panel(rest) {
                Some(panel) => Command::Open(panel),
                None => Command::Unknown(line.to_owned()),
            },
            "close" => match parse_panel(rest) {
                Some(panel) => Command::Close(panel),
                None => Command::Unknown(line.to_owned()),
            },
            "name" => Command::SetName(rest.to_owned()),
            "age" => Command::SetAge(rest.to_owned()),
            "notes" => Command::SetNotes(rest.to_owned()),
            "info" => Command::SetMedicalInfo(rest.to_owned()),
            "add" => Command::AddSymptom,
            "diagnose" => Command::Diagnose,
            "export" => Command::Export,
            "import" => {
                if rest.is_empty() {
                    Command::Unknown(line.to_owned())
                } else {
                    Command::Import(PathBuf::from(rest))
                }
            }
            "show" => Command::Show,
            "help" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => Command::Unknown(other.to_owned()),
        };
        Some(command)
    }
}
