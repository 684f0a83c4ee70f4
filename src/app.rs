//! The interactive session: one controller owning all UI state.
//!
//! The profile record and the three panel visibility flags are explicit
//! fields of [`Session`], mutated only inside [`Session::handle`]. All
//! mutations happen synchronously in response to one parsed command, so the
//! session needs no locking and no background work.

use crate::command::{Command, HELP};
use egp_core::notify::{
    INVALID_JSON_NOTICE, UPLOAD_SUCCESS_NOTICE, WRONG_FILE_TYPE_NOTICE,
};
use egp_core::symptoms::capture_symptom;
use egp_core::{diagnosis, transfer, CoreConfig, Notifier, ProfileError, ProfileStore, SymptomPrompter};
use std::path::Path;

/// The three modal panels of the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Panel {
    Profile,
    MedicalInfo,
    Diagnostics,
}

/// Visibility flags for the three panels.
///
/// The flags are independent: any subset of panels may be open at the same
/// time, and no exclusivity is enforced. Each panel only edits its own
/// fields.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PanelState {
    pub profile: bool,
    pub medical_info: bool,
    pub diagnostics: bool,
}

impl PanelState {
    fn flag(&mut self, panel: Panel) -> &mut bool {
        match panel {
            Panel::Profile => &mut self.profile,
            Panel::MedicalInfo => &mut self.medical_info,
            Panel::Diagnostics => &mut self.diagnostics,
        }
    }

    pub fn open(&mut self, panel: Panel) {
        *self.flag(panel) = true;
    }

    pub fn close(&mut self, panel: Panel) {
        *self.flag(panel) = false;
    }

    pub fn is_open(&self, panel: Panel) -> bool {
        match panel {
            Panel::Profile => self.profile,
            Panel::MedicalInfo => self.medical_info,
            Panel::Diagnostics => self.diagnostics,
        }
    }
}

/// Front-end surface the session drives: command input, free-text prompts,
/// blocking notices and plain output lines.
pub trait Console: SymptomPrompter + Notifier {
    /// Reads the next command line; `None` ends the session.
    fn read_command(&mut self) -> Option<String>;

    /// Writes one non-blocking output line.
    fn say(&mut self, text: &str);
}

/// Top-level session controller.
pub struct Session {
    config: CoreConfig,
    store: ProfileStore,
    panels: PanelState,
}

impl Session {
    pub fn new(config: CoreConfig) -> Self {
        Self {
            config,
            store: ProfileStore::new(),
            panels: PanelState::default(),
        }
    }

    pub fn store(&self) -> &ProfileStore {
        &self.store
    }

    pub fn panels(&self) -> PanelState {
        self.panels
    }

    /// Runs the command loop until `quit` or end of input.
    pub fn run<C: Console>(&mut self, console: &mut C) {
        console.say("Type 'help' for commands.");
        while let Some(line) = console.read_command() {
            match Command::parse(&line) {
                None => continue,
                Some(Command::Quit) => break,
                Some(command) => self.handle(command, console),
            }
        }
    }

    /// Applies one command to the session state.
    pub fn handle<C: Console>(&mut self, command: Command, console: &mut C) {
        match command {
            Command::Open(panel) => self.panels.open(panel),
            Command::Close(panel) => self.panels.close(panel),
            Command::SetName(value) => {
                self.store.set(self.store.get().clone().with_name(value));
            }
            Command::SetAge(value) => {
                self.store.set(self.store.get().clone().with_age(value));
            }
            Command::SetNotes(value) => {
                self.store.set(self.store.get().clone().with_notes(value));
            }
            Command::SetMedicalInfo(value) => {
                self.store
                    .set(self.store.get().clone().with_medical_info(value));
            }
            Command::AddSymptom => {
                // A dismissed or empty prompt aborts with no partial mutation.
                if let Some(entry) = capture_symptom(console) {
                    self.store
                        .set(self.store.get().clone().with_symptom(entry.to_line()));
                }
            }
            Command::Diagnose => {
                console.notify(diagnosis::diagnose(self.store.get()));
            }
            Command::Export => {
                match transfer::write_export(self.store.get(), self.config.export_dir()) {
                    Ok(path) => console.say(&format!("Exported profile to {}", path.display())),
                    Err(e) => console.say(&format!("Error exporting profile: {}", e)),
                }
            }
            Command::Import(path) => self.import(&path, console),
            Command::Show => {
                let rendered = render_profile(self.store.get());
                console.say(&rendered);
            }
            Command::Help => console.say(HELP),
            Command::Quit => {}
            Command::Unknown(word) => {
                console.say(&format!(
                    "Unknown command {:?}. Type 'help' for commands.",
                    word
                ));
            }
        }
        self.render_panels(console);
    }

    /// Imports a profile file, replacing the stored profile only on success.
    fn import<C: Console>(&mut self, path: &Path, console: &mut C) {
        match transfer::import_file(path) {
            Ok(profile) => {
                self.store.set(profile);
                console.notify(UPLOAD_SUCCESS_NOTICE);
            }
            Err(ProfileError::WrongFileType(_)) => console.notify(WRONG_FILE_TYPE_NOTICE),
            Err(ProfileError::InvalidFormat(_)) => console.notify(INVALID_JSON_NOTICE),
            Err(e) => console.say(&format!("Error importing profile: {}", e)),
        }
    }

    fn render_panels<C: Console>(&self, console: &mut C) {
        let profile = self.store.get();
        if self.panels.profile {
            console.say("-- Profile Information --");
            console.say(&format!("Name: {}", profile.name));
            console.say(&format!("Age: {}", profile.age));
            console.say(&format!("Notes: {}", profile.notes));
        }
        if self.panels.medical_info {
            console.say("-- Medical Information --");
            console.say(&format!("Conditions or medications: {}", profile.medical_info));
        }
        if self.panels.diagnostics {
            console.say("-- Diagnostics --");
            console.say(&render_symptoms(profile));
        }
    }
}

fn render_symptoms(profile: &egp_core::UserProfile) -> String {
    let mut out = String::from("Selected Symptoms:");
    if profile.symptoms.is_empty() {
        out.push_str("\n  No symptoms selected.");
    } else {
        for symptom in &profile.symptoms {
            out.push_str("\n  - ");
            out.push_str(symptom);
        }
    }
    out
}

fn render_profile(profile: &egp_core::UserProfile) -> String {
    format!(
        "Name: {}\nAge: {}\nNotes: {}\nMedical info: {}\n{}",
        profile.name,
        profile.age,
        profile.notes,
        profile.medical_info,
        render_symptoms(profile)
    )
}
