use clap::{Parser, Subcommand, ValueEnum};
use egp_core::symptoms::SymptomEntry;
use egp_core::{diagnosis, transfer, UserProfile};
use egp_types::PromptText;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "egp")]
#[command(about = "eGP health profile CLI")]
struct Cli {
    /// Profile JSON file to operate on
    #[arg(short = 'f', long, global = true, default_value = "userProfile.json")]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialise an empty profile file
    Init,
    /// Print the profile fields and symptom list
    Show,
    /// Set one profile field, leaving the others untouched
    Set {
        /// Field to set
        field: Field,
        /// New value (may be empty)
        value: String,
    },
    /// Append one symptom entry
    AddSymptom {
        /// Symptom category
        category: String,
        /// Symptom details
        detail: String,
    },
    /// Request a diagnosis for the profile
    Diagnose,
    /// Export the profile into a directory as userProfile.json
    Export {
        /// Target directory
        #[arg(long, default_value = ".")]
        out: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy)]
enum Field {
    Name,
    Age,
    Notes,
    MedicalInfo,
}

/// Loads the profile file, or an empty profile if the file does not exist
/// yet (a fresh session starts empty).
fn load_profile(path: &Path) -> egp_core::ProfileResult<UserProfile> {
    if path.exists() {
        transfer::import_file(path)
    } else {
        Ok(UserProfile::new())
    }
}

fn print_profile(profile: &UserProfile) {
    println!("Name: {}", profile.name);
    println!("Age: {}", profile.age);
    println!("Notes: {}", profile.notes);
    println!("Medical info: {}", profile.medical_info);
    println!("Selected Symptoms:");
    if profile.symptoms.is_empty() {
        println!("  No symptoms selected.");
    } else {
        for symptom in &profile.symptoms {
            println!("  - {}", symptom);
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Init) => {
            match transfer::write_profile(&UserProfile::new(), &cli.file) {
                Ok(()) => println!("Initialised profile at {}", cli.file.display()),
                Err(e) => eprintln!("Error initialising profile: {}", e),
            }
        }
        Some(Commands::Show) => match load_profile(&cli.file) {
            Ok(profile) => print_profile(&profile),
            Err(e) => eprintln!("Error reading profile: {}", e),
        },
        Some(Commands::Set { field, value }) => match load_profile(&cli.file) {
            Ok(profile) => {
                let updated = match field {
                    Field::Name => profile.with_name(value),
                    Field::Age => profile.with_age(value),
                    Field::Notes => profile.with_notes(value),
                    Field::MedicalInfo => profile.with_medical_info(value),
                };
                match transfer::write_profile(&updated, &cli.file) {
                    Ok(()) => println!("Updated {}", cli.file.display()),
                    Err(e) => eprintln!("Error writing profile: {}", e),
                }
            }
            Err(e) => eprintln!("Error reading profile: {}", e),
        },
        Some(Commands::AddSymptom { category, detail }) => {
            // Both parts must be non-empty or nothing is appended.
            let entry = match (PromptText::new(&category), PromptText::new(&detail)) {
                (Ok(category), Ok(detail)) => SymptomEntry::new(category, detail),
                _ => {
                    eprintln!("Symptom category and details must not be empty");
                    return Ok(());
                }
            };
            match load_profile(&cli.file) {
                Ok(profile) => {
                    let updated = profile.with_symptom(entry.to_line());
                    match transfer::write_profile(&updated, &cli.file) {
                        Ok(()) => println!("Added symptom: {}", entry),
                        Err(e) => eprintln!("Error writing profile: {}", e),
                    }
                }
                Err(e) => eprintln!("Error reading profile: {}", e),
            }
        }
        Some(Commands::Diagnose) => match load_profile(&cli.file) {
            Ok(profile) => println!("{}", diagnosis::diagnose(&profile)),
            Err(e) => eprintln!("Error reading profile: {}", e),
        },
        Some(Commands::Export { out }) => match load_profile(&cli.file) {
            Ok(profile) => match transfer::write_export(&profile, &out) {
                Ok(path) => println!("Exported profile to {}", path.display()),
                Err(e) => eprintln!("Error exporting profile: {}", e),
            },
            Err(e) => eprintln!("Error reading profile: {}", e),
        },
        None => {
            println!("Use 'egp --help' for commands");
        }
    }

    Ok(())
}
