//! JSON transfer of the profile record.
//!
//! This module converts the in-memory [`UserProfile`] to and from its JSON
//! file form. It handles:
//!
//! - Export to indented JSON, offered as a file named `userProfile.json`
//! - Import from a selected file, gated on the file's declared media type
//! - The media-type mapping used to derive a declared type from a file
//!   extension
//!
//! ## Acceptance policy
//!
//! Import accepts a file only if its declared media type is
//! `application/json` and its content parses as JSON. Shape is deliberately
//! not enforced beyond that: a profile JSON with missing or extra fields is
//! accepted as-is (see [`crate::profile`] for the tolerance rules). Both
//! failure modes leave the caller's existing profile untouched; there is no
//! partial application of malformed data.

use crate::constants::{
    EXPORT_FILE_NAME, JSON_MEDIA_TYPE, PLAIN_TEXT_MEDIA_TYPE, UNKNOWN_MEDIA_TYPE,
};
use crate::error::{ProfileError, ProfileResult};
use crate::profile::UserProfile;
use std::fs;
use std::path::{Path, PathBuf};

/// Serialises `profile` to UTF-8 JSON with 2-space indentation.
///
/// Field order follows the record's declared field order (name, age, notes,
/// medicalInfo, symptoms). This cannot fail for any in-memory profile, but
/// a serialiser error is still reported as [`ProfileError::Serialization`]
/// rather than panicking.
pub fn export(profile: &UserProfile) -> ProfileResult<Vec<u8>> {
    serde_json::to_vec_pretty(profile).map_err(ProfileError::Serialization)
}

/// Writes the export of `profile` to `path`.
pub fn write_profile(profile: &UserProfile, path: &Path) -> ProfileResult<()> {
    let bytes = export(profile)?;
    fs::write(path, bytes).map_err(ProfileError::FileWrite)
}

/// Writes the export of `profile` into `dir` under the fixed export
/// filename and returns the full path.
pub fn write_export(profile: &UserProfile, dir: &Path) -> ProfileResult<PathBuf> {
    let path = dir.join(EXPORT_FILE_NAME);
    write_profile(profile, &path)?;
    tracing::info!("exported profile to {}", path.display());
    Ok(path)
}

/// Derives the declared media type for a file from its extension.
///
/// This stands in for the type a browser would report for a selected file:
/// only `.json` files are declared `application/json`.
pub fn declared_media_type(path: &Path) -> &'static str {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("json") => JSON_MEDIA_TYPE,
        Some(ext) if ext.eq_ignore_ascii_case("txt") => PLAIN_TEXT_MEDIA_TYPE,
        _ => UNKNOWN_MEDIA_TYPE,
    }
}

/// Parses `bytes` into a profile, gated on the declared media type.
///
/// # Errors
///
/// - [`ProfileError::WrongFileType`] if `declared_type` is not
///   `application/json`
/// - [`ProfileError::InvalidFormat`] if the content does not parse as a
///   JSON profile
pub fn import(declared_type: &str, bytes: &[u8]) -> ProfileResult<UserProfile> {
    if declared_type != JSON_MEDIA_TYPE {
        return Err(ProfileError::WrongFileType(declared_type.to_owned()));
    }
    serde_json::from_slice(bytes).map_err(ProfileError::InvalidFormat)
}

/// Reads `path` and imports it as a profile.
///
/// The declared media type is derived from the file extension before the
/// file is read, so a non-JSON file is rejected without touching its
/// content.
pub fn import_file(path: &Path) -> ProfileResult<UserProfile> {
    let declared_type = declared_media_type(path);
    if declared_type != JSON_MEDIA_TYPE {
        tracing::warn!(
            "rejected import of {}: declared type {}",
            path.display(),
            declared_type
        );
        return Err(ProfileError::WrongFileType(declared_type.to_owned()));
    }
    let bytes = fs::read(path).map_err(ProfileError::FileRead)?;
    import(declared_type, &bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn sample_profile() -> UserProfile {
        UserProfile::new()
            .with_name("Ada Lovelace")
            .with_age("36")
            .with_notes("Prefers morning appointments")
            .with_medical_info("No known allergies")
            .with_symptom("Head: recurring migraine")
            .with_symptom("Sleep: insomnia")
    }

    #[test]
    fn test_round_trip_preserves_every_field() {
        let profile = sample_profile();
        let bytes = export(&profile).unwrap();
        let restored = import(JSON_MEDIA_TYPE, &bytes).unwrap();
        assert_eq!(restored, profile);
    }

    #[test]
    fn test_round_trip_of_empty_profile() {
        let profile = UserProfile::new();
        let bytes = export(&profile).unwrap();
        assert_eq!(import(JSON_MEDIA_TYPE, &bytes).unwrap(), profile);
    }

    #[test]
    fn test_export_uses_two_space_indent_and_declared_field_order() {
        let profile = UserProfile::new()
            .with_name("Ada")
            .with_symptom("Head: ache");
        let text = String::from_utf8(export(&profile).unwrap()).unwrap();
        let expected = concat!(
            "{\n",
            "  \"name\": \"Ada\",\n",
            "  \"age\": \"\",\n",
            "  \"notes\": \"\",\n",
            "  \"medicalInfo\": \"\",\n",
            "  \"symptoms\": [\n",
            "    \"Head: ache\"\n",
            "  ]\n",
            "}"
        );
        assert_eq!(text, expected);
    }

    #[test]
    fn test_wrong_declared_type_is_rejected() {
        let bytes = export(&sample_profile()).unwrap();
        let result = import(PLAIN_TEXT_MEDIA_TYPE, &bytes);
        assert!(matches!(result, Err(ProfileError::WrongFileType(_))));
    }

    #[test]
    fn test_unparseable_content_is_rejected() {
        let result = import(JSON_MEDIA_TYPE, b"{not valid");
        assert!(matches!(result, Err(ProfileError::InvalidFormat(_))));
    }

    #[test]
    fn test_import_tolerates_missing_and_extra_fields() {
        let content = r#"{"name": "Ada", "favouriteColour": "green"}"#;
        let profile = import(JSON_MEDIA_TYPE, content.as_bytes()).unwrap();
        assert_eq!(profile.name, "Ada");
        assert_eq!(profile.age, "");
        assert!(profile.symptoms.is_empty());
    }

    #[test]
    fn test_declared_media_type_mapping() {
        assert_eq!(declared_media_type(Path::new("userProfile.json")), JSON_MEDIA_TYPE);
        assert_eq!(declared_media_type(Path::new("PROFILE.JSON")), JSON_MEDIA_TYPE);
        assert_eq!(declared_media_type(Path::new("notes.txt")), PLAIN_TEXT_MEDIA_TYPE);
        assert_eq!(declared_media_type(Path::new("archive")), UNKNOWN_MEDIA_TYPE);
    }

    #[test]
    fn test_write_export_uses_fixed_filename() {
        let temp = TempDir::new().unwrap();
        let path = write_export(&sample_profile(), temp.path()).unwrap();
        assert!(path.ends_with(EXPORT_FILE_NAME));
        assert!(path.is_file());
    }

    #[test]
    fn test_file_round_trip() {
        let temp = TempDir::new().unwrap();
        let profile = sample_profile();
        let path = write_export(&profile, temp.path()).unwrap();
        assert_eq!(import_file(&path).unwrap(), profile);
    }

    #[test]
    fn test_import_file_rejects_non_json_extension_without_reading() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("profile.txt");
        // Valid JSON content, but the declared type wins.
        fs::write(&path, export(&sample_profile()).unwrap()).unwrap();
        assert!(matches!(
            import_file(&path),
            Err(ProfileError::WrongFileType(_))
        ));
    }

    #[test]
    fn test_import_file_reports_read_failures() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.json");
        assert!(matches!(import_file(&path), Err(ProfileError::FileRead(_))));
    }
}
