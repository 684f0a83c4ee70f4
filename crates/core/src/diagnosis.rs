//! Diagnosis stub.
//!
//! Diagnosis is a placeholder boundary: it always reports the same
//! payment-required notice, with no branching on the profile or symptom
//! contents. A real implementation would hand the profile to an external
//! diagnosis service; that service is out of scope here.

use crate::notify::DIAGNOSIS_NOTICE;
use crate::profile::UserProfile;

/// Returns the diagnosis notice for `profile`.
///
/// The profile is accepted only so callers keep a stable signature for a
/// future real service; the result never depends on it.
pub fn diagnose(_profile: &UserProfile) -> &'static str {
    DIAGNOSIS_NOTICE
}
