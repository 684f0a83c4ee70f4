//! User-facing notices.
//!
//! Every handled failure in the application degrades to a no-op plus a
//! blocking message; the texts live here so that front-ends and tests agree
//! on them exactly.

/// Notice shown after a profile file is imported successfully.
pub const UPLOAD_SUCCESS_NOTICE: &str = "Profile data uploaded successfully.";

/// Notice shown when an imported file's content is not parseable JSON.
pub const INVALID_JSON_NOTICE: &str = "Invalid JSON file.";

/// Notice shown when a file selected for import is not JSON-typed.
pub const WRONG_FILE_TYPE_NOTICE: &str = "Please upload a valid JSON file.";

/// Notice shown for every diagnosis request.
pub const DIAGNOSIS_NOTICE: &str =
    "Payment required for diagnosis. Please proceed to payment.";

/// Sink for blocking user notifications.
///
/// Front-ends decide how blocking is realised (the terminal waits for
/// Enter); tests typically record the messages instead.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}
