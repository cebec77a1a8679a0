pub const VERIFIED: &str = "Reset link verified.";
pub const COPIED: &str = "Copied";
pub const COPY_MANUALLY: &str = "Copy manually";

pub fn verified_subtext(app_name: &str) -> String {
    format!("If {app_name} stays closed, tap “Open {app_name}” below.")
}

pub fn reminder(app_name: &str) -> String {
    format!("Tap “Open {app_name}” if nothing happened automatically.")
}

pub fn opening(app_name: &str) -> String {
    format!("Trying to open {app_name}…")
}

pub const OPENING_SUBTEXT: &str = "Return to this tab if the app does not pick up the code.";

pub fn email_hint(email: &str) -> String {
    format!("We detected this link belongs to {email}.")
}
