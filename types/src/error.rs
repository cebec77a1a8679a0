/// Why a reset link cannot be handed to the app.
///
/// Both variants are terminal: the page shows the message pair and does
/// nothing else.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkError {
    /// The link is classified as something other than `recovery`. Holds the
    /// classification as received.
    WrongLinkType { link_type: String },
    /// None of the recognized credential fields carried a value.
    MissingCredentials,
}

impl LinkError {
    /// Headline shown as the page status.
    pub fn message(&self) -> &'static str {
        match self {
            LinkError::WrongLinkType { .. } => "This link is not a password reset link.",
            LinkError::MissingCredentials => "We could not read your reset credentials.",
        }
    }

    /// What the user should do next.
    pub fn guidance(&self, app_name: &str) -> String {
        match self {
            LinkError::WrongLinkType { link_type } => format!(
                "We received type “{link_type}”. Please request a new reset email from {app_name}."
            ),
            LinkError::MissingCredentials => format!(
                "Copy the entire URL from this tab and send it to {app_name} support so we can investigate."
            ),
        }
    }
}

impl std::fmt::Display for LinkError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LinkError::WrongLinkType { link_type } => {
                write!(f, "unexpected link type: {link_type}")
            }
            LinkError::MissingCredentials => write!(f, "no reset credentials in link"),
        }
    }
}

impl std::error::Error for LinkError {}
