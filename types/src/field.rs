use serde::{Deserialize, Serialize};

/// Keys that classify a link. A missing classification means `recovery`.
pub const LINK_TYPE_ALIASES: &[&str] = &["type", "event_type"];

pub const RECOVERY_LINK_TYPE: &str = "recovery";

/// A credential or hint that can be read from a reset link and forwarded to
/// the app.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Code,
    Email,
    TokenHash,
    AccessToken,
    RefreshToken,
    TokenType,
    ExpiresIn,
}

impl Field {
    /// Query parameter name used when forwarding to the app.
    pub const fn param(self) -> &'static str {
        match self {
            Field::Code => "code",
            Field::Email => "email",
            Field::TokenHash => "token_hash",
            Field::AccessToken => "access_token",
            Field::RefreshToken => "refresh_token",
            Field::TokenType => "token_type",
            Field::ExpiresIn => "expires_in",
        }
    }

    /// Accepted keys, highest priority first.
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Field::Code => &["code", "token", "recovery_token"],
            Field::Email => &["email", "user_email", "email_address"],
            Field::TokenHash => &["token_hash"],
            Field::AccessToken => &["access_token"],
            Field::RefreshToken => &["refresh_token"],
            Field::TokenType => &["token_type"],
            Field::ExpiresIn => &["expires_in"],
        }
    }

    /// Whether the presence of this field lets the flow continue.
    pub const fn is_credential(self) -> bool {
        matches!(self, Field::Code | Field::TokenHash | Field::AccessToken)
    }
}

/// Which fields a deployment recognizes and forwards.
///
/// Every consumer (resolution, credential gating, the displayed code and the
/// app link) reads the same table, so the variants cannot drift apart.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum FieldSet {
    #[default]
    Extended,
    Reduced,
}

impl FieldSet {
    /// Recognized fields in forwarding order.
    pub const fn fields(self) -> &'static [Field] {
        match self {
            FieldSet::Extended => &[
                Field::Code,
                Field::Email,
                Field::TokenHash,
                Field::AccessToken,
                Field::RefreshToken,
                Field::TokenType,
                Field::ExpiresIn,
            ],
            FieldSet::Reduced => &[Field::Code, Field::Email],
        }
    }

    /// Fields tried, in order, for the code shown to the user.
    pub const fn display_preference(self) -> &'static [Field] {
        match self {
            FieldSet::Extended => &[Field::TokenHash, Field::Code],
            FieldSet::Reduced => &[Field::Code],
        }
    }

    pub fn contains(self, field: Field) -> bool {
        self.fields().contains(&field)
    }

    pub fn credentials(self) -> impl Iterator<Item = Field> {
        self.fields().iter().copied().filter(|f| f.is_credential())
    }
}

impl TryFrom<String> for FieldSet {
    type Error = String;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl std::str::FromStr for FieldSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "extended" => Ok(FieldSet::Extended),
            "reduced" => Ok(FieldSet::Reduced),
            other => Err(format!("unknown field set: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reduced_set_is_a_subset_of_extended() {
        for field in FieldSet::Reduced.fields() {
            assert!(FieldSet::Extended.contains(*field), "{field:?}");
        }
    }

    #[test]
    fn credentials_follow_the_active_set() {
        let extended: Vec<_> = FieldSet::Extended.credentials().collect();
        assert_eq!(
            extended,
            vec![Field::Code, Field::TokenHash, Field::AccessToken]
        );

        let reduced: Vec<_> = FieldSet::Reduced.credentials().collect();
        assert_eq!(reduced, vec![Field::Code]);
    }

    #[test]
    fn display_preference_only_names_recognized_fields() {
        for set in [FieldSet::Extended, FieldSet::Reduced] {
            for field in set.display_preference() {
                assert!(set.contains(*field));
            }
        }
    }

    #[test]
    fn field_set_parses_case_insensitively() {
        assert_eq!("Reduced".parse::<FieldSet>(), Ok(FieldSet::Reduced));
        assert_eq!(" extended ".parse::<FieldSet>(), Ok(FieldSet::Extended));
        assert!("full".parse::<FieldSet>().is_err());
    }
}
