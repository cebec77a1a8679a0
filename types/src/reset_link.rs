use secrecy::{ExposeSecret, SecretString};

use crate::{
    LinkError,
    field::{Field, FieldSet, LINK_TYPE_ALIASES, RECOVERY_LINK_TYPE},
    location::LocationParams,
};

/// Shown when none of the display fields resolved.
pub const UNKNOWN_CODE: &str = "Unknown";

/// Credentials read from a reset link, resolved once per page load.
#[derive(Debug, Clone)]
pub struct ResetLinkState {
    link_type: String,
    raw_link_type: String,
    code: Option<String>,
    email: Option<String>,
    token_hash: Option<String>,
    access_token: Option<SecretString>,
    refresh_token: Option<SecretString>,
    token_type: Option<String>,
    expires_in: Option<String>,
}

impl ResetLinkState {
    /// Resolve every field of `field_set` from `params`. Fields outside the
    /// set stay empty.
    pub fn resolve(params: &LocationParams, field_set: FieldSet) -> Self {
        let get = |field: Field| {
            if field_set.contains(field) {
                params.first(field.aliases()).map(str::to_owned)
            } else {
                None
            }
        };

        let raw_link_type = params
            .first(LINK_TYPE_ALIASES)
            .unwrap_or(RECOVERY_LINK_TYPE)
            .to_owned();

        let state = Self {
            link_type: raw_link_type.to_lowercase(),
            raw_link_type,
            code: get(Field::Code),
            email: get(Field::Email),
            token_hash: get(Field::TokenHash),
            access_token: get(Field::AccessToken).map(SecretString::from),
            refresh_token: get(Field::RefreshToken).map(SecretString::from),
            token_type: get(Field::TokenType),
            expires_in: get(Field::ExpiresIn),
        };

        tracing::debug!(
            link_type = %state.link_type,
            resolved = ?state.resolved_fields().collect::<Vec<_>>(),
            "resolved reset link"
        );

        state
    }

    /// Lower-cased classification.
    pub fn link_type(&self) -> &str {
        &self.link_type
    }

    /// Classification exactly as it appeared in the link.
    pub fn raw_link_type(&self) -> &str {
        &self.raw_link_type
    }

    pub fn is_recovery_link(&self) -> bool {
        self.link_type == RECOVERY_LINK_TYPE
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn token_hash(&self) -> Option<&str> {
        self.token_hash.as_deref()
    }

    pub fn access_token(&self) -> Option<&SecretString> {
        self.access_token.as_ref()
    }

    pub fn refresh_token(&self) -> Option<&SecretString> {
        self.refresh_token.as_ref()
    }

    pub fn token_type(&self) -> Option<&str> {
        self.token_type.as_deref()
    }

    pub fn expires_in(&self) -> Option<&str> {
        self.expires_in.as_deref()
    }

    /// Raw value of `field`. Secrets are exposed; do not log the result.
    pub fn value(&self, field: Field) -> Option<&str> {
        match field {
            Field::Code => self.code(),
            Field::Email => self.email(),
            Field::TokenHash => self.token_hash(),
            Field::AccessToken => self.access_token.as_ref().map(|s| s.expose_secret()),
            Field::RefreshToken => self.refresh_token.as_ref().map(|s| s.expose_secret()),
            Field::TokenType => self.token_type(),
            Field::ExpiresIn => self.expires_in(),
        }
    }

    /// Fields that carry a non-empty value.
    pub fn resolved_fields(&self) -> impl Iterator<Item = Field> + '_ {
        FieldSet::Extended
            .fields()
            .iter()
            .copied()
            .filter(|field| self.value(*field).is_some_and(|v| !v.is_empty()))
    }

    pub fn has_credentials(&self, field_set: FieldSet) -> bool {
        field_set
            .credentials()
            .any(|field| self.value(field).is_some())
    }

    /// Check the link type, then credential presence.
    pub fn validate(&self, field_set: FieldSet) -> Result<(), LinkError> {
        if !self.is_recovery_link() {
            return Err(LinkError::WrongLinkType {
                link_type: self.raw_link_type.clone(),
            });
        }
        if !self.has_credentials(field_set) {
            return Err(LinkError::MissingCredentials);
        }
        Ok(())
    }

    /// Value offered for copying: the first resolved field of the display
    /// preference, or [`UNKNOWN_CODE`].
    ///
    /// With the extended set a link carrying only an access token passes
    /// [`validate`](Self::validate) and still lands on the placeholder.
    pub fn display_code(&self, field_set: FieldSet) -> &str {
        field_set
            .display_preference()
            .iter()
            .find_map(|field| self.value(*field))
            .unwrap_or(UNKNOWN_CODE)
    }
}
