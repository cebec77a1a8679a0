use url::Url;

use crate::{field::FieldSet, reset_link::ResetLinkState};

pub const DEFAULT_APP_URL: &str = "aurabean://auth-reset";

/// Build the URL that hands `state` to the companion app.
///
/// Every resolved field of `field_set` becomes a query parameter named after
/// the field, in table order. Unresolved fields are left out entirely.
/// Parameters already on `base` are kept, except those a forwarded field
/// replaces.
pub fn app_link(base: &Url, state: &ResetLinkState, field_set: FieldSet) -> Url {
    let pairs: Vec<_> = field_set
        .fields()
        .iter()
        .filter_map(|field| {
            state
                .value(*field)
                .filter(|value| !value.is_empty())
                .map(|value| (field.param(), value))
        })
        .collect();

    if pairs.is_empty() {
        return base.clone();
    }

    let kept: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(key, _)| !pairs.iter().any(|(param, _)| param == key))
        .map(|(key, value)| (key.into_owned(), value.into_owned()))
        .collect();

    let mut target = base.clone();
    target.set_query(None);
    target
        .query_pairs_mut()
        .extend_pairs(kept)
        .extend_pairs(pairs);
    target
}
