use url::{Url, form_urlencoded};

/// Key-value pairs from a page's query string and fragment.
///
/// Pairs keep their original order and may repeat, matching what a browser's
/// `URLSearchParams` sees.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationParams {
    query: Vec<(String, String)>,
    fragment: Vec<(String, String)>,
}

impl LocationParams {
    /// Build from `location.search` and `location.hash`. Leading `?` and `#`
    /// are optional.
    pub fn from_parts(search: &str, hash: &str) -> Self {
        Self {
            query: parse_pairs(search.strip_prefix('?').unwrap_or(search)),
            fragment: parse_pairs(hash.strip_prefix('#').unwrap_or(hash)),
        }
    }

    pub fn from_url(url: &Url) -> Self {
        Self::from_parts(url.query().unwrap_or(""), url.fragment().unwrap_or(""))
    }

    /// First non-empty value for any of `aliases`.
    ///
    /// The query string is searched completely before the fragment, so a
    /// query value beats a fragment value even under a higher ranked alias.
    /// Only the first occurrence of a key counts within a source.
    pub fn first(&self, aliases: &[&str]) -> Option<&str> {
        [&self.query, &self.fragment].into_iter().find_map(|pairs| {
            aliases
                .iter()
                .filter_map(|alias| get_first(pairs, alias))
                .find(|value| !value.is_empty())
        })
    }
}

fn parse_pairs(input: &str) -> Vec<(String, String)> {
    form_urlencoded::parse(input.as_bytes())
        .into_owned()
        .collect()
}

fn get_first<'a>(pairs: &'a [(String, String)], key: &str) -> Option<&'a str> {
    pairs
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}
