//! Query parameter types for API handlers.

/// Query parameters for the episode listing (`?search=&page=`).
///
/// Both are kept as raw strings: an unusable `page` falls back to page 1
/// in `PageRequest::from_param` instead of being rejected by the extractor.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EpisodeListParams {
    pub search: Option<String>,
    pub page: Option<String>,
}

impl EpisodeListParams {
    /// Collect the listing parameters from decoded query pairs.
    ///
    /// A key given more than once takes its last value; unknown keys are
    /// ignored.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut params = Self::default();
        for (key, value) in pairs {
            match key.as_str() {
                "search" => params.search = Some(value),
                "page" => params.page = Some(value),
                _ => {}
            }
        }
        params
    }
}
