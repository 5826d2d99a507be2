//! Episode listing filters and page requests.
//!
//! This module lives in `core` (zero internal deps) so the repository layer
//! and the HTTP layer agree on how raw `search` / `page` inputs are
//! interpreted. Nothing here ever rejects input: unusable values fall back
//! to "no filter" or page 1.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Fixed number of episodes returned per page.
pub const EPISODES_PER_PAGE: i64 = 15;

/// Escape character used in `ILIKE` patterns built by [`escape_like`].
pub const LIKE_ESCAPE_CHAR: char = '\\';

// ---------------------------------------------------------------------------
// Search filter
// ---------------------------------------------------------------------------

/// Normalised free-text search applied to the episode listing.
///
/// A filter with no search term matches every episode. Otherwise an episode
/// matches when its title or its series name contains the term
/// (case-insensitive), or when its episode number equals the term read as a
/// number.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EpisodeFilter {
    search: Option<String>,
}

impl EpisodeFilter {
    /// Build a filter from the raw `search` query parameter.
    ///
    /// Surrounding whitespace is trimmed; absent, empty and whitespace-only
    /// input all mean "no filter".
    ///
    /// # Examples
    ///
    /// ```
    /// use animelist_core::listing::EpisodeFilter;
    /// assert_eq!(EpisodeFilter::from_search(Some("  naruto ")).search(), Some("naruto"));
    /// assert!(EpisodeFilter::from_search(Some("   ")).is_empty());
    /// assert!(EpisodeFilter::from_search(None).is_empty());
    /// ```
    pub fn from_search(raw: Option<&str>) -> Self {
        let search = raw
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_owned);
        Self { search }
    }

    /// The trimmed search term, if any.
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn is_empty(&self) -> bool {
        self.search.is_none()
    }

    /// `ILIKE` pattern matching the search term anywhere in a column.
    ///
    /// Wildcard characters typed by the user are escaped so they only
    /// match themselves. A term containing a NUL character has no pattern:
    /// PostgreSQL text cannot hold NUL, so no title or series name can
    /// contain it.
    pub fn substring_pattern(&self) -> Option<String> {
        self.search
            .as_deref()
            .filter(|s| !s.contains('\0'))
            .map(|s| format!("%{}%", escape_like(s)))
    }

    /// The search term read as an episode number, if it is numeric.
    pub fn episode_number(&self) -> Option<i32> {
        self.search.as_deref().and_then(parse_episode_number)
    }
}

/// Escape `\`, `%` and `_` so the input is matched literally by `ILIKE`.
///
/// # Examples
///
/// ```
/// use animelist_core::listing::escape_like;
/// assert_eq!(escape_like("100%"), "100\\%");
/// assert_eq!(escape_like("one_piece"), "one\\_piece");
/// ```
pub fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push(LIKE_ESCAPE_CHAR);
        }
        escaped.push(c);
    }
    escaped
}

/// Interpret a search term as an exact episode number.
///
/// Accepts plain integers (`"7"`, `"07"`, `"+7"`) and integral decimals
/// (`"7.0"`). Anything else, including numbers outside the `i32` range,
/// yields `None` so the numeric branch of the filter matches nothing.
pub fn parse_episode_number(search: &str) -> Option<i32> {
    let trimmed = search.trim();
    if let Ok(n) = trimmed.parse::<i32>() {
        return Some(n);
    }

    let value: f64 = trimmed.parse().ok()?;
    let in_range = value >= f64::from(i32::MIN) && value <= f64::from(i32::MAX);
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i32)
    } else {
        None
    }
}

// ---------------------------------------------------------------------------
// Page request
// ---------------------------------------------------------------------------

/// A 1-based page of the episode listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: i64,
}

impl PageRequest {
    /// Clamp a requested page number to `>= 1`. `None` means page 1.
    pub fn new(page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(1).max(1),
        }
    }

    /// Build a page request from the raw `page` query parameter.
    ///
    /// Non-numeric values are treated as page 1.
    pub fn from_param(raw: Option<&str>) -> Self {
        Self::new(raw.and_then(|r| r.trim().parse::<i64>().ok()))
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        EPISODES_PER_PAGE
    }

    /// Number of rows to skip. Saturates instead of overflowing for
    /// absurdly large page numbers.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(EPISODES_PER_PAGE)
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(None)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    // -- EpisodeFilter -------------------------------------------------------

    #[test]
    fn filter_absent_search_is_empty() {
        let filter = EpisodeFilter::from_search(None);
        assert!(filter.is_empty());
        assert_eq!(filter.substring_pattern(), None);
        assert_eq!(filter.episode_number(), None);
    }

    #[test]
    fn filter_blank_search_is_empty() {
        assert!(EpisodeFilter::from_search(Some("")).is_empty());
        assert!(EpisodeFilter::from_search(Some(" \t ")).is_empty());
    }

    #[test]
    fn filter_trims_search() {
        let filter = EpisodeFilter::from_search(Some("  Naruto  "));
        assert_eq!(filter.search(), Some("Naruto"));
        assert_eq!(filter.substring_pattern(), Some("%Naruto%".to_string()));
    }

    #[test]
    fn filter_numeric_search_has_episode_number() {
        let filter = EpisodeFilter::from_search(Some("7"));
        assert_eq!(filter.episode_number(), Some(7));
        assert_eq!(filter.substring_pattern(), Some("%7%".to_string()));
    }

    #[test]
    fn filter_text_search_has_no_episode_number() {
        assert_eq!(EpisodeFilter::from_search(Some("Ep7")).episode_number(), None);
    }

    #[test]
    fn filter_with_nul_stays_active_without_pattern() {
        let filter = EpisodeFilter::from_search(Some("Ep\0"));
        assert!(!filter.is_empty());
        assert_eq!(filter.search(), Some("Ep\0"));
        assert_eq!(filter.substring_pattern(), None);
        assert_eq!(filter.episode_number(), None);
    }

    #[test]
    fn filter_pattern_escapes_wildcards() {
        let filter = EpisodeFilter::from_search(Some("50%_off"));
        assert_eq!(
            filter.substring_pattern(),
            Some("%50\\%\\_off%".to_string())
        );
    }

    // -- escape_like ---------------------------------------------------------

    #[test]
    fn escape_like_leaves_plain_text_alone() {
        assert_eq!(escape_like("One Piece"), "One Piece");
    }

    #[test]
    fn escape_like_escapes_backslash_first() {
        assert_eq!(escape_like("a\\b"), "a\\\\b");
        assert_eq!(escape_like("\\%"), "\\\\\\%");
    }

    // -- parse_episode_number ------------------------------------------------

    #[test]
    fn episode_number_plain_integer() {
        assert_eq!(parse_episode_number("12"), Some(12));
        assert_eq!(parse_episode_number("-3"), Some(-3));
    }

    #[test]
    fn episode_number_leading_zero_and_sign() {
        assert_eq!(parse_episode_number("007"), Some(7));
        assert_eq!(parse_episode_number("+7"), Some(7));
    }

    #[test]
    fn episode_number_integral_decimal() {
        assert_eq!(parse_episode_number("7.0"), Some(7));
        assert_eq!(parse_episode_number("7.5"), None);
    }

    #[test]
    fn episode_number_rejects_non_numeric() {
        assert_eq!(parse_episode_number("seven"), None);
        assert_eq!(parse_episode_number("7a"), None);
        assert_eq!(parse_episode_number(""), None);
        assert_eq!(parse_episode_number("NaN"), None);
        assert_eq!(parse_episode_number("inf"), None);
    }

    #[test]
    fn episode_number_rejects_out_of_range() {
        assert_eq!(parse_episode_number("2147483648"), None);
        assert_eq!(parse_episode_number("1e12"), None);
        assert_eq!(parse_episode_number("2147483647"), Some(i32::MAX));
    }

    // -- PageRequest ---------------------------------------------------------

    #[test]
    fn page_defaults_to_one() {
        assert_eq!(PageRequest::new(None).page(), 1);
        assert_eq!(PageRequest::default().page(), 1);
    }

    #[test]
    fn page_clamps_non_positive_to_one() {
        assert_eq!(PageRequest::new(Some(0)).page(), 1);
        assert_eq!(PageRequest::new(Some(-4)).page(), 1);
    }

    #[test]
    fn page_from_param_parses_or_falls_back() {
        assert_eq!(PageRequest::from_param(Some("3")).page(), 3);
        assert_eq!(PageRequest::from_param(Some(" 2 ")).page(), 2);
        assert_eq!(PageRequest::from_param(Some("abc")).page(), 1);
        assert_eq!(PageRequest::from_param(Some("2.5")).page(), 1);
        assert_eq!(PageRequest::from_param(Some("")).page(), 1);
        assert_eq!(PageRequest::from_param(None).page(), 1);
    }

    #[test]
    fn page_offset_uses_fixed_page_size() {
        assert_eq!(PageRequest::new(Some(1)).offset(), 0);
        assert_eq!(PageRequest::new(Some(2)).offset(), 15);
        assert_eq!(PageRequest::new(Some(2)).per_page(), EPISODES_PER_PAGE);
    }

    #[test]
    fn page_offset_saturates() {
        assert_eq!(PageRequest::new(Some(i64::MAX)).offset(), i64::MAX);
    }
}
