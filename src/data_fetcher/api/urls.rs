//! URL building utilities for API endpoints

use crate::constants::league::TEAM_MATCHES_PATH;

/// Builds the URL listing every game of one team.
///
/// The team identifier is appended to the club prefix verbatim; the league
/// service expects the `+` characters in identifiers such as `HSE++1` as is.
///
/// # Example
/// ```
/// use matchday_sheets::data_fetcher::api::build_team_matches_url;
///
/// let url = build_team_matches_url("http://league.example/data", "BVBL1447", "HSE++1");
/// assert_eq!(url, "http://league.example/data/TeamMatchesByGuid?teamguid=BVBL1447HSE++1");
/// ```
pub fn build_team_matches_url(api_base_url: &str, team_guid_prefix: &str, team: &str) -> String {
    let base = api_base_url.trim_end_matches('/');
    format!("{base}/{TEAM_MATCHES_PATH}?teamguid={team_guid_prefix}{team}")
}
