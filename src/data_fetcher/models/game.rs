use serde::{Deserialize, Deserializer, Serialize};

/// One game as returned by the league's team-matches endpoint.
///
/// Only the fields the documents need are modelled; everything else in the
/// payload is ignored. Missing strings deserialize as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Game {
    #[serde(rename = "wedID", default)]
    pub id: String,
    /// Either `DD-MM-YYYY` or `YYYY-MM-DD`, see [`crate::data_fetcher::dates`].
    #[serde(rename = "datumString", default)]
    pub date: String,
    #[serde(rename = "beginTijd", default)]
    pub start_time: String,
    #[serde(rename = "accGUID", default)]
    pub venue_id: String,
    #[serde(rename = "accNaam", default)]
    pub venue_name: String,
    #[serde(rename = "tTNaam", default)]
    pub home_team: String,
    #[serde(rename = "tUNaam", default)]
    pub away_team: String,
    #[serde(rename = "wedOff", default, deserialize_with = "null_as_empty")]
    pub officials: Vec<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

impl Game {
    /// First official, if assigned.
    pub fn first_official(&self) -> Option<&str> {
        self.officials
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Second official, if assigned.
    pub fn second_official(&self) -> Option<&str> {
        self.officials
            .get(1)
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }
}
