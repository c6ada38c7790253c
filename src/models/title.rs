use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Single hit from the OMDb `Search` array
#[derive(Debug, Clone, Deserialize)]
pub struct OmdbSearchItem {
    #[serde(rename = "imdbID")]
    pub imdb_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Type", default)]
    pub item_type: Option<String>,
    #[serde(rename = "Year", default)]
    pub year: Option<String>,
    #[serde(rename = "Poster", default)]
    pub poster: Option<String>,
}

/// Typed view of a movie, series or episode found through OMDb
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Title {
    pub imdb_id: String,
    pub title: String,
    pub title_type: TitleType,
    /// Kept as text: OMDb reports ranges like "2008–2013" for series
    pub year: Option<String>,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum TitleType {
    Movie,
    Series,
    Episode,
    Game,
    Other,
}

impl Title {
    /// Decodes an opaque upstream result object, if it has the required fields
    pub fn from_value(value: &Value) -> Option<Self> {
        serde_json::from_value::<OmdbSearchItem>(value.clone())
            .map(Title::from)
            .ok()
    }
}

impl From<OmdbSearchItem> for Title {
    fn from(item: OmdbSearchItem) -> Self {
        let title_type = match item.item_type.as_deref() {
            Some("movie") => TitleType::Movie,
            Some("series") => TitleType::Series,
            Some("episode") => TitleType::Episode,
            Some("game") => TitleType::Game,
            _ => TitleType::Other,
        };

        Title {
            imdb_id: item.imdb_id,
            title: item.title,
            title_type,
            year: item.year,
            // OMDb uses "N/A" when there's no poster
            poster: item.poster.filter(|p| p != "N/A"),
        }
    }
}
