use serde::Deserialize;

/// `?s=<school>&c=<course>`
#[derive(Debug, Default, Deserialize)]
pub struct FeedQuery {
    #[serde(rename = "s")]
    pub school: Option<String>,
    #[serde(rename = "c")]
    pub course: Option<String>,
}
