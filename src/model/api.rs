use serde::Deserialize;

/// Error body shapes the backend may return on non-success responses.
///
/// Plain `{ "message": .. }` / `{ "error": .. }` bodies and RFC 7807 problem details
/// (`title`, `detail`) are all accepted; unknown fields are ignored.
#[derive(Deserialize, Debug, Default)]
pub struct BackendErrorDto {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub detail: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl BackendErrorDto {
    /// First non-empty message field in `message`, `error`, `detail`, `title` order.
    pub fn into_message(self) -> Option<String> {
        [self.message, self.error, self.detail, self.title]
            .into_iter()
            .flatten()
            .find(|m| !m.trim().is_empty())
    }
}

/// JSON array that may arrive wrapped in a reference-preserving envelope.
///
/// Backends serializing with reference-cycle preservation emit collections as
/// `{ "$id": "1", "$values": [ .. ] }` rather than a bare array.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum JsonList<T> {
    Plain(Vec<T>),
    Preserved {
        #[serde(rename = "$values")]
        values: Vec<T>,
    },
}

impl<T> JsonList<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::Plain(values) => values,
            Self::Preserved { values } => values,
        }
    }
}
