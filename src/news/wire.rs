use serde::{Deserialize, Deserializer, Serialize};

#[derive(Serialize)]
pub(crate) struct ArticleRequest<'a> {
    pub(crate) query: &'a str,
    // Finlight expects the page size as a string.
    #[serde(rename = "pageSize")]
    pub(crate) page_size: String,
}

#[derive(Deserialize)]
pub(crate) struct ArticlesEnvelope {
    #[serde(default)]
    pub(crate) articles: Vec<ArticleRecord>,
}

/// A single article as returned by the Finlight search endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArticleRecord {
    /// A direct link to the article.
    pub link: String,
    /// The headline of the article.
    pub title: String,
    /// A short provider-written summary.
    pub summary: String,
    /// Publication date in the provider's own format (not parsed).
    #[serde(rename = "publishDate")]
    pub publish_date: String,
    /// Image URLs, in provider order.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub images: Vec<String>,
}

fn null_as_empty<'de, D>(d: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(d).map(Option::unwrap_or_default)
}
