use serde::{Deserialize, Serialize};

use super::wire::ArticleRecord;

/// A news item as served to API clients and stored in the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsItem {
    /// A direct link to the article.
    pub link: String,
    /// The headline of the article.
    #[serde(rename = "titulo")]
    pub title: String,
    /// A short summary of the article.
    #[serde(rename = "resumo")]
    pub summary: String,
    /// Publication date, verbatim from the provider.
    #[serde(rename = "data")]
    pub date: String,
    /// Image URLs, in provider order.
    pub images: Vec<String>,
}

impl From<ArticleRecord> for NewsItem {
    fn from(a: ArticleRecord) -> Self {
        Self {
            link: a.link,
            title: a.title,
            summary: a.summary,
            date: a.publish_date,
            images: a.images,
        }
    }
}
