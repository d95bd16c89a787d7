use serde::Serialize;

use crate::consts::topic_col;
use crate::errors::Result;

/// One data row of the `Topics` table. The like set is stored serialized as
/// a JSON array of guest ids inside its cell.
#[derive(Debug, Clone)]
pub struct TopicRow {
    pub topic_id: String,
    pub text: String,
    pub author_id: String,
    pub author_name: String,
    pub likes: Vec<String>,
    pub timestamp: String,
}

impl TopicRow {
    pub fn from_row(row: &[String]) -> Self {
        let cell = |i: usize| row.get(i).cloned().unwrap_or_default();
        Self {
            topic_id: cell(topic_col::TOPIC_ID),
            text: cell(topic_col::TEXT),
            author_id: cell(topic_col::AUTHOR_ID),
            author_name: cell(topic_col::AUTHOR_NAME),
            likes: decode_likes(&cell(topic_col::LIKES)),
            timestamp: cell(topic_col::TIMESTAMP),
        }
    }

    pub fn to_row(&self) -> Result<Vec<String>> {
        Ok(vec![
            self.topic_id.clone(),
            self.text.clone(),
            self.author_id.clone(),
            self.author_name.clone(),
            encode_likes(&self.likes)?,
            self.timestamp.clone(),
        ])
    }
}

/// An empty or unparseable cell reads as the empty set.
pub fn decode_likes(cell: &str) -> Vec<String> {
    if cell.is_empty() {
        return Vec::new();
    }
    serde_json::from_str(cell).unwrap_or_default()
}

pub fn encode_likes(likes: &[String]) -> Result<String> {
    Ok(serde_json::to_string(likes)?)
}

/// A topic as listed to clients. Likes surface only as a count; the member
/// ids never leave the store this way.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TopicSummary {
    pub id: String,
    pub text: String,
    pub author: String,
    pub likes_count: usize,
}

impl From<TopicRow> for TopicSummary {
    fn from(row: TopicRow) -> Self {
        Self {
            id: row.topic_id,
            text: row.text,
            author: row.author_name,
            likes_count: row.likes.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_likes_cell_reads_as_empty() {
        assert!(decode_likes("").is_empty());
        assert!(decode_likes("not json").is_empty());
        assert_eq!(decode_likes(r#"["g1","g2"]"#), vec!["g1", "g2"]);
    }

    #[test]
    fn summary_takes_author_name_not_id() {
        let row = TopicRow {
            topic_id: "t1".into(),
            text: "hi".into(),
            author_id: "g1".into(),
            author_name: "Ann".into(),
            likes: vec!["g2".into()],
            timestamp: String::new(),
        };
        let summary = TopicSummary::from(row);
        assert_eq!(summary.author, "Ann");
        assert_eq!(summary.likes_count, 1);
    }
}
