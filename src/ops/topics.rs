use uuid::Uuid;

use crate::consts::topic_col;
use crate::errors::{Error, Result};
use crate::models::topic::{TopicRow, TopicSummary, encode_likes};
use crate::ops::timestamp_now;
use crate::store::{SheetStore, Table};

/// Appends a new topic with a fresh server-generated id and an empty like
/// set. Not idempotent: resubmitting creates a second topic.
pub fn add_topic(
    store: &SheetStore,
    guest_id: &str,
    author_name: &str,
    text: &str,
) -> Result<String> {
    let topic_id = Uuid::new_v4().to_string();
    let record = TopicRow {
        topic_id: topic_id.clone(),
        text: text.to_string(),
        author_id: guest_id.to_string(),
        author_name: author_name.to_string(),
        likes: Vec::new(),
        timestamp: timestamp_now(),
    };
    store.sheet(Table::Topics).append(&record.to_row()?)?;
    Ok(topic_id)
}

pub fn list_topics(store: &SheetStore) -> Result<Vec<TopicSummary>> {
    let sheet = store.sheet(Table::Topics);
    Ok(sheet
        .scan()?
        .iter()
        .map(|row| TopicSummary::from(TopicRow::from_row(row)))
        .collect())
}

/// Ids of every topic whose like set contains `guest_id`, so a client can
/// mark what the current guest has already liked.
pub fn guest_likes(store: &SheetStore, guest_id: &str) -> Result<Vec<String>> {
    let sheet = store.sheet(Table::Topics);
    Ok(sheet
        .scan()?
        .iter()
        .map(|row| TopicRow::from_row(row))
        .filter(|topic| topic.likes.iter().any(|id| id == guest_id))
        .map(|topic| topic.topic_id)
        .collect())
}

/// Set-semantics add/remove of a guest id in a topic's like set; liking an
/// already-liked topic or unliking a never-liked one is a no-op.
pub fn toggle_like(store: &SheetStore, guest_id: &str, topic_id: &str, unlike: bool) -> Result<()> {
    let sheet = store.sheet(Table::Topics);
    let (index, row) = sheet
        .find(topic_col::TOPIC_ID, topic_id)?
        .ok_or(Error::TopicNotFound)?;

    let mut topic = TopicRow::from_row(&row);
    if unlike {
        topic.likes.retain(|id| id != guest_id);
    } else if !topic.likes.iter().any(|id| id == guest_id) {
        topic.likes.push(guest_id.to_string());
    }

    sheet.update_cell(index, topic_col::LIKES, &encode_likes(&topic.likes)?)
}
