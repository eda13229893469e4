use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Preview text carries at most this many meaningful characters; anything
/// longer is a server artifact and is cut client-side.
pub const PREVIEW_MAX_CHARS: usize = 60;

const PREVIEW_FALLBACK: &str = "No preview available";

/// A conversation summary as returned by `GET /api/conversations`.
///
/// Server-owned and read-only here; the server orders listings by
/// `updated_at` descending and the client never re-sorts.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    pub id: String,
    pub title: String,
    pub first_message_preview: String,
    pub updated_at: DateTime<Utc>,
    pub message_count: i64,
}

impl Conversation {
    /// Display preview, capped at [`PREVIEW_MAX_CHARS`] characters with a
    /// fixed fallback for conversations without one.
    pub fn preview(&self) -> String {
        if self.first_message_preview.is_empty() {
            return PREVIEW_FALLBACK.to_string();
        }
        self.first_message_preview
            .chars()
            .take(PREVIEW_MAX_CHARS)
            .collect()
    }
}

/// One page of the paginated conversation listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConversationPage {
    pub conversations: Vec<Conversation>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn conversation(preview: &str) -> Conversation {
        Conversation {
            id: "conv-1".to_string(),
            title: "Team norms".to_string(),
            first_message_preview: preview.to_string(),
            updated_at: Utc.with_ymd_and_hms(2025, 11, 14, 10, 0, 0).unwrap(),
            message_count: 4,
        }
    }

    #[test]
    fn preview_falls_back_when_empty() {
        assert_eq!(conversation("").preview(), "No preview available");
    }

    #[test]
    fn preview_is_capped_at_sixty_chars() {
        let long = "x".repeat(90);
        let preview = conversation(&long).preview();
        assert_eq!(preview.chars().count(), PREVIEW_MAX_CHARS);
    }

    #[test]
    fn short_preview_passes_through() {
        assert_eq!(conversation("How do we start?").preview(), "How do we start?");
    }

    #[test]
    fn page_round_trips_snake_case_fields() {
        let json = r#"{
            "conversations": [{
                "id": "c1",
                "title": "Assessment",
                "first_message_preview": "What makes a good CFA?",
                "updated_at": "2025-11-14T10:00:00Z",
                "message_count": 2
            }],
            "total": 41,
            "limit": 20,
            "offset": 0,
            "has_more": true
        }"#;
        let page: ConversationPage = serde_json::from_str(json).unwrap();
        assert_eq!(page.conversations.len(), 1);
        assert_eq!(page.conversations[0].id, "c1");
        assert!(page.has_more);
        assert_eq!(page.total, 41);
    }
}
