use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// Only the fields that ordering and search read are required: thread id and
// name, `create_timestamp` and message `content`. Everything else falls back
// to a default so a cosmetic gap never drops a whole thread.

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Author {
    pub id: String,
    pub username: String,
    pub avatar: Option<String>,
    pub discriminator: String,
    pub global_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    pub id: String,
    pub filename: String,
    pub size: u64,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// `name` is null for custom emoji that have since been deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReactionEmoji {
    pub id: Option<String>,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Reaction {
    pub emoji: ReactionEmoji,
    pub count: u32,
}

/// A single archived forum message. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub id: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
    pub content: String,
    #[serde(default)]
    pub author: Author,
    /// Epoch when the archive left it out.
    #[serde(default)]
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub edited_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub attachments: Vec<Attachment>,
    #[serde(default)]
    pub embeds: Vec<Embed>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reactions: Option<Vec<Reaction>>,
    #[serde(default)]
    pub pinned: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadMetadata {
    #[serde(default)]
    pub archived: bool,
    #[serde(default)]
    pub archive_timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub auto_archive_duration: u32,
    #[serde(default)]
    pub locked: bool,
    /// Sort key for the whole archive.
    pub create_timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thread {
    pub id: String,
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: u8,
    #[serde(default)]
    pub owner_id: String,
    #[serde(default)]
    pub parent_id: String,
    #[serde(default)]
    pub message_count: u32,
    pub thread_metadata: ThreadMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub applied_tags: Option<Vec<String>>,
}

/// One thread shard: the thread itself plus its messages in archive order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadRecord {
    pub thread: Thread,
    pub messages: Vec<Message>,
}

impl ThreadRecord {
    pub fn created_at(&self) -> DateTime<Utc> {
        self.thread.thread_metadata.create_timestamp
    }

    /// `needle` must already be lower-cased.
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        if self.thread.name.to_lowercase().contains(needle) {
            return true;
        }

        self.messages
            .iter()
            .any(|m| m.content.to_lowercase().contains(needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailableTag {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub moderated: bool,
    #[serde(default)]
    pub emoji_id: Option<String>,
    #[serde(default)]
    pub emoji_name: Option<String>,
}

/// Channel-level metadata shipped as its own shard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChannelMetadata {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub available_tags: Vec<AvailableTag>,
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHARD_ELEMENT: &str = r#"{
        "thread": {
            "id": "1189",
            "name": "Build fails on ARM",
            "type": 11,
            "owner_id": "42",
            "parent_id": "7",
            "message_count": 2,
            "thread_metadata": {
                "archived": true,
                "archive_timestamp": "2024-02-01T10:00:00.000000+00:00",
                "auto_archive_duration": 4320,
                "locked": false,
                "create_timestamp": "2024-01-30T09:15:00.123000+00:00"
            },
            "applied_tags": ["t1"]
        },
        "messages": [
            {
                "id": "m1",
                "type": 0,
                "content": "Linker error with the cross toolchain",
                "author": {"id": "42", "username": "ana", "avatar": null, "discriminator": "0", "global_name": "Ana"},
                "timestamp": "2024-01-30T09:15:00.123000+00:00",
                "edited_timestamp": null,
                "attachments": [{"id": "a1", "filename": "log.txt", "size": 120, "url": "https://cdn/log.txt"}],
                "embeds": [],
                "pinned": false
            },
            {
                "id": "m2",
                "type": 19,
                "content": "Fixed in main",
                "author": {"id": "43", "username": "bo", "avatar": "abc", "discriminator": "0", "global_name": null},
                "timestamp": "2024-01-31T12:00:00+00:00",
                "edited_timestamp": "2024-01-31T12:05:00+00:00",
                "attachments": [],
                "embeds": [{"type": "link", "url": "https://example.org"}],
                "reactions": [{"emoji": {"id": null, "name": "👍"}, "count": 3}],
                "pinned": true
            }
        ]
    }"#;

    #[test]
    fn parses_thread_record() {
        let record: ThreadRecord = serde_json::from_str(SHARD_ELEMENT).unwrap();
        assert_eq!(record.thread.name, "Build fails on ARM");
        assert_eq!(record.thread.applied_tags.as_deref(), Some(&["t1".to_string()][..]));
        assert_eq!(record.messages.len(), 2);
        assert_eq!(record.messages[0].attachments[0].content_type, None);
        assert_eq!(record.messages[1].embeds[0].kind, "link");
        assert_eq!(record.messages[1].reactions.as_ref().unwrap()[0].count, 3);
        assert!(record.messages[1].pinned);
        assert_eq!(
            record.created_at(),
            "2024-01-30T09:15:00.123Z".parse::<DateTime<Utc>>().unwrap()
        );
    }

    #[test]
    fn matches_name_or_content() {
        let record: ThreadRecord = serde_json::from_str(SHARD_ELEMENT).unwrap();
        assert!(record.matches_lowercase("arm"));
        assert!(record.matches_lowercase("cross toolchain"));
        assert!(!record.matches_lowercase("windows"));
    }

    #[test]
    fn missing_create_timestamp_is_rejected() {
        let json = r#"{"thread": {"id": "1", "name": "x", "type": 11, "owner_id": "1",
            "parent_id": "1", "thread_metadata": {"archived": false}}, "messages": []}"#;
        assert!(serde_json::from_str::<ThreadRecord>(json).is_err());
    }

    #[test]
    fn cosmetic_gaps_are_tolerated() {
        let json = r#"{
            "thread": {"id": "5", "name": "Sparse", "thread_metadata": {"create_timestamp": "2024-03-01T00:00:00Z"}},
            "messages": [{
                "content": "still readable",
                "author": {"id": "42"},
                "attachments": [{"filename": "trace.log"}],
                "embeds": [{"url": "https://example.org"}],
                "reactions": [{"emoji": {"id": "881", "name": null}, "count": 2}]
            }]
        }"#;
        let record: ThreadRecord = serde_json::from_str(json).unwrap();
        let message = &record.messages[0];
        assert_eq!(record.thread.owner_id, "");
        assert_eq!(message.author.username, "");
        assert_eq!(message.attachments[0].size, 0);
        assert_eq!(message.attachments[0].url, "");
        assert_eq!(message.embeds[0].kind, "");
        assert_eq!(message.reactions.as_ref().unwrap()[0].emoji.name, None);
        assert!(record.matches_lowercase("readable"));
    }

    #[test]
    fn message_content_is_required() {
        let json = r#"{"thread": {"id": "5", "name": "x", "thread_metadata":
            {"create_timestamp": "2024-03-01T00:00:00Z"}}, "messages": [{"id": "m1"}]}"#;
        assert!(serde_json::from_str::<ThreadRecord>(json).is_err());
    }

    #[test]
    fn channel_defaults() {
        let channel: ChannelMetadata =
            serde_json::from_str(r#"{"id": "7", "name": "help"}"#).unwrap();
        assert_eq!(channel.topic, "");
        assert!(channel.available_tags.is_empty());
    }
}
