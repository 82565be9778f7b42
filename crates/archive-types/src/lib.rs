pub mod api;
pub mod models;

pub use models::{
    Attachment, Author, AvailableTag, ChannelMetadata, Embed, Message, Reaction, ReactionEmoji,
    Thread, ThreadMetadata, ThreadRecord,
};
