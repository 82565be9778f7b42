use archive_types::{Author, Message, Thread, ThreadMetadata, ThreadRecord};

pub(crate) fn record(id: &str, created: &str) -> ThreadRecord {
    record_with(id, &format!("Thread {id}"), created, &[])
}

pub(crate) fn record_with(id: &str, name: &str, created: &str, contents: &[&str]) -> ThreadRecord {
    let created = created.parse().unwrap();
    let messages = contents
        .iter()
        .enumerate()
        .map(|(i, content)| Message {
            id: format!("{id}-m{i}"),
            kind: 0,
            content: content.to_string(),
            author: Author {
                id: "1".into(),
                username: "ana".into(),
                avatar: None,
                discriminator: "0".into(),
                global_name: None,
            },
            timestamp: created,
            edited_timestamp: None,
            attachments: vec![],
            embeds: vec![],
            reactions: None,
            pinned: false,
        })
        .collect::<Vec<_>>();

    ThreadRecord {
        thread: Thread {
            id: id.into(),
            name: name.into(),
            kind: 11,
            owner_id: "1".into(),
            parent_id: "100".into(),
            message_count: messages.len() as u32,
            thread_metadata: ThreadMetadata {
                archived: false,
                archive_timestamp: None,
                auto_archive_duration: 1440,
                locked: false,
                create_timestamp: created,
            },
            applied_tags: None,
        },
        messages,
    }
}
