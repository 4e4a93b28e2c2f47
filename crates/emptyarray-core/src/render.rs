//! Markdown rendering for remote items.
//!
//! Every renderer emits one line per item, joined by a single `\n`, with no
//! header and no trailing newline. An empty slice renders to `""`.

use crate::models::{InboxItem, RemoteObject, ScheduledItem};

/// `- [ ] <title> (<due_date>)` per item.
pub fn render_scheduled_items(items: &[ScheduledItem]) -> String {
    join_lines(
        items
            .iter()
            .map(|item| format!("- [ ] {} ({})", item.title, item.due_date)),
    )
}

/// `- <title>` per item, in input order.
pub fn render_inbox_items(items: &[InboxItem]) -> String {
    join_lines(items.iter().map(|item| format!("- {}", item.title)))
}

/// Dispatches on object type: tasks become checklist lines, bookmarks become
/// links, everything else a plain bullet.
pub fn render_objects(objects: &[RemoteObject]) -> String {
    join_lines(objects.iter().map(render_object))
}

fn render_object(object: &RemoteObject) -> String {
    match object {
        RemoteObject::Task { title } => format!("- [ ] {}", title),
        RemoteObject::Bookmark {
            title,
            url: Some(url),
        } => format!("- [{}]({})", title, url),
        // A bookmark without a url has nothing to link to.
        RemoteObject::Bookmark { title, url: None } => format!("- {}", title),
        RemoteObject::Other { title, .. } => format!("- {}", title),
    }
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}
