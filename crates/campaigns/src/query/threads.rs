//! Conversation thread grouping

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::models::{Message, UserId};
use crate::storage::MessageStore;

/// Messages exchanged between the viewer and one counterpart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageThread {
    /// The participant who is not the viewer
    pub counterpart: UserId,
    /// Messages in the order they were grouped (input order)
    pub messages: Vec<Message>,
}

impl MessageThread {
    /// The most recently appended message.
    ///
    /// This is the last message in input order, which is not necessarily
    /// the one with the latest timestamp.
    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Unread messages addressed to `viewer`; messages the viewer sent
    /// never count
    pub fn unread_count(&self, viewer: &UserId) -> usize {
        self.messages
            .iter()
            .filter(|m| m.is_unread_for(viewer))
            .count()
    }
}

/// Summary information for displaying a thread in a conversation list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThreadSummary {
    pub counterpart: UserId,
    pub last_message: Message,
    pub message_count: usize,
    pub unread_count: usize,
}

/// A viewer's messages partitioned by counterpart
///
/// Iteration yields threads in the order their counterpart first appeared
/// in the input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageThreads {
    viewer: UserId,
    threads: Vec<MessageThread>,
    index: HashMap<UserId, usize>,
}

impl MessageThreads {
    fn empty(viewer: UserId) -> Self {
        Self {
            viewer,
            threads: Vec::new(),
            index: HashMap::new(),
        }
    }

    fn push(&mut self, counterpart: &UserId, message: Message) {
        let slot = match self.index.get(counterpart) {
            Some(&slot) => slot,
            None => {
                self.threads.push(MessageThread {
                    counterpart: counterpart.clone(),
                    messages: Vec::new(),
                });
                let slot = self.threads.len() - 1;
                self.index.insert(counterpart.clone(), slot);
                slot
            }
        };
        self.threads[slot].messages.push(message);
    }

    pub fn viewer(&self) -> &UserId {
        &self.viewer
    }

    /// The thread with `counterpart`, if any messages were exchanged
    pub fn get(&self, counterpart: &UserId) -> Option<&MessageThread> {
        self.index.get(counterpart).map(|&slot| &self.threads[slot])
    }

    pub fn len(&self) -> usize {
        self.threads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.threads.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageThread> {
        self.threads.iter()
    }

    pub fn counterparts(&self) -> impl Iterator<Item = &UserId> {
        self.threads.iter().map(|t| &t.counterpart)
    }

    /// Unread count for the thread with `counterpart` (0 if no such thread)
    pub fn unread_count(&self, counterpart: &UserId) -> usize {
        self.get(counterpart)
            .map_or(0, |t| t.unread_count(&self.viewer))
    }

    /// Total unread messages across every thread
    pub fn total_unread(&self) -> usize {
        self.threads
            .iter()
            .map(|t| t.unread_count(&self.viewer))
            .sum()
    }

    /// Per-thread display values, in thread order
    pub fn summaries(&self) -> Vec<ThreadSummary> {
        self.threads
            .iter()
            .filter_map(|thread| {
                let last_message = thread.last_message()?.clone();
                Some(ThreadSummary {
                    counterpart: thread.counterpart.clone(),
                    last_message,
                    message_count: thread.messages.len(),
                    unread_count: thread.unread_count(&self.viewer),
                })
            })
            .collect()
    }

    /// Flatten into a plain counterpart -> messages map
    pub fn into_map(self) -> HashMap<UserId, Vec<Message>> {
        self.threads
            .into_iter()
            .map(|t| (t.counterpart, t.messages))
            .collect()
    }
}

impl IntoIterator for MessageThreads {
    type Item = MessageThread;
    type IntoIter = std::vec::IntoIter<MessageThread>;

    fn into_iter(self) -> Self::IntoIter {
        self.threads.into_iter()
    }
}

/// Partition messages into per-counterpart threads for `viewer`
///
/// Messages the viewer neither sent nor received are skipped. Each thread
/// keeps its messages in input order; nothing is re-sorted by timestamp.
pub fn group_threads(messages: &[Message], viewer: &UserId) -> MessageThreads {
    let mut threads = MessageThreads::empty(viewer.clone());
    for message in messages {
        if let Some(counterpart) = message.counterpart(viewer) {
            threads.push(counterpart, message.clone());
        }
    }
    threads
}

/// Load every stored message and group the viewer's threads
pub fn list_threads_for(store: &dyn MessageStore, viewer: &UserId) -> Result<MessageThreads> {
    let messages = store.list_messages()?;
    Ok(group_threads(&messages, viewer))
}
