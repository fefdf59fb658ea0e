//! In-memory message broker for agent communication.
//!
//! Provides publish/subscribe delivery of [`A2aMessage`]s with support for:
//! - Per-agent mailboxes
//! - Message type subscriptions
//! - Broadcast delivery (messages with no recipient)
//! - Optional in-memory message history
//! - Dead letter queue for undeliverable messages

use std::collections::HashMap;

use tokio::sync::{mpsc, Mutex};
use tracing::{debug, info, warn};

use crate::error::{CoordinationError, CoordinationResult};
use crate::protocol::{A2aMessage, MessageType};

/// Delivery counters reported by [`MessageBroker::stats`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BrokerStats {
    pub published: u64,
    pub delivered: u64,
    pub dead_lettered: u64,
    pub mailboxes: usize,
}

struct BrokerInner {
    mailboxes: HashMap<String, mpsc::Sender<A2aMessage>>,
    type_subscribers: HashMap<MessageType, Vec<mpsc::Sender<A2aMessage>>>,
    history: Option<Vec<A2aMessage>>,
    dead_letters: Vec<A2aMessage>,
    published: u64,
    delivered: u64,
    running: bool,
}

/// In-memory message broker.
///
/// Mailboxes are bounded channels. A full or closed mailbox never blocks
/// the publisher; the message lands in the dead letter queue instead.
pub struct MessageBroker {
    inner: Mutex<BrokerInner>,
    mailbox_capacity: usize,
}

impl MessageBroker {
    /// Create a broker with the given per-mailbox capacity.
    pub fn new(mailbox_capacity: usize) -> Self {
        info!("MessageBroker initialized (mailbox_capacity={})", mailbox_capacity);
        Self {
            inner: Mutex::new(BrokerInner {
                mailboxes: HashMap::new(),
                type_subscribers: HashMap::new(),
                history: None,
                dead_letters: Vec::new(),
                published: 0,
                delivered: 0,
                running: true,
            }),
            mailbox_capacity,
        }
    }

    /// Enable in-memory history of every published message.
    pub async fn enable_history(&self) {
        let mut inner = self.inner.lock().await;
        if inner.history.is_none() {
            inner.history = Some(Vec::new());
        }
    }

    /// Open a mailbox for an agent, replacing any existing one.
    pub async fn subscribe(&self, agent_id: impl Into<String>) -> mpsc::Receiver<A2aMessage> {
        let agent_id = agent_id.into();
        let (tx, rx) = mpsc::channel(self.mailbox_capacity);
        let mut inner = self.inner.lock().await;
        debug!("Opened mailbox for {}", agent_id);
        inner.mailboxes.insert(agent_id, tx);
        rx
    }

    /// Subscribe to every message of a given type.
    pub async fn subscribe_type(&self, message_type: MessageType) -> mpsc::Receiver<A2aMessage> {
        let (tx, rx) = mpsc::channel(self.mailbox_capacity);
        let mut inner = self.inner.lock().await;
        inner.type_subscribers.entry(message_type).or_default().push(tx);
        rx
    }

    /// Close an agent's mailbox.
    pub async fn unsubscribe(&self, agent_id: &str) {
        let mut inner = self.inner.lock().await;
        if inner.mailboxes.remove(agent_id).is_some() {
            debug!("Closed mailbox for {}", agent_id);
        }
    }

    /// Publish a message.
    ///
    /// Returns `true` if the message reached at least one subscriber.
    /// Undeliverable messages (unknown recipient, full or closed mailbox)
    /// are dead-lettered rather than dropped.
    pub async fn publish(&self, message: A2aMessage) -> CoordinationResult<bool> {
        let mut inner = self.inner.lock().await;

        if !inner.running {
            warn!("Broker is shut down, message rejected");
            return Err(CoordinationError::BrokerShutDown);
        }

        inner.published += 1;
        if let Some(history) = inner.history.as_mut() {
            history.push(message.clone());
        }

        // Collect every sender that should receive this message, deduped
        // by channel so one queue never receives the same message twice.
        let mut targets: Vec<mpsc::Sender<A2aMessage>> = Vec::new();

        match &message.to_agent {
            Some(recipient) => {
                if let Some(tx) = inner.mailboxes.get(recipient) {
                    targets.push(tx.clone());
                }
            }
            None => {
                // Broadcast: every open mailbox except the sender's own.
                for (agent_id, tx) in &inner.mailboxes {
                    if agent_id != &message.from_agent {
                        targets.push(tx.clone());
                    }
                }
            }
        }

        if let Some(subscribers) = inner.type_subscribers.get(&message.message_type) {
            for tx in subscribers {
                if !targets.iter().any(|t| t.same_channel(tx)) {
                    targets.push(tx.clone());
                }
            }
        }

        let mut delivered = 0u64;
        for tx in &targets {
            match tx.try_send(message.clone()) {
                Ok(()) => delivered += 1,
                Err(e) => {
                    debug!("Delivery failed: {}", e);
                }
            }
        }

        inner.delivered += delivered;

        if delivered == 0 {
            warn!(
                "Message {} from {} undeliverable, dead-lettered",
                message.message_id, message.from_agent
            );
            inner.dead_letters.push(message);
            return Ok(false);
        }

        Ok(true)
    }

    /// Current delivery counters.
    pub async fn stats(&self) -> BrokerStats {
        let inner = self.inner.lock().await;
        BrokerStats {
            published: inner.published,
            delivered: inner.delivered,
            dead_lettered: inner.dead_letters.len() as u64,
            mailboxes: inner.mailboxes.len(),
        }
    }

    /// Messages that could not be delivered.
    pub async fn dead_letters(&self) -> Vec<A2aMessage> {
        self.inner.lock().await.dead_letters.clone()
    }

    /// Published message history, if enabled.
    pub async fn history(&self) -> Option<Vec<A2aMessage>> {
        self.inner.lock().await.history.clone()
    }

    /// Stop accepting publishes and drop all mailboxes.
    pub async fn shutdown(&self) {
        let mut inner = self.inner.lock().await;
        inner.running = false;
        inner.mailboxes.clear();
        inner.type_subscribers.clear();
        info!("MessageBroker shut down");
    }
}
