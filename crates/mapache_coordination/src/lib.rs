//! # mapache_coordination
//!
//! Agent-to-agent (A2A) communication for the Mapache platform.
//!
//! Defines the [`A2aMessage`] envelope agents exchange and an in-memory
//! [`MessageBroker`] with per-agent mailboxes, message-type subscriptions,
//! broadcast delivery, and a dead-letter queue for undeliverable messages.
//!
//! ## Example
//!
//! ```rust
//! use mapache_coordination::{A2aMessage, MessageBroker, MessageType};
//! use serde_json::json;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let broker = MessageBroker::new(16);
//! let mut mailbox = broker.subscribe("recruiter_1_1").await;
//!
//! let message = A2aMessage::new("hiring_manager_1_1", MessageType::TaskAssignment)
//!     .to("recruiter_1_1")
//!     .with_payload(json!({"req_id": "REQ-2024-123"}));
//!
//! assert!(broker.publish(message).await.unwrap());
//! let received = mailbox.recv().await.unwrap();
//! assert_eq!(received.from_agent, "hiring_manager_1_1");
//! # }
//! ```

pub mod broker;
pub mod error;
pub mod protocol;

pub use broker::{BrokerStats, MessageBroker};
pub use error::{CoordinationError, CoordinationResult};
pub use protocol::{A2aMessage, MessageType};
