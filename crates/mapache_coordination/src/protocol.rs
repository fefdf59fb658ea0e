//! A2A message envelope and message types.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Default message priority.
pub const DEFAULT_PRIORITY: u8 = 5;

/// Maximum message priority.
pub const MAX_PRIORITY: u8 = 10;

/// A2A message types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    // Basic communication
    Request,
    Response,
    Notification,

    // Task coordination
    TaskAssignment,
    TaskAcceptance,
    TaskRejection,
    TaskProgress,
    TaskCompletion,
    TaskFailure,

    // Control messages
    Heartbeat,
    Shutdown,
    Error,
}

impl MessageType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Request => "request",
            MessageType::Response => "response",
            MessageType::Notification => "notification",
            MessageType::TaskAssignment => "task_assignment",
            MessageType::TaskAcceptance => "task_acceptance",
            MessageType::TaskRejection => "task_rejection",
            MessageType::TaskProgress => "task_progress",
            MessageType::TaskCompletion => "task_completion",
            MessageType::TaskFailure => "task_failure",
            MessageType::Heartbeat => "heartbeat",
            MessageType::Shutdown => "shutdown",
            MessageType::Error => "error",
        }
    }
}

impl std::fmt::Display for MessageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Agent-to-agent message envelope.
///
/// A message addressed to a specific agent is delivered to that agent's
/// mailbox; a message with no recipient is broadcast to every mailbox.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct A2aMessage {
    /// Unique identifier for this message
    pub message_id: Uuid,
    /// Conversation/thread this message belongs to
    pub conversation_id: String,
    /// Id of the sending agent
    pub from_agent: String,
    /// Id of the receiving agent (None for broadcast)
    pub to_agent: Option<String>,
    /// Type of message being sent
    pub message_type: MessageType,
    /// Message content
    pub payload: serde_json::Value,
    /// When the message was created
    pub timestamp: DateTime<Utc>,
    /// Message priority (0-10, higher is more important)
    pub priority: u8,
    /// Whether this message expects a response
    pub requires_response: bool,
    /// Id of the message this responds to (if applicable)
    pub correlation_id: Option<Uuid>,
    /// Additional metadata
    pub metadata: HashMap<String, serde_json::Value>,
}

impl A2aMessage {
    /// Create a new message from an agent.
    pub fn new(from_agent: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            conversation_id: Uuid::new_v4().to_string(),
            from_agent: from_agent.into(),
            to_agent: None,
            message_type,
            payload: serde_json::Value::Null,
            timestamp: Utc::now(),
            priority: DEFAULT_PRIORITY,
            requires_response: false,
            correlation_id: None,
            metadata: HashMap::new(),
        }
    }

    /// Address the message to a specific agent.
    pub fn to(mut self, agent: impl Into<String>) -> Self {
        self.to_agent = Some(agent.into());
        self
    }

    /// Set the message payload.
    pub fn with_payload(mut self, payload: serde_json::Value) -> Self {
        self.payload = payload;
        self
    }

    /// Join an existing conversation.
    pub fn in_conversation(mut self, conversation_id: impl Into<String>) -> Self {
        self.conversation_id = conversation_id.into();
        self
    }

    /// Set the priority, clamped to the valid 0-10 range.
    pub fn with_priority(mut self, priority: u8) -> Self {
        self.priority = priority.min(MAX_PRIORITY);
        self
    }

    /// Mark the message as expecting a response.
    pub fn expecting_response(mut self) -> Self {
        self.requires_response = true;
        self
    }

    /// Add a metadata entry.
    pub fn with_metadata(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Build a reply to this message.
    ///
    /// The reply joins the same conversation, carries this message's id as
    /// its correlation id, and is addressed back to the sender.
    pub fn reply(&self, from_agent: impl Into<String>, message_type: MessageType) -> Self {
        Self {
            message_id: Uuid::new_v4(),
            conversation_id: self.conversation_id.clone(),
            from_agent: from_agent.into(),
            to_agent: Some(self.from_agent.clone()),
            message_type,
            payload: serde_json::Value::Null,
            timestamp: Utc::now(),
            priority: self.priority,
            requires_response: false,
            correlation_id: Some(self.message_id),
            metadata: HashMap::new(),
        }
    }

    /// Whether this message is a broadcast.
    pub fn is_broadcast(&self) -> bool {
        self.to_agent.is_none()
    }
}
