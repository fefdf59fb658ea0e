//! Hiring workflow demonstration.
//!
//! Cross-functional collaboration between four personas:
//! 1. Hiring Manager posts a job requisition
//! 2. Recruiter sources candidates (with retry around the sourcing backend)
//! 3. Hiring Manager approves candidates for interviews
//! 4. Calendar agent schedules the interviews
//! 5. HR Ops prepares the offer (behind a circuit breaker)
//!
//! Every hand-off travels as an A2A message over the broker, and the whole
//! run is driven by the workflow executor so it leaves a persisted,
//! resumable execution log.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::sync::{mpsc, Mutex};
use tracing::info;

use mapache_coordination::{A2aMessage, MessageBroker, MessageType};
use mapache_core::{
    Agent, AgentRegistry, Capability, CoreResult, TaskContext, TaskResult, Workflow,
};
use mapache_reliability::{retry, CircuitBreaker, RetryPolicy};

/// Persona ids used as A2A addresses.
pub const HIRING_MANAGER: &str = "hiring_manager_1_1";
pub const RECRUITER: &str = "recruiter_1_1";
pub const CALENDAR: &str = "calendar_1_1";
pub const HR_OPS: &str = "hr_ops_manager_1";

/// Requisition id used throughout the demonstration run.
pub const REQUISITION_ID: &str = "REQ-2024-123";

const INTERVIEW_SLOTS: [&str; 3] = ["Monday 2pm", "Tuesday 10am", "Wednesday 3pm"];

/// Candidates need at least this match score to reach interviews.
const APPROVAL_THRESHOLD: u8 = 85;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Candidate {
    pub name: String,
    pub match_score: u8,
}

fn sourced_candidates() -> Vec<Candidate> {
    [
        ("Alice Johnson", 95),
        ("Bob Smith", 88),
        ("Carol White", 85),
        ("David Lee", 82),
        ("Eva Martinez", 79),
    ]
    .into_iter()
    .map(|(name, match_score)| Candidate {
        name: name.to_string(),
        match_score,
    })
    .collect()
}

#[derive(Debug, thiserror::Error)]
enum HiringError {
    #[error("candidate database unavailable")]
    SourcingUnavailable,

    #[error("offer system unavailable")]
    OfferUnavailable,
}

/// Fast backoff so the demonstration completes promptly.
fn demo_retry_policy() -> RetryPolicy {
    RetryPolicy {
        max_attempts: 3,
        exponential_base: 2.0,
        max_delay: Duration::from_millis(20),
        jitter: false,
    }
}

type Mailbox = Mutex<mpsc::Receiver<A2aMessage>>;

fn broker_err(agent: &str, e: mapache_coordination::CoordinationError) -> mapache_core::CoreError {
    mapache_core::CoreError::StepExecutionFailed {
        agent: agent.to_string(),
        message: e.to_string(),
    }
}

fn drain_one(mailbox: &mut mpsc::Receiver<A2aMessage>) -> Option<A2aMessage> {
    mailbox.try_recv().ok()
}

/// Step 1: the hiring manager posts the job requisition.
struct PostRequisitionAgent {
    broker: Arc<MessageBroker>,
    title: String,
}

#[async_trait]
impl Agent for PostRequisitionAgent {
    fn agent_id(&self) -> String {
        "post-requisition".to_string()
    }

    fn role(&self) -> String {
        "Hiring Manager".to_string()
    }

    fn description(&self) -> String {
        "Posts the job requisition and assigns sourcing to the recruiter".to_string()
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::WorkflowAutomation]
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        let requisition = json!({
            "req_id": REQUISITION_ID,
            "title": self.title,
            "department": "engineering",
            "hiring_manager": HIRING_MANAGER,
            "level": "L5",
            "headcount": 1,
            "location": "Remote",
            "skills_required": ["python", "distributed_systems", "cloud_architecture"],
        });

        let assignment = A2aMessage::new(HIRING_MANAGER, MessageType::TaskAssignment)
            .to(RECRUITER)
            .in_conversation(REQUISITION_ID)
            .with_payload(requisition.clone())
            .expecting_response();

        let delivered = self
            .broker
            .publish(assignment)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;
        if !delivered {
            return Ok(TaskResult::failure(
                self.agent_id(),
                "Recruiter mailbox is not open",
            ));
        }

        info!("Requisition {} posted for '{}'", REQUISITION_ID, self.title);
        context.set_output("requisition", requisition);

        Ok(TaskResult::success(self.agent_id()).with_message(format!(
            "Requisition {} posted: {}",
            REQUISITION_ID, self.title
        )))
    }
}

/// Step 2: the recruiter sources candidates.
///
/// The sourcing backend drops the first call of every run; the retry
/// wrapper absorbs it.
struct SourceCandidatesAgent {
    broker: Arc<MessageBroker>,
    mailbox: Mailbox,
    first_attempt: AtomicBool,
}

impl SourceCandidatesAgent {
    async fn source(&self) -> Result<Vec<Candidate>, HiringError> {
        if self.first_attempt.swap(false, Ordering::SeqCst) {
            return Err(HiringError::SourcingUnavailable);
        }
        Ok(sourced_candidates())
    }
}

#[async_trait]
impl Agent for SourceCandidatesAgent {
    fn agent_id(&self) -> String {
        "source-candidates".to_string()
    }

    fn role(&self) -> String {
        "Recruiter".to_string()
    }

    fn description(&self) -> String {
        "Sources candidates and reports them back to the hiring manager".to_string()
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::DataIntegration, Capability::ErrorMonitoring]
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        let assignment = match drain_one(&mut *self.mailbox.lock().await) {
            Some(message) => message,
            None => {
                return Ok(TaskResult::failure(
                    self.agent_id(),
                    "No requisition assignment received",
                ))
            }
        };

        let candidates = match retry(&demo_retry_policy(), "source-candidates", || self.source())
            .await
        {
            Ok(candidates) => candidates,
            Err(e) => return Ok(TaskResult::failure(self.agent_id(), e.to_string())),
        };

        let progress = assignment
            .reply(RECRUITER, MessageType::TaskProgress)
            .with_payload(json!({
                "req_id": REQUISITION_ID,
                "candidates": candidates,
            }))
            .expecting_response();
        self.broker
            .publish(progress)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;

        info!("Sourced {} candidates", candidates.len());
        context.set_output("candidates", serde_json::to_value(&candidates).unwrap_or_default());

        Ok(TaskResult::success(self.agent_id()).with_message(format!(
            "Sourced {} qualified candidates for {}",
            candidates.len(),
            REQUISITION_ID
        )))
    }
}

/// Step 3: the hiring manager approves candidates for interviews.
struct ApproveCandidatesAgent {
    broker: Arc<MessageBroker>,
    mailbox: Mailbox,
}

#[async_trait]
impl Agent for ApproveCandidatesAgent {
    fn agent_id(&self) -> String {
        "coordinate-approval".to_string()
    }

    fn role(&self) -> String {
        "Hiring Manager".to_string()
    }

    fn description(&self) -> String {
        "Reviews sourced candidates and approves interviews".to_string()
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::WorkflowAutomation]
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        let progress = match drain_one(&mut *self.mailbox.lock().await) {
            Some(message) => message,
            None => {
                return Ok(TaskResult::failure(
                    self.agent_id(),
                    "No candidate report received from recruiter",
                ))
            }
        };

        let candidates: Vec<Candidate> =
            serde_json::from_value(progress.payload["candidates"].clone())
                .map_err(|e| mapache_core::CoreError::Serialization(e.to_string()))?;

        let approved: Vec<Candidate> = candidates
            .iter()
            .filter(|c| c.match_score >= APPROVAL_THRESHOLD)
            .cloned()
            .collect();

        let acceptance = progress
            .reply(HIRING_MANAGER, MessageType::TaskAcceptance)
            .with_payload(json!({
                "req_id": REQUISITION_ID,
                "approved": approved,
            }));
        self.broker
            .publish(acceptance)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;

        let scheduling = A2aMessage::new(HIRING_MANAGER, MessageType::TaskAssignment)
            .to(CALENDAR)
            .in_conversation(REQUISITION_ID)
            .with_payload(json!({
                "req_id": REQUISITION_ID,
                "candidates": approved,
            }));
        self.broker
            .publish(scheduling)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;

        info!("Approved {} of {} candidates", approved.len(), candidates.len());
        context.set_output(
            "approved_candidates",
            serde_json::to_value(&approved).unwrap_or_default(),
        );

        Ok(TaskResult::success(self.agent_id()).with_message(format!(
            "Approved {} of {} candidates for interviews",
            approved.len(),
            candidates.len()
        )))
    }
}

/// Step 4: the calendar agent schedules interviews and records the decision.
struct ScheduleInterviewsAgent {
    broker: Arc<MessageBroker>,
    mailbox: Mailbox,
}

#[async_trait]
impl Agent for ScheduleInterviewsAgent {
    fn agent_id(&self) -> String {
        "schedule-interviews".to_string()
    }

    fn role(&self) -> String {
        "Calendar Coordinator".to_string()
    }

    fn description(&self) -> String {
        "Schedules interviews and forwards the hiring decision".to_string()
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::RealTimeSync]
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        let assignment = match drain_one(&mut *self.mailbox.lock().await) {
            Some(message) => message,
            None => {
                return Ok(TaskResult::failure(
                    self.agent_id(),
                    "No scheduling assignment received",
                ))
            }
        };

        let candidates: Vec<Candidate> =
            serde_json::from_value(assignment.payload["candidates"].clone())
                .map_err(|e| mapache_core::CoreError::Serialization(e.to_string()))?;
        if candidates.is_empty() {
            return Ok(TaskResult::failure(
                self.agent_id(),
                "No approved candidates to schedule",
            ));
        }

        let interviews: Vec<_> = candidates
            .iter()
            .zip(INTERVIEW_SLOTS)
            .map(|(candidate, slot)| json!({"candidate": candidate.name, "slot": slot}))
            .collect();

        // Interviews complete; the strongest match gets the offer.
        let top = candidates
            .iter()
            .max_by_key(|c| c.match_score)
            .cloned()
            .unwrap_or_else(|| candidates[0].clone());

        let offer_request = A2aMessage::new(HIRING_MANAGER, MessageType::TaskAssignment)
            .to(HR_OPS)
            .in_conversation(REQUISITION_ID)
            .with_payload(json!({
                "req_id": REQUISITION_ID,
                "candidate": top.name,
                "level": "L5",
                "salary": 150000,
                "equity": 0.05,
                "start_date": "2024-02-01",
            }));
        self.broker
            .publish(offer_request)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;

        info!("Scheduled {} interviews, decision: {}", interviews.len(), top.name);
        context.set_output("interviews", json!(interviews));
        context.set_output("decision", json!(top.name));

        Ok(TaskResult::success(self.agent_id()).with_message(format!(
            "Scheduled {} interviews; decision: offer to {}",
            interviews.len(),
            top.name
        )))
    }
}

/// Step 5: HR Ops prepares the offer behind a circuit breaker.
struct PrepareOfferAgent {
    broker: Arc<MessageBroker>,
    mailbox: Mailbox,
    breaker: CircuitBreaker,
}

impl PrepareOfferAgent {
    async fn prepare(&self, offer: serde_json::Value) -> Result<serde_json::Value, HiringError> {
        if offer.get("candidate").and_then(|c| c.as_str()).is_none() {
            return Err(HiringError::OfferUnavailable);
        }
        Ok(offer)
    }
}

#[async_trait]
impl Agent for PrepareOfferAgent {
    fn agent_id(&self) -> String {
        "prepare-offer".to_string()
    }

    fn role(&self) -> String {
        "HR Operations".to_string()
    }

    fn description(&self) -> String {
        "Prepares and sends the offer, then closes the requisition".to_string()
    }

    fn capabilities(&self) -> Vec<Capability> {
        vec![Capability::SecurityManagement, Capability::WorkflowAutomation]
    }

    async fn execute(&self, context: &mut TaskContext) -> CoreResult<TaskResult> {
        let request = match drain_one(&mut *self.mailbox.lock().await) {
            Some(message) => message,
            None => {
                return Ok(TaskResult::failure(
                    self.agent_id(),
                    "No offer request received",
                ))
            }
        };

        let offer = match self.breaker.call(|| self.prepare(request.payload.clone())).await {
            Ok(offer) => offer,
            Err(e) => return Ok(TaskResult::failure(self.agent_id(), e.to_string())),
        };

        let completion = A2aMessage::new(HR_OPS, MessageType::TaskCompletion)
            .in_conversation(REQUISITION_ID)
            .with_payload(json!({
                "req_id": REQUISITION_ID,
                "offer": offer,
                "status": "closed",
            }));
        // Broadcast so every persona sees the requisition close.
        self.broker
            .publish(completion)
            .await
            .map_err(|e| broker_err(&self.agent_id(), e))?;

        let candidate = offer["candidate"].as_str().unwrap_or("unknown").to_string();
        info!("Offer prepared for {}", candidate);
        context.set_output("offer", offer);
        context.set_output("requisition_closed", json!(REQUISITION_ID));

        Ok(TaskResult::success(self.agent_id()).with_message(format!(
            "Offer prepared for {}; requisition {} closed",
            candidate, REQUISITION_ID
        )))
    }
}

/// A fully wired hiring workflow run.
pub struct HiringDemo {
    pub workflow: Workflow,
    pub registry: AgentRegistry,
    pub broker: Arc<MessageBroker>,
}

/// Wire the broker, mailboxes, and step agents for one demonstration run.
pub async fn build(requisition_title: impl Into<String>) -> HiringDemo {
    let broker = Arc::new(MessageBroker::new(32));
    broker.enable_history().await;

    let recruiter_mailbox = broker.subscribe(RECRUITER).await;
    let manager_mailbox = broker.subscribe(HIRING_MANAGER).await;
    let calendar_mailbox = broker.subscribe(CALENDAR).await;
    let hr_ops_mailbox = broker.subscribe(HR_OPS).await;

    let mut registry = AgentRegistry::new();
    registry.register(Arc::new(PostRequisitionAgent {
        broker: broker.clone(),
        title: requisition_title.into(),
    }));
    registry.register(Arc::new(SourceCandidatesAgent {
        broker: broker.clone(),
        mailbox: Mutex::new(recruiter_mailbox),
        first_attempt: AtomicBool::new(true),
    }));
    registry.register(Arc::new(ApproveCandidatesAgent {
        broker: broker.clone(),
        mailbox: Mutex::new(manager_mailbox),
    }));
    registry.register(Arc::new(ScheduleInterviewsAgent {
        broker: broker.clone(),
        mailbox: Mutex::new(calendar_mailbox),
    }));
    registry.register(Arc::new(PrepareOfferAgent {
        broker: broker.clone(),
        mailbox: Mutex::new(hr_ops_mailbox),
        breaker: CircuitBreaker::new(3, 1, Duration::from_secs(30)),
    }));

    let workflow = Workflow::new("hiring", "Hiring Workflow")
        .with_description("Requisition through offer across four personas")
        .step("post-requisition")
        .step("source-candidates")
        .step("coordinate-approval")
        .step("schedule-interviews")
        .step("prepare-offer");

    HiringDemo {
        workflow,
        registry,
        broker,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mapache_core::{ExecutionState, WorkflowExecutor};

    #[tokio::test]
    async fn test_hiring_workflow_completes() {
        let temp_dir = tempfile::tempdir().unwrap();
        let demo = build("Senior Software Engineer").await;
        let executor = WorkflowExecutor::new(Arc::new(demo.registry));

        let context = mapache_core::TaskContext::new(temp_dir.path());
        let log = executor.execute(&demo.workflow, context).await.unwrap();

        assert_eq!(log.state, ExecutionState::Completed);
        assert_eq!(log.results.len(), 5);

        // The offer went to the strongest candidate
        assert_eq!(
            log.context.get_output::<String>("decision").as_deref(),
            Some("Alice Johnson")
        );
        assert_eq!(
            log.context
                .get_output::<String>("requisition_closed")
                .as_deref(),
            Some(REQUISITION_ID)
        );

        // Three of the five sourced candidates cleared the bar
        let approved: Vec<Candidate> = log.context.get_output("approved_candidates").unwrap();
        assert_eq!(approved.len(), 3);

        // Every hand-off went over the broker: assignment, progress,
        // acceptance, scheduling, offer request, completion broadcast
        let stats = demo.broker.stats().await;
        assert_eq!(stats.published, 6);
        assert_eq!(stats.dead_lettered, 0);
    }

    #[tokio::test]
    async fn test_step_messages_tell_the_story() {
        let temp_dir = tempfile::tempdir().unwrap();
        let demo = build("Staff Engineer").await;
        let executor = WorkflowExecutor::new(Arc::new(demo.registry));

        let context = mapache_core::TaskContext::new(temp_dir.path());
        let log = executor.execute(&demo.workflow, context).await.unwrap();

        let messages: Vec<_> = log
            .results
            .iter()
            .filter_map(|entry| entry.result.message.as_deref())
            .collect();

        assert!(messages[0].contains("Staff Engineer"));
        assert!(messages[1].contains("5 qualified candidates"));
        assert!(messages[2].contains("Approved 3 of 5"));
        assert!(messages[3].contains("offer to Alice Johnson"));
        assert!(messages[4].contains("requisition REQ-2024-123 closed"));
    }

    #[tokio::test]
    async fn test_retry_absorbs_sourcing_outage() {
        // The sourcing backend fails its first call; the run still completes.
        let temp_dir = tempfile::tempdir().unwrap();
        let demo = build("Senior Software Engineer").await;
        let executor = WorkflowExecutor::new(Arc::new(demo.registry));

        let context = mapache_core::TaskContext::new(temp_dir.path());
        let log = executor.execute(&demo.workflow, context).await.unwrap();

        let candidates: Vec<Candidate> = log.context.get_output("candidates").unwrap();
        assert_eq!(candidates.len(), 5);
    }
}
