//! SubmitQuizHandler - Command handler validating a submission and
//! forwarding the lead to the CRM.
//!
//! CRM delivery is best-effort. Once the submission validates, the command
//! succeeds; delivery problems are logged and reported in the result only.

use std::sync::Arc;

use crate::domain::foundation::{SubmissionId, Timestamp};
use crate::domain::quiz::{QuizError, QuizResult, Submission};
use crate::ports::{CrmGateway, DeliveryError, LeadContact};

/// Command carrying the raw submission fields.
#[derive(Debug, Clone, Default)]
pub struct SubmitQuizCommand {
    pub name: Option<String>,
    pub email: Option<String>,
    pub result: Option<QuizResult>,
    pub timestamp: Option<Timestamp>,
}

/// What happened to the lead after validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// No CRM configured.
    Skipped,
    /// Contact created; `tags_applied` of the lead's tags were attached.
    Delivered { tags_applied: usize },
    /// Contact creation failed.
    Failed(DeliveryError),
}

/// Result of a successful submission.
#[derive(Debug, Clone)]
pub struct SubmitQuizResult {
    pub submission_id: SubmissionId,
    pub delivery: DeliveryOutcome,
}

/// Handler for quiz submissions.
pub struct SubmitQuizHandler {
    crm: Option<Arc<dyn CrmGateway>>,
}

impl SubmitQuizHandler {
    pub fn new(crm: Option<Arc<dyn CrmGateway>>) -> Self {
        Self { crm }
    }

    pub async fn handle(&self, cmd: SubmitQuizCommand) -> Result<SubmitQuizResult, QuizError> {
        // 1. Validate
        let submission = Submission::new(cmd.name, cmd.email, cmd.result, cmd.timestamp)?;

        tracing::info!(
            submission_id = %submission.id,
            primary = %submission.result.primary,
            secondary = ?submission.result.secondary,
            "Quiz submission received"
        );

        // 2. Forward
        let delivery = match &self.crm {
            Some(crm) => self.deliver(crm.as_ref(), &submission).await,
            None => {
                tracing::warn!(
                    submission_id = %submission.id,
                    "CRM not configured, skipping lead delivery"
                );
                DeliveryOutcome::Skipped
            }
        };

        Ok(SubmitQuizResult {
            submission_id: submission.id,
            delivery,
        })
    }

    async fn deliver(&self, crm: &dyn CrmGateway, submission: &Submission) -> DeliveryOutcome {
        let contact = LeadContact::from_submission(submission, Timestamp::now().date_string());

        let contact_id = match crm.upsert_contact(&contact).await {
            Ok(id) => id,
            Err(e) => {
                tracing::error!(
                    submission_id = %submission.id,
                    error = %e,
                    retryable = e.retryable,
                    "Failed to create CRM contact"
                );
                return DeliveryOutcome::Failed(e);
            }
        };

        let Some(contact_id) = contact_id else {
            tracing::warn!(
                submission_id = %submission.id,
                "CRM returned no contact id, skipping tags"
            );
            return DeliveryOutcome::Delivered { tags_applied: 0 };
        };

        let mut tags_applied = 0;
        for tag in submission.tags() {
            match self.apply_tag(crm, &contact_id, &tag).await {
                Ok(true) => tags_applied += 1,
                Ok(false) => {
                    tracing::warn!(tag = %tag, "CRM returned no tag id, tag not attached");
                }
                Err(e) => {
                    tracing::error!(
                        submission_id = %submission.id,
                        tag = %tag,
                        error = %e,
                        "Failed to tag CRM contact"
                    );
                }
            }
        }

        tracing::info!(
            submission_id = %submission.id,
            contact_id = %contact_id,
            tags_applied,
            "Lead delivered to CRM"
        );

        DeliveryOutcome::Delivered { tags_applied }
    }

    /// Returns `Ok(false)` when the tag could not be resolved to an id.
    async fn apply_tag(
        &self,
        crm: &dyn CrmGateway,
        contact_id: &str,
        tag: &str,
    ) -> Result<bool, DeliveryError> {
        match crm.ensure_tag(tag).await? {
            Some(tag_id) => {
                crm.tag_contact(contact_id, &tag_id).await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
