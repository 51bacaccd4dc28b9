// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Outbound notifications.
//!
//! Services never deliver notifications themselves. They enqueue a
//! [`Notification`] on a [`NotificationDispatcher`], which returns at once;
//! a background worker drains the queue into a [`Notifier`] and logs every
//! failure. Delivery problems therefore never reach the caller.

use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use time::OffsetDateTime;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tracing::{debug, info, warn};

/// The single template every notification renders with.
pub const EMAIL_TEMPLATE: &str = "email_template";

/// Notification delivery errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NotificationError {
    /// The transport refused or failed to deliver the message.
    #[error("Failed to deliver notification to {recipient}: {reason}")]
    Delivery { recipient: String, reason: String },
}

/// Values substituted into the notification template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationContext {
    pub year: i32,
    pub logo_url: Option<String>,
    pub subject: String,
    pub name: String,
    pub message: String,
    pub link: String,
    pub link_label: String,
}

/// One message to deliver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub template: String,
    pub subject: String,
    pub recipient: String,
    pub context: NotificationContext,
}

/// A notification transport.
pub trait Notifier: Send + Sync {
    /// Delivers one notification.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError::Delivery` if the transport fails.
    fn send(&self, notification: &Notification) -> Result<(), NotificationError>;
}

/// A transport that writes notifications to the log instead of sending them.
///
/// The whole rendered text is logged, so the seeded admin's temporary
/// password is readable from the server log.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotifier;

impl LoggingNotifier {
    /// Renders the plain-text body a recipient would read.
    #[must_use]
    pub fn render(notification: &Notification) -> String {
        let context: &NotificationContext = &notification.context;
        format!(
            "Hello {},\n\n{}\n\n{}: {}",
            context.name, context.message, context.link_label, context.link
        )
    }
}

impl Notifier for LoggingNotifier {
    fn send(&self, notification: &Notification) -> Result<(), NotificationError> {
        info!(
            template = %notification.template,
            subject = %notification.subject,
            recipient = %notification.recipient,
            body = %Self::render(notification),
            "Notification delivered to log"
        );
        Ok(())
    }
}

/// Queues notifications for background delivery.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    sender: UnboundedSender<Notification>,
    frontend_url: String,
    logo_url: Option<String>,
}

impl NotificationDispatcher {
    /// Creates a dispatcher and the receiving end of its queue.
    ///
    /// Hand the receiver to [`run_notification_worker`].
    #[must_use]
    pub fn new(
        frontend_url: &str,
        logo_url: Option<String>,
    ) -> (Self, UnboundedReceiver<Notification>) {
        let (sender, receiver) = unbounded_channel();
        (
            Self {
                sender,
                frontend_url: frontend_url.trim_end_matches('/').to_string(),
                logo_url,
            },
            receiver,
        )
    }

    /// The frontend base URL used for links.
    #[must_use]
    pub fn frontend_url(&self) -> &str {
        &self.frontend_url
    }

    /// Enqueues a notification without waiting for delivery.
    ///
    /// A closed queue is logged and otherwise ignored.
    pub fn notify(&self, notification: Notification) {
        let recipient: String = notification.recipient.clone();
        if self.sender.send(notification).is_err() {
            warn!(recipient = %recipient, "Notification queue closed; dropping notification");
        } else {
            debug!(recipient = %recipient, "Notification queued");
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn compose(
        &self,
        subject: &str,
        template_subject: &str,
        recipient: &str,
        name: &str,
        message: String,
        link: String,
        link_label: &str,
    ) -> Notification {
        Notification {
            template: String::from(EMAIL_TEMPLATE),
            subject: subject.to_string(),
            recipient: recipient.to_string(),
            context: NotificationContext {
                year: OffsetDateTime::now_utc().year(),
                logo_url: self.logo_url.clone(),
                subject: template_subject.to_string(),
                name: name.to_string(),
                message,
                link,
                link_label: link_label.to_string(),
            },
        }
    }

    /// Sends the account activation link to a new manual registration.
    pub fn account_activation(&self, recipient: &str, name: &str, token: &str) {
        self.notify(self.compose(
            "Account activation",
            "Activate your account",
            recipient,
            name,
            String::from(
                "Thank you for registering. Please click the button below to activate your account:",
            ),
            format!("{}/activate-account?token={token}", self.frontend_url),
            "Activate your account",
        ));
    }

    /// Sends a password reset link.
    pub fn password_reset(&self, recipient: &str, name: &str, token: &str) {
        self.notify(self.compose(
            "Password reset",
            "Password Reset",
            recipient,
            name,
            String::from(
                "We received a request to reset your password. Please click the button below to reset your password:",
            ),
            format!("{}/reset-password?token={token}", self.frontend_url),
            "Reset your password",
        ));
    }

    /// Confirms a job posting to its poster.
    pub fn job_created(&self, recipient: &str, name: &str, job_title: &str) {
        self.notify(self.compose(
            "Job creation",
            "Job Created Successfully",
            recipient,
            name,
            format!("Your job titled \"{job_title}\" has been successfully created."),
            format!("{}/login", self.frontend_url),
            "Log in to your account",
        ));
    }

    /// Confirms a submitted application to the applicant.
    pub fn application_submitted(&self, recipient: &str, name: &str, job_title: &str) {
        self.notify(self.compose(
            "Application submission",
            "Application Submitted Successfully",
            recipient,
            name,
            format!(
                "Your application for job titled \"{job_title}\" has been submitted. We will review your application and contact you if your resume matches our desired qualifications."
            ),
            format!("{}/login", self.frontend_url),
            "Log in to your account",
        ));
    }

    /// Sends the temporary password of a seeded administrator.
    pub fn admin_seeded(&self, recipient: &str, name: &str, password: &str) {
        self.notify(self.compose(
            "Super Admin Account Creation",
            "Super Admin Account Creation",
            recipient,
            name,
            format!(
                "You are the Super Admin of the job board. Here is your temporary password: {password}. Please change it after logging in."
            ),
            format!("{}/login", self.frontend_url),
            "Click to Login",
        ));
    }
}

/// Drains the notification queue into a transport until every sender is
/// dropped. Failures are logged and the loop continues.
pub async fn run_notification_worker(
    mut receiver: UnboundedReceiver<Notification>,
    notifier: Arc<dyn Notifier>,
) {
    while let Some(notification) = receiver.recv().await {
        match notifier.send(&notification) {
            Ok(()) => debug!(recipient = %notification.recipient, "Notification sent"),
            Err(e) => warn!(error = %e, "Notification delivery failed"),
        }
    }
    info!("Notification worker stopped");
}
