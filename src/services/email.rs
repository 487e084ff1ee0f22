//! Email service for visitor notifications

use chrono::{NaiveDate, NaiveTime};
use lettre::{
    message::{header::ContentType, Mailbox, Message, MultiPart, SinglePart},
    transport::smtp::authentication::Credentials,
    SmtpTransport, Transport,
};
use std::str::FromStr;

use crate::{
    config::EmailConfig,
    error::{AppError, AppResult},
};

#[derive(Clone)]
pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Send the registration receipt with the visitor code
    pub async fn send_registration_receipt(
        &self,
        to: &str,
        visitor_name: &str,
        visitor_code: &str,
        employee_name: &str,
        visit_date: NaiveDate,
        visit_time: NaiveTime,
    ) -> AppResult<()> {
        let subject = "Your visit registration";
        let body = format!(
            r#"
Hello {name},

Your visit has been registered and is awaiting approval.

Visitor ID: {code}
Host: {host}
Date: {date}
Time: {time}

Present your visitor ID (or the QR badge from your registration) at the
security desk on arrival. You will receive another email once your
appointment has been reviewed.
"#,
            name = visitor_name,
            code = visitor_code,
            host = employee_name,
            date = visit_date,
            time = visit_time.format("%H:%M"),
        );

        self.send_email(to, subject, &body).await
    }

    /// Notify the visitor that the appointment was approved
    pub async fn send_approval_notice(
        &self,
        to: &str,
        visitor_name: &str,
        visitor_code: &str,
        visit_date: NaiveDate,
        visit_time: NaiveTime,
    ) -> AppResult<()> {
        let subject = "Your visit has been approved";
        let body = format!(
            r#"
Hello {name},

Your visit on {date} at {time} has been approved.

Bring your visitor ID ({code}) and a photo ID. Check in at the security
desk when you arrive.
"#,
            name = visitor_name,
            date = visit_date,
            time = visit_time.format("%H:%M"),
            code = visitor_code,
        );

        self.send_email(to, subject, &body).await
    }

    /// Notify the visitor that the appointment was declined
    pub async fn send_decline_notice(
        &self,
        to: &str,
        visitor_name: &str,
        visit_date: NaiveDate,
    ) -> AppResult<()> {
        let subject = "Your visit request was declined";
        let body = format!(
            r#"
Hello {name},

Unfortunately your visit request for {date} was declined.

Please contact your host to arrange another date.
"#,
            name = visitor_name,
            date = visit_date,
        );

        self.send_email(to, subject, &body).await
    }

    /// Generic email sending function
    async fn send_email(&self, to: &str, subject: &str, body: &str) -> AppResult<()> {
        let from_name = self
            .config
            .smtp_from_name
            .as_deref()
            .unwrap_or("Atrium");
        let from_mailbox = Mailbox::from_str(&format!("{} <{}>", from_name, self.config.smtp_from))
            .map_err(|e| AppError::Internal(format!("Invalid from address: {}", e)))?;

        let to_mailbox = Mailbox::from_str(to)
            .map_err(|e| AppError::Internal(format!("Invalid to address: {}", e)))?;

        let email = Message::builder()
            .from(from_mailbox)
            .to(to_mailbox)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(format!(
                                r#"<html><body><pre>{}</pre></body></html>"#,
                                body.replace("\n", "<br>")
                            )),
                    ),
            )
            .map_err(|e| AppError::Internal(format!("Failed to build email: {}", e)))?;

        let mailer_builder = if self.config.smtp_use_tls {
            // Use STARTTLS for secure connection
            SmtpTransport::starttls_relay(&self.config.smtp_host)
                .map_err(|e| AppError::Internal(format!("Failed to create SMTP transport: {}", e)))?
        } else {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
        }
        .port(self.config.smtp_port);

        let mailer_builder = if let (Some(username), Some(password)) = (
            &self.config.smtp_username,
            &self.config.smtp_password,
        ) {
            mailer_builder.credentials(Credentials::new(username.clone(), password.clone()))
        } else {
            mailer_builder
        };

        let mailer = mailer_builder.build();

        mailer
            .send(&email)
            .map_err(|e| AppError::Internal(format!("Failed to send email: {}", e)))?;

        Ok(())
    }
}
