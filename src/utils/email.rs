use lettre::message::{MultiPart, SinglePart, header};
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use rust_decimal::Decimal;
use tracing::instrument;

use crate::config::email::EmailConfig;
use crate::utils::errors::AppError;

pub struct EmailService {
    config: EmailConfig,
}

impl EmailService {
    pub fn new(config: EmailConfig) -> Self {
        Self { config }
    }

    /// Order confirmation sent to the purchaser after the order has
    /// been committed. Callers dispatch this from a detached task; a
    /// failure here never reaches the order response.
    #[instrument(skip(self))]
    pub async fn send_order_confirmation(
        &self,
        to_email: &str,
        to_name: &str,
        order_number: &str,
        total: Decimal,
    ) -> Result<(), AppError> {
        let html_body = self.order_confirmation_template(to_name, order_number, total);
        let text_body = format!(
            "Hi {},\n\n\
             Thanks for your order!\n\n\
             Order number: {}\n\
             Order total: {}\n\n\
             We'll let you know as soon as it ships.\n\n\
             Best regards,\n\
             The Shopwright Team",
            to_name, order_number, total
        );

        self.send_email(
            to_email,
            &format!("Order confirmation - {}", order_number),
            &text_body,
            &html_body,
        )
        .await
    }

    /// Notification to the store's admin address when a new order
    /// lands.
    #[instrument(skip(self))]
    pub async fn send_admin_order_notification(
        &self,
        order_number: &str,
        customer_email: &str,
        total: Decimal,
    ) -> Result<(), AppError> {
        let text_body = format!(
            "New order received.\n\n\
             Order number: {}\n\
             Customer: {}\n\
             Total: {}\n",
            order_number, customer_email, total
        );
        let html_body = format!(
            "<h2>New order received</h2>\
             <p><strong>Order number:</strong> {}</p>\
             <p><strong>Customer:</strong> {}</p>\
             <p><strong>Total:</strong> {}</p>",
            order_number, customer_email, total
        );

        let admin_email = self.config.admin_email.clone();
        self.send_email(
            &admin_email,
            &format!("New order {}", order_number),
            &text_body,
            &html_body,
        )
        .await
    }

    #[instrument(skip(self, text_body, html_body))]
    async fn send_email(
        &self,
        to_email: &str,
        subject: &str,
        text_body: &str,
        html_body: &str,
    ) -> Result<(), AppError> {
        if !self.config.enabled {
            tracing::debug!(to = %to_email, subject = %subject, "SMTP disabled, skipping email");
            return Ok(());
        }

        let from = format!("{} <{}>", self.config.from_name, self.config.from_email);

        let email = Message::builder()
            .from(
                from.parse()
                    .map_err(|e| AppError::internal_error(format!("Invalid from email: {}", e)))?,
            )
            .to(to_email
                .parse()
                .map_err(|e| AppError::internal_error(format!("Invalid to email: {}", e)))?)
            .subject(subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_PLAIN)
                            .body(text_body.to_string()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(header::ContentType::TEXT_HTML)
                            .body(html_body.to_string()),
                    ),
            )
            .map_err(|e| AppError::internal_error(format!("Failed to build email: {}", e)))?;

        let mailer = if self.config.smtp_username.is_empty() {
            SmtpTransport::builder_dangerous(&self.config.smtp_host)
                .port(self.config.smtp_port)
                .build()
        } else {
            let creds = Credentials::new(
                self.config.smtp_username.clone(),
                self.config.smtp_password.clone(),
            );

            SmtpTransport::relay(&self.config.smtp_host)
                .map_err(|e| {
                    AppError::internal_error(format!("Failed to create SMTP relay: {}", e))
                })?
                .port(self.config.smtp_port)
                .credentials(creds)
                .build()
        };

        tokio::task::spawn_blocking(move || mailer.send(&email))
            .await
            .map_err(|e| AppError::internal_error(format!("Task join error: {}", e)))?
            .map_err(|e| AppError::internal_error(format!("Failed to send email: {}", e)))?;

        Ok(())
    }

    fn order_confirmation_template(
        &self,
        name: &str,
        order_number: &str,
        total: Decimal,
    ) -> String {
        format!(
            r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>Order Confirmation</title>
</head>
<body style="margin: 0; padding: 0; font-family: Arial, sans-serif; background-color: #f4f4f4;">
    <table width="100%" cellpadding="0" cellspacing="0" style="background-color: #f4f4f4; padding: 20px;">
        <tr>
            <td align="center">
                <table width="600" cellpadding="0" cellspacing="0" style="background-color: #ffffff; border-radius: 8px; overflow: hidden;">
                    <tr>
                        <td style="background-color: #0F766E; padding: 30px; text-align: center;">
                            <h1 style="margin: 0; color: #ffffff; font-size: 28px;">Shopwright</h1>
                        </td>
                    </tr>
                    <tr>
                        <td style="padding: 40px 30px;">
                            <h2 style="margin: 0 0 20px 0; color: #333333; font-size: 24px;">Thanks for your order!</h2>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                Hi <strong>{}</strong>,
                            </p>
                            <p style="margin: 0 0 20px 0; color: #666666; font-size: 16px; line-height: 1.5;">
                                We've received your order <strong>{}</strong> and are getting it ready.
                            </p>
                            <p style="margin: 0 0 20px 0; color: #333333; font-size: 18px;">
                                Order total: <strong>{}</strong>
                            </p>
                            <p style="margin: 0; color: #666666; font-size: 14px; line-height: 1.5;">
                                We'll send another email as soon as your order ships.
                            </p>
                        </td>
                    </tr>
                    <tr>
                        <td style="background-color: #f8f9fa; padding: 20px 30px; text-align: center; border-top: 1px solid #e9ecef;">
                            <p style="margin: 0; color: #999999; font-size: 12px;">
                                This is an automated email from Shopwright. Please do not reply.
                            </p>
                        </td>
                    </tr>
                </table>
            </td>
        </tr>
    </table>
</body>
</html>"#,
            name, order_number, total
        )
    }
}
