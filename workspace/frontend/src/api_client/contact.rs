use common::{ClientError, ContactMessage, EMAIL_SEND_URL, EmailSendRequest, Operation};
use crate::settings;

/// Deliver a contact-form message through the transactional email service.
pub async fn send_contact_message(message: ContactMessage) -> Result<(), ClientError> {
    let settings = settings::get_settings();
    if settings.email_public_key.is_empty() {
        log::warn!("Contact form used without an email public key");
        return Err(ClientError::NotConfigured("Email public key"));
    }

    let request = EmailSendRequest {
        service_id: settings.email_service_id,
        template_id: settings.email_template_id,
        user_id: settings.email_public_key,
        template_params: message,
    };

    super::post_expect_ok(EMAIL_SEND_URL, &request, Operation::Contact).await
}
