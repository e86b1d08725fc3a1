// Enroll Use Case

use super::request::EnrollRequest;
use crate::application::sequencer::TokenSequencer;
use crate::domain::Token;
use crate::error::Result;
use crate::port::{TimeProvider, TokenRepository};
use tracing::{info, warn};

/// Execute enroll use case (read-max-then-insert under the sequencer lock)
///
/// # Arguments
///
/// * `token_repo` - Token repository
/// * `sequencer` - Token sequencer guarding number allocation
/// * `time_provider` - Time provider (injected for determinism)
/// * `queue_id` - Target queue (existence is not checked)
/// * `req` - Holder details
///
/// Returns the persisted token. Fails without writing anything when either
/// the max-read or the insert fails.
pub async fn execute(
    token_repo: &dyn TokenRepository,
    sequencer: &TokenSequencer,
    time_provider: &dyn TimeProvider,
    queue_id: &str,
    req: EnrollRequest,
) -> Result<Token> {
    req.validate()?;

    let mut token = Token::new(req.name, time_provider.now_millis());
    token.contact_number = req.contact_number;
    token.email_id = req.email_id;
    token.queue_id = queue_id.to_string();

    // Lock is held from here until `reservation` is dropped
    let reservation = sequencer.next_number(queue_id).await?;
    token.token_number = reservation.number();

    let inserted = token_repo.insert(&token).await;
    drop(reservation);

    match inserted {
        Ok(id) => {
            token.id = id;
            info!(
                queue_id = %token.queue_id,
                token_id = %token.id,
                token_number = token.token_number,
                "Token enrolled"
            );
            Ok(token)
        }
        Err(e) => {
            warn!(
                queue_id = %queue_id,
                token_number = token.token_number,
                error = %e,
                "Token insert failed, number not issued"
            );
            Err(e)
        }
    }
}
