use crate::api_client::DocumentService;
use crate::models::QueryRequest;
use crate::state::ClientState;
use crate::validation::Precondition;

/// Sends the question for the current session and renders the outcome into
/// `state.results`.
///
/// Holding `&mut ClientState` across the call serializes queries on one
/// state. Front-ends that overlap calls should use
/// [`ClientState::begin_query`] and [`ClientState::settle_query`] directly.
pub async fn submit_query<S: DocumentService>(
    service: &S,
    state: &mut ClientState,
    question: &str,
) -> Result<(), Precondition> {
    let ticket = state.begin_query(question)?;

    let request = QueryRequest {
        session_id: ticket.session_id.to_string(),
        question: ticket.question.clone(),
    };
    let outcome = service.query(&request).await;

    state.settle_query(&ticket, outcome);
    Ok(())
}
