use crate::api_client::DocumentService;
use crate::document::DocumentFile;
use crate::session::SessionId;
use crate::state::ClientState;
use crate::validation::{validate_upload, Precondition};
use std::path::Path;

/// Uploads the selected file under a freshly generated session.
///
/// With no file selected the status asks for one and nothing is sent.
/// Transport, server and file-read failures all land in the status line as
/// `Error: <message>`; the previous session (if any) survives a failure.
pub async fn upload_document<S: DocumentService>(
    service: &S,
    state: &mut ClientState,
    file: Option<&Path>,
) -> Result<(), Precondition> {
    let file_path = match validate_upload(file) {
        Ok(path) => path,
        Err(precondition) => {
            state.status = precondition.message().to_string();
            return Err(precondition);
        }
    };

    let session_id = SessionId::generate();
    state.begin_upload();

    let outcome = match DocumentFile::read(file_path).await {
        Ok(document) => service.upload_document(&session_id, document).await,
        Err(err) => Err(err),
    };

    state.finish_upload(session_id, outcome);
    Ok(())
}
