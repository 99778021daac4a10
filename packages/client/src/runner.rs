//! Client entry point: single-file mode or the interactive editor.

use std::path::PathBuf;

use crate::{domain::DEFAULT_LANGUAGE, error::ClientError, session};

/// Options collected from the command line
#[derive(Debug, Clone)]
pub struct ClientOptions {
    pub url: String,
    pub token: String,
    pub language: Option<String>,
    pub file: Option<PathBuf>,
}

/// Run the client in the mode selected by `options`
pub async fn run_client(options: ClientOptions) -> Result<(), ClientError> {
    match &options.file {
        Some(path) => {
            session::run_file_session(
                &options.url,
                &options.token,
                options.language.as_deref(),
                path,
            )
            .await
        }
        None => {
            let language = options.language.as_deref().unwrap_or(DEFAULT_LANGUAGE);
            session::run_interactive_session(&options.url, &options.token, language).await
        }
    }
}
