//! WebSocket session with the analysis gateway.

use std::{path::Path, sync::mpsc as std_mpsc};

use futures_util::{SinkExt, StreamExt};
use lintgate_server::{
    domain::entity::ANALYZE_ACTION,
    infrastructure::dto::websocket::{AnalyzeRequestDto, AnalyzeResponseDto},
};
use rustyline::{DefaultEditor, error::ReadlineError};
use tokio::{net::TcpStream, sync::mpsc};
use tokio_tungstenite::{
    MaybeTlsStream, WebSocketStream, connect_async,
    tungstenite::{Error as WsError, protocol::Message},
};

use crate::{
    domain::{ReplAction, ReplState, build_url, language_from_path},
    error::ClientError,
    formatter::ResultFormatter,
    ui::{print_help, prompt},
};

pub type GatewayStream = WebSocketStream<MaybeTlsStream<TcpStream>>;

/// Open a WebSocket connection to the gateway.
///
/// # Errors
///
/// * `ClientError::InvalidUrl` - `url` cannot be parsed
/// * `ClientError::Unauthorized` - the gateway answered the upgrade with 401
/// * `ClientError::ConnectionError` - any other connection failure
pub async fn connect(url: &str, token: &str) -> Result<GatewayStream, ClientError> {
    match connect_async(build_url(url, token)?).await {
        Ok((stream, _)) => Ok(stream),
        Err(WsError::Http(response)) if response.status().as_u16() == 401 => {
            Err(ClientError::Unauthorized)
        }
        Err(e) => Err(ClientError::ConnectionError(e.to_string())),
    }
}

/// Send one analysis request and wait for its response.
///
/// The gateway answers requests in order, so the next text frame is the
/// answer to this request.
pub async fn analyze(
    stream: &mut GatewayStream,
    language: &str,
    code: &str,
) -> Result<AnalyzeResponseDto, ClientError> {
    let request = AnalyzeRequestDto {
        action: ANALYZE_ACTION.to_string(),
        language: language.to_string(),
        code: code.to_string(),
    };
    let json = serde_json::to_string(&request)
        .map_err(|e| ClientError::UnexpectedResponse(e.to_string()))?;

    stream
        .send(Message::Text(json.into()))
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    while let Some(frame) = stream.next().await {
        let payload = match frame {
            Ok(Message::Text(text)) => text.as_str().as_bytes().to_vec(),
            Ok(Message::Binary(bytes)) => bytes.to_vec(),
            Ok(Message::Close(_)) => break,
            Ok(_) => continue,
            Err(e) => return Err(ClientError::ConnectionError(e.to_string())),
        };
        return serde_json::from_slice(&payload)
            .map_err(|e| ClientError::UnexpectedResponse(e.to_string()));
    }

    Err(ClientError::ConnectionError(
        "Server closed the connection".to_string(),
    ))
}

/// Analyze a single file and print the result.
pub async fn run_file_session(
    url: &str,
    token: &str,
    language: Option<&str>,
    path: &Path,
) -> Result<(), ClientError> {
    let language = match language {
        Some(language) => language,
        None => language_from_path(path)
            .ok_or_else(|| ClientError::UnknownLanguage(path.display().to_string()))?,
    };
    let code = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ClientError::ReadFile {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    let mut stream = connect(url, token).await?;
    tracing::info!("Connected to {}; analyzing {} as {}", url, path.display(), language);

    let response = analyze(&mut stream, language, &code).await?;
    print!("{}", ResultFormatter::format_response(&response));

    stream.close(None).await.ok();
    Ok(())
}

/// Run the interactive editor until `:quit`, Ctrl+C or Ctrl+D.
pub async fn run_interactive_session(
    url: &str,
    token: &str,
    language: &str,
) -> Result<(), ClientError> {
    let mut stream = connect(url, token).await?;
    tracing::info!("Connected to analysis gateway!");
    println!("\nConnected. Type :help for commands.\n");

    // rustyline is synchronous: it runs on its own thread, reading one line
    // per prompt it receives and handing the line back.
    let (prompt_tx, prompt_rx) = std_mpsc::channel::<String>();
    let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();

    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                eprintln!("Failed to initialize readline: {}", e);
                return;
            }
        };

        while let Ok(prompt) = prompt_rx.recv() {
            match rl.readline(&prompt) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.as_str()).ok();
                    }
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    let mut state = ReplState::new(language);
    let _ = prompt_tx.send(prompt(state.language(), false));

    while let Some(line) = line_rx.recv().await {
        match state.handle_line(&line) {
            ReplAction::Continue => {}
            ReplAction::Submit { language, code } => {
                let response = analyze(&mut stream, &language, &code).await?;
                print!("{}", ResultFormatter::format_response(&response));
            }
            ReplAction::LanguageChanged(language) => println!("Language set to {}", language),
            ReplAction::UnknownLanguage(language) => {
                println!("Unsupported language: {}", language)
            }
            ReplAction::Help => print_help(),
            ReplAction::Quit => break,
        }

        if prompt_tx
            .send(prompt(state.language(), state.is_buffering()))
            .is_err()
        {
            break;
        }
    }

    stream.close(None).await.ok();
    Ok(())
}
