use std::path::{Path, PathBuf};

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use tracing::debug;

use crate::calc::{self, outcome, Outcome};
use crate::http::parser::{parse_http_request, ParseError};
use crate::http::request::{Request, Route};
use crate::http::response::Response;
use crate::http::writer::ResponseWriter;

/// Largest request payload taken from a single read.
pub const READ_BUFFER_SIZE: usize = 4095;

pub struct Connection<S> {
    stream: S,
    index_file: PathBuf,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Processing(Result<Request, ParseError>),
    Writing(ResponseWriter),
    Closed,
}

impl<S> Connection<S>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    pub fn new(stream: S, index_file: PathBuf) -> Self {
        Self {
            stream,
            index_file,
            state: ConnectionState::Reading,
        }
    }

    /// Serves exactly one request, then closes the stream.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    self.state = match self.read_request().await {
                        Some(parsed) => ConnectionState::Processing(parsed),
                        None => ConnectionState::Closed,
                    };
                }

                ConnectionState::Processing(parsed) => {
                    let response = match parsed {
                        Ok(req) => Self::handle_request(req, &self.index_file).await,
                        Err(e) => {
                            debug!(error = ?e, "Unparseable request line");
                            Response::json(&Outcome::failure(outcome::INVALID_REQUEST))
                        }
                    };

                    self.state = ConnectionState::Writing(ResponseWriter::new(&response));
                }

                ConnectionState::Writing(writer) => {
                    let result = writer.write_to_stream(&mut self.stream).await;
                    if result.is_ok() {
                        debug!(bytes = writer.as_bytes().len(), "Response written");
                    }
                    self.state = ConnectionState::Closed;
                    result?;
                }

                ConnectionState::Closed => {
                    let _ = self.stream.shutdown().await;
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads once. `None` means the peer closed or the read failed, and no
    /// response should be attempted.
    async fn read_request(&mut self) -> Option<Result<Request, ParseError>> {
        let mut buf = [0u8; READ_BUFFER_SIZE];

        match self.stream.read(&mut buf).await {
            Ok(0) => {
                debug!("Client closed connection before sending a request");
                None
            }
            Ok(n) => Some(parse_http_request(&buf[..n])),
            Err(e) => {
                debug!(error = %e, "Read failed");
                None
            }
        }
    }

    pub async fn handle_request(req: &Request, index_file: &Path) -> Response {
        debug!(method = ?req.method, path = %req.path, "Handling request");

        match req.route() {
            Route::Preflight => Response::preflight(),
            Route::Index => match tokio::fs::read(index_file).await {
                Ok(contents) => Response::html(contents),
                Err(e) => {
                    debug!(file = %index_file.display(), error = %e, "Index file unavailable");
                    Response::not_found()
                }
            },
            Route::Compute => {
                let body = req.body_text().unwrap_or_default();
                let result = compute(&body);
                debug!(
                    content_type = req.header("Content-Type").unwrap_or("-"),
                    success = result.is_success(),
                    "Computed"
                );
                Response::json(&result)
            }
            Route::Unknown => Response::json(&Outcome::failure(outcome::INVALID_REQUEST)),
        }
    }
}

/// Runs a compute request body through the message parser and evaluator.
pub fn compute(body: &str) -> Outcome {
    match calc::parse_operation(body) {
        Ok(op) => calc::evaluate(op.operand1, op.operator, op.operand2),
        Err(e) => {
            debug!(error = %e, "Rejected compute body");
            Outcome::failure(outcome::INVALID_JSON)
        }
    }
}
