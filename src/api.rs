//! Requests and responses for driving a [`SessionStore`] over any
//! transport.
//!
//! Messages are JSON objects. A request names its kind in a `type` field:
//!
//! ```text
//! {"type":"createGame","mode":"host-cheat","maxGuesses":6,"hardMode":false}
//! {"type":"submitGuess","sessionId":"k3v9q0za","guess":"crane"}
//! ```
//!
//! Failures come back as `{"error": <message>, "status": <code>}`, where the
//! code is 404 for an unknown session and 400 for everything else.

use std::error::Error;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::{
    GameConfig, GuessOutcome, Mode, Result, SessionId, SessionStore, WordList, WordleError,
};

/// A message sent to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(crate = "serde_crate", tag = "type", rename_all = "camelCase")]
pub enum Request {
    /// Starts a game. Anything left out takes the mode's default, and
    /// `words` replaces the host's word list for this game only.
    #[serde(rename_all = "camelCase")]
    CreateGame {
        #[serde(default)]
        mode: Mode,
        #[serde(default)]
        max_guesses: Option<usize>,
        #[serde(default)]
        hard_mode: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        words: Option<Vec<String>>,
    },

    #[serde(rename_all = "camelCase")]
    SubmitGuess { session_id: SessionId, guess: String },
}

/// A message sent back from the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(crate = "serde_crate", untagged)]
pub enum Response {
    #[serde(rename_all = "camelCase")]
    Created { session_id: SessionId },
    Guess(GuessOutcome),
    Error { error: String, status: u16 },
}

impl From<&WordleError> for Response {
    fn from(err: &WordleError) -> Self {
        let error = match err.source() {
            Some(source) => format!("{}: {}", err, source),
            None => err.to_string(),
        };

        Response::Error {
            error,
            status: err.status().code(),
        }
    }
}

/// Carries out one request against `store`.
pub fn dispatch<R: Rng>(store: &SessionStore<R>, request: Request) -> Response {
    let res = match request {
        Request::CreateGame {
            mode,
            max_guesses,
            hard_mode,
            words,
        } => create_game(store, mode, max_guesses, hard_mode, words),
        Request::SubmitGuess { session_id, guess } => store
            .submit_guess(&session_id, &guess)
            .map(Response::Guess)
            .map_err(WordleError::from),
    };

    res.unwrap_or_else(|err| Response::from(&err))
}

fn create_game<R: Rng>(
    store: &SessionStore<R>,
    mode: Mode,
    max_guesses: Option<usize>,
    hard_mode: bool,
    words: Option<Vec<String>>,
) -> Result<Response> {
    let mut config = GameConfig::new(mode).hard_mode(hard_mode);
    if let Some(n) = max_guesses {
        config = config.max_guesses(n);
    }

    let session_id = match words {
        Some(words) => store.create_with_words(config, &WordList::from_words(words)?)?,
        None => store.create(config)?,
    };

    Ok(Response::Created { session_id })
}

/// Answers one line of JSON with one line of JSON.
///
/// A line that is not a valid request gets an error response rather than
/// an `Err`; only a failure to serialize the response is returned.
///
/// # Examples
///
/// ```rust
/// use wordle_host::{api::handle_line, SessionStore, WordList};
///
/// let store = SessionStore::new(WordList::from_words(["panic"])?);
/// let reply = handle_line(&store, r#"{"type":"createGame","mode":"normal"}"#)?;
/// assert!(reply.starts_with(r#"{"sessionId":"#));
///
/// let reply = handle_line(&store, "not json")?;
/// assert!(reply.contains(r#""status":400"#));
/// #
/// # Ok::<_, wordle_host::WordleError>(())
/// ```
pub fn handle_line<R: Rng>(store: &SessionStore<R>, line: &str) -> Result<String> {
    let response = match serde_json::from_str::<Request>(line) {
        Ok(request) => dispatch(store, request),
        Err(err) => Response::from(&WordleError::from(err)),
    };

    Ok(serde_json::to_string(&response)?)
}
