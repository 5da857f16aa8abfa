use nichan_types::{board::BoardSettings, index::ThreadSummary, post::ThreadDetail};
use tracing::{debug, error};

use super::{
    endpoint::Endpoint,
    error::Error,
    form::{NewThreadForm, ReplyForm},
    response::ClientResponse,
};

/// Configuration for the client.
/// host: board server to talk to, `host[:port]`. (default: a local proxy)
/// use_https: Whether to use HTTPS for requests. (default: false)
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub host: Option<String>,
    pub use_https: Option<bool>,
}

impl Config {
    const DEFAULT_HOST: &'static str = "127.0.0.1:8080";
    const DEFAULT_USE_HTTPS: bool = false;
    pub fn new(host: Option<String>, use_https: Option<bool>) -> Self {
        Config { host, use_https }
    }

    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(Self::DEFAULT_HOST)
    }

    pub fn use_https(&self) -> bool {
        self.use_https.unwrap_or(Self::DEFAULT_USE_HTTPS)
    }
}

/// A client for one legacy board backend.
///
/// Every read is a single GET returning the full Shift_JIS payload,
/// decoded and reparsed from scratch; nothing is cached, retried or
/// rate limited, and writes go through `bbs.cgi` as one form POST.
#[derive(Debug, Clone)]
pub struct Client {
    cfg: Config,
    http: reqwest::Client,
}

impl Client {
    /// Header telling the backend to emit the author-id-augmented
    /// index format instead of the bare one.
    const AUTHOR_ID_HEADER: &'static str = "X-ThreadList-AuthorId-Supported";

    pub fn new(cfg: Option<Config>) -> Self {
        Self {
            cfg: cfg.unwrap_or_default(),
            http: reqwest::Client::new(),
        }
    }

    fn new_request(&self, endpoint: &Endpoint) -> reqwest::RequestBuilder {
        let url = endpoint.url(self.cfg.host(), self.cfg.use_https());
        let mut request = self.http.get(url);
        if let Endpoint::Subject(_) = endpoint {
            request = request.header(Self::AUTHOR_ID_HEADER, "true");
        }
        request
    }

    pub async fn get(&self, endpoint: &Endpoint) -> Result<ClientResponse, Error> {
        debug!(
            "Sending request to {}",
            endpoint.url(self.cfg.host(), self.cfg.use_https())
        );
        self.handle_response(endpoint, self.new_request(endpoint).send().await?)
            .await
    }

    async fn handle_response(
        &self,
        endpoint: &Endpoint,
        resp: reqwest::Response,
    ) -> Result<ClientResponse, Error> {
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", endpoint, status);
            let body = resp.bytes().await?;
            Ok(ClientResponse::parse(endpoint, &body)?)
        } else {
            error!("request {} status: {}", endpoint, status);
            Err(Error::StatusCode(status.to_string()))
        }
    }

    pub async fn get_index(&self, board: &str) -> Result<Vec<ThreadSummary>, Error> {
        match self.get(&Endpoint::Subject(board.to_string())).await? {
            ClientResponse::Index(threads) => Ok(threads),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_thread(&self, board: &str, thread: i64) -> Result<ThreadDetail, Error> {
        match self.get(&Endpoint::Dat(board.to_string(), thread)).await? {
            ClientResponse::Thread(thread) => Ok(thread),
            _ => Err(Error::InvalidResponse),
        }
    }

    pub async fn get_settings(&self, board: &str) -> Result<BoardSettings, Error> {
        match self.get(&Endpoint::Settings(board.to_string())).await? {
            ClientResponse::Settings(settings) => Ok(settings),
            _ => Err(Error::InvalidResponse),
        }
    }

    /// Submits a reply to an existing thread. Success carries no
    /// payload; the caller refreshes whatever thread state it shows.
    pub async fn post_reply(
        &self,
        board: &str,
        thread: i64,
        name: &str,
        mail: &str,
        body: &str,
    ) -> Result<(), Error> {
        self.post_form(ReplyForm::new(board, thread, name, mail, body).encode())
            .await
    }

    /// Opens a new thread on the board.
    pub async fn create_thread(
        &self,
        board: &str,
        subject: &str,
        name: &str,
        mail: &str,
        body: &str,
    ) -> Result<(), Error> {
        self.post_form(NewThreadForm::new(board, subject, name, mail, body).encode())
            .await
    }

    async fn post_form(&self, payload: String) -> Result<(), Error> {
        let url = Endpoint::BbsCgi.url(self.cfg.host(), self.cfg.use_https());
        debug!("Posting form to {}", url);
        let resp = self
            .http
            .post(url)
            .header(
                reqwest::header::CONTENT_TYPE,
                "application/x-www-form-urlencoded",
            )
            .body(payload)
            .send()
            .await?;
        let status = resp.status();
        if status.is_success() {
            debug!("request: {} status: {}", Endpoint::BbsCgi, status);
            Ok(())
        } else {
            error!("request {} status: {}", Endpoint::BbsCgi, status);
            Err(Error::StatusCode(status.to_string()))
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new(None)
    }
}
