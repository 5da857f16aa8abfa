use nichan_api::{client::Client, error::Error};
use nichan_types::{
    index::ThreadSummary,
    post::{Post, ThreadDetail},
};
use tracing::{debug, error};

use super::loadable::{Loadable, ViewState};

/// One board's thread list, as an index page shows it.
#[derive(Debug, Clone)]
pub struct ThreadListView {
    board: String,
    state: ViewState<Vec<ThreadSummary>>,
}

impl ThreadListView {
    pub fn new(board: &str) -> Self {
        ThreadListView {
            board: board.to_string(),
            state: ViewState::new(),
        }
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn state(&self) -> &Loadable<Vec<ThreadSummary>> {
        self.state.state()
    }

    /// The threads of the latest successful fetch, in the order the
    /// index lists them. Empty while nothing is loaded.
    pub fn threads(&self) -> &[ThreadSummary] {
        self.state
            .state()
            .value()
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Refetches the board index and stores the outcome, `Failed` state
    /// included. Nothing is retried.
    pub async fn refresh(&mut self, client: &Client) {
        debug!("Refreshing thread list for board {}", self.board);
        let token = self.state.begin();
        let result = client.get_index(&self.board).await;
        if let Err(ref e) = result {
            error!("Error refreshing thread list for {}: {}", self.board, e);
        }
        self.state.finish(token, result.map_err(|e| e.to_string()));
    }
}

/// One open thread plus the reply box under it.
#[derive(Debug, Clone)]
pub struct ThreadView {
    board: String,
    thread: i64,
    state: ViewState<ThreadDetail>,
}

impl ThreadView {
    pub fn new(board: &str, thread: i64) -> Self {
        ThreadView {
            board: board.to_string(),
            thread,
            state: ViewState::new(),
        }
    }

    pub fn board(&self) -> &str {
        &self.board
    }

    pub fn thread(&self) -> i64 {
        self.thread
    }

    pub fn state(&self) -> &Loadable<ThreadDetail> {
        self.state.state()
    }

    pub fn title(&self) -> &str {
        self.state
            .state()
            .value()
            .map(|detail| detail.title.as_str())
            .unwrap_or_default()
    }

    pub fn posts(&self) -> &[Post] {
        self.state
            .state()
            .value()
            .map(|detail| detail.posts.as_slice())
            .unwrap_or_default()
    }

    pub async fn refresh(&mut self, client: &Client) {
        debug!("Refreshing thread {}/{}", self.board, self.thread);
        let token = self.state.begin();
        let result = client.get_thread(&self.board, self.thread).await;
        if let Err(ref e) = result {
            error!(
                "Error refreshing thread {}/{}: {}",
                self.board, self.thread, e
            );
        }
        self.state.finish(token, result.map_err(|e| e.to_string()));
    }

    /// Submits a reply, then refetches the thread: the write endpoint
    /// returns no payload, so the new post only shows up in a fresh
    /// `.dat`. A failed submission is returned as-is and the view keeps
    /// whatever it was showing.
    pub async fn post_reply(
        &mut self,
        client: &Client,
        name: &str,
        mail: &str,
        body: &str,
    ) -> Result<(), Error> {
        client
            .post_reply(&self.board, self.thread, name, mail, body)
            .await?;
        self.refresh(client).await;
        Ok(())
    }
}
