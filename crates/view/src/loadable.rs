/// Where a view's data currently stands.
#[derive(Debug, Clone, PartialEq)]
pub enum Loadable<T> {
    /// No fetch started yet.
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> Loadable<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Loadable::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Holder for the result of the latest fetch of one view.
///
/// `begin` hands out a generation token per fetch; `finish` stores
/// whichever result arrives last, matching the legacy client where a
/// slow earlier fetch can overwrite a faster later one. The returned
/// flag tells the caller when that happened, so the race is observable
/// instead of silent.
#[derive(Debug, Clone)]
pub struct ViewState<T> {
    generation: u64,
    state: Loadable<T>,
}

impl<T> ViewState<T> {
    pub fn new() -> Self {
        ViewState {
            generation: 0,
            state: Loadable::Idle,
        }
    }

    pub fn state(&self) -> &Loadable<T> {
        &self.state
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Starts a fetch: moves to `Loading` and returns the token the
    /// matching `finish` call should present.
    pub fn begin(&mut self) -> u64 {
        self.generation += 1;
        self.state = Loadable::Loading;
        self.generation
    }

    /// Stores a fetch result, unconditionally. Returns `false` when
    /// `token` is not the newest fetch, i.e. this write clobbered a
    /// more recent request's turn.
    pub fn finish(&mut self, token: u64, result: Result<T, String>) -> bool {
        self.state = match result {
            Ok(value) => Loadable::Loaded(value),
            Err(message) => Loadable::Failed(message),
        };
        token == self.generation
    }
}

impl<T> Default for ViewState<T> {
    fn default() -> Self {
        Self::new()
    }
}
