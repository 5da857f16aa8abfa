use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub enum Endpoint {
    /// Per-board thread index, `subject.txt`.
    Subject(String),
    /// Per-thread datastore, `dat/{thread}.dat`.
    Dat(String, i64),
    /// Per-board settings table, `SETTING.TXT`.
    Settings(String),
    /// The write endpoint shared by replies and new threads.
    BbsCgi,
}

impl Endpoint {
    pub fn http(&self, host: &str) -> String {
        format!("http://{}{}", host, self)
    }

    pub fn https(&self, host: &str) -> String {
        format!("https://{}{}", host, self)
    }

    pub fn url(&self, host: &str, https: bool) -> String {
        if https {
            self.https(host)
        } else {
            self.http(host)
        }
    }
}

impl Display for Endpoint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Subject(board) => format!("/{}/subject.txt", board),
                Self::Dat(board, thread) => format!("/{}/dat/{}.dat", board, thread),
                Self::Settings(board) => format!("/{}/SETTING.TXT", board),
                Self::BbsCgi => "/test/bbs.cgi".to_string(),
            }
        )
    }
}
