use super::charset::sjis_form_value;

/// Payload for replying to an existing thread through `bbs.cgi`.
///
/// Field order and keys are fixed by the backend:
/// `submit, mail, FROM, MESSAGE, bbs, key`. Free-text fields and the
/// submit-button label travel as percent-encoded Shift_JIS bytes.
#[derive(Debug, Clone, PartialEq)]
pub struct ReplyForm {
    pub board: String,
    pub thread: i64,
    pub name: String,
    pub mail: String,
    pub body: String,
}

impl ReplyForm {
    const SUBMIT_LABEL: &'static str = "書き込む";

    pub fn new(board: &str, thread: i64, name: &str, mail: &str, body: &str) -> Self {
        ReplyForm {
            board: board.to_string(),
            thread,
            name: name.to_string(),
            mail: mail.to_string(),
            body: body.to_string(),
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "submit={}&mail={}&FROM={}&MESSAGE={}&bbs={}&key={}",
            sjis_form_value(Self::SUBMIT_LABEL),
            sjis_form_value(&self.mail),
            sjis_form_value(&self.name),
            sjis_form_value(&self.body),
            sjis_form_value(&self.board),
            self.thread,
        )
    }
}

/// Payload for opening a new thread: same endpoint, `subject` instead
/// of `key`, and its own submit-button label.
#[derive(Debug, Clone, PartialEq)]
pub struct NewThreadForm {
    pub board: String,
    pub subject: String,
    pub name: String,
    pub mail: String,
    pub body: String,
}

impl NewThreadForm {
    const SUBMIT_LABEL: &'static str = "新規スレッド作成";

    pub fn new(board: &str, subject: &str, name: &str, mail: &str, body: &str) -> Self {
        NewThreadForm {
            board: board.to_string(),
            subject: subject.to_string(),
            name: name.to_string(),
            mail: mail.to_string(),
            body: body.to_string(),
        }
    }

    pub fn encode(&self) -> String {
        format!(
            "submit={}&subject={}&mail={}&FROM={}&MESSAGE={}&bbs={}",
            sjis_form_value(Self::SUBMIT_LABEL),
            sjis_form_value(&self.subject),
            sjis_form_value(&self.mail),
            sjis_form_value(&self.name),
            sjis_form_value(&self.body),
            sjis_form_value(&self.board),
        )
    }
}
