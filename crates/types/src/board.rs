use serde::{Deserialize, Serialize};

/// Per-board settings from `SETTING.TXT`, one `KEY=value` pair per
/// line. Order is preserved; lines without a `=` are skipped the same
/// way the index parser skips noise.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BoardSettings {
    entries: Vec<(String, String)>,
}

impl BoardSettings {
    pub fn parse(text: &str) -> BoardSettings {
        let entries = text
            .split('\n')
            .filter_map(|line| {
                let line = line.trim_end_matches('\r');
                let (key, value) = line.split_once('=')?;
                Some((key.to_string(), value.to_string()))
            })
            .collect();
        BoardSettings { entries }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Board title shown in clients (`BBS_TITLE`).
    pub fn title(&self) -> Option<&str> {
        self.get("BBS_TITLE")
    }

    pub fn title_orig(&self) -> Option<&str> {
        self.get("BBS_TITLE_ORIG")
    }

    /// Name substituted for posts with an empty name field
    /// (`BBS_NONAME_NAME`).
    pub fn noname_name(&self) -> Option<&str> {
        self.get("BBS_NONAME_NAME")
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
