use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::Error;

/// A full thread as reassembled from its `.dat` file. The title lives
/// only on the first line of the wire format and is lifted out here.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ThreadDetail {
    pub title: String,
    pub posts: Vec<Post>,
}

/// One response line of a `.dat` file:
/// `{name}<>{mail}<>{date} ID:{author_id}<>{body}<>{extra}`.
///
/// `body` is carried raw, embedded markup included; rendering layers
/// decide whether to trust it or run it through
/// [`plain_body`](Post::plain_body).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// 1-based position within the thread.
    pub id: i32,
    pub name: String,
    pub mail: String,
    pub date: String,
    pub author_id: String,
    pub body: String,
}

fn dat_line_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^(.*)<>(.*)<>(.*) ID:(.*)<>(.*)<>(.*)$").unwrap())
}

impl Post {
    /// Markup-free rendition of the body: `<br>` back to newlines, tags
    /// stripped, entities decoded. Falls back to the raw body when
    /// entity decoding fails.
    pub fn plain_body(&self) -> String {
        crate::utils::strip_markup(&self.body).unwrap_or_else(|_| self.body.clone())
    }

    fn from_line(line: &str, idx: usize) -> Result<(Post, &str), Error> {
        let caps = dat_line_re()
            .captures(line)
            .ok_or_else(|| Error::InvalidLine(line.to_string()))?;
        let post = Post {
            id: idx as i32 + 1,
            name: caps[1].to_string(),
            mail: caps[2].to_string(),
            date: caps[3].to_string(),
            author_id: caps[4].to_string(),
            body: caps[5].to_string(),
        };
        let extra = caps.get(6).map(|m| m.as_str()).unwrap_or_default();
        Ok((post, extra))
    }
}

/// Parses a full `.dat` payload into the thread title and its posts.
///
/// Trailing `\r`s are stripped per line, so a CRLF payload parses like
/// the LF one the backend emits. Empty lines are then filtered out
/// before matching; post ids are 1-based positions in the filtered
/// sequence. Unlike the index parser, a line that fails to match aborts
/// the whole parse: every `.dat` line is expected to be a well-formed
/// post, so a bad one means the response is corrupt.
pub fn parse_dat(text: &str) -> Result<ThreadDetail, Error> {
    let mut title = String::new();
    let mut posts = Vec::new();
    for (idx, line) in text
        .split('\n')
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .enumerate()
    {
        let (post, extra) = Post::from_line(line, idx)?;
        if idx == 0 {
            title = extra.to_string();
        }
        posts.push(post);
    }
    debug!("parsed .dat: {} posts, title {:?}", posts.len(), title);
    Ok(ThreadDetail { title, posts })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tracing_test::traced_test]
    #[test]
    fn test_parse_single_line() {
        let text = "Anon<>sage<>2023/11/14 12:00:00 ID:xyz123<>first post body<>Thread Title";
        let thread = parse_dat(text).unwrap();
        assert_eq!(thread.title, "Thread Title");
        assert_eq!(thread.posts.len(), 1);
        let post = &thread.posts[0];
        assert_eq!(post.id, 1);
        assert_eq!(post.name, "Anon");
        assert_eq!(post.mail, "sage");
        assert_eq!(post.date, "2023/11/14 12:00:00");
        assert_eq!(post.author_id, "xyz123");
        assert_eq!(post.body, "first post body");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_title_only_lifted_from_first_line() {
        let text = "Anon<><>2023/11/14 12:00:00 ID:aaa111<>op body<>Real Title\n\
                    Anon<>sage<>2023/11/14 12:05:00 ID:bbb222<>reply body<>\n\
                    Anon<><>2023/11/14 12:10:00 ID:ccc333<>third body<>Fake Title";
        let thread = parse_dat(text).unwrap();
        assert_eq!(thread.title, "Real Title");
        assert_eq!(thread.posts[1].mail, "sage");
        assert_eq!(thread.posts[2].body, "third body");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_ids_follow_filtered_line_positions() {
        let text = "\nA<><>d ID:id1<>one<>T\n\nB<><>d ID:id2<>two<>\n\n";
        let thread = parse_dat(text).unwrap();
        assert_eq!(thread.posts.len(), 2);
        assert_eq!(thread.posts[0].id, 1);
        assert_eq!(thread.posts[1].id, 2);
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_malformed_line_aborts_whole_parse() {
        let text = "A<><>d ID:id1<>one<>T\n\
                    B<><>d ID:id2<>two<>\n\
                    C<><>d id3<>three<>";
        let err = parse_dat(text).unwrap_err();
        assert!(matches!(err, Error::InvalidLine(_)));
        assert_eq!(err.to_string(), "Invalid response line: C<><>d id3<>three<>");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_crlf_line_endings_are_normalized() {
        let text = "A<><>d ID:id1<>one<>T\r\nB<><>d ID:id2<>two<>\r\n";
        let thread = parse_dat(text).unwrap();
        assert_eq!(thread.title, "T");
        assert_eq!(thread.posts.len(), 2);
        assert_eq!(thread.posts[1].body, "two");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_empty_input_yields_empty_thread() {
        let thread = parse_dat("").unwrap();
        assert_eq!(thread.title, "");
        assert!(thread.posts.is_empty());
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_body_markup_passes_through_raw() {
        let text = "A<><>d ID:id1<>line one<br>line two &quot;quoted&quot;<>T";
        let thread = parse_dat(text).unwrap();
        assert_eq!(
            thread.posts[0].body,
            "line one<br>line two &quot;quoted&quot;"
        );
        assert_eq!(thread.posts[0].plain_body(), "line one\nline two \"quoted\"");
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_body_may_contain_id_marker() {
        let text = "A<><>2023/11/14 12:00:00 ID:real<>my ID:fake is cool<>T";
        let thread = parse_dat(text).unwrap();
        assert_eq!(thread.posts[0].author_id, "real");
        assert_eq!(thread.posts[0].body, "my ID:fake is cool");
    }
}
