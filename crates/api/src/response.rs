use super::{charset::decode_sjis, endpoint::Endpoint, error::Error};
use nichan_types::{
    board::BoardSettings,
    index::{parse_subject, ThreadSummary},
    post::{parse_dat, ThreadDetail},
};

#[derive(Debug, Clone)]
pub enum ClientResponse {
    Index(Vec<ThreadSummary>),
    Thread(ThreadDetail),
    Settings(BoardSettings),
    /// `bbs.cgi` acknowledged the write; its HTML body carries nothing
    /// the client reads.
    Posted,
}

impl ClientResponse {
    /// Decodes a raw Shift_JIS response body and hands it to the parser
    /// matching the endpoint it came from.
    pub fn parse(endpoint: &Endpoint, body: &[u8]) -> Result<Self, Error> {
        let text = decode_sjis(body);
        match endpoint {
            Endpoint::Subject(_) => Ok(ClientResponse::Index(parse_subject(&text))),
            Endpoint::Dat(_, _) => Ok(ClientResponse::Thread(parse_dat(&text)?)),
            Endpoint::Settings(_) => Ok(ClientResponse::Settings(BoardSettings::parse(&text))),
            Endpoint::BbsCgi => Ok(ClientResponse::Posted),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::charset::encode_sjis;

    #[tracing_test::traced_test]
    #[test]
    fn test_parse_subject_bytes() {
        let body = encode_sjis("1700000000.dat<>実況スレ [abcd1234★] (512)\n");
        let parsed = ClientResponse::parse(&Endpoint::Subject("news".to_string()), &body).unwrap();
        match parsed {
            ClientResponse::Index(threads) => {
                assert_eq!(threads.len(), 1);
                assert_eq!(threads[0].title, "実況スレ");
                assert_eq!(threads[0].response_count, 512);
            }
            _ => panic!("expected index response"),
        }
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_parse_dat_bytes() {
        let body = encode_sjis(
            "名無し<><>2023/11/14 12:00:00 ID:abc123<>本文です<>スレタイ\n",
        );
        let parsed =
            ClientResponse::parse(&Endpoint::Dat("news".to_string(), 1700000000), &body).unwrap();
        match parsed {
            ClientResponse::Thread(thread) => {
                assert_eq!(thread.title, "スレタイ");
                assert_eq!(thread.posts[0].name, "名無し");
                assert_eq!(thread.posts[0].body, "本文です");
            }
            _ => panic!("expected thread response"),
        }
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_parse_dat_bytes_malformed_line_is_fatal() {
        let body = encode_sjis("no delimiters here\n");
        let err =
            ClientResponse::parse(&Endpoint::Dat("news".to_string(), 1700000000), &body).unwrap_err();
        assert!(matches!(err, Error::Parse(_)));
    }

    #[tracing_test::traced_test]
    #[test]
    fn test_parse_settings_bytes() {
        let body = encode_sjis("BBS_TITLE=なんでも実況\nBBS_NONAME_NAME=名無しさん\n");
        let parsed = ClientResponse::parse(&Endpoint::Settings("news".to_string()), &body).unwrap();
        match parsed {
            ClientResponse::Settings(settings) => {
                assert_eq!(settings.title(), Some("なんでも実況"));
                assert_eq!(settings.noname_name(), Some("名無しさん"));
            }
            _ => panic!("expected settings response"),
        }
    }
}
