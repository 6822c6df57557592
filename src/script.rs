//! JSON-lines event scripts for replaying against a [`FeedHandler`](crate::FeedHandler).
//!
//! One event per line, e.g. `{"op":"follow","follower":1,"followee":2}`.
//! Blank lines and lines starting with `#` are ignored.

use std::io::BufRead;

use crate::{Error, Event};

pub fn parse_script(reader: impl BufRead) -> Result<Vec<Event>, Error> {
    let mut events = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let event = serde_json::from_str(trimmed).map_err(|source| Error::Script {
            line: index + 1,
            source,
        })?;
        events.push(event);
    }
    Ok(events)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{PostId, UserId};

    #[test]
    fn parses_events_and_skips_comments() {
        let script = r#"
# setup
{"op":"follow","follower":1,"followee":2}
{"op":"post","user":2,"post":10}

{"op":"feed","user":1}
"#;
        let events = parse_script(script.as_bytes()).unwrap();
        assert_eq!(
            events,
            vec![
                Event::Follow {
                    follower: UserId(1),
                    followee: UserId(2)
                },
                Event::Post {
                    user: UserId(2),
                    post: PostId(10)
                },
                Event::Feed { user: UserId(1) },
            ]
        );
    }

    #[test]
    fn reports_failing_line() {
        let script = "{\"op\":\"feed\",\"user\":1}\n{\"op\":\"retweet\",\"user\":1}\n";
        let err = parse_script(script.as_bytes()).unwrap_err();
        assert!(matches!(err, Error::Script { line: 2, .. }), "got {err}");
    }
}
