//! Renders one archive entry into its report block.

use crate::exclude::ExcludeRule;
use crate::har::{Body, Entry};

use super::block::BlockBuilder;

/// Re-serializes JSON text with insignificant whitespace removed.
///
/// Object key order is preserved, so compacting already-compact text
/// returns it byte-identical.
pub fn compact_json(text: &str) -> Result<String, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    serde_json::to_string(&value)
}

/// Formats one entry as its report block.
///
/// Block shape: two leading blanks, the `METHOD : URL` line, one
/// `Query String:` line per kept parameter in capture order, the optional
/// request/response body sections, then a `----` separator and three blanks.
pub fn format_entry(entry: &Entry, excludes: &[ExcludeRule]) -> String {
    let mut block = BlockBuilder::new();
    block.blanks(2);
    block.text(&format!("{} : {}", entry.request.method, entry.request.url));

    for param in &entry.request.query_string {
        if excludes.iter().any(|rule| rule.matches(param)) {
            continue;
        }
        block.blanks(1);
        block.text(&format!("Query String:  {} -> {}", param.name, param.value));
    }
    block.blanks(2);

    body_section(&mut block, "Request Body:", &entry.request.post_data, entry);
    body_section(&mut block, "Response Body:", &entry.response.content, entry);

    block.text("----");
    block.blanks(3);
    block.finish()
}

/// Emits one body section, or nothing when no text was captured.
///
/// A body whose text fails to compact is skipped with a warning; the rest
/// of the block still renders and the run continues.
fn body_section(block: &mut BlockBuilder, label: &str, body: &Body, entry: &Entry) {
    if !body.is_captured() {
        return;
    }
    match compact_json(&body.text) {
        Ok(line) => {
            block.text(label);
            block.blanks(2);
            block.text(&line);
            block.blanks(2);
        }
        Err(err) => {
            tracing::warn!(
                "skipping {} for {}: not valid JSON: {}",
                label.trim_end_matches(':'),
                entry.request.url,
                err
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exclude::ExcludeRule;
    use crate::har::{Body, Entry, Method, QueryParam, Request};

    fn post_entry(url: &str) -> Entry {
        Entry {
            request: Request {
                method: Method::Post,
                url: url.to_string(),
                ..Request::default()
            },
            ..Entry::default()
        }
    }

    fn json_body(text: &str) -> Body {
        Body {
            size: text.len() as i64,
            mime_type: "application/json".into(),
            text: text.into(),
        }
    }

    #[test]
    fn bare_entry_block_shape() {
        let block = format_entry(&post_entry("https://x/program/9"), &[]);
        assert_eq!(block, "\n\nPOST : https://x/program/9\n\n----\n\n\n");
    }

    #[test]
    fn query_params_one_line_each_in_order() {
        let mut entry = post_entry("https://x/program");
        entry.request.query_string = vec![
            QueryParam {
                name: "a".into(),
                value: "1".into(),
            },
            QueryParam {
                name: "b".into(),
                value: "2".into(),
            },
            QueryParam {
                name: "c".into(),
                value: "3".into(),
            },
        ];
        let block = format_entry(&entry, &[]);
        assert_eq!(
            block,
            "\n\nPOST : https://x/program\
             \nQuery String:  a -> 1\
             \nQuery String:  b -> 2\
             \nQuery String:  c -> 3\
             \n\n----\n\n\n"
        );
    }

    #[test]
    fn request_body_compacts_to_one_line() {
        let mut entry = post_entry("https://x/program");
        entry.request.post_data = json_body("{\n  \"a\": 1,\n  \"b\": 2\n}");
        let block = format_entry(&entry, &[]);
        assert_eq!(
            block,
            "\n\nPOST : https://x/program\n\nRequest Body:\n\n{\"a\":1,\"b\":2}\n\n----\n\n\n"
        );
    }

    #[test]
    fn response_body_section_is_independent() {
        let mut entry = post_entry("https://x/program");
        entry.response.content = json_body("[1, 2]");
        let block = format_entry(&entry, &[]);
        assert_eq!(
            block,
            "\n\nPOST : https://x/program\n\nResponse Body:\n\n[1,2]\n\n----\n\n\n"
        );
    }

    #[test]
    fn empty_bodies_produce_no_sections() {
        let block = format_entry(&post_entry("https://x/program"), &[]);
        assert!(!block.contains("Request Body:"));
        assert!(!block.contains("Response Body:"));
    }

    #[test]
    fn invalid_json_body_skips_only_that_section() {
        let mut entry = post_entry("https://x/program");
        entry.request.post_data = Body {
            size: 13,
            mime_type: "text/html".into(),
            text: "<html></html>".into(),
        };
        entry.response.content = json_body("{\"ok\": true}");
        let block = format_entry(&entry, &[]);
        assert_eq!(
            block,
            "\n\nPOST : https://x/program\n\nResponse Body:\n\n{\"ok\":true}\n\n----\n\n\n"
        );
    }

    #[test]
    fn exclude_rule_suppresses_matching_param_only() {
        let mut entry = post_entry("https://x/program");
        entry.request.query_string = vec![
            QueryParam {
                name: "id".into(),
                value: "7".into(),
            },
            QueryParam {
                name: "token".into(),
                value: "secret".into(),
            },
            QueryParam {
                name: "token".into(),
                value: "other".into(),
            },
        ];
        let rules = vec!["token=secret".parse::<ExcludeRule>().unwrap()];
        let block = format_entry(&entry, &rules);
        assert_eq!(
            block,
            "\n\nPOST : https://x/program\
             \nQuery String:  id -> 7\
             \nQuery String:  token -> other\
             \n\n----\n\n\n"
        );
    }

    #[test]
    fn compact_json_is_idempotent_on_compact_input() {
        let compact = "{\"b\":1,\"a\":{\"nested\":[1,2,3]}}";
        assert_eq!(compact_json(compact).unwrap(), compact);
        assert_eq!(
            compact_json(&compact_json(compact).unwrap()).unwrap(),
            compact
        );
    }

    #[test]
    fn compact_json_preserves_key_order() {
        assert_eq!(
            compact_json("{ \"z\": 1, \"a\": 2 }").unwrap(),
            "{\"z\":1,\"a\":2}"
        );
    }

    #[test]
    fn compact_json_rejects_non_json() {
        assert!(compact_json("<html></html>").is_err());
        assert!(compact_json("").is_err());
    }
}
