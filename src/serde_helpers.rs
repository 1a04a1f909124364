//! Serde helpers for response decoding.
//!
//! With the `tracing` feature enabled, fields that logs.tf sends but the response types do not
//! model are reported at `warn` level, and decode failures are reported with the JSON path that
//! broke. logs.tf adds fields to its log format from time to time, so unknown fields are never
//! an error.

#[cfg(feature = "logs")]
use {serde::de::DeserializeOwned, serde_json::Value};

/// Deserialize JSON, warning about any fields the target type does not capture.
///
/// ```ignore
/// let json = serde_json::json!({ "success": true, "brand_new_field": 1 });
/// let result: UploadResponse = deserialize_with_warnings(json)?;
/// // WARN unknown field in API response field="brand_new_field" value="1"
/// ```
#[cfg(all(feature = "tracing", feature = "logs"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    use std::any::type_name;

    let type_name = type_name::<T>();
    tracing::trace!(type_name = %type_name, json = %value, "deserializing JSON");

    let original = value.clone();
    let mut unknown_paths = Vec::new();

    let result: T = serde_ignored::deserialize(value, |path| {
        unknown_paths.push(path.to_string());
    })
    .inspect_err(|_| {
        // Decode a second time purely to learn where it failed
        let path_result: Result<T, _> = serde_path_to_error::deserialize(original.clone());
        if let Err(path_err) = path_result {
            let path = path_err.path().to_string();
            tracing::error!(
                type_name = %type_name,
                path = %path,
                value = %describe(original.pointer(&to_pointer(&path))),
                error = %path_err.inner(),
                "deserialization failed"
            );
        }
    })?;

    for path in unknown_paths {
        tracing::warn!(
            type_name = %type_name,
            field = %path,
            value = %describe(original.pointer(&to_pointer(&path))),
            "unknown field in API response"
        );
    }

    Ok(result)
}

/// Pass-through deserialization when tracing is disabled.
#[cfg(all(not(feature = "tracing"), feature = "logs"))]
pub fn deserialize_with_warnings<T: DeserializeOwned>(value: Value) -> serde_json::Result<T> {
    serde_json::from_value(value)
}

/// Converts a serde path (`rounds[2].events.0`, `info.?.map`, `players.[U:1:1001].kills`) into
/// an RFC 6901 JSON pointer.
///
/// `?` segments come from `Option` wrappers and have no JSON counterpart, so they are dropped.
/// Only all-digit bracket groups are indices; steam ids keep their brackets.
#[cfg(all(feature = "tracing", feature = "logs"))]
fn to_pointer(path: &str) -> String {
    let mut pointer = String::new();
    let mut push = |token: &str| {
        if !token.is_empty() && token != "?" {
            pointer.push('/');
            pointer.push_str(&token.replace('~', "~0").replace('/', "~1"));
        }
    };

    for segment in path.split('.') {
        let (name, indices) = split_indices(segment);
        push(name);
        for index in indices {
            push(index);
        }
    }

    pointer
}

/// Splits trailing `[n]` groups off a path segment: `events[0][1]` -> `("events", ["0", "1"])`.
#[cfg(all(feature = "tracing", feature = "logs"))]
fn split_indices(mut segment: &str) -> (&str, Vec<&str>) {
    let mut indices = Vec::new();

    while let Some(rest) = segment.strip_suffix(']') {
        let Some((head, index)) = rest.rsplit_once('[') else {
            break;
        };
        if index.is_empty() || !index.bytes().all(|b| b.is_ascii_digit()) {
            break;
        }
        indices.push(index);
        segment = head;
    }

    indices.reverse();
    (segment, indices)
}

#[cfg(all(feature = "tracing", feature = "logs"))]
fn describe(value: Option<&serde_json::Value>) -> String {
    value.map_or_else(|| "<unable to retrieve>".to_owned(), ToString::to_string)
}

#[cfg(test)]
mod tests {
    #[cfg(feature = "logs")]
    mod deserialize_with_warnings_tests {
        use std::collections::HashMap;

        use serde::Deserialize;

        use super::super::deserialize_with_warnings;

        #[derive(Debug, Deserialize, PartialEq)]
        struct Acknowledgement {
            success: bool,
            #[serde(default)]
            log_id: Option<u64>,
        }

        #[test]
        fn deserialize_known_fields_only() {
            let json = serde_json::json!({ "success": true, "log_id": 42 });

            let result: Acknowledgement =
                deserialize_with_warnings(json).expect("deserialization failed");
            assert_eq!(
                result,
                Acknowledgement {
                    success: true,
                    log_id: Some(42)
                }
            );
        }

        #[test]
        fn unknown_fields_are_not_an_error() {
            let json = serde_json::json!({
                "success": false,
                "error": "Invalid log file",
                "extra": { "nested": [1, 2] }
            });

            let result: Acknowledgement =
                deserialize_with_warnings(json).expect("deserialization failed");
            assert!(!result.success);
            assert_eq!(result.log_id, None);
        }

        #[test]
        fn missing_required_field_fails() {
            let json = serde_json::json!({ "log_id": 42 });

            let result: serde_json::Result<Acknowledgement> = deserialize_with_warnings(json);
            let err = result.expect_err("success is required");
            assert!(err.to_string().contains("missing field `success`"));
        }

        #[test]
        fn deserialize_keyed_by_steam_id() {
            let json = serde_json::json!({ "[U:1:1001]": "alice", "[U:1:1002]": "bob" });

            let result: HashMap<String, String> =
                deserialize_with_warnings(json).expect("deserialization failed");
            assert_eq!(result["[U:1:1002]"], "bob");
        }

        #[cfg(feature = "tracing")]
        #[test]
        fn warning_is_emitted_for_unknown_fields() {
            use std::io::Write;
            use std::sync::{Arc, Mutex};

            #[derive(Clone, Default)]
            struct Buffer(Arc<Mutex<Vec<u8>>>);

            impl Write for Buffer {
                fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
                    self.0.lock().expect("poisoned").extend_from_slice(buf);
                    Ok(buf.len())
                }

                fn flush(&mut self) -> std::io::Result<()> {
                    Ok(())
                }
            }

            let buffer = Buffer::default();
            let writer = buffer.clone();
            let subscriber = tracing_subscriber::fmt()
                .with_writer(move || writer.clone())
                .with_max_level(tracing::Level::WARN)
                .with_ansi(false)
                .finish();

            tracing::subscriber::with_default(subscriber, || {
                let json = serde_json::json!({ "success": true, "surprise": "value" });
                let _: Acknowledgement =
                    deserialize_with_warnings(json).expect("deserialization failed");
            });

            let output = String::from_utf8(buffer.0.lock().expect("poisoned").clone())
                .expect("utf8 output");
            assert!(output.contains("unknown field in API response"));
            assert!(output.contains("surprise"));
        }
    }

    #[cfg(all(feature = "tracing", feature = "logs"))]
    mod to_pointer_tests {
        use serde_json::json;

        use super::super::{describe, to_pointer};

        #[test]
        fn dotted_path() {
            assert_eq!(to_pointer("info.uploader.name"), "/info/uploader/name");
        }

        #[test]
        fn option_markers_are_skipped() {
            assert_eq!(to_pointer("info.?.map"), "/info/map");
        }

        #[test]
        fn bracketed_and_dotted_indices() {
            assert_eq!(to_pointer("rounds[2].events[0]"), "/rounds/2/events/0");
            assert_eq!(to_pointer("rounds.2.events.0"), "/rounds/2/events/0");
            assert_eq!(to_pointer("[0][1]"), "/0/1");
        }

        #[test]
        fn steam_id_keys_keep_brackets() {
            let value = json!({ "players": { "[U:1:1001]": { "kills": 7 } } });
            let pointer = to_pointer("players.[U:1:1001].kills");

            assert_eq!(pointer, "/players/[U:1:1001]/kills");
            assert_eq!(describe(value.pointer(&pointer)), "7");
        }

        #[test]
        fn escapes_pointer_characters() {
            assert_eq!(to_pointer("a/b.c~d"), "/a~1b/c~0d");
        }

        #[test]
        fn empty_path_is_root() {
            let value = json!({ "a": 1 });
            assert_eq!(to_pointer(""), "");
            assert_eq!(to_pointer("."), "");
            assert_eq!(describe(value.pointer("")), r#"{"a":1}"#);
            assert_eq!(describe(value.pointer("/missing")), "<unable to retrieve>");
        }
    }
}
