// Fri Oct 16 2026 - Alex

//! Field tag grammar used by the group strategy.
//!
//! A raw tag is a list of `key:"value"` pairs. The `layout` value routes
//! the field into a bucket:
//!
//! - absent or `-`: the skip bucket, fields pass through untouched
//! - `stg,stg`: the `default` bucket with that strategy list
//! - `group:name;stg,stg`: the bucket `name` with that strategy list
//!
//! Leading and trailing `;` are ignored. Any other shape is rejected.

use crate::error::{Error, Result, TagErrorKind};
use crate::strategy::TAG_GROUP;
use once_cell::sync::Lazy;
use regex::Regex;

pub const TAG_KEY: &str = "layout";
pub const SKIP_BUCKET: &str = "-";
pub const DEFAULT_BUCKET: &str = "default";
const GROUP_ANCHOR: &str = "group:";

static TAG_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_\-]*):"((?:[^"\\]|\\.)*)""#).expect("tag pair pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Skip,
    Bucket { name: String, strategies: String },
}

impl Route {
    pub fn bucket(&self) -> &str {
        match self {
            Route::Skip => SKIP_BUCKET,
            Route::Bucket { name, .. } => name,
        }
    }

    /// Raw strategy list as written in the tag; compared textually for
    /// consistency between fields of one bucket.
    pub fn strategies(&self) -> &str {
        match self {
            Route::Skip => "",
            Route::Bucket { strategies, .. } => strategies,
        }
    }
}

/// Value stored under `key`, if the tag carries one.
pub fn lookup(tag: &str, key: &str) -> Option<String> {
    TAG_PAIR
        .captures_iter(tag)
        .find(|caps| &caps[1] == key)
        .map(|caps| caps[2].replace("\\\"", "\""))
}

/// Writes `key:"value"` into a raw tag. An existing pair for `key` is kept
/// as is unless `force` is set.
pub fn set(tag: &str, key: &str, value: &str, force: bool) -> String {
    let pair = format!("{}:\"{}\"", key, value.replace('"', "\\\""));
    let existing = TAG_PAIR
        .captures_iter(tag)
        .find(|caps| &caps[1] == key)
        .and_then(|caps| caps.get(0))
        .map(|m| m.range());
    match existing {
        Some(_) if !force => tag.to_string(),
        Some(range) => format!("{}{}{}", &tag[..range.start], pair, &tag[range.end..]),
        None if tag.trim().is_empty() => pair,
        None => format!("{} {}", tag.trim_end(), pair),
    }
}

pub fn parse(tag: &str) -> Result<Route> {
    let value = match lookup(tag, TAG_KEY) {
        Some(value) if value != SKIP_BUCKET => value,
        _ => return Ok(Route::Skip),
    };

    let sections: Vec<&str> = value.trim_matches(';').split(';').collect();
    match sections.as_slice() {
        [strategies] => Ok(Route::Bucket {
            name: DEFAULT_BUCKET.to_string(),
            strategies: strategies.to_string(),
        }),
        [group, strategies] => match group.strip_prefix(GROUP_ANCHOR) {
            Some(SKIP_BUCKET) => Err(Error::MalformedTag {
                tag: tag.to_string(),
                reason: TagErrorKind::ReservedGroupName,
            }),
            Some(name) => Ok(Route::Bucket {
                name: name.to_string(),
                strategies: strategies.to_string(),
            }),
            None => Err(Error::MalformedTag {
                tag: tag.to_string(),
                reason: TagErrorKind::MissingGroupAnchor,
            }),
        },
        _ => Err(Error::MalformedTag {
            tag: tag.to_string(),
            reason: TagErrorKind::TooManySections,
        }),
    }
}

/// Splits a strategy list into names, rejecting a nested tag group since
/// it would route the same fields again.
pub fn strategy_names(tag: &str, strategies: &str) -> Result<Vec<String>> {
    let names: Vec<String> = strategies
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect();
    if names.iter().any(|name| name == TAG_GROUP) {
        return Err(Error::MalformedTag {
            tag: tag.to_string(),
            reason: TagErrorKind::RecursiveGroup,
        });
    }
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let tag = r#"json:"id,omitempty" layout:"group:hot;memory_pack""#;
        assert_eq!(lookup(tag, "json").as_deref(), Some("id,omitempty"));
        assert_eq!(lookup(tag, "layout").as_deref(), Some("group:hot;memory_pack"));
        assert_eq!(lookup(tag, "xml"), None);
        assert_eq!(lookup("", "layout"), None);
    }

    #[test]
    fn test_set() {
        assert_eq!(set("", "layout", "nope", false), r#"layout:"nope""#);
        assert_eq!(
            set(r#"json:"id""#, "layout", "group:g;nope", false),
            r#"json:"id" layout:"group:g;nope""#
        );
        let tag = r#"json:"id" layout:"memory_pack" xml:"x""#;
        assert_eq!(set(tag, "layout", "nope", false), tag);
        assert_eq!(set(tag, "layout", "nope", true), r#"json:"id" layout:"nope" xml:"x""#);
    }

    #[test]
    fn test_skip_routes() {
        assert_eq!(parse("").unwrap(), Route::Skip);
        assert_eq!(parse(r#"json:"a""#).unwrap(), Route::Skip);
        assert_eq!(parse(r#"layout:"-""#).unwrap(), Route::Skip);
    }

    #[test]
    fn test_default_route() {
        let route = parse(r#"layout:"memory_pack,filter_pads;""#).unwrap();
        assert_eq!(route.bucket(), DEFAULT_BUCKET);
        assert_eq!(route.strategies(), "memory_pack,filter_pads");
    }

    #[test]
    fn test_named_route() {
        let route = parse(r#"layout:";group:hot;false_sharing_cpu_l1""#).unwrap();
        assert_eq!(
            route,
            Route::Bucket {
                name: "hot".to_string(),
                strategies: "false_sharing_cpu_l1".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_anchor() {
        let tag = r#"layout:"hot;memory_pack""#;
        match parse(tag) {
            Err(Error::MalformedTag { tag: t, reason }) => {
                assert_eq!(t, tag);
                assert_eq!(reason, TagErrorKind::MissingGroupAnchor);
            }
            other => panic!("unexpected result {:?}", other),
        }
    }

    #[test]
    fn test_skip_name_is_reserved() {
        assert!(matches!(
            parse(r#"layout:"group:-;memory_pack""#),
            Err(Error::MalformedTag { reason: TagErrorKind::ReservedGroupName, .. })
        ));
        assert!(parse(r#"layout:"group:--;memory_pack""#).is_ok());
    }

    #[test]
    fn test_pair_pattern_handles_escapes() {
        let tag = r#"json:"a\"b" layout:"nope""#;
        let keys: Vec<_> = TAG_PAIR.captures_iter(tag).map(|caps| caps[1].to_string()).collect();
        assert_eq!(keys, vec!["json", "layout"]);
        assert_eq!(lookup(tag, "json").as_deref(), Some(r#"a"b"#));
    }

    #[test]
    fn test_too_many_sections() {
        assert!(matches!(
            parse(r#"layout:"group:a;nope;nope""#),
            Err(Error::MalformedTag { reason: TagErrorKind::TooManySections, .. })
        ));
    }

    #[test]
    fn test_strategy_names() {
        let names = strategy_names("", " memory_pack, ,filter_pads").unwrap();
        assert_eq!(names, vec!["memory_pack".to_string(), "filter_pads".to_string()]);
        assert!(strategy_names("", "").unwrap().is_empty());
        assert!(matches!(
            strategy_names("t", "nope,process_tag_group"),
            Err(Error::MalformedTag { reason: TagErrorKind::RecursiveGroup, .. })
        ));
    }
}
