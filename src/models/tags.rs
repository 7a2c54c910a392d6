//! Tag list to key/value map conversion.

use aws_sdk_ec2::types::Tag;
use std::collections::HashMap;

/// Free-form key/value labels attached to a resource.
pub type Tags = HashMap<String, String>;

/// Placeholder used when an optional address is absent.
pub const NOT_AVAILABLE: &str = "N/A";

/// Convert a provider tag list into a [`Tags`] map.
///
/// Tags are applied in list order, so a repeated key keeps the value of its
/// last occurrence. Tags without a key are dropped and a missing value
/// becomes an empty string.
pub fn tags_to_map<'a, I>(tags: I) -> Tags
where
    I: IntoIterator<Item = &'a Tag>,
{
    let mut map = Tags::new();
    for tag in tags {
        match tag.key() {
            Some(key) => {
                map.insert(key.to_string(), tag.value().unwrap_or_default().to_string());
            }
            None => log::trace!("dropping tag without key: {:?}", tag),
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(key: &str, value: &str) -> Tag {
        Tag::builder().key(key).value(value).build()
    }

    #[test]
    fn test_empty_tags() {
        let tags: Vec<Tag> = vec![];
        assert!(tags_to_map(&tags).is_empty());
    }

    #[test]
    fn test_duplicate_keys_last_wins() {
        let tags = vec![tag("Name", "first"), tag("env", "dev"), tag("Name", "second")];
        let map = tags_to_map(&tags);
        assert_eq!(map.len(), 2);
        assert_eq!(map["Name"], "second");
        assert_eq!(map["env"], "dev");
    }

    #[test]
    fn test_missing_key_and_value() {
        let tags = vec![
            Tag::builder().value("orphan").build(),
            Tag::builder().key("flag").build(),
        ];
        let map = tags_to_map(&tags);
        assert_eq!(map.len(), 1);
        assert_eq!(map["flag"], "");
    }
}
