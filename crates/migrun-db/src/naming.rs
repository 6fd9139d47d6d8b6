use std::cmp::Ordering;

use migrun_common::{Error, Result};

/// Separator between the timestamp prefix and the slug, and between slug words.
pub const WORD_SEPARATOR: char = '-';

/// Extension given to generated migration files.
pub const MIGRATION_EXTENSION: &str = "sql";

/// Turn a free-form description into a filename slug.
///
/// Outer whitespace is trimmed and every internal whitespace run collapses to
/// a single separator: `"  add   users  "` becomes `"add-users"`.
pub fn slugify(description: &str) -> String {
    description
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(&WORD_SEPARATOR.to_string())
}

/// Build a migration filename of the form `<millis>-<slug>.sql`.
///
/// Deterministic for a given description and timestamp.
pub fn file_name(description: &str, timestamp_millis: i64) -> String {
    format!(
        "{timestamp_millis}{WORD_SEPARATOR}{}.{MIGRATION_EXTENSION}",
        slugify(description)
    )
}

/// Extract the numeric timestamp prefix from a migration filename.
///
/// The substring before the first separator must parse as an integer; a name
/// without a separator or with a non-numeric prefix is rejected rather than
/// silently ordered.
pub fn timestamp_prefix(name: &str) -> Result<i64> {
    let (prefix, _) = name
        .split_once(WORD_SEPARATOR)
        .ok_or_else(|| Error::Filename(format!("{name}: missing '{WORD_SEPARATOR}' separator")))?;
    prefix
        .parse::<i64>()
        .map_err(|_| Error::Filename(format!("{name}: prefix {prefix:?} is not a number")))
}

/// Compare two migration filenames by timestamp prefix.
///
/// Names with equal prefixes compare equal regardless of slug, so this is not
/// a total order over filenames; tie order is left to the (stable) sort.
pub fn compare_ascending(a: &str, b: &str) -> Result<Ordering> {
    Ok(timestamp_prefix(a)?.cmp(&timestamp_prefix(b)?))
}

/// Sort migration filenames ascending by timestamp prefix.
///
/// Every prefix is validated up front, so one malformed name fails the whole
/// call before anything is applied. The sort is stable: names with equal
/// prefixes keep their input order.
pub fn sort_ascending(names: Vec<String>) -> Result<Vec<String>> {
    let mut keyed = names
        .into_iter()
        .map(|name| Ok((timestamp_prefix(&name)?, name)))
        .collect::<Result<Vec<_>>>()?;
    keyed.sort_by_key(|(timestamp, _)| *timestamp);
    Ok(keyed.into_iter().map(|(_, name)| name).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugify_replaces_spaces_with_separator() {
        assert_eq!(slugify("hello world"), "hello-world");
    }

    #[test]
    fn slugify_trims_outer_whitespace() {
        assert_eq!(slugify("  hello world  "), "hello-world");
    }

    #[test]
    fn slugify_collapses_whitespace_runs() {
        assert_eq!(slugify("hello   world"), "hello-world");
        assert_eq!(slugify("  a   b  "), slugify("a b"));
        assert_eq!(slugify("a\t\n b"), "a-b");
    }

    #[test]
    fn file_name_is_deterministic() {
        assert_eq!(file_name("add users table", 1700000000000), "1700000000000-add-users-table.sql");
        assert_eq!(
            file_name("add users table", 1700000000000),
            file_name("  add   users table ", 1700000000000)
        );
    }

    #[test]
    fn compare_orders_by_timestamp() {
        assert_eq!(compare_ascending("123-test.sql", "456-test.sql").unwrap(), Ordering::Less);
        assert_eq!(
            compare_ascending("456-test.sql", "123-test.sql").unwrap(),
            Ordering::Greater
        );
    }

    #[test]
    fn compare_ignores_slug_on_equal_timestamps() {
        assert_eq!(compare_ascending("123-x.sql", "123-y.sql").unwrap(), Ordering::Equal);
    }

    #[test]
    fn compare_rejects_name_without_separator() {
        assert!(compare_ascending("123.sql", "456-ok.sql").is_err());
        assert!(compare_ascending("456-ok.sql", "123.sql").is_err());
    }

    #[test]
    fn compare_rejects_non_numeric_prefix() {
        let err = timestamp_prefix("abc-test.sql").unwrap_err();
        assert!(err.to_string().contains("not a number"));
    }

    #[test]
    fn sort_orders_by_prefix() {
        let sorted = sort_ascending(vec!["345-abs".into(), "012-aaa".into()]).unwrap();
        assert_eq!(sorted, vec!["012-aaa".to_string(), "345-abs".to_string()]);
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let sorted =
            sort_ascending(vec!["100-b".into(), "100-a".into(), "050-z".into()]).unwrap();
        assert_eq!(
            sorted,
            vec!["050-z".to_string(), "100-b".to_string(), "100-a".to_string()]
        );
    }

    #[test]
    fn sort_fails_on_any_malformed_name() {
        let err = sort_ascending(vec!["100-ok.sql".into(), "noprefix.sql".into()]).unwrap_err();
        assert!(err.to_string().contains("noprefix.sql"));
    }
}
