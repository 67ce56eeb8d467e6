//! Environment variable parsing with typo suggestions
//!
//! Invalid values never abort: a warning is written and the default is used.

use std::io::Write;

/// Validator for one `WPDOCK_*` environment variable
pub struct EnvVarValidator<'a> {
    var_name: &'a str,
    valid_values: &'a [&'a str],
}

impl<'a> EnvVarValidator<'a> {
    pub fn new(var_name: &'a str, valid_values: &'a [&'a str]) -> Self {
        Self {
            var_name,
            valid_values,
        }
    }

    /// Parse `value`, falling back to `default` with a warning on `writer`
    pub fn parse_with_writer<T, F, W>(
        &self,
        value: &str,
        parser: F,
        default: T,
        writer: &mut W,
    ) -> T
    where
        F: Fn(&str) -> Option<T>,
        W: Write,
    {
        if let Some(parsed) = parser(value) {
            return parsed;
        }
        let _ = writeln!(
            writer,
            "Warning: Invalid {} value '{}'{}",
            self.var_name,
            value,
            self.suggest(value)
        );
        let _ = writeln!(writer, "Valid values: {}", self.valid_values.join(", "));
        default
    }

    fn suggest(&self, value: &str) -> String {
        let input = value.to_lowercase();
        self.valid_values
            .iter()
            .map(|valid| (*valid, levenshtein(&input, valid)))
            .min_by_key(|(_, dist)| *dist)
            .filter(|(_, dist)| *dist > 0 && *dist <= 2)
            .map(|(valid, _)| format!(". Did you mean '{}'?", valid))
            .unwrap_or_default()
    }
}

/// Levenshtein edit distance over bytes
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a = a.as_bytes();
    let b = b.as_bytes();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=b.len()).collect();
    let mut curr_row: Vec<usize> = vec![0; b.len() + 1];

    for (i, a_char) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, b_char) in b.iter().enumerate() {
            let cost = usize::from(a_char != b_char);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("host", "host"), 0);
        assert_eq!(levenshtein("hots", "host"), 2);
        assert_eq!(levenshtein("dbname", "dbName"), 1);
        assert_eq!(levenshtein("", "ftp"), 3);
    }

    #[test]
    fn test_valid_value_passes_through() {
        let validator = EnvVarValidator::new("WPDOCK_STRICT", &["true", "false"]);
        let mut out = Vec::new();
        let parsed = validator.parse_with_writer("true", |s| (s == "true").then_some(1), 0, &mut out);
        assert_eq!(parsed, 1);
        assert!(out.is_empty());
    }

    #[test]
    fn test_invalid_value_warns_with_suggestion() {
        let validator = EnvVarValidator::new("WPDOCK_STRICT", &["true", "false"]);
        let mut out = Vec::new();
        let parsed = validator.parse_with_writer("ture", |_| None, false, &mut out);
        assert!(!parsed);

        let msg = String::from_utf8(out).unwrap();
        assert!(msg.contains("Warning: Invalid WPDOCK_STRICT value 'ture'"), "{}", msg);
        assert!(msg.contains("Did you mean 'true'?"), "{}", msg);
        assert!(msg.contains("Valid values: true, false"), "{}", msg);
    }

    #[test]
    fn test_distant_value_has_no_suggestion() {
        let validator = EnvVarValidator::new("WPDOCK_STRICT", &["true", "false"]);
        let mut out = Vec::new();
        validator.parse_with_writer("definitely", |_| None::<bool>, false, &mut out);
        let msg = String::from_utf8(out).unwrap();
        assert!(!msg.contains("Did you mean"), "{}", msg);
    }
}
