use std::path::Path;

/// GitHub Actions workflow command for an error, e.g. `::error file=x::msg`
pub fn github_error_annotation(message: &str, file: Option<&Path>) -> String {
    let mut props = vec![format!("title={}", escape_property("wpdock"))];
    if let Some(file) = file {
        props.insert(0, format!("file={}", escape_property(&file.display().to_string())));
    }
    format!("::error {}::{}", props.join(","), escape_data(message))
}

fn escape_data(s: &str) -> String {
    s.replace('%', "%25").replace('\r', "%0D").replace('\n', "%0A")
}

fn escape_property(s: &str) -> String {
    escape_data(s).replace(':', "%3A").replace(',', "%2C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn annotation_with_file() {
        let rendered = github_error_annotation(
            "instanceName is not defined in your config.",
            Some(Path::new("site/wpdock.json")),
        );
        assert_eq!(
            rendered,
            "::error file=site/wpdock.json,title=wpdock::instanceName is not defined in your config."
        );
    }

    #[test]
    fn annotation_escapes_newlines_and_property_separators() {
        let rendered = github_error_annotation("a\nb", Some(Path::new("c:/x,y.json")));
        assert!(rendered.contains("a%0Ab"));
        assert!(rendered.contains("file=c%3A/x%2Cy.json"));
    }
}
