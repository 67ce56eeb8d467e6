use is_terminal::IsTerminal;

/// What the diagnostic stream (stderr) can render
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalCapabilities {
    pub supports_color: bool,
    pub supports_unicode: bool,
    pub is_github_actions: bool,
}

pub fn detect_capabilities() -> TerminalCapabilities {
    detect_capabilities_impl(|key| std::env::var(key).ok(), std::io::stderr().is_terminal())
}

fn detect_capabilities_impl(
    get_env: impl Fn(&str) -> Option<String>,
    is_tty: bool,
) -> TerminalCapabilities {
    let term = get_env("TERM").unwrap_or_default();
    let term_is_dumb = term.eq_ignore_ascii_case("dumb");
    let no_color = get_env("NO_COLOR").is_some();

    TerminalCapabilities {
        supports_color: is_tty && !term_is_dumb && !no_color,
        supports_unicode: !term_is_dumb && !ascii_locale(&get_env),
        is_github_actions: get_env("GITHUB_ACTIONS").is_some(),
    }
}

/// `LANG=C` style locales get ASCII icons
fn ascii_locale(get_env: &impl Fn(&str) -> Option<String>) -> bool {
    ["LC_ALL", "LC_CTYPE", "LANG"]
        .iter()
        .find_map(|k| get_env(k).filter(|v| !v.is_empty()))
        .is_some_and(|v| v == "C" || v == "POSIX")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn caps(env: &[(&str, &str)], is_tty: bool) -> TerminalCapabilities {
        let map: HashMap<String, String> = env
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        detect_capabilities_impl(|k| map.get(k).cloned(), is_tty)
    }

    #[test]
    fn no_color_disables_color() {
        let c = caps(&[("NO_COLOR", "1"), ("TERM", "xterm-256color")], true);
        assert!(!c.supports_color);
    }

    #[test]
    fn pipe_disables_color() {
        let c = caps(&[("TERM", "xterm-256color")], false);
        assert!(!c.supports_color);
        assert!(c.supports_unicode);
    }

    #[test]
    fn dumb_term_is_plain_ascii() {
        let c = caps(&[("TERM", "dumb")], true);
        assert!(!c.supports_color);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn c_locale_is_ascii() {
        let c = caps(&[("LANG", "C")], true);
        assert!(!c.supports_unicode);
    }

    #[test]
    fn github_actions_detected() {
        let c = caps(&[("GITHUB_ACTIONS", "true")], false);
        assert!(c.is_github_actions);
        assert!(!caps(&[("CI", "true")], false).is_github_actions);
    }
}
