#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;
use wpdock::config::{parse_with_warnings, ConfigFormat};
use wpdock::fs::MockFileSystem;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz TOML config parsing and validation - this should never panic
        let file = Path::new("/srv/site/wpdock.toml");
        if let Ok((raw, _warnings)) = parse_with_warnings(content, ConfigFormat::Toml, file) {
            let fs = MockFileSystem::new().with("/srv/site/plugins");
            let _ = wpdock::validate(&raw, Path::new("/srv/site"), &fs);
        }
    }
});
