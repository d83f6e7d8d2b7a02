use std::fs;

/// Keys `Config` reads from the bundled file, by section.
const REQUIRED_KEYS: &[(&str, &[&str])] = &[
    ("inline", &["bold_tag", "italic_tag"]),
    ("paragraph", &["line_break"]),
];

fn main() {
    let config_path = "src/default_config.toml";
    println!("cargo:rerun-if-changed={}", config_path);

    let content = fs::read_to_string(config_path).expect("Failed to read default_config.toml");

    let table = match content.parse::<toml::Table>() {
        Ok(table) => table,
        Err(e) => panic!("Invalid default_config.toml: {}", e),
    };

    for (section, keys) in REQUIRED_KEYS {
        let Some(section_table) = table.get(*section).and_then(|v| v.as_table()) else {
            panic!("default_config.toml is missing the [{}] table", section);
        };
        for key in *keys {
            if section_table.get(*key).and_then(|v| v.as_str()).is_none() {
                panic!("default_config.toml: [{}] needs a string `{}`", section, key);
            }
        }
    }
}
