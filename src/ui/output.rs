use localx_assets::config::ConfigWarning;

pub fn print_config_warnings(warnings: &[ConfigWarning], unicode: bool) {
    let marker = if unicode { "⚠" } else { "[WARN]" };
    for w in warnings {
        if let Some(line) = w.line {
            eprintln!(
                "{} Unknown config key '{}' in {}:{}",
                marker,
                w.key,
                w.file.display(),
                line
            );
        } else {
            eprintln!("{} Unknown config key '{}' in {}", marker, w.key, w.file.display());
        }

        if let Some(suggestion) = &w.suggestion {
            eprintln!("   Did you mean '{}'?", suggestion);
        }
    }
}
