use crossterm::style::{Color, Stylize};
use localx_assets::AssetError;

/// Render a fatal error for stderr
pub fn format_error(err: &anyhow::Error, color: bool) -> String {
    let label = if color {
        "error".with(Color::Red).bold().to_string()
    } else {
        "error".to_string()
    };

    let mut out = format!("{}: {}\n", label, err);
    if let Some(hint) = err.downcast_ref::<AssetError>().and_then(hint_for) {
        out.push_str(&format!("  hint: {}\n", hint));
    }
    out
}

fn hint_for(err: &AssetError) -> Option<&'static str> {
    match err {
        AssetError::UnknownTemplate { .. } => {
            Some("run 'localx-assets list' to see the catalog")
        }
        AssetError::Config { .. } => Some("fix the file or pass --config to use another one"),
        AssetError::InvalidColor(_) => Some("colours are written #RRGGBB or #RRGGBBAA"),
        AssetError::InvalidDefinition { .. } | AssetError::PathEscape { .. } => {
            Some("run 'localx-assets check' for the full list of catalog problems")
        }
        _ => None,
    }
}
