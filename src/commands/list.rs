use anyhow::Result;
use localx_assets::{Catalog, TemplateDefinition};

use super::RunContext;
use crate::ui::json::emit;

pub fn run(ctx: &RunContext) -> Result<bool> {
    let catalog = Catalog::builtin();

    for template in catalog.iter() {
        if ctx.ui.json {
            emit(template_event(template))?;
        } else {
            print_template(template, ctx.ui.verbose);
        }
    }

    Ok(true)
}

fn template_event(template: &TemplateDefinition) -> serde_json::Value {
    serde_json::json!({
        "event": "template",
        "name": template.name,
        "description": template.description,
        "archive": template.archive_file_name(),
        "files": template.paths().collect::<Vec<_>>(),
        "bytes": template.payload_size(),
    })
}

fn print_template(template: &TemplateDefinition, verbose: u8) {
    println!(
        "{:<10} {:>2} files  {}",
        template.name,
        template.files.len(),
        template.description
    );
    if verbose >= 1 {
        for file in template.files {
            println!("    {} ({} bytes)", file.path, file.contents.len());
        }
    }
}
