use anyhow::Result;
use localx_assets::{Catalog, CheckResult, CheckUseCase};

use super::RunContext;
use crate::ui::json::emit;

pub fn run(ctx: &RunContext) -> Result<bool> {
    let catalog = Catalog::builtin();
    let spec = ctx.loaded.config.icons.spec();
    let result = CheckUseCase::new().execute(&catalog, &spec);

    if ctx.ui.json {
        emit(check_event(&result))?;
    } else {
        print_result(ctx, &result);
    }

    Ok(result.is_success())
}

fn check_event(result: &CheckResult) -> serde_json::Value {
    let issues: Vec<_> = result
        .issues
        .iter()
        .map(|issue| {
            serde_json::json!({
                "template": issue.template,
                "path": issue.path,
                "reason": issue.reason,
            })
        })
        .collect();

    serde_json::json!({
        "event": "check",
        "status": if result.is_success() { "success" } else { "failure" },
        "templates": result.templates,
        "files": result.files,
        "issues": issues,
        "icon_error": result.icon_error,
    })
}

fn print_result(ctx: &RunContext, result: &CheckResult) {
    for issue in &result.issues {
        eprintln!("error: {}", issue);
    }
    if let Some(icon) = &result.icon_error {
        eprintln!("error: icons: {}", icon);
    }

    if result.is_success() {
        if ctx.ui.verbose >= 1 {
            println!(
                "{} templates, {} files, icon parameters valid",
                result.templates, result.files
            );
        }
        println!("check ok");
    } else {
        println!("check: {} problem(s)", result.error_count());
    }
}
