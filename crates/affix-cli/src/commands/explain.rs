use affix_enforce::registry::RuleRegistry;
use affix_output::OutputFormatter;

use crate::commands::{emit, EXIT_ERROR, EXIT_OK};

/// Run `affix explain <code>` — describe what a finding code means and how to fix it.
pub fn run(formatter: &dyn OutputFormatter, code: &str) -> i32 {
    let code = code.to_ascii_uppercase();
    match RuleRegistry::builtin().explain(&code) {
        Some(result) => {
            emit(&formatter.format_explain(&result));
            EXIT_OK
        }
        None => {
            eprintln!("error: unknown finding code: {}", code);
            EXIT_ERROR
        }
    }
}
