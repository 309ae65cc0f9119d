use affix_enforce::registry::RuleRegistry;
use affix_output::OutputFormatter;

use crate::commands::{emit, EXIT_OK};

/// Run `affix rules` — list every registered rule.
pub fn run(formatter: &dyn OutputFormatter) -> i32 {
    let registry = RuleRegistry::builtin();
    emit(&formatter.format_rules(&registry.metadata()));
    EXIT_OK
}
