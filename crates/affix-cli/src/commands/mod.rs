pub mod check;
pub mod completion;
pub mod explain;
pub mod rules;

/// Exit code for a clean run.
pub const EXIT_OK: i32 = 0;
/// Exit code when unsuppressed findings remain.
pub const EXIT_DEFECTS: i32 = 1;
/// Exit code for operational failures (bad input, unreadable files).
pub const EXIT_ERROR: i32 = 2;

/// Print formatter output, skipping empty strings so clean runs stay silent.
pub(crate) fn emit(output: &str) {
    if !output.is_empty() {
        println!("{}", output.trim_end_matches('\n'));
    }
}
