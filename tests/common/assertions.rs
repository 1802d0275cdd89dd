//! Assertion macros with descriptive failure messages.

/// Assert that a command's combined output contains a string.
///
/// # Example
/// ```ignore
/// assert_output_contains!(result, "templates ok");
/// ```
#[macro_export]
macro_rules! assert_output_contains {
    ($result:expr, $needle:expr) => {
        let output = $result.combined_output();
        assert!(
            output.contains($needle),
            "Expected output to contain '{}'.\nExit code: {}\nOutput:\n{}",
            $needle,
            $result.exit_code,
            output
        );
    };
}

/// Assert that a command succeeded, printing its output otherwise.
#[macro_export]
macro_rules! assert_success {
    ($result:expr) => {
        assert!(
            $result.is_success(),
            "Expected success, got exit code {}.\nstdout:\n{}\nstderr:\n{}",
            $result.exit_code,
            $result.stdout,
            $result.stderr
        );
    };
}
