//! Error handling utilities

use tracing::error;

use crate::error::RaceDbError;

/// Exit code and printed lines for a fatal error
pub fn render_fatal_error(error: &anyhow::Error, verbose: u8) -> (i32, Vec<String>) {
    let mut lines = Vec::new();

    let exit_code = if let Some(racedb_err) = error.downcast_ref::<RaceDbError>() {
        lines.push(racedb_err.user_message());

        if verbose >= 1 {
            lines.push(format!("\nContext Chain:\n{}", racedb_err.developer_message()));
        }

        racedb_err.exit_code()
    } else {
        lines.push(format!("Error: {error}"));

        if verbose >= 1 {
            lines.push("\nError chain:".to_string());
            for (i, cause) in error.chain().enumerate() {
                lines.push(format!("  {}: {}", i, cause));
            }
        }

        1
    };

    (exit_code, lines)
}

/// Handle fatal errors and exit with appropriate status code
///
/// - `verbose = 0`: user-facing message only
/// - `verbose >= 1`: includes the full error chain
pub fn handle_fatal_error(error: anyhow::Error, verbose: u8) -> ! {
    error!("Fatal error: {:#}", error);

    let (exit_code, lines) = render_fatal_error(&error, verbose);
    for line in lines {
        eprintln!("{}", line);
    }

    std::process::exit(exit_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use anyhow::Context;

    #[test]
    fn test_racedb_error_keeps_exit_code_through_context() {
        let result: anyhow::Result<()> = Err(RaceDbError::record(
            ErrorCode::RECORD_UNDECODABLE,
            "missing field `date`",
            "results.json",
            7,
        )
        .into());
        let error = result.context("split failed").unwrap_err();

        let (code, lines) = render_fatal_error(&error, 0);
        assert_eq!(code, 3);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("Record 7 of 'results.json'"));
    }

    #[test]
    fn test_other_errors_exit_with_one() {
        let error = anyhow::anyhow!("boom");
        let (code, lines) = render_fatal_error(&error, 1);
        assert_eq!(code, 1);
        assert!(lines.iter().any(|l| l.contains("Error chain")));
    }
}
