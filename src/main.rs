use std::process::ExitCode;

use drop_caches::osutil::drop_caches;

// argv is never read, the outcome is reported only through the exit code
fn main() -> ExitCode {
    match drop_caches() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "cache drop failed");
            err.into()
        }
    }
}
