use tracing::error;

use crate::error::BackupError;
use crate::job::BackupJob;
use crate::staging::discard;

/// Logs a fatal error, removes any partial staging directory and returns the
/// exit code. The disc is deliberately left in the drive.
pub fn abort(job: &mut BackupJob, err: &BackupError) -> i32 {
    let code = err.exit_code();
    error!(device = %job.device().display(), code, "{}, aborting", err);
    let removed = match job.staging_path() {
        Some(staging) => match discard(staging) {
            Ok(()) => true,
            Err(cleanup) => {
                error!("{}", cleanup);
                false
            }
        },
        None => true,
    };
    if removed {
        job.release_staging();
    }
    job.abort();
    code
}

pub fn exit_for_error(job: &mut BackupJob, err: &BackupError) -> ! {
    let code = abort(job, err);
    std::process::exit(code);
}
