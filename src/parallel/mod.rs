//! Parallel batch processing of independent inpaint jobs

use crate::types::{ProcessingConfig, Result};
use rayon::prelude::*;
use std::path::PathBuf;

/// One batch work item: input image, mask image, output destination.
#[derive(Debug, Clone)]
pub struct BatchJob {
    pub input: PathBuf,
    pub mask: PathBuf,
    pub output: PathBuf,
}

/// Run independent inpaint jobs across the rayon thread pool.
///
/// Each job loads, inpaints, and saves on its own; a failing job does not
/// abort the others. Results come back in job order. The engine itself is
/// single-threaded; parallelism is only across whole invocations, which
/// share no state.
pub fn inpaint_batch(jobs: &[BatchJob], config: &ProcessingConfig) -> Vec<Result<()>> {
    jobs.par_iter()
        .map(|job| crate::process_image(&job.input, &job.mask, &job.output, config))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_batch() {
        let results = inpaint_batch(&[], &ProcessingConfig::default());
        assert!(results.is_empty());
    }

    #[test]
    fn test_failing_job_reports_in_order() {
        let jobs = vec![
            BatchJob {
                input: PathBuf::from("/nonexistent/a.png"),
                mask: PathBuf::from("/nonexistent/a_mask.png"),
                output: PathBuf::from("/nonexistent/a_out.png"),
            },
            BatchJob {
                input: PathBuf::from("/nonexistent/b.png"),
                mask: PathBuf::from("/nonexistent/b_mask.png"),
                output: PathBuf::from("/nonexistent/b_out.png"),
            },
        ];

        let config = ProcessingConfig {
            show_progress: false,
            ..Default::default()
        };
        let results = inpaint_batch(&jobs, &config);

        assert_eq!(results.len(), 2);
        assert!(results.iter().all(|r| r.is_err()));
    }
}
