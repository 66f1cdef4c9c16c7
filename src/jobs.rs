//! Background meal-plan generation as a message-passing handoff.
//!
//! The dispatcher hands a payload to a worker thread which opens its own
//! database connection (mirroring one-session-per-task), walks the plan
//! through pending -> processing -> completed, and on any error parks the
//! plan in the terminal failed state with its message. Errors never cross
//! the job boundary; progress is observed by polling the persisted status.

use std::path::PathBuf;
use std::thread;

use anyhow::Result;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::core::planner;
use crate::db::Database;
use crate::models::PlanStatus;

/// Everything a worker needs to run one generation job.
#[derive(Debug, Clone)]
pub struct GenerateJob {
    pub db_path: PathBuf,
    pub plan_id: String,
    pub user_id: i64,
    pub dietary_preference: String,
    pub calorie_target: i64,
    pub exclude_ingredients: Vec<String>,
    /// Seed for deterministic generation in tests; None draws from entropy.
    pub rng_seed: Option<u64>,
}

pub struct JobHandle {
    plan_id: String,
    handle: thread::JoinHandle<()>,
}

impl JobHandle {
    pub fn plan_id(&self) -> &str {
        &self.plan_id
    }

    /// Block until the worker finishes. Status is read from storage, not
    /// returned here.
    pub fn wait(self) {
        let _ = self.handle.join();
    }
}

/// Hand the job to a worker thread and return immediately.
pub fn dispatch(job: GenerateJob) -> JobHandle {
    let plan_id = job.plan_id.clone();
    let handle = thread::spawn(move || {
        if let Err(e) = run(&job) {
            mark_failed(&job, &e.to_string());
        }
    });
    JobHandle { plan_id, handle }
}

fn run(job: &GenerateJob) -> Result<()> {
    let db = Database::open(&job.db_path)?;
    db.transition_plan(&job.plan_id, PlanStatus::Processing)?;

    let mut rng: StdRng = match job.rng_seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let meals = planner::generate_week(
        &job.dietary_preference,
        &job.exclude_ingredients,
        &mut rng,
    );

    db.complete_plan(&job.plan_id, &meals)?;
    Ok(())
}

/// Best-effort capture of the failure into the plan row. If even that write
/// fails there is nothing left to do but report on stderr.
fn mark_failed(job: &GenerateJob, message: &str) {
    let result = Database::open(&job.db_path).and_then(|db| db.fail_plan(&job.plan_id, message));
    if let Err(e) = result {
        eprintln!(
            "{}",
            serde_json::to_string(&crate::output::error(
                "plan_generate_job",
                "generation_failed",
                &format!("could not record failure for plan {}: {}", job.plan_id, e),
            ))
            .unwrap_or_default()
        );
    }
}
