//! Startup fixture loading.

use tracing::info;

use crudhub_core::result::AppResult;
use crudhub_core::traits::Repository;
use crudhub_core::types::PageSource;
use crudhub_entity::Task;
use crudhub_entity::task::fixtures::sample_tasks;

/// Insert the sample tasks if the task collection is empty.
///
/// Returns the number of tasks inserted.
pub async fn seed_tasks(tasks: &dyn Repository<Task>) -> AppResult<usize> {
    if tasks.query_all().count().await? > 0 {
        return Ok(0);
    }

    let samples = sample_tasks();
    let inserted = samples.len();
    for task in samples {
        tasks.save(task).await?;
    }

    info!(count = inserted, "Seeded sample tasks");
    Ok(inserted)
}
