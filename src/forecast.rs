use std::cmp::Reverse;

use chrono::{Days, NaiveDate};
use log::info;
use priority_queue::PriorityQueue;
use rand::SeedableRng;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::rngs::StdRng;

use crate::error::{InvalidConfigSnafu, Result};
use crate::grade::Grade;
use crate::item::ItemId;
use crate::scheduler::ReviewScheduler;

const GRADES: [Grade; 4] = [Grade::Again, Grade::Hard, Grade::Good, Grade::Easy];

#[derive(Debug, Clone, PartialEq)]
pub struct ForecastConfig {
    pub horizon_days: usize,
    /// Probability weights for sampling [again, hard, good, easy].
    pub grade_probs: [f32; 4],
    /// Reviews completed per day; anything past the limit stays due.
    pub review_limit: usize,
    pub seed: u64,
}

impl Default for ForecastConfig {
    fn default() -> Self {
        Self {
            horizon_days: 90,
            grade_probs: [0.24, 0.094, 0.495, 0.171],
            review_limit: usize::MAX,
            seed: 42,
        }
    }
}

/// Projected review load, one entry per day of the horizon.
#[derive(Debug, Clone, PartialEq)]
pub struct Forecast {
    /// Items due at the start of the day, carried-over backlog included.
    pub due_per_day: Vec<usize>,
    pub reviewed_per_day: Vec<usize>,
    /// Items left due after the day's reviews.
    pub backlog_per_day: Vec<usize>,
}

/// Simulates `config.horizon_days` of reviewing against a copy of the pool,
/// grading each due item with a draw from `config.grade_probs`. Deterministic
/// for a fixed seed; the scheduler itself is never mutated.
pub fn forecast(
    scheduler: &ReviewScheduler,
    start: NaiveDate,
    config: &ForecastConfig,
) -> Result<Forecast> {
    let dist = WeightedIndex::new(config.grade_probs).map_err(|e| {
        InvalidConfigSnafu {
            reason: format!("grade_probs: {e}"),
        }
        .build()
    })?;
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pool = scheduler.clone();

    // Due order matches `due_items`: date, then review count, then id.
    let mut queue: PriorityQueue<ItemId, Reverse<(NaiveDate, u32, ItemId)>> = pool
        .snapshot()
        .into_iter()
        .map(|item| (item.id, Reverse((item.next_review_date, item.review_count, item.id))))
        .collect();

    let mut due_per_day = vec![0; config.horizon_days];
    let mut reviewed_per_day = vec![0; config.horizon_days];
    let mut backlog_per_day = vec![0; config.horizon_days];

    for day_index in 0..config.horizon_days {
        let today = start + Days::new(day_index as u64);

        let mut due_today = Vec::new();
        while let Some((_, &Reverse((due, _, _)))) = queue.peek() {
            if due > today {
                break;
            }
            if let Some(entry) = queue.pop() {
                due_today.push(entry);
            }
        }
        due_per_day[day_index] = due_today.len();

        for (id, priority) in due_today {
            if reviewed_per_day[day_index] >= config.review_limit {
                // Left due; it surfaces again tomorrow.
                backlog_per_day[day_index] += 1;
                queue.push(id, priority);
                continue;
            }
            let grade = GRADES[dist.sample(&mut rng)];
            let item = pool.record_review(id, today, grade)?;
            queue.push(id, Reverse((item.next_review_date, item.review_count, id)));
            reviewed_per_day[day_index] += 1;
        }
    }

    info!(
        "forecast from {start}: {} reviews over {} days across {} items",
        reviewed_per_day.iter().sum::<usize>(),
        config.horizon_days,
        scheduler.len(),
    );
    Ok(Forecast {
        due_per_day,
        reviewed_per_day,
        backlog_per_day,
    })
}
