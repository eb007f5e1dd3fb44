use chrono::{Days, NaiveDate};
use repsched::{ForecastConfig, Grade, ReviewScheduler, forecast};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    fern::Dispatch::new()
        .level(log::LevelFilter::Debug)
        .chain(std::io::stdout())
        .apply()?;

    let today = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let mut scheduler = ReviewScheduler::new();
    scheduler.add_item("Mathematics", "Linear Algebra Basics", today)?;
    scheduler.add_item("Physics", "Newton's Laws", today)?;
    scheduler.add_item("Computer Science", "Data Structures", today)?;

    // Walk a week of reviewing, grading everything due each morning.
    for offset in 1..=7 {
        let date = today + Days::new(offset);
        let due = scheduler.due_items(date);
        if due.is_empty() {
            continue;
        }
        println!("{date}: {} item(s) due", due.len());
        for item in due {
            let grade = if item.review_count == 0 {
                Grade::Good
            } else {
                Grade::Easy
            };
            let updated = scheduler.record_review(item.id, date, grade)?;
            println!(
                "  {} / {} -> next review {} (interval {}d, ease {:.2})",
                updated.subject,
                updated.topic,
                updated.next_review_date,
                updated.interval_days,
                updated.ease,
            );
        }
    }

    // Project the coming month's workload.
    let config = ForecastConfig {
        horizon_days: 30,
        ..ForecastConfig::default()
    };
    let projection = forecast(&scheduler, today + Days::new(8), &config)?;
    println!(
        "reviews over the next 30 days: {}",
        projection.reviewed_per_day.iter().sum::<usize>()
    );

    Ok(())
}
