use std::collections::HashMap;

use chrono::{Days, NaiveDate};
use itertools::Itertools;
use log::debug;
use snafu::{OptionExt, ensure};

use crate::error::{DuplicateIdSnafu, DuplicateItemSnafu, ItemNotFoundSnafu, Result};
use crate::grade::Grade;
use crate::item::{ItemId, ReviewItem};
use crate::policy;

/// Owns the pool of items under spaced repetition. Every operation is a
/// synchronous in-memory transition; dates are injected by the caller, so the
/// scheduler never reads a clock. Callers exposing this behind a service
/// boundary must serialize concurrent reviews of the same item themselves.
#[derive(Debug, Clone, Default)]
pub struct ReviewScheduler {
    items: HashMap<ItemId, ReviewItem>,
    index: HashMap<(String, String), ItemId>,
    next_id: u64,
}

impl ReviewScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a pool from previously exported [`ReviewScheduler::snapshot`]
    /// output. Items colliding on id or `(subject, topic)` are rejected.
    pub fn from_items(items: impl IntoIterator<Item = ReviewItem>) -> Result<Self> {
        let mut scheduler = Self::new();
        for item in items {
            ensure!(
                !scheduler.items.contains_key(&item.id),
                DuplicateIdSnafu { id: item.id }
            );
            ensure!(
                !scheduler
                    .index
                    .contains_key(&(item.subject.clone(), item.topic.clone())),
                DuplicateItemSnafu {
                    subject: item.subject,
                    topic: item.topic,
                }
            );
            scheduler.next_id = scheduler.next_id.max(item.id.0 + 1);
            scheduler
                .index
                .insert((item.subject.clone(), item.topic.clone()), item.id);
            scheduler.items.insert(item.id, item);
        }
        Ok(scheduler)
    }

    /// Puts a new topic under spaced repetition, due for its first review the
    /// day after `creation_date`.
    pub fn add_item(
        &mut self,
        subject: &str,
        topic: &str,
        creation_date: NaiveDate,
    ) -> Result<ReviewItem> {
        ensure!(
            !self
                .index
                .contains_key(&(subject.to_string(), topic.to_string())),
            DuplicateItemSnafu { subject, topic }
        );
        let id = ItemId(self.next_id);
        self.next_id += 1;
        let item = ReviewItem {
            id,
            subject: subject.to_string(),
            topic: topic.to_string(),
            interval_days: policy::INTERVAL_START,
            ease: policy::EASE_START,
            review_count: 0,
            next_review_date: creation_date + Days::new(policy::INTERVAL_START as u64),
            last_review_date: None,
        };
        self.index
            .insert((subject.to_string(), topic.to_string()), id);
        self.items.insert(id, item.clone());
        debug!("added item {id} ({subject}/{topic}), first review {}", item.next_review_date);
        Ok(item)
    }

    /// Every item due on or before `as_of`, soonest first; ties go to the
    /// less-reviewed item, then to the lower id. Pure read.
    pub fn due_items(&self, as_of: NaiveDate) -> Vec<ReviewItem> {
        self.items
            .values()
            .filter(|item| item.is_due(as_of))
            .cloned()
            .sorted_by_key(|item| (item.next_review_date, item.review_count, item.id))
            .collect()
    }

    /// Applies one review outcome: adjusts interval and ease for the grade,
    /// stamps `last_review_date`, and reschedules the item `interval_days`
    /// after `as_of`. The item stays in the pool indefinitely; "mastered" is a
    /// caller-level notion built on `ease`/`review_count`.
    pub fn record_review(
        &mut self,
        id: ItemId,
        as_of: NaiveDate,
        grade: Grade,
    ) -> Result<ReviewItem> {
        let item = self.items.get_mut(&id).context(ItemNotFoundSnafu { id })?;
        let (interval_days, ease) = policy::next_step(item.interval_days, item.ease, grade);
        item.interval_days = interval_days;
        item.ease = ease;
        item.last_review_date = Some(as_of);
        item.next_review_date = as_of + Days::new(interval_days as u64);
        item.review_count += 1;
        debug!("item {id} graded {grade}, next review {}", item.next_review_date);
        Ok(item.clone())
    }

    /// [`ReviewScheduler::record_review`] for callers holding a raw 1-4
    /// rating instead of a [`Grade`].
    pub fn record_review_rating(
        &mut self,
        id: ItemId,
        as_of: NaiveDate,
        rating: u8,
    ) -> Result<ReviewItem> {
        self.record_review(id, as_of, Grade::from_rating(rating)?)
    }

    /// Removes the item. Idempotent: unknown ids are a no-op.
    pub fn remove(&mut self, id: ItemId) {
        if let Some(item) = self.items.remove(&id) {
            self.index.remove(&(item.subject, item.topic));
        }
    }

    pub fn get(&self, id: ItemId) -> Option<&ReviewItem> {
        self.items.get(&id)
    }

    /// All items, id ascending, for persistence/export. Pure read.
    pub fn snapshot(&self) -> Vec<ReviewItem> {
        self.items
            .values()
            .cloned()
            .sorted_by_key(|item| item.id)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
