use crate::error::{config_error, other_error, AppResult};
use crate::gateway::CalendarGateway;
use crate::slots::evaluator::is_slot_free;
use crate::slots::models::{BusyPeriod, FreeSlot, TimePocket};
use crate::slots::time::{event_boundary, localize, resolve_timezone};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::{debug, info};

/// Finds the daily pockets within a date range that have no overlapping
/// calendar events. The gateway is an injected dependency; one events fetch
/// covers the whole range.
pub struct FreeSlotFinder {
    gateway: Arc<dyn CalendarGateway>,
    calendar_id: String,
}

impl FreeSlotFinder {
    pub fn new(gateway: Arc<dyn CalendarGateway>, calendar_id: impl Into<String>) -> Self {
        Self {
            gateway,
            calendar_id: calendar_id.into(),
        }
    }

    /// Find free slots in the half-open window `[start_date, end_date)`.
    ///
    /// The result is ordered pocket-major, date-minor: for each pocket,
    /// every free day in the range is listed before the next pocket starts.
    pub async fn find_free_slots(
        &self,
        start_date: &str,
        end_date: &str,
        pockets: &[TimePocket],
        timezone: &str,
    ) -> AppResult<Vec<FreeSlot>> {
        let tz = resolve_timezone(timezone)?;

        let range_start = parse_date(start_date)?;
        let range_end = parse_date(end_date)?;

        let time_min = localize(tz, midnight(range_start)?)?;
        let time_max = localize(tz, midnight(range_end)?)?;

        let events = self
            .gateway
            .list_events(&self.calendar_id, time_min, time_max)
            .await?;

        info!(
            "Fetched {} events between {} and {}",
            events.len(),
            start_date,
            end_date
        );

        let busy = events
            .iter()
            .map(|event| {
                Ok(BusyPeriod {
                    start: event_boundary(&event.start, tz)?,
                    end: event_boundary(&event.end, tz)?,
                })
            })
            .collect::<AppResult<Vec<_>>>()?;

        let mut free_slots = Vec::new();

        // Pockets outer, days inner: the nesting fixes the output order
        for pocket in pockets {
            let mut day = range_start;
            while day < range_end {
                let slot_start = localize(tz, day.and_time(pocket.start))?;
                let slot_end = localize(tz, day.and_time(pocket.end))?;

                if is_slot_free(slot_start, slot_end, &busy) {
                    debug!(
                        "Free slot on {} from {} to {}",
                        day,
                        pocket.start.format("%H:%M"),
                        pocket.end.format("%H:%M")
                    );
                    free_slots.push(FreeSlot {
                        date: day,
                        start: pocket.start,
                        end: pocket.end,
                    });
                }

                day = day
                    .succ_opt()
                    .ok_or_else(|| other_error("Date overflow while iterating range"))?;
            }
        }

        Ok(free_slots)
    }
}

fn parse_date(input: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d")
        .map_err(|_| config_error(&format!("Invalid date: {}", input)))
}

fn midnight(date: NaiveDate) -> AppResult<chrono::NaiveDateTime> {
    date.and_hms_opt(0, 0, 0)
        .ok_or_else(|| other_error(&format!("Failed to create midnight for {}", date)))
}
