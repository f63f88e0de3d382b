//! Initial task generation for a new planting.

use std::num::NonZeroU32;

use jiff::{civil::Date, Span};

use crate::{
    error::{GardenError, Result},
    models::{interval_days, NewTask, PlantDefinition, Planting, TaskType},
};

/// Days after planting that the first watering falls due.
pub const FIRST_WATERING_AFTER_DAYS: i64 = 2;

/// Days after planting that the first pest check falls due.
pub const FIRST_PEST_CHECK_AFTER_DAYS: i64 = 7;

/// Pest checks repeat every two weeks.
pub const PEST_CHECK_INTERVAL: NonZeroU32 = interval_days(14);

/// Stand-in for missing location notes in task descriptions.
const DEFAULT_LOCATION: &str = "your garden";

/// Derives the starting task set for a planting.
///
/// Always yields a recurring water task and a recurring pest check; a
/// one-off harvest task is added between them when the plant has a
/// `days_to_maturity`. The planting is not modified.
///
/// # Errors
///
/// * `GardenError::InvalidInput` - a due date would fall outside the
///   supported calendar range
///
/// # Examples
///
/// ```rust
/// use green_core::{engine::generate_initial_tasks, models::TaskType, StaticCatalog, PlantCatalog};
/// # use green_core::models::{Planting, PlantingStatus};
/// # use jiff::{civil::date, Timestamp};
///
/// let catalog = StaticCatalog::winston()?;
/// let tomato = catalog.lookup("tomato").expect("tomato is in the catalog");
/// # let planting = Planting {
/// #     id: 1, user_id: "household".into(), garden_id: 1, area_id: 1,
/// #     plant_id: "tomato".into(), quantity: 2, date_planted: date(2025, 5, 1),
/// #     location_notes: None, status: PlantingStatus::Active, created_at: Timestamp::now(),
/// # };
/// let tasks = generate_initial_tasks(&planting, &tomato)?;
/// let kinds: Vec<_> = tasks.iter().map(|t| t.task_type).collect();
/// assert_eq!(kinds, [TaskType::Water, TaskType::Harvest, TaskType::PestCheck]);
/// # Result::<(), green_core::GardenError>::Ok(())
/// ```
pub fn generate_initial_tasks(planting: &Planting, plant: &PlantDefinition) -> Result<Vec<NewTask>> {
    let location = planting
        .location_notes
        .as_deref()
        .map(str::trim)
        .filter(|notes| !notes.is_empty())
        .unwrap_or(DEFAULT_LOCATION);

    let draft = |task_type, due_date, details, recurring_days| NewTask {
        user_id: planting.user_id.clone(),
        planting_id: planting.id,
        garden_id: planting.garden_id,
        task_type,
        due_date,
        details,
        related_plant_name: plant.name.clone(),
        related_area_id: planting.area_id,
        recurring_days,
    };

    let mut tasks = Vec::with_capacity(3);

    tasks.push(draft(
        TaskType::Water,
        days_after(planting.date_planted, FIRST_WATERING_AFTER_DAYS)?,
        format!("Water your {} in {location}", plant.name),
        Some(plant.watering_needs.watering_interval()),
    ));

    if let Some(days_to_maturity) = plant.days_to_maturity {
        tasks.push(draft(
            TaskType::Harvest,
            days_after(planting.date_planted, i64::from(days_to_maturity))?,
            format!("Harvest your {} from {location}", plant.name),
            None,
        ));
    }

    tasks.push(draft(
        TaskType::PestCheck,
        days_after(planting.date_planted, FIRST_PEST_CHECK_AFTER_DAYS)?,
        format!("Check {} for pests and diseases", plant.name),
        Some(PEST_CHECK_INTERVAL),
    ));

    Ok(tasks)
}

/// Adds whole days to a calendar date, failing instead of overflowing.
pub(crate) fn days_after(date: Date, days: i64) -> Result<Date> {
    Span::new()
        .try_days(days)
        .and_then(|span| date.checked_add(span))
        .map_err(|e| {
            GardenError::invalid_input("due_date")
                .with_reason(format!("{date} plus {days} days is out of range: {e}"))
        })
}
