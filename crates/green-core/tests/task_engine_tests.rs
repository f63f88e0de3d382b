mod common;

use common::{create_test_garden, create_test_gardener, planting_params};
use green_core::{
    engine::TaskView,
    params::{Id, ListTasks, UpdatePlanting},
    ErrorKind, GardenError, Task, TaskStatus, TaskType,
};
use jiff::civil::{date, Date};

const PLANTED: Date = Date::constant(2025, 5, 1);

fn day(offset: i64) -> Date {
    PLANTED
        .checked_add(jiff::Span::new().days(offset))
        .expect("date in range")
}

fn task_of(tasks: &[Task], task_type: TaskType) -> &Task {
    tasks
        .iter()
        .find(|task| task.task_type == task_type)
        .expect("task of that type")
}

async fn all_tasks(gardener: &green_core::Gardener) -> Vec<Task> {
    gardener
        .list_tasks(&ListTasks {
            view: TaskView::All,
        })
        .await
        .expect("Failed to list tasks")
}

#[tokio::test]
async fn test_planting_generates_initial_tasks() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;

    let created = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");

    let tasks = &created.tasks;
    assert_eq!(tasks.len(), 3);
    assert!(tasks.iter().all(|t| t.status == TaskStatus::Pending));
    assert!(tasks.iter().all(|t| t.planting_id == created.planting.id));

    let water = task_of(tasks, TaskType::Water);
    assert_eq!(water.due_date, day(2));
    assert_eq!(water.recurring_days.map(|d| d.get()), Some(2));
    assert_eq!(water.details, "Water your Tomato in your garden");

    let harvest = task_of(tasks, TaskType::Harvest);
    assert_eq!(harvest.due_date, day(60));
    assert_eq!(harvest.recurring_days, None);

    let pest = task_of(tasks, TaskType::PestCheck);
    assert_eq!(pest.due_date, day(7));
    assert_eq!(pest.recurring_days.map(|d| d.get()), Some(14));

    // Stored exactly as returned
    let mut stored = all_tasks(&gardener).await;
    stored.sort_by_key(|t| t.id);
    assert_eq!(stored, created.tasks);
}

#[tokio::test]
async fn test_watering_interval_follows_plant_needs() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;

    for (plant_id, expected_days) in [("tomato", 2), ("kale", 3), ("rosemary", 5)] {
        let created = gardener
            .create_planting(&planting_params(&garden, plant_id, PLANTED))
            .await
            .expect("Failed to create planting");
        let water = task_of(&created.tasks, TaskType::Water);
        assert_eq!(
            water.recurring_days.map(|d| d.get()),
            Some(expected_days),
            "watering interval for {plant_id}"
        );
    }
}

#[tokio::test]
async fn test_plant_without_maturity_has_no_harvest_task() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;

    let mut params = planting_params(&garden, "mint", PLANTED);
    params.location_notes = Some("the herb spiral".to_string());
    let created = gardener
        .create_planting(&params)
        .await
        .expect("Failed to create planting");

    let kinds: Vec<_> = created.tasks.iter().map(|t| t.task_type).collect();
    assert_eq!(kinds, [TaskType::Water, TaskType::PestCheck]);
    assert_eq!(created.tasks[0].details, "Water your Mint in the herb spiral");
}

#[tokio::test]
async fn test_completing_recurring_task_schedules_next() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let created = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");
    let water = task_of(&created.tasks, TaskType::Water).clone();

    clock.set(day(2));
    let completion = gardener
        .complete_task(&Id { id: water.id })
        .await
        .expect("Failed to complete task");

    assert_eq!(completion.completed.id, water.id);
    assert_eq!(completion.completed.status, TaskStatus::Completed);
    assert!(completion.completed.completed_at.is_some());

    let next = completion.successor.expect("watering recurs");
    assert_ne!(next.id, water.id);
    assert_eq!(next.task_type, TaskType::Water);
    assert_eq!(next.status, TaskStatus::Pending);
    assert_eq!(next.due_date, day(4));
    assert_eq!(next.recurring_days, water.recurring_days);
    assert_eq!(next.planting_id, water.planting_id);
    assert_eq!(next.details, water.details);

    let stored = gardener
        .get_task(&Id { id: water.id })
        .await
        .expect("Failed to get task")
        .expect("task exists");
    assert!(stored.is_completed());
    assert_eq!(all_tasks(&gardener).await.len(), 4);
}

#[tokio::test]
async fn test_late_completion_counts_from_old_due_date() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let created = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");
    let pest = task_of(&created.tasks, TaskType::PestCheck).clone();

    clock.set(day(12));
    let completion = gardener
        .complete_task(&Id { id: pest.id })
        .await
        .expect("Failed to complete task");
    let next = completion.successor.expect("pest checks recur");
    assert_eq!(next.due_date, day(21));
}

#[tokio::test]
async fn test_task_cannot_be_completed_before_due_date() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let created = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");
    let harvest = task_of(&created.tasks, TaskType::Harvest).clone();

    clock.set(day(10));
    let err = gardener
        .complete_task(&Id { id: harvest.id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotYetDue);
    match &err {
        GardenError::NotYetDue { task_id, due_date } => {
            assert_eq!(*task_id, harvest.id);
            assert_eq!(*due_date, day(60));
        }
        other => panic!("Expected NotYetDue error, got {other:?}"),
    }
    assert_eq!(
        err.to_string(),
        "This task cannot be completed yet. It is scheduled for June 30, 2025."
    );

    let stored = gardener
        .get_task(&Id { id: harvest.id })
        .await
        .expect("Failed to get task")
        .expect("task exists");
    assert_eq!(stored, harvest);
    assert_eq!(all_tasks(&gardener).await.len(), 3);

    // On the day itself it goes through and nothing follows
    clock.set(day(60));
    let completion = gardener
        .complete_task(&Id { id: harvest.id })
        .await
        .expect("Failed to complete task");
    assert!(completion.successor.is_none());
    assert_eq!(all_tasks(&gardener).await.len(), 3);
}

#[tokio::test]
async fn test_task_cannot_be_completed_twice() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let created = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");
    let water = task_of(&created.tasks, TaskType::Water).clone();

    clock.set(day(3));
    gardener
        .complete_task(&Id { id: water.id })
        .await
        .expect("Failed to complete task");
    let err = gardener
        .complete_task(&Id { id: water.id })
        .await
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Validation);

    // Only one successor was scheduled
    let pending_water = all_tasks(&gardener)
        .await
        .into_iter()
        .filter(|t| t.task_type == TaskType::Water && t.status == TaskStatus::Pending)
        .count();
    assert_eq!(pending_water, 1);
}

#[tokio::test]
async fn test_complete_unknown_task() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let err = gardener.complete_task(&Id { id: 999 }).await.unwrap_err();
    assert!(matches!(err, GardenError::TaskNotFound { id: 999 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[tokio::test]
async fn test_delete_planting_removes_only_its_tasks() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let tomato = gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");
    let kale = gardener
        .create_planting(&planting_params(&garden, "kale", PLANTED))
        .await
        .expect("Failed to create planting");

    // A completed task and its successor are both removed with the planting
    clock.set(day(2));
    gardener
        .complete_task(&Id {
            id: task_of(&tomato.tasks, TaskType::Water).id,
        })
        .await
        .expect("Failed to complete task");

    clock.set(day(30));
    let deleted = gardener
        .delete_planting(&Id {
            id: tomato.planting.id,
        })
        .await
        .expect("Failed to delete planting");
    assert_eq!(deleted.planting.id, tomato.planting.id);
    assert_eq!(deleted.removed_task_ids.len(), 4);

    let remaining = all_tasks(&gardener).await;
    assert_eq!(remaining.len(), kale.tasks.len());
    assert!(remaining.iter().all(|t| t.planting_id == kale.planting.id));

    assert!(gardener
        .get_planting(&Id {
            id: tomato.planting.id
        })
        .await
        .expect("Failed to get planting")
        .is_none());
    let err = gardener
        .tasks_for_planting(&Id {
            id: tomato.planting.id,
        })
        .await
        .unwrap_err();
    assert!(matches!(err, GardenError::PlantingNotFound { .. }));
}

#[tokio::test]
async fn test_delete_unknown_planting_is_not_found() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    gardener
        .create_planting(&planting_params(&garden, "kale", PLANTED))
        .await
        .expect("Failed to create planting");

    let err = gardener.delete_planting(&Id { id: 9999 }).await.unwrap_err();
    assert!(matches!(err, GardenError::PlantingNotFound { id: 9999 }));
    assert_eq!(err.kind(), ErrorKind::NotFound);
    assert_eq!(all_tasks(&gardener).await.len(), 3);
}

#[tokio::test]
async fn test_removed_planting_keeps_its_tasks() {
    let (_dir, gardener, _clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    let created = gardener
        .create_planting(&planting_params(&garden, "kale", PLANTED))
        .await
        .expect("Failed to create planting");

    let updated = gardener
        .update_planting(&UpdatePlanting {
            id: created.planting.id,
            quantity: Some(8),
            status: Some("removed".to_string()),
            ..Default::default()
        })
        .await
        .expect("Failed to update planting");
    assert_eq!(updated.quantity, 8);

    let active = gardener
        .list_plantings(&Default::default())
        .await
        .expect("Failed to list plantings");
    assert!(active.is_empty());
    assert_eq!(all_tasks(&gardener).await.len(), 3);
}

#[tokio::test]
async fn test_task_views_follow_the_clock() {
    let (_dir, gardener, clock) = create_test_gardener(PLANTED).await;
    let garden = create_test_garden(&gardener).await;
    gardener
        .create_planting(&planting_params(&garden, "tomato", PLANTED))
        .await
        .expect("Failed to create planting");

    let view = |view| ListTasks { view };

    // Planted on a Thursday: water falls on Saturday, pest check next week
    assert!(gardener
        .list_tasks(&view(TaskView::Today))
        .await
        .expect("Failed to list tasks")
        .is_empty());
    let week = gardener
        .list_tasks(&view(TaskView::ThisWeek))
        .await
        .expect("Failed to list tasks");
    assert_eq!(week.len(), 1);
    assert_eq!(week[0].task_type, TaskType::Water);

    clock.set(date(2025, 5, 10));
    let overdue = gardener
        .list_tasks(&view(TaskView::Overdue))
        .await
        .expect("Failed to list tasks");
    let kinds: Vec<_> = overdue.iter().map(|t| t.task_type).collect();
    assert_eq!(kinds, [TaskType::Water, TaskType::PestCheck]);

    let summary = gardener.task_summary().await.expect("Failed to summarize");
    assert_eq!(summary.overdue, 2);
    // Saturday: the pest check from Thursday still falls in this week
    assert_eq!(summary.this_week, 1);
    assert_eq!(summary.pending, 3);
    assert_eq!(summary.completed, 0);
}
