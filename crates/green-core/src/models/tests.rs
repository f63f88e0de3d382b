#[cfg(test)]
mod model_tests {
    use std::num::NonZeroU32;

    use jiff::{
        civil::{date, Date},
        Timestamp,
    };

    use crate::{
        display::{Gardens, LongDate, TaskList},
        engine::TaskView,
        models::{
            Area, AreaType, Garden, NewTask, PlantingChanges, PlantingStatus, Task, TaskStatus,
            TaskSummary, TaskType, WateringNeeds,
        },
    };

    const TODAY: Date = Date::constant(2025, 6, 4);

    fn create_test_task(id: u64, due_date: Date, status: TaskStatus) -> Task {
        Task {
            id,
            user_id: "household".to_string(),
            planting_id: 7,
            garden_id: 1,
            task_type: TaskType::Water,
            due_date,
            status,
            completed_at: if status == TaskStatus::Completed {
                Some(Timestamp::from_second(1_748_995_200).unwrap()) // 2025-06-04 00:00:00 UTC
            } else {
                None
            },
            details: "Water your Tomato in your garden".to_string(),
            related_plant_name: "Tomato".to_string(),
            related_area_id: 2,
            recurring_days: NonZeroU32::new(2),
            notification_sent: false,
            created_at: Timestamp::from_second(1_748_736_000).unwrap(), // 2025-06-01 00:00:00 UTC
        }
    }

    fn create_test_garden() -> Garden {
        Garden {
            id: 3,
            user_id: "household".to_string(),
            name: "Home".to_string(),
            location: Some("Winston, OR".to_string()),
            created_at: Timestamp::from_second(1_748_736_000).unwrap(),
            areas: vec![
                Area {
                    id: 10,
                    garden_id: 3,
                    name: "Perimeter Bed".to_string(),
                    area_type: AreaType::Outdoor,
                    length_ft: None,
                    width_ft: None,
                },
                Area {
                    id: 11,
                    garden_id: 3,
                    name: "Greenhouse".to_string(),
                    area_type: AreaType::Greenhouse,
                    length_ft: Some(12.0),
                    width_ft: Some(8.5),
                },
            ],
        }
    }

    #[test]
    fn test_status_parsing() {
        assert_eq!("ACTIVE".parse::<PlantingStatus>(), Ok(PlantingStatus::Active));
        assert_eq!("done".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("archived".parse::<PlantingStatus>().is_err());
        assert_eq!(TaskStatus::Completed.with_icon(), "✓ Completed");
        assert_eq!(TaskStatus::Pending.with_icon(), "○ Pending");
    }

    #[test]
    fn test_task_type_names() {
        assert_eq!(TaskType::PestCheck.as_str(), "pestCheck");
        assert_eq!("pest-check".parse::<TaskType>(), Ok(TaskType::PestCheck));
        assert_eq!("pestCheck".parse::<TaskType>(), Ok(TaskType::PestCheck));
        assert_eq!(TaskType::Harvest.with_icon(), "🧺 Harvest");
        assert!("prune".parse::<TaskType>().is_err());
    }

    #[test]
    fn test_watering_needs_parsing() {
        assert_eq!("High".parse::<WateringNeeds>(), Ok(WateringNeeds::High));
        assert!("soggy".parse::<WateringNeeds>().is_err());
    }

    #[test]
    fn test_task_serializes_camel_case_type() {
        let task = create_test_task(1, TODAY, TaskStatus::Pending);
        let json = serde_json::to_value(&task).expect("serialize");
        assert_eq!(json["task_type"], "water");
        assert_eq!(json["due_date"], "2025-06-04");
        assert_eq!(json["recurring_days"], 2);
        assert!(json.get("completed_at").is_none());

        let mut pest = task.clone();
        pest.task_type = TaskType::PestCheck;
        let json = serde_json::to_value(&pest).expect("serialize");
        assert_eq!(json["task_type"], "pestCheck");

        let back: Task = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, pest);
    }

    #[test]
    fn test_new_task_into_task() {
        let draft = NewTask {
            user_id: "household".to_string(),
            planting_id: 7,
            garden_id: 1,
            task_type: TaskType::Harvest,
            due_date: date(2025, 8, 20),
            details: "Harvest your Tomato from your garden".to_string(),
            related_plant_name: "Tomato".to_string(),
            related_area_id: 2,
            recurring_days: None,
        };
        let task = draft.into_task(44, Timestamp::UNIX_EPOCH);
        assert_eq!(task.id, 44);
        assert_eq!(task.status, TaskStatus::Pending);
        assert!(!task.is_recurring());
        assert!(!task.notification_sent);
        assert!(task.completed_at.is_none());
    }

    #[test]
    fn test_garden_area_lookup() {
        let garden = create_test_garden();
        assert_eq!(garden.area(11).map(|a| a.name.as_str()), Some("Greenhouse"));
        assert!(garden.area(99).is_none());
    }

    #[test]
    fn test_planting_changes_describe() {
        let changes = PlantingChanges {
            quantity: Some(6),
            location_notes: None,
            status: Some(PlantingStatus::Removed),
        };
        assert!(!changes.is_empty());
        assert_eq!(
            changes.describe(),
            vec!["Quantity set to 6".to_string(), "Status set to removed".to_string()]
        );
        assert!(PlantingChanges::default().is_empty());
    }

    #[test]
    fn test_task_summary_counts() {
        let tasks = vec![
            create_test_task(1, date(2025, 5, 30), TaskStatus::Pending), // overdue, last week
            create_test_task(2, TODAY, TaskStatus::Pending),            // today
            create_test_task(3, date(2025, 6, 6), TaskStatus::Pending), // this week
            create_test_task(4, date(2025, 6, 12), TaskStatus::Pending), // next week
            create_test_task(5, TODAY, TaskStatus::Completed),
        ];
        let summary = TaskSummary::from_tasks(&tasks, TODAY);
        assert_eq!(summary.today, Some(TODAY));
        assert_eq!(summary.overdue, 1);
        assert_eq!(summary.due_today, 1);
        assert_eq!(summary.this_week, 1);
        assert_eq!(summary.pending, 4);
        assert_eq!(summary.completed, 1);

        let output = summary.to_string();
        assert!(output.contains("## Tasks for June 4, 2025"));
        assert!(output.contains("- Overdue: 1"));
    }

    #[test]
    fn test_task_display() {
        let task = create_test_task(12, TODAY, TaskStatus::Pending);
        let output = format!("{task}");
        assert!(output.contains("### 12. Water your Tomato in your garden (○ Pending)"));
        assert!(output.contains("- Due: June 4, 2025"));
        assert!(output.contains("- Repeats: every 2 days"));
        assert!(!output.contains("Completed:"));
    }

    #[test]
    fn test_garden_display() {
        let output = format!("{}", create_test_garden());
        assert!(output.starts_with("# 3. Home"));
        assert!(output.contains("- Location: Winston, OR"));
        assert!(output.contains("- Perimeter Bed (ID: 10, outdoor)"));
        assert!(output.contains("- Greenhouse (ID: 11, greenhouse, 12×8.5 ft)"));
    }

    #[test]
    fn test_gardens_display() {
        let output = Gardens(vec![create_test_garden()]).to_string();
        assert!(output.contains("## Home (ID: 3)"));
        assert!(output.contains("- **Areas**: Perimeter Bed, Greenhouse"));
        assert_eq!(Gardens(vec![]).to_string(), "No gardens found.\n");
    }

    #[test]
    fn test_task_list_display_uses_due_labels() {
        let list = TaskList {
            view: TaskView::All,
            today: TODAY,
            tasks: vec![
                create_test_task(1, date(2025, 6, 2), TaskStatus::Pending),
                create_test_task(2, date(2025, 6, 5), TaskStatus::Pending),
                create_test_task(3, date(2025, 6, 20), TaskStatus::Pending),
                create_test_task(4, TODAY, TaskStatus::Completed),
            ],
        };
        let output = list.to_string();
        assert!(output.starts_with("# All tasks"));
        assert!(output.contains("- **1** 💧 Water: Water your Tomato in your garden (Overdue, every 2 days)"));
        assert!(output.contains("(Tomorrow, every 2 days)"));
        assert!(output.contains("(Jun 20, every 2 days)"));
        assert!(output.contains("(done, every 2 days)"));

        let empty = TaskList {
            view: TaskView::Today,
            today: TODAY,
            tasks: vec![],
        };
        assert!(empty.is_empty());
        assert!(empty.to_string().contains("Nothing to do."));
    }

    #[test]
    fn test_long_date() {
        assert_eq!(LongDate(&date(2025, 12, 25)).to_string(), "December 25, 2025");
    }
}
