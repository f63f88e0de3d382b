//! Collection wrapper types for displaying groups of domain objects.
//!
//! Each wrapper prints its items one after another and a short notice when
//! there is nothing to show.

use std::{fmt, ops::Index};

use jiff::civil::Date;

use crate::{
    engine::{DueLabel, TaskView},
    models::{Garden, PlantDefinition, Planting, Task, TaskStatus},
};

/// Slice-like accessors shared by the collection newtypes.
macro_rules! collection_wrapper {
    ($wrapper:ident, $item:ty) => {
        impl $wrapper {
            /// Check if the collection is empty.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Number of items in the collection.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            pub fn get(&self, index: usize) -> Option<&$item> {
                self.0.get(index)
            }

            pub fn iter(&self) -> std::slice::Iter<'_, $item> {
                self.0.iter()
            }
        }

        impl Index<usize> for $wrapper {
            type Output = $item;

            fn index(&self, index: usize) -> &Self::Output {
                &self.0[index]
            }
        }

        impl IntoIterator for $wrapper {
            type Item = $item;
            type IntoIter = std::vec::IntoIter<Self::Item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $wrapper {
            type Item = &'a $item;
            type IntoIter = std::slice::Iter<'a, $item>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }
    };
}

/// The user's gardens.
pub struct Gardens(pub Vec<Garden>);

collection_wrapper!(Gardens, Garden);

impl fmt::Display for Gardens {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No gardens found.");
        }
        for garden in &self.0 {
            let areas = garden
                .areas
                .iter()
                .map(|area| area.name.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(f, "## {} (ID: {})", garden.name, garden.id)?;
            writeln!(f)?;
            if let Some(location) = &garden.location {
                writeln!(f, "- **Location**: {location}")?;
            }
            writeln!(f, "- **Areas**: {areas}")?;
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Plantings, usually filtered by garden or status.
pub struct Plantings(pub Vec<Planting>);

collection_wrapper!(Plantings, Planting);

impl fmt::Display for Plantings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No plantings found.");
        }
        for planting in &self.0 {
            write!(f, "{planting}")?;
        }
        Ok(())
    }
}

/// Plant definitions from the catalog.
///
/// # Examples
///
/// ```rust
/// use green_core::{display::Plants, PlantCatalog, StaticCatalog};
///
/// let plants = Plants(StaticCatalog::winston()?.plants());
/// assert_eq!(plants.len(), 10);
/// assert!(plants.to_string().contains("## Meyer Lemon (Improved Meyer)"));
/// # Result::<(), green_core::GardenError>::Ok(())
/// ```
pub struct Plants(pub Vec<PlantDefinition>);

collection_wrapper!(Plants, PlantDefinition);

impl fmt::Display for Plants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "The plant catalog is empty.");
        }
        for plant in &self.0 {
            write!(f, "{plant}")?;
        }
        Ok(())
    }
}

/// Tasks printed in full, e.g. the tasks of one planting.
pub struct Tasks(pub Vec<Task>);

collection_wrapper!(Tasks, Task);

impl fmt::Display for Tasks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "No tasks found.");
        }
        for task in &self.0 {
            write!(f, "{task}")?;
        }
        Ok(())
    }
}

/// One task view as seen on a given day, with relative due labels.
pub struct TaskList {
    pub view: TaskView,
    pub today: Date,
    pub tasks: Vec<Task>,
}

impl TaskList {
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl fmt::Display for TaskList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.view.title())?;
        writeln!(f)?;

        if self.tasks.is_empty() {
            return writeln!(f, "Nothing to do.");
        }

        for task in &self.tasks {
            let due = match task.status {
                TaskStatus::Completed => "done".to_string(),
                TaskStatus::Pending => DueLabel::new(task.due_date, self.today).to_string(),
            };
            write!(
                f,
                "- **{}** {}: {} ({due}",
                task.id,
                task.task_type.with_icon(),
                task.details
            )?;
            if let Some(days) = task.recurring_days {
                write!(f, ", every {days} days")?;
            }
            writeln!(f, ")")?;
        }
        Ok(())
    }
}
