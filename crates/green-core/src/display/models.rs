//! Display implementations for domain models.
//!
//! Output is markdown: records open with a heading and list their fields as
//! bullet points, so the CLI can render them with a terminal skin.

use std::fmt;

use super::datetime::{LocalDateTime, LongDate};
use crate::models::{
    Area, AreaType, Garden, PlantDefinition, Planting, PlantingStatus, Task, TaskStatus,
    TaskSummary, TaskType, WateringNeeds,
};

impl fmt::Display for PlantingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for AreaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for WateringNeeds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl fmt::Display for Area {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- {} (ID: {}, {}", self.name, self.id, self.area_type)?;
        if let (Some(length), Some(width)) = (self.length_ft, self.width_ft) {
            write!(f, ", {length}×{width} ft")?;
        }
        writeln!(f, ")")
    }
}

impl fmt::Display for Garden {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}. {}", self.id, self.name)?;
        writeln!(f)?;

        if let Some(location) = &self.location {
            writeln!(f, "- Location: {location}")?;
        }
        writeln!(f, "- Created: {}", LocalDateTime(&self.created_at))?;

        if self.areas.is_empty() {
            writeln!(f, "\nNo areas in this garden.")?;
        } else {
            writeln!(f, "\n## Areas")?;
            writeln!(f)?;
            for area in &self.areas {
                write!(f, "{area}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Planting {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "## Planting {}: {} × {}",
            self.id, self.plant_id, self.quantity
        )?;
        writeln!(f)?;
        writeln!(f, "- Garden: {}, area {}", self.garden_id, self.area_id)?;
        writeln!(f, "- Planted: {}", LongDate(&self.date_planted))?;
        writeln!(f, "- Status: {}", self.status)?;
        if let Some(notes) = &self.location_notes {
            writeln!(f, "- Location: {notes}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "### {}. {} ({})",
            self.id,
            self.details,
            self.status.with_icon()
        )?;
        writeln!(f)?;
        writeln!(f, "- Type: {}", self.task_type.with_icon())?;
        writeln!(f, "- Due: {}", LongDate(&self.due_date))?;
        if let Some(days) = self.recurring_days {
            writeln!(f, "- Repeats: every {days} days")?;
        }
        if let Some(completed_at) = &self.completed_at {
            writeln!(f, "- Completed: {}", LocalDateTime(completed_at))?;
        }
        writeln!(f, "- Planting: {}", self.planting_id)?;
        writeln!(f)
    }
}

impl fmt::Display for PlantDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {} ({})", self.name, self.variety)?;
        writeln!(f)?;
        writeln!(f, "- ID: {}", self.id)?;
        if let Some(kind) = &self.kind {
            writeln!(f, "- Type: {kind}")?;
        }
        writeln!(
            f,
            "- Watering: {} (every {} days)",
            self.watering_needs,
            self.watering_needs.watering_interval()
        )?;
        if let Some(days) = self.days_to_maturity {
            writeln!(f, "- Days to maturity: {days}")?;
        }
        if let Some(sun) = &self.sun_requirement {
            writeln!(f, "- Sun: {sun}")?;
        }
        if let Some(spacing) = self.spacing_inches {
            writeln!(f, "- Spacing: {spacing} in")?;
        }
        if self.is_perennial {
            writeln!(f, "- Perennial")?;
        }
        if self.greenhouse_suitable {
            writeln!(f, "- Suitable for the greenhouse")?;
        }
        if !self.companion_plants.is_empty() {
            writeln!(f, "- Companions: {}", self.companion_plants.join(", "))?;
        }
        if !self.avoid_plants.is_empty() {
            writeln!(f, "- Keep away from: {}", self.avoid_plants.join(", "))?;
        }
        if let Some(pests) = &self.pest_info {
            writeln!(f)?;
            writeln!(f, "{pests}")?;
        }
        writeln!(f)
    }
}

impl fmt::Display for TaskSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.today {
            Some(today) => writeln!(f, "## Tasks for {}", LongDate(today))?,
            None => writeln!(f, "## Tasks")?,
        }
        writeln!(f)?;
        writeln!(f, "- Due today: {}", self.due_today)?;
        writeln!(f, "- Overdue: {}", self.overdue)?;
        writeln!(f, "- This week: {}", self.this_week)?;
        writeln!(f, "- Pending: {}", self.pending)?;
        writeln!(f, "- Completed: {}", self.completed)
    }
}
