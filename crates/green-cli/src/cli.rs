//! Command argument types and their handlers.
//!
//! Each `*Args` struct carries the clap derives for one command and converts
//! into the matching `green_core::params` type, which stays free of CLI
//! concerns:
//!
//! ```text
//! User Input → CLI Args (clap) → Core Params → Gardener
//! ```

use anyhow::{Context, Result};
use clap::{Args, Subcommand, ValueEnum};
use green_core::{
    display::OperationStatus,
    engine::TaskView,
    params::{
        AddArea, AreaSpec, ClearData, CreateGarden, CreatePlanting, DeleteGarden, Id,
        ListPlantings, ListTasks, RenameGarden, UpdatePlanting,
    },
    GardenError, Gardener,
};
use jiff::civil::Date;
use log::debug;

use crate::{args::Commands, renderer::TerminalRenderer};

/// Parses an area given as `name[:type[:LxW]]`, e.g. `Greenhouse:greenhouse:12x8`.
///
/// The name and type are checked by the core when the area is stored; only
/// the shape of the argument is checked here.
pub fn parse_area_spec(input: &str) -> std::result::Result<AreaSpec, String> {
    let mut parts = input.splitn(3, ':');
    let name = parts.next().unwrap_or_default().trim().to_string();
    let area_type = parts
        .next()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let (length_ft, width_ft) = match parts.next().map(str::trim).filter(|d| !d.is_empty()) {
        Some(dimensions) => {
            let (length, width) = dimensions
                .split_once(['x', 'X', '×'])
                .ok_or_else(|| format!("Expected dimensions as LxW, got '{dimensions}'"))?;
            let parse = |value: &str| {
                value
                    .trim()
                    .parse::<f64>()
                    .map_err(|e| format!("Invalid dimension '{value}': {e}"))
            };
            (Some(parse(length)?), Some(parse(width)?))
        }
        None => (None, None),
    };

    Ok(AreaSpec {
        name,
        area_type,
        length_ft,
        width_ft,
    })
}

// Garden register

/// Create a garden with one or more areas
#[derive(Args)]
pub struct CreateGardenArgs {
    /// Name of the garden
    pub name: String,
    /// Free-form location, e.g. a town
    #[arg(short, long)]
    pub location: Option<String>,
    /// Area as name[:outdoor|greenhouse[:LxW]]; repeat for several areas
    #[arg(short, long = "area", value_parser = parse_area_spec, required = true)]
    pub areas: Vec<AreaSpec>,
}

impl From<CreateGardenArgs> for CreateGarden {
    fn from(val: CreateGardenArgs) -> Self {
        CreateGarden {
            name: val.name,
            location: val.location,
            areas: val.areas,
        }
    }
}

/// Show a garden and its areas
#[derive(Args)]
pub struct ShowGardenArgs {
    #[arg(help = "ID of the garden to show")]
    pub id: u64,
}

impl From<ShowGardenArgs> for Id {
    fn from(val: ShowGardenArgs) -> Self {
        Id { id: val.id }
    }
}

/// Rename a garden
#[derive(Args)]
pub struct RenameGardenArgs {
    #[arg(help = "ID of the garden to rename")]
    pub id: u64,
    /// New name
    pub name: String,
}

impl From<RenameGardenArgs> for RenameGarden {
    fn from(val: RenameGardenArgs) -> Self {
        RenameGarden {
            id: val.id,
            name: val.name,
        }
    }
}

/// Add an area to an existing garden
#[derive(Args)]
pub struct AddAreaArgs {
    #[arg(help = "ID of the garden to extend")]
    pub garden_id: u64,
    /// Area as name[:outdoor|greenhouse[:LxW]]
    #[arg(value_parser = parse_area_spec)]
    pub area: AreaSpec,
}

impl From<AddAreaArgs> for AddArea {
    fn from(val: AddAreaArgs) -> Self {
        AddArea {
            garden_id: val.garden_id,
            area: val.area,
        }
    }
}

/// Delete a garden with all of its plantings and tasks
#[derive(Args)]
pub struct DeleteGardenArgs {
    #[arg(help = "ID of the garden to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<DeleteGardenArgs> for DeleteGarden {
    fn from(val: DeleteGardenArgs) -> Self {
        DeleteGarden {
            id: val.id,
            confirmed: val.confirm,
        }
    }
}

#[derive(Subcommand)]
pub enum GardenCommands {
    /// Create a garden with one or more areas
    #[command(alias = "c")]
    Create(CreateGardenArgs),
    /// List your gardens
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show a garden and its areas
    #[command(alias = "s")]
    Show(ShowGardenArgs),
    /// Rename a garden
    Rename(RenameGardenArgs),
    /// Add an area to a garden
    AddArea(AddAreaArgs),
    /// Delete a garden with all of its plantings and tasks
    #[command(aliases = ["d", "rm"])]
    Delete(DeleteGardenArgs),
}

// Plant catalog

/// Show one plant from the catalog
#[derive(Args)]
pub struct ShowPlantArgs {
    #[arg(help = "Catalog ID of the plant, e.g. tomato")]
    pub id: String,
}

#[derive(Subcommand)]
pub enum PlantCommands {
    /// List every plant in the catalog
    #[command(aliases = ["l", "ls"])]
    List,
    /// Show one plant from the catalog
    #[command(alias = "s")]
    Show(ShowPlantArgs),
}

// Planting register

/// Record a planting; its care tasks are scheduled right away
#[derive(Args)]
pub struct AddPlantingArgs {
    #[arg(help = "ID of the garden")]
    pub garden_id: u64,
    #[arg(help = "ID of the area within that garden")]
    pub area_id: u64,
    #[arg(help = "Catalog ID of the plant, e.g. tomato")]
    pub plant_id: String,
    /// Number of plants
    #[arg(short, long, default_value_t = 1, allow_negative_numbers = true)]
    pub quantity: i64,
    /// Day of planting as YYYY-MM-DD; defaults to today
    #[arg(short, long)]
    pub date: Option<String>,
    /// Where exactly the plants went, used in task descriptions
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl AddPlantingArgs {
    /// Converts to core parameters, planting on `today` unless a date was
    /// given.
    pub fn into_params(self, today: Date) -> CreatePlanting {
        CreatePlanting {
            garden_id: self.garden_id,
            area_id: self.area_id,
            plant_id: self.plant_id,
            quantity: self.quantity,
            date_planted: self.date.unwrap_or_else(|| today.to_string()),
            location_notes: self.notes,
        }
    }
}

/// List plantings
#[derive(Args)]
pub struct ListPlantingsArgs {
    /// Only plantings in this garden
    #[arg(short, long)]
    pub garden: Option<u64>,
    /// Only plantings in this area
    #[arg(short, long)]
    pub area: Option<u64>,
    /// Show removed plantings instead of active ones
    #[arg(long)]
    pub removed: bool,
}

impl From<ListPlantingsArgs> for ListPlantings {
    fn from(val: ListPlantingsArgs) -> Self {
        ListPlantings {
            garden_id: val.garden,
            area_id: val.area,
            removed: val.removed,
        }
    }
}

/// Show a planting with its tasks
#[derive(Args)]
pub struct ShowPlantingArgs {
    #[arg(help = "ID of the planting to show")]
    pub id: u64,
}

impl From<ShowPlantingArgs> for Id {
    fn from(val: ShowPlantingArgs) -> Self {
        Id { id: val.id }
    }
}

/// Planting status values accepted on the command line
#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PlantingStatusArg {
    /// Still in the ground
    Active,
    /// Pulled up or died; tasks are kept
    Removed,
}

impl std::fmt::Display for PlantingStatusArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlantingStatusArg::Active => write!(f, "active"),
            PlantingStatusArg::Removed => write!(f, "removed"),
        }
    }
}

/// Change quantity, notes or status of a planting
#[derive(Args)]
pub struct UpdatePlantingArgs {
    #[arg(help = "ID of the planting to update")]
    pub id: u64,
    #[arg(short, long, allow_negative_numbers = true, help = "New number of plants")]
    pub quantity: Option<i64>,
    #[arg(short, long, help = "New location notes")]
    pub notes: Option<String>,
    #[arg(short, long, help = "New status (active, removed)")]
    pub status: Option<PlantingStatusArg>,
}

impl From<UpdatePlantingArgs> for UpdatePlanting {
    fn from(val: UpdatePlantingArgs) -> Self {
        UpdatePlanting {
            id: val.id,
            quantity: val.quantity,
            location_notes: val.notes,
            status: val.status.map(|s| s.to_string()),
        }
    }
}

/// Delete a planting and every task generated from it
#[derive(Args)]
pub struct DeletePlantingArgs {
    #[arg(help = "ID of the planting to delete")]
    pub id: u64,
    /// Confirm the deletion (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

#[derive(Subcommand)]
pub enum PlantingCommands {
    /// Record a planting and schedule its tasks
    #[command(aliases = ["a", "create"])]
    Add(AddPlantingArgs),
    /// List plantings
    #[command(aliases = ["l", "ls"])]
    List(ListPlantingsArgs),
    /// Show a planting with its tasks
    #[command(alias = "s")]
    Show(ShowPlantingArgs),
    /// Change quantity, notes or status of a planting
    #[command(alias = "u")]
    Update(UpdatePlantingArgs),
    /// Delete a planting and its tasks
    #[command(aliases = ["d", "rm"])]
    Delete(DeletePlantingArgs),
}

// Task engine

/// Task views accepted by `task list --view`
#[derive(Copy, Clone, PartialEq, Eq, Default, ValueEnum)]
pub enum TaskViewArg {
    /// Everything not yet done
    #[default]
    Pending,
    /// Due today or overdue
    Today,
    /// Due after today and before the week ends
    Week,
    /// Due before today
    Overdue,
    /// Already done
    Completed,
    /// Every task
    All,
}

impl From<TaskViewArg> for TaskView {
    fn from(val: TaskViewArg) -> Self {
        match val {
            TaskViewArg::Pending => TaskView::Pending,
            TaskViewArg::Today => TaskView::Today,
            TaskViewArg::Week => TaskView::ThisWeek,
            TaskViewArg::Overdue => TaskView::Overdue,
            TaskViewArg::Completed => TaskView::Completed,
            TaskViewArg::All => TaskView::All,
        }
    }
}

/// List tasks
#[derive(Args)]
pub struct ListTasksArgs {
    /// Which tasks to show
    #[arg(short, long, value_enum, default_value_t)]
    pub view: TaskViewArg,
}

impl From<ListTasksArgs> for ListTasks {
    fn from(val: ListTasksArgs) -> Self {
        ListTasks {
            view: val.view.into(),
        }
    }
}

/// Refer to one task
#[derive(Args)]
pub struct TaskIdArgs {
    #[arg(help = "ID of the task")]
    pub id: u64,
}

impl From<TaskIdArgs> for Id {
    fn from(val: TaskIdArgs) -> Self {
        Id { id: val.id }
    }
}

#[derive(Subcommand)]
pub enum TaskCommands {
    /// List tasks
    #[command(aliases = ["l", "ls"])]
    List(ListTasksArgs),
    /// Show one task
    #[command(alias = "s")]
    Show(TaskIdArgs),
    /// Mark a task done; recurring tasks are rescheduled
    #[command(aliases = ["c", "done"])]
    Complete(TaskIdArgs),
    /// Count tasks by due state
    Summary,
}

/// Delete all of your data
#[derive(Args)]
pub struct ResetArgs {
    /// Confirm the reset (required to prevent accidental deletion)
    #[arg(long)]
    pub confirm: bool,
}

impl From<ResetArgs> for ClearData {
    fn from(val: ResetArgs) -> Self {
        ClearData {
            confirmed: val.confirm,
        }
    }
}

/// Runs commands against a gardener and prints the outcome.
pub struct Cli {
    gardener: Gardener,
    renderer: TerminalRenderer,
}

impl Cli {
    pub fn new(gardener: Gardener, renderer: TerminalRenderer) -> Self {
        Self { gardener, renderer }
    }

    pub fn renderer(&self) -> &TerminalRenderer {
        &self.renderer
    }

    pub async fn run(&self, command: Option<Commands>) -> Result<()> {
        match command {
            Some(Commands::Garden { command }) => self.handle_garden_command(command).await,
            Some(Commands::Plant { command }) => self.handle_plant_command(command),
            Some(Commands::Planting { command }) => self.handle_planting_command(command).await,
            Some(Commands::Task { command }) => self.handle_task_command(command).await,
            Some(Commands::Reset(args)) => self.reset(args).await,
            None => self.show_today().await,
        }
    }

    async fn handle_garden_command(&self, command: GardenCommands) -> Result<()> {
        let output = match command {
            GardenCommands::Create(args) => self
                .gardener
                .create_garden_result(&args.into())
                .await?
                .to_string(),
            GardenCommands::List => self.gardener.list_gardens_display().await?.to_string(),
            GardenCommands::Show(args) => self.gardener.show_garden(&args.into()).await?.to_string(),
            GardenCommands::Rename(args) => self
                .gardener
                .rename_garden_result(&args.into())
                .await?
                .to_string(),
            GardenCommands::AddArea(args) => self
                .gardener
                .add_area_result(&args.into())
                .await?
                .to_string(),
            GardenCommands::Delete(args) => self
                .gardener
                .delete_garden_result(&args.into())
                .await?
                .to_string(),
        };
        self.renderer.render(&output)
    }

    fn handle_plant_command(&self, command: PlantCommands) -> Result<()> {
        let output = match command {
            PlantCommands::List => self.gardener.list_plants_display().to_string(),
            PlantCommands::Show(args) => self.gardener.show_plant(&args.id)?.to_string(),
        };
        self.renderer.render(&output)
    }

    async fn handle_planting_command(&self, command: PlantingCommands) -> Result<()> {
        let output = match command {
            PlantingCommands::Add(args) => {
                let params = args.into_params(self.gardener.today());
                debug!("Recording planting of {} on {}", params.plant_id, params.date_planted);
                self.gardener
                    .create_planting_result(&params)
                    .await?
                    .to_string()
            }
            PlantingCommands::List(args) => self
                .gardener
                .list_plantings_display(&args.into())
                .await?
                .to_string(),
            PlantingCommands::Show(args) => {
                let (planting, tasks) = self.gardener.show_planting(&args.into()).await?;
                format!("{planting}\n## Tasks\n\n{tasks}")
            }
            PlantingCommands::Update(args) => self
                .gardener
                .update_planting_result(&args.into())
                .await?
                .to_string(),
            PlantingCommands::Delete(args) => {
                let id = Id { id: args.id };
                if !args.confirm {
                    // Unknown IDs are reported before asking for confirmation
                    let planting = self
                        .gardener
                        .get_planting(&id)
                        .await?
                        .ok_or(GardenError::PlantingNotFound { id: args.id })?;
                    anyhow::bail!(
                        "Deleting planting {} ({} × {}) also removes its tasks and requires explicit confirmation. Re-run with --confirm.",
                        planting.id,
                        planting.plant_id,
                        planting.quantity
                    );
                }
                self.gardener.delete_planting_result(&id).await?.to_string()
            }
        };
        self.renderer.render(&output)
    }

    async fn handle_task_command(&self, command: TaskCommands) -> Result<()> {
        let output = match command {
            TaskCommands::List(args) => self
                .gardener
                .list_tasks_display(&args.into())
                .await?
                .to_string(),
            TaskCommands::Show(args) => self.gardener.show_task(&args.into()).await?.to_string(),
            TaskCommands::Complete(args) => {
                // Left without context so main can report NotYetDue as is
                self.gardener.complete_task(&args.into()).await?.to_string()
            }
            TaskCommands::Summary => self.gardener.task_summary().await?.to_string(),
        };
        self.renderer.render(&output)
    }

    async fn reset(&self, args: ResetArgs) -> Result<()> {
        let cleared = self.gardener.clear_user_data_result(&args.into()).await?;
        self.renderer.status(&OperationStatus::success(
            cleared.to_string().trim_end().to_string(),
        ))
    }

    /// What is due today, then what is coming up this week.
    async fn show_today(&self) -> Result<()> {
        let today = self
            .gardener
            .list_tasks_display(&ListTasks {
                view: TaskView::Today,
            })
            .await
            .context("Failed to load today's tasks")?;
        let week = self
            .gardener
            .list_tasks_display(&ListTasks {
                view: TaskView::ThisWeek,
            })
            .await
            .context("Failed to load this week's tasks")?;

        self.renderer.render(&today.to_string())?;
        if !week.is_empty() {
            println!();
            self.renderer.render(&week.to_string())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_area_name_only() {
        let area = parse_area_spec("Perimeter Bed").expect("valid area");
        assert_eq!(area.name, "Perimeter Bed");
        assert_eq!(area.area_type, None);
        assert_eq!(area.length_ft, None);
    }

    #[test]
    fn test_parse_area_with_type_and_size() {
        let area = parse_area_spec("Greenhouse:greenhouse:12x8.5").expect("valid area");
        assert_eq!(area.name, "Greenhouse");
        assert_eq!(area.area_type.as_deref(), Some("greenhouse"));
        assert_eq!(area.length_ft, Some(12.0));
        assert_eq!(area.width_ft, Some(8.5));
    }

    #[test]
    fn test_parse_area_size_without_type() {
        let area = parse_area_spec("Raised Bed::8×4").expect("valid area");
        assert_eq!(area.area_type, None);
        assert_eq!(area.width_ft, Some(4.0));
    }

    #[test]
    fn test_parse_area_bad_size() {
        assert!(parse_area_spec("Bed:outdoor:eight").is_err());
        assert!(parse_area_spec("Bed:outdoor:8xfour").is_err());
    }

    #[test]
    fn test_task_view_arg_conversion() {
        assert_eq!(TaskView::from(TaskViewArg::Week), TaskView::ThisWeek);
        assert_eq!(TaskView::from(TaskViewArg::default()), TaskView::Pending);
    }

    #[test]
    fn test_add_planting_defaults_to_today() {
        let args = AddPlantingArgs {
            garden_id: 1,
            area_id: 2,
            plant_id: "basil".to_string(),
            quantity: 4,
            date: None,
            notes: None,
        };
        let params = args.into_params(Date::constant(2025, 6, 4));
        assert_eq!(params.date_planted, "2025-06-04");
        assert_eq!(params.quantity, 4);
    }
}
