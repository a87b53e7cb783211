//! Command definitions and their execution against the in-memory stores.

use std::io::Write;

use anyhow::bail;
use chrono::{NaiveDate, Utc};
use clap::{Subcommand, ValueEnum};

use cleaning_store_core::config::StoreConfig;
use cleaning_store_core::schema::{Employee, InventoryItem, Location, Schema, SupplyItem};
use cleaning_store_core::summary;
use cleaning_store_core::validation::{self, Form};
use cleaning_store_core::{
    CleaningBusiness, Inventory, RecordKey, RecordStore, Stocked, SupplyInventory, ValidationError,
};

use crate::render;

/// Datasets addressable from the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dataset {
    Employees,
    Locations,
    Inventory,
    Supplies,
    Checklists,
}

/// Datasets that carry stock quantities.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stock {
    Inventory,
    Supplies,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print every record of a dataset
    Show {
        #[arg(value_enum)]
        dataset: Dataset,
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Case-insensitive substring search on one text field
    Search {
        #[arg(value_enum)]
        dataset: Dataset,
        field: String,
        #[arg(default_value = "")]
        text: String,
    },
    /// Add a record from field=value pairs
    Add {
        #[arg(value_enum)]
        dataset: Dataset,
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Update fields of a record from field=value pairs
    Update {
        #[arg(value_enum)]
        dataset: Dataset,
        id: u64,
        #[arg(required = true)]
        fields: Vec<String>,
    },
    /// Delete a record
    Delete {
        #[arg(value_enum)]
        dataset: Dataset,
        id: u64,
    },
    /// Add units to a stocked item
    Restock {
        id: u64,
        #[arg(allow_negative_numbers = true)]
        delta: i64,
        #[arg(long, value_enum, default_value_t = Stock::Supplies)]
        dataset: Stock,
    },
    /// List items with quantity below a threshold
    LowStock {
        /// Threshold (defaults to the configured low_stock_threshold)
        #[arg(long)]
        below: Option<u32>,
        #[arg(long, value_enum, default_value_t = Stock::Supplies)]
        dataset: Stock,
    },
    /// Show the restock log
    History {
        #[arg(long)]
        id: Option<u64>,
        #[arg(long, value_enum, default_value_t = Stock::Supplies)]
        dataset: Stock,
    },
    /// Record counts and stock totals
    Stats,
    /// Create, update or inspect checklists
    Checklist {
        #[command(subcommand)]
        action: ChecklistAction,
    },
    /// Read commands line by line from stdin against one set of stores
    Session,
}

#[derive(Subcommand, Debug)]
pub enum ChecklistAction {
    /// Print the tasks of one checklist
    Show { name: String },
    /// Create a checklist
    Create {
        name: String,
        /// Comma-separated tasks
        #[arg(long)]
        tasks: String,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
    /// Replace the task list of a checklist
    Replace {
        name: String,
        #[arg(long)]
        tasks: String,
    },
    /// Change assignee and due date
    Reassign {
        name: String,
        #[arg(long)]
        assignee: Option<String>,
        #[arg(long)]
        due: Option<String>,
    },
}

/// Both applications' stores plus configuration.
#[derive(Debug)]
pub struct App {
    config: StoreConfig,
    business: CleaningBusiness,
    supplies: SupplyInventory,
}

impl App {
    /// Builds the stores as configured.
    pub fn new(config: StoreConfig) -> Self {
        let business = CleaningBusiness::from_config(&config);
        let supplies = if config.seed_demo_data {
            cleaning_store_core::seed::supplies()
        } else {
            SupplyInventory::new()
        };
        Self {
            config,
            business,
            supplies,
        }
    }

    /// Runs one command, writing its output to `out`.
    pub fn execute(&mut self, command: Command, out: &mut dyn Write) -> anyhow::Result<()> {
        tracing::debug!(?command, "executing command");
        match command {
            Command::Show { dataset, json } => self.show(dataset, json, out),
            Command::Search {
                dataset,
                field,
                text,
            } => self.search(dataset, &field, &text, out),
            Command::Add { dataset, fields } => self.add(dataset, &fields, out),
            Command::Update {
                dataset,
                id,
                fields,
            } => self.update(dataset, RecordKey(id), &fields, out),
            Command::Delete { dataset, id } => self.delete(dataset, RecordKey(id), out),
            Command::Restock { id, delta, dataset } => {
                let key = RecordKey(id);
                match dataset {
                    Stock::Inventory => {
                        let item = self.business.inventory.restock(key, delta)?;
                        writeln!(out, "Restocked {} to {} units", item.item, item.quantity)?;
                    }
                    Stock::Supplies => {
                        let item = self.supplies.restock(key, delta)?;
                        writeln!(out, "Restocked {} to {} units", item.name, item.quantity)?;
                    }
                }
                Ok(())
            }
            Command::LowStock { below, dataset } => {
                let threshold = below.unwrap_or(self.config.low_stock_threshold);
                match dataset {
                    Stock::Inventory => low_stock(&self.business.inventory, threshold, out),
                    Stock::Supplies => low_stock(&self.supplies, threshold, out),
                }
            }
            Command::History { id, dataset } => match dataset {
                Stock::Inventory => history(&self.business.inventory, id, out),
                Stock::Supplies => history(&self.supplies, id, out),
            },
            Command::Stats => self.stats(out),
            Command::Checklist { action } => self.checklist(action, out),
            Command::Session => bail!("a session is already running"),
        }
    }

    fn form(&self, fields: &[String]) -> Result<Form, ValidationError> {
        Form::from_pairs(
            self.config.date_format.as_str(),
            fields.iter().map(String::as_str),
        )
    }

    fn show(&self, dataset: Dataset, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
        match dataset {
            Dataset::Employees => show_store(&self.business.employees, json, out),
            Dataset::Locations => show_store(&self.business.locations, json, out),
            Dataset::Inventory => show_store(self.business.inventory.items(), json, out),
            Dataset::Supplies => show_store(self.supplies.items(), json, out),
            Dataset::Checklists => {
                if json {
                    let checklists: Vec<_> = self.business.checklists.iter().collect();
                    writeln!(out, "{}", serde_json::to_string_pretty(&checklists)?)?;
                    return Ok(());
                }
                let rows = self.business.checklists.iter().map(|checklist| {
                    vec![
                        checklist.name.clone(),
                        checklist.tasks.len().to_string(),
                        checklist.assignee.clone().unwrap_or_default(),
                        checklist.due.map(|d| d.to_string()).unwrap_or_default(),
                    ]
                });
                render::table(out, &["Name", "Tasks", "Assignee", "Due"], rows)?;
                Ok(())
            }
        }
    }

    fn search(
        &self,
        dataset: Dataset,
        field: &str,
        text: &str,
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        match dataset {
            Dataset::Employees => search_store(&self.business.employees, field, text, out),
            Dataset::Locations => search_store(&self.business.locations, field, text, out),
            Dataset::Inventory => search_store(self.business.inventory.items(), field, text, out),
            Dataset::Supplies => search_store(self.supplies.items(), field, text, out),
            Dataset::Checklists => {
                let needle = text.to_lowercase();
                for name in self.business.checklists.names() {
                    if name.to_lowercase().contains(&needle) {
                        writeln!(out, "{}", name)?;
                    }
                }
                Ok(())
            }
        }
    }

    fn add(&mut self, dataset: Dataset, fields: &[String], out: &mut dyn Write) -> anyhow::Result<()> {
        let form = self.form(fields)?;
        let key = match dataset {
            Dataset::Employees => {
                let draft = Employee::draft_from_form(&form)?;
                self.business.employees.insert(draft).id
            }
            Dataset::Locations => {
                let draft = Location::draft_from_form(&form)?;
                self.business.locations.insert(draft).id
            }
            Dataset::Inventory => {
                let draft = InventoryItem::draft_from_form(&form)?;
                self.business.add_inventory_item(draft)?.id
            }
            Dataset::Supplies => {
                let draft = SupplyItem::draft_from_form(&form)?;
                self.supplies.insert(draft).id
            }
            Dataset::Checklists => bail!("use `checklist create` to add checklists"),
        };
        writeln!(out, "Added record {}", key)?;
        Ok(())
    }

    fn update(
        &mut self,
        dataset: Dataset,
        key: RecordKey,
        fields: &[String],
        out: &mut dyn Write,
    ) -> anyhow::Result<()> {
        let form = self.form(fields)?;
        match dataset {
            Dataset::Employees => {
                let patches = Employee::patches_from_form(&form)?;
                print_record(self.business.employees.update(key, patches)?, out)
            }
            Dataset::Locations => {
                let patches = Location::patches_from_form(&form)?;
                print_record(self.business.locations.update(key, patches)?, out)
            }
            Dataset::Inventory => {
                let patches = InventoryItem::patches_from_form(&form)?;
                print_record(self.business.update_inventory_item(key, patches)?, out)
            }
            Dataset::Supplies => {
                let patches = SupplyItem::patches_from_form(&form)?;
                print_record(self.supplies.update(key, patches)?, out)
            }
            Dataset::Checklists => bail!("use `checklist replace` or `checklist reassign`"),
        }
    }

    fn delete(&mut self, dataset: Dataset, key: RecordKey, out: &mut dyn Write) -> anyhow::Result<()> {
        match dataset {
            Dataset::Employees => {
                self.business.employees.delete(key)?;
            }
            Dataset::Locations => {
                self.business.locations.delete(key)?;
            }
            Dataset::Inventory => {
                self.business.inventory.delete(key)?;
            }
            Dataset::Supplies => {
                self.supplies.delete(key)?;
            }
            Dataset::Checklists => bail!("checklists cannot be deleted"),
        }
        writeln!(out, "Deleted record {}", key)?;
        Ok(())
    }

    fn stats(&self, out: &mut dyn Write) -> anyhow::Result<()> {
        let dashboard = self.business.dashboard();
        writeln!(out, "Total Employees        {}", dashboard.employees)?;
        writeln!(out, "Total Locations        {}", dashboard.locations)?;
        writeln!(out, "Total Inventory Items  {}", dashboard.inventory_items)?;
        writeln!(out, "Total Checklists       {}", dashboard.checklists)?;
        writeln!(out, "Total Supply Items     {}", self.supplies.len())?;

        let threshold = self.config.low_stock_threshold;
        let today = Utc::now().date_naive();
        writeln!(
            out,
            "Low-stock supplies     {} (below {})",
            self.supplies.low_stock(threshold).len(),
            threshold
        )?;
        writeln!(
            out,
            "Expired supplies       {}",
            self.supplies
                .filter(|item| item.expiry.is_expired(today))
                .len()
        )?;
        writeln!(out, "Inventory value        {:.2}", self.business.inventory.total_value())?;
        writeln!(out, "Supply value           {:.2}", self.supplies.total_value())?;

        let rows = summary::by_category(self.supplies.items())
            .into_iter()
            .map(|total| {
                vec![
                    total.category,
                    total.items.to_string(),
                    total.quantity.to_string(),
                    format!("{:.2}", total.value),
                ]
            });
        writeln!(out)?;
        render::table(out, &["Category", "Items", "Quantity", "Value"], rows)?;
        Ok(())
    }

    fn checklist(&mut self, action: ChecklistAction, out: &mut dyn Write) -> anyhow::Result<()> {
        match action {
            ChecklistAction::Show { name } => {
                let checklist = self.business.checklists.require(&name)?;
                writeln!(out, "Tasks for {}", checklist.name)?;
                for (i, task) in checklist.tasks.iter().enumerate() {
                    writeln!(out, "{:>3}. {}", i + 1, task)?;
                }
            }
            ChecklistAction::Create {
                name,
                tasks,
                assignee,
                due,
            } => {
                let tasks = validation::task_list("tasks", &tasks)?;
                let due = self.due_date(due.as_deref())?;
                self.business.create_checklist(&name, tasks, assignee, due)?;
                writeln!(out, "Checklist \"{}\" added", name)?;
            }
            ChecklistAction::Replace { name, tasks } => {
                let tasks = validation::task_list("tasks", &tasks)?;
                let checklist = self.business.checklists.replace_tasks(&name, tasks)?;
                writeln!(
                    out,
                    "Checklist \"{}\" now has {} tasks",
                    checklist.name,
                    checklist.tasks.len()
                )?;
            }
            ChecklistAction::Reassign {
                name,
                assignee,
                due,
            } => {
                let due = self.due_date(due.as_deref())?;
                self.business.reassign_checklist(&name, assignee, due)?;
                writeln!(out, "Checklist \"{}\" reassigned", name)?;
            }
        }
        Ok(())
    }

    fn due_date(&self, raw: Option<&str>) -> Result<Option<NaiveDate>, ValidationError> {
        raw.map(|raw| validation::date("due_date", raw, &self.config.date_format))
            .transpose()
    }
}

fn show_store<R: Schema>(store: &RecordStore<R>, json: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&store.to_json()?)?)?;
    } else {
        render::table(out, R::COLUMNS, store.iter().map(Schema::row))?;
    }
    Ok(())
}

fn search_store<R: Schema>(
    store: &RecordStore<R>,
    field: &str,
    text: &str,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let field = R::parse_text_field(field)?;
    let found = store.search(text, field);
    render::table(out, R::COLUMNS, found.iter().map(Schema::row))?;
    Ok(())
}

fn print_record<R: Schema>(record: &R, out: &mut dyn Write) -> anyhow::Result<()> {
    render::record(out, R::COLUMNS, &record.row())?;
    Ok(())
}

fn low_stock<R>(inventory: &Inventory<R>, threshold: u32, out: &mut dyn Write) -> anyhow::Result<()>
where
    R: Stocked + Schema,
{
    let low = inventory.low_stock(threshold);
    render::table(out, R::COLUMNS, low.iter().map(Schema::row))?;
    Ok(())
}

fn history<R: Stocked>(inventory: &Inventory<R>, id: Option<u64>, out: &mut dyn Write) -> anyhow::Result<()> {
    let events: Vec<_> = match id {
        Some(id) => inventory.history_for(RecordKey(id)).collect(),
        None => inventory.history().iter().collect(),
    };
    let rows = events.into_iter().map(|event| {
        vec![
            event.item.to_string(),
            format!("+{}", event.delta),
            event.at.format("%Y-%m-%d %H:%M:%S").to_string(),
        ]
    });
    render::table(out, &["Item", "Delta", "At"], rows)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(app: &mut App, command: Command) -> anyhow::Result<String> {
        let mut out = Vec::new();
        app.execute(command, &mut out)?;
        Ok(String::from_utf8(out)?)
    }

    fn pairs(items: &[&str]) -> Vec<String> {
        items.iter().map(|item| item.to_string()).collect()
    }

    #[test]
    fn test_show_employees_table() {
        let mut app = App::new(StoreConfig::default());
        let text = run(
            &mut app,
            Command::Show {
                dataset: Dataset::Employees,
                json: false,
            },
        )
        .unwrap();
        assert!(text.starts_with("ID"));
        assert!(text.contains("contact10@example.com"));
        assert!(text.ends_with("(10 rows)\n"));
    }

    #[test]
    fn test_add_then_search_supplies() {
        let mut app = App::new(StoreConfig::default());
        let added = run(
            &mut app,
            Command::Add {
                dataset: Dataset::Supplies,
                fields: pairs(&[
                    "item_name=Glass Polish",
                    "category=Chemicals",
                    "brand=Acme",
                    "supplier=CleanCo Wholesale",
                    "storage_location=Shelf A4",
                    "quantity=12",
                    "unit_price=3.10",
                    "last_updated=2024-06-01",
                    "expiry_date=N/A",
                ]),
            },
        )
        .unwrap();
        assert_eq!(added, "Added record 9\n");

        let found = run(
            &mut app,
            Command::Search {
                dataset: Dataset::Supplies,
                field: "name".to_string(),
                text: "GLASS".to_string(),
            },
        )
        .unwrap();
        assert!(found.contains("Glass Polish"));
        assert!(found.ends_with("(3 rows)\n"));
    }

    #[test]
    fn test_update_unknown_record_reports_not_found() {
        let mut app = App::new(StoreConfig::default());
        let err = run(
            &mut app,
            Command::Update {
                dataset: Dataset::Employees,
                id: 42,
                fields: pairs(&["status=Inactive"]),
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Employee with id 42 not found");
    }

    #[test]
    fn test_restock_and_history() {
        let mut app = App::new(StoreConfig::default());
        let text = run(
            &mut app,
            Command::Restock {
                id: 7,
                delta: 10,
                dataset: Stock::Supplies,
            },
        )
        .unwrap();
        assert_eq!(text, "Restocked Nitrile Gloves to 16 units\n");

        let log = run(
            &mut app,
            Command::History {
                id: None,
                dataset: Stock::Supplies,
            },
        )
        .unwrap();
        assert!(log.contains("+10"));

        assert!(run(
            &mut app,
            Command::Restock {
                id: 7,
                delta: -2,
                dataset: Stock::Supplies,
            },
        )
        .is_err());
    }

    #[test]
    fn test_checklist_create_and_show() {
        let mut app = App::new(StoreConfig::default());
        run(
            &mut app,
            Command::Checklist {
                action: ChecklistAction::Create {
                    name: "Gym".to_string(),
                    tasks: "Sanitize mats, Mop floor".to_string(),
                    assignee: Some("Employee 3".to_string()),
                    due: Some("2024-10-01".to_string()),
                },
            },
        )
        .unwrap();

        let text = run(
            &mut app,
            Command::Checklist {
                action: ChecklistAction::Show {
                    name: "Gym".to_string(),
                },
            },
        )
        .unwrap();
        assert_eq!(text, "Tasks for Gym\n  1. Sanitize mats\n  2. Mop floor\n");
    }

    #[test]
    fn test_stats_on_empty_config() {
        let config = StoreConfig {
            seed_demo_data: false,
            ..Default::default()
        };
        let mut app = App::new(config);
        let text = run(&mut app, Command::Stats).unwrap();
        assert!(text.contains("Total Employees        0"));
        assert!(text.contains("(0 rows)"));
    }

    #[test]
    fn test_show_missing_checklist_reports_not_found() {
        let mut app = App::new(StoreConfig::default());
        let err = run(
            &mut app,
            Command::Checklist {
                action: ChecklistAction::Show {
                    name: "Attic".to_string(),
                },
            },
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "Checklist 'Attic' not found");
    }

    #[test]
    fn test_update_inventory_to_unknown_location_rejected() {
        let mut app = App::new(StoreConfig::default());
        assert!(run(
            &mut app,
            Command::Update {
                dataset: Dataset::Inventory,
                id: 1,
                fields: pairs(&["location=Warehouse"]),
            },
        )
        .is_err());

        let text = run(
            &mut app,
            Command::Update {
                dataset: Dataset::Inventory,
                id: 1,
                fields: pairs(&["location=Location 5"]),
            },
        )
        .unwrap();
        assert!(text.contains("Location 5"));
    }
}
