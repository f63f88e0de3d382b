#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use green_core::{
    params::{AreaSpec, CreateGarden, CreatePlanting},
    Clock, Garden, Gardener, GardenerBuilder, StaticCatalog,
};
use jiff::{civil::Date, tz::TimeZone, Zoned};
use tempfile::TempDir;

/// A small catalog with one plant per watering need.
const TEST_PLANTS: &str = r#"[
    {"id": "tomato", "name": "Tomato", "variety": "Early Girl", "wateringNeeds": "high", "daysToMaturity": 60},
    {"id": "rosemary", "name": "Rosemary", "variety": "Arp (Cold Hardy)", "wateringNeeds": "low", "daysToMaturity": 90, "isPerennial": true},
    {"id": "kale", "name": "Kale", "variety": "Lacinato (Dinosaur)", "wateringNeeds": "medium", "daysToMaturity": 60},
    {"id": "mint", "name": "Mint", "variety": "Spearmint", "wateringNeeds": "medium"}
]"#;

/// A clock the test moves forward by hand; clones share the same day.
#[derive(Clone)]
pub struct TestClock {
    today: Arc<Mutex<Date>>,
}

impl TestClock {
    pub fn new(today: Date) -> Self {
        Self {
            today: Arc::new(Mutex::new(today)),
        }
    }

    pub fn set(&self, today: Date) {
        *self.today.lock().expect("clock lock") = today;
    }
}

impl Clock for TestClock {
    fn now(&self) -> Zoned {
        let today = *self.today.lock().expect("clock lock");
        today
            .at(9, 0, 0, 0)
            .to_zoned(TimeZone::UTC)
            .expect("valid test date")
    }
}

/// Helper function to create a gardener on a temporary database
pub async fn create_test_gardener(today: Date) -> (TempDir, Gardener, TestClock) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let clock = TestClock::new(today);
    let gardener = GardenerBuilder::new()
        .with_database_path(Some(temp_dir.path().join("test.db")))
        .with_catalog(StaticCatalog::from_json(TEST_PLANTS).expect("valid test catalog"))
        .with_clock(clock.clone())
        .build()
        .await
        .expect("Failed to create gardener");
    (temp_dir, gardener, clock)
}

/// A garden with one outdoor bed and one greenhouse.
pub async fn create_test_garden(gardener: &Gardener) -> Garden {
    gardener
        .create_garden(&CreateGarden {
            name: "Home".to_string(),
            location: Some("Winston, OR".to_string()),
            areas: vec![
                AreaSpec {
                    name: "Perimeter Bed".to_string(),
                    ..Default::default()
                },
                AreaSpec {
                    name: "Greenhouse".to_string(),
                    area_type: Some("greenhouse".to_string()),
                    ..Default::default()
                },
            ],
        })
        .await
        .expect("Failed to create garden")
}

pub fn planting_params(garden: &Garden, plant_id: &str, date_planted: Date) -> CreatePlanting {
    CreatePlanting {
        garden_id: garden.id,
        area_id: garden.areas[0].id,
        plant_id: plant_id.to_string(),
        quantity: 1,
        date_planted: date_planted.to_string(),
        location_notes: None,
    }
}
