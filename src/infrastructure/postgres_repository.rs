// PostgreSQL repository implementation
use crate::application::repository::{Deleter, Inserter, Lister, RepositoryError};
use crate::domain::fish::{Ecosystem, Fish, Taxonomy};
use crate::domain::tank::Tank;
use crate::domain::tank_statistic::TankStatistic;
use crate::infrastructure::config::DatabaseSettings;
use anyhow::Context;
use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::postgres::{PgPool, PgPoolOptions};

const FISH_COLUMNS: &str = "id, \"type\", subtype, color, gender, purchase_date, count, genus, species, \
     ecosystem_name, ecosystem_type, ecosystem_location, salinity, climate";

const TANK_STATISTIC_COLUMNS: &str =
    "id, test_date, ph, gh, kh, ammonia, nitrite, nitrate, phosphate";

const TANK_COLUMNS: &str =
    "id, make, model, name, location, capacity_measurement, capacity, description";

#[derive(Debug, Clone)]
pub struct PostgresRepository {
    pool: PgPool,
}

#[derive(Debug, FromRow)]
struct FishRow {
    id: i32,
    #[sqlx(rename = "type")]
    fish_type: String,
    subtype: String,
    color: String,
    gender: String,
    purchase_date: String,
    count: i32,
    genus: Option<String>,
    species: Option<String>,
    ecosystem_name: Option<String>,
    ecosystem_type: Option<String>,
    ecosystem_location: Option<String>,
    salinity: Option<String>,
    climate: Option<String>,
}

impl From<FishRow> for Fish {
    fn from(row: FishRow) -> Self {
        let taxonomy = match (row.genus, row.species) {
            (Some(genus), Some(species)) => Some(Taxonomy { genus, species }),
            _ => None,
        };

        // Ecosystem columns are written together, so the name decides presence.
        let ecosystem = row.ecosystem_name.map(|name| Ecosystem {
            name,
            ecosystem_type: row.ecosystem_type.unwrap_or_default(),
            location: row.ecosystem_location.unwrap_or_default(),
            salinity: row.salinity.unwrap_or_default(),
            climate: row.climate.unwrap_or_default(),
        });

        Fish {
            id: row.id,
            fish_type: row.fish_type,
            subtype: row.subtype,
            color: row.color,
            gender: row.gender,
            purchase_date: row.purchase_date,
            count: row.count,
            taxonomy,
            ecosystem,
        }
    }
}

#[derive(Debug, FromRow)]
struct TankStatisticRow {
    id: i32,
    test_date: String,
    ph: Option<f32>,
    gh: Option<f32>,
    kh: Option<f32>,
    ammonia: Option<f32>,
    nitrite: Option<f32>,
    nitrate: Option<f32>,
    phosphate: Option<f32>,
}

impl From<TankStatisticRow> for TankStatistic {
    fn from(row: TankStatisticRow) -> Self {
        TankStatistic {
            id: row.id,
            test_date: row.test_date,
            ph: row.ph,
            gh: row.gh,
            kh: row.kh,
            ammonia: row.ammonia,
            nitrite: row.nitrite,
            nitrate: row.nitrate,
            phosphate: row.phosphate,
        }
    }
}

#[derive(Debug, FromRow)]
struct TankRow {
    id: i32,
    make: String,
    model: String,
    name: String,
    location: String,
    capacity_measurement: String,
    capacity: Option<f32>,
    description: String,
}

impl From<TankRow> for Tank {
    fn from(row: TankRow) -> Self {
        Tank {
            id: row.id,
            make: row.make,
            model: row.model,
            name: row.name,
            location: row.location,
            capacity_measurement: row.capacity_measurement,
            capacity: row.capacity,
            description: row.description,
        }
    }
}

fn storage_error(e: sqlx::Error) -> RepositoryError {
    RepositoryError::Storage(e.to_string())
}

impl PostgresRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects a pool and, when configured, brings the schema up to date.
    pub async fn connect(settings: &DatabaseSettings) -> anyhow::Result<Self> {
        let url = settings.connection_url()?;

        let pool = PgPoolOptions::new()
            .max_connections(settings.max_connections)
            .connect(&url)
            .await
            .context("error creating connection pool")?;

        if settings.run_migrations {
            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .context("unable to apply database migrations")?;
        }

        Ok(Self::new(pool))
    }
}

#[async_trait]
impl Inserter<Fish> for PostgresRepository {
    async fn insert(&self, fish: Fish) -> Result<Fish, RepositoryError> {
        let query = format!(
            "INSERT INTO fish(\"type\", subtype, color, gender, purchase_date, count, genus, species, \
             ecosystem_name, ecosystem_type, ecosystem_location, salinity, climate) \
             VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13) RETURNING {}",
            FISH_COLUMNS
        );

        let (genus, species) = match fish.taxonomy {
            Some(taxonomy) => (Some(taxonomy.genus), Some(taxonomy.species)),
            None => (None, None),
        };
        let ecosystem = fish.ecosystem;

        let row = sqlx::query_as::<_, FishRow>(&query)
            .bind(fish.fish_type)
            .bind(fish.subtype)
            .bind(fish.color)
            .bind(fish.gender)
            .bind(fish.purchase_date)
            .bind(fish.count)
            .bind(genus)
            .bind(species)
            .bind(ecosystem.as_ref().map(|e| e.name.clone()))
            .bind(ecosystem.as_ref().map(|e| e.ecosystem_type.clone()))
            .bind(ecosystem.as_ref().map(|e| e.location.clone()))
            .bind(ecosystem.as_ref().map(|e| e.salinity.clone()))
            .bind(ecosystem.as_ref().map(|e| e.climate.clone()))
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(id = row.id, "Fish inserted successfully");
        Ok(row.into())
    }
}

#[async_trait]
impl Lister<Fish> for PostgresRepository {
    async fn list(&self) -> Result<Vec<Fish>, RepositoryError> {
        let query = format!("SELECT {} FROM fish", FISH_COLUMNS);
        let rows = sqlx::query_as::<_, FishRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(row_count = rows.len(), "Fish queried successfully");
        Ok(rows.into_iter().map(Fish::from).collect())
    }
}

#[async_trait]
impl Deleter<Fish> for PostgresRepository {
    async fn delete(&self, id: i32) -> Result<Fish, RepositoryError> {
        let query = format!("DELETE FROM fish WHERE id = $1 RETURNING {}", FISH_COLUMNS);
        let row = sqlx::query_as::<_, FishRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(RepositoryError::NotFound { kind: "fish", id })?;

        tracing::info!(id = row.id, "Fish deleted successfully");
        Ok(row.into())
    }
}

#[async_trait]
impl Inserter<TankStatistic> for PostgresRepository {
    async fn insert(&self, stat: TankStatistic) -> Result<TankStatistic, RepositoryError> {
        let query = format!(
            "INSERT INTO tank_statistics(test_date, ph, gh, kh, ammonia, nitrite, nitrate, phosphate) \
             VALUES($1, $2, $3, $4, $5, $6, $7, $8) RETURNING {}",
            TANK_STATISTIC_COLUMNS
        );

        let row = sqlx::query_as::<_, TankStatisticRow>(&query)
            .bind(stat.test_date)
            .bind(stat.ph)
            .bind(stat.gh)
            .bind(stat.kh)
            .bind(stat.ammonia)
            .bind(stat.nitrite)
            .bind(stat.nitrate)
            .bind(stat.phosphate)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(id = row.id, "Tank statistic inserted successfully");
        Ok(row.into())
    }
}

#[async_trait]
impl Lister<TankStatistic> for PostgresRepository {
    async fn list(&self) -> Result<Vec<TankStatistic>, RepositoryError> {
        let query = format!("SELECT {} FROM tank_statistics", TANK_STATISTIC_COLUMNS);
        let rows = sqlx::query_as::<_, TankStatisticRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(row_count = rows.len(), "Tank statistics queried successfully");
        Ok(rows.into_iter().map(TankStatistic::from).collect())
    }
}

#[async_trait]
impl Deleter<TankStatistic> for PostgresRepository {
    async fn delete(&self, id: i32) -> Result<TankStatistic, RepositoryError> {
        let query = format!(
            "DELETE FROM tank_statistics WHERE id = $1 RETURNING {}",
            TANK_STATISTIC_COLUMNS
        );
        let row = sqlx::query_as::<_, TankStatisticRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(RepositoryError::NotFound { kind: "tank statistic", id })?;

        tracing::info!(id = row.id, "Tank statistic deleted successfully");
        Ok(row.into())
    }
}

#[async_trait]
impl Inserter<Tank> for PostgresRepository {
    async fn insert(&self, tank: Tank) -> Result<Tank, RepositoryError> {
        let query = format!(
            "INSERT INTO tanks(make, model, name, location, capacity_measurement, capacity, description) \
             VALUES($1, $2, $3, $4, $5, $6, $7) RETURNING {}",
            TANK_COLUMNS
        );

        let row = sqlx::query_as::<_, TankRow>(&query)
            .bind(tank.make)
            .bind(tank.model)
            .bind(tank.name)
            .bind(tank.location)
            .bind(tank.capacity_measurement)
            .bind(tank.capacity)
            .bind(tank.description)
            .fetch_one(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(id = row.id, "Tank inserted successfully");
        Ok(row.into())
    }
}

#[async_trait]
impl Lister<Tank> for PostgresRepository {
    async fn list(&self) -> Result<Vec<Tank>, RepositoryError> {
        let query = format!("SELECT {} FROM tanks", TANK_COLUMNS);
        let rows = sqlx::query_as::<_, TankRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error)?;

        tracing::info!(row_count = rows.len(), "Tanks queried successfully");
        Ok(rows.into_iter().map(Tank::from).collect())
    }
}

#[async_trait]
impl Deleter<Tank> for PostgresRepository {
    async fn delete(&self, id: i32) -> Result<Tank, RepositoryError> {
        let query = format!("DELETE FROM tanks WHERE id = $1 RETURNING {}", TANK_COLUMNS);
        let row = sqlx::query_as::<_, TankRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error)?
            .ok_or(RepositoryError::NotFound { kind: "tank", id })?;

        tracing::info!(id = row.id, "Tank deleted successfully");
        Ok(row.into())
    }
}
