// TrackMyFish service - the ten v1alpha1 operations over storage and the species directory
use crate::application::error::ServiceError;
use crate::application::repository::{Deleter, Inserter, Lister, Repository};
use crate::application::species_directory::SpeciesDirectory;
use crate::domain::fish::Fish;
use crate::domain::tank::Tank;
use crate::domain::tank_statistic::TankStatistic;
use crate::infrastructure::wire::{
    AddFishRequest, AddFishResponse, AddTankRequest, AddTankResponse, AddTankStatisticRequest,
    AddTankStatisticResponse, DeleteFishRequest, DeleteFishResponse, DeleteTankRequest,
    DeleteTankResponse, DeleteTankStatisticRequest, DeleteTankStatisticResponse, HeartbeatRequest,
    HeartbeatResponse, ListFishRequest, ListFishResponse, ListTankStatisticsRequest,
    ListTankStatisticsResponse, ListTanksRequest, ListTanksResponse,
};
use crate::infrastructure::wire_mapper::{
    fish_from_wire, fish_to_wire, heartbeat_status_to_wire, tank_from_wire,
    tank_statistic_from_wire, tank_statistic_to_wire, tank_to_wire,
};
use std::sync::Arc;

/// Storage capabilities for one record kind.
pub struct Store<T> {
    pub inserter: Arc<dyn Inserter<T>>,
    pub lister: Arc<dyn Lister<T>>,
    pub deleter: Arc<dyn Deleter<T>>,
}

impl<T> Store<T> {
    /// Uses one repository for every capability.
    pub fn from_repository<R>(repository: Arc<R>) -> Self
    where
        R: Repository<T> + 'static,
    {
        Self {
            inserter: repository.clone(),
            lister: repository.clone(),
            deleter: repository,
        }
    }
}

impl<T> Clone for Store<T> {
    fn clone(&self) -> Self {
        Self {
            inserter: self.inserter.clone(),
            lister: self.lister.clone(),
            deleter: self.deleter.clone(),
        }
    }
}

#[derive(Clone)]
pub struct TrackMyFishService {
    fish: Store<Fish>,
    tank_statistics: Store<TankStatistic>,
    tanks: Store<Tank>,
    species_directory: Option<Arc<dyn SpeciesDirectory>>,
}

impl TrackMyFishService {
    pub fn new(
        fish: Store<Fish>,
        tank_statistics: Store<TankStatistic>,
        tanks: Store<Tank>,
        species_directory: Option<Arc<dyn SpeciesDirectory>>,
    ) -> Self {
        Self {
            fish,
            tank_statistics,
            tanks,
            species_directory,
        }
    }

    /// Reports the species directory status. Without a directory there is nothing to report.
    pub async fn heartbeat(&self, _req: HeartbeatRequest) -> Result<HeartbeatResponse, ServiceError> {
        let Some(directory) = &self.species_directory else {
            return Ok(HeartbeatResponse::default());
        };

        let status = directory
            .get_heartbeat()
            .await
            .map_err(ServiceError::collaborator("unable to get heartbeat information"))?;

        Ok(HeartbeatResponse {
            fishbase: Some(heartbeat_status_to_wire(status)),
        })
    }

    pub async fn add_fish(&self, req: AddFishRequest) -> Result<AddFishResponse, ServiceError> {
        let mut fish = fish_from_wire(req.fish.unwrap_or_default());
        if fish.count < 0 {
            return Err(ServiceError::Validation(format!(
                "fish count must not be negative, got {}",
                fish.count
            )));
        }

        self.enrich(&mut fish).await;

        let stored = self
            .fish
            .inserter
            .insert(fish)
            .await
            .map_err(ServiceError::repository("unable to add fish"))?;

        Ok(AddFishResponse {
            fish: fish_to_wire(stored),
        })
    }

    // Best effort: the fish is stored whether or not the lookup works.
    async fn enrich(&self, fish: &mut Fish) {
        let (Some(directory), Some(taxonomy)) = (&self.species_directory, &fish.taxonomy) else {
            return;
        };

        match directory.get_details(&taxonomy.genus, &taxonomy.species).await {
            Ok(details) => {
                tracing::info!(
                    spec_code = details.spec_code,
                    subfamily = %details.subfamily,
                    dangerous = %details.dangerous,
                    "Fish details found"
                );
                fish.ecosystem = Some(details.ecosystem);
            }
            Err(e) => {
                tracing::error!(
                    genus = %taxonomy.genus,
                    species = %taxonomy.species,
                    error = %e,
                    "Unable to get fish details"
                );
            }
        }
    }

    pub async fn list_fish(&self, _req: ListFishRequest) -> Result<ListFishResponse, ServiceError> {
        let fish = self
            .fish
            .lister
            .list()
            .await
            .map_err(ServiceError::repository("unable to list fish"))?;

        Ok(ListFishResponse {
            fish: fish.into_iter().map(fish_to_wire).collect(),
        })
    }

    pub async fn delete_fish(&self, req: DeleteFishRequest) -> Result<DeleteFishResponse, ServiceError> {
        let deleted = self
            .fish
            .deleter
            .delete(req.id)
            .await
            .map_err(ServiceError::repository("unable to delete fish"))?;

        Ok(DeleteFishResponse {
            fish: fish_to_wire(deleted),
        })
    }

    pub async fn add_tank_statistic(
        &self,
        req: AddTankStatisticRequest,
    ) -> Result<AddTankStatisticResponse, ServiceError> {
        let stat = tank_statistic_from_wire(req.tank_statistic.unwrap_or_default());
        ensure_finite(&[
            ("ph", stat.ph),
            ("gh", stat.gh),
            ("kh", stat.kh),
            ("ammonia", stat.ammonia),
            ("nitrite", stat.nitrite),
            ("nitrate", stat.nitrate),
            ("phosphate", stat.phosphate),
        ])?;

        let stored = self
            .tank_statistics
            .inserter
            .insert(stat)
            .await
            .map_err(ServiceError::repository("unable to add tank statistic"))?;

        Ok(AddTankStatisticResponse {
            tank_statistic: tank_statistic_to_wire(stored),
        })
    }

    pub async fn list_tank_statistics(
        &self,
        _req: ListTankStatisticsRequest,
    ) -> Result<ListTankStatisticsResponse, ServiceError> {
        let stats = self
            .tank_statistics
            .lister
            .list()
            .await
            .map_err(ServiceError::repository("unable to get tank statistics"))?;

        Ok(ListTankStatisticsResponse {
            tank_statistics: stats.into_iter().map(tank_statistic_to_wire).collect(),
        })
    }

    pub async fn delete_tank_statistic(
        &self,
        req: DeleteTankStatisticRequest,
    ) -> Result<DeleteTankStatisticResponse, ServiceError> {
        let deleted = self
            .tank_statistics
            .deleter
            .delete(req.id)
            .await
            .map_err(ServiceError::repository("unable to delete tank statistic"))?;

        Ok(DeleteTankStatisticResponse {
            tank_statistic: tank_statistic_to_wire(deleted),
        })
    }

    pub async fn add_tank(&self, req: AddTankRequest) -> Result<AddTankResponse, ServiceError> {
        let tank = tank_from_wire(req.tank.unwrap_or_default());
        ensure_finite(&[("capacity", tank.capacity)])?;

        let stored = self
            .tanks
            .inserter
            .insert(tank)
            .await
            .map_err(ServiceError::repository("unable to add tank"))?;

        Ok(AddTankResponse {
            tank: tank_to_wire(stored),
        })
    }

    pub async fn list_tanks(&self, _req: ListTanksRequest) -> Result<ListTanksResponse, ServiceError> {
        let tanks = self
            .tanks
            .lister
            .list()
            .await
            .map_err(ServiceError::repository("unable to get tanks"))?;

        Ok(ListTanksResponse {
            tanks: tanks.into_iter().map(tank_to_wire).collect(),
        })
    }

    pub async fn delete_tank(&self, req: DeleteTankRequest) -> Result<DeleteTankResponse, ServiceError> {
        let deleted = self
            .tanks
            .deleter
            .delete(req.id)
            .await
            .map_err(ServiceError::repository("unable to delete tank"))?;

        Ok(DeleteTankResponse {
            tank: tank_to_wire(deleted),
        })
    }
}

// Out-of-range JSON numbers decode to infinity, which would serialize back as null.
fn ensure_finite(readings: &[(&str, Option<f32>)]) -> Result<(), ServiceError> {
    for (name, value) in readings {
        if let Some(value) = value.filter(|v| !v.is_finite()) {
            return Err(ServiceError::Validation(format!(
                "{} must be a finite number, got {}",
                name, value
            )));
        }
    }
    Ok(())
}
