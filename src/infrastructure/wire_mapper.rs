// Mapper between domain models and v1alpha1 wire messages
use crate::domain::fish::{Ecosystem, Fish, Gender, Taxonomy};
use crate::domain::species::HeartbeatStatus;
use crate::domain::tank::Tank;
use crate::domain::tank_statistic::TankStatistic;
use crate::infrastructure::wire;

/// Builds the fish to store. Gender keeps its wire label; the id is left for storage to assign.
/// Ecosystem fields only ever come from the species lookup, so any sent by the client are dropped.
pub fn fish_from_wire(fish: wire::Fish) -> Fish {
    let taxonomy = match (fish.genus, fish.species) {
        (Some(genus), Some(species)) => Some(Taxonomy { genus, species }),
        _ => None,
    };

    Fish {
        id: 0,
        fish_type: fish.fish_type,
        subtype: fish.subtype,
        color: fish.color,
        gender: fish.gender.as_str().to_string(),
        purchase_date: fish.purchase_date,
        count: fish.count,
        taxonomy,
        ecosystem: None,
    }
}

pub fn fish_to_wire(fish: Fish) -> wire::Fish {
    let gender = Gender::normalize(&fish.gender);
    let (genus, species) = match fish.taxonomy {
        Some(taxonomy) => (Some(taxonomy.genus), Some(taxonomy.species)),
        None => (None, None),
    };

    wire::Fish {
        id: fish.id,
        fish_type: fish.fish_type,
        subtype: fish.subtype,
        color: fish.color,
        gender,
        purchase_date: fish.purchase_date,
        count: fish.count,
        genus,
        species,
        ecosystem: fish.ecosystem.map(ecosystem_to_wire),
    }
}

fn ecosystem_to_wire(ecosystem: Ecosystem) -> wire::Ecosystem {
    wire::Ecosystem {
        name: ecosystem.name,
        ecosystem_type: ecosystem.ecosystem_type,
        location: ecosystem.location,
        salinity: ecosystem.salinity,
        climate: ecosystem.climate,
    }
}

pub fn tank_statistic_from_wire(stat: wire::TankStatistic) -> TankStatistic {
    TankStatistic {
        id: 0,
        test_date: stat.test_date,
        ph: stat.ph,
        gh: stat.gh,
        kh: stat.kh,
        ammonia: stat.ammonia,
        nitrite: stat.nitrite,
        nitrate: stat.nitrate,
        phosphate: stat.phosphate,
    }
}

pub fn tank_statistic_to_wire(stat: TankStatistic) -> wire::TankStatistic {
    wire::TankStatistic {
        id: stat.id,
        test_date: stat.test_date,
        ph: stat.ph,
        gh: stat.gh,
        kh: stat.kh,
        ammonia: stat.ammonia,
        nitrite: stat.nitrite,
        nitrate: stat.nitrate,
        phosphate: stat.phosphate,
    }
}

pub fn tank_from_wire(tank: wire::Tank) -> Tank {
    Tank {
        id: 0,
        make: tank.make,
        model: tank.model,
        name: tank.name,
        location: tank.location,
        capacity_measurement: tank.capacity_measurement,
        capacity: tank.capacity,
        description: tank.description,
    }
}

pub fn tank_to_wire(tank: Tank) -> wire::Tank {
    wire::Tank {
        id: tank.id,
        make: tank.make,
        model: tank.model,
        name: tank.name,
        location: tank.location,
        capacity_measurement: tank.capacity_measurement,
        capacity: tank.capacity,
        description: tank.description,
    }
}

pub fn heartbeat_status_to_wire(status: HeartbeatStatus) -> wire::HeartbeatStatus {
    let status = match status {
        HeartbeatStatus::Operational => wire::Status::Operational,
        HeartbeatStatus::Degraded => wire::Status::Degraded,
        HeartbeatStatus::Down => wire::Status::Down,
    };

    wire::HeartbeatStatus { status }
}
