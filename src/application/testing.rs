// In-memory stand-ins for storage and the species directory
use crate::application::repository::{Deleter, Inserter, Lister, RepositoryError};
use crate::application::species_directory::{CollaboratorError, SpeciesDirectory};
use crate::domain::fish::{Ecosystem, Fish};
use crate::domain::species::{HeartbeatStatus, SpeciesDetails};
use crate::domain::tank::Tank;
use crate::domain::tank_statistic::TankStatistic;
use async_trait::async_trait;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub trait Record: Clone + Send + Sync + 'static {
    const KIND: &'static str;
    fn id(&self) -> i32;
    fn set_id(&mut self, id: i32);
}

impl Record for Fish {
    const KIND: &'static str = "fish";
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Record for TankStatistic {
    const KIND: &'static str = "tank statistic";
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

impl Record for Tank {
    const KIND: &'static str = "tank";
    fn id(&self) -> i32 {
        self.id
    }
    fn set_id(&mut self, id: i32) {
        self.id = id;
    }
}

/// Keeps records in a vector and hands out ids from 1.
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    inserted: Mutex<Vec<T>>,
    next_id: Mutex<i32>,
}

impl<T: Record> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            inserted: Mutex::new(Vec::new()),
            next_id: Mutex::new(1),
        }
    }

    /// Every record handed to `insert`, exactly as received.
    pub fn inserted(&self) -> Vec<T> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl<T: Record> Inserter<T> for MemoryStore<T> {
    async fn insert(&self, record: T) -> Result<T, RepositoryError> {
        self.inserted.lock().unwrap().push(record.clone());

        let mut next_id = self.next_id.lock().unwrap();
        let mut stored = record;
        stored.set_id(*next_id);
        *next_id += 1;

        self.records.lock().unwrap().push(stored.clone());
        Ok(stored)
    }
}

#[async_trait]
impl<T: Record> Lister<T> for MemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Ok(self.records.lock().unwrap().clone())
    }
}

#[async_trait]
impl<T: Record> Deleter<T> for MemoryStore<T> {
    async fn delete(&self, id: i32) -> Result<T, RepositoryError> {
        let mut records = self.records.lock().unwrap();
        match records.iter().position(|r| r.id() == id) {
            Some(index) => Ok(records.remove(index)),
            None => Err(RepositoryError::NotFound { kind: T::KIND, id }),
        }
    }
}

/// Fails every call with the same storage error.
pub struct FailingStore(pub &'static str);

#[async_trait]
impl<T: Record> Inserter<T> for FailingStore {
    async fn insert(&self, _record: T) -> Result<T, RepositoryError> {
        Err(RepositoryError::Storage(self.0.to_string()))
    }
}

#[async_trait]
impl<T: Record> Lister<T> for FailingStore {
    async fn list(&self) -> Result<Vec<T>, RepositoryError> {
        Err(RepositoryError::Storage(self.0.to_string()))
    }
}

#[async_trait]
impl<T: Record> Deleter<T> for FailingStore {
    async fn delete(&self, _id: i32) -> Result<T, RepositoryError> {
        Err(RepositoryError::Storage(self.0.to_string()))
    }
}

/// Species directory answering from fixed values and counting lookups.
pub struct FakeDirectory {
    pub heartbeat: Option<HeartbeatStatus>,
    pub ecosystem: Option<Ecosystem>,
    pub lookups: AtomicUsize,
}

impl FakeDirectory {
    pub fn up(ecosystem: Ecosystem) -> Self {
        Self {
            heartbeat: Some(HeartbeatStatus::Operational),
            ecosystem: Some(ecosystem),
            lookups: AtomicUsize::new(0),
        }
    }

    pub fn unreachable() -> Self {
        Self {
            heartbeat: None,
            ecosystem: None,
            lookups: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl SpeciesDirectory for FakeDirectory {
    async fn get_heartbeat(&self) -> Result<HeartbeatStatus, CollaboratorError> {
        self.heartbeat
            .ok_or_else(|| CollaboratorError::Request("connection refused".to_string()))
    }

    async fn get_details(&self, genus: &str, species: &str) -> Result<SpeciesDetails, CollaboratorError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        match &self.ecosystem {
            Some(ecosystem) => Ok(SpeciesDetails {
                genus: genus.to_string(),
                species: species.to_string(),
                ecosystem: ecosystem.clone(),
                ..Default::default()
            }),
            None => Err(CollaboratorError::Request("connection refused".to_string())),
        }
    }
}
