//! In-memory [`Store`] for handler tests.

use super::{CascadeStep, Store, StoreError};
use crate::model::{Gizmo, NewGizmo, NewWidget, Widget};
use async_trait::async_trait;
use std::sync::Mutex;
use std::time::Duration;

#[derive(Default)]
struct Tables {
    gizmos: Vec<Gizmo>,
    widgets: Vec<Widget>,
    next_gizmo_id: i64,
    next_widget_id: i64,
}

/// Which operation should fail, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Failure {
    Everything,
    Cascade(CascadeStep),
}

#[derive(Default)]
pub struct MemoryStore {
    tables: Mutex<Tables>,
    failure: Mutex<Option<Failure>>,
    list_delay: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(failure: Failure) -> Self {
        let store = Self::default();
        store.fail_with(failure);
        store
    }

    /// `list_gizmos` sleeps for `delay` before answering.
    pub fn slow(delay: Duration) -> Self {
        Self {
            list_delay: Some(delay),
            ..Self::default()
        }
    }

    /// Arm a failure on a store that may already hold data.
    pub fn fail_with(&self, failure: Failure) {
        *self.failure.lock().unwrap() = Some(failure);
    }

    pub fn widget_count(&self) -> usize {
        self.tables.lock().unwrap().widgets.len()
    }

    fn check(&self) -> Result<(), StoreError> {
        match *self.failure.lock().unwrap() {
            Some(Failure::Everything) => Err(StoreError::Db(sqlx::Error::Protocol("backend unavailable".into()))),
            _ => Ok(()),
        }
    }

    fn check_step(&self, step: CascadeStep) -> Result<(), StoreError> {
        self.check()?;
        match *self.failure.lock().unwrap() {
            Some(Failure::Cascade(s)) if s == step => Err(StoreError::Cascade {
                step,
                source: sqlx::Error::Protocol(format!("{step} failed")),
            }),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn list_gizmos(&self) -> Result<Vec<Gizmo>, StoreError> {
        if let Some(delay) = self.list_delay {
            tokio::time::sleep(delay).await;
        }
        self.check()?;
        Ok(self.tables.lock().unwrap().gizmos.clone())
    }

    async fn insert_gizmo(&self, gizmo: &NewGizmo) -> Result<Gizmo, StoreError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        t.next_gizmo_id += 1;
        let row = Gizmo {
            id: t.next_gizmo_id,
            name: gizmo.name.clone(),
            description: gizmo.description.clone(),
        };
        t.gizmos.push(row.clone());
        Ok(row)
    }

    async fn get_gizmo(&self, id: i64) -> Result<Gizmo, StoreError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        t.gizmos
            .iter()
            .find(|g| g.id == id)
            .cloned()
            .ok_or_else(|| StoreError::from(sqlx::Error::RowNotFound))
    }

    async fn gizmo_exists(&self, id: i64) -> Result<bool, StoreError> {
        self.check()?;
        Ok(self.tables.lock().unwrap().gizmos.iter().any(|g| g.id == id))
    }

    async fn delete_gizmo(&self, id: i64) -> Result<u64, StoreError> {
        // Work on a copy and swap it in at "commit" so a failing step leaves nothing behind.
        let mut t = self.tables.lock().unwrap();
        self.check_step(CascadeStep::Begin)?;
        let mut widgets = t.widgets.clone();
        widgets.retain(|w| w.gizmo_id != id);
        self.check_step(CascadeStep::DeleteWidgets)?;
        let mut gizmos = t.gizmos.clone();
        gizmos.retain(|g| g.id != id);
        let affected = (t.gizmos.len() - gizmos.len()) as u64;
        self.check_step(CascadeStep::DeleteGizmo)?;
        self.check_step(CascadeStep::Commit)?;
        t.widgets = widgets;
        t.gizmos = gizmos;
        Ok(affected)
    }

    async fn list_widgets(&self, gizmo_id: i64) -> Result<Vec<Widget>, StoreError> {
        self.check()?;
        let t = self.tables.lock().unwrap();
        Ok(t.widgets.iter().filter(|w| w.gizmo_id == gizmo_id).cloned().collect())
    }

    async fn insert_widget(&self, gizmo_id: i64, widget: &NewWidget) -> Result<Widget, StoreError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        t.next_widget_id += 1;
        let row = Widget {
            id: t.next_widget_id,
            gizmo_id,
            name: widget.name.clone(),
        };
        t.widgets.push(row.clone());
        Ok(row)
    }

    async fn delete_widget(&self, gizmo_id: i64, id: i64) -> Result<u64, StoreError> {
        self.check()?;
        let mut t = self.tables.lock().unwrap();
        let before = t.widgets.len();
        t.widgets.retain(|w| !(w.gizmo_id == gizmo_id && w.id == id));
        Ok((before - t.widgets.len()) as u64)
    }
}
