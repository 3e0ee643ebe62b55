//! Shift Store (班次存储)
//!
//! Process-lifetime, insertion-ordered collection of shifts. Nothing is
//! persisted: a restart discards every mutation and re-seeds.
//!
//! Every operation takes the lock exactly once, so each operation is atomic.
//! Concurrent applies on the same id are last-write-wins under the
//! permissive policy.

pub mod seed;

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use parking_lot::RwLock;
use rand::Rng;
use shared::error::AppError;
use shared::models::{ApplyRequest, Shift, ShiftCreate, ShiftFilter, ShiftStatus};
use thiserror::Error;

const ID_ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const ID_LEN: usize = 9;

/// Whether lifecycle edges are guarded
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TransitionPolicy {
    /// Apply/approve always succeed on an existing shift
    #[default]
    Permissive,
    /// Only `open → pending` and `pending → booked`
    Strict,
}

impl TransitionPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Permissive => "permissive",
            Self::Strict => "strict",
        }
    }
}

impl fmt::Display for TransitionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransitionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Self::Permissive),
            "strict" => Ok(Self::Strict),
            other => Err(format!(
                "unknown transition policy '{other}', expected 'permissive' or 'strict'"
            )),
        }
    }
}

/// Store-level errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Shift {0} not found")]
    NotFound(String),

    #[error("Shift {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: String,
        from: ShiftStatus,
        to: ShiftStatus,
    },
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<StoreError> for AppError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => AppError::shift_not_found(),
            StoreError::InvalidTransition { from, to, .. } => AppError::invalid_transition(
                format!("Shift cannot move from {from} to {to}"),
            )
            .with_detail("from", from.as_str())
            .with_detail("to", to.as_str()),
        }
    }
}

#[derive(Debug, Default)]
struct Inner {
    shifts: Vec<Shift>,
    /// id -> position in `shifts`; positions are stable because nothing is removed
    index: HashMap<String, usize>,
}

impl Inner {
    fn push(&mut self, shift: Shift) {
        self.index.insert(shift.id.clone(), self.shifts.len());
        self.shifts.push(shift);
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Shift> {
        let pos = *self.index.get(id)?;
        self.shifts.get_mut(pos)
    }

    fn fresh_id(&self) -> String {
        let mut rng = rand::thread_rng();
        loop {
            let id: String = (0..ID_LEN)
                .map(|_| ID_ALPHABET[rng.gen_range(0..ID_ALPHABET.len())] as char)
                .collect();
            if !self.index.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Shared handle to the shift collection
///
/// Cloning is cheap and every clone sees the same shifts.
#[derive(Debug, Clone, Default)]
pub struct ShiftStore {
    inner: Arc<RwLock<Inner>>,
    policy: TransitionPolicy,
}

impl ShiftStore {
    /// Empty store
    pub fn new(policy: TransitionPolicy) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner::default())),
            policy,
        }
    }

    /// Store pre-filled with `shifts`; a repeated id keeps the first record
    pub fn with_shifts(policy: TransitionPolicy, shifts: impl IntoIterator<Item = Shift>) -> Self {
        let store = Self::new(policy);
        {
            let mut inner = store.inner.write();
            for shift in shifts {
                if inner.index.contains_key(&shift.id) {
                    tracing::warn!(id = %shift.id, "Skipping seed shift with duplicate id");
                    continue;
                }
                inner.push(shift);
            }
        }
        store
    }

    pub fn policy(&self) -> TransitionPolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.inner.read().shifts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, id: &str) -> bool {
        self.inner.read().index.contains_key(id)
    }

    pub fn get(&self, id: &str) -> Option<Shift> {
        let inner = self.inner.read();
        inner.index.get(id).map(|&pos| inner.shifts[pos].clone())
    }

    /// Shifts matching `filter`, in insertion order
    pub fn list(&self, filter: &ShiftFilter) -> Vec<Shift> {
        self.inner
            .read()
            .shifts
            .iter()
            .filter(|s| filter.matches(s))
            .cloned()
            .collect()
    }

    /// Store a new open shift under a fresh id
    pub fn create(&self, fields: ShiftCreate) -> Shift {
        let mut inner = self.inner.write();
        let shift = Shift::open(inner.fresh_id(), fields);
        inner.push(shift.clone());
        tracing::info!(id = %shift.id, "Shift created");
        shift
    }

    /// Mark a shift pending and record who applied
    pub fn apply(&self, id: &str, actor: ApplyRequest) -> StoreResult<Shift> {
        self.transition(id, ShiftStatus::Pending, |shift| {
            shift.worker_id = actor.worker_id;
            shift.worker_name = actor.worker_name;
        })
    }

    /// Mark a shift booked
    pub fn approve(&self, id: &str) -> StoreResult<Shift> {
        self.transition(id, ShiftStatus::Booked, |_| {})
    }

    fn transition(
        &self,
        id: &str,
        next: ShiftStatus,
        update: impl FnOnce(&mut Shift),
    ) -> StoreResult<Shift> {
        let mut inner = self.inner.write();
        let shift = inner
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound(id.to_string()))?;

        if self.policy == TransitionPolicy::Strict && !shift.status.can_transition_to(next) {
            return Err(StoreError::InvalidTransition {
                id: id.to_string(),
                from: shift.status,
                to: next,
            });
        }

        let previous = shift.status;
        shift.status = next;
        update(shift);
        tracing::info!(id = %id, from = %previous, to = %next, "Shift status changed");
        Ok(shift.clone())
    }
}
