//! Readiness tracking for asynchronously delivered resources.
//!
//! Resources (keyword lists, classifier weights, word vectors) arrive from
//! component updates at arbitrary times and can be revoked on opt-out. A
//! [`ResourceHandle`] is either not ready or holds the current resource behind
//! an `Arc`; callers that already cloned the `Arc` keep using it after a reset.

use std::sync::{Arc, RwLock};

use crate::errors::{TargetingError, TargetingResult};
use crate::traits::IVersionedResource;

/// Load state of a resource.
#[derive(Debug)]
pub enum ResourceState<T> {
    NotReady,
    Ready(Arc<T>),
}

impl<T> Clone for ResourceState<T> {
    fn clone(&self) -> Self {
        match self {
            Self::NotReady => Self::NotReady,
            Self::Ready(resource) => Self::Ready(Arc::clone(resource)),
        }
    }
}

/// Shared slot holding the current version of a resource.
#[derive(Debug)]
pub struct ResourceHandle<T> {
    name: &'static str,
    state: RwLock<ResourceState<T>>,
}

impl<T> ResourceHandle<T> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: RwLock::new(ResourceState::NotReady),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Install `resource`, replacing any previous one.
    pub fn set(&self, resource: T) {
        self.set_shared(Arc::new(resource));
    }

    pub fn set_shared(&self, resource: Arc<T>) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = ResourceState::Ready(resource);
    }

    /// Drop the current resource; later calls see `NotReady`.
    pub fn reset(&self) {
        let mut state = self.state.write().unwrap_or_else(|e| e.into_inner());
        *state = ResourceState::NotReady;
    }

    pub fn is_initialized(&self) -> bool {
        matches!(self.state(), ResourceState::Ready(_))
    }

    pub fn state(&self) -> ResourceState<T> {
        self.state.read().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// The current resource, if loaded.
    pub fn get(&self) -> Option<Arc<T>> {
        match self.state() {
            ResourceState::Ready(resource) => Some(resource),
            ResourceState::NotReady => None,
        }
    }

    /// The current resource, or `NotReady`.
    pub fn require(&self) -> TargetingResult<Arc<T>> {
        self.get().ok_or_else(|| TargetingError::not_ready(self.name))
    }
}

impl<T: IVersionedResource> ResourceHandle<T> {
    /// Install `resource` only if its version matches `expected_version`.
    ///
    /// On mismatch the handle is reset, so a stale resource is never used.
    pub fn set_checked(&self, resource: T, expected_version: u32) -> TargetingResult<()> {
        let actual = resource.version();
        if actual != expected_version {
            self.reset();
            return Err(TargetingError::ConfigurationMismatch {
                component: self.name.to_string(),
                expected: expected_version,
                actual,
            });
        }
        self.set(resource);
        Ok(())
    }
}
