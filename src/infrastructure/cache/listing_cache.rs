use std::{fmt, future::Future, sync::Arc};

use parking_lot::Mutex;

use crate::entities::{post::Post, project::Project, resource::Resource};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Resources,
    Posts,
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Collection::Projects => "projects",
            Collection::Resources => "resources",
            Collection::Posts => "posts",
        };
        write!(f, "{s}")
    }
}

struct SlotState<T> {
    generation: u64,
    value: Option<Arc<T>>,
}

/// One memoized listing guarded by a generation counter.
///
/// A populate only lands if no invalidation happened since its ticket was
/// taken, so a slow read can never resurrect data older than a committed
/// write.
pub struct CacheSlot<T> {
    collection: Collection,
    state: Mutex<SlotState<T>>,
}

impl<T> CacheSlot<T> {
    pub fn new(collection: Collection) -> Self {
        CacheSlot {
            collection,
            state: Mutex::new(SlotState { generation: 0, value: None }),
        }
    }

    pub fn get(&self) -> Option<Arc<T>> {
        self.state.lock().value.clone()
    }

    /// Current generation; pass it back to [`CacheSlot::populate`].
    pub fn ticket(&self) -> u64 {
        self.state.lock().generation
    }

    /// Stores `value` if the slot is still at `ticket`, and hands it back
    /// either way.
    pub fn populate(&self, ticket: u64, value: T) -> Arc<T> {
        let value = Arc::new(value);
        let mut state = self.state.lock();

        if state.generation == ticket {
            state.value = Some(Arc::clone(&value));
        } else {
            tracing::debug!(
                collection = %self.collection,
                ticket,
                generation = state.generation,
                "Discarding stale cache populate"
            );
        }

        value
    }

    pub fn invalidate(&self) {
        let mut state = self.state.lock();
        state.generation += 1;
        state.value = None;
        tracing::debug!(collection = %self.collection, generation = state.generation, "Cache invalidated");
    }

    /// Returns the cached listing or loads, populates and returns a fresh one.
    pub async fn get_or_load<F, Fut, E>(&self, load: F) -> Result<Arc<T>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T, E>>,
    {
        if let Some(hit) = self.get() {
            tracing::debug!(collection = %self.collection, "Cache hit");
            return Ok(hit);
        }

        tracing::debug!(collection = %self.collection, "Cache miss");
        let ticket = self.ticket();
        let fresh = load().await?;

        Ok(self.populate(ticket, fresh))
    }
}

/// Process-wide cache of the three list responses.
pub struct ResponseCache {
    pub projects: CacheSlot<Vec<Project>>,
    pub resources: CacheSlot<Vec<Resource>>,
    pub posts: CacheSlot<Vec<Post>>,
}

impl Default for ResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseCache {
    pub fn new() -> Self {
        ResponseCache {
            projects: CacheSlot::new(Collection::Projects),
            resources: CacheSlot::new(Collection::Resources),
            posts: CacheSlot::new(Collection::Posts),
        }
    }

    pub fn invalidate(&self, collection: Collection) {
        match collection {
            Collection::Projects => self.projects.invalidate(),
            Collection::Resources => self.resources.invalidate(),
            Collection::Posts => self.posts.invalidate(),
        }
    }

    pub fn clear(&self) {
        self.invalidate(Collection::Projects);
        self.invalidate(Collection::Resources);
        self.invalidate(Collection::Posts);
    }

    pub fn is_cached(&self, collection: Collection) -> bool {
        match collection {
            Collection::Projects => self.projects.get().is_some(),
            Collection::Resources => self.resources.get().is_some(),
            Collection::Posts => self.posts.get().is_some(),
        }
    }
}
