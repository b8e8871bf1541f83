//! The engine's resource table.
//!
//! Resource ids are assigned from 1 upward per engine instance and never
//! reused within it.

use std::collections::BTreeMap;

use pane_common::ResourceId;
use pane_protocol::Event;

use crate::errors::{EngineError, EngineResult};
use crate::window::WindowState;

#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Window and device events waiting for the next step.
    pub pending: Vec<Event>,
    pub started: bool,
    pub exit_requested: bool,
    pub destroyed: bool,
    /// Windows owned by this loop, in creation order.
    pub windows: Vec<ResourceId>,
}

#[derive(Debug)]
pub enum Resource {
    EventLoop(EventLoopState),
    Window(Box<WindowState>),
}

#[derive(Debug)]
pub struct ResourceTable {
    next_rid: ResourceId,
    entries: BTreeMap<ResourceId, Resource>,
}

impl Default for ResourceTable {
    fn default() -> Self {
        Self {
            next_rid: 1,
            entries: BTreeMap::new(),
        }
    }
}

fn bad_resource(rid: ResourceId) -> EngineError {
    EngineError::new(format!("bad resource id {rid}"))
}

impl ResourceTable {
    pub fn insert(&mut self, resource: Resource) -> EngineResult<ResourceId> {
        self.insert_with(|_| resource)
    }

    /// Insert a resource whose construction needs its own id.
    pub fn insert_with(
        &mut self,
        make: impl FnOnce(ResourceId) -> Resource,
    ) -> EngineResult<ResourceId> {
        let rid = self.next_rid;
        self.next_rid = rid
            .checked_add(1)
            .ok_or_else(|| EngineError::new("resource ids exhausted"))?;
        self.entries.insert(rid, make(rid));
        Ok(rid)
    }

    pub fn remove(&mut self, rid: ResourceId) -> Option<Resource> {
        self.entries.remove(&rid)
    }

    pub fn event_loop_mut(&mut self, rid: ResourceId) -> EngineResult<&mut EventLoopState> {
        match self.entries.get_mut(&rid) {
            Some(Resource::EventLoop(state)) => Ok(state),
            Some(_) => Err(EngineError::new(format!("resource {rid} is not an event loop"))),
            None => Err(bad_resource(rid)),
        }
    }

    pub fn window(&self, rid: ResourceId) -> EngineResult<&WindowState> {
        match self.entries.get(&rid) {
            Some(Resource::Window(state)) => Ok(&**state),
            Some(_) => Err(EngineError::new(format!("resource {rid} is not a window"))),
            None => Err(bad_resource(rid)),
        }
    }

    pub fn window_mut(&mut self, rid: ResourceId) -> EngineResult<&mut WindowState> {
        match self.entries.get_mut(&rid) {
            Some(Resource::Window(state)) => Ok(&mut **state),
            Some(_) => Err(EngineError::new(format!("resource {rid} is not a window"))),
            None => Err(bad_resource(rid)),
        }
    }

    /// Ids of every event loop that has not been destroyed.
    pub fn live_event_loops(&self) -> Vec<ResourceId> {
        self.entries
            .iter()
            .filter_map(|(rid, resource)| match resource {
                Resource::EventLoop(state) if !state.destroyed => Some(*rid),
                _ => None,
            })
            .collect()
    }

    pub fn window_count(&self) -> usize {
        self.entries
            .values()
            .filter(|resource| matches!(resource, Resource::Window(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_start_at_one_and_are_not_reused() {
        let mut table = ResourceTable::default();
        let first = table
            .insert(Resource::EventLoop(EventLoopState::default()))
            .unwrap();
        assert_eq!(first, 1);
        table.remove(first);
        let second = table
            .insert(Resource::EventLoop(EventLoopState::default()))
            .unwrap();
        assert_eq!(second, 2);
    }

    #[test]
    fn lookups_check_the_kind() {
        let mut table = ResourceTable::default();
        let rid = table
            .insert(Resource::EventLoop(EventLoopState::default()))
            .unwrap();
        assert_eq!(
            table.window(rid).unwrap_err().to_string(),
            "resource 1 is not a window"
        );
        assert_eq!(table.window(9).unwrap_err().to_string(), "bad resource id 9");
        assert!(table.event_loop_mut(rid).is_ok());
    }

    #[test]
    fn destroyed_loops_are_not_live() {
        let mut table = ResourceTable::default();
        let a = table
            .insert(Resource::EventLoop(EventLoopState::default()))
            .unwrap();
        let b = table
            .insert(Resource::EventLoop(EventLoopState::default()))
            .unwrap();
        table.event_loop_mut(a).unwrap().destroyed = true;
        assert_eq!(table.live_event_loops(), vec![b]);
    }
}
