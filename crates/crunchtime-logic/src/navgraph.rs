//! Room-to-room navigation over the door adjacency graph.
//!
//! `NavGraph` is built once from the layout's door edges and answers
//! "which doors do I pass through to reach that room" via BFS, with a
//! bounded path cache. Within a room, movement falls to the local
//! steering heuristic.

use crate::geometry::{Rect, Vec2};
use crate::layout::RoomId;
use std::collections::{HashMap, HashSet, VecDeque};

/// One step of a room path: walk to this door, emerge in this room.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hop {
    pub door: Vec2,
    pub room: RoomId,
}

/// Pre-built navigation graph with BFS pathfinding and a bounded cache.
#[derive(Debug, Clone)]
pub struct NavGraph {
    /// room → list of (neighbor, door center)
    adj: HashMap<RoomId, Vec<(RoomId, Vec2)>>,
    cache: HashMap<(RoomId, RoomId), Vec<Hop>>,
    cache_capacity: usize,
}

impl NavGraph {
    pub fn from_door_edges(edges: &[(RoomId, RoomId, Rect)]) -> Self {
        Self::with_cache_capacity(edges, 64)
    }

    pub fn with_cache_capacity(edges: &[(RoomId, RoomId, Rect)], cache_capacity: usize) -> Self {
        let mut adj: HashMap<RoomId, Vec<(RoomId, Vec2)>> = HashMap::new();
        for &(a, b, rect) in edges {
            let door = rect.center();
            adj.entry(a).or_default().push((b, door));
            adj.entry(b).or_default().push((a, door));
        }
        Self {
            adj,
            cache: HashMap::new(),
            cache_capacity,
        }
    }

    /// BFS path as a list of hops. Empty for same room, `None` when
    /// unreachable.
    pub fn find_path(&mut self, from: RoomId, to: RoomId) -> Option<Vec<Hop>> {
        if from == to {
            return Some(vec![]);
        }
        let key = (from, to);
        if let Some(cached) = self.cache.get(&key) {
            return Some(cached.clone());
        }

        let result = self.bfs(from, to);
        if let Some(ref path) = result {
            if self.cache.len() >= self.cache_capacity {
                // Evict an arbitrary entry to stay bounded
                if let Some(&evict) = self.cache.keys().next() {
                    self.cache.remove(&evict);
                }
            }
            self.cache.insert(key, path.clone());
        }
        result
    }

    /// The first door to walk toward when heading from `from` to `to`.
    pub fn next_door(&mut self, from: RoomId, to: RoomId) -> Option<Vec2> {
        self.find_path(from, to)
            .and_then(|path| path.first().map(|hop| hop.door))
    }

    pub fn neighbors(&self, room: RoomId) -> &[(RoomId, Vec2)] {
        self.adj.get(&room).map(|v| v.as_slice()).unwrap_or(&[])
    }

    pub fn room_count(&self) -> usize {
        self.adj.len()
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    fn bfs(&self, from: RoomId, to: RoomId) -> Option<Vec<Hop>> {
        let mut visited = HashSet::new();
        let mut queue: VecDeque<(RoomId, Vec<Hop>)> = VecDeque::new();
        visited.insert(from);
        queue.push_back((from, vec![]));

        while let Some((current, path)) = queue.pop_front() {
            if let Some(neighbors) = self.adj.get(&current) {
                for &(next, door) in neighbors {
                    if next == to {
                        let mut result = path.clone();
                        result.push(Hop { door, room: next });
                        return Some(result);
                    }
                    if visited.insert(next) {
                        let mut new_path = path.clone();
                        new_path.push(Hop { door, room: next });
                        queue.push_back((next, new_path));
                    }
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::OfficeLayout;

    fn office_graph() -> NavGraph {
        let layout = OfficeLayout::standard().unwrap();
        NavGraph::from_door_edges(&layout.door_edges())
    }

    #[test]
    fn test_same_room_is_empty_path() {
        let mut nav = office_graph();
        assert_eq!(nav.find_path(RoomId::Office, RoomId::Office), Some(vec![]));
    }

    #[test]
    fn test_adjacent_rooms_one_hop() {
        let mut nav = office_graph();
        let path = nav.find_path(RoomId::Office, RoomId::Hallway).unwrap();
        assert_eq!(path.len(), 1);
        assert_eq!(path[0].room, RoomId::Hallway);
    }

    #[test]
    fn test_break_room_to_classroom_spans_the_floor() {
        let mut nav = office_graph();
        let path = nav.find_path(RoomId::BreakRoom, RoomId::Classroom).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path[0].room, RoomId::Office);
        assert_eq!(path[1].room, RoomId::Hallway);
        assert_eq!(path[2].room, RoomId::Classroom);
    }

    #[test]
    fn test_meeting_room_to_break_room() {
        let mut nav = office_graph();
        let path = nav.find_path(RoomId::MeetingRoom, RoomId::BreakRoom).unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.last().unwrap().room, RoomId::BreakRoom);
    }

    #[test]
    fn test_next_door_points_at_connecting_doorway() {
        let mut nav = office_graph();
        let door = nav.next_door(RoomId::Office, RoomId::Classroom).unwrap();
        // First hop from the Office eastward is the Office↔Hallway door
        assert_eq!(door, Rect::new(545.0, 250.0, 10.0, 100.0).center());
    }

    #[test]
    fn test_unreachable_room_is_none() {
        // Graph missing the Hallway↔Classroom edge strands the Classroom
        let layout = OfficeLayout::standard().unwrap();
        let edges: Vec<_> = layout
            .door_edges()
            .into_iter()
            .filter(|&(a, b, _)| a != RoomId::Classroom && b != RoomId::Classroom)
            .collect();
        let mut nav = NavGraph::from_door_edges(&edges);
        assert_eq!(nav.find_path(RoomId::Office, RoomId::Classroom), None);
    }

    #[test]
    fn test_cache_hit_and_bound() {
        let layout = OfficeLayout::standard().unwrap();
        let mut nav = NavGraph::with_cache_capacity(&layout.door_edges(), 2);
        nav.find_path(RoomId::BreakRoom, RoomId::Office);
        nav.find_path(RoomId::BreakRoom, RoomId::Hallway);
        assert_eq!(nav.cache_size(), 2);
        nav.find_path(RoomId::BreakRoom, RoomId::Classroom);
        assert_eq!(nav.cache_size(), 2);

        // Repeat lookup returns the same path from cache
        let a = nav.find_path(RoomId::BreakRoom, RoomId::Classroom).unwrap();
        let b = nav.find_path(RoomId::BreakRoom, RoomId::Classroom).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_hallway_is_the_hub() {
        let nav = office_graph();
        assert_eq!(nav.neighbors(RoomId::Hallway).len(), 3);
        assert_eq!(nav.neighbors(RoomId::MeetingRoom).len(), 1);
    }
}
