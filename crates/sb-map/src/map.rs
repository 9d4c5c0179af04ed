//! Portal map representation and builder.
//!
//! # Data layout
//!
//! Portals and links live in flat **structure-of-arrays** arenas indexed by
//! `NodeId` / `EdgeId`.  Identity cross-references between them are integer
//! indices, never owned pointers, so the bidirectional blocking relation
//! built on top (`sb-block`) carries no ownership cycles.
//!
//! Links store their **own endpoint coordinates** in addition to resolved
//! `NodeId`s.  The snapshot embeds the endpoint positions in every link, and
//! a link whose endpoint portal falls outside the active node set (endpoint
//! id = `NodeId::INVALID`) must still participate in blocking geometry.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) over portal positions answers the
//! "all portals within N km of the target" query of the radius pre-filter.

use rstar::{PointDistance, RTree, RTreeObject, AABB};
use rustc_hash::FxHashMap;

use sb_core::{EdgeId, GeoPoint, NodeId, Team};

/// Kilometres per degree of latitude (and of longitude at the equator).
const KM_PER_DEG: f64 = 110.574;

// ── R-tree portal entry ───────────────────────────────────────────────────────

/// Entry stored in the R-tree spatial index: a 2-D `[lat, lng]` point in
/// degrees with the associated `NodeId`.
#[derive(Clone, Debug)]
struct PortalEntry {
    point: [f64; 2], // [lat, lng]
    id: NodeId,
}

impl RTreeObject for PortalEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_point(self.point)
    }
}

impl PointDistance for PortalEntry {
    /// Squared Euclidean distance in degree space.  Only used for the
    /// conservative pre-query; exact selection is done with haversine.
    fn distance_2(&self, point: &[f64; 2]) -> f64 {
        let dlat = self.point[0] - point[0];
        let dlng = self.point[1] - point[1];
        dlat * dlat + dlng * dlng
    }
}

// ── PortalMap ─────────────────────────────────────────────────────────────────

/// Immutable portal/link arenas plus a spatial index.
///
/// All arena fields are `pub` for direct indexed access on hot paths.  Do
/// not construct directly; use [`PortalMapBuilder`].
#[derive(Debug)]
pub struct PortalMap {
    // ── Portal data (indexed by NodeId) ───────────────────────────────────
    /// Geographic position of each portal.
    pub node_pos: Vec<GeoPoint>,

    /// Snapshot guid of each portal (stable external identity).
    pub node_guid: Vec<String>,

    /// Human-readable portal name, used in iteration logs and exports.
    pub node_title: Vec<String>,

    // ── Link data (indexed by EdgeId) ─────────────────────────────────────
    /// Side of each link, relative to the planning side.
    pub edge_team: Vec<Team>,

    /// Origin portal of each link; `NodeId::INVALID` when the portal is
    /// absent from the active node set.
    pub edge_orig: Vec<NodeId>,

    /// Destination portal of each link; `NodeId::INVALID` when absent.
    pub edge_dest: Vec<NodeId>,

    /// Origin position as embedded in the snapshot link record.
    pub edge_orig_pos: Vec<GeoPoint>,

    /// Destination position as embedded in the snapshot link record.
    pub edge_dest_pos: Vec<GeoPoint>,

    // ── Indexes ───────────────────────────────────────────────────────────
    guid_index: FxHashMap<String, NodeId>,
    spatial_idx: RTree<PortalEntry>,
}

impl PortalMap {
    /// An empty map with no portals or links.
    pub fn empty() -> Self {
        PortalMapBuilder::new().build()
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.node_pos.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_team.len()
    }

    pub fn is_empty(&self) -> bool {
        self.node_pos.is_empty()
    }

    // ── Lookups ───────────────────────────────────────────────────────────

    /// Resolve a snapshot guid to its arena index.
    pub fn node_by_guid(&self, guid: &str) -> Option<NodeId> {
        self.guid_index.get(guid).copied()
    }

    #[inline]
    pub fn pos(&self, node: NodeId) -> GeoPoint {
        self.node_pos[node.index()]
    }

    #[inline]
    pub fn title(&self, node: NodeId) -> &str {
        &self.node_title[node.index()]
    }

    #[inline]
    pub fn guid(&self, node: NodeId) -> &str {
        &self.node_guid[node.index()]
    }

    /// Is `node` an endpoint of the link `edge`?
    #[inline]
    pub fn edge_touches(&self, edge: EdgeId, node: NodeId) -> bool {
        self.edge_orig[edge.index()] == node || self.edge_dest[edge.index()] == node
    }

    // ── Spatial queries ───────────────────────────────────────────────────

    /// All portals within `radius_km` (haversine) of `center`.
    ///
    /// The R-tree is queried with a conservative degree-space radius — a
    /// superset of the true circle — then each hit is confirmed with the
    /// exact haversine distance.
    pub fn within_radius_km(&self, center: GeoPoint, radius_km: f64) -> Vec<NodeId> {
        // Longitude degrees shrink by cos(lat); divide by the smaller
        // km-per-degree so the degree circle covers the km circle.
        let lat_cos = center.lat().to_radians().cos().abs().max(0.01);
        let deg = radius_km / (KM_PER_DEG * lat_cos);

        self.spatial_idx
            .locate_within_distance([center.lat(), center.lng()], deg * deg)
            .filter(|e| center.distance_km(self.node_pos[e.id.index()]) <= radius_km)
            .map(|e| e.id)
            .collect()
    }
}

// ── PortalMapBuilder ──────────────────────────────────────────────────────────

/// Construct a [`PortalMap`] incrementally, then call [`build`](Self::build).
///
/// Portals must be added before the links that reference them; use
/// [`resolve`](Self::resolve) to map a link endpoint's guid to its
/// `NodeId`, falling back to [`NodeId::INVALID`] when the portal is not in
/// the active set.
pub struct PortalMapBuilder {
    nodes: Vec<RawPortal>,
    edges: Vec<RawLink>,
    guid_index: FxHashMap<String, NodeId>,
}

struct RawPortal {
    guid:  String,
    title: String,
    pos:   GeoPoint,
}

struct RawLink {
    team:     Team,
    orig:     NodeId,
    dest:     NodeId,
    orig_pos: GeoPoint,
    dest_pos: GeoPoint,
}

impl PortalMapBuilder {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            guid_index: FxHashMap::default(),
        }
    }

    /// Pre-allocate for the expected number of portals and links.
    pub fn with_capacity(nodes: usize, edges: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(edges),
            guid_index: FxHashMap::default(),
        }
    }

    /// Add a portal and return its `NodeId` (sequential from 0).
    ///
    /// A repeated guid keeps the first portal's id.
    pub fn add_node(&mut self, guid: impl Into<String>, title: impl Into<String>, pos: GeoPoint) -> NodeId {
        let guid = guid.into();
        if let Some(&existing) = self.guid_index.get(&guid) {
            return existing;
        }
        let id = NodeId(self.nodes.len() as u32);
        self.guid_index.insert(guid.clone(), id);
        self.nodes.push(RawPortal { guid, title: title.into(), pos });
        id
    }

    /// Resolve a guid against the portals added so far.
    pub fn resolve(&self, guid: &str) -> Option<NodeId> {
        self.guid_index.get(guid).copied()
    }

    /// Add a directed link.  Endpoint ids may be [`NodeId::INVALID`] when
    /// the portal is absent from the active set; the endpoint positions
    /// come from the link record itself and are always required.
    pub fn add_edge(
        &mut self,
        team:     Team,
        orig:     NodeId,
        orig_pos: GeoPoint,
        dest:     NodeId,
        dest_pos: GeoPoint,
    ) -> EdgeId {
        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(RawLink { team, orig, dest, orig_pos, dest_pos });
        id
    }

    /// Look up the position of a portal added earlier (used when a link's
    /// endpoints are the portals themselves rather than embedded records).
    pub fn pos(&self, id: NodeId) -> GeoPoint {
        self.nodes[id.index()].pos
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Consume the builder and produce a [`PortalMap`].
    ///
    /// Bulk-loads the R-tree in O(N log N).
    pub fn build(self) -> PortalMap {
        let entries: Vec<PortalEntry> = self
            .nodes
            .iter()
            .enumerate()
            .map(|(i, p)| PortalEntry {
                point: [p.pos.lat(), p.pos.lng()],
                id: NodeId(i as u32),
            })
            .collect();
        let spatial_idx = RTree::bulk_load(entries);

        let mut node_pos   = Vec::with_capacity(self.nodes.len());
        let mut node_guid  = Vec::with_capacity(self.nodes.len());
        let mut node_title = Vec::with_capacity(self.nodes.len());
        for p in self.nodes {
            node_pos.push(p.pos);
            node_guid.push(p.guid);
            node_title.push(p.title);
        }

        let edge_team     = self.edges.iter().map(|l| l.team).collect();
        let edge_orig     = self.edges.iter().map(|l| l.orig).collect();
        let edge_dest     = self.edges.iter().map(|l| l.dest).collect();
        let edge_orig_pos = self.edges.iter().map(|l| l.orig_pos).collect();
        let edge_dest_pos = self.edges.iter().map(|l| l.dest_pos).collect();

        PortalMap {
            node_pos,
            node_guid,
            node_title,
            edge_team,
            edge_orig,
            edge_dest,
            edge_orig_pos,
            edge_dest_pos,
            guid_index: self.guid_index,
            spatial_idx,
        }
    }
}

impl Default for PortalMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}
