mod coordinate;
mod divide;
mod error;
pub mod from_wkt;
pub mod geometry;
mod nearest;
mod node;
mod point;
mod rectangle;
mod rtree;
mod skyline;
pub mod traversal;
mod utils;

pub use coordinate::Coordinate;
pub use divide::{
    divide_and_conquer_nearest_neighbor, divide_and_conquer_skyline,
    divide_and_conquer_skyline_with, split_by_median_x,
};
pub use error::{Error, Result};
pub use geometry::{dominates, euclidean_distance, mindist_point_to_mbr, Direction, Preference};
pub use nearest::{nearest_neighbor, nearest_neighbor_with_stats, nearest_neighbors, Nearest};
pub use node::{Node, NodeId, NodeKind};
pub use point::Point;
pub use rectangle::{HasEnvelope, Rectangle};
pub use rtree::{build_index, build_index_with_degree, RTree, DEFAULT_DEGREE};
pub use skyline::{dominance_filter, skyline, skyline_with, skyline_with_stats};
pub use traversal::TraversalStats;
