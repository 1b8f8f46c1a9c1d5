use crate::amr::{Cell, Mesh};
use rayon::prelude::*;

/// Applies a map-reduce over all active leaf cells
///
/// The map receives the cell index (into the field arrays) and the cell
/// itself; the partial results are combined with `combine`. The mesh is
/// read-only during the traversal and no ordering is guaranteed among
/// the per-cell evaluations, so `combine` must be associative and
/// commutative: no contribution is lost or double-counted regardless of
/// how the work is partitioned across workers.
///
/// With floating-point combiners the total may differ by rounding
/// between partitioning choices; it is deterministic for a fixed
/// partitioning policy but not guaranteed to be bit-identical across
/// different levels of parallelism.
pub fn map_reduce_cells<T, M, C>(mesh: &Mesh, identity: T, map: M, combine: C) -> T
where
    T: Clone + Send + Sync,
    M: Fn(usize, &Cell) -> T + Send + Sync,
    C: Fn(T, T) -> T + Send + Sync,
{
    mesh.cells
        .par_iter()
        .enumerate()
        .map(|(index, cell)| map(index, cell))
        .reduce(|| identity.clone(), combine)
}

////////////////////////////////////////////////////////////////////////////////////////////////////////////////////////
