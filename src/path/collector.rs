use tokio::sync::mpsc::UnboundedReceiver;

use crate::grid::{Bounds, GridError, Point, PointSet};

/// What a branch sends down the result stream: an exit it completed, or the
/// invariant violation that stopped it.
pub type Emission = Result<Point, GridError>;

/// What the collector hands back once the stream closes.
#[derive(Debug)]
pub struct Collected {
    pub exits: Vec<Point>,
    pub emissions: u64,
}

/// Drains the result stream until every sender is gone.
///
/// Duplicate exits from racing branches collapse into one entry. The first
/// invariant violation received is returned after the stream is drained, so
/// senders never block on a collector that stopped early.
pub async fn collect_exits(
    mut rx: UnboundedReceiver<Emission>,
    bounds: Bounds,
) -> Result<Collected, GridError> {
    let mut exits = PointSet::new(bounds);
    let mut emissions = 0u64;
    let mut fault: Option<GridError> = None;

    while let Some(emission) = rx.recv().await {
        emissions += 1;
        let recorded = emission.and_then(|point| exits.set(point));
        if let Err(e) = recorded {
            fault.get_or_insert(e);
        }
    }

    match fault {
        Some(e) => Err(e),
        None => Ok(Collected {
            exits: exits.to_sorted_vec(),
            emissions,
        }),
    }
}
