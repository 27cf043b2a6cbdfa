//! # Stats Aggregator
//!
//! Derived per-block statistics over the bundled deploys.
//!
//! Total cost is accumulated in `u128` and the cost-weighted gas sum in
//! `U256`: a single `cost * gas_price` product already needs 128 bits. The
//! average never exceeds the largest gas price and always fits in `u64`.
//! A total cost above `u64::MAX` saturates.

use super::entities::BlockStats;
use primitive_types::U256;
use shared_types::{Block, EncodingError};

pub struct StatsAggregator;

impl StatsAggregator {
    /// Compute size, total deploy cost and cost-weighted average gas price.
    ///
    /// `deploy_gas_price_avg = floor(sum(cost * gas_price) / sum(cost))`,
    /// or 0 when no cost was spent.
    pub fn compute_stats(block: &Block) -> Result<BlockStats, EncodingError> {
        let block_size_bytes = block.serialized_size()?;

        let (cost_total, weighted_total) =
            block
                .deploys()
                .iter()
                .fold((0u128, U256::zero()), |(cost, weighted), deploy| {
                    (
                        cost + u128::from(deploy.cost),
                        weighted + U256::from(deploy.cost) * U256::from(deploy.gas_price),
                    )
                });

        let deploy_gas_price_avg = if cost_total == 0 {
            0
        } else {
            let avg = weighted_total / U256::from(cost_total);
            if avg > U256::from(u64::MAX) {
                u64::MAX
            } else {
                avg.low_u64()
            }
        };

        Ok(BlockStats {
            block_size_bytes,
            deploy_cost_total: u64::try_from(cost_total).unwrap_or(u64::MAX),
            deploy_gas_price_avg,
            deploy_count: block.deploys().len() as u64,
        })
    }
}
