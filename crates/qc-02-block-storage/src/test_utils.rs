use crate::domain::entities::{BlockSummary, StoredBlock};
use crate::domain::errors::KVStoreError;
use crate::domain::stats::StatsAggregator;
use crate::ports::outbound::{BatchOperation, KeyValueStore, ScanResult};
use shared_types::{
    Block, BlockBody, BlockHash, BlockHeader, DeployMeta, ProcessedDeploy, ProtocolVersion,
};

pub const CHAIN_NAME: &str = "quantum-chain-test";

pub fn make_test_block(main_rank: u64, parent_hashes: Vec<BlockHash>) -> Block {
    Block {
        header: BlockHeader {
            justifications: parent_hashes.clone(),
            parent_hashes,
            global_state_hash: [main_rank as u8; 32],
            j_rank: main_rank,
            main_rank,
            protocol_version: ProtocolVersion::V1_0_0,
            timestamp: 1_600_000_000_000 + main_rank,
            chain_name: CHAIN_NAME.to_string(),
            validator_public_key: [0xAA; 32],
            validator_seq_num: main_rank as u32,
            validator_prev_block_hash: None,
        },
        body: BlockBody::default(),
    }
}

/// Deploys with `cost_i = 100 * i + i` and `gas_price_i = 2 * i`.
pub fn make_deploys(count: u64) -> Vec<ProcessedDeploy> {
    (0..count)
        .map(|i| ProcessedDeploy {
            deploy_hash: [i as u8; 32],
            payload: vec![i as u8; 8],
            cost: 100 * i + i,
            gas_price: 2 * i,
            is_error: false,
            error_message: String::new(),
        })
        .collect()
}

pub fn hash_of(block: &Block) -> BlockHash {
    block.compute_hash().unwrap()
}

pub fn make_stored_block() -> StoredBlock {
    let mut block = make_test_block(0, vec![]);
    block.body.deploys = make_deploys(3);
    let hash = hash_of(&block);
    let stats = StatsAggregator::compute_stats(&block).unwrap();
    StoredBlock::new(
        BlockSummary::new(hash, block.header.clone()),
        stats,
        block,
        DeployMeta::new(),
    )
}

/// Key-value store whose batch writes always fail, for atomicity tests.
#[derive(Default)]
pub struct FailingKVStore;

impl KeyValueStore for FailingKVStore {
    fn get(&self, _key: &[u8]) -> Result<Option<Vec<u8>>, KVStoreError> {
        Ok(None)
    }

    fn put(&mut self, _key: &[u8], _value: &[u8]) -> Result<(), KVStoreError> {
        Err(KVStoreError::IOError {
            message: "write refused".to_string(),
        })
    }

    fn delete(&mut self, _key: &[u8]) -> Result<(), KVStoreError> {
        Ok(())
    }

    fn atomic_batch_write(&mut self, _operations: Vec<BatchOperation>) -> Result<(), KVStoreError> {
        Err(KVStoreError::IOError {
            message: "batch refused".to_string(),
        })
    }

    fn exists(&self, _key: &[u8]) -> Result<bool, KVStoreError> {
        Ok(false)
    }

    fn prefix_scan(&self, _prefix: &[u8]) -> Result<ScanResult, KVStoreError> {
        Ok(Vec::new())
    }
}
