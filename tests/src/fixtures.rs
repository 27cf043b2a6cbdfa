//! Builders for blocks, deploys and stores.

use qc_02_block_storage::{
    BincodeBlockSerializer, BlockStorageService, BlockStoreApi, InMemoryKVStore, StorageConfig,
};
use rand::Rng;
use shared_types::{
    Block, BlockBody, BlockHash, BlockHeader, DeployMeta, ProcessedDeploy, ProtocolVersion,
};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

pub type MemoryStore = BlockStorageService<InMemoryKVStore, BincodeBlockSerializer>;

pub const CHAIN_NAME: &str = "quantum-chain-test";

/// Install a test-writer subscriber honouring `RUST_LOG`. Safe to call repeatedly.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn new_store() -> Arc<MemoryStore> {
    Arc::new(BlockStorageService::new_in_memory(StorageConfig::default()))
}

/// Block with a random global state hash, so equal ranks still hash apart.
pub fn make_block(main_rank: u64, parent_hashes: Vec<BlockHash>) -> Block {
    let mut rng = rand::thread_rng();
    Block {
        header: BlockHeader {
            justifications: parent_hashes.clone(),
            parent_hashes,
            global_state_hash: rng.gen(),
            j_rank: main_rank,
            main_rank,
            protocol_version: ProtocolVersion::V1_0_0,
            timestamp: 1_700_000_000_000 + main_rank,
            chain_name: CHAIN_NAME.to_string(),
            validator_public_key: rng.gen(),
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
            payload: vec![0xD0; 16],
            cost: 100 * i + i,
            gas_price: 2 * i,
            is_error: false,
            error_message: String::new(),
        })
        .collect()
}

/// Hash `block` and store it with empty deploy metadata.
pub fn put_block(store: &impl BlockStoreApi, block: Block) -> BlockHash {
    let hash = block.compute_hash().expect("block encodes");
    store
        .put(hash, block, DeployMeta::new())
        .expect("block stored");
    hash
}

/// Store a linear chain of `len` blocks on top of a genesis; returns every hash, genesis first.
pub fn build_chain(store: &impl BlockStoreApi, len: u64) -> Vec<BlockHash> {
    let mut hashes = vec![put_block(store, make_block(0, vec![]))];
    for rank in 1..=len {
        let parent = hashes[hashes.len() - 1];
        hashes.push(put_block(store, make_block(rank, vec![parent])));
    }
    hashes
}
