//! # Block Query Scenarios
//!
//! Ingest blocks through the store, read them back through the query
//! service by prefix, full hash and rank.

use crate::fixtures::{build_chain, init_tracing, make_block, make_deploys, new_store, put_block};
use qc_02_block_storage::{
    BlockQueryApi, BlockQueryService, BlockStoreApi, BlockView, QueryError, QueryStatus,
};

#[test]
fn test_genesis_and_child_scenario() {
    init_tracing();
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());

    let genesis = put_block(store.as_ref(), make_block(0, vec![]));
    let mut child = make_block(1, vec![genesis]);
    child.body.deploys = make_deploys(10);
    let child_hash = put_block(store.as_ref(), child);
    tracing::info!("genesis {} child {}", genesis.short(), child_hash.short());

    // S by a 5-character prefix, BASIC view.
    let info = queries
        .get_block_info(&child_hash.to_hex()[..5], BlockView::Basic)
        .unwrap();

    let cost_total: u64 = (0..10).map(|i| 100 * i + i).sum();
    let weighted: u64 = (0..10).map(|i| (100 * i + i) * (2 * i)).sum();
    assert_eq!(info.summary.block_hash, child_hash);
    assert_eq!(info.summary.parent_hashes(), &[genesis]);
    assert_eq!(info.status.deploy_cost_total, cost_total);
    assert_eq!(info.status.deploy_cost_total, 4545);
    assert_eq!(info.status.deploy_gas_price_avg, weighted / cost_total);
    assert_eq!(info.status.deploy_gas_price_avg, 12);
    assert!(info.status.child_hashes.is_empty());

    // G by its full hash, FULL view.
    let info = queries
        .get_block_info(&genesis.to_hex(), BlockView::Full)
        .unwrap();
    assert!(info.status.child_hashes.contains(&child_hash));
    assert!(info.summary.parent_hashes().is_empty());
}

#[test]
fn test_basic_view_never_lists_children() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let chain = build_chain(store.as_ref(), 3);

    for hash in &chain {
        let info = queries.get_block_info_by_hash(hash, BlockView::Basic).unwrap();
        assert!(info.status.child_hashes.is_empty());
    }

    let full = queries
        .get_block_info_by_hash(&chain[1], BlockView::Full)
        .unwrap();
    assert_eq!(full.status.child_hashes, vec![chain[2]]);
}

#[test]
fn test_summary_is_the_stored_header() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let block = make_block(7, vec![]);
    let header = block.header.clone();
    let hash = put_block(store.as_ref(), block);

    let info = queries.get_block_info(&hash.to_hex(), BlockView::Basic).unwrap();

    assert_eq!(info.summary.header, header);
    assert_eq!(store.get_summary(&hash).unwrap(), info.summary);
}

#[test]
fn test_dag_merge_children_visible_from_every_parent() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let genesis = put_block(store.as_ref(), make_block(0, vec![]));
    let left = put_block(store.as_ref(), make_block(1, vec![genesis]));
    let right = put_block(store.as_ref(), make_block(1, vec![genesis]));
    let merge = put_block(store.as_ref(), make_block(2, vec![left, right]));

    for parent in [left, right] {
        let info = queries.get_block_info_by_hash(&parent, BlockView::Full).unwrap();
        assert_eq!(info.status.child_hashes, vec![merge]);
    }
    let info = queries.get_block_info_by_hash(&genesis, BlockView::Full).unwrap();
    assert_eq!(info.status.child_hashes, vec![left, right]);
}

#[test]
fn test_error_statuses() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    build_chain(store.as_ref(), 2);

    let invalid = queries.get_block_info("not-hex", BlockView::Basic).unwrap_err();
    assert!(matches!(invalid, QueryError::InvalidQuery { .. }));
    assert_eq!(invalid.status(), QueryStatus::InvalidArgument);

    let missing = queries
        .get_block_info(&"0".repeat(64), BlockView::Basic)
        .unwrap_err();
    assert!(matches!(missing, QueryError::NotFound { .. }));
    assert_eq!(missing.status(), QueryStatus::NotFound);
    assert_eq!(missing.status().as_str(), "NOT_FOUND");
}

#[test]
fn test_blocks_listed_by_rank() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let chain = build_chain(store.as_ref(), 5);

    let infos = queries.get_block_infos_by_rank(2, 3, BlockView::Basic).unwrap();

    let hashes: Vec<_> = infos.iter().map(|info| info.summary.block_hash).collect();
    assert_eq!(hashes, chain[2..5].to_vec());
    assert_eq!(store.blocks_by_main_rank(2, 3), hashes);
}
