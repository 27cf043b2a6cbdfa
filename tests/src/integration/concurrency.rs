//! # Concurrent Ingestion and Queries
//!
//! Writers and readers share one store; readers must never see a block
//! without its backlinks.

use crate::fixtures::{make_block, new_store, put_block};
use qc_02_block_storage::{BlockQueryApi, BlockQueryService, BlockStoreApi, BlockView};
use parking_lot::Mutex;
use shared_types::BlockHash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

const WRITERS: u64 = 4;
const BLOCKS_PER_WRITER: u64 = 50;

#[test]
fn test_readers_never_see_block_without_backlink() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let genesis = put_block(store.as_ref(), make_block(0, vec![]));
    let written = Arc::new(Mutex::new(Vec::<BlockHash>::new()));
    let done = Arc::new(AtomicBool::new(false));

    let writers: Vec<_> = (0..WRITERS)
        .map(|_| {
            let store = Arc::clone(&store);
            let written = Arc::clone(&written);
            thread::spawn(move || {
                for rank in 1..=BLOCKS_PER_WRITER {
                    let hash = put_block(store.as_ref(), make_block(rank, vec![genesis]));
                    written.lock().push(hash);
                }
            })
        })
        .collect();

    let reader = {
        let queries = queries.clone();
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut checks = 0u64;
            while !done.load(Ordering::Acquire) {
                let info = queries
                    .get_block_info_by_hash(&genesis, BlockView::Full)
                    .unwrap();
                for child in &info.status.child_hashes {
                    let child_info = queries
                        .get_block_info_by_hash(child, BlockView::Basic)
                        .unwrap();
                    assert_eq!(child_info.summary.parent_hashes(), &[genesis]);
                }
                checks += 1;
            }
            checks
        })
    };

    for writer in writers {
        writer.join().unwrap();
    }
    done.store(true, Ordering::Release);
    assert!(reader.join().unwrap() > 0);

    let written = written.lock();
    assert_eq!(written.len() as u64, WRITERS * BLOCKS_PER_WRITER);
    assert_eq!(store.block_count() as u64, WRITERS * BLOCKS_PER_WRITER + 1);

    let mut children = store.children(&genesis);
    let mut expected = written.clone();
    children.sort();
    expected.sort();
    assert_eq!(children, expected);
}

#[test]
fn test_concurrent_identical_inserts_store_once() {
    let store = new_store();
    let block = make_block(0, vec![]);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let store = Arc::clone(&store);
            let block = block.clone();
            thread::spawn(move || put_block(store.as_ref(), block))
        })
        .collect();
    let hashes: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    assert!(hashes.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(store.block_count(), 1);
    assert_eq!(store.blocks_by_main_rank(0, 10), vec![hashes[0]]);
}

#[test]
fn test_prefix_queries_during_ingestion() {
    let store = new_store();
    let queries = BlockQueryService::new(store.clone());
    let anchor = put_block(store.as_ref(), make_block(0, vec![]));
    let anchor_hex = anchor.to_hex();

    let writer = {
        let store = Arc::clone(&store);
        thread::spawn(move || {
            for rank in 1..=200 {
                put_block(store.as_ref(), make_block(rank, vec![]));
            }
        })
    };

    // A full-length query stays resolvable whatever else arrives.
    for _ in 0..200 {
        let info = queries.get_block_info(&anchor_hex, BlockView::Basic).unwrap();
        assert_eq!(info.summary.block_hash, anchor);
    }
    writer.join().unwrap();
    assert_eq!(store.block_count(), 201);
}
