use std::collections::HashSet;
use std::sync::Arc;
use std::thread;
use stowage::ShardMap;

#[test]
fn test_concurrent_inserts() {
    let map = Arc::new(ShardMap::new());
    let mut handles = vec![];

    // Spawn 10 threads, each inserting 100 items
    for thread_id in 0..10 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("thread_{}_key_{}", thread_id, i);
                map.insert(key, i);
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 1000);
    assert_eq!(map.keys().len(), 1000);
}

#[test]
fn test_concurrent_inserts_into_default_map() {
    let map: Arc<ShardMap<String, usize>> = Arc::new(ShardMap::default());
    let mut handles = vec![];

    for thread_id in 0..16 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for i in 0..250 {
                map.insert(format!("t{}_{}", thread_id, i), i);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 4000);
    for thread_id in 0..16 {
        assert_eq!(*map.get(&format!("t{}_249", thread_id)).unwrap(), 249);
    }
}

#[test]
fn test_concurrent_overwrites_count_once() {
    let map = Arc::new(ShardMap::new());
    let mut handles = vec![];

    // Every thread writes the same 100 keys.
    for thread_id in 0..8 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for i in 0..100 {
                map.insert(i, thread_id);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 100);
}

#[test]
fn test_concurrent_reads() {
    let map = Arc::new(ShardMap::new());

    for i in 0..100 {
        map.insert(format!("key_{}", i), i);
    }

    let mut handles = vec![];

    // Spawn 20 threads, each reading all items
    for _ in 0..20 {
        let map = Arc::clone(&map);
        let handle = thread::spawn(move || {
            for i in 0..100 {
                let key = format!("key_{}", i);
                let value = map.get(&key).unwrap();
                assert_eq!(*value, i);
                assert!(map.contains_key(&key));
            }
        });
        handles.push(handle);
    }

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_mixed_operations() {
    let map = Arc::new(ShardMap::new());
    let mut handles = vec![];

    // Writers insert even keys and remove odd keys they inserted themselves.
    for thread_id in 0..5 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for i in 0..200 {
                map.insert(format!("key_{}_{}", thread_id, i), i);
            }
            for i in (1..200).step_by(2) {
                map.remove(&format!("key_{}_{}", thread_id, i));
            }
        }));
    }

    // Readers scan while writers run; results only need to be well formed.
    for _ in 0..3 {
        let map = Arc::clone(&map);
        handles.push(thread::spawn(move || {
            for _ in 0..50 {
                let keys = map.keys();
                let unique: HashSet<&String> = keys.iter().collect();
                assert_eq!(unique.len(), keys.len());
                assert!(map.len() <= 1000);
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(map.len(), 500);
    assert!(map.iter_snapshot().all(|(_, v)| *v % 2 == 0));
}

#[test]
fn test_reset_while_readers_run() {
    let map = Arc::new(ShardMap::new());
    for i in 0..1000u32 {
        map.insert(i, i);
    }

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let map = Arc::clone(&map);
            thread::spawn(move || {
                for i in 0..1000u32 {
                    if let Some(v) = map.get(&i) {
                        assert_eq!(*v, i);
                    }
                }
            })
        })
        .collect();

    map.reset();

    for reader in readers {
        reader.join().unwrap();
    }
    assert_eq!(map.len(), 0);
}
