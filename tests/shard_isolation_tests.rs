use stowage::ShardMapBuilder;

#[test]
fn test_shard_isolation() {
    let map = ShardMapBuilder::new()
        .shard_count(4)
        .unwrap()
        .build::<String, i32>()
        .unwrap();

    for i in 0..100 {
        map.insert(format!("key_{}", i), i);
    }

    let stats = map.stats();
    assert_eq!(stats.shard_sizes.len(), 4);

    let total: usize = stats.shard_sizes.iter().sum();
    assert_eq!(total, 100);
}

#[test]
fn test_same_seed_same_routing() {
    let build = || {
        ShardMapBuilder::new()
            .shard_count(8)
            .unwrap()
            .seed(0x5eed)
            .build::<String, i32>()
            .unwrap()
    };
    let map1 = build();
    let map2 = build();

    for i in 0..50 {
        let key = format!("key_{}", i);
        map1.insert(key.clone(), i);
        map2.insert(key, i);
    }

    assert_eq!(map1.shard_loads(), map2.shard_loads());
}

#[test]
fn test_routing_is_stable_across_clear() {
    let map = ShardMapBuilder::new()
        .shard_count(16)
        .unwrap()
        .build::<u64, u64>()
        .unwrap();

    for i in 0..500 {
        map.insert(i, i);
    }
    let loads = map.shard_loads();

    map.clear();
    for i in 0..500 {
        map.insert(i, i);
    }
    assert_eq!(map.shard_loads(), loads);

    map.reset();
    for i in 0..500 {
        map.insert(i, i);
    }
    assert_eq!(map.shard_loads(), loads);
}

#[test]
fn test_shard_distribution() {
    let map = ShardMapBuilder::new()
        .shard_count(16)
        .unwrap()
        .build::<String, i32>()
        .unwrap();

    for i in 0..1000 {
        map.insert(format!("key_{}", i), i);
    }

    let stats = map.stats();
    let max_shard_size = *stats.shard_sizes.iter().max().unwrap();
    let min_shard_size = *stats.shard_sizes.iter().min().unwrap();

    // With 1000 keys and 16 shards, we expect ~62-63 keys per shard
    assert!(
        max_shard_size < 100,
        "Shard distribution too uneven (max: {})",
        max_shard_size
    );
    assert!(
        min_shard_size > 30,
        "Shard distribution too uneven (min: {})",
        min_shard_size
    );
    assert!(stats.max_load_ratio() < 1.6);
}
