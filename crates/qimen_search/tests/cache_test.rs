use std::cell::Cell;
use std::rc::Rc;

use qimen_calendar::{LeapMethod, four_pillars, ju_for_date};
use qimen_plate::{Plate, PlateKind, build_plate};
use qimen_search::{PlateCache, PlateKey};

fn key(hour: u32) -> PlateKey {
    PlateKey {
        year: 2024,
        month: 6,
        day: 1,
        hour,
        kind: PlateKind::Rotating,
        leap: LeapMethod::ChaiBu,
    }
}

fn plate_for(k: &PlateKey) -> Plate {
    let pillars = four_pillars(k.year, k.month, k.day, k.hour).expect("valid date");
    let (dun, ju) = ju_for_date(k.year, k.month, k.day, k.leap);
    build_plate(pillars, dun, ju, k.kind)
}

#[test]
fn hit_returns_cached_plate() {
    let mut cache = PlateCache::with_capacity(4);
    let k = key(0);
    cache.put(k, Rc::new(plate_for(&k)));
    let hit = cache.get(&k).expect("cached");
    assert_eq!(hit.pillars, plate_for(&k).pillars);
}

#[test]
fn lru_eviction_order() {
    let mut cache = PlateCache::with_capacity(3);
    let (a, b, c, d) = (key(0), key(2), key(4), key(6));
    cache.put(a, Rc::new(plate_for(&a)));
    cache.put(b, Rc::new(plate_for(&b)));
    cache.put(c, Rc::new(plate_for(&c)));
    // Touch A so B becomes the oldest.
    assert!(cache.get(&a).is_some());
    cache.put(d, Rc::new(plate_for(&d)));
    assert!(cache.get(&b).is_none());
    assert!(cache.get(&a).is_some());
    assert!(cache.get(&c).is_some());
    assert!(cache.get(&d).is_some());
}

#[test]
fn capacity_bounds_len() {
    let mut cache = PlateCache::with_capacity(5);
    for slot in 0..12u32 {
        let k = key(slot * 2);
        cache.put(k, Rc::new(plate_for(&k)));
    }
    assert_eq!(cache.len(), 5);
    assert_eq!(cache.capacity(), 5);
}

#[test]
fn get_or_build_builds_once() {
    let mut cache = PlateCache::with_capacity(4);
    let builds = Cell::new(0u32);
    let k = key(8);
    for _ in 0..3 {
        let plate = cache
            .get_or_build(k, |k| {
                builds.set(builds.get() + 1);
                Ok(plate_for(k))
            })
            .expect("build");
        assert_eq!(plate.pillars.hour, plate_for(&k).pillars.hour);
    }
    assert_eq!(builds.get(), 1);
}

#[test]
fn clear_empties_the_cache() {
    let mut cache = PlateCache::with_capacity(4);
    let k = key(10);
    cache.put(k, Rc::new(plate_for(&k)));
    assert!(!cache.is_empty());
    cache.clear();
    assert!(cache.is_empty());
    assert!(cache.get(&k).is_none());
}

#[test]
fn zero_capacity_clamps_to_one() {
    let mut cache = PlateCache::with_capacity(0);
    assert_eq!(cache.capacity(), 1);
    let k = key(12);
    cache.put(k, Rc::new(plate_for(&k)));
    assert_eq!(cache.len(), 1);
}

#[test]
fn default_capacity_evicts_the_first_key() {
    // The nth distinct slot key, walking hours then days then months.
    fn nth_key(n: u32) -> PlateKey {
        PlateKey {
            year: 2024,
            month: 1 + n / 336,
            day: 1 + (n / 12) % 28,
            hour: (n % 12) * 2,
            kind: PlateKind::Rotating,
            leap: LeapMethod::ChaiBu,
        }
    }
    let mut cache = PlateCache::new();
    assert_eq!(cache.capacity(), 500);
    let shared = Rc::new(plate_for(&nth_key(0)));
    for n in 0..501u32 {
        cache.put(nth_key(n), Rc::clone(&shared));
    }
    assert_eq!(cache.len(), 500);
    assert!(cache.get(&nth_key(0)).is_none());
    assert!(cache.get(&nth_key(1)).is_some());
    assert!(cache.get(&nth_key(500)).is_some());
}

#[test]
fn distinct_keys_do_not_alias() {
    let mut cache = PlateCache::with_capacity(8);
    let rotating = key(0);
    let flying = PlateKey {
        kind: PlateKind::Flying,
        ..rotating
    };
    cache.put(rotating, Rc::new(plate_for(&rotating)));
    assert!(cache.get(&flying).is_none());
}
