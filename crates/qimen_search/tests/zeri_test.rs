use qimen_calendar::{four_pillars, ju_for_date};
use qimen_plate::build_plate;
use qimen_search::{Category, PlateBuilder, SearchError, SearchRequest, ZeriEngine};

fn test_builder() -> PlateBuilder {
    Box::new(|key| {
        let pillars = four_pillars(key.year, key.month, key.day, key.hour)?;
        let (dun, ju) = ju_for_date(key.year, key.month, key.day, key.leap);
        Ok(build_plate(pillars, dun, ju, key.kind))
    })
}

fn engine() -> ZeriEngine {
    ZeriEngine::with_builder(test_builder())
}

#[test]
fn requires_a_builder() {
    let mut engine = ZeriEngine::new();
    let request = SearchRequest::new("2024-06-01", "2024-06-07", Category::General);
    assert!(matches!(
        engine.find_auspicious_times(&request),
        Err(SearchError::BuilderNotConfigured)
    ));
}

#[test]
fn rejects_malformed_dates() {
    let mut engine = engine();
    for bad in ["2024/06/01", "2024-6", "not-a-date", "2024-02-30"] {
        let request = SearchRequest::new(bad, "2024-06-07", Category::General);
        assert!(matches!(
            engine.find_auspicious_times(&request),
            Err(SearchError::InvalidDate(_))
        ));
    }
}

#[test]
fn rejects_inverted_range() {
    let mut engine = engine();
    let request = SearchRequest::new("2024-06-07", "2024-06-01", Category::General);
    assert!(matches!(
        engine.find_auspicious_times(&request),
        Err(SearchError::InvalidRange(_))
    ));
}

#[test]
fn rejects_ranges_over_a_year() {
    let mut engine = engine();
    let request = SearchRequest::new("2024-01-01", "2025-06-01", Category::General);
    assert!(matches!(
        engine.find_auspicious_times(&request),
        Err(SearchError::RangeTooLong)
    ));
}

#[test]
fn results_sorted_and_bounded() {
    let mut engine = engine();
    let mut request = SearchRequest::new("2024-06-01", "2024-06-14", Category::Career);
    request.limit = 5;
    request.min_score = 0.0;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(!results.is_empty());
    assert!(results.len() <= 5);
    for pair in results.windows(2) {
        assert!(pair[0].composite >= pair[1].composite);
    }
    for r in &results {
        assert!((0.0..=100.0).contains(&r.composite));
        assert!((0.0..=100.0).contains(&r.pattern_score));
        assert!((0.0..=100.0).contains(&r.reference_score));
        assert!((0.0..=100.0).contains(&r.spirit_score));
        assert_eq!(r.hour % 2, 0);
    }
}

#[test]
fn min_score_filters_everything_when_unreachable() {
    let mut engine = engine();
    let mut request = SearchRequest::new("2024-06-01", "2024-06-07", Category::General);
    request.min_score = 101.0;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(results.is_empty());
}

#[test]
fn repeated_searches_are_deterministic() {
    let mut engine = engine();
    let mut request = SearchRequest::new("2024-03-01", "2024-03-10", Category::Wealth);
    request.min_score = 0.0;
    let first = engine.find_auspicious_times(&request).expect("search");
    // Second pass runs entirely from the cache.
    let cached = engine.cache_len();
    let second = engine.find_auspicious_times(&request).expect("search");
    assert_eq!(engine.cache_len(), cached);
    assert_eq!(first.len(), second.len());
    for (a, b) in first.iter().zip(second.iter()) {
        assert_eq!(a.composite, b.composite);
        assert_eq!((a.year, a.month, a.day, a.hour), (b.year, b.month, b.day, b.hour));
    }
}

#[test]
fn overlapping_ranges_yield_equal_plates() {
    // Two ranges sharing March 4-6. The warm engine serves the overlap
    // from its cache; the cold engine rebuilds every chart. The shared
    // moments must come out as equal plates either way.
    let mut first = SearchRequest::new("2024-03-01", "2024-03-06", Category::General);
    first.min_score = 0.0;
    first.limit = 200;
    let mut second = SearchRequest::new("2024-03-04", "2024-03-09", Category::General);
    second.min_score = 0.0;
    second.limit = 200;

    let mut warm = engine();
    let a = warm.find_auspicious_times(&first).expect("first range");
    let b = warm.find_auspicious_times(&second).expect("second range");
    let mut cold = engine();
    let c = cold.find_auspicious_times(&second).expect("cold range");

    let mut compared = 0;
    for ra in a.iter().filter(|r| (4..=6).contains(&r.day)) {
        let moment = (ra.year, ra.month, ra.day, ra.hour);
        let rb = b
            .iter()
            .find(|r| (r.year, r.month, r.day, r.hour) == moment)
            .expect("warm overlap moment");
        let rc = c
            .iter()
            .find(|r| (r.year, r.month, r.day, r.hour) == moment)
            .expect("cold overlap moment");
        assert_eq!(ra.plate, rb.plate);
        assert_eq!(ra.plate, rc.plate);
        compared += 1;
    }
    assert_eq!(compared, 36);
}

#[test]
fn host_guest_attached_for_contest_categories() {
    let mut engine = engine();
    let mut request = SearchRequest::new("2024-06-01", "2024-06-07", Category::Lawsuit);
    request.min_score = 0.0;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(results.iter().all(|r| r.host_guest.is_some()));

    let mut request = SearchRequest::new("2024-06-01", "2024-06-07", Category::Career);
    request.min_score = 0.0;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(results.iter().all(|r| r.host_guest.is_none()));
}

#[test]
fn direction_follows_the_request_flag() {
    let mut engine = engine();
    let mut request = SearchRequest::new("2024-06-01", "2024-06-03", Category::Career);
    request.min_score = 0.0;
    request.include_direction = false;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(results.iter().all(|r| r.direction.is_none()));

    request.include_direction = true;
    let results = engine.find_auspicious_times(&request).expect("search");
    // Career keys on the Open gate and Zhifu; at least one of them is
    // findable most hours.
    assert!(results.iter().any(|r| r.direction.is_some()));
}

#[test]
fn term_transition_days_can_be_skipped() {
    let mut engine = engine();
    // June 6 carries the Mangzhong boundary.
    let mut request = SearchRequest::new("2024-06-06", "2024-06-06", Category::General);
    request.min_score = 0.0;
    request.exclude_term_transition = true;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(results.is_empty());

    request.exclude_term_transition = false;
    let results = engine.find_auspicious_times(&request).expect("search");
    assert!(!results.is_empty());
}

#[test]
fn single_slot_lookup_uses_the_cache() {
    let mut engine = engine();
    let key = qimen_search::PlateKey {
        year: 2024,
        month: 6,
        day: 1,
        hour: 8,
        kind: qimen_plate::PlateKind::Rotating,
        leap: qimen_calendar::LeapMethod::ChaiBu,
    };
    let first = engine.plate_for(key).expect("plate");
    assert_eq!(engine.cache_len(), 1);
    let second = engine.plate_for(key).expect("plate");
    assert_eq!(engine.cache_len(), 1);
    assert_eq!(first.pillars, second.pillars);
}
