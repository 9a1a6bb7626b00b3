use reqwest::header::HeaderMap;
use twitter_client::{EpochTime, RateLimit};

#[test]
fn rest_rate_headers() {
    let mut h = HeaderMap::new();
    h.insert("x-rate-limit-limit", "180".parse().unwrap());
    h.insert("x-rate-limit-remaining", "179".parse().unwrap());
    h.insert("x-rate-limit-reset", "1403602426".parse().unwrap());
    let rate = RateLimit::from_headers(&h).unwrap();
    assert_eq!(rate.limit, 180);
    assert_eq!(rate.remaining, 179);
    assert_eq!(rate.reset, EpochTime::from_timestamp(1403602426));
}

#[test]
fn rest_rate_headers_incomplete() {
    let mut h = HeaderMap::new();
    h.insert("x-rate-limit-limit", "180".parse().unwrap());
    h.insert("x-rate-limit-remaining", "179".parse().unwrap());
    assert!(RateLimit::from_headers(&h).is_none());

    h.insert("x-rate-limit-reset", "soon".parse().unwrap());
    assert!(RateLimit::from_headers(&h).is_none());
}
