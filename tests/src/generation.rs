#![cfg(test)]
use poolgen_core::config::Config;
use poolgen_core::pool::BackendPool;

/// The default configuration is the reference scenario: octets 120
/// through 138 behind `172.18.50.` on port 8080, 19 URLs in total.
#[test]
fn reference_configuration_end_to_end() {
    let config = Config::default();
    let pool = BackendPool::generate(&config);

    let expected: Vec<String> = (120..=138)
        .map(|i| format!("http://172.18.50.{i}:8080"))
        .collect();

    assert_eq!(pool.len(), 19);
    assert_eq!(pool.urls(), expected.as_slice());
}

#[test]
fn printed_line_matches_the_reference_rendering() {
    let pool = BackendPool::generate(&Config::default());
    let line = format!("backend_urls = {pool}");

    let body: Vec<String> = (120..=138)
        .map(|i| format!("'http://172.18.50.{i}:8080'"))
        .collect();
    assert_eq!(line, format!("backend_urls = [{}]", body.join(", ")));
}

#[test]
fn equal_configs_generate_equal_pools() {
    let config = Config::default();
    assert_eq!(config, Config::default());

    let first = BackendPool::generate(&config);
    let second = BackendPool::generate(&Config::default());

    assert_eq!(first, second);
    assert_eq!(first.to_string(), second.to_string());
}

#[test]
fn custom_configuration_passes_through() {
    let config = Config {
        start_ip: 1,
        end_ip: 3,
        base_ip_prefix: "10.1.2.".to_string(),
        port: 9000,
    };
    let pool = BackendPool::generate(&config);

    assert_eq!(
        pool.urls(),
        ["http://10.1.2.1:9000", "http://10.1.2.2:9000", "http://10.1.2.3:9000"]
    );
}

#[test]
fn inverted_range_renders_an_empty_list() {
    let config = Config {
        start_ip: 10,
        end_ip: 9,
        ..Config::default()
    };
    let pool = BackendPool::generate(&config);

    assert!(pool.is_empty());
    assert_eq!(format!("backend_urls = {pool}"), "backend_urls = []");
}
