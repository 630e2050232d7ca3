use device_fingerprint_types::{attributes::ERROR_KEY, domain::Domain};

use crate::{
    collectors::{network::NetworkCollector, timestamp::TimestampCollector, Collector},
    composer::{collect_domain, generate_fingerprint, generate_fingerprint_with, merge_sections},
    hash::fingerprint_hash,
    tests::types::{
        scenario_collectors, FailingCollector, FixedClock, FixedCollector, FixedHost, FixedNode,
        PanickingCollector, SCENARIO_HASH,
    },
};

#[test]
fn scenario_hash() {
    let collectors = scenario_collectors();
    let collectors: Vec<&dyn Collector> = collectors.iter().map(|c| c as &dyn Collector).collect();
    let result = generate_fingerprint_with(&collectors);

    assert_eq!(result.hash.to_string(), SCENARIO_HASH);
    assert_eq!(result.attributes.len(), 4);
    assert_eq!(result.sections.len(), 4);
    assert_eq!(result.sections[1].domain, Domain::Network);
    assert_eq!(result.sections[1].attributes["hostname"], "host1");
}

#[test]
fn collector_order_does_not_change_the_hash() {
    let collectors = scenario_collectors();
    let forward: Vec<&dyn Collector> = collectors.iter().map(|c| c as &dyn Collector).collect();
    let mut backward = forward.clone();
    backward.reverse();
    let mut rotated = forward.clone();
    rotated.rotate_left(2);

    let hash = generate_fingerprint_with(&forward).hash;
    assert_eq!(generate_fingerprint_with(&backward).hash, hash);
    assert_eq!(generate_fingerprint_with(&rotated).hash, hash);
}

#[test]
fn failing_domain_is_isolated() {
    let system = FixedCollector::new(Domain::System, &[("os_name", "Linux")]);
    let network = NetworkCollector::new(
        FixedHost {
            hostname: "host1".to_string(),
            address: None,
        },
        FixedNode(0x0242_ac11_0002),
    );
    let hardware = FixedCollector::new(
        Domain::Hardware,
        &[("total_memory", "8.00 GB"), ("cpu_count", "8")],
    );
    let timestamp = TimestampCollector::new(FixedClock::new_year_2024());

    let result = generate_fingerprint_with(&[&system, &network, &hardware, &timestamp]);

    let network_section = &result.sections[1];
    assert_eq!(network_section.domain, Domain::Network);
    assert_eq!(network_section.attributes.len(), 1);
    assert!(network_section.attributes[ERROR_KEY]
        .starts_with("Network info error: could not resolve host1"));

    assert_eq!(result.sections[0].attributes.len(), 1);
    assert_eq!(result.sections[2].attributes.len(), 2);
    assert_eq!(result.sections[3].attributes["timestamp"], "2024-01-01T00:00:00");

    // the error takes part in the hash like every other attribute
    assert_eq!(result.attributes.len(), 6);
    assert!(result.attributes.contains_key(ERROR_KEY));
    assert_eq!(result.hash, fingerprint_hash(&result.attributes));
}

#[test]
fn error_message_format() {
    let section = collect_domain(&FailingCollector(Domain::Hardware));
    assert_eq!(section.domain, Domain::Hardware);
    assert_eq!(
        section.attributes[ERROR_KEY],
        "Hardware info error: permission denied"
    );
}

#[test]
fn panicking_collector_is_contained() {
    let system = FixedCollector::new(Domain::System, &[("os_name", "Linux")]);
    let hardware = PanickingCollector(Domain::Hardware);

    let result = generate_fingerprint_with(&[&system, &hardware]);
    assert_eq!(
        result.sections[1].attributes[ERROR_KEY],
        "Hardware info error: collector panicked: sensor went away"
    );
    assert_eq!(result.attributes["os_name"], "Linux");
}

#[test]
fn multiple_errors_last_one_wins() {
    let sections = [
        collect_domain(&FailingCollector(Domain::Network)),
        collect_domain(&PanickingCollector(Domain::Hardware)),
    ];
    let merged = merge_sections(&sections);
    assert_eq!(merged.len(), 1);
    assert!(merged[ERROR_KEY].starts_with("Hardware info error"));
}

#[test]
fn changed_value_changes_the_hash() {
    let host1 = FixedCollector::new(Domain::Network, &[("hostname", "host1")]);
    let host2 = FixedCollector::new(Domain::Network, &[("hostname", "hosT1")]);
    assert_ne!(
        generate_fingerprint_with(&[&host1]).hash,
        generate_fingerprint_with(&[&host2]).hash
    );
}

#[test]
fn real_machine_fingerprint() {
    let result = generate_fingerprint();
    assert_eq!(result.sections.len(), 4);
    for section in &result.sections {
        assert!(!section.attributes.is_empty());
    }
    assert_eq!(result.hash.to_string().len(), 64);
    assert_eq!(result.hash, fingerprint_hash(&result.attributes));
}
