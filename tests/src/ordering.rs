use netsort_core::table::{KeySpec, Table};
use netsort_core::{TableConfig, ip_key, port_key, resolve};

/*************************************************************
              End-to-end sorting scenarios
**************************************************************/

fn load(input: &str, delimiter: char, has_header: bool) -> Table {
    let cfg = TableConfig {
        delimiter,
        has_header,
    };
    Table::from_reader(input.as_bytes(), &cfg).expect("reading from a string cannot fail")
}

fn keys(specs: &[&str]) -> Vec<KeySpec> {
    specs.iter().map(|s| s.parse().unwrap()).collect()
}

#[test]
fn arp_table_sorts_by_address() {
    let input = "\
10.0.0.10\taa:bb:cc:00:00:03
10.0.0.2\taa:bb:cc:00:00:02
10.0.0.1\taa:bb:cc:00:00:01
";
    let mut table = load(input, '\t', false);
    table.sort(&keys(&["0:ip"]), false).unwrap();

    let addrs: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(addrs, vec!["10.0.0.1", "10.0.0.2", "10.0.0.10"]);
}

#[test]
fn switchport_table_sorts_by_switch_then_port() {
    let input = "\
switch,port
core2,Gi1/0/1
core1,Gi1/0/10
core1,Fa0/1
core1,Gi1/0/2
";
    let mut table = load(input, ',', true);
    table.sort(&keys(&["switch:text", "port:port"]), false).unwrap();

    let rows: Vec<(&str, &str)> = table
        .rows
        .iter()
        .map(|r| (r[0].as_str(), r[1].as_str()))
        .collect();
    assert_eq!(
        rows,
        vec![
            ("core1", "Fa0/1"),
            ("core1", "Gi1/0/2"),
            ("core1", "Gi1/0/10"),
            ("core2", "Gi1/0/1"),
        ]
    );
}

#[test]
fn mac_table_mixes_column_types() {
    let input = "\
mac\tip\tport
aa:00:00:00:00:01\t10.1.0.20\tGi1/0/10
aa:00:00:00:00:02\t10.1.0.3\tGi1/0/2
aa:00:00:00:00:03\tunknown\tPo1
";
    let mut table = load(input, '\t', true);

    // Malformed address sorts last under the IP key.
    table.sort(&keys(&["ip:ip"]), false).unwrap();
    let ips: Vec<&str> = table.rows.iter().map(|r| r[1].as_str()).collect();
    assert_eq!(ips, vec!["10.1.0.3", "10.1.0.20", "unknown"]);

    // Port-channels land in their own band above plain ethernet ports.
    table.sort(&keys(&["port:port"]), false).unwrap();
    let ports: Vec<&str> = table.rows.iter().map(|r| r[2].as_str()).collect();
    assert_eq!(ports, vec!["Gi1/0/2", "Gi1/0/10", "Po1"]);
}

#[test]
fn descending_sort_keeps_header_pinned() {
    let input = "\
addr
10.0.0.1
10.0.0.10
10.0.0.2
";
    let mut table = load(input, '\t', true);
    table.sort(&keys(&["addr:ip"]), true).unwrap();

    assert_eq!(table.header, Some(vec!["addr".to_string()]));
    let addrs: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(addrs, vec!["10.0.0.10", "10.0.0.2", "10.0.0.1"]);
}

#[test]
fn unknown_column_type_degrades_to_lexicographic() {
    let mut table = load("b\na\n10\n", '\t', false);
    table.sort(&keys(&["0:unknownType"]), false).unwrap();

    let cells: Vec<&str> = table.rows.iter().map(|r| r[0].as_str()).collect();
    assert_eq!(cells, vec!["10", "a", "b"]);
}

/*************************************************************
              Normalizer properties across crates
**************************************************************/

#[test]
fn octet_order_beats_string_order() {
    assert!(ip_key("10.0.0.2") < ip_key("10.0.0.10"));
    assert!(ip_key("1.255.255.255") < ip_key("2.0.0.0"));
}

#[test]
fn port_hierarchy_beats_string_order() {
    assert!(port_key("Gi1/0/2") < port_key("Gi1/0/10"));
    assert!(port_key("Gi1/99/99") < port_key("Gi2/0/1"));
}

#[test]
fn registry_and_normalizers_agree() {
    let ip = resolve("ip");
    let port = resolve("port");
    assert_eq!(ip.key("10.0.0.7"), ip.key("10.0.0.7"));
    assert!(port.key("Fa0/1") < port.key("Gi1/0/2"));
}
