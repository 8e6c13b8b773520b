use insta::assert_snapshot;
use proptest::prelude::*;
use procwatch::config::FilterConfig;
use procwatch::format::format_bytes;
use procwatch::system::process::{ProcessList, ProcessRecord, build_process_list};
use unicode_width::UnicodeWidthStr;

const KB: u64 = 1024;
const MB: u64 = 1024 * 1024;
const GB: u64 = 1024 * 1024 * 1024;

fn render_rows(list: &ProcessList) -> String {
    let mut rows: Vec<String> = list
        .records
        .iter()
        .map(|p| {
            format!(
                "pid={} mem={} name={}",
                p.pid,
                format_bytes(p.memory_bytes),
                p.display_name
            )
        })
        .collect();
    rows.push(format!("hidden={}", list.hidden));
    rows.join("\n")
}

#[test]
fn deterministic_list_snapshot_from_mock_data() {
    let raw = vec![
        ProcessRecord::new(1, "init", 120 * MB),
        ProcessRecord::new(2, "svchost.exe", 80 * MB),
        ProcessRecord::new(3, "VeryLongApplicationHelperProcess.exe", 3 * GB),
        ProcessRecord::new(4, "tiny", 512 * KB),
        ProcessRecord::new(5, "worker", 120 * MB),
        ProcessRecord::new(6, "notepad.exe", 5_000 * KB),
    ];

    let list = build_process_list(raw, &FilterConfig::default(), 24);

    assert_snapshot!(render_rows(&list), @r"
    pid=3 mem=3.0 GB name=VeryLongApplicationHe...
    pid=1 mem=120.0 MB name=init
    pid=5 mem=120.0 MB name=worker
    pid=6 mem=4.9 MB name=notepad.exe
    hidden=2
    ");
}

#[test]
fn custom_filter_is_respected() {
    let filter = FilterConfig {
        excluded_names: ["worker".to_string()].into_iter().collect(),
        min_memory_bytes: 0,
    };
    let raw = vec![
        ProcessRecord::new(1, "worker", 10 * MB),
        ProcessRecord::new(2, "svchost.exe", 10),
    ];

    let list = build_process_list(raw, &filter, 24);
    let names: Vec<&str> = list.records.iter().map(|p| p.full_name.as_str()).collect();
    assert_eq!(names, vec!["svchost.exe"]);
    assert_eq!(list.hidden, 1);
}

fn arb_record() -> impl Strategy<Value = ProcessRecord> {
    (
        1u32..50_000,
        prop_oneof![
            "[a-z]{1,40}(\\.exe)?",
            Just("svchost.exe".to_string()),
            Just("conhost.exe".to_string()),
            "[\u{4e00}-\u{4e2f}]{1,20}",
        ],
        0u64..(4 * GB),
    )
        .prop_map(|(pid, name, mem)| ProcessRecord::new(pid, name, mem))
}

proptest! {
    #[test]
    fn list_invariants_hold(raw in prop::collection::vec(arb_record(), 0..80)) {
        let filter = FilterConfig::default();
        let total = raw.len();
        let list = build_process_list(raw, &filter, 24);

        prop_assert_eq!(list.len() + list.hidden, total);
        for pair in list.records.windows(2) {
            prop_assert!(pair[0].memory_bytes >= pair[1].memory_bytes);
        }
        for record in &list.records {
            prop_assert!(record.memory_bytes >= filter.min_memory_bytes);
            prop_assert!(!filter.is_excluded(&record.full_name));
            prop_assert!(record.display_name.width() <= 24);
            if record.full_name.width() <= 24 {
                prop_assert_eq!(&record.display_name, &record.full_name);
            } else {
                prop_assert!(record.display_name.ends_with("..."));
            }
        }
    }
}
