//!
//! Tests for the benchmark recorder.
//!

#![cfg(test)]

use chrono::DateTime;

const DATA_JS: &str = r#"window.BENCHMARK_DATA = {
  "lastUpdate": 1621335422212,
  "repoUrl": "https://github.com/example/language-server",
  "entries": {
    "LS performance measurement (reference 3.1)": [
      {
        "commit": {
          "author": {
            "email": "dev@example.com",
            "name": "Dev Eloper",
            "username": "dev"
          },
          "committer": {
            "email": "noreply@example.com",
            "name": "Forge",
            "username": "web-flow"
          },
          "distinct": true,
          "id": "08fa325d8f5f89d6a55fc24deda4505b68e6a6dc",
          "message": "Merge pull request #42",
          "timestamp": "2021-05-18T12:25:59+03:00",
          "tree_id": "2f9c5a9d08e7b2f2f0a3f7f5e9d5b1c7e2a4d6f8",
          "url": "https://github.com/example/language-server/commit/08fa325d8f5f89d6a55fc24deda4505b68e6a6dc"
        },
        "date": 1621334809161,
        "tool": "pytest",
        "benches": [
          {
            "name": "test_analyze_ssl31",
            "value": 65.6751,
            "unit": "sec",
            "range": "stddev: 0.92",
            "extra": "mean: 65.6751 sec\nrounds: 5"
          }
        ]
      },
      {
        "commit": {
          "author": {
            "email": "dev@example.com",
            "name": "Dev Eloper"
          },
          "committer": {
            "email": "dev@example.com",
            "name": "Dev Eloper"
          },
          "id": "08fa325d8f5f89d6a55fc24deda4505b68e6a6dc",
          "message": "Merge pull request #42",
          "timestamp": "2021-05-18T12:25:59+03:00",
          "tree_id": "2f9c5a9d08e7b2f2f0a3f7f5e9d5b1c7e2a4d6f8",
          "url": "https://github.com/example/language-server/commit/08fa325d8f5f89d6a55fc24deda4505b68e6a6dc"
        },
        "date": 1621334501222,
        "tool": "pytest",
        "benches": [
          {
            "name": "test_analyze_ssl31",
            "value": 66.1042,
            "unit": "sec",
            "range": "stddev: 1.15",
            "extra": "mean: 66.1042 sec\nrounds: 5"
          }
        ]
      }
    ]
  }
};
"#;

const SUITE: &str = "LS performance measurement (reference 3.1)";

fn parse_store(text: &str) -> benchmark_tracker::Store {
    let payload = benchmark_tracker::StoreFormat::Js
        .payload(text)
        .expect("The fixture carries the assignment wrapper");
    serde_json::from_str(payload).expect("The fixture is well-formed")
}

fn make_sample(commit_id: &str, date_millis: i64, value: f64) -> benchmark_tracker::Sample {
    let identity = benchmark_tracker::Signature {
        email: "dev@example.com".to_owned(),
        name: "Dev Eloper".to_owned(),
        username: Some("dev".to_owned()),
    };
    let commit = benchmark_tracker::Commit {
        author: identity.clone(),
        committer: identity,
        distinct: Some(true),
        id: commit_id.to_owned(),
        message: "A change".to_owned(),
        timestamp: DateTime::parse_from_rfc3339("2021-05-18T12:25:59+03:00")
            .expect("Always valid"),
        tree_id: "2f9c5a9d08e7b2f2f0a3f7f5e9d5b1c7e2a4d6f8".to_owned(),
        url: format!("https://github.com/example/language-server/commit/{commit_id}"),
    };
    benchmark_tracker::Sample::new(
        commit,
        DateTime::from_timestamp_millis(date_millis).expect("Always valid"),
        "pytest".to_owned(),
        vec![benchmark_tracker::Measurement::new(
            "test_analyze_ssl31".to_owned(),
            value,
            "sec".to_owned(),
            Some("stddev: 0.5".to_owned()),
            Some(format!("mean: {value} sec\nrounds: 5")),
        )],
    )
}

#[test]
fn parse_and_round_trip() {
    let store = parse_store(DATA_JS);

    assert_eq!(store.last_update.timestamp_millis(), 1621335422212);
    assert_eq!(
        store.repo_url.as_deref(),
        Some("https://github.com/example/language-server")
    );
    let samples = store.suite(SUITE).expect("The fixture suite is present");
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].commit.id, samples[1].commit.id);
    assert_eq!(samples[0].benches[0].value, 65.6751);
    assert_eq!(
        samples[0].benches[0].range.as_deref(),
        Some("stddev: 0.92")
    );

    let reencoded = benchmark_tracker::StoreFormat::Js
        .encode(serde_json::to_string_pretty(&store).expect("Always valid"));
    let reparsed = parse_store(reencoded.as_str());
    assert_eq!(store, reparsed);

    let original: serde_json::Value = serde_json::from_str(
        benchmark_tracker::StoreFormat::Js
            .payload(DATA_JS)
            .expect("Always valid"),
    )
    .expect("Always valid");
    let roundtripped: serde_json::Value =
        serde_json::to_value(&store).expect("Always valid");
    assert_eq!(original, roundtripped);
}

#[test]
fn append_keeps_duplicates() {
    let mut store = parse_store(DATA_JS);
    let duplicate = store
        .suite(SUITE)
        .and_then(|samples| samples.last())
        .expect("The fixture suite is non-empty")
        .clone();

    store.append(SUITE, duplicate.clone());
    store.append(SUITE, duplicate);

    let samples = store.suite(SUITE).expect("The fixture suite is present");
    assert_eq!(samples.len(), 4);
    assert_eq!(samples[2], samples[3]);
}

#[test]
fn append_new_sample_is_last() {
    let mut store = parse_store(DATA_JS);
    let before = store.suite(SUITE).map(<[_]>::len).unwrap_or_default();

    let sample = make_sample("aaaa325d8f5f89d6a55fc24deda4505b68e6a6dc", 1621400000000, 42.0);
    store.append(SUITE, sample.clone());

    let samples = store.suite(SUITE).expect("The fixture suite is present");
    assert_eq!(samples.len(), before + 1);
    assert_eq!(samples.last(), Some(&sample));
    assert_eq!(samples.last().map(|sample| sample.benches[0].value), Some(42.0));
    assert_eq!(store.last_update, sample.date);
}

#[test]
fn append_creates_missing_suite() {
    let mut store = benchmark_tracker::Store::new();
    let sample = make_sample("aaaa325d8f5f89d6a55fc24deda4505b68e6a6dc", 1621400000000, 42.0);
    store.append("A new suite", sample);
    assert_eq!(store.suite("A new suite").map(<[_]>::len), Some(1));
}

#[test]
fn out_of_order_dates_are_tolerated() {
    let store = parse_store(DATA_JS);

    assert_eq!(store.out_of_order_dates(SUITE), 1);
    assert!(store.validate().is_ok());
}

#[test]
fn validation_rejects_invalid_values() {
    let mut store = benchmark_tracker::Store::new();
    store.append(SUITE, make_sample("bbbb", 1621400000000, -1.0));
    assert!(matches!(
        store.validate(),
        Err(benchmark_tracker::ValidationError::InvalidValue { .. })
    ));

    let mut store = benchmark_tracker::Store::new();
    let mut sample = make_sample("bbbb", 1621400000000, 1.0);
    sample.benches.clear();
    store.append(SUITE, sample);
    assert!(matches!(
        store.validate(),
        Err(benchmark_tracker::ValidationError::EmptyBenches { .. })
    ));
}

#[test]
fn truncation_drops_oldest() {
    let mut store = benchmark_tracker::Store::new();
    for (index, value) in [60.0, 61.0, 62.0, 63.0].into_iter().enumerate() {
        store.append(
            SUITE,
            make_sample("cccc", 1621400000000 + index as i64 * 1000, value),
        );
    }

    let dropped = store.truncate(SUITE, 2);

    assert_eq!(dropped, 2);
    let samples = store.suite(SUITE).expect("The suite is present");
    assert_eq!(samples.len(), 2);
    assert_eq!(samples[0].benches[0].value, 62.0);
    assert_eq!(samples[1].benches[0].value, 63.0);

    assert_eq!(store.truncate(SUITE, 2), 0);
    assert_eq!(store.truncate("No such suite", 2), 0);
}

#[test]
fn script_wrapper_codec() {
    let with_semicolon = "window.BENCHMARK_DATA = {\"a\": 1};\n";
    assert_eq!(
        benchmark_tracker::StoreFormat::Js.payload(with_semicolon),
        Some("{\"a\": 1}")
    );

    let without_semicolon = "window.BENCHMARK_DATA = {\"a\": 1}\n";
    assert_eq!(
        benchmark_tracker::StoreFormat::Js.payload(without_semicolon),
        Some("{\"a\": 1}")
    );

    assert_eq!(
        benchmark_tracker::StoreFormat::Js.payload("{\"a\": 1}"),
        None
    );
    assert_eq!(
        benchmark_tracker::StoreFormat::Json.payload("{\"a\": 1}"),
        Some("{\"a\": 1}")
    );

    let encoded = benchmark_tracker::StoreFormat::Js.encode("{}".to_owned());
    assert_eq!(encoded, "window.BENCHMARK_DATA = {}\n");
}

#[test]
fn pytest_report_conversion() {
    let report_json = r#"
    {
        "machine_info": { "node": "runner", "system": "Linux" },
        "benchmarks": [
            {
                "group": null,
                "name": "test_analyze_ssl31",
                "fullname": "tests/test_perf.py::test_analyze_ssl31",
                "stats": {
                    "min": 64.9,
                    "max": 66.4,
                    "mean": 65.6751,
                    "stddev": 0.92,
                    "median": 65.7,
                    "iqr": 0.6,
                    "rounds": 5
                }
            }
        ],
        "datetime": "2021-05-18T09:26:49.161Z",
        "version": "3.4.1"
    }"#;
    let report = serde_json::from_str::<benchmark_tracker::InputReport>(report_json)
        .expect("Failed to parse a pytest-benchmark report");

    let measurements = report.into_measurements("sec");

    assert_eq!(measurements.len(), 1);
    assert_eq!(measurements[0].name, "test_analyze_ssl31");
    assert_eq!(measurements[0].value, 65.6751);
    assert_eq!(measurements[0].unit, "sec");
    assert_eq!(measurements[0].range.as_deref(), Some("stddev: 0.92"));
    assert_eq!(
        measurements[0].extra.as_deref(),
        Some("mean: 65.6751 sec\nrounds: 5")
    );
}

#[test]
fn measurements_array_input() {
    let report_json = r#"
    [
        { "name": "analyze_total", "value": 12.5, "unit": "sec" },
        { "name": "analyze_parse", "value": 3.25, "unit": "sec", "range": "stddev: 0.1" }
    ]"#;
    let report = serde_json::from_str::<benchmark_tracker::InputReport>(report_json)
        .expect("Failed to parse a measurements array");

    let measurements = report.into_measurements("sec");

    assert_eq!(measurements.len(), 2);
    assert_eq!(measurements[0].extra, None);
    assert_eq!(measurements[1].range.as_deref(), Some("stddev: 0.1"));
}
