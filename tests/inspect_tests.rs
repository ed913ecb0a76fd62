use beagle::{inspect, inspect_json, EdgeView, RenderOptions};

const GRAPH: &str = r#"{
    "directed": true,
    "multigraph": true,
    "nodes": [
        {"id": 1, "_node_type": "Process", "_display": "powershell.exe"},
        {"id": 2, "_node_type": "Domain", "_display": "example.com"}
    ],
    "links": [
        {"id": 10, "source": 1, "target": 2, "type": "DNS Query For",
         "properties": {"data": [
            {"record_type": "A", "timestamp": 1546300800},
            {"record_type": "AAAA", "timestamp": 1546300801}
         ]}}
    ]
}"#;

#[test]
fn test_inspect_without_selection_skips_parsing() {
    let view = inspect("not json", None, &RenderOptions::default()).unwrap();
    assert!(matches!(view, EdgeView::Placeholder));
}

#[test]
fn test_inspect_selected_edge() {
    match inspect(GRAPH, Some(10), &RenderOptions::default()).unwrap() {
        EdgeView::Table(table) => {
            assert_eq!(table.label(), "DNS Query For");
            assert_eq!(table.headers(), vec!["Occurence", "Record_type", "Timestamp"]);
            assert_eq!(
                table.rows()[0].to_cells(),
                vec!["1", "A", "2019-01-01T00:00:00.000Z"]
            );
        }
        EdgeView::Placeholder => panic!("expected a table"),
    }
}

#[test]
fn test_inspect_errors() {
    assert!(inspect(GRAPH, Some(11), &RenderOptions::default()).is_err());
    assert!(inspect("{", Some(10), &RenderOptions::default()).is_err());
}

#[test]
fn test_inspect_json_with_settings() {
    let json = inspect_json(GRAPH, Some(10), &["format=legacy", "layout=record"]).unwrap();
    let dto: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(dto["type"], "Table");
    assert_eq!(
        dto["value"]["rows"][1],
        serde_json::json!(["2", "AAAA", "2019-01-01T00:00:01.000Z"])
    );

    assert!(inspect_json(GRAPH, Some(10), &["colour=red"]).is_err());
}

#[test]
fn test_inspect_json_placeholder() {
    let json = inspect_json("", None, &[]).unwrap();
    assert_eq!(
        json,
        r#"{"type":"Placeholder","value":{"message":"Click an Edge to view information"}}"#
    );
}
