// File: crates/scooter-lca/tests/table.rs
// Purpose: CSV table persistence through the output layout (round trip, truncation, ragged input, missing files).

use scooter_lca::{Cell, OutputLayout, Table, TableError};

fn layout() -> (tempfile::TempDir, OutputLayout) {
    let dir = tempfile::tempdir().expect("tempdir");
    let layout = OutputLayout::new(dir.path());
    (dir, layout)
}

#[test]
fn write_then_read_reproduces_values() {
    let (_dir, layout) = layout();
    let table = Table::new()
        .with_column("Transport Mode", ["E-Scooter", "Bus", "Personal Car"])
        .with_column("Emissions (g CO2-eq/passenger-km)", [29.5, 51.0, 257.0])
        .with_column("Reduction vs Car (%)", [88.52140077821012, 80.15564202334631, 0.0]);
    let path = layout.save_table(&table, "modes.csv").expect("save");
    assert!(path.starts_with(layout.data_path()));

    let back = layout.load_table("modes.csv").expect("load");
    assert_eq!(back.headers().collect::<Vec<_>>(), table.headers().collect::<Vec<_>>());
    assert_eq!(back.numbers("Emissions (g CO2-eq/passenger-km)"), Some(vec![29.5, 51.0, 257.0]));
    assert_eq!(
        back.numbers("Reduction vs Car (%)"),
        Some(vec![88.52140077821012, 80.15564202334631, 0.0])
    );
    assert_eq!(back.column("Transport Mode").map(|c| c[2].clone()), Some(Cell::from("Personal Car")));
}

#[test]
fn unequal_columns_truncate_to_shortest() {
    let (_dir, layout) = layout();
    let table = Table::new().with_column("a", [1.0, 2.0, 3.0]).with_column("b", ["x", "y"]);
    let path = layout.save_table(&table, "short.csv").expect("save");
    let text = std::fs::read_to_string(path).expect("read");
    assert_eq!(text, "a,b\r\n1.0,x\r\n2.0,y\r\n");
}

#[test]
fn ragged_rows_are_tolerated() {
    let (_dir, layout) = layout();
    let data = layout.data_dir().expect("data dir");
    std::fs::write(data.join("ragged.csv"), "a,b\n1,2\n3\n4,5,6\n").expect("write");
    let t = layout.load_table("ragged.csv").expect("load");
    assert_eq!(t.numbers("a"), Some(vec![1.0, 3.0, 4.0]));
    assert_eq!(t.numbers("b"), Some(vec![2.0, 5.0]));
    assert_eq!(t.row_count(), 2);
}

#[test]
fn missing_table_is_not_found() {
    let (_dir, layout) = layout();
    match layout.load_table("nope.csv") {
        Err(TableError::NotFound(p)) => assert!(p.ends_with("nope.csv")),
        other => panic!("expected NotFound, got {other:?}"),
    }
}

#[test]
fn empty_table_writes_bare_header_line() {
    let (_dir, layout) = layout();
    let path = layout.save_table(&Table::new(), "empty.csv").expect("save");
    assert_eq!(std::fs::read(path).expect("read"), b"\r\n");
}

#[test]
fn integers_and_floats_keep_their_text() {
    let (_dir, layout) = layout();
    let table = Table::new().with_column("n", [Cell::Integer(257), Cell::Number(0.0), Cell::Number(29.5)]);
    let path = layout.save_table(&table, "kinds.csv").expect("save");
    assert_eq!(std::fs::read_to_string(&path).expect("read"), "n\r\n257\r\n0.0\r\n29.5\r\n");
    let back = layout.load_table("kinds.csv").expect("load");
    assert_eq!(back, table);
}
