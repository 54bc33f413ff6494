use std::io::Cursor;
use std::path::PathBuf;

use stockroom_console::ConsoleController;
use stockroom_inventory::{InventoryRecord, InventoryStore};
use stockroom_persistence::PersistenceGateway;

/// Transcript and final store of one scripted session.
struct Session {
    output: String,
    store: InventoryStore,
}

impl Session {
    fn run(input: &str) -> Self {
        Self::run_with(InventoryStore::new(), input)
    }

    fn run_with(store: InventoryStore, input: &str) -> Self {
        let mut out = Vec::new();
        let store = {
            let mut controller = ConsoleController::new(
                Cursor::new(input.as_bytes().to_vec()),
                &mut out,
                PersistenceGateway::default(),
            )
            .with_store(store);
            controller.run().expect("session should end cleanly");
            controller.store().clone()
        };
        Self {
            output: String::from_utf8(out).expect("transcript is UTF-8"),
            store,
        }
    }

    fn assert_printed(&self, needle: &str) {
        assert!(
            self.output.contains(needle),
            "expected {needle:?} in transcript:\n{}",
            self.output
        );
    }
}

fn widget_store() -> InventoryStore {
    InventoryStore::from_records(vec![InventoryRecord::new("Widget", "W1", 10, 2.50)]).unwrap()
}

fn temp_name() -> String {
    std::env::temp_dir()
        .join(format!("stockroom-session-{}", uuid::Uuid::now_v7()))
        .to_string_lossy()
        .into_owned()
}

#[test]
fn add_two_items_then_list() {
    let session = Session::run(concat!(
        "1\nWidget\nW1\n10\n2.50\n\n",
        "1\nGadget\nG1\n5\n9.99\n\n",
        "4\n\n",
        "7\n",
    ));

    session.assert_printed(
        "1. Item: Widget, Code: W1, Quantity: 10, Price: $2.50\n\
         2. Item: Gadget, Code: G1, Quantity: 5, Price: $9.99\n",
    );
    assert_eq!(session.output.matches("Inventory item added successfully!").count(), 2);
    session.assert_printed("Exiting the program...");
    assert_eq!(session.store.len(), 2);
}

#[test]
fn duplicate_code_is_reprompted_and_never_stored() {
    // Input ends while the code prompt is still waiting for a fresh code.
    let session = Session::run_with(widget_store(), "1\nOther\nW1\n");

    session.assert_printed("An item with this code already exists. Please use a different code.");
    assert_eq!(session.store.len(), 1);
    assert_eq!(session.store.find_by_code("W1").unwrap().name(), "Widget");
}

#[test]
fn duplicate_code_then_fresh_code_adds_second_item() {
    let session = Session::run_with(widget_store(), "1\nOther\nW1\nO1\n1\n1.00\n\n7\n");

    session.assert_printed("An item with this code already exists.");
    assert_eq!(session.store.len(), 2);
    assert_eq!(session.store.records()[1].code(), "O1");
}

#[test]
fn malformed_and_negative_numbers_are_reprompted() {
    let session = Session::run("1\nWidget\nW1\nten\n-1\n10\nabc\n-2.5\n2.50\n\n7\n");

    session.assert_printed("Please enter a valid number.");
    session.assert_printed("Quantity cannot be negative.");
    session.assert_printed("Please enter a valid decimal number.");
    session.assert_printed("Price cannot be negative.");
    assert_eq!(
        session.store.records(),
        &[InventoryRecord::new("Widget", "W1", 10, 2.50)]
    );
}

#[test]
fn negative_update_never_reaches_the_store() {
    let session = Session::run_with(widget_store(), "3\nW1\n-1\n4\n\n7\n");

    session.assert_printed("Current item: Item: Widget, Code: W1, Quantity: 10, Price: $2.50");
    session.assert_printed("Quantity cannot be negative.");
    session.assert_printed("Quantity updated successfully!");
    assert_eq!(session.store.find_by_code("W1").unwrap().quantity(), 4);
}

#[test]
fn update_unknown_code_reports_not_found() {
    let session = Session::run_with(widget_store(), "3\nZZ\n\n7\n");

    session.assert_printed("No item found with that code.");
    assert_eq!(session.store, widget_store());
}

#[test]
fn delete_present_and_missing_codes() {
    let session = Session::run_with(widget_store(), "2\nX9\n\n2\nW1\n\n7\n");

    session.assert_printed("No item found with that code.");
    session.assert_printed("Item deleted successfully!");
    assert!(session.store.is_empty());
}

#[test]
fn empty_store_flows_report_nothing_to_do() {
    let session = Session::run("2\n\n3\n\n4\n\n7\n");

    session.assert_printed("No items to delete.");
    session.assert_printed("No items to update.");
    session.assert_printed("No items to display.");
}

#[test]
fn invalid_menu_input_keeps_looping() {
    let session = Session::run("menu\n0\n\n7\n");

    session.assert_printed("Enter your choice: Please enter a valid number.");
    session.assert_printed("Invalid choice. Please try again.");
    session.assert_printed("Press Enter to continue...");
    session.assert_printed("Exiting the program...");
}

#[test]
fn oversized_menu_number_is_not_a_number() {
    let session = Session::run("99999999999\n7\n");

    session.assert_printed("Enter your choice: Please enter a valid number.");
    assert!(!session.output.contains("Invalid choice."), "{}", session.output);
    session.assert_printed("Exiting the program...");
}

#[test]
fn end_of_input_ends_session_without_error() {
    let session = Session::run("");
    session.assert_printed("===== INVENTORY MANAGEMENT SYSTEM =====");
    assert!(session.store.is_empty());
}

#[test]
fn unreadable_line_is_reported_and_loop_continues() {
    let mut input = vec![0xff, 0xfe, b'\n'];
    input.extend_from_slice(b"\n4\n\n7\n");
    let mut out = Vec::new();
    {
        let mut controller =
            ConsoleController::new(Cursor::new(input), &mut out, PersistenceGateway::default());
        controller.run().unwrap();
    }
    let output = String::from_utf8(out).unwrap();

    assert!(output.contains("An error occurred: unreadable input"), "{output}");
    assert!(output.contains("No items to display."), "{output}");
}

#[test]
fn save_delete_load_restores_saved_store() {
    let name = temp_name();
    let script = format!("5\n{name}\n\n2\nW1\n\n6\n{name}\n\n7\n");
    let session = Session::run_with(widget_store(), &script);

    session.assert_printed(&format!("Inventory saved successfully to {name}.dat"));
    session.assert_printed("Item deleted successfully!");
    session.assert_printed(&format!("Inventory loaded successfully from {name}.dat"));
    assert_eq!(session.store, widget_store());

    std::fs::remove_file(PathBuf::from(format!("{name}.dat"))).unwrap();
}

#[test]
fn loading_missing_file_keeps_current_store() {
    let name = temp_name();
    let session = Session::run_with(widget_store(), &format!("6\n{name}\n\n7\n"));

    session.assert_printed(&format!("File not found: {name}.dat"));
    assert_eq!(session.store, widget_store());
}

#[test]
fn loading_corrupt_file_keeps_current_store() {
    let name = format!("{}.dat", temp_name());
    std::fs::write(&name, b"garbage").unwrap();

    let session = Session::run_with(widget_store(), &format!("6\n{name}\n\n7\n"));

    session.assert_printed("Error reading file: corrupt inventory file");
    assert_eq!(session.store, widget_store());

    std::fs::remove_file(&name).unwrap();
}

#[test]
fn loading_file_with_blank_code_keeps_current_store() {
    let name = format!("{}.dat", temp_name());
    std::fs::write(
        &name,
        r#"{"format":"stockroom-inventory","version":1,"records":[{"name":"Ghost","code":"","quantity":1,"price":1.0}]}"#,
    )
    .unwrap();

    let session = Session::run_with(widget_store(), &format!("6\n{name}\n\n7\n"));

    session.assert_printed("empty code in record 0");
    assert_eq!(session.store, widget_store());

    std::fs::remove_file(&name).unwrap();
}

#[test]
fn tied_price_is_listed_rounded_up() {
    let session = Session::run("1\nBolt\nB1\n3\n2.125\n\n4\n\n7\n");
    session.assert_printed("1. Item: Bolt, Code: B1, Quantity: 3, Price: $2.13");
}

#[test]
fn save_failure_is_reported_and_session_continues() {
    let dir = std::env::temp_dir().join(format!("stockroom-absent-{}", uuid::Uuid::now_v7()));
    let name = dir.join("stock").to_string_lossy().into_owned();

    let session = Session::run_with(widget_store(), &format!("5\n{name}\n\n4\n\n7\n"));

    session.assert_printed("Error saving to file: ");
    session.assert_printed("1. Item: Widget");
}
