mod common;

use common::{row, MockService};
use cps_reconcile::{run, RunContext};

/// One row of each category must land in exactly one summary list:
/// three errors, two skips, one creation.
#[tokio::test]
async fn one_row_of_each_category_partitions_exactly() {
    let mut svc = MockService::with_groups(&["contacts"]);
    svc.ambiguous.insert("flaky_prop".to_string());
    svc.duplicate_labels.insert("dup_label".to_string());
    svc.mark_existing("contacts", "existing_prop");

    let rows = vec![
        row("Bad Object", "Text", "", ""),            // unknown object type
        row("Bad Type", "Emoji Picker", "", "Contact"), // unknown property type
        row("Existing Prop", "Text", "", "Contact"),  // existence check hit
        row("New Prop", "Text", "", "Contact"),       // clean creation
        row("Dup Label", "Text", "", "Contact"),      // duplicate-label rejection
        row("Flaky Prop", "Text", "", "Contact"),     // ambiguous existence
    ];

    let mut ctx = RunContext::new(&svc);
    let summary = run(&mut ctx, &rows).await;

    assert_eq!(summary.errors, vec!["Bad Object", "Bad Type", "Flaky Prop"]);
    assert_eq!(summary.skipped, vec!["Existing Prop", "Dup Label"]);
    assert_eq!(summary.created, vec!["New Prop"]);
    assert_eq!(summary.total(), 6);

    // Exactly the clean row reached the create call.
    let created = svc.created.lock().unwrap();
    assert_eq!(created.len(), 1);
    assert_eq!(created[0].1.name, "new_prop");
}

/// A failed creation (non-duplicate) errors the row but not the run.
#[tokio::test]
async fn create_failure_isolates_to_one_row() {
    let mut svc = MockService::with_groups(&["contacts"]);
    svc.failing_creates.insert("broken".to_string());

    let rows = vec![
        row("Broken", "Text", "", "Contact"),
        row("Fine", "Text", "", "Contact"),
    ];

    let mut ctx = RunContext::new(&svc);
    let summary = run(&mut ctx, &rows).await;

    assert_eq!(summary.errors, vec!["Broken"]);
    assert_eq!(summary.created, vec!["Fine"]);
}

/// Unmapped non-empty object types pass through to the API slug unchanged.
#[tokio::test]
async fn custom_object_type_passes_through() {
    let svc = MockService::with_groups(&["tickets"]);

    let rows = vec![row("Priority", "Text", "", "tickets")];

    let mut ctx = RunContext::new(&svc);
    let summary = run(&mut ctx, &rows).await;

    assert_eq!(summary.created, vec!["Priority"]);
    let created = svc.created.lock().unwrap();
    assert_eq!(created[0].0, "tickets");
}
