// File: crates/plot-cli/tests/session.rs
// Summary: Whole sessions driven by scripted input against a temp record file and a recording display.

use std::fs;
use std::io::Cursor;

use anyhow::Result;
use plot_cli::{ChartDisplay, Prompter, Session, Shown};
use plot_core::Chart;
use plot_store::RecordStore;

/// Keeps every chart it is asked to show.
#[derive(Default)]
struct Recorder {
    charts: Vec<Chart>,
}

impl ChartDisplay for Recorder {
    fn show(&mut self, chart: &Chart) -> Result<Shown> {
        self.charts.push(chart.clone());
        Ok(Shown::Window)
    }
}

struct Run {
    out: String,
    charts: Vec<Chart>,
}

fn run_script(store: &RecordStore, script: &str) -> Run {
    run_bytes(store, script.as_bytes())
}

fn run_bytes(store: &RecordStore, script: &[u8]) -> Run {
    let prompter = Prompter::new(Cursor::new(script.to_vec()), Vec::new());
    let mut session = Session::new(prompter, store.clone(), Recorder::default());
    session.run().unwrap();
    let (out, display) = session.into_parts();
    Run { out: String::from_utf8(out).unwrap(), charts: display.charts }
}

fn temp_store() -> (tempfile::TempDir, RecordStore) {
    let dir = tempfile::tempdir().unwrap();
    let store = RecordStore::open(dir.path().join("graph.csv"));
    (dir, store)
}

#[test]
fn plot_save_and_exit() {
    let (_dir, store) = temp_store();
    let script = "\
-2.5\n2.5\n\
2\nsin(x)\nfoo(x)\n\
n\n\
y\n\
5\n";
    let run = run_script(&store, script);

    assert!(run.out.contains("GRAPH PLOTTER"));
    assert!(run.out.contains("Available names: sin, cos, tan, asin, acos, atan, sqrt, log, pi, e, x"));
    assert!(run.out.contains("Equation accepted."));
    assert!(run.out.contains("Invalid equation. Skipped."));
    assert!(run.out.contains("Graph saved."));
    assert!(run.out.trim_end().ends_with(&format!("Program ended.\n{}", "-".repeat(60))));

    assert_eq!(run.charts.len(), 1);
    assert_eq!(run.charts[0].title, "Graphs of sin(x)");
    assert_eq!(run.charts[0].series[0].data_xy.len(), 1000);

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "sin(x),-2.5,2.5,,\n");
}

#[test]
fn no_valid_equations_exits_without_menu() {
    let (_dir, store) = temp_store();
    let run = run_script(&store, "0\n1\n1\nimport os\n");
    assert!(run.out.contains("No valid equations. Exiting."));
    assert!(!run.out.contains("CSV CRUD MENU"));
    assert!(!run.out.contains("Program ended."));
    assert!(run.charts.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn bad_numbers_and_inverted_ranges_reprompt() {
    let (_dir, store) = temp_store();
    let script = "\
abc\n5\n1\n\
0\n1\n\
zero\n1\nx**2\n\
y\n2\n1\n0\n4\n\
n\n5\n";
    let run = run_script(&store, script);
    assert!(run.out.contains("Invalid number. Try again."));
    assert!(run.out.contains("Start must be less than end."));
    assert!(run.out.contains("Enter a positive integer."));
    assert!(run.out.contains("Lower limit must be less than upper limit."));

    let chart = &run.charts[0];
    assert_eq!((chart.x_axis.min, chart.x_axis.max), (0.0, 1.0));
    assert_eq!((chart.y_axis.min, chart.y_axis.max), (0.0, 4.0));
}

#[test]
fn menu_reads_plots_updates_and_deletes() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "x,0.0,1.0,,\ncos(x),0.0,6.0,-1.0,1.0\n").unwrap();

    let script = "\
0\n1\n1\nx\nn\nn\n\
1\n\
2\n2\n\
3\n1\n-1\n1\n1\nx**3\ny\n-2\n2\n\
4\n9\n\
4\n2\n\
7\n\
1\n\
5\n";
    let run = run_script(&store, script);

    assert!(run.out.contains("1. Eq: x | X: 0.0 to 1.0 | Y: , "));
    assert!(run.out.contains("2. Eq: cos(x) | X: 0.0 to 6.0 | Y: -1.0, 1.0"));
    assert!(run.out.contains("Record updated successfully."));
    assert!(run.out.contains("Invalid record number."));
    assert!(run.out.contains("Record deleted successfully."));
    assert!(run.out.contains("Invalid choice."));
    assert!(run.out.contains("1. Eq: x**3 | X: -1.0 to 1.0 | Y: -2.0, 2.0"));

    // first plot from the opening flow, second from menu option 2
    assert_eq!(run.charts.len(), 2);
    assert_eq!(run.charts[1].title, "Graphs of cos(x)");
    assert_eq!((run.charts[1].y_axis.min, run.charts[1].y_axis.max), (-1.0, 1.0));

    assert_eq!(fs::read_to_string(store.path()).unwrap(), "x**3,-1.0,1.0,-2.0,2.0\n");
}

#[test]
fn update_with_bad_index_asks_nothing_more() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "x,0.0,1.0,,\n").unwrap();
    let run = run_script(&store, "0\n1\n1\nx\nn\nn\n3\n4\n5\n");
    assert!(run.out.contains("Invalid record number."));
    assert_eq!(run.out.matches("X-AXIS CONFIGURATION").count(), 1);
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "x,0.0,1.0,,\n");
}

#[test]
fn update_without_valid_equations_keeps_record() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "x,0.0,1.0,,\n").unwrap();
    let run = run_script(&store, "0\n1\n1\nx\nn\nn\n3\n1\n0\n2\n1\nbogus\n5\n");
    assert!(run.out.contains("No valid equations. Record unchanged."));
    assert_eq!(fs::read_to_string(store.path()).unwrap(), "x,0.0,1.0,,\n");
}

#[test]
fn missing_file_messages() {
    let (_dir, store) = temp_store();
    let run = run_script(&store, "0\n1\n1\nx\nn\nn\n1\n2\n1\n3\n1\n4\n1\n5\n");
    assert_eq!(run.out.matches("No saved graphs found.").count(), 2);
    assert!(run.out.contains("No records to update."));
    assert!(run.out.contains("No records to delete."));
}

#[test]
fn saved_equation_that_no_longer_parses_is_reported() {
    let (_dir, store) = temp_store();
    fs::write(store.path(), "sin(x);;cos(x),0.0,1.0,,\n").unwrap();
    let run = run_script(&store, "0\n1\n1\nx\nn\nn\n2\n1\n5\n");
    assert!(run.out.contains("Failed to plot:  (expression is empty)"));
    assert_eq!(run.charts[1].series.len(), 2);
}

#[test]
fn end_of_input_ends_cleanly() {
    let (_dir, store) = temp_store();
    let run = run_script(&store, "0\n1\n1\nx\nn\nn\n1\n");
    assert!(run.out.contains("Program ended."));
    assert_eq!(run.charts.len(), 1);
}

#[test]
fn undecodable_input_is_asked_again() {
    let (_dir, store) = temp_store();
    let script = b"\xff\xfe\n0\n1\n\xff\n1\nsin(\xffx)\n";
    let run = run_bytes(&store, script);
    assert_eq!(run.out.matches("Invalid number. Try again.").count(), 1);
    assert_eq!(run.out.matches("Enter a positive integer.").count(), 1);
    assert!(run.out.contains("Invalid equation. Skipped."));
    assert!(run.out.contains("No valid equations. Exiting."));
}

#[test]
fn equation_with_nothing_to_draw_is_skipped() {
    let (_dir, store) = temp_store();
    let run = run_script(&store, "0\n1\n2\n1/0\nx\nn\nn\n5\n");
    assert_eq!(run.out.matches("Invalid equation. Skipped.").count(), 1);
    assert_eq!(run.charts[0].title, "Graphs of x");
}
