use std::path::{Path, PathBuf};

use fitdash_app::{console::Console, dashboard::Dashboard};
use fitdash_pdf::{MockExporter, PdfExporter};

fn run_session(script: &str, dashboard: Dashboard, export_dir: &Path) -> String {
    let mut output = Vec::new();
    Console::new(
        script.as_bytes(),
        &mut output,
        dashboard,
        export_dir.to_path_buf(),
    )
    .run()
    .unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn calculate_then_save_calorie_plan() {
    let mut exporter = MockExporter::new();
    exporter
        .expect_export()
        .withf(|title, lines, path| {
            title == "Calorie Plan"
                && lines.first().map(String::as_str) == Some("BMR: 1805 kcal")
                && lines.last().map(String::as_str) == Some("  - Broccoli")
                && path == Path::new("/plans/week.pdf")
        })
        .times(1)
        .returning(|_, _, _| Ok(()));

    let output = run_session(
        "calorie\n\n\n\n\n\n\n\nsave calorie\nweek\nquit\n",
        Dashboard::new(Box::new(exporter)),
        Path::new("/plans"),
    );

    assert!(output.starts_with("Fitness Dashboard\n"));
    assert!(output.contains("Goal Calories: 3217 kcal"));
    assert!(output.contains("PDF saved: /plans/week.pdf"));
}

#[test]
fn saving_without_a_plan_reports_error() {
    let mut exporter = MockExporter::new();
    exporter.expect_export().never();

    let output = run_session(
        "save workout\nsave calorie\n",
        Dashboard::new(Box::new(exporter)),
        Path::new("."),
    );

    assert!(output.contains("Error: Generate a plan first."));
    assert!(output.contains("Error: Calculate a plan first."));
    assert!(!output.contains("Save as"));
}

#[test]
fn invalid_input_keeps_the_session_running() {
    let output = run_session(
        "calorie\n\nabc\n\n\n\n\n\nworkout\n\n6\n\njump\nquit\n",
        Dashboard::new(Box::new(MockExporter::new())),
        Path::new("."),
    );

    assert!(output.contains("Error: age must be a number, got \"abc\""));
    assert!(output.contains("Day 5 - Push"));
    assert!(output.contains("Day 6 - Pull"));
    assert!(output.contains("Unknown command \"jump\""));
}

#[test]
fn blank_save_answer_cancels_export() {
    let mut exporter = MockExporter::new();
    exporter.expect_export().never();

    let output = run_session(
        "workout\n\n\n\nsave workout\n\n",
        Dashboard::new(Box::new(exporter)),
        Path::new("."),
    );

    assert!(output.contains("Workout Plan (Week):"));
    assert!(!output.contains("PDF saved"));
}

#[test]
fn json_command_prints_plan() {
    let output = run_session(
        "calorie\nfemale\n30\n60\n165\n55\nlight\nslow\njson calorie\n",
        Dashboard::new(Box::new(MockExporter::new())),
        Path::new("."),
    );

    assert!(output.contains("\"bmr\": 1320.25"));
    assert!(output.contains("\"name\": \"Breakfast\""));
}

#[test]
fn workout_plan_is_written_as_pdf() {
    let dir = tempfile::tempdir().unwrap();

    let output = run_session(
        "workout\nPro\n6\nHome\nsave workout\nweek\n",
        Dashboard::new(Box::new(PdfExporter::new())),
        dir.path(),
    );

    let path: PathBuf = dir.path().join("week.pdf");
    assert!(output.contains(&format!("PDF saved: {}", path.display())));
    let bytes = std::fs::read(path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
