use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};

use itertools::Itertools;
use log::{info, warn};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::{
    dashboard::Dashboard,
    form::{CalorieForm, Field, WorkoutForm},
    AppError,
};

#[derive(Clone, Copy, Debug, Display, EnumIter, EnumString, Eq, PartialEq)]
#[strum(ascii_case_insensitive)]
enum Command {
    #[strum(serialize = "calorie")]
    Calorie,
    #[strum(serialize = "workout")]
    Workout,
    #[strum(serialize = "save calorie")]
    SaveCalorie,
    #[strum(serialize = "save workout")]
    SaveWorkout,
    #[strum(serialize = "json calorie")]
    JsonCalorie,
    #[strum(serialize = "json workout")]
    JsonWorkout,
    #[strum(serialize = "help")]
    Help,
    #[strum(to_string = "quit", serialize = "exit")]
    Quit,
}

impl Command {
    fn description(&self) -> &'static str {
        match self {
            Command::Calorie => "fill in calorie settings and calculate",
            Command::Workout => "fill in workout settings and generate",
            Command::SaveCalorie => "save the calorie plan as PDF",
            Command::SaveWorkout => "save the workout plan as PDF",
            Command::JsonCalorie => "print the calorie plan as JSON",
            Command::JsonWorkout => "print the workout plan as JSON",
            Command::Help => "show this list",
            Command::Quit => "leave the dashboard",
        }
    }
}

#[derive(Clone, Copy)]
enum Report {
    Calorie,
    Workout,
}

/// Line-oriented front end: forms are answered field by field and every
/// command acts on the dashboard's last plans.
pub struct Console<R, W> {
    input: R,
    output: W,
    dashboard: Dashboard,
    export_dir: PathBuf,
    calorie_form: CalorieForm,
    workout_form: WorkoutForm,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, dashboard: Dashboard, export_dir: PathBuf) -> Self {
        Self {
            input,
            output,
            dashboard,
            export_dir,
            calorie_form: Default::default(),
            workout_form: Default::default(),
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Fitness Dashboard")?;
        writeln!(self.output, "Train smart. Eat clean. Grow stronger.")?;
        writeln!(self.output, "Type \"help\" to get started.")?;

        while let Some(line) = read_answer(&mut self.input, &mut self.output, "> ")? {
            let line = line.split_whitespace().join(" ");
            if line.is_empty() {
                continue;
            }
            match Command::from_str(&line) {
                Ok(Command::Quit) => break,
                Ok(command) => self.execute(command)?,
                Err(_) => {
                    warn!("Unknown command \"{}\"", line);
                    writeln!(
                        self.output,
                        "Unknown command \"{}\". Type \"help\" for a list of commands.",
                        line
                    )?;
                }
            }
        }

        info!("Closing dashboard");
        Ok(())
    }

    fn execute(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Calorie => self.calculate(),
            Command::Workout => self.generate(),
            Command::SaveCalorie => self.save(Report::Calorie),
            Command::SaveWorkout => self.save(Report::Workout),
            Command::JsonCalorie => self.print_json(Report::Calorie),
            Command::JsonWorkout => self.print_json(Report::Workout),
            Command::Help => self.help(),
            Command::Quit => Ok(()),
        }
    }

    fn calculate(&mut self) -> io::Result<()> {
        writeln!(self.output, "Calorie Settings")?;
        if !fill(
            &mut self.input,
            &mut self.output,
            self.calorie_form.fields(),
        )? {
            return Ok(());
        }
        let shown = self.dashboard.calculate(&self.calorie_form).map(<[String]>::to_vec);
        match shown {
            Ok(lines) => write_lines(&mut self.output, &lines),
            Err(e) => self.show_error(&e),
        }
    }

    fn generate(&mut self) -> io::Result<()> {
        writeln!(self.output, "Workout Settings")?;
        if !fill(
            &mut self.input,
            &mut self.output,
            self.workout_form.fields(),
        )? {
            return Ok(());
        }
        let shown = self.dashboard.generate(&self.workout_form).map(<[String]>::to_vec);
        match shown {
            Ok(lines) => write_lines(&mut self.output, &lines),
            Err(e) => self.show_error(&e),
        }
    }

    fn save(&mut self, report: Report) -> io::Result<()> {
        let ready = match report {
            Report::Calorie => self.dashboard.calorie_lines().map(|_| ()),
            Report::Workout => self.dashboard.workout_lines().map(|_| ()),
        };
        if let Err(e) = ready {
            return self.show_error(&e);
        }

        let Some(answer) = read_answer(&mut self.input, &mut self.output, "Save as (.pdf): ")?
        else {
            return Ok(());
        };
        let Some(path) = resolve_export_path(&answer, &self.export_dir) else {
            info!("Save cancelled");
            return Ok(());
        };

        let saved = match report {
            Report::Calorie => self.dashboard.save_calorie_pdf(&path),
            Report::Workout => self.dashboard.save_workout_pdf(&path),
        };
        match saved {
            Ok(()) => writeln!(self.output, "PDF saved: {}", path.display()),
            Err(e) => self.show_error(&e),
        }
    }

    fn print_json(&mut self, report: Report) -> io::Result<()> {
        let json = match report {
            Report::Calorie => self.dashboard.calorie_json(),
            Report::Workout => self.dashboard.workout_json(),
        };
        match json {
            Ok(json) => writeln!(self.output, "{}", json),
            Err(e) => self.show_error(&e),
        }
    }

    fn help(&mut self) -> io::Result<()> {
        for command in Command::iter() {
            writeln!(self.output, "  {:<14} {}", command, command.description())?;
        }
        Ok(())
    }

    fn show_error(&mut self, e: &AppError) -> io::Result<()> {
        warn!("{}", e);
        writeln!(self.output, "Error: {}", e)
    }
}

/// Turns a save-dialog answer into a target path. Blank answers cancel,
/// a missing extension becomes `.pdf` and relative paths land in
/// `export_dir`.
pub fn resolve_export_path(answer: &str, export_dir: &Path) -> Option<PathBuf> {
    let answer = answer.trim();
    if answer.is_empty() {
        return None;
    }
    let mut path = PathBuf::from(answer);
    if path.extension().is_none() {
        path.set_extension("pdf");
    }
    if path.is_relative() {
        Some(export_dir.join(path))
    } else {
        Some(path)
    }
}

fn read_answer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{}", prompt)?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_owned()))
}

/// Asks for every field, keeping the current value on an empty answer.
/// Returns `false` if input ended before the form was complete.
fn fill<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    fields: Vec<Field<'_>>,
) -> io::Result<bool> {
    for field in fields {
        if !field.choices.is_empty() {
            writeln!(output, "  options: {}", field.choices.iter().join(", "))?;
        }
        let prompt = format!("{} [{}]: ", field.label, field.value);
        let Some(answer) = read_answer(input, output, &prompt)? else {
            return Ok(false);
        };
        let answer = answer.trim();
        if !answer.is_empty() {
            *field.value = answer.to_owned();
        }
    }
    Ok(true)
}

fn write_lines<W: Write>(output: &mut W, lines: &[String]) -> io::Result<()> {
    for line in lines {
        writeln!(output, "{}", line)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commands_parse_case_insensitively() {
        assert_eq!(Command::from_str("save calorie"), Ok(Command::SaveCalorie));
        assert_eq!(Command::from_str("JSON Workout"), Ok(Command::JsonWorkout));
        assert_eq!(Command::from_str("exit"), Ok(Command::Quit));
        assert_eq!(Command::Quit.to_string(), "quit");
        assert!(Command::from_str("save").is_err());
    }

    #[test]
    fn blank_answer_cancels_save() {
        assert_eq!(resolve_export_path("   ", Path::new("/tmp")), None);
    }

    #[test]
    fn pdf_extension_is_added_when_missing() {
        assert_eq!(
            resolve_export_path("plan", Path::new("/tmp/out")),
            Some(PathBuf::from("/tmp/out/plan.pdf"))
        );
        assert_eq!(
            resolve_export_path("plan.txt", Path::new("/tmp/out")),
            Some(PathBuf::from("/tmp/out/plan.txt"))
        );
    }

    #[test]
    fn absolute_paths_ignore_export_dir() {
        assert_eq!(
            resolve_export_path("/var/plans/week.pdf", Path::new("/tmp/out")),
            Some(PathBuf::from("/var/plans/week.pdf"))
        );
    }

    #[test]
    fn fill_keeps_defaults_on_empty_answers() {
        let mut form = WorkoutForm::default();
        let mut input = "\n6\n\n".as_bytes();
        let mut output = Vec::new();

        assert!(fill(&mut input, &mut output, form.fields()).unwrap());
        assert_eq!(form.level, "Beginner");
        assert_eq!(form.days_per_week, "6");
        assert_eq!(form.equipment, "Gym");

        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("Days per Week (1-6) [4]: "));
        assert!(shown.contains("options: Beginner, Advanced, Pro"));
    }

    #[test]
    fn fill_stops_at_end_of_input() {
        let mut form = CalorieForm::default();
        let mut input = "female\n30\n".as_bytes();
        let mut output = Vec::new();

        assert!(!fill(&mut input, &mut output, form.fields()).unwrap());
        assert_eq!(form.sex, "female");
        assert_eq!(form.age, "30");
    }
}
