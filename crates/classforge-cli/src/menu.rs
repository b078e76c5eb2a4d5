//! Interactive numbered menu
//!
//! Drives a [`Session`] from line-oriented input. Classes are picked by their
//! 1-based position in the listing. Bad input is reported and the loop keeps
//! going; only I/O failures end it early.

use anyhow::{anyhow, Result};
use std::fs;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing::{debug, info};

use classforge::diagram::CharacterSet;
use classforge::{ModelError, Session};

const MENU: &str = "\
Choose an option:
1. Create class
2. Add attribute
3. Add method
4. Set inheritance
5. Add composition
6. Add aggregation
7. Show UML diagram
8. Finish and generate code";

/// How the menu loop ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuOutcome {
    /// Code was written to this path
    Finished(PathBuf),
    /// Input ran out before option 8
    Closed,
}

enum Step {
    Continue,
    Done(MenuOutcome),
}

pub struct Menu<R, W> {
    session: Session,
    input: R,
    output: W,
    diagram_path: Option<PathBuf>,
    style: CharacterSet,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(session: Session, input: R, output: W) -> Self {
        Self {
            session,
            input,
            output,
            diagram_path: None,
            style: CharacterSet::default(),
        }
    }

    /// Rewrite this DOT file after every successful change
    pub fn with_diagram_path(mut self, path: Option<PathBuf>) -> Self {
        self.diagram_path = path;
        self
    }

    pub fn with_style(mut self, style: CharacterSet) -> Self {
        self.style = style;
        self
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn run(&mut self) -> Result<MenuOutcome> {
        loop {
            writeln!(self.output, "\n{}", MENU)?;
            let Some(option) = self.prompt("Enter option (1-8): ")? else {
                return Ok(MenuOutcome::Closed);
            };
            debug!(option = %option, "Menu option selected");

            let step = match option.as_str() {
                "1" => self.create_class()?,
                "2" | "3" | "4" | "5" | "6" => self.modify_class(&option)?,
                "7" => self.show_diagram()?,
                "8" => self.finish()?,
                _ => {
                    writeln!(self.output, "Invalid option. Please choose again.")?;
                    Step::Continue
                }
            };

            if let Step::Done(outcome) = step {
                return Ok(outcome);
            }
        }
    }

    fn create_class(&mut self) -> Result<Step> {
        let Some(name) = self.prompt("Enter class name: ")? else {
            return Ok(Step::Done(MenuOutcome::Closed));
        };
        let result = self.session.create_class(&name);
        self.report(result)?;
        Ok(Step::Continue)
    }

    fn modify_class(&mut self, option: &str) -> Result<Step> {
        if self.session.model().is_empty() {
            writeln!(
                self.output,
                "Error: No classes created. Please create a class first."
            )?;
            return Ok(Step::Continue);
        }

        writeln!(self.output, "Existing classes:")?;
        let names: Vec<String> = self
            .session
            .model()
            .class_names()
            .map(str::to_string)
            .collect();
        for (i, name) in names.iter().enumerate() {
            writeln!(self.output, "{}. {}", i + 1, name)?;
        }

        let Some(choice) = self.prompt("Choose the class to modify (enter the number): ")? else {
            return Ok(Step::Done(MenuOutcome::Closed));
        };
        let index = match choice.parse::<usize>() {
            Ok(index) => index,
            Err(_) => {
                writeln!(self.output, "Invalid input. Please enter a number.")?;
                return Ok(Step::Continue);
            }
        };
        let Some(class) = index.checked_sub(1).and_then(|i| names.get(i)) else {
            writeln!(self.output, "Invalid class index. Please choose again.")?;
            return Ok(Step::Continue);
        };

        let result = match option {
            "2" => {
                let Some((name, type_name)) =
                    self.prompt_pair("Enter attribute name: ", "Enter attribute type: ")?
                else {
                    return Ok(Step::Done(MenuOutcome::Closed));
                };
                self.session.add_attribute(class, &name, &type_name)
            }
            "3" => {
                let Some((name, return_type)) =
                    self.prompt_pair("Enter method name: ", "Enter return type: ")?
                else {
                    return Ok(Step::Done(MenuOutcome::Closed));
                };
                self.session.add_method(class, &name, &return_type)
            }
            "4" => {
                let Some(parent) = self.prompt("Enter parent class name: ")? else {
                    return Ok(Step::Done(MenuOutcome::Closed));
                };
                self.session.set_inheritance(class, &parent)
            }
            "5" => {
                let Some(part) = self.prompt("Enter composed class name: ")? else {
                    return Ok(Step::Done(MenuOutcome::Closed));
                };
                self.session.add_composition(class, &part)
            }
            _ => {
                let Some(part) = self.prompt("Enter aggregated class name: ")? else {
                    return Ok(Step::Done(MenuOutcome::Closed));
                };
                self.session.add_aggregation(class, &part)
            }
        };
        self.report(result)?;
        Ok(Step::Continue)
    }

    fn show_diagram(&mut self) -> Result<Step> {
        let preview = self.session.preview(self.style);
        writeln!(self.output, "{}", preview)?;
        if let Some(path) = &self.diagram_path {
            writeln!(self.output, "Graphviz source: {}", path.display())?;
        }
        Ok(Step::Continue)
    }

    fn finish(&mut self) -> Result<Step> {
        let Some(file) = self.prompt("Enter output Python file name (e.g., output.py): ")? else {
            return Ok(Step::Done(MenuOutcome::Closed));
        };
        let path = PathBuf::from(file);
        fs::write(&path, self.session.synthesize_code())
            .map_err(|e| anyhow!("Failed to write code file '{}': {}", path.display(), e))?;
        writeln!(
            self.output,
            "Python code generated and saved to {}",
            path.display()
        )?;
        info!(path = %path.display(), classes = self.session.model().class_count(), "Code written");
        Ok(Step::Done(MenuOutcome::Finished(path)))
    }

    /// Print a model error, or refresh the DOT file after a change
    fn report(&mut self, result: Result<(), ModelError>) -> Result<()> {
        match result {
            Ok(()) => self.write_diagram(),
            Err(e) => {
                writeln!(self.output, "Error: {}", e)?;
                Ok(())
            }
        }
    }

    fn write_diagram(&self) -> Result<()> {
        if let Some(path) = &self.diagram_path {
            fs::write(path, self.session.project_diagram().to_dot()).map_err(|e| {
                anyhow!("Failed to write diagram file '{}': {}", path.display(), e)
            })?;
            debug!(path = %path.display(), "Diagram refreshed");
        }
        Ok(())
    }

    /// Read one trimmed line, or `None` at end of input
    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_pair(&mut self, first: &str, second: &str) -> Result<Option<(String, String)>> {
        let Some(a) = self.prompt(first)? else {
            return Ok(None);
        };
        Ok(self.prompt(second)?.map(|b| (a, b)))
    }
}
