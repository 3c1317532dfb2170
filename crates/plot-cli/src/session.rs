// File: crates/plot-cli/src/session.rs
// Summary: The interactive flow: define and plot a graph, optionally save it, then the saved-graph menu.

use std::io::{BufRead, Write};

use plot_core::{GraphDefinition, RangeError, SampleSequence, XRange, YLimits};
use plot_expr::{allowed_names, Sandbox};
use plot_store::{RecordStore, StoreError};
use tracing::{debug, warn};

use crate::display::{ChartDisplay, Shown};
use crate::plot::build_chart;
use crate::prompt::{PromptError, Prompter};

enum Exit {
    NoEquations,
    Menu,
}

pub struct Session<R, W, D> {
    prompt: Prompter<R, W>,
    store: RecordStore,
    display: D,
    sandbox: Sandbox,
}

impl<R: BufRead, W: Write, D: ChartDisplay> Session<R, W, D> {
    pub fn new(prompt: Prompter<R, W>, store: RecordStore, display: D) -> Self {
        Self { prompt, store, display, sandbox: Sandbox::new() }
    }

    pub fn into_parts(self) -> (W, D) {
        (self.prompt.into_output(), self.display)
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> Result<(), PromptError> {
        match self.interact() {
            Ok(Exit::NoEquations) => Ok(()),
            Ok(Exit::Menu) => self.farewell(),
            Err(PromptError::Closed) => {
                debug!("input closed; ending session");
                self.prompt.say("")?;
                self.farewell()
            }
            Err(e) => Err(e),
        }
    }

    fn interact(&mut self) -> Result<Exit, PromptError> {
        self.prompt.header("GRAPH PLOTTER")?;
        let Some(def) = self.read_definition()? else {
            self.prompt.say("No valid equations. Exiting.")?;
            return Ok(Exit::NoEquations);
        };
        self.plot(&def)?;

        if self.prompt.confirm("Save this graph to CSV? (y/n): ")? {
            match self.store.append(&def) {
                Ok(()) => self.prompt.say("Graph saved.")?,
                Err(e) => {
                    warn!(error = %e, "append failed");
                    self.prompt.say(format_args!("Could not save graph: {e}"))?;
                }
            }
        }
        self.menu()?;
        Ok(Exit::Menu)
    }

    fn farewell(&mut self) -> Result<(), PromptError> {
        self.prompt.rule()?;
        self.prompt.say("Program ended.")?;
        self.prompt.rule()
    }

    fn menu(&mut self) -> Result<(), PromptError> {
        loop {
            self.prompt.header("CSV CRUD MENU")?;
            self.prompt.say("1. Read saved graphs")?;
            self.prompt.say("2. Plot a saved graph")?;
            self.prompt.say("3. Update a saved graph")?;
            self.prompt.say("4. Delete a saved graph")?;
            self.prompt.say("5. Exit")?;

            let choice = self.prompt.read_line("Enter choice: ")?;
            match choice.trim() {
                "1" => self.list_saved()?,
                "2" => self.plot_saved()?,
                "3" => self.update_saved()?,
                "4" => self.delete_saved()?,
                "5" => return Ok(()),
                _ => self.prompt.say("Invalid choice.")?,
            }
        }
    }

    /// X range, then equations. `None` when no equation was accepted.
    fn read_definition(&mut self) -> Result<Option<GraphDefinition>, PromptError> {
        let x_range = self.read_x_range()?;
        let equations = self.read_equations(&x_range)?;
        if equations.is_empty() {
            return Ok(None);
        }
        let y_limits = self.read_y_limits()?;
        Ok(Some(GraphDefinition::new(equations, x_range, y_limits)))
    }

    fn read_x_range(&mut self) -> Result<XRange, PromptError> {
        self.prompt.header("X-AXIS CONFIGURATION")?;
        loop {
            let start = self.prompt.read_float("Enter starting value of x-axis: ")?;
            let end = self.prompt.read_float("Enter ending value of x-axis: ")?;
            match XRange::new(start, end) {
                Ok(range) => return Ok(range),
                Err(RangeError::StartNotBeforeEnd) => self.prompt.say("Start must be less than end.")?,
                Err(e) => self.prompt.say(format_args!("Invalid range: {e}."))?,
            }
        }
    }

    fn read_equations(&mut self, x_range: &XRange) -> Result<Vec<String>, PromptError> {
        self.prompt.header("EQUATION INPUT")?;
        self.prompt.say(format_args!("Available names: {}", allowed_names().join(", ")))?;
        let samples = SampleSequence::new(x_range);
        let count = self.prompt.read_positive_int("How many equations do you want to plot? ")?;
        let mut equations = Vec::new();
        for i in 1..=count {
            let src = self.prompt.read_line(&format!("Enter equation {i} (use x): "))?;
            match self.sandbox.validate(&src, samples.xs()) {
                Ok(compiled) => {
                    equations.push(compiled.source().to_string());
                    self.prompt.say("Equation accepted.")?;
                }
                Err(e) => {
                    debug!(expr = %src, error = %e, "equation rejected");
                    self.prompt.say("Invalid equation. Skipped.")?;
                }
            }
        }
        Ok(equations)
    }

    fn read_y_limits(&mut self) -> Result<Option<YLimits>, PromptError> {
        self.prompt.header("Y-AXIS CONFIGURATION")?;
        if !self.prompt.confirm("Restrict y-axis? (y/n): ")? {
            return Ok(None);
        }
        loop {
            let low = self.prompt.read_float("Enter lower y-limit: ")?;
            let high = self.prompt.read_float("Enter upper y-limit: ")?;
            match YLimits::new(low, high) {
                Ok(limits) => return Ok(Some(limits)),
                Err(_) => self.prompt.say("Lower limit must be less than upper limit.")?,
            }
        }
    }

    fn plot(&mut self, def: &GraphDefinition) -> Result<(), PromptError> {
        self.prompt.header("PLOTTING GRAPH")?;
        let outcome = build_chart(def, &self.sandbox);
        for (eq, err) in &outcome.failures {
            self.prompt.say(format_args!("Failed to plot: {eq} ({err})"))?;
        }
        match self.display.show(&outcome.chart) {
            Ok(Shown::Window) => {}
            Ok(Shown::Saved(path)) => self.prompt.say(format_args!("Plot saved to {}", path.display()))?,
            Err(e) => {
                warn!(error = %e, "display failed");
                self.prompt.say(format_args!("Could not display the plot: {e:#}"))?;
            }
        }
        Ok(())
    }

    fn list_saved(&mut self) -> Result<(), PromptError> {
        self.prompt.header("SAVED GRAPHS")?;
        match self.store.list() {
            Ok(entries) if entries.is_empty() => self.prompt.say("No saved graphs found."),
            Ok(entries) => {
                for entry in &entries {
                    self.prompt.say(entry)?;
                }
                Ok(())
            }
            Err(e) => self.report(e, "No saved graphs found."),
        }
    }

    fn plot_saved(&mut self) -> Result<(), PromptError> {
        let index = self.prompt.read_positive_int("Enter record number: ")?;
        match self.store.fetch(index) {
            Ok(def) => self.plot(&def),
            Err(e) => self.report(e, "No saved graphs found."),
        }
    }

    fn update_saved(&mut self) -> Result<(), PromptError> {
        let index = self.prompt.read_positive_int("Enter record number: ")?;
        if let Err(e) = self.store.check_index(index) {
            return self.report(e, "No records to update.");
        }
        let Some(def) = self.read_definition()? else {
            return self.prompt.say("No valid equations. Record unchanged.");
        };
        match self.store.update(index, &def) {
            Ok(()) => self.prompt.say("Record updated successfully."),
            Err(e) => self.report(e, "No records to update."),
        }
    }

    fn delete_saved(&mut self) -> Result<(), PromptError> {
        let index = self.prompt.read_positive_int("Enter record number: ")?;
        match self.store.delete(index) {
            Ok(_) => self.prompt.say("Record deleted successfully."),
            Err(e) => self.report(e, "No records to delete."),
        }
    }

    /// Print a store failure; `missing` is the wording for an absent file.
    fn report(&mut self, err: StoreError, missing: &str) -> Result<(), PromptError> {
        match err {
            StoreError::NoRecords => self.prompt.say(missing),
            StoreError::IndexOutOfRange { .. } => self.prompt.say("Invalid record number."),
            other => {
                warn!(error = %other, "record store failure");
                self.prompt.say(format_args!("Error: {other}"))
            }
        }
    }
}
