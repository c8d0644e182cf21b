//! A single evaluation session.
//!
//! A [`Session`] owns the global environment, the result table and the
//! meter for one run. It is `!Send`: environments are `Rc`-based, so a
//! session stays on the thread that created it. Several programs may run
//! in one session; they share bindings, saved results and accounting.

use tally_ir::Program;
use tally_meter::{ActiveMeter, MeterConfig, MeterError, Tally};
use tally_parse::ParseErrors;

use crate::interpreter::Interpreter;
use crate::{Environment, ResultTable, Value};

pub struct Session {
    env: Environment,
    results: ResultTable,
    meter: ActiveMeter,
}

/// What a finished session leaves behind.
#[derive(Debug)]
pub struct SessionReport {
    pub tally: Tally,
    pub results: ResultTable,
}

impl Session {
    /// Start the configured meter and open a session on it.
    pub fn new(config: MeterConfig) -> Result<Self, MeterError> {
        Ok(Self::with_meter(config.start()?))
    }

    pub fn with_meter(meter: impl Into<ActiveMeter>) -> Self {
        tracing::debug!("session started");
        Session {
            env: Environment::new(),
            results: ResultTable::new(),
            meter: meter.into(),
        }
    }

    /// Evaluate `program` in the session's global environment.
    pub fn run(&mut self, program: &Program) -> Value {
        let value =
            Interpreter::new(&self.meter, &mut self.results).eval_program(program, &self.env);
        if let Value::Error(err) = &value {
            tracing::debug!(kind = ?err.kind, message = %err.message, "program failed");
        }
        value
    }

    /// Parse and evaluate `source`.
    pub fn run_source(&mut self, source: &str) -> Result<Value, ParseErrors> {
        let program = tally_parse::parse(source)?;
        Ok(self.run(&program))
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    /// Results saved so far. Still readable if [`finish`](Self::finish)
    /// later fails.
    pub fn results(&self) -> &ResultTable {
        &self.results
    }

    /// Drain the meter and hand back the totals and saved results.
    pub fn finish(self) -> Result<SessionReport, MeterError> {
        let tally = self.meter.finish()?;
        tracing::debug!(
            events = tally.events(),
            work = tally.work(),
            saved = self.results.len(),
            "session finished"
        );
        Ok(SessionReport {
            tally,
            results: self.results,
        })
    }
}

#[cfg(test)]
mod tests;
