//! Single-pass streaming resolver.
//!
//! The input is consumed one line at a time and the seed values are
//! rewritten in place as each stage's rules go by. Stage tables are never
//! materialized; see [`crate::reference`] for the model that does.
//!
//! Parsing is an explicit state machine:
//!
//! ```text
//! ReadingSeeds -> SkippingHeader -> [ProcessingStage <-> StageBoundary] -> Done
//! ```

use std::io::BufRead;

use serde::Serialize;

use crate::config::ResolverConfig;
use crate::reference::Almanac;
use crate::rule::{parse_int, MappingRule};
use crate::value_set::ValueSet;
use crate::AlmanacError;

/// Lines skipped between the seed line and the first rule.
const HEADER_LINES: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting for the `seeds:` line.
    ReadingSeeds,
    /// Skipping the blank line and first stage header.
    SkippingHeader { remaining: usize },
    /// Applying rule lines to the current stage.
    ProcessingStage,
    /// A blank line closed the stage; the next line is a header.
    StageBoundary,
    /// End of stream reached.
    Done,
}

/// Counters describing how much work a resolution actually did.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolveStats {
    pub lines_read: usize,
    pub stages: usize,
    pub rules_applied: usize,
    pub rules_skipped: usize,
    pub slots_mapped: usize,
}

/// Final value set of a run plus its statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub locations: Vec<i64>,
    pub stats: ResolveStats,
}

impl Resolution {
    pub fn min_location(&self) -> Result<i64, AlmanacError> {
        self.locations
            .iter()
            .copied()
            .min()
            .ok_or(AlmanacError::EmptyInput)
    }
}

pub struct Resolver {
    config: ResolverConfig,
    phase: Phase,
    values: ValueSet,
    stats: ResolveStats,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self {
            config,
            phase: Phase::ReadingSeeds,
            values: ValueSet::new(Vec::new()),
            stats: ResolveStats::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn value_set(&self) -> &ValueSet {
        &self.values
    }

    pub fn stats(&self) -> &ResolveStats {
        &self.stats
    }

    /// Advance the state machine by one input line (without its newline).
    pub fn feed_line(&mut self, line: &str) -> Result<(), AlmanacError> {
        self.stats.lines_read += 1;
        let line_no = self.stats.lines_read;

        match self.phase {
            Phase::ReadingSeeds => {
                self.values = ValueSet::new(parse_seeds(line, line_no)?);
                log::debug!("read {} seeds", self.values.len());
                self.phase = Phase::SkippingHeader {
                    remaining: HEADER_LINES,
                };
            }
            Phase::SkippingHeader { remaining } => {
                if remaining > 1 {
                    self.phase = Phase::SkippingHeader {
                        remaining: remaining - 1,
                    };
                } else {
                    self.enter_stage();
                }
            }
            Phase::ProcessingStage => {
                if line.trim().is_empty() {
                    self.close_stage();
                } else if self.config.short_circuit && self.values.is_fully_mapped() {
                    log::trace!("line {line_no}: stage fully mapped, rule skipped");
                    self.stats.rules_skipped += 1;
                } else {
                    let rule = MappingRule::parse(line, line_no)?;
                    self.stats.slots_mapped += self.values.apply_rule(&rule)?;
                    self.stats.rules_applied += 1;
                }
            }
            Phase::StageBoundary => self.enter_stage(),
            Phase::Done => {
                log::warn!("line {line_no} fed after end of stream, ignored");
            }
        }
        Ok(())
    }

    /// Signal end of stream. Fails when the seed line was never seen.
    pub fn end_of_stream(&mut self) -> Result<(), AlmanacError> {
        if self.phase == Phase::ReadingSeeds {
            return Err(AlmanacError::EmptyInput);
        }
        if self.phase == Phase::ProcessingStage {
            self.close_stage();
        }
        self.phase = Phase::Done;
        Ok(())
    }

    pub fn finish(mut self) -> Result<Resolution, AlmanacError> {
        self.end_of_stream()?;
        log::info!(
            "resolved {} seeds through {} stages ({} rules applied, {} skipped), minimum {:?}",
            self.values.len(),
            self.stats.stages,
            self.stats.rules_applied,
            self.stats.rules_skipped,
            self.values.min()
        );
        Ok(Resolution {
            locations: self.values.into_values(),
            stats: self.stats,
        })
    }

    fn enter_stage(&mut self) {
        self.stats.stages += 1;
        self.phase = Phase::ProcessingStage;
    }

    fn close_stage(&mut self) {
        log::debug!(
            "stage {} closed with {}/{} slots mapped",
            self.stats.stages,
            self.values.mapped_count(),
            self.values.len()
        );
        self.values.reset_stage();
        self.phase = Phase::StageBoundary;
    }
}

fn parse_seeds(line: &str, line_no: usize) -> Result<Vec<i64>, AlmanacError> {
    let seeds = line
        .split_whitespace()
        .skip(1)
        .map(|token| parse_int(token, line_no))
        .collect::<Result<Vec<_>, _>>()?;
    if seeds.is_empty() {
        return Err(AlmanacError::EmptyInput);
    }
    Ok(seeds)
}

/// Stream `reader` through a [`Resolver`] and return the final value set.
pub fn resolve<R: BufRead>(
    reader: R,
    config: &ResolverConfig,
) -> Result<Resolution, AlmanacError> {
    let mut resolver = Resolver::new(*config);
    let mut buffered = config.verify.then(String::new);

    for line in reader.lines() {
        let line = line?;
        if let Some(buf) = buffered.as_mut() {
            buf.push_str(&line);
            buf.push('\n');
        }
        resolver.feed_line(&line)?;
    }
    let resolution = resolver.finish()?;

    if let Some(text) = buffered {
        let streamed = resolution.min_location()?;
        let reference = Almanac::parse(&text)?.min_location()?;
        if streamed != reference {
            return Err(AlmanacError::VerificationMismatch {
                streamed,
                reference,
            });
        }
        log::debug!("verified minimum {streamed} against reference almanac");
    }
    Ok(resolution)
}

/// Minimum location for the almanac read from `reader`, with default options.
pub fn min_location<R: BufRead>(reader: R) -> Result<i64, AlmanacError> {
    resolve(reader, &ResolverConfig::default())?.min_location()
}
