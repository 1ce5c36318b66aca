//! Fully materialized almanac model.
//!
//! Where [`crate::resolver`] streams, this parses every stage into memory
//! and maps each seed independently. It is the ground truth the streaming
//! path is verified against.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::rule::{parse_int, MappingRule};
use crate::AlmanacError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stage {
    /// Header label without the trailing `map:`, e.g. `seed-to-soil`.
    pub name: String,
    pub rules: Vec<MappingRule>,
}

impl Stage {
    /// First matching rule in file order, identity otherwise.
    pub fn map(&self, value: i64) -> Result<i64, AlmanacError> {
        for rule in &self.rules {
            if let Some(dest) = rule.map(value)? {
                return Ok(dest);
            }
        }
        Ok(value)
    }

    /// Expand every rule into an explicit source -> destination table.
    /// Earlier rules win on overlap. Only sensible for small ranges.
    pub fn lookup_table(&self) -> HashMap<i64, i64> {
        let mut table = HashMap::new();
        for rule in &self.rules {
            for offset in 0..rule.range_length {
                let (Some(src), Some(dest)) = (
                    rule.source_start.checked_add(offset),
                    rule.destination_start.checked_add(offset),
                ) else {
                    break;
                };
                table.entry(src).or_insert(dest);
            }
        }
        table
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Almanac {
    pub seeds: Vec<i64>,
    pub stages: Vec<Stage>,
}

impl Almanac {
    pub fn parse(text: &str) -> Result<Self, AlmanacError> {
        let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l));

        let (seed_line, seed_text) = lines.next().ok_or(AlmanacError::EmptyInput)?;
        let seeds = seed_text
            .split_whitespace()
            .skip(1)
            .map(|token| parse_int(token, seed_line))
            .collect::<Result<Vec<_>, _>>()?;
        if seeds.is_empty() {
            return Err(AlmanacError::EmptyInput);
        }

        lines.next();
        let mut stages = Vec::new();
        let mut current = match lines.next() {
            Some((_, header)) => new_stage(header),
            None => return Ok(Self { seeds, stages }),
        };

        while let Some((line_no, body)) = lines.next() {
            if body.trim().is_empty() {
                stages.push(current);
                current = match lines.next() {
                    Some((_, header)) => new_stage(header),
                    None => return Ok(Self { seeds, stages }),
                };
                continue;
            }
            current.rules.push(MappingRule::parse(body, line_no)?);
        }
        stages.push(current);
        Ok(Self { seeds, stages })
    }

    /// Location of every seed, in seed order.
    pub fn locations(&self) -> Result<Vec<i64>, AlmanacError> {
        self.seeds
            .iter()
            .map(|&seed| {
                self.stages
                    .iter()
                    .try_fold(seed, |v, stage| stage.map(v))
            })
            .collect()
    }

    pub fn min_location(&self) -> Result<i64, AlmanacError> {
        self.locations()?
            .into_iter()
            .min()
            .ok_or(AlmanacError::EmptyInput)
    }
}

fn new_stage(header: &str) -> Stage {
    let name = header.trim();
    let name = name.strip_suffix("map:").unwrap_or(name).trim();
    Stage {
        name: name.to_string(),
        rules: Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_STAGES: &str = "seeds: 1 20\n\na-to-b map:\n10 0 5\n\nb-to-c map:\n0 10 2\n";

    #[test]
    fn parses_named_stages() {
        let almanac = Almanac::parse(TWO_STAGES).unwrap();
        assert_eq!(almanac.seeds, vec![1, 20]);
        let names: Vec<_> = almanac.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["a-to-b", "b-to-c"]);
        assert_eq!(almanac.locations().unwrap(), vec![1, 20]);
    }

    #[test]
    fn lookup_table_prefers_earlier_rule() {
        let stage = Stage {
            name: "x".into(),
            rules: vec![
                MappingRule::new(100, 0, 2),
                MappingRule::new(200, 1, 2),
            ],
        };
        let table = stage.lookup_table();
        assert_eq!(table[&0], 100);
        assert_eq!(table[&1], 101);
        assert_eq!(table[&2], 201);
        assert_eq!(stage.map(1).unwrap(), 101);
    }

    #[test]
    fn negative_length_stage_is_identity() {
        let almanac = Almanac::parse("seeds: 5\n\nx map:\n0 0 -1\n").unwrap();
        assert_eq!(almanac.min_location().unwrap(), 5);
        assert!(almanac.stages[0].lookup_table().is_empty());
    }

    #[test]
    fn empty_seed_line_is_rejected() {
        assert!(matches!(
            Almanac::parse("seeds:\n"),
            Err(AlmanacError::EmptyInput)
        ));
        assert!(matches!(Almanac::parse(""), Err(AlmanacError::EmptyInput)));
    }
}
