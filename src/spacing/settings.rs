//! Spacing settings data
//!
//! Plain serializable values driving the rule engines: the four master
//! pairs, Sousa's group memberships, and per-character overrides. Settings
//! carry no reference to a font; the interactive editor owns their lifetime
//! and this module only gives them a JSON on-disk form.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use crate::spacing::topology::{topology_of, TopologyClass};

/// A fully specified master metric pair, in design units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasterPair {
    pub left: f64,
    pub right: f64,
}

impl MasterPair {
    pub fn new(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Equal bearings on both sides
    pub fn even(value: f64) -> Self {
        Self { left: value, right: value }
    }
}

/// A partial bearing pair; an absent side means "leave unchanged"
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct SideBearingPair {
    pub left: Option<f64>,
    pub right: Option<f64>,
}

impl SideBearingPair {
    pub fn left(value: f64) -> Self {
        Self { left: Some(value), right: None }
    }

    pub fn right(value: f64) -> Self {
        Self { left: None, right: Some(value) }
    }

    pub fn both(left: f64, right: f64) -> Self {
        Self { left: Some(left), right: Some(right) }
    }
}

/// Per-character overrides, applied after rule derivation side by side
pub type OverrideMap = BTreeMap<char, SideBearingPair>;

/// The four tuned master pairs both methodologies derive from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MasterSet {
    #[serde(rename = "H")]
    pub cap_h: MasterPair,
    #[serde(rename = "O")]
    pub cap_o: MasterPair,
    #[serde(rename = "n")]
    pub low_n: MasterPair,
    #[serde(rename = "o")]
    pub low_o: MasterPair,
}

/// Settings for the Tracy method: masters plus overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TracySettings {
    pub masters: MasterSet,
    #[serde(default)]
    pub overrides: OverrideMap,
}

/// Settings for the Sousa method: masters, group memberships, overrides
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SousaSettings {
    pub masters: MasterSet,
    #[serde(default)]
    pub groups: SousaGroups,
    #[serde(default)]
    pub overrides: OverrideMap,
}

/// Sousa's six glyph groups, three confidence tiers per case.
///
/// Membership order is preserved for display; the engine only cares which
/// tier a character last appeared in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SousaGroups {
    pub group1: Vec<char>,
    pub group2: Vec<char>,
    pub group3: Vec<char>,
    pub upper_group1: Vec<char>,
    pub upper_group2: Vec<char>,
    pub upper_group3: Vec<char>,
}

impl Default for SousaGroups {
    /// Partition the basic Latin letters by how many of their sides the
    /// topology table calls Visual: none is relational, one is
    /// semi-relational, both is visual.
    fn default() -> Self {
        let mut groups = Self {
            group1: Vec::new(),
            group2: Vec::new(),
            group3: Vec::new(),
            upper_group1: Vec::new(),
            upper_group2: Vec::new(),
            upper_group3: Vec::new(),
        };
        for ch in 'a'..='z' {
            groups.tier_for(ch).push(ch);
        }
        for ch in 'A'..='Z' {
            groups.tier_for(ch).push(ch);
        }
        groups
    }
}

impl SousaGroups {
    fn tier_for(&mut self, ch: char) -> &mut Vec<char> {
        let topo = topology_of(ch);
        let visual_sides = [topo.left, topo.right]
            .iter()
            .filter(|&&c| c == TopologyClass::Visual)
            .count();
        match (ch.is_uppercase(), visual_sides) {
            (false, 0) => &mut self.group1,
            (false, 1) => &mut self.group2,
            (false, _) => &mut self.group3,
            (true, 0) => &mut self.upper_group1,
            (true, 1) => &mut self.upper_group2,
            (true, _) => &mut self.upper_group3,
        }
    }
}

impl TracySettings {
    /// Load settings from a JSON file; `None` if absent or unreadable
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        load_json(path.as_ref())
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(self, path.as_ref())
    }
}

impl SousaSettings {
    /// Load settings from a JSON file; `None` if absent or unreadable
    pub fn load(path: impl AsRef<Path>) -> Option<Self> {
        load_json(path.as_ref())
    }

    /// Save settings as pretty-printed JSON
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        save_json(self, path.as_ref())
    }
}

fn load_json<T: serde::de::DeserializeOwned>(path: &Path) -> Option<T> {
    if !path.exists() {
        return None;
    }
    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(settings) => {
                debug!("loaded spacing settings from {:?}", path);
                Some(settings)
            }
            Err(e) => {
                warn!("failed to parse {:?}: {}", path, e);
                None
            }
        },
        Err(e) => {
            warn!("failed to read {:?}: {}", path, e);
            None
        }
    }
}

fn save_json<T: Serialize>(settings: &T, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let contents = serde_json::to_string_pretty(settings)?;
    fs::write(path, contents)?;
    debug!("saved spacing settings to {:?}", path);
    Ok(())
}

/// Resolve one side against the override layer: a present override side
/// replaces the rule-derived value, an absent one keeps it.
pub(crate) fn resolve_override(
    overrides: &OverrideMap,
    ch: char,
    rule_left: Option<f64>,
    rule_right: Option<f64>,
) -> (Option<f64>, Option<f64>) {
    match overrides.get(&ch) {
        Some(ov) => (ov.left.or(rule_left), ov.right.or(rule_right)),
        None => (rule_left, rule_right),
    }
}
