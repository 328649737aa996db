//! Automatic spacing engines
//!
//! Two competing methodologies for deriving per-glyph side bearings from a
//! small set of tuned master metrics: Tracy's closed-form per-letter table
//! and Sousa's topology-and-group derivation. Both mutate the font in place
//! through the geometry primitive and are fully deterministic; the adhesion
//! text generator is the only place randomness lives.

pub mod adhesion;
pub mod estimator;
pub mod settings;
pub mod sousa;
pub mod topology;
pub mod tracy;

// Explicit re-exports for public API
pub use adhesion::{generate_adhesion_text, generate_adhesion_text_with_rng};
pub use estimator::estimate_default_spacing;
pub use settings::{MasterPair, MasterSet, OverrideMap, SideBearingPair, SousaGroups, SousaSettings, TracySettings};
pub use sousa::apply_sousa_method;
pub use topology::{topology_of, Topology, TopologyClass};
pub use tracy::apply_tracy_method;
